//! Document body walker.
//!
//! Reads through `content.xml` once and extracts the top-level body nodes
//! (paragraphs, headings, lists, tables) in the order they appear. Each
//! node is handed back as a tagged variant so callers dispatch with
//! pattern matching rather than tag-string comparisons.

use crate::common::Result;
use crate::extract::list::{ListItem, ListNode};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A top-level document element in its original position.
#[derive(Debug, Clone)]
pub enum BodyNode {
    /// A paragraph or heading with its accumulated text
    Paragraph(String),
    /// A bullet or numbered list, possibly nested
    List(ListNode),
    /// A table flattened into rows of trimmed cell text
    Table(Vec<Vec<String>>),
}

/// In-flight state for the table currently being read.
#[derive(Debug, Default)]
struct TableState {
    /// Nesting depth of `table:table` elements, 1 for the top-level table
    depth: usize,
    rows: Vec<Vec<String>>,
    in_row: bool,
    current_row: Vec<String>,
    in_cell: bool,
    /// Nesting depth of `table:table-cell` elements inside the open cell
    cell_depth: usize,
    cell_text: String,
}

/// In-flight state for the list currently being read.
#[derive(Debug, Default)]
struct ListState {
    /// Stack of open `text:list` elements, innermost last
    stack: Vec<ListNode>,
    /// Open paragraph inside a list item: accumulated text and depth of
    /// nested elements below the paragraph tag
    paragraph: Option<(String, usize)>,
}

/// What the walker is currently inside of.
#[derive(Debug)]
enum Mode {
    Idle,
    /// Top-level paragraph or heading: accumulated text and nesting depth
    Paragraph { text: String, depth: usize },
    Table(TableState),
    List(ListState),
}

/// Extracted whitespace for the ODF whitespace markers, if the tag is one.
///
/// `<text:s>` carries an optional `text:c` repeat count.
fn whitespace_for(name: &[u8], e: &BytesStart) -> Option<String> {
    match name {
        b"text:s" => {
            let count = get_attribute(e, b"text:c")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(1);
            Some(" ".repeat(count))
        },
        b"text:tab" => Some("\t".to_string()),
        b"text:line-break" => Some("\n".to_string()),
        _ => None,
    }
}

fn get_attribute(e: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            return Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    None
}

/// Parse the document body into top-level nodes in document order.
///
/// Only elements inside `office:text` are considered. A document without
/// a text body yields an empty vector, not an error.
///
/// # Example
///
/// ```
/// use rambutan::odt::body::{BodyNode, parse_body};
///
/// let xml = r#"<office:body><office:text>
///     <text:p>First paragraph</text:p>
///     <table:table><table:table-row>
///         <table:table-cell><text:p>Cell</text:p></table:table-cell>
///     </table:table-row></table:table>
/// </office:text></office:body>"#;
///
/// let nodes = parse_body(xml).unwrap();
/// assert_eq!(nodes.len(), 2);
/// assert!(matches!(nodes[0], BodyNode::Paragraph(_)));
/// assert!(matches!(nodes[1], BodyNode::Table(_)));
/// ```
pub fn parse_body(xml_content: &str) -> Result<Vec<BodyNode>> {
    let mut reader = Reader::from_str(xml_content);
    let mut buf = Vec::new();
    let mut nodes = Vec::new();
    let mut in_body = false;
    let mut mode = Mode::Idle;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = e.name().as_ref().to_vec();

                if name == b"office:text" {
                    in_body = true;
                } else if in_body {
                    mode = on_start(mode, &name, e, false);
                }
            },
            Ok(Event::Empty(ref e)) => {
                let name = e.name().as_ref().to_vec();
                if in_body {
                    mode = on_start(mode, &name, e, true);
                }
            },
            Ok(Event::Text(ref t)) => {
                if in_body {
                    let text = String::from_utf8_lossy(t).to_string();
                    append_text(&mut mode, &text);
                }
            },
            Ok(Event::End(ref e)) => {
                let name = e.name().as_ref().to_vec();

                if name == b"office:text" {
                    in_body = false;
                    mode = Mode::Idle;
                } else if in_body {
                    mode = on_end(mode, &name, &mut nodes);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {},
        }
        buf.clear();
    }

    Ok(nodes)
}

/// Handle an opening (or self-closing) tag in the current mode.
fn on_start(mode: Mode, name: &[u8], e: &BytesStart, self_closing: bool) -> Mode {
    match mode {
        Mode::Idle => match name {
            b"text:p" | b"text:h" if !self_closing => Mode::Paragraph {
                text: String::new(),
                depth: 0,
            },
            b"table:table" if !self_closing => Mode::Table(TableState {
                depth: 1,
                ..TableState::default()
            }),
            b"text:list" if !self_closing => {
                let mut state = ListState::default();
                state.stack.push(ListNode::new(get_attribute(e, b"text:style-name")));
                Mode::List(state)
            },
            _ => Mode::Idle,
        },
        Mode::Paragraph { mut text, mut depth } => {
            if let Some(ws) = whitespace_for(name, e) {
                text.push_str(&ws);
            }
            if !self_closing {
                depth += 1;
            }
            Mode::Paragraph { text, depth }
        },
        Mode::Table(state) => Mode::Table(table_on_start(state, name, e, self_closing)),
        Mode::List(state) => Mode::List(list_on_start(state, name, e, self_closing)),
    }
}

/// Handle a closing tag in the current mode. May complete a node.
fn on_end(mode: Mode, name: &[u8], nodes: &mut Vec<BodyNode>) -> Mode {
    match mode {
        Mode::Idle => Mode::Idle,
        Mode::Paragraph { text, depth } => {
            if depth == 0 {
                nodes.push(BodyNode::Paragraph(text));
                Mode::Idle
            } else {
                Mode::Paragraph {
                    text,
                    depth: depth - 1,
                }
            }
        },
        Mode::Table(state) => match table_on_end(state, name) {
            TableStep::Continue(state) => Mode::Table(state),
            TableStep::Done(rows) => {
                nodes.push(BodyNode::Table(rows));
                Mode::Idle
            },
        },
        Mode::List(state) => match list_on_end(state, name) {
            ListStep::Continue(state) => Mode::List(state),
            ListStep::Done(node) => {
                nodes.push(BodyNode::List(node));
                Mode::Idle
            },
        },
    }
}

/// Append character data to whatever text container is currently open.
fn append_text(mode: &mut Mode, text: &str) {
    match mode {
        Mode::Paragraph { text: buf, .. } => buf.push_str(text),
        Mode::Table(state) if state.in_cell => state.cell_text.push_str(text),
        Mode::List(state) => {
            if let Some((buf, _)) = state.paragraph.as_mut() {
                buf.push_str(text);
            }
        },
        _ => {},
    }
}

fn table_on_start(
    mut state: TableState,
    name: &[u8],
    e: &BytesStart,
    self_closing: bool,
) -> TableState {
    if state.in_cell {
        // Inside an open cell everything collapses into cell text; nested
        // structure is only tracked far enough to find the matching end tag.
        if let Some(ws) = whitespace_for(name, e) {
            state.cell_text.push_str(&ws);
        }
        if !self_closing {
            match name {
                b"table:table-cell" => state.cell_depth += 1,
                b"table:table" => state.depth += 1,
                _ => {},
            }
        }
        return state;
    }

    match name {
        b"table:table" if !self_closing => state.depth += 1,
        b"table:table-row" if !self_closing => {
            state.in_row = true;
            state.current_row = Vec::new();
        },
        b"table:table-cell" if state.in_row => {
            if self_closing {
                // An empty cell still occupies its column
                state.current_row.push(String::new());
            } else {
                state.in_cell = true;
                state.cell_depth = 0;
                state.cell_text.clear();
            }
        },
        _ => {},
    }
    state
}

enum TableStep {
    Continue(TableState),
    Done(Vec<Vec<String>>),
}

fn table_on_end(mut state: TableState, name: &[u8]) -> TableStep {
    if state.in_cell {
        match name {
            b"table:table-cell" => {
                if state.cell_depth > 0 {
                    state.cell_depth -= 1;
                } else {
                    state.in_cell = false;
                    let text = state.cell_text.trim().to_string();
                    state.current_row.push(text);
                }
            },
            b"table:table" => state.depth -= 1,
            _ => {},
        }
        return TableStep::Continue(state);
    }

    match name {
        b"table:table-row" => {
            state.in_row = false;
            let row = std::mem::take(&mut state.current_row);
            if !row.is_empty() {
                state.rows.push(row);
            }
        },
        b"table:table" => {
            state.depth -= 1;
            if state.depth == 0 {
                return TableStep::Done(state.rows);
            }
        },
        _ => {},
    }
    TableStep::Continue(state)
}

fn list_on_start(
    mut state: ListState,
    name: &[u8],
    e: &BytesStart,
    self_closing: bool,
) -> ListState {
    if let Some((buf, depth)) = state.paragraph.as_mut() {
        if let Some(ws) = whitespace_for(name, e) {
            buf.push_str(&ws);
        }
        if !self_closing {
            *depth += 1;
        }
        return state;
    }

    match name {
        b"text:list" if !self_closing => {
            state.stack.push(ListNode::new(get_attribute(e, b"text:style-name")));
        },
        b"text:list-item" if !self_closing => {
            if let Some(list) = state.stack.last_mut() {
                list.items.push(ListItem::default());
            }
        },
        b"text:p" | b"text:h" if !self_closing => {
            state.paragraph = Some((String::new(), 0));
        },
        _ => {},
    }
    state
}

enum ListStep {
    Continue(ListState),
    Done(ListNode),
}

fn list_on_end(mut state: ListState, name: &[u8]) -> ListStep {
    if let Some((buf, depth)) = state.paragraph.take() {
        if depth > 0 {
            state.paragraph = Some((buf, depth - 1));
        } else {
            // Depth 0 means this end tag closes the paragraph itself
            let text = buf.trim().to_string();
            if !text.is_empty()
                && let Some(list) = state.stack.last_mut()
                && let Some(item) = list.items.last_mut()
            {
                item.texts.push(text);
            }
        }
        return ListStep::Continue(state);
    }

    if name == b"text:list" {
        let finished = match state.stack.pop() {
            Some(node) => node,
            None => return ListStep::Continue(state),
        };
        match state.stack.last_mut() {
            Some(parent) => {
                // A nested list belongs to the item it appeared under; a
                // list child outside any item gets an implicit carrier item.
                match parent.items.last_mut() {
                    Some(item) => item.sublists.push(finished),
                    None => parent.items.push(ListItem {
                        texts: Vec::new(),
                        sublists: vec![finished],
                    }),
                }
                ListStep::Continue(state)
            },
            None => ListStep::Done(finished),
        }
    } else {
        ListStep::Continue(state)
    }
}
