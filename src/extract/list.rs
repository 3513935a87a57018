//! Nested list formatting.
//!
//! Renders a (possibly nested) bullet or numbered list into indented text
//! lines. The structure is transient — it is built by the body walker for
//! one formatting pass and dropped.

/// One entry in a list: its direct text fragments plus any nested lists.
#[derive(Debug, Clone, Default)]
pub struct ListItem {
    /// Trimmed, non-empty paragraph and heading texts directly under the item
    pub texts: Vec<String>,
    /// Lists nested directly under the item
    pub sublists: Vec<ListNode>,
}

/// A bullet or numbered list with arbitrarily nested sub-lists.
#[derive(Debug, Clone)]
pub struct ListNode {
    /// The `text:style-name` attribute, used to infer ordered-ness
    pub style_name: Option<String>,
    pub items: Vec<ListItem>,
}

impl ListNode {
    pub fn new(style_name: Option<String>) -> Self {
        Self {
            style_name,
            items: Vec::new(),
        }
    }

    /// Whether the list numbers its items.
    ///
    /// Derived from the style name: ODF numbering styles carry `Num` or
    /// `Number` in their names. Each nested list decides this for itself;
    /// ordered-ness is never inherited from the parent.
    pub fn is_ordered(&self) -> bool {
        self.style_name
            .as_deref()
            .map(|name| name.to_lowercase().contains("num"))
            .unwrap_or(false)
    }
}

/// Render a list into indented, bulleted/numbered text lines.
///
/// The first fragment of each item carries the bullet (`•`) or number
/// (`N.`, counted per list) at `level` indents of two spaces. Further
/// direct fragments of the same item follow one indent level deeper with
/// no bullet. Nested sub-lists are formatted at `level + 1` and appended
/// as-is, so their lines also sit one level deeper than the parent
/// bullet. Items with no text anywhere in their subtree produce nothing
/// and do not advance the numbering.
pub fn format_list(list: &ListNode, level: usize, ordered: bool) -> Vec<String> {
    let indent = "  ".repeat(level);
    let mut lines = Vec::new();
    let mut number = 1;

    for item in &list.items {
        let mut nested_lines = Vec::new();
        for sublist in &item.sublists {
            nested_lines.extend(format_list(sublist, level + 1, sublist.is_ordered()));
        }

        if item.texts.is_empty() && nested_lines.is_empty() {
            continue;
        }

        if let Some((first, rest)) = item.texts.split_first() {
            let bullet = if ordered {
                let bullet = format!("{}.", number);
                number += 1;
                bullet
            } else {
                "•".to_string()
            };
            lines.push(format!("{}{} {}", indent, bullet, first));
            for text in rest {
                lines.push(format!("{}  {}", indent, text));
            }
        }

        lines.extend(nested_lines);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(texts: &[&str], sublists: Vec<ListNode>) -> ListItem {
        ListItem {
            texts: texts.iter().map(|t| t.to_string()).collect(),
            sublists,
        }
    }

    fn node(style: Option<&str>, items: Vec<ListItem>) -> ListNode {
        ListNode {
            style_name: style.map(str::to_string),
            items,
        }
    }

    #[test]
    fn test_nested_item_indents_one_level_deeper() {
        let nested = node(Some("L2"), vec![item(&["B"], vec![])]);
        let list = node(Some("L1"), vec![item(&["A"], vec![nested])]);
        assert_eq!(format_list(&list, 0, false), vec!["• A", "  • B"]);
    }

    #[test]
    fn test_ordered_numbering_skips_empty_items() {
        let list = node(
            Some("Numbering1"),
            vec![
                item(&["First"], vec![]),
                item(&[], vec![]),
                item(&["Second"], vec![]),
            ],
        );
        assert!(list.is_ordered());
        assert_eq!(
            format_list(&list, 0, list.is_ordered()),
            vec!["1. First", "2. Second"]
        );
    }

    #[test]
    fn test_continuation_fragments_indented_without_bullet() {
        let list = node(None, vec![item(&["head", "more", "rest"], vec![])]);
        assert_eq!(
            format_list(&list, 0, false),
            vec!["• head", "  more", "  rest"]
        );
    }

    #[test]
    fn test_nested_orderedness_rederived_per_list() {
        let nested = node(Some("ListNumber"), vec![item(&["one"], vec![]), item(&["two"], vec![])]);
        let list = node(Some("Bullets"), vec![item(&["outer"], vec![nested])]);
        assert_eq!(
            format_list(&list, 0, list.is_ordered()),
            vec!["• outer", "  1. one", "  2. two"]
        );
    }

    #[test]
    fn test_numbering_resets_per_sublist() {
        let first = node(Some("Num"), vec![item(&["a"], vec![])]);
        let second = node(Some("Num"), vec![item(&["b"], vec![])]);
        let list = node(None, vec![item(&["top"], vec![first, second])]);
        assert_eq!(
            format_list(&list, 0, false),
            vec!["• top", "  1. a", "  1. b"]
        );
    }

    #[test]
    fn test_item_with_only_nested_content_emits_no_bullet_line() {
        let nested = node(None, vec![item(&["inner"], vec![])]);
        let list = node(None, vec![item(&[], vec![nested])]);
        assert_eq!(format_list(&list, 0, false), vec!["  • inner"]);
    }

    #[test]
    fn test_empty_subtree_is_dropped_entirely() {
        let nested = node(None, vec![item(&[], vec![])]);
        let list = node(None, vec![item(&[], vec![nested])]);
        assert!(format_list(&list, 0, false).is_empty());
    }

    #[test]
    fn test_three_levels_of_nesting() {
        let deepest = node(None, vec![item(&["C"], vec![])]);
        let mid = node(None, vec![item(&["B"], vec![deepest])]);
        let list = node(None, vec![item(&["A"], vec![mid])]);
        assert_eq!(
            format_list(&list, 0, false),
            vec!["• A", "  • B", "    • C"]
        );
    }
}
