//! Table-to-text linearization.
//!
//! A table grid is reduced to a small number of text lines suitable for
//! natural-language indexing: header rows are inferred from the cell type
//! distribution, every data cell is qualified with the labels of the
//! nearest header block above it, and rows are flattened to
//! `header: value` pairs joined with `;`.
//!
//! Linearization is a pure function of the grid — nothing is cached and
//! the input is never mutated.

use crate::extract::cell_type::{CellType, classify};
use crate::extract::lexicon::Lexicon;
use smallvec::SmallVec;

/// Cell text at `(row, col)`, reading missing cells as empty.
///
/// Grids are treated as rectangular even when row lengths differ.
fn cell(grid: &[Vec<String>], row: usize, col: usize) -> &str {
    grid.get(row)
        .and_then(|r| r.get(col))
        .map(String::as_str)
        .unwrap_or("")
}

/// Majority element with ties broken by first appearance.
fn majority(types: impl IntoIterator<Item = CellType>) -> Option<CellType> {
    let mut counts: Vec<(CellType, usize)> = Vec::new();
    for ty in types {
        match counts.iter_mut().find(|(t, _)| *t == ty) {
            Some((_, n)) => *n += 1,
            None => counts.push((ty, 1)),
        }
    }

    let mut best: Option<(CellType, usize)> = None;
    for (ty, n) in counts {
        if best.map(|(_, m)| n > m).unwrap_or(true) {
            best = Some((ty, n));
        }
    }
    best.map(|(ty, _)| ty)
}

/// Identify the header rows of a grid.
///
/// Row 0 is always header-like: the first row is taken as a caption or
/// header candidate even though it is excluded from the content vote.
/// When the dominant content type over rows `1..n` is numeric, any later
/// row whose own majority type is not numeric is flagged as an additional
/// header — this catches label rows interspersed among numeric data, as
/// in financial tables with repeated sub-headers. For non-numeric tables
/// no rows beyond row 0 are flagged.
pub fn detect_header_rows<L: Lexicon>(grid: &[Vec<String>], lexicon: &L) -> Vec<usize> {
    if grid.is_empty() {
        return Vec::new();
    }

    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    let mut header_rows = vec![0];

    let dominant = majority(
        (1..grid.len()).flat_map(|i| (0..width).map(move |j| (i, j)))
            .map(|(i, j)| classify(cell(grid, i, j), lexicon)),
    );

    if dominant == Some(CellType::Numeric) {
        for r in 1..grid.len() {
            let row_type = majority((0..width).map(|j| classify(cell(grid, r, j), lexicon)));
            if row_type != dominant {
                header_rows.push(r);
            }
        }
    }

    header_rows
}

/// Nearest contiguous run of header rows above `row`, as negative offsets.
///
/// Offsets are ascending; scanning backward from the offset closest to
/// the data row, the run is cut at the first gap greater than 1. A header
/// block separated from the data row by another header block is therefore
/// ignored in favor of the closer one.
pub(crate) fn nearest_header_run(header_rows: &[usize], row: usize) -> SmallVec<[isize; 8]> {
    let offsets: SmallVec<[isize; 8]> = header_rows
        .iter()
        .map(|&r| r as isize - row as isize)
        .filter(|&o| o < 0)
        .collect();

    for t in (1..offsets.len()).rev() {
        if offsets[t] - offsets[t - 1] > 1 {
            return offsets[t..].iter().copied().collect();
        }
    }
    offsets
}

/// Linearize a grid into indexable text lines.
///
/// Each data row becomes one `header: value;header: value` line. Grids
/// wider than 3 columns return one entry per data row; narrower grids are
/// joined with newlines into a single block so short tables read as one
/// paragraph. Grids with fewer than 2 rows, or with no data rows left
/// after header detection, produce no output.
pub fn linearize<L: Lexicon>(grid: &[Vec<String>], lexicon: &L) -> Vec<String> {
    if grid.len() < 2 {
        return Vec::new();
    }

    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    let header_rows = detect_header_rows(grid, lexicon);

    let mut lines = Vec::new();
    for i in 1..grid.len() {
        if header_rows.contains(&i) {
            continue;
        }
        let run = nearest_header_run(&header_rows, i);

        let mut labels = Vec::with_capacity(width);
        for j in 0..width {
            let mut seen: Vec<&str> = Vec::new();
            for &offset in &run {
                let value = cell(grid, (i as isize + offset) as usize, j).trim();
                if !seen.contains(&value) {
                    seen.push(value);
                }
            }
            let mut label = seen.join(",");
            if !label.is_empty() {
                label.push_str(": ");
            }
            labels.push(label);
        }

        let mut cells = Vec::with_capacity(width);
        for j in 0..width {
            let value = cell(grid, i, j);
            if value.is_empty() {
                continue;
            }
            cells.push(format!("{}{}", labels[j], value));
        }
        lines.push(cells.join(";"));
    }

    if width > 3 {
        return lines;
    }
    if lines.is_empty() {
        return Vec::new();
    }
    vec![lines.join("\n")]
}
