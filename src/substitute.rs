//! Placeholder substitution over a loaded Word document.
//!
//! Replaces exact-match tokens in paragraph runs and table cells while
//! leaving every other aspect of the document untouched. Substitution is
//! best-effort text replacement: a token that is absent is simply left out
//! of the output, and a token split across run boundaries is never matched
//! (see [`replace_placeholders`]).

use docx_rs::{
    Docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCell,
    TableCellContent, TableChild, TableRowChild, Text,
};

use crate::fields::PlaceholderMap;

/// Undo the XML escaping `docx-rs` applies to stored run text.
///
/// `Text` holds its content pre-escaped for `document.xml`, so matching and
/// replacement happen on the unescaped form and new text is reinserted
/// through `Text::new`, which escapes exactly once.
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Replace every placeholder occurrence in the document.
///
/// Two traversal paths with different fidelity:
///
/// - Paragraphs: a token is replaced inside each run whose own text
///   contains it, preserving the run's formatting. A token split across
///   run boundaries by prior authoring edits is a silent miss and remains
///   literally in the output; this is accepted behavior, not an error.
/// - Table cells: the cell's paragraph text is flattened, and if any token
///   matches, the cell content is rebuilt as a single plain run. Per-run
///   formatting inside a matched cell is lost; cells without a match are
///   left untouched. The asymmetry mirrors the whole-cell replacement the
///   template workflow was built around.
///
/// Multiple occurrences of a token are all replaced. Values are inserted
/// as plain text with no re-styling.
pub fn replace_placeholders(docx: &mut Docx, placeholders: &PlaceholderMap) {
    for child in &mut docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => substitute_paragraph(para, placeholders),
            DocumentChild::Table(table) => substitute_table(table, placeholders),
            _ => {}
        }
    }
}

/// Replace tokens inside a paragraph, run by run.
pub fn substitute_paragraph(para: &mut Paragraph, placeholders: &PlaceholderMap) {
    for (token, value) in placeholders {
        // Cheap screen on the concatenated text before touching runs.
        if !paragraph_text(para).contains(token.as_str()) {
            continue;
        }
        for child in &mut para.children {
            if let ParagraphChild::Run(run) = child {
                for rc in &mut run.children {
                    if let RunChild::Text(text) = rc {
                        let plain = unescape(&text.text);
                        if plain.contains(token.as_str()) {
                            log::debug!("replacing {} in run", token);
                            *text = Text::new(plain.replace(token.as_str(), value));
                        }
                    }
                }
            }
        }
    }
}

/// Replace tokens inside a table, cell by cell. Nested tables are recursed
/// into before the enclosing cell is considered.
pub fn substitute_table(table: &mut Table, placeholders: &PlaceholderMap) {
    for row in &mut table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &mut row.cells {
            let TableRowChild::TableCell(cell) = cell;
            substitute_cell(cell, placeholders);
        }
    }
}

fn substitute_cell(cell: &mut TableCell, placeholders: &PlaceholderMap) {
    for content in &mut cell.children {
        if let TableCellContent::Table(nested) = content {
            substitute_table(nested, placeholders);
        }
    }

    let mut text = cell_text(cell);
    let mut matched = false;
    for (token, value) in placeholders {
        if text.contains(token.as_str()) {
            text = text.replace(token.as_str(), value);
            matched = true;
        }
    }
    if !matched {
        return;
    }

    log::debug!("rebuilding table cell after substitution");
    cell.children
        .retain(|c| !matches!(c, TableCellContent::Paragraph(_)));
    cell.children.insert(
        0,
        TableCellContent::Paragraph(Box::new(
            Paragraph::new().add_run(Run::new().add_text(text)),
        )),
    );
}

/// Concatenated text of a paragraph's runs.
pub fn paragraph_text(para: &Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|c| match c {
            ParagraphChild::Run(run) => Some(run_text(run)),
            _ => None,
        })
        .collect()
}

fn run_text(run: &Run) -> String {
    run.children
        .iter()
        .filter_map(|c| match c {
            RunChild::Text(t) => Some(unescape(&t.text)),
            _ => None,
        })
        .collect()
}

/// Flattened text of a table cell's paragraphs, newline-joined.
pub fn cell_text(cell: &TableCell) -> String {
    cell.children
        .iter()
        .filter_map(|c| match c {
            TableCellContent::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain text of the whole document body, for inspection and tests.
///
/// Paragraphs are newline-joined; table cells are tab-joined within a row.
pub fn document_text(docx: &Docx) -> String {
    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => lines.push(paragraph_text(para)),
            DocumentChild::Table(table) => lines.push(table_text(table)),
            _ => {}
        }
    }
    lines.join("\n")
}

fn table_text(table: &Table) -> String {
    table
        .rows
        .iter()
        .map(|row| {
            let TableChild::TableRow(row) = row;
            row.cells
                .iter()
                .map(|cell| {
                    let TableRowChild::TableCell(cell) = cell;
                    cell_text(cell)
                })
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
