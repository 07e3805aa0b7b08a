//! Markdown rendering.
//!
//! Pure transformation from a slice of [`Record`]s to Markdown text.
//! Record fields are inserted verbatim; nothing is escaped.

use std::fmt::Write as _;

use crate::document::Record;

/// Title line that opens every rendered document.
pub const TITLE: &str = "# Questions and Solutions";

/// Renders the whole document.
///
/// Output is the title and a blank line, followed by one section per record
/// in input order, numbered from 1:
///
/// ```text
/// ## Question <n>
/// <prompt_response>
///
/// ### Solution
/// <solution>
///
/// ---
///
/// ```
#[must_use]
pub fn render_markdown(records: &[Record]) -> String {
    let mut out = String::with_capacity(estimated_len(records));
    out.push_str(TITLE);
    out.push_str("\n\n");

    for (index, record) in records.iter().enumerate() {
        render_section(&mut out, index + 1, record);
    }

    out
}

/// Appends the section for one record, numbered `number`.
fn render_section(out: &mut String, number: usize, record: &Record) {
    let _ = writeln!(
        out,
        "## Question {number}\n{}\n\n### Solution\n{}\n\n---\n",
        record.prompt_response, record.solution
    );
}

/// Rough output size, to avoid regrowing the buffer for large inputs.
fn estimated_len(records: &[Record]) -> usize {
    const SECTION_OVERHEAD: usize = 48;
    TITLE.len()
        + 2
        + records
            .iter()
            .map(|r| r.prompt_response.len() + r.solution.len() + SECTION_OVERHEAD)
            .sum::<usize>()
}
