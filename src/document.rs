//! Input data model.

use serde::Deserialize;

/// One question/solution pair from the solutions file.
///
/// Unknown fields on the JSON object are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// Question text, rendered verbatim under its `## Question` heading.
    pub prompt_response: String,

    /// Solution text, rendered verbatim under `### Solution`.
    pub solution: String,
}

impl Record {
    /// Creates a record from its two text fields.
    pub fn new(prompt_response: impl Into<String>, solution: impl Into<String>) -> Self {
        Self {
            prompt_response: prompt_response.into(),
            solution: solution.into(),
        }
    }
}

/// Ordered sequence of records. Order determines output numbering.
pub type InputDocument = Vec<Record>;
