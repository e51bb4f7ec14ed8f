//! Boundary scenarios and how they are handled.

use crate::markdown::{bold, indented_bullet};
use serde::Serialize;

/// Indent of the handling bullet beneath the edge case headline.
const HANDLING_INDENT: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeCase {
    pub name: String,
    pub description: String,
    /// How the implementation resolves the scenario.
    pub handling: String,
}

impl EdgeCase {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handling: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handling: handling.into(),
        }
    }

    /// Renders `**name**: description` with the handling as an indented bullet beneath it.
    pub fn render(&self) -> String {
        format!(
            "{}: {}\n{}",
            bold(&self.name),
            self.description,
            indented_bullet(HANDLING_INDENT, &self.handling)
        )
    }
}
