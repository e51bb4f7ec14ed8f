//! Acceptance criteria in Given/When/Then form.

use crate::markdown::{bold, indented_bullet};
use serde::Serialize;

/// Indent of the clause bullets beneath the criterion name.
const CLAUSE_INDENT: usize = 3;

/// A single behavioural scenario.
///
/// `given`, `when` and `then` are expected to be non-empty for the criterion to read
/// sensibly, but nothing enforces it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AcceptanceCriterion {
    /// Short label, for example "AC1: Reject signup when activity is at capacity".
    pub name: String,
    pub given: String,
    pub when: String,
    pub then: String,
    /// Extra conjunctive clauses rendered as `AND` lines, in order.
    pub additional: Vec<String>,
}

impl AcceptanceCriterion {
    /// Creates a criterion with no additional clauses.
    pub fn new(
        name: impl Into<String>,
        given: impl Into<String>,
        when: impl Into<String>,
        then: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            given: given.into(),
            when: when.into(),
            then: then.into(),
            additional: Vec::new(),
        }
    }

    /// Appends an `AND` clause.
    pub fn and(mut self, clause: impl Into<String>) -> Self {
        self.additional.push(clause.into());
        self
    }

    /// Renders the criterion as a bold name followed by indented clause bullets.
    ///
    /// ```markdown
    /// **AC1: name**
    ///    - GIVEN ...
    ///    - WHEN ...
    ///    - THEN ...
    ///    - AND ...
    /// ```
    ///
    /// No trailing newline is added.
    pub fn render(&self) -> String {
        let mut lines = vec![
            bold(&self.name),
            indented_bullet(CLAUSE_INDENT, &format!("GIVEN {}", self.given)),
            indented_bullet(CLAUSE_INDENT, &format!("WHEN {}", self.when)),
            indented_bullet(CLAUSE_INDENT, &format!("THEN {}", self.then)),
        ];
        lines.extend(
            self.additional
                .iter()
                .map(|clause| indented_bullet(CLAUSE_INDENT, &format!("AND {}", clause))),
        );
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_core_clauses() {
        let criterion = AcceptanceCriterion::new(
            "AC1: Reject when full",
            "an activity is full",
            "a student signs up",
            "the API returns 400",
        );
        assert_eq!(
            criterion.render(),
            "**AC1: Reject when full**\n   - GIVEN an activity is full\n   - WHEN a student signs up\n   - THEN the API returns 400"
        );
    }

    #[test]
    fn test_render_additional_clauses_in_order() {
        let criterion = AcceptanceCriterion::new("AC", "g", "w", "t")
            .and("first extra")
            .and("second extra");
        let rendered = criterion.render();
        assert!(rendered.ends_with("   - AND first extra\n   - AND second extra"));
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_render_empty_fields_verbatim() {
        let criterion = AcceptanceCriterion::new("", "", "", "");
        assert_eq!(
            criterion.render(),
            "****\n   - GIVEN \n   - WHEN \n   - THEN "
        );
    }
}
