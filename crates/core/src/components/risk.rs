//! Delivery risks with impact, probability and mitigation.

use crate::markdown::{bold, indented_bullet};
use serde::Serialize;

/// Indent used for the risk attribute lines.
const ATTRIBUTE_INDENT: usize = 2;

/// A potential risk.
///
/// `impact` and `probability` are conventionally one of High, Medium or Low but any text is
/// accepted and rendered as given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Risk {
    pub category: String,
    pub description: String,
    pub impact: String,
    pub probability: String,
    pub mitigation: String,
}

impl Risk {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        impact: impl Into<String>,
        probability: impl Into<String>,
        mitigation: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            impact: impact.into(),
            probability: probability.into(),
            mitigation: mitigation.into(),
        }
    }

    /// Renders the risk headline followed by `Impact`, `Probability` and `Mitigation` lines.
    pub fn render(&self) -> String {
        [
            format!("{}: {}", bold(&self.category), self.description),
            indented_bullet(ATTRIBUTE_INDENT, &format!("Impact: {}", self.impact)),
            indented_bullet(
                ATTRIBUTE_INDENT,
                &format!("Probability: {}", self.probability),
            ),
            indented_bullet(ATTRIBUTE_INDENT, &format!("Mitigation: {}", self.mitigation)),
        ]
        .join("\n")
    }
}
