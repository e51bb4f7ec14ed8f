//! Non-functional requirements grouped by category.

use crate::markdown::{bullet, heading};
use serde::Serialize;

/// Heading level used for each requirement category.
const CATEGORY_HEADING_LEVEL: usize = 4;

/// Requirements for a single category such as Performance or Security.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NonFunctionalRequirement {
    pub category: String,
    pub requirements: Vec<String>,
}

impl NonFunctionalRequirement {
    pub fn new<I, S>(category: impl Into<String>, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            requirements: requirements.into_iter().map(Into::into).collect(),
        }
    }

    /// Renders a category heading with one bullet per requirement.
    ///
    /// The heading is rendered even when there are no requirements.
    pub fn render(&self) -> String {
        std::iter::once(heading(CATEGORY_HEADING_LEVEL, &self.category))
            .chain(self.requirements.iter().map(|req| bullet(req)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_requirements() {
        let nfr = NonFunctionalRequirement::new(
            "Performance",
            ["< 1ms overhead", "No external calls"],
        );
        assert_eq!(
            nfr.render(),
            "#### Performance\n- < 1ms overhead\n- No external calls"
        );
    }

    #[test]
    fn test_render_heading_only_when_empty() {
        let nfr = NonFunctionalRequirement::new("Security", Vec::<String>::new());
        assert_eq!(nfr.render(), "#### Security");
    }
}
