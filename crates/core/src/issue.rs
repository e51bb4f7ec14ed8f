//! The refined issue aggregate and its document renderer.
//!
//! A [`RefinedIssue`] owns every leaf record and collection that makes up a refinement and
//! renders them into a single markdown document with a fixed section order. Rendering is a
//! pure, single pass over the fields: the same issue always produces byte-identical output.
//!
//! Sections backed by optional data are left out entirely when that data is empty, apart
//! from "Implementation Approach" and the estimation lines, which always appear.

use crate::components::{AcceptanceCriterion, EdgeCase, NonFunctionalRequirement, Risk};
use crate::constants::*;
use crate::markdown::{
    bold, bold_label, bullet, bullets, code_span, heading, numbered, HORIZONTAL_RULE,
};
use indexmap::IndexMap;
use serde::Serialize;

/// Insertion-ordered string mapping used for persona impacts, files and time breakdowns.
pub type OrderedMap = IndexMap<String, String>;

/// A fully refined work item.
///
/// Construct with [`RefinedIssue::builder`] to get missing-field checks, or load one from
/// YAML/JSON via [`RefinedIssue::from_yaml_str`] and friends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefinedIssue {
    pub title: String,
    pub original_description: String,

    pub context_background: String,
    /// Persona name to impact description.
    pub user_impact: OrderedMap,

    /// Rendered 1-indexed in this order.
    pub acceptance_criteria: Vec<AcceptanceCriterion>,

    pub implementation_approach: Vec<String>,
    pub dependencies: Vec<String>,
    /// File path to a description of the change.
    pub files_to_modify: OrderedMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_changes: Option<String>,

    pub edge_cases: Vec<EdgeCase>,
    pub risks: Vec<Risk>,

    pub nfrs: Vec<NonFunctionalRequirement>,

    /// Rendered verbatim, including zero and negative values.
    pub story_points: i64,
    pub estimated_hours: String,
    /// Phase name to duration.
    pub time_breakdown: OrderedMap,
    pub complexity: String,
    pub complexity_reasons: Vec<String>,

    pub related_issues: Vec<String>,
    pub testing_strategy: Vec<String>,
    pub documentation_updates: Vec<String>,
}

impl RefinedIssue {
    /// Renders the complete refinement document.
    ///
    /// Section order:
    /// 1. Title and original issue
    /// 2. Detailed description (user impact only when present)
    /// 3. Acceptance criteria
    /// 4. Technical considerations
    /// 5. Edge cases and risks
    /// 6. Non-functional requirements (omitted entirely when there are none)
    /// 7. Effort estimation
    /// 8. Additional notes
    ///
    /// Field values are emitted as-is; nothing is escaped.
    pub fn render(&self) -> String {
        tracing::debug!(
            title = %self.title,
            acceptance_criteria = self.acceptance_criteria.len(),
            edge_cases = self.edge_cases.len(),
            risks = self.risks.len(),
            nfrs = self.nfrs.len(),
            "rendering refined issue"
        );

        let mut doc = Sections::default();

        doc.paragraph(heading(1, &self.title));
        doc.paragraph(heading(2, ORIGINAL_ISSUE));
        doc.paragraph(&self.original_description);
        doc.paragraph(HORIZONTAL_RULE);

        self.render_description(&mut doc);
        self.render_acceptance_criteria(&mut doc);
        self.render_technical(&mut doc);
        self.render_edge_cases_and_risks(&mut doc);
        self.render_nfrs(&mut doc);
        self.render_estimation(&mut doc);
        self.render_additional_notes(&mut doc);

        doc.finish()
    }

    /// Returns the effective API contract changes, treating an empty string as absent.
    pub fn api_changes(&self) -> Option<&str> {
        self.api_changes.as_deref().filter(|text| !text.is_empty())
    }
}

// Section renderers, in document order.
impl RefinedIssue {
    fn render_description(&self, doc: &mut Sections) {
        doc.paragraph(heading(3, DETAILED_DESCRIPTION));
        doc.line(heading(4, CONTEXT_AND_BACKGROUND));
        doc.paragraph(&self.context_background);

        if !self.user_impact.is_empty() {
            doc.line(heading(4, USER_IMPACT));
            for (persona, impact) in &self.user_impact {
                doc.line(bullet(&format!("{}: {}", bold(persona), impact)));
            }
            doc.blank();
        }
    }

    fn render_acceptance_criteria(&self, doc: &mut Sections) {
        doc.paragraph(heading(3, ACCEPTANCE_CRITERIA));
        for (i, criterion) in self.acceptance_criteria.iter().enumerate() {
            doc.paragraph(numbered(i + 1, &criterion.render()));
        }
    }

    fn render_technical(&self, doc: &mut Sections) {
        doc.paragraph(heading(3, TECHNICAL_CONSIDERATIONS));
        doc.bullet_section(IMPLEMENTATION_APPROACH, &self.implementation_approach);

        if !self.dependencies.is_empty() {
            doc.bullet_section(DEPENDENCIES, &self.dependencies);
        }

        if !self.files_to_modify.is_empty() {
            doc.line(heading(4, FILES_TO_MODIFY));
            for (file, change) in &self.files_to_modify {
                doc.line(bullet(&format!("{} - {}", code_span(file), change)));
            }
            doc.blank();
        }

        if let Some(api_changes) = self.api_changes() {
            doc.line(heading(4, API_CONTRACT_CHANGES));
            doc.line(api_changes);
            doc.blank();
        }
    }

    fn render_edge_cases_and_risks(&self, doc: &mut Sections) {
        doc.paragraph(heading(3, EDGE_CASES_AND_RISKS));

        if !self.edge_cases.is_empty() {
            doc.line(heading(4, EDGE_CASES_TO_HANDLE));
            for (i, edge_case) in self.edge_cases.iter().enumerate() {
                doc.paragraph(numbered(i + 1, &edge_case.render()));
            }
        }

        if !self.risks.is_empty() {
            doc.line(heading(4, POTENTIAL_RISKS));
            for risk in &self.risks {
                doc.paragraph(bullet(&risk.render()));
            }
        }
    }

    fn render_nfrs(&self, doc: &mut Sections) {
        if self.nfrs.is_empty() {
            return;
        }

        doc.paragraph(heading(3, NON_FUNCTIONAL_REQUIREMENTS));
        for nfr in &self.nfrs {
            doc.line(nfr.render());
            doc.blank();
        }
    }

    fn render_estimation(&self, doc: &mut Sections) {
        doc.paragraph(heading(3, EFFORT_ESTIMATION));
        doc.paragraph(bold_label(STORY_POINTS, &self.story_points.to_string()));
        doc.paragraph(bold_label(ESTIMATED_TIME, &self.estimated_hours));

        if !self.time_breakdown.is_empty() {
            doc.line(bold(&format!("{}:", BREAKDOWN)));
            for (phase, duration) in &self.time_breakdown {
                doc.line(bullet(&bold_label(phase, duration)));
            }
            doc.blank();
        }

        doc.line(bold_label(COMPLEXITY, &self.complexity));
        doc.lines(bullets(&self.complexity_reasons));
        doc.blank();
    }

    fn render_additional_notes(&self, doc: &mut Sections) {
        doc.paragraph(heading(3, ADDITIONAL_NOTES));

        for (title, items) in [
            (RELATED_ISSUES, &self.related_issues),
            (TESTING_STRATEGY, &self.testing_strategy),
            (DOCUMENTATION_UPDATES, &self.documentation_updates),
        ] {
            if !items.is_empty() {
                doc.bullet_section(title, items);
            }
        }
    }
}

impl std::fmt::Display for RefinedIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Ordered document fragments, joined with newlines on completion.
///
/// A paragraph is a fragment followed by a blank line.
#[derive(Debug, Default)]
struct Sections(Vec<String>);

impl Sections {
    fn line(&mut self, text: impl Into<String>) {
        self.0.push(text.into());
    }

    fn lines(&mut self, lines: impl IntoIterator<Item = String>) {
        self.0.extend(lines);
    }

    fn paragraph(&mut self, text: impl AsRef<str>) {
        self.0.push(format!("{}\n", text.as_ref()));
    }

    fn blank(&mut self) {
        self.0.push(String::new());
    }

    /// Level-4 heading, one bullet per item, then a blank line.
    fn bullet_section(&mut self, title: &str, items: &[String]) {
        self.line(heading(4, title));
        self.lines(bullets(items));
        self.blank();
    }

    fn finish(self) -> String {
        self.0.join("\n")
    }
}
