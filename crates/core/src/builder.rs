//! Checked construction of a [`RefinedIssue`].
//!
//! Required fields have no default and must be supplied explicitly; `build` reports the first
//! one left unset. Supplying an empty collection counts as supplying the field. Optional fields
//! start from fresh, empty values so no two issues ever share state.

use crate::components::{AcceptanceCriterion, EdgeCase, NonFunctionalRequirement, Risk};
use crate::constants::DEFAULT_COMPLEXITY;
use crate::error::{IssueError, IssueResult};
use crate::issue::{OrderedMap, RefinedIssue};

const RECORD: &str = "RefinedIssue";

#[derive(Clone, Debug)]
pub struct RefinedIssueBuilder {
    title: Option<String>,
    original_description: Option<String>,
    context_background: Option<String>,
    user_impact: Option<OrderedMap>,
    acceptance_criteria: Option<Vec<AcceptanceCriterion>>,
    implementation_approach: Option<Vec<String>>,
    dependencies: Option<Vec<String>>,
    files_to_modify: Option<OrderedMap>,
    api_changes: Option<String>,
    edge_cases: Vec<EdgeCase>,
    risks: Vec<Risk>,
    nfrs: Vec<NonFunctionalRequirement>,
    story_points: i64,
    estimated_hours: String,
    time_breakdown: OrderedMap,
    complexity: String,
    complexity_reasons: Vec<String>,
    related_issues: Vec<String>,
    testing_strategy: Vec<String>,
    documentation_updates: Vec<String>,
}

impl RefinedIssue {
    /// Starts building a refined issue.
    pub fn builder() -> RefinedIssueBuilder {
        RefinedIssueBuilder::new()
    }
}

fn strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

fn pairs<I, K, V>(items: I) -> OrderedMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    items
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

impl RefinedIssueBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            original_description: None,
            context_background: None,
            user_impact: None,
            acceptance_criteria: None,
            implementation_approach: None,
            dependencies: None,
            files_to_modify: None,
            api_changes: None,
            edge_cases: Vec::new(),
            risks: Vec::new(),
            nfrs: Vec::new(),
            story_points: 0,
            estimated_hours: String::new(),
            time_breakdown: OrderedMap::new(),
            complexity: DEFAULT_COMPLEXITY.to_string(),
            complexity_reasons: Vec::new(),
            related_issues: Vec::new(),
            testing_strategy: Vec::new(),
            documentation_updates: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn original_description(mut self, description: impl Into<String>) -> Self {
        self.original_description = Some(description.into());
        self
    }

    pub fn context_background(mut self, context: impl Into<String>) -> Self {
        self.context_background = Some(context.into());
        self
    }

    /// Replaces the persona impact mapping, keeping the iteration order.
    pub fn user_impact<I, K, V>(mut self, impacts: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.user_impact = Some(pairs(impacts));
        self
    }

    /// Adds one persona impact. Re-adding a persona replaces its text in place.
    pub fn impact(mut self, persona: impl Into<String>, impact: impl Into<String>) -> Self {
        self.user_impact
            .get_or_insert_with(OrderedMap::new)
            .insert(persona.into(), impact.into());
        self
    }

    pub fn acceptance_criteria(
        mut self,
        criteria: impl IntoIterator<Item = AcceptanceCriterion>,
    ) -> Self {
        self.acceptance_criteria = Some(criteria.into_iter().collect());
        self
    }

    pub fn criterion(mut self, criterion: AcceptanceCriterion) -> Self {
        self.acceptance_criteria
            .get_or_insert_with(Vec::new)
            .push(criterion);
        self
    }

    pub fn implementation_approach<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implementation_approach = Some(strings(steps));
        self
    }

    /// Appends one implementation step.
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.implementation_approach
            .get_or_insert_with(Vec::new)
            .push(step.into());
        self
    }

    pub fn dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = Some(strings(dependencies));
        self
    }

    pub fn files_to_modify<I, K, V>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.files_to_modify = Some(pairs(files));
        self
    }

    /// Adds one file and its change description.
    pub fn file(mut self, path: impl Into<String>, change: impl Into<String>) -> Self {
        self.files_to_modify
            .get_or_insert_with(OrderedMap::new)
            .insert(path.into(), change.into());
        self
    }

    pub fn api_changes(mut self, api_changes: impl Into<String>) -> Self {
        self.api_changes = Some(api_changes.into());
        self
    }

    pub fn edge_cases(mut self, edge_cases: impl IntoIterator<Item = EdgeCase>) -> Self {
        self.edge_cases = edge_cases.into_iter().collect();
        self
    }

    pub fn edge_case(mut self, edge_case: EdgeCase) -> Self {
        self.edge_cases.push(edge_case);
        self
    }

    pub fn risks(mut self, risks: impl IntoIterator<Item = Risk>) -> Self {
        self.risks = risks.into_iter().collect();
        self
    }

    pub fn risk(mut self, risk: Risk) -> Self {
        self.risks.push(risk);
        self
    }

    pub fn nfrs(mut self, nfrs: impl IntoIterator<Item = NonFunctionalRequirement>) -> Self {
        self.nfrs = nfrs.into_iter().collect();
        self
    }

    pub fn nfr(mut self, nfr: NonFunctionalRequirement) -> Self {
        self.nfrs.push(nfr);
        self
    }

    pub fn story_points(mut self, story_points: i64) -> Self {
        self.story_points = story_points;
        self
    }

    pub fn estimated_hours(mut self, estimate: impl Into<String>) -> Self {
        self.estimated_hours = estimate.into();
        self
    }

    pub fn time_breakdown<I, K, V>(mut self, breakdown: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.time_breakdown = pairs(breakdown);
        self
    }

    /// Adds one phase to the time breakdown.
    pub fn phase(mut self, phase: impl Into<String>, duration: impl Into<String>) -> Self {
        self.time_breakdown.insert(phase.into(), duration.into());
        self
    }

    pub fn complexity(mut self, complexity: impl Into<String>) -> Self {
        self.complexity = complexity.into();
        self
    }

    pub fn complexity_reasons<I, S>(mut self, reasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.complexity_reasons = strings(reasons);
        self
    }

    pub fn related_issues<I, S>(mut self, issues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_issues = strings(issues);
        self
    }

    pub fn testing_strategy<I, S>(mut self, strategies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.testing_strategy = strings(strategies);
        self
    }

    pub fn documentation_updates<I, S>(mut self, updates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.documentation_updates = strings(updates);
        self
    }

    /// Finishes construction.
    ///
    /// # Errors
    ///
    /// Returns `IssueError::MissingField` naming the first required field that was never set,
    /// checked in declaration order.
    pub fn build(self) -> IssueResult<RefinedIssue> {
        Ok(RefinedIssue {
            title: self.title.ok_or_else(|| IssueError::missing(RECORD, "title"))?,
            original_description: self
                .original_description
                .ok_or_else(|| IssueError::missing(RECORD, "original_description"))?,
            context_background: self
                .context_background
                .ok_or_else(|| IssueError::missing(RECORD, "context_background"))?,
            user_impact: self
                .user_impact
                .ok_or_else(|| IssueError::missing(RECORD, "user_impact"))?,
            acceptance_criteria: self
                .acceptance_criteria
                .ok_or_else(|| IssueError::missing(RECORD, "acceptance_criteria"))?,
            implementation_approach: self
                .implementation_approach
                .ok_or_else(|| IssueError::missing(RECORD, "implementation_approach"))?,
            dependencies: self
                .dependencies
                .ok_or_else(|| IssueError::missing(RECORD, "dependencies"))?,
            files_to_modify: self
                .files_to_modify
                .ok_or_else(|| IssueError::missing(RECORD, "files_to_modify"))?,
            api_changes: self.api_changes,
            edge_cases: self.edge_cases,
            risks: self.risks,
            nfrs: self.nfrs,
            story_points: self.story_points,
            estimated_hours: self.estimated_hours,
            time_breakdown: self.time_breakdown,
            complexity: self.complexity,
            complexity_reasons: self.complexity_reasons,
            related_issues: self.related_issues,
            testing_strategy: self.testing_strategy,
            documentation_updates: self.documentation_updates,
        })
    }
}

impl Default for RefinedIssueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_only() -> RefinedIssueBuilder {
        RefinedIssue::builder()
            .title("Title")
            .original_description("Original")
            .context_background("Context")
            .user_impact(Vec::<(String, String)>::new())
            .acceptance_criteria(Vec::new())
            .implementation_approach(Vec::<String>::new())
            .dependencies(Vec::<String>::new())
            .files_to_modify(Vec::<(String, String)>::new())
    }

    fn assert_missing(result: IssueResult<RefinedIssue>, expected: &str) {
        match result {
            Err(IssueError::MissingField { record, field }) => {
                assert_eq!(record, "RefinedIssue");
                assert_eq!(field, expected);
            }
            other => panic!("expected missing {expected}, got {other:?}"),
        }
    }

    #[test]
    fn test_build_with_required_fields_applies_defaults() {
        let issue = required_only().build().unwrap();
        assert_eq!(issue.title, "Title");
        assert_eq!(issue.api_changes, None);
        assert!(issue.edge_cases.is_empty());
        assert!(issue.risks.is_empty());
        assert!(issue.nfrs.is_empty());
        assert_eq!(issue.story_points, 0);
        assert_eq!(issue.estimated_hours, "");
        assert!(issue.time_breakdown.is_empty());
        assert_eq!(issue.complexity, "Medium");
        assert!(issue.complexity_reasons.is_empty());
        assert!(issue.related_issues.is_empty());
        assert!(issue.testing_strategy.is_empty());
        assert!(issue.documentation_updates.is_empty());
    }

    #[test]
    fn test_build_reports_missing_title() {
        assert_missing(RefinedIssue::builder().build(), "title");
    }

    #[test]
    fn test_build_reports_first_missing_field_in_order() {
        let result = RefinedIssue::builder()
            .title("Title")
            .original_description("Original")
            .context_background("Context")
            .build();
        assert_missing(result, "user_impact");
    }

    #[test]
    fn test_build_reports_missing_files_to_modify() {
        let result = RefinedIssue::builder()
            .title("Title")
            .original_description("Original")
            .context_background("Context")
            .impact("Students", "Confused")
            .criterion(AcceptanceCriterion::new("AC1", "g", "w", "t"))
            .step("Do it")
            .dependencies(["none"])
            .build();
        assert_missing(result, "files_to_modify");
    }

    #[test]
    fn test_missing_field_message_names_field() {
        let err = RefinedIssue::builder().title("Title").build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required field `RefinedIssue.original_description`"
        );
    }

    #[test]
    fn test_incremental_setters_preserve_order() {
        let issue = required_only()
            .impact("Students", "first")
            .impact("Coordinators", "second")
            .impact("Students", "replaced")
            .file("b.rs", "B")
            .file("a.rs", "A")
            .phase("Testing", "1h")
            .phase("Build", "2h")
            .step("one")
            .step("two")
            .build()
            .unwrap();

        let personas: Vec<_> = issue.user_impact.iter().collect();
        assert_eq!(
            personas,
            vec![
                (&"Students".to_string(), &"replaced".to_string()),
                (&"Coordinators".to_string(), &"second".to_string()),
            ]
        );
        let files: Vec<_> = issue.files_to_modify.keys().cloned().collect();
        assert_eq!(files, vec!["b.rs", "a.rs"]);
        let phases: Vec<_> = issue.time_breakdown.keys().cloned().collect();
        assert_eq!(phases, vec!["Testing", "Build"]);
        assert_eq!(issue.implementation_approach, vec!["one", "two"]);
    }

    #[test]
    fn test_each_build_gets_fresh_collections() {
        let mut first = required_only().build().unwrap();
        let second = required_only().build().unwrap();
        first.risks.push(Risk::new("c", "d", "i", "p", "m"));
        first.related_issues.push("#1".into());
        assert!(second.risks.is_empty());
        assert!(second.related_issues.is_empty());
    }

    #[test]
    fn test_negative_story_points_accepted() {
        let issue = required_only().story_points(-5).build().unwrap();
        assert_eq!(issue.story_points, -5);
    }
}
