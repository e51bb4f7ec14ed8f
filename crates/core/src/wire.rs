//! YAML and JSON boundary for refined issues.
//!
//! Input documents are read into private wire structs in which every required field is
//! optional, then translated into domain types. The translation is where missing required
//! fields are reported, naming both the record and the field, so the error reads the same
//! whichever way the issue was constructed.
//!
//! An explicit null (`~`, an empty YAML value, JSON `null`) is read as "not given" for every
//! field: required fields report `MissingField`, defaulted fields take their default.
//!
//! Output uses the domain structs directly; the field names match, so anything written here
//! can be loaded back.

use crate::components::{AcceptanceCriterion, EdgeCase, NonFunctionalRequirement, Risk};
use crate::config::InputFormat;
use crate::constants::DEFAULT_COMPLEXITY;
use crate::error::{IssueError, IssueResult};
use crate::issue::{OrderedMap, RefinedIssue};
use serde::Deserialize;
use std::path::Path;

fn default_complexity() -> String {
    DEFAULT_COMPLEXITY.to_string()
}

fn required<T>(value: Option<T>, record: &'static str, field: &'static str) -> IssueResult<T> {
    value.ok_or_else(|| IssueError::missing(record, field))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AcceptanceCriterionWire {
    name: Option<String>,
    given: Option<String>,
    when: Option<String>,
    then: Option<String>,
    #[serde(default)]
    additional: Option<Vec<String>>,
}

impl AcceptanceCriterionWire {
    fn into_domain(self) -> IssueResult<AcceptanceCriterion> {
        const RECORD: &str = "AcceptanceCriterion";
        Ok(AcceptanceCriterion {
            name: required(self.name, RECORD, "name")?,
            given: required(self.given, RECORD, "given")?,
            when: required(self.when, RECORD, "when")?,
            then: required(self.then, RECORD, "then")?,
            additional: self.additional.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeCaseWire {
    name: Option<String>,
    description: Option<String>,
    handling: Option<String>,
}

impl EdgeCaseWire {
    fn into_domain(self) -> IssueResult<EdgeCase> {
        const RECORD: &str = "EdgeCase";
        Ok(EdgeCase {
            name: required(self.name, RECORD, "name")?,
            description: required(self.description, RECORD, "description")?,
            handling: required(self.handling, RECORD, "handling")?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RiskWire {
    category: Option<String>,
    description: Option<String>,
    impact: Option<String>,
    probability: Option<String>,
    mitigation: Option<String>,
}

impl RiskWire {
    fn into_domain(self) -> IssueResult<Risk> {
        const RECORD: &str = "Risk";
        Ok(Risk {
            category: required(self.category, RECORD, "category")?,
            description: required(self.description, RECORD, "description")?,
            impact: required(self.impact, RECORD, "impact")?,
            probability: required(self.probability, RECORD, "probability")?,
            mitigation: required(self.mitigation, RECORD, "mitigation")?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NonFunctionalRequirementWire {
    category: Option<String>,
    requirements: Option<Vec<String>>,
}

impl NonFunctionalRequirementWire {
    fn into_domain(self) -> IssueResult<NonFunctionalRequirement> {
        const RECORD: &str = "NonFunctionalRequirement";
        Ok(NonFunctionalRequirement {
            category: required(self.category, RECORD, "category")?,
            requirements: required(self.requirements, RECORD, "requirements")?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RefinedIssueWire {
    title: Option<String>,
    original_description: Option<String>,
    context_background: Option<String>,
    user_impact: Option<OrderedMap>,
    acceptance_criteria: Option<Vec<AcceptanceCriterionWire>>,
    implementation_approach: Option<Vec<String>>,
    dependencies: Option<Vec<String>>,
    files_to_modify: Option<OrderedMap>,
    #[serde(default)]
    api_changes: Option<String>,
    #[serde(default)]
    edge_cases: Option<Vec<EdgeCaseWire>>,
    #[serde(default)]
    risks: Option<Vec<RiskWire>>,
    #[serde(default)]
    nfrs: Option<Vec<NonFunctionalRequirementWire>>,
    #[serde(default)]
    story_points: Option<i64>,
    #[serde(default)]
    estimated_hours: Option<String>,
    #[serde(default)]
    time_breakdown: Option<OrderedMap>,
    #[serde(default)]
    complexity: Option<String>,
    #[serde(default)]
    complexity_reasons: Option<Vec<String>>,
    #[serde(default)]
    related_issues: Option<Vec<String>>,
    #[serde(default)]
    testing_strategy: Option<Vec<String>>,
    #[serde(default)]
    documentation_updates: Option<Vec<String>>,
}

impl RefinedIssueWire {
    fn into_domain(self) -> IssueResult<RefinedIssue> {
        const RECORD: &str = "RefinedIssue";
        Ok(RefinedIssue {
            title: required(self.title, RECORD, "title")?,
            original_description: required(
                self.original_description,
                RECORD,
                "original_description",
            )?,
            context_background: required(self.context_background, RECORD, "context_background")?,
            user_impact: required(self.user_impact, RECORD, "user_impact")?,
            acceptance_criteria: required(
                self.acceptance_criteria,
                RECORD,
                "acceptance_criteria",
            )?
            .into_iter()
            .map(AcceptanceCriterionWire::into_domain)
            .collect::<IssueResult<_>>()?,
            implementation_approach: required(
                self.implementation_approach,
                RECORD,
                "implementation_approach",
            )?,
            dependencies: required(self.dependencies, RECORD, "dependencies")?,
            files_to_modify: required(self.files_to_modify, RECORD, "files_to_modify")?,
            api_changes: self.api_changes,
            edge_cases: self
                .edge_cases
                .unwrap_or_default()
                .into_iter()
                .map(EdgeCaseWire::into_domain)
                .collect::<IssueResult<_>>()?,
            risks: self
                .risks
                .unwrap_or_default()
                .into_iter()
                .map(RiskWire::into_domain)
                .collect::<IssueResult<_>>()?,
            nfrs: self
                .nfrs
                .unwrap_or_default()
                .into_iter()
                .map(NonFunctionalRequirementWire::into_domain)
                .collect::<IssueResult<_>>()?,
            story_points: self.story_points.unwrap_or_default(),
            estimated_hours: self.estimated_hours.unwrap_or_default(),
            time_breakdown: self.time_breakdown.unwrap_or_default(),
            complexity: self.complexity.unwrap_or_else(default_complexity),
            complexity_reasons: self.complexity_reasons.unwrap_or_default(),
            related_issues: self.related_issues.unwrap_or_default(),
            testing_strategy: self.testing_strategy.unwrap_or_default(),
            documentation_updates: self.documentation_updates.unwrap_or_default(),
        })
    }
}

fn strip_bom(input: &str) -> &str {
    input.strip_prefix('\u{feff}').unwrap_or(input)
}

impl RefinedIssue {
    /// Reads a refined issue from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `IssueError::YamlDeserialization` for malformed YAML or unknown fields, and
    /// `IssueError::MissingField` when a required field is absent or null.
    pub fn from_yaml_str(input: &str) -> IssueResult<Self> {
        let wire: RefinedIssueWire =
            serde_yaml::from_str(strip_bom(input)).map_err(IssueError::YamlDeserialization)?;
        wire.into_domain()
    }

    /// Reads a refined issue from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `IssueError::Deserialization` for malformed JSON or unknown fields, and
    /// `IssueError::MissingField` when a required field is absent or null.
    pub fn from_json_str(input: &str) -> IssueResult<Self> {
        let wire: RefinedIssueWire =
            serde_json::from_str(strip_bom(input)).map_err(IssueError::Deserialization)?;
        wire.into_domain()
    }

    pub fn to_yaml_string(&self) -> IssueResult<String> {
        serde_yaml::to_string(self).map_err(IssueError::YamlSerialization)
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json_string(&self) -> IssueResult<String> {
        let mut out = serde_json::to_string_pretty(self).map_err(IssueError::Serialization)?;
        out.push('\n');
        Ok(out)
    }
}

/// Reads and parses a refined issue file in the given format.
pub fn load_refined_issue(path: &Path, format: InputFormat) -> IssueResult<RefinedIssue> {
    tracing::debug!(path = %path.display(), ?format, "loading refined issue");
    let contents = std::fs::read_to_string(path).map_err(IssueError::FileRead)?;
    match format {
        InputFormat::Yaml => RefinedIssue::from_yaml_str(&contents),
        InputFormat::Json => RefinedIssue::from_json_str(&contents),
    }
}
