//! A fully populated refined issue used by the CLI and tests.

use crate::components::{AcceptanceCriterion, EdgeCase, NonFunctionalRequirement, Risk};
use crate::issue::RefinedIssue;

/// Refinement of "users can register for activities that are already full".
pub fn capacity_validation_example() -> RefinedIssue {
    RefinedIssue {
        title: "Add capacity validation for activity registration".into(),
        original_description:
            "Users should not be able to register for activities that are already full.".into(),

        context_background: "The Mergington High School Activities API currently allows unlimited participants \
            to sign up for activities, even when the max_participants limit has been reached. \
            This can lead to overcrowded activities that exceed safety limits and available resources."
            .into(),
        user_impact: [
            (
                "Students",
                "May register for activities that are actually full, leading to confusion",
            ),
            (
                "Activity Coordinators",
                "Cannot rely on the system to enforce capacity limits",
            ),
            (
                "School Administrators",
                "Risk safety and resource management issues from overcrowding",
            ),
        ]
        .into_iter()
        .map(|(persona, impact)| (persona.to_string(), impact.to_string()))
        .collect(),

        acceptance_criteria: vec![
            AcceptanceCriterion::new(
                "AC1: Reject signup when activity is at capacity",
                "an activity has reached max_participants limit",
                "a student attempts to sign up",
                "the API returns HTTP 400 status code",
            )
            .and("an error message indicates the activity is full"),
            AcceptanceCriterion::new(
                "AC2: Allow signup when activity has available capacity",
                "an activity has not reached max_participants limit",
                "a student attempts to sign up",
                "the registration succeeds (HTTP 200)",
            )
            .and("the student is added to the participants list"),
        ],

        implementation_approach: vec![
            "Add validation logic in the signup_for_activity() function".into(),
            "Check len(activity['participants']) against activity['max_participants']".into(),
            "Implement before existing duplicate participant check".into(),
        ],
        dependencies: vec![
            "No new dependencies required".into(),
            "Uses existing FastAPI HTTPException for error handling".into(),
        ],
        files_to_modify: [
            ("src/app.py", "Add capacity validation logic"),
            ("tests/test_api.py", "Add test cases for capacity validation"),
        ]
        .into_iter()
        .map(|(file, change)| (file.to_string(), change.to_string()))
        .collect(),
        api_changes: None,

        edge_cases: vec![
            EdgeCase::new(
                "Race condition",
                "Multiple simultaneous signups when 1 spot remains",
                "Current in-memory storage is not thread-safe. Document as known limitation.",
            ),
            EdgeCase::new(
                "Activities with 0 max_participants",
                "Edge case where activity allows 0 participants",
                "Should reject all signups",
            ),
        ],
        risks: vec![Risk::new(
            "Breaking change",
            "Existing integrations expecting unlimited signups will fail",
            "Medium",
            "Low",
            "This is a bug fix, correct behavior is to enforce limits",
        )],

        nfrs: vec![
            NonFunctionalRequirement::new(
                "Performance",
                [
                    "Validation should add < 1ms overhead to signup endpoint",
                    "No additional database/external calls required",
                ],
            ),
            NonFunctionalRequirement::new(
                "Security",
                ["Prevents resource exhaustion by limiting participants"],
            ),
        ],

        story_points: 2,
        estimated_hours: "2-4 hours".into(),
        time_breakdown: [
            ("Implementation", "30 minutes"),
            ("Testing", "1-2 hours"),
            ("Documentation", "30 minutes"),
            ("Code Review", "1 hour"),
        ]
        .into_iter()
        .map(|(phase, duration)| (phase.to_string(), duration.to_string()))
        .collect(),
        complexity: "Low".into(),
        complexity_reasons: vec![
            "Single function modification".into(),
            "Clear requirements".into(),
            "Existing test infrastructure".into(),
        ],

        related_issues: Vec::new(),
        testing_strategy: vec![
            "Unit tests for validation logic".into(),
            "Integration tests for complete signup flow".into(),
            "Test both boundary conditions (exactly at capacity, one over)".into(),
        ],
        documentation_updates: vec![
            "Update API documentation".into(),
            "Update README.md API endpoints table".into(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_shape() {
        let issue = capacity_validation_example();
        assert_eq!(issue.acceptance_criteria.len(), 2);
        assert_eq!(issue.edge_cases.len(), 2);
        assert_eq!(issue.risks.len(), 1);
        assert_eq!(issue.nfrs.len(), 2);
        assert_eq!(issue.story_points, 2);
        assert_eq!(
            issue.user_impact.keys().collect::<Vec<_>>(),
            vec!["Students", "Activity Coordinators", "School Administrators"]
        );
    }

    #[test]
    fn test_context_background_is_one_paragraph() {
        let issue = capacity_validation_example();
        assert!(issue
            .context_background
            .contains("unlimited participants to sign up"));
        assert!(issue
            .context_background
            .contains("reached. This can lead"));
        assert!(!issue.context_background.contains('\n'));
    }
}
