//! Section titles and defaults used by the refined issue document.
//!
//! Downstream tooling keys off these exact strings (including the icons), so they are kept
//! in one place.

/// Complexity assigned when the caller does not provide one.
pub const DEFAULT_COMPLEXITY: &str = "Medium";

pub const ORIGINAL_ISSUE: &str = "Original Issue";

pub const DETAILED_DESCRIPTION: &str = "📋 Detailed Description";
pub const CONTEXT_AND_BACKGROUND: &str = "Context and Background";
pub const USER_IMPACT: &str = "User Impact";

pub const ACCEPTANCE_CRITERIA: &str = "✅ Acceptance Criteria";

pub const TECHNICAL_CONSIDERATIONS: &str = "🔧 Technical Considerations";
pub const IMPLEMENTATION_APPROACH: &str = "Implementation Approach";
pub const DEPENDENCIES: &str = "Dependencies";
pub const FILES_TO_MODIFY: &str = "Files to Modify";
pub const API_CONTRACT_CHANGES: &str = "API Contract Changes";

pub const EDGE_CASES_AND_RISKS: &str = "⚠️ Edge Cases and Risks";
pub const EDGE_CASES_TO_HANDLE: &str = "Edge Cases to Handle";
pub const POTENTIAL_RISKS: &str = "Potential Risks";

pub const NON_FUNCTIONAL_REQUIREMENTS: &str = "📊 Non-Functional Requirements (NFRs)";

pub const EFFORT_ESTIMATION: &str = "📈 Effort Estimation";
pub const STORY_POINTS: &str = "Story Points";
pub const ESTIMATED_TIME: &str = "Estimated Time";
pub const BREAKDOWN: &str = "Breakdown";
pub const COMPLEXITY: &str = "Complexity";

pub const ADDITIONAL_NOTES: &str = "📝 Additional Notes";
pub const RELATED_ISSUES: &str = "Related Issues";
pub const TESTING_STRATEGY: &str = "Testing Strategy";
pub const DOCUMENTATION_UPDATES: &str = "Documentation Updates Required";
