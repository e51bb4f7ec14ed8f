//! # Refine Core
//!
//! Data model and markdown renderer for refined work items.
//!
//! A [`RefinedIssue`] collects everything a refinement session produces (acceptance criteria,
//! technical notes, edge cases, risks, non-functional requirements and estimates) and renders
//! it into one deterministic markdown document ready to paste into an issue tracker.
//!
//! - [`components`]: leaf records and their fragment renderers
//! - [`issue`]: the aggregate and the document layout
//! - [`builder`]: checked construction with missing-field errors
//! - [`wire`]: YAML/JSON input and output
//!
//! **No I/O beyond reading issue files**: fetching from or posting to a tracker belongs to the
//! caller.

pub mod builder;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod example;
pub mod issue;
pub mod markdown;
pub mod wire;

pub use builder::RefinedIssueBuilder;
pub use components::{AcceptanceCriterion, EdgeCase, NonFunctionalRequirement, Risk};
pub use config::{resolve_input_format, InputFormat};
pub use error::{IssueError, IssueResult};
pub use issue::{OrderedMap, RefinedIssue};
pub use wire::load_refined_issue;
