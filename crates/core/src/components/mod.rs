//! Leaf records of a refined issue.
//!
//! Each record owns a handful of string fields and knows how to render itself as a fragment
//! of the final document. None of them validate their content: empty strings render as
//! empty strings, and markdown inside a value passes straight through.

pub mod acceptance;
pub mod edge_case;
pub mod nfr;
pub mod risk;

pub use acceptance::AcceptanceCriterion;
pub use edge_case::EdgeCase;
pub use nfr::NonFunctionalRequirement;
pub use risk::Risk;
