//! orgtree - structural outline engine for org-style plain text
//!
//! This crate parses documents made of leveled headings (`* `, `** `, ...)
//! into a flat node arena and answers structural queries (folding ranges,
//! symbol trees, subtree spans). Structure-preserving operations -
//! promote/demote, content-respecting insertion, statistics cookies, clock
//! entries - are emitted as batched text edits plus a cursor position and
//! applied atomically.

pub mod clock;
pub mod config;
pub mod edit;
pub mod error;
pub mod heading;
pub mod model;
pub mod outline;
pub mod pipeline;
pub mod provider;
pub mod tracing;

// Re-export commonly used types
pub use config::OrgConfig;
pub use edit::{EditPlan, TextEdit};
pub use error::OrgError;
pub use model::{OrgDocument, Position};
pub use outline::{HeadingNode, LineRange, Outline};
