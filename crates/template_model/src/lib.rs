//! Template Model - Document template entities and the prototype contract
//!
//! This crate provides the entity graph for catalog templates (contracts,
//! proposals): a root `Template` aggregate owning sections, a visual style,
//! and an approval workflow. New templates are derived by cloning an
//! existing, fully-configured instance through the [`Prototype`] capability
//! rather than by rebuilding the graph from scratch.

mod error;
mod prototype;
mod section;
mod style;
mod template;
mod workflow;

pub use error::*;
pub use prototype::*;
pub use section::*;
pub use style::*;
pub use template::*;
pub use workflow::*;
