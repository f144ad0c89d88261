//! Template Catalog - operations around the template model
//!
//! The model crate defines the entity graph and the cloning contract; this
//! crate holds the collaborators that use it: the factory that assembles the
//! canonical base template, derivation of edited variants from a clone, and
//! a plain-text renderer for inspection.

mod factory;
mod render;
mod variant;

pub use factory::*;
pub use render::*;
pub use variant::*;
