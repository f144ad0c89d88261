//! Prototype capability - new instances produced by deep copy
//!
//! Assembling a catalog template is expensive (legal review, styling,
//! workflow setup), so near-identical variants start from a copy of an
//! existing instance instead of a fresh build. The contract here is strict:
//! the copy shares no mutable state with its source.

use crate::Result;

/// Contract for entities that can produce independent copies of themselves.
///
/// An implementation must guarantee, for `c = t.deep_clone()?`:
/// - every scalar field of `c` is value-equal to the corresponding field of `t`;
/// - every nested owned entity or container of `c` is freshly allocated;
/// - mutating `c` through any public field never observably affects `t`,
///   and vice versa.
///
/// A member-wise shallow copy does not satisfy this contract: it would leave
/// the copy and the source aliasing the same nested containers. Implementors
/// write the copy routine explicitly, field by field.
pub trait Prototype: Sized {
    /// Produce a fully independent copy of `self`.
    fn deep_clone(&self) -> Result<Self>;
}
