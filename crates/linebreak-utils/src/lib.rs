//! Small numeric and slice helpers shared by the `linebreak` engine.
//!
//! This mirrors the role `typst-utils` plays for `typst-layout`: a tiny
//! leaf crate with no opinions about text layout itself, just the
//! low-level scalar and slice plumbing the engine builds on.

mod scalar;
mod width;

pub use scalar::Scalar;
pub use width::{Advance, ParaWidth};
