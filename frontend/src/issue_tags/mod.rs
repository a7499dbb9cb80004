//! Search-bar facets for issue queries.
//!
//! [`aggregate`] merges the custom tag collection, organization members and
//! member teams into one [`TagMapping`]. [`IssueTags`] keeps that mapping
//! current while the three source stores change.

mod binding;
pub mod builtin;
mod mapping;

pub use binding::IssueTags;
pub use mapping::{TagMapping, aggregate};
