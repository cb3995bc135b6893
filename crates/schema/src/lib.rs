//! Wirefix schema layer.
//!
//! Shared vocabulary for every stage of the wireframe pipeline: the canonical
//! [`Document`] / [`Page`] / [`Component`] model that downstream renderers
//! consume, the per-type [`ComponentProfile`] registry that supplies defaults,
//! and the [`FieldKey`] synonym table used to read loosely-named model output.
//!
//! ## What lives here
//!
//! - **Document model** - serde types with "clean" serialization: fields that
//!   carry no value are omitted instead of emitted as `null`.
//! - **Type profiles** - one registry consulted by both the nested normalizer
//!   and the flattening path, so the two never disagree on a default.
//! - **Synonyms** - an ordered, data-driven list of accepted property names per
//!   canonical field. Adding a synonym is a table edit, not a code change.
//!
//! Nothing in this crate allocates ids, logs, or touches the clock; it is pure
//! data plus lookups.

mod document;
mod profile;
mod synonyms;

pub use crate::document::{Component, Document, Page};
pub use crate::profile::{
    is_supported_type, supported_types, ComponentProfile, FlatKind, DEFAULT_FONT_FAMILY,
    DEFAULT_TYPE,
};
pub use crate::synonyms::{as_finite_number, as_id, as_text, FieldKey, PAYLOAD_KEYS};

/// Nesting bound shared by the validator and the normalizer.
pub const DEFAULT_MAX_DEPTH: usize = 32;
