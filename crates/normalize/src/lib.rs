//! Wirefix tree normalizer.
//!
//! Turns a recovered JSON value of any plausible shape into a canonical
//! [`schema::Document`] that renderers can consume without further checks.
//!
//! ## Guarantees
//!
//! - Every component has a non-empty `id` and `type`, a string `text`, and
//!   finite geometry. Styling fields are always populated.
//! - Ids already present in the input are kept verbatim; missing ones are
//!   generated and unique within the pass.
//! - Exactly one of `components` / `pages` is set on the output.
//! - Nesting deeper than [`NormalizeConfig::max_depth`] is cut off with a
//!   `normalize_depth_truncated` warning.
//! - `normalize(normalize(x)) == normalize(x)` after a JSON round trip.
//!
//! Normalization never fails. Garbage entries are skipped and missing values
//! are replaced by profile defaults, counted in the `normalize_success` event.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//!
//! let doc = normalize::normalize(&json!({
//!     "title": "Checkout",
//!     "components": [{"type": "button", "backgroundColor": "#ABCDEF"}]
//! }));
//! let button = &doc.components.as_ref().unwrap()[0];
//! assert_eq!(button.fill, "#ABCDEF");
//! assert_eq!((button.width, button.height), (120.0, 40.0));
//! assert_eq!((button.x, button.y), (50.0, 50.0));
//! ```
mod component;
mod config;
mod document;
mod flatten;
mod ids;
mod layout;

pub use crate::config::{ConfigError, GridLayout, NormalizeConfig};
pub use crate::document::{normalize, normalize_components, normalize_with};
pub use crate::flatten::{flatten, flatten_with};
pub use crate::layout::{grid_position, slugify};
