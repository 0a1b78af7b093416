//! gotchi-svg - Rewrite SVG markup embedded in JSON asset files
//!
//! Two text-level transforms over SVG documents, plus a batch driver for
//! JSON files that carry SVG strings.
//!
//! # Example
//!
//! ```rust
//! use gotchi_svg::{inline, restyle, Palette};
//!
//! let svg = r#"<style>.x{fill:#123;}</style><path class="x" d="M0 0"/>"#;
//! assert_eq!(inline(svg), r##"<path d="M0 0" fill="#112233"/>"##);
//!
//! let body = "<style>.gotchi-primary{fill:#aaaaaa}</style>";
//! assert_eq!(
//!     restyle(body, &Palette::default()),
//!     "<style>.gotchi-primary{fill:#b6509e}</style>"
//! );
//! ```
//!
//! # Transforms
//!
//! - [`inline`]: turn `<style>` class fills into inline `fill` attributes on
//!   `<path>` and `<g>` elements, for editors that ignore CSS.
//! - [`restyle`]: recolor the `.gotchi-*` palette rules and the inline fills
//!   of `gotchi-secondary` elements.

pub mod batch;
pub mod error;
pub mod logger;
pub mod markup;
pub mod transform;
pub mod types;

pub use error::{Error, Result};
pub use transform::{inline, palette_from_svg, restyle};
pub use types::*;
