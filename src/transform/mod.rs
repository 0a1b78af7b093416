//! SVG rewrites. Both transforms are pure functions of the input text.

mod inline;
mod restyle;

pub use inline::inline;
pub use restyle::{palette_from_svg, restyle};
