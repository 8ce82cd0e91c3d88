//! Text helpers shared by the freeform parser.

pub mod normalize;

pub use normalize::{normalize_lines, strip_list_prefix};
