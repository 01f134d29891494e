//! Binary trees stored as flat `i32` arrays
//!
//! - [`node`]: the three-slot record layout and the [`FlatTree`] view
//! - [`height`]: the height metric, recursive and explicit-stack forms
//! - [`parse`]: reading a slot array from text
//! - [`errors`]: [`TreeError`]
//!
//! # Encoding
//!
//! ```text
//! [ value, left, right,  value, left, right,  ... ]
//!   ^ node at 0           ^ node at 3
//! ```
//!
//! Children are slot indices into the same array, [`NULL_INDEX`] (`-1`)
//! when absent. The array belongs to the caller and is never modified.

pub mod constants;
pub mod errors;
pub mod height;
pub mod node;
pub mod parse;

pub use constants::{DEFAULT_MAX_DEPTH, NODE_SLOTS, NULL_INDEX};
pub use errors::TreeError;
pub use height::{height, height_iterative, try_height, HeightConvention, HeightOptions};
pub use node::{FlatTree, NodeRecord};
pub use parse::{parse_int, parse_slots};
