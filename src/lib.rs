//! # Introduction
//!
//! treeprint is two small routines and a driver around them:
//!
//! 1. [`tree`]: the height of a binary tree stored as a flat `i32` array of
//!    `[value, left, right]` records, with `-1` as the null child.
//! 2. [`printer`]: the decimal text of an `i32`, written one byte at a time
//!    to an injected [`printer::CharSink`].
//!
//! The two share nothing. Both are synchronous and allocate at most a
//! traversal stack.
//!
//! ## Height convention
//!
//! [`tree::height`] returns `max(height(left), height(right))` with a null
//! child counting 0, and adds nothing for the node itself. See
//! [`tree::HeightConvention`] for the textbook alternative.

pub mod printer;
pub mod tree;
