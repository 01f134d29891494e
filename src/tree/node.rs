//! Node records and the borrowed tree view
//!
//! A tree is a caller-owned `[i32]` where each node occupies three slots
//! starting at its index:
//!
//! ```text
//! index:   i        i+1          i+2
//!          value    left index   right index
//! ```
//!
//! Child indices point back into the same array; [`NULL_INDEX`] marks an
//! absent child. Node indices are slot offsets, not record numbers, so a
//! record may start at any slot.

use super::constants::{NODE_SLOTS, NULL_INDEX};
use super::errors::TreeError;
use rustc_hash::FxHashSet;

/// One decoded node record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRecord {
    pub value: i32,
    pub left: i32,
    pub right: i32,
}

impl NodeRecord {
    /// Both children absent
    pub fn is_leaf(&self) -> bool {
        self.left == NULL_INDEX && self.right == NULL_INDEX
    }
}

/// Read-only view over a flat tree array
#[derive(Debug, Clone, Copy)]
pub struct FlatTree<'a> {
    slots: &'a [i32],
}

impl<'a> FlatTree<'a> {
    pub fn new(slots: &'a [i32]) -> Self {
        FlatTree { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Decode the record starting at `index`, checking that all three slots exist
    pub fn node(&self, index: i32) -> Result<NodeRecord, TreeError> {
        if index == NULL_INDEX {
            return Err(TreeError::NullNode);
        }
        let out_of_bounds = TreeError::IndexOutOfBounds {
            index,
            len: self.slots.len(),
        };
        let start = usize::try_from(index).map_err(|_| out_of_bounds.clone())?;
        match self.slots.get(start..start + NODE_SLOTS) {
            Some(&[value, left, right]) => Ok(NodeRecord { value, left, right }),
            _ => Err(out_of_bounds),
        }
    }

    /// Count records reachable from `root`, visiting shared subtrees once
    pub fn node_count(&self, root: i32) -> Result<usize, TreeError> {
        let mut seen = FxHashSet::default();
        let mut todo = vec![root];
        while let Some(index) = todo.pop() {
            if index == NULL_INDEX || !seen.insert(index) {
                continue;
            }
            let node = self.node(index)?;
            todo.push(node.left);
            todo.push(node.right);
        }
        Ok(seen.len())
    }
}
