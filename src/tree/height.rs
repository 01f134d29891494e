//! Tree height over the flat-array encoding
//!
//! Height here is **not** the textbook metric. A null child has height 0 and
//! a node's height is the larger of its children's heights, with nothing
//! added for the node itself. A lone node therefore has height 0, and so
//! does every tree under this rule. [`HeightConvention::CountNodes`] opts in
//! to the usual `1 + max(left, right)`.
//!
//! Three entry points:
//! - [`height`]: the plain recursive rule, no checking beyond slice bounds
//! - [`try_height`]: checked, no depth limit
//! - [`height_iterative`]: checked, explicit stack, configurable

use super::constants::{DEFAULT_MAX_DEPTH, NULL_INDEX};
use super::errors::TreeError;
use super::node::FlatTree;
use log::{debug, trace, warn};
use rustc_hash::FxHashSet;

/// How a node's height is derived from its children's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightConvention {
    /// `max(left, right)`; a single node has height 0
    #[default]
    MaxOfChildren,
    /// `1 + max(left, right)`; a single node has height 1
    CountNodes,
}

impl HeightConvention {
    fn combine(self, left: i32, right: i32) -> i32 {
        match self {
            HeightConvention::MaxOfChildren => left.max(right),
            HeightConvention::CountNodes => 1 + left.max(right),
        }
    }
}

/// Settings for the checked traversals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightOptions {
    pub convention: HeightConvention,
    pub max_depth: usize,
}

impl Default for HeightOptions {
    fn default() -> Self {
        HeightOptions {
            convention: HeightConvention::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HeightOptions {
    pub fn with_convention(mut self, convention: HeightConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Height of the subtree at `root`, recursively, with no validation
///
/// # Panics
///
/// Panics if a visited index is neither [`NULL_INDEX`] nor the start of a
/// complete record. A cyclic array recurses until the stack overflows.
pub fn height(array: &[i32], root: i32) -> i32 {
    if root == NULL_INDEX {
        return 0;
    }
    let node = match FlatTree::new(array).node(root) {
        Ok(node) => node,
        Err(e) => panic!("height: {}", e),
    };
    let left = height(array, node.left);
    let right = height(array, node.right);
    left.max(right)
}

/// Checked height with no depth limit
///
/// Agrees with [`height`] on every well-formed array, however deep, and
/// reports malformed ones instead of panicking.
pub fn try_height(array: &[i32], root: i32) -> Result<i32, TreeError> {
    height_iterative(
        array,
        root,
        &HeightOptions::default().with_max_depth(usize::MAX),
    )
}

enum Frame {
    Enter { index: i32, depth: usize },
    Exit { index: i32 },
}

/// Post-order height computation on an explicit stack
///
/// Fails on indices outside the array, on a node that is its own ancestor,
/// and on paths deeper than `options.max_depth` nodes. Subtrees shared by
/// several parents are fine and are simply visited once per parent.
pub fn height_iterative(
    array: &[i32],
    root: i32,
    options: &HeightOptions,
) -> Result<i32, TreeError> {
    debug!(
        "height: root {} over {} slots ({:?})",
        root,
        array.len(),
        options.convention
    );
    let result = walk(FlatTree::new(array), root, options);
    match &result {
        Ok(h) => debug!("height: root {} -> {}", root, h),
        Err(e) => warn!("height: rejected tree at root {}: {}", root, e),
    }
    result
}

fn walk(tree: FlatTree<'_>, root: i32, options: &HeightOptions) -> Result<i32, TreeError> {
    let mut frames = vec![Frame::Enter {
        index: root,
        depth: 1,
    }];
    let mut heights: Vec<i32> = Vec::new();
    let mut on_path = FxHashSet::default();

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Enter { index, .. } if index == NULL_INDEX => heights.push(0),
            Frame::Enter { index, depth } => {
                if depth > options.max_depth {
                    return Err(TreeError::DepthLimitExceeded {
                        limit: options.max_depth,
                    });
                }
                let node = tree.node(index)?;
                if node.is_leaf() {
                    heights.push(options.convention.combine(0, 0));
                    continue;
                }
                if !on_path.insert(index) {
                    return Err(TreeError::Cycle { index });
                }
                trace!("enter node {} (value {}, depth {})", index, node.value, depth);
                frames.push(Frame::Exit { index });
                frames.push(Frame::Enter {
                    index: node.right,
                    depth: depth + 1,
                });
                frames.push(Frame::Enter {
                    index: node.left,
                    depth: depth + 1,
                });
            }
            Frame::Exit { index } => {
                on_path.remove(&index);
                // Left was pushed first, so right sits on top
                let right = heights.pop().expect("right child height pushed before exit");
                let left = heights.pop().expect("left child height pushed before exit");
                heights.push(options.convention.combine(left, right));
            }
        }
    }

    debug_assert_eq!(heights.len(), 1, "one height per traversal");
    Ok(heights.pop().expect("root height pushed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // root(0) -> left(3) -> leaf(6); right of root is null
    const CHAIN: [i32; 9] = [10, 3, -1, 20, 6, -1, 30, -1, -1];

    #[test]
    fn test_empty_tree_is_zero() {
        assert_eq!(height(&[], -1), 0);
        assert_eq!(height(&CHAIN, -1), 0);
        assert_eq!(try_height(&[], -1), Ok(0));
    }

    #[test]
    fn test_single_node_is_zero() {
        let slots = [5, -1, -1];
        assert_eq!(height(&slots, 0), 0);
        assert_eq!(try_height(&slots, 0), Ok(0));
    }

    #[test]
    fn test_chain_takes_max_without_increment() {
        assert_eq!(height(&CHAIN, 0), 0);
        assert_eq!(height(&CHAIN, 3), 0);
        assert_eq!(try_height(&CHAIN, 0), Ok(0));
    }

    #[test]
    fn test_count_nodes_convention() {
        let options = HeightOptions::default().with_convention(HeightConvention::CountNodes);
        assert_eq!(height_iterative(&CHAIN, 0, &options), Ok(3));
        assert_eq!(height_iterative(&CHAIN, 6, &options), Ok(1));
        assert_eq!(height_iterative(&CHAIN, -1, &options), Ok(0));
    }

    #[test]
    fn test_cycle_is_reported() {
        // Node 3's left child points back at the root
        let slots = [1, 3, -1, 2, 0, -1];
        assert_eq!(try_height(&slots, 0), Err(TreeError::Cycle { index: 0 }));
    }

    #[test]
    fn test_out_of_bounds_child_is_reported() {
        let slots = [1, 7, -1];
        assert_eq!(
            try_height(&slots, 0),
            Err(TreeError::IndexOutOfBounds { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_depth_limit() {
        let options = HeightOptions::default().with_max_depth(2);
        assert_eq!(
            height_iterative(&CHAIN, 0, &options),
            Err(TreeError::DepthLimitExceeded { limit: 2 })
        );
        assert_eq!(height_iterative(&CHAIN, 3, &options), Ok(0));
    }

    #[test]
    fn test_try_height_has_no_depth_limit() {
        // Longer than DEFAULT_MAX_DEPTH; still well-formed
        let n = DEFAULT_MAX_DEPTH + 10;
        let mut slots = Vec::with_capacity(n * 3);
        for k in 0..n {
            let right = if k + 1 < n { (3 * (k + 1)) as i32 } else { -1 };
            slots.extend_from_slice(&[k as i32, -1, right]);
        }
        assert_eq!(try_height(&slots, 0), Ok(0));
        assert_eq!(
            height_iterative(&slots, 0, &HeightOptions::default()),
            Err(TreeError::DepthLimitExceeded {
                limit: DEFAULT_MAX_DEPTH
            })
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_unchecked_height_panics_on_bad_index() {
        height(&[1, 4, -1], 0);
    }
}
