// Constants for the flat-array tree encoding

/// Child index meaning "no child"
pub const NULL_INDEX: i32 = -1;

/// Number of consecutive slots per node record: value, left index, right index
pub const NODE_SLOTS: usize = 3;

/// Default bound on traversal depth for the checked height routines
/// Deep enough for any tree that fits in a few hundred KB of slots
pub const DEFAULT_MAX_DEPTH: usize = 1 << 16;
