//! Declarative split tree: node types and normalization.

pub mod node;
pub mod normalize;

pub use node::{Direction, SplitNode, SplitParams};
pub use normalize::{normalize, NormalizedParams};
