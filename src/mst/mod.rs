// src/mst/mod.rs
//! Minimum spanning trees grown from a circular list of partial trees.
//!
//! ```ignore
//! let graph = arbor_core::graph::parser::parse(text)?;
//! let list = arbor_core::mst::initialize(&graph);
//! let arcs = arbor_core::mst::execute(list)?;
//! ```

pub mod algorithm;
pub mod arc;
pub mod forest;
pub mod heap;
pub mod partial_tree;
pub mod tree_list;

pub use algorithm::{execute, initialize, initialize_with, MstReport};
pub use arc::Arc;
pub use forest::Forest;
pub use heap::MinHeap;
pub use partial_tree::PartialTree;
pub use tree_list::PartialTreeList;
