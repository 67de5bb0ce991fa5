#![forbid(unsafe_code)]

//! Adjacency-list graphs with depth-first reachability.
//!
//! A [`Graph`] maps string vertex ids to a vertex value plus an insertion-ordered list of
//! outgoing edge records. Directed graphs store one record per edge; undirected graphs store
//! a symmetric pair of independent records.
//!
//! Traversals live in [`alg`]:
//!
//! ```
//! use adjgraph::{Graph, alg};
//!
//! let mut g: Graph<(), ()> = Graph::directed();
//! g.add_edge("A", "B").add_edge("A", "D").add_edge("B", "C").add_edge("C", "D");
//!
//! assert_eq!(alg::dfs_iterative(&g, "A").unwrap(), ["A", "D", "B", "C"]);
//! assert_eq!(alg::dfs_recursive(&g, "A").unwrap(), ["A", "B", "C", "D"]);
//! ```

pub mod alg;
pub mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{Graph, GraphOptions};
