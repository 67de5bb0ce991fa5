//! Depth-first reachability.
//!
//! Both traversals report every vertex reachable from the root exactly once, in the order it
//! was first marked visited. They differ in how a vertex's neighbor list is consumed:
//!
//! - [`dfs_iterative`] pushes all neighbors onto a work stack and pops the last one pushed, so
//!   siblings are explored right to left.
//! - [`dfs_recursive`] descends into the first unvisited neighbor immediately, so siblings are
//!   explored left to right.
//!
//! A neighbor id that is not a vertex of the graph (possible in directed graphs) is still
//! reported as reachable; it simply has no outgoing edges.

use crate::error::{Error, Result};
use crate::graph::{EdgeEntry, Graph};
use rustc_hash::FxBuildHasher;
use tracing::debug;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DfsOrder {
    /// Work-stack order, see [`dfs_iterative`].
    #[default]
    Stack,
    /// First-neighbor-first descent, see [`dfs_recursive`].
    Descent,
}

pub fn dfs<N, E>(g: &Graph<N, E>, root: &str, order: DfsOrder) -> Result<Vec<String>> {
    match order {
        DfsOrder::Stack => dfs_iterative(g, root),
        DfsOrder::Descent => dfs_recursive(g, root),
    }
}

/// Stack-based DFS.
///
/// Neighbors are pushed left to right without checking whether they were already visited;
/// duplicates are dropped when popped. The work stack may therefore hold O(E) entries.
pub fn dfs_iterative<N, E>(g: &Graph<N, E>, root: &str) -> Result<Vec<String>> {
    let root = g.resolve(root).ok_or_else(|| Error::vertex_not_found(root))?;

    let mut stack: Vec<&str> = vec![root];
    let mut visited: HashSet<&str> = HashSet::default();
    let mut out: Vec<String> = Vec::new();

    while let Some(v) = stack.pop() {
        if !visited.insert(v) {
            continue;
        }
        out.push(v.to_string());
        match g.edge_list(v) {
            Some(edges) => stack.extend(edges.iter().map(|e| e.target.as_str())),
            None => debug!(id = v, "dangling neighbor reference"),
        }
    }

    debug!(root, visited = out.len(), "dfs (stack order)");
    Ok(out)
}

struct Frame<'a, E> {
    edges: &'a [EdgeEntry<E>],
    next: usize,
}

/// Descent-order DFS: a vertex is marked on entry, then each neighbor is explored in listed
/// order as soon as it is found unvisited.
///
/// The descent is driven by an explicit frame stack (vertex edge list + cursor) instead of the
/// call stack, so long paths cannot overflow it.
pub fn dfs_recursive<N, E>(g: &Graph<N, E>, root: &str) -> Result<Vec<String>> {
    let root = g.resolve(root).ok_or_else(|| Error::vertex_not_found(root))?;

    let mut visited: HashSet<&str> = HashSet::default();
    let mut out: Vec<String> = Vec::new();
    let mut frames: Vec<Frame<'_, E>> = Vec::new();

    visited.insert(root);
    out.push(root.to_string());
    frames.push(frame(g, root));

    while let Some(top) = frames.last_mut() {
        let edges = top.edges;
        let Some(edge) = edges.get(top.next) else {
            frames.pop();
            continue;
        };
        top.next += 1;

        let w = edge.target.as_str();
        if visited.insert(w) {
            out.push(w.to_string());
            frames.push(frame(g, w));
        }
    }

    debug!(root, visited = out.len(), "dfs (descent order)");
    Ok(out)
}

fn frame<'a, N, E>(g: &'a Graph<N, E>, v: &str) -> Frame<'a, E> {
    let edges = match g.edge_list(v) {
        Some(edges) => edges,
        None => {
            debug!(id = v, "dangling neighbor reference");
            Default::default()
        }
    };
    Frame { edges, next: 0 }
}

/// Whether `to` is reachable from `from` (a vertex always reaches itself).
pub fn is_reachable<N, E>(g: &Graph<N, E>, from: &str, to: &str) -> Result<bool> {
    Ok(dfs_recursive(g, from)?.iter().any(|v| v == to))
}
