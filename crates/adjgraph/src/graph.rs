//! Adjacency-list graph container.
//!
//! Vertices are kept in insertion order. Every vertex owns an insertion-ordered list of edge
//! records `(neighbor id, edge value)`; lookups by neighbor scan that list front to back, so
//! among parallel edges the earliest one always wins.

mod builder;
mod entries;
mod options;

pub(crate) use entries::EdgeEntry;
use entries::VertexEntry;
pub use options::GraphOptions;

use crate::error::{Error, Result};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

type VertexMap<N, E> = IndexMap<String, VertexEntry<N, E>, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    options: GraphOptions,
    vertices: VertexMap<N, E>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<N, E> Graph<N, E> {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            vertices: VertexMap::default(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphOptions::directed())
    }

    pub fn undirected() -> Self {
        Self::new(GraphOptions::undirected())
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn has_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored edges.
    ///
    /// Undirected edges are stored as two records (a self loop puts both in the same list) and
    /// count once.
    pub fn edge_count(&self) -> usize {
        let records: usize = self.vertices.values().map(|v| v.edges.len()).sum();
        if self.options.directed {
            records
        } else {
            records / 2
        }
    }

    /// Vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(String::as_str)
    }

    /// Length of `x`'s edge list, counting parallel edges (and both records of an undirected
    /// self loop).
    pub fn degree(&self, x: &str) -> Result<usize> {
        Ok(self.vertex(x)?.edges.len())
    }

    /// Whether `x`'s edge list holds a record pointing at `y`.
    ///
    /// Only `x`'s list is scanned; `y` does not have to be a vertex.
    pub fn adjacent(&self, x: &str, y: &str) -> Result<bool> {
        Ok(self.vertex(x)?.position(y).is_some())
    }

    /// Neighbor ids of `x` in edge insertion order.
    ///
    /// Fails with [`Error::VertexNotFound`] for an unknown `x`, which keeps "no such vertex"
    /// apart from "vertex without neighbors".
    pub fn neighbors(&self, x: &str) -> Result<Vec<&str>> {
        Ok(self
            .vertex(x)?
            .edges
            .iter()
            .map(|e| e.target.as_str())
            .collect())
    }

    /// `(neighbor id, edge value)` pairs of `x` in insertion order.
    pub fn edges(&self, x: &str) -> Result<impl Iterator<Item = (&str, &E)>> {
        Ok(self
            .vertex(x)?
            .edges
            .iter()
            .map(|e| (e.target.as_str(), &e.value)))
    }

    pub fn vertex_value(&self, x: &str) -> Result<&N> {
        Ok(&self.vertex(x)?.value)
    }

    pub fn vertex_value_mut(&mut self, x: &str) -> Result<&mut N> {
        Ok(&mut self.vertex_mut(x)?.value)
    }

    /// Replaces the value of `x`, returning the previous one.
    pub fn set_vertex_value(&mut self, x: &str, value: N) -> Result<N> {
        trace!(id = x, "set vertex value");
        Ok(std::mem::replace(self.vertex_value_mut(x)?, value))
    }

    /// Value of the first `x -> y` record.
    pub fn edge_value(&self, x: &str, y: &str) -> Result<&E> {
        self.vertex(x)?
            .find(y)
            .map(|e| &e.value)
            .ok_or_else(|| Error::edge_not_found(x, y))
    }

    pub fn edge_value_mut(&mut self, x: &str, y: &str) -> Result<&mut E> {
        self.vertex_mut(x)?
            .find_mut(y)
            .map(|e| &mut e.value)
            .ok_or_else(|| Error::edge_not_found(x, y))
    }

    /// Replaces the value of the first `x -> y` record, returning the previous one.
    ///
    /// For undirected graphs the mirrored `y -> x` record is left untouched.
    pub fn set_edge_value(&mut self, x: &str, y: &str, value: E) -> Result<E> {
        trace!(from = x, to = y, "set edge value");
        Ok(std::mem::replace(self.edge_value_mut(x, y)?, value))
    }

    /// Removes the first `x -> y` record and returns its value.
    ///
    /// For undirected graphs the first `y -> x` record is removed as well.
    pub fn remove_edge(&mut self, x: &str, y: &str) -> Result<E> {
        let entry = self.vertex_mut(x)?;
        let ix = entry.position(y).ok_or_else(|| Error::edge_not_found(x, y))?;
        let removed = entry.edges.remove(ix);

        if !self.options.directed {
            if let Some(mirror) = self.vertices.get_mut(y) {
                if let Some(ix) = mirror.position(x) {
                    mirror.edges.remove(ix);
                }
            }
        }

        trace!(from = x, to = y, "remove edge");
        Ok(removed.value)
    }

    /// Removes `id` and its edge list, returning its value.
    ///
    /// Undirected graphs also purge every record referencing `id` from its neighbors' lists.
    /// Directed graphs keep no reverse index, so records of other vertices pointing at `id`
    /// stay behind as dangling references.
    pub fn remove_vertex(&mut self, id: &str) -> Result<N> {
        let entry = self
            .vertices
            .shift_remove(id)
            .ok_or_else(|| Error::vertex_not_found(id))?;

        if !self.options.directed {
            for e in &entry.edges {
                if let Some(n) = self.vertices.get_mut(e.target.as_str()) {
                    n.edges.retain(|r| r.target != id);
                }
            }
        }

        trace!(id, edges = entry.edges.len(), "remove vertex");
        Ok(entry.value)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Stored id for `id`, borrowed from the graph.
    pub(crate) fn resolve(&self, id: &str) -> Option<&str> {
        self.vertices.get_key_value(id).map(|(k, _)| k.as_str())
    }

    pub(crate) fn edge_list(&self, id: &str) -> Option<&[EdgeEntry<E>]> {
        self.vertices.get(id).map(|v| v.edges.as_slice())
    }

    fn vertex(&self, id: &str) -> Result<&VertexEntry<N, E>> {
        self.vertices
            .get(id)
            .ok_or_else(|| Error::vertex_not_found(id))
    }

    fn vertex_mut(&mut self, id: &str) -> Result<&mut VertexEntry<N, E>> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| Error::vertex_not_found(id))
    }
}

impl<N, E> Graph<N, E>
where
    N: Default,
    E: Default,
{
    /// Inserts `id` with a default value and no edges.
    ///
    /// Returns `false` (and changes nothing) when `id` already exists.
    pub fn add_vertex(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.vertices.contains_key(&id) {
            debug!(id = %id, "vertex already exists");
            return false;
        }
        trace!(id = %id, "add vertex");
        self.vertices.insert(id, VertexEntry::default());
        true
    }

    /// Adds an edge with a default value, creating missing endpoints.
    ///
    /// Undirected graphs get a record on each side. Parallel edges are kept.
    pub fn add_edge(&mut self, x: impl Into<String>, y: impl Into<String>) -> &mut Self {
        let mirror = (!self.options.directed).then(E::default);
        self.insert_edge(x.into(), y.into(), E::default(), mirror)
    }

    /// Like [`add_edge`](Self::add_edge), starting both undirected records at `value`.
    pub fn add_edge_with_value(
        &mut self,
        x: impl Into<String>,
        y: impl Into<String>,
        value: E,
    ) -> &mut Self
    where
        E: Clone,
    {
        let mirror = (!self.options.directed).then(|| value.clone());
        self.insert_edge(x.into(), y.into(), value, mirror)
    }

    fn insert_edge(&mut self, x: String, y: String, value: E, mirror: Option<E>) -> &mut Self {
        trace!(from = %x, to = %y, directed = self.options.directed, "add edge");

        let x_ix = self.ensure_vertex(x.clone());
        let create_target = !self.options.directed || self.options.create_missing_targets;
        if create_target {
            let y_ix = self.ensure_vertex(y.clone());
            if let Some(mirror) = mirror {
                self.vertices[y_ix].edges.push(EdgeEntry::new(x, mirror));
            }
        }
        self.vertices[x_ix].edges.push(EdgeEntry::new(y, value));
        self
    }

    fn ensure_vertex(&mut self, id: String) -> usize {
        let entry = self.vertices.entry(id);
        let ix = entry.index();
        entry.or_default();
        ix
    }
}
