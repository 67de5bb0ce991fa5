//! Bulk construction helpers.

use super::{Graph, GraphOptions};

impl<N, E> Graph<N, E>
where
    N: Default,
    E: Default,
{
    /// Builds a graph from an adjacency listing such as `[("A", ["B", "D"]), ("B", ["C"])]`.
    ///
    /// Every key becomes a vertex in listing order, and each listed neighbor becomes one
    /// `add_edge(key, neighbor)` call. For undirected graphs a listing that already names both
    /// directions therefore produces parallel edges.
    pub fn from_adjacency<K, I, L>(
        options: GraphOptions,
        listing: impl IntoIterator<Item = (K, I)>,
    ) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let mut g = Self::new(options);
        for (v, neighbors) in listing {
            let v: String = v.into();
            g.add_vertex(v.clone());
            for w in neighbors {
                g.add_edge(v.clone(), w);
            }
        }
        g
    }

    pub fn extend_edges<X, Y>(&mut self, edges: impl IntoIterator<Item = (X, Y)>) -> &mut Self
    where
        X: Into<String>,
        Y: Into<String>,
    {
        for (x, y) in edges {
            self.add_edge(x, y);
        }
        self
    }
}
