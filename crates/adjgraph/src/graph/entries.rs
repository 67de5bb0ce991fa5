//! Internal storage records for [`Graph`](super::Graph).

#[derive(Debug, Clone)]
pub(crate) struct VertexEntry<N, E> {
    pub(crate) value: N,
    pub(crate) edges: Vec<EdgeEntry<E>>,
}

impl<N: Default, E> Default for VertexEntry<N, E> {
    fn default() -> Self {
        Self {
            value: N::default(),
            edges: Vec::new(),
        }
    }
}

impl<N, E> VertexEntry<N, E> {
    /// Index of the first record pointing at `target`, in insertion order.
    pub(crate) fn position(&self, target: &str) -> Option<usize> {
        self.edges.iter().position(|e| e.target == target)
    }

    pub(crate) fn find(&self, target: &str) -> Option<&EdgeEntry<E>> {
        self.edges.iter().find(|e| e.target == target)
    }

    pub(crate) fn find_mut(&mut self, target: &str) -> Option<&mut EdgeEntry<E>> {
        self.edges.iter_mut().find(|e| e.target == target)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct EdgeEntry<E> {
    pub(crate) target: String,
    pub(crate) value: E,
}

impl<E> EdgeEntry<E> {
    pub(crate) fn new(target: String, value: E) -> Self {
        Self { target, value }
    }
}
