//! Graph configuration options.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    pub directed: bool,
    /// Directed graphs only: `add_edge(x, y)` also inserts `y` as a vertex when it is absent.
    ///
    /// With this off, only the source endpoint is created and `y` stays a dangling neighbor
    /// reference until it is added explicitly. Undirected graphs always create both endpoints.
    pub create_missing_targets: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            directed: true,
            create_missing_targets: true,
        }
    }
}

impl GraphOptions {
    pub fn directed() -> Self {
        Self::default()
    }

    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Default::default()
        }
    }
}
