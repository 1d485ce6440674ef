//! Constraint graph: symmetric adjacency over `N` nodes.
//!
//! Built with [`GraphBuilder`], then frozen into an immutable
//! [`ConstraintGraph`]. Once frozen there is no way to add or remove edges,
//! so the graph cannot change under a running search.
//!
//! Neighbor lists are kept in ascending index order so every traversal of
//! the graph is deterministic.

use crate::error::GraphError;

/// Mutable edge accumulator. Consumed by [`GraphBuilder::build`].
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    node_count: usize,
    /// Row-major `node_count * node_count` adjacency matrix.
    matrix: Vec<bool>,
}

impl GraphBuilder {
    /// Create a builder for `node_count` isolated nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            matrix: vec![false; node_count * node_count],
        }
    }

    /// Number of nodes the graph will have.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Record an undirected edge between `u` and `v`.
    ///
    /// Returns `true` if the edge is new, `false` if it was already present.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeOutOfRange`] if either endpoint is `>= node_count`,
    /// [`GraphError::SelfLoop`] if `u == v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        for node in [u, v] {
            if node >= self.node_count {
                return Err(GraphError::NodeOutOfRange {
                    node,
                    node_count: self.node_count,
                });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop { node: u });
        }
        let fresh = !self.matrix[u * self.node_count + v];
        self.matrix[u * self.node_count + v] = true;
        self.matrix[v * self.node_count + u] = true;
        Ok(fresh)
    }

    /// Freeze the builder into an immutable graph.
    #[must_use]
    pub fn build(self) -> ConstraintGraph {
        let n = self.node_count;
        let neighbors = (0..n)
            .map(|u| (0..n).filter(|&v| self.matrix[u * n + v]).collect())
            .collect();
        ConstraintGraph {
            node_count: n,
            matrix: self.matrix,
            neighbors,
        }
    }
}

/// Immutable symmetric adjacency relation.
///
/// Query methods take node indices in `0..node_count()`. Passing an index
/// outside that range is a caller bug and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintGraph {
    node_count: usize,
    matrix: Vec<bool>,
    neighbors: Vec<Vec<usize>>,
}

impl ConstraintGraph {
    /// Build a graph from an edge list.
    ///
    /// # Errors
    ///
    /// Propagates the first [`GraphError`] from [`GraphBuilder::add_edge`].
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::new(node_count);
        for &(u, v) in edges {
            builder.add_edge(u, v)?;
        }
        Ok(builder.build())
    }

    /// The complete graph on `node_count` nodes.
    ///
    /// # Panics
    ///
    /// Never in practice; every generated edge joins two distinct in-range
    /// nodes.
    #[must_use]
    pub fn complete(node_count: usize) -> Self {
        let mut builder = GraphBuilder::new(node_count);
        for u in 0..node_count {
            for v in (u + 1)..node_count {
                builder
                    .add_edge(u, v)
                    .expect("endpoints in range and distinct");
            }
        }
        builder.build()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether `u` and `v` share an edge.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn adjacent(&self, u: usize, v: usize) -> bool {
        assert!(
            u < self.node_count && v < self.node_count,
            "node index out of range"
        );
        self.matrix[u * self.node_count + v]
    }

    /// Neighbors of `u` in ascending index order.
    ///
    /// # Panics
    ///
    /// Panics if `u` is out of range.
    #[must_use]
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.neighbors[u]
    }

    /// Number of neighbors of `u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` is out of range.
    #[must_use]
    pub fn degree(&self, u: usize) -> usize {
        self.neighbors[u].len()
    }

    /// Every edge once, as `(u, v)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(u, ns)| ns.iter().filter(move |&&v| v > u).map(move |&v| (u, v)))
    }

    /// Total number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }
}
