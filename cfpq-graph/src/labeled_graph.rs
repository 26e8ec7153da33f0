//! The input graph.

use std::hash::Hash;

use indexmap::IndexSet;

/// A labeled edge `source -label-> target`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LabeledEdge<V> {
    pub source: V,
    pub target: V,
    pub label: String,
}

/// A directed multigraph with labeled edges.
///
/// Vertices are kept in the order they were first added, either directly or as
/// an edge endpoint.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "V: serde::Serialize + Eq + Hash",
        deserialize = "V: serde::Deserialize<'de> + Eq + Hash"
    ))
)]
#[derive(Clone, Debug)]
pub struct LabeledGraph<V: Eq + Hash> {
    vertices: IndexSet<V>,
    edges: Vec<LabeledEdge<V>>,
}

impl<V: Eq + Hash> Default for LabeledGraph<V> {
    fn default() -> Self {
        LabeledGraph {
            vertices: IndexSet::new(),
            edges: vec![],
        }
    }
}

impl<V: Clone + Eq + Hash> LabeledGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(source, target, label)` triples.
    pub fn from_edges<I, L>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, L)>,
        L: Into<String>,
    {
        let mut graph = Self::new();
        for (source, target, label) in edges {
            graph.add_edge(source, target, label);
        }
        graph
    }

    /// Adds a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    /// Adds an edge, along with its endpoints if they are new. The source is
    /// added before the target.
    pub fn add_edge(&mut self, source: V, target: V, label: impl Into<String>) {
        self.vertices.insert(source.clone());
        self.vertices.insert(target.clone());
        self.edges.push(LabeledEdge {
            source,
            target,
            label: label.into(),
        });
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &LabeledEdge<V>> {
        self.edges.iter()
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
