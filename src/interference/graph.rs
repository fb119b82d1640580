use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::GraphError;

/// Undirected interference graph over arbitrary vertex labels.
// Every vertex owns an entry in adjacency, isolated ones an empty set.
// w in adjacency[v] <=> v in adjacency[w], and edge_count counts each such pair once.
#[derive(Clone)]
pub struct InterferenceGraph<T> {
    adjacency: HashMap<T, HashSet<T>>,
    edge_count: usize,
}

impl<T> Default for InterferenceGraph<T> {
    fn default() -> Self {
        InterferenceGraph {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<T> InterferenceGraph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    pub fn new() -> InterferenceGraph<T> {
        InterferenceGraph::default()
    }

    fn check(&self, vertex: &T) -> Result<(), GraphError<T>> {
        if self.adjacency.contains_key(vertex) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(vertex.clone()))
        }
    }

    /// Inserts the vertex; a vertex that is already present is left as is.
    pub fn add_vertex(&mut self, vertex: T) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Removes the vertex together with every edge incident to it.
    pub fn remove_vertex(&mut self, vertex: &T) -> Result<(), GraphError<T>> {
        let neighbors = self
            .adjacency
            .remove(vertex)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))?;

        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.remove(vertex);
            }
        }
        self.edge_count -= neighbors.len();
        log::trace!(
            "removed vertex {:?} and {} incident edges",
            vertex,
            neighbors.len()
        );
        Ok(())
    }

    /// Records that v and w interfere. Adding an existing edge changes nothing.
    /// An edge from a vertex to itself carries no meaning and is ignored.
    pub fn add_edge(&mut self, v: &T, w: &T) -> Result<(), GraphError<T>> {
        self.check(v)?;
        self.check(w)?;
        if v == w {
            return Ok(());
        }

        let mut inserted = false;
        if let Some(set) = self.adjacency.get_mut(v) {
            inserted |= set.insert(w.clone());
        }
        if let Some(set) = self.adjacency.get_mut(w) {
            inserted |= set.insert(v.clone());
        }
        if inserted {
            self.edge_count += 1;
        }
        Ok(())
    }

    pub fn remove_edge(&mut self, v: &T, w: &T) -> Result<(), GraphError<T>> {
        self.check(v)?;
        self.check(w)?;

        let present = self.adjacency[v].contains(w) && self.adjacency[w].contains(v);
        if !present {
            return Err(GraphError::UnknownEdge(v.clone(), w.clone()));
        }

        if let Some(set) = self.adjacency.get_mut(v) {
            set.remove(w);
        }
        if let Some(set) = self.adjacency.get_mut(w) {
            set.remove(v);
        }
        self.edge_count -= 1;
        Ok(())
    }

    /// Snapshot of the current vertex set.
    pub fn vertices(&self) -> HashSet<T> {
        self.adjacency.keys().cloned().collect()
    }

    /// Snapshot of the neighbors of the vertex.
    pub fn neighbors(&self, vertex: &T) -> Result<HashSet<T>, GraphError<T>> {
        self.adjacency
            .get(vertex)
            .cloned()
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, vertex: &T) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn interferes(&self, v: &T, w: &T) -> Result<bool, GraphError<T>> {
        self.check(v)?;
        self.check(w)?;
        Ok(self.adjacency[v].contains(w))
    }

    pub fn degree(&self, vertex: &T) -> Result<usize, GraphError<T>> {
        self.adjacency
            .get(vertex)
            .map(HashSet::len)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }

    /// Largest degree in the graph, None when there are no vertices.
    pub fn max_degree(&self) -> Option<usize> {
        self.adjacency.values().map(HashSet::len).max()
    }

    /// Borrowed view of every vertex with its neighbor set, in no particular order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&T, &HashSet<T>)> {
        self.adjacency.iter()
    }
}

impl<T> InterferenceGraph<T>
where
    T: Clone + Eq + Hash + Debug + Ord,
{
    /// Every edge exactly once, smaller label first, sorted.
    pub fn edges(&self) -> Vec<(T, T)> {
        let mut edges: Vec<_> = self
            .adjacency
            .iter()
            .flat_map(|(v, set)| set.iter().filter(move |&w| v < w).map(move |w| (v, w)))
            .map(|(v, w)| (v.clone(), w.clone()))
            .collect();
        edges.sort_unstable();
        edges
    }

    fn sorted_adjacency(&self) -> Vec<(&T, Vec<&T>)> {
        let mut lists: Vec<_> = self
            .adjacency
            .iter()
            .map(|(v, set)| {
                let mut neighbors: Vec<_> = set.iter().collect();
                neighbors.sort_unstable();
                (v, neighbors)
            })
            .collect();
        lists.sort_unstable_by(|a, b| a.0.cmp(b.0));
        lists
    }
}

impl<T> Debug for InterferenceGraph<T>
where
    T: Clone + Eq + Hash + Debug + Ord,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "adjacency lists:")?;
        for (vertex, neighbors) in self.sorted_adjacency() {
            writeln!(f, "\t{:?} => {:?}", vertex, neighbors)?;
        }
        writeln!(f, "vertices: {}", self.num_vertices())?;
        write!(f, "edges: {}", self.num_edges())?;
        Ok(())
    }
}
