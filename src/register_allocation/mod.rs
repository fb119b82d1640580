use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::interference::InterferenceGraph;

mod greedy;

pub use greedy::{assign_registers, max_degree_bound};

/// Register numbers start at 1
pub type Register = u32;

/// Vertex to register. Empty when the graph could not be colored within the budget.
pub type RegisterAssignment<T> = HashMap<T, Register>;

/// Checks that every vertex got a register in 1..=num_registers and no edge joins equal registers.
pub fn is_valid_assignment<T>(
    graph: &InterferenceGraph<T>,
    assignment: &RegisterAssignment<T>,
    num_registers: u32,
) -> bool
where
    T: Clone + Eq + Hash + Debug,
{
    if assignment.len() != graph.num_vertices() {
        return false;
    }
    graph
        .adjacency()
        .all(|(vertex, neighbors)| match assignment.get(vertex) {
            Some(&register) if (1..=num_registers).contains(&register) => neighbors
                .iter()
                .all(|neighbor| assignment.get(neighbor) != Some(&register)),
            _ => false,
        })
}
