use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use bitvec::prelude::BitVec;
use smallvec::SmallVec;

use crate::interference::InterferenceGraph;

use super::{Register, RegisterAssignment};

/// Number of registers greedy coloring never exceeds: max degree + 1, or 0 without vertices.
pub fn max_degree_bound<T>(graph: &InterferenceGraph<T>) -> usize
where
    T: Clone + Eq + Hash + Debug,
{
    graph.max_degree().map_or(0, |degree| degree + 1)
}

/// Colors the graph with registers 1..=num_registers, one register number at a time.
/// Every pass hands the current register to each uncolored vertex, highest degree first,
/// whose neighbors have not received it in this same pass.
/// Returns an empty assignment when some vertex is still uncolored after the last pass.
pub fn assign_registers<T>(graph: &InterferenceGraph<T>, num_registers: u32) -> RegisterAssignment<T>
where
    T: Clone + Eq + Hash + Debug + Ord,
{
    let bound = max_degree_bound(graph);
    if bound == 0 {
        return HashMap::new();
    }
    let color_limit = std::cmp::min(bound, num_registers as usize) as Register;
    log::debug!(
        "Starting greedy coloring of {} vertices: bound {}, using at most {} registers",
        graph.num_vertices(),
        bound,
        color_limit
    );

    // Renumber densely, highest degree first and label order among equal degrees
    let mut order: Vec<(&T, &HashSet<T>)> = graph.adjacency().collect();
    order.sort_unstable_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));
    let index: HashMap<&T, u32> = order
        .iter()
        .enumerate()
        .map(|(i, &(vertex, _))| (vertex, i as u32))
        .collect();
    let adjacency_list: Vec<SmallVec<[u32; 4]>> = order
        .iter()
        .map(|(_, neighbors)| {
            neighbors
                .iter()
                .filter_map(|n| index.get(n).copied())
                .collect()
        })
        .collect();

    let length = order.len();
    let mut pool: Vec<u32> = (0..length as u32).collect();
    let mut color: Vec<Register> = vec![0; length];
    let mut taken: BitVec = BitVec::repeat(false, length);

    for register in 1..=color_limit {
        if pool.is_empty() {
            break;
        }
        // Only vertices given this register in this pass can clash with it
        taken.fill(false);
        pool.retain(|&node| {
            let node = node as usize;
            if adjacency_list[node].iter().any(|&n| taken[n as usize]) {
                true
            } else {
                taken.set(node, true);
                color[node] = register;
                false
            }
        });
        log::trace!(
            "register {}: {} vertices left uncolored",
            register,
            pool.len()
        );
    }

    if !pool.is_empty() {
        log::debug!(
            "Coloring failed: {} of {} vertices uncolored with {} registers",
            pool.len(),
            length,
            num_registers
        );
        return HashMap::new();
    }

    order
        .into_iter()
        .zip(color)
        .map(|((vertex, _), register)| (vertex.clone(), register))
        .collect()
}
