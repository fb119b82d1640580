#![allow(dead_code)]
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use regcolor_lib::InterferenceGraph;

/// Seeded generator so the random graphs are the same on every run
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn graph_from(vertices: &[&str], edges: &[(&str, &str)]) -> InterferenceGraph<String> {
    let mut graph = InterferenceGraph::new();
    for vertex in vertices {
        graph.add_vertex(vertex.to_string());
    }
    for (v, w) in edges {
        graph
            .add_edge(&v.to_string(), &w.to_string())
            .expect("edge between known vertices");
    }
    graph
}

/// Every pair of vertices interferes with probability p
pub fn random_graph<R: Rng>(rng: &mut R, vertices: u32, p: f64) -> InterferenceGraph<u32> {
    let mut graph = InterferenceGraph::new();
    for v in 0..vertices {
        graph.add_vertex(v);
    }
    for v in 0..vertices {
        for w in 0..v {
            if rng.random_bool(p) {
                graph.add_edge(&v, &w).unwrap();
            }
        }
    }
    graph
}
