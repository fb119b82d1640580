mod graph;

pub use graph::InterferenceGraph;
