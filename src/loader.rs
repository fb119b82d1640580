use std::fs::read_to_string;
use std::io::{self, Write};
use std::path::Path;

use crate::error::LoadError;
use crate::interference::InterferenceGraph;
use crate::register_allocation::{assign_registers, RegisterAssignment};

/// Variables are identified by their name
pub type Variable = String;

// Graph files hold one record per line: a single variable, or two variables that interfere.
// Blank lines and lines starting with '#' are skipped.
pub fn parse(text: &str) -> Result<InterferenceGraph<Variable>, LoadError> {
    let mut graph = InterferenceGraph::new();
    for (number, line) in text.lines().enumerate() {
        let line_number = number + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.iter().any(|field| field.is_empty()) {
            return Err(malformed(line_number, "empty variable name"));
        }
        match fields.as_slice() {
            [vertex] => graph.add_vertex(vertex.to_string()),
            [v, w] if v == w => {
                return Err(malformed(
                    line_number,
                    &format!("variable {} cannot interfere with itself", v),
                ))
            }
            [v, w] => {
                let (v, w) = (v.to_string(), w.to_string());
                graph.add_vertex(v.clone());
                graph.add_vertex(w.clone());
                graph.add_edge(&v, &w)?;
            }
            _ => {
                return Err(malformed(
                    line_number,
                    &format!("expected 1 or 2 fields, found {}", fields.len()),
                ))
            }
        }
    }
    Ok(graph)
}

fn malformed(line: usize, message: &str) -> LoadError {
    LoadError::Malformed {
        line,
        message: message.to_string(),
    }
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<InterferenceGraph<Variable>, LoadError> {
    let path = path.as_ref();
    let text = read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse(&text)?;
    log::info!(
        "loaded {}: {} variables, {} interferences",
        path.display(),
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(graph)
}

/// Writes the graph in the format read by `parse`, sorted by name.
/// Variables without interferences get a record of their own.
pub fn write<W: Write>(graph: &InterferenceGraph<Variable>, writer: &mut W) -> io::Result<()> {
    let mut isolated: Vec<_> = graph
        .adjacency()
        .filter(|(_, neighbors)| neighbors.is_empty())
        .map(|(vertex, _)| vertex)
        .collect();
    isolated.sort_unstable();
    for vertex in isolated {
        writeln!(writer, "{}", vertex)?;
    }
    for (v, w) in graph.edges() {
        writeln!(writer, "{},{}", v, w)?;
    }
    Ok(())
}

/// Loads the graph stored at path and colors it with at most num_registers registers.
pub fn assign_registers_from_file<P: AsRef<Path>>(
    path: P,
    num_registers: u32,
) -> Result<RegisterAssignment<Variable>, LoadError> {
    let graph = load(path)?;
    Ok(assign_registers(&graph, num_registers))
}
