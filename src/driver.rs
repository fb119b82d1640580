use crate::loader;
use crate::options::Options;
use crate::register_allocation::{
    assign_registers, is_valid_assignment, max_degree_bound, RegisterAssignment,
};
use crate::{error, warning};

/// Renders an assignment as one `name: register` line per variable, sorted by name.
pub fn format_assignment(assignment: &RegisterAssignment<loader::Variable>) -> String {
    let mut lines: Vec<_> = assignment.iter().collect();
    lines.sort_unstable();
    lines
        .into_iter()
        .map(|(variable, register)| format!("{}: {}\n", variable, register))
        .collect()
}

pub fn drive(options: Options) -> Result<(), ()> {
    log::info!("driver started");
    let graph = match loader::load(&options.input) {
        Ok(graph) => graph,
        Err(err) => {
            error!(options.input, "{}", err);
            return Err(());
        }
    };

    if options.dump_graph {
        eprintln!("{:?}", graph);
    }

    let assignment = assign_registers(&graph, options.registers);
    if assignment.is_empty() && graph.num_vertices() > 0 {
        eprintln!(
            "{}",
            warning!(
                options.input,
                "cannot allocate {} variables with {} registers (max degree {})",
                graph.num_vertices(),
                options.registers,
                max_degree_bound(&graph) - 1
            )
        );
        return Err(());
    }
    debug_assert!(is_valid_assignment(&graph, &assignment, options.registers));

    log::info!(
        "allocated {} variables using {} registers",
        assignment.len(),
        assignment.values().max().copied().unwrap_or(0)
    );
    print!("{}", format_assignment(&assignment));
    Ok(())
}
