use std::path::PathBuf;

use thiserror::Error;

/// Misuse of an interference graph: naming a vertex or edge that is not there.
/// Mutations that fail with one of these leave the graph untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<T> {
    #[error("Unknown vertex {0:?}")]
    UnknownVertex(T),

    #[error("Unknown edge {0:?} - {1:?}")]
    UnknownEdge(T, T),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // line is 1-based
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error(transparent)]
    Graph(#[from] GraphError<String>),
}

#[macro_export]
macro_rules! error {
    ($path:expr,$( $exp:expr ),*) => {
        {
            use colored::Colorize;
            let string= format!("{}: error: {}",$path,format!($($exp,)*).red());
            eprintln!("{}",string);
            string
        }
    };
}

#[macro_export]
macro_rules! warning {
    ($path:expr,$( $exp:expr ),*) => {
        {
            use colored::Colorize;
            format!("{}: warning: {}",$path,format!($($exp,)*).purple())
        }
    };
}
