pub mod driver;
pub mod error;
pub mod interference;
pub mod loader;
pub mod logger;
pub mod options;
pub mod register_allocation;

pub use error::{GraphError, LoadError};
pub use interference::InterferenceGraph;
pub use loader::Variable;
pub use register_allocation::{assign_registers, Register, RegisterAssignment};
