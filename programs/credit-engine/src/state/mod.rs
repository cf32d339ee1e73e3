pub mod config;
pub mod credit_line;
pub mod project;
pub mod scoring;

pub use config::*;
pub use credit_line::*;
pub use project::*;
pub use scoring::*;
