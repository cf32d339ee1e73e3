pub mod hackathon;
pub mod registry;

pub use hackathon::*;
pub use registry::*;
