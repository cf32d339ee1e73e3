pub mod add_verifier;
pub mod create_hackathon;
pub mod initialize_registry;
pub mod remove_verifier;
pub mod set_hackathon_status;
pub mod set_required_signatures;
pub mod toggle_pause;

pub use add_verifier::*;
pub use create_hackathon::*;
pub use initialize_registry::*;
pub use remove_verifier::*;
pub use set_hackathon_status::*;
pub use set_required_signatures::*;
pub use toggle_pause::*;
