pub mod approve_milestone;
pub mod initialize_engine;
pub mod initialize_treasury;
pub mod link_identity;
pub mod repay_loan;
pub mod request_funding;
pub mod set_factor_weight;
pub mod toggle_pause;
pub mod update_credit_parameters;
pub mod update_pointers;
pub mod withdraw_funds;

pub use approve_milestone::*;
pub use initialize_engine::*;
pub use initialize_treasury::*;
pub use link_identity::*;
pub use repay_loan::*;
pub use request_funding::*;
pub use set_factor_weight::*;
pub use toggle_pause::*;
pub use update_credit_parameters::*;
pub use update_pointers::*;
pub use withdraw_funds::*;
