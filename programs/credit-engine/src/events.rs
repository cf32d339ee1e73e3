use anchor_lang::prelude::*;

// Emitted by request_funding with the newly assigned project id
#[event]
pub struct ProjectCreated {
    pub project_id: u64,
    pub hackathon_id: u64,
    pub developer: Pubkey,
    pub funding_amount: u64,
    pub milestone_count: u8,
}

// Emitted when a milestone crosses quorum and disburses
#[event]
pub struct MilestoneCompleted {
    pub project_id: u64,
    pub milestone_index: u8,
    pub amount: u64,
    pub approval_count: u8,
    pub developer: Pubkey,
}

#[event]
pub struct LoanRepaid {
    pub developer: Pubkey,
    pub amount: u64,
    pub remaining_used: u64,
}

// Atomic triple update, logged for auditability
#[event]
pub struct CreditParametersUpdated {
    pub base_amount: u64,
    pub per_point_multiplier: u64,
    pub max_amount: u64,
}

#[event]
pub struct IdentityLinked {
    pub developer: Pubkey,
    pub linked_at: i64,
}
