use anchor_lang::prelude::*;
use crate::constants::*;

// A single amount-bearing unit of project work
// Releases funds only once the approval set reaches quorum
#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace)]
pub struct Milestone {
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,

    // Must be positive
    pub amount: u64,

    // Terminal once set - no reversal path
    pub completed: bool,

    // Distinct verifiers that approved
    // Quorum is the cardinality of this set, order-independent
    #[max_len(MAX_APPROVALS)]
    pub approvals: Vec<Pubkey>,
}

impl Milestone {
    pub fn approval_count(&self) -> usize {
        self.approvals.len()
    }

    pub fn has_approved(&self, key: &Pubkey) -> bool {
        self.approvals.iter().any(|v| v == key)
    }
}

// Project account created by a funding request
// Metadata is immutable after creation; only milestone state
// transitions mutate this account
#[account]
#[derive(InitSpace)]
pub struct Project {
    // Sequential identifier assigned from EngineConfig.project_count
    pub project_id: u64,

    // Hackathon account address and id this project belongs to
    pub hackathon: Pubkey,
    pub hackathon_id: u64,

    pub developer: Pubkey,

    #[max_len(MAX_PROJECT_NAME_LEN)]
    pub name: String,

    #[max_len(MAX_METADATA_URL_LEN)]
    pub metadata_url: String,

    // Sum of all milestone amounts, fixed at creation
    pub funding_amount: u64,

    #[max_len(MAX_MILESTONES)]
    pub milestones: Vec<Milestone>,

    pub milestones_completed: u8,

    // False once every milestone is completed - terminal
    pub active: bool,

    // PDA bump seed
    pub bump: u8,
}

impl Project {
    pub fn milestone_count(&self) -> usize {
        self.milestones.len()
    }

    pub fn all_milestones_completed(&self) -> bool {
        self.milestones_completed as usize == self.milestones.len()
    }

    // Conservation check: milestone amounts always sum to funding_amount
    pub fn milestone_sum(&self) -> u64 {
        self.milestones.iter().map(|m| m.amount).sum()
    }
}
