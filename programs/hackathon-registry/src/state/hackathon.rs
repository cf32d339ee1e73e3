use anchor_lang::prelude::*;
use crate::constants::*;

// Hackathon account
// Stores the verifier set and quorum threshold for one event
#[account]
#[derive(InitSpace)]
pub struct Hackathon {
    // Sequential identifier assigned from RegistryConfig.hackathon_count
    pub hackathon_id: u64,

    // Unique, non-empty display name (also seeds the name marker PDA)
    #[max_len(MAX_NAME_LEN)]
    pub name: String,

    // Organizer - can manage verifiers and threshold for this hackathon
    pub organizer: Pubkey,

    // Active verifier set
    // Membership in this list is the verifier capability grant
    #[max_len(MAX_VERIFIERS)]
    pub verifiers: Vec<Pubkey>,

    // Number of distinct verifier approvals required per milestone
    // Must be: 1 <= required_signatures <= verifiers.len()
    pub required_signatures: u8,

    // Event window
    pub start_time: i64,
    pub end_time: i64,

    // Active flag - soft disable, grants survive deactivation
    pub active: bool,

    // PDA bump seed
    pub bump: u8,
}

impl Hackathon {
    // Check if a pubkey holds the underlying verifier grant
    // Does NOT consult the active flag
    pub fn has_grant(&self, key: &Pubkey) -> bool {
        self.verifiers.iter().any(|v| v == key)
    }

    // Verifier capability check consumed by the credit engine
    // Deliberately reports false for inactive hackathons so that
    // disbursement can never be triggered for a deactivated event
    pub fn is_verifier(&self, key: &Pubkey) -> bool {
        self.active && self.has_grant(key)
    }

    pub fn verifier_count(&self) -> usize {
        self.verifiers.len()
    }

    // Check if a key may manage this hackathon
    pub fn can_manage(&self, key: &Pubkey, admin: &Pubkey) -> bool {
        key == &self.organizer || key == admin
    }
}

// Marker account seeded by the hackathon name
// Its init failing on re-creation is what enforces name uniqueness
#[account]
#[derive(InitSpace)]
pub struct HackathonName {
    pub hackathon: Pubkey,
    pub bump: u8,
}
