use anchor_lang::prelude::*;

// Engine-wide configuration account
// Holds the credit formula parameters and the external pointers
// (registry program, funding token mint) the admin can swap
#[account]
#[derive(InitSpace)]
pub struct EngineConfig {
    // Engine admin - parameter updates, pause, pointer swaps
    pub admin: Pubkey,

    // Treasury - the only identity allowed to withdraw vault funds
    pub treasury: Pubkey,

    // Expected owner program of hackathon accounts
    pub registry: Pubkey,

    // SPL mint of the funding token
    pub funding_mint: Pubkey,

    // Credit limit formula: min(base + score * multiplier, max)
    pub base_amount: u64,
    pub per_point_multiplier: u64,
    pub max_amount: u64,

    // Total projects ever created (next sequential id)
    pub project_count: u64,

    // Pause state - blocks request_funding and approve_milestone
    pub paused: bool,

    // PDA bump seeds
    pub bump: u8,
    pub vault_authority_bump: u8,
}

impl EngineConfig {
    // Deterministic credit limit for a reputation score
    // Monotone non-decreasing, saturates at max_amount
    pub fn calculate_funding_amount(&self, reputation_score: u64) -> u64 {
        let scaled = reputation_score.saturating_mul(self.per_point_multiplier);
        self.base_amount
            .saturating_add(scaled)
            .min(self.max_amount)
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        key == &self.admin
    }

    pub fn is_treasury(&self, key: &Pubkey) -> bool {
        key == &self.treasury
    }
}
