use anchor_lang::prelude::*;

// Registry-wide configuration account
// Single PDA created once at deployment
#[account]
#[derive(InitSpace)]
pub struct RegistryConfig {
    // Platform admin - can manage any hackathon and pause the registry
    pub admin: Pubkey,

    // Total hackathons ever created (next sequential id)
    pub hackathon_count: u64,

    // Pause state - when true, all mutating operations are blocked
    pub paused: bool,

    // PDA bump seed
    pub bump: u8,
}

impl RegistryConfig {
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        key == &self.admin
    }
}
