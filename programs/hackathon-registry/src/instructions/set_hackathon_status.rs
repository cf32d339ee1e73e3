use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::*};

// Set Hackathon Status Instruction
//
// Soft-disable switch. Deactivation keeps every verifier grant in
// place but makes is_verifier report false, which blocks milestone
// disbursement in the credit engine for this event.

#[derive(Accounts)]
pub struct SetHackathonStatus<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [REGISTRY],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    #[account(
        mut,
        seeds = [
            HACKATHON,
            &hackathon.hackathon_id.to_le_bytes(),
        ],
        bump = hackathon.bump,
    )]
    pub hackathon: Account<'info, Hackathon>,
}

impl<'info> SetHackathonStatus<'info> {
    pub fn set_hackathon_status(&mut self, active: bool) -> Result<()> {
        // SECURITY CHECKS

        // 1. Pause Check
        require!(!self.registry_config.paused, RegistryError::RegistryPaused);

        // 2. Management Authorization
        require!(
            self.hackathon
                .can_manage(&self.authority.key(), &self.registry_config.admin),
            RegistryError::NotOrganizerOrAdmin
        );

        self.hackathon.active = active;

        msg!(
            "Hackathon {} active: {}",
            self.hackathon.hackathon_id,
            active,
        );

        Ok(())
    }
}
