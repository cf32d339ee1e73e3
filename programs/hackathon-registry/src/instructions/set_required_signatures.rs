use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::*};

// Set Required Signatures Instruction
//
// Changes the quorum threshold for one hackathon.
// The new threshold can never exceed the current verifier count.

#[derive(Accounts)]
pub struct SetRequiredSignatures<'info> {
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

impl<'info> SetRequiredSignatures<'info> {
    pub fn set_required_signatures(&mut self, n: u8) -> Result<()> {
        // SECURITY CHECKS

        // 1. Pause Check
        require!(!self.registry_config.paused, RegistryError::RegistryPaused);

        // 2. Management Authorization
        require!(
            self.hackathon
                .can_manage(&self.authority.key(), &self.registry_config.admin),
            RegistryError::NotOrganizerOrAdmin
        );

        // 3. Threshold Bounds
        require!(n >= 1, RegistryError::InvalidThreshold);
        require!(
            n as usize <= self.hackathon.verifier_count(),
            RegistryError::ThresholdViolation
        );

        self.hackathon.required_signatures = n;

        msg!(
            "Hackathon {} required signatures set to {}",
            self.hackathon.hackathon_id,
            n,
        );

        Ok(())
    }
}
