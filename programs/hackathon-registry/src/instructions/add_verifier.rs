use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::*};

// Add Verifier Instruction
//
// Grants the verifier capability for one hackathon.
// Idempotent: adding an existing verifier is a no-op success.
// Callable by the hackathon organizer or the registry admin.

#[derive(Accounts)]
pub struct AddVerifier<'info> {
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

impl<'info> AddVerifier<'info> {
    pub fn add_verifier(&mut self, who: Pubkey) -> Result<()> {
        // SECURITY CHECKS

        // 1. Pause Check
        require!(!self.registry_config.paused, RegistryError::RegistryPaused);

        // 2. Management Authorization
        require!(
            self.hackathon
                .can_manage(&self.authority.key(), &self.registry_config.admin),
            RegistryError::NotOrganizerOrAdmin
        );

        // 3. Idempotency
        // Re-granting an existing verifier must not error
        if self.hackathon.has_grant(&who) {
            msg!("Verifier {} already granted, no-op", who);
            return Ok(());
        }

        // 4. Capacity Check
        require!(
            self.hackathon.verifier_count() < MAX_VERIFIERS,
            RegistryError::TooManyVerifiers
        );

        self.hackathon.verifiers.push(who);

        msg!(
            "Verifier {} added to hackathon {}, count: {}",
            who,
            self.hackathon.hackathon_id,
            self.hackathon.verifier_count(),
        );

        Ok(())
    }
}
