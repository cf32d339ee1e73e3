use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::*};

// Remove Verifier Instruction
//
// Revokes a verifier grant for one hackathon.
// Quorum safety: removal never succeeds if it would leave fewer
// verifiers than the current required-signatures threshold.

#[derive(Accounts)]
pub struct RemoveVerifier<'info> {
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

impl<'info> RemoveVerifier<'info> {
    pub fn remove_verifier(&mut self, who: Pubkey) -> Result<()> {
        // SECURITY CHECKS

        // 1. Pause Check
        require!(!self.registry_config.paused, RegistryError::RegistryPaused);

        // 2. Management Authorization
        require!(
            self.hackathon
                .can_manage(&self.authority.key(), &self.registry_config.admin),
            RegistryError::NotOrganizerOrAdmin
        );

        // 3. Membership Check
        let index = self
            .hackathon
            .verifiers
            .iter()
            .position(|v| v == &who)
            .ok_or(RegistryError::VerifierNotFound)?;

        // 4. Quorum Safety
        // The remaining set must still be able to reach the threshold
        require!(
            self.hackathon.verifier_count() - 1
                >= self.hackathon.required_signatures as usize,
            RegistryError::ThresholdViolation
        );

        self.hackathon.verifiers.remove(index);

        msg!(
            "Verifier {} removed from hackathon {}, count: {}",
            who,
            self.hackathon.hackathon_id,
            self.hackathon.verifier_count(),
        );

        Ok(())
    }
}
