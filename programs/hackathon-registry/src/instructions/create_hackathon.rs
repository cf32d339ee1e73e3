use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::*};

// Create Hackathon Instruction
//
// Registers a new hackathon with:
// - An initial verifier set (membership is the capability grant)
// - A required-signatures quorum threshold
// - An event time window
//
// Ids are sequential, assigned from RegistryConfig.hackathon_count.
// A name-seeded marker PDA enforces global name uniqueness.

#[derive(Accounts)]
#[instruction(name: String)]
pub struct CreateHackathon<'info> {
    // Creator - must be the named organizer or the registry admin
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    // Hackathon account PDA
    // Seeds: ["hackathon", hackathon_count]
    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Hackathon::INIT_SPACE,
        seeds = [
            HACKATHON,
            &registry_config.hackathon_count.to_le_bytes(),
        ],
        bump,
    )]
    pub hackathon: Account<'info, Hackathon>,

    // Name marker PDA - init fails if the name was already taken
    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + HackathonName::INIT_SPACE,
        seeds = [HACKATHON_NAME, name.as_bytes()],
        bump,
    )]
    pub hackathon_name: Account<'info, HackathonName>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateHackathon<'info> {
    pub fn create_hackathon(
        &mut self,
        name: String,
        organizer: Pubkey,
        initial_verifiers: Vec<Pubkey>,
        required_signatures: u8,
        start_time: i64,
        end_time: i64,
        bumps: &CreateHackathonBumps,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Pause Check
        require!(!self.registry_config.paused, RegistryError::RegistryPaused);

        // 2. Creator Authorization
        // Only the organizer themselves or the platform admin may register
        require!(
            self.creator.key() == organizer
                || self.registry_config.is_admin(&self.creator.key()),
            RegistryError::CreatorNotAuthorized
        );

        // 3. Name Validation
        // Non-empty, and within the 32-byte PDA seed cap
        require!(
            !name.is_empty() && name.len() <= MAX_NAME_LEN,
            RegistryError::InvalidName
        );

        // 4. Time Range Validation
        require!(start_time < end_time, RegistryError::InvalidTimeRange);

        // 5. Threshold Validation
        // At least one approval required, and the initial set must be
        // large enough to ever reach quorum
        require!(required_signatures >= 1, RegistryError::InvalidThreshold);
        require!(
            initial_verifiers.len() >= required_signatures as usize,
            RegistryError::ThresholdViolation
        );
        require!(
            initial_verifiers.len() <= MAX_VERIFIERS,
            RegistryError::TooManyVerifiers
        );

        // 6. Duplicate Verifier Check
        // Quorum counting is set cardinality; duplicates would inflate it
        for (i, v) in initial_verifiers.iter().enumerate() {
            require!(
                !initial_verifiers[..i].contains(v),
                RegistryError::DuplicateVerifier
            );
        }

        let hackathon_id = self.registry_config.hackathon_count;

        self.hackathon.set_inner(Hackathon {
            hackathon_id,
            name,
            organizer,
            verifiers: initial_verifiers,
            required_signatures,
            start_time,
            end_time,
            active: true,
            bump: bumps.hackathon,
        });

        self.hackathon_name.set_inner(HackathonName {
            hackathon: self.hackathon.key(),
            bump: bumps.hackathon_name,
        });

        self.registry_config.hackathon_count = self
            .registry_config
            .hackathon_count
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;

        msg!(
            "Hackathon {} created, organizer: {}, verifiers: {}, required signatures: {}",
            hackathon_id,
            organizer,
            self.hackathon.verifier_count(),
            required_signatures,
        );

        Ok(())
    }
}
