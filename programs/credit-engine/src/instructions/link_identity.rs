use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Link Identity Instruction
//
// Binds an external account handle to the developer's on-chain
// identity and raises the verification flag on their credit line.
//
// The runtime already verifies the transaction's ed25519 signature
// over the instruction data against the developer key, which is
// exactly the required signature over (developer, handle, timestamp).
// The timestamp must fall inside a fixed freshness window to keep
// captured payloads from being replayed later.

#[derive(Accounts)]
pub struct LinkIdentity<'info> {
    #[account(mut)]
    pub developer: Signer<'info>,

    // Existing links are overwritten with the fresh handle
    #[account(
        init_if_needed,
        payer = developer,
        space = ANCHOR_DISCRIMINATOR + IdentityLink::INIT_SPACE,
        seeds = [IDENTITY, developer.key().as_ref()],
        bump,
    )]
    pub identity_link: Account<'info, IdentityLink>,

    #[account(
        mut,
        seeds = [CREDIT_LINE, developer.key().as_ref()],
        bump = credit_line.bump,
        constraint = credit_line.developer == developer.key()
            @ CreditEngineError::InvalidDeveloper,
    )]
    pub credit_line: Account<'info, CreditLine>,

    pub system_program: Program<'info, System>,
}

impl<'info> LinkIdentity<'info> {
    pub fn link_identity(
        &mut self,
        handle: String,
        timestamp: i64,
        bumps: &LinkIdentityBumps,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Handle Validation
        require!(
            !handle.is_empty() && handle.len() <= MAX_HANDLE_LEN,
            CreditEngineError::InvalidHandle
        );

        // 2. Freshness Window
        // Rejects stale payloads and clocks too far ahead
        let now = Clock::get()?.unix_timestamp;
        require!(
            (now - timestamp).abs() <= LINK_TIMESTAMP_WINDOW,
            CreditEngineError::StaleLinkTimestamp
        );

        self.identity_link.set_inner(IdentityLink {
            developer: self.developer.key(),
            handle,
            linked_at: now,
            bump: bumps.identity_link,
        });

        self.credit_line.verified = true;

        emit!(IdentityLinked {
            developer: self.developer.key(),
            linked_at: now,
        });

        msg!("Identity linked for {}", self.developer.key());
        Ok(())
    }
}
