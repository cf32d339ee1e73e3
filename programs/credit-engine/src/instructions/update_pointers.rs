use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::*};

// Admin-only pointer swaps on the engine config:
// the registry program the engine trusts for hackathon accounts,
// and the funding-token mint.
//
// Swapping the mint does not migrate balances; initialize a new
// vault for the new mint with initialize_treasury afterwards.

#[derive(Accounts)]
pub struct UpdatePointers<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,
}

impl<'info> UpdatePointers<'info> {
    pub fn update_registry(&mut self, new_registry: Pubkey) -> Result<()> {
        require!(
            self.config.is_admin(&self.admin.key()),
            CreditEngineError::OnlyAdmin
        );

        self.config.registry = new_registry;

        msg!("Registry pointer updated: {}", new_registry);
        Ok(())
    }

    pub fn update_funding_token(&mut self, new_mint: Pubkey) -> Result<()> {
        require!(
            self.config.is_admin(&self.admin.key()),
            CreditEngineError::OnlyAdmin
        );

        self.config.funding_mint = new_mint;

        msg!("Funding mint updated: {}", new_mint);
        Ok(())
    }
}
