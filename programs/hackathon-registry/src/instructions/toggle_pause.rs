use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::*};

// Toggle Pause Instruction
//
// Emergency brake for the whole registry.
// While paused, every mutating operation is blocked.
// Admin only.

#[derive(Accounts)]
pub struct TogglePause<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,
}

impl<'info> TogglePause<'info> {
    pub fn toggle_pause(&mut self) -> Result<()> {
        require!(
            self.registry_config.is_admin(&self.admin.key()),
            RegistryError::OnlyAdmin
        );

        self.registry_config.paused = !self.registry_config.paused;

        msg!("Registry paused: {}", self.registry_config.paused);
        Ok(())
    }
}
