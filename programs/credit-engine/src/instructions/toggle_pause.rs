use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::*};

// Toggle Pause Instruction
//
// Emergency brake: blocks request_funding and approve_milestone.
// repay_loan stays available while paused (see RepayLoan).
// Admin only.

#[derive(Accounts)]
pub struct TogglePause<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,
}

impl<'info> TogglePause<'info> {
    pub fn toggle_pause(&mut self) -> Result<()> {
        require!(
            self.config.is_admin(&self.admin.key()),
            CreditEngineError::OnlyAdmin
        );

        self.config.paused = !self.config.paused;

        msg!("Engine paused: {}", self.config.paused);
        Ok(())
    }
}
