use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Update Credit Parameters Instruction
//
// Atomic triple update of the funding formula. All three constants
// change together in one transaction and the new values are emitted
// for auditability.

#[derive(Accounts)]
pub struct UpdateCreditParameters<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,
}

impl<'info> UpdateCreditParameters<'info> {
    pub fn update_credit_parameters(
        &mut self,
        base_amount: u64,
        per_point_multiplier: u64,
        max_amount: u64,
    ) -> Result<()> {
        require!(
            self.config.is_admin(&self.admin.key()),
            CreditEngineError::OnlyAdmin
        );
        require!(
            base_amount <= max_amount && per_point_multiplier > 0,
            CreditEngineError::InvalidCreditParameters
        );

        self.config.base_amount = base_amount;
        self.config.per_point_multiplier = per_point_multiplier;
        self.config.max_amount = max_amount;

        emit!(CreditParametersUpdated {
            base_amount,
            per_point_multiplier,
            max_amount,
        });

        msg!(
            "Credit parameters updated: base {}, multiplier {}, max {}",
            base_amount,
            per_point_multiplier,
            max_amount,
        );

        Ok(())
    }
}
