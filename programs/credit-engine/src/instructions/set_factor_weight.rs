use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::*};

// Set Factor Weight Instruction
//
// Updates the weight of a named credit factor, or appends a new
// factor if the name is unknown. Weights are relative.
// Admin only.

#[derive(Accounts)]
pub struct SetFactorWeight<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [ENGINE],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,

    #[account(
        mut,
        seeds = [SCORE_WEIGHTS],
        bump = score_weights.bump,
    )]
    pub score_weights: Account<'info, ScoreWeights>,
}

impl<'info> SetFactorWeight<'info> {
    pub fn set_factor_weight(&mut self, name: String, weight: u16) -> Result<()> {
        require!(
            self.config.is_admin(&self.admin.key()),
            CreditEngineError::OnlyAdmin
        );
        require!(
            !name.is_empty() && name.len() <= MAX_FACTOR_NAME_LEN,
            CreditEngineError::InvalidFactorName
        );

        if let Some(factor) = self
            .score_weights
            .factors
            .iter_mut()
            .find(|f| f.name == name)
        {
            factor.weight = weight;
        } else {
            require!(
                self.score_weights.factors.len() < MAX_FACTORS,
                CreditEngineError::TooManyFactors
            );
            self.score_weights.factors.push(CreditFactor { name: name.clone(), weight });
        }

        msg!("Credit factor '{}' weight set to {}", name, weight);
        Ok(())
    }
}
