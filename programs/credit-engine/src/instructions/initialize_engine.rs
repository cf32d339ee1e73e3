use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::{constants::*, errors::*, state::*};

// Initialize Engine Instruction
//
// Creates the EngineConfig and the ScoreWeights PDAs.
// The signer becomes the engine admin; the treasury role and the
// credit formula parameters are set here. The registry pointer
// starts at the hackathon-registry program id.

#[derive(Accounts)]
pub struct InitializeEngine<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    // Engine config PDA
    // Seeds: ["engine"]
    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + EngineConfig::INIT_SPACE,
        seeds = [ENGINE],
        bump,
    )]
    pub config: Account<'info, EngineConfig>,

    // Scoring config PDA, seeded with the default factors
    // Seeds: ["score_weights"]
    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + ScoreWeights::INIT_SPACE,
        seeds = [SCORE_WEIGHTS],
        bump,
    )]
    pub score_weights: Account<'info, ScoreWeights>,

    // Vault authority PDA - signs vault transfers later
    // Seeds: ["vault_authority"]
    /// CHECK: PDA used only as a signing authority, never read
    #[account(
        seeds = [VAULT_AUTHORITY],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    // SPL mint of the funding token
    pub funding_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeEngine<'info> {
    pub fn initialize_engine(
        &mut self,
        treasury: Pubkey,
        base_amount: u64,
        per_point_multiplier: u64,
        max_amount: u64,
        bumps: &InitializeEngineBumps,
    ) -> Result<()> {
        require!(
            base_amount <= max_amount && per_point_multiplier > 0,
            CreditEngineError::InvalidCreditParameters
        );

        self.config.set_inner(EngineConfig {
            admin: self.admin.key(),
            treasury,
            registry: hackathon_registry::ID,
            funding_mint: self.funding_mint.key(),
            base_amount,
            per_point_multiplier,
            max_amount,
            project_count: 0,
            paused: false,
            bump: bumps.config,
            vault_authority_bump: bumps.vault_authority,
        });

        self.score_weights.set_inner(ScoreWeights {
            factors: ScoreWeights::default_factors(),
            bump: bumps.score_weights,
        });

        msg!(
            "Engine initialized, admin: {}, base: {}, multiplier: {}, max: {}",
            self.admin.key(),
            base_amount,
            per_point_multiplier,
            max_amount,
        );

        Ok(())
    }
}
