use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{constants::*, errors::*, state::*};

// Initialize Treasury Instruction
//
// Creates the protocol vault: the associated token account of the
// funding mint owned by the vault-authority PDA. All disbursements
// and repayments flow through this account.

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [ENGINE],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,

    /// CHECK: PDA used only as a signing authority, never read
    #[account(
        seeds = [VAULT_AUTHORITY],
        bump = config.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        address = config.funding_mint @ CreditEngineError::InvalidFundingMint
    )]
    pub funding_mint: Account<'info, Mint>,

    // Protocol vault - holds the funding token
    #[account(
        init,
        payer = payer,
        associated_token::mint = funding_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeTreasury<'info> {
    pub fn initialize_treasury(&mut self) -> Result<()> {
        msg!("Vault created: {}", self.vault.key());
        Ok(())
    }
}
