use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::{constants::*, errors::*, state::*};

// Withdraw Funds Instruction
//
// Treasury role only: moves funding-token units out of the
// protocol vault to the treasury's token account.

#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    #[account(mut)]
    pub treasury: Signer<'info>,

    #[account(
        seeds = [ENGINE],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,

    #[account(
        address = config.funding_mint @ CreditEngineError::InvalidFundingMint
    )]
    pub funding_mint: Account<'info, Mint>,

    /// CHECK: PDA used only as a signing authority, never read
    #[account(
        seeds = [VAULT_AUTHORITY],
        bump = config.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = funding_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = funding_mint,
        associated_token::authority = treasury,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> WithdrawFunds<'info> {
    pub fn withdraw_funds(&mut self, amount: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Treasury Role Check
        require!(
            self.config.is_treasury(&self.treasury.key()),
            CreditEngineError::NotTreasury
        );

        // 2. Amount Validation
        require!(amount > 0, CreditEngineError::InvalidAmount);
        require!(
            self.vault.amount >= amount,
            CreditEngineError::InsufficientProtocolBalance
        );

        let signer_seeds: &[&[&[u8]]] = &[&[
            VAULT_AUTHORITY,
            &[self.config.vault_authority_bump],
        ]];

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.treasury_token_account.to_account_info(),
                    authority: self.vault_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        msg!("Treasury withdrew {} from the vault", amount);
        Ok(())
    }
}
