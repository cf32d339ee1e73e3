use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::{constants::*, errors::*, events::*, state::*};

// Repay Loan Instruction
//
// The developer returns funding-token units to the vault, reducing
// used_amount. Reaching zero applies a one-time reputation bonus and
// leaves the credit line open for future requests.
//
// Deliberately NOT gated on the engine pause: pausing halts the
// extension of new credit and disbursement, never the return of
// funds to the protocol.

#[derive(Accounts)]
pub struct RepayLoan<'info> {
    #[account(mut)]
    pub developer: Signer<'info>,

    #[account(
        seeds = [ENGINE],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,

    #[account(
        mut,
        seeds = [CREDIT_LINE, developer.key().as_ref()],
        bump = credit_line.bump,
        constraint = credit_line.developer == developer.key()
            @ CreditEngineError::InvalidDeveloper,
    )]
    pub credit_line: Account<'info, CreditLine>,

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

    // Protocol vault (destination)
    #[account(
        mut,
        associated_token::mint = funding_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault: Account<'info, TokenAccount>,

    // Developer token account (source of the repayment)
    #[account(
        mut,
        associated_token::mint = funding_mint,
        associated_token::authority = developer,
    )]
    pub developer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> RepayLoan<'info> {
    pub fn repay_loan(&mut self, amount: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Amount Validation
        require!(amount > 0, CreditEngineError::InvalidAmount);

        // 2. Repayment Boundary
        require!(
            amount <= self.credit_line.used_amount,
            CreditEngineError::RepaymentExceedsActiveLoan
        );

        // 3. Pull The Repayment Into The Vault
        token::transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.developer_token_account.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.developer.to_account_info(),
                },
            ),
            amount,
        )?;

        // 4. Update The Credit Line
        self.credit_line.used_amount = self
            .credit_line
            .used_amount
            .checked_sub(amount)
            .ok_or(CreditEngineError::Overflow)?;
        self.credit_line.total_repaid = self
            .credit_line
            .total_repaid
            .checked_add(amount)
            .ok_or(CreditEngineError::Overflow)?;

        // One-time bonus on reaching zero; the line stays open
        if self.credit_line.is_fully_repaid() {
            self.credit_line.reputation = self
                .credit_line
                .reputation
                .checked_add(FULL_REPAYMENT_BONUS)
                .ok_or(CreditEngineError::Overflow)?;
            msg!(
                "Credit line of {} fully repaid, reputation: {}",
                self.developer.key(),
                self.credit_line.reputation,
            );
        }

        emit!(LoanRepaid {
            developer: self.developer.key(),
            amount,
            remaining_used: self.credit_line.used_amount,
        });

        Ok(())
    }
}
