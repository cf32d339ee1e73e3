use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("45gVbLLSYYcW254TFoJMXmfupM5dJaFxTLsbny2eqKWx");

#[program]
pub mod credit_engine {
    use super::*;

    // Create the engine config and scoring defaults
    // Signer becomes admin; treasury role and formula set here
    pub fn initialize_engine(
        ctx: Context<InitializeEngine>,
        treasury: Pubkey,
        base_amount: u64,
        per_point_multiplier: u64,
        max_amount: u64,
    ) -> Result<()> {
        ctx.accounts.initialize_engine(
            treasury,
            base_amount,
            per_point_multiplier,
            max_amount,
            &ctx.bumps,
        )
    }

    // Create the protocol vault for the funding token
    pub fn initialize_treasury(ctx: Context<InitializeTreasury>) -> Result<()> {
        ctx.accounts.initialize_treasury()
    }

    // Open a milestone-funded project against an active hackathon
    // Creates or extends the developer's credit line; no tokens move
    pub fn request_funding(
        ctx: Context<RequestFunding>,
        reputation_score: u64,
        name: String,
        metadata_url: String,
        milestone_descriptions: Vec<String>,
        milestone_amounts: Vec<u64>,
    ) -> Result<()> {
        ctx.accounts.request_funding(
            reputation_score,
            name,
            metadata_url,
            milestone_descriptions,
            milestone_amounts,
            &ctx.bumps,
        )
    }

    // Verifier approval per milestone; crossing the hackathon's
    // threshold completes the milestone and disburses atomically
    pub fn approve_milestone(ctx: Context<ApproveMilestone>, milestone_index: u8) -> Result<()> {
        ctx.accounts.approve_milestone(milestone_index)
    }

    // Return funding-token units, reducing the outstanding used amount
    // Full repayment applies a one-time reputation bonus
    pub fn repay_loan(ctx: Context<RepayLoan>, amount: u64) -> Result<()> {
        ctx.accounts.repay_loan(amount)
    }

    // Atomic triple update of the funding formula
    // Admin only; emits the new values
    pub fn update_credit_parameters(
        ctx: Context<UpdateCreditParameters>,
        base_amount: u64,
        per_point_multiplier: u64,
        max_amount: u64,
    ) -> Result<()> {
        ctx.accounts
            .update_credit_parameters(base_amount, per_point_multiplier, max_amount)
    }

    // Update or append a named credit factor weight
    // Admin only
    pub fn set_factor_weight(
        ctx: Context<SetFactorWeight>,
        name: String,
        weight: u16,
    ) -> Result<()> {
        ctx.accounts.set_factor_weight(name, weight)
    }

    // Bind an external handle to the developer identity
    // Raises the verification flag on the credit line
    pub fn link_identity(
        ctx: Context<LinkIdentity>,
        handle: String,
        timestamp: i64,
    ) -> Result<()> {
        ctx.accounts.link_identity(handle, timestamp, &ctx.bumps)
    }

    // Move vault funds to the treasury
    // Treasury role only
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_funds(amount)
    }

    // Pause/unpause request_funding and approve_milestone
    // Admin only
    pub fn toggle_pause(ctx: Context<TogglePause>) -> Result<()> {
        ctx.accounts.toggle_pause()
    }

    // Swap the trusted registry program pointer
    // Admin only
    pub fn update_registry(ctx: Context<UpdatePointers>, new_registry: Pubkey) -> Result<()> {
        ctx.accounts.update_registry(new_registry)
    }

    // Swap the funding token mint pointer
    // Admin only
    pub fn update_funding_token(ctx: Context<UpdatePointers>, new_mint: Pubkey) -> Result<()> {
        ctx.accounts.update_funding_token(new_mint)
    }
}
