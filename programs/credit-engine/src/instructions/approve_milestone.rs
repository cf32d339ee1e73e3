use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Approve Milestone Instruction
//
// A hackathon verifier approves one milestone. Approvals are counted
// as set cardinality, so arrival order is irrelevant. Crossing the
// hackathon's required-signatures threshold atomically:
// - marks the milestone completed (terminal),
// - bumps the completed counter and the developer's reputation,
// - deactivates the project once every milestone is done,
// - disburses the milestone amount from the vault to the developer.
//
// used_amount is NOT reduced here - it tracks extended credit and
// only comes down through repayment.
//
// All internal state is finalized before the token CPI so a
// reentrant transfer hook can never observe a half-applied quorum.

#[derive(Accounts)]
pub struct ApproveMilestone<'info> {
    #[account(mut)]
    pub verifier: Signer<'info>,

    #[account(
        seeds = [ENGINE],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,

    // Hackathon account owned by the configured registry program
    /// CHECK: Owner and discriminator validated in load_hackathon
    pub hackathon: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [
            PROJECT,
            &project.project_id.to_le_bytes(),
        ],
        bump = project.bump,
        constraint = project.hackathon == hackathon.key()
            @ CreditEngineError::InvalidHackathonAccount,
    )]
    pub project: Account<'info, Project>,

    #[account(
        mut,
        seeds = [CREDIT_LINE, project.developer.as_ref()],
        bump = credit_line.bump,
    )]
    pub credit_line: Account<'info, CreditLine>,

    // Developer receiving the disbursement
    /// CHECK: Validated against project.developer
    #[account(
        address = project.developer @ CreditEngineError::InvalidDeveloper
    )]
    pub developer: UncheckedAccount<'info>,

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

    // Protocol vault (source of the disbursement)
    #[account(
        mut,
        associated_token::mint = funding_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault: Account<'info, TokenAccount>,

    // Developer token account (destination), created if missing
    #[account(
        init_if_needed,
        payer = verifier,
        associated_token::mint = funding_mint,
        associated_token::authority = developer,
    )]
    pub developer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> ApproveMilestone<'info> {
    pub fn approve_milestone(&mut self, milestone_index: u8) -> Result<()> {
        // SECURITY CHECKS

        // 1. Pause Check
        require!(!self.config.paused, CreditEngineError::EnginePaused);

        // 2. Verifier Capability Check
        // is_verifier reports false for inactive hackathons, which is
        // the registry's soft-disable gate on disbursement
        let hackathon = load_hackathon(
            &self.hackathon.to_account_info(),
            &self.config.registry,
        )?;
        require!(
            hackathon.is_verifier(&self.verifier.key()),
            CreditEngineError::NotAuthorizedVerifier
        );

        // 3. Project State Check
        require!(self.project.active, CreditEngineError::ProjectInactive);

        // 4. Milestone Existence Check
        let index = milestone_index as usize;
        require!(
            index < self.project.milestone_count(),
            CreditEngineError::MilestoneNotFound
        );

        // 5. Terminal State Check
        // pending -> completed happens exactly once, no reversal
        require!(
            !self.project.milestones[index].completed,
            CreditEngineError::MilestoneAlreadyCompleted
        );

        // 6. Duplicate Approval Check
        require!(
            !self.project.milestones[index].has_approved(&self.verifier.key()),
            CreditEngineError::DuplicateApproval
        );

        // 7. Record Approval
        self.project.milestones[index].approvals.push(self.verifier.key());
        let approval_count = self.project.milestones[index].approval_count();

        msg!(
            "Milestone {} of project {} approved by {}, {}/{}",
            milestone_index,
            self.project.project_id,
            self.verifier.key(),
            approval_count,
            hackathon.required_signatures,
        );

        // Below quorum: approval recorded, nothing else happens
        if approval_count < hackathon.required_signatures as usize {
            return Ok(());
        }

        // QUORUM CROSSED - complete and disburse atomically

        // 8. Vault Balance Re-Check
        // Balances are not reserved per-project at request time, so
        // availability must be proven again at disbursement time
        let amount = self.project.milestones[index].amount;
        require!(
            self.vault.amount >= amount,
            CreditEngineError::InsufficientProtocolBalance
        );

        // 9. Finalize Internal State Before The Transfer
        self.project.milestones[index].completed = true;
        self.project.milestones_completed = self
            .project
            .milestones_completed
            .checked_add(1)
            .ok_or(CreditEngineError::Overflow)?;
        if self.project.all_milestones_completed() {
            self.project.active = false;
        }

        self.credit_line.reputation = self
            .credit_line
            .reputation
            .checked_add(REPUTATION_STEP)
            .ok_or(CreditEngineError::Overflow)?;

        // 10. Disburse From The Vault
        let signer_seeds: &[&[&[u8]]] = &[&[
            VAULT_AUTHORITY,
            &[self.config.vault_authority_bump],
        ]];

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.developer_token_account.to_account_info(),
                    authority: self.vault_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        emit!(MilestoneCompleted {
            project_id: self.project.project_id,
            milestone_index,
            amount,
            approval_count: approval_count as u8,
            developer: self.project.developer,
        });

        msg!(
            "Milestone {} of project {} completed, {} disbursed to {}",
            milestone_index,
            self.project.project_id,
            amount,
            self.project.developer,
        );

        Ok(())
    }
}
