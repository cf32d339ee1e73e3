use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Request Funding Instruction
//
// A developer opens a milestone-funded project against an active
// hackathon. Validates the request against the credit-limit formula,
// creates or extends the developer's credit line and records the
// milestones in pending state.
//
// No tokens move here - funding is escrow-on-completion.

#[derive(Accounts)]
pub struct RequestFunding<'info> {
    #[account(mut)]
    pub developer: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,

    // Hackathon account owned by the configured registry program
    /// CHECK: Owner and discriminator validated in load_hackathon
    pub hackathon: UncheckedAccount<'info>,

    // Developer's credit line, created on first request
    #[account(
        init_if_needed,
        payer = developer,
        space = ANCHOR_DISCRIMINATOR + CreditLine::INIT_SPACE,
        seeds = [CREDIT_LINE, developer.key().as_ref()],
        bump,
    )]
    pub credit_line: Account<'info, CreditLine>,

    // Project account PDA
    // Seeds: ["project", project_count]
    #[account(
        init,
        payer = developer,
        space = ANCHOR_DISCRIMINATOR + Project::INIT_SPACE,
        seeds = [
            PROJECT,
            &config.project_count.to_le_bytes(),
        ],
        bump,
    )]
    pub project: Account<'info, Project>,

    pub system_program: Program<'info, System>,
}

impl<'info> RequestFunding<'info> {
    pub fn request_funding(
        &mut self,
        reputation_score: u64,
        name: String,
        metadata_url: String,
        milestone_descriptions: Vec<String>,
        milestone_amounts: Vec<u64>,
        bumps: &RequestFundingBumps,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Pause Check
        require!(!self.config.paused, CreditEngineError::EnginePaused);

        // 2. Hackathon Validation
        // Owner check against the registry pointer + discriminator check,
        // then the active flag
        let hackathon = load_hackathon(
            &self.hackathon.to_account_info(),
            &self.config.registry,
        )?;
        require!(hackathon.active, CreditEngineError::HackathonInactive);

        // 3. Metadata Validation
        require!(
            !name.is_empty()
                && name.len() <= MAX_PROJECT_NAME_LEN
                && metadata_url.len() <= MAX_METADATA_URL_LEN,
            CreditEngineError::InvalidProjectMetadata
        );

        // 4. Milestone Shape Validation
        require!(
            milestone_descriptions.len() == milestone_amounts.len()
                && !milestone_amounts.is_empty(),
            CreditEngineError::MismatchedMilestones
        );
        require!(
            milestone_amounts.len() <= MAX_MILESTONES,
            CreditEngineError::TooManyMilestones
        );
        for description in &milestone_descriptions {
            require!(
                description.len() <= MAX_DESCRIPTION_LEN,
                CreditEngineError::InvalidProjectMetadata
            );
        }
        for &amount in &milestone_amounts {
            require!(amount > 0, CreditEngineError::InvalidMilestoneAmount);
        }

        // 5. Credit Score Floor
        require!(
            reputation_score >= MIN_CREDIT_SCORE,
            CreditEngineError::CreditScoreTooLow
        );

        // 6. Credit Limit Enforcement
        let total: u64 = milestone_amounts
            .iter()
            .try_fold(0u64, |acc, &a| acc.checked_add(a))
            .ok_or(CreditEngineError::Overflow)?;
        let limit = self.config.calculate_funding_amount(reputation_score);
        let new_used = self
            .credit_line
            .used_amount
            .checked_add(total)
            .ok_or(CreditEngineError::Overflow)?;
        require!(new_used <= limit, CreditEngineError::CreditLimitExceeded);

        // Create or extend the credit line
        // Reputation is seeded from the declared score only on first use
        let first_line = self.credit_line.developer == Pubkey::default();
        if first_line {
            self.credit_line.developer = self.developer.key();
            self.credit_line.reputation = reputation_score;
            self.credit_line.active = true;
            self.credit_line.bump = bumps.credit_line;
        }
        self.credit_line.total_limit = limit;
        self.credit_line.used_amount = new_used;

        // Record the project with all milestones pending
        let milestones: Vec<Milestone> = milestone_descriptions
            .into_iter()
            .zip(milestone_amounts.iter())
            .map(|(description, &amount)| Milestone {
                description,
                amount,
                completed: false,
                approvals: Vec::new(),
            })
            .collect();

        let project_id = self.config.project_count;
        let milestone_count = milestones.len() as u8;

        self.project.set_inner(Project {
            project_id,
            hackathon: self.hackathon.key(),
            hackathon_id: hackathon.hackathon_id,
            developer: self.developer.key(),
            name,
            metadata_url,
            funding_amount: total,
            milestones,
            milestones_completed: 0,
            active: true,
            bump: bumps.project,
        });

        self.config.project_count = self
            .config
            .project_count
            .checked_add(1)
            .ok_or(CreditEngineError::Overflow)?;

        emit!(ProjectCreated {
            project_id,
            hackathon_id: hackathon.hackathon_id,
            developer: self.developer.key(),
            funding_amount: total,
            milestone_count,
        });

        msg!(
            "Project {} created for {} with {} milestones, total {}",
            project_id,
            self.developer.key(),
            milestone_count,
            total,
        );

        Ok(())
    }
}
