use anchor_lang::prelude::*;
use crate::constants::*;
use super::credit_line::CreditLine;

// Factor names recognized by the combiner
pub const FACTOR_REPAYMENT_HISTORY: &str = "Repayment History";
pub const FACTOR_PROJECT_COMPLETION: &str = "Project Completion";
pub const FACTOR_EXTERNAL_REPUTATION: &str = "External Reputation";

// Token units of lifetime repayment worth one repayment-history point
pub const REPAYMENT_SCORE_UNIT: u64 = 100;

// Each factor subscore is normalized to 0..=100 before weighting
pub const SUBSCORE_CAP: u64 = 100;

// One named, weighted credit factor
// Weights are relative - they need not sum to 100
#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace)]
pub struct CreditFactor {
    #[max_len(MAX_FACTOR_NAME_LEN)]
    pub name: String,
    pub weight: u16,
}

// Scoring configuration account
// Seeded with default factors at engine initialization
#[account]
#[derive(InitSpace)]
pub struct ScoreWeights {
    #[max_len(MAX_FACTORS)]
    pub factors: Vec<CreditFactor>,

    // PDA bump seed
    pub bump: u8,
}

impl ScoreWeights {
    pub fn default_factors() -> Vec<CreditFactor> {
        vec![
            CreditFactor {
                name: FACTOR_REPAYMENT_HISTORY.to_string(),
                weight: 40,
            },
            CreditFactor {
                name: FACTOR_PROJECT_COMPLETION.to_string(),
                weight: 35,
            },
            CreditFactor {
                name: FACTOR_EXTERNAL_REPUTATION.to_string(),
                weight: 25,
            },
        ]
    }

    pub fn factor_weight(&self, name: &str) -> u64 {
        self.factors
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.weight as u64)
            .unwrap_or(0)
    }

    // Combined weighted score for a credit line
    // Pure function of (line, weights); returns (score, verified)
    pub fn get_credit_score(&self, line: &CreditLine) -> (u64, bool) {
        let repayment = (line.total_repaid / REPAYMENT_SCORE_UNIT).min(SUBSCORE_CAP);
        let completion = line.reputation.min(SUBSCORE_CAP);
        let external = if line.verified { SUBSCORE_CAP } else { 0 };

        let weighted = repayment * self.factor_weight(FACTOR_REPAYMENT_HISTORY)
            + completion * self.factor_weight(FACTOR_PROJECT_COMPLETION)
            + external * self.factor_weight(FACTOR_EXTERNAL_REPUTATION);

        let total_weight: u64 = self.factors.iter().map(|f| f.weight as u64).sum();
        if total_weight == 0 {
            return (0, line.verified);
        }

        (weighted / total_weight, line.verified)
    }
}

// Binding of an external account handle to the developer identity
// Written by link_identity after signature and freshness checks
#[account]
#[derive(InitSpace)]
pub struct IdentityLink {
    pub developer: Pubkey,

    #[max_len(MAX_HANDLE_LEN)]
    pub handle: String,

    pub linked_at: i64,

    // PDA bump seed
    pub bump: u8,
}
