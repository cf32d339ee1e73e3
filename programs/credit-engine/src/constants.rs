pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["engine"]
pub const ENGINE: &[u8] = b"engine";

// Seeds for PDA derivation: ["vault_authority"]
// Signs vault token transfers for disbursement and withdrawal
pub const VAULT_AUTHORITY: &[u8] = b"vault_authority";

// Seeds for PDA derivation: ["credit_line", developer]
pub const CREDIT_LINE: &[u8] = b"credit_line";

// Seeds for PDA derivation: ["project", project_id]
pub const PROJECT: &[u8] = b"project";

// Seeds for PDA derivation: ["score_weights"]
pub const SCORE_WEIGHTS: &[u8] = b"score_weights";

// Seeds for PDA derivation: ["identity", developer]
pub const IDENTITY: &[u8] = b"identity";

// Maximum milestones per project
pub const MAX_MILESTONES: usize = 8;

// Maximum approvals tracked per milestone
// Matches the registry's verifier cap
pub const MAX_APPROVALS: usize = 16;

// Maximum credit factors in the scoring config
pub const MAX_FACTORS: usize = 8;

// String length caps
pub const MAX_PROJECT_NAME_LEN: usize = 64;
pub const MAX_METADATA_URL_LEN: usize = 128;
pub const MAX_DESCRIPTION_LEN: usize = 96;
pub const MAX_FACTOR_NAME_LEN: usize = 32;
pub const MAX_HANDLE_LEN: usize = 64;

// Minimum self-declared reputation score to open a funding request
pub const MIN_CREDIT_SCORE: u64 = 10;

// Reputation bump per completed milestone
pub const REPUTATION_STEP: u64 = 1;

// Reputation bonus when a credit line is fully repaid
pub const FULL_REPAYMENT_BONUS: u64 = 5;

// Identity-link signatures older (or newer) than this are rejected
pub const LINK_TIMESTAMP_WINDOW: i64 = 300;
