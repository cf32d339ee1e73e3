use anchor_lang::prelude::*;

#[error_code]
pub enum CreditEngineError {
    // Input validation errors
    #[msg("Milestone descriptions and amounts have different lengths")]
    MismatchedMilestones,

    #[msg("A project needs between 1 and 8 milestones")]
    TooManyMilestones,

    #[msg("Milestone amounts must be positive")]
    InvalidMilestoneAmount,

    #[msg("Project name or metadata URL is empty or too long")]
    InvalidProjectMetadata,

    #[msg("Amount must be positive")]
    InvalidAmount,

    #[msg("Base amount must not exceed max amount and multiplier must be positive")]
    InvalidCreditParameters,

    #[msg("Handle is empty or exceeds 64 bytes")]
    InvalidHandle,

    #[msg("Factor name is empty or exceeds 32 bytes")]
    InvalidFactorName,

    #[msg("Maximum number of credit factors reached")]
    TooManyFactors,

    // Credit policy errors
    #[msg("Reputation score is below the minimum floor")]
    CreditScoreTooLow,

    #[msg("Requested funding exceeds the available credit limit")]
    CreditLimitExceeded,

    #[msg("Repayment exceeds the outstanding used amount")]
    RepaymentExceedsActiveLoan,

    // Authorization errors
    #[msg("Caller is not a verifier for this hackathon")]
    NotAuthorizedVerifier,

    #[msg("Only the engine admin can perform this action")]
    OnlyAdmin,

    #[msg("Only the treasury can withdraw protocol funds")]
    NotTreasury,

    // Milestone state errors
    #[msg("Milestone index is out of range")]
    MilestoneNotFound,

    #[msg("Milestone is already completed")]
    MilestoneAlreadyCompleted,

    #[msg("Verifier has already approved this milestone")]
    DuplicateApproval,

    #[msg("Project is no longer active")]
    ProjectInactive,

    // Registry boundary errors
    #[msg("Hackathon account is not owned by the configured registry")]
    InvalidHackathonAccount,

    #[msg("Hackathon is not active")]
    HackathonInactive,

    #[msg("Token account does not match the configured funding mint")]
    InvalidFundingMint,

    #[msg("Account does not match the project's developer")]
    InvalidDeveloper,

    // Settlement errors
    #[msg("Protocol vault cannot fund this disbursement")]
    InsufficientProtocolBalance,

    // Identity linking errors
    #[msg("Link timestamp is outside the accepted window")]
    StaleLinkTimestamp,

    // State errors
    #[msg("Credit engine is paused")]
    EnginePaused,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,
}
