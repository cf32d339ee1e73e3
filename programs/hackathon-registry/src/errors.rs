use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    // Input validation errors
    #[msg("Hackathon name is empty or exceeds 32 bytes")]
    InvalidName,

    #[msg("Start time must be strictly before end time")]
    InvalidTimeRange,

    #[msg("Required signatures must be at least 1")]
    InvalidThreshold,

    #[msg("Initial verifier list contains a duplicate address")]
    DuplicateVerifier,

    #[msg("Maximum number of verifiers reached")]
    TooManyVerifiers,

    // Authorization errors
    #[msg("Caller is not the hackathon organizer or registry admin")]
    NotOrganizerOrAdmin,

    #[msg("Only the registry admin can perform this action")]
    OnlyAdmin,

    #[msg("Creator must be the organizer or the registry admin")]
    CreatorNotAuthorized,

    // Quorum safety errors
    #[msg("Operation would drop the verifier count below the required signatures")]
    ThresholdViolation,

    #[msg("Address is not a verifier for this hackathon")]
    VerifierNotFound,

    // State errors
    #[msg("Registry is paused")]
    RegistryPaused,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,
}
