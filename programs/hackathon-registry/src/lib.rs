use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;

declare_id!("9zQDZPNyDqVxevUAwaWTGGvCGwLSpfvkMn6aDKx7x6hz");

#[program]
pub mod hackathon_registry {
    use super::*;

    // Initialize the singleton registry config
    // Signer becomes the platform admin
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        ctx.accounts.initialize_registry(&ctx.bumps)
    }

    // Register a new hackathon with an initial verifier set,
    // quorum threshold and event window
    // Creator must be the named organizer or the registry admin
    pub fn create_hackathon(
        ctx: Context<CreateHackathon>,
        name: String,
        organizer: Pubkey,
        initial_verifiers: Vec<Pubkey>,
        required_signatures: u8,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        ctx.accounts.create_hackathon(
            name,
            organizer,
            initial_verifiers,
            required_signatures,
            start_time,
            end_time,
            &ctx.bumps,
        )
    }

    // Grant the verifier capability for one hackathon
    // Idempotent if the grant already exists
    pub fn add_verifier(ctx: Context<AddVerifier>, who: Pubkey) -> Result<()> {
        ctx.accounts.add_verifier(who)
    }

    // Revoke a verifier grant
    // Fails if removal would drop the set below the threshold
    pub fn remove_verifier(ctx: Context<RemoveVerifier>, who: Pubkey) -> Result<()> {
        ctx.accounts.remove_verifier(who)
    }

    // Change the quorum threshold
    // New value can never exceed the current verifier count
    pub fn set_required_signatures(ctx: Context<SetRequiredSignatures>, n: u8) -> Result<()> {
        ctx.accounts.set_required_signatures(n)
    }

    // Soft-disable switch - grants survive, capability checks report false
    pub fn set_hackathon_status(ctx: Context<SetHackathonStatus>, active: bool) -> Result<()> {
        ctx.accounts.set_hackathon_status(active)
    }

    // Pause/unpause all mutating registry operations
    // Admin only
    pub fn toggle_pause(ctx: Context<TogglePause>) -> Result<()> {
        ctx.accounts.toggle_pause()
    }
}
