use anchor_lang::prelude::*;
use crate::{constants::*, state::*};

// Initialize Registry Instruction
//
// Creates the singleton RegistryConfig PDA.
// The signer becomes the platform admin.

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    // Registry config PDA
    // Seeds: ["registry"]
    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + RegistryConfig::INIT_SPACE,
        seeds = [REGISTRY],
        bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeRegistry<'info> {
    pub fn initialize_registry(&mut self, bumps: &InitializeRegistryBumps) -> Result<()> {
        self.registry_config.set_inner(RegistryConfig {
            admin: self.admin.key(),
            hackathon_count: 0,
            paused: false,
            bump: bumps.registry_config,
        });

        msg!("Registry initialized, admin: {}", self.admin.key());
        Ok(())
    }
}
