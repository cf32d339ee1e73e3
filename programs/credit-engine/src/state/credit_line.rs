use anchor_lang::prelude::*;

// Per-developer credit line
// Persistent across projects; used_amount tracks total extended
// credit and only comes down through repayment
#[account]
#[derive(InitSpace)]
pub struct CreditLine {
    pub developer: Pubkey,

    // Credit limit derived from reputation via the engine formula
    pub total_limit: u64,

    // Outstanding extended credit
    // Invariant: used_amount <= total_limit
    pub used_amount: u64,

    // Cumulative lifetime repayments
    pub total_repaid: u64,

    // Integer reputation score, adjusted by protocol events
    pub reputation: u64,

    // Raised by identity linking
    pub verified: bool,

    // Stays true after full repayment - the line remains open
    pub active: bool,

    // PDA bump seed
    pub bump: u8,
}

impl CreditLine {
    pub fn available_credit(&self) -> u64 {
        self.total_limit.saturating_sub(self.used_amount)
    }

    pub fn is_fully_repaid(&self) -> bool {
        self.used_amount == 0
    }
}
