use anchor_lang::prelude::*;
use hackathon_registry::state::Hackathon;
use crate::errors::CreditEngineError;

// Deserialize a hackathon account owned by the configured registry.
//
// The registry pointer is admin-swappable, so the account is taken
// untyped and validated manually: owner must match the pointer and
// the data must carry the Hackathon discriminator.
pub fn load_hackathon(info: &AccountInfo, expected_registry: &Pubkey) -> Result<Hackathon> {
    require_keys_eq!(
        *info.owner,
        *expected_registry,
        CreditEngineError::InvalidHackathonAccount
    );

    let data = info.try_borrow_data()?;
    Hackathon::try_deserialize(&mut &data[..])
        .map_err(|_| error!(CreditEngineError::InvalidHackathonAccount))
}
