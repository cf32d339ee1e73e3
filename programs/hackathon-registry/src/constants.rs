pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["registry"]
pub const REGISTRY: &[u8] = b"registry";

// Seeds for PDA derivation: ["hackathon", hackathon_id]
pub const HACKATHON: &[u8] = b"hackathon";

// Seeds for PDA derivation: ["hackathon_name", name]
// Marker account enforcing global name uniqueness
pub const HACKATHON_NAME: &[u8] = b"hackathon_name";

// Maximum number of verifiers per hackathon
pub const MAX_VERIFIERS: usize = 16;

// Maximum hackathon name length in bytes
// Names double as PDA seeds, which are capped at 32 bytes
pub const MAX_NAME_LEN: usize = 32;
