// Pool Program Constants

pub const POOL_SEED: &[u8] = b"pool";
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";
pub const POOL_LP_MINT_SEED: &[u8] = b"pool_lp_mint";
pub const LP_MINT_DECIMALS: u8 = 9;
pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Status byte: bits 0..=2 are defined, bits 3..=7 are reserved
pub const POOL_STATUS_MAX: u8 = 0b111;
pub const POOL_STATUS_DEFAULT: u8 = 0;
