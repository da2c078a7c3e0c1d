// Pool Admin
//
// Status changes and fee recording are restricted to a single admin key.
// The localnet key has a publicly known secret and is only compiled in with
// the `localnet-admin` feature.

use anchor_lang::prelude::*;

use crate::errors::*;

pub const LOCALNET_ID: Pubkey = pubkey!("GmaDrppBC7P5ARKV8g3djiwP89vz1jLK23V2GBjuAEGB");

#[cfg(feature = "localnet-admin")]
pub const ID: Pubkey = LOCALNET_ID;

#[cfg(not(feature = "localnet-admin"))]
pub const ID: Pubkey = pubkey!("AKg4uNW6x8EEgjyBjh3YW4iwNWTPuCTWBBcgtkqzJuLT");

pub fn assert_is_admin(caller: &Pubkey) -> Result<()> {
    require_keys_eq!(*caller, ID, PoolError::UnauthorizedAccess);
    Ok(())
}
