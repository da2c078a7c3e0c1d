// Pool State
//
// Persistent record of one constant product pool. Field order is the on-chain
// layout and must not change; new fields come out of `padding`.
//
// Every mutator validates first and writes last, so a failed call leaves the
// record exactly as it was loaded.

use anchor_lang::prelude::*;

use crate::errors::*;

use super::{EpochSource, FeeDeltas, FeeTotals, PoolStatusBit, StatusFlags};

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct PoolState {
    pub amm_config: Pubkey,        // Config this pool was created under
    pub token_0_mint: Pubkey,
    pub token_1_mint: Pubkey,
    pub lp_mint: Pubkey,
    pub token_0_vault: Pubkey,     // Owned by the pool authority PDA
    pub token_1_vault: Pubkey,
    pub mint_0_decimals: u8,
    pub mint_1_decimals: u8,

    // Packed StatusFlags, always <= POOL_STATUS_MAX
    pub status: u8,

    pub lp_supply: u64,
    pub protocol_fees_token_0: u64,
    pub protocol_fees_token_1: u64,
    pub fund_fees_token_0: u64,
    pub fund_fees_token_1: u64,

    pub open_time: u64,            // Unix timestamp trading opens at
    pub recent_epoch: u64,         // Epoch of the last fee-affecting write

    pub bump: u8,                  // Canonical bump of the pool state PDA

    pub padding: [u8; 247],
}

// Accounts a pool is built from, checked before anything is written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolIdentity {
    pub amm_config: Pubkey,
    pub token_0_mint: Pubkey,
    pub token_1_mint: Pubkey,
    pub lp_mint: Pubkey,
    pub token_0_vault: Pubkey,
    pub token_1_vault: Pubkey,
    pub mint_0_decimals: u8,
    pub mint_1_decimals: u8,
}

impl PoolIdentity {
    // Mints, vaults and the LP mint must all be different accounts
    pub fn validate(&self) -> Result<()> {
        let accounts = [
            self.token_0_mint,
            self.token_1_mint,
            self.lp_mint,
            self.token_0_vault,
            self.token_1_vault,
        ];

        for (i, a) in accounts.iter().enumerate() {
            for b in accounts.iter().skip(i + 1) {
                require_keys_neq!(*a, *b, PoolError::InvalidInput);
            }
        }

        Ok(())
    }
}

impl PoolState {
    pub fn initialize(
        identity: PoolIdentity,
        bump: u8,
        open_time: u64,
        epoch_source: &impl EpochSource,
    ) -> Result<PoolState> {
        identity.validate()?;
        let recent_epoch = epoch_source.current_epoch()?;

        Ok(PoolState {
            amm_config: identity.amm_config,
            token_0_mint: identity.token_0_mint,
            token_1_mint: identity.token_1_mint,
            lp_mint: identity.lp_mint,
            token_0_vault: identity.token_0_vault,
            token_1_vault: identity.token_1_vault,
            mint_0_decimals: identity.mint_0_decimals,
            mint_1_decimals: identity.mint_1_decimals,
            status: StatusFlags::NONE.bits(),
            lp_supply: 0,
            protocol_fees_token_0: 0,
            protocol_fees_token_1: 0,
            fund_fees_token_0: 0,
            fund_fees_token_1: 0,
            open_time,
            recent_epoch,
            bump,
            padding: [0u8; 247],
        })
    }

    // STATUS

    pub fn set_status(&mut self, status: u8) -> Result<()> {
        let flags = StatusFlags::from_bits(status)?;
        self.status = flags.bits();
        Ok(())
    }

    pub fn set_status_bit(&mut self, bit: PoolStatusBit, disabled: bool) -> Result<()> {
        let current = self.status_flags()?;
        self.status = current.with(bit, disabled).bits();
        Ok(())
    }

    // Rejects a loaded record whose status byte has reserved bits set
    pub fn status_flags(&self) -> Result<StatusFlags> {
        StatusFlags::from_bits(self.status)
    }

    // true means the capability behind `bit` is disabled
    pub fn is_flag_set(&self, bit: PoolStatusBit) -> bool {
        super::is_bit_set(self.status, bit.index())
    }

    // FEES

    pub fn fee_totals(&self) -> FeeTotals {
        FeeTotals {
            protocol_fees_token_0: self.protocol_fees_token_0,
            protocol_fees_token_1: self.protocol_fees_token_1,
            fund_fees_token_0: self.fund_fees_token_0,
            fund_fees_token_1: self.fund_fees_token_1,
        }
    }

    pub fn apply_fees(&mut self, deltas: &FeeDeltas, epoch_source: &impl EpochSource) -> Result<()> {
        let totals = self.fee_totals().checked_add(deltas)?;
        let recent_epoch = epoch_source.current_epoch()?;

        self.protocol_fees_token_0 = totals.protocol_fees_token_0;
        self.protocol_fees_token_1 = totals.protocol_fees_token_1;
        self.fund_fees_token_0 = totals.fund_fees_token_0;
        self.fund_fees_token_1 = totals.fund_fees_token_1;
        self.recent_epoch = recent_epoch;

        Ok(())
    }

    // Vault balances that belong to liquidity providers, fees excluded
    pub fn vault_amount_without_fee(&self, vault_0: u64, vault_1: u64) -> Result<(u64, u64)> {
        let totals = self.fee_totals();

        let amount_0 = vault_0
            .checked_sub(totals.checked_total_0()?)
            .ok_or(PoolError::MathOverflow)?;
        let amount_1 = vault_1
            .checked_sub(totals.checked_total_1()?)
            .ok_or(PoolError::MathOverflow)?;

        Ok((amount_0, amount_1))
    }

    // EPOCH

    pub fn refresh_epoch(&mut self, epoch_source: &impl EpochSource) -> Result<()> {
        self.recent_epoch = epoch_source.current_epoch()?;
        Ok(())
    }

    // LP SUPPLY

    pub fn increase_lp_supply(&mut self, amount: u64) -> Result<()> {
        self.lp_supply = self
            .lp_supply
            .checked_add(amount)
            .ok_or(PoolError::MathOverflow)?;
        Ok(())
    }

    pub fn decrease_lp_supply(&mut self, amount: u64) -> Result<()> {
        self.lp_supply = self
            .lp_supply
            .checked_sub(amount)
            .ok_or(PoolError::MathOverflow)?;
        Ok(())
    }

    // OPEN TIME

    // Trading opens strictly after open_time
    pub fn is_open(&self, now: u64) -> bool {
        now > self.open_time
    }

    pub fn assert_open(&self, now: u64) -> Result<()> {
        require!(self.is_open(now), PoolError::PoolNotOpen);
        Ok(())
    }
}
