// Fee Ledger
//
// Protocol and fund fees owed per token side. New totals are computed on a
// snapshot first so a single overflowing side leaves every accumulator as is.

use anchor_lang::prelude::*;

use crate::errors::*;

// Fee split of one operation, already computed by the caller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeDeltas {
    pub protocol_fee_0: u64,
    pub fund_fee_0: u64,
    pub protocol_fee_1: u64,
    pub fund_fee_1: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeTotals {
    pub protocol_fees_token_0: u64,
    pub protocol_fees_token_1: u64,
    pub fund_fees_token_0: u64,
    pub fund_fees_token_1: u64,
}

impl FeeTotals {
    pub fn checked_add(&self, deltas: &FeeDeltas) -> Result<FeeTotals> {
        Ok(FeeTotals {
            protocol_fees_token_0: self
                .protocol_fees_token_0
                .checked_add(deltas.protocol_fee_0)
                .ok_or(PoolError::MathOverflow)?,
            protocol_fees_token_1: self
                .protocol_fees_token_1
                .checked_add(deltas.protocol_fee_1)
                .ok_or(PoolError::MathOverflow)?,
            fund_fees_token_0: self
                .fund_fees_token_0
                .checked_add(deltas.fund_fee_0)
                .ok_or(PoolError::MathOverflow)?,
            fund_fees_token_1: self
                .fund_fees_token_1
                .checked_add(deltas.fund_fee_1)
                .ok_or(PoolError::MathOverflow)?,
        })
    }

    // Everything owed out of the token 0 vault
    pub fn checked_total_0(&self) -> Result<u64> {
        self.protocol_fees_token_0
            .checked_add(self.fund_fees_token_0)
            .ok_or(PoolError::MathOverflow.into())
    }

    // Everything owed out of the token 1 vault
    pub fn checked_total_1(&self) -> Result<u64> {
        self.protocol_fees_token_1
            .checked_add(self.fund_fees_token_1)
            .ok_or(PoolError::MathOverflow.into())
    }
}
