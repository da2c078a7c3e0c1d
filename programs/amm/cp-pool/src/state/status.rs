// Pool Status Flags
//
// The persisted status byte packs independent "disabled" capability bits.
// Only the three bits named by PoolStatusBit are defined; any value with a
// reserved bit set is rejected before it reaches the record.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolStatusBit {
    // Disables both deposit and withdraw
    DepositWithdraw = 0,
    // Disables swaps with an exact input amount
    SwapBaseIn = 1,
    // Disables swaps with an exact output amount
    SwapBaseOut = 2,
}

impl PoolStatusBit {
    pub const ALL: [PoolStatusBit; 3] = [
        PoolStatusBit::DepositWithdraw,
        PoolStatusBit::SwapBaseIn,
        PoolStatusBit::SwapBaseOut,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn mask(self) -> u8 {
        1 << self.index()
    }
}

// Raw read of one bit of a packed status byte
pub fn is_bit_set(status: u8, bit_index: u8) -> bool {
    bit_index < 8 && status & (1 << bit_index) != 0
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusFlags(u8);

impl StatusFlags {
    pub const NONE: StatusFlags = StatusFlags(POOL_STATUS_DEFAULT);

    pub fn from_bits(bits: u8) -> Result<Self> {
        require!(bits <= POOL_STATUS_MAX, PoolError::InvalidInput);
        Ok(Self(bits))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, bit: PoolStatusBit) -> bool {
        is_bit_set(self.0, bit.index())
    }

    pub fn with(self, bit: PoolStatusBit, disabled: bool) -> Self {
        if disabled {
            Self(self.0 | bit.mask())
        } else {
            Self(self.0 & !bit.mask())
        }
    }
}
