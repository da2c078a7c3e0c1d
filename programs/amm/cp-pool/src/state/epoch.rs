// Epoch Tracking
//
// recent_epoch is only ever written from an EpochSource, never from an
// instruction argument. Handlers only ever pass ClockEpochSource.

use anchor_lang::prelude::*;

use crate::errors::*;

pub trait EpochSource {
    fn current_epoch(&self) -> Result<u64>;
}

// Live epoch from the Clock sysvar
#[derive(Clone, Copy, Debug, Default)]
pub struct ClockEpochSource;

impl EpochSource for ClockEpochSource {
    fn current_epoch(&self) -> Result<u64> {
        let clock = Clock::get().map_err(|_| error!(PoolError::ClockUnavailable))?;
        Ok(clock.epoch)
    }
}
