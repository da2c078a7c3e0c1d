// Apply Fees Instruction
//
// Records the protocol and fund share of a fee split against the pool and
// stamps the current epoch. Admin only.

use anchor_lang::prelude::*;

use crate::{admin, constants::*, state::*};

#[derive(Accounts)]
pub struct ApplyFees<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            POOL_SEED,
            pool_state.amm_config.as_ref(),
            pool_state.token_0_mint.as_ref(),
            pool_state.token_1_mint.as_ref(),
        ],
        bump = pool_state.bump,
    )]
    pub pool_state: Account<'info, PoolState>,
}

impl<'info> ApplyFees<'info> {
    pub fn apply_fees(&mut self, deltas: FeeDeltas) -> Result<()> {
        admin::assert_is_admin(&self.authority.key())?;

        self.pool_state.apply_fees(&deltas, &ClockEpochSource)?;

        msg!(
            "Fees applied: protocol {} / {}, fund {} / {}",
            deltas.protocol_fee_0,
            deltas.protocol_fee_1,
            deltas.fund_fee_0,
            deltas.fund_fee_1
        );
        msg!("Recent epoch: {}", self.pool_state.recent_epoch);

        Ok(())
    }
}
