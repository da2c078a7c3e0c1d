// Update Pool Status Instruction
//
// Replaces the packed status flags. Admin only.

use anchor_lang::prelude::*;

use crate::{admin, constants::*, state::*};

#[derive(Accounts)]
pub struct UpdatePoolStatus<'info> {
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

impl<'info> UpdatePoolStatus<'info> {
    pub fn update_pool_status(&mut self, status: u8) -> Result<()> {
        admin::assert_is_admin(&self.authority.key())?;

        self.pool_state.set_status(status)?;

        msg!("Pool {} status set to {:#05b}", self.pool_state.key(), status);

        Ok(())
    }
}
