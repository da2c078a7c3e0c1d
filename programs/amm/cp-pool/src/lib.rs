// Constant Product Pool State Program
//
// Owns the persistent record of a constant product pool: fee ledger, status
// flags and epoch tracking. Swap math, deposits and fee withdrawal live in
// other programs that read and update this record.
//
// Instructions:
// - initialize_pool: Create the pool record, LP mint and vaults
// - update_pool_status: Enable/disable deposit, withdraw and swap directions
// - apply_fees: Accumulate the protocol and fund share of a fee split

use anchor_lang::prelude::*;

pub mod admin;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;
use state::FeeDeltas;

declare_id!("554gbLPrnbbDwKhpzSAj9PPsNpxrfhdMGznyhaTXHKiy");

#[program]
pub mod cp_pool {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, open_time: u64) -> Result<()> {
        ctx.accounts.initialize_pool(open_time, &ctx.bumps)
    }

    pub fn update_pool_status(ctx: Context<UpdatePoolStatus>, status: u8) -> Result<()> {
        ctx.accounts.update_pool_status(status)
    }

    pub fn apply_fees(
        ctx: Context<ApplyFees>,
        protocol_fee_0: u64,
        fund_fee_0: u64,
        protocol_fee_1: u64,
        fund_fee_1: u64,
    ) -> Result<()> {
        ctx.accounts.apply_fees(FeeDeltas {
            protocol_fee_0,
            fund_fee_0,
            protocol_fee_1,
            fund_fee_1,
        })
    }
}
