// Initialize Pool Instruction
//
// Creates the pool state record together with its LP mint and vaults.
// The record is built in full before it is written.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// CHECK: stored as a reference only, never read
    pub amm_config: UncheckedAccount<'info>,

    pub token_0_mint: Box<Account<'info, Mint>>,
    pub token_1_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + PoolState::INIT_SPACE,
        seeds = [
            POOL_SEED,
            amm_config.key().as_ref(),
            token_0_mint.key().as_ref(),
            token_1_mint.key().as_ref(),
        ],
        bump
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    /// CHECK: PDA signer for vault and LP mint operations
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool_state.key().as_ref()],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = creator,
        seeds = [POOL_LP_MINT_SEED, pool_state.key().as_ref()],
        bump,
        mint::decimals = LP_MINT_DECIMALS,
        mint::authority = pool_authority,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = token_0_mint,
        associated_token::authority = pool_authority,
    )]
    pub token_0_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = token_1_mint,
        associated_token::authority = pool_authority,
    )]
    pub token_1_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(&mut self, open_time: u64, bumps: &InitializePoolBumps) -> Result<()> {
        let identity = PoolIdentity {
            amm_config: self.amm_config.key(),
            token_0_mint: self.token_0_mint.key(),
            token_1_mint: self.token_1_mint.key(),
            lp_mint: self.lp_mint.key(),
            token_0_vault: self.token_0_vault.key(),
            token_1_vault: self.token_1_vault.key(),
            mint_0_decimals: self.token_0_mint.decimals,
            mint_1_decimals: self.token_1_mint.decimals,
        };

        let pool_state = PoolState::initialize(identity, bumps.pool_state, open_time, &ClockEpochSource)?;
        let recent_epoch = pool_state.recent_epoch;
        self.pool_state.set_inner(pool_state);

        msg!(
            "Pool initialized: {} / {}",
            self.token_0_mint.key(),
            self.token_1_mint.key()
        );
        msg!("Open time: {}, epoch: {}", open_time, recent_epoch);

        Ok(())
    }
}
