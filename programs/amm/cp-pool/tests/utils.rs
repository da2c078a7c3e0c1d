// Test utilities for the pool program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use cp_pool::state::PoolState;
use litesvm::LiteSVM;
use solana_sdk::{
    account::Account,
    clock::Clock,
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id! (cp_pool)
pub const POOL_PROGRAM_ID: Pubkey = Pubkey::new_from_array(cp_pool::ID.to_bytes());

// Seed of cp_pool::admin::LOCALNET_ID; the program under test must be
// built with the `localnet-admin` feature
pub const ADMIN_SECRET: [u8; 32] = [7u8; 32];

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds
pub const POOL_SEED: &[u8] = b"pool";
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";
pub const POOL_LP_MINT_SEED: &[u8] = b"pool_lp_mint";

// Token decimals
pub const DECIMALS: u8 = 9;

// Setup LiteSVM with the pool program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../../target/deploy/cp_pool.so");
    let _ = svm.add_program(POOL_PROGRAM_ID, program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Admin signer, funded so it can pay for its own transactions
pub fn create_admin(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let admin = Keypair::new_from_array(ADMIN_SECRET);
    assert_eq!(admin.pubkey().to_bytes(), cp_pool::admin::LOCALNET_ID.to_bytes());
    svm.airdrop(&admin.pubkey(), lamports)
        .expect("Airdrop should succeed");
    admin
}

pub fn set_epoch(svm: &mut LiteSVM, epoch: u64) {
    let mut clock = svm.get_sysvar::<Clock>();
    clock.epoch = epoch;
    svm.set_sysvar::<Clock>(&clock);
}

// Derive pool state PDA
pub fn derive_pool_state_pda(
    amm_config: &Pubkey,
    token_0_mint: &Pubkey,
    token_1_mint: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            POOL_SEED,
            amm_config.as_ref(),
            token_0_mint.as_ref(),
            token_1_mint.as_ref(),
        ],
        &POOL_PROGRAM_ID,
    )
}

// Derive pool authority PDA
pub fn derive_pool_authority_pda(pool_state: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POOL_AUTHORITY_SEED, pool_state.as_ref()],
        &POOL_PROGRAM_ID,
    )
}

// Derive LP mint PDA
pub fn derive_lp_mint_pda(pool_state: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POOL_LP_MINT_SEED, pool_state.as_ref()],
        &POOL_PROGRAM_ID,
    )
}

pub fn derive_vaults(pool_state: &Pubkey, token_0_mint: &Pubkey, token_1_mint: &Pubkey) -> (Pubkey, Pubkey) {
    let (pool_authority, _) = derive_pool_authority_pda(pool_state);
    (
        get_associated_token_address(&pool_authority, token_0_mint),
        get_associated_token_address(&pool_authority, token_1_mint),
    )
}

// Load and decode the pool state account
pub fn fetch_pool_state(svm: &LiteSVM, pool_state: &Pubkey) -> PoolState {
    let account = svm
        .get_account(pool_state)
        .expect("Pool state account should exist");
    PoolState::try_deserialize(&mut account.data.as_slice())
        .expect("Pool state should deserialize")
}

// Overwrite the pool state account data in place
pub fn store_pool_state(svm: &mut LiteSVM, pool_state: &Pubkey, state: &PoolState) {
    use anchor_lang::AccountSerialize;

    let account = svm
        .get_account(pool_state)
        .expect("Pool state account should exist");

    let mut data = Vec::with_capacity(account.data.len());
    state.try_serialize(&mut data).expect("Pool state should serialize");
    assert_eq!(data.len(), account.data.len());

    svm.set_account(
        *pool_state,
        Account {
            data,
            ..account
        },
    )
    .expect("Pool state account should be writable");
}

// Build initialize_pool instruction
pub fn build_initialize_pool_ix(
    creator: &Pubkey,
    amm_config: &Pubkey,
    token_0_mint: &Pubkey,
    token_1_mint: &Pubkey,
    open_time: u64,
) -> Instruction {
    let (pool_state, _) = derive_pool_state_pda(amm_config, token_0_mint, token_1_mint);
    let (pool_authority, _) = derive_pool_authority_pda(&pool_state);
    let (lp_mint, _) = derive_lp_mint_pda(&pool_state);
    let (token_0_vault, token_1_vault) = derive_vaults(&pool_state, token_0_mint, token_1_mint);

    // Discriminator for initialize_pool
    let discriminator = anchor_discriminator("initialize_pool");

    let mut data = discriminator.to_vec();
    data.extend_from_slice(&open_time.to_le_bytes());

    Instruction {
        program_id: POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*creator, true),
            AccountMeta::new_readonly(*amm_config, false),
            AccountMeta::new_readonly(*token_0_mint, false),
            AccountMeta::new_readonly(*token_1_mint, false),
            AccountMeta::new(pool_state, false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new(lp_mint, false),
            AccountMeta::new(token_0_vault, false),
            AccountMeta::new(token_1_vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build update_pool_status instruction
pub fn build_update_pool_status_ix(authority: &Pubkey, pool_state: &Pubkey, status: u8) -> Instruction {
    // Discriminator for update_pool_status
    let discriminator = anchor_discriminator("update_pool_status");

    let mut data = discriminator.to_vec();
    data.push(status);

    Instruction {
        program_id: POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*pool_state, false),
        ],
        data,
    }
}

// Build apply_fees instruction
pub fn build_apply_fees_ix(
    authority: &Pubkey,
    pool_state: &Pubkey,
    protocol_fee_0: u64,
    fund_fee_0: u64,
    protocol_fee_1: u64,
    fund_fee_1: u64,
) -> Instruction {
    // Discriminator for apply_fees
    let discriminator = anchor_discriminator("apply_fees");

    let mut data = discriminator.to_vec();
    data.extend_from_slice(&protocol_fee_0.to_le_bytes());
    data.extend_from_slice(&fund_fee_0.to_le_bytes());
    data.extend_from_slice(&protocol_fee_1.to_le_bytes());
    data.extend_from_slice(&fund_fee_1.to_le_bytes());

    Instruction {
        program_id: POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*pool_state, false),
        ],
        data,
    }
}
