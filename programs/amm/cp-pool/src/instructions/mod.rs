// Instructions Module
//
// Exports all instruction handlers for the pool program

pub mod initialize_pool;
pub mod update_pool_status;
pub mod apply_fees;

pub use initialize_pool::*;
pub use update_pool_status::*;
pub use apply_fees::*;
