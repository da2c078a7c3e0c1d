use anchor_lang::prelude::*;

#[error_code]
pub enum PoolError {
    #[msg("Invalid input: status outside 0..=7 or malformed pool accounts")]
    InvalidInput,

    #[msg("Arithmetic overflow occurred")]
    MathOverflow,

    #[msg("Current epoch could not be read from the clock")]
    ClockUnavailable,

    #[msg("Pool is not open for trading yet")]
    PoolNotOpen,

    #[msg("Only the pool admin can perform this action")]
    UnauthorizedAccess,
}
