use anchor_lang::prelude::*;

/// Custom error codes for the multi-vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Not authorized: admin signature required")]
    NotAuthorized,

    #[msg("Start timestamp cannot be in the past")]
    TimestampInPast,

    #[msg("Start amount cannot be greater than total amount")]
    StartAmountExceedsTotal,

    #[msg("Pool balance does not cover the new allocation")]
    InsufficientPoolBalance,

    #[msg("No unallocated tokens in the pool")]
    NoUnallocatedFunds,

    #[msg("Insufficient funds in the pool for transfer")]
    InsufficientFunds,

    #[msg("Invalid allocation (must be > 0)")]
    InvalidAllocation,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Vesting book is full")]
    VestingBookFull,

    #[msg("Invalid history page size")]
    InvalidHistoryPage,

    #[msg("Math overflow")]
    MathOverflow,
}
