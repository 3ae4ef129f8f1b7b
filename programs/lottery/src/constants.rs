use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

pub const LOTTERY_SEED: &[u8] = b"lottery";
pub const VAULT_SEED: &[u8] = b"vault";

/// Ticket price a new lottery starts with when the admin has no preference (1 SOL).
pub const DEFAULT_TICKET_COST: u64 = LAMPORTS_PER_SOL;
/// Round capacity a new lottery starts with when the admin has no preference.
pub const DEFAULT_MAX_TICKETS: u64 = 5;

/// Upper bound on round capacity; the ledger space is reserved up front for this many tickets.
pub const MAX_TICKETS_LIMIT: u64 = 256;

/// Time origin for winner selection (Unix epoch).
pub const EPOCH_ZERO: i64 = 0;
