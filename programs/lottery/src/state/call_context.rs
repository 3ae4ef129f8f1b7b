use anchor_lang::prelude::*;

/// Per-call inputs supplied by the runtime rather than by instruction arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    /// The signer invoking the instruction
    pub caller: Pubkey,
    /// Lamports the caller escrows with the call
    pub attached_amount: u64,
    /// Unix timestamp of the slot the call executes in
    pub now: i64,
}

impl CallContext {
    /// Builds the context for the executing instruction, reading the time from the Clock sysvar.
    pub fn current(caller: Pubkey, attached_amount: u64) -> Result<Self> {
        Ok(Self {
            caller,
            attached_amount,
            now: Clock::get()?.unix_timestamp,
        })
    }

    /// Context for calls that neither carry lamports nor read the time.
    pub fn unfunded(caller: Pubkey) -> Self {
        Self {
            caller,
            attached_amount: 0,
            now: 0,
        }
    }
}
