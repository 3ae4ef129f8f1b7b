use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, VAULT_SEED},
    error::LotteryError,
    state::{pay_from_vault, CallContext, Lottery, Vault, VAULT_ACCOUNT_SIZE},
};

/// Event emitted when a round is finalized
#[event]
pub struct GameEnded {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// Holder of the winning ticket
    pub winner: Pubkey,
    /// The winning ticket number
    pub winning_ticket: u64,
    /// Lamports paid out of the vault
    pub payout: u64,
    /// Timestamp the winner was derived from
    pub drawn_at: i64,
}

/// Finalizes a sold-out round: selects the winning ticket from the current
/// timestamp, pays the whole pot to its holder and opens a fresh round.
///
/// Execution requirements:
/// 1. Every ticket of the round has been sold
/// 2. The `winner` account is the holder of the winning ticket
///
/// Anyone may call this. The winning ticket is `now mod max_tickets`, so the
/// caller can derive the expected winner from the slot time before submitting.
/// If the transaction lands in a slot with a different timestamp it fails with
/// `WinnerMismatch`; clients should recompute the winner and retry.
///
/// # Errors
/// - `RoundNotFinished` if tickets remain unsold
/// - `WinnerMismatch` if `winner` does not hold the winning ticket
/// - `InvalidVault` if the vault does not belong to the lottery
pub fn end_game(ctx: Context<EndGame>) -> Result<()> {
    let call = CallContext::current(ctx.accounts.payer.key(), 0)?;
    let claimed_winner = ctx.accounts.winner.key();
    let draw = match ctx.accounts.lottery.end_game(&call, &claimed_winner) {
        Ok(draw) => draw,
        Err(err) => {
            if let Ok(expected) = ctx.accounts.lottery.draw(call.now) {
                msg!("Winning ticket: {}", expected.winning_ticket);
                msg!("Expected winner: {}", expected.winner);
            }
            return Err(err);
        }
    };

    let vault = ctx.accounts.vault.to_account_info();
    let rent_lamports = Rent::get()?.minimum_balance(VAULT_ACCOUNT_SIZE);
    let payout = Vault::pot(vault.lamports(), rent_lamports)?;
    pay_from_vault(&vault, &ctx.accounts.winner.to_account_info(), payout)?;

    emit!(GameEnded {
        lottery: ctx.accounts.lottery.key(),
        winner: draw.winner,
        winning_ticket: draw.winning_ticket,
        payout,
        drawn_at: call.now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EndGame<'info> {
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.admin.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [VAULT_SEED, lottery.key().as_ref()],
        bump = vault.bump,
        has_one = lottery @ LotteryError::InvalidVault,
    )]
    pub vault: Account<'info, Vault>,

    /// Holder of the winning ticket, receives the pot
    #[account(mut)]
    pub winner: SystemAccount<'info>,

    pub payer: Signer<'info>,
}
