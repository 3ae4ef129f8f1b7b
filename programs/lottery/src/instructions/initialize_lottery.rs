use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, VAULT_SEED},
    state::{Lottery, Vault, LOTTERY_ACCOUNT_SIZE, VAULT_ACCOUNT_SIZE},
};

/// Event emitted when a lottery is created
#[event]
pub struct LotteryInitialized {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The admin allowed to reconfigure fresh rounds
    pub admin: Pubkey,
    /// Price per ticket in lamports
    pub ticket_cost: u64,
    /// Capacity of each round
    pub max_tickets: u64,
}

/// Instruction to create a lottery and the vault that holds its pot
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `ticket_cost` - Price per ticket in lamports (must be > 0), `DEFAULT_TICKET_COST` if unset
/// * `max_tickets` - Round capacity (must be between 1 and `MAX_TICKETS_LIMIT`),
///   `DEFAULT_MAX_TICKETS` if unset
///
/// # Account Validations
/// * Lottery - New PDA with seeds ["lottery", admin_key], one lottery per admin
/// * Vault - New PDA with seeds ["vault", lottery_key]
/// * Admin - Signer paying for both accounts; stored as the immutable admin
pub fn initialize_lottery(
    ctx: Context<InitializeLottery>,
    ticket_cost: Option<u64>,
    max_tickets: Option<u64>,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let lottery = Lottery::with_defaults(admin, ticket_cost, max_tickets, ctx.bumps.lottery)?;
    let (ticket_cost, max_tickets) = (lottery.ticket_cost, lottery.max_tickets);

    ctx.accounts.lottery.set_inner(lottery);
    ctx.accounts.vault.set_inner(Vault {
        lottery: ctx.accounts.lottery.key(),
        bump: ctx.bumps.vault,
    });

    emit!(LotteryInitialized {
        lottery: ctx.accounts.lottery.key(),
        admin,
        ticket_cost,
        max_tickets,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    #[account(
        init,
        payer = admin,
        space = LOTTERY_ACCOUNT_SIZE,
        seeds = [LOTTERY_SEED, admin.key().as_ref()],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        init,
        payer = admin,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [VAULT_SEED, lottery.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
