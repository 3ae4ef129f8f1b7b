use anchor_lang::{prelude::*, system_program};

use crate::{
    constants::{LOTTERY_SEED, VAULT_SEED},
    error::LotteryError,
    state::{pay_from_vault, CallContext, Lottery, Vault},
};

/// Event emitted when tickets are purchased
#[event]
pub struct TicketsPurchased {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The buyer's address
    pub buyer: Pubkey,
    /// Number of tickets assigned to the buyer
    pub ticket_count: u64,
    /// Ticket number of the first assigned ticket
    pub first_ticket: u64,
    /// Lamports added to the pot
    pub total_cost: u64,
    /// Lamports returned to the buyer
    pub refund: u64,
    /// Tickets left in the round after this purchase
    pub tickets_available: u64,
}

/// Instruction to purchase tickets in the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `requested_count` - Number of tickets wanted; clamped to the remaining supply
/// * `attached_amount` - Lamports the buyer escrows with the call
///
/// # Security Considerations
/// 1. Rejects the call when the round is sold out or nothing is requested
/// 2. Computes the cost with checked arithmetic
/// 3. Rejects the call when the attached amount does not cover the cost
/// 4. Verifies the vault belongs to the lottery
///
/// # Implementation Notes
/// - The full attached amount moves into the vault, then the excess is refunded
///   from the vault, so the buyer is charged exactly the cost of the granted tickets
/// - A failed transfer aborts the whole instruction
pub fn buy_ticket(ctx: Context<BuyTicket>, requested_count: u64, attached_amount: u64) -> Result<()> {
    let call = CallContext::current(ctx.accounts.buyer.key(), attached_amount)?;
    let purchase = ctx.accounts.lottery.buy_ticket(&call, requested_count)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        attached_amount,
    )?;

    pay_from_vault(
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.buyer.to_account_info(),
        purchase.refund,
    )?;

    emit!(TicketsPurchased {
        lottery: ctx.accounts.lottery.key(),
        buyer: call.caller,
        ticket_count: purchase.granted,
        first_ticket: purchase.first_ticket,
        total_cost: purchase.total_cost,
        refund: purchase.refund,
        tickets_available: ctx.accounts.lottery.tickets_available,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BuyTicket<'info> {
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.admin.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Vault PDA holding the pot, seeds ["vault", lottery_key]
    #[account(
        mut,
        seeds = [VAULT_SEED, lottery.key().as_ref()],
        bump = vault.bump,
        has_one = lottery @ LotteryError::InvalidVault,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
