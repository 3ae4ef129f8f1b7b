use anchor_lang::prelude::*;

use crate::{
    constants::LOTTERY_SEED,
    state::{CallContext, Lottery},
};

/// Event emitted when the admin resizes rounds
#[event]
pub struct MaxTicketsChanged {
    pub lottery: Pubkey,
    pub old_max_tickets: u64,
    pub new_max_tickets: u64,
}

/// Sets a new round capacity and resets the remaining supply to it.
/// Only the admin may call this, and only before the first ticket of the round is sold.
pub fn change_max_tickets(ctx: Context<ChangeMaxTickets>, new_max: u64) -> Result<()> {
    let call = CallContext::unfunded(ctx.accounts.signer.key());
    let lottery = &mut ctx.accounts.lottery;
    let old_max_tickets = lottery.max_tickets;

    lottery.change_max_tickets(&call, new_max)?;

    emit!(MaxTicketsChanged {
        lottery: lottery.key(),
        old_max_tickets,
        new_max_tickets: new_max,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ChangeMaxTickets<'info> {
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.admin.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    pub signer: Signer<'info>,
}
