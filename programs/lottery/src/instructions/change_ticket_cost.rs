use anchor_lang::prelude::*;

use crate::{
    constants::LOTTERY_SEED,
    state::{CallContext, Lottery},
};

/// Event emitted when the admin reprices tickets
#[event]
pub struct TicketCostChanged {
    pub lottery: Pubkey,
    pub old_cost: u64,
    pub new_cost: u64,
}

/// Sets a new ticket price. Only the admin may call this, and only before the
/// first ticket of the round is sold.
pub fn change_ticket_cost(ctx: Context<ChangeTicketCost>, new_cost: u64) -> Result<()> {
    let call = CallContext::unfunded(ctx.accounts.signer.key());
    let lottery = &mut ctx.accounts.lottery;
    let old_cost = lottery.ticket_cost;

    lottery.change_ticket_cost(&call, new_cost)?;

    emit!(TicketCostChanged {
        lottery: lottery.key(),
        old_cost,
        new_cost,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ChangeTicketCost<'info> {
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.admin.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    pub signer: Signer<'info>,
}
