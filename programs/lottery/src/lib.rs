use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

declare_id!("6oZFTVv6zRLJkasuWKK21UXkgaccA4mNYJFsdJJyrWLE");

#[program]
pub mod lottery_program {
    use super::*;

    pub fn initialize_lottery(
        ctx: Context<InitializeLottery>,
        ticket_cost: Option<u64>,
        max_tickets: Option<u64>,
    ) -> Result<()> {
        instructions::initialize_lottery::initialize_lottery(ctx, ticket_cost, max_tickets)
    }

    pub fn buy_ticket(
        ctx: Context<BuyTicket>,
        requested_count: u64,
        attached_amount: u64,
    ) -> Result<()> {
        instructions::buy_ticket::buy_ticket(ctx, requested_count, attached_amount)
    }

    pub fn change_ticket_cost(ctx: Context<ChangeTicketCost>, new_cost: u64) -> Result<()> {
        instructions::change_ticket_cost::change_ticket_cost(ctx, new_cost)
    }

    pub fn change_max_tickets(ctx: Context<ChangeMaxTickets>, new_max: u64) -> Result<()> {
        instructions::change_max_tickets::change_max_tickets(ctx, new_max)
    }

    pub fn end_game(ctx: Context<EndGame>) -> Result<()> {
        instructions::end_game::end_game(ctx)
    }
}
