use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_MAX_TICKETS, DEFAULT_TICKET_COST, EPOCH_ZERO, MAX_TICKETS_LIMIT},
    error::LotteryError,
    state::CallContext,
};

// Space calculation:
// 8 (discriminator) +
// 32 (admin) +
// 8 (ticket_cost) +
// 8 (tickets_available) +
// 8 (max_tickets) +
// 4 (length of players) +
// 32 * MAX_TICKETS_LIMIT (players) +
// 1 (bump) =
// 8261 total bytes
pub const LOTTERY_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 8 + 8 + 4 + 32 * MAX_TICKETS_LIMIT as usize + 1;

#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Lottery {
    /// Fixed privileged address, set at initialization
    pub admin: Pubkey,
    /// Price per ticket in lamports
    pub ticket_cost: u64,
    /// Unsold tickets left in the current round
    pub tickets_available: u64,
    /// Capacity of a round
    pub max_tickets: u64,
    /// Ticket ledger of the current round; the index is the ticket number
    pub players: Vec<Pubkey>,
    pub bump: u8,
}

/// Outcome of a successful `buy_ticket`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketPurchase {
    /// Tickets actually assigned, after clamping to the remaining supply
    pub granted: u64,
    /// Lamports kept for the pot
    pub total_cost: u64,
    /// Lamports owed back to the caller
    pub refund: u64,
    /// Ticket number of the first ticket assigned by this purchase
    pub first_ticket: u64,
}

/// Outcome of a successful `end_game`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub winning_ticket: u64,
    pub winner: Pubkey,
}

impl Lottery {
    pub fn new(admin: Pubkey, ticket_cost: u64, max_tickets: u64, bump: u8) -> Result<Self> {
        require!(ticket_cost > 0, LotteryError::InvalidTicketCost);
        validate_max_tickets(max_tickets)?;

        Ok(Self {
            admin,
            ticket_cost,
            tickets_available: max_tickets,
            max_tickets,
            players: Vec::new(),
            bump,
        })
    }

    /// Like `new`, falling back to `DEFAULT_TICKET_COST` and `DEFAULT_MAX_TICKETS`
    /// for settings the admin leaves unset.
    pub fn with_defaults(
        admin: Pubkey,
        ticket_cost: Option<u64>,
        max_tickets: Option<u64>,
        bump: u8,
    ) -> Result<Self> {
        Self::new(
            admin,
            ticket_cost.unwrap_or(DEFAULT_TICKET_COST),
            max_tickets.unwrap_or(DEFAULT_MAX_TICKETS),
            bump,
        )
    }

    pub fn tickets_sold(&self) -> u64 {
        self.players.len() as u64
    }

    /// No ticket has been sold in the current round.
    pub fn is_fresh(&self) -> bool {
        self.tickets_available == self.max_tickets && self.players.is_empty()
    }

    pub fn is_ready_to_finalize(&self) -> bool {
        self.tickets_available == 0
    }

    pub fn tickets_held_by(&self, player: &Pubkey) -> u64 {
        self.players.iter().filter(|holder| *holder == player).count() as u64
    }

    /// Assigns up to `requested` tickets to the caller.
    ///
    /// Requests larger than the remaining supply are clamped rather than rejected.
    /// All checks run before any field is written, so a rejected call leaves the
    /// account untouched.
    ///
    /// # Errors
    /// - `NoTicketsAvailable` if the round is sold out
    /// - `InvalidTicketCount` if zero tickets are requested
    /// - `ArithmeticOverflow` if the cost does not fit in a u64
    /// - `InsufficientPayment` if the attached amount is below the cost
    pub fn buy_ticket(&mut self, call: &CallContext, requested: u64) -> Result<TicketPurchase> {
        require!(self.tickets_available > 0, LotteryError::NoTicketsAvailable);
        require!(requested > 0, LotteryError::InvalidTicketCount);

        let granted = requested.min(self.tickets_available);
        let total_cost = granted
            .checked_mul(self.ticket_cost)
            .ok_or(LotteryError::ArithmeticOverflow)?;
        let refund = call
            .attached_amount
            .checked_sub(total_cost)
            .ok_or(LotteryError::InsufficientPayment)?;
        let new_entries =
            usize::try_from(granted).map_err(|_| LotteryError::ArithmeticOverflow)?;

        let first_ticket = self.tickets_sold();
        self.players
            .extend(std::iter::repeat(call.caller).take(new_entries));
        self.tickets_available -= granted;

        Ok(TicketPurchase {
            granted,
            total_cost,
            refund,
            first_ticket,
        })
    }

    pub fn change_ticket_cost(&mut self, call: &CallContext, new_cost: u64) -> Result<()> {
        self.ensure_admin_before_start(call)?;
        require!(new_cost > 0, LotteryError::InvalidTicketCost);

        self.ticket_cost = new_cost;
        Ok(())
    }

    /// Replaces the round capacity and resets the remaining supply to it.
    pub fn change_max_tickets(&mut self, call: &CallContext, new_max: u64) -> Result<()> {
        self.ensure_admin_before_start(call)?;
        validate_max_tickets(new_max)?;

        self.max_tickets = new_max;
        self.tickets_available = new_max;
        Ok(())
    }

    /// Picks the winning ticket of a sold-out round without touching state.
    pub fn draw(&self, now: i64) -> Result<Draw> {
        require!(self.is_ready_to_finalize(), LotteryError::RoundNotFinished);

        let winning_ticket = winning_ticket_index(now, self.max_tickets)?;
        let winner = usize::try_from(winning_ticket)
            .ok()
            .and_then(|index| self.players.get(index))
            .copied()
            .ok_or(LotteryError::TicketNotFound)?;

        Ok(Draw {
            winning_ticket,
            winner,
        })
    }

    /// Closes a sold-out round and immediately opens a fresh one with the same
    /// cost and capacity. Anyone may call this.
    ///
    /// `claimed_winner` is the account the caller supplied to receive the pot;
    /// it must hold the winning ticket or nothing changes.
    pub fn end_game(&mut self, call: &CallContext, claimed_winner: &Pubkey) -> Result<Draw> {
        let draw = self.draw(call.now)?;
        require_keys_eq!(*claimed_winner, draw.winner, LotteryError::WinnerMismatch);

        self.players.clear();
        self.tickets_available = self.max_tickets;

        Ok(draw)
    }

    fn ensure_admin_before_start(&self, call: &CallContext) -> Result<()> {
        require_keys_eq!(call.caller, self.admin, LotteryError::NotAuthorized);
        require!(self.is_fresh(), LotteryError::RoundAlreadyStarted);
        Ok(())
    }
}

fn validate_max_tickets(max_tickets: u64) -> Result<()> {
    require!(max_tickets > 0, LotteryError::InvalidMaxTickets);
    require!(
        max_tickets <= MAX_TICKETS_LIMIT,
        LotteryError::MaxTicketsTooHigh
    );
    Ok(())
}

/// Maps a timestamp onto a ticket number in `[0, max_tickets)`.
///
/// The timestamp is the only entropy source, so the result is fully determined
/// by the slot time the draw executes in.
pub fn winning_ticket_index(now: i64, max_tickets: u64) -> Result<u64> {
    require!(max_tickets > 0, LotteryError::InvalidMaxTickets);

    let elapsed = i128::from(now) - i128::from(EPOCH_ZERO);
    let index = elapsed.rem_euclid(i128::from(max_tickets));
    u64::try_from(index).map_err(|_| LotteryError::ArithmeticOverflow.into())
}
