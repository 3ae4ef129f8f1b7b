use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    #[msg("No tickets are available in the current round")]
    NoTicketsAvailable,
    #[msg("Attached amount does not cover the ticket cost")]
    InsufficientPayment,
    #[msg("Only the lottery admin may perform this action")]
    NotAuthorized,
    #[msg("Tickets have already been sold in the current round")]
    RoundAlreadyStarted,
    #[msg("The current round still has unsold tickets")]
    RoundNotFinished,
    ArithmeticOverflow,
    #[msg("At least one ticket must be requested")]
    InvalidTicketCount,
    #[msg("Ticket cost must be greater than zero")]
    InvalidTicketCost,
    #[msg("Max tickets must be greater than zero")]
    InvalidMaxTickets,
    #[msg("Max tickets exceeds the ledger capacity of the lottery account")]
    MaxTicketsTooHigh,
    #[msg("Winner account does not hold the winning ticket")]
    WinnerMismatch,
    #[msg("Winning ticket has no holder in the ledger")]
    TicketNotFound,
    #[msg("Vault does not belong to this lottery")]
    InvalidVault,
}
