pub use buy_ticket::*;
pub use change_max_tickets::*;
pub use change_ticket_cost::*;
pub use end_game::*;
pub use initialize_lottery::*;

pub mod buy_ticket;
pub mod change_max_tickets;
pub mod change_ticket_cost;
pub mod end_game;
pub mod initialize_lottery;
