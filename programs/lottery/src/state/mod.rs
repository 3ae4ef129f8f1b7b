pub use call_context::*;
pub use lottery::*;
pub use vault::*;

pub mod call_context;
pub mod lottery;
pub mod vault;
