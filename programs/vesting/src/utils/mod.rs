pub mod math;
pub mod time;
pub mod token_pool;

pub use token_pool::*;
