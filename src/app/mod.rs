pub mod events;
pub mod search;
pub mod services;
pub mod state;
pub mod units;
pub mod weather;
