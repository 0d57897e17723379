pub mod errors;
pub mod input;
pub mod menu;
pub mod session;
pub mod transact;

pub use session::Session;
