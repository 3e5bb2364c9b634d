pub mod account;
pub mod currency;
pub mod participant;

pub use account::*;
pub use currency::*;
pub use participant::*;
