pub mod filter;
pub mod format;
pub mod time;
pub mod validation;
