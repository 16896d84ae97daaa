/// Tick request bookkeeping.
pub mod driver;
