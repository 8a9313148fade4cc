pub mod calendar;
pub mod schedule;
pub mod signature;
