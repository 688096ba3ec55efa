pub mod bays;
pub mod buses;
pub mod common;
pub mod primary;
pub mod zone;
