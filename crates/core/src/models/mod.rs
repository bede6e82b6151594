pub mod booking;
pub mod studio;
pub mod time_slot;
