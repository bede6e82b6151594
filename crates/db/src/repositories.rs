pub mod booking;
pub mod storage_entry;
