//! # StudioBook Core
//!
//! Domain types and the pure computations behind studio booking: slot
//! generation, booking filtering, the booked-slot index and the studio
//! catalog. Nothing in this crate performs I/O beyond reading a catalog file.

pub mod booking;
pub mod catalog;
pub mod errors;
pub mod filter;
pub mod index;
pub mod models;
pub mod slots;
