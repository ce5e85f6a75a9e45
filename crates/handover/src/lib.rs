//! `toolcrib-handover` — ownership transfer.

pub mod transfer;

pub use transfer::{Transfer, transfer};
