//! Data models for shelf.
//!
//! This module contains the record contract the repository is generic over,
//! plus the demo record type used by the CLI.

mod consumable;
mod record;

pub use consumable::Consumable;
pub use record::{Record, RecordId};
