//! Record codec
//!
//! Every index slot holds a full encoded copy of the record, not a pointer.
//! `encode` is pure; `decode` only has to accept what `encode` emits.

mod errors;
mod json;

pub use errors::{CodecResult, MalformedRecordError};
pub use json::{decode, encode};
