//! rosterdb - secondary indexes for person records over a set/sorted-set store
//!
//! The store offers only sets and sorted sets. rosterdb fans every record out
//! into a gender set, a country set and a date-of-birth sorted set, then
//! answers categorical, range and intersection queries from them.

pub mod cli;
pub mod codec;
pub mod index;
pub mod observability;
pub mod record;
pub mod seed;
pub mod store;
