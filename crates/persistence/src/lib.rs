// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Tutor Billing.
//!
//! The whole aggregate is kept as one JSON document in a synchronous
//! key-value store. The store boundary is the `KeyValueStore` trait; the
//! production implementation is `SqliteStore`, a single Diesel-managed
//! `SQLite` table.
//!
//! ## Testing
//!
//! - `SqliteStore::new_in_memory()` gives every caller its own shared-cache
//!   in-memory database
//! - Migrations are embedded and run on open, for memory and file databases alike

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod connection;
mod data_models;
mod diesel_schema;
mod error;
mod snapshot;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use snapshot::{
    STATE_KEY, decode_state, encode_state, export_backup, load_state, parse_backup, save_state,
};
pub use store::{KeyValueStore, SqliteStore};
