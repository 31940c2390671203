// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store orchestration for the Setup Sheet Scheduler.
//!
//! This crate sits between the UI and the system of record. It owns the
//! client-side state (`SetupSheetStore`), runs the domain conflict
//! validator before any assignment reaches the network, applies the
//! payload-size safeguard to new weekly setups, and defines the
//! `SetupSheetBackend` seam that concrete persistence implementations
//! (see the `setup-sheet-persistence` crate) plug into.

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

mod backend;
mod error;
pub mod payload;
mod store;

#[cfg(test)]
mod tests;

pub use backend::{
    NewTemplate, NewWeeklySetup, SetupSheetBackend, TemplatePatch, WeeklySetupPatch,
};
pub use error::{PersistenceError, StoreError};
pub use payload::{MAX_SETUP_PAYLOAD_BYTES, payload_bytes, trim_for_submission};
pub use store::SetupSheetStore;
