// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP persistence backend for the Setup Sheet Scheduler.
//!
//! This crate implements the `SetupSheetBackend` seam against the remote
//! setup-sheet service: JSON over HTTPS, a Bearer token on every request,
//! and a 60-second client-side timeout. Failures are translated into the
//! typed `PersistenceError` taxonomy; a 413 becomes the specific
//! payload-too-large message rather than a generic transport failure.
//!
//! The service is the system of record. This client performs no retries
//! and holds no state beyond its connection pool; concurrent writes race
//! with last-write-wins semantics on the server.

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

mod http;

#[cfg(test)]
mod tests;

pub use http::{DEFAULT_TIMEOUT, HttpBackend, HttpBackendConfig};
