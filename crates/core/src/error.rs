// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for store orchestration and persistence backends.

use setup_sheet_domain::DomainError;
use thiserror::Error;

/// Errors raised by a persistence backend.
///
/// Every variant is asynchronous by nature: it can only surface after a
/// store action has reached the network.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    /// The request exceeded the client-side timeout.
    #[error("Request to the setup-sheet service timed out")]
    Timeout,

    /// The request never reached the service.
    #[error("Network failure: {0}")]
    Network(String),

    /// The service rejected the payload as too large (HTTP 413).
    #[error(
        "Setup sheet payload is too large. Reduce uploaded staff or positions and try again"
    )]
    PayloadTooLarge,

    /// The service answered with a non-success status.
    #[error("Service error ({status}): {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The best-effort server message.
        message: String,
    },

    /// A success response body could not be decoded.
    #[error("Unreadable service response: {0}")]
    InvalidResponse(String),

    /// A request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors surfaced by [`crate::SetupSheetStore`] actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A domain rule was violated. Raised synchronously, before any
    /// network call.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The persistence backend failed. Also recorded into the store's
    /// `error` state.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// An action required a loaded weekly setup and none is selected.
    #[error("No weekly setup is currently loaded")]
    NoCurrentSetup,

    /// An action required a persisted weekly setup but the current one
    /// has no server identifier yet.
    #[error("The current weekly setup has not been saved yet")]
    UnsavedSetup,
}
