// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The payload-size safeguard applied before submitting a new weekly
//! setup.
//!
//! Uploaded HR schedules can carry arbitrarily wide rows; past the
//! threshold the extra columns are dropped so the request stays
//! transportable. The trim is a policy, not a heuristic: the same
//! reduction is applied whenever the threshold is crossed, and it never
//! drops `id`, `name`, `timeBlock`, `area` or `day`.

use crate::backend::NewWeeklySetup;
use crate::error::PersistenceError;

/// Maximum serialized size of a new-setup request body before the trim
/// is applied (5 MiB).
pub const MAX_SETUP_PAYLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Measures the serialized size of a new-setup request body.
///
/// # Errors
///
/// Returns `PersistenceError::Serialization` if the body cannot be
/// serialized.
pub fn payload_bytes(request: &NewWeeklySetup) -> Result<usize, PersistenceError> {
    serde_json::to_vec(request)
        .map(|body| body.len())
        .map_err(|err| PersistenceError::Serialization(err.to_string()))
}

/// Trims the uploaded-schedule rows of a request whose serialized body
/// exceeds [`MAX_SETUP_PAYLOAD_BYTES`].
///
/// Each row is reduced to the minimal fields required to reconstruct
/// assignments. Returns whether a trim occurred; a request at or under
/// the threshold is left untouched, and trimming an already-trimmed
/// request is a no-op.
///
/// # Errors
///
/// Returns `PersistenceError::Serialization` if the body cannot be
/// measured.
pub fn trim_for_submission(request: &mut NewWeeklySetup) -> Result<bool, PersistenceError> {
    if payload_bytes(request)? <= MAX_SETUP_PAYLOAD_BYTES {
        return Ok(false);
    }
    for entry in &mut request.uploaded_schedules {
        *entry = entry.trimmed();
    }
    Ok(true)
}
