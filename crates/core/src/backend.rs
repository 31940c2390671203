// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The seam between the setup-sheet store and the system of record,
//! plus the request DTOs the persistence API accepts.

use crate::error::PersistenceError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use setup_sheet_domain::{Employee, Template, UploadedScheduleEntry, WeekSchedule, WeeklySetup};

/// Request body for creating a template: a [`Template`] minus the
/// server-assigned id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    /// The template display name.
    pub name: String,
    /// The blueprint schedule (assignments absent).
    pub week_schedule: WeekSchedule,
}

impl From<&Template> for NewTemplate {
    fn from(template: &Template) -> Self {
        Self {
            name: template.name.clone(),
            week_schedule: template.week_schedule.clone(),
        }
    }
}

/// Partial update for a template. Absent fields are left untouched by
/// the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePatch {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_schedule: Option<WeekSchedule>,
}

/// Request body for creating a weekly setup: a [`WeeklySetup`] minus the
/// server-assigned id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWeeklySetup {
    /// The setup display name.
    pub name: String,
    /// First day of the covered week.
    pub start_date: NaiveDate,
    /// Last day of the covered week.
    pub end_date: NaiveDate,
    /// The concrete schedule.
    pub week_schedule: WeekSchedule,
    /// Auxiliary uploaded-schedule rows. Subject to the payload-size
    /// safeguard (see [`crate::payload`]).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uploaded_schedules: Vec<UploadedScheduleEntry>,
}

impl From<&WeeklySetup> for NewWeeklySetup {
    fn from(setup: &WeeklySetup) -> Self {
        Self {
            name: setup.name.clone(),
            start_date: setup.start_date,
            end_date: setup.end_date,
            week_schedule: setup.week_schedule.clone(),
            uploaded_schedules: setup.uploaded_schedules.clone(),
        }
    }
}

/// Partial update for a weekly setup. Absent fields are left untouched
/// by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySetupPatch {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New start date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// New end date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Replacement schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_schedule: Option<WeekSchedule>,
    /// Replacement uploaded-schedule rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_schedules: Option<Vec<UploadedScheduleEntry>>,
}

impl WeeklySetupPatch {
    /// Builds a patch that replaces only the schedule.
    ///
    /// This is the shape every assignment mutation submits: the store
    /// swaps in a full new schedule rather than patching nested
    /// structures in place.
    #[must_use]
    pub fn schedule_only(week_schedule: WeekSchedule) -> Self {
        Self {
            week_schedule: Some(week_schedule),
            ..Self::default()
        }
    }
}

/// The persistence seam consumed by [`crate::SetupSheetStore`].
///
/// Implementations own all I/O; the store treats returned entities as
/// authoritative and replaces its in-memory collections wholesale from
/// them. All methods are independent units of work: the trait imposes no
/// queuing or ordering, and concurrent calls race with last-write-wins
/// semantics at the system of record.
#[allow(async_fn_in_trait, clippy::missing_errors_doc)]
pub trait SetupSheetBackend {
    /// Fetches all templates.
    async fn list_templates(&self) -> Result<Vec<Template>, PersistenceError>;

    /// Creates a template, returning the persisted entity.
    async fn create_template(&self, request: &NewTemplate) -> Result<Template, PersistenceError>;

    /// Applies a partial update to a template, returning the updated
    /// entity.
    async fn update_template(
        &self,
        template_id: &str,
        patch: &TemplatePatch,
    ) -> Result<Template, PersistenceError>;

    /// Deletes a template.
    async fn delete_template(&self, template_id: &str) -> Result<(), PersistenceError>;

    /// Fetches all weekly setups.
    async fn list_weekly_setups(&self) -> Result<Vec<WeeklySetup>, PersistenceError>;

    /// Creates a weekly setup, returning the persisted entity.
    async fn create_weekly_setup(
        &self,
        request: &NewWeeklySetup,
    ) -> Result<WeeklySetup, PersistenceError>;

    /// Applies a partial update to a weekly setup, returning the updated
    /// entity.
    async fn update_weekly_setup(
        &self,
        setup_id: &str,
        patch: &WeeklySetupPatch,
    ) -> Result<WeeklySetup, PersistenceError>;

    /// Deletes a weekly setup.
    async fn delete_weekly_setup(&self, setup_id: &str) -> Result<(), PersistenceError>;

    /// Fetches the employee directory (read-only collaborator).
    async fn list_employees(&self) -> Result<Vec<Employee>, PersistenceError>;
}
