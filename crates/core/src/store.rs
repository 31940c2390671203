// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The setup-sheet store: the stateful orchestrator between the UI, the
//! conflict validator and the persistence backend.

use crate::backend::{
    NewTemplate, NewWeeklySetup, SetupSheetBackend, TemplatePatch, WeeklySetupPatch,
};
use crate::error::{PersistenceError, StoreError};
use crate::payload::{MAX_SETUP_PAYLOAD_BYTES, trim_for_submission};
use chrono::NaiveDate;
use setup_sheet_domain::{
    AssignmentCandidate, DomainError, Employee, Template, UploadedScheduleEntry, WeekSchedule,
    WeeklySetup, Weekday, validate_assignment, validate_week_schedule,
};
use tracing::{error, info, warn};

/// Client-side state for the setup-sheet screens.
///
/// The store is an explicit, constructed context object: tests and
/// embedders instantiate independent stores, and nothing here is global.
/// It exclusively owns the loaded entities; consumers treat returned
/// references as copy-on-read, because every successful mutation replaces
/// the affected entity wholesale instead of patching nested structures in
/// place.
///
/// Concurrency model: single-threaded and event-driven. Each action is an
/// independent asynchronous unit of work; the store does not queue or
/// serialize concurrent calls, and the system of record resolves races
/// with last-write-wins. No version token is exchanged.
#[derive(Debug)]
pub struct SetupSheetStore<B: SetupSheetBackend> {
    backend: B,
    first_day: Weekday,
    employees: Vec<Employee>,
    templates: Vec<Template>,
    weekly_setups: Vec<WeeklySetup>,
    current_template: Option<Template>,
    current_weekly_setup: Option<WeeklySetup>,
    is_loading: bool,
    error: Option<String>,
}

impl<B: SetupSheetBackend> SetupSheetStore<B> {
    /// Creates a new empty store over a backend.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            first_day: Weekday::Sunday,
            employees: Vec::new(),
            templates: Vec::new(),
            weekly_setups: Vec::new(),
            current_template: None,
            current_weekly_setup: None,
            is_loading: false,
            error: None,
        }
    }

    /// Sets the store's first-day-of-week display convention.
    #[must_use]
    pub const fn with_first_day(mut self, first_day: Weekday) -> Self {
        self.first_day = first_day;
        self
    }

    /// Returns the seven weekdays in this store's display order.
    #[must_use]
    pub fn week_order(&self) -> [Weekday; 7] {
        Weekday::week_from(self.first_day)
    }

    /// Returns the loaded employee directory.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the loaded templates.
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Returns the loaded weekly setups.
    #[must_use]
    pub fn weekly_setups(&self) -> &[WeeklySetup] {
        &self.weekly_setups
    }

    /// Returns the currently selected template, if any.
    #[must_use]
    pub const fn current_template(&self) -> Option<&Template> {
        self.current_template.as_ref()
    }

    /// Returns the currently selected weekly setup, if any.
    #[must_use]
    pub const fn current_weekly_setup(&self) -> Option<&WeeklySetup> {
        self.current_weekly_setup.as_ref()
    }

    /// Returns whether an async action is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Returns the last recorded failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clears the recorded failure message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Loads the employee directory.
    ///
    /// Failures are recorded into the store's `error` state and
    /// recovered; the previously loaded directory is kept.
    pub async fn load_employees(&mut self) {
        self.begin();
        match self.backend.list_employees().await {
            Ok(employees) => {
                info!(count = employees.len(), "Loaded employee directory");
                self.employees = employees;
            }
            Err(err) => self.record_failure("loading employees", &err),
        }
        self.finish();
    }

    /// Loads all templates.
    ///
    /// Failures are recorded into the store's `error` state and
    /// recovered; the previously loaded list is kept.
    pub async fn load_templates(&mut self) {
        self.begin();
        match self.backend.list_templates().await {
            Ok(templates) => {
                info!(count = templates.len(), "Loaded templates");
                self.templates = templates;
            }
            Err(err) => self.record_failure("loading templates", &err),
        }
        self.finish();
    }

    /// Loads all weekly setups.
    ///
    /// Failures are recorded into the store's `error` state and
    /// recovered; the previously loaded list is kept.
    pub async fn load_weekly_setups(&mut self) {
        self.begin();
        match self.backend.list_weekly_setups().await {
            Ok(setups) => {
                info!(count = setups.len(), "Loaded weekly setups");
                self.weekly_setups = setups;
            }
            Err(err) => self.record_failure("loading weekly setups", &err),
        }
        self.finish();
    }

    /// Creates a template from a schedule and selects it.
    ///
    /// Residual assignments are stripped; templates carry capacity only.
    ///
    /// # Errors
    ///
    /// Returns a domain error synchronously if the schedule is invalid;
    /// persistence failures are recorded into `error` and returned.
    pub async fn create_template(
        &mut self,
        week_schedule: WeekSchedule,
        name: &str,
    ) -> Result<Template, StoreError> {
        validate_week_schedule(&week_schedule)?;
        let template: Template = Template::new(name.to_owned(), week_schedule);
        self.submit_new_template(&NewTemplate::from(&template)).await
    }

    /// Saves the current weekly setup as a reusable template.
    ///
    /// The setup's schedule is deep-copied and every assignment stripped;
    /// the setup itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoCurrentSetup` if no setup is selected;
    /// persistence failures are recorded into `error` and returned.
    pub async fn save_as_template(&mut self, name: &str) -> Result<Template, StoreError> {
        let setup: &WeeklySetup = self
            .current_weekly_setup
            .as_ref()
            .ok_or(StoreError::NoCurrentSetup)?;
        let template: Template = Template::from_setup(setup, name.to_owned());
        self.submit_new_template(&NewTemplate::from(&template)).await
    }

    /// Applies a partial update to a template.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TemplateNotFound` synchronously for an
    /// unknown id; persistence failures are recorded into `error` and
    /// returned.
    pub async fn update_template(
        &mut self,
        template_id: &str,
        patch: &TemplatePatch,
    ) -> Result<Template, StoreError> {
        if self.find_template(template_id).is_none() {
            return Err(DomainError::TemplateNotFound(template_id.to_owned()).into());
        }
        if let Some(schedule) = &patch.week_schedule {
            validate_week_schedule(schedule)?;
        }

        self.begin();
        let result = self.backend.update_template(template_id, patch).await;
        self.finish();
        match result {
            Ok(updated) => {
                info!(template_id = %template_id, "Updated template");
                self.upsert_template(updated.clone());
                Ok(updated)
            }
            Err(err) => {
                self.record_failure("updating template", &err);
                Err(err.into())
            }
        }
    }

    /// Deletes a template.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TemplateNotFound` synchronously for an
    /// unknown id; persistence failures are recorded into `error` and
    /// returned.
    pub async fn delete_template(&mut self, template_id: &str) -> Result<(), StoreError> {
        if self.find_template(template_id).is_none() {
            return Err(DomainError::TemplateNotFound(template_id.to_owned()).into());
        }

        self.begin();
        let result = self.backend.delete_template(template_id).await;
        self.finish();
        match result {
            Ok(()) => {
                info!(template_id = %template_id, "Deleted template");
                self.templates
                    .retain(|t| t.id.as_deref() != Some(template_id));
                if self
                    .current_template
                    .as_ref()
                    .is_some_and(|t| t.id.as_deref() == Some(template_id))
                {
                    self.current_template = None;
                }
                Ok(())
            }
            Err(err) => {
                self.record_failure("deleting template", &err);
                Err(err.into())
            }
        }
    }

    /// Instantiates a template into a dated weekly setup and selects it.
    ///
    /// The template's schedule is deep-cloned with assignments stripped
    /// and the end date computed as `start_date + 6 days`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TemplateNotFound` synchronously for an
    /// unknown id; persistence failures are recorded into `error` and
    /// returned.
    pub async fn instantiate_template(
        &mut self,
        template_id: &str,
        start_date: NaiveDate,
    ) -> Result<WeeklySetup, StoreError> {
        let setup: WeeklySetup = {
            let template: &Template = self
                .find_template(template_id)
                .ok_or_else(|| DomainError::TemplateNotFound(template_id.to_owned()))?;
            let name: String = format!("{} (week of {start_date})", template.name);
            WeeklySetup::from_template(template, name, start_date)?
        };
        self.submit_new_setup(NewWeeklySetup::from(&setup)).await
    }

    /// Creates a weekly setup from scratch and selects it.
    ///
    /// # Errors
    ///
    /// Returns a domain error synchronously if the schedule is invalid or
    /// the date range is not exactly seven days; persistence failures are
    /// recorded into `error` and returned.
    pub async fn create_weekly_setup(
        &mut self,
        week_schedule: WeekSchedule,
        name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        uploaded_schedules: Vec<UploadedScheduleEntry>,
    ) -> Result<WeeklySetup, StoreError> {
        validate_week_schedule(&week_schedule)?;
        let mut setup: WeeklySetup =
            WeeklySetup::new(name.to_owned(), week_schedule, start_date, end_date)?;
        setup.uploaded_schedules = uploaded_schedules;
        self.submit_new_setup(NewWeeklySetup::from(&setup)).await
    }

    /// Applies a partial update to a weekly setup.
    ///
    /// # Errors
    ///
    /// Returns a domain error synchronously for an unknown id, an invalid
    /// schedule, or a patched date range that is not exactly seven days;
    /// persistence failures are recorded into `error` and returned.
    pub async fn update_weekly_setup(
        &mut self,
        setup_id: &str,
        patch: &WeeklySetupPatch,
    ) -> Result<WeeklySetup, StoreError> {
        let Some(existing) = self.find_weekly_setup(setup_id) else {
            return Err(DomainError::WeeklySetupNotFound(setup_id.to_owned()).into());
        };
        if let Some(schedule) = &patch.week_schedule {
            validate_week_schedule(schedule)?;
        }
        // The patched range is what the entity will hold after the update.
        let mut patched: WeeklySetup = existing.clone();
        if let Some(start_date) = patch.start_date {
            patched.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            patched.end_date = end_date;
        }
        patched.validate_dates()?;

        self.begin();
        let result = self.backend.update_weekly_setup(setup_id, patch).await;
        self.finish();
        match result {
            Ok(updated) => {
                info!(setup_id = %setup_id, "Updated weekly setup");
                self.upsert_weekly_setup(updated.clone());
                Ok(updated)
            }
            Err(err) => {
                self.record_failure("updating weekly setup", &err);
                Err(err.into())
            }
        }
    }

    /// Deletes a weekly setup.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::WeeklySetupNotFound` synchronously for an
    /// unknown id; persistence failures are recorded into `error` and
    /// returned.
    pub async fn delete_weekly_setup(&mut self, setup_id: &str) -> Result<(), StoreError> {
        if self.find_weekly_setup(setup_id).is_none() {
            return Err(DomainError::WeeklySetupNotFound(setup_id.to_owned()).into());
        }

        self.begin();
        let result = self.backend.delete_weekly_setup(setup_id).await;
        self.finish();
        match result {
            Ok(()) => {
                info!(setup_id = %setup_id, "Deleted weekly setup");
                self.weekly_setups
                    .retain(|s| s.id.as_deref() != Some(setup_id));
                if self
                    .current_weekly_setup
                    .as_ref()
                    .is_some_and(|s| s.id.as_deref() == Some(setup_id))
                {
                    self.current_weekly_setup = None;
                }
                Ok(())
            }
            Err(err) => {
                self.record_failure("deleting weekly setup", &err);
                Err(err.into())
            }
        }
    }

    /// Assigns an employee to a position in the current weekly setup.
    ///
    /// The conflict validator runs against the in-memory snapshot before
    /// anything touches the network; an inadmissible candidate is
    /// rejected without a backend call. On admission the store submits a
    /// full replacement schedule and swaps in the server's entity.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentConflict` / `PositionFull` synchronously for an
    /// inadmissible candidate, `StoreError::NoCurrentSetup` /
    /// `UnsavedSetup` when no persisted setup is selected; persistence
    /// failures are recorded into `error` and returned.
    pub async fn assign_employee(
        &mut self,
        day: Weekday,
        time_block_id: &str,
        position_id: &str,
        employee_id: &str,
    ) -> Result<WeeklySetup, StoreError> {
        let (setup_id, next_schedule): (String, WeekSchedule) = {
            let setup: &WeeklySetup = self
                .current_weekly_setup
                .as_ref()
                .ok_or(StoreError::NoCurrentSetup)?;
            let setup_id: String = setup.id.clone().ok_or(StoreError::UnsavedSetup)?;

            let candidate: AssignmentCandidate = AssignmentCandidate {
                employee_id: employee_id.to_owned(),
                day,
                time_block_id: time_block_id.to_owned(),
                position_id: position_id.to_owned(),
            };
            validate_assignment(&setup.week_schedule, &candidate)?;

            let mut next: WeekSchedule = setup.week_schedule.clone();
            next.set_assignment(day, time_block_id, position_id, Some(employee_id))?;
            (setup_id, next)
        };

        info!(
            employee_id = %employee_id,
            day = %day,
            time_block_id = %time_block_id,
            position_id = %position_id,
            "Assignment admitted"
        );
        self.push_schedule(&setup_id, next_schedule).await
    }

    /// Clears a position's assignment in the current weekly setup.
    ///
    /// # Errors
    ///
    /// Returns a domain error synchronously for an unknown block or
    /// position, `StoreError::NoCurrentSetup` / `UnsavedSetup` when no
    /// persisted setup is selected; persistence failures are recorded
    /// into `error` and returned.
    pub async fn unassign_employee(
        &mut self,
        day: Weekday,
        time_block_id: &str,
        position_id: &str,
    ) -> Result<WeeklySetup, StoreError> {
        let (setup_id, next_schedule): (String, WeekSchedule) = {
            let setup: &WeeklySetup = self
                .current_weekly_setup
                .as_ref()
                .ok_or(StoreError::NoCurrentSetup)?;
            let setup_id: String = setup.id.clone().ok_or(StoreError::UnsavedSetup)?;

            let mut next: WeekSchedule = setup.week_schedule.clone();
            next.set_assignment(day, time_block_id, position_id, None)?;
            (setup_id, next)
        };
        self.push_schedule(&setup_id, next_schedule).await
    }

    /// Selects a loaded template as current.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TemplateNotFound` for an unknown id.
    pub fn select_template(&mut self, template_id: &str) -> Result<(), StoreError> {
        let template: Template = self
            .find_template(template_id)
            .cloned()
            .ok_or_else(|| DomainError::TemplateNotFound(template_id.to_owned()))?;
        self.current_template = Some(template);
        Ok(())
    }

    /// Selects a loaded weekly setup as current.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::WeeklySetupNotFound` for an unknown id.
    pub fn select_weekly_setup(&mut self, setup_id: &str) -> Result<(), StoreError> {
        let setup: WeeklySetup = self
            .find_weekly_setup(setup_id)
            .cloned()
            .ok_or_else(|| DomainError::WeeklySetupNotFound(setup_id.to_owned()))?;
        self.current_weekly_setup = Some(setup);
        Ok(())
    }

    async fn submit_new_template(&mut self, request: &NewTemplate) -> Result<Template, StoreError> {
        self.begin();
        let result = self.backend.create_template(request).await;
        self.finish();
        match result {
            Ok(created) => {
                info!(template_id = ?created.id, name = %created.name, "Created template");
                self.upsert_template(created.clone());
                self.current_template = Some(created.clone());
                Ok(created)
            }
            Err(err) => {
                self.record_failure("creating template", &err);
                Err(err.into())
            }
        }
    }

    async fn submit_new_setup(
        &mut self,
        mut request: NewWeeklySetup,
    ) -> Result<WeeklySetup, StoreError> {
        if trim_for_submission(&mut request)? {
            warn!(
                limit_bytes = MAX_SETUP_PAYLOAD_BYTES,
                "Trimmed uploaded schedules to fit the payload limit"
            );
        }

        self.begin();
        let result = self.backend.create_weekly_setup(&request).await;
        self.finish();
        match result {
            Ok(created) => {
                info!(setup_id = ?created.id, name = %created.name, "Created weekly setup");
                self.upsert_weekly_setup(created.clone());
                self.current_weekly_setup = Some(created.clone());
                Ok(created)
            }
            Err(err) => {
                self.record_failure("creating weekly setup", &err);
                Err(err.into())
            }
        }
    }

    async fn push_schedule(
        &mut self,
        setup_id: &str,
        schedule: WeekSchedule,
    ) -> Result<WeeklySetup, StoreError> {
        let patch: WeeklySetupPatch = WeeklySetupPatch::schedule_only(schedule);
        self.begin();
        let result = self.backend.update_weekly_setup(setup_id, &patch).await;
        self.finish();
        match result {
            Ok(updated) => {
                info!(setup_id = %setup_id, "Saved weekly setup");
                self.upsert_weekly_setup(updated.clone());
                self.current_weekly_setup = Some(updated.clone());
                Ok(updated)
            }
            Err(err) => {
                self.record_failure("saving weekly setup", &err);
                Err(err.into())
            }
        }
    }

    fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    const fn finish(&mut self) {
        self.is_loading = false;
    }

    fn record_failure(&mut self, action: &str, err: &PersistenceError) {
        error!(error = %err, action = %action, "Setup-sheet action failed");
        self.error = Some(err.to_string());
    }

    fn find_template(&self, template_id: &str) -> Option<&Template> {
        self.templates
            .iter()
            .find(|t| t.id.as_deref() == Some(template_id))
    }

    fn find_weekly_setup(&self, setup_id: &str) -> Option<&WeeklySetup> {
        self.weekly_setups
            .iter()
            .find(|s| s.id.as_deref() == Some(setup_id))
    }

    fn upsert_template(&mut self, template: Template) {
        if self
            .current_template
            .as_ref()
            .is_some_and(|t| t.id.is_some() && t.id == template.id)
        {
            self.current_template = Some(template.clone());
        }
        match self
            .templates
            .iter_mut()
            .find(|t| t.id.is_some() && t.id == template.id)
        {
            Some(slot) => *slot = template,
            None => self.templates.push(template),
        }
    }

    fn upsert_weekly_setup(&mut self, setup: WeeklySetup) {
        if self
            .current_weekly_setup
            .as_ref()
            .is_some_and(|s| s.id.is_some() && s.id == setup.id)
        {
            self.current_weekly_setup = Some(setup.clone());
        }
        match self
            .weekly_setups
            .iter_mut()
            .find(|s| s.id.is_some() && s.id == setup.id)
        {
            Some(slot) => *slot = setup,
            None => self.weekly_setups.push(setup),
        }
    }
}
