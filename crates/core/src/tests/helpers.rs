// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::{
    NewTemplate, NewWeeklySetup, SetupSheetBackend, TemplatePatch, WeeklySetupPatch,
};
use crate::error::PersistenceError;
use chrono::{NaiveDate, NaiveTime, Utc};
use setup_sheet_domain::{
    Employee, Position, Section, Template, TimeBlock, WeekSchedule, WeeklySetup, Weekday,
};
use std::cell::{Cell, RefCell};

/// An in-memory stand-in for the remote persistence API.
///
/// Assigns sequential ids and timestamps the way the service would, and
/// can be primed to fail the next call.
#[derive(Default)]
pub struct FakeBackend {
    pub templates: RefCell<Vec<Template>>,
    pub setups: RefCell<Vec<WeeklySetup>>,
    pub employees: RefCell<Vec<Employee>>,
    /// Total backend calls observed, across all methods.
    pub calls: Cell<usize>,
    /// When set, the next call fails with this error.
    pub fail_next: RefCell<Option<PersistenceError>>,
    next_id: Cell<usize>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_with(&self, err: PersistenceError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    fn observe(&self) -> Result<(), PersistenceError> {
        self.calls.set(self.calls.get() + 1);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn assign_id(&self, prefix: &str) -> String {
        let id: usize = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("{prefix}-{id}")
    }

    fn not_found(kind: &str, id: &str) -> PersistenceError {
        PersistenceError::Api {
            status: 404,
            message: format!("{kind} '{id}' not found"),
        }
    }
}

// Implemented for a shared reference so tests can keep the fake and
// inspect it after handing it to a store.
impl SetupSheetBackend for &FakeBackend {
    async fn list_templates(&self) -> Result<Vec<Template>, PersistenceError> {
        self.observe()?;
        Ok(self.templates.borrow().clone())
    }

    async fn create_template(&self, request: &NewTemplate) -> Result<Template, PersistenceError> {
        self.observe()?;
        let template: Template = Template {
            id: Some(self.assign_id("tpl")),
            name: request.name.clone(),
            week_schedule: request.week_schedule.clone(),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        };
        self.templates.borrow_mut().push(template.clone());
        Ok(template)
    }

    async fn update_template(
        &self,
        template_id: &str,
        patch: &TemplatePatch,
    ) -> Result<Template, PersistenceError> {
        self.observe()?;
        let mut templates = self.templates.borrow_mut();
        let template: &mut Template = templates
            .iter_mut()
            .find(|t| t.id.as_deref() == Some(template_id))
            .ok_or_else(|| FakeBackend::not_found("Template", template_id))?;
        if let Some(name) = &patch.name {
            template.name = name.clone();
        }
        if let Some(schedule) = &patch.week_schedule {
            template.week_schedule = schedule.clone();
        }
        template.updated_at = Some(Utc::now());
        Ok(template.clone())
    }

    async fn delete_template(&self, template_id: &str) -> Result<(), PersistenceError> {
        self.observe()?;
        let mut templates = self.templates.borrow_mut();
        let before: usize = templates.len();
        templates.retain(|t| t.id.as_deref() != Some(template_id));
        if templates.len() == before {
            return Err(FakeBackend::not_found("Template", template_id));
        }
        Ok(())
    }

    async fn list_weekly_setups(&self) -> Result<Vec<WeeklySetup>, PersistenceError> {
        self.observe()?;
        Ok(self.setups.borrow().clone())
    }

    async fn create_weekly_setup(
        &self,
        request: &NewWeeklySetup,
    ) -> Result<WeeklySetup, PersistenceError> {
        self.observe()?;
        let setup: WeeklySetup = WeeklySetup {
            id: Some(self.assign_id("setup")),
            name: request.name.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
            week_schedule: request.week_schedule.clone(),
            uploaded_schedules: request.uploaded_schedules.clone(),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        };
        self.setups.borrow_mut().push(setup.clone());
        Ok(setup)
    }

    async fn update_weekly_setup(
        &self,
        setup_id: &str,
        patch: &WeeklySetupPatch,
    ) -> Result<WeeklySetup, PersistenceError> {
        self.observe()?;
        let mut setups = self.setups.borrow_mut();
        let setup: &mut WeeklySetup = setups
            .iter_mut()
            .find(|s| s.id.as_deref() == Some(setup_id))
            .ok_or_else(|| FakeBackend::not_found("Weekly setup", setup_id))?;
        if let Some(name) = &patch.name {
            setup.name = name.clone();
        }
        if let Some(start_date) = patch.start_date {
            setup.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            setup.end_date = end_date;
        }
        if let Some(schedule) = &patch.week_schedule {
            setup.week_schedule = schedule.clone();
        }
        if let Some(uploaded) = &patch.uploaded_schedules {
            setup.uploaded_schedules = uploaded.clone();
        }
        setup.updated_at = Some(Utc::now());
        Ok(setup.clone())
    }

    async fn delete_weekly_setup(&self, setup_id: &str) -> Result<(), PersistenceError> {
        self.observe()?;
        let mut setups = self.setups.borrow_mut();
        let before: usize = setups.len();
        setups.retain(|s| s.id.as_deref() != Some(setup_id));
        if setups.len() == before {
            return Err(FakeBackend::not_found("Weekly setup", setup_id));
        }
        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, PersistenceError> {
        self.observe()?;
        Ok(self.employees.borrow().clone())
    }
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn position(id: &str, name: &str, count: u32) -> Position {
    Position::new(
        id.to_owned(),
        name.to_owned(),
        String::from("Register"),
        Section::Foh,
        String::from("#1565c0"),
        count,
    )
}

/// Builds a week schedule with one Monday block `[09:00,13:00)` holding
/// the given positions.
pub fn monday_schedule(positions: Vec<Position>) -> WeekSchedule {
    let mut time_block: TimeBlock = TimeBlock::new(
        String::from("b1"),
        Weekday::Monday,
        time(9, 0),
        time(13, 0),
    )
    .unwrap();
    time_block.positions = positions;
    let mut schedule: WeekSchedule = WeekSchedule::new();
    schedule.add_time_block(Weekday::Monday, time_block);
    schedule
}

pub fn employee(id: &str, name: &str) -> Employee {
    Employee {
        id: id.to_owned(),
        name: name.to_owned(),
        shift_start: time(8, 0),
        shift_end: time(16, 0),
        area: Section::Foh,
        day: None,
    }
}
