//! Human review of an extracted appointment.
//!
//! A review session starts `Extracted`, moves to `Editing` on the first edit
//! (and stays there for every later one), and ends `Confirmed`. Only
//! confirmation builds a [`CalendarEvent`]; a confirmed session is frozen.

use crate::appointment::{AppointmentData, Field};
use crate::date::{display_date, normalize_date_input};
use crate::duration::EventDuration;
use crate::error::{CardTimeError, CardTimeResult};
use crate::event::CalendarEvent;
use crate::locale::Locale;
use crate::observer::Observer;
use crate::time::normalize_time_input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    Extracted,
    Editing,
    Confirmed,
}

#[derive(Debug, Clone)]
pub struct Review {
    appointment: AppointmentData,
    locale: Locale,
    duration: EventDuration,
    state: ReviewState,
}

impl Review {
    pub fn new(appointment: AppointmentData, locale: Locale) -> Self {
        Review {
            appointment,
            locale,
            duration: EventDuration::default(),
            state: ReviewState::Extracted,
        }
    }

    /// Start from a preselected duration instead of the one-hour default.
    pub fn with_duration(mut self, duration: EventDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn state(&self) -> ReviewState {
        self.state
    }

    pub fn appointment(&self) -> &AppointmentData {
        &self.appointment
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn duration(&self) -> EventDuration {
        self.duration
    }

    /// The date as the locale writes it, recomputed from the current value.
    pub fn display_date(&self) -> String {
        display_date(&self.appointment.date, self.locale)
            .unwrap_or_else(|| self.appointment.date.clone())
    }

    pub fn set_duration(&mut self, duration: EventDuration) -> CardTimeResult<()> {
        self.begin_edit()?;
        self.duration = duration;
        Ok(())
    }

    /// Replace one field with a human-typed value.
    ///
    /// Dates and times are canonicalized; a value that cannot be is rejected
    /// and the record keeps its previous value.
    pub fn edit(&mut self, field: Field, value: &str) -> CardTimeResult<()> {
        self.begin_edit()?;

        let canonical = match field {
            Field::Date => normalize_date_input(value, self.locale),
            Field::Time => normalize_time_input(value),
            Field::Artist | Field::Deposit | Field::Size => {
                Some(value.trim().to_string()).filter(|v| !v.is_empty())
            }
        };

        let canonical = canonical.ok_or_else(|| CardTimeError::invalid(field, value))?;
        self.appointment.set(field, canonical);
        Ok(())
    }

    /// Freeze the record and build the event.
    ///
    /// If the build fails the session stays open so the offending field can
    /// be fixed.
    pub fn confirm(&mut self, observer: &Observer) -> CardTimeResult<CalendarEvent> {
        if self.state == ReviewState::Confirmed {
            return Err(CardTimeError::AlreadyConfirmed);
        }

        let event =
            CalendarEvent::build(self.appointment.clone(), self.duration, self.locale, observer)?;
        self.state = ReviewState::Confirmed;
        Ok(event)
    }

    fn begin_edit(&mut self) -> CardTimeResult<()> {
        match self.state {
            ReviewState::Confirmed => Err(CardTimeError::AlreadyConfirmed),
            ReviewState::Extracted | ReviewState::Editing => {
                self.state = ReviewState::Editing;
                Ok(())
            }
        }
    }
}
