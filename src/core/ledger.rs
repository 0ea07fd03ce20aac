//! Per-developer, per-week capacity bookkeeping.

use std::collections::HashMap;

use crate::core::PlannerError;

/// Hour ceiling of a single developer week.
pub const MAX_HOURS_PER_WEEK: f64 = 45.0;

/// Accumulated committed hours for every developer of a roster.
///
/// Developers are addressed by their position in the roster. Weeks are 1-based
/// and created lazily: a week that was never committed to holds zero hours.
#[derive(Debug, Clone)]
pub struct CapacityLedger {
    max_hours: f64,
    weeks: Vec<HashMap<u32, f64>>,
}

impl CapacityLedger {
    /// Create an empty ledger for `developers` roster slots.
    #[must_use]
    pub fn new(developers: usize, max_hours: f64) -> Self {
        Self {
            max_hours,
            weeks: (0..developers).map(|_| HashMap::with_capacity(10)).collect(),
        }
    }

    /// Hour ceiling applied to every week.
    #[must_use]
    pub const fn max_hours(&self) -> f64 {
        self.max_hours
    }

    /// Number of roster slots tracked.
    #[must_use]
    pub fn developers(&self) -> usize {
        self.weeks.len()
    }

    /// Hours committed to `developer` in `week`.
    #[must_use]
    pub fn load(&self, developer: usize, week: u32) -> f64 {
        self.weeks
            .get(developer)
            .and_then(|loads| loads.get(&week))
            .copied()
            .unwrap_or(0.0)
    }

    /// Earliest week, scanning upward from 1, where `hours` still fits.
    ///
    /// Returns `None` when `hours` can never fit a single week (negative,
    /// non-finite, or above the ceiling) or the developer slot is unknown.
    #[must_use]
    pub fn earliest_fit(&self, developer: usize, hours: f64) -> Option<u32> {
        if !(0.0..=self.max_hours).contains(&hours) || developer >= self.weeks.len() {
            return None;
        }
        // Terminates: only finitely many weeks hold any load.
        let mut week = 1;
        while self.load(developer, week) + hours > self.max_hours {
            week += 1;
        }
        Some(week)
    }

    /// Add `hours` to `developer` in `week`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::CapacityExceeded` if the week would pass the
    /// ceiling; the ledger is left untouched in that case.
    pub fn commit(&mut self, developer: usize, week: u32, hours: f64) -> Result<(), PlannerError> {
        let load = self.load(developer, week);
        let max_hours = self.max_hours;
        let Some(loads) = self.weeks.get_mut(developer) else {
            return Err(PlannerError::CapacityExceeded {
                week,
                load,
                hours,
            });
        };
        if week == 0 || !(load + hours <= max_hours) {
            return Err(PlannerError::CapacityExceeded {
                week,
                load,
                hours,
            });
        }
        *loads.entry(week).or_insert(0.0) += hours;
        Ok(())
    }

    /// Committed weeks of `developer`, sorted by week number.
    #[must_use]
    pub fn weeks_of(&self, developer: usize) -> Vec<(u32, f64)> {
        let mut weeks: Vec<(u32, f64)> = self
            .weeks
            .get(developer)
            .map(|loads| loads.iter().map(|(week, hours)| (*week, *hours)).collect())
            .unwrap_or_default();
        weeks.sort_by_key(|(week, _)| *week);
        weeks
    }
}
