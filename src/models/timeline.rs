//! Per-employee timelines and the first-seen-ordered registry holding them.

use std::collections::HashMap;

use super::Shift;

/// The shifts worked by one employee, sorted by start once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeTimeline {
    employee_id: String,
    employee_name: String,
    shifts: Vec<Shift>,
}

impl EmployeeTimeline {
    /// Creates an empty timeline.
    pub fn new(employee_id: impl Into<String>, employee_name: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            shifts: Vec::new(),
        }
    }

    /// Creates a timeline from already collected shifts, sorting them by start.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_compliance::models::{EmployeeTimeline, Shift};
    /// use chrono::NaiveDateTime;
    ///
    /// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let timeline = EmployeeTimeline::with_shifts(
    ///     "E1",
    ///     "Ada",
    ///     vec![
    ///         Shift::new(at("2026-01-16 09:00:00"), at("2026-01-16 17:00:00")),
    ///         Shift::new(at("2026-01-15 09:00:00"), at("2026-01-15 17:00:00")),
    ///     ],
    /// );
    /// assert_eq!(timeline.shifts()[0].start, at("2026-01-15 09:00:00"));
    /// ```
    pub fn with_shifts(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        shifts: Vec<Shift>,
    ) -> Self {
        let mut timeline = Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            shifts,
        };
        timeline.sort_shifts();
        timeline
    }

    /// The employee id.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// The employee name recorded on the first row seen for this id.
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    /// The shifts, ascending by start.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Returns true if no shift was recorded.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub(crate) fn push_shift(&mut self, shift: Shift) {
        self.shifts.push(shift);
    }

    // Stable: ties keep insertion order.
    pub(crate) fn sort_shifts(&mut self) {
        self.shifts.sort_by_key(|shift| shift.start);
    }
}

/// Employee timelines keyed by id, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeRegistry {
    timelines: Vec<EmployeeTimeline>,
    index: HashMap<String, usize>,
}

impl EmployeeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct employees.
    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    /// Returns true if no employee was registered.
    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }

    /// Total number of shifts across every timeline.
    pub fn shift_count(&self) -> usize {
        self.timelines.iter().map(|t| t.shifts.len()).sum()
    }

    /// Looks up a timeline by employee id.
    pub fn get(&self, employee_id: &str) -> Option<&EmployeeTimeline> {
        self.index.get(employee_id).map(|&i| &self.timelines[i])
    }

    /// Iterates timelines in the order their employees were first seen.
    pub fn iter(&self) -> impl Iterator<Item = &EmployeeTimeline> {
        self.timelines.iter()
    }

    /// Adds a timeline. If the id is already present, its shifts are appended
    /// to the existing timeline, which keeps its first-seen name and position.
    pub fn insert(&mut self, timeline: EmployeeTimeline) {
        match self.index.get(&timeline.employee_id) {
            Some(&i) => {
                let existing = &mut self.timelines[i];
                existing.shifts.extend(timeline.shifts);
                existing.sort_shifts();
            }
            None => {
                self.index
                    .insert(timeline.employee_id.clone(), self.timelines.len());
                self.timelines.push(timeline);
            }
        }
    }

    /// Returns the timeline for `employee_id`, registering it with
    /// `employee_name` on first sight.
    pub(crate) fn register(&mut self, employee_id: &str, employee_name: &str) -> &mut EmployeeTimeline {
        let i = match self.index.get(employee_id) {
            Some(&i) => i,
            None => {
                let i = self.timelines.len();
                self.timelines
                    .push(EmployeeTimeline::new(employee_id, employee_name));
                self.index.insert(employee_id.to_string(), i);
                i
            }
        };
        &mut self.timelines[i]
    }

    pub(crate) fn sort_all(&mut self) {
        for timeline in &mut self.timelines {
            timeline.sort_shifts();
        }
    }
}

impl FromIterator<EmployeeTimeline> for EmployeeRegistry {
    fn from_iter<I: IntoIterator<Item = EmployeeTimeline>>(iter: I) -> Self {
        let mut registry = Self::new();
        for timeline in iter {
            registry.insert(timeline);
        }
        registry
    }
}
