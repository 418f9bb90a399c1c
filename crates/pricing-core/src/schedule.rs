//! Task schedule resolution
//!
//! Converts a task group's raw hour markers into a normalized daily
//! active-hours duration. Reserved (savings-plan) tasks are always-on with a
//! fixed [0, 24] window. Metered (on-demand) tasks declare an arbitrary
//! window; when the end marker is before the start marker the window crosses
//! midnight.

use tracing::warn;

use crate::error::{Error, Result};

/// Hours in a day; also the largest accepted hour marker.
pub const HOURS_IN_DAY: u32 = 24;

/// A resolved daily schedule for a group of identical task instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    count: u32,
    start_hour: u32,
    end_hour: u32,
    per_task_hours: u32,
}

impl Schedule {
    /// Resolve an always-on schedule: every instance runs 24 hours a day.
    pub fn always_on(count: u32) -> Self {
        Self {
            count,
            start_hour: 0,
            end_hour: HOURS_IN_DAY,
            per_task_hours: HOURS_IN_DAY,
        }
    }

    /// Resolve a metered schedule from raw hour markers.
    ///
    /// Markers must lie in 0..=24. An end marker before the start marker
    /// means the window wraps past midnight: duration = (24 - start) + end.
    /// Equal markers denote a zero-duration schedule, which is permitted but
    /// prices to nothing.
    pub fn metered(count: u32, start_hour: u32, end_hour: u32) -> Result<Self> {
        for marker in [start_hour, end_hour] {
            if marker > HOURS_IN_DAY {
                return Err(Error::HourMarkerOutOfRange { value: marker });
            }
        }

        let per_task_hours = if end_hour < start_hour {
            (HOURS_IN_DAY - start_hour) + end_hour
        } else {
            end_hour - start_hour
        };
        if per_task_hours == 0 {
            warn!(start_hour, end_hour, "schedule resolves to zero hours");
        }

        Ok(Self {
            count,
            start_hour,
            end_hour,
            per_task_hours,
        })
    }

    /// Number of identical task instances.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Raw start marker of the active window.
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Raw end marker of the active window.
    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Active hours per instance per day.
    pub fn per_task_hours(&self) -> u32 {
        self.per_task_hours
    }

    /// Active hours for the whole group per day.
    ///
    /// Widened so the product cannot overflow for any `u32` instance count.
    pub fn total_hours(&self) -> u64 {
        u64::from(self.count) * u64::from(self.per_task_hours)
    }
}
