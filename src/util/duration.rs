//! Assignment duration in whole days.

#[cfg(test)]
#[path = "duration_test.rs"]
mod duration_test;

use time::Date;

use crate::net::types::Assignment;

/// Days an assignment has run, counting both the first and last day.
///
/// The end is the assignment's end date when set, otherwise `viewing_date`.
/// An assignment without a start date has no duration, and one starting after
/// the end counts as 0.
#[must_use]
pub fn calculate_duration(assignment: &Assignment, viewing_date: Date) -> i64 {
    let Some(start) = assignment.start_date else {
        return 0;
    };
    let end = assignment.end_date.unwrap_or(viewing_date);
    ((end - start).whole_days() + 1).max(0)
}

#[must_use]
pub fn duration_unit(days: i64) -> &'static str {
    if days == 1 { "day" } else { "days" }
}
