//! Age derivation from a date of birth.
//!
//! Author DTOs expose an `age` field computed from the stored
//! `date_of_birth`; sorting by `age` is therefore a reversed sort on
//! the underlying column (see `query::sort`).

use chrono::{Datelike, NaiveDate, Utc};

/// Whole years elapsed between `date_of_birth` and today (UTC).
///
/// Subtracts one year when this year's birthday has not been reached
/// yet. Returns 0 for a date of birth in the future.
pub fn age_from_date_of_birth(date_of_birth: NaiveDate) -> i32 {
    age_at(date_of_birth, Utc::now().date_naive())
}

/// Whole years between `date_of_birth` and `on` (exposed for tests).
pub fn age_at(date_of_birth: NaiveDate, on: NaiveDate) -> i32 {
    if date_of_birth > on {
        return 0;
    }

    let mut age = on.year() - date_of_birth.year();

    // Birthday not reached yet this year.
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }

    age.max(0)
}
