use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Get today's date in `canonical_timezone`, or in UTC if no timezone is given.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not a
/// known IANA timezone name such as "Pacific/Auckland".
pub fn today_in(canonical_timezone: Option<&str>) -> Result<Date, Error> {
    let offset = match canonical_timezone {
        Some(timezone) => get_local_offset(timezone)
            .ok_or_else(|| Error::InvalidTimezoneError(timezone.to_owned()))?,
        None => UtcOffset::UTC,
    };

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}
