//! Temporal payloads: time-of-day and datetime.
//!
//! # Wire shapes
//! A time is a signed 64-bit count of milliseconds since midnight, valid
//! on `[0, 86_400_000)`.  A datetime is a signed 64-bit count of
//! milliseconds since the wire epoch, 1400-01-01T00:00:00, an epoch old
//! enough that every date in live data sits at a positive offset.
//!
//! Datetimes carry whole-second precision: the encoder drops the
//! sub-second field and the decoder floors foreign sub-second payloads to
//! the second.  Times keep their milliseconds.  Both are naive; no zone
//! ever appears on the wire.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::error::{Result, WireError};
use crate::wire::{WireReader, WireWriter};

/// Milliseconds from the wire epoch (1400-01-01) to the Unix epoch.
pub(crate) const EPOCH_OFFSET_MS: i64 = 17_987_443_200_000;

const DAY_MS: i64 = 86_400_000;

// ── Time of day ──────────────────────────────────────────────────────────────

pub fn write_time(w: &mut WireWriter, t: NaiveTime) {
    let secs = i64::from(t.num_seconds_from_midnight());
    // A leap-second fold reports >= 1000 fractional ms; clamp so the
    // payload stays inside the day.
    let millis = i64::from(t.nanosecond() / 1_000_000).min(999);
    w.write_i64(secs * 1000 + millis);
}

pub fn read_time(r: &mut WireReader) -> Result<NaiveTime> {
    let millis = r.read_i64()?;
    if !(0..DAY_MS).contains(&millis) {
        return Err(WireError::TypeMismatch(format!(
            "time payload {millis} ms is outside the 24-hour range"
        )));
    }
    let secs = (millis / 1000) as u32;
    let nano = (millis % 1000) as u32 * 1_000_000;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, nano).ok_or_else(|| {
        WireError::TypeMismatch(format!("time payload {millis} ms is not a valid time of day"))
    })
}

// ── Datetime ────────────────────────────────────────────────────────────────

pub fn write_datetime(w: &mut WireWriter, dt: NaiveDateTime) -> Result<()> {
    let unix_secs = dt.and_utc().timestamp();
    let wire_ms = unix_secs
        .checked_mul(1000)
        .and_then(|ms| ms.checked_add(EPOCH_OFFSET_MS))
        .ok_or_else(|| {
            WireError::TypeMismatch("datetime is outside the range of the wire epoch field".into())
        })?;
    w.write_i64(wire_ms);
    Ok(())
}

pub fn read_datetime(r: &mut WireReader) -> Result<NaiveDateTime> {
    let wire_ms = r.read_i64()?;
    let dt = wire_ms
        .checked_sub(EPOCH_OFFSET_MS)
        .map(|ms| ms.div_euclid(1000))
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .ok_or_else(|| {
            WireError::TypeMismatch(format!(
                "datetime payload {wire_ms} ms is outside the representable range"
            ))
        })?;
    Ok(dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn round_trip_dt(dt: NaiveDateTime) -> NaiveDateTime {
        let mut w = WireWriter::new();
        write_datetime(&mut w, dt).unwrap();
        let bytes = w.into_bytes();
        read_datetime(&mut WireReader::new(&bytes)).unwrap()
    }

    #[test]
    fn unix_epoch_sits_at_the_documented_offset() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut w = WireWriter::new();
        write_datetime(&mut w, epoch).unwrap();
        let bytes = w.into_bytes();
        assert_eq!(i64::from_be_bytes(bytes.try_into().unwrap()), EPOCH_OFFSET_MS);
    }

    #[test]
    fn wire_zero_is_the_wire_epoch() {
        let bytes = 0i64.to_be_bytes();
        let dt = read_datetime(&mut WireReader::new(&bytes)).unwrap();
        let epoch = NaiveDate::from_ymd_opt(1400, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(dt, epoch);
    }

    #[test]
    fn sub_second_payloads_floor_to_the_second() {
        for (wire_ms, unix_secs) in [(EPOCH_OFFSET_MS + 500, 0), (EPOCH_OFFSET_MS - 500, -1)] {
            let bytes = wire_ms.to_be_bytes();
            let dt = read_datetime(&mut WireReader::new(&bytes)).unwrap();
            assert_eq!(dt.and_utc().timestamp(), unix_secs);
        }
    }

    #[test]
    fn pre_unix_dates_round_trip() {
        let dt = NaiveDate::from_ymd_opt(1848, 2, 29)
            .unwrap()
            .and_hms_opt(6, 30, 15)
            .unwrap();
        assert_eq!(round_trip_dt(dt), dt);
    }

    #[test]
    fn times_keep_their_milliseconds() {
        let t = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_000).unwrap();
        let mut w = WireWriter::new();
        write_time(&mut w, t);
        let bytes = w.into_bytes();
        assert_eq!(read_time(&mut WireReader::new(&bytes)).unwrap(), t);
    }

    #[test]
    fn a_full_day_or_more_is_rejected() {
        for millis in [DAY_MS, -1i64] {
            let bytes = millis.to_be_bytes();
            assert!(matches!(
                read_time(&mut WireReader::new(&bytes)),
                Err(WireError::TypeMismatch(_))
            ));
        }
    }
}
