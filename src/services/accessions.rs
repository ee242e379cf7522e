//! Accession logging and time-windowed aggregation.

use chrono::{Duration, Utc};
use rusqlite::params;

use crate::constants::{DAY_WINDOW_HOURS, TIMESTAMP_FORMAT, WEEK_WINDOW_DAYS};
use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::models::AccessionStats;
use crate::queries::Accessions;

/// Append one accession for a surl (called on every successful redirect)
pub fn record_accession(pool: &DbPool, surl_id: i64) -> Result<(), AppError> {
    let conn = get_conn(pool)?;
    conn.execute(Accessions::INSERT, params![surl_id])?;
    Ok(())
}

/// Count accessions for a surl: all-time, last week, last day.
///
/// Windows are computed from wall-clock time at call time with cutoffs
/// exclusive at the cutoff instant. An unknown surl id yields zero counts
/// rather than NotFound; this path has no existence check.
pub fn accession_stats(pool: &DbPool, surl_id: i64) -> Result<AccessionStats, AppError> {
    let conn = get_conn(pool)?;
    let now = Utc::now();

    let week_cutoff = (now - Duration::days(WEEK_WINDOW_DAYS))
        .format(TIMESTAMP_FORMAT)
        .to_string();
    let day_cutoff = (now - Duration::hours(DAY_WINDOW_HOURS))
        .format(TIMESTAMP_FORMAT)
        .to_string();

    let all_time: i64 =
        conn.query_row(Accessions::COUNT_BY_SURL, params![surl_id], |row| row.get(0))?;
    let week: i64 = conn.query_row(
        Accessions::COUNT_SINCE,
        params![surl_id, week_cutoff],
        |row| row.get(0),
    )?;
    let day: i64 = conn.query_row(
        Accessions::COUNT_SINCE,
        params![surl_id, day_cutoff],
        |row| row.get(0),
    )?;

    Ok(AccessionStats {
        all_time,
        week,
        day,
    })
}
