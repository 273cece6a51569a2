#![forbid(unsafe_code)]

use std::sync::Arc;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Maps a wall-clock value to the offset in force at that moment.
pub type OffsetResolver = Arc<dyn Fn(PrimitiveDateTime) -> UtcOffset + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("name is required")]
    MissingName,
    #[error("title is required")]
    MissingTitle,
    #[error("select a proposal before creating tasks")]
    MissingProposal,
    #[error("budget must be a decimal number, got: {0}")]
    InvalidBudget(String),
    #[error("deadline must look like YYYY-MM-DDTHH:MM, got: {0}")]
    InvalidDeadline(String),
}

/// Trimmed text, or `None` when blank.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Decimal budget typed by the user. Blank means "no budget".
pub fn parse_budget(raw: &str) -> Result<Option<f64>, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| FormError::InvalidBudget(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(FormError::InvalidBudget(trimmed.to_string()));
    }
    Ok(Some(value))
}

/// Converts a `datetime-local` picker value (`YYYY-MM-DDTHH:MM[:SS]`) into
/// ISO-8601 UTC with millisecond precision. `offset_at` gives the local offset for
/// the picked wall time, so a date past a DST change gets that date's offset.
/// Values already carrying an offset (RFC 3339) are converted as-is. Blank means
/// "no deadline".
pub fn deadline_to_utc_iso(
    raw: &str,
    offset_at: impl Fn(PrimitiveDateTime) -> UtcOffset,
) -> Result<Option<String>, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let instant = parse_deadline(trimmed, offset_at)
        .ok_or_else(|| FormError::InvalidDeadline(trimmed.to_string()))?;
    format_utc_iso(instant)
        .map(Some)
        .ok_or_else(|| FormError::InvalidDeadline(trimmed.to_string()))
}

/// A wall-clock picker value without an offset, or `None` for anything else.
pub fn parse_local_datetime(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    let minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let fractional =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    PrimitiveDateTime::parse(raw, &minutes)
        .or_else(|_| PrimitiveDateTime::parse(raw, &seconds))
        .or_else(|_| PrimitiveDateTime::parse(raw, &fractional))
        .ok()
}

/// The host zone's offset at `local`, or UTC when the host cannot tell.
///
/// The lookup is refused once the process has more than one thread, so callers
/// that need it resolve before spawning any.
pub fn host_offset_at(local: PrimitiveDateTime) -> UtcOffset {
    let lookup = |instant: OffsetDateTime| UtcOffset::local_offset_at(instant).ok();
    let Some(guess) = lookup(local.assume_utc()) else {
        return UtcOffset::UTC;
    };
    // second pass: the guess was taken at the wrong instant near a transition
    lookup(local.assume_offset(guess)).unwrap_or(guess)
}

/// Resolver over the host zone.
pub fn host_offsets() -> OffsetResolver {
    Arc::new(host_offset_at)
}

fn parse_deadline(
    raw: &str,
    offset_at: impl Fn(PrimitiveDateTime) -> UtcOffset,
) -> Option<OffsetDateTime> {
    if let Ok(instant) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(instant);
    }
    let local = parse_local_datetime(raw)?;
    Some(local.assume_offset(offset_at(local)))
}

fn format_utc_iso(instant: OffsetDateTime) -> Option<String> {
    let iso = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    instant.to_offset(UtcOffset::UTC).format(&iso).ok()
}
