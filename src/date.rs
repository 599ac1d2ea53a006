//! Creation-date parsing and latency arithmetic.

use time::format_description::well_known::Iso8601;
use time::PrimitiveDateTime;

/// Parse a dump `CreationDate` attribute (ISO-8601, no offset, optional
/// fractional seconds, e.g. `2008-07-31T21:42:52.667`). Returns `None` on
/// malformed input; callers treat that as a record-level skip.
pub fn parse_creation_date(raw: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT).ok()
}

/// Signed latency between a question and one of its answers, in seconds.
/// Negative values mean the dump claims the answer predates the question.
pub fn latency_seconds(question: PrimitiveDateTime, answer: PrimitiveDateTime) -> f64 {
    (answer - question).as_seconds_f64()
}

pub const SECONDS_PER_DAY: f64 = 86_400.0;
