//! Operator report rendering
//!
//! Renders one round's histogram as terminal text, CRLF line endings. Purely
//! a formatting step; all state lives in [`Buckets`].
use core::fmt::Write;

use crate::histogram::Buckets;

/// Write the end-of-round report.
///
/// Two header lines, then one `Bucket <period>: <count>` line per non-empty
/// bucket in ascending period order, the period right-justified to at least
/// three characters. Empty buckets are omitted.
pub fn write_report<W: Write, const B: usize>(
    sink: &mut W,
    buckets: &Buckets<B>,
) -> core::fmt::Result {
    write!(sink, "Finished capturing.\r\n")?;
    write!(sink, "{} Buckets used; omitting empty buckets.\r\n", B)?;
    for (period, count) in buckets.occupied() {
        write!(sink, "Bucket {:3}: {}\r\n", period, count)?;
    }
    Ok(())
}
