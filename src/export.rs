use std::io::Write;

use crate::types::Standing;

/// Column order of the CSV header and the database table. Both sinks must
/// agree with the `Standing` field order.
pub const COLUMNS: [&str; 12] = [
    "uuid",
    "position",
    "team_name",
    "played",
    "won",
    "drawn",
    "lost",
    "goals_for",
    "goals_against",
    "goal_difference",
    "points",
    "form",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV flush failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the header row then one record per standing, in the order given.
/// The first failed write aborts the rest; a partial file is possible and
/// the caller treats any error as fatal.
pub fn write_csv<W: Write>(writer: W, standings: &[Standing]) -> Result<(), ExportError> {
    // Header is written up front, not lazily on the first record, so an
    // empty record set still yields a well-formed single-line file.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for standing in standings {
        wtr.serialize(standing)?;
    }
    wtr.flush()?;
    Ok(())
}
