use crate::job::Job;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of fields in a well-formed record: name, URL
const FIELDS_PER_RECORD: usize = 2;

/// Reads jobs from CSV records, in input order
///
/// Records that cannot be decoded or do not have exactly two fields are
/// skipped with a warning. Both fields are trimmed; blank fields are kept
/// so the job is reported as invalid rather than silently dropped.
///
/// # Arguments
///
/// * `reader` - CSV data
/// * `has_header` - Skip the first record
///
/// # Returns
///
/// * `Ok(Vec<Job>)` - Every well-formed record
/// * `Err(csv::Error)` - The underlying reader failed
pub fn read_jobs<R: Read>(reader: R, has_header: bool) -> Result<Vec<Job>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(reader);

    let mut jobs = Vec::new();

    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e),
            Err(e) => {
                tracing::warn!("Skipping record: {}", e);
                continue;
            }
        };

        if record.len() != FIELDS_PER_RECORD {
            tracing::warn!(
                "Skipping record on line {}: expected {} fields, got {}",
                record.position().map(|p| p.line()).unwrap_or(0),
                FIELDS_PER_RECORD,
                record.len()
            );
            continue;
        }

        jobs.push(Job::new(record[0].trim(), record[1].trim()));
    }

    Ok(jobs)
}

/// Opens a CSV file and reads its jobs
pub fn open_jobs(path: &Path, has_header: bool) -> crate::Result<Vec<Job>> {
    let file = File::open(path)?;
    let jobs = read_jobs(file, has_header)?;
    tracing::info!("Read {} jobs from {}", jobs.len(), path.display());
    Ok(jobs)
}
