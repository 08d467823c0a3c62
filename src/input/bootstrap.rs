use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Sample input written when no input file exists yet
pub const SAMPLE_INPUT: &str = "suggestedName,Link\n\
Jack Jones Portfolio,https://www.jackljones.com/\n\
Books,https://books.toscrape.com/\n\
\"This is a test of getting, JSON\",https://jsonplaceholder.typicode.com/todos/1\n";

/// Creates the input file with sample records if it does not exist
///
/// An existing file is never modified.
///
/// # Returns
///
/// * `Ok(true)` - The file was created
/// * `Ok(false)` - The file already existed
/// * `Err(io::Error)` - The file could not be created
pub fn ensure_input_exists(path: &Path) -> std::io::Result<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e),
    };

    file.write_all(SAMPLE_INPUT.as_bytes())?;
    tracing::info!("Created sample input file at {}", path.display());
    Ok(true)
}
