//! Log lines for case data input and report output

use std::path::Path;
use std::time::Duration;

use log::info;

/// Announce that an input file is about to be read
///
/// * `kind` - what the file holds, e.g. "case data"
pub fn log_input_open(kind: &str, path: &Path) {
    info!("Reading {kind} from {}", path.display());
}

/// Report rows taken from an input file
pub fn log_input_read(kind: &str, path: &Path, rows: usize, elapsed: Duration) {
    info!(
        "Read {rows} rows of {kind} from {} in {elapsed:?}",
        path.display()
    );
}

/// Report an output file written by this run
///
/// * `unit` - what `items` counts, e.g. "cells" or "records"
pub fn log_output_written(kind: &str, path: &Path, items: usize, unit: &str) {
    info!("Wrote {kind} to {} ({items} {unit})", path.display());
}
