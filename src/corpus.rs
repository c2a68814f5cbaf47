use crate::config::{PROGRESS_INTERVAL, READ_BUFFER_SIZE};
use crate::models::Entry;
use anyhow::{bail, Context, Result};
use bzip2::read::BzDecoder;
use indicatif::ProgressBar;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Opens a JSON Lines corpus, decompressing on the fly when the file ends in `.bz2`.
pub fn open_corpus(path: &str) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("Failed to open corpus at: {}", path))?;
    let is_bz2 = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bz2"));

    if is_bz2 {
        Ok(Box::new(BufReader::with_capacity(
            READ_BUFFER_SIZE,
            BzDecoder::new(file),
        )))
    } else {
        Ok(Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, file)))
    }
}

pub fn read_entries(path: &str, limit: Option<usize>) -> Result<Vec<Entry>> {
    info!("Reading corpus from: {}", path);
    let reader = open_corpus(path)?;
    parse_entries(reader, limit).with_context(|| format!("Failed to read corpus: {}", path))
}

/// Parses one entry per non-blank line, stopping after `limit` entries.
/// Entry ids must be unique.
pub fn parse_entries<R: BufRead>(reader: R, limit: Option<usize>) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut first_line_of: FxHashMap<u32, usize> = FxHashMap::default();
    let pb = ProgressBar::new_spinner();

    for (idx, line) in reader.lines().enumerate() {
        if limit.is_some_and(|max| entries.len() >= max) {
            break;
        }

        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let entry: Entry = serde_json::from_str(&line)
            .with_context(|| format!("Malformed entry on line {}", line_no))?;

        if let Some(prev) = first_line_of.insert(entry.id, line_no) {
            bail!(
                "Duplicate entry id {} on line {} (first seen on line {})",
                entry.id,
                line_no,
                prev
            );
        }

        entries.push(entry);
        if entries.len() % PROGRESS_INTERVAL == 0 {
            pb.tick();
        }
    }

    pb.finish_and_clear();
    info!(entries = entries.len(), "Corpus loaded");
    Ok(entries)
}
