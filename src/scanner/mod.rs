//! Concurrent scanning of text files against a shared sensitive trie.
//!
//! Files are split across scoped worker threads. Every worker holds only a
//! shared reference to the trie, so all scans run under its read lock in
//! parallel.

use std::path::{Path, PathBuf};
use std::thread;

use serde::Serialize;
use tracing::{debug, info};

use crate::data_structures::SensitiveTrie;
use crate::error::{KapuError, KapuResult};
use crate::word_list::read_utf8;

/// The sensitive words found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// The scanned file
    pub path: PathBuf,

    /// Distinct words found, in discovery order
    pub words: Vec<String>,
}

/// Scans a single file.
pub fn scan_file(trie: &SensitiveTrie, path: &Path) -> KapuResult<ScanReport> {
    let text = read_utf8(path)?;
    let words = trie.match_text(&text);
    debug!(path = %path.display(), matched = words.len(), "Scanned file");
    Ok(ScanReport {
        path: path.to_path_buf(),
        words,
    })
}

/// Scans `paths` on up to `worker_threads` threads.
///
/// Reports are returned in the order of `paths`. The first failing file
/// aborts the whole scan with its error.
pub fn scan_files(
    trie: &SensitiveTrie,
    paths: &[PathBuf],
    worker_threads: usize,
) -> KapuResult<Vec<ScanReport>> {
    if paths.is_empty() {
        return Ok(Vec::new());
    }

    let workers = worker_threads.clamp(1, paths.len());
    let chunk_size = paths.len().div_ceil(workers);
    info!(files = paths.len(), workers, "Scanning files");

    let results: Vec<KapuResult<Vec<ScanReport>>> = thread::scope(|scope| {
        let handles: Vec<_> = paths
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|path| scan_file(trie, path))
                        .collect::<KapuResult<Vec<_>>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(KapuError::Custom("Scan worker panicked".to_string())))
            })
            .collect()
    });

    let mut reports = Vec::with_capacity(paths.len());
    for chunk in results {
        reports.extend(chunk?);
    }
    Ok(reports)
}
