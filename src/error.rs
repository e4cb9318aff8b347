// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a run can fail. Each stage fails fast and propagates upward;
/// nothing is retried and nothing degrades to partial output.
#[derive(Debug, Error)]
pub enum Error {
    /// Source unreachable, or the host answered with a non-2xx status.
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// The fixed structural path did not resolve: the page layout drifted
    /// and the scrape is no longer trustworthy.
    #[error("unexpected page structure at {url}: {what}")]
    Structure { url: String, what: &'static str },

    /// A listing row's id cell is not a valid tag id.
    #[error("bad tag id {cell:?} at {url}")]
    Parse { url: String, cell: String },

    /// Two sources define the same id with different content. Irreconcilable;
    /// silently picking one would bake wrong metadata into the decoder.
    #[error("tag {id} defined twice with different content: {existing:?} vs {candidate:?}")]
    Conflict {
        id: u16,
        existing: String,
        candidate: String,
    },

    #[error("target file missing: {}", .0.display())]
    TargetMissing(PathBuf),

    #[error("marker {marker:?} not found in {}", .path.display())]
    MarkerNotFound { marker: &'static str, path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}
