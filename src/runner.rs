// src/runner.rs

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::codegen;
use crate::core::net;
use crate::error::Result;
use crate::params::{SOURCE_PAGES, TARGET_FILE, page_url};
use crate::registry::TagSet;
use crate::specs::tifftags;
use crate::splice;

/// What a successful run produced.
pub struct RunSummary {
    pub pages: usize,
    pub tag_count: usize,
    pub target: PathBuf,
}

/// The whole pipeline: fetch every source page in registry order, fold the
/// rows into one validated tag set, derive the IFD flags, render the
/// fragment and splice it into the target. Strictly sequential, because
/// later pages are judged against the ids accumulated from earlier ones.
/// All-or-nothing: any failure aborts before the target file is touched.
pub fn run() -> Result<RunSummary> {
    let mut tags = TagSet::new();

    for page in SOURCE_PAGES {
        let url = page_url(page);
        println!("Fetching {url}");
        logf!("fetch {}", url);

        let doc = net::http_get(page)?;
        let rows = tifftags::extract_rows(&doc, &url)?;

        let mut added = 0usize;
        for row in &rows {
            let tag = tifftags::normalize_row(row, &url)?;
            let id = tag.id;
            if tags.insert(tag)? {
                added += 1;
            } else {
                // Same id, same content, different page. Harmless today,
                // but it means the sources overlap, so surface it.
                logw!("tag {} re-defined identically on {}", id, page);
                eprintln!("Warning: tag {id} re-defined identically on {page}");
            }
        }
        println!("  {} rows, {} new tags", rows.len(), added);
        logf!("{}: {} rows, {} new tags", page, rows.len(), added);
    }

    tags.derive_ifd_flags();

    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S %z").to_string();
    let fragment = codegen::render(&tags, &stamp);

    let target = Path::new(TARGET_FILE);
    splice::splice(target, &fragment)?;
    logf!("wrote {} tags to {}", tags.len(), TARGET_FILE);

    Ok(RunSummary {
        pages: SOURCE_PAGES.len(),
        tag_count: tags.len(),
        target: target.to_path_buf(),
    })
}
