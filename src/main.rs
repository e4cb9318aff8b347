// src/main.rs
// Regenerates the static TIFF/EXIF tag table in the ARW decoder source.
// Takes no flags: the source pages, marker and target path are compiled in
// (see src/params.rs). Run it from the decoder checkout root.

use std::env;

use color_eyre::eyre::{Result, bail};

use tag_scrape::params::TARGET_FILE;
use tag_scrape::{loge, runner};

fn main() -> Result<()> {
    color_eyre::install()?;

    if let Some(arg) = env::args().nth(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                eprintln!("Usage: tag_scrape");
                eprintln!("Scrapes the TIFF tag reference pages and regenerates {TARGET_FILE}.");
                return Ok(());
            }
            other => bail!("unknown argument: {other} (this tool takes none)"),
        }
    }

    let summary = match runner::run() {
        Ok(s) => s,
        Err(e) => {
            loge!("run failed: {}", e);
            return Err(e.into());
        }
    };

    println!(
        "Done: {} tags from {} pages -> {}",
        summary.tag_count,
        summary.pages,
        summary.target.display()
    );
    Ok(())
}
