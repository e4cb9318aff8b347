// src/specs/tifftags.rs
//! Scraping spec for the TIFF tag reference pages.
//!
//! All five pages (baseline, extension, private, EXIF, GPS) share one
//! layout: the tag listing is a table nested in the seventh cell of the
//! fourth row of the page's single top-level table. Each listing row has
//! four cells, in order: decimal id, hex id, tag name, description.
//!
//! Any step of that path failing to resolve means the upstream layout
//! drifted; that is surfaced as `Error::Structure`, never skipped over.

use crate::core::html::{inner_after_open_tag, strip_tags, tag_blocks};
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::error::{Error, Result};
use crate::registry::Tag;

/// One listing row: the cell texts in page order, already tag-stripped,
/// entity-decoded and whitespace-collapsed.
#[derive(Debug)]
pub struct RawRow {
    pub cells: Vec<String>,
}

/// Walk the fixed structural path and return the listing rows in page order.
pub fn extract_rows(doc: &str, url: &str) -> Result<Vec<RawRow>> {
    let drift = |what: &'static str| Error::Structure { url: s!(url), what };

    let body = first_block(doc, "body").ok_or_else(|| drift("no <body>"))?;
    let layout = first_block(body, "table")
        .ok_or_else(|| drift("no top-level table under <body>"))?;

    let rows = tag_blocks(layout, "tr");
    let row4 = rows
        .get(3)
        .map(|&(s, e)| &layout[s..e])
        .ok_or_else(|| drift("layout table has fewer than four rows"))?;

    let cells = tag_blocks(inner_after_open_tag(row4), "td");
    let cell7 = cells
        .get(6)
        .map(|&(s, e)| &inner_after_open_tag(row4)[s..e])
        .ok_or_else(|| drift("fourth layout row has fewer than seven cells"))?;

    let listing = first_block(inner_after_open_tag(cell7), "table")
        .ok_or_else(|| drift("tag listing table missing"))?;

    let mut out = Vec::new();
    for &(s, e) in &tag_blocks(listing, "tr") {
        let row = &listing[s..e];
        let cells = tag_blocks(inner_after_open_tag(row), "td")
            .iter()
            .map(|&(cs, ce)| cell_text(&inner_after_open_tag(row)[cs..ce]))
            .collect();
        out.push(RawRow { cells });
    }
    Ok(out)
}

/// Coerce one listing row into a tag candidate.
///
/// The hex id cell is redundant with the decimal one and ignored. The `ifd`
/// flag is a placeholder here; it is derived over the finalized set.
pub fn normalize_row(row: &RawRow, url: &str) -> Result<Tag> {
    if row.cells.len() < 4 {
        return Err(Error::Structure {
            url: s!(url),
            what: "listing row with fewer than four cells",
        });
    }
    let id: u16 = row.cells[0].parse().map_err(|_| Error::Parse {
        url: s!(url),
        cell: row.cells[0].clone(),
    })?;
    Ok(Tag {
        id,
        ifd: false,
        label: row.cells[2].clone(),
        description: row.cells[3].clone(),
    })
}

fn first_block<'a>(s: &'a str, tag: &str) -> Option<&'a str> {
    tag_blocks(s, tag)
        .first()
        .map(|&(bs, be)| inner_after_open_tag(&s[bs..be]))
}

fn cell_text(block: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(inner_after_open_tag(block))))
}
