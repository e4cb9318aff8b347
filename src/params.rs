// src/params.rs

// Net config
pub const HOST: &str = "www.awaresystems.be";
pub const PREFIX: &str = "/imaging/tiff/tifftags/";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// One page per tag family. Processed strictly in this order; later pages
// are checked against the ids accumulated from earlier ones.
pub const SOURCE_PAGES: [&str; 5] = [
    "baseline.html",
    "extension.html",
    "private.html",
    "privateifd/exif.html",
    "privateifd/gps.html",
];

// Splice target: the decoder source file that carries the generated table.
// Hand-written code above the marker is preserved byte-for-byte.
pub const TARGET_FILE: &str = "src/arw_file/ifd/tag.rs";
pub const MARKER: &str = "// Auto-generated code below";

/// Full URL of a source page, for log and error messages.
pub fn page_url(page: &str) -> String {
    format!("http://{}{}{}", HOST, PREFIX, page)
}
