// src/splice.rs

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::params::MARKER;

/// Replace everything from the marker line to end-of-file with `fragment`,
/// preserving the bytes above the marker. The new content goes to a temp
/// file beside the target and is renamed over it, so the target is never
/// left half-written.
pub fn splice(path: &Path, fragment: &str) -> Result<()> {
    if !path.is_file() {
        return Err(Error::TargetMissing(path.to_path_buf()));
    }
    let current = fs::read_to_string(path)?;
    let at = find_marker(&current).ok_or_else(|| Error::MarkerNotFound {
        marker: MARKER,
        path: path.to_path_buf(),
    })?;

    let mut next = String::with_capacity(at + fragment.len());
    next.push_str(&current[..at]);
    next.push_str(fragment);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| s!("target"));
    let tmp = path.with_file_name(format!("{name}.tmp"));
    fs::write(&tmp, &next)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    logd!("spliced {} bytes into {}", fragment.len(), path.display());
    Ok(())
}

/// Byte offset of the first line that begins with the marker.
fn find_marker(content: &str) -> Option<usize> {
    if content.starts_with(MARKER) {
        return Some(0);
    }
    content.find(&format!("\n{MARKER}")).map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tmp_file(name: &str, content: Option<&str>) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("tag_scrape_splice_{name}"));
        let _ = fs::remove_file(&p);
        if let Some(c) = content {
            fs::write(&p, c).unwrap();
        }
        p
    }

    #[test]
    fn replaces_from_marker_to_eof_and_keeps_the_prefix() {
        let before = format!("// keep me\n{MARKER}\nold stuff");
        let p = tmp_file("basic.rs", Some(&before));
        splice(&p, &format!("{MARKER}\nnew stuff\n")).unwrap();
        let after = fs::read_to_string(&p).unwrap();
        assert_eq!(after, format!("// keep me\n{MARKER}\nnew stuff\n"));
        let _ = fs::remove_file(&p);
    }

    #[test]
    fn marker_on_the_first_line_replaces_the_whole_file() {
        let p = tmp_file("first.rs", Some(&format!("{MARKER}\nold")));
        splice(&p, &format!("{MARKER}\nnew\n")).unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), format!("{MARKER}\nnew\n"));
        let _ = fs::remove_file(&p);
    }

    #[test]
    fn marker_must_anchor_a_line() {
        // The marker text appearing mid-line is not the marker.
        let p = tmp_file("midline.rs", Some(&format!("let x = 1; {MARKER}\nbody")));
        let err = splice(&p, "fragment").unwrap_err();
        assert!(matches!(err, Error::MarkerNotFound { .. }));
        assert_eq!(
            fs::read_to_string(&p).unwrap(),
            format!("let x = 1; {MARKER}\nbody")
        );
        let _ = fs::remove_file(&p);
    }

    #[test]
    fn missing_target_is_reported() {
        let p = tmp_file("absent.rs", None);
        let err = splice(&p, "fragment").unwrap_err();
        assert!(matches!(err, Error::TargetMissing(_)));
    }

    #[test]
    fn missing_marker_leaves_the_file_untouched() {
        let p = tmp_file("nomarker.rs", Some("fn main() {}\n"));
        let err = splice(&p, "fragment").unwrap_err();
        assert!(matches!(err, Error::MarkerNotFound { .. }));
        assert_eq!(fs::read_to_string(&p).unwrap(), "fn main() {}\n");
        let _ = fs::remove_file(&p);
    }

    #[test]
    fn no_temp_file_survives_a_successful_splice() {
        let p = tmp_file("clean.rs", Some(&format!("{MARKER}\nold")));
        splice(&p, &format!("{MARKER}\nnew\n")).unwrap();
        let tmp = p.with_file_name(format!(
            "{}.tmp",
            p.file_name().unwrap().to_string_lossy()
        ));
        assert!(!tmp.exists());
        let _ = fs::remove_file(&p);
    }
}
