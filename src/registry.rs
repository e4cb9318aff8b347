// src/registry.rs

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// One canonical tag definition, mirroring the decoder's `Tag` record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub id: u16,
    pub ifd: bool,
    pub label: String,
    pub description: String,
}

/// Accumulates tag definitions across all source pages, enforcing global id
/// uniqueness. An explicit value threaded through the run, not shared state.
/// Iterates in ascending id order, so repeated runs render identically.
#[derive(Debug, Default)]
pub struct TagSet {
    tags: BTreeMap<u16, Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Insert one candidate definition.
    ///
    /// Returns `Ok(true)` when the id was new, `Ok(false)` for an exact
    /// re-definition (benign; the caller decides whether to log it), and
    /// `Error::Conflict` when the same id arrives with different content.
    /// A conflict is fatal: silently picking one definition would bake
    /// wrong metadata into the decoder.
    pub fn insert(&mut self, tag: Tag) -> Result<bool> {
        match self.tags.get(&tag.id) {
            None => {
                self.tags.insert(tag.id, tag);
                Ok(true)
            }
            Some(existing)
                if existing.label == tag.label
                    && existing.description == tag.description =>
            {
                Ok(false)
            }
            Some(existing) => Err(Error::Conflict {
                id: tag.id,
                existing: existing.description.clone(),
                candidate: tag.description,
            }),
        }
    }

    /// Stamp the IFD-pointer flag on every accumulated record. Run once,
    /// after all sources have been folded in conflict-free.
    pub fn derive_ifd_flags(&mut self) {
        for tag in self.tags.values_mut() {
            tag.ifd = is_ifd_label(&tag.label);
        }
    }

    /// Records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.values()
    }

    pub fn get(&self, id: u16) -> Option<&Tag> {
        self.tags.get(&id)
    }
}

/// A tag points at a sub-IFD iff its published label says so.
/// Case-sensitive, exactly as the source pages print it.
pub fn is_ifd_label(label: &str) -> bool {
    label.contains("IFD")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: u16, label: &str, description: &str) -> Tag {
        Tag {
            id,
            ifd: false,
            label: s!(label),
            description: s!(description),
        }
    }

    #[test]
    fn fresh_id_inserts() {
        let mut set = TagSet::new();
        assert!(set.insert(tag(256, "ImageWidth", "Columns.")).unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn identical_redefinition_is_a_benign_noop() {
        let mut set = TagSet::new();
        set.insert(tag(700, "XMP", "XMP metadata")).unwrap();
        assert!(!set.insert(tag(700, "XMP", "XMP metadata")).unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn differing_redefinition_conflicts() {
        let mut set = TagSet::new();
        set.insert(tag(34665, "Exif IFD", "A pointer to the Exif IFD."))
            .unwrap();
        let err = set
            .insert(tag(34665, "Exif IFD", "Something else entirely."))
            .unwrap_err();
        match err {
            Error::Conflict { id, existing, candidate } => {
                assert_eq!(id, 34665);
                assert_eq!(existing, "A pointer to the Exif IFD.");
                assert_eq!(candidate, "Something else entirely.");
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
        // The first definition stands untouched.
        assert_eq!(set.get(34665).unwrap().description, "A pointer to the Exif IFD.");
    }

    #[test]
    fn label_mismatch_alone_also_conflicts() {
        let mut set = TagSet::new();
        set.insert(tag(330, "SubIFDs", "Child IFD offsets.")).unwrap();
        assert!(set.insert(tag(330, "SubIFD", "Child IFD offsets.")).is_err());
    }

    #[test]
    fn ifd_flags_follow_the_label_substring() {
        let mut set = TagSet::new();
        set.insert(tag(34853, "GPSInfo IFD Pointer", "GPS pointer.")).unwrap();
        set.insert(tag(256, "ImageWidth", "Columns.")).unwrap();
        set.insert(tag(34665, "Exif IFD", "Exif pointer.")).unwrap();
        set.derive_ifd_flags();
        assert!(set.get(34853).unwrap().ifd);
        assert!(set.get(34665).unwrap().ifd);
        assert!(!set.get(256).unwrap().ifd);
    }

    #[test]
    fn iteration_is_ascending_by_id() {
        let mut set = TagSet::new();
        set.insert(tag(700, "XMP", "XMP metadata")).unwrap();
        set.insert(tag(254, "NewSubfileType", "Subfile kind.")).unwrap();
        set.insert(tag(34665, "Exif IFD", "Exif pointer.")).unwrap();
        let ids: Vec<u16> = set.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![254, 700, 34665]);
    }
}
