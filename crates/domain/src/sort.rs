// crates/domain/src/sort.rs
use std::cmp::Ordering;

use crate::model::PoemEntry;
use crate::options::{SortField, SortOption, SortOrder};

impl SortField {
    /// Compare two entries on this field alone.
    #[inline]
    pub fn compare(self, a: &PoemEntry, b: &PoemEntry) -> Ordering {
        match self {
            Self::Filename => a.path.name().cmp(b.path.name()),
            Self::Modified => a.meta.modified.cmp(&b.meta.modified),
            Self::Created => a.meta.created.cmp(&b.meta.created),
        }
    }
}

impl SortOption {
    #[inline]
    pub fn compare(self, a: &PoemEntry, b: &PoemEntry) -> Ordering {
        self.order.apply(self.field.compare(a, b))
    }
}

/// Sort entries in place. The underlying sort is stable: entries with
/// equal keys keep their encounter order.
pub fn apply(entries: &mut [PoemEntry], option: SortOption) {
    entries.sort_by(|a, b| option.compare(a, b));
}

/// Sorted copy of the input vector.
pub fn sorted(mut entries: Vec<PoemEntry>, option: SortOption) -> Vec<PoemEntry> {
    apply(&mut entries, option);
    entries
}

pub(crate) fn apply_refs(entries: &mut [&PoemEntry], option: SortOption) {
    entries.sort_by(|a, b| option.compare(a, b));
}

/// Most recently modified entries, newest first. This projection is fixed
/// to modified-desc no matter which sort option the caller renders with.
pub fn recently_modified(entries: &[PoemEntry], limit: usize) -> Vec<&PoemEntry> {
    recent(entries, limit, SortField::Modified)
}

/// Most recently created entries, newest first. Fixed to created-desc.
pub fn recently_created(entries: &[PoemEntry], limit: usize) -> Vec<&PoemEntry> {
    recent(entries, limit, SortField::Created)
}

fn recent(entries: &[PoemEntry], limit: usize, field: SortField) -> Vec<&PoemEntry> {
    let mut refs: Vec<&PoemEntry> = entries.iter().collect();
    apply_refs(&mut refs, SortOption::new(field, SortOrder::Desc));
    refs.truncate(limit);
    refs
}
