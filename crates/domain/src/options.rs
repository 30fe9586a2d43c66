// crates/domain/src/options.rs
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use poem_site_shared_kernel::DomainError;

/// Metadata field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Filename,
    Modified,
    Created,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// One of the six user-selectable orderings. Parses from and renders to
/// the wire tokens carried in the sort-preference cookie
/// (`filename-asc` .. `created-desc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption { field: SortField::Filename, order: SortOrder::Asc },
        SortOption { field: SortField::Filename, order: SortOrder::Desc },
        SortOption { field: SortField::Modified, order: SortOrder::Asc },
        SortOption { field: SortField::Modified, order: SortOrder::Desc },
        SortOption { field: SortField::Created, order: SortOrder::Asc },
        SortOption { field: SortField::Created, order: SortOrder::Desc },
    ];

    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn as_str(self) -> &'static str {
        match (self.field, self.order) {
            (SortField::Filename, SortOrder::Asc) => "filename-asc",
            (SortField::Filename, SortOrder::Desc) => "filename-desc",
            (SortField::Modified, SortOrder::Asc) => "modified-asc",
            (SortField::Modified, SortOrder::Desc) => "modified-desc",
            (SortField::Created, SortOrder::Asc) => "created-asc",
            (SortField::Created, SortOrder::Desc) => "created-desc",
        }
    }
}

impl Default for SortOption {
    fn default() -> Self {
        Self::new(SortField::Filename, SortOrder::Asc)
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let option = match s.trim() {
            "filename-asc" => Self::new(SortField::Filename, SortOrder::Asc),
            "filename-desc" => Self::new(SortField::Filename, SortOrder::Desc),
            "modified-asc" => Self::new(SortField::Modified, SortOrder::Asc),
            "modified-desc" => Self::new(SortField::Modified, SortOrder::Desc),
            "created-asc" => Self::new(SortField::Created, SortOrder::Asc),
            "created-desc" => Self::new(SortField::Created, SortOrder::Desc),
            other => {
                return Err(DomainError::InvalidSortOption { value: other.to_string() });
            }
        };
        Ok(option)
    }
}
