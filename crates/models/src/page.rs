use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Zero-based page index and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub const fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    pub const fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// One more than the page size, so that a next page can be detected
    /// without a count query
    pub const fn fetch_limit(&self) -> u64 {
        self.size.saturating_add(1)
    }

    pub fn validate(&self, max_size: u64) -> Result<(), ValidationError> {
        if self.size == 0 || self.size > max_size {
            return Err(ValidationError::InvalidPageSize {
                size: self.size,
                max: max_size,
            });
        }

        // offsets are bound as signed 64-bit integers
        match self.page.checked_mul(self.size) {
            Some(offset) if i64::try_from(offset).is_ok() => Ok(()),
            _ => Err(ValidationError::PageOutOfRange {
                page: self.page,
                size: self.size,
            }),
        }
    }
}

/// A window of results plus whether another window follows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub has_next: bool,
}

impl<T> Slice<T> {
    /// Build a slice from rows fetched with [`PageRequest::fetch_limit`]
    pub fn from_overfetch(mut rows: Vec<T>, request: PageRequest) -> Self {
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let has_next = rows.len() > size;
        rows.truncate(size);

        Self {
            content: rows,
            page: request.page,
            size: request.size,
            has_next,
        }
    }

    pub fn map<U, F>(self, f: F) -> Slice<U>
    where
        F: FnMut(T) -> U,
    {
        Slice {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            has_next: self.has_next,
        }
    }
}
