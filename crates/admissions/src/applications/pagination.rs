use serde::{Deserialize, Serialize};

use super::domain::ApplicationRecord;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 1-indexed page request. Callers choose their own page size; the defaults
/// only apply when a value is omitted entirely. Pages below 1 are accepted and
/// resolve to an empty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Zero-based offset of the first record, or `None` when the page lies
    /// before the start of the collection (page 0 or negative).
    pub(crate) fn offset(&self) -> Option<usize> {
        let index = usize::try_from(self.page.checked_sub(1)?).ok()?;
        index.checked_mul(self.page_size as usize)
    }

    pub(crate) fn total_pages(&self, total: usize) -> usize {
        match self.page_size {
            0 => 0,
            size => total.div_ceil(size as usize),
        }
    }
}

/// Query-string form of [`PageRequest`] with both parameters optional.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<u32>,
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        Self {
            page: params.page.unwrap_or(DEFAULT_PAGE),
            page_size: params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPage {
    pub data: Vec<ApplicationRecord>,
    pub total: usize,
    pub page: i64,
    pub page_size: u32,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_one_indexed() {
        assert_eq!(PageRequest::new(1, 6).offset(), Some(0));
        assert_eq!(PageRequest::new(3, 5).offset(), Some(10));
        assert_eq!(PageRequest::new(0, 5).offset(), None);
        assert_eq!(PageRequest::new(-1, 5).offset(), None);
        assert_eq!(PageRequest::new(i64::MIN, 5).offset(), None);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PageRequest::new(1, 5).total_pages(25), 5);
        assert_eq!(PageRequest::new(1, 6).total_pages(25), 5);
        assert_eq!(PageRequest::new(1, 10).total_pages(25), 3);
        assert_eq!(PageRequest::new(1, 10).total_pages(0), 0);
    }

    #[test]
    fn params_fall_back_to_defaults_only_when_missing() {
        let request = PageRequest::from(PageParams {
            page: None,
            page_size: Some(6),
        });
        assert_eq!(request, PageRequest::new(1, 6));

        let request = PageRequest::from(PageParams::default());
        assert_eq!(request, PageRequest::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE));
    }
}
