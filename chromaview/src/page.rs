//! Offset/limit windows over a normalized record set.

use serde_json::Value as JsonValue;

use crate::error::{BridgeError, Result};
use crate::record::NormalizedRecordSet;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// A validated page request. Both fields are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Result<Self> {
        if page < 1 {
            return Err(BridgeError::invalid_parameter(
                "page",
                format!("page must be a positive integer, got {}", page),
            ));
        }
        if limit < 1 {
            return Err(BridgeError::invalid_parameter(
                "limit",
                format!("limit must be a positive integer, got {}", limit),
            ));
        }
        let page = usize::try_from(page)
            .map_err(|_| BridgeError::invalid_parameter("page", format!("page out of range: {}", page)))?;
        let limit = usize::try_from(limit)
            .map_err(|_| BridgeError::invalid_parameter("limit", format!("limit out of range: {}", limit)))?;
        Ok(Self { page, limit })
    }

    /// First index of the window.
    ///
    /// A window that would start at or past the end of the data is moved back
    /// so it ends on the last record and stays as full as the data allows.
    pub fn offset(&self, total: usize) -> usize {
        let offset = (self.page - 1).saturating_mul(self.limit);
        if offset >= total {
            total.saturating_sub(self.limit)
        } else {
            offset
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE as usize,
            limit: DEFAULT_LIMIT as usize,
        }
    }
}

/// One page of records plus the numbers needed to describe it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub ids: Vec<JsonValue>,
    pub documents: Vec<JsonValue>,
    pub metadatas: Vec<JsonValue>,
    pub embeddings: Vec<JsonValue>,
    /// Record count before pagination.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.limit)
    }

    /// Number of records in this window.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// `ceil(total / limit)`. `limit` must be non-zero.
pub fn total_pages(total: usize, limit: usize) -> usize {
    total.div_ceil(limit)
}

/// Cut the `[offset, offset + limit)` window out of every field.
///
/// A page number past the end of the data yields the last available window
/// rather than an empty one.
pub fn paginate(
    records: NormalizedRecordSet,
    core_len: usize,
    page: i64,
    limit: i64,
) -> Result<Page> {
    let request = PageRequest::new(page, limit)?;
    let offset = request.offset(core_len);
    tracing::debug!(core_len, offset, limit = request.limit, "Paginating record set");

    Ok(Page {
        ids: window(records.ids, offset, request.limit),
        documents: window(records.documents, offset, request.limit),
        metadatas: window(records.metadatas, offset, request.limit),
        embeddings: window(records.embeddings, offset, request.limit),
        total: core_len,
        page: request.page,
        limit: request.limit,
        offset,
    })
}

fn window(items: Vec<JsonValue>, offset: usize, limit: usize) -> Vec<JsonValue> {
    items.into_iter().skip(offset).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(n: usize) -> NormalizedRecordSet {
        NormalizedRecordSet {
            ids: (0..n).map(|i| json!(format!("id{}", i))).collect(),
            documents: (0..n).map(|i| json!(format!("doc{}", i))).collect(),
            metadatas: (0..n).map(|i| json!({ "i": i })).collect(),
            embeddings: (0..n).map(|i| json!([i as f64])).collect(),
        }
    }

    #[test]
    fn test_first_page() {
        let page = paginate(records(25), 25, 1, 10).unwrap();
        assert_eq!(page.offset, 0);
        assert_eq!(page.len(), 10);
        assert_eq!(page.ids[0], json!("id0"));
        assert_eq!(page.ids[9], json!("id9"));
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate(records(25), 25, 3, 10).unwrap();
        assert_eq!(page.offset, 20);
        assert_eq!(page.len(), 5);
        assert_eq!(page.documents.len(), 5);
        assert_eq!(page.embeddings.len(), 5);
        assert_eq!(page.ids[4], json!("id24"));
    }

    #[test]
    fn test_page_past_end_clamps() {
        let page = paginate(records(25), 25, 99, 10).unwrap();
        assert_eq!(page.offset, 15);
        assert_eq!(page.len(), 10);
        assert_eq!(page.ids[0], json!("id15"));
        assert_eq!(page.page, 99);
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let page = paginate(records(3), 3, i64::MAX, 2).unwrap();
        assert_eq!(page.offset, 1);
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_page_past_end_with_limit_above_total() {
        let page = paginate(records(4), 4, 3, 10).unwrap();
        assert_eq!(page.offset, 0);
        assert_eq!(page.len(), 4);
    }

    #[test]
    fn test_page_just_past_end() {
        let page = paginate(records(20), 20, 3, 10).unwrap();
        assert_eq!(page.offset, 10);
        assert_eq!(page.ids[0], json!("id10"));
        assert_eq!(page.len(), 10);
    }

    #[test]
    fn test_empty_set() {
        let page = paginate(NormalizedRecordSet::default(), 0, 4, 10).unwrap();
        assert_eq!(page.offset, 0);
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 1), 1);
    }

    #[test]
    fn test_rejects_non_positive_page_and_limit() {
        for (page, limit) in [(0, 10), (-1, 10), (1, 0), (1, -5)] {
            let err = paginate(records(5), 5, page, limit).unwrap_err();
            assert!(
                matches!(err, BridgeError::InvalidParameter { .. }),
                "page={} limit={} gave {:?}",
                page,
                limit,
                err
            );
        }
    }

    #[test]
    fn test_short_embeddings_window() {
        let mut set = records(6);
        set.embeddings.truncate(3);
        let page = paginate(set, 6, 2, 2).unwrap();
        assert_eq!(page.ids.len(), 2);
        assert_eq!(page.embeddings, vec![json!([2.0])]);
    }
}
