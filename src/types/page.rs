//! Cursor pagination.

use crate::Result;
use serde::{Deserialize, Serialize};

/// One page of a listing endpoint. `next_cursor == None` marks the last page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// Fetch pages starting without a cursor until one comes back without
/// `nextCursor`, concatenating the items.
pub fn collect_pages<T, F>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<&str>) -> Result<Page<T>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let page = fetch(cursor.as_deref())?;
        items.extend(page.items);
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }
    Ok(items)
}
