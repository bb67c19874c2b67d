//! This modules defines the common functionality for paging data.

use serde::Serialize;

use crate::Error;

/// One page of a sequence along with the number of pages in the sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on the requested page.
    pub items: Vec<T>,
    /// The number of pages needed to show every item.
    pub total_pages: u64,
}

/// Select page `page_number` (starting from 1) of `records`, `page_size` items per page.
///
/// Page numbers past the last page, and page 0, give an empty page rather
/// than an error.
///
/// Callers should go back to page 1 whenever the filter that produced
/// `records` changes.
///
/// # Errors
/// Returns [Error::InvalidPageSize] if `page_size` is zero.
pub fn paginate<T: Clone>(
    records: &[T],
    page_size: u64,
    page_number: u64,
) -> Result<Page<T>, Error> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize);
    }

    let total_pages = (records.len() as u64).div_ceil(page_size);

    let items = page_number
        .checked_sub(1)
        .and_then(|page_index| page_index.checked_mul(page_size))
        .and_then(|start| usize::try_from(start).ok())
        .filter(|&start| start < records.len())
        .map(|start| {
            let end = usize::try_from(page_size)
                .map_or(records.len(), |size| start.saturating_add(size))
                .min(records.len());
            records[start..end].to_vec()
        })
        .unwrap_or_default();

    Ok(Page { items, total_pages })
}
