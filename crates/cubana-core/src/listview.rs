//! Shared list-view pipeline: filter, search, sort, window
//!
//! Every tabular screen derives its rows the same way: structured filters
//! first, then free-text search, then a descending-date sort, then either a
//! fixed "recent" truncation or page windowing. All steps are pure and
//! re-runnable on any state change.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::models::{Movement, Operation};
use super::types::MovementKind;

/// Rows that carry a timestamp for the descending-date sort
pub trait Dated {
    fn sort_date(&self) -> DateTime<Utc>;
}

impl Dated for Operation {
    fn sort_date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Dated for Movement {
    fn sort_date(&self) -> DateTime<Utc> {
        self.date
    }
}

// ==================== Search ====================

/// Case-insensitive substring match over independently evaluated fields
///
/// An empty or whitespace-only query matches everything.
pub fn matches_query(fields: &[String], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&query))
}

/// Filter rows by free-text query, using a caller-supplied field extractor
///
/// Input order is preserved; sorting is a separate step.
pub fn search_by<T: Clone, F>(items: &[T], query: &str, extract: F) -> Vec<T>
where
    F: Fn(&T) -> Vec<String>,
{
    items
        .iter()
        .filter(|item| matches_query(&extract(item), query))
        .cloned()
        .collect()
}

/// Search combined operation rows on their synthesized field set
pub fn search_operations(items: &[Operation], query: &str) -> Vec<Operation> {
    search_by(items, query, Operation::search_fields)
}

// ==================== Structured filters ====================

/// Exact-match filters for the finance movement listing
///
/// `kind` and `province` are ANDed; `None` means "all".
pub fn filter_movements(
    movements: &[Movement],
    kind: Option<MovementKind>,
    province: Option<&str>,
) -> Vec<Movement> {
    movements
        .iter()
        .filter(|m| kind.map_or(true, |k| m.kind == k))
        .filter(|m| {
            province.map_or(true, |p| {
                m.province.as_ref().map_or(false, |mp| mp.id == p)
            })
        })
        .cloned()
        .collect()
}

// ==================== Sort & windowing ====================

/// Sort rows newest first
pub fn sort_desc<T: Dated>(items: &mut [T]) {
    items.sort_by(|a, b| b.sort_date().cmp(&a.sort_date()));
}

/// "Recent" window: sort descending and keep the first `limit` rows
pub fn recent<T: Dated>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    sort_desc(&mut items);
    items.truncate(limit);
    items
}

/// One page of a windowed list
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served (after clamping)
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Window a filtered list into fixed-size pages
///
/// `total_pages = ceil(count / page_size)`; the requested page is clamped
/// to `[1, total_pages]`, so navigating past the end re-serves the last
/// page. An empty list, or a zero `page_size`, yields page 1 of 1 with no
/// rows.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_count = items.len();
    if page_size == 0 {
        return Page {
            items: Vec::new(),
            page: 1,
            page_size,
            total_count,
            total_pages: 1,
        };
    }
    let total_pages = std::cmp::max(1, (total_count + page_size - 1) / page_size);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let rows = items
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();
    Page {
        items: rows,
        page,
        page_size,
        total_count,
        total_pages,
    }
}

/// Navigation state of a historic view
///
/// Tracks the current query and page together so that a query change
/// always resets the window to the first page.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    query: String,
    page: usize,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Change the search term; any change resets to page 1
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.page = 1;
        }
    }

    /// Move to a page; clamping happens when the list is windowed
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::sample_remesa;
    use crate::types::OperationStatus;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn op(id: &str, y: i32, m: u32, d: u32) -> Operation {
        let mut remesa = sample_remesa(id, OperationStatus::Pendiente);
        remesa.date = Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap();
        Operation::from(&remesa)
    }

    #[test]
    fn test_empty_query_returns_input_unchanged() {
        let items = vec![op("a", 2024, 1, 1), op("b", 2024, 3, 1)];
        let result = search_operations(&items, "");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "a");
        assert_eq!(result[1].id, "b");
    }

    #[test]
    fn test_search_matches_formatted_date_only() {
        let items = vec![op("a", 2024, 1, 15), op("b", 2024, 3, 1)];
        let result = search_operations(&items, "15/01/2024");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![op("a", 2024, 1, 1)];
        assert_eq!(search_operations(&items, "MARIA").len(), 1);
        assert_eq!(search_operations(&items, "pendiente").len(), 1);
        assert_eq!(search_operations(&items, "no-such-thing").len(), 0);
    }

    #[test]
    fn test_sort_desc_newest_first() {
        let mut items = vec![op("jan", 2024, 1, 1), op("mar", 2024, 3, 1), op("feb", 2024, 2, 1)];
        sort_desc(&mut items);
        let ids: Vec<&str> = items.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["mar", "feb", "jan"]);
    }

    #[test]
    fn test_recent_truncates_after_sort() {
        let items: Vec<Operation> = (1..=15).map(|d| op(&format!("op{}", d), 2024, 3, d)).collect();
        let result = recent(items, 10);
        assert_eq!(result.len(), 10);
        assert_eq!(result[0].id, "op15");
        assert_eq!(result[9].id, "op6");
    }

    #[test]
    fn test_paginate_23_items() {
        let items: Vec<usize> = (1..=23).collect();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![21, 22, 23]);
    }

    #[test]
    fn test_paginate_clamps_past_end() {
        let items: Vec<usize> = (1..=23).collect();
        let page = paginate(&items, 4, 10);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![21, 22, 23]);

        let page = paginate(&items, 0, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn test_paginate_zero_page_size() {
        let items: Vec<usize> = (1..=5).collect();
        let page = paginate(&items, 2, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 5);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_paginate_empty_list() {
        let items: Vec<usize> = vec![];
        let page = paginate(&items, 5, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_page_state_resets_on_query_change() {
        let mut state = PageState::new();
        state.set_page(3);
        state.set_query("maria");
        assert_eq!(state.page(), 1);
        assert_eq!(state.query(), "maria");

        // Same query leaves the page alone
        state.set_page(2);
        state.set_query("maria");
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_filter_movements_by_kind_and_province() {
        use crate::models::{Movement, ProvinceRef};
        let mv = |id: &str, kind: MovementKind, prov: &str| Movement {
            id: id.to_string(),
            kind,
            amount: Decimal::from(100),
            operation_id: None,
            date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            province: Some(ProvinceRef {
                id: prov.to_string(),
                name: prov.to_string(),
                code: None,
            }),
        };
        let movements = vec![
            mv("a", MovementKind::Entrada, "p1"),
            mv("b", MovementKind::Remesa, "p1"),
            mv("c", MovementKind::Entrada, "p2"),
        ];

        let all = filter_movements(&movements, None, None);
        assert_eq!(all.len(), 3);

        let entradas = filter_movements(&movements, Some(MovementKind::Entrada), None);
        assert_eq!(entradas.len(), 2);

        let p1_entradas = filter_movements(&movements, Some(MovementKind::Entrada), Some("p1"));
        assert_eq!(p1_entradas.len(), 1);
        assert_eq!(p1_entradas[0].id, "a");
    }
}
