//! List, filter and pagination engine of the admin view mode.
//!
//! `ListView` is a value: every transition consumes the current view and
//! returns the next one, so the whole engine can be exercised without a DOM.
//!
//! Invariant kept by every transition: `1 <= page <= max(1, page_count())`.

use crate::config::PAGE_SIZE;
use crate::model::record::{Record, RecordId};

/// Pagination control targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Prev,
    Next,
    Last,
    Exact(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    all: Vec<Record>,
    filtered: Vec<Record>,
    /// Lower-cased search term.
    term: String,
    page: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self { all: Vec::new(), filtered: Vec::new(), term: String::new(), page: 1 }
    }
}

impl ListView {
    pub fn new(records: Vec<Record>) -> Self {
        Self::default().set_records(records)
    }

    /// Replaces the full record set, re-applies the current term, back to page 1.
    pub fn set_records(mut self, records: Vec<Record>) -> Self {
        self.all = records;
        self.refilter();
        self.page = 1;
        self
    }

    /// Replaces the full record set but keeps the term and the page (clamped).
    pub fn reconcile(mut self, records: Vec<Record>) -> Self {
        self.all = records;
        self.refilter();
        self.clamp()
    }

    /// Filters on `term` (case-insensitive, any field value) and returns to page 1.
    pub fn apply_filter(mut self, term: &str) -> Self {
        self.term = term.to_lowercase();
        self.refilter();
        self.page = 1;
        self
    }

    /// Moves to `target`, clamped to the valid range.
    pub fn set_page(mut self, target: PageTarget) -> Self {
        let last = self.last_page();
        self.page = match target {
            PageTarget::First => 1,
            PageTarget::Prev => self.page.saturating_sub(1),
            PageTarget::Next => self.page + 1,
            PageTarget::Last => last,
            PageTarget::Exact(n) => n,
        };
        self.clamp()
    }

    /// Drops the record `id` from both lists. When that empties the current
    /// page and it is not the first, steps back one page.
    pub fn reduce_after_delete(mut self, id: &RecordId) -> Self {
        self.all.retain(|r| &r.id() != id);
        self.filtered.retain(|r| &r.id() != id);
        if self.page > 1 && (self.page - 1) * PAGE_SIZE >= self.filtered.len() {
            self.page -= 1;
        }
        self.clamp()
    }

    /// Records of the current page.
    pub fn visible_slice(&self) -> &[Record] {
        let start = ((self.page - 1) * PAGE_SIZE).min(self.filtered.len());
        let end = (start + PAGE_SIZE).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.all.iter().find(|r| &r.id() == id)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages of the filtered view; 0 when it is empty.
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE)
    }

    pub fn all(&self) -> &[Record] {
        &self.all
    }

    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    /// Whether the control for `target` is enabled. First/prev are disabled
    /// on page 1, next/last on the last page or when nothing is listed.
    pub fn can_go(&self, target: PageTarget) -> bool {
        match target {
            PageTarget::First | PageTarget::Prev => self.page > 1,
            PageTarget::Next | PageTarget::Last => self.page < self.page_count(),
            PageTarget::Exact(n) => n >= 1 && n <= self.last_page() && n != self.page,
        }
    }

    fn last_page(&self) -> usize {
        self.page_count().max(1)
    }

    fn refilter(&mut self) {
        self.filtered = self.all.iter().filter(|r| r.matches(&self.term)).cloned().collect();
    }

    fn clamp(mut self) -> Self {
        self.page = self.page.clamp(1, self.last_page());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| {
                let tag = if i % 2 == 0 { "even" } else { "odd" };
                Record::from(json!({"id": i, "topic": format!("Topic {i}"), "tag": tag}))
            })
            .collect()
    }

    fn ids(records: &[Record]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn twenty_three_records_make_three_pages() {
        let view = ListView::new(records(23));
        assert_eq!(view.page_count(), 3);

        let view = view.set_page(PageTarget::Last);
        assert_eq!(view.page(), 3);
        assert_eq!(view.visible_slice().len(), 3);
    }

    #[test]
    fn pages_concatenate_to_the_filtered_view() {
        for n in [0, 1, 9, 10, 11, 20, 37] {
            let mut view = ListView::new(records(n)).apply_filter("odd");
            let mut seen = Vec::new();
            for page in 1..=view.page_count() {
                view = view.set_page(PageTarget::Exact(page));
                assert!(view.visible_slice().len() <= PAGE_SIZE);
                seen.extend_from_slice(view.visible_slice());
            }
            assert_eq!(seen, view.filtered(), "n = {n}");
        }
    }

    #[test]
    fn filter_is_case_insensitive_subset() {
        let view = ListView::new(records(12)).apply_filter("TOPIC 1");
        assert_eq!(ids(view.filtered()), ["1", "10", "11", "12"]);
        assert!(view.filtered().iter().all(|r| view.all().contains(r)));
    }

    #[test]
    fn empty_term_restores_everything() {
        let view = ListView::new(records(5)).apply_filter("nothing matches").apply_filter("");
        assert_eq!(view.filtered(), view.all());
    }

    #[test]
    fn filtering_resets_to_first_page() {
        let view = ListView::new(records(30)).set_page(PageTarget::Exact(3)).apply_filter("even");
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn set_records_keeps_term_and_resets_page() {
        let view = ListView::new(records(30))
            .apply_filter("even")
            .set_page(PageTarget::Next)
            .set_records(records(4));
        assert_eq!(view.page(), 1);
        assert_eq!(ids(view.filtered()), ["2", "4"]);
    }

    #[test]
    fn reconcile_keeps_page_when_possible() {
        let view = ListView::new(records(30)).set_page(PageTarget::Exact(2)).reconcile(records(30));
        assert_eq!(view.page(), 2);

        let view = view.set_page(PageTarget::Last).reconcile(records(12));
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn page_moves_are_clamped() {
        let view = ListView::new(records(15));
        assert_eq!(view.clone().set_page(PageTarget::Prev).page(), 1);
        assert_eq!(view.clone().set_page(PageTarget::Exact(0)).page(), 1);
        assert_eq!(view.clone().set_page(PageTarget::Exact(99)).page(), 2);
        assert_eq!(view.set_page(PageTarget::Next).set_page(PageTarget::Next).page(), 2);
    }

    #[test]
    fn affordances_follow_page_position() {
        let view = ListView::new(records(25));
        assert!(!view.can_go(PageTarget::First));
        assert!(!view.can_go(PageTarget::Prev));
        assert!(view.can_go(PageTarget::Next));

        let view = view.set_page(PageTarget::Last);
        assert!(view.can_go(PageTarget::Prev));
        assert!(!view.can_go(PageTarget::Next));
        assert!(!view.can_go(PageTarget::Last));

        let empty = ListView::new(Vec::new());
        assert_eq!(empty.page(), 1);
        assert!(!empty.can_go(PageTarget::Next));
        assert!(empty.visible_slice().is_empty());
    }

    #[test]
    fn deleting_last_record_of_last_page_steps_back() {
        let view = ListView::new(records(11)).set_page(PageTarget::Last);
        assert_eq!(view.page(), 2);

        let view = view.reduce_after_delete(&RecordId::from("11"));
        assert_eq!(view.page(), 1);
        assert_eq!(view.visible_slice().len(), 10);
        assert!(view.get(&RecordId::from("11")).is_none());
    }

    #[test]
    fn deleting_single_remaining_record_on_page_two_empties_the_list() {
        let mut view = ListView::new(records(11)).set_page(PageTarget::Exact(2));
        for id in 1..=10 {
            view = view.reduce_after_delete(&RecordId::new(id.to_string()));
        }
        assert_eq!(view.page(), 1);
        assert_eq!(ids(view.visible_slice()), ["11"]);

        let view = view.reduce_after_delete(&RecordId::from("11"));
        assert_eq!(view.page(), 1);
        assert!(view.filtered().is_empty());
        assert!(view.all().is_empty());
    }

    #[test]
    fn delete_on_middle_page_keeps_page() {
        let view = ListView::new(records(30))
            .set_page(PageTarget::Exact(2))
            .reduce_after_delete(&RecordId::from("15"));
        assert_eq!(view.page(), 2);
        assert_eq!(view.visible_slice().len(), 10);
    }

    #[test]
    fn page_never_leaves_valid_range_after_shrinking() {
        for n in 0..35 {
            let mut view = ListView::new(records(n)).set_page(PageTarget::Last);
            for id in (1..=n).rev() {
                view = view.reduce_after_delete(&RecordId::new(id.to_string()));
                assert!(view.page() >= 1);
                assert!(view.page() <= view.page_count().max(1));
            }
        }
    }
}
