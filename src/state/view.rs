/// View state and the derived, paginated view of the records
///
/// `compute_view` is a pure projection: the same records and the same
/// `ViewState` always produce the same `DerivedView`. Randomness only enters
/// through `ViewState::shuffle_seed`, which the controller owns.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::data::ImageRecord;

/// Number of cards shown per page
pub const ITEMS_PER_PAGE: usize = 12;

/// Order applied to the filtered records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Random,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Newest, SortOrder::Oldest, SortOrder::Random];

    /// Wire name used by the HTTP endpoint
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Random => "random",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortOrder::Newest => "Newest first",
            SortOrder::Oldest => "Oldest first",
            SortOrder::Random => "Random",
        };
        f.write_str(label)
    }
}

/// Everything the user can change about what is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Normalized search term (trimmed, lower-cased)
    pub search_term: String,
    pub sort_order: SortOrder,
    /// 1-based page number
    pub current_page: usize,
    /// Seed for `SortOrder::Random`; ignored by the other orders
    pub shuffle_seed: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_order: SortOrder::default(),
            current_page: 1,
            shuffle_seed: 0,
        }
    }
}

/// The filtered, sorted and sliced records for the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    /// Records on the current page, in display order
    pub records: Vec<ImageRecord>,
    /// How many records matched the search term (across all pages)
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl DerivedView {
    /// True when nothing matched; the grid shows "no results" instead
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// "Page X of Y", never reporting zero pages
    pub fn page_info(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages.max(1))
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.total_pages != 0 && self.current_page < self.total_pages
    }

    /// Pagination controls are hidden when there is nothing to page through
    pub fn show_pagination(&self) -> bool {
        !self.is_empty()
    }
}

/// Normalize raw user input into a search term
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of pages needed for `count` records
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(ITEMS_PER_PAGE)
}

/// Records whose title and source contain `term` (already normalized)
pub fn filter_records(records: &[ImageRecord], term: &str) -> Vec<ImageRecord> {
    records
        .iter()
        .filter(|record| term.is_empty() || record.searchable_text().contains(term))
        .cloned()
        .collect()
}

/// Reorder records in place according to `order`
pub fn sort_records(records: &mut [ImageRecord], order: SortOrder, seed: u64) {
    match order {
        SortOrder::Newest => records.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at)),
        SortOrder::Oldest => records.sort_by(|a, b| a.uploaded_at.cmp(&b.uploaded_at)),
        SortOrder::Random => fastrand::Rng::with_seed(seed).shuffle(records),
    }
}

/// Project the records through the view state
pub fn compute_view(records: &[ImageRecord], state: &ViewState) -> DerivedView {
    let mut filtered = filter_records(records, &state.search_term);
    sort_records(&mut filtered, state.sort_order, state.shuffle_seed);

    let filtered_count = filtered.len();
    let current_page = state.current_page.max(1);
    let start = ((current_page - 1) * ITEMS_PER_PAGE).min(filtered_count);
    let end = (start + ITEMS_PER_PAGE).min(filtered_count);

    DerivedView {
        records: filtered.drain(start..end).collect(),
        filtered_count,
        current_page,
        total_pages: total_pages(filtered_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::{many, record};

    fn titles(records: &[ImageRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    fn sample() -> Vec<ImageRecord> {
        vec![
            record(1, "ChatGPT Meme", "Reddit", 15),
            record(2, "DALL-E Art", "Imgur", 14),
            record(3, "Robot Humor", "9GAG", 13),
        ]
    }

    #[test]
    fn query_matches_title_substring_only_where_present() {
        let filtered = filter_records(&sample(), &normalize_query("gpt"));
        assert_eq!(titles(&filtered), vec!["ChatGPT Meme"]);
    }

    #[test]
    fn query_matches_source_and_ignores_case() {
        let filtered = filter_records(&sample(), &normalize_query("  IMGUR "));
        assert_eq!(titles(&filtered), vec!["DALL-E Art"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(filter_records(&sample(), "").len(), 3);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        for term in ["", "meme", "a", "zzz", "9gag"] {
            let once = filter_records(&records, term);
            let twice = filter_records(&once, term);
            assert_eq!(once, twice, "term {term:?}");
        }
    }

    #[test]
    fn newest_and_oldest_follow_upload_dates() {
        let mut records = sample();
        sort_records(&mut records, SortOrder::Newest, 0);
        assert_eq!(
            titles(&records),
            vec!["ChatGPT Meme", "DALL-E Art", "Robot Humor"]
        );

        sort_records(&mut records, SortOrder::Oldest, 0);
        assert_eq!(
            titles(&records),
            vec!["Robot Humor", "DALL-E Art", "ChatGPT Meme"]
        );
    }

    #[test]
    fn newest_is_exact_reverse_of_oldest_without_ties() {
        let mut newest = many(30);
        let mut oldest = newest.clone();
        sort_records(&mut newest, SortOrder::Newest, 0);
        sort_records(&mut oldest, SortOrder::Oldest, 0);
        oldest.reverse();
        assert_eq!(newest, oldest);
    }

    #[test]
    fn random_order_is_a_permutation_determined_by_seed() {
        let mut a = many(20);
        let mut b = many(20);
        sort_records(&mut a, SortOrder::Random, 42);
        sort_records(&mut b, SortOrder::Random, 42);
        assert_eq!(a, b);

        let mut ids: Vec<u64> = a.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(12), 1);
        assert_eq!(total_pages(13), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn empty_result_shows_page_one_of_one_and_hides_pagination() {
        let view = compute_view(
            &sample(),
            &ViewState {
                search_term: "nothing matches this".into(),
                ..ViewState::default()
            },
        );
        assert!(view.records.is_empty());
        assert!(view.is_empty());
        assert!(!view.show_pagination());
        assert_eq!(view.page_info(), "Page 1 of 1");
        assert!(!view.can_go_previous());
        assert!(!view.can_go_next());
    }

    #[test]
    fn thirteen_records_split_twelve_and_one() {
        let records = many(13);
        let first = compute_view(&records, &ViewState::default());
        assert_eq!(first.records.len(), 12);
        assert!(first.can_go_next());
        assert!(!first.can_go_previous());
        assert_eq!(first.page_info(), "Page 1 of 2");

        let second = compute_view(
            &records,
            &ViewState {
                current_page: 2,
                ..ViewState::default()
            },
        );
        assert_eq!(second.records.len(), 1);
        assert!(!second.can_go_next());
        assert!(second.can_go_previous());
        // Newest first, so the last page holds the oldest record
        assert_eq!(second.records[0].id, 1);
    }

    #[test]
    fn page_beyond_the_end_yields_an_empty_slice() {
        let view = compute_view(
            &many(3),
            &ViewState {
                current_page: 9,
                ..ViewState::default()
            },
        );
        assert!(view.records.is_empty());
        assert_eq!(view.filtered_count, 3);
    }
}
