/// Shared list helpers: search, sort, pagination and the search input
use leptos::prelude::*;
use std::cmp::Ordering;

/// Page sizes offered by every list screen
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Types that can be matched against a search query
pub trait Searchable {
    /// `filter` is already trimmed and lowercased
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort by a named field; an empty field keeps the current order
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    if field.is_empty() {
        return;
    }
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive filter; a blank query keeps everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter))
        .collect()
}

/// Case-insensitive substring check used by `Searchable` impls
pub fn contains_ci(text: &str, lowered_filter: &str) -> bool {
    text.to_lowercase().contains(lowered_filter)
}

/// Case-insensitive string ordering used by `Sortable` impls
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Number of pages for `total` rows (at least 1)
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Rows of the given 0-based page
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Clamp a page index after the row count changed
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(page_count(total, page_size) - 1)
}

/// Sort indicator for a header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search box with a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(i64, &'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.1, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "id" => self.0.cmp(&other.0),
                _ => cmp_ci(self.1, other.1),
            }
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let rows = vec![Row(1, "Engineering"), Row(2, "Sales"), Row(3, "Field Engineers")];
        let found = filter_list(rows.clone(), "  ENGINE ");
        assert_eq!(found, vec![Row(1, "Engineering"), Row(3, "Field Engineers")]);
        assert_eq!(filter_list(rows.clone(), "").len(), 3);
        // Single characters filter too
        assert_eq!(filter_list(rows, "s").len(), 2);
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row(2, "beta"), Row(1, "Alpha"), Row(3, "gamma")];
        sort_list(&mut rows, "name", false);
        assert_eq!(rows[0], Row(3, "gamma"));
        sort_list(&mut rows, "id", true);
        assert_eq!(rows[0], Row(1, "Alpha"));
        sort_list(&mut rows, "", false);
        assert_eq!(rows[0], Row(1, "Alpha"));
    }

    #[test]
    fn test_pagination_helpers() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_slice(&items, 2, 10), vec![20, 21, 22, 23, 24]);
        assert!(page_slice(&items, 3, 10).is_empty());
        assert_eq!(clamp_page(5, 25, 10), 2);
        assert_eq!(clamp_page(0, 0, 10), 0);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("id", "name", true), " ⇅");
    }
}
