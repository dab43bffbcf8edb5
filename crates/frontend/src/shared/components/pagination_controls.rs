use crate::shared::icons::icon;
use crate::shared::list_utils::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageStep {
    First,
    Previous,
    Next,
    Last,
}

impl PageStep {
    const ALL: [PageStep; 4] = [PageStep::First, PageStep::Previous, PageStep::Next, PageStep::Last];

    fn icon(self) -> &'static str {
        match self {
            PageStep::First => "chevrons-left",
            PageStep::Previous => "chevron-left",
            PageStep::Next => "chevron-right",
            PageStep::Last => "chevrons-right",
        }
    }

    fn title(self) -> &'static str {
        match self {
            PageStep::First => "First page",
            PageStep::Previous => "Previous page",
            PageStep::Next => "Next page",
            PageStep::Last => "Last page",
        }
    }

    /// Page to go to from `page` (0-based), or `None` when already at that edge
    fn target(self, page: usize, total_pages: usize) -> Option<usize> {
        let last = total_pages.saturating_sub(1);
        let target = match self {
            PageStep::First => 0,
            PageStep::Previous => page.saturating_sub(1),
            PageStep::Next => (page + 1).min(last),
            PageStep::Last => last,
        };
        (target != page).then_some(target)
    }
}

fn page_info(page: usize, total_pages: usize, total_count: usize) -> String {
    format!("Page {} of {} ({} rows)", page + 1, total_pages.max(1), total_count)
}

/// First/previous/next/last buttons, a position label and the page size picker
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)] total_pages: Signal<usize>,

    /// Rows left after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)] page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let step_button = move |step: PageStep| {
        let target = move || step.target(current_page.get(), total_pages.get());
        view! {
            <button
                class="pagination-btn"
                title=step.title()
                disabled=move || target().is_none()
                on:click=move |_| {
                    if let Some(page) = target() {
                        on_page_change.run(page);
                    }
                }
            >
                {icon(step.icon())}
            </button>
        }
    };
    let [first, previous, next, last] = PageStep::ALL;

    view! {
        <div class="pagination-controls">
            {step_button(first)}
            {step_button(previous)}
            <span class="pagination-info">
                {move || page_info(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            {step_button(next)}
            {step_button(last)}
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                    on_page_size_change.run(size);
                }
            >
                {PAGE_SIZE_OPTIONS
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("Show {}", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_targets() {
        assert_eq!(PageStep::First.target(3, 5), Some(0));
        assert_eq!(PageStep::Previous.target(3, 5), Some(2));
        assert_eq!(PageStep::Next.target(3, 5), Some(4));
        assert_eq!(PageStep::Last.target(3, 5), Some(4));
    }

    #[test]
    fn test_edges_disable_steps() {
        assert_eq!(PageStep::First.target(0, 5), None);
        assert_eq!(PageStep::Previous.target(0, 5), None);
        assert_eq!(PageStep::Next.target(4, 5), None);
        assert_eq!(PageStep::Last.target(4, 5), None);
        // Empty list: one page, nothing to move to
        assert_eq!(PageStep::Next.target(0, 0), None);
    }

    #[test]
    fn test_page_info_never_shows_zero_pages() {
        assert_eq!(page_info(0, 0, 0), "Page 1 of 1 (0 rows)");
        assert_eq!(page_info(1, 3, 25), "Page 2 of 3 (25 rows)");
    }
}
