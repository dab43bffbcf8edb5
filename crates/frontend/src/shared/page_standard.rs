//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_department--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Multi-step wizard or action page.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Build a page id from entity key and category
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert_eq!(page_id("a002_department", PAGE_CAT_LIST), "a002_department--list");
    }
}
