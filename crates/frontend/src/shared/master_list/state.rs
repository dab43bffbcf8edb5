use crate::shared::api::{get_json, send_checked, ApiError, ApiRequest, ApiTransport};
use crate::shared::list_utils::{
    clamp_page, filter_list, page_count, page_slice, sort_list, Searchable, Sortable,
    DEFAULT_PAGE_SIZE,
};
use crate::shared::notice::Notice;
use contracts::domain::common::MasterRecord;

/// Create or update produced by the form
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest<R> {
    Create(R),
    Update(R),
}

impl<R: MasterRecord> SaveRequest<R> {
    pub fn record(&self) -> &R {
        match self {
            SaveRequest::Create(r) | SaveRequest::Update(r) => r,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, SaveRequest::Create(_))
    }

    /// `POST /{Resource}` for a create, `PUT /{Resource}/{id}` for an update
    pub fn to_api_request(&self) -> Result<ApiRequest, ApiError> {
        match self {
            SaveRequest::Create(r) => ApiRequest::post(R::collection_path(), r),
            SaveRequest::Update(r) => ApiRequest::put(R::item_path(r.id()), r),
        }
    }
}

/// State of one master list screen
#[derive(Debug, Clone, PartialEq)]
pub struct MasterListState<R> {
    pub all_items: Vec<R>,

    /// Name field of the add/edit form
    pub name_input: String,
    /// Active toggle of the form (banks only)
    pub active_input: bool,
    /// Row being edited, as it was when editing started
    pub editing: Option<R>,

    pub filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,

    pub loading: bool,
    pub saving: bool,
    pub is_loaded: bool,
    pub notice: Option<Notice>,
}

impl<R> Default for MasterListState<R> {
    fn default() -> Self {
        Self {
            all_items: Vec::new(),
            name_input: String::new(),
            active_input: true,
            editing: None,
            filter: String::new(),
            sort_field: String::new(),
            sort_ascending: true,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            loading: false,
            saving: false,
            is_loaded: false,
            notice: None,
        }
    }
}

impl<R: MasterRecord + Searchable + Sortable> MasterListState<R> {
    fn element_lower() -> String {
        R::element_name().to_lowercase()
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: Result<Vec<R>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.all_items = items;
                self.is_loaded = true;
                self.page = clamp_page(self.page, self.total_count(), self.page_size);
            }
            Err(e) => {
                log::error!("Failed to fetch {}: {}", R::list_name(), e);
                self.notice = Some(Notice::error(format!(
                    "Failed to fetch {}. Please refresh the page.",
                    R::list_name().to_lowercase()
                )));
            }
        }
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    /// All rows after filter and sort
    pub fn visible_items(&self) -> Vec<R> {
        let mut items = filter_list(self.all_items.clone(), &self.filter);
        sort_list(&mut items, &self.sort_field, self.sort_ascending);
        items
    }

    pub fn page_items(&self) -> Vec<R> {
        page_slice(&self.visible_items(), self.page, self.page_size)
    }

    pub fn total_count(&self) -> usize {
        filter_list(self.all_items.clone(), &self.filter).len()
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.total_count(), self.page_size)
    }

    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
        self.page = 0;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_count(), self.page_size);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    pub fn start_edit(&mut self, record: &R) {
        self.name_input = record.name().to_string();
        self.active_input = record.is_active().unwrap_or(true);
        self.editing = Some(record.clone());
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.name_input.clear();
        self.active_input = true;
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.editing.as_ref().is_some_and(|r| r.id() == id)
    }

    /// Whether the edited row differs from its original (name, or status for banks)
    pub fn has_changes(&self) -> bool {
        match &self.editing {
            None => false,
            Some(original) => {
                let name_changed = self.name_input.trim() != original.name();
                let status_changed = R::has_status()
                    && original.is_active().is_some_and(|a| a != self.active_input);
                name_changed || status_changed
            }
        }
    }

    /// Validate the form and build the request to send.
    ///
    /// `None` means nothing goes to the network: the name was empty (warning
    /// shown), a save is already running, or an unchanged edit was closed.
    pub fn prepare_save(&mut self) -> Option<SaveRequest<R>> {
        if self.saving {
            return None;
        }
        let name = self.name_input.trim().to_string();
        if name.is_empty() {
            self.notice = Some(Notice::warning(format!(
                "Please enter a {} name",
                Self::element_lower()
            )));
            return None;
        }

        let request = match &self.editing {
            Some(original) => {
                if !self.has_changes() {
                    self.cancel_edit();
                    return None;
                }
                SaveRequest::Update(original.renamed(&name).with_active(self.active_input))
            }
            None => SaveRequest::Create(R::new_named(&name).with_active(self.active_input)),
        };

        let verb = if request.is_create() {
            "Creating new"
        } else {
            "Updating"
        };
        self.notice = Some(Notice::processing(format!(
            "{} {} {}...",
            verb,
            Self::element_lower(),
            name
        )));
        self.saving = true;
        Some(request)
    }

    /// Apply the outcome of [`save_and_reload`].
    ///
    /// `Ok(Some(items))` carries the re-fetched list, `Ok(None)` means the save
    /// went through but the reload failed.
    pub fn finish_save(&mut self, request: &SaveRequest<R>, result: Result<Option<Vec<R>>, ApiError>) {
        self.saving = false;
        let name = request.record().name().to_string();
        match result {
            Ok(items) => {
                if let Some(items) = items {
                    self.all_items = items;
                    self.page = clamp_page(self.page, self.total_count(), self.page_size);
                }
                let action = if request.is_create() { "created" } else { "updated" };
                self.notice = Some(Notice::success(format!(
                    "{} {} {} successfully!",
                    R::element_name(),
                    name,
                    action
                )));
                self.cancel_edit();
            }
            Err(e) => {
                log::error!("Saving {} '{}' failed: {}", Self::element_lower(), name, e);
                let verb = if request.is_create() { "create" } else { "update" };
                let fallback = format!(
                    "Failed to {} {} {}. Please try again.",
                    verb,
                    name,
                    Self::element_lower()
                );
                self.notice = Some(Notice::error(e.user_message(&fallback)));
            }
        }
    }
}

/// `GET /{Resource}`
pub async fn fetch_all<R: MasterRecord, A: ApiTransport + ?Sized>(api: &A) -> Result<Vec<R>, ApiError> {
    get_json(api, &R::collection_path()).await
}

/// Send the create/update, then re-fetch the collection
pub async fn save_and_reload<R: MasterRecord, A: ApiTransport + ?Sized>(
    api: &A,
    request: &SaveRequest<R>,
) -> Result<Option<Vec<R>>, ApiError> {
    send_checked(api, request.to_api_request()?).await?;
    match fetch_all::<R, A>(api).await {
        Ok(items) => Ok(Some(items)),
        Err(e) => {
            log::warn!("{} saved but the list could not be reloaded: {}", R::element_name(), e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::FakeTransport;
    use crate::shared::api::Method;
    use crate::shared::notice::NoticeKind;
    use contracts::domain::a001_bank::Bank;
    use contracts::domain::a002_department::Department;
    use serde_json::json;

    fn dept(id: i64, name: &str) -> Department {
        Department {
            dept_id: id,
            dept_name: name.to_string(),
        }
    }

    fn loaded(items: Vec<Department>) -> MasterListState<Department> {
        let mut state = MasterListState::default();
        state.finish_load(Ok(items));
        state
    }

    #[tokio::test]
    async fn test_create_department_posts_once_and_reloads() {
        let api = FakeTransport::new()
            .respond(Method::Post, "/Departments", 201, json!({"deptID": 5, "deptName": "Engineering"}))
            .respond(
                Method::Get,
                "/Departments",
                200,
                json!([{"deptID": 1, "deptName": "Sales"}, {"deptID": 5, "deptName": "Engineering"}]),
            );
        let mut state = loaded(vec![dept(1, "Sales")]);
        state.name_input = "Engineering".into();

        let request = state.prepare_save().unwrap();
        assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Processing);
        let result = save_and_reload(&api, &request).await;
        state.finish_save(&request, result);

        let posts = api.requests_to(Method::Post, "/Departments");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].body, Some(json!({"deptID": 0, "deptName": "Engineering"})));
        assert!(state.all_items.iter().any(|d| d.dept_name == "Engineering"));
        assert_eq!(
            state.notice,
            Some(Notice::success("Department Engineering created successfully!"))
        );
        assert_eq!(state.name_input, "");
    }

    #[tokio::test]
    async fn test_create_network_failure_keeps_input() {
        let api = FakeTransport::new().fail(
            Method::Post,
            "/Departments",
            ApiError::Network("offline".into()),
        );
        let mut state = loaded(vec![]);
        state.name_input = "Engineering".into();

        let request = state.prepare_save().unwrap();
        let result = save_and_reload(&api, &request).await;
        state.finish_save(&request, result);

        assert_eq!(state.name_input, "Engineering");
        assert!(!state.saving);
        let notice = state.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(
            notice.message,
            "Failed to create Engineering department. Please try again."
        );
        // No reload after a failed save
        assert!(api.requests_to(Method::Get, "/Departments").is_empty());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut state = loaded(vec![]);
        state.name_input = "   ".into();
        assert!(state.prepare_save().is_none());
        assert_eq!(state.notice, Some(Notice::warning("Please enter a department name")));
        assert!(!state.saving);
    }

    #[test]
    fn test_unchanged_edit_leaves_edit_mode_without_request() {
        let mut state = loaded(vec![dept(1, "Sales")]);
        state.start_edit(&dept(1, "Sales"));
        assert!(state.is_editing(1));
        assert!(!state.has_changes());
        assert!(state.prepare_save().is_none());
        assert!(state.editing.is_none());
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_changed_edit_builds_put() {
        let mut state = loaded(vec![dept(7, "Sales")]);
        state.start_edit(&dept(7, "Sales"));
        state.name_input = "Sales & Marketing".into();
        assert!(state.has_changes());
        let request = state.prepare_save().unwrap();
        let api_request = request.to_api_request().unwrap();
        assert_eq!(api_request.method, Method::Put);
        assert_eq!(api_request.path, "/Departments/7");
        assert_eq!(api_request.body, Some(json!({"deptID": 7, "deptName": "Sales & Marketing"})));
        assert_eq!(
            state.notice,
            Some(Notice::processing("Updating department Sales & Marketing..."))
        );
    }

    #[test]
    fn test_bank_status_change_counts_as_change() {
        let hdfc = Bank {
            bank_id: 3,
            bank_name: "HDFC".into(),
            is_active: true,
        };
        let mut state: MasterListState<Bank> = MasterListState::default();
        state.finish_load(Ok(vec![hdfc.clone()]));
        state.start_edit(&hdfc);
        assert!(!state.has_changes());
        state.active_input = false;
        assert!(state.has_changes());
        match state.prepare_save() {
            Some(SaveRequest::Update(bank)) => assert!(!bank.is_active),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_saving_twice_is_blocked() {
        let mut state = loaded(vec![]);
        state.name_input = "HR".into();
        assert!(state.prepare_save().is_some());
        assert!(state.prepare_save().is_none());
    }

    #[test]
    fn test_fetch_failure_notice() {
        let mut state: MasterListState<Department> = MasterListState::default();
        state.begin_load();
        state.finish_load(Err(ApiError::Network("offline".into())));
        assert!(!state.loading);
        assert!(!state.is_loaded);
        assert_eq!(
            state.notice,
            Some(Notice::error("Failed to fetch departments. Please refresh the page."))
        );
    }

    #[test]
    fn test_filter_sort_and_paging() {
        let items: Vec<Department> = (1..=25).map(|i| dept(i, &format!("Dept {:02}", i))).collect();
        let mut state = loaded(items);
        assert_eq!(state.page_items().len(), 10);
        assert_eq!(state.total_pages(), 3);

        state.go_to_page(9);
        assert_eq!(state.page, 2);
        assert_eq!(state.page_items().len(), 5);

        state.set_filter("dept 1".into());
        assert_eq!(state.page, 0);
        assert_eq!(state.total_count(), 10);

        state.toggle_sort("id");
        state.toggle_sort("id");
        assert!(!state.sort_ascending);
        assert_eq!(state.page_items()[0].dept_id, 19);

        state.set_page_size(20);
        assert_eq!(state.total_pages(), 1);
    }
}
