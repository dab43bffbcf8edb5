use crate::domain::a006_employee::wizard::{MasterKind, MasterLists};
use crate::shared::api::ApiError;
use crate::shared::date_utils::api_to_display;
use crate::shared::export::ExcelExportable;
use crate::shared::list_utils::{
    clamp_page, cmp_ci, contains_ci, filter_list, page_count, page_slice, sort_list, Searchable,
    Sortable, DEFAULT_PAGE_SIZE,
};
use crate::shared::notice::Notice;
use contracts::domain::a006_employee::Employee;
use std::cmp::Ordering;

/// Employee with master names resolved for display
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRow {
    pub id: i64,
    pub employee: Employee,
    pub department: String,
    pub designation: String,
    pub location: String,
    pub role: String,
    /// `dd/mm/yyyy` or empty
    pub doj: String,
}

fn resolve(lists: &MasterLists, kind: MasterKind, id: Option<i64>, fallback: &str) -> String {
    id.and_then(|id| lists.find_name(kind, id))
        .unwrap_or_else(|| fallback.to_string())
}

impl EmployeeRow {
    pub fn resolve(employee: Employee, lists: &MasterLists) -> Self {
        Self {
            id: employee.emp_id.unwrap_or(0),
            department: resolve(lists, MasterKind::Department, employee.department_id, "Unknown Department"),
            designation: resolve(lists, MasterKind::Designation, employee.designation, "Unknown Designation"),
            location: resolve(lists, MasterKind::Location, employee.working_location, "Unknown Location"),
            role: resolve(lists, MasterKind::Role, Some(employee.role_id), "Unknown Role"),
            doj: employee.doj.as_deref().map(api_to_display).unwrap_or_default(),
            employee,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.employee.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

fn number_cell(value: i64) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

impl ExcelExportable for EmployeeRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Employee ID",
            "Full Name",
            "Nick Name",
            "Father Name",
            "Mother Name",
            "Marital Status",
            "Qualification",
            "Email",
            "Primary Mobile",
            "Secondary Mobile",
            "Permanent Address",
            "Permanent Pin Code",
            "Permanent District",
            "Current Address",
            "Current Pin Code",
            "Current District",
            "Date of Birth",
            "Date of Joining",
            "Gender",
            "Department",
            "Role",
            "Designation",
            "Aadhaar Number",
            "PAN Number",
            "Status",
            "Working Location",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let e = &self.employee;
        vec![
            self.id.to_string(),
            e.full_name.clone(),
            e.nick_name.clone(),
            e.father_name.clone(),
            e.mother_name.clone(),
            e.marital_status.clone(),
            e.qualification.clone(),
            e.email.clone(),
            e.mobile1.clone(),
            e.mobile2.clone(),
            e.p_address.clone(),
            number_cell(e.p_pin_code),
            e.p_district.clone(),
            e.c_address.clone(),
            number_cell(e.c_pin_code),
            e.c_district.clone(),
            e.dob.as_deref().map(api_to_display).unwrap_or_default(),
            self.doj.clone(),
            e.gender.clone(),
            self.department.clone(),
            self.role.clone(),
            self.designation.clone(),
            number_cell(e.aadhaar_number),
            e.pan_number.clone(),
            self.status_label().to_string(),
            self.location.clone(),
        ]
    }
}

impl Searchable for EmployeeRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let e = &self.employee;
        self.id.to_string().contains(filter)
            || [
                e.full_name.as_str(),
                e.email.as_str(),
                e.mobile1.as_str(),
                self.department.as_str(),
                self.designation.as_str(),
                self.location.as_str(),
                self.role.as_str(),
                self.status_label(),
            ]
            .iter()
            .any(|text| contains_ci(text, filter))
    }
}

impl Sortable for EmployeeRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let (a, b) = (&self.employee, &other.employee);
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => cmp_ci(&a.full_name, &b.full_name),
            "email" => cmp_ci(&a.email, &b.email),
            "mobile" => a.mobile1.cmp(&b.mobile1),
            "department" => cmp_ci(&self.department, &other.department),
            "designation" => cmp_ci(&self.designation, &other.designation),
            "location" => cmp_ci(&self.location, &other.location),
            "role" => cmp_ci(&self.role, &other.role),
            "doj" => a.doj.cmp(&b.doj),
            "status" => a.is_active.cmp(&b.is_active),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn from_value(value: &str) -> Self {
        match value {
            "Active" => StatusFilter::Active,
            "Inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }
}

/// Column filters; an empty string means "all"
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeFilters {
    pub department: String,
    pub designation: String,
    pub location: String,
    pub status: StatusFilter,
}

impl EmployeeFilters {
    pub fn matches(&self, row: &EmployeeRow) -> bool {
        let column_ok = |wanted: &str, actual: &str| wanted.is_empty() || wanted == actual;
        column_ok(&self.department, &row.department)
            && column_ok(&self.designation, &row.designation)
            && column_ok(&self.location, &row.location)
            && match self.status {
                StatusFilter::All => true,
                StatusFilter::Active => row.employee.is_active,
                StatusFilter::Inactive => !row.employee.is_active,
            }
    }

    pub fn is_empty(&self) -> bool {
        *self == EmployeeFilters::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Department,
    Designation,
    Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeListState {
    pub rows: Vec<EmployeeRow>,
    pub query: String,
    pub filters: EmployeeFilters,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub loading: bool,
    pub is_loaded: bool,
    pub notice: Option<Notice>,
    /// Employee shown in the details dialog
    pub selected: Option<i64>,
}

impl Default for EmployeeListState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            query: String::new(),
            filters: EmployeeFilters::default(),
            sort_field: String::new(),
            sort_ascending: true,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            loading: false,
            is_loaded: false,
            notice: None,
            selected: None,
        }
    }
}

impl EmployeeListState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: Result<(Vec<Employee>, MasterLists), ApiError>) {
        self.loading = false;
        match result {
            Ok((employees, lists)) => {
                self.rows = employees
                    .into_iter()
                    .map(|e| EmployeeRow::resolve(e, &lists))
                    .collect();
                self.is_loaded = true;
                self.page = clamp_page(self.page, self.total_count(), self.page_size);
            }
            Err(e) => {
                log::error!("Failed to fetch employees: {}", e);
                self.notice = Some(Notice::error(
                    "Failed to fetch employees. Please refresh the page.",
                ));
            }
        }
    }

    /// Rows after search, column filters and sort
    pub fn visible_rows(&self) -> Vec<EmployeeRow> {
        let filtered: Vec<EmployeeRow> = self
            .rows
            .iter()
            .filter(|r| self.filters.matches(r))
            .cloned()
            .collect();
        let mut rows = filter_list(filtered, &self.query);
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        rows
    }

    pub fn page_rows(&self) -> Vec<EmployeeRow> {
        page_slice(&self.visible_rows(), self.page, self.page_size)
    }

    pub fn total_count(&self) -> usize {
        self.visible_rows().len()
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.total_count(), self.page_size)
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page = 0;
    }

    pub fn set_column_filter(&mut self, column: FilterColumn, value: String) {
        match column {
            FilterColumn::Department => self.filters.department = value,
            FilterColumn::Designation => self.filters.designation = value,
            FilterColumn::Location => self.filters.location = value,
        }
        self.page = 0;
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filters.status = status;
        self.page = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filters = EmployeeFilters::default();
        self.query.clear();
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

    /// Distinct values present in a column, for its filter dropdown
    pub fn filter_options(&self, column: FilterColumn) -> Vec<String> {
        let mut values: Vec<String> = self
            .rows
            .iter()
            .map(|r| match column {
                FilterColumn::Department => r.department.clone(),
                FilterColumn::Designation => r.designation.clone(),
                FilterColumn::Location => r.location.clone(),
            })
            .collect();
        values.sort_by(|a, b| cmp_ci(a, b));
        values.dedup();
        values
    }

    pub fn selected_row(&self) -> Option<EmployeeRow> {
        let id = self.selected?;
        self.rows.iter().find(|r| r.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_department::Department;
    use contracts::domain::a005_role::Role;
    use crate::shared::export::csv_document;

    fn lists() -> MasterLists {
        MasterLists {
            departments: vec![
                Department { dept_id: 1, dept_name: "Engineering".into() },
                Department { dept_id: 2, dept_name: "Sales".into() },
            ],
            roles: vec![Role { role_id: 1, role_name: "Admin".into() }],
            ..Default::default()
        }
    }

    fn employee(id: i64, name: &str, dept: Option<i64>, active: bool) -> Employee {
        Employee {
            emp_id: Some(id),
            full_name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            department_id: dept,
            role_id: 1,
            is_active: active,
            ..Default::default()
        }
    }

    fn loaded() -> EmployeeListState {
        let mut state = EmployeeListState::default();
        state.finish_load(Ok((
            vec![
                employee(1, "Asha", Some(1), true),
                employee(2, "Ravi", Some(2), false),
                employee(3, "Meena", Some(1), true),
                employee(4, "Kiran", Some(77), true),
            ],
            lists(),
        )));
        state
    }

    #[test]
    fn test_names_resolve_with_fallbacks() {
        let state = loaded();
        assert_eq!(state.rows[0].department, "Engineering");
        assert_eq!(state.rows[0].role, "Admin");
        assert_eq!(state.rows[0].designation, "Unknown Designation");
        assert_eq!(state.rows[0].location, "Unknown Location");
        assert_eq!(state.rows[3].department, "Unknown Department");
    }

    #[test]
    fn test_global_search_covers_resolved_names() {
        let mut state = loaded();
        state.set_query("SALES".into());
        let names: Vec<String> = state.visible_rows().iter().map(|r| r.employee.full_name.clone()).collect();
        assert_eq!(names, vec!["Ravi".to_string()]);

        state.set_query("meena@".into());
        assert_eq!(state.total_count(), 1);
    }

    #[test]
    fn test_column_and_status_filters() {
        let mut state = loaded();
        state.set_column_filter(FilterColumn::Department, "Engineering".into());
        assert_eq!(state.total_count(), 2);
        state.set_status_filter(StatusFilter::Inactive);
        assert_eq!(state.total_count(), 0);
        state.clear_filters();
        assert_eq!(state.total_count(), 4);
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_sort_by_name_descending() {
        let mut state = loaded();
        state.toggle_sort("name");
        state.toggle_sort("name");
        let first = &state.visible_rows()[0];
        assert_eq!(first.employee.full_name, "Ravi");
    }

    #[test]
    fn test_filter_options_are_distinct() {
        let state = loaded();
        assert_eq!(
            state.filter_options(FilterColumn::Department),
            vec!["Engineering".to_string(), "Sales".into(), "Unknown Department".into()]
        );
    }

    #[test]
    fn test_selected_row() {
        let mut state = loaded();
        state.selected = Some(3);
        assert_eq!(state.selected_row().map(|r| r.employee.full_name), Some("Meena".to_string()));
    }

    #[test]
    fn test_status_filter_values() {
        assert_eq!(StatusFilter::from_value("Active"), StatusFilter::Active);
        assert_eq!(StatusFilter::from_value(""), StatusFilter::All);
        assert_eq!(StatusFilter::Inactive.value(), "Inactive");
    }

    #[test]
    fn test_export_row_matches_headers() {
        let mut source = employee(3, "Meena", Some(1), true);
        source.p_address = "4 Hill Rd; Block B".into();
        source.p_pin_code = 560001;
        source.doj = Some("2023-04-01T00:00:00".into());
        let row = EmployeeRow::resolve(source, &lists());

        let cells = row.to_csv_row();
        assert_eq!(cells.len(), EmployeeRow::headers().len());
        assert_eq!(cells[0], "3");
        assert_eq!(cells[11], "560001");
        assert_eq!(cells[14], "");
        assert_eq!(cells[17], "01/04/2023");
        assert_eq!(cells[19], "Engineering");
        assert_eq!(cells[24], "Active");
        assert_eq!(cells[25], "Unknown Location");

        let csv = csv_document(&[row]).unwrap();
        assert!(csv.contains(";\"4 Hill Rd; Block B\";560001;"));
    }
}
