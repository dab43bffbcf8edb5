use crate::shared::api::{get_json, ApiError, ApiTransport};
use contracts::domain::a006_employee::{Employee, EMPLOYEES_PATH};

/// `GET /Employees`
pub async fn fetch_employees<A: ApiTransport + ?Sized>(api: &A) -> Result<Vec<Employee>, ApiError> {
    get_json(api, EMPLOYEES_PATH).await
}

/// `GET /Employees/{id}`
pub async fn fetch_employee<A: ApiTransport + ?Sized>(api: &A, id: i64) -> Result<Employee, ApiError> {
    get_json(api, &Employee::item_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::FakeTransport;
    use crate::shared::api::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_employee_by_id() {
        let api = FakeTransport::new().respond(
            Method::Get,
            "/Employees/12",
            200,
            json!({"empID": 12, "fullName": "Asha Rao", "roleID": 2}),
        );
        let employee = fetch_employee(&api, 12).await.unwrap();
        assert_eq!(employee.full_name, "Asha Rao");

        let missing = fetch_employee(&api, 13).await;
        assert_eq!(missing.unwrap_err().status(), Some(404));
    }
}
