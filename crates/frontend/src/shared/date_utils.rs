/// Date conversions between the three forms the employee screens use:
///
/// - native `<input type="date">` value: `yyyy-mm-dd`
/// - display / draft form: `dd/mm/yyyy`
/// - API form: `yyyy-mm-dd` (the backend may answer with a time suffix)
use chrono::NaiveDate;

const DISPLAY_FORMAT: &str = "%d/%m/%Y";
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Native input value to display form.
/// Example: "2024-03-15" -> "15/03/2024"; empty stays empty.
pub fn native_to_display(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    value.split('-').rev().collect::<Vec<_>>().join("/")
}

/// Display form back to the native input value.
/// Example: "15/03/2024" -> "2024-03-15"
pub fn display_to_native(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    value.split('/').rev().collect::<Vec<_>>().join("-")
}

/// Display form to the API form, zero-padding day and month.
/// Example: "5/3/2024" -> Some("2024-03-05"). `None` when empty or not a real date.
pub fn display_to_api(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DISPLAY_FORMAT)
        .ok()
        .map(|d| d.format(ISO_FORMAT).to_string())
}

/// API value (with or without time part) to display form.
/// Example: "2024-03-15T00:00:00" -> "15/03/2024"; unparseable gives "".
pub fn api_to_display(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value).trim();
    NaiveDate::parse_from_str(date_part, ISO_FORMAT)
        .map(|d| d.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_display_conversion() {
        assert_eq!(native_to_display("2024-03-15"), "15/03/2024");
        assert_eq!(display_to_native("15/03/2024"), "2024-03-15");
        assert_eq!(native_to_display(""), "");
        assert_eq!(display_to_native(""), "");
    }

    #[test]
    fn test_display_to_api() {
        assert_eq!(display_to_api("15/03/2024").as_deref(), Some("2024-03-15"));
        assert_eq!(display_to_api("5/3/2024").as_deref(), Some("2024-03-05"));
        assert_eq!(display_to_api(""), None);
        assert_eq!(display_to_api("31/02/2024"), None);
        assert_eq!(display_to_api("2024-03-15"), None);
    }

    #[test]
    fn test_api_to_display() {
        assert_eq!(api_to_display("2024-03-15T00:00:00"), "15/03/2024");
        assert_eq!(api_to_display("1990-12-01"), "01/12/1990");
        assert_eq!(api_to_display("invalid"), "");
    }
}
