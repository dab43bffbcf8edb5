//! Browser-side exports: CSV spreadsheets and printable (save-as-PDF) pages

use gloo_timers::callback::Timeout;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Nothing to export")]
    Empty,
    #[error("{0}")]
    Browser(String),
}

fn browser_error(context: &str, e: JsValue) -> ExportError {
    ExportError::Browser(format!("{}: {:?}", context, e))
}

/// Rows that can be written to a spreadsheet
pub trait ExcelExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// `;`-separated CSV with a UTF-8 BOM so Excel picks the right encoding
pub fn csv_document<T: ExcelExportable>(data: &[T]) -> Result<String, ExportError> {
    if data.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut csv = String::from('\u{FEFF}');
    csv.push_str(&T::headers().join(";"));
    csv.push('\n');
    for item in data {
        let cells: Vec<String> = item.to_csv_row().iter().map(|c| escape_csv_cell(c)).collect();
        csv.push_str(&cells.join(";"));
        csv.push('\n');
    }
    Ok(csv)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains([';', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Build the CSV and hand it to the browser as a download
pub fn export_to_excel<T: ExcelExportable>(data: &[T], filename: &str) -> Result<(), ExportError> {
    let csv = csv_document(data)?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&csv));
    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| browser_error("Failed to create blob", e))?;

    download_blob(&blob, filename)?;
    log::info!("Exported {} rows to {}", data.len(), filename);
    Ok(())
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Browser("No document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Browser("No body element".into()))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| browser_error("Failed to create object URL", e))?;
    let anchor = document
        .create_element("a")
        .map_err(|e| browser_error("Failed to create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| browser_error("Failed to cast to anchor", e.into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| browser_error("Failed to set style", e))?;

    body.append_child(&anchor)
        .map_err(|e| browser_error("Failed to append anchor", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| browser_error("Failed to remove anchor", e))?;

    Url::revoke_object_url(&url).map_err(|e| browser_error("Failed to revoke URL", e))
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Open `html` in a new window and bring up the print dialog, where the
/// user saves it as PDF. The window title becomes the suggested file name.
pub fn print_document(html: &str) -> Result<(), ExportError> {
    let window = web_sys::window().ok_or_else(|| ExportError::Browser("No window".into()))?;
    let popup = window
        .open_with_url_and_target("about:blank", "_blank")
        .map_err(|e| browser_error("Failed to open print window", e))?
        .ok_or_else(|| ExportError::Browser("Print window was blocked".into()))?;
    let root = popup
        .document()
        .and_then(|d| d.document_element())
        .ok_or_else(|| ExportError::Browser("Print window has no document".into()))?;
    root.set_inner_html(html);
    let _ = popup.focus();

    // Give the new document a moment to lay out before printing
    Timeout::new(250, move || {
        if let Err(e) = popup.print() {
            log::error!("Print failed: {:?}", e);
        }
    })
    .forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: &'static str,
        note: &'static str,
    }

    impl ExcelExportable for Item {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.note.to_string()]
        }
    }

    #[test]
    fn test_csv_document() {
        let items = [
            Item { name: "Plain", note: "ok" },
            Item { name: "Semi;colon", note: "say \"hi\"" },
            Item { name: "Two\nlines", note: "" },
        ];
        let csv = csv_document(&items).unwrap();
        assert_eq!(
            csv,
            "\u{FEFF}Name;Note\nPlain;ok\n\"Semi;colon\";\"say \"\"hi\"\"\"\n\"Two\nlines\";\n"
        );
    }

    #[test]
    fn test_empty_export_is_rejected() {
        assert_eq!(csv_document::<Item>(&[]), Err(ExportError::Empty));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>Tom & "Jerry"</b>"#),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
        );
    }
}
