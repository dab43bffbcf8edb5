//! Read-only summary of a draft, shown on the review step and printed to PDF

use super::documents::{DocumentKind, DocumentSet};
use super::draft::{DateField, EmployeeDraft, MasterKind, TextField};
use super::steps::WizardStep;
use crate::shared::export::escape_html;

/// Title of the printed page, suggested as the PDF file name
pub const PRINT_TITLE: &str = "employee-details";

#[derive(Debug, Clone, PartialEq)]
pub struct SummarySection {
    pub title: &'static str,
    /// Step the section's edit action returns to
    pub step: WizardStep,
    pub rows: Vec<(&'static str, String)>,
}

fn shown(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn address(line: &str, district: &str, pin_code: &str) -> String {
    let parts: Vec<&str> = [line, district, pin_code]
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    shown(&parts.join(", "))
}

pub fn review_sections<H>(draft: &EmployeeDraft, documents: &DocumentSet<H>) -> Vec<SummarySection> {
    let text = |f: TextField| (f.label(), shown(draft.text(f)));
    let date = |f: DateField| (f.label(), shown(draft.date(f)));
    let master = |k: MasterKind| (k.label(), shown(draft.master_name(k)));

    let basic = vec![
        text(TextField::FullName),
        text(TextField::NickName),
        text(TextField::FatherName),
        text(TextField::MotherName),
        date(DateField::Dob),
        text(TextField::Gender),
        text(TextField::MaritalStatus),
        text(TextField::Qualification),
        text(TextField::Email),
        text(TextField::Mobile1),
        text(TextField::Mobile2),
        (
            "Permanent Address",
            address(&draft.p_address, &draft.p_district, &draft.p_pin_code),
        ),
        (
            "Current Address",
            address(&draft.c_address, &draft.c_district, &draft.c_pin_code),
        ),
        text(TextField::AadhaarNumber),
        text(TextField::PanNumber),
        master(MasterKind::Location),
        master(MasterKind::Department),
        master(MasterKind::Designation),
        master(MasterKind::Role),
        date(DateField::Doj),
    ];
    let bank = vec![
        master(MasterKind::Bank),
        text(TextField::BranchName),
        text(TextField::AccountNo),
        text(TextField::IfscCode),
    ];
    let docs = DocumentKind::ALL
        .into_iter()
        .map(|k| {
            let value = documents
                .get(k)
                .map(|f| format!("{} ({})", f.name, f.size_label()))
                .unwrap_or_else(|| "Not uploaded".to_string());
            (k.label(), value)
        })
        .collect();

    vec![
        SummarySection {
            title: "Basic Details",
            step: WizardStep::BasicDetails,
            rows: basic,
        },
        SummarySection {
            title: "Bank Details",
            step: WizardStep::BankDetails,
            rows: bank,
        },
        SummarySection {
            title: "Documents",
            step: WizardStep::Documents,
            rows: docs,
        },
    ]
}

const PRINT_CSS: &str = r#"
    body { font: 13px/1.4 system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif; color: #0f172a; margin: 24px; }
    h1 { font-size: 20px; margin: 0 0 16px; }
    h2 { font-size: 15px; margin: 18px 0 8px; color: #1d4ed8; border-bottom: 1px solid #e2e8f0; padding-bottom: 4px; }
    section { break-inside: avoid; page-break-inside: avoid; }
    table { width: 100%; border-collapse: collapse; }
    th { text-align: left; width: 35%; color: #475569; font-weight: 500; padding: 3px 8px 3px 0; }
    td { padding: 3px 0; }
    @page { size: A4; margin: 15mm; }
    @media print { body { margin: 0; } }
"#;

/// Standalone HTML page for the browser's print-to-PDF
pub fn printable_summary(heading: &str, sections: &[SummarySection]) -> String {
    let mut body = format!("<h1>{}</h1>", escape_html(heading));
    for section in sections {
        body.push_str(&format!("<section><h2>{}</h2><table>", escape_html(section.title)));
        for (label, value) in &section.rows {
            body.push_str(&format!(
                "<tr><th>{}</th><td>{}</td></tr>",
                escape_html(label),
                escape_html(value)
            ));
        }
        body.push_str("</table></section>");
    }
    format!(
        "<head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>{}</body>",
        PRINT_TITLE, PRINT_CSS, body
    )
}
