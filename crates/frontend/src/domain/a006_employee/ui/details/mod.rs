use crate::domain::a006_employee::ui::list::state::EmployeeRow;
use crate::shared::date_utils::api_to_display;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn number_or_dash(value: i64) -> String {
    if value == 0 {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Read-only dialog with all employee fields
#[component]
pub fn EmployeeDetails(row: EmployeeRow, on_close: Callback<()>, on_edit: Callback<i64>) -> impl IntoView {
    let id = row.id;
    let e = row.employee.clone();
    let date = |value: &Option<String>| or_dash(&value.as_deref().map(api_to_display).unwrap_or_default());

    let sections: Vec<(&'static str, Vec<(&'static str, String)>)> = vec![
        (
            "Personal",
            vec![
                ("Full Name", or_dash(&e.full_name)),
                ("Nick Name", or_dash(&e.nick_name)),
                ("Father's Name", or_dash(&e.father_name)),
                ("Mother's Name", or_dash(&e.mother_name)),
                ("Date of Birth", date(&e.dob)),
                ("Gender", or_dash(&e.gender)),
                ("Marital Status", or_dash(&e.marital_status)),
                ("Qualification", or_dash(&e.qualification)),
            ],
        ),
        (
            "Contact",
            vec![
                ("Email", or_dash(&e.email)),
                ("Mobile", or_dash(&e.mobile1)),
                ("Alternate Mobile", or_dash(&e.mobile2)),
                ("Permanent Address", or_dash(&e.p_address)),
                ("Permanent Pin Code", number_or_dash(e.p_pin_code)),
                ("Permanent District", or_dash(&e.p_district)),
                ("Current Address", or_dash(&e.c_address)),
                ("Current Pin Code", number_or_dash(e.c_pin_code)),
                ("Current District", or_dash(&e.c_district)),
            ],
        ),
        (
            "Professional",
            vec![
                ("Department", row.department.clone()),
                ("Designation", row.designation.clone()),
                ("Working Location", row.location.clone()),
                ("Role", row.role.clone()),
                ("Date of Joining", date(&e.doj)),
                ("Status", row.status_label().to_string()),
            ],
        ),
        (
            "Identity",
            vec![
                ("Aadhaar Number", number_or_dash(e.aadhaar_number)),
                ("PAN Number", or_dash(&e.pan_number)),
            ],
        ),
    ];

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{format!("{} (#{})", or_dash(&e.full_name), id)}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {sections
                        .into_iter()
                        .map(|(title, fields)| {
                            view! {
                                <section class="details-section">
                                    <h3 class="details-section__title">{title}</h3>
                                    <dl class="details-grid">
                                        {fields
                                            .into_iter()
                                            .map(|(label, value)| {
                                                view! {
                                                    <dt class="details-grid__label">{label}</dt>
                                                    <dd class="details-grid__value">{value}</dd>
                                                }
                                            })
                                            .collect_view()}
                                    </dl>
                                </section>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_edit.run(id)>
                        {icon("edit")}
                        " Edit"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                </div>
            </div>
        </div>
    }
}
