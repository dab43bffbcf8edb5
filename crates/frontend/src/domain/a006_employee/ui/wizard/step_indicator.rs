use crate::domain::a006_employee::wizard::{StepController, WizardStep};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn StepIndicator(steps: RwSignal<StepController>) -> impl IntoView {
    let current = move || steps.with(|s| s.step);

    view! {
        <ol class="wizard-steps">
            {WizardStep::ALL
                .into_iter()
                .map(|step| {
                    let class = move || {
                        let now = current();
                        if step == now {
                            "wizard-steps__item wizard-steps__item--active"
                        } else if step < now {
                            "wizard-steps__item wizard-steps__item--done"
                        } else {
                            "wizard-steps__item"
                        }
                    };
                    view! {
                        <li class=class>
                            <span class="wizard-steps__number">
                                {move || {
                                    if step < current() {
                                        icon("check")
                                    } else {
                                        step.number().to_string().into_any()
                                    }
                                }}
                            </span>
                            <span class="wizard-steps__title">{step.title()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
