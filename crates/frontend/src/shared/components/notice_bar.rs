use crate::shared::notice::Notice;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEFAULT_DISMISS_MS: u32 = 4000;

/// Renders the current notice; success/warning/error are dismissed after a delay
#[component]
pub fn NoticeBar(
    #[prop(into)] notice: Signal<Option<Notice>>,
    on_dismiss: Callback<()>,
    #[prop(optional)] dismiss_after_ms: Option<u32>,
) -> impl IntoView {
    let delay = dismiss_after_ms.unwrap_or(DEFAULT_DISMISS_MS);

    Effect::new(move |_| {
        let Some(current) = notice.get() else {
            return;
        };
        if !current.auto_dismiss() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // Skip if a newer notice replaced this one or the page was closed
            if notice.try_get_untracked().flatten().as_ref() == Some(&current) {
                on_dismiss.run(());
            }
        });
    });

    move || {
        notice.get().map(|n| {
            view! {
                <div class=n.css_class() role="status">
                    <span class="alert__message">{n.message.clone()}</span>
                    <button class="alert__close" title="Dismiss" on:click=move |_| on_dismiss.run(())>
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
            }
        })
    }
}
