//! Fixed-position host rendering the toast queue.

use leptos::prelude::*;

use crate::state::toasts;

/// Renders whatever sits in the toast queue, newest at the bottom.
/// Clicking a toast dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = toasts::use_toasts();

    view! {
        <div class="toast-stack">
            {move || {
                let items = toasts.get().items().to_vec();
                items
                    .into_iter()
                    .map(|toast| {
                        let class = format!("toast {}", toast.kind.css_class());
                        let id = toast.id;
                        view! {
                            <div
                                class=class
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
