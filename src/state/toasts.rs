//! App-wide toast notifications.
//!
//! Pages push toasts for the outcome of async work; the host component in
//! `components::toast_host` renders whatever sits in the queue. Each toast
//! dismisses itself after a few seconds, or sooner when clicked.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// How long a toast stays up before dismissing itself.
#[cfg(feature = "web")]
const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(4);

/// Visual flavour of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// CSS modifier for the toast card.
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Info => "toast--info",
        }
    }
}

/// One visible toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// The toast queue. Ids are handed out once and never reused, so a late
/// dismissal cannot take down a newer toast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Appends a toast and answers its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Removes a toast by id. Ids that are already gone are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Currently visible toasts, oldest first.
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Installs the toast context.
pub fn provide_toasts() {
    provide_context(RwSignal::new(ToastState::default()));
}

/// The toast signal installed by [`provide_toasts`].
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}

/// Shows a toast and schedules its dismissal.
pub fn show(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = toasts.try_update(|state| state.push(kind, message)) else {
        return;
    };
    schedule_dismiss(toasts, id);
}

/// Success toast.
pub fn success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    show(toasts, ToastKind::Success, message);
}

/// Error toast.
pub fn error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    show(toasts, ToastKind::Error, message);
}

/// Info toast.
pub fn info(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    show(toasts, ToastKind::Info, message);
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "web")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_LIFETIME).await;
        let _ = toasts.try_update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "web"))]
    let _ = (toasts, id);
}
