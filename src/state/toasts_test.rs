use super::*;

// ============================================================
// Queue behaviour
// ============================================================

#[test]
fn push_hands_out_distinct_ids_in_order() {
    let mut state = ToastState::default();

    let first = state.push(ToastKind::Info, "uploading");
    let second = state.push(ToastKind::Success, "done");

    assert_ne!(first, second);
    let messages: Vec<&str> = state
        .items()
        .iter()
        .map(|toast| toast.message.as_str())
        .collect();
    assert_eq!(messages, vec!["uploading", "done"]);
}

#[test]
fn dismiss_removes_only_the_named_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Error, "failed");
    let second = state.push(ToastKind::Info, "retrying");

    state.dismiss(first);

    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].id, second);
}

#[test]
fn dismiss_ignores_ids_that_are_already_gone() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Success, "saved");

    state.dismiss(id);
    state.dismiss(id);

    assert!(state.items().is_empty());
}

#[test]
fn ids_are_never_reused_after_a_dismissal() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "one");
    state.dismiss(first);

    let second = state.push(ToastKind::Info, "two");

    assert_ne!(first, second);
}

// ============================================================
// Signal-backed helpers
// ============================================================

#[test]
fn show_pushes_through_the_signal() {
    let toasts = RwSignal::new(ToastState::default());

    show(toasts, ToastKind::Error, "something broke");

    let state = toasts.get_untracked();
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].kind, ToastKind::Error);
}

#[test]
fn kind_maps_to_a_distinct_css_class() {
    let classes = [
        ToastKind::Success.css_class(),
        ToastKind::Error.css_class(),
        ToastKind::Info.css_class(),
    ];
    assert_eq!(
        classes.len(),
        classes.iter().collect::<std::collections::BTreeSet<_>>().len()
    );
}
