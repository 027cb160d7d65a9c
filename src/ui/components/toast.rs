use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    toasts.with_mut(|entries| enqueue(entries, ToastMessage::new(kind, text)));
}

/// Appends `message`, dropping the oldest entry once the queue is full.
fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toasts",
            ul {
                class: "toasts__list",
                for view in views {
                    ToastCard { view, toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toasts_for_timer = toasts.clone();
    let toast_id = view.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts_for_timer.clone();
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let class = format!("toast {}", view.theme);
    rsx! {
        li {
            class: class,
            span { "{view.icon}" }
            p { class: "toast__text", "{view.text}" }
            button {
                class: "toast__dismiss",
                onclick: move |_| {
                    let target = view.id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Fechar"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    text: String,
    theme: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (theme, icon) = match message.kind {
            ToastKind::Info => ("toast--info", "ℹ️"),
            ToastKind::Warning => ("toast--warning", "⚠️"),
        };

        ToastView {
            id: message.id,
            text: message.text,
            theme,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_keeps_most_recent_messages() {
        let mut entries = Vec::new();
        for idx in 0..7 {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Info, format!("msg {idx}")));
        }
        assert_eq!(entries.len(), MAX_TOASTS);
        assert_eq!(entries.first().map(|t| t.text.as_str()), Some("msg 2"));
        assert_eq!(entries.last().map(|t| t.text.as_str()), Some("msg 6"));
    }

    #[test]
    fn messages_get_unique_ids() {
        let a = ToastMessage::new(ToastKind::Info, "a");
        let b = ToastMessage::new(ToastKind::Info, "b");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("toast-"));
    }

    #[test]
    fn view_picks_theme_per_kind() {
        let view = ToastView::from(ToastMessage::new(ToastKind::Warning, "falhou"));
        assert_eq!(view.theme, "toast--warning");
        assert_eq!(view.text, "falhou");
    }
}
