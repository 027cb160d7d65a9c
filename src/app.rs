use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, GuidePage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
        version::APP_NAME,
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/guia")]
    Guide {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                tracing::info!(mode = ?saved.mode, "restored previous draft");
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Any edit to the form rewrites the draft file; failures only warn once per session.
    let mut warned = use_signal(|| false);
    use_effect(move || {
        if !persist_user_state(&state) && !*warned.peek() {
            warned.set(true);
            push_toast(
                toasts.clone(),
                ToastKind::Warning,
                "Não foi possível salvar os dados do formulário.",
            );
        }
    });

    rsx! {
        document::Title { "{APP_NAME}" }
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Saves the current draft, returning whether it was written.
pub fn persist_user_state(state: &Signal<AppState>) -> bool {
    let snapshot = state.with(|st| st.to_persisted());
    match save_persisted_state(&snapshot) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "failed to persist form draft");
            false
        }
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Guide() -> Element {
    rsx! { Shell { GuidePage {} } }
}
