//! Class helpers so pages and components agree on the calculator's styling.
//! The rules themselves live in `assets/main.css`.

/// Emphasis of a figure in the results area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Profit,
    Expense,
    Muted,
    Accent,
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn mode_card(active: bool) -> &'static str {
    if active {
        "mode-card mode-card--active"
    } else {
        "mode-card"
    }
}

pub fn mode_card_label(active: bool) -> &'static str {
    if active {
        "mode-card__label text-accent"
    } else {
        "mode-card__label text-soft"
    }
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button nav-button--active"
    } else {
        "nav-button"
    }
}

pub fn btn_ghost() -> &'static str {
    "btn-ghost"
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(emphasized: bool, with_prefix: bool) -> &'static str {
    match (emphasized, with_prefix) {
        (true, true) => "field-input field-input--accent field-input--prefixed",
        (true, false) => "field-input field-input--accent",
        (false, true) => "field-input field-input--hero field-input--prefixed",
        (false, false) => "field-input",
    }
}

pub fn label_class(emphasized: bool) -> &'static str {
    if emphasized {
        "field-label text-accent"
    } else {
        "field-label"
    }
}

// ============================================
// RESULT STYLES
// ============================================

pub fn tone_text(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "text-strong",
        Tone::Profit => "text-profit",
        Tone::Expense => "text-expense",
        Tone::Muted => "text-muted",
        Tone::Accent => "text-accent",
    }
}

pub fn breakdown_row(tone: Tone) -> &'static str {
    match tone {
        Tone::Profit => "breakdown-row breakdown-row--profit",
        Tone::Accent => "breakdown-row breakdown-row--total",
        Tone::Neutral | Tone::Expense | Tone::Muted => "breakdown-row",
    }
}
