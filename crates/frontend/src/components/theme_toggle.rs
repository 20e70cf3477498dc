//! Light/dark theme switch

use crate::theme::{Theme, use_theme_toggle};
use yew::prelude::*;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let (theme, onclick) = use_theme_toggle();

    let (icon, label) = match theme {
        Theme::Light => ("🌙", "Switch to dark theme"),
        Theme::Dark => ("☀️", "Switch to light theme"),
    };

    html! {
        <button class="btn btn-ghost btn-circle" {onclick} title={label} aria-label={label}>
            <span class="text-lg">{icon}</span>
        </button>
    }
}
