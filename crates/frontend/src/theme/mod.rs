//! Light/dark theme, saved under [`ThemeConfig::STORAGE_KEY`]
//!
//! [`ThemeConfig::STORAGE_KEY`]: crate::config::ThemeConfig::STORAGE_KEY

mod context;
mod provider;

pub use context::{Theme, ThemeAction, ThemeContext};
pub use provider::ThemeProvider;

use yew::prelude::*;

pub type ThemeHandle = UseReducerHandle<ThemeContext>;

#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
        .expect("ThemeHandle not found. Make sure to wrap your component with ThemeProvider")
}

/// Click handler that flips the theme and saves the choice
#[hook]
pub fn use_theme_toggle() -> (Theme, Callback<MouseEvent>) {
    let theme = use_theme();
    let current = theme.theme;
    let toggle = Callback::from(move |_: MouseEvent| theme.dispatch(ThemeAction::Toggle));
    (current, toggle)
}
