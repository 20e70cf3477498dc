//! Theme context definition

use crate::config::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// DaisyUI theme name written to `data-theme`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        serde_json::from_str(value)
            .ok()
            .or_else(|| match value.trim() {
                "light" => Some(Self::Light),
                "dark" => Some(Self::Dark),
                _ => None,
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ThemeContext {
    pub theme: Theme,
}

pub enum ThemeAction {
    /// Flip the current theme and remember it
    Toggle,
    /// Apply the system preference without saving it
    FollowSystem(Theme),
}

impl ThemeAction {
    /// Resulting theme, and whether it becomes the saved choice
    fn apply(self, current: Theme) -> (Theme, bool) {
        match self {
            Self::Toggle => (current.toggle(), true),
            Self::FollowSystem(theme) => (theme, false),
        }
    }
}

impl Reducible for ThemeContext {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let (theme, persist) = action.apply(self.theme);
        if persist {
            save_theme(theme);
        }
        update_document_theme(theme);

        Rc::new(Self { theme })
    }
}

/// Theme saved in local storage, if any
pub fn saved_theme() -> Option<Theme> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(ThemeConfig::STORAGE_KEY).ok().flatten())
        .and_then(|value| Theme::parse(&value))
}

fn save_theme(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(ThemeConfig::STORAGE_KEY, theme.as_str());
    }
}

/// Whether the operating system prefers a dark color scheme
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Apply `theme` to the document element
///
/// DaisyUI reads `data-theme`; Tailwind's `dark:` variants read the `dark` class.
pub fn update_document_theme(theme: Theme) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let _ = element.set_attribute("data-theme", theme.as_str());
    if let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>() {
        let class_list = html_element.class_list();
        match theme {
            Theme::Dark => {
                let _ = class_list.add_1("dark");
            }
            Theme::Light => {
                let _ = class_list.remove_1("dark");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_theme() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn toggling_is_saved() {
        assert_eq!(ThemeAction::Toggle.apply(Theme::Light), (Theme::Dark, true));
        assert_eq!(ThemeAction::Toggle.apply(Theme::Dark), (Theme::Light, true));
    }

    #[test]
    fn system_preference_is_not_saved() {
        assert_eq!(
            ThemeAction::FollowSystem(Theme::Dark).apply(Theme::Light),
            (Theme::Dark, false)
        );
    }

    #[test]
    fn parse_accepts_plain_and_json_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("\"light\""), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }
}
