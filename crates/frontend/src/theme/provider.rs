//! Theme provider component

use super::context::{
    Theme, ThemeAction, ThemeContext, saved_theme, system_prefers_dark, update_document_theme,
};
use super::ThemeHandle;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(|| {
        let theme = saved_theme().unwrap_or_default();
        update_document_theme(theme);
        ThemeContext { theme }
    });

    // An unsaved theme tracks the system preference
    {
        let theme = theme.clone();
        use_effect_with((), move |()| {
            if saved_theme().is_none() && system_prefers_dark() {
                theme.dispatch(ThemeAction::FollowSystem(Theme::Dark));
            }
        });
    }

    html! {
        <ContextProvider<ThemeHandle> context={theme}>
            { props.children.clone() }
        </ContextProvider<ThemeHandle>>
    }
}
