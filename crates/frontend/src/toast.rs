//! Toast notifications

use crate::config::ToastConfig;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Info => "alert-info",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(kind, message) => {
                let mut toasts = self.toasts.clone();
                toasts.push(Toast {
                    id: self.next_id,
                    kind,
                    message,
                });
                Rc::new(Self {
                    toasts,
                    next_id: self.next_id.wrapping_add(1),
                })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|toast| toast.id == id) {
                    return self;
                }
                Rc::new(Self {
                    toasts: self
                        .toasts
                        .iter()
                        .filter(|toast| toast.id != id)
                        .cloned()
                        .collect(),
                    next_id: self.next_id,
                })
            }
        }
    }
}

/// Handle for raising toasts from any component
#[derive(Clone, PartialEq)]
pub struct ToastHandle(UseReducerHandle<ToastState>);

impl ToastHandle {
    pub fn success(&self, message: impl Into<String>) {
        self.0.dispatch(ToastAction::Push(ToastKind::Success, message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.0.dispatch(ToastAction::Push(ToastKind::Info, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.0.dispatch(ToastAction::Push(ToastKind::Error, message.into()));
    }

    pub fn dismiss(&self, id: u32) {
        self.0.dispatch(ToastAction::Dismiss(id));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);
    let handle = ToastHandle(state.clone());

    html! {
        <ContextProvider<ToastHandle> context={handle.clone()}>
            {props.children.clone()}
            <div class={classes!("toast-stack", "flex", "flex-col", "gap-2", ToastConfig::POSITION_CLASSES)}>
                { for state.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} handle={handle.clone()} />
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

/// Hook to raise toasts
#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>()
        .expect("ToastHandle not found. Make sure to wrap your component with ToastProvider")
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    handle: ToastHandle,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let hovered = use_state(|| false);
    let id = props.toast.id;

    // Restart the countdown whenever the pointer leaves
    {
        let handle = props.handle.clone();
        let paused = ToastConfig::PAUSE_ON_HOVER && *hovered;
        use_effect_with(paused, move |paused| {
            let timeout = (!*paused)
                .then(|| Timeout::new(ToastConfig::TIMEOUT_MS, move || handle.dismiss(id)));
            move || drop(timeout)
        });
    }

    let onclick = {
        let handle = props.handle.clone();
        Callback::from(move |_: MouseEvent| {
            if ToastConfig::CLOSE_ON_CLICK {
                handle.dismiss(id);
            }
        })
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            role="alert"
            class={classes!("alert", "shadow-lg", "cursor-pointer", props.toast.kind.alert_class())}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            <span>{ &props.toast.message }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(state: Rc<ToastState>, message: &str) -> Rc<ToastState> {
        state.reduce(ToastAction::Push(ToastKind::Info, message.to_string()))
    }

    #[test]
    fn pushes_get_unique_ids() {
        let state = push(push(Rc::new(ToastState::default()), "one"), "two");
        let ids: Vec<u32> = state.toasts.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let state = push(push(Rc::new(ToastState::default()), "one"), "two");
        let state = state.reduce(ToastAction::Dismiss(0));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "two");
    }

    #[test]
    fn dismissing_unknown_id_keeps_state() {
        let state = push(Rc::new(ToastState::default()), "one");
        let next = Rc::clone(&state).reduce(ToastAction::Dismiss(7));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
