//! Toast notifications (top-right stack).
//!
//! Success and error toasts disappear on their own; a loading toast stays
//! until it is dismissed or resolved into one of the other kinds.

use std::time::Duration;

use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::icons::icon;

/// Toasts kept on screen at once; the oldest goes first.
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Loading,
}

impl ToastKind {
    pub fn auto_dismiss(self) -> bool {
        !matches!(self, ToastKind::Loading)
    }

    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Loading => "toast toast--loading",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

fn push_capped(stack: &mut Vec<Toast>, toast: Toast) {
    stack.push(toast);
    if stack.len() > MAX_VISIBLE {
        let overflow = stack.len() - MAX_VISIBLE;
        stack.drain(..overflow);
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    ttl_ms: u32,
}

impl ToastService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            ttl_ms,
        }
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = toast.id;
        self.toasts.update(|stack| push_capped(stack, toast));
        if kind.auto_dismiss() {
            let this = *self;
            set_timeout(
                move || this.dismiss(id),
                Duration::from_millis(self.ttl_ms as u64),
            );
        }
        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, message)
    }

    pub fn loading(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Loading, message)
    }

    pub fn dismiss(&self, id: Uuid) {
        // the stack may already be gone after logout
        let _ = self.toasts.try_update(|stack| stack.retain(|t| t.id != id));
    }

    /// Replace a loading toast with the outcome of its operation.
    pub fn resolve(&self, loading: Uuid, outcome: Result<String, String>) {
        self.dismiss(loading);
        match outcome {
            Ok(message) => self.success(message),
            Err(message) => self.error(message),
        };
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided")
}

#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toaster">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let glyph = match toast.kind {
                        ToastKind::Success => icon("check"),
                        ToastKind::Error => icon("alert"),
                        ToastKind::Loading => view! { <span class="toast__spinner"></span> }.into_any(),
                    };
                    view! {
                        <div class=toast.kind.class() role="status">
                            {glyph}
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(n: u128) -> Toast {
        Toast {
            id: Uuid::from_u128(n),
            kind: ToastKind::Success,
            message: format!("#{}", n),
        }
    }

    #[test]
    fn test_stack_drops_oldest() {
        let mut stack = Vec::new();
        for n in 1..=7 {
            push_capped(&mut stack, toast(n));
        }
        assert_eq!(stack.len(), MAX_VISIBLE);
        assert_eq!(stack[0].message, "#3");
        assert_eq!(stack[4].message, "#7");
    }

    #[test]
    fn test_only_loading_is_sticky() {
        assert!(ToastKind::Success.auto_dismiss());
        assert!(ToastKind::Error.auto_dismiss());
        assert!(!ToastKind::Loading.auto_dismiss());
    }
}
