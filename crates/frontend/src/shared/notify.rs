//! Transient status notifications and the yes/no confirmation gate.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Keep at most this many toasts on screen; older ones are dropped first
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Sink for user-facing status messages
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: String);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message.to_string());
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message.to_string());
    }
}

/// Interactive yes/no gate in front of destructive or persisting actions
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Ordered toasts currently on screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message,
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Reactive toast list provided through context; toasts dismiss themselves after `ttl_ms`
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    ttl_ms: u32,
}

impl ToastService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            ttl_ms,
        }
    }

    pub fn items(&self) -> Vec<Toast> {
        self.queue.with(|q| q.items().to_vec())
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|q| q.dismiss(id));
    }
}

impl Notifier for ToastService {
    fn notify(&self, kind: ToastKind, message: String) {
        match kind {
            ToastKind::Error => log::warn!("notify: {}", message),
            _ => log::info!("notify: {}", message),
        }
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.queue;
        let ttl_ms = self.ttl_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ttl_ms).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }
}

pub fn provide_toasts(ttl_ms: u32) -> ToastService {
    let service = ToastService::new(ttl_ms);
    provide_context(service);
    service
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// `window.confirm`; a missing window counts as "no"
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Renders the toast stack; click a toast to close it early
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.items()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
