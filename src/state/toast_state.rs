// ============================================================================
// TOAST STATE - Transient user-facing messages
// ============================================================================

use std::cell::Cell;

use super::reactivity::{ReactiveState, SubscriptionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

pub struct ToastStore {
    toasts: ReactiveState<Vec<Toast>>,
    next_id: Cell<u64>,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStore {
    pub fn new() -> Self {
        Self { toasts: ReactiveState::new(Vec::new()), next_id: Cell::new(1) }
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    fn push(&self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        match kind {
            ToastKind::Success => log::info!("✅ {}", message),
            ToastKind::Error => log::warn!("❌ {}", message),
        }
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, message }));
        id
    }

    pub fn dismiss(&self, id: u64) {
        if self.toasts.with(|toasts| toasts.iter().any(|t| t.id == id)) {
            self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
        }
    }

    pub fn current(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Vec<Toast>) + 'static,
    {
        self.toasts.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.toasts.unsubscribe(id);
    }
}
