// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scoped event-listener registrations.
//!
//! Each attach hands out a [`Subscription`] guard; dropping the guard
//! detaches that listener exactly once. The dashboard feeds resize and
//! scroll events into its state only while the matching listener is
//! attached.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Event sources the dashboard listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Window / viewport size changes
    Resize,
    /// Carousel scroll position changes
    Scroll,
}

type Counts = RefCell<HashMap<ListenerKind, usize>>;

/// Registry of attached listeners.
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    counts: Rc<Counts>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, kind: ListenerKind) -> Subscription {
        *self.counts.borrow_mut().entry(kind).or_insert(0) += 1;
        log::debug!("Attached {:?} listener", kind);
        Subscription {
            kind,
            counts: Rc::downgrade(&self.counts),
        }
    }

    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.attached(kind) > 0
    }

    /// Number of live registrations of `kind`.
    pub fn attached(&self, kind: ListenerKind) -> usize {
        self.counts.borrow().get(&kind).copied().unwrap_or(0)
    }
}

/// Guard for one attached listener.
#[derive(Debug)]
#[must_use = "dropping a subscription detaches the listener"]
pub struct Subscription {
    kind: ListenerKind,
    counts: Weak<Counts>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(counts) = self.counts.upgrade() else {
            return;
        };
        let mut counts = counts.borrow_mut();
        if let Some(count) = counts.get_mut(&self.kind) {
            *count = count.saturating_sub(1);
            log::debug!("Detached {:?} listener", self.kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_detaches_exactly_once() {
        let subscriptions = Subscriptions::new();
        let resize = subscriptions.attach(ListenerKind::Resize);
        let scroll = subscriptions.attach(ListenerKind::Scroll);
        assert!(subscriptions.is_attached(ListenerKind::Resize));

        drop(resize);
        assert!(!subscriptions.is_attached(ListenerKind::Resize));
        assert!(subscriptions.is_attached(ListenerKind::Scroll));

        drop(scroll);
        assert_eq!(subscriptions.attached(ListenerKind::Scroll), 0);
    }

    #[test]
    fn test_early_exit_still_detaches() {
        let subscriptions = Subscriptions::new();
        let result: Result<(), &str> = (|| {
            let _guard = subscriptions.attach(ListenerKind::Resize);
            Err::<(), _>("mount failed")?;
            Ok(())
        })();

        assert!(result.is_err());
        assert!(!subscriptions.is_attached(ListenerKind::Resize));
    }

    #[test]
    fn test_guard_outliving_registry() {
        let subscriptions = Subscriptions::new();
        let guard = subscriptions.attach(ListenerKind::Scroll);
        drop(subscriptions);
        drop(guard);
    }
}
