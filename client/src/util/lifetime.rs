//! Component lifetime tokens for async continuations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Network responses can arrive after the component that started them has
//! been torn down (modal closed, route changed). Continuations check the token
//! and drop their result instead of writing into disposed signals.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Lifetime {
    alive: Arc<AtomicBool>,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifetime {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Token that ends when the current reactive owner is cleaned up.
    pub fn scoped() -> Self {
        let lifetime = Self::new();
        let handle = lifetime.clone();
        leptos::prelude::on_cleanup(move || handle.end());
        lifetime
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}
