use std::sync::{Arc, Mutex};

/// Whatever actually stops the page behind an overlay from scrolling.
pub trait PageScroll {
    fn set_locked(&self, locked: bool);
}

struct LockState {
    holders: usize,
    page: Box<dyn PageScroll + Send>,
}

/// Reference-counted page scroll lock. The page is locked while at least one
/// [`ScrollLockGuard`] is alive and unlocked when the last one drops.
#[derive(Clone)]
pub struct ScrollLock {
    state: Arc<Mutex<LockState>>,
}

impl ScrollLock {
    pub fn new(page: impl PageScroll + Send + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(LockState {
                holders: 0,
                page: Box::new(page),
            })),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.state.lock().expect("should be able to acquire scroll lock");
        state.holders += 1;
        if state.holders == 1 {
            log::debug!("page scroll locked");
            state.page.set_locked(true);
        }
        ScrollLockGuard { lock: self.clone() }
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    pub fn holders(&self) -> usize {
        self.state
            .lock()
            .expect("should be able to acquire scroll lock")
            .holders
    }

    fn release(&self) {
        let mut state = self.state.lock().expect("should be able to acquire scroll lock");
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            log::debug!("page scroll released");
            state.page.set_locked(false);
        }
    }
}

/// Held for as long as the page must not scroll. Dropping it releases the hold.
pub struct ScrollLockGuard {
    lock: ScrollLock,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}

/// Locks `<body>` by toggling a class the stylesheet maps to
/// `overflow: hidden; touch-action: none`.
#[cfg(feature = "hydrate")]
pub struct BodyScroll;

#[cfg(feature = "hydrate")]
pub const BODY_LOCK_CLASS: &str = "scroll-locked";

#[cfg(feature = "hydrate")]
impl PageScroll for BodyScroll {
    fn set_locked(&self, locked: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            log::warn!("no document body to lock");
            return;
        };
        let classes = body.class_list();
        let res = if locked {
            classes.add_1(BODY_LOCK_CLASS)
        } else {
            classes.remove_1(BODY_LOCK_CLASS)
        };
        if let Err(e) = res {
            log::error!("couldn't toggle body scroll lock: {e:?}");
        }
    }
}

/// Server render has no page to lock.
pub struct NoopScroll;

impl PageScroll for NoopScroll {
    fn set_locked(&self, _locked: bool) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every lock/unlock call.
    #[derive(Clone, Default)]
    pub struct RecordingScroll {
        pub calls: Arc<Mutex<Vec<bool>>>,
    }

    impl RecordingScroll {
        pub fn calls(&self) -> Vec<bool> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PageScroll for RecordingScroll {
        fn set_locked(&self, locked: bool) {
            self.calls.lock().unwrap().push(locked);
        }
    }
}
