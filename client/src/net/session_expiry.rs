//! Global hook fired when an authenticated API call returns HTTP 401.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` calls `notify` from inside spawned tasks where no reactive context
//! is available, so the app root registers a plain callback here instead.
//! The browser runs single-threaded, so the handler lives in a thread-local.

#[cfg(test)]
#[path = "session_expiry_test.rs"]
mod session_expiry_test;

use std::cell::RefCell;
use std::rc::Rc;

type Handler = Rc<dyn Fn()>;

thread_local! {
    static HANDLER: RefCell<Option<Handler>> = const { RefCell::new(None) };
}

/// Register the expiry handler, replacing any previous one.
pub fn set_handler<F>(handler: F)
where
    F: Fn() + 'static,
{
    HANDLER.with(|slot| *slot.borrow_mut() = Some(Rc::new(handler)));
}

/// Remove the registered handler.
pub fn clear_handler() {
    HANDLER.with(|slot| slot.borrow_mut().take());
}

/// Fire the registered handler. Returns `false` when none is registered.
pub fn notify() -> bool {
    // Clone out of the slot so the handler may re-register without a
    // double borrow.
    let handler = HANDLER.with(|slot| slot.borrow().clone());
    match handler {
        Some(handler) => {
            handler();
            true
        }
        None => false,
    }
}
