//! [`Timer`] implementation over `window.setTimeout`.

use super::BrowserSession;
use crate::app::{RequestTicket, Timer};
use crate::domain::{JittersError, Result};
use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Schedules timeouts that dispatch back into the owning session.
///
/// Holds only a weak reference, so pending timers never keep a dropped
/// session alive.
#[derive(Debug)]
pub struct BrowserTimer {
    window: Window,
    session: Weak<RefCell<BrowserSession>>,
}

impl BrowserTimer {
    #[must_use]
    pub const fn new(window: Window, session: Weak<RefCell<BrowserSession>>) -> Self {
        Self { window, session }
    }
}

impl Timer for BrowserTimer {
    fn schedule(&mut self, ticket: RequestTicket, delay: Duration) -> Result<()> {
        let session = self.session.clone();
        let callback = Closure::once_into_js(move || {
            let Some(session) = session.upgrade() else {
                return;
            };
            let Ok(mut session) = session.try_borrow_mut() else {
                tracing::warn!(request = %ticket, "session busy, timeout dropped");
                return;
            };
            if let Err(e) = session.timed_out(ticket) {
                tracing::warn!(error = %e, "timeout handling failed");
            }
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
            .map_err(|e| JittersError::Dom(format!("setTimeout: {e:?}")))?;
        Ok(())
    }
}
