//! Search session runtime.
//!
//! [`Session`] wraps [`AppState`] together with the host collaborators it needs:
//! a [`Dom`] for script injection and rendering, and a [`Timer`] for request
//! timeouts. Every entry point funnels through [`Session::dispatch`], which runs
//! the event handler, executes the returned actions in order, and renders once
//! when the handler asks for it.

use super::handler::{handle_event, Event};
use super::{Action, AppState, RequestTicket};
use crate::domain::{Result, ResultPage};
use crate::ui::{self, Dom, LOADER_CLASS};
use crate::Config;
use std::time::Duration;

/// Schedules request timeouts.
///
/// Implementations must eventually call [`Session::timed_out`] with the same
/// `ticket`, once, after `delay`. Firing late or for a superseded
/// request is harmless.
pub trait Timer {
    /// Arms a timeout for the request identified by `ticket`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses to schedule the callback.
    fn schedule(&mut self, ticket: RequestTicket, delay: Duration) -> Result<()>;
}

/// A search session bound to a host page.
#[derive(Debug)]
pub struct Session<D, T> {
    state: AppState,
    dom: D,
    timer: T,
}

impl<D: Dom, T: Timer> Session<D, T> {
    #[must_use]
    pub fn new(config: &Config, dom: D, timer: T) -> Self {
        Self {
            state: crate::initialize(config),
            dom,
            timer,
        }
    }

    /// Runs one event through the handler and applies its effects.
    ///
    /// # Errors
    ///
    /// Propagates handler errors and collaborator failures. Actions before the
    /// failing one have already been applied.
    pub fn dispatch(&mut self, event: &Event) -> Result<()> {
        let (should_render, actions) = handle_event(&mut self.state, event)?;
        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled"
        );

        for action in &actions {
            self.execute_action(action)?;
        }
        if should_render {
            ui::render(&self.state, &mut self.dom)?;
        }
        Ok(())
    }

    /// Submits the search form. Blank queries are ignored.
    ///
    /// # Errors
    ///
    /// See [`Session::dispatch`].
    pub fn submit(&mut self, query: &str) -> Result<()> {
        self.dispatch(&Event::Submit { query: query.to_string() })
    }

    /// Searches for `query`.
    ///
    /// # Errors
    ///
    /// See [`Session::dispatch`].
    pub fn search(&mut self, query: &str) -> Result<()> {
        self.dispatch(&Event::Search { query: query.to_string() })
    }

    /// Issues a request to a ready-made URL.
    ///
    /// # Errors
    ///
    /// See [`Session::dispatch`].
    pub fn fetch(&mut self, url: &str) -> Result<()> {
        self.dispatch(&Event::Fetch { url: url.to_string() })
    }

    /// Delivers a JSONP payload.
    ///
    /// # Errors
    ///
    /// See [`Session::dispatch`].
    pub fn fetched(&mut self, page: ResultPage) -> Result<()> {
        self.dispatch(&Event::Fetched(page))
    }

    /// Reports that the timeout armed for `ticket` fired.
    ///
    /// # Errors
    ///
    /// See [`Session::dispatch`].
    pub fn timed_out(&mut self, ticket: RequestTicket) -> Result<()> {
        self.dispatch(&Event::TimedOut { ticket })
    }

    /// Proceeds to the next page, if there is one.
    ///
    /// # Errors
    ///
    /// See [`Session::dispatch`].
    pub fn fetch_next(&mut self) -> Result<()> {
        self.dispatch(&Event::NextPage)
    }

    /// Returns to the previous page, if there is one.
    ///
    /// # Errors
    ///
    /// See [`Session::dispatch`].
    pub fn fetch_prev(&mut self) -> Result<()> {
        self.dispatch(&Event::PrevPage)
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    #[must_use]
    pub const fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::SetLoaderVisibility { visible } => {
                let count = self.dom.set_class_visibility(LOADER_CLASS, *visible)?;
                tracing::trace!(count = count, visible = visible, "loader visibility set");
            }
            Action::InjectScript { id, src } => {
                self.dom.append_script(id.as_str(), src)?;
            }
            Action::RemoveScript { id } => {
                if !self.dom.remove_element(id.as_str())? {
                    tracing::trace!(request_id = %id, "script element already gone");
                }
            }
            Action::ArmTimeout { ticket, delay } => {
                self.timer.schedule(ticket.clone(), *delay)?;
            }
        }
        Ok(())
    }
}
