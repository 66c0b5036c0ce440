//! Actions representing side effects to be executed against the host page.
//!
//! The event handler never touches the document or the clock. It returns a
//! `Vec<Action>` that the [`Session`](super::Session) executes in order through
//! its [`Dom`](crate::ui::Dom) and [`Timer`](super::Timer) collaborators.
//!
//! # Example
//!
//! ```rust
//! use jitters::app::{Action, RequestTicket};
//! use jitters::domain::RequestId;
//! use std::time::Duration;
//!
//! let url = "https://api.twitch.tv/kraken/search/streams?q=starcraft";
//! let ticket = RequestTicket { seq: 0, id: RequestId::for_url(url) };
//! let actions = vec![
//!     Action::SetLoaderVisibility { visible: true },
//!     Action::InjectScript { id: ticket.id.clone(), src: url.to_string() },
//!     Action::ArmTimeout { ticket, delay: Duration::from_millis(5000) },
//! ];
//! ```

use super::request::RequestTicket;
use crate::domain::RequestId;
use std::time::Duration;

/// Commands for the host page, produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Shows or hides every loader element.
    SetLoaderVisibility { visible: bool },

    /// Appends a script element to the document body, starting a JSONP request.
    InjectScript {
        /// Element id, the request fingerprint.
        id: RequestId,
        /// Full request URL.
        src: String,
    },

    /// Removes the script element of a finished or abandoned request.
    RemoveScript { id: RequestId },

    /// Schedules a `TimedOut` event for the request after `delay`.
    ArmTimeout { ticket: RequestTicket, delay: Duration },
}
