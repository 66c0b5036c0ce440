//! Application layer coordinating state, events, and actions.
//!
//! This module holds the search session logic, sitting between the host
//! binding (browser or test fakes) and the domain/api/ui layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Action → Event → Event Handler → State Mutation → Actions → Dom / Timer
//!                              ↑                                      ↓
//!                              └──── JSONP callback / timeout ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`pagination`]: Page count arithmetic
//! - [`request`]: Pending request tracking and user-visible failures
//! - [`session`]: Runtime wrapper executing actions against host collaborators
//! - [`state`]: Central search state and view model computation

pub mod actions;
pub mod handler;
pub mod pagination;
pub mod request;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use pagination::{page_count, DEFAULT_PER_PAGE};
pub use request::{PendingRequest, RequestPhase, RequestTicket, SearchFailure};
pub use session::{Session, Timer};
pub use state::AppState;
