//! Proxy data plane: app listener, per-connection handlers, and the router.
//!
//! Steady-state data flow:
//!
//! ```text
//! App ↔ AppConn ↔ Router ↔ UpstreamSession ↔ Gateway
//! ```
//!
//! Handlers terminate session-establishment operations locally; the router
//! masquerades everything else so the gateway sees a single registered
//! client and each app sees itself addressed normally.

pub mod handler;
pub mod listener;
pub mod router;

pub use handler::{handle_connection, APP_QUEUE};
pub use listener::AppListener;
pub use router::{Router, RouterEvent, RouterHandle};
