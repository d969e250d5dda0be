//! Browser front end for Ridge Runner.
//!
//! One async task owns the session and steps it on a fixed interval.
//! Browsers receive every frame as a JSON `GameSnapshot` over WebSocket
//! and send back `{"action": "start" | "jump" | "press"}`.
//!
//! ## Usage
//!
//! ```sh
//! cargo run --features web -- --serve        # Default port 3000
//! cargo run --features web -- --serve=8080   # Custom port
//! ```
//!
//! Then open http://localhost:3000 in your browser.

mod server;

pub use server::{parse_client_message, start_web_server, ClientAction, WebServer};
