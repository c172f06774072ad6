//! # mmsx
//!
//! A single session handle over the two MMS transport variants: MMS over TCP
//! (the legacy variant, `mmst://`) and MMS over HTTP (the tunneled variant,
//! `mmsh://`). The caller opens a URL once and the session picks whichever
//! protocol engine the server accepts, then routes every read, seek and
//! metadata query to that engine.
//!
//! ## Features
//!
//! - Connect-time negotiation with fallback between the two engines
//! - Configurable try order (`LIBMMS_TRY_MMS_FIRST`)
//! - Optional connect tracing (`LIBMMS_DEBUG`)
//! - Engines and transports are supplied by the caller through traits
//!
//! The wire protocols themselves live outside this crate; implement
//! [`ProtocolEngine`] for each of them and pass the pair to [`Session`].

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod session;
pub mod transport;


pub use builder::SessionConfigBuilder;
pub use config::SessionConfig;
pub use error::{EngineError, SessionError};

pub use engine::{EngineKind, ProtocolEngine, scheme_supported};
pub use session::Session;
pub use transport::{Interest, SocketId, Transport};
