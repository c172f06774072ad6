//! # Session
//!
//! The caller-facing handle. Opening a session negotiates which of the two
//! protocol engines serves the URL; after that every operation is routed to
//! that engine unchanged.
//!
//! ```ignore
//! let mut session = Session::<MmsEngine, MmshEngine>::open(&mut io, url, 128_000)?;
//! let n = session.read(&mut io, &mut buf)?;
//! session.close();
//! ```

use std::fmt;
use std::io::SeekFrom;

use tracing::debug;

use crate::{EngineError, EngineKind, ProtocolEngine, SessionConfig, SessionError, Transport};

/// The engine a session is bound to. Exactly one, fixed at open.
enum ActiveEngine<L, T> {
    Legacy(Box<L>),
    Tunneled(Box<T>),
}

/// Route a call to whichever engine is active
macro_rules! dispatch {
    ($engine:expr, $e:ident => $call:expr) => {
        match $engine {
            ActiveEngine::Legacy($e) => $call,
            ActiveEngine::Tunneled($e) => $call,
        }
    };
}

/// An open MMS stream served by either the legacy engine `L` (MMS over TCP)
/// or the tunneled engine `T` (MMS over HTTP).
///
/// Dropping the session closes the active engine.
pub struct Session<L: ProtocolEngine, T: ProtocolEngine> {
    engine: ActiveEngine<L, T>,
}

impl<L: ProtocolEngine, T: ProtocolEngine> Session<L, T> {
    /// Open `url`, reading the try order and tracing flags from the process
    /// environment.
    ///
    /// The environment is read on every call.
    pub fn open(io: &mut dyn Transport, url: &str, bandwidth: u32) -> Result<Self, SessionError> {
        Self::open_with_config(io, url, bandwidth, &SessionConfig::from_env())
    }

    /// Open `url` with an explicit configuration.
    ///
    /// The tunneled engine is tried first unless `config.prefer_legacy` is
    /// set; if the first engine fails the other one is tried. When both fail
    /// the individual failures are dropped and a single
    /// [`SessionError::ConnectFailed`] is returned.
    pub fn open_with_config(
        io: &mut dyn Transport,
        url: &str,
        bandwidth: u32,
        config: &SessionConfig,
    ) -> Result<Self, SessionError> {
        let first = if config.prefer_legacy {
            EngineKind::Legacy
        } else {
            EngineKind::Tunneled
        };

        for kind in [first, first.fallback()] {
            if config.debug_trace {
                debug!(engine = %kind, url, "Trying to connect");
            }

            match Self::connect_engine(kind, io, url, bandwidth) {
                Ok(engine) => return Ok(Self { engine }),
                Err(e) => {
                    if config.debug_trace {
                        debug!(engine = %kind, url, error = %e, "Connect attempt failed");
                    }
                }
            }
        }

        if config.debug_trace {
            debug!(url, "Failed to connect");
        }

        Err(SessionError::ConnectFailed {
            url: url.to_string(),
        })
    }

    fn connect_engine(
        kind: EngineKind,
        io: &mut dyn Transport,
        url: &str,
        bandwidth: u32,
    ) -> Result<ActiveEngine<L, T>, EngineError> {
        debug_assert_eq!(
            L::KIND,
            EngineKind::Legacy,
            "legacy slot holds a {} engine",
            L::KIND
        );
        debug_assert_eq!(
            T::KIND,
            EngineKind::Tunneled,
            "tunneled slot holds a {} engine",
            T::KIND
        );

        match kind {
            EngineKind::Legacy => {
                L::connect(io, url, bandwidth).map(|e| ActiveEngine::Legacy(Box::new(e)))
            }
            EngineKind::Tunneled => {
                T::connect(io, url, bandwidth).map(|e| ActiveEngine::Tunneled(Box::new(e)))
            }
        }
    }

    /// Which protocol variant serves this session
    pub fn protocol(&self) -> EngineKind {
        match &self.engine {
            ActiveEngine::Legacy(_) => EngineKind::Legacy,
            ActiveEngine::Tunneled(_) => EngineKind::Tunneled,
        }
    }

    pub fn read(&mut self, io: &mut dyn Transport, buf: &mut [u8]) -> Result<usize, EngineError> {
        dispatch!(&mut self.engine, e => e.read(io, buf))
    }

    pub fn seek(&mut self, io: &mut dyn Transport, pos: SeekFrom) -> Result<u64, EngineError> {
        dispatch!(&mut self.engine, e => e.seek(io, pos))
    }

    pub fn time_seek(&mut self, io: &mut dyn Transport, seconds: f64) -> Result<(), EngineError> {
        dispatch!(&mut self.engine, e => e.time_seek(io, seconds))
    }

    /// Stream duration in seconds
    pub fn time_length(&self) -> f64 {
        dispatch!(&self.engine, e => e.time_length())
    }

    /// Stream duration in 100ns units
    pub fn raw_time_length(&self) -> u64 {
        dispatch!(&self.engine, e => e.raw_time_length())
    }

    pub fn file_time(&self) -> u64 {
        dispatch!(&self.engine, e => e.file_time())
    }

    /// Stream length in bytes
    pub fn length(&self) -> u32 {
        dispatch!(&self.engine, e => e.length())
    }

    pub fn peek_header(&self, buf: &mut [u8]) -> Result<usize, EngineError> {
        dispatch!(&self.engine, e => e.peek_header(buf))
    }

    pub fn current_pos(&self) -> u64 {
        dispatch!(&self.engine, e => e.current_pos())
    }

    pub fn asf_header_len(&self) -> u32 {
        dispatch!(&self.engine, e => e.asf_header_len())
    }

    pub fn asf_packet_len(&self) -> u64 {
        dispatch!(&self.engine, e => e.asf_packet_len())
    }

    pub fn seekable(&self) -> bool {
        dispatch!(&self.engine, e => e.seekable())
    }

    /// Change the playback rate, if the active engine supports it.
    ///
    /// Returns [`EngineError::Unsupported`] otherwise.
    pub fn set_play_rate(&mut self, rate: f64) -> Result<(), EngineError> {
        dispatch!(&mut self.engine, e => e.set_play_rate(rate))
    }

    /// Close the active engine and release the session
    pub fn close(self) {
        drop(self);
    }
}

impl<L: ProtocolEngine, T: ProtocolEngine> Drop for Session<L, T> {
    fn drop(&mut self) {
        dispatch!(&mut self.engine, e => e.close())
    }
}

impl<L: ProtocolEngine, T: ProtocolEngine> fmt::Debug for Session<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("protocol", &self.protocol())
            .finish()
    }
}
