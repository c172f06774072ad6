//! # Protocol Engine Trait
//!
//! The capability set every MMS protocol engine provides. The session is
//! generic over two implementations of this trait and never looks at the
//! wire format itself.

use std::fmt;
use std::io::SeekFrom;

use url::Url;

use crate::{EngineError, Transport};

/// The two protocol variants a session can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// MMS over TCP
    Legacy,
    /// MMS tunneled over HTTP
    Tunneled,
}

impl EngineKind {
    /// URL schemes an engine of this kind can handle.
    ///
    /// `mms://` is a rollover identifier that both variants accept.
    pub fn schemes(self) -> &'static [&'static str] {
        match self {
            Self::Legacy => &["mms", "mmst"],
            Self::Tunneled => &["mms", "mmsh", "http"],
        }
    }

    /// The other variant
    pub fn fallback(self) -> Self {
        match self {
            Self::Legacy => Self::Tunneled,
            Self::Tunneled => Self::Legacy,
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("mmst"),
            Self::Tunneled => f.write_str("mmsh"),
        }
    }
}

/// Check whether an engine of `kind` can handle the scheme of `url`.
///
/// Engines call this at the top of [`ProtocolEngine::connect`] so that a
/// `mmsh://` URL fails fast on the TCP engine (and vice versa) without a
/// handshake attempt. Unparseable URLs are never supported.
pub fn scheme_supported(kind: EngineKind, url: &str) -> bool {
    match Url::parse(url) {
        Ok(url) => kind.schemes().contains(&url.scheme()),
        Err(_) => false,
    }
}

/// A live connection speaking one MMS variant.
///
/// All operations block. Methods that may touch the network take the
/// transport the connection was opened with.
pub trait ProtocolEngine: Sized {
    /// Which variant this engine implements
    const KIND: EngineKind;

    /// Connect to `url`, selecting streams that fit `bandwidth` (bits/sec)
    fn connect(io: &mut dyn Transport, url: &str, bandwidth: u32) -> Result<Self, EngineError>;

    /// Read stream data into `buf`, returning the number of bytes read
    fn read(&mut self, io: &mut dyn Transport, buf: &mut [u8]) -> Result<usize, EngineError>;

    /// Seek to a byte position, returning the new position
    fn seek(&mut self, io: &mut dyn Transport, pos: SeekFrom) -> Result<u64, EngineError>;

    /// Seek to a time offset in seconds
    fn time_seek(&mut self, io: &mut dyn Transport, seconds: f64) -> Result<(), EngineError>;

    /// Stream duration in seconds
    fn time_length(&self) -> f64;

    /// Stream duration in 100ns units, as carried in the ASF header
    fn raw_time_length(&self) -> u64;

    /// Creation time of the file, as carried in the ASF header
    fn file_time(&self) -> u64;

    /// Total stream length in bytes
    fn length(&self) -> u32;

    /// Copy up to `buf.len()` bytes of the ASF header into `buf`
    fn peek_header(&self, buf: &mut [u8]) -> Result<usize, EngineError>;

    /// Current byte offset in the stream
    fn current_pos(&self) -> u64;

    /// Length of the ASF header in bytes
    fn asf_header_len(&self) -> u32;

    /// Size of one ASF data packet in bytes
    fn asf_packet_len(&self) -> u64;

    /// Whether the server allows byte and time seeks on this stream
    fn seekable(&self) -> bool;

    /// Release the connection
    fn close(&mut self);

    /// Change the playback rate. Engines without rate control keep the
    /// default, which reports the operation as unsupported.
    fn set_play_rate(&mut self, rate: f64) -> Result<(), EngineError> {
        let _ = rate;
        Err(EngineError::Unsupported("set_play_rate"))
    }
}
