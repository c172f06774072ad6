//! # Transport
//!
//! The byte transport both protocol engines talk through. The caller owns the
//! implementation (and whatever context it needs) and lends it to the session
//! for each call that may touch the network.

use std::io;
use std::time::Duration;

/// Handle for a connection opened through a [`Transport`]
pub type SocketId = u32;

/// Readiness a caller can wait for with [`Transport::select`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interest {
    Readable,
    Writable,
}

/// Blocking socket primitives used by the protocol engines
pub trait Transport {
    /// Open a TCP connection to `host:port`
    fn tcp_connect(&mut self, host: &str, port: u16) -> io::Result<SocketId>;

    /// Read into `buf`, returning the number of bytes read (0 on EOF)
    fn read(&mut self, socket: SocketId, buf: &mut [u8]) -> io::Result<usize>;

    /// Write from `buf`, returning the number of bytes written
    fn write(&mut self, socket: SocketId, buf: &[u8]) -> io::Result<usize>;

    /// Wait until `socket` is ready for `interest`.
    ///
    /// Returns `false` if the timeout elapsed first.
    fn select(
        &mut self,
        socket: SocketId,
        interest: Interest,
        timeout: Duration,
    ) -> io::Result<bool>;
}
