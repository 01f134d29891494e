//! Output sinks
//!
//! [`CharSink`] stands in for a write-one-character device. The printer only
//! ever hands it single ASCII bytes.

use std::io;

/// A destination that accepts one byte at a time
pub trait CharSink {
    type Error;

    fn put(&mut self, byte: u8) -> Result<(), Self::Error>;
}

/// Adapter from any [`io::Write`] to a [`CharSink`]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        IoSink { inner }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> CharSink for IoSink<W> {
    type Error = io::Error;

    fn put(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.inner.write_all(&[byte])
    }
}
