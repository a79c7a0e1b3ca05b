//! Stdout handle with a scoped mute.
//!
//! Only the final envelope may reach stdout. Anything a connector prints
//! while a [`Silenced`] guard is alive is discarded, and the console is
//! unmuted when the guard drops, including during unwinding.

use std::io::{self, Write};

use serde::Serialize;

use crate::envelope::{DumpsFormatter, Envelope};

/// Output stream for the envelope.
pub struct Console<W: Write> {
    out: W,
    muted: bool,
}

impl Console<io::Stdout> {
    /// Console writing to the process stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    /// Wrap any writer.
    pub const fn new(out: W) -> Self {
        Self { out, muted: false }
    }

    /// Mute the console until the returned guard is dropped.
    pub fn silence(&mut self) -> Silenced<'_, W> {
        self.muted = true;
        Silenced { console: self }
    }

    /// Whether a [`Silenced`] guard is currently alive.
    #[must_use]
    pub const fn is_silenced(&self) -> bool {
        self.muted
    }

    /// Write the envelope as one JSON line in the [`DumpsFormatter`] layout
    /// and flush.
    ///
    /// # Errors
    /// Returns the underlying I/O error if stdout is closed.
    pub fn emit(&mut self, envelope: &Envelope) -> io::Result<()> {
        let mut ser = serde_json::Serializer::with_formatter(&mut *self, DumpsFormatter);
        envelope.serialize(&mut ser)?;
        self.write_all(b"\n")?;
        self.flush()
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Write for Console<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.muted {
            return io::sink().write(buf);
        }
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.muted {
            return Ok(());
        }
        self.out.flush()
    }
}

/// Guard returned by [`Console::silence`]. Writes through it are discarded.
pub struct Silenced<'a, W: Write> {
    console: &'a mut Console<W>,
}

impl<W: Write> Write for Silenced<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()
    }
}

impl<W: Write> Drop for Silenced<'_, W> {
    fn drop(&mut self) {
        self.console.muted = false;
    }
}
