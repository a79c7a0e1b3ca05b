//! The single JSON document written to stdout.

use std::io;

use serde::{Serialize, Serializer};
use serde_json::ser::Formatter;
use vnfin_core::Record;

/// Outcome of one invocation: wholly success with rows, or wholly failure
/// with a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{"success": true, "data": [...]}`
    Success(Vec<Record>),
    /// `{"success": false, "error": "..."}`
    Failure(String),
}

impl Envelope {
    /// Success envelope carrying `rows` in provider order.
    #[must_use]
    pub const fn success(rows: Vec<Record>) -> Self {
        Self::Success(rows)
    }

    /// Failure envelope from anything displayable.
    pub fn failure(msg: impl ToString) -> Self {
        Self::Failure(msg.to_string())
    }

    /// Whether this is a success envelope.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Layout of Python's `json.dumps` defaults, which existing callers of the
/// CLI compare against: `", "` between items, `": "` after keys, and every
/// non-ASCII character written as a `\uXXXX` escape.
#[derive(Debug, Clone, Copy, Default)]
pub struct DumpsFormatter;

impl Formatter for DumpsFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

#[derive(Serialize)]
struct Wire<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a [Record]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Success(rows) => Wire {
                success: true,
                data: Some(rows.as_slice()),
                error: None,
            },
            Self::Failure(msg) => Wire {
                success: false,
                data: None,
                error: Some(msg),
            },
        };
        wire.serialize(serializer)
    }
}
