//! Numbered line reader used for the description lookahead

use crate::error::TrajResult;
use std::io::BufRead;

/// Forward-only reader yielding `(line_number, text)` pairs
///
/// Lines are decoded lossily so stray bytes in solver output cannot abort a
/// run. Trailing `\n` / `\r\n` are removed.
pub struct LogLines<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> LogLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
            line_number: 0,
        }
    }

    /// Read the next physical line, or `None` at end of stream
    pub fn next_line(&mut self) -> TrajResult<Option<(usize, String)>> {
        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        self.line_number += 1;
        Ok(Some((
            self.line_number,
            String::from_utf8_lossy(&self.buf).into_owned(),
        )))
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}
