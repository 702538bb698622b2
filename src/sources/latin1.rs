//! ISO-8859-1 decoding.
//!
//! Every byte maps to the unicode codepoint of the same value,
//! so decoding never fails.
//!
//! Line breaks are `\n`, `\r\n` and lone `\r`.
use std::io::BufRead;

use crate::error::Error;

pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Split already decoded content in lines, without their terminators.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(content);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(|c| c == '\n' || c == '\r') {
            Some(i) => {
                let skip = if current[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[i + skip..]).filter(|r| !r.is_empty());
                Some(&current[..i])
            }
            None => {
                rest = None;
                Some(current).filter(|c| !c.is_empty())
            }
        }
    })
}

/// Line iterator over a latin-1 encoded reader.
///
/// Lines are returned without their line terminator.
pub struct Lines<R> {
    inner: R,
    buf: Vec<u8>,
    /// last line ended with `\r`, a following `\n` belongs to it.
    skip_lf: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            skip_lf: false,
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let mut started = false;
        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) => return Some(Err(e.into())),
            };

            if available.is_empty() {
                return if started {
                    Some(Ok(decode(&self.buf)))
                } else {
                    None
                };
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.inner.consume(1);
                    continue;
                }
            }

            started = true;
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    self.skip_lf = available[i] == b'\r';
                    self.buf.extend_from_slice(&available[..i]);
                    self.inner.consume(i + 1);
                    return Some(Ok(decode(&self.buf)));
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.inner.consume(len);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};

    use super::*;

    #[test]
    fn high_bytes() {
        // "café" in latin-1
        assert_eq!(decode(&[0x63, 0x61, 0x66, 0xe9]), "café");
    }

    #[test]
    fn lines() {
        let src = Cursor::new(b"caf\xe9\r\nsecond\n\nlast".to_vec());
        let lines: Vec<String> = Lines::new(src).map(Result::unwrap).collect();
        assert_eq!(lines, vec!["café", "second", "", "last"]);
    }

    #[test]
    fn lone_carriage_returns() {
        let src = Cursor::new(b"a\rb\r\nc\r\rd\r".to_vec());
        let lines: Vec<String> = Lines::new(src).map(Result::unwrap).collect();
        assert_eq!(lines, vec!["a", "b", "c", "", "d"]);
    }

    #[test]
    fn crlf_across_buffer_boundary() {
        // capacity 2 splits "\r\n" between two fills
        let src = BufReader::with_capacity(2, &b"a\r\nb"[..]);
        let lines: Vec<String> = Lines::new(src).map(Result::unwrap).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn split_decoded() {
        let lines: Vec<&str> = split_lines("a\rb\r\nc\n\nd\n").collect();
        assert_eq!(lines, vec!["a", "b", "c", "", "d"]);
        assert_eq!(split_lines("").count(), 0);
    }
}
