// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::record::RECORD_LENGTH;
use crate::Error;

/// The length of a line in bytes: a record followed by `\r\n`.
pub const LINE_LENGTH: usize = RECORD_LENGTH + 2;

/// Splits a buffer into fixed-length lines.
///
/// Each line is terminated by `\n` and must be exactly [`LINE_LENGTH`] bytes
/// including its terminator. The first line of a different length is returned
/// as [`Error::InvalidLineLength`] and ends the iteration.
///
/// # Examples
///
/// ```
/// use arinc424::{Lines, LINE_LENGTH};
///
/// let mut data = vec![b' '; LINE_LENGTH - 2];
/// data.extend_from_slice(b"\r\n");
///
/// let mut lines = Lines::new(&data);
/// let line = lines.next().expect("there should be a line")?;
/// assert_eq!(line.len(), LINE_LENGTH);
///
/// lines.push_back(line);
/// assert_eq!(lines.next(), Some(Ok(line)));
/// assert_eq!(lines.next(), None);
/// # Ok::<(), arinc424::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    data: &'a [u8],
    pos: usize,
    line: usize,
    pushed: Option<&'a [u8]>,
}

impl<'a> Lines<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            line: 0,
            pushed: None,
        }
    }

    /// Returns the 1-based number of the line returned last.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Puts a line back so that the next call to `next` returns it again.
    ///
    /// Only one line can be pushed back. Pushing another line replaces the
    /// previous one.
    pub fn push_back(&mut self, line: &'a [u8]) {
        if self.pushed.replace(line).is_none() {
            self.line = self.line.saturating_sub(1);
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Result<&'a [u8], Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pushed.take() {
            self.line += 1;
            return Some(Ok(line));
        }

        let rest = self.data.get(self.pos..).filter(|rest| !rest.is_empty())?;
        let end = rest
            .iter()
            .position(|&b| b == b'\n')
            .map_or(rest.len(), |i| i + 1);
        let line = &rest[..end];

        self.line += 1;
        self.pos += end;

        if line.len() == LINE_LENGTH {
            Some(Ok(line))
        } else {
            // nothing can be trusted after a broken line
            self.pos = self.data.len();
            Some(Err(Error::InvalidLineLength {
                line: self.line,
                actual: line.len(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(fill: u8) -> Vec<u8> {
        let mut l = vec![fill; RECORD_LENGTH];
        l.extend_from_slice(b"\r\n");
        l
    }

    #[test]
    fn splits_lines() {
        let data = [line(b'A'), line(b'B')].concat();
        let lines: Vec<_> = Lines::new(&data).collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_ref().map(|l| l[0]), Ok(b'A'));
        assert_eq!(lines[1].as_ref().map(|l| l[0]), Ok(b'B'));
    }

    #[test]
    fn fails_on_short_line() {
        let mut short = vec![b'S'; RECORD_LENGTH - 1];
        short.extend_from_slice(b"\r\n");
        let data = [line(b'A'), short, line(b'B')].concat();

        let mut lines = Lines::new(&data);
        assert!(matches!(lines.next(), Some(Ok(_))));
        assert_eq!(
            lines.next(),
            Some(Err(Error::InvalidLineLength {
                line: 2,
                actual: 133
            }))
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn fails_on_unterminated_tail() {
        let mut data = line(b'A');
        data.extend_from_slice(b"SUSA");

        let lines: Vec<_> = Lines::new(&data).collect();
        assert_eq!(
            lines[1],
            Err(Error::InvalidLineLength { line: 2, actual: 4 })
        );
    }

    #[test]
    fn pushed_back_line_keeps_its_number() {
        let data = [line(b'A'), line(b'B')].concat();
        let mut lines = Lines::new(&data);

        let first = lines.next().expect("first line").expect("valid line");
        assert_eq!(lines.line(), 1);

        lines.push_back(first);
        assert_eq!(lines.line(), 0);
        assert_eq!(lines.next(), Some(Ok(first)));
        assert_eq!(lines.line(), 1);

        let second = lines.next().expect("second line").expect("valid line");
        assert_eq!(second[0], b'B');
        assert_eq!(lines.line(), 2);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(Lines::new(b"").next(), None);
    }
}
