// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A single character of lookahead over a character source, with
//! line/column tracking and enough line history to step back and to
//! show the text of earlier lines in diagnostics.

//! The source is any iterator of `io::Result<char>`: use
//! [Cursor::for_str](Cursor::for_str) for text in memory, or
//! [buffered_chars](../buffered_chars/index.html) for streams.

use crate::pos::{Pos, Mark};
use kstring::KString;
use std::collections::VecDeque;
use std::io;
use std::iter::Fuse;
use std::mem;

/// Character source for text held in memory; never fails.
pub struct StrChars<'s>(std::str::Chars<'s>);

impl<'s> Iterator for StrChars<'s> {
    type Item = io::Result<char>;
    fn next(&mut self) -> Option<io::Result<char>> {
        self.0.next().map(Ok)
    }
}

pub struct Cursor<I: Iterator<Item = io::Result<char>>> {
    source: Fuse<I>,
    // Characters pulled from `source` but not yet current: pushed
    // back by `step_back`, or read ahead by `current_line_text`.
    ahead: VecDeque<char>,
    // An error hit while reading ahead, reported once `ahead` drains.
    pending: Option<io::Error>,
    current: Option<char>,
    offset: usize,
    line: u32,
    col: u32,
    line_text: String,
    // Column and text of every finished line, indexed by line - 1.
    prev_cols: Vec<u32>,
    prev_lines: Vec<String>,
}

impl<'s> Cursor<StrChars<'s>> {
    pub fn for_str(s: &'s str) -> Self {
        let mut source = StrChars(s.chars()).fuse();
        let current = source.next().and_then(|r| r.ok());
        Cursor::with_current(source, current)
    }
}

impl<I: Iterator<Item = io::Result<char>>> Cursor<I> {
    /// Loads the first character, which is why this can fail.
    pub fn new(source: I) -> io::Result<Self> {
        let mut source = source.fuse();
        let current = source.next().transpose()?;
        Ok(Cursor::with_current(source, current))
    }

    fn with_current(source: Fuse<I>, current: Option<char>) -> Self {
        Cursor {
            source,
            ahead: VecDeque::new(),
            pending: None,
            current,
            offset: 0,
            line: 1,
            col: 0,
            line_text: String::new(),
            prev_cols: Vec::new(),
            prev_lines: Vec::new(),
        }
    }

    fn pull(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.ahead.pop_front() {
            return Ok(Some(c))
        }
        if let Some(e) = self.pending.take() {
            return Err(e)
        }
        self.source.next().transpose()
    }

    /// The character under the lookahead, `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Consume the current character. A no-op at end of input. On
    /// error the cursor is left unchanged.
    pub fn advance(&mut self) -> io::Result<()> {
        let c = match self.current {
            Some(c) => c,
            None => return Ok(()),
        };
        let next = self.pull()?;
        self.offset += 1;
        if c == '\n' {
            self.prev_cols.push(self.col);
            self.prev_lines.push(mem::take(&mut self.line_text));
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
            self.line_text.push(c);
        }
        self.current = next;
        Ok(())
    }

    /// Undo one `advance`. A no-op at the start of the input.
    pub fn step_back(&mut self) {
        if self.offset == 0 {
            return
        }
        let prev;
        if self.col == 0 {
            // Only a newline resets the column.
            match (self.prev_cols.pop(), self.prev_lines.pop()) {
                (Some(col), Some(text)) => {
                    self.col = col;
                    self.line_text = text;
                    self.line -= 1;
                    prev = '\n';
                }
                _ => return
            }
        } else {
            match self.line_text.pop() {
                Some(c) => {
                    self.col -= 1;
                    prev = c;
                }
                None => return
            }
        }
        if let Some(c) = self.current.replace(prev) {
            self.ahead.push_front(c);
        }
        self.offset -= 1;
    }

    /// The whole line containing the current position, without the
    /// newline. Reads ahead up to the end of the line; an error while
    /// doing so cuts the line short and is reported by a later
    /// `advance`.
    pub fn current_line_text(&mut self) -> KString {
        let mut s = self.line_text.clone();
        if let Some(c) = self.current {
            if c == '\n' {
                return KString::from_string(s)
            }
            s.push(c);
        }
        for &c in self.ahead.iter() {
            if c == '\n' {
                return KString::from_string(s)
            }
            s.push(c);
        }
        if self.current.is_some() && self.pending.is_none() {
            loop {
                match self.source.next() {
                    Some(Ok(c)) => {
                        self.ahead.push_back(c);
                        if c == '\n' {
                            break
                        }
                        s.push(c);
                    }
                    Some(Err(e)) => {
                        self.pending = Some(e);
                        break
                    }
                    None => break
                }
            }
        }
        KString::from_string(s)
    }

    pub fn mark(&self) -> Mark {
        Mark {
            line: self.line,
            col: self.col,
            offset: self.offset,
        }
    }

    /// An independent copy of the current position.
    pub fn snapshot(&mut self) -> Pos {
        let line_text = self.current_line_text();
        Pos {
            line: self.line,
            col: self.col,
            offset: self.offset,
            line_text,
        }
    }

    /// Turn a mark taken earlier on this cursor into a full `Pos`.
    pub fn locate(&mut self, m: Mark) -> Pos {
        let line_text =
            if m.line == self.line {
                self.current_line_text()
            } else if let Some(text) = (m.line as usize).checked_sub(1)
                .and_then(|i| self.prev_lines.get(i))
            {
                KString::from_ref(text)
            } else {
                KString::from_static("")
            };
        Pos {
            line: m.line,
            col: m.col,
            offset: m.offset,
            line_text,
        }
    }
}
