// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use kstring::KString;
use std::fmt::{Formatter, Write};

/// A location in the source text, for diagnostics. `line` is 1-based,
/// `col` is 0-based and counts chars, `offset` is the absolute char
/// offset from the start of the input. `line_text` is the whole line
/// the location is on, without the newline.

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Pos {
    pub line: u32,
    pub col: u32,
    pub offset: usize,
    pub line_text: KString,
}

impl Pos {
    /// The location before the first character of any input.
    pub fn start() -> Pos {
        Pos {
            line: 1,
            col: 0,
            offset: 0,
            line_text: KString::from_static(""),
        }
    }

    /// Write the source line followed by a line with a caret under
    /// `col`. Tabs before the column are repeated in the padding so
    /// that the caret lines up in a terminal.
    pub fn fmt_excerpt(&self, f: &mut Formatter<'_>)
                       -> Result<(), std::fmt::Error> {
        f.write_str(&self.line_text)?;
        f.write_char('\n')?;
        let mut cs = self.line_text.chars();
        for _ in 0..self.col {
            match cs.next() {
                Some('\t') => f.write_char('\t')?,
                _ => f.write_char(' ')?,
            }
        }
        f.write_char('^')
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        // Prefixed with a Debug style path string this follows the
        // Emacs convention for location information; the column is
        // shown 1-based.
        f.write_fmt(format_args!("@{}.{}", self.line, self.col + 1))
    }
}

/// The part of a `Pos` that is cheap to keep around while reading;
/// `Cursor::locate` turns it back into a full `Pos`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Mark {
    pub line: u32,
    pub col: u32,
    pub offset: usize,
}
