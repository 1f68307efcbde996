// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading text into [Term](../value/enum.Term.html) trees.

//! [Reader](Reader) is a recursive-descent reader deciding on a single
//! character of lookahead. Any error aborts the whole read; callers
//! get either all terms or one located error, never a partial result.
//! Nesting depth is limited by the stack unless
//! [Settings::max_depth](../settings/struct.Settings.html) is set.

use crate::pos::{Pos, Mark};
use crate::context::{Context, FileContext, SpecialContext};
use crate::cursor::Cursor;
use crate::settings::{Settings, Escapes, DECODING};
use crate::value::{Term, Quotekind};
use crate::buffered_chars::buffered_chars;
use kstring::KString;
use std::fmt::{Formatter, Display};
use std::io::{self, Read, Write};
use std::path::Path;
use std::fs::File;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("IO error ({0})")]
    IO(io::Error),
    #[error("unmatched close paren")]
    UnmatchedCloseParen,
    #[error("could not find end quote")]
    UnterminatedString(Quotekind),
    #[error("matching end paren could not be found")]
    UnterminatedList,
    #[error("nesting too deep")]
    NestingTooDeep,
    #[error("empty atom")]
    EmptyAtom,
}

#[derive(Error, Debug)]
#[error("{err} {pos}")]
pub struct ReadErrorWithPos {
    pub err: ReadError,
    pub pos: Pos
}

impl ReadError {
    fn at(self, p: Pos) -> ReadErrorWithPos {
        ReadErrorWithPos {
            err: self,
            pos: p
        }
    }
}

impl ReadErrorWithPos {
    /// Message and position followed by the offending source line
    /// and a caret under the column.
    pub fn diagnostic(&self) -> Diagnostic<'_> {
        Diagnostic(self)
    }

    pub fn in_context(self, container: Box<dyn Context>) -> ReadErrorWithLocation {
        ReadErrorWithLocation::PC(Box::new(
            ReadErrorWithPosContext {
                err_with_pos: self,
                container
            }))
    }
}

pub struct Diagnostic<'t>(&'t ReadErrorWithPos);

impl<'t> Display for Diagnostic<'t> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_fmt(format_args!("{}\n", self.0))?;
        self.0.pos.fmt_excerpt(f)
    }
}

#[derive(Error, Debug)]
pub struct ReadErrorWithPosContext {
    err_with_pos: ReadErrorWithPos,
    container: Box<dyn Context>
}

impl ReadErrorWithPosContext {
    pub fn err_with_pos(&self) -> &ReadErrorWithPos {
        &self.err_with_pos
    }
}

impl Display for ReadErrorWithPosContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let ReadErrorWithPos { err, pos } = &self.err_with_pos;
        self.container.format_diagnostic(err, pos, f)
    }
}

#[derive(Error, Debug)]
pub enum ReadErrorWithContext {
    #[error("{}: {0}", .1.to_string_without_pos())]
    IO(io::Error, Box<dyn Context>)
}

#[derive(Error, Debug)]
pub enum ReadErrorWithLocation {
    #[error("{0}")]
    PC(Box<ReadErrorWithPosContext>),
    #[error("{0}")]
    IO(Box<ReadErrorWithContext>)
}

fn is_atom_char(c: char) -> bool {
    ! c.is_whitespace()
        && c != '('
        && c != ')'
        && Quotekind::from_delimiter(c).is_none()
}

fn decode_escape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None
    }
}

pub struct Reader<'t, I: Iterator<Item = io::Result<char>>> {
    cursor: Cursor<I>,
    settings: &'t Settings,
    depth: u32,
    // Start of the outermost list currently open.
    outermost_open: Option<Mark>,
}

impl<'t, I: Iterator<Item = io::Result<char>>> Reader<'t, I> {
    pub fn new(cursor: Cursor<I>, settings: &'t Settings) -> Self {
        Reader {
            cursor,
            settings,
            depth: 0,
            outermost_open: None,
        }
    }

    /// All remaining terms up to the end of the input.
    pub fn parse_all(&mut self) -> Result<Vec<Term>, ReadErrorWithPos> {
        let mut v = Vec::new();
        while let Some(t) = self.parse_one()? {
            v.push(t);
        }
        Ok(v)
    }

    /// The next term, or `None` if only whitespace is left.
    pub fn parse_one(&mut self) -> Result<Option<Term>, ReadErrorWithPos> {
        self.skip_whitespace()?;
        match self.cursor.current() {
            None => Ok(None),
            Some(c) => Ok(Some(self.parse_term(c)?)),
        }
    }

    fn advance(&mut self) -> Result<(), ReadErrorWithPos> {
        match self.cursor.advance() {
            Ok(()) => Ok(()),
            Err(e) => Err(ReadError::IO(e).at(self.cursor.snapshot()))
        }
    }

    // Position of the character consumed last.
    fn consumed_pos(&mut self) -> Pos {
        self.cursor.step_back();
        self.cursor.snapshot()
    }

    fn skip_whitespace(&mut self) -> Result<(), ReadErrorWithPos> {
        while let Some(c) = self.cursor.current() {
            if ! c.is_whitespace() {
                break
            }
            self.advance()?;
        }
        Ok(())
    }

    // c is the current character.
    fn parse_term(&mut self, c: char) -> Result<Term, ReadErrorWithPos> {
        if let Some(qk) = Quotekind::from_delimiter(c) {
            self.parse_string(qk)
        } else if c == '(' {
            self.parse_list()
        } else if c == ')' {
            self.advance()?;
            Err(ReadError::UnmatchedCloseParen.at(self.consumed_pos()))
        } else {
            self.parse_atom()
        }
    }

    fn parse_string(&mut self, qk: Quotekind) -> Result<Term, ReadErrorWithPos> {
        let start = self.cursor.mark();
        let delimiter = qk.delimiter();
        self.advance()?;
        let mut out = String::new();
        loop {
            match self.cursor.current() {
                None => {
                    return Err(ReadError::UnterminatedString(qk)
                               .at(self.cursor.locate(start)))
                }
                Some(c) if c == delimiter => {
                    self.advance()?;
                    return Ok(Term::QuotedString(qk, KString::from_string(out)))
                }
                Some('\\') => {
                    self.advance()?;
                    if let Some(c) = self.cursor.current() {
                        match self.settings.escapes {
                            Escapes::Decode => {
                                if let Some(d) = decode_escape(c) {
                                    out.push(d);
                                }
                            }
                            Escapes::Preserve => {
                                out.push('\\');
                                out.push(c);
                            }
                        }
                        self.advance()?;
                    }
                }
                Some(c) => {
                    out.push(c);
                    self.advance()?;
                }
            }
        }
    }

    fn parse_list(&mut self) -> Result<Term, ReadErrorWithPos> {
        let start = self.cursor.mark();
        if let Some(max) = self.settings.max_depth {
            if self.depth >= max {
                return Err(ReadError::NestingTooDeep
                           .at(self.cursor.locate(start)))
            }
        }
        if self.depth == 0 {
            self.outermost_open = Some(start);
        }
        self.advance()?;
        self.depth += 1;
        let r = self.parse_list_items();
        self.depth -= 1;
        r
    }

    fn parse_list_items(&mut self) -> Result<Term, ReadErrorWithPos> {
        let mut v = Vec::new();
        loop {
            self.skip_whitespace()?;
            match self.cursor.current() {
                None => {
                    let pos = match self.outermost_open {
                        Some(m) => self.cursor.locate(m),
                        None => self.cursor.snapshot(),
                    };
                    return Err(ReadError::UnterminatedList.at(pos))
                }
                Some(')') => {
                    self.advance()?;
                    return Ok(Term::List(v))
                }
                Some(c) => {
                    v.push(self.parse_term(c)?);
                }
            }
        }
    }

    fn parse_atom(&mut self) -> Result<Term, ReadErrorWithPos> {
        let mut out = String::new();
        while let Some(c) = self.cursor.current() {
            if ! is_atom_char(c) {
                break
            }
            out.push(c);
            self.advance()?;
        }
        if out.is_empty() {
            return Err(ReadError::EmptyAtom.at(self.cursor.snapshot()))
        }
        Ok(Term::Atom(KString::from_string(out)))
    }
}

pub fn read_str_with(
    s: &str,
    settings: &Settings,
) -> Result<Vec<Term>, ReadErrorWithPos>
{
    Reader::new(Cursor::for_str(s), settings).parse_all()
}

/// Read all terms from `s`, decoding string escapes.
pub fn read_str(s: &str) -> Result<Vec<Term>, ReadErrorWithPos> {
    read_str_with(s, &DECODING)
}

pub fn read_all(
    fh: impl Read,
    settings: &Settings,
) -> Result<Vec<Term>, ReadErrorWithPos>
{
    let cursor = match Cursor::new(buffered_chars(fh)) {
        Ok(c) => c,
        Err(e) => return Err(ReadError::IO(e).at(Pos::start()))
    };
    Reader::new(cursor, settings).parse_all()
}

/// Like `read_all`, with `name` (e.g. "stdin") shown in errors.
pub fn read_named(
    fh: impl Read,
    name: &str,
    settings: &Settings,
) -> Result<Vec<Term>, ReadErrorWithLocation>
{
    debug!(source = name, "reading");
    let v = read_all(fh, settings).map_err(|e| e.in_context(
        Box::new(SpecialContext { name: name.to_string() })))?;
    debug!(source = name, count = v.len(), "read terms");
    Ok(v)
}

pub fn read_file(
    path: &Path,
    settings: &Settings,
) -> Result<Vec<Term>, ReadErrorWithLocation>
{
    debug!(path = ?path, "reading");
    let context = || Box::new(FileContext { path: path.to_path_buf() });
    let fh = File::open(path).map_err(|e| ReadErrorWithLocation::IO(
        Box::new(ReadErrorWithContext::IO(e, context()))))?;
    let v = read_all(fh, settings).map_err(|e| e.in_context(context()))?;
    debug!(path = ?path, count = v.len(), "read terms");
    Ok(v)
}

/// Write each term on its own line, separated by empty lines.
pub fn write_all<'t>(
    out: impl Write,
    vals: impl IntoIterator<Item = &'t Term>
) -> Result<(), io::Error> {
    let mut out = out; // for `File`
    let mut seen_item = false;
    for v in vals.into_iter() {
        write!(out, "{}{}\n", if seen_item {"\n"} else {""}, v)?;
        seen_item = true;
    }
    out.flush()
}

pub fn write_file<'t>(path: &Path, vals: impl IntoIterator<Item = &'t Term>)
                      -> Result<(), io::Error> {
    write_all(io::BufWriter::new(File::create(path)?), vals)
}
