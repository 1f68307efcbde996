// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The tree produced by reading.

//! Atoms are opaque text: numbers, symbols and anything else that is
//! not a string or list all end up as [Term::Atom](Term::Atom).

use std::fmt::Write;
use kstring::KString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quotekind {
    Single,
    Double,
}

impl Quotekind {
    pub fn delimiter(self) -> char {
        match self {
            Quotekind::Single => '\'',
            Quotekind::Double => '"',
        }
    }

    pub fn from_delimiter(c: char) -> Option<Quotekind> {
        match c {
            '\'' => Some(Quotekind::Single),
            '"' => Some(Quotekind::Double),
            _ => None
        }
    }
}

/// The quote kind is part of a string's identity: `"x"` and `'x'`
/// are different terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Atom(KString),
    QuotedString(Quotekind, KString),
    List(Vec<Term>),
}

fn fmt_quoted(f: &mut std::fmt::Formatter<'_>,
              quote: char,
              s: &str)
              -> Result<(), std::fmt::Error> {
    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\\' => f.write_str("\\\\")?,
            _ => {
                if c == quote {
                    f.write_char('\\')?;
                }
                f.write_char(c)?
            }
        }
    }
    f.write_char(quote)
}

/// Writes the term back in S-expression syntax. Strings are escaped
/// so that reading the output with decoding escapes gives back an
/// equal term.
impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Term::Atom(s) => f.write_str(s),
            Term::QuotedString(qk, s) => fmt_quoted(f, qk.delimiter(), s),
            Term::List(v) => {
                f.write_char('(')?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    item.fmt(f)?;
                }
                f.write_char(')')
            }
        }
    }
}

/// Easily create an atom
pub fn atom(s: &str) -> Term {
    Term::Atom(KString::from_ref(s))
}

/// Easily create a double-quoted string
pub fn string(s: &str) -> Term {
    Term::QuotedString(Quotekind::Double, KString::from_ref(s))
}

/// Easily create a single-quoted string
pub fn single_quoted(s: &str) -> Term {
    Term::QuotedString(Quotekind::Single, KString::from_ref(s))
}

pub fn list(items: Vec<Term>) -> Term {
    Term::List(items)
}
