// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Utilities for debugging: show terms in bracket notation,
//! `[define,[square,x],'x',"y"]`, with string contents shown
//! unescaped.

use std::fmt::{Formatter, Display, Write};
use crate::value::Term;

/// Display adapter for a sequence of terms, e.g. the result of
/// `read_str`.
pub struct Dump<'t>(pub &'t [Term]);

fn fmt_seq(f: &mut Formatter<'_>, vals: &[Term])
           -> Result<(), std::fmt::Error> {
    f.write_char('[')?;
    for (i, v) in vals.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        fmt_term(f, v)?;
    }
    f.write_char(']')
}

fn fmt_term(f: &mut Formatter<'_>, t: &Term)
            -> Result<(), std::fmt::Error> {
    match t {
        Term::Atom(s) => f.write_str(s),
        Term::QuotedString(qk, s) => {
            let q = qk.delimiter();
            f.write_char(q)?;
            f.write_str(s)?;
            f.write_char(q)
        }
        Term::List(v) => fmt_seq(f, v),
    }
}

impl<'t> Display for Dump<'t> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        fmt_seq(f, self.0)
    }
}

pub struct DumpTerm<'t>(&'t Term);

impl<'t> Display for DumpTerm<'t> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        fmt_term(f, self.0)
    }
}

impl Term {
    pub fn dump(&self) -> DumpTerm<'_> {
        DumpTerm(self)
    }
}
