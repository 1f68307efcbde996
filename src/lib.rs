// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A small S-Expression reader: atoms, single or double quoted
//! strings, and parenthesized lists, nothing else.
//! 
//! * Atoms are opaque text; there is no number parsing and no symbol
//!   interning.
//! 
//! * Errors carry the exact position (line, column, and the text of
//!   the line) so that a caller can show the offending character, see
//!   [ReadErrorWithPos::diagnostic](read::ReadErrorWithPos::diagnostic).
//! 
//! * Input can be a `&str` ([read::read_str]) or anything implementing
//!   `Read` ([read::read_all], [read::read_file]).
//! 
//! ```
//! use sexpread::read::read_str;
//! use sexpread::value::{atom, list};
//! 
//! let v = read_str("(a (b c) d)").unwrap();
//! assert_eq!(v, vec![list(vec![atom("a"),
//!                              list(vec![atom("b"), atom("c")]),
//!                              atom("d")])]);
//! ```

pub mod buffered_chars;
pub mod context;
pub mod cursor;
pub mod debug;
pub mod pos;
pub mod read;
pub mod settings;
pub mod value;
