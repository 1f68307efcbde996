// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for reading.

/// What happens to a backslash and the character after it inside a
/// quoted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escapes {
    /// `\\`, `\n`, `\t`, `\"` and `\'` are replaced by the character
    /// they stand for; any other pair is dropped.
    Decode,
    /// Both characters are kept as they are, for consumers that want
    /// the lexical text.
    Preserve,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub escapes: Escapes,
    /// Maximum list nesting; `None` leaves it to the stack size (the
    /// limit with default settings on Linux is in the thousands).
    pub max_depth: Option<u32>,
}

pub const DECODING : Settings = Settings {
    escapes: Escapes::Decode,
    max_depth: None,
};

pub const PRESERVING : Settings = Settings {
    escapes: Escapes::Preserve,
    max_depth: None,
};

impl Default for Settings {
    fn default() -> Settings {
        DECODING
    }
}
