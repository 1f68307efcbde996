// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use sexpread::read::{read_file, read_named, write_all};
use sexpread::settings::{Settings, Escapes};
use sexpread::debug::Dump;
use clap::Parser as ClapParser;
use std::io::{stdin, stdout, BufWriter};
use std::path::PathBuf;
use anyhow::Result;


#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print the terms read, in S-expression syntax
    #[clap(long, value_parser)]
    print: bool,
    /// Print the terms in bracket notation
    #[clap(short, long, value_parser)]
    dump: bool,
    /// Keep backslash escapes in strings as written
    #[clap(long, value_parser)]
    raw_escapes: bool,
    /// Fail on lists nested deeper than this
    #[clap(long, value_parser)]
    max_depth: Option<u32>,
    /// Log to stderr
    #[clap(short, long, value_parser)]
    verbose: bool,
    /// Path to the input file (default: standard input)
    #[clap(value_parser)]
    input_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let settings = Settings {
        escapes: if args.raw_escapes { Escapes::Preserve } else { Escapes::Decode },
        max_depth: args.max_depth,
    };

    let r =
        if let Some(path) = &args.input_path {
            read_file(path, &settings)
        } else {
            read_named(stdin().lock(), "stdin", &settings)
        };
    let v = match r {
        Ok(v) => v,
        Err(e) => {
            // Includes the source line and a caret, don't let anyhow
            // reformat it.
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if args.dump {
        println!("{}", Dump(&v));
    }
    if args.print {
        write_all(BufWriter::new(stdout()), &v)?;
    }
    if ! (args.dump || args.print) {
        println!(";; count_toplevel = {}", v.len());
    }
    Ok(())
}
