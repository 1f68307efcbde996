use anyhow::Result;
use sexpread::cursor::Cursor;
use sexpread::read::{read_str, read_str_with, Reader};
use sexpread::settings::{Settings, DECODING, PRESERVING};
use sexpread::value::{atom, list, single_quoted, string, Quotekind, Term};

#[test]
fn atoms() -> Result<()> {
    assert_eq!(read_str("foo")?, vec![atom("foo")]);
    assert_eq!(read_str("foo bar")?, vec![atom("foo"), atom("bar")]);
    // No number parsing, no validation.
    assert_eq!(read_str("42 -1.5 #t a.b|c")?,
               vec![atom("42"), atom("-1.5"), atom("#t"), atom("a.b|c")]);
    Ok(())
}

#[test]
fn atoms_end_at_delimiters() -> Result<()> {
    assert_eq!(read_str("a(b)c\"d\"e'f'")?,
               vec![atom("a"),
                    list(vec![atom("b")]),
                    atom("c"),
                    string("d"),
                    atom("e"),
                    single_quoted("f")]);
    Ok(())
}

#[test]
fn lists_nest_and_keep_order() -> Result<()> {
    assert_eq!(read_str("(a (b c) d)")?,
               vec![list(vec![atom("a"),
                              list(vec![atom("b"), atom("c")]),
                              atom("d")])]);
    assert_eq!(read_str("()")?, vec![list(vec![])]);
    assert_eq!(read_str("( \n ( ) )")?, vec![list(vec![list(vec![])])]);
    Ok(())
}

#[test]
fn quote_kind_is_kept() -> Result<()> {
    let d = read_str("\"x\"")?;
    let s = read_str("'x'")?;
    assert!(matches!(&d[..], [Term::QuotedString(Quotekind::Double, t)]
                     if t.as_str() == "x"));
    assert!(matches!(&s[..], [Term::QuotedString(Quotekind::Single, t)]
                     if t.as_str() == "x"));
    assert_ne!(d, s);
    assert_ne!(d, vec![atom("x")]);
    Ok(())
}

#[test]
fn other_quote_inside_string() -> Result<()> {
    assert_eq!(read_str("\"it's\" 'say \"hi\"'")?,
               vec![string("it's"), single_quoted("say \"hi\"")]);
    Ok(())
}

#[test]
fn escapes_decoded() -> Result<()> {
    assert_eq!(read_str(r#""a\nb""#)?, vec![string("a\nb")]);
    assert_eq!(read_str(r#""\t\\\"\'""#)?, vec![string("\t\\\"'")]);
    // Unknown escapes are dropped, backslash and all.
    assert_eq!(read_str(r#""a\qb""#)?, vec![string("ab")]);
    assert_eq!(read_str(r#"'it\'s'"#)?, vec![single_quoted("it's")]);
    Ok(())
}

#[test]
fn escapes_preserved() -> Result<()> {
    assert_eq!(read_str_with(r#""a\nb""#, &PRESERVING)?,
               vec![string("a\\nb")]);
    assert_eq!(read_str_with(r#""a\"b\q""#, &PRESERVING)?,
               vec![string("a\\\"b\\q")]);
    Ok(())
}

#[test]
fn empty_and_whitespace_only() -> Result<()> {
    assert!(read_str("")?.is_empty());
    assert!(read_str(" \t\n  \r\n")?.is_empty());
    Ok(())
}

#[test]
fn strings_may_span_lines() -> Result<()> {
    assert_eq!(read_str("(\"a\nb\")")?, vec![list(vec![string("a\nb")])]);
    Ok(())
}

#[test]
fn reading_twice_gives_equal_terms() -> Result<()> {
    let s = "(define (f x) \"doc\" (g 'x' x))\nrest";
    let a = read_str(s)?;
    let b = read_str(s)?;
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
    Ok(())
}

#[test]
fn parse_one_by_one() -> Result<()> {
    let mut r = Reader::new(Cursor::for_str(" a (b)  "), &DECODING);
    assert_eq!(r.parse_one()?, Some(atom("a")));
    assert_eq!(r.parse_one()?, Some(list(vec![atom("b")])));
    assert_eq!(r.parse_one()?, None);
    assert!(r.parse_all()?.is_empty());
    Ok(())
}

#[test]
fn max_depth() -> Result<()> {
    let settings = Settings { max_depth: Some(2), ..Settings::default() };
    assert_eq!(read_str_with("((x)) (y)", &settings)?.len(), 2);
    assert!(read_str_with("(((x)))", &settings).is_err());
    Ok(())
}

#[test]
fn deep_nesting_within_stack() -> Result<()> {
    let n = 200;
    let s = format!("{}x{}", "(".repeat(n), ")".repeat(n));
    let v = read_str(&s)?;
    let mut t = &v[0];
    let mut depth = 0;
    while let Term::List(items) = t {
        depth += 1;
        t = &items[0];
    }
    assert_eq!(depth, n);
    assert_eq!(t, &atom("x"));
    Ok(())
}

#[test]
fn display_writes_sexpr() -> Result<()> {
    let v = read_str("( a  \"b\\\"c\\n\"\n'd' ( ) )")?;
    assert_eq!(v[0].to_string(), "(a \"b\\\"c\\n\" 'd' ())");
    assert_eq!(read_str(&v[0].to_string())?, v);
    Ok(())
}

#[test]
fn dump_uses_brackets() -> Result<()> {
    let v = read_str("(define (sq x) 'x' \"y\")")?;
    assert_eq!(sexpread::debug::Dump(&v).to_string(),
               "[[define,[sq,x],'x',\"y\"]]");
    assert_eq!(v[0].dump().to_string(), "[define,[sq,x],'x',\"y\"]");
    Ok(())
}
