use sexpread::cursor::Cursor;
use sexpread::buffered_chars::buffered_chars;
use std::io;

fn advance_n<I: Iterator<Item = io::Result<char>>>(c: &mut Cursor<I>, n: usize) {
    for _ in 0..n {
        c.advance().unwrap();
    }
}

#[test]
fn empty_input() {
    let mut c = Cursor::for_str("");
    assert_eq!(c.current(), None);
    c.advance().unwrap();
    assert_eq!(c.current(), None);
    c.step_back();
    let p = c.snapshot();
    assert_eq!((p.line, p.col, p.offset), (1, 0, 0));
    assert_eq!(p.line_text.as_str(), "");
}

#[test]
fn advance_tracks_lines_and_columns() {
    let mut c = Cursor::for_str("ab\ncd");
    assert_eq!(c.current(), Some('a'));
    advance_n(&mut c, 2);
    assert_eq!(c.current(), Some('\n'));
    let p = c.snapshot();
    assert_eq!((p.line, p.col, p.offset), (1, 2, 2));
    c.advance().unwrap();
    assert_eq!(c.current(), Some('c'));
    let p = c.snapshot();
    assert_eq!((p.line, p.col, p.offset), (2, 0, 3));
    assert_eq!(p.line_text.as_str(), "cd");
}

#[test]
fn advance_at_end_is_a_noop() {
    let mut c = Cursor::for_str("x");
    advance_n(&mut c, 3);
    assert_eq!(c.current(), None);
    let p = c.snapshot();
    assert_eq!((p.line, p.col, p.offset), (1, 1, 1));
}

#[test]
fn step_back_within_line() {
    let mut c = Cursor::for_str("abc");
    advance_n(&mut c, 2);
    c.step_back();
    assert_eq!(c.current(), Some('b'));
    let p = c.snapshot();
    assert_eq!((p.line, p.col, p.offset), (1, 1, 1));
    c.advance().unwrap();
    assert_eq!(c.current(), Some('c'));
}

#[test]
fn step_back_across_newlines() {
    let mut c = Cursor::for_str("ab\n\ncd");
    advance_n(&mut c, 5);
    assert_eq!(c.current(), Some('d'));
    c.step_back();
    c.step_back();
    assert_eq!(c.current(), Some('\n'));
    let p = c.snapshot();
    assert_eq!((p.line, p.col, p.offset), (2, 0, 3));
    c.step_back();
    assert_eq!(c.current(), Some('\n'));
    let p = c.snapshot();
    assert_eq!((p.line, p.col, p.offset), (1, 2, 2));
    assert_eq!(p.line_text.as_str(), "ab");
    advance_n(&mut c, 3);
    assert_eq!(c.current(), Some('d'));
    let p = c.snapshot();
    assert_eq!((p.line, p.col, p.offset), (3, 1, 5));
}

#[test]
fn step_back_at_start_is_a_noop() {
    let mut c = Cursor::for_str("ab");
    c.step_back();
    assert_eq!(c.current(), Some('a'));
    assert_eq!(c.snapshot().offset, 0);
}

#[test]
fn step_back_from_end() {
    let mut c = Cursor::for_str("ab");
    advance_n(&mut c, 2);
    assert_eq!(c.current(), None);
    c.step_back();
    assert_eq!(c.current(), Some('b'));
    c.advance().unwrap();
    assert_eq!(c.current(), None);
}

#[test]
fn snapshots_are_independent() {
    let mut c = Cursor::for_str("abc\ndef");
    c.advance().unwrap();
    let p = c.snapshot();
    advance_n(&mut c, 4);
    assert_eq!((p.line, p.col, p.offset), (1, 1, 1));
    assert_eq!(p.line_text.as_str(), "abc");
    let q = c.snapshot();
    assert_eq!((q.line, q.col), (2, 1));
    assert_ne!(p, q);
}

#[test]
fn current_line_text_sees_the_whole_line() {
    let mut c = Cursor::for_str("one\ntwo three\nfour");
    advance_n(&mut c, 6);
    assert_eq!(c.current_line_text().as_str(), "two three");
    // Reading ahead does not move the cursor.
    assert_eq!(c.current(), Some('o'));
    advance_n(&mut c, 7);
    assert_eq!(c.current(), Some('\n'));
    assert_eq!(c.current_line_text().as_str(), "two three");
}

#[test]
fn locate_resolves_earlier_lines() {
    let mut c = Cursor::for_str("(a\n  b\nc");
    let m = c.mark();
    advance_n(&mut c, 7);
    let p = c.locate(m);
    assert_eq!((p.line, p.col, p.offset), (1, 0, 0));
    assert_eq!(p.line_text.as_str(), "(a");
}

#[test]
fn stream_source_behaves_like_str() -> io::Result<()> {
    let mut c = Cursor::new(buffered_chars("x\ny z".as_bytes()))?;
    assert_eq!(c.current(), Some('x'));
    advance_n(&mut c, 3);
    assert_eq!(c.current(), Some(' '));
    assert_eq!(c.current_line_text().as_str(), "y z");
    c.step_back();
    c.step_back();
    let p = c.snapshot();
    assert_eq!((p.line, p.col), (1, 1));
    assert_eq!(p.line_text.as_str(), "x");
    advance_n(&mut c, 3);
    assert_eq!(c.current(), Some('z'));
    c.advance()?;
    assert_eq!(c.current(), None);
    Ok(())
}
