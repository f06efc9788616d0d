#![allow(missing_docs, dead_code)]

use std::{cell::RefCell, fmt::Write, rc::Rc};

use linewise::{ScanEvent, Scanner, ScannerOptions, Source};

/// Mixed LF and CRLF input with one line longer than the small buffers used
/// in these tests.
pub const STREAM: &[u8] = b"GET /index.html HTTP/1.1\r\n\
Host: example.com\r\n\
X-Long: aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\r\n\
\r\n\
body line one\n\
body\rline\rtwo\n\
tail";

pub const STREAM_RECORDS: [&str; 7] = [
    "GET /index.html HTTP/1.1",
    "Host: example.com",
    "X-Long: aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    "",
    "body line one",
    "body\rline\rtwo",
    "tail",
];

/// Scan `source` and render trace events and records, in order, one per
/// line.
pub fn transcript<S: Source>(source: S, options: ScannerOptions) -> String {
    let out = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&out);
    let mut scanner = Scanner::with_trace(source, options, move |e: ScanEvent| {
        writeln!(sink.borrow_mut(), "{e}").unwrap();
    });
    while scanner.scan() {
        writeln!(
            out.borrow_mut(),
            "record {:?} width {}",
            scanner.as_bstr(),
            scanner.terminator_width()
        )
        .unwrap();
    }
    if let Some(err) = scanner.err() {
        writeln!(out.borrow_mut(), "error: {err}").unwrap();
    }
    drop(scanner);
    Rc::try_unwrap(out).unwrap().into_inner()
}
