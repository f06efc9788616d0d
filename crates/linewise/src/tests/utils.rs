use alloc::vec::Vec;

use crate::{Lines, Scanner, ScannerOptions, Source, terminator::LF};

/// Reference split: LF ends a record, a CR directly before that LF is
/// dropped, trailing bytes without LF form a final record.
pub(crate) fn model(input: &[u8]) -> Vec<Vec<u8>> {
    let mut records: Vec<Vec<u8>> = Vec::new();
    let mut rest = input;
    while let Some(i) = rest.iter().position(|&b| b == LF) {
        let mut record = &rest[..i];
        if let [head @ .., b'\r'] = record {
            record = head;
        }
        records.push(record.to_vec());
        rest = &rest[i + 1..];
    }
    if !rest.is_empty() {
        records.push(rest.to_vec());
    }
    records
}

/// Drain any [`Lines`] implementation into owned records.
pub(crate) fn drain<L: Lines>(lines: &mut L) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    while lines.scan() {
        out.push(lines.bytes().to_vec());
    }
    out
}

pub(crate) fn scan_all<S: Source>(source: S, options: ScannerOptions) -> Vec<Vec<u8>> {
    let mut scanner = Scanner::with_options(source, options);
    let records = drain(&mut scanner);
    assert!(scanner.err().is_none());
    records
}

pub(crate) fn opts(buffer_size: usize, min_read: usize) -> ScannerOptions {
    ScannerOptions {
        buffer_size,
        min_read,
    }
}

pub(crate) fn strs(records: &[&str]) -> Vec<Vec<u8>> {
    records.iter().map(|r| r.as_bytes().to_vec()).collect()
}

#[test]
fn model_matches_documented_cases() {
    assert!(model(b"").is_empty());
    assert_eq!(model(b"a\r\nb\r"), strs(&["a", "b\r"]));
    assert_eq!(model(b"\r\r\n"), strs(&["\r"]));
}
