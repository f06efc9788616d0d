#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linewise::{Scanner, ScannerOptions, SliceRecords, chunk_utils::{ChunkSource, split_by}};

#[derive(Debug, Arbitrary)]
struct Input {
    buffer_size: u8,
    min_read: u8,
    end_with_last: bool,
    splits: Vec<u16>,
    payload: Vec<u8>,
}

fn scanner(input: &Input) {
    let splits: Vec<usize> = input.splits.iter().map(|&s| usize::from(s)).collect();
    let chunks = split_by(&input.payload, &splits);
    let source = ChunkSource::new(chunks).end_with_last(input.end_with_last);
    // Out-of-range sizes are clamped by the scanner.
    let options = ScannerOptions {
        buffer_size: usize::from(input.buffer_size),
        min_read: usize::from(input.min_read),
    };

    let mut streamed = Vec::new();
    let mut scanner = Scanner::with_options(source, options);
    while scanner.scan() {
        streamed.push(scanner.bytes().to_vec());
    }
    assert!(scanner.err().is_none());
    assert!(!scanner.scan());
    assert!(scanner.bytes().is_empty());

    let whole: Vec<Vec<u8>> = SliceRecords::new(&input.payload).map(<[u8]>::to_vec).collect();
    assert_eq!(streamed, whole, "input: {input:?}");
}

fuzz_target!(|input: Input| scanner(&input));
