// Test complete flow of a small data-entry scanner built on the primitives
// Run with `cargo test --test e2e_test`

use std::{
    fs,
    io::{BufReader, Cursor},
    path::Path,
};

use peekscan::{
    one_of, sets, InputSource, OneOf, Position, ReaderSource, Result, Scan, StrSource, Token,
    UnexpectedInput, END,
};
use regex::Regex;

fn ascii<T: Token>(code: u8) -> T {
    T::from_ascii(code)
}

fn separators<T: Token>() -> OneOf<T, 4> {
    one_of([T::SPACE, T::TAB, T::LINE_FEED, T::CARRIAGE_RETURN])
}

// entry := '-'? digit+ ('.' digit+)?
fn read_entry<S>(source: &mut S) -> Result<f64>
where
    S: InputSource,
    S::Token: Into<u32>,
{
    let mut text = Vec::new();
    if let Some(minus) = source.read_if(ascii::<S::Token>(b'-')) {
        text.push(minus);
    }
    text.push(source.expect(sets::digit::<S::Token>())?);
    source.read_while_into(sets::digit::<S::Token>(), &mut text);
    if let Some(dot) = source.read_if(ascii::<S::Token>(b'.')) {
        text.push(dot);
        text.push(source.expect(sets::digit::<S::Token>())?);
        source.read_while_into(sets::digit::<S::Token>(), &mut text);
    }
    let text: String = text
        .into_iter()
        .filter_map(|t| char::from_u32(t.into()))
        .collect();
    text.parse().map_err(|_| UnexpectedInput)
}

fn read_data_entries<S>(source: &mut S, pos: &mut Position) -> Result<Vec<f64>>
where
    S: InputSource,
    S::Token: Into<u32>,
{
    let mut source = source.with_position(pos);
    let mut entries = Vec::new();
    source.ignore_while(separators::<S::Token>());
    while !source.is(END) {
        entries.push(read_entry(&mut source)?);
        if source.ignore_while(separators::<S::Token>()) == 0 {
            source.expect(END)?;
        }
    }
    Ok(entries)
}

// The way a calling application reports an `UnexpectedInput`.
fn report<S>(source: &mut S, pos: Position) -> String
where
    S: InputSource,
    S::Token: Into<u32>,
{
    match source.peek().and_then(|t| char::from_u32(t.into())) {
        Some(c) => format!("unexpected token {:?} at ({}, {})", c, pos.line, pos.column),
        None => "unexpected end".to_string(),
    }
}

fn data_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data"))
}

#[test]
fn e2e_test() {
    // Initialize the logger
    let _ = env_logger::builder().is_test(true).try_init();

    let rx_entry = Regex::new(r"-?\d+(\.\d+)?").unwrap();

    // Iterate over all input files in the data directory
    for entry in fs::read_dir(data_dir()).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().unwrap() != "input" {
            continue;
        }
        println!("Entry: {:?}", path.file_name());

        let input = fs::read_to_string(&path).unwrap();
        let expected: Vec<f64> = rx_entry
            .find_iter(&input)
            .map(|m| m.as_str().parse().unwrap())
            .collect();

        // Scan the text as chars
        let mut pos = Position::start();
        let entries = read_data_entries(&mut StrSource::new(&input), &mut pos)
            .unwrap_or_else(|e| panic!("**** Failed to scan {}: {}", path.display(), e));
        assert_eq!(entries, expected);
        assert_eq!(pos.line(), input.matches('\n').count() + 1);

        // Scan the file as bytes
        let file = fs::File::open(&path).unwrap();
        let mut source = ReaderSource::new(BufReader::new(file));
        let mut byte_pos = Position::start();
        let entries = read_data_entries(&mut source, &mut byte_pos).unwrap();
        assert_eq!(entries, expected);
        assert_eq!(byte_pos, pos);
        assert!(source.into_inner().is_ok());
    }
}

#[test]
fn e2e_invalid_entry() {
    let _ = env_logger::builder().is_test(true).try_init();

    let input = fs::read_to_string(data_dir().join("invalid.txt")).unwrap();
    let mut source = StrSource::new(&input);
    let mut pos = Position::start();
    assert_eq!(
        read_data_entries(&mut source, &mut pos),
        Err(UnexpectedInput)
    );
    assert_eq!(report(&mut source, pos), "unexpected token 'x' at (3, 5)");

    let mut source = ReaderSource::new(Cursor::new(input.as_bytes()));
    let mut byte_pos = Position::start();
    assert!(read_data_entries(&mut source, &mut byte_pos).is_err());
    assert_eq!(source.peek(), Some(b'x'));
    assert_eq!(byte_pos, pos);
}

#[test]
fn e2e_unexpected_end() {
    for input in ["5 -", "3.", "1 2.5 -"] {
        let mut source = StrSource::new(input);
        let mut pos = Position::start();
        assert!(read_data_entries(&mut source, &mut pos).is_err());
        assert_eq!(report(&mut source, pos), "unexpected end");
        assert_eq!(pos.column(), input.len() + 1);
    }
}
