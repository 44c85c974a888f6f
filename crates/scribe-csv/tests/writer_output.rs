//! End-to-end tests for field and line output written to an in-memory sink

use pretty_assertions::assert_eq;
use scribe_csv::{CsvWriter, LineTerminator, QuoteStrategy, WriteOptions};

fn lf_options() -> WriteOptions {
    WriteOptions::default().with_line_terminator(LineTerminator::LF)
}

/// Write each row with `write_line` and return the text
fn write_rows(options: WriteOptions, rows: &[&[Option<&str>]]) -> String {
    let mut writer = CsvWriter::new(Vec::new(), options).unwrap();
    for row in rows {
        writer.write_line(row.iter()).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

fn write_row(options: WriteOptions, row: &[Option<&str>]) -> String {
    write_rows(options, &[row])
}

#[test]
fn test_null_field_between_values() {
    assert_eq!(
        write_row(lf_options(), &[Some("foo"), None, Some("bar")]),
        "foo,,bar\n"
    );
    assert_eq!(
        write_row(lf_options(), &[Some("foo"), Some(""), Some("bar")]),
        "foo,,bar\n"
    );
    assert_eq!(
        write_row(lf_options(), &[Some("foo"), Some(","), Some("bar")]),
        "foo,\",\",bar\n"
    );
}

#[test]
fn test_empty_strategy_quotes_only_empty_strings() {
    let options = lf_options().with_quote_strategy(QuoteStrategy::Empty);
    assert_eq!(
        write_row(options.clone(), &[Some("foo"), None, Some("bar")]),
        "foo,,bar\n"
    );
    assert_eq!(
        write_row(options.clone(), &[Some("foo"), Some(""), Some("bar")]),
        "foo,\"\",bar\n"
    );
    assert_eq!(
        write_row(options, &[Some("foo"), Some(","), Some("bar")]),
        "foo,\",\",bar\n"
    );
}

#[test]
fn test_single_value() {
    assert_eq!(write_row(lf_options(), &[Some("foo")]), "foo\n");
}

#[test]
fn test_two_values() {
    assert_eq!(write_row(lf_options(), &[Some("foo"), Some("bar")]), "foo,bar\n");
}

#[test]
fn test_two_lines() {
    assert_eq!(
        write_rows(lf_options(), &[&[Some("foo")], &[Some("bar")]]),
        "foo\nbar\n"
    );
}

#[test]
fn test_mixed_fields_required_strategy() {
    let row = [
        Some("a"),
        Some("b,c"),
        Some("d\ne"),
        Some("f\"g"),
        Some(""),
        None,
    ];
    assert_eq!(
        write_row(lf_options(), &row),
        "a,\"b,c\",\"d\ne\",\"f\"\"g\",,\n"
    );
}

#[test]
fn test_mixed_fields_always_strategy() {
    let row = [
        Some("a"),
        Some("b,c"),
        Some("d\ne"),
        Some("f\"g"),
        Some(""),
        None,
    ];
    let options = lf_options().with_quote_strategy(QuoteStrategy::Always);
    assert_eq!(
        write_row(options, &row),
        "\"a\",\"b,c\",\"d\ne\",\"f\"\"g\",\"\",\"\"\n"
    );
}

#[test]
fn test_null_and_empty_per_strategy() {
    let cases = [
        (QuoteStrategy::Required, "", ""),
        (QuoteStrategy::Always, "\"\"", "\"\""),
        (QuoteStrategy::Empty, "", "\"\""),
    ];
    for (strategy, null_text, empty_text) in cases {
        let options = lf_options().with_quote_strategy(strategy);
        assert_eq!(write_row(options.clone(), &[None]), format!("{null_text}\n"));
        assert_eq!(write_row(options, &[Some("")]), format!("{empty_text}\n"));
    }
}

#[test]
fn test_custom_separator() {
    let options = lf_options().with_separator(';');
    assert_eq!(write_row(options.clone(), &[Some("foo"), Some("bar")]), "foo;bar\n");
    // The default separator is ordinary text once replaced
    assert_eq!(write_row(options, &[Some("a,b"), Some("c;d")]), "a,b;\"c;d\"\n");
}

#[test]
fn test_custom_quote_character() {
    let options = lf_options().with_quote('\'');
    assert_eq!(write_row(options.clone(), &[Some("foo,bar")]), "'foo,bar'\n");
    assert_eq!(write_row(options, &[Some("it's \"x\"")]), "'it''s \"x\"'\n");
}

#[test]
fn test_escape_surrounding_quotes() {
    assert_eq!(
        write_row(lf_options(), &[Some("foo"), Some("\"bar\"")]),
        "foo,\"\"\"bar\"\"\"\n"
    );
}

#[test]
fn test_fields_without_end_line() {
    let mut writer = CsvWriter::new(Vec::new(), lf_options()).unwrap();
    writer.write_field("foo").unwrap();
    writer.write_field("bar").unwrap();
    assert_eq!(writer.get_ref().as_slice(), b"foo,bar");
}

#[test]
fn test_end_line_without_fields() {
    let mut writer = CsvWriter::new(Vec::new(), lf_options()).unwrap();
    writer.end_line().unwrap();
    assert_eq!(writer.get_ref().as_slice(), b"\n");

    let mut writer = CsvWriter::from_writer(Vec::new());
    writer.end_line().unwrap().end_line().unwrap();
    assert_eq!(writer.get_ref().as_slice(), b"\r\n\r\n");
}

#[test]
fn test_chained_calls() {
    let mut writer = CsvWriter::new(Vec::new(), lf_options()).unwrap();
    writer
        .write_field("header1")
        .unwrap()
        .write_field("header2")
        .unwrap()
        .end_line()
        .unwrap()
        .write_line(["value1", "value2"])
        .unwrap();
    let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    assert_eq!(out, "header1,header2\nvalue1,value2\n");
}

#[test]
fn test_default_options_use_crlf() {
    let mut writer = CsvWriter::from_writer(Vec::new());
    writer
        .write_line(["header1", "header2"])
        .unwrap()
        .write_line(["value1", "value2"])
        .unwrap();
    let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    assert_eq!(out, "header1,header2\r\nvalue1,value2\r\n");
}

#[test]
fn test_line_terminators() {
    for (terminator, expected) in [
        (LineTerminator::LF, "a,b\n"),
        (LineTerminator::CRLF, "a,b\r\n"),
        (LineTerminator::CR, "a,b\r"),
    ] {
        let options = WriteOptions::default().with_line_terminator(terminator);
        assert_eq!(write_row(options, &[Some("a"), Some("b")]), expected);
    }
}

#[test]
fn test_owned_and_optional_fields() {
    let owned: Vec<String> = vec!["x".to_string(), "y z".to_string()];
    let optional: Vec<Option<String>> = vec![Some("1".to_string()), None];

    let mut writer = CsvWriter::new(Vec::new(), lf_options()).unwrap();
    writer.write_line(&owned).unwrap();
    writer.write_line(&optional).unwrap();
    writer.write_line(optional).unwrap();
    let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    assert_eq!(out, "x,y z\n1,\n1,\n");
}
