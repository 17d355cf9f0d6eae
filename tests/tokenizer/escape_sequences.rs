use argvec::tokenizer::{parse, SeparatorSet, Tokenizer};

fn parsed_args(input: &str) -> Vec<String> {
    let argv = parse(input).expect("parse should succeed");
    argv.args()
        .map(|arg| String::from_utf8_lossy(arg).into_owned())
        .collect()
}

#[test]
fn escaped_separator_joins_words_into_one_argument() {
    assert_eq!(parsed_args("a\\ b"), vec!["a b"]);
}

#[test]
fn escaped_quotes_lose_their_span_opening_meaning() {
    assert_eq!(parsed_args("\\\"a b\\\""), vec!["\"a", "b\""]);
    assert_eq!(parsed_args("\\'a\\'"), vec!["'a'"]);
}

#[test]
fn ordinary_escape_keeps_backslash_and_byte() {
    assert_eq!(parsed_args("a\\bc"), vec!["a\\bc"]);
}

#[test]
fn double_backslash_keeps_both_bytes() {
    assert_eq!(parsed_args("\\\\"), vec!["\\\\"]);
}

#[test]
fn dangling_trailing_backslash_stays_literal() {
    let argv = parse("a\\").expect("parse should succeed");
    assert_eq!(argv.argc(), 1);
    assert_eq!(argv.arg(0), Some(b"a\\".as_slice()));
    assert_eq!(argv.data_len(), 3);
}

#[test]
fn lone_backslash_input_parses_to_one_backslash_argument() {
    let argv = parse("\\").expect("parse should succeed");
    assert_eq!(argv.argc(), 1);
    assert_eq!(argv.arg(0), Some(b"\\".as_slice()));
}

#[test]
fn escaped_custom_separator_is_literal_data() {
    let tokenizer = Tokenizer::with_separators(SeparatorSet::new(b","));
    let argv = tokenizer.parse("a\\,b").expect("parse should succeed");
    assert_eq!(argv.argc(), 1);
    assert_eq!(argv.arg(0), Some(b"a,b".as_slice()));
}
