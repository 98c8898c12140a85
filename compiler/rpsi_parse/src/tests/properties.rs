use proptest::prelude::*;

use super::leaf_text;
use crate::{parse, parse_roxygen, ParseOptions};

const PIECES: &[&str] = &[
    "x", "f", "1", "2L", "\"s\"", "'", "`q`", "...", "_", "+", "-", "*", "^", "!", "~", "?",
    "(", ")", "[", "]", "[[", "]]", "{", "}", ",", ";", "=", "<-", "<<-", "->", ":=", "$",
    "@", "::", ":", "%in%", "|>", "==", "&&", "if", "else", "for", "in", "while", "repeat",
    "function", "\\", "break", "TRUE", "NULL", "NA", "#c\n", "\n", " ",
    // Multi-byte text: names, a combining mark, symbols, a non-ASCII space.
    "é", "λx", "日本", "\u{301}", "€", "😀", "\u{a0}", "\"ü\"", "#' ß\n",
];

fn r_like() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(PIECES), 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_parse_is_total_and_lossless(source in r_like()) {
        let parsed = parse(&source, &ParseOptions::default()).unwrap();
        prop_assert_eq!(leaf_text(parsed.tree()), source);
    }

    #[test]
    fn prop_parse_is_deterministic(source in r_like()) {
        let first = parse(&source, &ParseOptions::default()).unwrap();
        let second = parse(&source, &ParseOptions::default()).unwrap();
        prop_assert_eq!(first.tree().dump(), second.tree().dump());
        prop_assert_eq!(first.errors(), second.errors());
    }

    #[test]
    fn prop_arbitrary_ascii_never_fails(source in "[ -~\n\t]{0,64}") {
        let parsed = parse(&source, &ParseOptions::default()).unwrap();
        prop_assert_eq!(leaf_text(parsed.tree()), source);
    }

    #[test]
    fn prop_arbitrary_text_never_fails(source in "\\PC{0,64}") {
        let parsed = parse(&source, &ParseOptions::default()).unwrap();
        prop_assert_eq!(leaf_text(parsed.tree()), source.clone());
        for error in parsed.errors() {
            prop_assert!(source.is_char_boundary(error.span.start as usize));
            prop_assert!(source.is_char_boundary(error.span.end as usize));
        }
    }

    #[test]
    fn prop_roxygen_is_total(text in "(#' ?[@a-z\\[\\]:()<> ,]{0,12}\n?){0,4}") {
        let parsed = parse_roxygen(&text).unwrap();
        prop_assert_eq!(leaf_text(parsed.tree()), text);
    }

    #[test]
    fn prop_roxygen_non_ascii_is_total(text in "(#' ?(@param )?[a-zé日λ\\[\\]:()<>, ]{0,10}\\PC{0,6}\n?){0,4}") {
        let parsed = parse_roxygen(&text).unwrap();
        prop_assert_eq!(leaf_text(parsed.tree()), text);
    }
}
