use super::*;
use pretty_assertions::assert_eq;

/// How a scan of a whole input ended.
#[derive(Clone, Debug, PartialEq, Eq)]
enum End {
    Clean,
    UnterminatedComment { at: usize },
}

/// Helper: run the split protocol over `input`, revealing `chunk` more bytes
/// each time the driver asks for data. `chunk == usize::MAX` hands over the
/// whole input as a final window up front.
fn drive(input: &[u8], chunk: usize) -> (Vec<(TokenKind, Vec<u8>)>, End, usize) {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut avail = input.len().min(chunk);
    loop {
        let at_eof = avail == input.len();
        match split(&input[pos..avail], at_eof) {
            Step::Token(lexeme) => {
                let span = lexeme.span();
                tokens.push((lexeme.kind, input[pos..avail][span].to_vec()));
                pos += lexeme.consumed();
            }
            Step::NeedMoreData => {
                assert!(!at_eof, "NeedMoreData for a final window at {pos}");
                avail = avail.saturating_add(chunk).min(input.len());
            }
            Step::EndOfStream => {
                let trailing = avail - pos;
                return (tokens, End::Clean, pos + trailing);
            }
            Step::UnterminatedComment { skipped } => {
                return (
                    tokens,
                    End::UnterminatedComment { at: pos + skipped },
                    pos,
                );
            }
        }
    }
}

/// Helper: scan a complete input and return `(kind, text)` pairs.
fn scan(input: &str) -> Vec<(TokenKind, String)> {
    let (tokens, end, _) = drive(input.as_bytes(), usize::MAX);
    assert_eq!(end, End::Clean, "scan of {input:?} did not end cleanly");
    tokens
        .into_iter()
        .map(|(kind, text)| (kind, String::from_utf8_lossy(&text).into_owned()))
        .collect()
}

fn t(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}

use TokenKind::{
    Assignment, CmpOp, Comment, FuncSymbol, Keyword, MathOp, NewLine, Number, Other, Variable,
};

// ─── Protocol Outcomes ─────────────────────────────────────────

#[test]
fn empty_window() {
    assert_eq!(split(b"", false), Step::NeedMoreData);
    assert_eq!(split(b"", true), Step::EndOfStream);
}

#[test]
fn whitespace_only_window() {
    assert_eq!(split(b" \t\r ", false), Step::NeedMoreData);
    assert_eq!(split(b" \t\r ", true), Step::EndOfStream);
}

#[test]
fn token_reports_skipped_whitespace() {
    let step = split(b"  abc def", false);
    let expected = Lexeme {
        kind: Variable,
        skipped: 2,
        len: 3,
    };
    assert_eq!(step, Step::Token(expected));
    assert_eq!(expected.consumed(), 5);
    assert_eq!(expected.span(), 2..5);
}

#[test]
fn short_lookahead_needs_more_data() {
    assert_eq!(split(b"  +", false), Step::NeedMoreData);
    assert_eq!(split(b"/*", false), Step::NeedMoreData);
    assert_eq!(split(b"=", false), Step::NeedMoreData);
}

#[test]
fn open_comment_needs_more_data() {
    assert_eq!(split(b"/* still going", false), Step::NeedMoreData);
    assert_eq!(split(b"// still going", false), Step::NeedMoreData);
}

#[test]
fn unterminated_block_comment_at_end_of_input() {
    assert_eq!(
        split(b"/* never closed", true),
        Step::UnterminatedComment { skipped: 0 }
    );
    assert_eq!(
        split(b"  /*", true),
        Step::UnterminatedComment { skipped: 2 }
    );
}

#[test]
fn unterminated_line_comment_at_end_of_input() {
    assert_eq!(
        split(b"// tail", true),
        Step::UnterminatedComment { skipped: 0 }
    );
    let (tokens, end, _) = drive(b"x // tail", usize::MAX);
    assert_eq!(tokens, vec![(Variable, b"x".to_vec())]);
    assert_eq!(end, End::UnterminatedComment { at: 2 });
}

#[test]
fn line_comment_ending_the_input_with_newline() {
    assert_eq!(
        scan("x // tail\n"),
        vec![t(Variable, "x"), t(Comment, "// tail\n")]
    );
}

// ─── Dispatch ──────────────────────────────────────────────────

#[test]
fn assignment_before_identifier() {
    assert_eq!(
        scan("a=b"),
        vec![t(Variable, "a"), t(Assignment, "="), t(Variable, "b")]
    );
}

#[test]
fn equality_is_one_token() {
    assert_eq!(
        scan("a==b"),
        vec![t(Variable, "a"), t(CmpOp, "=="), t(Variable, "b")]
    );
}

#[test]
fn comment_includes_its_newline() {
    assert_eq!(
        scan("// foo\nbar"),
        vec![t(Comment, "// foo\n"), t(Variable, "bar")]
    );
}

#[test]
fn numbers_take_at_most_two_dots() {
    assert_eq!(scan("1.2.3"), vec![t(Number, "1.2."), t(Number, "3")]);
    assert_eq!(scan("1.2.3.4"), vec![t(Number, "1.2."), t(Number, "3.4")]);
}

#[test]
fn adjacent_dots_count_toward_the_cap() {
    assert_eq!(scan("0..5"), vec![t(Number, "0.."), t(Number, "5")]);
}

#[test]
fn leading_dot_is_punctuation() {
    assert_eq!(scan(".5"), vec![t(FuncSymbol, "."), t(Number, "5")]);
}

#[test]
fn small_program() {
    let source = "int main() {\n  if (x >= 10) {\n    x += 1;\n  }\n  return x << 2;\n}\n";
    assert_eq!(
        scan(source),
        vec![
            t(Keyword, "int"),
            t(Variable, "main"),
            t(FuncSymbol, "("),
            t(FuncSymbol, ")"),
            t(FuncSymbol, "{"),
            t(NewLine, "\n"),
            t(Keyword, "if"),
            t(FuncSymbol, "("),
            t(Variable, "x"),
            t(CmpOp, ">="),
            t(Number, "10"),
            t(FuncSymbol, ")"),
            t(FuncSymbol, "{"),
            t(NewLine, "\n"),
            t(Variable, "x"),
            t(Assignment, "+="),
            t(Number, "1"),
            t(FuncSymbol, ";"),
            t(NewLine, "\n"),
            t(FuncSymbol, "}"),
            t(NewLine, "\n"),
            t(Keyword, "return"),
            t(Variable, "x"),
            t(MathOp, "<<"),
            t(Number, "2"),
            t(FuncSymbol, ";"),
            t(NewLine, "\n"),
            t(FuncSymbol, "}"),
            t(NewLine, "\n"),
        ]
    );
}

#[test]
fn block_comment_between_tokens() {
    assert_eq!(
        scan("a /* b\n c */ d"),
        vec![t(Variable, "a"), t(Comment, "/* b\n c */"), t(Variable, "d")]
    );
}

#[test]
fn carriage_return_is_skipped() {
    assert_eq!(
        scan("a\r\nb"),
        vec![t(Variable, "a"), t(NewLine, "\n"), t(Variable, "b")]
    );
}

#[test]
fn unknown_operators_fall_back_to_single_bytes() {
    assert_eq!(
        scan("a && b"),
        vec![t(Variable, "a"), t(Other, "&"), t(Other, "&"), t(Variable, "b")]
    );
    assert_eq!(
        scan("f(a)=)"),
        vec![
            t(Variable, "f"),
            t(FuncSymbol, "("),
            t(Variable, "a"),
            t(FuncSymbol, ")"),
            t(Other, "="),
            t(FuncSymbol, ")"),
        ]
    );
}

#[test]
fn trailing_operator_at_end_of_input() {
    assert_eq!(scan("a +"), vec![t(Variable, "a"), t(MathOp, "+")]);
    assert_eq!(scan("x>"), vec![t(Variable, "x"), t(CmpOp, ">")]);
}

#[test]
fn non_ascii_bytes_are_other() {
    let (tokens, end, _) = drive("é".as_bytes(), usize::MAX);
    assert_eq!(end, End::Clean);
    assert_eq!(
        tokens,
        vec![(Other, vec![0xC3]), (Other, vec![0xA9])]
    );
}

#[test]
fn idempotent_with_boundary_suffix() {
    let cases: [(&[u8], TokenKind, usize); 8] = [
        (b"abc", Variable, 3),
        (b"for", Keyword, 3),
        (b"12.5", Number, 4),
        (b"=", Assignment, 1),
        (b"-=", Assignment, 2),
        (b"!=", CmpOp, 2),
        (b">>", MathOp, 2),
        (b"// x\n", Comment, 5),
    ];
    for (text, kind, len) in cases {
        let expected = Step::Token(Lexeme {
            kind,
            skipped: 0,
            len,
        });
        assert_eq!(split(text, true), expected, "{text:?} alone");
        let mut extended = text.to_vec();
        extended.extend_from_slice(b" x");
        assert_eq!(split(&extended, false), expected, "{text:?} + boundary");
    }
}

// ─── Chunking ──────────────────────────────────────────────────

#[test]
fn one_byte_at_a_time_matches_all_at_once() {
    let source = b"typedef struct { float x; } p;\n/* c */ a<<=b; // end\n";
    let whole = drive(source, usize::MAX);
    for chunk in 1..=4 {
        assert_eq!(drive(source, chunk), whole, "chunk size {chunk}");
    }
}

#[test]
fn chunked_unterminated_comment_reports_same_offset() {
    let source = b"x = 1; /* oops";
    let whole = drive(source, usize::MAX);
    assert_eq!(whole.1, End::UnterminatedComment { at: 7 });
    assert_eq!(drive(source, 1), whole);
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_protocol {
    use super::{drive, End, TokenKind};
    use proptest::prelude::*;

    /// Source-like bytes without `*`, so block comments cannot open. The
    /// trailing newline closes any line comment.
    fn comment_free() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            proptest::sample::select(b"ab1.9=+-<>!^/;( )\t\r\n{}&%".to_vec()),
            0..96,
        )
        .prop_map(|mut bytes| {
            bytes.push(b'\n');
            bytes
        })
    }

    proptest! {
        #[test]
        fn consumed_bytes_sum_to_input_length(input in comment_free()) {
            let (tokens, end, consumed) = drive(&input, usize::MAX);
            prop_assert_eq!(end, End::Clean);
            prop_assert_eq!(consumed, input.len());
            prop_assert!(tokens.iter().all(|(_, text)| !text.is_empty()));
        }

        #[test]
        fn chunking_never_changes_the_result(
            input in proptest::collection::vec(any::<u8>(), 0..128),
            chunk in 1usize..9,
        ) {
            prop_assert_eq!(drive(&input, chunk), drive(&input, usize::MAX));
        }

        #[test]
        fn number_tokens_hold_at_most_two_dots(input in "[0-9.]{1,24}") {
            let (tokens, _, _) = drive(input.as_bytes(), usize::MAX);
            for (kind, text) in tokens {
                if kind == TokenKind::Number {
                    prop_assert!(text.iter().filter(|&&b| b == b'.').count() <= 2);
                }
            }
        }
    }
}
