use parstty::parser::analyze;
use parstty::parser::lexer::{Lexer, KEYWORDS};
use parstty::parser::token::{Token, TokenKind};
use proptest::prelude::*;

/// Everything a line may hold apart from quotes
const LINE_CHARS: &[char] = &[
    'a', 'b', 'e', 'f', 'x', 'B', 'E', 'F', 'X', '_', '$', '0', '1', '2', '7', '8', '9', '=', '+',
    '-', '*', '/', '<', '>', '!', '&', '|', ',', ';', '.', '(', ')', '{', '}', '[', ']', ':', '#',
    '@', ' ', ' ', '\t',
];

/// Characters allowed between the quotes of a string literal
const STRING_CHARS: &[char] = &[
    'a', 'Z', '0', '9', ' ', '\t', '=', '+', '-', '|', '&', '!', ',', ';', '.', '(', ')', '{', '}',
    ':', '#', '\'', '\\',
];

/// Lexemes the grammar knows, so random programs reach deep into the parser
const PROGRAM_WORDS: &[&str] = &[
    "{", "}", "(", ")", ";", ",", ":", "=", "==", "!=", "<", ">", "+", "-", "*", "/", "!", "&&",
    "||", "int", "float", "boolean", "void", "class", "if", "else", "while", "do", "for",
    "switch", "case", "default", "break", "return", "true", "x", "f", "1", "0x1F", "2.5", "017",
    "\"s\"", "3.",
];

fn line_from(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn lexemes_reconstruct_line_without_strings(
        chars in prop::collection::vec(prop::sample::select(LINE_CHARS), 0..80)
    ) {
        let line = line_from(chars);
        let tokens = Lexer::new().tokenize_str(&line);

        let joined: String = tokens.iter().map(Token::lexeme).collect();
        let stripped: String = line.chars().filter(|c| !matches!(c, ' ' | '\t')).collect();
        prop_assert_eq!(joined, stripped, "line: {:?}", line);

        // Each lexeme sits at its column, in order, on line 1
        let chars: Vec<char> = line.chars().collect();
        for token in &tokens {
            let start = token.column() - 1;
            let len = token.lexeme().chars().count();
            let at_column: String = chars[start..start + len].iter().collect();
            prop_assert_eq!(at_column.as_str(), token.lexeme());
            prop_assert_eq!(token.line(), 1);
        }
    }

    #[test]
    fn reserved_words_in_any_casing_are_keywords(
        word in prop::sample::select(KEYWORDS),
        upper in prop::collection::vec(any::<bool>(), 8),
    ) {
        let cased: String = word
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();

        let tokens = Lexer::new().tokenize_str(&cased);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind(), TokenKind::Keyword, "word: {}", cased);
    }

    #[test]
    fn octal_with_eight_or_nine_is_integer(numeral in "0[0-7]{1,6}[89][0-9]{0,4}") {
        let tokens = Lexer::new().tokenize_str(&numeral);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind(), TokenKind::Integer, "numeral: {}", numeral);
    }

    #[test]
    fn quoted_span_is_one_string_token(
        body in prop::collection::vec(prop::sample::select(STRING_CHARS), 0..40)
    ) {
        let literal = format!("\"{}\"", line_from(body));
        let tokens = Lexer::new().tokenize_str(&format!("x = {} ;", literal));

        prop_assert_eq!(tokens.len(), 4);
        prop_assert_eq!(tokens[2].kind(), TokenKind::String);
        prop_assert_eq!(tokens[2].lexeme(), literal.as_str());
    }

    #[test]
    fn lexing_is_idempotent(source in "(.{0,40}\n){0,4}") {
        let lexer = Lexer::new();
        let first = lexer.tokenize_str(&source);

        prop_assert_eq!(&first, &lexer.tokenize_str(&source));
        prop_assert_eq!(&first, &Lexer::new().tokenize_str(&source));
    }

    #[test]
    fn analyze_never_panics_on_text(source in "\\PC{0,120}") {
        let analysis = analyze(&source);
        if let Err(err) = &analysis.outcome {
            prop_assert!(err.position <= analysis.tokens.len());
        }
    }

    #[test]
    fn analyze_never_panics_on_token_soup(
        words in prop::collection::vec(prop::sample::select(PROGRAM_WORDS), 0..60)
    ) {
        let source = words.join(" ");
        let analysis = analyze(&source);

        match &analysis.outcome {
            Ok(()) => prop_assert!(!analysis.tokens.is_empty()),
            Err(err) => {
                prop_assert!(err.position <= analysis.tokens.len());
                let found = analysis
                    .tokens
                    .get(err.position)
                    .map_or("end of input", Token::lexeme);
                prop_assert_eq!(err.found.as_str(), found);
            }
        }
    }
}
