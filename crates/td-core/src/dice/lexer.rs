use logos::Logos;
use std::fmt;
use std::ops::Range;

use super::CompareOp;
use crate::error::{DiceError, DiceResult};

/// Token type for dice notation.
///
/// Whitespace is kept as a token: the grammar cares whether a modifier is
/// attached to the sides or separated from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A run of whitespace.
    Space,
    /// Unsigned integer literal.
    Number(u64),
    /// The die separator `d`.
    Die,
    /// Plus sign `+`.
    Plus,
    /// Minus sign `-`.
    Minus,
    /// Comparison operator.
    Op(CompareOp),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Space => write!(f, "whitespace"),
            Token::Number(n) => write!(f, "{n}"),
            Token::Die => write!(f, "d"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Op(op) => write!(f, "{op}"),
        }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawToken {
    #[regex(r"\s+")]
    Space,

    #[regex(r"[0-9]+")]
    Number,

    #[token("d")]
    Die,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token(">=")]
    Ge,

    #[token(">")]
    Gt,

    #[token("<=")]
    Le,

    #[token("<")]
    Lt,
}

/// Lex dice notation into `(Token, Span)` pairs.
///
/// Stops at the first character that cannot start a token.
pub fn lex(source: &str) -> DiceResult<Vec<(Token, Range<usize>)>> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let raw = result.map_err(|()| {
            DiceError::InvalidExpression(format!(
                "unexpected character {:?} at position {}",
                &source[span.clone()],
                span.start
            ))
        })?;
        let token = match raw {
            RawToken::Space => Token::Space,
            RawToken::Number => {
                let text = lexer.slice();
                let n = text.parse::<u64>().map_err(|_| {
                    DiceError::InvalidExpression(format!("number too large: {text}"))
                })?;
                Token::Number(n)
            }
            RawToken::Die => Token::Die,
            RawToken::Plus => Token::Plus,
            RawToken::Minus => Token::Minus,
            RawToken::Ge => Token::Op(CompareOp::Ge),
            RawToken::Gt => Token::Op(CompareOp::Gt),
            RawToken::Le => Token::Op(CompareOp::Le),
            RawToken::Lt => Token::Op(CompareOp::Lt),
        };
        tokens.push((token, span));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        lex(source).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn lex_full_expression() {
        assert_eq!(
            kinds("2d6+1"),
            vec![
                Token::Number(2),
                Token::Die,
                Token::Number(6),
                Token::Plus,
                Token::Number(1)
            ]
        );
    }

    #[test]
    fn lex_comparison_operators() {
        assert_eq!(
            kinds("d20 >= 15"),
            vec![
                Token::Die,
                Token::Number(20),
                Token::Space,
                Token::Op(CompareOp::Ge),
                Token::Space,
                Token::Number(15)
            ]
        );
        assert_eq!(kinds("<")[0], Token::Op(CompareOp::Lt));
        assert_eq!(kinds("<=")[0], Token::Op(CompareOp::Le));
        assert_eq!(kinds(">")[0], Token::Op(CompareOp::Gt));
    }

    #[test]
    fn lex_whitespace_run_is_one_token() {
        assert_eq!(kinds("3   d6").len(), 3);
    }

    #[test]
    fn lex_unicode_whitespace() {
        assert_eq!(
            kinds("3\u{3000}d6"),
            vec![Token::Number(3), Token::Space, Token::Die, Token::Number(6)]
        );
    }

    #[test]
    fn lex_rejects_unknown_character() {
        let err = lex("2x6").unwrap_err();
        assert_eq!(
            err,
            DiceError::InvalidExpression("unexpected character \"x\" at position 1".into())
        );
    }

    #[test]
    fn lex_rejects_uppercase_die() {
        assert!(lex("2D6").is_err());
    }

    #[test]
    fn lex_rejects_huge_number() {
        let err = lex("d99999999999999999999999").unwrap_err();
        assert!(matches!(err, DiceError::InvalidExpression(m) if m.starts_with("number too large")));
    }

    #[test]
    fn lex_preserves_spans() {
        let tokens = lex("10 d6").unwrap();
        assert_eq!(tokens[0].1, 0..2);
        assert_eq!(tokens[1].1, 2..3);
        assert_eq!(tokens[2].1, 3..4);
    }
}
