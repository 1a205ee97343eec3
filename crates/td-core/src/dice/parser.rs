//! Expression parser for dice notation.
//!
//! Two axes are kept apart: how many dice are summed into one roll
//! (`2d6`) and how many independent rolls are made (`3 2d6`).

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::lexer::{Token, lex};
use super::{Comparison, DiceSpec};
use crate::config::RollConfig;
use crate::error::{Bound, DiceError, DiceResult};

/// Largest modifier magnitude accepted after `+` or `-`.
pub const MAX_MODIFIER: u64 = 1_000_000_000;

/// A parsed expression: one roll, or the same roll repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollRequest {
    /// A single roll.
    Single(DiceSpec),
    /// `times` independent rolls of `spec`.
    Repeated {
        /// Number of independent rolls.
        times: u32,
        /// The roll to repeat.
        spec: DiceSpec,
    },
}

impl RollRequest {
    /// The roll being made.
    pub fn spec(&self) -> &DiceSpec {
        match self {
            Self::Single(spec) | Self::Repeated { spec, .. } => spec,
        }
    }

    /// How many independent rolls this request makes.
    pub fn times(&self) -> u32 {
        match self {
            Self::Single(_) => 1,
            Self::Repeated { times, .. } => *times,
        }
    }
}

/// Parse an expression that may carry a leading repeat count.
///
/// `"+3 2d6+1"` and `"3 d6"` are repeated rolls; anything that does not start
/// with `[+]N<whitespace>` is parsed as a single roll.
pub fn parse(expression: &str, config: &RollConfig, max_rolls: u32) -> DiceResult<RollRequest> {
    let trimmed = expression.trim();
    let tokens = lex(trimmed)?;

    let request = match split_repeat(&tokens) {
        Some((times, rest_start)) => {
            Bound::RollCount.check(times, 1, u64::from(max_rolls))?;
            let spec = parse_dice(&trimmed[rest_start..], config)?;
            RollRequest::Repeated {
                times: to_u32(times)?,
                spec,
            }
        }
        None => RollRequest::Single(parse_tokens(&tokens, config)?),
    };

    tracing::debug!(expression = trimmed, ?request, "parsed dice expression");
    Ok(request)
}

/// Parse a single-roll expression such as `2d6+1` or `d20 >= 15`.
pub fn parse_dice(expression: &str, config: &RollConfig) -> DiceResult<DiceSpec> {
    let tokens = lex(expression.trim())?;
    parse_tokens(&tokens, config)
}

/// Match `[+] N <space>` at the front and return the repeat count and the
/// byte offset where the nested expression starts.
fn split_repeat(tokens: &[(Token, Range<usize>)]) -> Option<(u64, usize)> {
    let rest = match tokens.first() {
        Some((Token::Plus, _)) => &tokens[1..],
        _ => tokens,
    };
    match rest {
        [(Token::Number(n), _), (Token::Space, _), (_, next), ..] => Some((*n, next.start)),
        _ => None,
    }
}

fn parse_tokens(tokens: &[(Token, Range<usize>)], config: &RollConfig) -> DiceResult<DiceSpec> {
    let mut cursor = Cursor { tokens, pos: 0 };

    let count = match cursor.peek() {
        Some(Token::Number(n)) => {
            cursor.bump();
            n
        }
        _ => 1,
    };
    cursor.expect(Token::Die, "expected 'd'")?;
    let sides = cursor.number("die sides")?;

    let (negative, magnitude) = match cursor.peek() {
        Some(Token::Plus) => {
            cursor.bump();
            (false, cursor.number("modifier")?)
        }
        Some(Token::Minus) => {
            cursor.bump();
            (true, cursor.number("modifier")?)
        }
        _ => (false, 0),
    };

    cursor.skip_space();
    let comparison = match cursor.peek() {
        Some(Token::Op(op)) => {
            cursor.bump();
            cursor.skip_space();
            let threshold = to_i64(cursor.number("comparison value")?)?;
            Some(Comparison { op, threshold })
        }
        _ => None,
    };

    if let Some(token) = cursor.peek() {
        return Err(DiceError::InvalidExpression(format!(
            "unexpected {token} after dice term"
        )));
    }

    Bound::DiceCount.check(count, 1, u64::from(config.max_dice_count))?;
    Bound::DiceSides.check(sides, 2, u64::from(config.max_dice_sides))?;
    Bound::Modifier.check(magnitude, 0, MAX_MODIFIER)?;

    let modifier = to_i64(magnitude)?;
    Ok(DiceSpec {
        count: to_u32(count)?,
        sides: to_u32(sides)?,
        modifier: if negative { -modifier } else { modifier },
        comparison,
    })
}

struct Cursor<'a> {
    tokens: &'a [(Token, Range<usize>)],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(t, _)| *t)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_space(&mut self) {
        while self.peek() == Some(Token::Space) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: Token, message: &str) -> DiceResult<()> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(DiceError::InvalidExpression(message.to_string()))
        }
    }

    fn number(&mut self, what: &str) -> DiceResult<u64> {
        match self.peek() {
            Some(Token::Number(n)) => {
                self.bump();
                Ok(n)
            }
            _ => Err(DiceError::InvalidExpression(format!("missing {what}"))),
        }
    }
}

fn to_u32(n: u64) -> DiceResult<u32> {
    u32::try_from(n).map_err(|_| DiceError::InvalidExpression(format!("number too large: {n}")))
}

fn to_i64(n: u64) -> DiceResult<i64> {
    i64::try_from(n).map_err(|_| DiceError::InvalidExpression(format!("number too large: {n}")))
}
