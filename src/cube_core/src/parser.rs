//! Text notation to typed moves.
//!
//! Tokens are separated by whitespace. Each token is a face letter followed by
//! at most one modifier: `'` (or `’`, or `p`) for a counter-clockwise turn and
//! `2` for a half turn. Parsing is all or nothing.

use crate::{
    algorithm::Algorithm,
    moves::{Direction, Face, Move},
};
use log::debug;
use std::{fmt, ops::Range, str::FromStr};
use thiserror::Error;

/// A whitespace-delimited piece of input, with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Zero-based position among the tokens of the input.
    pub index: usize,
    /// Byte range of the token in the input.
    pub span: Range<usize>,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` (token {}, bytes {}..{})",
            self.text, self.index, self.span.start, self.span.end
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected a move but the input is empty")]
    EmptyInput,
    #[error("Unknown face `{face}` in {token}, expected one of U, D, L, R, F, B")]
    UnknownFace { token: Token, face: char },
    #[error("Invalid modifier `{modifier}` in {token}, expected one of ', ’, p or 2")]
    InvalidModifier { token: Token, modifier: char },
    #[error("Too many modifiers in {token}, expected at most one")]
    MultipleModifiers { token: Token },
    #[error("Expected a single move but got another one: {token}")]
    ExpectedSingleMove { token: Token },
}

impl ParseError {
    /// The token that caused the failure, if the input had one.
    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::UnknownFace { token, .. }
            | ParseError::InvalidModifier { token, .. }
            | ParseError::MultipleModifiers { token }
            | ParseError::ExpectedSingleMove { token } => Some(token),
        }
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = None;
    // A trailing sentinel flushes the last token.
    for (i, c) in text.char_indices().chain([(text.len(), ' ')]) {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token {
                    text: text[s..i].to_owned(),
                    index: tokens.len(),
                    span: s..i,
                });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    tokens
}

fn modifier(c: char) -> Option<Direction> {
    match c {
        '\'' | '’' | 'p' => Some(Direction::Prime),
        '2' => Some(Direction::Double),
        _ => None,
    }
}

fn parse_token(token: &Token) -> Result<Move, ParseError> {
    let mut chars = token.text.chars();
    // Tokens are never empty.
    let first = chars.next().unwrap_or_default();
    let Some(face) = Face::from_char(first) else {
        return Err(ParseError::UnknownFace {
            token: token.clone(),
            face: first,
        });
    };

    let mut dir = Direction::Normal;
    for (i, c) in chars.enumerate() {
        let Some(modified) = modifier(c) else {
            return Err(ParseError::InvalidModifier {
                token: token.clone(),
                modifier: c,
            });
        };
        if i > 0 {
            return Err(ParseError::MultipleModifiers {
                token: token.clone(),
            });
        }
        dir = modified;
    }

    Ok(Move::new(face, dir))
}

/// Parse a whitespace-separated sequence of moves. Blank input is the empty
/// algorithm.
///
/// # Errors
///
/// The first malformed token, reported with its index and byte span. No partial
/// result is produced.
pub fn parse_algorithm(text: &str) -> Result<Algorithm, ParseError> {
    let alg = tokenize(text)
        .iter()
        .map(parse_token)
        .collect::<Result<Algorithm, _>>()?;
    debug!("Parsed {} moves from {text:?}", alg.len());
    Ok(alg)
}

/// Parse exactly one move.
///
/// # Errors
///
/// The input is blank, holds more than one token, or its token is malformed.
pub fn parse_move(text: &str) -> Result<Move, ParseError> {
    match tokenize(text).as_slice() {
        [] => Err(ParseError::EmptyInput),
        [token] => parse_token(token),
        [_, extra, ..] => Err(ParseError::ExpectedSingleMove {
            token: extra.clone(),
        }),
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}
