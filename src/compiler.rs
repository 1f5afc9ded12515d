//! Expression compiler: strips whitespace, lexes with the pest grammar in
//! `expression.pest`, inserts implicit multiplications and builds a closed
//! [`Expr`] tree by recursive descent.
//!
//! Precedence, highest first: `^` (right associative), unary `-`,
//! `*` and `/`, `+` and `-`.

use std::fmt;
use std::str::FromStr;

use log::trace;
use pest::error::InputLocation;
use pest::Parser;
use pest_derive::Parser;

use crate::syntax::{BinaryOperator, Expr, Token, UnaryOperator};
use crate::ParseError;

#[derive(Parser)]
#[grammar = "expression.pest"]
struct ExpressionLexer;

/// Characters that may legally appear in an expression once whitespace
/// has been removed.
fn is_expression_char(c: char) -> bool {
  c.is_ascii_digit() || matches!(c, '.' | 'x' | '+' | '-' | '*' | '/' | '^' | '(' | ')')
}

/// A function of `x` compiled from source text.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
  source: String,
  tree: Expr,
}

impl CompiledExpression {
  /// Evaluate at `x`. `None` means the function has no finite real value
  /// there (division by zero, complex power, overflow).
  pub fn evaluate(&self, x: f64) -> Option<f64> {
    if !x.is_finite() {
      return None;
    }
    self.tree.evaluate(x)
  }

  /// The text this expression was compiled from.
  pub fn source(&self) -> &str {
    &self.source
  }

  pub fn tree(&self) -> &Expr {
    &self.tree
  }
}

impl fmt::Display for CompiledExpression {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tree)
  }
}

impl FromStr for CompiledExpression {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    compile(s)
  }
}

/// Compile `source` into an evaluable expression.
pub fn compile(source: &str) -> Result<CompiledExpression, ParseError> {
  let tokens = tokenize(source)?;
  if tokens.is_empty() {
    return Err(ParseError::Malformed("empty expression".to_string()));
  }

  let mut parser = TokenParser {
    tokens: &tokens,
    pos: 0,
  };
  let tree = parser.parse_expression()?;
  if let Some(token) = parser.peek() {
    return Err(match token {
      Token::RightParen => {
        ParseError::Malformed("unmatched closing parenthesis".to_string())
      }
      other => ParseError::Malformed(format!("unexpected '{other}'")),
    });
  }

  trace!("compiled {source:?} as {tree}");
  Ok(CompiledExpression {
    source: source.to_string(),
    tree,
  })
}

/// Lex `source` into tokens, with implicit multiplications made explicit.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
  let (stripped, offsets) = strip_whitespace(source);
  let tokens = lex(&stripped, &offsets)?;
  Ok(insert_implicit_multiplication(tokens))
}

/// Remove whitespace, remembering the original char index of every kept
/// character so errors can point into the caller's text.
fn strip_whitespace(source: &str) -> (String, Vec<usize>) {
  let mut stripped = String::with_capacity(source.len());
  let mut offsets = Vec::with_capacity(source.len());
  for (index, c) in source.chars().enumerate() {
    if !c.is_whitespace() {
      stripped.push(c);
      offsets.push(index);
    }
  }
  (stripped, offsets)
}

fn lex(stripped: &str, offsets: &[usize]) -> Result<Vec<Token>, ParseError> {
  // Reject foreign characters up front so they are never reported as a
  // malformed literal.
  if let Some((index, character)) = stripped
    .chars()
    .enumerate()
    .find(|(_, c)| !is_expression_char(*c))
  {
    return Err(ParseError::InvalidCharacter {
      character,
      position: offsets[index],
    });
  }

  let pairs = ExpressionLexer::parse(Rule::Tokens, stripped).map_err(|err| {
    let byte = match err.location {
      InputLocation::Pos(pos) => pos,
      InputLocation::Span((start, _)) => start,
    };
    let index = stripped[..byte.min(stripped.len())].chars().count();
    let position = offsets.get(index).copied().unwrap_or(index);
    ParseError::Malformed(format!("malformed number near position {position}"))
  })?;

  let mut tokens = Vec::new();
  for pair in pairs.flat_map(|root| root.into_inner()) {
    let token = match pair.as_rule() {
      Rule::Number => {
        let value = pair.as_str().parse::<f64>().map_err(|e| {
          ParseError::Malformed(format!("bad number '{}': {e}", pair.as_str()))
        })?;
        if !value.is_finite() {
          return Err(ParseError::Malformed(format!(
            "number '{}' is out of range",
            pair.as_str()
          )));
        }
        Token::Number(value)
      }
      Rule::Variable => Token::Variable,
      Rule::Operator => match pair.as_str() {
        "+" => Token::Plus,
        "-" => Token::Minus,
        "*" => Token::Star,
        "/" => Token::Slash,
        _ => Token::Caret,
      },
      Rule::LeftParen => Token::LeftParen,
      Rule::RightParen => Token::RightParen,
      _ => continue,
    };
    tokens.push(token);
  }
  Ok(tokens)
}

/// `3x` becomes `3*x` and `(x+1)x` becomes `(x+1)*x`.
fn insert_implicit_multiplication(tokens: Vec<Token>) -> Vec<Token> {
  let mut out = Vec::with_capacity(tokens.len());
  for token in tokens {
    if token == Token::Variable
      && matches!(out.last(), Some(Token::Number(_) | Token::RightParen))
    {
      out.push(Token::Star);
    }
    out.push(token);
  }
  out
}

struct TokenParser<'a> {
  tokens: &'a [Token],
  pos: usize,
}

impl TokenParser<'_> {
  fn peek(&self) -> Option<Token> {
    self.tokens.get(self.pos).copied()
  }

  fn next(&mut self) -> Option<Token> {
    let token = self.peek()?;
    self.pos += 1;
    Some(token)
  }

  fn parse_expression(&mut self) -> Result<Expr, ParseError> {
    let mut left = self.parse_term()?;
    loop {
      let op = match self.peek() {
        Some(Token::Plus) => BinaryOperator::Plus,
        Some(Token::Minus) => BinaryOperator::Minus,
        _ => return Ok(left),
      };
      self.pos += 1;
      let right = self.parse_term()?;
      left = Expr::BinaryOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
      };
    }
  }

  fn parse_term(&mut self) -> Result<Expr, ParseError> {
    let mut left = self.parse_unary()?;
    loop {
      let op = match self.peek() {
        Some(Token::Star) => BinaryOperator::Times,
        Some(Token::Slash) => BinaryOperator::Divide,
        _ => return Ok(left),
      };
      self.pos += 1;
      let right = self.parse_unary()?;
      left = Expr::BinaryOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
      };
    }
  }

  fn parse_unary(&mut self) -> Result<Expr, ParseError> {
    if self.peek() == Some(Token::Minus) {
      self.pos += 1;
      let operand = self.parse_unary()?;
      return Ok(Expr::UnaryOp {
        op: UnaryOperator::Minus,
        operand: Box::new(operand),
      });
    }
    self.parse_power()
  }

  fn parse_power(&mut self) -> Result<Expr, ParseError> {
    let base = self.parse_primary()?;
    if self.peek() != Some(Token::Caret) {
      return Ok(base);
    }
    self.pos += 1;
    // Right associative, and the exponent may carry its own sign: 2^-x
    let exponent = self.parse_unary()?;
    Ok(Expr::BinaryOp {
      op: BinaryOperator::Power,
      left: Box::new(base),
      right: Box::new(exponent),
    })
  }

  fn parse_primary(&mut self) -> Result<Expr, ParseError> {
    match self.next() {
      Some(Token::Number(n)) => Ok(Expr::Number(n)),
      Some(Token::Variable) => Ok(Expr::Variable),
      Some(Token::LeftParen) => {
        let inner = self.parse_expression()?;
        match self.next() {
          Some(Token::RightParen) => Ok(Expr::Group(Box::new(inner))),
          Some(other) => Err(ParseError::Malformed(format!(
            "expected ')' but found '{other}'"
          ))),
          None => {
            Err(ParseError::Malformed("missing closing parenthesis".to_string()))
          }
        }
      }
      Some(other) => {
        Err(ParseError::Malformed(format!("unexpected '{other}'")))
      }
      None => Err(ParseError::Malformed(
        "expression ends where an operand is expected".to_string(),
      )),
    }
  }
}
