use std::fmt;

/// Lexical token of the expression language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
  Number(f64),
  Variable,
  Plus,
  Minus,
  Star,
  Slash,
  Caret,
  LeftParen,
  RightParen,
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Token::Number(n) => write!(f, "{n}"),
      Token::Variable => write!(f, "x"),
      Token::Plus => write!(f, "+"),
      Token::Minus => write!(f, "-"),
      Token::Star => write!(f, "*"),
      Token::Slash => write!(f, "/"),
      Token::Caret => write!(f, "^"),
      Token::LeftParen => write!(f, "("),
      Token::RightParen => write!(f, ")"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
  Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
  Plus,
  Minus,
  Times,
  Divide,
  Power,
}

impl BinaryOperator {
  pub fn symbol(self) -> &'static str {
    match self {
      BinaryOperator::Plus => "+",
      BinaryOperator::Minus => "-",
      BinaryOperator::Times => "*",
      BinaryOperator::Divide => "/",
      BinaryOperator::Power => "^",
    }
  }

  /// Apply the operator to two finite operands.
  /// Returns `None` where the operation has no real finite result.
  pub fn apply(self, left: f64, right: f64) -> Option<f64> {
    let value = match self {
      BinaryOperator::Plus => left + right,
      BinaryOperator::Minus => left - right,
      BinaryOperator::Times => left * right,
      BinaryOperator::Divide => {
        if right == 0.0 {
          return None;
        }
        left / right
      }
      BinaryOperator::Power => {
        // Fractional powers of negative numbers are complex
        if left < 0.0 && right.fract() != 0.0 {
          return None;
        }
        left.powf(right)
      }
    };
    value.is_finite().then_some(value)
  }
}

/// Closed syntax tree of a compiled expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Number(f64),
  Variable,
  Group(Box<Expr>),
  UnaryOp {
    op: UnaryOperator,
    operand: Box<Expr>,
  },
  BinaryOp {
    op: BinaryOperator,
    left: Box<Expr>,
    right: Box<Expr>,
  },
}

impl Expr {
  /// Evaluate the tree with the variable bound to `x`.
  /// Any undefined or non-finite intermediate result makes the whole
  /// evaluation undefined.
  pub fn evaluate(&self, x: f64) -> Option<f64> {
    let value = match self {
      Expr::Number(n) => *n,
      Expr::Variable => x,
      Expr::Group(inner) => inner.evaluate(x)?,
      Expr::UnaryOp {
        op: UnaryOperator::Minus,
        operand,
      } => -operand.evaluate(x)?,
      Expr::BinaryOp { op, left, right } => {
        let l = left.evaluate(x)?;
        let r = right.evaluate(x)?;
        op.apply(l, r)?
      }
    };
    value.is_finite().then_some(value)
  }
}

impl fmt::Display for Expr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Expr::Number(n) => write!(f, "{n}"),
      Expr::Variable => write!(f, "x"),
      Expr::Group(inner) => write!(f, "{inner}"),
      Expr::UnaryOp {
        op: UnaryOperator::Minus,
        operand,
      } => write!(f, "(-{operand})"),
      Expr::BinaryOp { op, left, right } => {
        write!(f, "({left} {} {right})", op.symbol())
      }
    }
  }
}
