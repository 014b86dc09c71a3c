//! Arithmetic in postfix (RPN) and infix notation.
//!
//! `3 4 + 2 *` is the postfix form of `(3 + 4) * 2`. Infix input is turned
//! into postfix with the shunting yard algorithm and then evaluated with a
//! single operand stack.

use std::fmt;

use tracing::{debug, trace};

use crate::{
    error::{AdtError, Result},
    stack::Stack,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength. All operators are left associative.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div if rhs == 0.0 => Err(AdtError::DivisionByZero),
            Operator::Div => Ok(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Evaluates a whitespace separated postfix expression.
pub fn eval_postfix(expr: &str) -> Result<f64> {
    let mut operands: Stack<f64> = Stack::new();

    for token in expr.split_whitespace() {
        match Operator::from_symbol(token) {
            Some(op) => {
                // The right operand was pushed last.
                let underflow = || AdtError::StackUnderflow {
                    token: token.to_string(),
                };
                let rhs = operands.pop().ok_or_else(underflow)?;
                let lhs = operands.pop().ok_or_else(underflow)?;
                let value = op.apply(lhs, rhs)?;
                trace!(%op, lhs, rhs, value, "applied");
                operands.push(value);
            }
            None => {
                let value = parse_operand(token)?;
                operands.push(value);
            }
        }
    }

    let result = operands
        .pop()
        .ok_or_else(|| AdtError::MalformedExpression("empty expression".to_string()))?;

    if !operands.is_empty() {
        return Err(AdtError::MalformedExpression(format!(
            "{} operand(s) without an operator",
            operands.len()
        )));
    }

    debug!(expr, result, "evaluated postfix expression");
    Ok(result)
}

/// Parses a finite number; `nan` and `inf` are not operands.
fn parse_operand(token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AdtError::InvalidToken(token.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Number(&'a str),
    Op(Operator),
    LParen,
    RParen,
}

/// Splits infix text into numbers, operators and parentheses. Numbers are
/// runs of digits with at most one decimal point.
fn tokenize(expr: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '(' => tokens.push(Token::LParen),
            ')' => tokens.push(Token::RParen),
            '0'..='9' | '.' => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if !(next.is_ascii_digit() || next == '.') {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }

                let number = &expr[start..end];
                parse_operand(number)?;
                tokens.push(Token::Number(number));
            }
            c => match Operator::from_symbol(c.encode_utf8(&mut [0; 4])) {
                Some(op) => tokens.push(Token::Op(op)),
                None => return Err(AdtError::InvalidToken(c.to_string())),
            },
        }
    }

    Ok(tokens)
}

/// Converts an infix expression to postfix, e.g. `3 + 4 * 2` becomes
/// `3 4 2 * +`.
pub fn infix_to_postfix(expr: &str) -> Result<String> {
    let mut output: Vec<String> = Vec::new();
    let mut pending: Stack<Token<'_>> = Stack::new();
    // Operands and operators must alternate: `2 3 +` and `(2)(3)` are
    // rejected here rather than turned into valid postfix.
    let mut expect_operand = true;

    for token in tokenize(expr)? {
        let starts_operand = matches!(token, Token::Number(_) | Token::LParen);
        if starts_operand != expect_operand {
            return Err(AdtError::MalformedExpression(match token {
                Token::Number(n) => format!("missing operator before `{n}`"),
                Token::LParen => "missing operator before `(`".to_string(),
                Token::Op(op) => format!("missing operand before `{op}`"),
                Token::RParen => "missing operand before `)`".to_string(),
            }));
        }
        expect_operand = matches!(token, Token::Op(_) | Token::LParen);

        match token {
            Token::Number(n) => output.push(n.to_string()),
            Token::LParen => pending.push(Token::LParen),
            Token::RParen => loop {
                match pending.pop() {
                    Some(Token::LParen) => break,
                    Some(Token::Op(op)) => output.push(op.to_string()),
                    _ => return Err(AdtError::MismatchedParenthesis),
                }
            },
            Token::Op(op) => {
                while let Some(&Token::Op(top)) = pending.peek() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(top.to_string());
                    pending.pop();
                }
                pending.push(Token::Op(op));
            }
        }
    }

    if expect_operand && !output.is_empty() {
        return Err(AdtError::MalformedExpression(
            "expression ends with an operator".to_string(),
        ));
    }

    while let Some(token) = pending.pop() {
        match token {
            Token::Op(op) => output.push(op.to_string()),
            _ => return Err(AdtError::MismatchedParenthesis),
        }
    }

    let postfix = output.join(" ");
    debug!(infix = expr, postfix = %postfix, "converted expression");
    Ok(postfix)
}

/// Evaluates an infix expression by way of its postfix form.
pub fn eval_infix(expr: &str) -> Result<f64> {
    eval_postfix(&infix_to_postfix(expr)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3 4 +", 7.0)]
    #[case("3 4 + 2 *", 14.0)]
    #[case("5 1 2 + 4 * + 3 -", 14.0)]
    #[case("15 7 1 1 + - / 3 * 2 1 1 + + -", 5.0)]
    #[case("2.5 -1 *", -2.5)]
    #[case("42", 42.0)]
    fn postfix(#[case] expr: &str, #[case] expected: f64) {
        assert_eq!(eval_postfix(expr).unwrap(), expected);
    }

    #[test]
    fn postfix_errors() {
        assert!(matches!(
            eval_postfix("3 +"),
            Err(AdtError::StackUnderflow { token }) if token == "+"
        ));
        assert!(matches!(eval_postfix("3 x +"), Err(AdtError::InvalidToken(t)) if t == "x"));
        assert!(matches!(eval_postfix("1 0 /"), Err(AdtError::DivisionByZero)));
        assert!(matches!(eval_postfix(""), Err(AdtError::MalformedExpression(_))));
        assert!(matches!(eval_postfix("1 2"), Err(AdtError::MalformedExpression(_))));
    }

    #[rstest]
    #[case("nan")]
    #[case("inf 1 +")]
    #[case("1 -infinity *")]
    fn non_finite_operands(#[case] expr: &str) {
        assert!(matches!(eval_postfix(expr), Err(AdtError::InvalidToken(_))));
    }

    #[rstest]
    #[case("3 + 4 * 2", "3 4 2 * +")]
    #[case("(3 + 4) * 2", "3 4 + 2 *")]
    #[case("10 - 4 - 3", "10 4 - 3 -")]
    #[case("8 / (2 * (1 + 1))", "8 2 1 1 + * /")]
    #[case("1.5*2+3", "1.5 2 * 3 +")]
    #[case("", "")]
    fn shunting_yard(#[case] infix: &str, #[case] expected: &str) {
        assert_eq!(infix_to_postfix(infix).unwrap(), expected);
    }

    #[test]
    fn infix_errors() {
        assert!(matches!(infix_to_postfix("(1 + 2"), Err(AdtError::MismatchedParenthesis)));
        assert!(matches!(infix_to_postfix("1 + 2)"), Err(AdtError::MismatchedParenthesis)));
        assert!(matches!(infix_to_postfix("2 ^ 3"), Err(AdtError::InvalidToken(t)) if t == "^"));
        assert!(matches!(infix_to_postfix("1.2.3 + 1"), Err(AdtError::InvalidToken(_))));
    }

    #[rstest]
    #[case("2 3 +")]
    #[case("(2)(3)")]
    #[case("2 (3)")]
    #[case("+ 2")]
    #[case("1 + * 2")]
    #[case("1 +")]
    #[case("()")]
    #[case("(1 +)")]
    fn operands_and_operators_alternate(#[case] infix: &str) {
        assert!(matches!(infix_to_postfix(infix), Err(AdtError::MalformedExpression(_))));
        assert!(eval_infix(infix).is_err());
    }

    #[test]
    fn infix_evaluation() {
        assert_eq!(eval_infix("(3 + 4) * 2").unwrap(), 14.0);
        assert_eq!(eval_infix("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(eval_infix("7 / 2").unwrap(), 3.5);
        assert!(matches!(eval_infix("1 / (2 - 2)"), Err(AdtError::DivisionByZero)));
    }
}
