use log::{debug, trace};
use smol_str::SmolStr;
use std::fmt::{self, Display, Formatter};

/// An operation that can be applied to two arguments.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperation {
    Plus,
    Minus,
    Times,
    Divide,
}

impl BinaryOperation {
    pub fn from_char(c: char) -> Option<BinaryOperation> {
        match c {
            '+' => Some(BinaryOperation::Plus),
            '-' => Some(BinaryOperation::Minus),
            '*' => Some(BinaryOperation::Times),
            '/' => Some(BinaryOperation::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOperation::Plus => '+',
            BinaryOperation::Minus => '-',
            BinaryOperation::Times => '*',
            BinaryOperation::Divide => '/',
        }
    }

    /// How tightly this operation binds. Higher ranks are applied first.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperation::Plus | BinaryOperation::Minus => 1,
            BinaryOperation::Times | BinaryOperation::Divide => 2,
        }
    }
}

impl Display for BinaryOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Get the precedence rank of an operator character, or `None` if `c` isn't
/// an operator.
pub fn precedence(c: char) -> Option<u8> {
    BinaryOperation::from_char(c).map(BinaryOperation::precedence)
}

/// Possible errors that may occur while turning infix text into a tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("\"{token}\" at index {index} is neither a number nor an operator")]
    UnknownToken { token: SmolStr, index: usize },
    #[error("The \"{operator}\" at index {index} is missing an operand")]
    MissingOperand {
        operator: BinaryOperation,
        index: usize,
    },
    #[error("{count} operands were left without an operator")]
    DanglingOperands { count: usize },
    #[error("The expression is empty")]
    EmptyExpression,
    #[error("The \")\" at index {index} has no matching \"(\"")]
    UnmatchedCloseParen { index: usize },
    #[error("The \"(\" at index {index} is never closed")]
    UnclosedParen { index: usize },
}

/// What a single postfix token represents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Operand,
    Operator(BinaryOperation),
    Unknown,
}

impl TokenKind {
    pub(crate) fn classify(token: &str) -> TokenKind {
        if token.parse::<f64>().is_ok() {
            return TokenKind::Operand;
        }

        let mut chars = token.chars();
        let op = chars.next().and_then(BinaryOperation::from_char);

        match (op, chars.next()) {
            (Some(op), None) => TokenKind::Operator(op),
            _ => TokenKind::Unknown,
        }
    }
}

/// A postfix token, remembering the byte index in the infix text where it
/// started.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PostfixToken {
    pub(crate) text: SmolStr,
    pub(crate) index: usize,
}

/// Something waiting on the operator stack, with its byte index in the
/// infix text.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Pending {
    Operator(BinaryOperation, usize),
    OpenParen(usize),
}

/// The postfix tokens emitted so far, plus the operand currently being
/// copied across.
#[derive(Debug, Default)]
struct Output {
    tokens: Vec<PostfixToken>,
    operand: Option<(String, usize)>,
}

impl Output {
    fn push_char(&mut self, c: char, index: usize) {
        match self.operand {
            Some((ref mut text, _)) => text.push(c),
            None => self.operand = Some((c.to_string(), index)),
        }
    }

    fn finish_operand(&mut self) {
        if let Some((text, index)) = self.operand.take() {
            self.tokens.push(PostfixToken {
                text: SmolStr::new(text),
                index,
            });
        }
    }

    fn push_operator(&mut self, op: BinaryOperation, index: usize) {
        self.finish_operand();
        self.tokens.push(PostfixToken {
            text: SmolStr::new(op.symbol().to_string()),
            index,
        });
    }
}

/// Rewrite an infix expression in postfix form using a shunting-yard scan.
///
/// Operands and whitespace are copied across verbatim, so tokens must already
/// be separated by spaces. Operators of equal precedence are emitted
/// left-to-right.
///
/// ```rust
/// let got = exptree::to_postfix("(1 + 2) * 3 - 4").unwrap();
///
/// assert_eq!(got, "1 2 + 3 * 4 -");
/// ```
pub fn to_postfix(infix: &str) -> Result<String, ParseError> {
    postfix_tokens(infix).map(|tokens| join(&tokens))
}

/// The shunting-yard scan behind [`to_postfix`], keeping track of where each
/// token came from.
pub(crate) fn postfix_tokens(
    infix: &str,
) -> Result<Vec<PostfixToken>, ParseError> {
    let mut output = Output::default();
    let mut stack: Vec<Pending> = Vec::new();

    for (index, c) in infix.char_indices() {
        if let Some(op) = BinaryOperation::from_char(c) {
            while let Some(&top) = stack.last() {
                match top {
                    Pending::Operator(prev, at)
                        if prev.precedence() >= op.precedence() =>
                    {
                        stack.pop();
                        output.push_operator(prev, at);
                    },
                    _ => break,
                }
            }

            trace!("Pushing \"{}\" at index {}", op, index);
            stack.push(Pending::Operator(op, index));
        } else if c == '(' {
            stack.push(Pending::OpenParen(index));
        } else if c == ')' {
            loop {
                match stack.pop() {
                    Some(Pending::OpenParen(_)) => break,
                    Some(Pending::Operator(op, at)) => {
                        output.push_operator(op, at)
                    },
                    None => {
                        return Err(ParseError::UnmatchedCloseParen { index })
                    },
                }
            }
        } else if c.is_whitespace() {
            output.finish_operand();
        } else {
            output.push_char(c, index);
        }
    }

    while let Some(top) = stack.pop() {
        match top {
            Pending::Operator(op, at) => output.push_operator(op, at),
            Pending::OpenParen(index) => {
                return Err(ParseError::UnclosedParen { index })
            },
        }
    }
    output.finish_operand();

    debug!(
        "Converted \"{}\" to postfix \"{}\"",
        infix,
        join(&output.tokens)
    );

    Ok(output.tokens)
}

fn join(tokens: &[PostfixToken]) -> String {
    tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
