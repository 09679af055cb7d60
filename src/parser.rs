//! Expression parser.
//!
//! Grammar (no precedence, binary operators chain to the right):
//!
//! ```text
//! expr    := NOT? operand (OP expr)?
//! operand := VAR | "(" expr ")"
//! ```
//!
//! After an operand, the rest of the input is parsed as the right-hand side,
//! so `A op1 B op2 C` always reads as `A op1 (B op2 C)`. Use parentheses to
//! group differently.
//!
//! Keywords are matched case-insensitively as whole words; symbols anywhere:
//!
//! | Operator | Spellings                     |
//! |----------|-------------------------------|
//! | NOT      | `NOT` `!` `~` `¬`             |
//! | AND      | `AND` `&&` `&` `∧`            |
//! | OR       | `OR` `\|\|` `\|` `∨`          |
//! | XOR      | `XOR` `^` `⊕`                 |
//! | IMPLIES  | `=>` `->` `⇒` `→`             |
//! | IFF      | `<=>` `<->` `⇔` `↔`           |
//!
//! A variable is any maximal run of characters other than whitespace,
//! parentheses and operator symbols.
//!
//! Nesting is capped at [`MAX_DEPTH`] levels, which bounds the recursion on
//! untrusted input.

use std::str::FromStr;

use log::debug;

use crate::error::ParseError;
use crate::node::Node;
use crate::types::Op;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum TokenKind {
    Var,
    Not,
    Binary(Op),
    Open,
    Close,
}

#[derive(Debug, Copy, Clone)]
struct Token<'s> {
    kind: TokenKind,
    text: &'s str,
    /// Offset in characters.
    offset: usize,
}

// Longer spellings first, so `<=>` is not read as `<` followed by `=>`.
const SYMBOLS: &[(&str, TokenKind)] = &[
    ("<=>", TokenKind::Binary(Op::Iff)),
    ("<->", TokenKind::Binary(Op::Iff)),
    ("=>", TokenKind::Binary(Op::Implies)),
    ("->", TokenKind::Binary(Op::Implies)),
    ("&&", TokenKind::Binary(Op::And)),
    ("||", TokenKind::Binary(Op::Or)),
    ("&", TokenKind::Binary(Op::And)),
    ("|", TokenKind::Binary(Op::Or)),
    ("^", TokenKind::Binary(Op::Xor)),
    ("!", TokenKind::Not),
    ("~", TokenKind::Not),
    ("¬", TokenKind::Not),
    ("∧", TokenKind::Binary(Op::And)),
    ("∨", TokenKind::Binary(Op::Or)),
    ("⊕", TokenKind::Binary(Op::Xor)),
    ("⇒", TokenKind::Binary(Op::Implies)),
    ("→", TokenKind::Binary(Op::Implies)),
    ("⇔", TokenKind::Binary(Op::Iff)),
    ("↔", TokenKind::Binary(Op::Iff)),
];

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("NOT", TokenKind::Not),
    ("AND", TokenKind::Binary(Op::And)),
    ("OR", TokenKind::Binary(Op::Or)),
    ("XOR", TokenKind::Binary(Op::Xor)),
];

fn symbol_at(rest: &str) -> Option<(&'static str, TokenKind)> {
    SYMBOLS.iter().find(|(s, _)| rest.starts_with(s)).copied()
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

/// Byte length of the word starting at `rest`.
fn word_len(rest: &str) -> usize {
    rest.char_indices()
        .find(|&(i, c)| is_delimiter(c) || symbol_at(&rest[i..]).is_some())
        .map_or(rest.len(), |(i, _)| i)
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut offset = 0;

    while let Some(c) = text[pos..].chars().next() {
        if c.is_whitespace() {
            pos += c.len_utf8();
            offset += 1;
            continue;
        }

        let rest = &text[pos..];
        let (kind, len) = match c {
            '(' => (TokenKind::Open, 1),
            ')' => (TokenKind::Close, 1),
            _ => match symbol_at(rest) {
                Some((symbol, kind)) => (kind, symbol.len()),
                None => {
                    let len = word_len(rest);
                    let word = &rest[..len];
                    let kind = KEYWORDS
                        .iter()
                        .find(|(k, _)| k.eq_ignore_ascii_case(word))
                        .map_or(TokenKind::Var, |&(_, kind)| kind);
                    (kind, len)
                }
            },
        };

        let spelling = &rest[..len];
        tokens.push(Token {
            kind,
            text: spelling,
            offset,
        });
        pos += len;
        offset += spelling.chars().count();
    }

    tokens
}

/// Deepest nesting [`parse`] accepts.
///
/// Every enclosing parenthesis and every operator earlier in the same chain
/// counts as one level, so `A AND B AND C` already reaches level 2. Deeper
/// input is rejected with [`ParseError::TooDeep`] before a tree is built.
pub const MAX_DEPTH: usize = 256;

struct Parser<'s> {
    text: &'s str,
    tokens: Vec<Token<'s>>,
    /// For every `(` token, the index of its `)`.
    closes: Vec<Option<usize>>,
    pos: usize,
}

fn match_parentheses(tokens: &[Token<'_>]) -> Vec<Option<usize>> {
    let mut closes = vec![None; tokens.len()];
    let mut open = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Open => open.push(i),
            TokenKind::Close => {
                if let Some(j) = open.pop() {
                    closes[j] = Some(i);
                }
            }
            _ => {}
        }
    }
    closes
}

impl<'s> Parser<'s> {
    fn new(text: &'s str) -> Self {
        let tokens = tokenize(text);
        let closes = match_parentheses(&tokens);
        Self {
            text,
            tokens,
            closes,
            pos: 0,
        }
    }

    /// Parses `tokens[pos..end]` entirely.
    ///
    /// The operator chain is collected in a loop and folded from the right,
    /// so only parentheses recurse.
    fn expr(&mut self, end: usize, mut level: usize) -> Result<Node, ParseError> {
        let mut last = self.negated_operand(end, level)?;
        let mut links = Vec::new();

        while let Some(token) = self.peek(end) {
            let TokenKind::Binary(op) = token.kind else {
                return Err(ParseError::MissingOperator {
                    found: token.text.to_string(),
                    text: self.text.to_string(),
                    offset: token.offset,
                });
            };
            self.pos += 1;
            level += 1;
            let next = self.negated_operand(end, level)?;
            links.push((std::mem::replace(&mut last, next), op));
        }

        // A op1 B op2 C  ->  A op1 (B op2 C)
        Ok(links
            .into_iter()
            .rev()
            .fold(last, |right, (left, op)| Node::binary(op, left, right)))
    }

    fn negated_operand(&mut self, end: usize, level: usize) -> Result<Node, ParseError> {
        if level > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                text: self.text.to_string(),
                offset: self.offset_of(self.pos),
                max: MAX_DEPTH,
            });
        }

        let negated = self.peek(end).is_some_and(|t| t.kind == TokenKind::Not);
        if negated {
            self.pos += 1;
        }
        let mut operand = self.operand(end, level)?;
        if negated {
            operand.negate();
        }
        Ok(operand)
    }

    fn operand(&mut self, end: usize, level: usize) -> Result<Node, ParseError> {
        let Some(token) = self.peek(end) else {
            return Err(ParseError::EmptyExpression {
                text: self.text.to_string(),
                offset: self.offset_of(end),
            });
        };

        match token.kind {
            TokenKind::Var => {
                self.pos += 1;
                Ok(Node::var(token.text))
            }
            TokenKind::Open => {
                let close = self.closes[self.pos].ok_or_else(|| ParseError::UnmatchedParenthesis {
                    text: self.text.to_string(),
                })?;
                self.pos += 1;
                let inner = self.expr(close, level + 1)?;
                self.pos = close + 1;
                Ok(inner)
            }
            TokenKind::Not | TokenKind::Binary(_) | TokenKind::Close => Err(ParseError::UnexpectedToken {
                token: token.text.to_string(),
                text: self.text.to_string(),
                offset: token.offset,
            }),
        }
    }

    fn peek(&self, end: usize) -> Option<Token<'s>> {
        self.tokens[..end].get(self.pos).copied()
    }

    /// Character offset of token `index`, or the end of the text.
    fn offset_of(&self, index: usize) -> usize {
        self.tokens
            .get(index)
            .map_or_else(|| self.text.chars().count(), |t| t.offset)
    }
}

/// Parses an expression.
///
/// Malformed input, including input nested deeper than [`MAX_DEPTH`], is
/// reported as a [`ParseError`] value; this never panics.
pub fn parse(text: &str) -> Result<Node, ParseError> {
    let mut parser = Parser::new(text);
    let end = parser.tokens.len();
    let result = parser.expr(end, 0);
    match &result {
        Ok(node) => debug!("parse({:?}) = {}", text, node),
        Err(e) => debug!("parse({:?}) failed: {}", text, e),
    }
    result
}

impl FromStr for Node {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
