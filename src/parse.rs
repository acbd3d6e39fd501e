//! Located style-tree parsing.
//!
//! Builds a [`Rule`]/[`Declaration`] tree from reconstructed style text,
//! using `cssparser` as the tokenizer. Every node carries the span of its
//! own source text; because reconstructed text is position-aligned with
//! the original file, those spans address the original file directly.
//!
//! Parsing is structural only: selectors and declaration values are
//! carried as opaque text, never interpreted.

use cssparser::{Parser, ParserInput, Token};

use crate::error::{Error, Result};
use crate::location::{LineIndex, Span};

/// A node of the parsed style tree.
#[derive(Debug, Clone)]
pub enum StyleNode {
    Rule(Rule),
    Declaration(Declaration),
}

/// A style rule: optional selector prelude and an ordered body of
/// declarations and nested rules.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Selector text as written; `None` for the synthetic root rule.
    pub selector: Option<String>,
    pub nodes: Vec<StyleNode>,
    pub span: Span,
}

impl Rule {
    /// The rule's own declarations, excluding nested-rule children.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.nodes.iter().filter_map(|node| match node {
            StyleNode::Declaration(decl) => Some(decl),
            StyleNode::Rule(_) => None,
        })
    }

    /// Nested-rule children, in source order.
    pub fn child_rules(&self) -> impl Iterator<Item = &Rule> {
        self.nodes.iter().filter_map(|node| match node {
            StyleNode::Rule(rule) => Some(rule),
            StyleNode::Declaration(_) => None,
        })
    }
}

/// A single property declaration.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub prop: String,
    /// Value text as written, trimmed. Opaque, never interpreted.
    pub value: String,
    /// Full declaration text, through the terminating semicolon when
    /// present (through the last value token otherwise).
    pub span: Span,
}

/// Parse reconstructed style text into a located tree.
///
/// The returned root rule has no selector and spans the whole input, with
/// top-level declarations and nested rules as its body; template content
/// is a rule body without braces, not a stylesheet.
pub fn parse_style_text(text: &str) -> Result<Rule> {
    let index = LineIndex::new(text);
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut nodes = Vec::new();
    parse_nodes(&mut parser, text, &index, &mut nodes)?;
    Ok(Rule {
        selector: None,
        nodes,
        span: Span::new(index.location(0), index.location(text.len())),
    })
}

/// What the tokens ahead form, decided by which of `;` / `{` / end comes
/// first. Needed because `:` appears in both declarations and selectors
/// (`color: red` vs `&:hover`).
enum ItemKind {
    Declaration,
    Nested,
    End,
}

fn parse_nodes(
    parser: &mut Parser<'_, '_>,
    text: &str,
    index: &LineIndex<'_>,
    nodes: &mut Vec<StyleNode>,
) -> Result<()> {
    loop {
        skip_trivia(parser);
        let start = parser.state();
        match classify(parser) {
            ItemKind::End => return Ok(()),
            ItemKind::Declaration => {
                parser.reset(&start);
                if let Some(decl) = parse_declaration(parser, text, index)? {
                    nodes.push(StyleNode::Declaration(decl));
                }
            }
            ItemKind::Nested => {
                parser.reset(&start);
                let rule = parse_rule(parser, text, index)?;
                nodes.push(StyleNode::Rule(rule));
            }
        }
    }
}

/// Scan ahead to the first `;`, `{`, or end of block.
fn classify(parser: &mut Parser<'_, '_>) -> ItemKind {
    let mut saw_token = false;
    loop {
        match parser.next() {
            Ok(Token::Semicolon) => return ItemKind::Declaration,
            Ok(Token::CurlyBracketBlock) => return ItemKind::Nested,
            Ok(_) => saw_token = true,
            Err(_) => {
                return if saw_token {
                    // unterminated trailing declaration
                    ItemKind::Declaration
                } else {
                    ItemKind::End
                };
            }
        }
    }
}

/// Parse one declaration. Returns `None` for statement-style at-rules
/// (`@import …;`), which are consumed and dropped; they are not
/// declarations and must not participate in ordering.
fn parse_declaration(
    parser: &mut Parser<'_, '_>,
    text: &str,
    index: &LineIndex<'_>,
) -> Result<Option<Declaration>> {
    let start_offset = parser.position().byte_index();

    let prop = match parser.next() {
        Ok(Token::AtKeyword(_)) => {
            consume_statement(parser);
            return Ok(None);
        }
        // a stray semicolon, e.g. what `${mixin};` reconstructs to
        Ok(Token::Semicolon) => return Ok(None),
        Ok(Token::Ident(name)) => name.as_ref().to_string(),
        Ok(token) => {
            return Err(Error::StyleSyntax(format!(
                "expected property name, found {token:?}"
            )));
        }
        Err(_) => {
            return Err(Error::StyleSyntax("unexpected end of style text".into()));
        }
    };

    parser
        .expect_colon()
        .map_err(|_| Error::StyleSyntax(format!("expected ':' after '{prop}'")))?;

    let value_start = parser.position().byte_index();
    let mut value_end = value_start;
    let end_offset = loop {
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            // unterminated: the declaration ends at its last value token
            Err(_) => break value_end,
        };
        match token {
            Token::Semicolon => break parser.position().byte_index(),
            Token::WhiteSpace(_) | Token::Comment(_) => {}
            token => {
                if token_opens_block(&token) {
                    consume_block(parser);
                }
                value_end = parser.position().byte_index();
            }
        }
    };

    Ok(Some(Declaration {
        prop,
        value: text[value_start..value_end].trim().to_string(),
        span: Span::new(index.location(start_offset), index.location(end_offset)),
    }))
}

/// Parse one nested rule: prelude text, then a braced body, recursively.
fn parse_rule(
    parser: &mut Parser<'_, '_>,
    text: &str,
    index: &LineIndex<'_>,
) -> Result<Rule> {
    let start_offset = parser.position().byte_index();
    let mut prelude_end = start_offset;
    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => return Err(Error::StyleSyntax("unterminated rule prelude".into())),
        };
        match token {
            Token::CurlyBracketBlock => break,
            token => {
                if token_opens_block(&token) {
                    consume_block(parser);
                }
                prelude_end = parser.position().byte_index();
            }
        }
    }
    let selector = text[start_offset..prelude_end].trim().to_string();

    let mut nodes = Vec::new();
    let mut nested_err = None;
    let _ = parser.parse_nested_block(
        |inner: &mut Parser<'_, '_>| -> std::result::Result<(), cssparser::ParseError<'_, ()>> {
            if let Err(e) = parse_nodes(inner, text, index, &mut nodes) {
                nested_err = Some(e);
            }
            Ok(())
        },
    );
    if let Some(e) = nested_err {
        return Err(e);
    }

    let end_offset = parser.position().byte_index();
    Ok(Rule {
        selector: Some(selector),
        nodes,
        span: Span::new(index.location(start_offset), index.location(end_offset)),
    })
}

/// Skip whitespace and comments, leaving the parser at the next real
/// token. Trivia between items belongs to no node, so fixes never touch
/// it.
fn skip_trivia(parser: &mut Parser<'_, '_>) {
    loop {
        let state = parser.state();
        match parser.next_including_whitespace_and_comments() {
            Ok(Token::WhiteSpace(_)) | Ok(Token::Comment(_)) => {}
            _ => {
                parser.reset(&state);
                return;
            }
        }
    }
}

fn token_opens_block(token: &Token) -> bool {
    matches!(
        token,
        Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock
    )
}

/// Consume the block opened by the token just returned, so the parser's
/// position lands past its closing delimiter.
fn consume_block(parser: &mut Parser<'_, '_>) {
    let _ = parser.parse_nested_block(
        |nested: &mut Parser<'_, '_>| -> std::result::Result<(), cssparser::ParseError<'_, ()>> {
            while nested.next_including_whitespace_and_comments().is_ok() {}
            Ok(())
        },
    );
}

/// Consume a statement at-rule through its terminating semicolon.
fn consume_statement(parser: &mut Parser<'_, '_>) {
    while let Ok(token) = parser.next() {
        if matches!(token, Token::Semicolon) {
            break;
        }
    }
}
