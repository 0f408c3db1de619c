//! Rule Parser
//!
//! Turns the rule text handed to `insert_rule` into a `CssRule`.
//! lightningcss parses the rule and its declaration block; the cssparser
//! tokenizer underneath it locates the prelude so selectors and media
//! conditions keep the spelling the caller used.

use cssparser::{ParseError, Parser, ParserInput, Token};
use lightningcss::declaration::DeclarationBlock;
use lightningcss::properties::Property;
use lightningcss::rules::CssRule as LcssRule;
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet as LcssSheet};

use crate::{CssError, CssResult, CssRule, IMPORTANT, MediaRule, RuleList, StyleDeclaration, StyleRule};

/// Parse the text of exactly one style rule or `@media` rule
pub fn parse_rule(text: &str) -> CssResult<CssRule> {
    let text = text.trim();
    let syntax = |message: &str| CssError::Syntax {
        text: text.to_string(),
        message: message.to_string(),
    };

    let sheet = LcssSheet::parse(text, ParserOptions::default()).map_err(|e| CssError::Syntax {
        text: text.to_string(),
        message: format!("{}", e),
    })?;
    let [rule] = sheet.rules.0.as_slice() else {
        return Err(syntax("expected exactly one rule"));
    };
    let block = rule_blocks(text)
        .into_iter()
        .next()
        .ok_or_else(|| syntax("missing declaration block"))?;

    match rule {
        LcssRule::Style(style) => Ok(CssRule::Style(StyleRule::new(
            collapse_whitespace(block.prelude),
            declarations_from(&style.declarations),
        ))),
        LcssRule::Media(_) => {
            let condition = block
                .prelude
                .strip_prefix("@media")
                .map(collapse_whitespace)
                .ok_or_else(|| syntax("expected @media"))?;
            let mut rules = RuleList::new();
            for nested in rule_blocks(block.body) {
                let index = rules.len();
                rules.insert_rule(nested.text, index)?;
            }
            Ok(CssRule::Media(MediaRule::new(condition, rules)))
        }
        other => Err(CssError::UnsupportedRule(rule_kind(other).to_string())),
    }
}

fn rule_kind(rule: &LcssRule) -> &'static str {
    match rule {
        LcssRule::Import(_) => "@import",
        LcssRule::Keyframes(_) => "@keyframes",
        LcssRule::FontFace(_) => "@font-face",
        LcssRule::Supports(_) => "@supports",
        LcssRule::Page(_) => "@page",
        LcssRule::Namespace(_) => "@namespace",
        LcssRule::LayerBlock(_) | LcssRule::LayerStatement(_) => "@layer",
        LcssRule::Container(_) => "@container",
        _ => "at-rule",
    }
}

/// Build a declaration block from `a: b; c: d` text.
///
/// Invalid declarations are skipped the way a browser skips them.
pub(crate) fn parse_declarations(text: &str) -> StyleDeclaration {
    let options = ParserOptions {
        error_recovery: true,
        ..ParserOptions::default()
    };
    match DeclarationBlock::parse_string(text, options) {
        Ok(block) => declarations_from(&block),
        Err(e) => {
            tracing::debug!("Dropping declaration block `{}`: {:?}", text.trim(), e);
            StyleDeclaration::new()
        }
    }
}

/// Whether `name: value` is exactly one declaration without a priority
pub(crate) fn is_single_declaration(name: &str, value: &str) -> bool {
    let text = format!("{name}: {value}");
    DeclarationBlock::parse_string(&text, ParserOptions::default())
        .is_ok_and(|block| block.declarations.len() == 1 && block.important_declarations.is_empty())
}

/// Normal declarations first, then the important ones
fn declarations_from(block: &DeclarationBlock<'_>) -> StyleDeclaration {
    let mut style = StyleDeclaration::new();
    let normal = block.declarations.iter().map(|p| (p, ""));
    let important = block.important_declarations.iter().map(|p| (p, IMPORTANT));
    for (property, priority) in normal.chain(important) {
        let Some((name, value)) = serialize(property) else {
            continue;
        };
        if let Err(e) = style.set_property(&name, &value, priority) {
            tracing::debug!("Dropping declaration `{}: {}`: {}", name, value, e);
        }
    }
    style
}

fn serialize(property: &Property<'_>) -> Option<(String, String)> {
    let text = match property.to_css_string(false, PrinterOptions::default()) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("Cannot serialize declaration: {}", e);
            return None;
        }
    };
    let (name, value) = text.split_once(':')?;
    Some((name.trim().to_string(), value.trim().to_string()))
}

/// A `prelude { body }` block located in rule text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RuleBlock<'i> {
    /// The whole rule, prelude through closing brace
    text: &'i str,
    prelude: &'i str,
    body: &'i str,
}

/// Locate each top-level `prelude { body }` block in `text`
fn rule_blocks(text: &str) -> Vec<RuleBlock<'_>> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut blocks = Vec::new();
    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        let start = parser.position();
        let Some((prelude, body)) = next_block(&mut parser, start) else {
            break;
        };
        blocks.push(RuleBlock {
            text: parser.slice_from(start),
            prelude: prelude.trim(),
            body,
        });
    }
    blocks
}

fn next_block<'i>(parser: &mut Parser<'i, '_>, start: cssparser::SourcePosition) -> Option<(&'i str, &'i str)> {
    loop {
        let before = parser.position();
        let token = parser.next_including_whitespace_and_comments().ok()?.clone();
        if matches!(token, Token::CurlyBracketBlock) {
            let prelude = parser.slice(start..before);
            let body = parser
                .parse_nested_block(|p| {
                    let inner = p.position();
                    while p.next_including_whitespace_and_comments().is_ok() {}
                    Ok::<_, ParseError<'i, ()>>(p.slice_from(inner))
                })
                .ok()?;
            return Some((prelude, body));
        }
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
