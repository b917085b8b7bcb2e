//! CSS selector subset: parsing and matching.
//!
//! Supported: selector lists (`a, b`), descendant and child (`>`) combinators,
//! type and universal selectors, `#id`, `.class`, `[attr]` and `[attr=value]`.

use std::collections::BTreeMap;

use pagetweak_protocols::DocumentError;

/// Combinator between two compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Combinator {
    /// Whitespace: ancestor descendant.
    Descendant,
    /// `>`: parent > child.
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttributeSelector {
    pub name: String,
    pub value: Option<String>,
}

/// Simple selectors without combinators, e.g. `div.note#intro`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Compound {
    /// `None` for `*` or an omitted type.
    pub tag: Option<String>,
    pub ids: Vec<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<AttributeSelector>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.ids.is_empty() && self.classes.is_empty() && self.attributes.is_empty()
    }

    /// Whether an element with `tag` and `attributes` satisfies every part.
    pub fn matches(&self, tag: &str, attributes: &BTreeMap<String, String>) -> bool {
        if let Some(ref expected) = self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        if !self
            .ids
            .iter()
            .all(|id| attributes.get("id").is_some_and(|v| v == id))
        {
            return false;
        }

        if !self.classes.is_empty() {
            let class_attr = attributes.get("class").map(String::as_str).unwrap_or("");
            if !self
                .classes
                .iter()
                .all(|class| class_attr.split_whitespace().any(|c| c == class))
            {
                return false;
            }
        }

        self.attributes.iter().all(|attr| match (attributes.get(&attr.name), &attr.value) {
            (Some(_), None) => true,
            (Some(actual), Some(expected)) => actual == expected,
            (None, _) => false,
        })
    }
}

/// Compound selectors joined by combinators, left to right.
///
/// `combinators[i]` sits between `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ComplexSelector {
    pub compounds: Vec<Compound>,
    pub combinators: Vec<Combinator>,
}

/// A parsed, comma-separated selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}

/// Parse a selector list.
pub(crate) fn parse(input: &str) -> Result<SelectorList, DocumentError> {
    Parser::new(input).parse_list()
}

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> DocumentError {
        DocumentError::invalid_selector(self.source, message)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Skip whitespace; returns whether any was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn parse_list(mut self) -> Result<SelectorList, DocumentError> {
        let mut selectors = Vec::new();

        loop {
            self.skip_whitespace();
            if matches!(self.peek(), None | Some(',')) {
                return Err(self.error("empty selector"));
            }
            selectors.push(self.parse_complex()?);
            match self.bump() {
                None => break,
                Some(',') => continue,
                Some(c) => return Err(self.error(format!("unexpected '{}'", c))),
            }
        }

        Ok(SelectorList { selectors })
    }

    fn parse_complex(&mut self) -> Result<ComplexSelector, DocumentError> {
        let mut compounds = vec![self.parse_compound()?];
        let mut combinators = Vec::new();

        loop {
            let had_whitespace = self.skip_whitespace();
            let combinator = match self.peek() {
                None | Some(',') => break,
                Some('>') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    Combinator::Child
                }
                Some('+') | Some('~') => {
                    return Err(self.error("sibling combinators are not supported"));
                }
                Some(_) if had_whitespace => Combinator::Descendant,
                Some(c) => return Err(self.error(format!("unexpected '{}'", c))),
            };

            if matches!(self.peek(), None | Some(',') | Some('>')) {
                return Err(self.error("dangling combinator"));
            }
            combinators.push(combinator);
            compounds.push(self.parse_compound()?);
        }

        Ok(ComplexSelector {
            compounds,
            combinators,
        })
    }

    fn parse_compound(&mut self) -> Result<Compound, DocumentError> {
        let mut compound = Compound::default();
        let mut universal = false;

        match self.peek() {
            Some('*') => {
                self.pos += 1;
                universal = true;
            }
            Some(c) if is_ident_start(c) => {
                compound.tag = Some(self.parse_ident()?.to_ascii_lowercase());
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    compound.ids.push(self.parse_ident()?);
                }
                Some('.') => {
                    self.pos += 1;
                    compound.classes.push(self.parse_ident()?);
                }
                Some('[') => {
                    self.pos += 1;
                    compound.attributes.push(self.parse_attribute()?);
                }
                Some(':') => return Err(self.error("pseudo-classes are not supported")),
                _ => break,
            }
        }

        if compound.is_empty() && !universal {
            return Err(match self.peek() {
                Some(c) => self.error(format!("unexpected '{}'", c)),
                None => self.error("expected a selector"),
            });
        }
        Ok(compound)
    }

    fn parse_ident(&mut self) -> Result<String, DocumentError> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error("expected an identifier"));
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn parse_attribute(&mut self) -> Result<AttributeSelector, DocumentError> {
        self.skip_whitespace();
        let name = self.parse_ident()?.to_ascii_lowercase();
        self.skip_whitespace();

        let value = match self.bump() {
            Some(']') => return Ok(AttributeSelector { name, value: None }),
            Some('=') => {
                self.skip_whitespace();
                let value = match self.peek() {
                    Some(quote @ ('"' | '\'')) => {
                        self.pos += 1;
                        self.parse_quoted(quote)?
                    }
                    _ => self.parse_ident()?,
                };
                self.skip_whitespace();
                value
            }
            Some('~' | '|' | '^' | '$' | '*') => {
                return Err(self.error("attribute operators other than '=' are not supported"));
            }
            Some(c) => return Err(self.error(format!("unexpected '{}' in attribute selector", c))),
            None => return Err(self.error("unterminated attribute selector")),
        };

        match self.bump() {
            Some(']') => Ok(AttributeSelector {
                name,
                value: Some(value),
            }),
            Some(c) => Err(self.error(format!("unexpected '{}' in attribute selector", c))),
            None => Err(self.error("unterminated attribute selector")),
        }
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String, DocumentError> {
        let mut value = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(value),
                Some('\\') => match self.bump() {
                    Some(escaped) => value.push(escaped),
                    None => return Err(self.error("unterminated string")),
                },
                Some(c) => value.push(c),
                None => return Err(self.error("unterminated string")),
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-' || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii()
}
