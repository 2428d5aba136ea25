//! Placeholder-tag grammar and matcher for docweave templates.
//!
//! A template tag is a delimited token such as `{{title}}` or `{{?rows}}`.
//! The text between the delimiters may start with one designated *sign*
//! character drawn from a configured set; two of those signs open and close
//! iteration blocks, the rest mark the tag for specialized render policies.
//! A token with no leading sign character is a plain value tag.
//!
//! [`TagSyntax`] carries the whole grammar (delimiters, sign set, block
//! pair) as an explicit immutable value; resolvers thread it through every
//! call instead of consulting global state.
//!
//! # Example
//!
//! ```rust
//! use docweave_tagparser::{Sign, TagKind, TagSyntax};
//!
//! let syntax = TagSyntax::default();
//!
//! let tag = syntax.match_tag("{{?rows}}").unwrap();
//! assert_eq!(tag.name(), "rows");
//! assert_eq!(tag.sign(), Sign::Marked('?'));
//! assert_eq!(syntax.kind(&tag), TagKind::BlockOpen);
//!
//! // Non-tag text never matches.
//! assert!(syntax.match_tag("plain prose").is_none());
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The sign position of a tag: one configured grammar character, or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// No sign character; the tag is a plain value placeholder.
    Plain,
    /// The tag's first character was one of the configured sign characters.
    Marked(char),
}

/// How a tag participates in block structure under a given [`TagSyntax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Opens an iteration block.
    BlockOpen,
    /// Closes the innermost open block.
    BlockClose,
    /// A leaf tag (plain, or signed for a non-block policy).
    Value,
}

/// A parsed template tag: its reconstructed source, sign, and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    source: String,
    name: String,
    sign: Sign,
}

impl Tag {
    /// The canonical source form, delimiters included (e.g. `{{?rows}}`).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The tag name with delimiters and sign stripped. May be empty for an
    /// unnamed tag such as `{{/}}`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sign extracted from the tag body, if any.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// The tag grammar: delimiters, sign characters, and the block sign pair.
///
/// Construct with [`TagSyntax::default`] for the stock `{{ }}` grammar or
/// through [`TagSyntax::builder`] to customize. The type (de)serializes so a
/// grammar can be loaded from configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSyntax {
    prefix: String,
    suffix: String,
    signs: BTreeSet<char>,
    block_open: char,
    block_close: char,
}

impl Default for TagSyntax {
    fn default() -> Self {
        Self {
            prefix: "{{".to_string(),
            suffix: "}}".to_string(),
            signs: ['@', '#', '*', '+', '?', '/'].into_iter().collect(),
            block_open: '?',
            block_close: '/',
        }
    }
}

impl TagSyntax {
    /// Starts a builder seeded with the default grammar.
    #[must_use]
    pub fn builder() -> TagSyntaxBuilder {
        TagSyntaxBuilder::new()
    }

    /// The opening delimiter (default `{{`).
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The closing delimiter (default `}}`).
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether `ch` belongs to the configured sign set.
    #[must_use]
    pub fn is_sign(&self, ch: char) -> bool {
        self.signs.contains(&ch)
    }

    /// Matches `text` as a whole against the tag pattern.
    ///
    /// The full text must be exactly `prefix body suffix`. The body is
    /// trimmed; a leading sign character becomes the tag's [`Sign`] and is
    /// stripped from the name. Returns `None` for anything else. Never fails
    /// and has no side effects.
    #[must_use]
    pub fn match_tag(&self, text: &str) -> Option<Tag> {
        let body = text
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;
        let token = body.trim();
        let (sign, name) = match token.chars().next() {
            Some(first) if self.signs.contains(&first) => {
                (Sign::Marked(first), &token[first.len_utf8()..])
            }
            _ => (Sign::Plain, token),
        };
        Some(Tag {
            source: format!("{}{}{}", self.prefix, token, self.suffix),
            name: name.to_string(),
            sign,
        })
    }

    /// Finds the first delimited tag occurrence inside `text`.
    ///
    /// Unlike [`match_tag`](Self::match_tag) the pattern may occur anywhere
    /// in the text; the returned slice includes the delimiters and can be
    /// fed back through `match_tag`.
    #[must_use]
    pub fn find_tag<'t>(&self, text: &'t str) -> Option<&'t str> {
        let start = text.find(self.prefix.as_str())?;
        let after = start + self.prefix.len();
        let end = after + text[after..].find(self.suffix.as_str())?;
        Some(&text[start..end + self.suffix.len()])
    }

    /// Classifies a tag's sign into open/close/value under this grammar.
    #[must_use]
    pub fn kind(&self, tag: &Tag) -> TagKind {
        match tag.sign() {
            Sign::Marked(sign) if sign == self.block_open => TagKind::BlockOpen,
            Sign::Marked(sign) if sign == self.block_close => TagKind::BlockClose,
            _ => TagKind::Value,
        }
    }
}

/// Builder for a customized [`TagSyntax`].
#[derive(Debug, Clone)]
pub struct TagSyntaxBuilder {
    syntax: TagSyntax,
}

impl TagSyntaxBuilder {
    fn new() -> Self {
        Self {
            syntax: TagSyntax::default(),
        }
    }

    /// Replaces the opening and closing delimiters.
    #[must_use]
    pub fn delimiters(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.syntax.prefix = prefix.into();
        self.syntax.suffix = suffix.into();
        self
    }

    /// Adds one sign character to the set.
    #[must_use]
    pub fn sign(mut self, sign: char) -> Self {
        self.syntax.signs.insert(sign);
        self
    }

    /// Replaces the whole sign set. The block pair is re-added on build.
    #[must_use]
    pub fn signs(mut self, signs: impl IntoIterator<Item = char>) -> Self {
        self.syntax.signs = signs.into_iter().collect();
        self
    }

    /// Sets the characters that open and close iteration blocks.
    #[must_use]
    pub fn block_signs(mut self, open: char, close: char) -> Self {
        self.syntax.block_open = open;
        self.syntax.block_close = close;
        self
    }

    /// Finishes the grammar. The block pair always belongs to the sign set.
    #[must_use]
    pub fn build(mut self) -> TagSyntax {
        self.syntax.signs.insert(self.syntax.block_open);
        self.syntax.signs.insert(self.syntax.block_close);
        self.syntax
    }
}
