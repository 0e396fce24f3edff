//! Keyword and symbol tables.
//!
//! A [`Grammar`] is the immutable lexical configuration the lexer works
//! from: which identifiers are reserved, and which operator and punctuation
//! strings exist. The default is Decaf's; other tables can be loaded from
//! TOML:
//!
//! ```toml
//! keywords = ["def", "int", "return"]
//! symbols = ["(", ")", "{", "}", ";", "=", "+"]
//! ```
//!
//! A field left out of the document keeps its Decaf default.

use std::path::Path;

use decafc_util::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::chars::{is_ident_continue, is_whitespace, is_identifier};
use crate::error::{GrammarError, GrammarResult};

/// Decaf reserved words.
///
/// The second half of the list is reserved for future use and has no
/// meaning in the language yet, but still cannot be used as an identifier.
pub const DECAF_KEYWORDS: &[&str] = &[
    "bool", "break", "continue", "def", "else", "false", "if", "int", "return", "true", "void",
    "while",
    // reserved
    "callout", "class", "double", "extends", "float", "for", "implements", "interface", "new",
    "null", "string", "this",
];

/// Decaf operators and punctuation.
pub const DECAF_SYMBOLS: &[&str] = &[
    "(", ")", "[", "]", "{", "}", ",", ";", "=", "+", "-", "*", "/", "%", "<", ">", "<=", ">=",
    "==", "!=", "&&", "||", "!",
];

/// Serialized form of a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GrammarConfig {
    /// Reserved words.
    #[serde(default = "default_keywords")]
    keywords: Vec<String>,

    /// Operators and punctuation.
    #[serde(default = "default_symbols")]
    symbols: Vec<String>,
}

fn default_keywords() -> Vec<String> {
    DECAF_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_symbols() -> Vec<String> {
    DECAF_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Keyword and symbol lookup tables.
///
/// # Example
///
/// ```
/// use decafc_lex::Grammar;
///
/// let grammar = Grammar::decaf();
/// assert!(grammar.is_keyword("def"));
/// assert!(!grammar.is_keyword("int3"));
/// assert_eq!(grammar.match_symbol("<= 4"), Some("<="));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    /// Reserved words, compared case-sensitively.
    keywords: FxHashSet<String>,

    /// Symbols, longest first so the first prefix match is the longest.
    symbols: Vec<String>,
}

impl Grammar {
    /// Builds a grammar from keyword and symbol lists.
    ///
    /// Duplicates are ignored. Fails with [`GrammarError::Invalid`] when a
    /// keyword is not an identifier, or a symbol is empty, contains
    /// whitespace, identifier characters or `"`, or starts with the comment
    /// marker `//`.
    pub fn new<K, S>(keywords: K, symbols: S) -> GrammarResult<Self>
    where
        K: IntoIterator,
        K::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let mut keyword_set = FxHashSet::default();
        for keyword in keywords {
            let keyword = keyword.into();
            if !is_identifier(&keyword) {
                return Err(GrammarError::Invalid(format!(
                    "keyword {:?} is not an identifier",
                    keyword
                )));
            }
            keyword_set.insert(keyword);
        }

        let mut symbol_list: Vec<String> = Vec::new();
        for symbol in symbols {
            let symbol = symbol.into();
            validate_symbol(&symbol)?;
            if !symbol_list.contains(&symbol) {
                symbol_list.push(symbol);
            }
        }
        symbol_list.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Ok(Self {
            keywords: keyword_set,
            symbols: symbol_list,
        })
    }

    /// Returns Decaf's keyword and symbol tables.
    pub fn decaf() -> Self {
        Self {
            keywords: default_keywords().into_iter().collect(),
            symbols: {
                let mut symbols = default_symbols();
                symbols.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
                symbols
            },
        }
    }

    /// Parses a grammar from a TOML document.
    pub fn from_toml_str(content: &str) -> GrammarResult<Self> {
        let config: GrammarConfig = toml::from_str(content)?;
        Self::new(config.keywords, config.symbols)
    }

    /// Loads a grammar from a TOML file.
    pub fn load_from_path(path: &Path) -> GrammarResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GrammarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded grammar file");
        Self::from_toml_str(&content)
    }

    /// Serializes the grammar back to TOML, keywords sorted alphabetically.
    pub fn to_toml_string(&self) -> GrammarResult<String> {
        let mut keywords: Vec<String> = self.keywords.iter().cloned().collect();
        keywords.sort();
        let config = GrammarConfig {
            keywords,
            symbols: self.symbols.clone(),
        };
        toml::to_string_pretty(&config).map_err(|e| {
            GrammarError::Invalid(format!("failed to serialize grammar: {}", e))
        })
    }

    /// Returns true if `word` is a reserved keyword.
    #[inline]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Returns the longest symbol that `input` starts with.
    pub fn match_symbol<'g>(&'g self, input: &str) -> Option<&'g str> {
        self.symbols
            .iter()
            .find(|symbol| input.starts_with(symbol.as_str()))
            .map(String::as_str)
    }

    /// Iterates over the keywords in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Iterates over the symbols, longest first.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::decaf()
    }
}

fn validate_symbol(symbol: &str) -> GrammarResult<()> {
    if symbol.is_empty() {
        return Err(GrammarError::Invalid("empty symbol".to_string()));
    }
    if symbol.contains("//") {
        return Err(GrammarError::Invalid(format!(
            "symbol {:?} contains the comment marker",
            symbol
        )));
    }
    if let Some(c) = symbol
        .chars()
        .find(|&c| is_whitespace(c) || is_ident_continue(c) || c == '"')
    {
        return Err(GrammarError::Invalid(format!(
            "symbol {:?} contains {:?}",
            symbol, c
        )));
    }
    Ok(())
}
