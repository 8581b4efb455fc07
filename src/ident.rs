//! Identifier sanitization
//!
//! Maps arbitrary file and directory names to identifiers that are valid in the
//! generated source. The character denylist and reserved words are data, so the
//! same rules engine can target other identifier syntaxes.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Characters replaced with `_`.
pub const DEFAULT_INVALID_CHARS: &str = ".- ()={}[]+,#~!@$%^&*:;\"<>/|\\'";

/// Name used when nothing usable is left.
pub const DEFAULT_EMPTY_NAME: &str = "empty";

/// C# keywords, plus the contextual `async`, `await`, `var`, `dynamic` and `yield`.
pub const CSHARP_RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
    "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this",
    "throw", "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort",
    "using", "virtual", "void", "volatile", "while", "async", "await", "var", "dynamic",
    "yield",
];

/// Identifier validity rules for one target syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRules {
    invalid_chars: HashSet<char>,
    reserved_words: HashSet<String>,
    empty_name: String,
}

impl Default for IdentifierRules {
    fn default() -> Self {
        Self::csharp()
    }
}

impl IdentifierRules {
    pub fn new<I, S>(invalid_chars: &str, reserved_words: I, empty_name: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            invalid_chars: invalid_chars.chars().collect(),
            reserved_words: reserved_words.into_iter().map(Into::into).collect(),
            empty_name: empty_name.to_string(),
        }
    }

    /// Rules for C# identifiers.
    pub fn csharp() -> Self {
        Self::new(
            DEFAULT_INVALID_CHARS,
            CSHARP_RESERVED_WORDS.iter().copied(),
            DEFAULT_EMPTY_NAME,
        )
    }

    fn is_invalid(&self, c: char) -> bool {
        self.invalid_chars.contains(&c)
            || c.is_control()
            || matches!(c, '\u{2028}' | '\u{2029}')
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved_words.contains(word)
    }

    pub fn empty_name(&self) -> &str {
        &self.empty_name
    }

    /// Map `name` to a valid identifier.
    ///
    /// Denylisted characters become `_`, as do control characters and the
    /// Unicode line and paragraph separators. A leading numeric character gets
    /// a `_` prefix, and so does an exact reserved word. The guards run in that
    /// order; once the digit guard fires the name starts with `_` and can no
    /// longer be a keyword, so at most one underscore is ever prepended.
    ///
    /// "Numeric" is [`char::is_numeric`]: decimal digits in any script, plus
    /// letter numbers (`Ⅻ`) and other numbers (`½`). Neither of the latter
    /// two can start a C# identifier on its own, so prefixing them is safe.
    pub fn sanitize(&self, name: &str) -> String {
        if name.is_empty() {
            return self.empty_name.clone();
        }

        let mut ident: String = name
            .chars()
            .map(|c| if self.is_invalid(c) { '_' } else { c })
            .collect();

        if ident.is_empty() {
            return self.empty_name.clone();
        }

        if ident.chars().next().is_some_and(char::is_numeric) {
            ident.insert(0, '_');
        }

        if self.is_reserved(&ident) {
            ident.insert(0, '_');
        }

        ident
    }
}

/// Sanitize with the default C# rules.
pub fn sanitize(name: &str) -> String {
    static RULES: OnceLock<IdentifierRules> = OnceLock::new();
    RULES.get_or_init(IdentifierRules::csharp).sanitize(name)
}
