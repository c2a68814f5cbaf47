use std::borrow::Cow;

/// How a single quote is escaped inside a quoted string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Dialect {
    /// `'` becomes `\'`
    #[default]
    Mysql,
    /// `'` becomes `''`
    Ansi,
}

impl Dialect {
    fn escaped_quote(self) -> &'static str {
        match self {
            Dialect::Mysql => r"\'",
            Dialect::Ansi => "''",
        }
    }
}

/// Escapes every single quote in `text`. No other character is touched, so
/// calling this twice on the same value double-escapes it.
pub fn escape(text: &str, dialect: Dialect) -> Cow<'_, str> {
    // Most corpus fields carry no quote at all.
    if memchr::memchr(b'\'', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace('\'', dialect.escaped_quote()))
}
