//! Structured launch-command builder.
//!
//! Commands are assembled as an ordered list of tokens and serialized to a
//! single shell line only at the end, so quoting lives in one place.

/// One word of a shell command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Emitted verbatim; the shell expands `$VARS` inside it.
    Shell(String),
    /// Emitted as a single word; quoted when it contains shell metacharacters.
    Literal(String),
}

impl Token {
    fn render(&self) -> String {
        match self {
            Token::Shell(s) => s.clone(),
            Token::Literal(s) => shell_quote(s),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Token::Shell(s) | Token::Literal(s) => s.is_empty(),
        }
    }
}

/// Ordered token list for a process launch line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchCommand {
    tokens: Vec<Token>,
}

impl LaunchCommand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shell(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(Token::Shell(token.into()));
        self
    }

    #[must_use]
    pub fn literal(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(Token::Literal(token.into()));
        self
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Serialize to one line. Empty tokens are dropped.
    #[must_use]
    pub fn to_command_line(&self) -> String {
        self.tokens
            .iter()
            .filter(|t| !t.is_empty())
            .map(Token::render)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quote `word` for POSIX `sh` if it contains anything but safe characters.
#[must_use]
pub fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
