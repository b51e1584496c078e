//! Property-based tests for shell quoting and launch command assembly.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use wildfly_buildpack::domain::LaunchCommand;
use wildfly_buildpack::domain::command::shell_quote;
use wildfly_buildpack::domain::download::sanitize_uri;

/// Undo `shell_quote` the way a POSIX shell would for a single word.
fn unquote(word: &str) -> String {
    let mut out = String::new();
    let mut in_quotes = false;
    let mut chars = word.chars();
    while let Some(c) = chars.next() {
        match c {
            '\'' => in_quotes = !in_quotes,
            '\\' if !in_quotes => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            other => out.push(other),
        }
    }
    out
}

proptest! {
    /// Words made only of safe characters pass through unchanged.
    #[test]
    fn prop_safe_words_are_not_quoted(word in "[A-Za-z0-9_./=:,+@%-]{1,40}") {
        prop_assert_eq!(shell_quote(&word), word);
    }

    /// Quoting is reversible by the shell, whatever the input.
    #[test]
    fn prop_quoting_round_trips_through_shell_rules(word in "\\PC{0,40}") {
        prop_assert_eq!(unquote(&shell_quote(&word)), word);
    }

    /// Quoted output never contains an unescaped space outside quotes.
    #[test]
    fn prop_quoted_word_is_a_single_shell_word(word in "[a-z ]{1,20} [a-z ]{0,20}") {
        let quoted = shell_quote(&word);
        prop_assert!(quoted.starts_with('\''));
        prop_assert!(quoted.ends_with('\''));
    }

    /// Shell tokens are joined verbatim with single spaces; empty ones vanish.
    #[test]
    fn prop_command_line_joins_non_empty_tokens(
        tokens in proptest::collection::vec("[A-Za-z$=/._-]{0,12}", 0..8)
    ) {
        let line = tokens
            .iter()
            .fold(LaunchCommand::new(), |cmd, t| cmd.shell(t.as_str()))
            .to_command_line();
        let expected: Vec<&str> = tokens.iter().map(String::as_str).filter(|t| !t.is_empty()).collect();
        prop_assert_eq!(line, expected.join(" "));
    }

    /// Credentials never survive sanitising.
    #[test]
    fn prop_sanitize_uri_drops_credentials(
        user in "[a-z]{1,10}",
        password in "[a-z0-9]{6,12}",
        host in "[a-z]{3,10}\\.example\\.com",
    ) {
        let uri = format!("https://{user}:{password}@{host}/wildfly.zip");
        let shown = sanitize_uri(&uri);
        prop_assert_eq!(shown, format!("https://{host}/wildfly.zip"));
    }
}

#[test]
fn literal_tokens_are_quoted_and_shell_tokens_are_not() {
    let line = LaunchCommand::new()
        .shell("JAVA_OPTS=$JAVA_OPTS")
        .literal("-Dmessage=hello world")
        .to_command_line();
    assert_eq!(line, "JAVA_OPTS=$JAVA_OPTS '-Dmessage=hello world'");
}
