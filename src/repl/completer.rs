use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::repl::commands::COMMAND_NAMES;
use crate::viewer::Tab;

#[derive(Default)]
pub struct ReplHelper;

impl Helper for ReplHelper {}
impl Validator for ReplHelper {}
impl Highlighter for ReplHelper {}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let trimmed = line.trim();
        if !trimmed.starts_with('/') || trimmed.contains(' ') {
            return None;
        }
        COMMAND_NAMES
            .iter()
            .find(|name| name.starts_with(trimmed) && **name != trimmed)
            .map(|name| name[trimmed.len()..].to_string())
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let trimmed = prefix.trim_start();
        Ok(complete_input(trimmed, pos))
    }
}

/// Candidates for the text typed so far; `pos` is the cursor offset in the full line.
fn complete_input(trimmed: &str, pos: usize) -> (usize, Vec<Pair>) {
    if !trimmed.starts_with('/') {
        return (0, vec![]);
    }

    // Past the command name: only /tab takes an argument.
    if let Some(space_idx) = trimmed.find(' ') {
        let cmd = &trimmed[..space_idx];
        let arg_prefix = trimmed[space_idx..].trim_start();
        let arg_start = pos - arg_prefix.len();

        let matches = match cmd {
            "/tab" => Tab::ALL
                .iter()
                .map(|t| t.slug())
                .filter(|slug| slug.starts_with(&arg_prefix.to_lowercase()))
                .map(pair)
                .collect(),
            _ => vec![],
        };
        return (arg_start, matches);
    }

    let start = pos - trimmed.len();
    let matches = COMMAND_NAMES
        .iter()
        .filter(|name| name.starts_with(trimmed))
        .map(|name| pair(name))
        .collect();
    (start, matches)
}

fn pair(text: &str) -> Pair {
    Pair {
        display: text.to_string(),
        replacement: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(line: &str) -> (usize, Vec<String>) {
        let (start, pairs) = complete_input(line.trim_start(), line.len());
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn test_completes_command_names() {
        let (start, names) = replacements("/ta");
        assert_eq!(start, 0);
        assert_eq!(names, vec!["/tab", "/tabs"]);
    }

    #[test]
    fn test_completes_tab_slugs() {
        let (start, names) = replacements("/tab fin");
        assert_eq!(start, 5);
        assert_eq!(names, vec!["financials"]);
    }

    #[test]
    fn test_no_completion_for_plain_text() {
        assert!(replacements("hello").1.is_empty());
        assert!(replacements("/next x").1.is_empty());
    }
}
