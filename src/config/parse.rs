//! Parser for line-oriented `KEY=VALUE` env files.
//!
//! Values are taken literally: `$VAR` and `${VAR}` are never expanded.
//! Double-quoted values understand `\n`, `\r`, `\t`, `\"` and `\\` and may
//! span lines; single-quoted values are verbatim.

use thiserror::Error;

use super::source::EnvMap;

/// A syntax error located at a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct SyntaxError {
    pub line: usize,
    pub reason: String,
}

impl SyntaxError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Parses env file contents into a mapping.
///
/// A key repeated within the same input keeps its last value.
pub fn parse_env(input: &str) -> Result<EnvMap, SyntaxError> {
    let mut map = EnvMap::new();
    let mut lines = input.lines().enumerate().map(|(i, l)| (i + 1, l));

    while let Some((line_no, raw)) = lines.next() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = strip_export(line);
        let (key, after_eq) = line
            .split_once('=')
            .ok_or_else(|| SyntaxError::new(line_no, "expected KEY=VALUE"))?;

        let key = key.trim();
        validate_key(key).map_err(|reason| SyntaxError::new(line_no, reason))?;

        let trimmed = after_eq.trim_start();
        let value = match trimmed.chars().next() {
            Some('\'') => single_quoted(&trimmed[1..], line_no)?,
            Some('"') => double_quoted(&trimmed[1..], line_no, &mut lines)?,
            _ => unquoted(after_eq),
        };

        map.insert(key.to_string(), value);
    }

    Ok(map)
}

/// Drops a leading `export` keyword, as written in shell-sourceable files.
fn strip_export(line: &str) -> &str {
    line.strip_prefix("export")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
        .unwrap_or(line)
}

fn validate_key(key: &str) -> Result<(), String> {
    let first = key.chars().next().ok_or_else(|| "empty key".to_string())?;
    if first.is_ascii_digit() {
        return Err(format!("key '{key}' must not start with a digit"));
    }
    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
    {
        return Err(format!("invalid character {bad:?} in key '{key}'"));
    }
    Ok(())
}

/// An unquoted value runs to the end of the line or to a `#` preceded by
/// whitespace.
fn unquoted(after_eq: &str) -> String {
    let mut end = after_eq.len();
    let mut prev_ws = false;
    for (i, ch) in after_eq.char_indices() {
        if ch == '#' && prev_ws {
            end = i;
            break;
        }
        prev_ws = ch.is_whitespace();
    }
    after_eq[..end].trim().to_string()
}

fn single_quoted(body: &str, line: usize) -> Result<String, SyntaxError> {
    let close = body
        .find('\'')
        .ok_or_else(|| SyntaxError::new(line, "unterminated single-quoted value"))?;
    check_trailing(&body[close + 1..], line)?;
    Ok(body[..close].to_string())
}

fn double_quoted<'a>(
    first: &'a str,
    line: usize,
    rest: &mut impl Iterator<Item = (usize, &'a str)>,
) -> Result<String, SyntaxError> {
    let mut value = String::new();
    let mut current = first;

    loop {
        let mut chars = current.char_indices();
        while let Some((i, ch)) = chars.next() {
            match ch {
                '"' => {
                    check_trailing(&current[i + 1..], line)?;
                    return Ok(value);
                }
                '\\' => match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 'r')) => value.push('\r'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, c @ ('"' | '\\'))) => value.push(c),
                    Some((_, c)) => {
                        value.push('\\');
                        value.push(c);
                    }
                    None => value.push('\\'),
                },
                c => value.push(c),
            }
        }

        // Closing quote not on this line: the value continues.
        match rest.next() {
            Some((_, next)) => {
                value.push('\n');
                current = next;
            }
            None => return Err(SyntaxError::new(line, "unterminated double-quoted value")),
        }
    }
}

fn check_trailing(after_quote: &str, line: usize) -> Result<(), SyntaxError> {
    let trailing = after_quote.trim();
    if trailing.is_empty() || trailing.starts_with('#') {
        Ok(())
    } else {
        Err(SyntaxError::new(
            line,
            format!("unexpected text after quoted value: '{trailing}'"),
        ))
    }
}
