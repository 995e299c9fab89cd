//! Pattern compilation and matching for the reference [`Route`](crate::Route).
//!
//! # Pattern syntax
//!
//! - literal text matches itself, case-sensitively
//! - `<name>` captures one segment: a non-empty run of characters up to the
//!   next `/ . , ; ?` or newline
//! - `:name` occupying the start of a segment is shorthand for `<name>`
//! - `( ... )` wraps an optional part; groups may nest
//!
//! Captures are possessive: a parameter always takes the longest run it can
//! and never gives characters back. Optional groups are tried first and
//! skipped only if the rest of the pattern then fails to match.
//!
//! ```ignore
//! let pattern = compile("blog/<id>(/<title>)")?;
//! assert!(pattern.match_url("blog/5", &no_constraints).is_some());
//! assert!(pattern.match_url("blog/5/hello", &no_constraints).is_some());
//! assert!(pattern.match_url("blog", &no_constraints).is_none());
//! ```

use crate::error::PatternError;
use crate::trace_log;
use std::borrow::Cow;

/// Characters that end a captured segment
const SEGMENT_BOUNDARIES: &[char] = &['/', '.', ',', ';', '?', '\n'];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Param(String),
    Group(Vec<Token>),
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: String,
    tokens: Vec<Token>,
    params: Vec<String>,
}

/// Parse `pattern` into a [`CompiledPattern`].
///
/// Leading and trailing slashes are ignored, so `"/blog/<id>/"` and
/// `"blog/<id>"` compile to the same thing.
pub fn compile(pattern: &str) -> Result<CompiledPattern, PatternError> {
    let source = pattern.trim_matches('/');
    let mut stack: Vec<Vec<Token>> = vec![Vec::new()];
    let mut params: Vec<String> = Vec::new();
    let mut chars = source.chars().peekable();
    let mut prev: Option<char> = None;

    while let Some(c) = chars.next() {
        match c {
            '(' => stack.push(Vec::new()),
            ')' => {
                let group = stack.pop().filter(|_| !stack.is_empty()).ok_or_else(|| {
                    PatternError::UnbalancedGroup {
                        pattern: pattern.to_string(),
                    }
                })?;
                current(&mut stack).push(Token::Group(group));
            }
            '<' => {
                let mut name = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '>' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }
                if !closed {
                    return Err(PatternError::Unterminated {
                        pattern: pattern.to_string(),
                    });
                }
                push_param(pattern, name, &mut params, &mut stack)?;
            }
            ':' if matches!(prev, None | Some('/' | '(')) => {
                let mut name = String::new();
                while let Some(&n) = chars.peek() {
                    if !(n.is_alphanumeric() || n == '_') {
                        break;
                    }
                    name.push(n);
                    chars.next();
                }
                push_param(pattern, name, &mut params, &mut stack)?;
            }
            _ => push_literal(current(&mut stack), c),
        }
        prev = Some(c);
    }

    if stack.len() != 1 {
        return Err(PatternError::UnbalancedGroup {
            pattern: pattern.to_string(),
        });
    }

    Ok(CompiledPattern {
        source: source.to_string(),
        tokens: stack.pop().unwrap_or_default(),
        params,
    })
}

fn current(stack: &mut [Vec<Token>]) -> &mut Vec<Token> {
    // The root frame is never popped, so the stack is never empty here.
    let last = stack.len() - 1;
    &mut stack[last]
}

fn push_literal(tokens: &mut Vec<Token>, c: char) {
    if let Some(Token::Literal(text)) = tokens.last_mut() {
        text.push(c);
    } else {
        tokens.push(Token::Literal(c.to_string()));
    }
}

fn push_param(
    pattern: &str,
    name: String,
    params: &mut Vec<String>,
    stack: &mut [Vec<Token>],
) -> Result<(), PatternError> {
    if name.is_empty() {
        return Err(PatternError::EmptyName {
            pattern: pattern.to_string(),
        });
    }
    if params.contains(&name) {
        return Err(PatternError::DuplicateParam {
            pattern: pattern.to_string(),
            name,
        });
    }
    params.push(name.clone());
    current(stack).push(Token::Param(name));
    Ok(())
}

/// Tokens still to be matched once the current slice is exhausted.
struct Continuation<'a> {
    tokens: &'a [Token],
    next: Option<&'a Continuation<'a>>,
}

impl CompiledPattern {
    /// The pattern text, without surrounding slashes.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of every parameter the pattern can capture, in pattern order.
    pub fn param_names(&self) -> &[String] {
        &self.params
    }

    /// Match a URL against the pattern.
    ///
    /// `accept` is consulted for every capture with `(name, value)`; returning
    /// `false` rejects that capture. Returns captured `(name, value)` pairs
    /// on success. Parameters inside skipped groups are simply absent.
    pub fn match_url(
        &self,
        url: &str,
        accept: &dyn Fn(&str, &str) -> bool,
    ) -> Option<Vec<(String, String)>> {
        let url = normalize_url(url);
        let mut captures = Vec::new();
        if match_tokens(&self.tokens, None, &url, accept, &mut captures) {
            trace_log!("pattern '{}' matched '{}'", self.source, url);
            Some(captures)
        } else {
            None
        }
    }
}

fn match_tokens<'a>(
    tokens: &'a [Token],
    next: Option<&'a Continuation<'a>>,
    input: &str,
    accept: &dyn Fn(&str, &str) -> bool,
    captures: &mut Vec<(String, String)>,
) -> bool {
    let Some((first, rest)) = tokens.split_first() else {
        return match next {
            Some(cont) => match_tokens(cont.tokens, cont.next, input, accept, captures),
            None => input.is_empty(),
        };
    };

    match first {
        Token::Literal(text) => input
            .strip_prefix(text.as_str())
            .is_some_and(|remaining| match_tokens(rest, next, remaining, accept, captures)),
        Token::Param(name) => {
            let len = input.find(SEGMENT_BOUNDARIES).unwrap_or(input.len());
            if len == 0 || !accept(name, &input[..len]) {
                return false;
            }
            captures.push((name.clone(), input[..len].to_string()));
            if match_tokens(rest, next, &input[len..], accept, captures) {
                true
            } else {
                captures.pop();
                false
            }
        }
        Token::Group(inner) => {
            let mark = captures.len();
            let after = Continuation { tokens: rest, next };
            if match_tokens(inner, Some(&after), input, accept, captures) {
                return true;
            }
            captures.truncate(mark);
            match_tokens(rest, next, input, accept, captures)
        }
    }
}

/// Reduce a URL to the form routes are matched against.
///
/// Drops any query string or fragment and strips surrounding slashes.
/// Returns `Cow::Borrowed` when nothing needs to change.
///
/// ```
/// use route_tester::matching::normalize_url;
///
/// assert_eq!(normalize_url("blog/5"), "blog/5");
/// assert_eq!(normalize_url("/blog/5/"), "blog/5");
/// assert_eq!(normalize_url("/blog/5?page=2#top"), "blog/5");
/// assert_eq!(normalize_url("/"), "");
/// ```
#[must_use]
pub fn normalize_url(url: &str) -> Cow<'_, str> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    if trimmed.len() == url.len() {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(trimmed.to_string())
    }
}
