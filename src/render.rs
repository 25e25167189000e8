//! Substitution-based template rendering.

use serde::ser::Serialize;

use crate::value::{to_value, Map, Value};
use crate::Result;

const BEGIN_EXPR: &str = "{{";
const END_EXPR: &str = "}}";
const BEGIN_BLOCK: &str = "{%";
const END_BLOCK: &str = "%}";

/// A template backed by its source text.
///
/// Rendering happens in three passes over the source: scalar references like
/// `{{ name }}` are substituted first, then `{% for item in list %}` and
/// `{% if flag %}` blocks are expanded in a single left-to-right pass, and
/// finally any remaining `{% .. %}` and `{{ .. }}` spans are removed. A
/// reference that cannot be resolved therefore disappears from the output
/// rather than raising an error.
///
/// Blocks do not nest: a directive inside the body of another block is not
/// interpreted, it is dropped by the final pass while the text around it is
/// kept.
///
/// # Examples
///
/// ```
/// use folio::{value, Template};
///
/// let t = Template::new("Hello {{ name }}!");
/// let out = t.render_value(&value!({ name: "World" }));
/// assert_eq!(out, "Hello World!");
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    /// Construct a new template.
    #[inline]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Returns the original template source.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render the template using the given context.
    ///
    /// Rendering never fails: unresolved references and malformed directives
    /// are removed from the output. A context that is not a map renders the
    /// same as an empty map.
    pub fn render_value(&self, ctx: &Value) -> String {
        let empty = Map::new();
        let ctx = match ctx {
            Value::Map(map) => map,
            _ => &empty,
        };
        let mut scalars = String::with_capacity(self.source.len());
        replace_refs(&mut scalars, &self.source, |path| {
            ctx.get(path).and_then(Value::scalar_string)
        });
        let expanded = expand_blocks(&scalars, ctx);
        cleanup(&expanded)
    }

    /// Render the template using any serializable context.
    ///
    /// This only fails if the context cannot be converted to a [`Value`].
    pub fn render<S>(&self, ctx: S) -> Result<String>
    where
        S: Serialize,
    {
        let ctx = to_value(ctx)?;
        Ok(self.render_value(&ctx))
    }
}

/// Substitute every resolvable `{{ path }}` in `text`, appending to `out`.
///
/// References are rigid: exactly one space on each side of the path. Anything
/// else is emitted untouched, as is any reference the resolver returns `None`
/// for. Substituted text is never rescanned.
fn replace_refs<F>(out: &mut String, text: &str, resolve: F)
where
    F: Fn(&str) -> Option<String>,
{
    let mut i = 0;
    while let Some(j) = find_at(text, i, BEGIN_EXPR) {
        out.push_str(&text[i..j]);
        match ref_token(text, j) {
            Some((path, end)) => {
                match resolve(path) {
                    Some(s) => out.push_str(&s),
                    None => out.push_str(&text[j..end]),
                }
                i = end;
            }
            None => {
                out.push_str(BEGIN_EXPR);
                i = j + BEGIN_EXPR.len();
            }
        }
    }
    out.push_str(&text[i..]);
}

/// Parse a `{{ path }}` reference starting at `begin`.
///
/// Returns the path and the offset one past the closing braces.
fn ref_token(text: &str, begin: usize) -> Option<(&str, usize)> {
    let inner = begin + BEGIN_EXPR.len();
    if !text[inner..].starts_with(' ') {
        return None;
    }
    let path_start = inner + 1;
    let close = find_at(text, path_start, " }}")?;
    let path = &text[path_start..close];
    is_path(path).then_some((path, close + 3))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Header<'a> {
    For { var: &'a str, list: &'a str },
    If { name: &'a str },
    EndFor,
    EndIf,
}

/// Expand `{% for .. %}` and `{% if .. %}` blocks in a single pass.
///
/// Each directive pairs with the nearest closer of its kind to the right.
/// Headers that cannot be parsed, or that never find a closer, are dropped
/// while the surrounding text is kept. Expanded bodies are not rescanned for
/// further directives.
fn expand_blocks(text: &str, ctx: &Map<String, Value>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while let Some(j) = find_at(text, i, BEGIN_BLOCK) {
        out.push_str(&text[i..j]);
        let (content, after) = match block_token(text, j) {
            Some(tok) => tok,
            None => {
                // unterminated `{%`, emit the rest untouched
                out.push_str(&text[j..]);
                return out;
            }
        };
        i = match parse_header(content) {
            Some(Header::For { var, list }) => match find_closer(text, after, Header::EndFor) {
                Some((body_end, block_end)) => {
                    expand_loop(&mut out, &text[after..body_end], var, ctx.get(list));
                    block_end
                }
                None => after,
            },
            Some(Header::If { name }) => match find_closer(text, after, Header::EndIf) {
                Some((body_end, block_end)) => {
                    if ctx.get(name).is_some_and(Value::is_truthy) {
                        out.push_str(&text[after..body_end]);
                    }
                    block_end
                }
                None => after,
            },
            // stray closers and unknown directives are dropped
            _ => after,
        };
    }
    out.push_str(&text[i..]);
    out
}

/// Parse the `{% .. %}` token starting at `begin`.
///
/// Returns the raw header content and the offset one past the closing `%}`.
fn block_token(text: &str, begin: usize) -> Option<(&str, usize)> {
    let inner = begin + BEGIN_BLOCK.len();
    let close = find_at(text, inner, END_BLOCK)?;
    Some((&text[inner..close], close + END_BLOCK.len()))
}

fn parse_header(content: &str) -> Option<Header<'_>> {
    let words: Vec<&str> = content.split_whitespace().collect();
    match words[..] {
        ["for", var, "in", list] if is_ident(var) && is_ident(list) => {
            Some(Header::For { var, list })
        }
        ["if", name] if is_ident(name) => Some(Header::If { name }),
        ["endfor"] => Some(Header::EndFor),
        ["endif"] => Some(Header::EndIf),
        _ => None,
    }
}

/// Find the nearest block token parsing as `closer`, at or after `from`.
///
/// Returns the offsets of the closer's `{%` and of the end of its `%}`. The
/// scan advances two bytes at a time on a miss so that a closer whose opening
/// braces sit inside an earlier malformed token is still found.
fn find_closer(text: &str, from: usize, closer: Header<'_>) -> Option<(usize, usize)> {
    let mut pos = from;
    while let Some(j) = find_at(text, pos, BEGIN_BLOCK) {
        if let Some((content, after)) = block_token(text, j) {
            if parse_header(content) == Some(closer) {
                return Some((j, after));
            }
        }
        pos = j + BEGIN_BLOCK.len();
    }
    None
}

/// Emit one copy of `body` per list element, resolving loop references.
///
/// A missing or non-list value expands to nothing.
fn expand_loop(out: &mut String, body: &str, var: &str, list: Option<&Value>) {
    let items = match list {
        Some(Value::List(items)) => items,
        Some(_) | None => return,
    };
    for item in items {
        replace_refs(out, body, |path| resolve_item(path, var, item));
    }
}

/// Resolve `var` or `var.field` against the current loop element.
fn resolve_item(path: &str, var: &str, item: &Value) -> Option<String> {
    if path == var {
        return item.scalar_string();
    }
    let field = path.strip_prefix(var)?.strip_prefix('.')?;
    match item {
        Value::Map(map) => map.get(field)?.scalar_string(),
        _ => None,
    }
}

/// Remove leftover `{% .. %}` and then `{{ .. }}` spans.
fn cleanup(text: &str) -> String {
    let out = strip_spans(text, BEGIN_BLOCK, END_BLOCK);
    strip_spans(&out, BEGIN_EXPR, END_EXPR)
}

/// Delete every shortest `begin ..= end` span, newlines included.
///
/// A `begin` with no following `end` is kept as literal text.
fn strip_spans(text: &str, begin: &str, end: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while let Some(j) = find_at(text, i, begin) {
        out.push_str(&text[i..j]);
        match find_at(text, j + begin.len(), end) {
            Some(k) => i = k + end.len(),
            None => {
                out.push_str(&text[j..]);
                return out;
            }
        }
    }
    out.push_str(&text[i..]);
    out
}

fn find_at(text: &str, from: usize, needle: &str) -> Option<usize> {
    text[from..].find(needle).map(|i| from + i)
}

fn is_ident_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

fn is_ident_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => is_ident_start(c) && chars.all(is_ident_continue),
        None => false,
    }
}

fn is_path(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_ident)
}
