//! Pre-request script translation
//!
//! Only literal `pm.environment.set("NAME", "VALUE")` statements are
//! recognized; every other line of a pre-request script is ignored.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

use super::variables::ts_quoted;

static SETTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"pm\.environment\.set\(['"`](.+?)['"`],\s*['"`](.+?)['"`]\)"#)
        .expect("valid env setter regex")
});

/// Collect `NAME -> VALUE` pairs from environment setters, keyed by the
/// uppercased name as a TypeScript identifier. A later setter for the same
/// name replaces the value.
pub fn extract_setters(script: &str) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();

    for caps in SETTER_RE.captures_iter(script) {
        vars.insert(setter_identifier(&caps[1]), caps[2].to_string());
    }

    vars
}

/// Uppercase `name` and map characters not allowed in an identifier to `_`
fn setter_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Render setters as constant declarations placed at the top of a test body
pub fn render_setters(setters: &IndexMap<String, String>) -> Vec<String> {
    setters
        .iter()
        .map(|(name, value)| format!("const {} = {};", name, ts_quoted(value)))
        .collect()
}
