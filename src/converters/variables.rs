//! Variable discovery and substitution
//!
//! Postman scripts and requests refer to environment values in two ways:
//! `{{name}}` placeholders in URLs, headers and bodies, and
//! `pm.environment.get("name")` calls inside scripts. Generated tests read
//! the same values from `process.env` using the uppercased name.

use indexmap::IndexSet;
use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("valid placeholder regex"));

static ENV_GETTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"pm\.environment\.get\(['"`](\w+)['"`]\)"#).expect("valid env getter regex")
});

/// Where a variable reference was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableContext {
    Url,
    Header,
    Body,
    Script,
}

impl fmt::Display for VariableContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableContext::Url => write!(f, "url"),
            VariableContext::Header => write!(f, "header"),
            VariableContext::Body => write!(f, "body"),
            VariableContext::Script => write!(f, "script"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    pub name: String,
    pub used_in: VariableContext,
}

/// Find every `{{name}}` placeholder in `text`, duplicates included
pub fn extract_placeholders(text: &str, context: VariableContext) -> Vec<VariableReference> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .map(|caps| VariableReference {
            name: caps[1].to_string(),
            used_in: context,
        })
        .collect()
}

/// Find every `pm.environment.get("name")` call in `script`
pub fn extract_env_getters(script: &str) -> Vec<VariableReference> {
    ENV_GETTER_RE
        .captures_iter(script)
        .map(|caps| VariableReference {
            name: caps[1].to_string(),
            used_in: VariableContext::Script,
        })
        .collect()
}

/// Expression reading an environment variable at test run time
pub fn env_reference(name: &str) -> String {
    format!("process.env.{}", name.to_uppercase())
}

/// Replace each `{{name}}` with `${process.env.NAME}`
pub fn substitute(text: &str) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| format!("${{{}}}", env_reference(&caps[1])))
        .into_owned()
}

/// Replace each `pm.environment.get("name")` with `process.env.NAME`
pub fn substitute_env_getters(script: &str) -> String {
    ENV_GETTER_RE
        .replace_all(script, |caps: &Captures| env_reference(&caps[1]))
        .into_owned()
}

pub fn has_placeholders(text: &str) -> bool {
    PLACEHOLDER_RE.is_match(text)
}

/// Render `text` as a TypeScript string expression.
///
/// Text with placeholders becomes a template literal so the substituted
/// `${process.env.NAME}` references are interpolated; anything else is a
/// plain double-quoted string.
pub fn ts_string(text: &str) -> String {
    if has_placeholders(text) {
        ts_template(text)
    } else {
        ts_quoted(text)
    }
}

/// Render `text` as a template literal with placeholders substituted
pub fn ts_template(text: &str) -> String {
    format!("`{}`", substitute(&escape_template(text)))
}

/// Escape text for the inside of a template literal
pub fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Replace each `{{name}}` with a fixed string
pub fn replace_placeholders(text: &str, replacement: &str) -> String {
    PLACEHOLDER_RE
        .replace_all(text, regex::NoExpand(replacement))
        .into_owned()
}

/// Render `text` as a double-quoted string literal
pub fn ts_quoted(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Every variable name discovered during one conversion run.
///
/// Names are stored uppercased and deduplicated, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    names: IndexSet<String>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str) {
        self.names.insert(name.to_uppercase());
    }

    pub fn extend<I: IntoIterator<Item = VariableReference>>(&mut self, references: I) {
        for reference in references {
            tracing::trace!(name = %reference.name, used_in = %reference.used_in, "variable reference");
            self.insert(&reference.name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_uppercase())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Contents of an environment template file: one `NAME=` line per variable
    pub fn env_template(&self) -> String {
        self.names.iter().map(|name| format!("{}=\n", name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_placeholders_keeps_order_and_duplicates() {
        let refs = extract_placeholders(
            "{{base_url}}/users/{{userId}}?again={{base_url}}",
            VariableContext::Url,
        );
        let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["base_url", "userId", "base_url"]);
        assert!(refs.iter().all(|r| r.used_in == VariableContext::Url));
    }

    #[test]
    fn test_extract_placeholders_ignores_non_word_names() {
        assert!(extract_placeholders("{{not valid}} {{$guid}}", VariableContext::Body).is_empty());
        assert!(extract_placeholders("", VariableContext::Header).is_empty());
    }

    #[test]
    fn test_extract_env_getters_all_quote_styles() {
        let script = r#"
const a = pm.environment.get('token');
const b = pm.environment.get("user_id");
const c = pm.environment.get(`region`);
"#;
        let refs = extract_env_getters(script);
        let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["token", "user_id", "region"]);
        assert!(refs.iter().all(|r| r.used_in == VariableContext::Script));
    }

    #[test]
    fn test_substitute_uppercases_name_only() {
        assert_eq!(
            substitute("{{baseUrl}}/Users/{{id}}"),
            "${process.env.BASEURL}/Users/${process.env.ID}"
        );
        assert_eq!(substitute("no variables"), "no variables");
    }

    #[test]
    fn test_substitute_leaves_no_placeholder() {
        let result = substitute("Bearer {{token}}");
        assert!(!result.contains("{{token}}"));
        assert_eq!(result.matches("process.env.TOKEN").count(), 1);
        assert_eq!(substitute(&result), result);
    }

    #[test]
    fn test_substitute_env_getters() {
        assert_eq!(
            substitute_env_getters("jsonData.id === pm.environment.get('userId')"),
            "jsonData.id === process.env.USERID"
        );
    }

    #[test]
    fn test_ts_string_quoting() {
        assert_eq!(ts_string("application/json"), "\"application/json\"");
        assert_eq!(ts_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(ts_string("Bearer {{token}}"), "`Bearer ${process.env.TOKEN}`");
        assert_eq!(ts_string("`{{a}}`"), "`\\`${process.env.A}\\``");
    }

    #[test]
    fn test_replace_placeholders() {
        assert_eq!(replace_placeholders(r#"{"id": {{ID}}}"#, "0"), r#"{"id": 0}"#);
    }

    #[test]
    fn test_variable_set_dedupes_case_insensitively() {
        let mut vars = VariableSet::new();
        vars.extend(extract_placeholders("{{base_url}} {{BASE_URL}}", VariableContext::Url));
        vars.insert("token");

        assert_eq!(vars.len(), 2);
        assert!(vars.contains("Base_Url"));
        assert_eq!(vars.env_template(), "BASE_URL=\nTOKEN=\n");
    }
}
