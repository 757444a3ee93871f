//! Playwright test generator for Postman collections
//!
//! Every top-level folder becomes one `*.spec.ts` file with a
//! `test.describe` block; every top-level request becomes a file with a
//! single test.

use serde_json::Value;
use std::collections::HashSet;

use super::assertions::{UNCONVERTED_MARKER, translate_test_script};
use super::grouping::{TestGroup, group_by_body};
use super::prerequest::{extract_setters, render_setters};
use super::variables::{
    VariableContext, escape_template, extract_env_getters, extract_placeholders,
    has_placeholders, replace_placeholders, ts_quoted, ts_string, ts_template,
};
use super::{ConvertOptions, Converter, GeneratedFile, GeneratedSuite, VariableSet, sanitize_filename};
use crate::models::collection::{Collection, Folder, Item, RequestItem};

const IMPORT_LINE: &str = "import { test, expect } from '@playwright/test';";
const INDENT: &str = "  ";

/// Methods with a dedicated `APIRequestContext` helper; others go through `fetch`
const SHORTHAND_METHODS: [&str; 6] = ["get", "post", "put", "patch", "delete", "head"];

/// Converter for generating Playwright test sources
#[derive(Debug, Clone, Default)]
pub struct PlaywrightConverter;

/// Rendered lines of one block plus the number of lines left for review
#[derive(Debug, Default)]
struct Rendered {
    lines: Vec<String>,
    unconverted: usize,
}

impl PlaywrightConverter {
    /// Create a new PlaywrightConverter
    pub fn new() -> Self {
        Self
    }

    /// Convert a JSON value to a TypeScript literal
    fn json_to_ts(value: &Value, indent: usize) -> String {
        let indent_str = INDENT.repeat(indent);
        let inner_indent = INDENT.repeat(indent + 1);

        match value {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => ts_string(s),
            Value::Array(arr) => {
                if arr.is_empty() {
                    "[]".to_string()
                } else {
                    let items: Vec<String> = arr
                        .iter()
                        .map(|v| format!("{}{}", inner_indent, Self::json_to_ts(v, indent + 1)))
                        .collect();
                    format!("[\n{}\n{}]", items.join(",\n"), indent_str)
                }
            }
            Value::Object(obj) => {
                if obj.is_empty() {
                    "{}".to_string()
                } else {
                    let items: Vec<String> = obj
                        .iter()
                        .map(|(k, v)| {
                            format!(
                                "{}{}: {}",
                                inner_indent,
                                ts_quoted(k),
                                Self::json_to_ts(v, indent + 1)
                            )
                        })
                        .collect();
                    format!("{{\n{}\n{}}}", items.join(",\n"), indent_str)
                }
            }
        }
    }

    /// Request body as a TypeScript expression.
    ///
    /// JSON bodies become object literals. Bodies that are only JSON once
    /// their placeholders are filled in are parsed at run time.
    fn render_body(raw: &str) -> String {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            return Self::json_to_ts(&value, 0);
        }

        if has_placeholders(raw) {
            let template = ts_template(raw).replace('\r', "\\r").replace('\n', "\\n");
            let probe = replace_placeholders(raw, "0");
            if serde_json::from_str::<Value>(&probe).is_ok() {
                return format!("JSON.parse({})", template);
            }
            return template;
        }

        ts_quoted(raw)
    }

    /// Generate the `const response = await request.<method>(...)` statement
    fn render_request_call(
        method: &str,
        url: &str,
        headers: &indexmap::IndexMap<String, String>,
        data: Option<&str>,
    ) -> Vec<String> {
        let method = method.to_lowercase();
        let (helper, explicit_method) = if SHORTHAND_METHODS.contains(&method.as_str()) {
            (method.as_str(), None)
        } else {
            ("fetch", Some(method.to_uppercase()))
        };

        let mut options = Vec::new();
        if let Some(ref explicit) = explicit_method {
            options.push(format!("method: {},", ts_quoted(explicit)));
        }
        if !headers.is_empty() {
            options.push("headers: {".to_string());
            for (key, value) in headers {
                options.push(format!("{}{}: {},", INDENT, ts_quoted(key), ts_string(value)));
            }
            options.push("},".to_string());
        }
        match data {
            Some("data") => options.push("data,".to_string()),
            Some(expr) => push_multiline(&mut options, "data: ", expr, ","),
            None => {}
        }

        let url = ts_string(url);
        if options.is_empty() {
            vec![format!("const response = await request.{}({});", helper, url)]
        } else {
            let mut lines = vec![format!(
                "const response = await request.{}({}, {{",
                helper, url
            )];
            lines.extend(indent(options));
            lines.push("});".to_string());
            lines
        }
    }

    /// Generate the statements inside a test callback
    fn render_test_body(item: &RequestItem, call: Vec<String>) -> Rendered {
        let mut lines = Vec::new();

        if let Some(script) = item.prerequest_script() {
            lines.extend(render_setters(&extract_setters(&script)));
        }

        lines.extend(call);
        lines.push(String::new());

        let translated = item
            .test_script()
            .map(|script| translate_test_script(&script))
            .unwrap_or_default();

        // An explicit status assertion may expect a non-2xx response
        if !translated.checks_status {
            lines.push("expect(response.ok()).toBeTruthy();".to_string());
        }
        lines.extend(translated.lines());

        Rendered {
            lines,
            unconverted: translated.unconverted_count(),
        }
    }

    /// Record every variable a request refers to
    fn collect_variables(item: &RequestItem, variables: &mut VariableSet) {
        let Some(request) = item.request.as_ref() else {
            return;
        };
        if let Some((_, url)) = item.endpoint() {
            variables.extend(extract_placeholders(url, VariableContext::Url));
        }
        for (key, value) in request.headers() {
            variables.extend(extract_placeholders(&key, VariableContext::Header));
            variables.extend(extract_placeholders(&value, VariableContext::Header));
        }
        if let Some(raw) = request.raw_body() {
            variables.extend(extract_placeholders(raw, VariableContext::Body));
        }
        for script in [item.prerequest_script(), item.test_script()]
            .into_iter()
            .flatten()
        {
            variables.extend(extract_env_getters(&script));
        }
    }

    /// Generate a single test for a request, or `None` if it lacks a method or URL
    fn render_request_test(item: &RequestItem, variables: &mut VariableSet) -> Option<Rendered> {
        let (method, url) = item.endpoint()?;
        let request = item.request.as_ref()?;

        Self::collect_variables(item, variables);

        let data = request.raw_body().map(Self::render_body);
        let call = Self::render_request_call(method, url, &request.headers(), data.as_deref());
        let body = Self::render_test_body(item, call);

        let mut lines = vec![format!(
            "test({}, async ({{ request }}) => {{",
            ts_quoted(&item.name)
        )];
        lines.extend(indent(body.lines));
        lines.push("});".to_string());

        Some(Rendered {
            lines,
            unconverted: body.unconverted,
        })
    }

    /// Generate a table-driven test for a group of requests.
    ///
    /// Scripts are taken from the first member.
    fn render_group(
        group: &TestGroup,
        items: &[Item],
        taken_names: &mut HashSet<String>,
        variables: &mut VariableSet,
    ) -> Rendered {
        let members: Vec<&RequestItem> = group
            .members
            .iter()
            .filter_map(|&position| match items.get(position) {
                Some(Item::Request(request)) => Some(request),
                _ => None,
            })
            .collect();
        let Some(first) = members.first() else {
            return Rendered::default();
        };

        for member in &members {
            Self::collect_variables(member, variables);
        }
        tracing::debug!(
            test = %first.name,
            members = members.len(),
            rows = group.rows.len(),
            "Grouped requests into a parameterized test"
        );

        let notes = Self::unapplied_script_notes(first, &members[1..]);

        let cases = cases_identifier(&first.name, taken_names);
        let mut lines = notes.clone();
        lines.push(format!("const {} = [", cases));
        let mut rows = Vec::new();
        for row in &group.rows {
            push_multiline(&mut rows, "", &Self::json_to_ts(row, 0), ",");
        }
        lines.extend(indent(rows));
        lines.push("];".to_string());
        lines.push(String::new());

        let call = Self::render_request_call(&group.method, &group.url, &group.headers, Some("data"));
        let body = Self::render_test_body(first, call);

        let mut test = vec![format!(
            "test(`{} ${{JSON.stringify(data)}}`, async ({{ request }}) => {{",
            escape_template(&first.name)
        )];
        test.extend(indent(body.lines));
        test.push("});".to_string());

        lines.push(format!("for (const data of {}) {{", cases));
        lines.extend(indent(test));
        lines.push("}".to_string());

        Rendered {
            lines,
            unconverted: body.unconverted + notes.len(),
        }
    }

    /// Review comments for group members whose own scripts differ from the
    /// ones rendered for the group
    fn unapplied_script_notes(first: &RequestItem, others: &[&RequestItem]) -> Vec<String> {
        let mut notes = Vec::new();
        for member in others {
            for (kind, applied, own) in [
                ("test script", first.test_script(), member.test_script()),
                ("pre-request script", first.prerequest_script(), member.prerequest_script()),
            ] {
                let own = own.as_deref().map(str::trim).filter(|script| !script.is_empty());
                if own.is_none() || own == applied.as_deref().map(str::trim) {
                    continue;
                }
                tracing::warn!(
                    request = %member.name,
                    grouped_with = %first.name,
                    "Grouped request has its own {}; it is not applied",
                    kind
                );
                notes.push(format!(
                    "{} {} of {} differs from {} and is not applied",
                    UNCONVERTED_MARKER,
                    kind,
                    ts_quoted(&member.name),
                    ts_quoted(&first.name)
                ));
            }
        }
        notes
    }

    /// Generate a `test.describe` block for a folder
    fn render_folder(folder: &Folder, variables: &mut VariableSet) -> Rendered {
        let groups = group_by_body(&folder.item);
        let mut taken_names = HashSet::new();
        let mut blocks = Vec::new();

        for group in &groups {
            blocks.push(Self::render_group(group, &folder.item, &mut taken_names, variables));
        }

        for (position, child) in folder.item.iter().enumerate() {
            if groups.iter().any(|group| group.covers(position)) {
                continue;
            }
            match child {
                Item::Request(request) => {
                    if let Some(block) = Self::render_request_test(request, variables) {
                        blocks.push(block);
                    } else {
                        tracing::debug!(request = %request.name, "Skipping request without method or URL");
                    }
                }
                Item::Folder(subfolder) => blocks.push(Self::render_folder(subfolder, variables)),
            }
        }

        let mut inner = Vec::new();
        let mut unconverted = 0;
        for (idx, block) in blocks.into_iter().enumerate() {
            if idx > 0 {
                inner.push(String::new());
            }
            inner.extend(block.lines);
            unconverted += block.unconverted;
        }

        let mut lines = vec![format!("test.describe({}, () => {{", ts_quoted(&folder.name))];
        lines.extend(indent(inner));
        lines.push("});".to_string());

        Rendered { lines, unconverted }
    }

    fn render_file(lines: &[String]) -> String {
        format!("{}\n\n{}\n", IMPORT_LINE, lines.join("\n"))
    }
}

impl Converter for PlaywrightConverter {
    type Output = GeneratedSuite;

    fn convert_collection(&self, collection: &Collection, options: &ConvertOptions) -> Self::Output {
        let mut variables = VariableSet::new();
        let mut files = Vec::new();
        let mut taken_files = HashSet::new();

        for item in &collection.item {
            let Some(mut file) = self.convert_item(item, &mut variables) else {
                tracing::debug!(item = %item.name(), "Skipping request without method or URL");
                continue;
            };

            let stem = file_stem(item.name());
            let mut suffix = 2;
            while !taken_files.insert(file.file_name.clone()) {
                file.file_name = format!("{}_{}.spec.ts", stem, suffix);
                suffix += 1;
            }

            tracing::debug!(file = %file.file_name, source = %file.source_name, "Generated test file");
            files.push(file);
        }

        let env_template = options
            .env_template
            .as_ref()
            .filter(|_| !variables.is_empty())
            .map(|name| (name.clone(), variables.env_template()));

        GeneratedSuite {
            files,
            variables,
            env_template,
        }
    }

    fn convert_item(&self, item: &Item, variables: &mut VariableSet) -> Option<GeneratedFile> {
        let rendered = match item {
            Item::Folder(folder) => Self::render_folder(folder, variables),
            Item::Request(request) => Self::render_request_test(request, variables)?,
        };

        Some(GeneratedFile {
            file_name: format!("{}.spec.ts", file_stem(item.name())),
            source_name: item.name().to_string(),
            contents: Self::render_file(&rendered.lines),
            unconverted_lines: rendered.unconverted,
        })
    }
}

fn file_stem(name: &str) -> String {
    if name.is_empty() {
        "unnamed".to_string()
    } else {
        sanitize_filename(name)
    }
}

fn indent(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("{}{}", INDENT, line)
            }
        })
        .collect()
}

/// Push a possibly multi-line expression, prefixing its first line and
/// suffixing its last
fn push_multiline(lines: &mut Vec<String>, prefix: &str, expr: &str, suffix: &str) {
    let parts: Vec<&str> = expr.split('\n').collect();
    let last = parts.len() - 1;
    for (idx, part) in parts.into_iter().enumerate() {
        let mut line = String::new();
        if idx == 0 {
            line.push_str(prefix);
        }
        line.push_str(part);
        if idx == last {
            line.push_str(suffix);
        }
        lines.push(line);
    }
}

/// camelCase identifier for a table of test cases, unique within `taken`
fn cases_identifier(name: &str, taken: &mut HashSet<String>) -> String {
    let mut ident = String::new();
    for word in name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        if ident.is_empty() {
            ident.push_str(&word.to_ascii_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                ident.push(first.to_ascii_uppercase());
                ident.push_str(chars.as_str());
            }
        }
    }
    if ident.is_empty() {
        ident.push_str("request");
    } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    let base = format!("{}Cases", ident);
    let mut candidate = base.clone();
    let mut suffix = 2;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{}{}", base, suffix);
        suffix += 1;
    }
    candidate
}
