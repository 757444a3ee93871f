//! Translation of Postman test scripts into Playwright assertions
//!
//! Each script line is matched against an ordered table of matchers; the
//! first matcher that recognizes the line decides its translation. Lines no
//! matcher recognizes are kept as a marked comment so the generated file
//! still compiles while flagging them for manual review.

use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::variables::{substitute_env_getters, ts_quoted};

/// Prefix of the comment emitted for lines that could not be translated
pub const UNCONVERTED_MARKER: &str = "// ⚠️ Not converted automatically:";

/// Statement materializing the parsed response body
pub const BODY_DECLARATION: &str = "const body = await response.json();";

/// A recognized test script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// `var jsonData = pm.response.json()`
    BodyDeclaration,
    /// `pm.test("title", function () {` with an optional statement after the brace
    TestLabel { title: String, rest: Option<String> },
    /// `});` closing a test callback
    Closer,
    Status(u16),
    BodyProperty { key: String, value: String },
    Property { target: String, key: String, value: String },
    HasProperty { target: String, key: String },
    Defined { target: String },
    NotEqual { target: String, value: String },
    Equal { target: String, value: String },
    StrictEqual { target: String, value: String },
    Null { target: String },
    IsArray { target: String },
    TypeOf { target: String, type_name: String },
    LengthAbove { target: String, min: u64 },
    StatusIn { codes: String },
    Unconverted(String),
}

impl Rule {
    /// Target and value expressions the rule evaluates
    fn expressions(&self) -> Vec<&str> {
        match self {
            Rule::BodyProperty { value, .. } => vec!["body", value.as_str()],
            Rule::Property { target, value, .. }
            | Rule::NotEqual { target, value }
            | Rule::Equal { target, value }
            | Rule::StrictEqual { target, value } => vec![target.as_str(), value.as_str()],
            Rule::HasProperty { target, .. }
            | Rule::Defined { target }
            | Rule::Null { target }
            | Rule::IsArray { target }
            | Rule::TypeOf { target, .. }
            | Rule::LengthAbove { target, .. } => vec![target.as_str()],
            _ => Vec::new(),
        }
    }

    /// Whether the translated statement needs the parsed response body
    pub fn reads_body(&self) -> bool {
        self.expressions().into_iter().any(references_body)
    }

    /// Whether the translated statement asserts on the response status
    pub fn checks_status(&self) -> bool {
        matches!(self, Rule::Status(_) | Rule::StatusIn { .. })
            || self.expressions().into_iter().any(references_status)
    }

    /// Playwright statement for rules that translate to a single line
    pub fn to_playwright(&self) -> Option<String> {
        let line = match self {
            Rule::BodyDeclaration
            | Rule::TestLabel { .. }
            | Rule::Closer
            | Rule::BodyProperty { .. } => return None,
            Rule::Status(code) => format!("expect(response.status()).toBe({});", code),
            Rule::Property { target, key, value } => {
                format!("expect({}).toMatchObject({{ {}: {} }});", target, ts_quoted(key), value)
            }
            Rule::HasProperty { target, key } => {
                format!("expect({}).toHaveProperty({});", target, ts_quoted(key))
            }
            Rule::Defined { target } => format!("expect({}).toBeDefined();", target),
            Rule::NotEqual { target, value } => {
                format!("expect({}).not.toEqual({});", target, value)
            }
            Rule::Equal { target, value } => format!("expect({}).toEqual({});", target, value),
            Rule::StrictEqual { target, value } => format!("expect({}).toBe({});", target, value),
            Rule::Null { target } => format!("expect({}).toBeNull();", target),
            Rule::IsArray { target } => format!("expect(Array.isArray({})).toBe(true);", target),
            Rule::TypeOf { target, type_name } => {
                format!("expect(typeof {}).toBe({});", target, ts_quoted(type_name))
            }
            Rule::LengthAbove { target, min } => {
                format!("expect({}.length).toBeGreaterThan({});", target, min)
            }
            Rule::StatusIn { codes } => {
                format!("expect([{}]).toContain(response.status());", codes)
            }
            Rule::Unconverted(line) => format!("{} {}", UNCONVERTED_MARKER, line),
        };
        Some(line)
    }
}

struct Matcher {
    regex: Regex,
    build: fn(&Captures) -> Option<Rule>,
}

impl Matcher {
    fn new(pattern: &str, build: fn(&Captures) -> Option<Rule>) -> Self {
        Self {
            regex: Regex::new(pattern).expect("valid assertion matcher regex"),
            build,
        }
    }
}

// Lines are trimmed and lose one trailing `;` before matching.
static MATCHERS: LazyLock<Vec<Matcher>> = LazyLock::new(|| {
    vec![
        Matcher::new(
            r"^(?:var|let|const)\s+(?:json|jsonData)\s*=\s*pm\.response\.json\(\)$",
            |_| Some(Rule::BodyDeclaration),
        ),
        Matcher::new(
            r#"^pm\.test\(\s*['"`](.*?)['"`]\s*,\s*(?:async\s+)?(?:function\s*\(\s*\)|\(\s*\)\s*=>)\s*\{(.*)$"#,
            |caps| {
                let rest = strip_closer(&caps[2]);
                Some(Rule::TestLabel {
                    title: caps[1].to_string(),
                    rest: (!rest.is_empty()).then(|| rest.to_string()),
                })
            },
        ),
        Matcher::new(r"^\}\s*\)$", |_| Some(Rule::Closer)),
        // 1. status equality
        Matcher::new(r"^pm\.response\.to\.have\.status\((\d+)\)$", |caps| {
            caps[1].parse().ok().map(Rule::Status)
        }),
        // 2. property with value
        Matcher::new(
            r#"^(?:pm\.)?expect\((.+)\)\.to\.have\.property\(['"`](.+?)['"`]\s*,\s*(.+)\)$"#,
            |caps| {
                let (target, _) = normalize_expression(&caps[1]);
                let (value, _) = normalize_expression(&caps[3]);
                let key = caps[2].to_string();
                if target == "body" {
                    Some(Rule::BodyProperty { key, value })
                } else {
                    Some(Rule::Property { target, key, value })
                }
            },
        ),
        // 3. property existence
        Matcher::new(
            r#"^(?:pm\.)?expect\((.+)\)\.to\.have\.property\(['"`](.+?)['"`]\)$"#,
            |caps| {
                Some(Rule::HasProperty {
                    target: normalize_expression(&caps[1]).0,
                    key: caps[2].to_string(),
                })
            },
        ),
        // 4. existence
        Matcher::new(r"^(?:pm\.)?expect\((.+)\)\.to\.exist$", |caps| {
            Some(Rule::Defined {
                target: normalize_expression(&caps[1]).0,
            })
        }),
        // 5. negated equality
        Matcher::new(
            r"^(?:pm\.)?expect\((.+)\)\.(?:to\.not|not\.to)\.(?:deep\.)?eql\((.+)\)$",
            |caps| {
                Some(Rule::NotEqual {
                    target: normalize_expression(&caps[1]).0,
                    value: normalize_expression(&caps[2]).0,
                })
            },
        ),
        // 6. equality
        Matcher::new(
            r"^(?:pm\.)?expect\((.+)\)\.to\.(deep\.)?(eql|equal)\((.+)\)$",
            |caps| {
                let target = normalize_expression(&caps[1]).0;
                let value = normalize_expression(&caps[4]).0;
                if caps.get(2).is_none() && &caps[3] == "equal" {
                    Some(Rule::StrictEqual { target, value })
                } else {
                    Some(Rule::Equal { target, value })
                }
            },
        ),
        // 7. null
        Matcher::new(r"^(?:pm\.)?expect\((.+)\)\.to\.be\.null$", |caps| {
            Some(Rule::Null {
                target: normalize_expression(&caps[1]).0,
            })
        }),
        // 8. type
        Matcher::new(
            r#"^(?:pm\.)?expect\((.+)\)\.to\.be\.an?\(['"`](\w+)['"`]\)$"#,
            |caps| {
                let target = normalize_expression(&caps[1]).0;
                if caps[2].eq_ignore_ascii_case("array") {
                    Some(Rule::IsArray { target })
                } else {
                    Some(Rule::TypeOf {
                        target,
                        type_name: caps[2].to_string(),
                    })
                }
            },
        ),
        // 9. length lower bound
        Matcher::new(
            r"^(?:pm\.)?expect\((.+)\.length\)\.to\.be\.above\((\d+)\)$",
            |caps| {
                Some(Rule::LengthAbove {
                    target: normalize_expression(&caps[1]).0,
                    min: caps[2].parse().ok()?,
                })
            },
        ),
        Matcher::new(
            r"^(?:pm\.)?expect\((.+)\)\.to\.have\.length(?:Of)?\.above\((\d+)\)$",
            |caps| {
                Some(Rule::LengthAbove {
                    target: normalize_expression(&caps[1]).0,
                    min: caps[2].parse().ok()?,
                })
            },
        ),
        // 10. status membership
        Matcher::new(
            r"^(?:pm\.)?expect\(\[(.*)\]\)\.to\.include\(pm\.response\.code\)$",
            |caps| {
                Some(Rule::StatusIn {
                    codes: caps[1].trim().to_string(),
                })
            },
        ),
        Matcher::new(
            r"^(?:pm\.)?expect\(pm\.response\.code\)\.to\.be\.oneOf\(\[(.*)\]\)$",
            |caps| {
                Some(Rule::StatusIn {
                    codes: caps[1].trim().to_string(),
                })
            },
        ),
    ]
});

static BODY_ALIAS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^\w.$])(?:jsonData|json)\b").expect("valid body alias regex")
});

static BODY_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^\w.$])body\b").expect("valid body reference regex"));

static RESPONSE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"pm\.response\.headers\.get\(['"`]([^'"`]+)['"`]\)"#)
        .expect("valid response header regex")
});

/// Rewrite Postman expressions into their Playwright counterparts.
///
/// Returns the rewritten expression and whether it refers to the parsed body.
/// String literals are left untouched.
pub fn normalize_expression(expr: &str) -> (String, bool) {
    let expr = substitute_env_getters(expr.trim());
    let expr = RESPONSE_HEADER_RE.replace_all(&expr, |caps: &Captures| {
        format!("response.headers()[{}]", ts_quoted(&caps[1].to_lowercase()))
    });
    let expr = rewrite_code(&expr, |code| {
        let code = code
            .replace("pm.response.json()", "body")
            .replace("pm.response.code", "response.status()");
        BODY_ALIAS_RE.replace_all(&code, "${1}body").into_owned()
    });
    let uses_body = references_body(&expr);
    (expr, uses_body)
}

/// Whether an expression reads the `body` identifier outside string literals
pub fn references_body(code: &str) -> bool {
    code_segments(code).any(|segment| BODY_REF_RE.is_match(segment))
}

fn references_status(code: &str) -> bool {
    code_segments(code).any(|segment| segment.contains("response.status()"))
}

/// Split `code` into `(is_literal, text)` segments. Literals keep their
/// quotes; an unterminated literal runs to the end of the input.
fn literal_segments(code: &str) -> Vec<(bool, &str)> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (idx, c) in code.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(q) if c == q => {
                let end = idx + c.len_utf8();
                segments.push((true, &code[start..end]));
                start = end;
                quote = None;
            }
            Some(_) => {}
            None if matches!(c, '"' | '\'' | '`') => {
                if start < idx {
                    segments.push((false, &code[start..idx]));
                }
                start = idx;
                quote = Some(c);
            }
            None => {}
        }
    }
    if start < code.len() {
        segments.push((quote.is_some(), &code[start..]));
    }
    segments
}

fn code_segments(code: &str) -> impl Iterator<Item = &str> {
    literal_segments(code)
        .into_iter()
        .filter(|(literal, _)| !literal)
        .map(|(_, text)| text)
}

/// Apply `rewrite` to everything outside string literals
fn rewrite_code(code: &str, rewrite: impl Fn(&str) -> String) -> String {
    literal_segments(code)
        .into_iter()
        .map(|(literal, text)| if literal { text.to_string() } else { rewrite(text) })
        .collect()
}

/// Drop a trailing `// comment` that sits outside string literals
fn strip_trailing_comment(line: &str) -> &str {
    let mut offset = 0;
    for (literal, text) in literal_segments(line) {
        if !literal {
            if let Some(pos) = text.find("//") {
                return line[..offset + pos].trim_end();
            }
        }
        offset += text.len();
    }
    line
}

static CLOSER_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\}\s*\)\s*;?\s*$").expect("valid closer regex"));

/// Statement following a `pm.test(..., function () {` opener, without a
/// trailing `})` when the callback closes on the same line
fn strip_closer(rest: &str) -> &str {
    let rest = rest.trim();
    let rest = match CLOSER_SUFFIX_RE.find(rest) {
        Some(closer) => rest[..closer.start()].trim_end(),
        None => rest,
    };
    rest.strip_suffix(';').unwrap_or(rest).trim()
}

/// Classify one script line. Blank lines and `//` comments yield `None`.
pub fn recognize(line: &str) -> Option<Rule> {
    let trimmed = line.trim();
    let code = strip_trailing_comment(trimmed);
    if code.is_empty() {
        return None;
    }

    let statement = code.strip_suffix(';').unwrap_or(code).trim_end();

    MATCHERS
        .iter()
        .filter_map(|matcher| matcher.regex.captures(statement).map(|caps| (matcher, caps)))
        .find_map(|(matcher, caps)| (matcher.build)(&caps))
        .or_else(|| Some(Rule::Unconverted(trimmed.to_string())))
}

/// Translated form of a test script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedScript {
    /// Whether any assertion reads the parsed response body
    pub uses_body: bool,
    /// Whether any assertion inspects the response status
    pub checks_status: bool,
    /// Assertion statements and comments, in script order
    pub statements: Vec<String>,
}

impl TranslatedScript {
    /// Statements ready to be placed in a test body, with the body
    /// declaration first when needed
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.statements.len() + 1);
        if self.uses_body {
            lines.push(BODY_DECLARATION.to_string());
        }
        lines.extend(self.statements.iter().cloned());
        lines
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn unconverted_count(&self) -> usize {
        self.statements
            .iter()
            .filter(|s| s.starts_with(UNCONVERTED_MARKER))
            .count()
    }
}

/// Translate a Postman test script into Playwright assertions
pub fn translate_test_script(script: &str) -> TranslatedScript {
    let mut translator = Translator::default();
    for line in script.lines() {
        translator.push_line(line);
    }
    translator.finish()
}

#[derive(Default)]
struct Translator {
    statements: Vec<String>,
    body_properties: IndexMap<String, String>,
    uses_body: bool,
    checks_status: bool,
}

impl Translator {
    fn push_line(&mut self, line: &str) {
        let Some(rule) = recognize(line) else {
            return;
        };

        match rule {
            Rule::BodyDeclaration | Rule::Closer => {}
            Rule::TestLabel { title, rest } => {
                self.statements.push(format!("// {}", title));
                if let Some(rest) = rest {
                    self.push_line(&rest);
                }
            }
            Rule::BodyProperty { key, value } => {
                self.uses_body = true;
                self.body_properties.insert(key, value);
            }
            Rule::Unconverted(_) => {
                if let Some(statement) = rule.to_playwright() {
                    self.statements.push(statement);
                }
            }
            rule => {
                self.uses_body |= rule.reads_body();
                self.checks_status |= rule.checks_status();
                if let Some(statement) = rule.to_playwright() {
                    self.statements.push(statement);
                }
            }
        }
    }

    fn finish(mut self) -> TranslatedScript {
        if !self.body_properties.is_empty() {
            let fields: Vec<String> = self
                .body_properties
                .iter()
                .map(|(key, value)| format!("{}: {}", ts_quoted(key), value))
                .collect();
            self.statements
                .push(format!("expect(body).toMatchObject({{ {} }});", fields.join(", ")));
        }

        TranslatedScript {
            uses_body: self.uses_body,
            checks_status: self.checks_status,
            statements: self.statements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate_line(line: &str) -> Option<String> {
        recognize(line).and_then(|rule| rule.to_playwright())
    }

    #[test]
    fn test_status() {
        assert_eq!(
            translate_line("pm.response.to.have.status(404);").as_deref(),
            Some("expect(response.status()).toBe(404);")
        );
    }

    #[test]
    fn test_status_only_script_has_no_body() {
        let translated = translate_test_script("pm.response.to.have.status(404);");
        assert!(!translated.uses_body);
        assert!(translated.checks_status);
        assert_eq!(translated.lines(), vec!["expect(response.status()).toBe(404);"]);
    }

    #[test]
    fn test_property_with_value_on_other_expression() {
        assert_eq!(
            translate_line(r#"pm.expect(jsonData.user).to.have.property("role", "admin");"#)
                .as_deref(),
            Some(r#"expect(body.user).toMatchObject({ "role": "admin" });"#)
        );
    }

    #[test]
    fn test_body_properties_are_merged() {
        let script = r#"
var jsonData = pm.response.json();
pm.expect(jsonData).to.have.property("id", 1);
pm.response.to.have.status(200);
pm.expect(json).to.have.property('name', "Ada");
"#;
        let translated = translate_test_script(script);
        assert!(translated.uses_body);
        assert_eq!(
            translated.lines(),
            vec![
                BODY_DECLARATION,
                "expect(response.status()).toBe(200);",
                r#"expect(body).toMatchObject({ "id": 1, "name": "Ada" });"#,
            ]
        );
    }

    #[test]
    fn test_property_existence() {
        assert_eq!(
            translate_line("pm.expect(jsonData).to.have.property('token')").as_deref(),
            Some(r#"expect(body).toHaveProperty("token");"#)
        );
    }

    #[test]
    fn test_exist() {
        assert_eq!(
            translate_line("pm.expect(jsonData.id).to.exist;").as_deref(),
            Some("expect(body.id).toBeDefined();")
        );
    }

    #[test]
    fn test_not_eql_before_eql() {
        assert_eq!(
            translate_line("pm.expect(jsonData.status).to.not.eql('deleted');").as_deref(),
            Some("expect(body.status).not.toEqual('deleted');")
        );
        assert_eq!(
            translate_line("pm.expect(jsonData.status).to.eql('active');").as_deref(),
            Some("expect(body.status).toEqual('active');")
        );
    }

    #[test]
    fn test_strict_equal() {
        assert_eq!(
            translate_line("pm.expect(pm.response.code).to.equal(201)").as_deref(),
            Some("expect(response.status()).toBe(201);")
        );
    }

    #[test]
    fn test_null() {
        assert_eq!(
            translate_line("pm.expect(jsonData.deletedAt).to.be.null;").as_deref(),
            Some("expect(body.deletedAt).toBeNull();")
        );
    }

    #[test]
    fn test_type_checks() {
        assert_eq!(
            translate_line("pm.expect(jsonData).to.be.an('array');").as_deref(),
            Some("expect(Array.isArray(body)).toBe(true);")
        );
        assert_eq!(
            translate_line(r#"pm.expect(jsonData.name).to.be.a("string");"#).as_deref(),
            Some(r#"expect(typeof body.name).toBe("string");"#)
        );
    }

    #[test]
    fn test_length_above() {
        assert_eq!(
            translate_line("pm.expect(jsonData.items.length).to.be.above(0);").as_deref(),
            Some("expect(body.items.length).toBeGreaterThan(0);")
        );
    }

    #[test]
    fn test_status_membership() {
        assert_eq!(
            translate_line("pm.expect([200, 201]).to.include(pm.response.code);").as_deref(),
            Some("expect([200, 201]).toContain(response.status());")
        );
        assert_eq!(
            translate_line("pm.expect(pm.response.code).to.be.oneOf([200,204]);").as_deref(),
            Some("expect([200,204]).toContain(response.status());")
        );
    }

    #[test]
    fn test_env_getter_in_expression() {
        assert_eq!(
            translate_line("pm.expect(jsonData.id).to.eql(pm.environment.get('userId'));")
                .as_deref(),
            Some("expect(body.id).toEqual(process.env.USERID);")
        );
    }

    #[test]
    fn test_response_header_expression() {
        assert_eq!(
            translate_line(r#"pm.expect(pm.response.headers.get("Content-Type")).to.exist"#)
                .as_deref(),
            Some(r#"expect(response.headers()["content-type"]).toBeDefined();"#)
        );
    }

    #[test]
    fn test_body_alias_keeps_member_names() {
        let (expr, uses_body) = normalize_expression("response.json.jsonData");
        assert_eq!(expr, "response.json.jsonData");
        assert!(!uses_body);

        let (expr, uses_body) = normalize_expression("jsonData.items[json.index]");
        assert_eq!(expr, "body.items[body.index]");
        assert!(uses_body);
    }

    #[test]
    fn test_unconverted_lines_are_marked() {
        let translated = translate_test_script(
            "// a comment\n\nconsole.log(pm.response.text());\npm.response.to.have.status(200);",
        );
        assert_eq!(
            translated.lines(),
            vec![
                "// ⚠️ Not converted automatically: console.log(pm.response.text());",
                "expect(response.status()).toBe(200);",
            ]
        );
        assert_eq!(translated.unconverted_count(), 1);
        assert!(!translated.uses_body);
    }

    #[test]
    fn test_test_wrappers() {
        let script = r#"
pm.test("Status is OK", function () {
    pm.response.to.have.status(200);
});
pm.test("Has id", () => { pm.expect(jsonData.id).to.exist; });
"#;
        let translated = translate_test_script(script);
        assert_eq!(
            translated.lines(),
            vec![
                BODY_DECLARATION,
                "// Status is OK",
                "expect(response.status()).toBe(200);",
                "// Has id",
                "expect(body.id).toBeDefined();",
            ]
        );
    }

    #[test]
    fn test_declaration_alone_does_not_materialize_body() {
        let translated = translate_test_script("const jsonData = pm.response.json();");
        assert!(translated.is_empty());
        assert!(translated.lines().is_empty());
    }

    #[test]
    fn test_rule_variants() {
        assert_eq!(
            recognize("pm.expect(jsonData).to.have.property('id', 7)"),
            Some(Rule::BodyProperty {
                key: "id".to_string(),
                value: "7".to_string()
            })
        );
        assert_eq!(recognize("   "), None);
        assert_eq!(recognize("});"), Some(Rule::Closer));
        assert_eq!(
            recognize("pm.response.to.have.status(99999999)"),
            Some(Rule::Unconverted("pm.response.to.have.status(99999999)".to_string()))
        );
    }

    #[test]
    fn test_string_literals_are_not_rewritten() {
        let translated = translate_test_script(
            r#"pm.expect(pm.response.headers.get("Content-Type")).to.eql("application/json");"#,
        );
        assert_eq!(
            translated.lines(),
            vec![r#"expect(response.headers()["content-type"]).toEqual("application/json");"#]
        );
        assert!(!translated.uses_body);

        let (expr, uses_body) = normalize_expression("jsonData.kind + 'json body'");
        assert_eq!(expr, "body.kind + 'json body'");
        assert!(uses_body);
    }

    #[test]
    fn test_body_literal_value_does_not_materialize_body() {
        let translated = translate_test_script("pm.expect(pm.response.code).to.eql(\"body\");");
        assert_eq!(translated.lines(), vec!["expect(response.status()).toEqual(\"body\");"]);
        assert!(!translated.uses_body);
        assert!(translated.checks_status);
    }

    #[test]
    fn test_status_text_in_literal_is_not_a_status_check() {
        let rule = recognize("pm.expect(jsonData.message).to.eql('response.status()')").unwrap();
        assert!(rule.reads_body());
        assert!(!rule.checks_status());
    }

    #[test]
    fn test_trailing_comments_are_ignored() {
        assert_eq!(
            translate_line("pm.response.to.have.status(201); // created").as_deref(),
            Some("expect(response.status()).toBe(201);")
        );
        assert_eq!(
            translate_line(r#"pm.expect(jsonData.url).to.eql("https://api.test/a"); // link"#)
                .as_deref(),
            Some(r#"expect(body.url).toEqual("https://api.test/a");"#)
        );
        assert_eq!(recognize("   // only a comment"), None);
    }

    #[test]
    fn test_literal_segments() {
        assert_eq!(
            literal_segments(r#"a("x\"y", 'z') + `t`"#),
            vec![
                (false, "a("),
                (true, r#""x\"y""#),
                (false, ", "),
                (true, "'z'"),
                (false, ") + "),
                (true, "`t`"),
            ]
        );
    }
}
