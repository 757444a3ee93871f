use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root of a Postman collection (v2.x JSON shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// Collection metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<CollectionInfo>,

    /// Top-level folders and requests, in document order
    pub item: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInfo {
    #[serde(default)]
    pub name: String,
}

/// A collection entry: either a folder of nested items or a single request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Folder(Folder),
    Request(RequestItem),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Folder(folder) => &folder.name,
            Item::Request(request) => &request.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    #[serde(default)]
    pub name: String,

    pub item: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestItem {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,

    /// Script hooks attached to the request (`test`, `prerequest`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
}

impl RequestItem {
    /// Joined script of the first event listening on `listen`
    pub fn script(&self, listen: &str) -> Option<String> {
        self.event
            .iter()
            .find(|event| event.listen == listen)
            .and_then(|event| event.script.as_ref())
            .map(|script| script.exec.joined())
    }

    pub fn test_script(&self) -> Option<String> {
        self.script("test")
    }

    pub fn prerequest_script(&self) -> Option<String> {
        self.script("prerequest")
    }

    /// The request's method and raw URL, if both are present and non-empty
    pub fn endpoint(&self) -> Option<(&str, &str)> {
        let request = self.request.as_ref()?;
        let method = request.method.as_deref().filter(|m| !m.trim().is_empty())?;
        let url = request.url.as_ref().map(RequestUrl::raw).filter(|u| !u.is_empty())?;
        Some((method, url))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<RequestUrl>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<Header>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

impl Request {
    /// Enabled headers, in declaration order. Later duplicates overwrite earlier values.
    pub fn headers(&self) -> IndexMap<String, String> {
        self.header
            .iter()
            .filter(|h| !h.disabled)
            .map(|h| (h.key.clone(), h.value.clone()))
            .collect()
    }

    /// Raw body text, ignoring blank bodies
    pub fn raw_body(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.raw.as_deref())
            .filter(|raw| !raw.trim().is_empty())
    }
}

/// Request URL, either `{ "raw": "..." }` or a bare string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestUrl {
    Raw(String),
    Detailed {
        #[serde(default)]
        raw: String,
    },
}

impl RequestUrl {
    pub fn raw(&self) -> &str {
        match self {
            RequestUrl::Raw(raw) => raw,
            RequestUrl::Detailed { raw } => raw,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub key: String,

    #[serde(default)]
    pub value: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Hook name: `test` or `prerequest`
    pub listen: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub exec: ScriptExec,
}

/// Script source, stored either as a list of lines or as one string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptExec {
    Lines(Vec<String>),
    Text(String),
}

impl Default for ScriptExec {
    fn default() -> Self {
        ScriptExec::Lines(Vec::new())
    }
}

impl ScriptExec {
    pub fn joined(&self) -> String {
        match self {
            ScriptExec::Lines(lines) => lines.join("\n"),
            ScriptExec::Text(text) => text.clone(),
        }
    }
}
