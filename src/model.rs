use std::fmt;

pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownModel {
    pub id: &'static str,
    pub note: Option<&'static str>,
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.note {
            Some(note) => write!(f, "{} ({})", self.id, note),
            None => f.write_str(self.id),
        }
    }
}

/// Model identifiers suggested to the user when a request fails.
pub const KNOWN_MODELS: &[KnownModel] = &[
    KnownModel {
        id: DEFAULT_MODEL,
        note: Some("fastest"),
    },
    KnownModel {
        id: "claude-3-sonnet-20240229",
        note: None,
    },
    KnownModel {
        id: "claude-3-opus-20240229",
        note: Some("most capable"),
    },
    KnownModel {
        id: "claude-3-5-sonnet-20241022",
        note: None,
    },
];

/// One prompt bound for one model. Built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    pub prompt: String,
    pub model: String,
    pub max_tokens: u32,
}

impl RequestParams {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
