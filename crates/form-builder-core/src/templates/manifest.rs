//! Template manifest types and parsing

use serde::{Deserialize, Serialize};

/// One template file to fetch, transform and emit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFile {
    /// File name, relative to the template source and to the output directory
    pub file: String,

    /// Whether the file carries `//split//<id>` variant sections
    #[serde(default)]
    pub variants: bool,

    /// Whether the emitted file is a client module that may carry the
    /// runtime directive
    #[serde(default)]
    pub client: bool,
}

impl TemplateFile {
    pub fn plain(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            variants: false,
            client: false,
        }
    }

    pub fn with_variants(file: impl Into<String>) -> Self {
        Self {
            variants: true,
            ..Self::plain(file)
        }
    }

    /// Mark the file as a client module
    pub fn client(self) -> Self {
        Self {
            client: true,
            ..self
        }
    }
}

/// Template manifest (template.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Explicit list of files to emit
    pub files: Vec<TemplateFile>,
}

impl TemplateManifest {
    pub fn parse(content: &str) -> serde_yaml::Result<Self> {
        serde_yaml::from_str(content)
    }

    /// The file whose sections are filtered by variant, if any
    pub fn variant_file(&self) -> Option<&TemplateFile> {
        self.files.iter().find(|f| f.variants)
    }
}
