//! Field variants that can be selected into the generated field selector

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional field kinds carried by the variant template
///
/// The set is closed: every `//split//<id>` marker in the variant template
/// must name one of these identifiers (or the reserved `body`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldVariant {
    Text,
    Select,
    Textarea,
    Checkbox,
    DatePicker,
    ComboSelect,
}

impl FieldVariant {
    /// The full variant catalog, in the order fields are offered to the user
    pub const ALL: [FieldVariant; 6] = [
        FieldVariant::Text,
        FieldVariant::Select,
        FieldVariant::Textarea,
        FieldVariant::Checkbox,
        FieldVariant::DatePicker,
        FieldVariant::ComboSelect,
    ];

    /// Identifier as written in template markers
    pub fn id(&self) -> &'static str {
        match self {
            FieldVariant::Text => "text",
            FieldVariant::Select => "select",
            FieldVariant::Textarea => "textarea",
            FieldVariant::Checkbox => "checkbox",
            FieldVariant::DatePicker => "date-picker",
            FieldVariant::ComboSelect => "combo-select",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FieldVariant::Text => "Text",
            FieldVariant::Select => "Select",
            FieldVariant::Textarea => "Textarea",
            FieldVariant::Checkbox => "Checkbox",
            FieldVariant::DatePicker => "Date Picker",
            FieldVariant::ComboSelect => "Combo Select",
        }
    }
}

impl fmt::Display for FieldVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for FieldVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        FieldVariant::ALL
            .into_iter()
            .find(|variant| variant.id() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = FieldVariant::ALL.iter().map(|v| v.id()).collect();
                format!("Unknown field '{}'. Known fields: {}", s, known.join(", "))
            })
    }
}
