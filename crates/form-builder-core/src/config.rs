//! User configuration for one generation run

use crate::transform::matchers::{DEFAULT_COMPONENTS_ALIAS, DEFAULT_UTILS_ALIAS};
use crate::transform::FieldVariant;

/// Choices that shape every emitted file
///
/// Built once (from flags or prompts) and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Import alias for components in the user's project
    pub components_alias: String,

    /// Import alias for utilities in the user's project
    pub utils_alias: String,

    /// Whether emitted files start with the `"use client";` directive
    pub include_runtime_directive: bool,

    /// Field variants kept in the field selector
    pub selected_variants: Vec<FieldVariant>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            components_alias: DEFAULT_COMPONENTS_ALIAS.to_string(),
            utils_alias: DEFAULT_UTILS_ALIAS.to_string(),
            include_runtime_directive: true,
            selected_variants: vec![FieldVariant::Text],
        }
    }
}

impl Configuration {
    /// Variant identifiers, for display
    pub fn variant_names(&self) -> Vec<&'static str> {
        self.selected_variants.iter().map(|v| v.id()).collect()
    }
}
