//! Section model for variant templates
//!
//! A variant template is read as an ordered list of sections. Each section
//! starts at a marker line (`//split//<id>`) and runs until the next marker
//! line. Text before the first marker is the leading body section.

use super::matchers::{BODY_ID, MARKER_LINE};
use super::variant::FieldVariant;

/// Which kind of section a block of template text is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionTag {
    /// Always kept: leading unmarked text or a `//split//body` section
    Body,
    /// Kept only when the identifier is selected
    Variant(String),
}

impl SectionTag {
    fn from_marker(id: &str) -> Self {
        if id == BODY_ID {
            SectionTag::Body
        } else {
            SectionTag::Variant(id.to_string())
        }
    }

    /// Marker identifier of a variant section
    pub fn variant_id(&self) -> Option<&str> {
        match self {
            SectionTag::Body => None,
            SectionTag::Variant(id) => Some(id),
        }
    }
}

/// A tagged slice of template text, marker line included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub tag: SectionTag,
    pub text: String,
}

/// Split a template into sections, preserving every byte of the input
pub fn split_sections(source: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section {
        tag: SectionTag::Body,
        text: String::new(),
    };

    for line in source.split_inclusive('\n') {
        if let Some(caps) = MARKER_LINE.captures(line) {
            let next = Section {
                tag: SectionTag::from_marker(&caps[1]),
                text: String::new(),
            };
            let finished = std::mem::replace(&mut current, next);
            if !finished.text.is_empty() {
                sections.push(finished);
            }
        }
        current.text.push_str(line);
    }

    if !current.text.is_empty() {
        sections.push(current);
    }

    sections
}

/// Join sections back into template text, in order, with no separator
pub fn join_sections(sections: &[Section]) -> String {
    sections.iter().map(|s| s.text.as_str()).collect()
}

/// Catalog variants that are not part of the selection
pub fn variants_to_remove(selected: &[FieldVariant]) -> Vec<FieldVariant> {
    FieldVariant::ALL
        .into_iter()
        .filter(|variant| !selected.contains(variant))
        .collect()
}

/// Keep body sections and the sections of selected variants
///
/// Identifiers outside the catalog are never removed.
pub fn filter_source(source: &str, selected: &[FieldVariant]) -> String {
    let to_remove = variants_to_remove(selected);
    if to_remove.is_empty() {
        return source.to_string();
    }

    let mut sections = split_sections(source);
    sections.retain(|section| match section.tag.variant_id() {
        Some(id) => !to_remove.iter().any(|variant| variant.id() == id),
        None => true,
    });
    join_sections(&sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "\
\"use client\";
import { z } from \"zod\";
//split//select
import { Select } from \"@/components/ui/select\";
//split//text
import { Input } from \"@/components/ui/input\";
//split//checkbox
import { Checkbox } from \"@/components/ui/checkbox\";
//split//body
export function FieldSelector() {}
";

    #[test]
    fn test_split_preserves_input() {
        let sections = split_sections(TEMPLATE);
        assert_eq!(join_sections(&sections), TEMPLATE);
        let tags: Vec<Option<&str>> = sections.iter().map(|s| s.tag.variant_id()).collect();
        assert_eq!(
            tags,
            vec![None, Some("select"), Some("text"), Some("checkbox"), None]
        );
    }

    #[test]
    fn test_sections_carry_their_marker() {
        let sections = split_sections(TEMPLATE);
        assert!(sections[1].text.starts_with("//split//select\n"));
        assert!(sections[0].text.starts_with("\"use client\";"));
    }

    #[test]
    fn test_filter_keeps_body_and_selected_in_order() {
        let out = filter_source(TEMPLATE, &[FieldVariant::Text]);
        assert!(out.contains("import { z } from \"zod\";"));
        assert!(out.contains("Input"));
        assert!(!out.contains("ui/select"));
        assert!(!out.contains("ui/checkbox"));
        let input_at = out.find("Input").unwrap();
        let body_at = out.find("export function").unwrap();
        assert!(input_at < body_at);
    }

    #[test]
    fn test_empty_selection_leaves_body_only() {
        let out = filter_source(TEMPLATE, &[]);
        assert_eq!(
            out,
            "\"use client\";\nimport { z } from \"zod\";\n//split//body\nexport function FieldSelector() {}\n"
        );
    }

    #[test]
    fn test_full_selection_is_unchanged() {
        assert_eq!(filter_source(TEMPLATE, &FieldVariant::ALL), TEMPLATE);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let selected = [FieldVariant::Select, FieldVariant::Checkbox];
        let once = filter_source(TEMPLATE, &selected);
        assert_eq!(filter_source(&once, &selected), once);
    }

    #[test]
    fn test_absent_selection_is_ignored() {
        let out = filter_source(TEMPLATE, &[FieldVariant::Text, FieldVariant::DatePicker]);
        assert_eq!(out, filter_source(TEMPLATE, &[FieldVariant::Text]));
    }

    #[test]
    fn test_unknown_marker_is_kept() {
        let source = "a\n//split//radio\nb\n//split//text\nc\n";
        assert_eq!(filter_source(source, &[]), "a\n//split//radio\nb\n");
    }

    #[test]
    fn test_indented_markers_split_switch_cases() {
        let source = "switch (t) {\n    //split//text\n    case 1:\n      return 1;\n    //split//select\n    case 2:\n      return 2;\n    //split//body\n}\n";
        let out = filter_source(source, &[FieldVariant::Select]);
        assert_eq!(
            out,
            "switch (t) {\n    //split//select\n    case 2:\n      return 2;\n    //split//body\n}\n"
        );
    }

    #[test]
    fn test_split_token_inside_code_is_not_a_boundary() {
        let source = "const s = \"//split//text\";\n//split//text\nx\n";
        let sections = split_sections(source);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].text, "const s = \"//split//text\";\n");
    }

    #[test]
    fn test_leading_marker_yields_no_empty_body() {
        let sections = split_sections("//split//text\nx\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].tag, SectionTag::Variant("text".to_string()));
    }
}
