//! Transformer for the variant template (the field selector)

use super::blocks::filter_source;
use super::transformer::Transform;
use super::variant::FieldVariant;

/// Transformer that can also drop unselected variant sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorTransformer {
    file: String,
}

impl SelectorTransformer {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }

    /// Keep the body and the sections of `selected` variants, in template order
    pub fn filter_variants(self, selected: &[FieldVariant]) -> Self {
        self.map(|file| filter_source(file, selected))
    }
}

impl Transform for SelectorTransformer {
    fn file_mut(&mut self) -> &mut String {
        &mut self.file
    }

    fn into_file(self) -> String {
        self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD_SELECTOR: &str = r#""use client";
/**
 *  Split anchors are read by the CLI.
 */

//split//select
import { Select } from "@/components/ui/select";
//split//text
import { Input } from "@/components/ui/input";
//split//checkbox
import { Checkbox } from "@/components/ui/checkbox";

//split//body
import { cn } from "@/lib/utils";

function FieldSelector({ fieldData }: Props) {
  switch (fieldData.type) {
    //split//select
    case FieldType.Select:
      return <Select />;
    //split//text
    case FieldType.Text:
      return <Input className={cn("w-full")} />; // plain input
    //split//checkbox
    case FieldType.Checkbox:
      return <Checkbox />;
    //split//body
    default:
      return null;
  }
}
"#;

    #[test]
    fn test_full_chain_for_text_only() {
        let out = SelectorTransformer::new(FIELD_SELECTOR)
            .filter_variants(&[FieldVariant::Text])
            .strip_comments()
            .runtime_directive(true)
            .replace_aliases("~/ui", "~/lib/utils")
            .into_file();

        let expected = r#""use client";

import { Input } from "~/ui/ui/input";
import { cn } from "~/lib/utils";

function FieldSelector({ fieldData }: Props) {
  switch (fieldData.type) {
    case FieldType.Text:
      return <Input className={cn("w-full")} />;
    default:
      return null;
  }
}
"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_chain_without_directive() {
        let out = SelectorTransformer::new(FIELD_SELECTOR)
            .filter_variants(&[FieldVariant::Checkbox])
            .strip_comments()
            .runtime_directive(false)
            .into_file();

        assert!(!out.contains("use client"));
        assert!(out.starts_with("import { Checkbox }"));
        assert!(out.contains("case FieldType.Checkbox:"));
        assert!(!out.contains("FieldType.Select"));
        assert!(!out.contains("FieldType.Text"));
    }
}
