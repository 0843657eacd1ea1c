//! Chainable text rewrites applied to every template file

use super::matchers::{
    ALIASES, COMMENTS, DEFAULT_COMPONENTS_ALIAS, LEADING_BLANK_LINES, RUNTIME_DIRECTIVE,
    RUNTIME_DIRECTIVE_LINE,
};
use regex::Captures;

/// Remove `//` and `/* */` comments, dropping lines that held only a comment
///
/// String literals are not tracked: a `//` inside a literal is stripped too.
pub fn strip_comments(source: &str) -> String {
    COMMENTS.replace_all(source, "").into_owned()
}

/// Ensure the runtime directive is present exactly once at the top, or absent
///
/// Directive lines are removed along with the blank lines right after them.
/// When included, leading blank lines are dropped and the directive plus an
/// empty line is prepended.
pub fn apply_runtime_directive(source: &str, include: bool) -> String {
    let body = RUNTIME_DIRECTIVE_LINE.replace_all(source, "");
    if include {
        let body = LEADING_BLANK_LINES.replace(&body, "");
        format!("{}\n\n{}", RUNTIME_DIRECTIVE, body)
    } else {
        body.into_owned()
    }
}

/// Rewrite both default import aliases in one pass
///
/// Text inserted for one alias is never matched again, so a replacement that
/// contains the other default is left alone.
pub fn replace_aliases(source: &str, components: &str, utils: &str) -> String {
    ALIASES
        .replace_all(source, |caps: &Captures| {
            if &caps[0] == DEFAULT_COMPONENTS_ALIAS {
                components.to_string()
            } else {
                utils.to_string()
            }
        })
        .into_owned()
}

/// Owned-string transformation chain
///
/// Implementors only expose their text; every rewrite takes the transformer
/// by value and hands it back, so calls compose left to right.
pub trait Transform: Sized {
    fn file_mut(&mut self) -> &mut String;

    fn into_file(self) -> String;

    /// Replace the current text with `f(current)`
    fn map(mut self, f: impl FnOnce(&str) -> String) -> Self {
        let file = self.file_mut();
        *file = f(file.as_str());
        self
    }

    fn strip_comments(self) -> Self {
        self.map(strip_comments)
    }

    fn runtime_directive(self, include: bool) -> Self {
        self.map(|file| apply_runtime_directive(file, include))
    }

    fn replace_aliases(self, components: &str, utils: &str) -> Self {
        self.map(|file| replace_aliases(file, components, utils))
    }
}

/// Transformer for template files without variant sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTransformer {
    file: String,
}

impl FileTransformer {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }
}

impl Transform for FileTransformer {
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

    #[test]
    fn test_strip_whole_line_and_trailing_comments() {
        let source = "// header\nconst a = 1; // trailing\n  /* block */\nconst b = 2;\n";
        assert_eq!(strip_comments(source), "const a = 1;\nconst b = 2;\n");
    }

    #[test]
    fn test_strip_multiline_doc_comment() {
        let source = "\"use client\";\n/**\n *  Split anchors.\n *  //split//select\n */\n\nimport x from \"y\";\n";
        assert_eq!(
            strip_comments(source),
            "\"use client\";\n\nimport x from \"y\";\n"
        );
    }

    #[test]
    fn test_strip_inline_block_comment() {
        assert_eq!(strip_comments("f(/* arg */ 1);\n"), "f( 1);\n");
    }

    #[test]
    fn test_strip_comments_is_idempotent() {
        let source = "// a\nlet x = 1; // b\n/* c\n * d */\nlet y = x * 2;\n    //split//text\n";
        let once = strip_comments(source);
        assert_eq!(strip_comments(&once), once);
        assert!(!once.contains("//"));
    }

    #[test]
    fn test_strip_comments_does_not_track_strings() {
        assert_eq!(
            strip_comments("const url = \"https://example.com\";\n"),
            "const url = \"https:\n"
        );
    }

    #[test]
    fn test_directive_removed_when_excluded() {
        let source = "\"use client\";\n\nimport x from \"y\";\n";
        assert_eq!(
            apply_runtime_directive(source, false),
            "import x from \"y\";\n"
        );
    }

    #[test]
    fn test_directive_prepended_once() {
        let source = "import x from \"y\";\n";
        let once = apply_runtime_directive(source, true);
        assert_eq!(once, "\"use client\";\n\nimport x from \"y\";\n");
        assert_eq!(apply_runtime_directive(&once, true), once);
    }

    #[test]
    fn test_directive_not_duplicated_when_template_has_it() {
        let source = "\"use client\";\nimport x from \"y\";\n";
        let out = apply_runtime_directive(source, true);
        assert_eq!(out.matches("use client").count(), 1);
        assert!(out.starts_with("\"use client\";\n\n"));
    }

    #[test]
    fn test_directive_absent_and_excluded_is_noop() {
        let source = "\n\nimport x from \"y\";\n";
        assert_eq!(apply_runtime_directive(source, false), source);
    }

    #[test]
    fn test_directive_policy_is_idempotent_with_leading_blank_lines() {
        let source = "\n\nimport x from \"y\";\n";
        let once = apply_runtime_directive(source, true);
        assert_eq!(once, "\"use client\";\n\nimport x from \"y\";\n");
        assert_eq!(apply_runtime_directive(&once, true), once);

        let absent = apply_runtime_directive(source, false);
        assert_eq!(apply_runtime_directive(&absent, false), absent);
    }

    #[test]
    fn test_directive_removal_keeps_rest_of_head() {
        let source = "// header\n\n\"use client\";\n\nimport x from \"y\";\n";
        assert_eq!(
            apply_runtime_directive(source, false),
            "// header\n\nimport x from \"y\";\n"
        );
    }

    #[test]
    fn test_components_alias_leaves_utils_untouched() {
        let source = "import { Input } from \"@/components/ui/input\";\nimport { cn } from \"@/lib/utils\";\n// see @/components\n";
        let out = replace_aliases(source, "~/ui", "@/lib/utils");
        assert_eq!(
            out,
            "import { Input } from \"~/ui/ui/input\";\nimport { cn } from \"@/lib/utils\";\n// see ~/ui\n"
        );
    }

    #[test]
    fn test_alias_replacements_are_not_rewritten_again() {
        let source = "import { cn } from \"@/lib/utils\";\nimport { Input } from \"@/components/ui/input\";\n";
        let out = FileTransformer::new(source)
            .replace_aliases("~/ui", "@/components/lib/utils")
            .into_file();
        assert_eq!(
            out,
            "import { cn } from \"@/components/lib/utils\";\nimport { Input } from \"~/ui/ui/input\";\n"
        );
    }

    #[test]
    fn test_alias_without_occurrence_is_noop() {
        let source = "import a from \"./a\";\n";
        assert_eq!(replace_aliases(source, "~/components", "~/utils"), source);
    }

    #[test]
    fn test_chain_composes_left_to_right() {
        let out = FileTransformer::new("\"use client\";\nimport { cn } from \"@/lib/utils\";\n")
            .runtime_directive(false)
            .replace_aliases("#/components", "#/utils")
            .into_file();
        assert_eq!(out, "import { cn } from \"#/utils\";\n");
    }
}
