//! Literal tokens and patterns the transformers match against

use regex::Regex;
use std::sync::LazyLock;

/// Token that opens every section marker line
pub const SPLIT_TOKEN: &str = "//split";

/// Comment lead placed between the split token and the variant identifier
pub const COMMENT_PREFIX: &str = "//";

/// Reserved marker identifier for sections that are always kept
pub const BODY_ID: &str = "body";

/// Directive telling the host framework the module needs its client runtime
pub const RUNTIME_DIRECTIVE: &str = "\"use client\";";

/// Import alias for components used by the published templates
pub const DEFAULT_COMPONENTS_ALIAS: &str = "@/components";

/// Import alias for utilities used by the published templates
pub const DEFAULT_UTILS_ALIAS: &str = "@/lib/utils";

const BLOCK_COMMENT: &str = r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/";

/// A marker line: `//split//<id>` alone on its line, indentation allowed
pub static MARKER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^[ \t]*{}{}([A-Za-z0-9_-]+)[ \t]*\r?\n?$",
        regex::escape(SPLIT_TOKEN),
        regex::escape(COMMENT_PREFIX)
    ))
    .expect("valid marker pattern")
});

/// Comments on a line of their own (taking the line with them), then
/// block comments and trailing `//` comments anywhere else.
pub static COMMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^[ \t]*(?:{block}|//[^\r\n]*)[ \t]*\r?(?:\n|$)|{block}|[ \t]*//[^\r\n]*",
        block = BLOCK_COMMENT
    ))
    .expect("valid comment pattern")
});

/// A runtime directive line, in either quote style, semicolon optional,
/// together with the blank lines that follow it
pub static RUNTIME_DIRECTIVE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*["']use client["'];?[ \t]*\r?(?:\n|$)(?:[ \t]*\r?\n)*"#)
        .expect("valid directive pattern")
});

/// Blank lines at the very start of a file
pub static LEADING_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(?:[ \t]*\r?\n)+").expect("valid blank line pattern"));

/// Either default import alias; both are rewritten in a single pass
pub static ALIASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{}|{}",
        regex::escape(DEFAULT_COMPONENTS_ALIAS),
        regex::escape(DEFAULT_UTILS_ALIAS)
    ))
    .expect("valid alias pattern")
});
