//! Text clean-up applied to rendered Markdown before it is written

use regex::Regex;
use std::sync::OnceLock;

/// First line of every generated page
pub const LINT_DIRECTIVE: &str = "<!-- markdownlint-disable MD024 MD028 MD033 MD036 -->";

fn rfc_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[([^\]]+)\]\(https://tools\.ietf\.org[^)]+\)").expect("valid regex")
    })
}

fn generator_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\A<!-- Generator: [^\n]*? v[\d.]+ -->[ \t]*(?:\r?\n)*").expect("valid regex")
    })
}

/// Post-process rendered Markdown, in order:
///
/// 1. `https://tools.ietf.org` links in the responses tables become their plain text
/// 2. a leading generator comment and the blank lines after it are dropped
/// 3. the markdownlint directive is prepended
/// 4. trailing whitespace is cut down to a single newline
pub fn postprocess(rendered: &str) -> String {
    let unlinked = rfc_link().replace_all(rendered, "$1");
    let body = generator_comment().replace(&unlinked, "");

    let mut out = format!("{}\n{}", LINT_DIRECTIVE, body);
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}
