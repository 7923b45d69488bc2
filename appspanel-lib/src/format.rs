//! Positional string templates.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("Invalid placeholder pattern"));

/// Replaces `{n}` in `template` with `args[n]`.
///
/// Placeholders without a matching argument are left as they are.
///
/// ```
/// use appspanel_lib::format::format_template;
///
/// assert_eq!(format_template("{0}/remove/", &["u1/u3"]), "u1/u3/remove/");
/// ```
pub fn format_template<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|n| args.get(n))
                .map(|arg| arg.as_ref().to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
