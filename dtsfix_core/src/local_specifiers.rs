use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static MJS_SPECIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<lead>\bfrom\s*)(?P<quote>["'])(?P<path>\.\.?/[^"']*)\.mjs(?P<close>["'])"#)
        .unwrap()
});

static JS_SPECIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<lead>\bfrom\s*)(?P<quote>["'])(?P<path>\.\.?/[^"']*)\.js(?P<close>["'])"#)
        .unwrap()
});

/// Rewrites the extension of every relative `from '...'` specifier for the
/// destination module flavor: `.d.mts` sources carry `.mjs` specifiers,
/// everything else `.js`; `.d.ts` destinations take `.js`, everything else
/// `.cjs`. Bare-package and absolute specifiers are untouched, quote style
/// is preserved, and re-running with the same destination is a fixed point.
pub fn rewrite_local_specifiers(code: &str, source_file: &str, dest_file: &str) -> String {
    let pattern: &Regex = if source_file.ends_with(".d.mts") {
        &MJS_SPECIFIER_RE
    } else {
        &JS_SPECIFIER_RE
    };
    let dest_ext = if dest_file.ends_with(".d.ts") {
        "js"
    } else {
        "cjs"
    };
    pattern
        .replace_all(code, |caps: &Captures| {
            format!(
                "{}{}{}.{}{}",
                &caps["lead"], &caps["quote"], &caps["path"], dest_ext, &caps["close"],
            )
        })
        .into_owned()
}
