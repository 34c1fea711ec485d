use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static TYPE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*type\s+").unwrap());

/// How the co-exports left behind by the removed `default` clause are
/// re-emitted after the `export =` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TrailingExports {
    Empty,
    /// Original clause texts, re-exported as values.
    Values(Vec<String>),
    /// Stripped type names, re-exported as `export type { ... }`.
    Types(Vec<String>),
}

/// Left-to-right scan with a sticky external flag: the first clause that is
/// not a `type`-prefixed name outside the import bindings forces every
/// clause (including earlier decisions' remainder) to value form. The rule
/// intentionally does not re-check later entries individually.
pub(crate) fn format_trailing_exports(
    co_exports: &[String],
    import_bindings: &BTreeSet<String>,
) -> TrailingExports {
    if co_exports.is_empty() {
        return TrailingExports::Empty;
    }

    let mut saw_external = false;
    let mut type_names = Vec::new();
    for clause in co_exports {
        if saw_external {
            continue;
        }
        if !import_bindings.contains(clause.as_str()) {
            if let Some(name) = strip_type_prefix(clause) {
                if !import_bindings.contains(&name) {
                    type_names.push(name);
                    continue;
                }
            }
        }
        saw_external = true;
    }

    if saw_external {
        TrailingExports::Values(co_exports.to_vec())
    } else {
        TrailingExports::Types(type_names)
    }
}

fn strip_type_prefix(clause: &str) -> Option<String> {
    TYPE_PREFIX_RE.find(clause).map(|m| {
        let mut name = String::with_capacity(clause.len());
        name.push_str(&clause[..m.start()]);
        name.push_str(&clause[m.end()..]);
        name.trim().to_string()
    })
}
