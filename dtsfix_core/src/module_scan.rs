use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::TransformOptions;

static STATIC_IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)^[ \t]*import\b(?:\s+type\b)?(?P<clause>[^'";]*?)\s*\bfrom\s*['"](?P<specifier>[^'"]+)['"][ \t]*;?"#,
    )
    .unwrap()
});

static NAMED_EXPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"export\s*\{(?P<clauses>[^}]*)\}(?:\s*from\s*['"](?P<specifier>[^'"]+)['"])?[ \t]*;?"#,
    )
    .unwrap()
});

static EXPORT_DEFAULT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"export\s+default\b[^;\n]*;?").unwrap());

static AS_DEFAULT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*as\s+default\s*").unwrap());

/// One static import statement and the local names it binds. Imports that
/// bind nothing (side-effect imports, empty brace lists) are never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRecord {
    pub specifier: String,
    pub default_binding: Option<String>,
    /// remote name -> local name
    pub named_bindings: BTreeMap<String, String>,
    pub namespace_binding: Option<String>,
    /// Offset one past the statement's closing quote and trailing semicolon.
    pub end: usize,
}

impl ImportRecord {
    fn has_bindings(&self) -> bool {
        self.default_binding.is_some()
            || self.namespace_binding.is_some()
            || !self.named_bindings.is_empty()
    }

    pub fn local_names(&self) -> impl Iterator<Item = &str> {
        self.default_binding
            .as_deref()
            .into_iter()
            .chain(self.namespace_binding.as_deref())
            .chain(self.named_bindings.values().map(String::as_str))
    }
}

/// An export statement that can expose `default`: the brace form
/// (`export { ... }`, optionally with a source) or a bare `export default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub span: Range<usize>,
    pub clauses: Vec<String>,
    pub specifier: Option<String>,
    pub brace_form: bool,
}

impl ExportRecord {
    pub fn exported_names(&self) -> Vec<String> {
        if !self.brace_form {
            return vec!["default".to_string()];
        }
        self.clauses.iter().map(|c| clause_exported_name(c)).collect()
    }

    pub fn exposes_default(&self) -> bool {
        self.exported_names().iter().any(|n| n == "default")
    }
}

#[derive(Debug, Clone)]
pub struct DefaultExportDescriptor {
    pub statement: ExportRecord,
    /// The local/imported name bound to `default`, or the literal text
    /// `default` when the clause was direct.
    pub default_alias: String,
    /// Every other clause of the same statement, verbatim and in order.
    pub co_exports: Vec<String>,
}

pub fn scan_static_imports(code: &str) -> Vec<ImportRecord> {
    STATIC_IMPORT_RE
        .captures_iter(code)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let mut record = ImportRecord {
                specifier: caps["specifier"].to_string(),
                end: m.end(),
                ..ImportRecord::default()
            };
            parse_import_clause(&caps["clause"], &mut record);
            record.has_bindings().then_some(record)
        })
        .collect()
}

/// Every local name any static import binds, for deciding whether a
/// trailing co-export refers to imported or purely local declarations.
pub fn import_binding_names(imports: &[ImportRecord]) -> BTreeSet<String> {
    imports
        .iter()
        .flat_map(|record| record.local_names().map(str::to_string))
        .collect()
}

/// First export statement (by position) whose exported-name set includes
/// `default`. Later ones are ignored.
pub fn find_default_export(code: &str) -> Option<ExportRecord> {
    let braced = NAMED_EXPORT_RE.captures_iter(code).map(|caps| {
        let m = caps.get(0).unwrap();
        ExportRecord {
            span: m.start()..m.end(),
            clauses: caps["clauses"]
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
            specifier: caps.name("specifier").map(|s| s.as_str().to_string()),
            brace_form: true,
        }
    });
    let bare = EXPORT_DEFAULT_RE.find_iter(code).map(|m| ExportRecord {
        span: m.start()..m.end(),
        clauses: Vec::new(),
        specifier: None,
        brace_form: false,
    });

    braced
        .chain(bare)
        .filter(ExportRecord::exposes_default)
        .min_by_key(|record| record.span.start)
}

/// Splits the statement's clause list into the default alias and the
/// co-exports. Statements that expose `default` without a parsable clause
/// (e.g. `export default <expr>`) are reported through the warn sink.
pub fn extract_default_export(
    code: &str,
    file_name: &str,
    options: &TransformOptions,
) -> Option<DefaultExportDescriptor> {
    let statement = find_default_export(code)?;
    if !statement.brace_form {
        warn_unparsable(file_name, options);
        return None;
    }

    let mut default_alias: Option<String> = None;
    let mut co_exports = Vec::new();
    for clause in &statement.clauses {
        if clause.as_str() == "default" {
            default_alias = Some(clause.clone());
            continue;
        }
        if let Some(m) = AS_DEFAULT_RE.find(clause) {
            default_alias = Some(format!("{}{}", &clause[..m.start()], &clause[m.end()..]));
        } else {
            co_exports.push(clause.clone());
        }
    }

    let Some(default_alias) = default_alias else {
        warn_unparsable(file_name, options);
        return None;
    };

    Some(DefaultExportDescriptor {
        statement,
        default_alias,
        co_exports,
    })
}

fn warn_unparsable(file_name: &str, options: &TransformOptions) {
    options.emit_warning(&format!(
        "No default export found in {file_name}, it contains default export but cannot be parsed.",
    ));
}

fn clause_exported_name(clause: &str) -> String {
    let mut tokens: Vec<&str> = clause.split_whitespace().collect();
    if tokens.first() == Some(&"type") && tokens.len() > 1 {
        tokens.remove(0);
    }
    match tokens.as_slice() {
        [_, "as", local] => (*local).to_string(),
        [name] => (*name).to_string(),
        _ => clause.trim().to_string(),
    }
}

fn parse_import_clause(clause: &str, record: &mut ImportRecord) {
    let mut head = clause;
    if let Some(open) = clause.find('{') {
        let close = clause.rfind('}').unwrap_or(clause.len());
        if close > open {
            for entry in clause[open + 1..close].split(',') {
                parse_named_entry(entry, &mut record.named_bindings);
            }
        }
        head = &clause[..open];
    }
    for token in head.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some(rest) = token.strip_prefix('*') {
            if let Some(name) = rest.trim_start().strip_prefix("as") {
                let name = name.trim();
                if !name.is_empty() {
                    record.namespace_binding = Some(name.to_string());
                }
            }
        } else if is_identifier(token) {
            record.default_binding = Some(token.to_string());
        }
    }
}

fn parse_named_entry(entry: &str, named_bindings: &mut BTreeMap<String, String>) {
    let mut tokens: Vec<&str> = entry.split_whitespace().collect();
    if tokens.first() == Some(&"type") && tokens.len() > 1 {
        tokens.remove(0);
    }
    match tokens.as_slice() {
        [name] if is_identifier(name) => {
            named_bindings.insert((*name).to_string(), (*name).to_string());
        }
        [remote, "as", local] => {
            named_bindings.insert((*remote).to_string(), (*local).to_string());
        }
        _ => {}
    }
}

fn is_identifier(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        && !token.chars().next().is_some_and(|c| c.is_ascii_digit())
}
