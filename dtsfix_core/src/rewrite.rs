use crate::edits::{self, TextEdit};
use crate::module_scan::{self, DefaultExportDescriptor, ImportRecord};
use crate::trailing::{self, TrailingExports};

/// Diagnostic knobs for the pure transform. `warn` receives recoverable
/// classification failures; the default sink is silent.
#[derive(Default)]
pub struct TransformOptions<'a> {
    pub warn: Option<&'a dyn Fn(&str)>,
}

impl TransformOptions<'_> {
    pub(crate) fn emit_warning(&self, message: &str) {
        if let Some(warn) = self.warn {
            warn(message);
        }
    }
}

/// The three shapes a default export takes, resolved against the module's
/// own static imports.
#[derive(Debug)]
pub(crate) enum Classification<'a> {
    /// `export { alias as default } from 'spec'` with `alias != "default"`.
    NamedReexport {
        specifier: &'a str,
        import: Option<&'a ImportRecord>,
    },
    /// `export { default } from 'spec'`: the clause is literally `default`.
    DirectBinding {
        specifier: &'a str,
        import: Option<&'a ImportRecord>,
    },
    /// No source specifier: `export { X as default }` over local bindings.
    /// A direct `default` clause without a specifier lands here too.
    LocalOnly,
}

pub(crate) fn classify<'a>(
    descriptor: &'a DefaultExportDescriptor,
    imports: &'a [ImportRecord],
) -> Classification<'a> {
    let Some(specifier) = descriptor.statement.specifier.as_deref() else {
        return Classification::LocalOnly;
    };
    let import = imports.iter().find(|i| i.specifier == specifier);
    if descriptor.default_alias == "default" {
        Classification::DirectBinding { specifier, import }
    } else {
        Classification::NamedReexport { specifier, import }
    }
}

/// Rewrites the first `default`-exposing export statement in `code` into
/// the CommonJS `export = X` form, synthesizing a missing import when the
/// default is re-exported from another module. Returns `None` (the no-op
/// sentinel) when nothing applies; the input is then used unchanged.
/// Only the first such statement is processed; any later statement that
/// also exposes `default` is left untouched.
pub fn fix_default_cjs_exports(
    code: &str,
    file_name: &str,
    options: &TransformOptions,
) -> Option<String> {
    let descriptor = module_scan::extract_default_export(code, file_name, options)?;
    let imports = module_scan::scan_static_imports(code);
    let edits = match classify(&descriptor, &imports) {
        Classification::NamedReexport { specifier, import } => {
            rewrite_named_reexport(&descriptor, specifier, import, &imports, file_name, options)?
        }
        Classification::DirectBinding { specifier, import } => {
            rewrite_direct_binding(&descriptor, specifier, import, &imports, file_name, options)?
        }
        Classification::LocalOnly => rewrite_local_only(&descriptor, &imports),
    };
    Some(edits::apply_edits(code, edits))
}

// export { resolve as default } from 'pathe';
fn rewrite_named_reexport(
    descriptor: &DefaultExportDescriptor,
    specifier: &str,
    import: Option<&ImportRecord>,
    imports: &[ImportRecord],
    file_name: &str,
    options: &TransformOptions,
) -> Option<Vec<TextEdit>> {
    let alias = &descriptor.default_alias;
    let span = descriptor.statement.span.clone();
    match import {
        Some(record) => {
            if record.named_bindings.get(alias).map(String::as_str) == Some(alias.as_str()) {
                Some(vec![TextEdit::replace(
                    span,
                    named_replacement(alias, &descriptor.co_exports),
                )])
            } else {
                options.emit_warning(&format!(
                    "Cannot parse \"{alias}\" named export from {specifier} import at {file_name}!.",
                ));
                None
            }
        }
        None => Some(vec![
            synthesized_import_edit(imports, &format!("import {{ {alias} }} from '{specifier}';")),
            TextEdit::replace(span, named_replacement(alias, &descriptor.co_exports)),
        ]),
    }
}

fn named_replacement(alias: &str, co_exports: &[String]) -> String {
    if co_exports.is_empty() {
        format!("export = {alias}")
    } else {
        format!(
            "// @ts-ignore\nexport = {alias};\nexport {{ {} }}",
            co_exports.join(", "),
        )
    }
}

// export { default } from 'magic-string';
fn rewrite_direct_binding(
    descriptor: &DefaultExportDescriptor,
    specifier: &str,
    import: Option<&ImportRecord>,
    imports: &[ImportRecord],
    file_name: &str,
    options: &TransformOptions,
) -> Option<Vec<TextEdit>> {
    let span = descriptor.statement.span.clone();
    match import {
        Some(record) => match record.default_binding.as_deref() {
            Some(name) if !name.is_empty() => Some(vec![TextEdit::replace(
                span,
                direct_replacement(name, &descriptor.co_exports, specifier),
            )]),
            _ => {
                options.emit_warning(&format!(
                    "Cannot parse default export name from {specifier} import at {file_name}!.",
                ));
                None
            }
        },
        None => Some(vec![
            synthesized_import_edit(imports, &format!("import _default from '{specifier}';")),
            TextEdit::replace(
                span,
                direct_replacement("_default", &descriptor.co_exports, specifier),
            ),
        ]),
    }
}

fn direct_replacement(binding: &str, co_exports: &[String], specifier: &str) -> String {
    if co_exports.is_empty() {
        format!("export = {binding}")
    } else {
        // co-exports were never bound locally, so they keep their source
        format!(
            "// @ts-ignore\nexport = {binding};\nexport {{ {} }} from '{specifier}'",
            co_exports.join(", "),
        )
    }
}

// export { xxx as default };
fn rewrite_local_only(
    descriptor: &DefaultExportDescriptor,
    imports: &[ImportRecord],
) -> Vec<TextEdit> {
    let alias = &descriptor.default_alias;
    let bindings = module_scan::import_binding_names(imports);
    let replacement = match trailing::format_trailing_exports(&descriptor.co_exports, &bindings) {
        TrailingExports::Empty => format!("export = {alias}"),
        TrailingExports::Values(clauses) => format!(
            "// @ts-ignore\nexport = {alias};\nexport {{ {} }}",
            clauses.join(", "),
        ),
        TrailingExports::Types(names) => format!(
            "// @ts-ignore\nexport = {alias};\nexport type {{ {} }}",
            names.join(", "),
        ),
    };
    vec![TextEdit::replace(
        descriptor.statement.span.clone(),
        replacement,
    )]
}

/// A synthesized import goes immediately after the last pre-existing
/// import, or at the very start of the file when there are none.
fn synthesized_import_edit(imports: &[ImportRecord], statement: &str) -> TextEdit {
    match imports.last().map(|record| record.end).filter(|&end| end > 0) {
        Some(end) => TextEdit::insert(end, format!("\n{statement}\n")),
        None => TextEdit::insert(0, format!("{statement}\n")),
    }
}
