use similar_asserts::assert_eq;

use crate::module_scan::{
    extract_default_export, find_default_export, import_binding_names, scan_static_imports,
};
use crate::rewrite::TransformOptions;

#[test]
fn scan_collects_default_import() {
    let code = "import MagicString from 'magic-string';\n";
    let imports = scan_static_imports(code);
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].specifier, "magic-string");
    assert_eq!(imports[0].default_binding.as_deref(), Some("MagicString"));
    assert!(imports[0].named_bindings.is_empty());
    assert_eq!(imports[0].end, code.trim_end().len());
}

#[test]
fn scan_collects_named_imports_with_aliases() {
    let imports = scan_static_imports("import { resolve, join as joinPath } from 'pathe';\n");
    assert_eq!(imports.len(), 1);
    assert_eq!(
        imports[0].named_bindings.get("resolve").map(String::as_str),
        Some("resolve"),
    );
    assert_eq!(
        imports[0].named_bindings.get("join").map(String::as_str),
        Some("joinPath"),
    );
    assert_eq!(imports[0].default_binding, None);
}

#[test]
fn scan_collects_mixed_default_and_named() {
    let imports = scan_static_imports("import MS, { type Options } from 'magic-string';\n");
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].default_binding.as_deref(), Some("MS"));
    assert_eq!(
        imports[0].named_bindings.get("Options").map(String::as_str),
        Some("Options"),
    );
}

#[test]
fn scan_collects_namespace_import() {
    let imports = scan_static_imports("import * as path from 'node:path';\n");
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].namespace_binding.as_deref(), Some("path"));
}

#[test]
fn scan_collects_type_only_import() {
    let imports = scan_static_imports("import type { Plugin } from 'rollup';\n");
    assert_eq!(imports.len(), 1);
    assert_eq!(
        imports[0].named_bindings.get("Plugin").map(String::as_str),
        Some("Plugin"),
    );
}

#[test]
fn scan_excludes_side_effect_imports() {
    let code = "import 'polyfill';\nimport A from 'a';\nimport 'late-polyfill';\n";
    let imports = scan_static_imports(code);
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].specifier, "a");
    // insertion point tracking must not be moved by the trailing
    // side-effect import
    assert_eq!(imports[0].end, code.find("import 'late").unwrap() - 1);
}

#[test]
fn scan_handles_multiline_named_import() {
    let code = "import {\n  findExports,\n  findStaticImports,\n} from 'mlly';\n";
    let imports = scan_static_imports(code);
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].named_bindings.len(), 2);
    assert_eq!(imports[0].end, code.trim_end().len());
}

#[test]
fn binding_names_cover_default_named_and_namespace() {
    let imports = scan_static_imports(
        "import D, { a, b as c } from 'x';\nimport * as ns from 'y';\n",
    );
    let names = import_binding_names(&imports);
    for expected in ["D", "a", "c", "ns"] {
        assert!(names.contains(expected), "missing {expected} in {names:?}");
    }
    assert!(!names.contains("b"));
}

#[test]
fn find_default_export_skips_statements_without_default() {
    let code = "export { A };\nexport { B as default };\nexport { C as default };\n";
    let record = find_default_export(code).unwrap();
    assert_eq!(&code[record.span.clone()], "export { B as default };");
}

#[test]
fn find_default_export_returns_none_without_default() {
    assert!(find_default_export("export { A, B };\nexport { C } from 'd';\n").is_none());
}

#[test]
fn find_default_export_ignores_default_as_named_reexport() {
    // `default as Foo` exports the name Foo, not default
    assert!(find_default_export("export { default as Foo } from 'pkg';\n").is_none());
}

#[test]
fn extract_splits_alias_and_co_exports() {
    let code = "export { A, B as default, type C } from 'pkg';\n";
    let descriptor =
        extract_default_export(code, "index.d.mts", &TransformOptions::default()).unwrap();
    assert_eq!(descriptor.default_alias, "B");
    assert_eq!(descriptor.co_exports, vec!["A".to_string(), "type C".to_string()]);
    assert_eq!(descriptor.statement.specifier.as_deref(), Some("pkg"));
}

#[test]
fn extract_direct_default_keeps_literal_alias() {
    let descriptor = extract_default_export(
        "export { default } from 'magic-string';\n",
        "index.d.mts",
        &TransformOptions::default(),
    )
    .unwrap();
    assert_eq!(descriptor.default_alias, "default");
    assert!(descriptor.co_exports.is_empty());
}

#[test]
fn extract_warns_on_bare_export_default_statement() {
    let warnings = std::cell::RefCell::new(Vec::new());
    let warn = |message: &str| warnings.borrow_mut().push(message.to_string());
    let options = TransformOptions { warn: Some(&warn) };
    let descriptor = extract_default_export("export default MagicString;\n", "all.d.mts", &options);
    assert!(descriptor.is_none());
    assert_eq!(
        warnings.borrow().as_slice(),
        ["No default export found in all.d.mts, it contains default export but cannot be parsed."],
    );
}

#[test]
fn extract_is_silent_when_no_default_export_exists() {
    let warnings = std::cell::RefCell::new(Vec::new());
    let warn = |message: &str| warnings.borrow_mut().push(message.to_string());
    let options = TransformOptions { warn: Some(&warn) };
    assert!(extract_default_export("export { A };\n", "types.d.mts", &options).is_none());
    assert!(warnings.borrow().is_empty());
}
