use std::path::Path;

use similar_asserts::assert_eq;

use dtsfix::file_transform::{fix_dts_file, transform_file};
use dtsfix_core::rewrite::TransformOptions;

fn write_file(path: &Path, contents: &str) {
    std::fs::write(path, contents).unwrap();
}

#[test]
fn transform_file_rewrites_in_place_and_reports_change() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("index.d.cts");
    write_file(
        &file,
        "import Pkg from 'pkg';\nexport { default } from 'pkg';\n",
    );

    let changed = transform_file(&file, &TransformOptions::default()).unwrap();
    assert!(changed);
    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        "import Pkg from 'pkg';\nexport = Pkg\n",
    );
}

#[test]
fn transform_file_no_op_leaves_bytes_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("types.d.cts");
    let original = "export interface Options {}\nexport { findExports };\n";
    write_file(&file, original);

    let changed = transform_file(&file, &TransformOptions::default()).unwrap();
    assert!(!changed);
    assert_eq!(std::fs::read_to_string(&file).unwrap(), original);
}

#[test]
fn fix_dts_file_returns_text_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("index.d.cts");
    let original = "declare function plugin(): void;\nexport { plugin as default };\n";
    write_file(&file, original);

    let rewritten = fix_dts_file(&file, &TransformOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(
        rewritten,
        "declare function plugin(): void;\nexport = plugin\n",
    );
    assert_eq!(std::fs::read_to_string(&file).unwrap(), original);
}

#[test]
fn transform_file_missing_path_is_an_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("absent.d.cts");
    let err = transform_file(&missing, &TransformOptions::default()).unwrap_err();
    assert!(err.to_string().contains("io error at"), "{err}");
}
