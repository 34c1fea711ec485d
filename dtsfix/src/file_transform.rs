use std::path::Path;

use dtsfix_core::error::DtsfixError;
use dtsfix_core::local_specifiers;
use dtsfix_core::rewrite::{TransformOptions, fix_default_cjs_exports};

/// Options for the cross-file copy pipeline. `transform_local_imports`
/// replaces the default relative-specifier extension rewrite; the callback
/// receives the code plus source and destination file names.
#[derive(Default)]
pub struct CopyOptions<'a> {
    pub transform: TransformOptions<'a>,
    pub transform_local_imports: Option<&'a dyn Fn(&str, &str, &str) -> String>,
}

/// Reads a declaration file and returns the rewritten text without writing
/// anything. `Ok(None)` means the transform was a no-op.
pub fn fix_dts_file(
    path: &Path,
    options: &TransformOptions,
) -> Result<Option<String>, DtsfixError> {
    let code = read_to_string(path)?;
    Ok(fix_default_cjs_exports(
        &code,
        &path.to_string_lossy(),
        options,
    ))
}

/// Rewrites a declaration file in place. Returns whether the file changed;
/// a no-op leaves the file untouched on disk.
pub fn transform_file(path: &Path, options: &TransformOptions) -> Result<bool, DtsfixError> {
    match fix_dts_file(path, options)? {
        Some(rewritten) => {
            write(path, &rewritten)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Rewrites `source` into `dest`: applies the default-export transform
/// (falling back to the original text on no-op), then the local-specifier
/// pass for the destination flavor. Refuses to run when both paths are the
/// same file, since that could clobber the only copy of the source.
pub fn transform_file_to(
    source: &Path,
    dest: &Path,
    options: &CopyOptions,
) -> Result<(), DtsfixError> {
    if source == dest {
        return Err(DtsfixError::SamePathTransform {
            path: source.to_path_buf(),
        });
    }
    let code = read_to_string(source)?;
    let source_name = source.to_string_lossy();
    let dest_name = dest.to_string_lossy();
    let rewritten =
        fix_default_cjs_exports(&code, &source_name, &options.transform).unwrap_or(code);
    let localized = match options.transform_local_imports {
        Some(transform) => transform(&rewritten, &source_name, &dest_name),
        None => local_specifiers::rewrite_local_specifiers(&rewritten, &source_name, &dest_name),
    };
    write(dest, &localized)
}

fn read_to_string(path: &Path) -> Result<String, DtsfixError> {
    std::fs::read_to_string(path).map_err(|source| DtsfixError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result<(), DtsfixError> {
    std::fs::write(path, contents).map_err(|source| DtsfixError::Io {
        path: path.to_path_buf(),
        source,
    })
}
