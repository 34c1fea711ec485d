use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use dtsfix_core::rewrite::{TransformOptions, fix_default_cjs_exports};

static DECLARATION_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.d\.c?ts$").unwrap());

/// The slice of a compiled-output chunk descriptor the render hook needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkInfo {
    pub file_name: String,
    pub exports: Vec<String>,
    pub is_entry: bool,
}

/// Declaration-file chunk with a default export, entry or not.
pub fn cjs_exports_dts_matcher(info: &ChunkInfo) -> bool {
    !info.exports.is_empty()
        && info.exports.iter().any(|name| name == "default")
        && DECLARATION_SUFFIX_RE.is_match(&info.file_name)
}

/// Default eligibility: additionally requires the chunk to be an entry
/// output.
pub fn default_cjs_exports_dts_matcher(info: &ChunkInfo) -> bool {
    cjs_exports_dts_matcher(info) && info.is_entry
}

#[derive(Default)]
pub struct RenderHookOptions<'a> {
    pub transform: TransformOptions<'a>,
    /// Overrides the entry-only eligibility predicate.
    pub matcher: Option<&'a dyn Fn(&ChunkInfo) -> bool>,
}

/// Build-adapter entry point: gates each rendered chunk through the
/// eligibility predicate and runs the classifier/rewrite pipeline on the
/// eligible ones. The local-specifier pass is never applied here; it
/// belongs to the file-copy pipeline.
pub struct RenderHook<'a> {
    options: RenderHookOptions<'a>,
}

impl<'a> RenderHook<'a> {
    pub fn new(options: RenderHookOptions<'a>) -> Self {
        Self { options }
    }

    pub fn render_chunk(&self, code: &str, info: &ChunkInfo) -> Option<String> {
        let eligible = match self.options.matcher {
            Some(matcher) => matcher(info),
            None => default_cjs_exports_dts_matcher(info),
        };
        if !eligible {
            return None;
        }
        fix_default_cjs_exports(code, &info.file_name, &self.options.transform)
    }
}
