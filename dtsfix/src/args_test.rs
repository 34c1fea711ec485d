use std::path::PathBuf;

use clap::Parser;

use crate::args::DtsfixCli;

#[test]
fn parses_in_place_invocation() {
    let cli = DtsfixCli::parse_from(["dtsfix", "dist/index.d.cts"]);
    assert_eq!(cli.source, PathBuf::from("dist/index.d.cts"));
    assert!(cli.dest.is_none());
    assert!(!cli.no_local_rewrite);
    assert!(!cli.verbose);
}

#[test]
fn parses_copy_invocation_with_flags() {
    let cli = DtsfixCli::parse_from([
        "dtsfix",
        "dist/index.d.mts",
        "dist/index.d.cts",
        "--no-local-rewrite",
        "--verbose",
    ]);
    assert_eq!(cli.source, PathBuf::from("dist/index.d.mts"));
    assert_eq!(cli.dest, Some(PathBuf::from("dist/index.d.cts")));
    assert!(cli.no_local_rewrite);
    assert!(cli.verbose);
}
