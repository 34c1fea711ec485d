use std::cell::RefCell;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use dtsfix::args::DtsfixCli;
use dtsfix::file_transform::{self, CopyOptions};
use dtsfix::trace;
use dtsfix_core::error::DtsfixError;
use dtsfix_core::rewrite::TransformOptions;

fn main() -> ExitCode {
    let cli = DtsfixCli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dtsfix: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &DtsfixCli) -> Result<(), DtsfixError> {
    let started_at = Instant::now();
    let warnings: RefCell<Vec<String>> = RefCell::new(Vec::new());
    let warn = |message: &str| {
        if cli.verbose {
            eprintln!("dtsfix: {message}");
        }
        warnings.borrow_mut().push(message.to_string());
    };
    let source_display = cli.source.to_string_lossy().to_string();

    match &cli.dest {
        Some(dest) => {
            let keep_specifiers: &dyn Fn(&str, &str, &str) -> String =
                &|code, _source, _dest| code.to_string();
            let copy = CopyOptions {
                transform: TransformOptions { warn: Some(&warn) },
                transform_local_imports: cli.no_local_rewrite.then_some(keep_specifiers),
            };
            let result = file_transform::transform_file_to(&cli.source, dest, &copy);
            let dest_display = dest.to_string_lossy().to_string();
            trace::maybe_write_run_trace(
                "copy",
                &source_display,
                Some(&dest_display),
                None,
                Some(started_at),
                warnings.borrow().clone(),
            );
            result?;
            if cli.verbose {
                println!("{source_display} -> {dest_display}");
            }
        }
        None => {
            let options = TransformOptions { warn: Some(&warn) };
            let result = file_transform::transform_file(&cli.source, &options);
            trace::maybe_write_run_trace(
                "file",
                &source_display,
                None,
                result.as_ref().ok().copied(),
                Some(started_at),
                warnings.borrow().clone(),
            );
            let changed = result?;
            if cli.verbose {
                let state = if changed { "rewritten" } else { "unchanged" };
                println!("{source_display}: {state}");
            }
        }
    }
    Ok(())
}
