use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "dtsfix",
    version,
    about = "Rewrite default exports in declaration files into CommonJS export assignments"
)]
pub struct DtsfixCli {
    /// Declaration file to rewrite (in place unless DEST is given)
    pub source: PathBuf,

    /// Destination file; switches to the copy pipeline, which also rewrites
    /// relative specifier extensions for the destination flavor
    pub dest: Option<PathBuf>,

    /// Keep relative specifier extensions as-is in copy mode
    #[arg(long = "no-local-rewrite", default_value_t = false)]
    pub no_local_rewrite: bool,

    /// Print per-file results and engine warnings
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}
