use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "bdash", about = concat!("bdash v", env!("CARGO_PKG_VERSION"), " - a terminal dashboard for bd issue trackers"), version)]
pub struct Cli {
    /// Refresh interval in seconds (0 disables auto-refresh)
    #[arg(short, long)]
    pub refresh: Option<u64>,

    /// Max issues per status bucket (0 means unlimited)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Run against a different bd workspace directory
    #[arg(short = 'C', long = "dir")]
    pub dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unset() {
        let cli = Cli::parse_from(["bdash"]);
        assert!(cli.refresh.is_none());
        assert!(cli.limit.is_none());
        assert!(cli.dir.is_none());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from(["bdash", "--refresh", "0", "-l", "50", "-C", "/tmp/project"]);
        assert_eq!(cli.refresh, Some(0));
        assert_eq!(cli.limit, Some(50));
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/project")));
    }
}
