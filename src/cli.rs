use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "verd")]
#[command(about = "List one directory as a styled table", long_about = None)]
pub struct Cli {
    /// Directory to list (defaults to the current directory; when
    /// several paths are given the last one wins)
    pub paths: Vec<PathBuf>,

    /// Show hidden entries
    #[arg(short, long)]
    pub all: bool,

    /// List files only, suppressing directories
    #[arg(short, long)]
    pub files: bool,
}

impl Cli {
    pub fn target(&self) -> PathBuf {
        self.paths
            .last()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_defaults_to_current_dir() {
        let cli = Cli::parse_from(["verd"]);
        assert_eq!(cli.target(), PathBuf::from("."));
    }

    #[test]
    fn last_path_wins() {
        let cli = Cli::parse_from(["verd", "/tmp", "/var"]);
        assert_eq!(cli.target(), PathBuf::from("/var"));
    }

    #[test]
    fn flags_parse_in_short_and_long_form() {
        let cli = Cli::parse_from(["verd", "-a", "--files", "some/dir"]);
        assert!(cli.all);
        assert!(cli.files);
        assert_eq!(cli.target(), PathBuf::from("some/dir"));
    }
}
