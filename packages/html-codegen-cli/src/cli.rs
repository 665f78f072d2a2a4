use std::path::PathBuf;

use clap::Parser;
use html_codegen::Config;

/// Generate the HTML and SVG element builders and their smoke tests.
#[derive(Parser, Debug)]
#[clap(name = "html-codegen", version)]
pub struct Cli {
    /// Directory the generated files are written to.
    #[clap(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Module providing the element runtime, relative to the generated builder module.
    #[clap(long, default_value = "super")]
    pub runtime_path: String,

    /// Only check that the generated files are up to date. Nothing is written.
    #[clap(long)]
    pub check: bool,

    /// Enable verbose logging.
    #[clap(short)]
    pub v: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            out_dir: self.out_dir.clone(),
            runtime_path: self.runtime_path.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_default_config() {
        let cli = Cli::try_parse_from(["html-codegen"]).unwrap();
        assert!(!cli.check);
        assert_eq!(cli.config(), Config::default());
    }

    #[test]
    fn flags_reach_the_config() {
        let cli = Cli::try_parse_from([
            "html-codegen",
            "--out-dir",
            "src/app",
            "--runtime-path",
            "crate::app",
            "--check",
            "-v",
        ])
        .unwrap();

        assert!(cli.check);
        assert!(cli.v);
        let config = cli.config();
        assert_eq!(config.out_dir, PathBuf::from("src/app"));
        assert_eq!(config.runtime_path, "crate::app");
    }
}
