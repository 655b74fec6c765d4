use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::core::{DEFAULT_IGNORE, IgnoreSet, RenderOptions};
use crate::error::CliError;

pub const DEFAULT_IGNORE_HELP: &str =
    "Default ignored directories: node_modules, .git, __pycache__, .venv, venv, env";

#[derive(Parser, Debug)]
#[command(name = "maptree", version)]
#[command(about = "maptree - Directory tree visualizer", long_about = None)]
#[command(after_help = DEFAULT_IGNORE_HELP)]
pub struct Cli {
    /// Root directory to print (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Show all directories (ignore nothing)
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Maximum depth to display (default: unlimited)
    #[arg(short = 'l', long = "level", value_name = "N")]
    pub level: Option<String>,

    /// Extra names or globs to ignore, pipe-separated (e.g. "dist|*.log")
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,
}

impl Cli {
    pub fn root(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn render_options(&self) -> anyhow::Result<RenderOptions> {
        let max_depth = self.level.as_deref().map(parse_level).transpose()?;

        let defaults: &[&str] = if self.all { &[] } else { &DEFAULT_IGNORE };
        let extra = self.ignore.iter().flat_map(|pattern| pattern.split('|'));
        let ignore = IgnoreSet::new(defaults.iter().copied().chain(extra))?;

        Ok(RenderOptions { ignore, max_depth })
    }
}

/// Whether `-h`/`--help` appears anywhere in the raw arguments.
///
/// Checked before clap parses so help wins even where clap would read the
/// flag as a missing `--level` value.
pub fn wants_help<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter()
        .any(|arg| arg.as_ref() == "-h" || arg.as_ref() == "--help")
}

fn parse_level(raw: &str) -> Result<usize, CliError> {
    raw.trim()
        .parse()
        .map_err(|_| CliError::InvalidLevel(raw.to_owned()))
}

/// Reject roots that are missing or not directories. Symlinks are followed.
pub fn validate_root(path: &Path) -> Result<(), CliError> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(CliError::InvalidPath(path.to_path_buf())),
        Err(err) => {
            log::debug!("cannot stat {}: {err}", path.display());
            Err(CliError::InvalidPath(path.to_path_buf()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("maptree").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn help_lists_every_default_name() {
        assert_eq!(
            DEFAULT_IGNORE_HELP,
            format!("Default ignored directories: {}", DEFAULT_IGNORE.join(", "))
        );
    }

    #[test]
    fn defaults_to_current_directory_and_default_ignores() {
        let cli = parse(&[]);
        assert_eq!(cli.root(), PathBuf::from("."));

        let options = cli.render_options().unwrap();
        assert_eq!(options.max_depth, None);
        assert!(options.ignore.matches("node_modules"));
        assert!(options.ignore.matches("__pycache__"));
    }

    #[test]
    fn all_clears_the_ignore_set() {
        let options = parse(&["--all"]).render_options().unwrap();
        assert!(options.ignore.is_empty());

        let options = parse(&["-a", "some/dir"]).render_options().unwrap();
        assert!(!options.ignore.matches(".git"));
    }

    #[test]
    fn level_accepts_non_negative_integers() {
        let cli = parse(&["-l", "2", "src"]);
        assert_eq!(cli.root(), PathBuf::from("src"));
        assert_eq!(cli.render_options().unwrap().max_depth, Some(2));

        let cli = parse(&["--level", "0"]);
        assert_eq!(cli.render_options().unwrap().max_depth, Some(0));
    }

    #[test]
    fn level_rejects_non_integers() {
        let err = parse(&["--level", "deep"]).render_options().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidLevel(value)) if value == "deep"
        ));
        assert!(parse(&["-l", "1.5"]).render_options().is_err());
    }

    #[test]
    fn help_is_found_anywhere_in_raw_args() {
        assert!(wants_help(["-l", "-h"]));
        assert!(wants_help(["--level", "--help"]));
        assert!(wants_help(["-a", "dir", "--help"]));
        assert!(!wants_help(["-l", "2", "dir"]));
        assert!(!wants_help(["--helpful", "-hh"]));
        assert!(!wants_help(Vec::<String>::new()));
    }

    #[test]
    fn level_without_value_is_a_parse_error() {
        assert!(Cli::try_parse_from(["maptree", "--level"]).is_err());
    }

    #[test]
    fn extra_ignore_patterns_extend_defaults_and_survive_all() {
        let options = parse(&["-I", "dist|*.log"]).render_options().unwrap();
        assert!(options.ignore.matches("dist"));
        assert!(options.ignore.matches("app.log"));
        assert!(options.ignore.matches(".git"));

        let options = parse(&["-a", "-I", "dist"]).render_options().unwrap();
        assert!(options.ignore.matches("dist"));
        assert!(!options.ignore.matches(".git"));
    }

    #[test]
    fn validate_root_requires_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        std::fs::write(&file, "content").unwrap();

        assert!(validate_root(temp.path()).is_ok());
        assert!(matches!(validate_root(&file), Err(CliError::InvalidPath(_))));
        assert!(matches!(
            validate_root(&temp.path().join("missing")),
            Err(CliError::InvalidPath(_))
        ));
    }
}
