//! Command-line arguments.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use hostfetch_core::collector::{DEFAULT_MAX_LINE_LEN, HostPaths};

/// Print a short summary of this host.
#[derive(Parser, Debug)]
#[command(name = "hostfetch", version, about = "Print a short summary of this host")]
pub struct Args {
    /// Print license information and exit.
    #[arg(long)]
    pub license: bool,

    /// Disable colored output. `NO_COLOR` is honored as well.
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration tree holding `hostname` and `os-release`.
    #[arg(long, env = "HOSTFETCH_ETC_PATH", default_value = "/etc")]
    pub etc_path: PathBuf,

    /// Path to the proc filesystem.
    #[arg(long, env = "HOSTFETCH_PROC_PATH", default_value = "/proc")]
    pub proc_path: PathBuf,

    /// Mount point whose disk usage is reported.
    #[arg(long, env = "HOSTFETCH_MOUNT_POINT", default_value = "/")]
    pub mount_point: PathBuf,

    /// Longest line read from any resource; longer lines are truncated.
    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = DEFAULT_MAX_LINE_LEN as u64,
        value_parser = clap::value_parser!(u64).range(16..)
    )]
    pub max_line_length: u64,
}

impl Args {
    pub fn paths(&self) -> HostPaths {
        HostPaths::new(&self.etc_path, &self.proc_path, &self.mount_point)
    }

    /// Whether the report is styled. A non-empty `NO_COLOR` value disables
    /// styling the same way `--no-color` does.
    pub fn use_color(&self, no_color_env: Option<&OsStr>) -> bool {
        !self.no_color && no_color_env.is_none_or(|v| v.is_empty())
    }
}

/// What a given command line asks for.
#[derive(Debug)]
pub enum Action {
    Report(Args),
    License,
    Version(String),
    /// Usage text; printed for `--help` and for anything unrecognized.
    Usage(String),
}

/// Resolves the command line into an action.
///
/// Parse errors are not fatal: they resolve to [`Action::Usage`], and the
/// process still exits 0.
pub fn resolve<I, T>(argv: I) -> Action
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) if args.license => Action::License,
        Ok(args) => Action::Report(args),
        Err(err) if err.kind() == ErrorKind::DisplayVersion => Action::Version(err.to_string()),
        Err(_) => Action::Usage(Args::command().render_help().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_no_arguments_reports() {
        match resolve(["hostfetch"]) {
            Action::Report(args) => {
                assert!(!args.no_color);
                assert_eq!(args.verbose, 0);
                assert_eq!(args.max_line_length, DEFAULT_MAX_LINE_LEN as u64);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_help_and_unknown_flags_print_usage() {
        for argv in [
            vec!["hostfetch", "--help"],
            vec!["hostfetch", "-h"],
            vec!["hostfetch", "--bogus"],
            vec!["hostfetch", "-x"],
            vec!["hostfetch", "stray"],
        ] {
            match resolve(argv.clone()) {
                Action::Usage(text) => assert!(text.contains("--license"), "{:?}", argv),
                other => panic!("{:?} resolved to {:?}", argv, other),
            }
        }
    }

    #[test]
    fn test_license() {
        assert!(matches!(resolve(["hostfetch", "--license"]), Action::License));
    }

    #[test]
    fn test_version() {
        match resolve(["hostfetch", "--version"]) {
            Action::Version(text) => assert!(text.starts_with("hostfetch ")),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_path_overrides() {
        let argv = [
            "hostfetch",
            "--etc-path",
            "/mnt/etc",
            "--proc-path",
            "/mnt/proc",
            "--mount-point",
            "/home",
            "-vv",
            "--no-color",
        ];
        match resolve(argv) {
            Action::Report(args) => {
                let paths = args.paths();
                assert_eq!(paths.etc, Path::new("/mnt/etc"));
                assert_eq!(paths.proc, Path::new("/mnt/proc"));
                assert_eq!(paths.mount_point, Path::new("/home"));
                assert_eq!(args.verbose, 2);
                assert!(args.no_color);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_use_color_honors_no_color_env() {
        let Action::Report(args) = resolve(["hostfetch"]) else {
            panic!("expected a report");
        };
        assert!(args.use_color(None));
        assert!(args.use_color(Some(OsStr::new(""))));
        assert!(!args.use_color(Some(OsStr::new("1"))));

        let Action::Report(args) = resolve(["hostfetch", "--no-color"]) else {
            panic!("expected a report");
        };
        assert!(!args.use_color(None));
    }

    #[test]
    fn test_max_line_length_bounds() {
        assert!(matches!(
            resolve(["hostfetch", "--max-line-length", "4096"]),
            Action::Report(Args {
                max_line_length: 4096,
                ..
            })
        ));
        assert!(matches!(
            resolve(["hostfetch", "--max-line-length", "1"]),
            Action::Usage(_)
        ));
    }

    #[test]
    fn test_command_is_consistent() {
        Args::command().debug_assert();
    }
}
