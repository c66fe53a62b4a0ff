use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use itertools::Itertools;

use vercomp::{Relation, Version, VersionBuilder, dpkg_version_compare};

#[derive(Parser)]
#[command(name = "dpkg-vercomp")]
#[command(about = "Compare Debian package versions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print -1, 0 or 1 as VERSION1 sorts before, the same as, or after VERSION2
    Compare { version1: String, version2: String },

    /// Exit with 0 if `VERSION1 OPERATOR VERSION2` holds and 1 if it does not.
    /// An unknown operator exits with 2.
    Check {
        version1: String,
        /// One of <<, <=, =, >=, >> (or the deprecated <, ==, >)
        operator: String,
        version2: String,
    },

    /// Combine an upstream version, revision and epoch into one version string
    Build {
        upstream: String,

        #[arg(short, long)]
        revision: Option<String>,

        #[arg(short, long)]
        epoch: Option<String>,
    },

    /// Sort versions read from stdin, one per line
    Sort {
        /// Newest first
        #[arg(short, long)]
        reverse: bool,
    },
}

/// Exit status when the relation does not hold
const STATUS_FALSE: u8 = 1;
/// Exit status for an operator that is not recognized
const STATUS_UNKNOWN_OPERATOR: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let status = run(cli.command, io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(ExitCode::from(status))
}

/// Execute one command, reading versions from `input` and printing to `output`.
/// Returns the process exit status.
fn run(command: Commands, input: impl BufRead, output: &mut impl Write) -> anyhow::Result<u8> {
    match command {
        Commands::Compare { version1, version2 } => {
            writeln!(output, "{}", dpkg_version_compare(&version1, &version2) as i32)?;
        }
        Commands::Check {
            version1,
            operator,
            version2,
        } => {
            let relation: Relation = match operator.parse() {
                Ok(relation) => relation,
                Err(e) => {
                    eprintln!("dpkg-vercomp: {}", e);
                    return Ok(STATUS_UNKNOWN_OPERATOR);
                }
            };

            let holds = relation.holds(&Version::parse(&version1), &Version::parse(&version2));
            log::debug!("{} {} {}: {}", version1, relation, version2, holds);
            if !holds {
                return Ok(STATUS_FALSE);
            }
        }
        Commands::Build {
            upstream,
            revision,
            epoch,
        } => {
            let version =
                VersionBuilder::from_parts(&upstream, revision.as_deref(), epoch.as_deref());
            writeln!(output, "{}", version.build())?;
        }
        Commands::Sort { reverse } => {
            let lines = input
                .lines()
                .collect::<Result<Vec<_>, _>>()
                .context("failed to read versions from stdin")?;

            let mut versions = lines
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .map(Version::parse)
                .sorted()
                .collect_vec();
            if reverse {
                versions.reverse();
            }
            log::debug!("sorted {} versions", versions.len());

            for version in versions {
                writeln!(output, "{}", version)?;
            }
        }
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    /// Run a command over `input`, returning the exit status and everything printed
    fn run_with_input(command: Commands, input: &str) -> (u8, String) {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut output = Vec::new();
        let status = run(command, input.as_bytes(), &mut output).unwrap();
        (status, String::from_utf8(output).unwrap())
    }

    fn check(version1: &str, operator: &str, version2: &str) -> (u8, String) {
        let command = Commands::Check {
            version1: version1.to_string(),
            operator: operator.to_string(),
            version2: version2.to_string(),
        };
        run_with_input(command, "")
    }

    fn sort(reverse: bool, input: &str) -> (u8, String) {
        run_with_input(Commands::Sort { reverse }, input)
    }

    #[test]
    fn test_compare_prints_ordering() {
        let compare = |version1: &str, version2: &str| {
            let command = Commands::Compare {
                version1: version1.to_string(),
                version2: version2.to_string(),
            };
            run_with_input(command, "")
        };

        assert_eq!((0, "-1\n".to_string()), compare("1.9", "1.10"));
        assert_eq!((0, "0\n".to_string()), compare("1:2.0-1", "1:2.0-1"));
        assert_eq!((0, "1\n".to_string()), compare("2:0.1", "1:9.9"));
    }

    /// The relation decides the exit status and nothing is printed
    #[test]
    fn test_check_exit_status() {
        assert_eq!((0, String::new()), check("1.0", "<<", "1.1"));
        assert_eq!((0, String::new()), check("1.0~rc1", "<=", "1.0"));
        assert_eq!((STATUS_FALSE, String::new()), check("1.1", "<<", "1.0"));
        assert_eq!((STATUS_FALSE, String::new()), check("1.0", "=", "1.00"));
    }

    #[test]
    fn test_check_unknown_operator() {
        assert_eq!((STATUS_UNKNOWN_OPERATOR, String::new()), check("1.0", "=>", "1.0"));
        assert_eq!((STATUS_UNKNOWN_OPERATOR, String::new()), check("1.0", "", "1.0"));
    }

    #[test]
    fn test_build_prints_version() {
        let build = |revision: Option<&str>, epoch: Option<&str>| {
            let command = Commands::Build {
                upstream: "1.0".to_string(),
                revision: revision.map(str::to_string),
                epoch: epoch.map(str::to_string),
            };
            run_with_input(command, "")
        };

        assert_eq!((0, "5:1.0-2\n".to_string()), build(Some("2"), Some("5")));
        assert_eq!((0, "1.0\n".to_string()), build(Some("0"), None));
        assert_eq!((0, "1:1.0\n".to_string()), build(None, Some("1")));
    }

    /// Lines are trimmed and blank lines skipped
    #[test]
    fn test_sort_skips_blank_lines() {
        let input = "1.10\n\n1.0~rc1\n 1.9 \n   \n1:0.1\n";

        assert_eq!(
            (0, "1.0~rc1\n1.9\n1.10\n1:0.1\n".to_string()),
            sort(false, input)
        );
        assert_eq!(
            (0, "1:0.1\n1.10\n1.9\n1.0~rc1\n".to_string()),
            sort(true, input)
        );
    }

    /// Equal-by-policy spellings come out in raw byte order
    #[test]
    fn test_sort_orders_equivalent_spellings() {
        assert_eq!((0, "1.0\n1.00\n".to_string()), sort(false, "1.00\n1.0\n"));
        assert_eq!((0, String::new()), sort(false, "\n\n"));
    }
}
