//! Edit freshclam.conf in place.
//!
//! Replaces mirror and DNS directives (and arbitrary `name value` pairs) while
//! leaving every other line of the file untouched.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use freshclam_fixer::core::error::EditError;
use freshclam_fixer::core::plan::EditRequest;
use freshclam_fixer::exit_codes;
use freshclam_fixer::fix::{FixOptions, run_fix};
use freshclam_fixer::io::profile::load_profile;
use freshclam_fixer::logging;

#[derive(Parser, Debug)]
#[command(
    name = "freshclam-fixer",
    version,
    about = "Replace mirror settings in freshclam.conf, keeping comments and layout"
)]
struct Cli {
    /// Path to freshclam.conf.
    #[arg(short, long)]
    config: PathBuf,

    /// Path to the result config; defaults to `--config`.
    #[arg(short, long)]
    result: Option<PathBuf>,

    /// Replace `DNSDatabaseInfo` with another domain serving the TXT record.
    #[arg(short, long)]
    dns_database_info: Option<String>,

    /// Database mirror; repeat for several.
    #[arg(short = 'm', long)]
    database_mirror: Vec<String>,

    /// Private mirror; repeat for several.
    #[arg(short, long)]
    private_mirror: Vec<String>,

    /// Custom `"<name> <value>"` setting, e.g. -s "Checks 12" -s "TestDatabases yes".
    #[arg(short = 's', long, value_name = "NAME VALUE")]
    custom_value: Vec<String>,

    /// TOML edit profile; command-line options override its fields.
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Print the result to stdout instead of writing it.
    #[arg(long)]
    dry_run: bool,

    /// Log each replaced directive to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn request(&self) -> EditRequest {
        EditRequest {
            dns_database_info: self.dns_database_info.clone(),
            database_mirror: self.database_mirror.clone(),
            private_mirror: self.private_mirror.clone(),
            custom_value: self.custom_value.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {

    let mut request = cli.request();
    if let Some(profile) = &cli.profile {
        request = request.or(load_profile(profile)?);
    }

    let options = FixOptions {
        config: cli.config,
        result: cli.result,
        dry_run: cli.dry_run,
        request,
    };
    let outcome = run_fix(&options)?;

    if !outcome.written {
        std::io::stdout()
            .write_all(outcome.rendered.as_bytes())
            .context("write result to stdout")?;
    }
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<EditError>().is_some() {
        exit_codes::INVALID
    } else {
        exit_codes::FAILED
    }
}
