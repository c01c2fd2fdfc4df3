// SPDX-License-Identifier: MPL-2.0
use meridian_showcase::app::{self, paths, Flags, Screen};
use meridian_showcase::error::Result;
use meridian_showcase::ui::theming::ThemeMode;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
meridian-showcase

USAGE:
  meridian-showcase [OPTIONS]

OPTIONS:
  -h, --help                 Print this help
  --config-dir <DIR>         Directory holding settings.toml
  --screen <SCREEN>          Start screen: clients, approach or stories
  --theme <MODE>             Theme for this run: light, dark or system
  --no-autoplay              Do not advance the success stories automatically

ENVIRONMENT:
  MERIDIAN_SHOWCASE_CONFIG_DIR   Same as --config-dir
  RUST_LOG                       Log filter (default: info)
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(?flags, "starting showcase");

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags> {
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        screen: args.opt_value_from_fn("--screen", str::parse::<Screen>)?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
        autoplay: args.contains("--no-autoplay").then_some(false),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}
