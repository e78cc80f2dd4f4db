// SPDX-License-Identifier: MPL-2.0
use rover_console::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
rover_console - mobile robot control panel

USAGE:
  rover_console [OPTIONS]

OPTIONS:
  -h, --help               Print this help
      --lang <LOCALE>      Interface language (en-US, fr)
      --config-dir <DIR>   Directory holding settings.toml

ENVIRONMENT:
  ROVER_CONSOLE_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG                  Log filter (default: rover_console=info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rover_console=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!("Starting rover_console v{}", env!("CARGO_PKG_VERSION"));
    app::run(flags)
}
