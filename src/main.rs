// SPDX-License-Identifier: MPL-2.0
use message_feedback::app::{self, config, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
message-feedback

USAGE:
  message-feedback [OPTIONS] [TRANSCRIPT.toml]

OPTIONS:
  --lang <id>            UI language (e.g. en-US, fr)
  --config-dir <dir>     Directory holding settings.toml
  --endpoint <url>       Feedback endpoint template with {conversation_id}
                         and {message_id} placeholders
  --conversation <id>    Conversation id used in the endpoint
  -h, --help             Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        conversation: args.opt_value_from_str("--conversation")?,
        transcript: args.finish().into_iter().next().map(PathBuf::from),
    })
}

fn init_tracing(config: &config::Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.filter_or_default()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    let (config, config_warning) = config::load();
    init_tracing(&config);

    if let Some(warning) = config_warning {
        tracing::warn!(%warning, "could not load settings, using defaults");
    }

    app::run(flags, config)
}
