// SPDX-License-Identifier: MPL-2.0
use iced_banner::app::{self, Flags};
use iced_banner::telemetry;

const HELP: &str = "\
iced_banner - dismissible banner demo

USAGE:
  iced_banner [OPTIONS]

OPTIONS:
  -h, --help            Print this help
      --lang <LOCALE>   UI language (e.g. en-US, fr)
      --config-dir <DIR>  Directory holding settings.toml
      --no-dismiss      Hide the close control
      --with-link       Add a link to the banner content
      --message <TEXT>  Banner text
      --log <FILTER>    Log filter (overrides RUST_LOG)
";

fn parse_args(args: &mut pico_args::Arguments) -> Result<(Flags, Option<String>), pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        no_dismiss: args.contains("--no-dismiss"),
        with_link: args.contains("--with-link"),
        message: args.opt_value_from_str("--message")?,
    };
    let log_filter = args.opt_value_from_str("--log")?;
    Ok((flags, log_filter))
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (flags, log_filter) = match parse_args(&mut args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    if let Err(err) = telemetry::init_tracing(log_filter.as_deref()) {
        eprintln!("{err}");
    }

    app::run(flags)
}
