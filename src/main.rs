// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use std::process::ExitCode;
use ui_lens::app::{self, paths, Flags};

const HELP: &str = "\
ui_lens - critique a UI screenshot or web page

USAGE:
  ui_lens [OPTIONS] [IMAGE]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --server <URL>        Base URL of the critique service
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory holding user translation overrides
  -h, --help            Print this help

ARGS:
  <IMAGE>               Image to load on startup
";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
    data_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let server = args.opt_value_from_str("--server")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Args {
        flags: Flags {
            lang,
            server,
            file_path,
        },
        config_dir,
        data_dir,
    }))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(args.data_dir, args.config_dir);

    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Application error: {err}");
            ExitCode::FAILURE
        }
    }
}
