// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
iced_folio - personal portfolio with a project gallery

USAGE:
    iced_folio [OPTIONS]

OPTIONS:
    --lang <id>          UI language (e.g. en-US, fr)
    --catalog <file>     Portfolio catalog replacing the built-in one
    --assets-dir <dir>   Image root for the built-in catalog
    --config-dir <dir>   Directory holding settings.toml
    -h, --help           Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog_path: args.opt_value_from_str::<_, PathBuf>("--catalog")?,
        assets_dir: args.opt_value_from_str::<_, PathBuf>("--assets-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
