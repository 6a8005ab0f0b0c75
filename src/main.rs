// SPDX-License-Identifier: MPL-2.0
use gallery_lightbox::app::{self, paths, Flags};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
Usage: gallery_lightbox [OPTIONS] [SERVER_URL]

Browse a thumbnail gallery server and view its images in a lightbox.

Arguments:
  [SERVER_URL]          Gallery server, e.g. http://localhost:8989
                        (defaults to [server] url in settings.toml)

Options:
  -h, --help            Print this help
      --lang CODE       UI language (en-US, fr)
      --config-dir DIR  Directory holding settings.toml
      --data-dir DIR    Directory holding state.cbor

Environment:
  GALLERY_LIGHTBOX_CONFIG_DIR, GALLERY_LIGHTBOX_DATA_DIR, RUST_LOG
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let mut option = |name: &'static str| -> Option<String> {
        args.opt_value_from_str(name).unwrap_or_else(|err| {
            tracing::warn!(option = name, error = %err, "ignoring malformed option");
            None
        })
    };
    let lang = option("--lang");
    let config_dir = option("--config-dir");
    let data_dir = option("--data-dir");

    let server_url = args
        .finish()
        .into_iter()
        .next()
        .and_then(|arg| arg.into_string().ok());

    paths::init_cli_overrides(data_dir.clone(), config_dir.clone());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting gallery lightbox");

    app::run(Flags {
        lang,
        server_url,
        data_dir,
        config_dir,
    })
}
