use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    board: board::BoardProps,
}

impl Args {
    /// Parses `#--rows=7&--seed=abc&-v` style location hashes as if they were command line arguments.
    fn try_parse_hash(hash: &str) -> Result<Self, clap::Error> {
        let args = hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once(env!("CARGO_PKG_NAME")).chain(args))
    }
}

/// What the page shows once the location hash has been read.
#[derive(Debug)]
enum Startup {
    Play(Args),
    Invalid(String),
}

impl Startup {
    fn from_hash(hash: &str) -> Self {
        match Args::try_parse_hash(hash) {
            Ok(args) => Self::Play(args),
            Err(err) => Self::Invalid(err.to_string()),
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    match Startup::from_hash(&location_hash) {
        Startup::Play(args) => {
            if let Some(log_level) = args.verbose.log_level() {
                console_log::init_with_level(log_level).expect("Error initializing logger");
            }
            log::debug!("args: {:?}", args.board);

            log::debug!("App started");
            yew::Renderer::<board::BoardView>::with_root_and_props(root, args.board).render();
        }
        Startup::Invalid(message) => {
            console_log::init_with_level(log::Level::Error).expect("Error initializing logger");
            log::error!("could not parse args: {}", message);

            let props = board::ErrorProps {
                message: message.into(),
            };
            yew::Renderer::<board::ErrorView>::with_root_and_props(root, props).render();
        }
    }
}
