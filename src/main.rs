use std::path::PathBuf;

use thumbsmith::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        background_path: args.finish().into_iter().next().map(PathBuf::from),
    };

    app::run(flags)
}
