use std::env::args_os;
use std::io;
use std::process;

use png2array::{convert_png_to_array, CLIParser, Error};

fn main() {
    let mut cli_parser = CLIParser::default();
    let result = cli_parser
        .parse(args_os())
        .and_then(|arguments| convert_png_to_array(&arguments, io::stdout().lock()));
    match result {
        Ok(_) => log::debug!("Conversion successful"),
        Err(Error::InvalidCommandLine(e)) if !e.use_stderr() => e.exit(),
        Err(Error::InvalidCommandLine(e)) => {
            log::error!("{}", e.render().to_string().trim_end());
            process::exit(1);
        }
        Err(e) => {
            log::error!("Conversion failed because of: {}", e);
            process::exit(1);
        }
    }
}
