use crate::color::EncodingMode;
use crate::error::Error;
use crate::raster::writer::OutputFormat;
use crate::{Arguments, Result};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command, ValueEnum,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Result<Arguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.try_get_matches_from_mut(itr)?;
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_encoding_mode_argument(command);
        Self::register_output_format_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_encoding_mode_argument(command: Command) -> Command {
        command.arg(Self::create_encoding_mode_argument())
    }

    fn register_output_format_argument(command: Command) -> Command {
        command.arg(Self::create_output_format_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to PNG input file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    // plain strings here; extract_arguments maps unknown values to their own error kinds
    fn create_encoding_mode_argument() -> Arg {
        arg!(encoding_mode: -m --mode <MODE> "Encoding mode (rgb565)").default_value("rgb565")
    }

    fn create_output_format_argument() -> Arg {
        arg!(output_format: -f --format <FORMAT> "Output format (txt or bin)")
            .default_value("txt")
    }

    fn extract_arguments(matches: &ArgMatches) -> Result<Arguments> {
        let encoding_mode = Self::extract_encoding_mode_argument(matches)?;
        log::info!("encoding mode '{}' specified", encoding_mode);
        let output_format = Self::extract_output_format_argument(matches)?;
        log::info!("format mode '{}' specified", output_format);
        Ok(Arguments {
            input_file: Self::extract_input_file_argument(matches),
            encoding_mode,
            output_format,
        })
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_encoding_mode_argument(matches: &ArgMatches) -> Result<EncodingMode> {
        let value = matches
            .get_one::<String>("encoding_mode")
            .expect("Encoding mode must be provided, but was unset.");
        <EncodingMode as ValueEnum>::from_str(value, false)
            .map_err(|_| Error::UnsupportedEncodingMode(value.to_owned()))
    }

    fn extract_output_format_argument(matches: &ArgMatches) -> Result<OutputFormat> {
        let value = matches
            .get_one::<String>("output_format")
            .expect("Output format must be provided, but was unset.");
        <OutputFormat as ValueEnum>::from_str(value, false)
            .map_err(|_| Error::UnsupportedOutputFormat(value.to_owned()))
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, EncodingMode, OutputFormat};
    use crate::error::Error;

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "testfile.png";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_encoding_mode_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_encoding_mode_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-m", "rgb565"]);
        let encoding_mode = CLIParser::extract_encoding_mode_argument(&matches).unwrap();
        assert_eq!(encoding_mode, EncodingMode::Rgb565);
    }

    #[test]
    fn parse_unsupported_encoding_mode_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_encoding_mode_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--mode", "foo"]);
        match CLIParser::extract_encoding_mode_argument(&matches) {
            Err(Error::UnsupportedEncodingMode(mode)) => assert_eq!(mode, "foo"),
            _ => panic!("Unsupported encoding mode not detected"),
        }
    }

    #[test]
    fn parse_output_format_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_output_format_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-f", "bin"]);
        let output_format = CLIParser::extract_output_format_argument(&matches).unwrap();
        assert_eq!(output_format, OutputFormat::Binary);
    }

    #[test]
    fn parse_unsupported_output_format_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_output_format_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-f", "xml"]);
        match CLIParser::extract_output_format_argument(&matches) {
            Err(Error::UnsupportedOutputFormat(format)) => assert_eq!(format, "xml"),
            _ => panic!("Unsupported output format not detected"),
        }
    }

    #[test]
    fn parse_missing_flag_value() {
        let command = Command::new("test");
        let command = CLIParser::register_output_format_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-f"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Missing value for output format not detected");
        }
    }

    #[test]
    fn parse_required_arguments_only() {
        let input_file_name = "inputfile.png";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser
            .parse(vec![PROGRAM_NAME_ARGUMENT, &input_file_path])
            .expect("parsing failed");
        assert_eq!(
            arguments.input_file.file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert_eq!(
            arguments.encoding_mode,
            EncodingMode::Rgb565,
            "encoding_mode does not match"
        );
        assert_eq!(
            arguments.output_format,
            OutputFormat::Text,
            "output_format does not match"
        );
    }

    #[test]
    fn parse_without_input_file() {
        let mut cli_parser = CLIParser::default();
        let result = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "-f", "bin"]);
        assert!(matches!(result, Err(Error::MissingInputFile)));
    }

    #[test]
    fn parse_with_unknown_flag() {
        let mut cli_parser = CLIParser::default();
        let result = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "-x", "image.png"]);
        match result {
            Err(Error::InvalidCommandLine(error)) => {
                assert_eq!(error.kind(), ErrorKind::UnknownArgument)
            }
            _ => panic!("Unknown flag not detected"),
        }
    }
}
