use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const STDERR_APPENDER_NAME: &str = "stderr";
const LOG_PATTERN: &str = "{d(%Y/%m/%d %H:%M:%S)} {l} {m}{n}";

#[ctor::ctor]
fn init() {
    // stdout carries the converted image, so diagnostics must stay on stderr
    if let Ok(config) = create_config() {
        let _ = log4rs::init_config(config);
    }
}

fn create_config() -> Result<Config, log4rs::config::runtime::ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER_NAME, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(STDERR_APPENDER_NAME)
                .build(LevelFilter::Info),
        )
}
