//! File logging. The terminal is the game surface, so nothing is ever
//! logged to stdout or stderr.

use std::path::Path;

use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

use crate::error::{Error, Result};

pub fn init_log(level: LevelFilter, file_path: &Path) -> Result {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}")))
        .build(file_path)
        .map_err(|e| Error::Log(format!("{}: {}", file_path.display(), e)))?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritable_log_file_is_fatal() {
        let dir = std::env::temp_dir();
        match init_log(LevelFilter::Info, &dir) {
            Err(Error::Log(msg)) => assert!(msg.contains(&dir.display().to_string()), "{}", msg),
            other => panic!("expected a log error, got {:?}", other),
        }
    }
}
