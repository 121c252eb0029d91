use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone, Default)]
pub struct LoggerOpt {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl LoggerOpt {
    /// The filter to use for the logger, `None` to read it from `RUST_LOG`.
    pub fn filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Setup the global logger and the panic handler. Logs are written to stderr.
    pub fn enable_log(&self) {
        let mut builder = env_logger::Builder::from_default_env();
        if let Some(filter) = self.filter() {
            builder.parse_filters(filter);
        }
        builder.format_timestamp_nanos().init();
        better_panic::install();
    }
}
