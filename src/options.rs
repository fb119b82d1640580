use clap::Parser;
use log::LevelFilter;

#[derive(Clone, Debug, Parser)]
#[clap(author, version, about)]
pub struct Options {
    /// Graph file: one variable or one interfering pair of variables per line
    pub input: String,

    /// Number of registers available to the allocation
    #[clap(short, long, default_value_t = 16, parse(try_from_str = parse_registers))]
    pub registers: u32,

    /// Increase logging output, can be repeated
    #[clap(short, parse(from_occurrences))]
    pub verbose: u64,

    /// Print the loaded interference graph before allocating
    #[clap(long = "dump-graph")]
    pub dump_graph: bool,
}

impl Options {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn parse_registers(value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(0) => Err(String::from("at least one register is required")),
        Ok(count) => Ok(count),
        Err(err) => Err(err.to_string()),
    }
}

/// Gets command line options using clap.
/// Returns an Options struct representing the fully parsed options
pub fn get() -> Options {
    Options::parse()
}
