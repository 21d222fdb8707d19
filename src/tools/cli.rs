use std::ffi::OsString;
use std::fmt::{Display, Formatter};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::compression::compress::compress;
use crate::compression::decompress::decompress;
use crate::error::{Codec, Error, Result};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Compress or decompress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "compress" | "c" => Ok(Mode::Compress),
            "decompress" | "d" => Ok(Mode::Decompress),
            other => Err(format!(
                "unknown mode '{}', use compress (c) or decompress (d)",
                other
            )),
        }
    }
}

/// Everything one run of a tool needs to know.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Which codec this tool drives
    pub codec: Codec,
    /// Compress/Decompress
    pub op_mode: Mode,
    /// Input path, "-" for stdin
    pub input: String,
    /// Output path, "-" for stdout
    pub output: String,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl Opts {
    pub fn new(codec: Codec) -> Self {
        Self {
            codec,
            op_mode: Mode::Compress,
            input: "-".to_string(),
            output: "-".to_string(),
            verbose: Verbosity::Warnings,
        }
    }
}

/// Command line arguments, common to both tools.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Lossless whole-file compressor",
    long_about = "
    Compresses or decompresses one file. The huff tool uses a static Huffman code with
    the byte counts stored in front of the data; the lzw tool uses 12-bit LZW codes.
    Use - as a path to read standard input or write standard output."
)]
pub struct Args {
    /// compress (c) or decompress (d)
    mode: Mode,

    /// File to read
    input: String,

    /// File to write
    output: String,

    /// Sets verbosity. -v shows progress, -vvv is chatty
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Suppress all messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Build the run options for `codec` from a full argument list (program name first).
/// Help and version requests print and exit here, as clap does.
pub fn opts_init<I, T>(codec: Codec, args: I) -> Result<Opts>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(Error::Usage(e.to_string())),
    };

    let mut opts = Opts::new(codec);
    opts.op_mode = args.mode;
    opts.input = args.input;
    opts.output = args.output;
    opts.verbose = match (args.quiet, args.verbose) {
        (true, _) => Verbosity::Quiet,
        (false, 0) => Verbosity::Warnings,
        (false, 1) => Verbosity::Info,
        (false, 2) => Verbosity::Debug,
        _ => Verbosity::Trace,
    };
    Ok(opts)
}

/// Start the terminal logger on stderr (stdout may be carrying data) at the level
/// chosen on the command line.
pub fn init_logging(verbose: Verbosity) {
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger was already initialised.");
    }
    log::set_max_level(verbose.level_filter());
}

/// Entry point shared by the tools: parse arguments, set up logging, run.
pub fn launch(codec: Codec) -> ExitCode {
    let opts = match opts_init(codec, std::env::args_os()) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };
    init_logging(opts.verbose);

    info!("---- {} {} ----", codec, opts.op_mode);
    debug!("Verbosity set to {}", log::max_level());
    debug!("Reading {}, writing {}", opts.input, opts.output);

    let result = match opts.op_mode {
        Mode::Compress => compress(&opts),
        Mode::Decompress => decompress(&opts),
    };

    match result {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
