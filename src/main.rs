use clap::Parser;
use pineapple::frontend::Parser as ScriptParser;
use pineapple::Error;
use std::path::PathBuf;
use std::{io, process};
use tracing::Level;

#[derive(Parser, Debug)]
#[clap(name = "pineapple", version, about = "Runs a pineapple script")]
struct Args {
    /// Script to run.
    #[clap(parse(from_os_str))]
    script: PathBuf,

    /// More log output on stderr. Repeat for more detail.
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,

    /// Dump the token stream to stderr before running.
    #[clap(long)]
    tokens: bool,

    /// Dump the parsed program to stderr before running.
    #[clap(long)]
    ast: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run_file(&args) {
        report_error(&e);
        process::exit(e.exit_code());
    }
}

fn init_logging(verbose: usize) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(true)
        .init();
}

fn run_file(args: &Args) -> Result<(), Error> {
    let source = pineapple::read_source(&args.script)?;
    tracing::info!(script = %args.script.display(), bytes = source.len(), "loaded script");

    if args.tokens || args.ast {
        let (result, tokens) = ScriptParser::new(&source).parse_with_tokens();

        if args.tokens {
            for token in tokens.iter() {
                eprintln!("{:>4} {:?} {:?}", token.line, token.kind, token.lexeme);
            }
        }

        let program = result?;
        if args.ast {
            eprintln!("{:#?}", program);
        }
    }

    pineapple::run(&source, io::stdout())
}

fn report_error(error: &Error) {
    eprintln!("error: {}", error);
}
