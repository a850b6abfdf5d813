// Lion command-line evaluator
// Reads one JSON program, evaluates it against the standard library and prints the result.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use lion::{
    config::{parse_binding, LionConfig},
    input_handling::{
        detect_input_source, read_input_content, validate_input_args, InputConfig, InputSource,
    },
    parser,
};

#[derive(Parser)]
#[command(name = "lion")]
#[command(about = "Evaluate a Lion program written as JSON")]
#[command(version)]
struct Args {
    /// Input source type (detected from the other arguments when omitted)
    #[arg(short = 'i', long, value_enum)]
    input: Option<InputSource>,

    /// Program file (when using --input file)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Program text (when using --input string)
    #[arg(short = 's', long = "string")]
    string: Option<String>,

    /// Program file (positional alternative to --file)
    #[arg(value_name = "FILE", conflicts_with = "file")]
    input_file: Option<PathBuf>,

    /// Configuration file (.toml or .json)
    #[arg(short, long, env = "LION_CONFIG")]
    config: Option<PathBuf>,

    /// Extra binding as NAME=JSON; may be repeated
    #[arg(short, long = "bind", value_name = "NAME=JSON")]
    bind: Vec<String>,

    /// Print the result on a single line
    #[arg(long)]
    compact: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    lion::logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => LionConfig::load(path)?,
        None => LionConfig::default(),
    };

    let file_path = args.file.or(args.input_file);
    let source = match args.input {
        Some(source) => source,
        None => detect_input_source(&file_path, &args.string)?,
    };
    validate_input_args(source, &file_path, &args.string)?;

    let input_config = match (source, file_path, args.string) {
        (InputSource::File, Some(path), _) => InputConfig::from_file(path),
        (InputSource::String, _, Some(content)) => InputConfig::from_string(content),
        _ => InputConfig::from_pipe(),
    };
    let input = read_input_content(&input_config)?;

    let mut env = config.build_environment()?;
    for spec in &args.bind {
        let (name, value) = parse_binding(spec)?;
        debug!(name = %name, "binding from command line");
        env.try_define(&name, value)?;
    }

    let expression = parser::parse(&input.content)
        .with_context(|| format!("cannot parse {}", input.source_name))?;
    let runtime = lion::Runtime::with_options(env, config.evaluator_options());
    let value = runtime.run(&expression)?;

    let mut output = config.output.clone();
    if args.compact {
        output.pretty = false;
    }
    println!("{}", output.render(&value));
    Ok(())
}
