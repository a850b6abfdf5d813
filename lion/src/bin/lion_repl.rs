// Lion Interactive REPL
// Read-eval-print loop over a single read-only environment.

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use lion::{config::LionConfig, config::OutputConfig, parser, Runtime};

#[derive(Parser)]
#[command(name = "lion-repl")]
#[command(about = "Lion Interactive REPL")]
#[command(version)]
struct Args {
    /// Configuration file (.toml or .json)
    #[arg(short, long, env = "LION_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    lion::logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => LionConfig::load(path)?,
        None => LionConfig::default(),
    };
    let runtime = config.build_runtime()?;

    run_interactive_repl(&runtime, &config.output)
}

fn run_interactive_repl(runtime: &Runtime, output: &OutputConfig) -> Result<()> {
    println!("Lion REPL {}", env!("CARGO_PKG_VERSION"));
    println!("Enter a JSON expression. Type :help for commands.");
    println!();

    let mut rl = DefaultEditor::new()?;
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { "lion> " } else { "  ... " };

        match rl.readline(prompt) {
            Ok(line) => {
                if buffer.is_empty() {
                    let command = line.trim();
                    if command.is_empty() {
                        continue;
                    }
                    if command.starts_with(':') {
                        let _ = rl.add_history_entry(command);
                        if !handle_repl_command(command, runtime) {
                            break;
                        }
                        continue;
                    }
                } else {
                    buffer.push('\n');
                }
                buffer.push_str(&line);

                if parser::is_incomplete(&buffer) {
                    continue;
                }

                let input = std::mem::take(&mut buffer);
                let _ = rl.add_history_entry(input.as_str());
                match runtime.evaluate(&input) {
                    Ok(value) => println!("{}", output.render(&value)),
                    Err(e) => eprintln!("Error: {:#}", anyhow::Error::new(e)),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C drops a pending multi-line input, or exits
                if buffer.is_empty() {
                    break;
                }
                buffer.clear();
                println!("Cancelled multi-line input");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Runs a `:command`. Returns false when the REPL should exit.
fn handle_repl_command(command: &str, runtime: &Runtime) -> bool {
    match command {
        ":quit" | ":exit" | ":q" => return false,
        ":help" | ":h" => show_help(),
        ":env" => {
            for name in runtime.env().symbol_names() {
                println!("  {}", name);
            }
        }
        _ => eprintln!("Unknown command {}. Type :help for commands.", command),
    }
    true
}

fn show_help() {
    println!("Commands:");
    println!("  :help     show this message");
    println!("  :env      list bound names");
    println!("  :quit     exit the REPL");
    println!();
    println!("Examples:");
    println!(r#"  ["+", 1, 2, 3]"#);
    println!(r#"  ["quote", ["+", 1, 2]]"#);
    println!(r#"  ["eval", ["quote", ["+", 1, 2]]]"#);
    println!(r#"  ["if", ["<", 1, 2], "yes", "no"]"#);
}
