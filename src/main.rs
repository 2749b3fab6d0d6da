use std::{fs, process::ExitCode};

use clap::Parser;
use reckon::{
    DEFAULT_PRECISION, Error, Options, ParserLimits, evaluate, format_general,
    interpreter::{
        lexer::tokenize,
        parser::core::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, MAX_DEPTH_LIMIT, MAX_NODES_LIMIT},
        token::Spanned,
    },
    parse_with,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// reckon evaluates arithmetic expressions made of numbers, `+ - * /` and
/// parentheses, printing the result the way C's `%g` does.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read files instead of an expression. Every non-blank
    /// line of every file is evaluated on its own.
    #[arg(short, long)]
    file: bool,

    /// Number of significant digits in printed results.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Maximum number of tree nodes a single expression may build.
    #[arg(long, default_value_t = DEFAULT_MAX_NODES, value_parser = node_limit)]
    max_nodes: usize,

    /// Maximum nesting depth of parentheses.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, value_parser = depth_limit)]
    max_depth: usize,

    /// Print the token stream of each expression instead of evaluating it.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the parsed tree, fully parenthesized, before each result.
    #[arg(long)]
    ast: bool,

    /// The expression, or file paths with `--file`. Words are joined with
    /// spaces, so `reckon 2 + 3` and `reckon "2 + 3"` are the same.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    contents: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let options = Options { limits:    ParserLimits { max_nodes: args.max_nodes,
                                                      max_depth: args.max_depth, },
                            precision: args.precision, };

    let scripts = if args.file {
        let mut scripts = Vec::with_capacity(args.contents.len());
        for path in &args.contents {
            match fs::read_to_string(path) {
                Ok(script) => scripts.push(script),
                Err(e) => {
                    eprintln!("Failed to read the input file '{path}': {e}");
                    return ExitCode::FAILURE;
                },
            }
        }
        scripts
    } else {
        vec![args.contents.join(" ")]
    };

    let mut status = ExitCode::SUCCESS;
    for script in &scripts {
        let expressions: Vec<&str> = if args.file {
            script.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
        } else {
            vec![script.as_str()]
        };

        for source in expressions {
            debug!(source, "running expression");
            if let Err(e) = run(source, &args, &options) {
                report(source, &e);
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}

/// Runs one expression through the pipeline and prints what `args` asks for.
fn run(source: &str, args: &Args, options: &Options) -> Result<(), Error> {
    if args.tokens {
        for Spanned { token, span } in tokenize(source) {
            println!("{:>4}..{:<4} {token}", span.start, span.end);
        }
        return Ok(());
    }

    let expr = parse_with(source, options.limits)?;
    if args.ast {
        println!("{expr}");
    }

    let value = evaluate(&expr)?;
    println!("{}", format_general(value, options.precision));
    Ok(())
}

/// Prints `error` to stderr. Parse errors that carry a position also get the
/// source line with a caret under the offending character.
fn report(source: &str, error: &Error) {
    eprintln!("{error}");
    if let Error::Parse(e) = error
       && let Some(position) = e.position()
       && !source.contains('\n')
    {
        let column = source.get(..position).map_or(position, |before| before.chars().count());
        eprintln!("  {source}");
        eprintln!("  {}^", " ".repeat(column));
    }
}

fn node_limit(value: &str) -> Result<usize, String> {
    bounded(value, MAX_NODES_LIMIT)
}

fn depth_limit(value: &str) -> Result<usize, String> {
    bounded(value, MAX_DEPTH_LIMIT)
}

/// Parses a limit flag, rejecting values above `max`.
fn bounded(value: &str, max: usize) -> Result<usize, String> {
    let limit: usize = value.parse().map_err(|e| format!("{e}"))?;
    if limit > max {
        return Err(format!("must be at most {max}"));
    }
    Ok(limit)
}
