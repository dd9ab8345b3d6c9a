//! Command-line driver: lex, parse, and build the AST for a single source
//! file, optionally dumping the intermediate stages.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use basis::{ast, grammar, lexer, parser, CompileError as CoreError};
use clap::{Parser as ClapParser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn filter(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Front end for the basis language.
#[derive(Debug, ClapParser)]
#[command(name = "basis")]
struct Options {
    /// Source file to compile.
    #[arg(long = "file")]
    file: PathBuf,

    /// Number of columns a tab advances the cursor.
    #[arg(long = "tab-width", default_value_t = 4)]
    tab_width: usize,

    /// Print the token stream and exit before parsing.
    #[arg(long = "dump-tokens")]
    dump_tokens: bool,

    /// Print the parse tree and exit before building the AST.
    #[arg(long = "dump-tree")]
    dump_tree: bool,

    /// Print the built AST.
    #[arg(long = "dump-ast")]
    dump_ast: bool,

    /// Verbosity of the tracing subscriber.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Error)]
    log_level: LogLevel,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("could not open '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Compile(#[from] CoreError),
}

fn main() -> ExitCode {
    let options = Options::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(options.log_level.filter()))
        .init();

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<(), CliError> {
    let source = fs::read_to_string(&options.file).map_err(|source| CliError::FileOpen {
        path: options.file.clone(),
        source,
    })?;

    let tokens = lexer::Lexer::new(&source, options.tab_width)
        .scan()
        .map_err(CoreError::Lex)?;

    if options.dump_tokens {
        for token in &tokens {
            println!("{token}");
        }
        return Ok(());
    }

    let grammar = grammar::Grammar::new();
    let parser = parser::Parser::new(&tokens, grammar.compilation_unit.clone());
    let outcome = parser.parse();
    if !outcome.all_tokens_consumed(tokens.len()) {
        return Err(CoreError::Parse(basis::error::ParseError::new(parser.diagnostic(&outcome))).into());
    }
    let parse_tree = outcome.tree.expect("successful parse always yields a tree");

    if options.dump_tree {
        ptree::print_tree(&parse_tree.view(&tokens)).expect("stdout is writable");
        return Ok(());
    }

    let unit = ast::build::build_ast(&tokens, &parse_tree).map_err(CoreError::Build)?;

    if options.dump_ast {
        println!("{unit:#?}");
    }

    Ok(())
}
