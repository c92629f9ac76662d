//! Teddy Programming Language - CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use teddy::util::{banner, logger};
use teddy::{
    build_file, compile_file, frontend, parse, read_source, strip_comments, CompileConfig, Compiler,
    Target, NAME, VERSION,
};

/// A small statically-typed teaching language compiled to C
#[derive(Parser, Debug)]
#[command(name = "teddy")]
#[command(author = "Teddy Team")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./teddy.toml when present)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile source files, writing `<stem>.c` or `<stem>.cpp` next to each
    Build {
        /// Source files to compile
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Output path (only with a single input)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Target dialect
        #[arg(short, long, value_enum)]
        target: Option<Target>,
    },

    /// Print generated code to stdout
    Emit {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Target dialect
        #[arg(short, long, value_enum)]
        target: Option<Target>,
    },

    /// Dump the token stream
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Dump the syntax tree
    Ast {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print source, tokens, syntax tree and generated code under banners
    Report {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Target dialect
        #[arg(short, long, value_enum)]
        target: Option<Target>,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logger::init_debug();
    } else {
        logger::init_cli();
    }

    let config = CompileConfig::resolve(args.config.as_deref()).context("Failed to load config")?;

    match args.command {
        Commands::Build {
            files,
            output,
            target,
        } => {
            let config = with_target(config, target);
            let output = output.or_else(|| config.output.clone());
            build(&Compiler::with_config(config), &files, output.as_deref())?;
        }
        Commands::Emit { file, target } => {
            let compiler = Compiler::with_config(with_target(config, target));
            print!("{}", compile_file(&compiler, &file)?);
        }
        Commands::Tokens { file } => {
            let source = prepared_source(&config, &file)?;
            let tokens = frontend::core::lexer::tokenize_with_policy(&source, config.lex_policy)
                .with_context(|| format!("Failed to tokenize: {}", file.display()))?;
            for token in tokens {
                println!("{:>8}  {}", token.span.start.to_string(), token.kind);
            }
        }
        Commands::Ast { file } => {
            let source = prepared_source(&config, &file)?;
            let tokens = frontend::core::lexer::tokenize_with_policy(&source, config.lex_policy)
                .with_context(|| format!("Failed to tokenize: {}", file.display()))?;
            let ast = parse(&tokens).with_context(|| format!("Failed to parse: {}", file.display()))?;
            println!("{:#?}", ast);
        }
        Commands::Report { file, target } => {
            report(with_target(config, target), &file)?;
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}

/// CLI flags override file values
fn with_target(
    config: CompileConfig,
    target: Option<Target>,
) -> CompileConfig {
    match target {
        Some(target) => config.with_target(target),
        None => config,
    }
}

/// Read a file and strip comments when configured
fn prepared_source(
    config: &CompileConfig,
    path: &Path,
) -> Result<String> {
    let Some(source) = read_source(path) else {
        bail!("Failed to read file: {}", path.display());
    };
    if config.strip_comments {
        Ok(strip_comments(&source))
    } else {
        Ok(source)
    }
}

/// Compile every input in parallel; fails if any input failed
fn build(
    compiler: &Compiler,
    files: &[PathBuf],
    output: Option<&Path>,
) -> Result<()> {
    if output.is_some() && files.len() > 1 {
        bail!("--output can only be used with a single input file");
    }

    let results: Vec<(&PathBuf, Result<PathBuf>)> = files
        .par_iter()
        .map(|file| (file, build_file(compiler, file, output)))
        .collect();

    let mut failures = 0;
    for (file, result) in results {
        match result {
            Ok(written) => {
                tracing::info!("{} -> {}", file.display(), written.display());
            }
            Err(err) => {
                failures += 1;
                tracing::error!("{:#}", err);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} files failed to compile", failures, files.len());
    }
    Ok(())
}

fn section(title: &str) {
    println!("{}", banner::banner(title, banner::DEFAULT_WIDTH).cyan().bold());
}

/// Reporting surface: every stage under its own banner
fn report(
    config: CompileConfig,
    path: &Path,
) -> Result<()> {
    let source = prepared_source(&config, path)?;

    section("Source");
    println!("{}", source);

    let tokens = frontend::core::lexer::tokenize_with_policy(&source, config.lex_policy)
        .with_context(|| format!("Failed to tokenize: {}", path.display()))?;
    section("Lexical Analysis");
    for token in &tokens {
        println!("{}", token.kind);
    }

    let ast = parse(&tokens).with_context(|| format!("Failed to parse: {}", path.display()))?;
    section("Abstract Syntax Tree");
    println!("{:#?}", ast);

    let code = teddy::generate(&ast, config.target)
        .with_context(|| format!("Failed to generate code: {}", path.display()))?;
    section("Code Generation");
    println!("{}", code.green());

    Ok(())
}
