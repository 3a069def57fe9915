use clap::{ArgAction, Args, Parser as ClapParser, Subcommand};
use log::LevelFilter;
use std::io::{self, Read};
use std::path::PathBuf;
use treepath::cli::{self, CountOptions, GetOptions, InputFormat, SearchOptions};
use treepath::{Error, PathSyntax};

#[derive(ClapParser)]
#[command(name = "treepath")]
#[command(about = "treepath - Look up dot/bracket paths in JSON and YAML documents")]
#[command(version)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Document file (reads from stdin if not provided)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Document format: auto, json or yaml
    #[arg(short, long, default_value = "auto", value_parser = InputFormat::parse)]
    format: InputFormat,
}

#[derive(Args)]
struct SyntaxArgs {
    /// Character separating map keys
    #[arg(long, env = "TREEPATH_DELIMITER", default_value_t = '.')]
    delimiter: char,

    /// Character opening a list index
    #[arg(long, env = "TREEPATH_INDEX_OPEN", default_value_t = '[')]
    open: char,

    /// Character closing a list index
    #[arg(long, env = "TREEPATH_INDEX_CLOSE", default_value_t = ']')]
    close: char,
}

impl SyntaxArgs {
    fn to_syntax(&self) -> Result<PathSyntax, Error> {
        PathSyntax::new(self.delimiter, self.open, self.close)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a path
    Get {
        /// Path to resolve, e.g. service.component[0].name
        path: String,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        syntax: SyntaxArgs,

        /// Pretty-print map and list values
        #[arg(short, long)]
        pretty: bool,

        /// Print the canonical path instead of the value
        #[arg(long)]
        canonical: bool,
    },

    /// Print the paths of all keys matching a regular expression
    Search {
        /// Regular expression matched against key names
        pattern: String,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        syntax: SyntaxArgs,
    },

    /// Print the number of leaf values in the document
    Count {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Get {
            path,
            input,
            syntax,
            pretty,
            canonical,
        } => run_get(path, &input, &syntax, pretty, canonical),
        Commands::Search {
            pattern,
            input,
            syntax,
        } => run_search(pattern, &input, &syntax),
        Commands::Count { input } => run_count(&input),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn read_input(args: &InputArgs) -> Result<Option<String>, Error> {
    match &args.input {
        Some(path) => cli::load_input(path).map(Some),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_get(
    path: String,
    input: &InputArgs,
    syntax: &SyntaxArgs,
    pretty: bool,
    canonical: bool,
) -> Result<(), Error> {
    let options = GetOptions {
        path,
        input: read_input(input)?,
        format: input.format,
        syntax: syntax.to_syntax()?,
        pretty,
        canonical,
    };

    let result = cli::execute_get(&options)?;
    println!("{}", result.render(options.pretty)?);
    Ok(())
}

fn run_search(pattern: String, input: &InputArgs, syntax: &SyntaxArgs) -> Result<(), Error> {
    let options = SearchOptions {
        pattern,
        input: read_input(input)?,
        format: input.format,
        syntax: syntax.to_syntax()?,
    };

    for path in cli::execute_search(&options)? {
        println!("{}", path);
    }
    Ok(())
}

fn run_count(input: &InputArgs) -> Result<(), Error> {
    let options = CountOptions {
        input: read_input(input)?,
        format: input.format,
    };

    println!("{}", cli::execute_count(&options)?);
    Ok(())
}
