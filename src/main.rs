use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use turbo_expr::cli::{self, CheckOptions, CheckResult, CliError, Command};

#[derive(ClapParser)]
#[command(name = "turbo-expr")]
#[command(about = "turbo-expr - Evaluate arithmetic expressions and operation descriptors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print the output
    #[arg(short, long, global = true)]
    pretty: bool,

    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an infix expression over x
    Eval {
        /// The expression, e.g. "x^2 + 2*x + 1"
        expression: String,

        /// Value substituted for x
        #[arg(short = 'x', long = "value", default_value_t = 0.0, allow_hyphen_values = true)]
        x: f64,
    },

    /// Transform a value with an operation descriptor
    Apply {
        /// The subject value
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// JSON descriptor (reads from stdin if not provided)
        #[arg(short, long)]
        op: Option<String>,
    },

    /// Test a value against a condition descriptor
    Test {
        /// The subject value
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// JSON descriptor (reads from stdin if not provided)
        #[arg(short, long)]
        op: Option<String>,
    },

    /// Only validate an expression's syntax
    Check {
        /// The expression to validate
        expression: String,
    },

    /// List supported operations
    Ops,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Eval { expression, x } => run(
            Command::Eval {
                expression,
                value: x,
            },
            cli.pretty,
        ),
        Commands::Apply { value, op } => read_descriptor(op).and_then(|operation| {
            run(Command::Apply { operation, value }, cli.pretty)
        }),
        Commands::Test { value, op } => read_descriptor(op).and_then(|operation| {
            run(Command::Test { operation, value }, cli.pretty)
        }),
        Commands::Check { expression } => {
            cli::execute_check(&CheckOptions { expression }).map(|result| match result {
                CheckResult::SyntaxValid => println!("Syntax is valid"),
            })
        }
        Commands::Ops => {
            print!("{}", cli::get_ops_overview());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn read_descriptor(op: Option<String>) -> Result<turbo_expr::Operation, CliError> {
    let text = match op {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };
    log::debug!("descriptor: {}", text.trim());
    cli::parse_descriptor(&text)
}

fn run(command: Command, pretty: bool) -> Result<(), CliError> {
    let output = cli::execute(&command)?;
    let json = if pretty {
        turbo_expr::to_json_pretty(&output)
    } else {
        turbo_expr::to_json(&output)
    };
    println!("{}", json);
    Ok(())
}
