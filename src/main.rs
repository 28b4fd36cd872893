use clap::Parser;
use redex::{build_ast, evaluate};

/// redex evaluates plain arithmetic expressions: integer literals, `+ - * /`
/// with the usual precedence, and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the expression's syntax tree instead of evaluating it.
    #[arg(short, long)]
    ast: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    if args.ast {
        match build_ast(&args.expression) {
            Ok(tree) => print!("{tree}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    } else {
        match evaluate(&args.expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }
}
