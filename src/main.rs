use std::fs;

use clap::Parser;
use shunt::engine::{converter, tokenizer};

/// shunt evaluates plain arithmetic expressions from the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to read the expression from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix (Reverse Polish) form of the expression before the
    /// result.
    #[arg(short, long)]
    postfix: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.expression).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            std::process::exit(1);
        })
    } else {
        args.expression
    };

    if args.postfix && let Ok(lexemes) = tokenizer::tokenize(&expression) {
        let postfix = converter::to_postfix(lexemes);
        let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
        println!("{}", rendered.join(" "));
    }

    match shunt::evaluate(&expression) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
