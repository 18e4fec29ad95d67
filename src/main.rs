use clap::Parser;
use miette::Result;
use retint::cli::{Cli, Commands};
use retint::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Recolor(args) => retint::cli::recolor::run(args, &printer)?,
        Commands::Pattern(args) => retint::cli::pattern::run(args, &printer)?,
        Commands::Extract(args) => retint::cli::extract::run(args, &printer)?,
        Commands::Tint(args) => retint::cli::tint::run(args, &printer)?,
        Commands::Completions(args) => retint::cli::completions::run(args)?,
    }

    Ok(())
}
