//! Command-line front-end: parse a formula and print its truth table.
//!
//! Run with:
//! ```bash
//! cargo run --example truthtable -- "p & q | r" --order r,q
//! ```

use clap::Parser;
use truthtable_rs::parser::parse;
use truthtable_rs::table::Table;

#[derive(Parser, Debug)]
#[command(about = "Print the truth table of a propositional formula")]
struct Args {
    /// Formula, e.g. "p & q -> r"
    formula: String,

    /// Preferred variable order for the header, comma-separated
    #[arg(short, long, value_delimiter = ',')]
    order: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let ast = parse(&args.formula)?;
    let order: Vec<&str> = args.order.iter().map(String::as_str).collect();
    let table = Table::compile(&ast, &order);
    print!("{}", table);

    Ok(())
}
