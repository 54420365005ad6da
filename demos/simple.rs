use truthtable_rs::parser::parse;
use truthtable_rs::table::Table;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let ast = parse("(p & q) | (p & q) -> !r")?;
    println!("ast = {}", ast);

    let table = Table::compile(&ast, &["p", "q", "r"]);
    println!("table = {:?}", table);
    println!("variables = {}", table.variable_count());
    println!("rows = {}", table.row_count());
    for column in table.expressions() {
        println!("- {:?}", column);
    }

    println!();
    print!("{}", table);

    Ok(())
}
