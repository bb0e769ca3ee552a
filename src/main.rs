use minish::flags::Flags;
use minish::shell::Shell;
use std::env;

fn main() -> Result<(), minish::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("minish {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    minish::logging::init(&flags);

    let mut shell = Shell::new();
    let code = shell.run()?;
    std::process::exit(code)
}
