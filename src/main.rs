// Tue Jan 13 2026 - Alex

use colored::Colorize;
use dwarf_config_extract::ui::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(cli::exit_code(&e));
    }
}
