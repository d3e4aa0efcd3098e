use clap::Parser;
use tiertask::cli::commands::Cli;
use tiertask::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let pack = cli.pack.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = tiertask::tui::run(pack.as_deref()) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }
}
