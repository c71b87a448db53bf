use clap::Parser;
use jotz::error::Result;

mod args;
mod cli;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = cli::init_context()?;

    match cli.command {
        Some(Commands::New {
            title,
            content,
            no_editor,
        }) => cli::handle_new(&mut ctx, title, content, no_editor),
        Some(Commands::List { search }) => cli::handle_list(&mut ctx, search),
        Some(Commands::View { index }) => cli::handle_view(&ctx, index),
        Some(Commands::Edit { index }) => cli::handle_edit(&mut ctx, index),
        Some(Commands::Delete { index, yes }) => cli::handle_delete(&mut ctx, index, yes),
        Some(Commands::Path) => cli::handle_path(&ctx),
        Some(Commands::Browse) | None => cli::browse::run(&mut ctx),
    }
}
