// src/bin/initcheck.rs
use clap::Parser;
use colored::Colorize;

use initcheck_core::cli::{self, Cli};
use initcheck_core::error::InitCheckError;
use initcheck_core::exit::InitCheckExit;
use initcheck_core::repo::{self, GitRepository};

fn main() -> InitCheckExit {
    let cli = Cli::parse();

    if !repo::in_repo() {
        return fail(&InitCheckError::NotInGitRepo);
    }

    match cli::execute(&cli, &GitRepository) {
        Ok(exit) => exit,
        Err(e) => fail(&e),
    }
}

fn fail(err: &InitCheckError) -> InitCheckExit {
    eprintln!("{} {err}", "error:".red().bold());
    InitCheckExit::from(err)
}
