mod cli;

use std::{
    fmt::Display,
    fs,
    io::{self, IsTerminal},
    process,
};

use anyhow::{Context, Result};
use clap::Parser;
use clite::{analyzer::analyze, errors::Diagnostic, lexer::tokenize, set_verbose};

use crate::cli::{Cli, ColorChoice};

fn fail(diag: &(impl Diagnostic + Display), color: bool) -> ! {
    if color {
        eprintln!("{}", diag.report());
    } else {
        eprintln!("{diag}");
    }
    process::exit(1);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }
    set_verbose(cli.verbose);
    let color = colored::control::SHOULD_COLORIZE.should_colorize();
    // Diagnostics go to stderr, so auto mode follows stderr rather than stdout.
    let diag_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };

    for path in &cli.files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let mut tokens = tokenize(source, path).unwrap_or_else(|e| fail(&e, diag_color));
        if cli.tokens {
            print!("{tokens}");
        }

        let unit = analyze(&mut tokens).unwrap_or_else(|e| fail(&e, diag_color));
        if cli.dump {
            print!("{}", unit.display(color)?);
        }
    }

    Ok(())
}
