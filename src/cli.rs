use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help(true))]
pub struct Cli {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[arg(short, long, help = "Print the analyzed declarations")]
    pub dump: bool,

    #[arg(long, help = "Print the token stream before analysis")]
    pub tokens: bool,

    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "Colorize output")]
    pub color: ColorChoice,

    #[arg(short, long, help = "Log each parsed declaration to stderr")]
    pub verbose: bool,
}
