//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};

/// Decision-tree walkthrough of the Composite, Visitor, Iterator and State patterns
#[derive(Parser, Debug)]
#[command(name = "dtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Settings file (TOML), applied on top of the global config
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Run a single demonstration instead of all four
    #[arg(long, value_enum)]
    pub only: Option<Demo>,

    /// Also print the sample tree as a diagram
    #[arg(long)]
    pub render: bool,

    /// Print author and version
    #[arg(long)]
    pub info: bool,
}

/// The demonstrations, in the order they run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Construction lifecycle (State)
    State,
    /// Building the sample tree (Composite)
    Composite,
    /// Pre-order walk (Iterator)
    Iterator,
    /// Depth and leaf count (Visitor)
    Visitor,
}

impl Demo {
    pub const ALL: [Demo; 4] = [Demo::State, Demo::Composite, Demo::Iterator, Demo::Visitor];
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn given_no_arguments_when_parsing_then_runs_everything() {
        let cli = Cli::try_parse_from(["dtree"]).unwrap();
        assert_eq!(cli.debug, 0);
        assert!(cli.only.is_none());
        assert!(!cli.render);
    }

    #[test]
    fn given_flags_when_parsing_then_sets_fields() {
        let cli = Cli::try_parse_from(["dtree", "-dd", "--only", "visitor", "--render"]).unwrap();
        assert_eq!(cli.debug, 2);
        assert_eq!(cli.only, Some(Demo::Visitor));
        assert!(cli.render);
    }
}
