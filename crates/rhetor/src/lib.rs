//! # Rhetor
//!
//! Command line front end for the retrieval-augmented speech generator.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rhetor generate <TOPIC>` | Generate and print a statement, optionally saving it |
//! | `rhetor search <TOPIC>` | Show the most similar reference passages |
//! | `rhetor interactive` | Session with `/length`, `/model`, `/search`, `/save` |
//! | `rhetor config` | Print the effective configuration |
//!
//! The pipeline itself lives in `rhetor-application`; this crate only
//! parses input, renders output and maps errors to exit codes.

pub mod cli;
pub mod commands;
pub mod exit;
pub mod interactive;
pub mod output;
pub mod statement;

pub use cli::{Cli, Command};
pub use commands::run;
pub use exit::exit_code;
