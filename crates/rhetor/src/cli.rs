//! Command line definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rhetor_domain::value_objects::LengthCategory;

/// Command line interface for Rhetor
#[derive(Parser, Debug)]
#[command(name = "rhetor")]
#[command(about = "Generate statements in a speaker's style from retrieved speech passages")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Generate a statement about a topic
    Generate {
        /// Topic of the statement
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,

        /// short, medium or long (unknown values mean medium)
        #[arg(short, long)]
        length: Option<LengthCategory>,

        /// Sampling temperature between 0.0 and 1.0
        #[arg(short, long)]
        temperature: Option<f32>,

        /// Generation model, e.g. gpt-4 or gpt-3.5-turbo
        #[arg(short, long)]
        model: Option<String>,

        /// Save the statement; without a path a name is derived from the topic
        #[arg(long, num_args = 0..=1, value_name = "PATH")]
        save: Option<Option<PathBuf>>,
    },

    /// Show the passages most similar to a topic
    Search {
        /// Topic to search for
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,

        /// Number of passages
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,
    },

    /// Read topics and commands from stdin until /quit
    Interactive,

    /// Print the effective configuration with secrets redacted
    Config,
}

/// Join a multi-word positional topic
pub fn join_topic(words: &[String]) -> String {
    words.join(" ")
}
