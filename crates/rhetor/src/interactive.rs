//! Interactive session
//!
//! Every input line is parsed into an [`InteractiveCommand`] first; lines
//! starting with `/` are commands, anything else is a topic.

use std::io::Write;
use std::path::PathBuf;

use rhetor_application::ports::SpeechServiceInterface;
use rhetor_domain::constants::{ALTERNATE_GENERATION_MODEL, DEFAULT_GENERATION_MODEL};
use rhetor_domain::value_objects::{GenerationRequest, GenerationResult, LengthCategory};
use rhetor_infrastructure::config::GenerationConfig;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::output::{print_chunks, print_statement};
use crate::statement::StatementFile;

/// One parsed line of interactive input
#[derive(Debug, Clone, PartialEq)]
pub enum InteractiveCommand {
    /// Generate a statement about the topic
    Generate(String),
    /// Change the statement length
    SetLength(LengthCategory),
    /// Change the generation model
    SetModel(String),
    /// Preview passages for a topic
    Search(String),
    /// Save the last statement
    Save(Option<PathBuf>),
    /// Show the command list
    Help,
    /// Leave the session
    Quit,
    /// A command that could not be understood
    Invalid(String),
}

impl InteractiveCommand {
    /// Parse one line; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let Some(command) = line.strip_prefix('/') else {
            return Some(Self::Generate(line.to_string()));
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        Some(match (name.to_ascii_lowercase().as_str(), argument) {
            ("quit" | "exit", _) => Self::Quit,
            ("help", _) => Self::Help,
            ("save", "") => Self::Save(None),
            ("save", path) => Self::Save(Some(PathBuf::from(path))),
            ("length", value) => match LengthCategory::try_parse(value) {
                Some(length) => Self::SetLength(length),
                None => Self::Invalid(format!(
                    "Unknown length '{value}'. Use short, medium or long"
                )),
            },
            ("model", "") => Self::Invalid("Usage: /model <name|gpt4|gpt3>".to_string()),
            ("model", value) => Self::SetModel(model_alias(value).to_string()),
            ("search", "") => Self::Invalid("Usage: /search <topic>".to_string()),
            ("search", topic) => Self::Search(topic.to_string()),
            (other, _) => Self::Invalid(format!("Unknown command '/{other}'. Type /help")),
        })
    }
}

/// Expand the short model aliases
pub fn model_alias(value: &str) -> &str {
    match value.to_ascii_lowercase().as_str() {
        "gpt4" => DEFAULT_GENERATION_MODEL,
        "gpt3" => ALTERNATE_GENERATION_MODEL,
        _ => value,
    }
}

/// Mutable settings of a running session
#[derive(Debug, Clone)]
pub struct Session {
    /// Current statement length
    pub length: LengthCategory,
    /// Current model
    pub model: String,
    /// Sampling temperature for every request
    pub temperature: f32,
    /// Passages shown by /search
    pub search_results: usize,
    /// Most recent successful generation
    pub last: Option<GenerationResult>,
}

impl Session {
    /// Start from configured defaults
    pub fn new(defaults: &GenerationConfig) -> Self {
        Self {
            length: defaults.length,
            model: defaults.model.clone(),
            temperature: defaults.temperature,
            search_results: defaults.search_results,
            last: None,
        }
    }
}

fn print_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <topic>                   generate a statement")?;
    writeln!(out, "  /length short|medium|long set the statement length")?;
    writeln!(out, "  /model <name|gpt4|gpt3>   switch the generation model")?;
    writeln!(out, "  /search <topic>           preview relevant passages")?;
    writeln!(out, "  /save [path]              save the last statement")?;
    writeln!(out, "  /help                     show this list")?;
    writeln!(out, "  /quit                     leave")
}

/// Run the session until `/quit` or end of input
///
/// Pipeline errors are reported and the session continues.
pub async fn run_interactive<R, W>(
    service: &dyn SpeechServiceInterface,
    defaults: &GenerationConfig,
    persona: &str,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = Session::new(defaults);
    let mut lines = input.lines();

    writeln!(out, "{} SPEECH GENERATOR - Interactive Mode", persona.to_uppercase())?;
    print_help(out)?;

    loop {
        write!(out, "\nTopic (or command): ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(command) = InteractiveCommand::parse(&line) else {
            continue;
        };

        match command {
            InteractiveCommand::Quit => break,
            InteractiveCommand::Help => print_help(out)?,
            InteractiveCommand::Invalid(message) => writeln!(out, "{message}")?,
            InteractiveCommand::SetLength(length) => {
                session.length = length;
                writeln!(out, "Length set to: {length}")?;
            }
            InteractiveCommand::SetModel(model) => {
                writeln!(out, "Model set to: {model}")?;
                session.model = model;
            }
            InteractiveCommand::Search(topic) => {
                match service.search_relevant(&topic, session.search_results).await {
                    Ok(chunks) => print_chunks(out, &chunks)?,
                    Err(err) => {
                        warn!(error = %err, "Search failed");
                        writeln!(out, "Error: {err}")?;
                    }
                }
            }
            InteractiveCommand::Save(path) => match &session.last {
                Some(result) => match StatementFile::new(result).save(path.as_deref()) {
                    Ok(saved) => writeln!(out, "Saved to: {}", saved.display())?,
                    Err(err) => writeln!(out, "Error: {err:#}")?,
                },
                None => writeln!(out, "Nothing to save yet")?,
            },
            InteractiveCommand::Generate(topic) => {
                let request = GenerationRequest::new(
                    topic,
                    session.length,
                    session.temperature,
                    session.model.clone(),
                );
                match service.generate_statement(&request).await {
                    Ok(result) => {
                        print_statement(out, &result)?;
                        writeln!(out, "Type /save to keep this statement")?;
                        session.last = Some(result);
                    }
                    Err(err) => {
                        warn!(error = %err, "Generation failed");
                        writeln!(out, "Error: {err}")?;
                    }
                }
            }
        }
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}
