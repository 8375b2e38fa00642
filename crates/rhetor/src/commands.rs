//! Subcommand dispatch

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use rhetor_application::ports::SpeechServiceInterface;
use rhetor_domain::value_objects::{GenerationRequest, LengthCategory};
use rhetor_infrastructure::config::{AppConfig, ConfigLoader, GenerationConfig};
use rhetor_infrastructure::init_app;
use rhetor_infrastructure::logging::init_logging;
use tracing::info;

use crate::cli::{Cli, Command, join_topic};
use crate::interactive::run_interactive;
use crate::output::{print_chunks, print_statement};
use crate::statement::StatementFile;

/// Options of a single `generate` invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    /// Length override
    pub length: Option<LengthCategory>,
    /// Temperature override
    pub temperature: Option<f32>,
    /// Model override
    pub model: Option<String>,
    /// `Some(None)` saves under the default filename
    pub save: Option<Option<PathBuf>>,
}

impl GenerateOptions {
    /// Request for `topic`, with configured defaults filling the gaps
    pub fn request(&self, topic: String, defaults: &GenerationConfig) -> GenerationRequest {
        GenerationRequest::new(
            topic,
            self.length.unwrap_or(defaults.length),
            self.temperature.unwrap_or(defaults.temperature),
            self.model.clone().unwrap_or_else(|| defaults.model.clone()),
        )
    }
}

/// Load configuration, start logging and run the chosen subcommand
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Config => print_config(&mut stdout, &config),
        Command::Generate {
            topic,
            length,
            temperature,
            model,
            save,
        } => {
            let options = GenerateOptions {
                length,
                temperature,
                model,
                save,
            };
            let defaults = config.generation.clone();
            let context = init_app(config).await?;
            generate(
                context.speech_service().as_ref(),
                &defaults,
                join_topic(&topic),
                &options,
                &mut stdout,
            )
            .await
        }
        Command::Search { topic, count } => {
            let count = count.unwrap_or(config.generation.search_results);
            let context = init_app(config).await?;
            search(
                context.speech_service().as_ref(),
                &join_topic(&topic),
                count,
                &mut stdout,
            )
            .await
        }
        Command::Interactive => {
            let defaults = config.generation.clone();
            let context = init_app(config).await?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_interactive(
                context.speech_service().as_ref(),
                &defaults,
                &defaults.persona,
                stdin,
                &mut stdout,
            )
            .await
        }
    }
}

/// Generate one statement, print it and optionally save it
pub async fn generate<W: Write>(
    service: &dyn SpeechServiceInterface,
    defaults: &GenerationConfig,
    topic: String,
    options: &GenerateOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let request = options.request(topic, defaults);
    info!(
        topic = %request.topic,
        length = %request.length,
        temperature = request.temperature,
        model = %request.model,
        "Generating statement"
    );

    let result = service.generate_statement(&request).await?;
    print_statement(out, &result)?;

    if let Some(path) = &options.save {
        let saved = StatementFile::new(&result).save(path.as_deref())?;
        writeln!(out, "Saved to: {}", saved.display())?;
    }
    Ok(())
}

/// Print the passages most similar to `topic`
pub async fn search<W: Write>(
    service: &dyn SpeechServiceInterface,
    topic: &str,
    count: usize,
    out: &mut W,
) -> anyhow::Result<()> {
    let chunks = service.search_relevant(topic, count).await?;
    print_chunks(out, &chunks)?;
    Ok(())
}

/// Print the effective configuration as TOML, secrets redacted
pub fn print_config<W: Write>(out: &mut W, config: &AppConfig) -> anyhow::Result<()> {
    let rendered = toml::to_string_pretty(&config.redacted())
        .context("Failed to render configuration")?;
    write!(out, "{rendered}")?;
    Ok(())
}
