//! Terminal rendering of results

use std::io::Write;

use rhetor_domain::value_objects::{GenerationResult, SpeechChunk};

/// Characters of passage text shown in search results
pub const PREVIEW_CHARS: usize = 150;

const RULE: &str = "============================================================";

/// Print a generated statement between rules
pub fn print_statement<W: Write>(out: &mut W, result: &GenerationResult) -> std::io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "GENERATED STATEMENT")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{}", result.text)?;
    writeln!(out, "{RULE}")
}

/// Print search results with title, date, relevance and a preview
pub fn print_chunks<W: Write>(out: &mut W, chunks: &[SpeechChunk]) -> std::io::Result<()> {
    writeln!(out, "\nFound {} relevant chunks:\n", chunks.len())?;
    for (i, chunk) in chunks.iter().enumerate() {
        writeln!(out, "{}. {} ({})", i + 1, chunk.title, chunk.date)?;
        writeln!(out, "   Relevance: {:.2}", chunk.score)?;
        writeln!(out, "   Preview: {}...", chunk.preview(PREVIEW_CHARS))?;
        writeln!(out)?;
    }
    Ok(())
}
