//! Prompt Builder
//!
//! Assembles the generation prompt from retrieved passages, the topic and a
//! fixed set of style instructions. Pure and deterministic: identical inputs
//! always produce byte-identical prompts.

use std::fmt::Write as _;

use rhetor_domain::constants::DEFAULT_PERSONA;
use rhetor_domain::value_objects::{LengthCategory, SpeechChunk};

/// Speaking-style characteristics the generated statement must emulate
pub const STYLE_CHARACTERISTICS: [&str; 8] = [
    "Thoughtful and measured tone, acknowledging complexity",
    "Personal stories and connections to everyday Americans",
    "Balanced perspective - hopeful while acknowledging real challenges",
    "Appeals to shared values and common ground",
    "Clear, accessible language with occasional rhetorical flourishes",
    "Use of \"we\" and \"our\" to build unity",
    "Specific examples and concrete details",
    "Inspirational closing that calls people to action",
];

/// Builds generation prompts for a persona
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBuilder {
    persona: String,
}

impl PromptBuilder {
    /// Create a builder emulating `persona`
    pub fn new(persona: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
        }
    }

    /// Persona whose style is emulated
    pub fn persona(&self) -> &str {
        &self.persona
    }

    /// Build the prompt
    ///
    /// Chunks are rendered in the given order. An empty slice still yields
    /// the full header and closing sections with zero example blocks.
    pub fn build(&self, topic: &str, chunks: &[SpeechChunk], length: LengthCategory) -> String {
        let persona = &self.persona;
        let mut prompt = String::with_capacity(
            1024 + chunks.iter().map(|c| c.text.len() + 128).sum::<usize>(),
        );

        // write! into a String cannot fail
        let _ = write!(
            prompt,
            "You are tasked with generating a statement in {persona}'s authentic speaking style.\n\n\
             Here are {count} relevant examples of how {persona} speaks (retrieved by semantic similarity):\n\n",
            count = chunks.len(),
        );

        for (i, chunk) in chunks.iter().enumerate() {
            let _ = write!(
                prompt,
                "\n--- Example {n}: \"{title}\" ({date}) [Relevance: {score:.2}] ---\n{text}\n\n",
                n = i + 1,
                title = chunk.title,
                date = chunk.date,
                score = chunk.score,
                text = chunk.text,
            );
        }

        let _ = write!(
            prompt,
            "\n--- End of Examples ---\n\n\
             Now, generate a statement in {persona}'s voice about: \"{topic}\"\n\n\
             Key characteristics of {persona}'s speaking style to emulate:\n"
        );
        for characteristic in STYLE_CHARACTERISTICS {
            let _ = writeln!(prompt, "• {characteristic}");
        }

        let _ = write!(
            prompt,
            "\nWrite {instruction}.\n\nStatement:",
            instruction = length.instruction()
        );

        prompt
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PERSONA)
    }
}
