//! Console listings of constructed species
//!
//! Rendering is read-only: it never alters the species it prints.

use std::fmt::Write as _;
use std::io;

use crate::core::config::DisplayConfig;
use crate::core::error::Result;
use crate::entity::species::Species;

/// Output format for a species listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render the text listing into a string
///
/// Each species produces a header line, one indented line per attribute,
/// and a trailing blank line.
pub fn render_text(species: &[Species], config: &DisplayConfig) -> String {
    let mut out = String::new();
    for s in species {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{}{}", s, config.header_suffix);
        for attribute in s.attributes() {
            let _ = writeln!(out, "{}{}", config.indent, attribute);
        }
        out.push('\n');
    }
    out
}

/// Stream the text listing to `writer`
pub fn write_text<W: io::Write>(
    writer: &mut W,
    species: &[Species],
    config: &DisplayConfig,
) -> Result<()> {
    for s in species {
        writeln!(writer, "{}{}", s, config.header_suffix)?;
        for attribute in s.attributes() {
            writeln!(writer, "{}{}", config.indent, attribute)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the listing as a pretty-printed JSON array
pub fn render_json(species: &[Species]) -> Result<String> {
    Ok(serde_json::to_string_pretty(species)?)
}

/// Write `species` to `writer` in the requested format
pub fn write_listing<W: io::Write>(
    writer: &mut W,
    species: &[Species],
    format: OutputFormat,
    config: &DisplayConfig,
) -> Result<()> {
    tracing::debug!("Rendering {} species as {:?}", species.len(), format);
    match format {
        OutputFormat::Text => write_text(writer, species, config),
        OutputFormat::Json => {
            let json = render_json(species)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
            Ok(())
        }
    }
}
