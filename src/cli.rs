use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::archiver::{Archiver, PackReport};
use crate::config::DEFAULT_BASE_DIR;
use crate::models::ProductKind;
use crate::resolve::resolve_input;

const EXIT_WORD: &str = "exit";

/// Download LINE sticker and emoji packs.
#[derive(Parser, Debug)]
#[command(name = "line_sticker_downloader", version, about)]
pub struct Args {
    /// Product ID or store URL (https://store.line.me/stickershop/product/<id>/ja)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Treat bare product IDs as emoji packs
    #[arg(long)]
    pub emoji: bool,

    /// Directory that receives one folder per product
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Read URLs from stdin until "exit" instead of taking INPUT
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Exactly one input in one-shot mode, none with `--interactive`.
    pub fn has_valid_inputs(&self) -> bool {
        if self.interactive {
            self.inputs.is_empty()
        } else {
            self.inputs.len() == 1
        }
    }

    pub fn default_kind(&self) -> ProductKind {
        if self.emoji {
            ProductKind::Emoji
        } else {
            ProductKind::Sticker
        }
    }
}

/// Resolve and download one input. Every failure is logged, never returned.
pub fn process_input(
    archiver: &Archiver,
    input: &str,
    default_kind: ProductKind,
) -> Option<PackReport> {
    let request = match resolve_input(input, default_kind) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("{}", e);
            return None;
        }
    };

    tracing::info!("Downloading {} pack {}", request.kind, request.product_id);
    match archiver.download_pack(&request) {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::warn!("Product {} skipped: {}", request.product_id, e);
            None
        }
    }
}

/// Prompt for whitespace-separated URLs until "exit" or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    archiver: &Archiver,
    input: R,
    mut prompt: W,
    default_kind: ProductKind,
) -> std::io::Result<Vec<PackReport>> {
    let mut reports = Vec::new();
    writeln!(prompt, "Enter sticker/emoji URLs (space separated). '{}' to quit.", EXIT_WORD)?;

    let mut lines = input.lines();
    loop {
        write!(prompt, "> ")?;
        prompt.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.eq_ignore_ascii_case(EXIT_WORD) {
            break;
        }

        for token in line.split_whitespace() {
            reports.extend(process_input(archiver, token, default_kind));
        }
    }

    writeln!(prompt, "Bye.")?;
    Ok(reports)
}
