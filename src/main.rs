use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use blockprint::{HtmlSerializer, PreviewRenderer, PreviewState, RenderConfig, Template};

#[derive(Parser)]
#[command(name = "blockprint", version, about = "Render block templates to standalone HTML")]
struct Cli {
    /// JSON file with render settings (missing fields use defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export a template as HTML
    Render {
        template: PathBuf,
        /// Output file; `-` for stdout. Defaults to `<template name>.html`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print line, character and block counts of the export
    Stats { template: PathBuf },
    /// Validate a template and report render warnings; fails when any are found
    Check { template: PathBuf },
    /// Render the editor canvas for inspection
    Preview {
        template: PathBuf,
        /// Block to show as selected
        #[arg(long)]
        selected: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_template(path: &Path) -> anyhow::Result<Template> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let template = Template::from_json(&json).with_context(|| format!("parsing {}", path.display()))?;
    template.validate()?;
    Ok(template)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<RenderConfig> {
    match path {
        None => Ok(RenderConfig::default()),
        Some(p) => {
            let json = fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            RenderConfig::from_json(&json).with_context(|| format!("parsing {}", p.display()))
        }
    }
}

fn write_output(path: &Path, html: &str) -> anyhow::Result<()> {
    if path.as_os_str() == "-" {
        print!("{html}");
        return Ok(());
    }
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    eprintln!("wrote {} ({} bytes)", path.display(), html.len());
    Ok(())
}

/// Print preview/export differences and return how many elements differ
#[cfg(feature = "parity")]
fn parity_mismatches(serializer: HtmlSerializer, template: &Template) -> usize {
    let renderer = PreviewRenderer::from_serializer(serializer);
    let mut count = 0;
    for report in blockprint::preview::parity::check_template_parity(&renderer, template) {
        for m in &report.mismatches {
            println!("[parity] block {}: element {} differs", report.block_id, m.position);
        }
        count += report.mismatches.len();
    }
    count
}

#[cfg(not(feature = "parity"))]
fn parity_mismatches(_serializer: HtmlSerializer, _template: &Template) -> usize {
    0
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Render { template, output } => {
            let template = load_template(&template)?;
            let out = HtmlSerializer::new(config).render(&template);
            for w in &out.warnings {
                eprintln!("warning: {w}");
            }
            let path = output.unwrap_or_else(|| PathBuf::from(blockprint::export_file_name(&template)));
            write_output(&path, &out.html)
        }
        Command::Stats { template } => {
            let template = load_template(&template)?;
            let out = HtmlSerializer::new(config).render(&template);
            let stats = out.stats();
            println!("lines:      {}", stats.lines);
            println!("characters: {}", stats.characters);
            println!("blocks:     {}", stats.blocks);
            println!("sha256:     {}", out.digest());
            Ok(())
        }
        Command::Check { template } => {
            let template = load_template(&template)?;
            let serializer = HtmlSerializer::new(config);
            let out = serializer.render(&template);
            for w in &out.warnings {
                println!("{w}");
            }
            let mismatches = parity_mismatches(serializer, &template);
            if out.has_warnings() || mismatches > 0 {
                bail!(
                    "{} warning(s) and {mismatches} parity mismatch(es) in {}",
                    out.warnings.len(),
                    template.name
                );
            }
            println!("ok: {} ({} blocks)", template.name, template.blocks.len());
            Ok(())
        }
        Command::Preview {
            template,
            selected,
            output,
        } => {
            let template = load_template(&template)?;
            if let Some(id) = &selected {
                if template.block(id).is_none() {
                    bail!("no block with id {id}");
                }
            }
            let state = PreviewState {
                selected,
                ..Default::default()
            };
            let html = PreviewRenderer::new(config).to_html(&template, &state);
            write_output(&output.unwrap_or_else(|| PathBuf::from("-")), &html)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("blockprint: {e:#}");
        std::process::exit(1);
    }
}
