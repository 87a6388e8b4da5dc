use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use oxm_core::build;
use oxm_core::ids::IdentifierAllocator;
use oxm_core::infer;
use oxm_core::parse;
use oxm_core::xmi;

#[derive(Parser)]
#[command(name = "oxm", about = "OpenAPI to UML XMI model exporter", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an OpenAPI document into a UML XMI class model
    Build {
        /// Path to the OpenAPI document (YAML or JSON)
        input: PathBuf,

        /// Path of the XMI document to write
        output: PathBuf,
    },

    /// Append inferred UML dependencies to a built XMI document
    Deps {
        /// Path to the XMI document to enrich
        input: PathBuf,

        /// Path of the enriched XMI document to write
        output: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output } => cmd_build(&input, &output),

        Commands::Deps { input, output } => cmd_deps(&input, &output),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "oxm", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn cmd_build(input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let ext = input.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    let doc = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };
    log::debug!(
        "parsed OpenAPI {} document with {} schemas",
        doc.openapi,
        doc.components.schemas.len()
    );

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("model");
    let model = build::build_document(&doc, stem);
    let xml = xmi::writer::write_document(&model)?;

    fs::write(output, xml).with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Wrote XMI model with {} classes to {}",
        model.classes.len(),
        output.display()
    );
    Ok(())
}

fn cmd_deps(input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let loaded = xmi::reader::read_document(&content)?;
    let ids = IdentifierAllocator::new();
    let deps = infer::infer_dependencies(&loaded, &ids);
    let xml = xmi::writer::write_enriched(&loaded, &deps)?;

    fs::write(output, xml).with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Appended {} dependencies to {}",
        deps.len(),
        output.display()
    );
    Ok(())
}
