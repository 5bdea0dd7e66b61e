// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Hole tool CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use holetool::cli::Reporter;
use holetool::emit::{FastenerDocument, JscadRenderer};
use holetool::hole::{verification_block, verification_cylinder};
use holetool::{Fastener, HeadStyle, HoleToolConfig, Registries};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "holetool")]
#[command(about = "Drill-hole geometry for bolts, nuts and their recesses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./holetool.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bolt designation, e.g. M5
    #[arg(short, long, global = true)]
    bolt: Option<String>,

    /// Head style (button, socket, pan)
    #[arg(long, global = true)]
    head: Option<String>,

    /// Nut style (plain, vigrue) or "none"
    #[arg(long, global = true)]
    nut: Option<String>,

    /// Tolerance preset name
    #[arg(short, long, global = true)]
    tolerance: Option<String>,

    /// Total drill depth
    #[arg(short, long, global = true)]
    depth: Option<f64>,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List designations, or the styles available for one
    List {
        designation: Option<String>,
    },

    /// Show derived dimensions for the selected fastener
    Info,

    /// Emit parametric generator code
    Emit {
        /// Prefix the shared helper routines
        #[arg(long)]
        shared: bool,

        /// Emit the JSON document instead of JSCAD text
        #[arg(long)]
        json: bool,
    },

    /// Build the hole solid
    Hole {
        /// Recess head and nut for a bolt of this length below the head
        #[arg(long, value_name = "LENGTH")]
        flush: Option<f64>,

        /// Nut slot: distance below the head and reach from the axis
        #[arg(long, num_args = 2, value_names = ["BELOW", "EXT"])]
        slot: Option<Vec<f64>>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = HoleFormat::Scad)]
        format: HoleFormat,

        /// Cut the hole from a test print instead of emitting it bare
        #[arg(long, value_enum)]
        verify: Option<VerifyPrint>,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum HoleFormat {
    Json,
    Scad,
}

#[derive(Clone, Copy, ValueEnum)]
enum VerifyPrint {
    Cylinder,
    Block,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if let Commands::Version = cli.command {
        println!("holetool v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = load_config(cli)?;
    let registries = Arc::new(config.registries()?);

    match &cli.command {
        Commands::List { designation } => {
            list_command(&registries, designation.as_deref());
            Ok(())
        }
        Commands::Info => {
            let fastener = config.fastener(registries)?;
            Reporter::report_fastener(&fastener);
            Ok(())
        }
        Commands::Emit { shared, json } => {
            let fastener = config.fastener(registries)?;
            emit_command(cli, &fastener, *shared, *json)
        }
        Commands::Hole {
            flush,
            slot,
            format,
            verify,
        } => {
            let mut fastener = config.fastener(registries)?;
            if let Some(length) = flush {
                fastener.make_flush(*length);
            }
            if let Some([below, ext]) = slot.as_deref() {
                fastener.set_nut_slot(*below, *ext);
            }
            hole_command(cli, &fastener, *format, *verify)
        }
        Commands::Version => Ok(()),
    }
}

fn load_config(cli: &Cli) -> Result<HoleToolConfig> {
    let mut config = match &cli.config {
        Some(path) => HoleToolConfig::from_file(path)?,
        None => HoleToolConfig::load()?,
    };

    if let Some(bolt) = &cli.bolt {
        config.fastener.designation = bolt.clone();
    }
    if let Some(head) = &cli.head {
        config.fastener.head = HeadStyle::from(head.clone());
    }
    if let Some(nut) = &cli.nut {
        config.fastener.nut = nut.clone();
    }
    if let Some(preset) = &cli.tolerance {
        config.tolerance.preset = Some(preset.clone());
    }
    if let Some(depth) = cli.depth {
        config.drilling.depth = depth;
    }
    Ok(config)
}

fn list_command(registries: &Registries, designation: Option<&str>) {
    match designation {
        Some(designation) => Reporter::report_styles(registries, designation),
        None => {
            Reporter::report_designations(&registries.designations());
            Reporter::report_tolerances(registries);
        }
    }
}

fn emit_command(cli: &Cli, fastener: &Fastener, shared: bool, json: bool) -> Result<()> {
    let doc = FastenerDocument::from_fastener(fastener)?;

    let text = if json {
        serde_json::to_string_pretty(&doc).context("Failed to serialize document")?
    } else {
        let renderer = JscadRenderer::new();
        if shared {
            renderer.render_file([&doc])
        } else {
            renderer.render(&doc)
        }
    };
    write_output(cli, &text)
}

fn hole_command(
    cli: &Cli,
    fastener: &Fastener,
    format: HoleFormat,
    verify: Option<VerifyPrint>,
) -> Result<()> {
    let params = fastener.drill_params()?;
    let shaft = fastener
        .bolt_length()
        .unwrap_or_else(|| fastener.drill_depth() - fastener.head_height());
    let node = match verify {
        None => fastener.hole()?,
        Some(VerifyPrint::Cylinder) => verification_cylinder(shaft, &params),
        Some(VerifyPrint::Block) => verification_block(shaft, &params),
    };

    if let Err(err) = node.check() {
        Reporter::report_warning(&err.to_string());
    }
    if cli.verbose {
        let bbox = node.bounding_box();
        tracing::debug!(
            primitives = node.primitive_count(),
            size = ?bbox.size(),
            "hole built"
        );
    }

    let text = match format {
        HoleFormat::Scad => node.to_scad(),
        HoleFormat::Json => serde_json::to_string_pretty(&node).context("Failed to serialize hole")?,
    };
    write_output(cli, &text)
}

fn write_output(cli: &Cli, text: &str) -> Result<()> {
    match &cli.output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            Reporter::success(&format!("Wrote {}", path.display()));
        }
        None => print!("{}", text),
    }
    Ok(())
}
