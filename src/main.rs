//! ddscope CLI - Command-line tool for inspecting DDS texture files.
//!
//! This is the main entry point for the ddscope command-line application.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use ddscope::prelude::*;

/// ddscope - DDS texture inspection tool
#[derive(Parser)]
#[command(name = "ddscope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log library diagnostics at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show header, resolved format, layout and image levels of a DDS file
    Info {
        /// Input DDS file
        #[arg(short, long, env = "DDSCOPE_INPUT")]
        input: PathBuf,

        /// Emit a JSON document instead of text
        #[arg(long)]
        json: bool,
    },

    /// Load every DDS file under a directory and summarize the results
    Scan {
        /// Directory to scan
        #[arg(short, long, env = "DDSCOPE_DIR")]
        dir: PathBuf,

        /// File name filter (glob-style)
        #[arg(short, long, default_value = "*.dds")]
        filter: String,
    },

    /// Write the raw payload of one image level
    Extract {
        /// Input DDS file
        #[arg(short, long, env = "DDSCOPE_INPUT")]
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Mip level
        #[arg(long, default_value_t = 0)]
        mip: u32,

        /// Array layer (cube face index for cube maps)
        #[arg(long, default_value_t = 0)]
        layer: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Info { input, json } => {
            cmd_info(&input, json)?;
        }
        Commands::Scan { dir, filter } => {
            cmd_scan(&dir, &filter)?;
        }
        Commands::Extract {
            input,
            output,
            mip,
            layer,
        } => {
            cmd_extract(&input, &output, mip, layer)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default))?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

fn load(path: &Path) -> Result<(DdsTexture, Diagnostics)> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let _span = tracing::info_span!("load", path = %path.display()).entered();
    Ok(DdsTexture::from_bytes(data))
}

#[derive(Serialize)]
struct InfoReport {
    path: String,
    severity: String,
    fatal: bool,
    diagnostics: Vec<DiagnosticReport>,
    header: Option<HeaderReport>,
    format: Option<String>,
    compression: String,
    color_transform: String,
    alpha_mode: String,
    swizzle: bool,
    srgb: bool,
    cubemap: bool,
    volume: bool,
    bitmasked: bool,
    bits_per_pixel: u32,
    channel_count: u8,
    block_size: (u32, u32),
    channel_masks: [u32; 4],
    channels: Vec<(u8, u8)>,
    width: u32,
    height: u32,
    depth: u32,
    mip_count: u32,
    array_size: u32,
    data_offset: usize,
    levels: Vec<LevelReport>,
}

#[derive(Serialize)]
struct DiagnosticReport {
    severity: String,
    message: String,
}

#[derive(Serialize)]
struct HeaderReport {
    size: u32,
    flags: u32,
    width: u32,
    height: u32,
    depth: u32,
    pitch_or_linear_size: u32,
    mipmap_count: u32,
    four_cc: String,
    pixel_format_flags: u32,
    rgb_bit_count: u32,
    caps2: u32,
    dxgi_format: Option<u32>,
}

#[derive(Serialize)]
struct LevelReport {
    layer: u32,
    mip: u32,
    width: u32,
    height: u32,
    depth: u32,
    offset: usize,
    size: usize,
}

impl InfoReport {
    fn new(path: &Path, texture: &DdsTexture, diagnostics: &Diagnostics) -> Self {
        let header = texture.header().map(|h| HeaderReport {
            size: h.size,
            flags: h.flags,
            width: h.width,
            height: h.height,
            depth: h.depth,
            pitch_or_linear_size: h.pitch_or_linear_size,
            mipmap_count: h.mipmap_count,
            four_cc: h.pixel_format.four_cc.to_string(),
            pixel_format_flags: h.pixel_format.flags,
            rgb_bit_count: h.pixel_format.rgb_bit_count,
            caps2: h.caps2,
            dxgi_format: texture.dxt10().map(|ext| ext.dxgi_format),
        });

        let mut levels = Vec::new();
        for layer in 0..texture.array_size() {
            for mip in 0..texture.mip_count() {
                let (Some(range), Some(level)) = (
                    texture.level_range(mip, layer),
                    texture.get_image_data(mip, layer),
                ) else {
                    continue;
                };
                levels.push(LevelReport {
                    layer,
                    mip,
                    width: level.width,
                    height: level.height,
                    depth: level.depth,
                    offset: range.start,
                    size: range.len(),
                });
            }
        }

        Self {
            path: path.display().to_string(),
            severity: diagnostics.severity().to_string(),
            fatal: diagnostics.is_fatal(),
            diagnostics: diagnostics
                .entries()
                .iter()
                .map(|d| DiagnosticReport {
                    severity: d.severity.to_string(),
                    message: d.message.clone(),
                })
                .collect(),
            header,
            format: texture.format().map(|f| f.to_string()),
            compression: texture.compression().to_string(),
            color_transform: texture.color_transform().to_string(),
            alpha_mode: format!("{:?}", texture.alpha_mode()),
            swizzle: texture.swizzle(),
            srgb: texture.is_srgb(),
            cubemap: texture.is_cubemap(),
            volume: texture.is_volume(),
            bitmasked: texture.is_bitmasked(),
            bits_per_pixel: texture.bits_per_pixel(),
            channel_count: texture.channel_count(),
            block_size: texture.block_size(),
            channel_masks: texture.channel_masks(),
            channels: texture
                .channel_layout()
                .iter()
                .map(|c| (c.count, c.shift))
                .collect(),
            width: texture.width(),
            height: texture.height(),
            depth: texture.depth(),
            mip_count: texture.mip_count(),
            array_size: texture.array_size(),
            data_offset: texture.data_offset(),
            levels,
        }
    }

    fn print(&self) {
        println!("File: {}", self.path);

        if let Some(h) = &self.header {
            println!(
                "Header: {}x{}x{}, {} mips declared, FourCC {}, flags {:#x}, caps2 {:#x}",
                h.width, h.height, h.depth, h.mipmap_count, h.four_cc, h.flags, h.caps2
            );
            if let Some(dxgi) = h.dxgi_format {
                println!("DXT10: DXGI format {}", dxgi);
            }
        }

        if !self.fatal {
            println!(
                "Format: {} (compression {}, transform {}, alpha {}{}{})",
                self.format.as_deref().unwrap_or("bitmask"),
                self.compression,
                self.color_transform,
                self.alpha_mode,
                if self.srgb { ", sRGB" } else { "" },
                if self.swizzle { ", swizzled" } else { "" },
            );
            println!(
                "Layout: {} bpp, {} channels, block {}x{}",
                self.bits_per_pixel, self.channel_count, self.block_size.0, self.block_size.1
            );
            if self.bitmasked {
                println!(
                    "Masks: R {:#010x} G {:#010x} B {:#010x} A {:#010x}",
                    self.channel_masks[0],
                    self.channel_masks[1],
                    self.channel_masks[2],
                    self.channel_masks[3]
                );
            }
            println!(
                "Surface: {}x{}x{}, {} mips, {} layers{}{}",
                self.width,
                self.height,
                self.depth,
                self.mip_count,
                self.array_size,
                if self.cubemap { ", cube map" } else { "" },
                if self.volume { ", volume" } else { "" },
            );
        }

        if !self.levels.is_empty() {
            println!("\n{:>5} {:>4} {:>16} {:>10} {:>10}", "layer", "mip", "size", "offset", "bytes");
            for level in &self.levels {
                println!(
                    "{:>5} {:>4} {:>16} {:>10} {:>10}",
                    level.layer,
                    level.mip,
                    format!("{}x{}x{}", level.width, level.height, level.depth),
                    level.offset,
                    level.size
                );
            }
        }

        if !self.diagnostics.is_empty() {
            println!("\nDiagnostics ({}):", self.severity);
            for d in &self.diagnostics {
                println!("  [{}] {}", d.severity, d.message);
            }
        }
    }
}

fn cmd_info(input: &Path, json: bool) -> Result<()> {
    let (texture, diagnostics) = load(input)?;
    let report = InfoReport::new(input, &texture, &diagnostics);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        report.print();
    }

    if let Some(error) = diagnostics.error() {
        anyhow::bail!("{}: {}", input.display(), error);
    }

    Ok(())
}

/// Outcome of loading one file during a scan.
enum ScanResult {
    Loaded { severity: Severity, format: String },
    Unreadable,
}

fn cmd_scan(dir: &Path, filter: &str) -> Result<()> {
    let pattern = glob::Pattern::new(filter).context("Invalid filter pattern")?;
    let options = glob::MatchOptions {
        case_sensitive: false,
        ..Default::default()
    };

    println!("Scanning: {}", dir.display());

    let paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| pattern.matches_with(name, options))
        })
        .map(|entry| entry.into_path())
        .collect();

    println!("Loading {} files...", paths.len());

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let results: Vec<ScanResult> = paths
        .par_iter()
        .map(|path| {
            let result = match load(path) {
                Ok((texture, diagnostics)) => {
                    let format = match (diagnostics.is_fatal(), texture.format()) {
                        (true, _) => "invalid".to_string(),
                        (false, Some(format)) => format.to_string(),
                        (false, None) => format!("bitmask {} bpp", texture.bits_per_pixel()),
                    };
                    ScanResult::Loaded {
                        severity: diagnostics.severity(),
                        format,
                    }
                }
                Err(e) => {
                    tracing::warn!("{:#}", e);
                    ScanResult::Unreadable
                }
            };
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Done");

    let mut severities: HashMap<Severity, usize> = HashMap::new();
    let mut formats: HashMap<String, usize> = HashMap::new();
    let mut unreadable = 0;
    for result in results {
        match result {
            ScanResult::Loaded { severity, format } => {
                *severities.entry(severity).or_default() += 1;
                *formats.entry(format).or_default() += 1;
            }
            ScanResult::Unreadable => unreadable += 1,
        }
    }

    println!("Scanned {} files in {:?}", paths.len(), start.elapsed());
    for severity in [Severity::None, Severity::Info, Severity::Warning, Severity::Fatal] {
        println!(
            "  {:>8}: {}",
            severity.to_string(),
            severities.get(&severity).copied().unwrap_or(0)
        );
    }
    if unreadable > 0 {
        println!("  unreadable: {}", unreadable);
    }

    let mut formats: Vec<_> = formats.into_iter().collect();
    formats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if !formats.is_empty() {
        println!("\nMost common formats:");
        for (format, count) in formats.iter().take(10) {
            println!("  {:>6} {}", count, format);
        }
    }

    Ok(())
}

fn cmd_extract(input: &Path, output: &Path, mip: u32, layer: u32) -> Result<()> {
    println!("Extracting: {} -> {}", input.display(), output.display());

    let (texture, diagnostics) = load(input)?;
    if let Some(error) = diagnostics.error() {
        anyhow::bail!("{}: {}", input.display(), error);
    }

    let level = texture.get_image_data(mip, layer).with_context(|| {
        format!(
            "No image level at mip {} layer {} (texture has {} mips, {} layers)",
            mip,
            layer,
            texture.mip_count(),
            texture.array_size()
        )
    })?;
    fs::write(output, level.data).context("Failed to write output file")?;

    println!(
        "Wrote {}x{}x{} level ({} bytes)",
        level.width,
        level.height,
        level.depth,
        level.data.len()
    );

    Ok(())
}
