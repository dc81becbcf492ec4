use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use qrblob::{Generator, RenderOptions, Style};

#[derive(Parser)]
#[command(name = "qrgen", version, about = "Generate QR code SVGs in classic or blob style")]
struct Cli {
    /// Text or URL to encode
    text: String,

    /// Rendering style
    #[arg(long, value_enum, default_value = "blob")]
    style: StyleArg,

    /// Hex fill color for modules and finder ornaments
    #[arg(long, default_value = "#000000")]
    color: String,

    /// Directory the SVG file is written to
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Print the SVG to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Module size in pixels
    #[arg(long, default_value_t = 30)]
    module_size: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Classic,
    Blob,
}

impl From<StyleArg> for Style {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Classic => Style::Classic,
            StyleArg::Blob => Style::Blob,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !is_hex_color(&cli.color) {
        bail!("color must be a 3- or 6-digit hex value like #1a2b3c");
    }

    let generator = Generator::with_options(RenderOptions {
        module_size: cli.module_size,
        ..RenderOptions::default()
    });
    let style = cli.style.into();

    if cli.stdout {
        let svg = generator.generate(&cli.text, style, &cli.color)?;
        println!("{svg}");
    } else {
        let path = generator
            .generate_to_file(&cli.text, style, &cli.color, &cli.out)
            .with_context(|| format!("could not write SVG under {}", cli.out.display()))?;
        println!("Saved to: {}", path.display());
    }

    Ok(())
}

fn is_hex_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_validation() {
        assert!(is_hex_color("#000"));
        assert!(is_hex_color("#1a2B3c"));
        assert!(!is_hex_color("000000"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#gggggg"));
    }
}
