//! Height map generator: synthesizes a fractal noise field and saves it as a
//! grayscale PNG next to any earlier maps without overwriting them.
mod save;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use heightmap_core::{FieldRasterizer, GenerationParameters, NoiseFieldGenerator, Offset2};
use log::info;

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "heightmap", about = "Generate a fractal noise height map and save it as a grayscale PNG")]
struct Args {
    /// Map width in pixels
    #[arg(long, default_value_t = 512)]
    width: usize,

    /// Map height in pixels
    #[arg(long, default_value_t = 512)]
    height: usize,

    /// Pixels per noise unit at the first octave (values <= 0 are clamped)
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true, value_parser = finite)]
    scale: f64,

    /// Number of summed octaves
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=10))]
    octaves: u32,

    /// Amplitude multiplier per octave
    #[arg(long, default_value_t = 0.5, value_parser = persistence_in_range)]
    persistence: f64,

    /// Frequency multiplier per octave
    #[arg(long, default_value_t = 2.0, value_parser = lacunarity_in_range)]
    lacunarity: f64,

    /// Seed for the octave offsets
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    seed: i32,

    /// Horizontal offset in noise space
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, value_parser = finite)]
    offset_x: f64,

    /// Vertical offset in noise space
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, value_parser = finite)]
    offset_y: f64,

    /// JSON parameter file; replaces the generation flags above when given
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the PNG is written to (created if absent)
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// File stem; `_1`, `_2`, ... is appended when the name is taken
    #[arg(long, default_value = "HeightMap")]
    name: String,
}

fn bounded(s: &str, lo: f64, hi: f64) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (lo..=hi).contains(&v) {
        Ok(v)
    } else {
        Err(format!("{v} is not in {lo}..={hi}"))
    }
}

fn finite(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("{v} is not a finite number"))
    }
}

fn persistence_in_range(s: &str) -> Result<f64, String> {
    bounded(s, 0.0, 1.0)
}

fn lacunarity_in_range(s: &str) -> Result<f64, String> {
    bounded(s, 1.0, 10.0)
}

impl Args {
    fn parameters(&self) -> Result<GenerationParameters> {
        if let Some(path) = &self.config {
            let json = fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            return GenerationParameters::from_json(&json)
                .with_context(|| format!("invalid parameters in {}", path.display()));
        }
        Ok(GenerationParameters {
            width: self.width,
            height: self.height,
            scale: self.scale,
            octaves: self.octaves,
            persistence: self.persistence,
            lacunarity: self.lacunarity,
            seed: self.seed,
            offset: Offset2::new(self.offset_x, self.offset_y),
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = args.parameters()?;

    info!(
        "Generating {}x{} height map (seed {}, {} octaves, scale {})",
        params.width, params.height, params.seed, params.octaves, params.scale
    );
    let started = Instant::now();
    let field = NoiseFieldGenerator::new().generate(&params)?;
    let pixels = FieldRasterizer::default().rasterize(&field)?;
    info!("Generated in {} ms", started.elapsed().as_millis());

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("cannot create {}", args.output_dir.display()))?;
    let path = save::unique_path(&args.output_dir, &args.name);
    save::save_png(&pixels, &path)?;
    info!("Saved height map to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_defaults() {
        let args = Args::parse_from(["heightmap"]);
        assert_eq!(args.parameters().unwrap(), GenerationParameters::default());
    }

    #[test]
    fn flags_fill_every_parameter() {
        let args = Args::parse_from([
            "heightmap", "--width", "64", "--height", "32", "--scale", "-1", "--octaves", "10",
            "--persistence", "0.25", "--lacunarity", "3", "--seed", "-5", "--offset-x", "-2.5",
            "--offset-y", "4",
        ]);
        let p = args.parameters().unwrap();
        assert_eq!((p.width, p.height, p.octaves, p.seed), (64, 32, 10, -5));
        assert_eq!(p.scale, -1.0);
        assert_eq!(p.persistence, 0.25);
        assert_eq!(p.lacunarity, 3.0);
        assert_eq!(p.offset, Offset2::new(-2.5, 4.0));
    }

    #[test]
    fn out_of_range_sliders_are_rejected() {
        assert!(Args::try_parse_from(["heightmap", "--octaves", "11"]).is_err());
        assert!(Args::try_parse_from(["heightmap", "--octaves", "0"]).is_err());
        assert!(Args::try_parse_from(["heightmap", "--persistence", "1.5"]).is_err());
        assert!(Args::try_parse_from(["heightmap", "--lacunarity", "0.5"]).is_err());
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert!(Args::try_parse_from(["heightmap", "--offset-x", "NaN"]).is_err());
        assert!(Args::try_parse_from(["heightmap", "--offset-y", "-inf"]).is_err());
        assert!(Args::try_parse_from(["heightmap", "--scale", "inf"]).is_err());
        assert!(Args::try_parse_from(["heightmap", "--persistence", "NaN"]).is_err());
        let tiny = Args::try_parse_from(["heightmap", "--scale", "1e-300"]).unwrap();
        assert_eq!(tiny.scale, 1e-300);
    }

    #[test]
    fn config_file_replaces_flags() {
        let path = std::env::temp_dir().join(format!("heightmap-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "width": 8, "height": 4, "seed": 99 }"#).unwrap();
        let args = Args::parse_from(["heightmap", "--width", "300", "--config", path.to_str().unwrap()]);
        let p = args.parameters().unwrap();
        assert_eq!((p.width, p.height, p.seed), (8, 4, 99));
        fs::remove_file(&path).unwrap();
    }
}
