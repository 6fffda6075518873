use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "backdrop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite an existing image onto a blended background.
    Screenshot(ScreenshotArgs),
    /// Print the palette derived from a color as JSON.
    Palette(PaletteArgs),
}

#[derive(Parser, Debug)]
struct ScreenshotArgs {
    /// Foreground image.
    image_path: PathBuf,

    /// Output image path (png, bmp or tiff).
    #[arg(long, default_value = "screenshot_output.png")]
    output: PathBuf,

    /// Seed color for the background (hex or CSS color name).
    #[arg(long)]
    color: Option<String>,

    /// Without --color, sample the seed from the image's top half instead of picking a
    /// random one.
    #[arg(long, default_value_t = false)]
    sample_color: bool,

    /// Seed for the random source (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Options JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Foreground corner radius in pixels.
    #[arg(long)]
    radius: Option<u32>,

    /// Margin as a fraction of the foreground's shorter side.
    #[arg(long)]
    margin_pct: Option<f64>,

    /// Gaussian blur standard deviation in pixels.
    #[arg(long)]
    blur_radius: Option<f32>,

    /// Noise raster size as a fraction of the output size.
    #[arg(long)]
    noise_scale: Option<f64>,
}

#[derive(Parser, Debug)]
struct PaletteArgs {
    /// Seed color (hex or CSS color name).
    color: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Screenshot(args) => cmd_screenshot(args),
        Command::Palette(args) => cmd_palette(args),
    }
}

fn cmd_screenshot(args: ScreenshotArgs) -> anyhow::Result<()> {
    let mut opts = match &args.config {
        Some(path) => backdrop::CompositeOpts::from_path(path)?,
        None => backdrop::CompositeOpts::default(),
    };
    if let Some(r) = args.radius {
        opts.corner_radius = r;
    }
    if let Some(m) = args.margin_pct {
        opts.margin_pct = m;
    }
    if let Some(b) = args.blur_radius {
        opts.background.blur_radius = b;
    }
    if let Some(n) = args.noise_scale {
        opts.background.noise_scale = n;
    }
    opts.validate()?;

    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let color = match args.color {
        Some(c) => c,
        None if args.sample_color => {
            let img = backdrop::load_rgba(&args.image_path).with_context(|| {
                format!("sample seed color from '{}'", args.image_path.display())
            })?;
            backdrop::average_top_half_color(&image::DynamicImage::ImageRgba8(img))?.to_hex()
        }
        None => backdrop::random_seed_color(&mut rng).to_hex(),
    };
    tracing::info!(%color, "seed color");

    backdrop::composite(&args.image_path, &args.output, &color, &opts, &mut rng)?;

    println!("Final composited image saved as {}", args.output.display());
    Ok(())
}

fn cmd_palette(args: PaletteArgs) -> anyhow::Result<()> {
    let palette = backdrop::generate_palette(&args.color)?;
    println!("{}", serde_json::to_string_pretty(&palette)?);
    Ok(())
}
