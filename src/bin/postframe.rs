use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "postframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a post image from a background photo and text.
    Compose(ComposeArgs),
    /// Generate a deterministic placeholder background.
    Placeholder(PlaceholderArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Background image path. Omit to generate a placeholder from the
    /// headline.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Headline drawn in the text band.
    #[arg(long)]
    headline: String,

    /// Category key for the badge (e.g. "hi-tech").
    #[arg(long, default_value = "societe")]
    category: String,

    /// Locale code for the date (e.g. "en", "fr").
    #[arg(long, default_value = "en")]
    locale: String,

    /// Optional logo image (transparent PNG recommended).
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Decorative frame asset.
    #[arg(long, default_value = "Frame.png")]
    frame: PathBuf,

    /// Directory holding preferred font files.
    #[arg(long, default_value = "fonts")]
    fonts_dir: PathBuf,

    /// Optional layout spec JSON overriding the built-in defaults.
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Print diagnostics about font resolution (origin + SHA-256 of font
    /// bytes).
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Parser, Debug)]
struct PlaceholderArgs {
    /// Seed text driving the procedural artwork.
    #[arg(long)]
    text: String,

    /// Output width in pixels.
    #[arg(long, default_value_t = 1079)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 1345)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Placeholder(args) => cmd_placeholder(args),
    }
}

fn read_spec(path: Option<&Path>) -> anyhow::Result<postframe::ComposeSpec> {
    let Some(path) = path else {
        return Ok(postframe::ComposeSpec::default());
    };
    let bytes =
        std::fs::read(path).with_context(|| format!("read spec '{}'", path.display()))?;
    let spec: postframe::ComposeSpec =
        serde_json::from_slice(&bytes).with_context(|| "parse spec JSON")?;
    Ok(spec)
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let spec = read_spec(args.spec.as_deref())?;

    let background = match &args.background {
        Some(path) => image::open(path)
            .with_context(|| format!("open background '{}'", path.display()))?,
        None => image::DynamicImage::ImageRgb8(postframe::generate_placeholder(
            &args.headline,
            (spec.canvas.width, spec.canvas.height),
        )?),
    };

    let logo = match &args.logo {
        Some(path) => Some(
            image::open(path).with_context(|| format!("open logo '{}'", path.display()))?,
        ),
        None => None,
    };

    let resolver = postframe::FontResolver::new(&args.fonts_dir);
    if args.dump_fonts {
        dump_font_diagnostics(&resolver, &spec);
    }

    let composer = postframe::Composer::new(spec, resolver, Some(args.frame.clone()));
    let out_img = composer.compose(&postframe::ComposeRequest {
        background,
        headline: args.headline.clone(),
        category_key: args.category.clone(),
        logo,
        locale: args.locale.clone(),
    })?;

    write_png(&args.out, &out_img)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_placeholder(args: PlaceholderArgs) -> anyhow::Result<()> {
    let img = postframe::generate_placeholder(&args.text, (args.width, args.height))?;
    write_png(&args.out, &img)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_png(out: &Path, img: &image::RgbImage) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}

fn dump_font_diagnostics(resolver: &postframe::FontResolver, spec: &postframe::ComposeSpec) {
    let mut engine = postframe::TextEngine::new();
    eprintln!("font diagnostics:");
    for (role, candidates, size) in [
        ("main", &spec.fonts.main, spec.fonts.main_initial_size),
        ("date", &spec.fonts.date, spec.fonts.date_size),
        ("category", &spec.fonts.category, spec.fonts.category_size),
    ] {
        let handle = resolver.resolve(candidates, size);
        match handle.source() {
            postframe::FontSource::Bytes { data, origin } => {
                let family = engine
                    .family_name(&handle)
                    .unwrap_or_else(|| "unknown".to_string());
                eprintln!("  {role}:");
                eprintln!("    origin:  {origin}");
                eprintln!("    family:  {family}");
                eprintln!("    sha256:  {}", sha256_hex(data));
            }
            postframe::FontSource::Builtin => {
                eprintln!("  {role}: built-in glyph set");
            }
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
