use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use cube_export::{ExportOptions, write_export, write_export_file};
use cube_mesh::{BoxDimensions, BoxMesh, FaceUnwrap, build_box, project_box_uv, unwrap_box};
use cube_model::{OffsetZSource, TextureAtlas};
use serde::Serialize;
use tracing::{Level, info, warn};

mod config;
mod scene;

use config::Config;
use scene::{TextureSources, load_scene};

#[derive(Parser, Debug)]
#[command(
    name = "cube-export",
    version,
    about = "Export box models as Minecraft ModelBase classes"
)]
struct Cli {
    /// -v for debug, -vv for trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML config. Defaults to $CUBE_EXPORT_CONFIG.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a scene snapshot as a Java model class.
    Export(ExportArgs),
    /// Print a fixed-topology box mesh, unwrapped if a texture is known.
    Box(BoxArgs),
    /// Print the face UVs for one object of a scene.
    Unwrap(UnwrapArgs),
}

#[derive(Args, Debug, Default)]
struct TextureArgs {
    /// PNG to take the texture size from.
    #[arg(long, conflicts_with = "texture_size")]
    texture: Option<PathBuf>,

    #[arg(long, value_name = "WxH")]
    texture_size: Option<TextureAtlas>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OffsetZArg {
    MinVertex,
    Location,
}

impl From<OffsetZArg> for OffsetZSource {
    fn from(arg: OffsetZArg) -> Self {
        match arg {
            OffsetZArg::MinVertex => OffsetZSource::MinVertex,
            OffsetZArg::Location => OffsetZSource::Location,
        }
    }
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Scene snapshot (JSON).
    scene: PathBuf,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit sampled animation tables.
    #[arg(long)]
    animated: bool,

    /// Static pose only, even when the config asks for animation.
    #[arg(long = "static", conflicts_with = "animated")]
    static_pose: bool,

    #[command(flatten)]
    texture: TextureArgs,

    #[arg(long)]
    model_name: Option<String>,

    #[arg(long)]
    package: Option<String>,

    #[arg(long, value_enum)]
    offset_z: Option<OffsetZArg>,
}

impl ExportArgs {
    fn apply(&self, options: &mut ExportOptions) {
        if self.animated {
            options.animated = true;
        }
        if self.static_pose {
            options.animated = false;
        }
        if let Some(name) = &self.model_name {
            options.model_name = name.clone();
        }
        if let Some(package) = &self.package {
            options.package = Some(package.clone());
        }
        if let Some(offset_z) = self.offset_z {
            options.offset_z = offset_z.into();
        }
    }
}

#[derive(Args, Debug)]
struct BoxArgs {
    #[arg(long, default_value_t = 1.0)]
    width: f64,

    #[arg(long, default_value_t = 1.0)]
    height: f64,

    #[arg(long, default_value_t = 1.0)]
    depth: f64,

    #[command(flatten)]
    texture: TextureArgs,
}

#[derive(Args, Debug)]
struct UnwrapArgs {
    scene: PathBuf,

    #[arg(long)]
    object: String,

    #[command(flatten)]
    texture: TextureArgs,
}

#[derive(Serialize)]
struct BoxOutput {
    mesh: BoxMesh,
    #[serde(skip_serializing_if = "Option::is_none")]
    uvs: Option<Vec<FaceUnwrap>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;
    match &cli.command {
        Command::Export(args) => run_export(args, &config),
        Command::Box(args) => run_box(args, &config),
        Command::Unwrap(args) => run_unwrap(args, &config),
    }
}

fn texture_sources<'a>(args: &'a TextureArgs, config: &'a Config) -> TextureSources<'a> {
    TextureSources {
        size: args.texture_size,
        png: args.texture.as_deref(),
        scene: None,
        config: Some(&config.texture),
    }
}

fn run_export(args: &ExportArgs, config: &Config) -> Result<()> {
    let scene = load_scene(&args.scene)?;
    let texture = TextureSources {
        scene: scene.texture,
        ..texture_sources(&args.texture, config)
    }
    .resolve()?;

    let mut options = config.export.clone();
    args.apply(&mut options);

    let objects = scene.source_objects();
    info!(
        "exporting {} objects as {} ({} texture)",
        objects.len(),
        options.class_name(),
        texture
    );
    match &args.output {
        Some(path) => write_export_file(path, &objects, texture, &options)?,
        None => write_export(io::stdout().lock(), &objects, texture, &options)?,
    }
    Ok(())
}

fn run_box(args: &BoxArgs, config: &Config) -> Result<()> {
    let texture = texture_sources(&args.texture, config).resolve()?;
    let mesh = build_box(args.width, args.height, args.depth);
    let uvs = if texture.is_empty() {
        warn!("no texture size given, skipping unwrap");
        None
    } else {
        let dims = BoxDimensions::new(args.width, args.height, args.depth);
        Some(unwrap_box(&mesh, dims, texture)?)
    };
    print_json(&BoxOutput { mesh, uvs })
}

fn run_unwrap(args: &UnwrapArgs, config: &Config) -> Result<()> {
    let scene = load_scene(&args.scene)?;
    let texture = TextureSources {
        scene: scene.texture,
        ..texture_sources(&args.texture, config)
    }
    .resolve()?;
    if texture.is_empty() {
        bail!("unwrap needs a texture size, got {texture}");
    }
    let Some(object) = scene
        .source_objects()
        .into_iter()
        .find(|o| o.name == args.object)
    else {
        bail!("object `{}` not found in {}", args.object, args.scene.display());
    };
    let faces = project_box_uv(BoxDimensions::from_object_dimensions(object.dimensions), texture)?;
    print_json(&faces)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("failed to serialize output")?;
    writeln!(out)?;
    Ok(())
}
