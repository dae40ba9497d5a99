mod config;
mod error;
mod renderer;

use std::error::Error as _;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use clap::{ArgAction, Parser};
use env_logger::Builder;
use log::LevelFilter;

use vox_core::voxel::voxelize;
use vox_parser::open_point_reader;
use vox_render::{FrameInput, PointMesh, RenderSession};

use config::{ColorMode, ViewerConfig};
use error::AppError;
use renderer::LogRenderer;

const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(
    name = "voxview",
    about = "Voxelize a LIDAR tile and render it as points",
    version = "0.0.1"
)]
struct Cli {
    /// JSON config file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, allow_negative_numbers = true)]
    tile_x: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    tile_y: Option<i32>,

    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Point cloud file to load instead of `{tile_x}_{tile_y}.laz`
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Headless frames to render after loading
    #[arg(long)]
    frames: Option<u32>,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn resolve_config(args: &Cli) -> Result<ViewerConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => ViewerConfig::from_json_file(path)?,
        None => ViewerConfig::default(),
    };

    if let Some(tile_x) = args.tile_x {
        config.tile_x = tile_x;
    }
    if let Some(tile_y) = args.tile_y {
        config.tile_y = tile_y;
    }
    if let Some(base_dir) = &args.base_dir {
        config.base_directory = base_dir.clone();
    }
    if let Some(input) = &args.input {
        config.input = Some(input.clone());
    }
    if let Some(color) = args.color {
        config.color = color;
    }
    if let Some(frames) = args.frames {
        config.frames = frames;
    }

    Ok(config)
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .parse_default_env()
        .init();
}

fn run(config: &ViewerConfig) -> Result<(), AppError> {
    let input_path = config.input_path();
    log::info!("input file: {:?}", input_path);
    log::info!("tile origin: {:?}", config.tile_origin());
    log::info!("color mode: {:?}", config.color);

    log::info!("start voxelizing...");
    let start_local = std::time::Instant::now();
    let output = {
        let mut reader = open_point_reader(&input_path)?;
        let strategy = config.color.strategy();
        voxelize(&mut reader, config.tile_origin(), strategy.as_ref())?
    };
    log::info!("finish voxelizing in {:?}", start_local.elapsed());
    log::info!("voxel count: {}", output.stats.unique_voxels);

    if output.vertices.is_empty() {
        log::warn!("{:?} contains no points, nothing to render", input_path);
        return Ok(());
    }

    let mesh = PointMesh::new(output.vertices);
    let mut session = RenderSession::new(mesh, config.viewport());
    let mut renderer = LogRenderer::default();

    log::info!("start rendering {} frames...", config.frames);
    let start_local = std::time::Instant::now();
    for _ in 0..config.frames {
        session.frame(FRAME_DT, &FrameInput::default(), &mut renderer);
    }
    log::info!(
        "finish rendering: {} draw calls in {:?}",
        renderer.draw_calls(),
        start_local.elapsed()
    );

    Ok(())
}

fn main() {
    let args = Cli::parse();
    init_logger(args.verbose);

    let start = std::time::Instant::now();
    let result = resolve_config(&args).and_then(|config| {
        log::info!("config: {:?}", config);
        run(&config)
    });

    if let Err(err) = result {
        log::error!("{}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            log::error!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }

    log::info!("Elapsed: {:?}", start.elapsed());
}
