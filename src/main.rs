//! deskscene CLI
//!
//! Generates the default device configurations, inspects single object files
//! and loads the full desk scene.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use deskscene::config::{self, DEFAULT_CONFIG_DIR};
use deskscene::gfx::camera::{Camera, FlyCamera};
use deskscene::gfx::rendering::draw_calls;
use deskscene::gfx::scene::{DeviceKind, Object, Scene, SceneAnimator, SceneLayout};

#[derive(Parser)]
#[command(name = "deskscene")]
#[command(about = "Hierarchical desk scene geometry tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the reference PC, monitor and keyboard configurations
    Generate {
        /// Output directory
        #[arg(short, long, default_value = DEFAULT_CONFIG_DIR)]
        dir: PathBuf,
    },
    /// Load one object file, validate it and print its statistics
    Inspect {
        /// Object configuration file
        file: PathBuf,
        /// Structural checks to apply
        #[arg(short, long, value_enum, default_value_t = Kind::Generic)]
        kind: Kind,
    },
    /// Load the full scene and print its layout and statistics
    Scene {
        /// Directory holding the nine device files
        #[arg(short, long, default_value = DEFAULT_CONFIG_DIR)]
        dir: PathBuf,
        /// Run the idle animations for this many seconds first
        #[arg(long, default_value_t = 0.0)]
        simulate: f32,
        /// Save the first object to this file afterwards
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Pc,
    Monitor,
    Keyboard,
    Generic,
}

impl From<Kind> for DeviceKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Pc => DeviceKind::Pc,
            Kind::Monitor => DeviceKind::Monitor,
            Kind::Keyboard => DeviceKind::Keyboard,
            Kind::Generic => DeviceKind::Generic,
        }
    }
}

const FRAME_TIME: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { dir } => {
            let written = config::generate_default_configs(&dir)
                .with_context(|| format!("generating configurations in {}", dir.display()))?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Commands::Inspect { file, kind } => {
            inspect(&file, kind.into())?;
        }
        Commands::Scene {
            dir,
            simulate,
            save,
        } => {
            show_scene(&dir, simulate, save)?;
        }
    }

    Ok(())
}

fn inspect(file: &PathBuf, kind: DeviceKind) -> Result<()> {
    let mut object =
        Object::load(file, kind).with_context(|| format!("loading {}", file.display()))?;
    object.initialize();

    println!("{}", object.statistics());
    for part in &object.parts {
        println!(
            "  {} centroid {} rotation {} scale {}{}",
            part.statistics(),
            part.centroid,
            part.rotation,
            part.scale,
            if part.visible { "" } else { " (hidden)" }
        );
    }

    let violations = object.validate();
    if violations.is_empty() {
        println!("No problems found");
    } else {
        println!("{} problem(s):", violations.len());
        for violation in &violations {
            println!("  - {}", violation);
        }
    }
    Ok(())
}

fn show_scene(dir: &PathBuf, simulate: f32, save: Option<PathBuf>) -> Result<()> {
    let layout = SceneLayout::default();
    let mut scene = Scene::load(dir, &layout)
        .with_context(|| format!("loading scene from {}", dir.display()))?;

    if simulate > 0.0 {
        let mut animator = SceneAnimator::new();
        let frames = (simulate / FRAME_TIME).ceil() as u32;
        for _ in 0..frames {
            animator.update(FRAME_TIME, &mut scene);
        }
        log::info!("Simulated {} frames ({:.2}s)", frames, animator.elapsed());
    }

    println!("{}", Scene::layout_report(&layout));
    println!("{}", scene.statistics());

    let camera = FlyCamera::default();
    let view_proj = camera.build_view_projection_matrix(16.0 / 9.0);
    println!("Camera at {}", camera.position());
    for object in scene.objects() {
        let origin = view_proj * object.model_matrix() * cgmath::Vector4::new(0.0, 0.0, 0.0, 1.0);
        println!(
            "  {:<12} {:>4} draw calls, clip depth {:.3}",
            object.name,
            draw_calls(object).len(),
            origin.z / origin.w
        );
    }

    if let Some(path) = save {
        if let Some(first) = scene.objects().first() {
            first
                .save(&path)
                .with_context(|| format!("saving {}", path.display()))?;
            println!("Saved {} to {}", first.name, path.display());
        }
    }

    Ok(())
}
