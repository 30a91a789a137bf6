use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use regard_core::AttentionTracker;
use regard_overlay::{draw_orientation_overlay, Color, RasterCanvas};

mod config;
mod recording;

#[derive(Parser)]
#[command(name = "regard", about = "Face orientation attention tracking CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded keypoint stream through the attention tracker
    Replay {
        /// JSON recording of per-frame keypoints
        file: PathBuf,
        /// Focus margin in keypoint units (default: REGARD_FOCUS_MARGIN or 20)
        #[arg(short, long)]
        margin: Option<f32>,
        /// Landmark profile name (default: REGARD_PROFILE or mediapipe-facemesh)
        #[arg(long)]
        profile: Option<String>,
        /// Frame index at which to calibrate the reference
        #[arg(long, default_value_t = 0)]
        calibrate_at: usize,
    },
    /// Render the orientation overlay for one recorded frame
    Render(RenderArgs),
    /// List the embedded landmark profiles
    Profiles,
}

#[derive(Args)]
struct RenderArgs {
    /// JSON recording of per-frame keypoints
    file: PathBuf,
    /// Frame index to render
    #[arg(short, long, default_value_t = 0)]
    frame: usize,
    /// Output PNG path
    #[arg(short, long)]
    out: PathBuf,
    /// Stroke color, a CSS name or #rrggbb
    #[arg(short, long, default_value = "red")]
    color: String,
    /// Base image to draw over (blank canvas when omitted)
    #[arg(long)]
    image: Option<PathBuf>,
    /// Canvas width when no base image is given
    #[arg(long, default_value_t = 640)]
    width: u32,
    /// Canvas height when no base image is given
    #[arg(long, default_value_t = 480)]
    height: u32,
    /// Landmark profile name (default: REGARD_PROFILE or mediapipe-facemesh)
    #[arg(long)]
    profile: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { file, margin, profile, calibrate_at } => {
            cmd_replay(&file, margin, profile.as_deref(), calibrate_at)
        }
        Commands::Render(args) => cmd_render(&args),
        Commands::Profiles => cmd_profiles(),
    }
}

fn cmd_replay(
    file: &Path,
    margin: Option<f32>,
    profile: Option<&str>,
    calibrate_at: usize,
) -> Result<()> {
    let recording = recording::load(file)?;
    if recording.frames.is_empty() {
        bail!("recording has no frames");
    }
    if calibrate_at >= recording.frames.len() {
        bail!(
            "calibration frame {calibrate_at} out of range: recording has {} frames",
            recording.frames.len()
        );
    }

    let margin = config::resolve_margin(margin);
    let profile = config::resolve_profile(profile)?;
    let mut tracker = AttentionTracker::with_profile(profile.clone(), margin);
    tracing::info!(
        profile = profile.name(),
        margin,
        frames = recording.frames.len(),
        "replay started"
    );

    let mut focused_frames = 0usize;
    for (index, frame) in recording.frames.iter().enumerate() {
        tracker
            .refresh(&frame.keypoints)
            .with_context(|| format!("frame {index}"))?;
        if index == calibrate_at {
            tracker.set_reference();
        }
        let Some(orientation) = tracker.orientation() else { continue };

        match tracker.distance_to_reference() {
            Some(offset) => {
                let focused = tracker.is_focused();
                if focused {
                    focused_frames += 1;
                }
                println!(
                    "frame {index:4}  orientation ({:7.2}, {:7.2}, {:7.2})  offset ({:6.2}, {:6.2})  {}",
                    orientation.x,
                    orientation.y,
                    orientation.z,
                    offset.x,
                    offset.y,
                    if focused { "focused" } else { "away" }
                );
            }
            None => println!(
                "frame {index:4}  orientation ({:7.2}, {:7.2}, {:7.2})  awaiting calibration",
                orientation.x, orientation.y, orientation.z
            ),
        }
    }

    let measured = recording.frames.len() - calibrate_at;
    println!("focused {focused_frames}/{measured} frames after calibration (margin {margin})");
    Ok(())
}

fn cmd_render(args: &RenderArgs) -> Result<()> {
    let recording = recording::load(&args.file)?;
    let frame = recording.frames.get(args.frame).with_context(|| {
        format!(
            "frame {} out of range: recording has {} frames",
            args.frame,
            recording.frames.len()
        )
    })?;

    let profile = config::resolve_profile(args.profile.as_deref())?;
    let orientation = regard_core::estimate_orientation(&frame.keypoints, profile)
        .with_context(|| format!("frame {}", args.frame))?;
    let face = frame
        .face_box
        .with_context(|| format!("frame {} has no faceBox, overlays need one", args.frame))?;
    let color: Color = args.color.parse()?;

    let mut canvas = match &args.image {
        Some(path) => {
            let base = image::open(path)
                .with_context(|| format!("failed to open base image {}", path.display()))?;
            RasterCanvas::from_image(base.to_rgba8())
        }
        None => RasterCanvas::new(args.width, args.height),
    };

    draw_orientation_overlay(&mut canvas, &face, orientation, color);
    tracing::info!(
        width = canvas.width(),
        height = canvas.height(),
        out = %args.out.display(),
        "overlay rendered"
    );

    canvas
        .into_image()
        .save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_profiles() -> Result<()> {
    for profile in regard_core::list_profiles() {
        println!(
            "{:24} {:3} points  nose={} left_cheek={} right_cheek={}",
            profile.name(),
            profile.profile.points,
            profile.landmarks.nose,
            profile.landmarks.left_cheek,
            profile.landmarks.right_cheek
        );
    }
    Ok(())
}
