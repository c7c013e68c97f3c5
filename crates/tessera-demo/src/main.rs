//! Headless driver: declares the sample surfaces, plays back a header drag
//! and saves window placement between runs.

use std::{fs, io, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser};
use tessera::{
    Config, FrameInput, Gui, WindowStore,
    geom::{Expanse, Point},
};
use tessera_demo::{
    backend::TraceBackend,
    panels::{self, SHOWCASE},
    script::DragScript,
};
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
/// Command line arguments.
struct Args {
    /// JSON configuration file.
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Window placement file, read at start and written on exit.
    #[clap(short, long, default_value = "tessera-windows.json")]
    save: PathBuf,

    /// Number of frames to run.
    #[clap(short, long, default_value_t = 30)]
    frames: u32,

    /// Screen width.
    #[clap(long, default_value_t = 1280.0)]
    width: f32,

    /// Screen height.
    #[clap(long, default_value_t = 720.0)]
    height: f32,

    /// Horizontal distance to drag the showcase window.
    #[clap(long, default_value_t = 200.0)]
    drag_x: f32,

    /// Vertical distance to drag the showcase window.
    #[clap(long, default_value_t = 120.0)]
    drag_y: f32,

    /// Print the window table when done.
    #[clap(long)]
    dump: bool,

    /// Raise log verbosity. Repeat for more.
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Load the configuration file, or defaults when none was given.
fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(Config::from_json(&text)?)
}

pub fn main() -> Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = load_config(args.config.as_ref())?;
    let header_height = config.header_height;
    let viewport = Expanse::new(args.width, args.height);

    let mut gui = Gui::new(config);
    gui.context_mut().set_store(WindowStore::load(&args.save));
    let panels = panels::install(&mut gui);
    let mut backend = TraceBackend::default();

    // Settle placement first so the drag starts on the showcase header.
    gui.frame(&FrameInput::new(viewport), &mut backend)?;
    let start = gui
        .context()
        .find_window(panels.showcase_surface, SHOWCASE)
        .and_then(|h| gui.context().window(h))
        .map(|w| w.header().tl)
        .unwrap_or_default()
        .offset(30.0, header_height / 2.0);
    let script = DragScript::new(
        start,
        Point::new(start.x + args.drag_x, start.y + args.drag_y),
        args.frames.saturating_sub(4).max(1),
    );

    for frame in 0..args.frames {
        gui.frame(&script.input(frame, viewport), &mut backend)?;
        info!(frame, drawn = backend.take_count(), "frame done");
    }

    gui.context_mut()
        .save(&args.save)
        .with_context(|| format!("saving {}", args.save.display()))?;
    info!(
        path = %args.save.display(),
        frames = gui.context().frames(),
        "window placement saved"
    );

    if args.dump {
        println!("{}", gui.context().dump());
    }
    let showcase = panels.showcase.borrow();
    println!(
        "showcase open={} float2={} int2={} notes drawn={}",
        showcase.open,
        showcase.float2,
        showcase.int2,
        panels.notes.borrow().drawn
    );
    Ok(())
}
