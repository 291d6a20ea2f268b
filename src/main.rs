mod clock;
mod graphics;
mod input;
mod logging;
mod math;
mod renderer;
mod shape;
mod state;
mod terminal;
mod vertex;

use crate::clock::FrameClock;
use crate::graphics::RasterCanvas;
use crate::logging::{init_logging, LoggingConfig};
use crate::renderer::LayerRenderer;
use crate::state::{VisualizerState, TARGET_FPS};
use crate::terminal::{DebugInfo, Hud, TerminalSession};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Start with the debug overlay shown
    #[arg(short, long)]
    debug: bool,

    /// Write log records to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Runs the frame loop until a quit is requested
fn run(session: &mut TerminalSession, state: &mut VisualizerState) -> anyhow::Result<u64> {
    let renderer = LayerRenderer::default();
    let (width, height) = session.pixel_size();
    let mut canvas = RasterCanvas::new(width, height);
    let mut clock = FrameClock::new();

    while !state.quit_requested {
        for command in session.poll_commands()? {
            input::apply(state, command);
        }
        if state.quit_requested {
            break;
        }

        if canvas.size() != session.pixel_size() {
            let (width, height) = session.pixel_size();
            canvas = RasterCanvas::new(width, height);
        }

        renderer.render_frame(state, &mut canvas);

        let hud = Hud {
            shape: state.shape,
            debug: state.debug.then(|| DebugInfo {
                fps: clock.fps(),
                time_offset: state.time_offset,
            }),
        };
        session
            .present(&canvas, &hud)
            .context("failed to present frame")?;

        let frame = clock.tick(TARGET_FPS);
        log::trace!("frame {} took {:?}", frame.frame_index, frame.dt);
    }

    Ok(clock.frames())
}

/// Main function
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: None,
        file: args.log_file,
    })?;

    let mut state = VisualizerState::new();
    state.debug = args.debug;

    let mut session = TerminalSession::enter().context("failed to initialize the terminal")?;
    let result = run(&mut session, &mut state);
    session.restore()?;

    let frames = result?;
    log::info!("rendered {} frames, exiting", frames);
    Ok(())
}
