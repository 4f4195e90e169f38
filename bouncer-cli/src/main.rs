mod render;

use bouncer_core::{Bounds, Pacing, Particle, Runner, SimParams, Vec2};
use clap::{Args, Parser, Subcommand};
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "bouncer")]
#[command(about = "Point-mass bounce simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the floor drop and print a numeric trace
    Trace(TraceArgs),
    /// Render the particle bouncing inside a closed box as ASCII art
    Watch(WatchArgs),
}

#[derive(Args)]
struct TraceArgs {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 300)]
    frames: u32,
    /// Print every Nth frame
    #[arg(long, default_value_t = 10)]
    sample_every: u32,
    /// Gravitational acceleration (m/s^2)
    #[arg(long, default_value_t = 9.81)]
    gravity: f32,
    /// Fixed timestep (s)
    #[arg(long, default_value_t = 0.016)]
    dt: f32,
    /// Restitution coefficient in [0, 1]
    #[arg(long, default_value_t = 0.8)]
    damping: f32,
    /// Floor height (m)
    #[arg(long, default_value_t = 10.0)]
    floor: f32,
    /// Particle radius (m)
    #[arg(long, default_value_t = 0.5)]
    radius: f32,
    /// Initial horizontal position (m)
    #[arg(long, default_value_t = 0.0)]
    x: f32,
    /// Initial vertical position (m)
    #[arg(long, default_value_t = 0.0)]
    y: f32,
    /// Initial horizontal velocity (m/s)
    #[arg(long, default_value_t = 2.0)]
    vx: f32,
    /// Initial vertical velocity (m/s)
    #[arg(long, default_value_t = 0.0)]
    vy: f32,
    /// Sleep one timestep per frame so the trace plays out in real time
    #[arg(long)]
    realtime: bool,
}

#[derive(Args)]
struct WatchArgs {
    /// Grid width in cells (one cell = one simulation unit)
    #[arg(long, default_value_t = 40)]
    width: u16,
    /// Grid height in cells
    #[arg(long, default_value_t = 20)]
    height: u16,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Gravitational acceleration (cells/s^2)
    #[arg(long, default_value_t = 25.0)]
    gravity: f32,
    /// Fixed timestep (s)
    #[arg(long, default_value_t = 0.016)]
    dt: f32,
    /// Restitution coefficient in [0, 1]
    #[arg(long, default_value_t = 0.85)]
    damping: f32,
    /// Initial horizontal velocity (cells/s)
    #[arg(long, default_value_t = 12.0)]
    vx: f32,
    /// Initial vertical velocity (cells/s)
    #[arg(long, default_value_t = 0.0)]
    vy: f32,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Trace(args) => run_trace(&args),
        Commands::Watch(args) => run_watch(&args),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_trace(args: &TraceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let params = SimParams {
        gravity: args.gravity,
        dt: args.dt,
        damping: args.damping,
        bounds: Bounds::floor_only(args.floor),
        ..SimParams::default()
    };
    params.validate()?;

    let particle = Particle::new(
        Vec2::new(args.x, args.y),
        Vec2::new(args.vx, args.vy),
        args.radius,
        1.0,
    );
    let pacing = if args.realtime {
        Pacing::Realtime
    } else {
        Pacing::Batch
    };
    let mut runner = Runner::new(particle, params).with_pacing(pacing);

    println!("--- SIMULATION START ---");
    println!("Time(s) \t Height(m) \t Velocity(m/s)");
    let every = args.sample_every.max(1);
    runner.run_with(args.frames, |frame| {
        if frame.index % every == 0 {
            println!(
                "T={:.3}s \t Y={:.4}m \t Vy={:.4}m/s",
                frame.time, frame.pos.y, frame.vel.y
            );
        }
    });
    println!("--- SIMULATION END ---");

    Ok(())
}

fn run_watch(args: &WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.width < 3 || args.height < 3 {
        return Err("grid must be at least 3x3 cells".into());
    }

    let radius = 0.5;
    let params = SimParams {
        gravity: args.gravity,
        dt: args.dt,
        damping: args.damping,
        bounds: Bounds::boxed(0.0, args.width as f32, 0.0, args.height as f32),
        ..SimParams::default()
    };
    params.validate()?;

    let particle = Particle::new(
        Vec2::new(2.0, 2.0),
        Vec2::new(args.vx, args.vy),
        radius,
        1.0,
    );
    let mut runner = Runner::new(particle, params).with_pacing(Pacing::Realtime);

    let mut out = io::stdout();
    execute!(out, Clear(ClearType::All), cursor::Hide)?;
    let frames_result = (|| -> Result<(), Box<dyn std::error::Error>> {
        for _ in 0..args.frames {
            let frame = runner.step_frame();
            execute!(out, cursor::MoveTo(0, 0))?;
            write!(out, "{}", render::draw(frame.pos, args.width, args.height))?;
            writeln!(
                out,
                "T={:.2}s  pos=({:.2}, {:.2})  vel=({:.2}, {:.2})",
                frame.time, frame.pos.x, frame.pos.y, frame.vel.x, frame.vel.y
            )?;
            out.flush()?;
        }
        Ok(())
    })();
    execute!(out, cursor::Show)?;
    frames_result
}
