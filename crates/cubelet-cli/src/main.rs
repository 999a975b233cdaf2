use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use env_logger::TimestampPrecision;
use log::LevelFilter;

use cubelet_engine::controls::{buttons, RESOLVE_KEY};
use cubelet_engine::{Cube, CubeConfig, CubeService};

mod renderer;
mod repl;

use renderer::TerminalRenderer;
use repl::ReplCommand;

#[derive(Parser)]
#[command(name = "cubelet", version, about, long_about = None)]
struct Cli {
    /// Start from the built-in demo scramble.
    #[arg(long)]
    scrambled: bool,

    /// Animation frames per quarter turn.
    #[arg(long, default_value_t = CubeConfig::default().frame_rate)]
    frame_rate: u32,

    /// Seconds per quarter turn.
    #[arg(long, default_value_t = CubeConfig::default().anim_length)]
    anim_length: f64,

    /// Do not record moves; `:resolve` becomes a no-op.
    #[arg(long)]
    no_undo: bool,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> CubeConfig {
        CubeConfig {
            frame_rate: self.frame_rate,
            anim_length: self.anim_length,
            record_undo: !self.no_undo,
            start_scrambled: self.scrambled,
            ..CubeConfig::default()
        }
    }
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    let labels: Vec<String> = buttons().into_iter().map(|b| b.label).collect();
    writeln!(out, "moves: {}", labels.join(", "))?;
    writeln!(out, "type any move string, e.g. R U R' U'")?;
    writeln!(
        out,
        ":resolve (:r, key {RESOLVE_KEY} in a GUI)  :log  :state  :help  :quit"
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let cube = Cube::new(cli.config(), TerminalRenderer::new())?;
    let service = CubeService::start(cube)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_help(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match ReplCommand::parse(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => break,
            ReplCommand::Help => print_help(&mut out)?,
            ReplCommand::Resolve => {
                let done = service.submit_resolve()?.wait()?;
                writeln!(out, "resolved {} turns", done.turns_applied)?;
            }
            ReplCommand::Log => {
                let snap = service.submit_snapshot()?.wait()?;
                writeln!(out, "log: {}", snap.move_log)?;
            }
            ReplCommand::State => {
                let snap = service.submit_snapshot()?.wait()?;
                write!(out, "{}", snap.lattice)?;
                writeln!(out, "solved: {}", snap.lattice.is_solved())?;
            }
            ReplCommand::Moves(text) => {
                let done = service.submit_moves(text)?.wait()?;
                writeln!(out, "applied {} turns", done.turns_applied)?;
            }
        }
    }

    let cube = service.shutdown()?;
    log::info!("exiting after {} rotations", cube.renderer().rotations());
    Ok(())
}
