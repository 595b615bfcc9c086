use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use broadside::{
    init_logging, ui, ActionLog, AiPlayer, CliPlayer, Game, LogSink, PlacementMode, Player, Side,
    Variant,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VariantArg {
    Classic,
    Multifire,
    CruiseMissiles,
    Hardcore,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Classic => Variant::Classic,
            VariantArg::Multifire => Variant::Multifire,
            VariantArg::CruiseMissiles => Variant::CruiseMissiles,
            VariantArg::Hardcore => Variant::Hardcore,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlacementArg {
    Random,
    Manual,
}

#[derive(Args)]
struct SessionArgs {
    #[arg(long, value_enum, default_value_t = VariantArg::Classic)]
    variant: VariantArg,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Write the action log to this file")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[command(flatten)]
        session: SessionArgs,
        #[arg(long, value_enum, default_value_t = PlacementArg::Random)]
        placement: PlacementArg,
        #[arg(long, help = "Print the computer's targeting weights before its turns")]
        show_weights: bool,
    },
    /// Watch the computer play against itself.
    Watch {
        #[command(flatten)]
        session: SessionArgs,
    },
}

fn new_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn open_log(path: Option<&PathBuf>) -> anyhow::Result<Option<ActionLog<BufWriter<File>>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let file = File::create(path)
        .with_context(|| format!("creating action log {}", path.display()))?;
    Ok(Some(ActionLog::new(BufWriter::new(file)).timestamped()))
}

fn close_log(log: Option<ActionLog<BufWriter<File>>>) -> anyhow::Result<()> {
    if let Some(mut log) = log {
        log.log_exit();
        log.finish().context("writing action log")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            session,
            placement,
            show_weights,
        } => {
            let variant = Variant::from(session.variant);
            let mut rng = new_rng(session.seed);
            let mut log = open_log(session.log_file.as_ref())?;
            let mut human = CliPlayer::new(match placement {
                PlacementArg::Random => PlacementMode::Random,
                PlacementArg::Manual => PlacementMode::Manual,
            });

            loop {
                let mut computer: Box<dyn Player> = if show_weights {
                    Box::new(ui::ShowWeights::new(AiPlayer::new(), io::stdout()))
                } else {
                    Box::new(AiPlayer::new())
                };
                let mut game = Game::new(variant, SmallRng::from_rng(&mut rng));
                println!("{} - you are side A and fire first.", variant);

                let mut sink = (LogSink, &mut log);
                game.place_fleet(Side::A, &mut human, &mut sink)?;
                game.place_fleet(Side::B, computer.as_mut(), &mut sink)?;
                let winner = game.play(&mut human, computer.as_mut(), &mut sink)?;
                drop(sink);

                println!("\nOPPONENT FLEET");
                ui::write_grid(&mut io::stdout(), game.board(Side::B).own(), true)?;
                match winner {
                    Side::A => println!("\nVICTORY! You sank the enemy fleet."),
                    Side::B => println!("\nDEFEAT. Your fleet has been destroyed."),
                }
                if !human.ask_play_again() {
                    break;
                }
            }
            close_log(log)?;
        }
        Commands::Watch { session } => {
            let variant = Variant::from(session.variant);
            let mut game = Game::new(variant, new_rng(session.seed));
            let mut log = open_log(session.log_file.as_ref())?;
            let mut a = AiPlayer::new();
            let mut b = AiPlayer::new();
            let mut sink = (LogSink, &mut log);
            game.place_fleet(Side::A, &mut a, &mut sink)?;
            game.place_fleet(Side::B, &mut b, &mut sink)?;
            let winner = game.play(&mut a, &mut b, &mut sink)?;
            drop(sink);

            let mut out = io::stdout().lock();
            for side in Side::BOTH {
                writeln!(out, "\nSIDE {:?}", side)?;
                ui::write_grid(&mut out, game.board(side).own(), true)?;
                ui::write_fleet_status(&mut out, game.board(side).fleet())?;
            }
            writeln!(
                out,
                "\n{} game won by side {:?} after {} turns ({} / {} shots).",
                variant,
                winner,
                game.turns(),
                game.shots_fired(Side::A),
                game.shots_fired(Side::B)
            )?;
            close_log(log)?;
        }
    }
    Ok(())
}
