use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging,
    ui::{coord_to_string, describe, outcome_message, parse_coord, render_view},
    Match, Phase, Rules, Side, Strategy, TargetSelector,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct MatchArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Let the computer follow up on its hits instead of firing at random.
    #[arg(long)]
    hunt: bool,
    /// Mark the water around every sunk ship as missed.
    #[arg(long)]
    reveal_perimeter: bool,
}

impl MatchArgs {
    fn rules(&self) -> Rules {
        Rules {
            strategy: if self.hunt {
                Strategy::Hunt
            } else {
                Strategy::Random
            },
            reveal_perimeter: self.reveal_perimeter,
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play(MatchArgs),
    /// Watch a match where your side fires at random.
    Demo(MatchArgs),
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play(args),
        Commands::Demo(args) => demo(args),
    }
}

fn play(args: MatchArgs) -> anyhow::Result<()> {
    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut game = Match::with_rules(args.rng(), args.rules())?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Your move: pick a cell on the enemy grid (e.g. B5). Commands: new, quit.");
    loop {
        println!("\n{}", render_view(&game));
        if let Phase::Finished(outcome) = game.phase() {
            println!("{}", outcome_message(outcome));
            let stats = game.stats();
            println!(
                "Session: {} won, {} lost. Type `new` to play again or `quit`.",
                stats.victories, stats.defeats
            );
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        match line.trim().to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(()),
            "new" => {
                game.new_game()?;
                println!("New game. Your move.");
                continue;
            }
            _ => {}
        }

        let Some((row, col)) = parse_coord(&line) else {
            println!("Invalid coordinate");
            continue;
        };
        match game.fire(row, col)? {
            Some(report) => {
                println!("{}", describe(&report, game.player(Side::Human).name()))
            }
            None => {
                println!("The match is over. Type `new` to play again.");
                continue;
            }
        }
        if let Some(report) = game.opponent_acts()? {
            println!("{}", describe(&report, game.player(Side::Opponent).name()));
        }
    }
}

fn demo(args: MatchArgs) -> anyhow::Result<()> {
    let mut game = Match::with_rules(args.rng(), args.rules())?;
    let mut shooter_rng = match args.seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => args.rng(),
    };
    let mut shooter = TargetSelector::new();
    let mut last_shot = None;

    while !game.is_finished() {
        let report = match game.current_turn() {
            Side::Human => {
                let (row, col) = shooter.pick(&mut shooter_rng)?;
                game.fire(row, col)?
            }
            Side::Opponent => game.opponent_acts()?,
        };
        if let Some(report) = report {
            if report.shooter == Side::Human {
                for &cell in &report.revealed {
                    shooter.discard(cell);
                }
            }
            println!("{}", describe(&report, game.player(report.shooter).name()));
            last_shot = Some(report.target);
        }
    }
    println!("\n{}", render_view(&game));
    let stats = game.stats();
    println!(
        "You fired {} shots ({} hits); the computer fired {} ({} hits).",
        stats.human.shots, stats.human.hits, stats.opponent.shots, stats.opponent.hits,
    );
    if let Some((row, col)) = last_shot {
        println!("Deciding shot: {}", coord_to_string(row, col));
    }
    Ok(())
}
