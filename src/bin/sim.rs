use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, Match, Rules, Side, Strategy, TargetSelector};
use serde_json::json;

/// Play headless matches against a random shooter and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct SimArgs {
    #[arg(long, default_value_t = 0, help = "Seed for the match and the shooter")]
    seed: u64,
    /// Number of matches to play.
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Let the computer follow up on its hits instead of firing at random.
    #[arg(long)]
    hunt: bool,
    /// Mark the water around every sunk ship as missed.
    #[arg(long)]
    reveal_perimeter: bool,
}

impl SimArgs {
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
}

fn main() -> anyhow::Result<()> {
    init_logging(log::LevelFilter::Warn);
    let args = SimArgs::parse();
    let rules = args.rules();

    let mut game = Match::with_rules(SmallRng::seed_from_u64(args.seed), rules)?;
    let mut shooter_rng = SmallRng::seed_from_u64(args.seed.wrapping_add(1));
    let mut human_shots = 0usize;
    let mut opponent_shots = 0usize;

    for round in 0..args.games {
        if round > 0 {
            game.new_game()?;
        }
        let mut shooter = TargetSelector::new();
        while !game.is_finished() {
            match game.current_turn() {
                Side::Human => {
                    let (row, col) = shooter.pick(&mut shooter_rng)?;
                    if let Some(report) = game.fire(row, col)? {
                        for &cell in &report.revealed {
                            shooter.discard(cell);
                        }
                    }
                }
                Side::Opponent => {
                    game.opponent_acts()?;
                }
            }
        }
        let stats = game.stats();
        human_shots += stats.human.shots;
        opponent_shots += stats.opponent.shots;
    }

    let stats = game.stats();
    let games = args.games.max(1) as f64;
    let result = json!({
        "games": args.games,
        "strategy": rules.strategy,
        "reveal_perimeter": rules.reveal_perimeter,
        "victories": stats.victories,
        "defeats": stats.defeats,
        "avg_human_shots": human_shots as f64 / games,
        "avg_opponent_shots": opponent_shots as f64 / games,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
