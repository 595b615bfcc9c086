use broadside::{AiPlayer, Game, NullSink, Side, Variant};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [variant]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let variant: Variant = match args.get(2) {
        Some(name) => name.parse()?,
        None => Variant::Classic,
    };

    let mut a = AiPlayer::new();
    let mut b = AiPlayer::new();
    let mut game = Game::with_seed(variant, seed);
    game.place_fleet(Side::A, &mut a, &mut NullSink)?;
    game.place_fleet(Side::B, &mut b, &mut NullSink)?;
    let winner = game.play(&mut a, &mut b, &mut NullSink)?;

    let result = json!({
        "seed": seed,
        "variant": variant,
        "winner": winner,
        "turns": game.turns(),
        "A": {"shots": game.shots_fired(Side::A), "afloat": game.vessels_afloat(Side::A)},
        "B": {"shots": game.shots_fired(Side::B), "afloat": game.vessels_afloat(Side::B)},
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
