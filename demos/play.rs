use std::env;
use std::str::FromStr;
use std::time::Instant;

use log::warn;
use montecarlo::{reseed, Analyzer, Die, Game};

const USAGE: &str = "usage: play [ROLLS] [DICE] [SEED]";

fn arg<T: FromStr>(value: Option<String>, name: &str) -> Option<T> {
    let value = value?;
    match value.parse() {
        Ok(x) => Some(x),
        Err(_) => {
            warn!("ignoring {name} {value:?}: not a number ({USAGE})");
            None
        }
    }
}

fn main() -> montecarlo::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = env::args().skip(1);
    let rolls = arg(args.next(), "rolls").unwrap_or(1000);
    let dice = arg(args.next(), "dice").unwrap_or(3);
    if let Some(seed) = arg(args.next(), "seed") {
        reseed(seed);
    }

    let fair = Die::numeric(6)?;
    let mut loaded = fair.clone();
    loaded.change_weight(6, 5)?;
    println!("loaded die:\n{}", loaded.current_state());

    let mut all = vec![fair; dice.max(1) - 1];
    all.push(loaded);
    let mut game = Game::new(all)?;

    let start = Instant::now();
    game.play(rolls)?;
    let analyzer = Analyzer::new(&game)?;
    let combos = analyzer.combination();
    let perms = analyzer.permutation();
    let elapsed = start.elapsed().as_millis();

    if rolls <= 20 {
        println!("{}", game.results("narrow")?);
    }
    println!(
        "jackpots = {} combinations = {} permutations = {} elapsed = {elapsed}ms",
        analyzer.jackpot(),
        combos.len(),
        perms.len()
    );
    println!("{combos}");
    Ok(())
}
