use std::fmt::{self, Display};
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, warn};
use rand::Rng;

use crate::error::Error;
use crate::table::{NarrowTable, WideTable};
use crate::{rng, Die, Result};

/// Shape requested from [`Game::results`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    #[default]
    Wide,
    Narrow,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Results {
    Wide(WideTable),
    Narrow(NarrowTable),
}

/// Rolls a fixed list of dice together and keeps the latest outcomes.
#[derive(Clone, Debug)]
pub struct Game {
    dice: Vec<Die>,
    outcomes: Option<WideTable>,
}

impl Game {
    /// Takes the dice in order; they may have different face sets.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `dice` is empty.
    pub fn new(dice: Vec<Die>) -> Result<Self> {
        if dice.is_empty() {
            return Err(Error::invalid("a game needs at least one die"));
        }
        if !dice.iter().map(Die::faces).all_equal() {
            warn!("dice do not share a face set; face counts only use the faces of die 1");
        }
        Ok(Self {
            dice,
            outcomes: None,
        })
    }

    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    #[must_use]
    pub fn is_played(&self) -> bool {
        self.outcomes.is_some()
    }

    /// Rolls every die `rolls` times, replacing the previous outcomes.
    pub fn play(&mut self, rolls: usize) -> Result<()> {
        rng::with_source(|rng| self.play_with(rolls, rng))
    }

    pub fn play_with<G>(&mut self, rolls: usize, rng: &mut G) -> Result<()>
    where
        G: Rng + ?Sized,
    {
        if rolls == 0 {
            return Err(Error::invalid("number of rolls must be positive"));
        }
        let columns = self
            .dice
            .iter()
            .map(|d| d.roll_with(rolls, rng))
            .collect::<Result<Vec<_>>>()?;
        self.outcomes = Some(WideTable::from_columns(columns));
        debug!("played {} dice {rolls} times", self.dice.len());
        Ok(())
    }

    /// Outcomes of the latest play in the layout named by `layout`.
    pub fn results(&self, layout: &str) -> Result<Results> {
        match layout.parse::<Layout>()? {
            Layout::Wide => self.wide().cloned().map(Results::Wide),
            Layout::Narrow => self.narrow().map(Results::Narrow),
        }
    }

    pub fn wide(&self) -> Result<&WideTable> {
        self.outcomes
            .as_ref()
            .ok_or(Error::IllegalState("the game has not been played"))
    }

    pub fn narrow(&self) -> Result<NarrowTable> {
        self.wide().map(WideTable::to_narrow)
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wide" => Ok(Layout::Wide),
            "narrow" => Ok(Layout::Narrow),
            _ => Err(Error::invalid(format!(
                "layout must be 'wide' or 'narrow', got {s:?}"
            ))),
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Wide => f.write_str("wide"),
            Layout::Narrow => f.write_str("narrow"),
        }
    }
}

impl Results {
    #[must_use]
    pub fn layout(&self) -> Layout {
        match self {
            Results::Wide(_) => Layout::Wide,
            Results::Narrow(_) => Layout::Narrow,
        }
    }

    /// The outcomes in wide layout, pivoting if needed.
    #[must_use]
    pub fn into_wide(self) -> WideTable {
        match self {
            Results::Wide(x) => x,
            Results::Narrow(x) => x.pivot(),
        }
    }

    #[must_use]
    pub fn into_narrow(self) -> NarrowTable {
        match self {
            Results::Wide(x) => x.to_narrow(),
            Results::Narrow(x) => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::Face;

    fn three_d6() -> Game {
        let d6 = Die::numeric(6).unwrap();
        Game::new(vec![d6.clone(), d6.clone(), d6]).unwrap()
    }

    #[test]
    fn play_builds_rolls_by_dice() {
        let mut game = three_d6();
        game.play_with(2, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(game.wide().unwrap().shape(), (2, 3));
        assert_eq!(game.narrow().unwrap().len(), 6);
    }

    #[test]
    fn replay_discards_previous_results() {
        let mut game = three_d6();
        game.play(10).unwrap();
        game.play(4).unwrap();
        assert_eq!(game.wide().unwrap().rolls(), 4);
    }

    #[test]
    fn results_need_a_play() {
        let game = three_d6();
        assert!(matches!(game.results("narrow"), Err(Error::IllegalState(_))));
        assert!(matches!(game.results("wide"), Err(Error::IllegalState(_))));
    }

    #[test]
    fn results_layouts() {
        let mut game = three_d6();
        game.play(3).unwrap();
        assert_eq!(game.results("wide").unwrap().layout(), Layout::Wide);
        let narrow = game.results("narrow").unwrap();
        assert_eq!(narrow.layout(), Layout::Narrow);
        assert_eq!(&narrow.into_wide(), game.wide().unwrap());
        assert!(matches!(game.results("tall"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn bad_plays_leave_state_alone() {
        let mut game = three_d6();
        assert!(matches!(game.play(0), Err(Error::InvalidArgument(_))));
        assert!(!game.is_played());

        let mut d2 = Die::numeric(2).unwrap();
        d2.change_weight(1, 0).unwrap();
        d2.change_weight(2, 0).unwrap();
        let mut game = Game::new(vec![Die::numeric(2).unwrap(), d2]).unwrap();
        game.play(1).ok();
        assert!(!game.is_played());
    }

    #[test]
    fn empty_game_is_rejected() {
        let err = Game::new(vec![]).unwrap_err();
        assert_eq!(err, Error::InvalidArgument("a game needs at least one die".into()));
    }

    #[test]
    fn mixed_dice_are_allowed() {
        let coin = Die::new(["H", "T"]).unwrap();
        let mut game = Game::new(vec![coin, Die::numeric(3).unwrap()]).unwrap();
        game.play(5).unwrap();
        let wide = game.wide().unwrap();
        assert!(wide
            .column(1)
            .unwrap()
            .iter()
            .all(|x| **x == Face::from("H") || **x == Face::from("T")));
    }
}
