use bon::Builder;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{Analyzer, Die, Face, Game, Result, DEFAULT_DICE};

/// Plays `dice` identical dice `rolls` times and analyzes the outcome.
#[derive(Clone, Debug, Builder)]
pub struct Simulation {
    faces: Vec<Face>,
    /// Weights applied to every die; unlisted faces keep the default.
    #[builder(default)]
    weights: Vec<(Face, f64)>,
    #[builder(default = DEFAULT_DICE)]
    dice: usize,
    rolls: usize,
    /// Seeds a private random source instead of the process-wide one.
    seed: Option<u64>,
}

impl Simulation {
    pub fn run(&self) -> Result<(Game, Analyzer)> {
        let mut die = Die::new(&self.faces)?;
        for (face, weight) in &self.weights {
            die.change_weight(face, *weight)?;
        }
        let mut game = Game::new(vec![die; self.dice])?;
        match self.seed {
            Some(seed) => game.play_with(self.rolls, &mut StdRng::seed_from_u64(seed))?,
            None => game.play(self.rolls)?,
        }
        debug!("simulation of {} x {} finished", self.dice, self.rolls);
        let analyzer = Analyzer::new(&game)?;
        Ok((game, analyzer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn d6() -> Vec<Face> {
        (1..=6i64).map(Face::from).collect()
    }

    #[test]
    fn seeded_runs_repeat() {
        let sim = Simulation::builder()
            .faces(d6())
            .dice(3)
            .rolls(50)
            .seed(12)
            .build();
        let (a, _) = sim.run().unwrap();
        let (b, analyzer) = sim.run().unwrap();
        assert_eq!(a.wide().unwrap(), b.wide().unwrap());
        assert_eq!(analyzer.face_counts().shape(), (50, 6));
    }

    #[test]
    fn defaults_to_one_die() {
        let sim = Simulation::builder()
            .faces(vec![Face::from("H"), Face::from("T")])
            .rolls(10)
            .build();
        let (game, analyzer) = sim.run().unwrap();
        assert_eq!(game.dice().len(), 1);
        assert_eq!(analyzer.jackpot(), 10);
    }

    #[test]
    fn errors_propagate() {
        let sim = Simulation::builder()
            .faces(d6())
            .dice(0)
            .rolls(10)
            .build();
        assert!(matches!(sim.run(), Err(Error::InvalidArgument(_))));

        let sim = Simulation::builder()
            .faces(d6())
            .rolls(0)
            .build();
        assert!(matches!(sim.run(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn weights_apply_to_every_die() {
        let sim = Simulation::builder()
            .faces(d6())
            .weights(vec![(Face::from(1), 0.0), (Face::from(2), 0.0), (Face::from(3), 0.0)])
            .dice(2)
            .rolls(200)
            .seed(3)
            .build();
        let (game, analyzer) = sim.run().unwrap();
        assert!(game
            .dice()
            .iter()
            .all(|d| d.weight(&Face::from(2)) == Some(0.0)));
        let counts = analyzer.face_counts();
        assert!(counts
            .rows()
            .all(|(_, x)| x[0] == 0 && x[1] == 0 && x[2] == 0));
    }

    #[test]
    fn bad_weights_propagate() {
        let sim = Simulation::builder()
            .faces(d6())
            .weights(vec![(Face::from(9), 2.0)])
            .rolls(10)
            .build();
        assert_eq!(sim.run().unwrap_err(), Error::NotFound(Face::from(9)));

        let sim = Simulation::builder()
            .faces(d6())
            .weights(vec![(Face::from(1), -1.0)])
            .rolls(10)
            .build();
        assert!(matches!(sim.run(), Err(Error::InvalidArgument(_))));
    }
}
