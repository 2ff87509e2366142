use itertools::Itertools;
use log::debug;

use crate::error::Error;
use crate::table::WideTable;
use crate::tally::Tally;
use crate::{Face, Game, Result};

/// Per-roll occurrence counts of each face of the first die.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceCounts {
    faces: Vec<Face>,
    rows: Vec<Vec<usize>>,
}

/// Descriptive statistics over one play of a [`Game`].
///
/// The analyzer keeps its own copy of the outcomes, so replaying the game
/// afterwards does not change what it reports.
#[derive(Clone, Debug)]
pub struct Analyzer {
    faces: Vec<Face>,
    outcomes: WideTable,
}

impl Analyzer {
    pub fn new(game: &Game) -> Result<Self> {
        let outcomes = game
            .wide()
            .map_err(|_| Error::IllegalState("cannot analyze a game that has not been played"))?
            .clone();
        // Face universe is the first die's face set only.
        let faces = game
            .dice()
            .first()
            .map(|d| d.faces().to_vec())
            .unwrap_or_default();
        debug!(
            "analyzing {} rolls of {} dice",
            outcomes.rolls(),
            outcomes.dice()
        );
        Ok(Self { faces, outcomes })
    }

    #[must_use]
    pub fn outcomes(&self) -> &WideTable {
        &self.outcomes
    }

    /// Number of rolls where every die shows the same face.
    #[must_use]
    pub fn jackpot(&self) -> usize {
        self.outcomes
            .rows()
            .filter(|(_, row)| row.iter().tuple_windows().all(|(a, b)| a == b))
            .count()
    }

    #[must_use]
    pub fn face_counts(&self) -> FaceCounts {
        let rows = self
            .outcomes
            .rows()
            .map(|(_, row)| self.count_row(row))
            .collect();
        FaceCounts {
            faces: self.faces.clone(),
            rows,
        }
    }

    /// Order-independent distinct outcomes.
    ///
    /// Rolls are grouped by their face counts, so faces missing from the
    /// first die do not distinguish one roll from another.
    #[must_use]
    pub fn combination(&self) -> Tally {
        Tally::group_by(self.outcomes.rows().map(|(_, x)| x), |row| {
            self.count_row(row)
        })
    }

    /// Order-dependent distinct outcomes, compared by display form.
    #[must_use]
    pub fn permutation(&self) -> Tally {
        Tally::group_by(self.outcomes.rows().map(|(_, x)| x), |row| {
            row.iter().map(ToString::to_string).collect_vec()
        })
    }

    fn count_row(&self, row: &[Face]) -> Vec<usize> {
        self.faces
            .iter()
            .map(|f| row.iter().filter(|x| *x == f).count())
            .collect()
    }
}

impl FaceCounts {
    /// `(rolls, faces)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.faces.len())
    }

    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[usize]> {
        roll.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn get(&self, roll: usize, face: &Face) -> Option<usize> {
        let i = self.faces.iter().position(|x| x == face)?;
        self.row(roll).map(|x| x[i])
    }

    /// Iterates `(roll number, counts)` in roll order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, x)| (i + 1, x.as_slice()))
    }
}
