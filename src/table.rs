use itertools::Itertools;

use crate::Face;

/// Outcomes of one play, one row per roll and one column per die.
///
/// Roll numbers and die numbers are 1-based.
#[derive(Clone, Debug, PartialEq)]
pub struct WideTable {
    dice: usize,
    cells: Vec<Face>,
}

/// One outcome keyed by `(roll, die)`.
#[derive(Clone, Debug, PartialEq)]
pub struct NarrowRow {
    pub roll: usize,
    pub die: usize,
    pub outcome: Face,
}

/// Outcomes of one play, one row per `(roll, die)` pair.
///
/// Rows are stacked die by die: every roll of die 1, then every roll of die 2.
#[derive(Clone, Debug, PartialEq)]
pub struct NarrowTable {
    rolls: usize,
    dice: usize,
    rows: Vec<NarrowRow>,
}

impl WideTable {
    /// Builds the table from one outcome sequence per die.
    pub(crate) fn from_columns(columns: Vec<Vec<Face>>) -> Self {
        let dice = columns.len();
        let rolls = columns.first().map_or(0, Vec::len);
        debug_assert!(columns.iter().all(|x| x.len() == rolls));

        let mut iters = columns.into_iter().map(Vec::into_iter).collect_vec();
        let mut cells = Vec::with_capacity(rolls * dice);
        for _ in 0..rolls {
            for it in &mut iters {
                cells.extend(it.next());
            }
        }
        Self { dice, cells }
    }

    /// `(rolls, dice)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rolls(), self.dice)
    }

    #[must_use]
    pub fn rolls(&self) -> usize {
        self.cells.len().checked_div(self.dice).unwrap_or(0)
    }

    #[must_use]
    pub fn dice(&self) -> usize {
        self.dice
    }

    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[Face]> {
        if roll == 0 || roll > self.rolls() {
            return None;
        }
        let start = (roll - 1) * self.dice;
        Some(&self.cells[start..start + self.dice])
    }

    #[must_use]
    pub fn get(&self, roll: usize, die: usize) -> Option<&Face> {
        if die == 0 {
            return None;
        }
        self.row(roll).and_then(|x| x.get(die - 1))
    }

    /// Iterates `(roll number, outcomes)` in roll order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[Face])> + '_ {
        self.cells
            .chunks(self.dice.max(1))
            .enumerate()
            .map(|(i, x)| (i + 1, x))
    }

    #[must_use]
    pub fn column(&self, die: usize) -> Option<Vec<&Face>> {
        if die == 0 || die > self.dice {
            return None;
        }
        Some(self.rows().map(|(_, x)| &x[die - 1]).collect())
    }

    /// Unpivots on die number.
    #[must_use]
    pub fn to_narrow(&self) -> NarrowTable {
        let rolls = self.rolls();
        let rows = (1..=self.dice)
            .cartesian_product(1..=rolls)
            .map(|(die, roll)| NarrowRow {
                roll,
                die,
                outcome: self.cells[(roll - 1) * self.dice + die - 1].clone(),
            })
            .collect();
        NarrowTable {
            rolls,
            dice: self.dice,
            rows,
        }
    }
}

impl NarrowTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[NarrowRow] {
        &self.rows
    }

    #[must_use]
    pub fn get(&self, roll: usize, die: usize) -> Option<&Face> {
        if roll == 0 || roll > self.rolls || die == 0 || die > self.dice {
            return None;
        }
        self.rows
            .get((die - 1) * self.rolls + roll - 1)
            .map(|x| &x.outcome)
    }

    /// Pivots back to one column per die.
    #[must_use]
    pub fn pivot(&self) -> WideTable {
        let columns = self
            .rows
            .chunks(self.rolls.max(1))
            .take(self.dice)
            .map(|x| x.iter().map(|r| r.outcome.clone()).collect())
            .collect();
        WideTable::from_columns(columns)
    }
}
