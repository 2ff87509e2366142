use std::fmt::{self, Display};

use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{Cell, ContentArrangement, Table};

use crate::analyzer::FaceCounts;
use crate::die::DieState;
use crate::game::Results;
use crate::table::{NarrowTable, WideTable};
use crate::tally::Tally;

fn table<I, H>(header: I) -> Table
where
    I: IntoIterator<Item = H>,
    H: Display,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_NO_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.into_iter().map(Cell::new));
    table
}

impl Display for DieState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = table(["Face", "Weight"]);
        for (face, weight) in self.iter() {
            t.add_row(vec![Cell::new(face), Cell::new(weight)]);
        }
        write!(f, "{t}")
    }
}

impl Display for WideTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = std::iter::once("Roll Number".to_owned())
            .chain((1..=self.dice()).map(|x| x.to_string()));
        let mut t = table(header);
        for (roll, row) in self.rows() {
            t.add_row(std::iter::once(Cell::new(roll)).chain(row.iter().map(Cell::new)));
        }
        write!(f, "{t}")
    }
}

impl Display for NarrowTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = table(["Roll Number", "Die Number", "Outcome"]);
        for row in self.rows() {
            t.add_row(vec![
                Cell::new(row.roll),
                Cell::new(row.die),
                Cell::new(&row.outcome),
            ]);
        }
        write!(f, "{t}")
    }
}

impl Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Results::Wide(x) => x.fmt(f),
            Results::Narrow(x) => x.fmt(f),
        }
    }
}

impl Display for FaceCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = std::iter::once("Roll Number".to_owned())
            .chain(self.faces().iter().map(ToString::to_string));
        let mut t = table(header);
        for (roll, counts) in self.rows() {
            t.add_row(std::iter::once(Cell::new(roll)).chain(counts.iter().map(Cell::new)));
        }
        write!(f, "{t}")
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dice = self.iter().next().map_or(0, |(k, _)| k.len());
        let header = (1..=dice)
            .map(|x| x.to_string())
            .chain(std::iter::once("Count".to_owned()));
        let mut t = table(header);
        for (outcome, count) in self.iter() {
            t.add_row(outcome.iter().map(Cell::new).chain(std::iter::once(Cell::new(count))));
        }
        write!(f, "{t}")
    }
}
