mod analyzer;
mod die;
mod error;
mod face;
mod game;
mod print;
mod rng;
mod simulation;
mod table;
mod tally;
mod weight;

use ahash::AHashMap;
pub use analyzer::{Analyzer, FaceCounts};
pub use die::{Die, DieState};
pub use error::Error;
pub use face::{Face, FaceKind};
pub use game::{Game, Layout, Results};
pub use rng::reseed;
pub use simulation::Simulation;
pub use table::{NarrowRow, NarrowTable, WideTable};
pub use tally::Tally;
pub use weight::IntoWeight;

type Map<K, V> = AHashMap<K, V>;
pub type Result<T> = ::core::result::Result<T, Error>;

const DEFAULT_WEIGHT: f64 = 1.0;
const DEFAULT_DICE: usize = 1;
