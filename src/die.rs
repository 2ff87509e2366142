use itertools::Itertools;
use log::trace;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::Error;
use crate::face::{Face, FaceKind};
use crate::weight::IntoWeight;
use crate::{rng, Result, DEFAULT_WEIGHT};

/// A die with distinct labeled faces and a mutable weight per face.
///
/// Faces are kept in construction order and all share one [`FaceKind`].
#[derive(Clone, Debug, PartialEq)]
pub struct Die {
    kind: FaceKind,
    faces: Vec<Face>,
    weights: Vec<f64>,
}

/// Copy of a die's face to weight table.
#[derive(Clone, Debug, PartialEq)]
pub struct DieState {
    entries: Vec<(Face, f64)>,
}

impl Die {
    pub fn new<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Face>,
    {
        let faces = faces.into_iter().map(Into::into).collect_vec();
        let kind = match faces.first() {
            Some(face) => face.kind(),
            None => return Err(Error::invalid("a die needs at least one face")),
        };
        if let Some(face) = faces.iter().find(|x| x.kind() != kind) {
            return Err(Error::invalid(format!(
                "faces must all be of one kind: found {:?} face {face} among {kind:?} faces",
                face.kind()
            )));
        }
        if faces.iter().any(Face::is_nan) {
            return Err(Error::invalid("NaN is not a valid face"));
        }
        if !faces.iter().all_unique() {
            let dup = faces.iter().duplicates().join(", ");
            return Err(Error::invalid(format!("faces must be distinct, repeated: {dup}")));
        }

        let weights = vec![DEFAULT_WEIGHT; faces.len()];
        Ok(Self {
            kind,
            faces,
            weights,
        })
    }

    /// A die with the integer faces `1..=sides`.
    pub fn numeric(sides: i64) -> Result<Self> {
        if sides < 1 {
            return Err(Error::invalid(format!("a die needs at least one side, got {sides}")));
        }
        Self::new(1..=sides)
    }

    #[must_use]
    pub fn kind(&self) -> FaceKind {
        self.kind
    }

    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    #[must_use]
    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.position(face).map(|i| self.weights[i])
    }

    /// Replaces the weight of `face`.
    ///
    /// # Errors
    /// [`Error::NotFound`] if the face is not on this die, [`Error::InvalidArgument`]
    /// if `weight` is not a finite non-negative number.
    pub fn change_weight<F, W>(&mut self, face: F, weight: W) -> Result<()>
    where
        F: Into<Face>,
        W: IntoWeight,
    {
        let face = face.into();
        let i = self.position(&face).ok_or(Error::NotFound(face))?;
        self.weights[i] = weight.into_weight()?;
        Ok(())
    }

    /// Rolls the die `count` times using the process-wide random source.
    pub fn roll(&self, count: usize) -> Result<Vec<Face>> {
        rng::with_source(|rng| self.roll_with(count, rng))
    }

    pub fn roll_with<G>(&self, count: usize, rng: &mut G) -> Result<Vec<Face>>
    where
        G: Rng + ?Sized,
    {
        if count == 0 {
            return Ok(Vec::new());
        }
        if !self.weights.iter().sum::<f64>().is_finite() {
            return Err(Error::IllegalState("total weight of the die overflows"));
        }
        let dist = WeightedIndex::new(&self.weights)
            .map_err(|_| Error::IllegalState("every face of the die has zero weight"))?;
        let outcomes = (0..count)
            .map(|_| self.faces[dist.sample(rng)].clone())
            .collect_vec();
        trace!("rolled a {:?} die {count} times", self.kind);
        Ok(outcomes)
    }

    #[must_use]
    pub fn current_state(&self) -> DieState {
        DieState {
            entries: self
                .faces
                .iter()
                .cloned()
                .zip(self.weights.iter().copied())
                .collect(),
        }
    }

    fn position(&self, face: &Face) -> Option<usize> {
        self.faces.iter().position(|x| x == face)
    }
}

impl DieState {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.entries
            .iter()
            .find(|(f, _)| f == face)
            .map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Face, f64)> + '_ {
        self.entries.iter().map(|(f, w)| (f, *w))
    }
}
