use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// A single labeled outcome of a die.
#[derive(Clone, Debug)]
pub enum Face {
    Int(i64),
    Real(f64),
    Text(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceKind {
    Integer,
    Real,
    Text,
}

impl Face {
    #[must_use]
    pub fn kind(&self) -> FaceKind {
        match self {
            Face::Int(_) => FaceKind::Integer,
            Face::Real(_) => FaceKind::Real,
            Face::Text(_) => FaceKind::Text,
        }
    }

    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Face::Real(x) if x.is_nan())
    }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Face {}

impl PartialOrd for Face {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Face {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Face::Int(x), Face::Int(y)) => x.cmp(y),
            (Face::Real(x), Face::Real(y)) => x.total_cmp(y),
            (Face::Text(x), Face::Text(y)) => x.cmp(y),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl Hash for Face {
    fn hash<H: Hasher>(&self, state: &mut H) {
        rank(self).hash(state);
        match self {
            Face::Int(x) => x.hash(state),
            Face::Real(x) => x.to_bits().hash(state),
            Face::Text(x) => x.hash(state),
        }
    }
}

fn rank(face: &Face) -> u8 {
    match face {
        Face::Int(_) => 0,
        Face::Real(_) => 1,
        Face::Text(_) => 2,
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Int(x) => write!(f, "{x}"),
            // `{:?}` keeps the fractional part, so 1.0 never renders like the integer 1
            Face::Real(x) => write!(f, "{x:?}"),
            Face::Text(x) => f.write_str(x),
        }
    }
}

macro_rules! impl_face_from_int {
    ($typ:ty) => {
        impl From<$typ> for $crate::face::Face {
            fn from(value: $typ) -> Self {
                $crate::face::Face::Int(i64::from(value))
            }
        }
    };
}

impl_face_from_int!(u8);
impl_face_from_int!(u16);
impl_face_from_int!(u32);
impl_face_from_int!(i8);
impl_face_from_int!(i16);
impl_face_from_int!(i32);
impl_face_from_int!(i64);

impl From<f32> for Face {
    fn from(value: f32) -> Self {
        Face::Real(f64::from(value))
    }
}

impl From<f64> for Face {
    fn from(value: f64) -> Self {
        Face::Real(value)
    }
}

impl From<&str> for Face {
    fn from(value: &str) -> Self {
        Face::Text(value.to_owned())
    }
}

impl From<String> for Face {
    fn from(value: String) -> Self {
        Face::Text(value)
    }
}

impl From<char> for Face {
    fn from(value: char) -> Self {
        Face::Text(value.to_string())
    }
}

impl From<&Face> for Face {
    fn from(value: &Face) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_kinds_apart() {
        assert_eq!(Face::from(1).to_string(), "1");
        assert_eq!(Face::from(1.0).to_string(), "1.0");
        assert_eq!(Face::from("H").to_string(), "H");
    }

    #[test]
    fn equality_is_kind_aware() {
        assert_eq!(Face::from(3), Face::Int(3));
        assert_ne!(Face::from(3), Face::from(3.0));
        assert_ne!(Face::from("3"), Face::from(3));
    }

    #[test]
    fn ordering_within_kind() {
        assert!(Face::from(1) < Face::from(2));
        assert!(Face::from(-0.5) < Face::from(0.25));
        assert!(Face::from("a") < Face::from("b"));
    }
}
