use num::ToPrimitive;

use crate::error::Error;
use crate::Result;

/// Anything that can be read as a die weight.
///
/// Conversion is explicit: the input either parses to a finite, non-negative
/// real or the call fails with [`Error::InvalidArgument`].
pub trait IntoWeight {
    fn into_weight(self) -> Result<f64>;
}

pub(crate) fn validate(weight: f64) -> Result<f64> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(Error::invalid(format!(
            "weight must be a non-negative real number, got {weight}"
        )))
    }
}

macro_rules! impl_into_weight {
    ($typ:ty) => {
        impl $crate::weight::IntoWeight for $typ {
            fn into_weight(self) -> $crate::Result<f64> {
                let w = ToPrimitive::to_f64(&self).ok_or_else(|| {
                    $crate::error::Error::invalid(format!("weight {} is not representable", self))
                })?;
                validate(w)
            }
        }
    };
}

impl_into_weight!(u8);
impl_into_weight!(u16);
impl_into_weight!(u32);
impl_into_weight!(u64);
impl_into_weight!(usize);
impl_into_weight!(i8);
impl_into_weight!(i16);
impl_into_weight!(i32);
impl_into_weight!(i64);
impl_into_weight!(isize);
impl_into_weight!(f32);
impl_into_weight!(f64);

impl IntoWeight for &str {
    fn into_weight(self) -> Result<f64> {
        let w = self
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::invalid(format!("weight {self:?} is not numeric")))?;
        validate(w)
    }
}

impl IntoWeight for String {
    fn into_weight(self) -> Result<f64> {
        self.as_str().into_weight()
    }
}

impl IntoWeight for &String {
    fn into_weight(self) -> Result<f64> {
        self.as_str().into_weight()
    }
}
