//! Numeric-kind classification for element and scalar types.
//!
//! Only types implementing [`Numeric`] may be stored in matrices and vectors or act as
//! scalars in multiplication and division. The associated [`NumericKind`] decides, among
//! other things, whether scalar division multiplies by a reciprocal or divides directly.

use num_traits::NumAssign;
use std::fmt::Debug;

/// Coarse classification of a numeric type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Integral,
    FloatingPoint,
}

impl NumericKind {
    pub const fn is_floating_point(self) -> bool {
        matches!(self, NumericKind::FloatingPoint)
    }

    /// Kind of the result of combining two operands: floating point wins.
    pub const fn promote(self, other: NumericKind) -> NumericKind {
        if self.is_floating_point() || other.is_floating_point() {
            NumericKind::FloatingPoint
        } else {
            NumericKind::Integral
        }
    }
}

/// A built-in numeric element type.
pub trait Numeric: Copy + PartialEq + Debug + NumAssign + 'static {
    const KIND: NumericKind;

    /// `true` for a floating-point NaN.
    fn is_nan(self) -> bool {
        false
    }

    /// `true` for the additive identity.
    fn is_default(self) -> bool {
        self.is_zero()
    }
}

macro_rules! integral {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            const KIND: NumericKind = NumericKind::Integral;
        }
    )*};
}

macro_rules! floating {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            const KIND: NumericKind = NumericKind::FloatingPoint;
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
        }
    )*};
}

integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
floating!(f32, f64);
