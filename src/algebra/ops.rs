//! Evaluation of binary expressions into their deduced result types.
//!
//! The functions here check operand sizes and return `Result`. The `std::ops` operators
//! wired at the bottom call them and panic on error.

use std::ops::{Add, Deref, Div, Mul, Sub};

use num_traits::{One, Zero};

use super::traits::{AddTrait, DivTrait, MultTrait, SubTrait};
use crate::core::numeric::{Numeric, NumericKind};
use crate::core::traits::{FromEntries, Vector};
use crate::error::{check_size, RowError};
use crate::matrix::{ColumnMajor, CompressedMatrix, RowMajor};
use crate::vector::{CompressedVector, DynamicVector, StaticVector, Transposed};
use crate::view::{AlignedRow, TransposedRow};

pub type AddOutput<A, B> = <A as AddTrait<B>>::Output;
pub type SubOutput<A, B> = <A as SubTrait<B>>::Output;
pub type MultOutput<A, B> = <A as MultTrait<B>>::Output;
pub type DivOutput<A, B> = <A as DivTrait<B>>::Output;

fn entries<V: Vector>(v: &V) -> Vec<(usize, V::Element)> {
    let mut out = Vec::with_capacity(v.non_zeros());
    v.for_each_entry(|i, value| out.push((i, value)));
    out
}

/// Merges two index-ascending entry lists. Entries present on both sides are combined
/// with `both`. For a `union`, left-only entries are kept as they are and right-only
/// entries pass through `right`; otherwise one-sided entries are dropped.
fn merge<T: Numeric>(
    lhs: Vec<(usize, T)>,
    rhs: Vec<(usize, T)>,
    both: impl Fn(T, T) -> T,
    right: impl Fn(T) -> T,
    union: bool,
) -> Vec<(usize, T)> {
    let mut out = Vec::with_capacity(lhs.len().max(rhs.len()));
    let (mut l, mut r) = (lhs.into_iter().peekable(), rhs.into_iter().peekable());
    loop {
        let next = match (l.peek().copied(), r.peek().copied()) {
            (Some((i, a)), Some((j, b))) if i == j => {
                l.next();
                r.next();
                Some((i, both(a, b)))
            }
            (Some(entry), Some((j, _))) if entry.0 < j => l.next().filter(|_| union).map(|_| entry),
            (_, Some((j, b))) => r.next().filter(|_| union).map(|_| (j, right(b))),
            (Some(entry), None) => l.next().filter(|_| union).map(|_| entry),
            (None, None) => break,
        };
        out.extend(next);
    }
    out
}

/// `lhs + rhs`
pub fn add<A, B>(lhs: &A, rhs: &B) -> Result<AddOutput<A, B>, RowError>
where
    A: Vector + AddTrait<B>,
    B: Vector<Element = A::Element>,
    AddOutput<A, B>: FromEntries<Element = A::Element>,
{
    check_size(lhs.size(), rhs.size())?;
    let sum = merge(entries(lhs), entries(rhs), |a, b| a + b, |b| b, true);
    FromEntries::from_entries(lhs.size(), sum)
}

/// `lhs - rhs`
pub fn sub<A, B>(lhs: &A, rhs: &B) -> Result<SubOutput<A, B>, RowError>
where
    A: Vector + SubTrait<B>,
    B: Vector<Element = A::Element>,
    SubOutput<A, B>: FromEntries<Element = A::Element>,
{
    check_size(lhs.size(), rhs.size())?;
    let zero = <A::Element as Zero>::zero();
    let difference = merge(entries(lhs), entries(rhs), |a, b| a - b, |b| zero - b, true);
    FromEntries::from_entries(lhs.size(), difference)
}

/// Elementwise `lhs * rhs`.
pub fn mul<A, B>(lhs: &A, rhs: &B) -> Result<MultOutput<A, B>, RowError>
where
    A: Vector + MultTrait<B>,
    B: Vector<Element = A::Element>,
    MultOutput<A, B>: FromEntries<Element = A::Element>,
{
    check_size(lhs.size(), rhs.size())?;
    let product = merge(entries(lhs), entries(rhs), |a, b| a * b, |b| b, false);
    FromEntries::from_entries(lhs.size(), product)
}

/// Inner product of a row vector and a column vector.
pub fn dot<A, B>(lhs: &A, rhs: &Transposed<B>) -> Result<A::Element, RowError>
where
    A: Vector + MultTrait<Transposed<B>, Output = A::Element>,
    B: Vector<Element = A::Element>,
{
    check_size(lhs.size(), rhs.size())?;
    let products = merge(entries(lhs), entries(rhs.inner()), |a, b| a * b, |b| b, false);
    Ok(products.into_iter().fold(<A::Element as Zero>::zero(), |acc, (_, v)| acc + v))
}

/// `lhs * scalar`
pub fn scale<A>(lhs: &A, scalar: A::Element) -> Result<MultOutput<A, A::Element>, RowError>
where
    A: Vector + MultTrait<<A as Vector>::Element>,
    MultOutput<A, A::Element>: FromEntries<Element = A::Element>,
{
    let mut scaled = entries(lhs);
    for (_, value) in &mut scaled {
        *value *= scalar;
    }
    FromEntries::from_entries(lhs.size(), scaled)
}

/// `scalar * rhs`
pub fn scale_left<B>(scalar: B::Element, rhs: &B) -> Result<MultOutput<B::Element, B>, RowError>
where
    B: Vector,
    B::Element: MultTrait<B>,
    MultOutput<B::Element, B>: FromEntries<Element = B::Element>,
{
    let mut scaled = entries(rhs);
    for (_, value) in &mut scaled {
        *value = scalar * *value;
    }
    FromEntries::from_entries(rhs.size(), scaled)
}

/// `lhs / scalar`. Floating-point elements are multiplied by the reciprocal.
pub fn div<A>(lhs: &A, scalar: A::Element) -> Result<DivOutput<A, A::Element>, RowError>
where
    A: Vector + DivTrait<<A as Vector>::Element>,
    DivOutput<A, A::Element>: FromEntries<Element = A::Element>,
{
    if scalar.is_zero() {
        return Err(RowError::DivisionByZero);
    }
    let mut quotient = entries(lhs);
    match <A::Element as Numeric>::KIND {
        NumericKind::FloatingPoint => {
            let reciprocal = <A::Element as One>::one() / scalar;
            quotient.iter_mut().for_each(|(_, value)| *value *= reciprocal);
        }
        NumericKind::Integral => {
            quotient.iter_mut().for_each(|(_, value)| *value /= scalar);
        }
    }
    FromEntries::from_entries(lhs.size(), quotient)
}

/// Unwraps the result of an operator that cannot report errors.
pub(crate) fn expect_ok<R>(result: Result<R, RowError>) -> R {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

macro_rules! vector_ops {
    ([$($gen:tt)*] $Lhs:ty) => {
        impl<'a, 'b, $($gen)* Rhs> Add<&'b Rhs> for &'a $Lhs
        where
            $Lhs: Vector + AddTrait<Rhs>,
            Rhs: Vector<Element = <$Lhs as Vector>::Element>,
            AddOutput<$Lhs, Rhs>: FromEntries<Element = <$Lhs as Vector>::Element>,
        {
            type Output = AddOutput<$Lhs, Rhs>;

            fn add(self, rhs: &'b Rhs) -> Self::Output {
                expect_ok(add(self, rhs))
            }
        }

        impl<'a, 'b, $($gen)* Rhs> Sub<&'b Rhs> for &'a $Lhs
        where
            $Lhs: Vector + SubTrait<Rhs>,
            Rhs: Vector<Element = <$Lhs as Vector>::Element>,
            SubOutput<$Lhs, Rhs>: FromEntries<Element = <$Lhs as Vector>::Element>,
        {
            type Output = SubOutput<$Lhs, Rhs>;

            fn sub(self, rhs: &'b Rhs) -> Self::Output {
                expect_ok(sub(self, rhs))
            }
        }

        impl<'a, 'b, $($gen)* Rhs> Mul<&'b Rhs> for &'a $Lhs
        where
            $Lhs: Vector + MultTrait<Rhs>,
            Rhs: Vector<Element = <$Lhs as Vector>::Element>,
            MultOutput<$Lhs, Rhs>: FromEntries<Element = <$Lhs as Vector>::Element>,
        {
            type Output = MultOutput<$Lhs, Rhs>;

            fn mul(self, rhs: &'b Rhs) -> Self::Output {
                expect_ok(mul(self, rhs))
            }
        }
    };
}

vector_ops!([T: Numeric, const N: usize,] StaticVector<T, N>);
vector_ops!([T: Numeric,] DynamicVector<T>);
vector_ops!([T: Numeric,] CompressedVector<T>);
vector_ops!([M,] AlignedRow<M>);
vector_ops!([M,] TransposedRow<M>);

macro_rules! scalar_ops {
    (@impl [$($gen:tt)*] $Lhs:ty, $s:ty $(, $($bound:tt)*)?) => {
        impl<'a, $($gen)*> Mul<$s> for &'a $Lhs
        where
            $($($bound)*)?
        {
            type Output = MultOutput<$Lhs, $s>;

            fn mul(self, scalar: $s) -> Self::Output {
                expect_ok(scale(self, scalar))
            }
        }

        impl<'a, $($gen)*> Mul<&'a $Lhs> for $s
        where
            $($($bound)*)?
        {
            type Output = MultOutput<$s, $Lhs>;

            fn mul(self, rhs: &'a $Lhs) -> Self::Output {
                expect_ok(scale_left(self, rhs))
            }
        }

        impl<'a, $($gen)*> Div<$s> for &'a $Lhs
        where
            $($($bound)*)?
        {
            type Output = DivOutput<$Lhs, $s>;

            /// Panics when `scalar` is zero.
            fn div(self, scalar: $s) -> Self::Output {
                expect_ok(div(self, scalar))
            }
        }
    };
    ($($s:ty),*) => {$(
        scalar_ops!(@impl [const N: usize] StaticVector<$s, N>, $s);
        scalar_ops!(@impl [] DynamicVector<$s>, $s);
        scalar_ops!(@impl [] CompressedVector<$s>, $s);
        scalar_ops!(@impl [M] AlignedRow<M>, $s, M: Deref<Target = CompressedMatrix<$s, RowMajor>>);
        scalar_ops!(@impl [M] TransposedRow<M>, $s, M: Deref<Target = CompressedMatrix<$s, ColumnMajor>>);
    )*};
}

scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_and_intersection() {
        let a = CompressedVector::from_pairs(5, &[(0, 1.0), (3, 2.0)]).unwrap();
        let b = CompressedVector::from_pairs(5, &[(3, 4.0), (4, 5.0)]).unwrap();
        let s = add(&a, &b).unwrap();
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![(0, 1.0), (3, 6.0), (4, 5.0)]);
        let d = sub(&a, &b).unwrap();
        assert_eq!(d.iter().collect::<Vec<_>>(), vec![(0, 1.0), (3, -2.0), (4, -5.0)]);
        let p = mul(&a, &b).unwrap();
        assert_eq!(p.iter().collect::<Vec<_>>(), vec![(3, 8.0)]);
    }

    #[test]
    fn unsigned_difference_subtracts_directly() {
        let a = CompressedVector::from_pairs(4, &[(0, 9u8), (2, 3)]).unwrap();
        let b = CompressedVector::from_pairs(4, &[(0, 4u8), (2, 3)]).unwrap();
        let d = sub(&a, &b).unwrap();
        assert_eq!(d.iter().collect::<Vec<_>>(), vec![(0, 5)]);
    }

    #[test]
    fn mixed_storage() {
        let a = StaticVector::new([1, 2, 3]);
        let b = CompressedVector::from_pairs(3, &[(1, 10)]).unwrap();
        let sum: StaticVector<i32, 3> = &a + &b;
        assert_eq!(sum, StaticVector::new([1, 12, 3]));
        let product: CompressedVector<i32> = &a * &b;
        assert_eq!(product.get(1), 20);
        assert_eq!(product.non_zeros(), 1);
    }

    #[test]
    fn size_mismatch() {
        let a = DynamicVector::from_vec(vec![1.0, 2.0]);
        let b = DynamicVector::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(add(&a, &b).unwrap_err(), RowError::SizeMismatch { expected: 2, found: 3 });
    }

    #[test]
    fn integral_division_truncates() {
        let a = DynamicVector::from_vec(vec![7i32, -7, 9]);
        let q = div(&a, 2).unwrap();
        assert_eq!(q.as_slice(), &[3, -3, 4]);
        assert_eq!(div(&a, 0).unwrap_err(), RowError::DivisionByZero);
    }

    #[test]
    fn inner_product() {
        let a = DynamicVector::from_vec(vec![1.0, 2.0, 3.0]);
        let b = Transposed::new(CompressedVector::from_pairs(3, &[(0, 2.0), (2, 1.0)]).unwrap());
        assert_eq!(dot(&a, &b).unwrap(), 5.0);
    }
}
