//! Result-type rules.
//!
//! Base rules cover every pair of the three row vector types. Row-view rules never name a
//! result type of their own: they project the view onto [`CompressedVector`] and reuse the
//! base rule for that pair. Scalar rules are generated for the built-in numeric types
//! only, so scaling by anything else has no result type.

use std::ops::Deref;

use super::traits::{AddTrait, DivTrait, MultTrait, SubTrait};
use crate::core::numeric::Numeric;
use crate::core::traits::Vector;
use crate::matrix::{ColumnMajor, CompressedMatrix, RowMajor};
use crate::vector::{CompressedVector, DynamicVector, StaticVector, Transposed};
use crate::view::{AlignedRow, TransposedRow};

macro_rules! base_rule {
    ($Trait:ident; [$($gen:tt)*] $Lhs:ty, $Rhs:ty => $Out:ty) => {
        impl<T: Numeric, $($gen)*> $Trait<$Rhs> for $Lhs {
            type Output = $Out;
        }
    };
}

// sums and differences: dense storage wins, static size wins over dynamic
macro_rules! additive_rules {
    ($($Trait:ident),*) => {$(
        base_rule!($Trait; [const N: usize] StaticVector<T, N>, StaticVector<T, N> => StaticVector<T, N>);
        base_rule!($Trait; [const N: usize] StaticVector<T, N>, DynamicVector<T> => StaticVector<T, N>);
        base_rule!($Trait; [const N: usize] DynamicVector<T>, StaticVector<T, N> => StaticVector<T, N>);
        base_rule!($Trait; [const N: usize] StaticVector<T, N>, CompressedVector<T> => StaticVector<T, N>);
        base_rule!($Trait; [const N: usize] CompressedVector<T>, StaticVector<T, N> => StaticVector<T, N>);
        base_rule!($Trait; [] DynamicVector<T>, DynamicVector<T> => DynamicVector<T>);
        base_rule!($Trait; [] DynamicVector<T>, CompressedVector<T> => DynamicVector<T>);
        base_rule!($Trait; [] CompressedVector<T>, DynamicVector<T> => DynamicVector<T>);
        base_rule!($Trait; [] CompressedVector<T>, CompressedVector<T> => CompressedVector<T>);
    )*};
}

additive_rules!(AddTrait, SubTrait);

// elementwise products: sparse storage wins
base_rule!(MultTrait; [const N: usize] StaticVector<T, N>, StaticVector<T, N> => StaticVector<T, N>);
base_rule!(MultTrait; [const N: usize] StaticVector<T, N>, DynamicVector<T> => StaticVector<T, N>);
base_rule!(MultTrait; [const N: usize] DynamicVector<T>, StaticVector<T, N> => StaticVector<T, N>);
base_rule!(MultTrait; [const N: usize] StaticVector<T, N>, CompressedVector<T> => CompressedVector<T>);
base_rule!(MultTrait; [const N: usize] CompressedVector<T>, StaticVector<T, N> => CompressedVector<T>);
base_rule!(MultTrait; [] DynamicVector<T>, DynamicVector<T> => DynamicVector<T>);
base_rule!(MultTrait; [] DynamicVector<T>, CompressedVector<T> => CompressedVector<T>);
base_rule!(MultTrait; [] CompressedVector<T>, DynamicVector<T> => CompressedVector<T>);
base_rule!(MultTrait; [] CompressedVector<T>, CompressedVector<T> => CompressedVector<T>);

/// A row vector times a column vector is a scalar.
impl<A, B> MultTrait<Transposed<B>> for A
where
    A: Vector,
    B: Vector<Element = A::Element>,
{
    type Output = A::Element;
}

macro_rules! view_rules {
    (@sized $View:ident, $Order:ty, $Trait:ident, $Vec:ident) => {
        impl<T: Numeric, M> $Trait<$Vec<T>> for $View<M>
        where
            M: Deref<Target = CompressedMatrix<T, $Order>>,
        {
            type Output = <CompressedVector<T> as $Trait<$Vec<T>>>::Output;
        }

        impl<T: Numeric, M> $Trait<$View<M>> for $Vec<T>
        where
            M: Deref<Target = CompressedMatrix<T, $Order>>,
        {
            type Output = <$Vec<T> as $Trait<CompressedVector<T>>>::Output;
        }
    };
    ($View:ident, $Order:ty; $($Trait:ident),*) => {$(
        impl<T: Numeric, M, const N: usize> $Trait<StaticVector<T, N>> for $View<M>
        where
            M: Deref<Target = CompressedMatrix<T, $Order>>,
        {
            type Output = <CompressedVector<T> as $Trait<StaticVector<T, N>>>::Output;
        }

        impl<T: Numeric, M, const N: usize> $Trait<$View<M>> for StaticVector<T, N>
        where
            M: Deref<Target = CompressedMatrix<T, $Order>>,
        {
            type Output = <StaticVector<T, N> as $Trait<CompressedVector<T>>>::Output;
        }

        view_rules!(@sized $View, $Order, $Trait, DynamicVector);
        view_rules!(@sized $View, $Order, $Trait, CompressedVector);

        impl<T: Numeric, M, M2> $Trait<AlignedRow<M2>> for $View<M>
        where
            M: Deref<Target = CompressedMatrix<T, $Order>>,
            M2: Deref<Target = CompressedMatrix<T, RowMajor>>,
        {
            type Output = <CompressedVector<T> as $Trait<CompressedVector<T>>>::Output;
        }

        impl<T: Numeric, M, M2> $Trait<TransposedRow<M2>> for $View<M>
        where
            M: Deref<Target = CompressedMatrix<T, $Order>>,
            M2: Deref<Target = CompressedMatrix<T, ColumnMajor>>,
        {
            type Output = <CompressedVector<T> as $Trait<CompressedVector<T>>>::Output;
        }
    )*};
}

view_rules!(AlignedRow, RowMajor; AddTrait, SubTrait, MultTrait);
view_rules!(TransposedRow, ColumnMajor; AddTrait, SubTrait, MultTrait);

macro_rules! scalar_rules {
    (@vector $s:ty, $Vec:ident) => {
        impl MultTrait<$s> for $Vec<$s> {
            type Output = Self;
        }

        impl MultTrait<$Vec<$s>> for $s {
            type Output = $Vec<$s>;
        }

        impl DivTrait<$s> for $Vec<$s> {
            type Output = Self;
        }
    };
    (@view $s:ty, $View:ident, $Order:ty) => {
        impl<M: Deref<Target = CompressedMatrix<$s, $Order>>> MultTrait<$s> for $View<M> {
            type Output = <CompressedVector<$s> as MultTrait<$s>>::Output;
        }

        impl<M: Deref<Target = CompressedMatrix<$s, $Order>>> MultTrait<$View<M>> for $s {
            type Output = <$s as MultTrait<CompressedVector<$s>>>::Output;
        }

        impl<M: Deref<Target = CompressedMatrix<$s, $Order>>> DivTrait<$s> for $View<M> {
            type Output = <CompressedVector<$s> as DivTrait<$s>>::Output;
        }
    };
    ($($s:ty),*) => {$(
        impl MultTrait<$s> for $s {
            type Output = $s;
        }

        impl DivTrait<$s> for $s {
            type Output = $s;
        }

        impl<const N: usize> MultTrait<$s> for StaticVector<$s, N> {
            type Output = Self;
        }

        impl<const N: usize> MultTrait<StaticVector<$s, N>> for $s {
            type Output = StaticVector<$s, N>;
        }

        impl<const N: usize> DivTrait<$s> for StaticVector<$s, N> {
            type Output = Self;
        }

        scalar_rules!(@vector $s, DynamicVector);
        scalar_rules!(@vector $s, CompressedVector);
        scalar_rules!(@view $s, AlignedRow, RowMajor);
        scalar_rules!(@view $s, TransposedRow, ColumnMajor);
    )*};
}

scalar_rules!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
