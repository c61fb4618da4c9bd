//! Result-type traits: `A: AddTrait<B>` names the type of `A + B`.
//!
//! A missing implementation is the "no such type" outcome; using the combination in an
//! expression fails to compile.

/// Result type of an addition.
pub trait AddTrait<Rhs: ?Sized> {
    type Output;
}

/// Result type of a subtraction.
pub trait SubTrait<Rhs: ?Sized> {
    type Output;
}

/// Result type of a multiplication.
pub trait MultTrait<Rhs: ?Sized> {
    type Output;
}

/// Result type of a division.
pub trait DivTrait<Rhs: ?Sized> {
    type Output;
}
