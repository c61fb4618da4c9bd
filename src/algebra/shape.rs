//! Operand shape descriptors and the result-shape rule table.
//!
//! Every operand type carries a [`Shape`] through [`Shaped::SHAPE`]. [`deduce`] maps an
//! operator and two shapes to the shape of the result, or to [`Deduced::Invalid`] when the
//! combination has no meaning. The table is a `const fn`, so compound assignment on row
//! views checks its operands while the crate is being compiled.
//!
//! Row views never appear in a result: they are projected onto a compressed row vector
//! before any rule is consulted.

use crate::core::numeric::{Numeric, NumericKind};

/// Arithmetic operator of a binary expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

/// Whether a vector is a row or a column vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Row,
    Column,
}

impl Orientation {
    pub const fn flip(self) -> Orientation {
        match self {
            Orientation::Row => Orientation::Column,
            Orientation::Column => Orientation::Row,
        }
    }

    const fn same(self, other: Orientation) -> bool {
        matches!(
            (self, other),
            (Orientation::Row, Orientation::Row) | (Orientation::Column, Orientation::Column)
        )
    }
}

/// Row-view flavour: rows of a row-major matrix are aligned, rows of a column-major
/// matrix are transposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    Aligned,
    Transposed,
}

/// Storage strategy of a vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Storage {
    /// Fixed size known at compile time.
    Static(usize),
    Dynamic,
    Compressed,
}

/// Structural category of an operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Form {
    RowView(Layout),
    Vector(Storage, Orientation),
    DenseMatrix,
    SparseMatrix,
    Scalar,
    /// Anything the algebra does not know how to combine.
    Opaque,
}

impl Form {
    /// Replaces a row view with its natural result type.
    const fn project(self) -> Form {
        match self {
            Form::RowView(_) => Form::Vector(Storage::Compressed, Orientation::Row),
            other => other,
        }
    }

    const fn is_matrix(self) -> bool {
        matches!(self, Form::DenseMatrix | Form::SparseMatrix)
    }
}

/// Operand descriptor: structure plus element kind (`None` for non-numeric operands).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    pub form: Form,
    pub element: Option<NumericKind>,
}

impl Shape {
    pub const OPAQUE: Shape = Shape { form: Form::Opaque, element: None };

    pub const fn scalar(kind: NumericKind) -> Shape {
        Shape { form: Form::Scalar, element: Some(kind) }
    }

    pub const fn vector(storage: Storage, orientation: Orientation, kind: NumericKind) -> Shape {
        Shape { form: Form::Vector(storage, orientation), element: Some(kind) }
    }

    pub const fn row_view(layout: Layout, kind: NumericKind) -> Shape {
        Shape { form: Form::RowView(layout), element: Some(kind) }
    }

    pub const fn matrix(sparse: bool, kind: NumericKind) -> Shape {
        let form = if sparse { Form::SparseMatrix } else { Form::DenseMatrix };
        Shape { form, element: Some(kind) }
    }

    /// Shape of the transpose. Row views transpose into compressed column vectors.
    pub const fn transpose(self) -> Shape {
        let form = match self.form.project() {
            Form::Vector(storage, orientation) => Form::Vector(storage, orientation.flip()),
            other => other,
        };
        Shape { form, element: self.element }
    }
}

/// Outcome of a deduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Deduced {
    Shape(Shape),
    Invalid,
}

impl Deduced {
    pub const fn is_valid(self) -> bool {
        matches!(self, Deduced::Shape(_))
    }

    /// `true` for any row vector result.
    pub const fn is_row_vector(self) -> bool {
        matches!(
            self,
            Deduced::Shape(Shape { form: Form::Vector(_, Orientation::Row), .. })
        )
    }
}

/// Types with a statically known operand shape.
pub trait Shaped {
    const SHAPE: Shape;
}

/// Result shape of `lhs op rhs`.
pub const fn deduce(op: Operator, lhs: Shape, rhs: Shape) -> Deduced {
    let element = match (lhs.element, rhs.element) {
        (Some(a), Some(b)) => a.promote(b),
        _ => return Deduced::Invalid,
    };
    let (l, r) = (lhs.form.project(), rhs.form.project());
    let form = match op {
        Operator::Add | Operator::Sub => sum(l, r),
        Operator::Mul => product(l, r),
        Operator::Div => quotient(l, r),
    };
    match form {
        Some(form) => Deduced::Shape(Shape { form, element: Some(element) }),
        None => Deduced::Invalid,
    }
}

/// [`deduce`] applied to two types.
pub const fn deduce_for<A: Shaped + ?Sized, B: Shaped + ?Sized>(op: Operator) -> Deduced {
    deduce(op, A::SHAPE, B::SHAPE)
}

const fn sum(l: Form, r: Form) -> Option<Form> {
    match (l, r) {
        (Form::Vector(a, oa), Form::Vector(b, ob)) => {
            if !oa.same(ob) {
                return None;
            }
            match (a, b) {
                (Storage::Static(n), Storage::Static(m)) => {
                    if n == m { Some(Form::Vector(Storage::Static(n), oa)) } else { None }
                }
                (Storage::Static(n), _) | (_, Storage::Static(n)) => {
                    Some(Form::Vector(Storage::Static(n), oa))
                }
                (Storage::Dynamic, _) | (_, Storage::Dynamic) => {
                    Some(Form::Vector(Storage::Dynamic, oa))
                }
                (Storage::Compressed, Storage::Compressed) => {
                    Some(Form::Vector(Storage::Compressed, oa))
                }
            }
        }
        (Form::SparseMatrix, Form::SparseMatrix) => Some(Form::SparseMatrix),
        (Form::DenseMatrix | Form::SparseMatrix, Form::DenseMatrix | Form::SparseMatrix) => {
            Some(Form::DenseMatrix)
        }
        _ => None,
    }
}

const fn product(l: Form, r: Form) -> Option<Form> {
    match (l, r) {
        (Form::Scalar, Form::Scalar) => Some(Form::Scalar),
        (Form::Scalar, other @ (Form::Vector(..) | Form::DenseMatrix | Form::SparseMatrix))
        | (other @ (Form::Vector(..) | Form::DenseMatrix | Form::SparseMatrix), Form::Scalar) => {
            Some(other)
        }
        (Form::Vector(a, oa), Form::Vector(b, ob)) => {
            if oa.same(ob) {
                return match elementwise(a, b) {
                    Some(storage) => Some(Form::Vector(storage, oa)),
                    None => None,
                };
            }
            match oa {
                // inner product
                Orientation::Row => Some(Form::Scalar),
                // outer product
                Orientation::Column => {
                    if matches!((a, b), (Storage::Compressed, Storage::Compressed)) {
                        Some(Form::SparseMatrix)
                    } else {
                        Some(Form::DenseMatrix)
                    }
                }
            }
        }
        (m, Form::Vector(v, Orientation::Column)) if m.is_matrix() => {
            Some(Form::Vector(applied(m, v), Orientation::Column))
        }
        (Form::Vector(v, Orientation::Row), m) if m.is_matrix() => {
            Some(Form::Vector(applied(m, v), Orientation::Row))
        }
        (Form::SparseMatrix, Form::SparseMatrix) => Some(Form::SparseMatrix),
        (Form::DenseMatrix | Form::SparseMatrix, Form::DenseMatrix | Form::SparseMatrix) => {
            Some(Form::DenseMatrix)
        }
        _ => None,
    }
}

/// Storage of an elementwise product of two same-orientation vectors.
const fn elementwise(a: Storage, b: Storage) -> Option<Storage> {
    match (a, b) {
        (Storage::Static(n), Storage::Static(m)) => {
            if n == m { Some(Storage::Static(n)) } else { None }
        }
        (Storage::Compressed, _) | (_, Storage::Compressed) => Some(Storage::Compressed),
        (Storage::Static(n), Storage::Dynamic) | (Storage::Dynamic, Storage::Static(n)) => {
            Some(Storage::Static(n))
        }
        (Storage::Dynamic, Storage::Dynamic) => Some(Storage::Dynamic),
    }
}

/// Storage of a matrix/vector product.
const fn applied(matrix: Form, vector: Storage) -> Storage {
    match (matrix, vector) {
        (Form::SparseMatrix, Storage::Compressed) => Storage::Compressed,
        _ => Storage::Dynamic,
    }
}

const fn quotient(l: Form, r: Form) -> Option<Form> {
    match (l, r) {
        (
            other @ (Form::Vector(..) | Form::DenseMatrix | Form::SparseMatrix | Form::Scalar),
            Form::Scalar,
        ) => Some(other),
        _ => None,
    }
}

macro_rules! numeric_scalar {
    ($($t:ty),*) => {$(
        impl Shaped for $t {
            const SHAPE: Shape = Shape::scalar(<$t as Numeric>::KIND);
        }
    )*};
}

numeric_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Shaped for bool {
    const SHAPE: Shape = Shape::OPAQUE;
}

impl Shaped for char {
    const SHAPE: Shape = Shape::OPAQUE;
}

impl Shaped for String {
    const SHAPE: Shape = Shape::OPAQUE;
}

impl Shaped for str {
    const SHAPE: Shape = Shape::OPAQUE;
}

impl<S: Shaped + ?Sized> Shaped for &S {
    const SHAPE: Shape = S::SHAPE;
}
