//! Result-type algebra: which container `A op B` produces, and how it is evaluated.

pub mod ops;
pub mod rules;
pub mod shape;
pub mod traits;

pub use ops::{AddOutput, DivOutput, MultOutput, SubOutput};
pub use shape::{deduce, deduce_for, Deduced, Form, Layout, Operator, Orientation, Shape, Shaped, Storage};
pub use traits::{AddTrait, DivTrait, MultTrait, SubTrait};
