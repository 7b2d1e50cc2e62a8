//! Value objects - Objects defined by their attributes

mod amount;
mod annotation;
mod annotation_value;

pub use amount::{parse_amount_input, parse_integer_input};
pub use annotation::{Annotation, AnnotationScalar, NumberValue, SelectedValue};
pub use annotation_value::{AnnotationState, AnnotationValue, SelectOption};
