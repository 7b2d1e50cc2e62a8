//! Domain entities

mod annotation_type;

pub use annotation_type::{
    AnnotationTypeDescriptor, AnnotationTypeKind, AnnotationValueType, SelectionMode,
};
