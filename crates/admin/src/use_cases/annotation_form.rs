//! Annotation form use case - one [`AnnotationValue`] per annotation type.
//!
//! Opening a form creates a field for every annotation type of the entity
//! being edited (participant, collection event, specimen link), pre-fills
//! date-time fields with the current time, and loads the entity's existing
//! annotations. Submitting reads back one [`Annotation`] per field.

use std::sync::Arc;

use biobank_domain::{
    Annotation, AnnotationTypeDescriptor, AnnotationTypeId, AnnotationValue, DomainError,
};

use crate::config::AnnotationFormConfig;
use crate::infrastructure::clock::wall_clock_now;
use crate::infrastructure::ports::ClockPort;

/// Fields of an open annotation form, in annotation type order
#[derive(Debug, Clone)]
pub struct AnnotationForm {
    fields: Vec<AnnotationValue>,
}

impl AnnotationForm {
    pub fn fields(&self) -> &[AnnotationValue] {
        &self.fields
    }

    pub fn field(&self, id: &AnnotationTypeId) -> Option<&AnnotationValue> {
        self.fields.iter().find(|f| f.annotation_type_id() == id)
    }

    pub fn field_mut(&mut self, id: &AnnotationTypeId) -> Option<&mut AnnotationValue> {
        self.fields.iter_mut().find(|f| f.annotation_type_id() == id)
    }

    /// Annotations to send to the server
    pub fn annotations(&self) -> Vec<Annotation> {
        self.fields.iter().map(AnnotationValue::annotation).collect()
    }

    /// Labels of required fields that are still empty
    pub fn missing_required(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.is_required() && !f.has_value())
            .map(AnnotationValue::label)
            .collect()
    }
}

pub struct OpenAnnotationForm {
    clock: Arc<dyn ClockPort>,
    config: AnnotationFormConfig,
}

impl OpenAnnotationForm {
    pub fn new(clock: Arc<dyn ClockPort>, config: AnnotationFormConfig) -> Self {
        Self { clock, config }
    }

    /// Builds the form fields and loads `existing` annotations into them.
    ///
    /// Annotations whose annotation type is not part of the form are skipped.
    pub fn execute(
        &self,
        annotation_types: &[Arc<AnnotationTypeDescriptor>],
        existing: &[Annotation],
    ) -> Result<AnnotationForm, DomainError> {
        let now = wall_clock_now(self.clock.as_ref(), self.config.utc_offset);

        let mut fields = Vec::with_capacity(annotation_types.len());
        for annotation_type in annotation_types {
            let mut field =
                AnnotationValue::create(annotation_type.clone(), self.config.default_required)?
                    .with_utc_offset(self.config.utc_offset);
            field.seed_date_time(now);

            if let Some(annotation) = existing
                .iter()
                .find(|a| a.annotation_type_id == annotation_type.id)
            {
                field.set_value(annotation)?;
                tracing::debug!(
                    annotation_type_id = %annotation_type.id,
                    display = ?field.display_value(),
                    "Loaded annotation into form field"
                );
            } else {
                tracing::debug!(
                    annotation_type_id = %annotation_type.id,
                    value_type = %annotation_type.value_type,
                    "Created empty form field"
                );
            }
            fields.push(field);
        }

        for annotation in existing {
            if !annotation_types
                .iter()
                .any(|t| t.id == annotation.annotation_type_id)
            {
                tracing::warn!(
                    annotation_type_id = %annotation.annotation_type_id,
                    "Annotation has no matching annotation type, skipping"
                );
            }
        }

        Ok(AnnotationForm { fields })
    }
}
