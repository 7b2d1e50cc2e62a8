//! Study annotation types - one client for participant, collection event and
//! specimen link annotation types, selected by [`AnnotationTypeKind`].

use std::sync::Arc;

use async_trait::async_trait;
use biobank_domain::{AnnotationTypeDescriptor, AnnotationTypeId, AnnotationTypeKind, StudyId};

use crate::error::AdminError;
use crate::infrastructure::ports::{AnnotationTypeStore, ModalPort, RemovableEntity};
use crate::infrastructure::PortError;

use super::remove_entity::{RemoveEntity, RemoveOutcome, RemovePrompt};

pub struct StudyAnnotationTypes {
    kind: AnnotationTypeKind,
    store: Arc<dyn AnnotationTypeStore>,
    modal: Arc<dyn ModalPort>,
    remover: RemoveEntity,
}

impl StudyAnnotationTypes {
    pub fn new(
        kind: AnnotationTypeKind,
        store: Arc<dyn AnnotationTypeStore>,
        modal: Arc<dyn ModalPort>,
    ) -> Self {
        Self {
            kind,
            store,
            remover: RemoveEntity::new(modal.clone()),
            modal,
        }
    }

    pub fn kind(&self) -> AnnotationTypeKind {
        self.kind
    }

    /// `studies/{studyId}/{endpoint}`
    pub fn collection_path(&self, study_id: &StudyId) -> String {
        format!("studies/{}/{}", study_id, self.kind.endpoint())
    }

    /// `studies/{studyId}/{endpoint}/{id}`
    pub fn item_path(&self, study_id: &StudyId, id: &AnnotationTypeId) -> String {
        format!("{}/{}", self.collection_path(study_id), id)
    }

    pub async fn list(
        &self,
        study_id: &StudyId,
    ) -> Result<Vec<AnnotationTypeDescriptor>, PortError> {
        let path = self.collection_path(study_id);
        let types = self.store.list(&path).await?;
        tracing::debug!(path = %path, count = types.len(), "Listed annotation types");
        Ok(types)
    }

    pub async fn get(
        &self,
        study_id: &StudyId,
        id: &AnnotationTypeId,
    ) -> Result<AnnotationTypeDescriptor, PortError> {
        self.store
            .get(&self.item_path(study_id, id))
            .await?
            .ok_or_else(|| PortError::not_found("AnnotationType", id))
    }

    /// Tells the user an in-use annotation type cannot be updated.
    pub async fn update_in_use_modal(&self) {
        self.in_use_modal("update").await
    }

    /// Tells the user an in-use annotation type cannot be removed.
    pub async fn remove_in_use_modal(&self) {
        self.in_use_modal("remove").await
    }

    async fn in_use_modal(&self, action: &str) {
        let header = format!("Cannot {} this annotation type", action);
        self.modal
            .acknowledge(&header, self.kind.in_use_message())
            .await
    }

    /// Confirms with the user and removes `annotation_type` from its study.
    pub async fn remove(
        &self,
        annotation_type: &AnnotationTypeDescriptor,
    ) -> Result<RemoveOutcome, AdminError> {
        let study_id = annotation_type.study_id.as_ref().ok_or_else(|| {
            biobank_domain::DomainError::invalid_state(format!(
                "annotation type '{}' does not belong to a study",
                annotation_type.name
            ))
        })?;

        let mut path = self.item_path(study_id, &annotation_type.id);
        if let Some(version) = annotation_type.version {
            path = format!("{}/{}", path, version);
        }

        let entity = StoredAnnotationType {
            store: self.store.as_ref(),
            path,
        };
        let prompt = RemovePrompt::new(
            "Remove Annotation Type",
            format!(
                "Are you sure you want to remove annotation type {}?",
                annotation_type.name
            ),
            "Remove failed",
            format!("Annotation type {} cannot be removed", annotation_type.name),
        );

        Ok(self.remover.execute(&entity, &prompt).await?)
    }
}

/// Annotation type addressed by its REST path
struct StoredAnnotationType<'a> {
    store: &'a dyn AnnotationTypeStore,
    path: String,
}

#[async_trait]
impl<'a> RemovableEntity for StoredAnnotationType<'a> {
    async fn remove(&self) -> Result<(), PortError> {
        self.store.remove(&self.path).await
    }
}
