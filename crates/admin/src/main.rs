//! Biobank annotations - loads an annotation form from a JSON document and
//! prints the annotations it would submit.
//!
//! Usage: `biobank-annotations <form.json>` where the document holds
//! `{"annotationTypes": [...], "annotations": [...]}`.

use std::sync::Arc;

use anyhow::Context;
use biobank_admin::infrastructure::clock::SystemClock;
use biobank_admin::{AnnotationFormConfig, OpenAnnotationForm};
use biobank_domain::{Annotation, AnnotationTypeDescriptor};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormDocument {
    annotation_types: Vec<AnnotationTypeDescriptor>,
    #[serde(default)]
    annotations: Vec<Annotation>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "biobank_admin=debug,biobank_annotations=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: biobank-annotations <form.json>")?;
    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path))?;
    let document: FormDocument =
        serde_json::from_str(&raw).with_context(|| format!("{} is not a form document", path))?;

    let config = AnnotationFormConfig::from_env();
    tracing::info!(
        path = %path,
        annotation_types = document.annotation_types.len(),
        annotations = document.annotations.len(),
        utc_offset = %config.utc_offset,
        "Opening annotation form"
    );

    let annotation_types: Vec<Arc<AnnotationTypeDescriptor>> =
        document.annotation_types.into_iter().map(Arc::new).collect();
    let form = OpenAnnotationForm::new(Arc::new(SystemClock), config)
        .execute(&annotation_types, &document.annotations)?;

    for label in form.missing_required() {
        tracing::warn!(label, "Required annotation has no value");
    }

    println!("{}", serde_json::to_string_pretty(&form.annotations())?);
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
