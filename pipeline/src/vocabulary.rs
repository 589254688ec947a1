//! Static vocabulary output.

use std::path::{Path, PathBuf};

use tracing::info;

use geolod_ontology::serializer::{jsonld, mermaid, ntriples, turtle};
use geolod_ontology::{Ontology, VocabularyModule};

use crate::error::PipelineError;
use crate::layout::{write_file, TAXONOMY_FILE};

/// A vocabulary serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyFormat {
    /// Turtle, under the module's own file name.
    Turtle,
    /// N-Triples, `.nt`.
    NTriples,
    /// JSON-LD, `.jsonld`.
    JsonLd,
}

impl VocabularyFormat {
    fn extension(self) -> &'static str {
        match self {
            VocabularyFormat::Turtle => "ttl",
            VocabularyFormat::NTriples => "nt",
            VocabularyFormat::JsonLd => "jsonld",
        }
    }

    fn render(self, module: &VocabularyModule) -> Result<String, PipelineError> {
        Ok(match self {
            VocabularyFormat::Turtle => turtle::to_turtle(module),
            VocabularyFormat::NTriples => ntriples::to_ntriples(module),
            VocabularyFormat::JsonLd => serde_json::to_string_pretty(&jsonld::to_json_ld(module))?,
        })
    }
}

/// Writes every module of `ontology` into `dir` in each of `formats`, plus
/// the class taxonomy diagram when `taxonomy` is set. Returns the written
/// paths.
///
/// The output depends only on the smoothing parameters, so regenerating it
/// is byte-identical.
///
/// # Errors
///
/// Returns [`PipelineError::Vocabulary`] for the first file that cannot be
/// written.
pub fn write_vocabulary(
    dir: &Path,
    ontology: &Ontology,
    formats: &[VocabularyFormat],
    taxonomy: bool,
) -> Result<Vec<PathBuf>, PipelineError> {
    let mut written = Vec::new();
    for module in &ontology.modules {
        for format in formats {
            let path = dir
                .join(module.header.file_name)
                .with_extension(format.extension());
            let text = format.render(module)?;
            write_file(&path, text).map_err(|source| PipelineError::Vocabulary {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }
    }
    if taxonomy {
        let path = dir.join(TAXONOMY_FILE);
        write_file(&path, mermaid::to_taxonomy(ontology)).map_err(|source| {
            PipelineError::Vocabulary {
                path: path.clone(),
                source,
            }
        })?;
        written.push(path);
    }
    info!(dir = %dir.display(), files = written.len(), "vocabulary written");
    Ok(written)
}
