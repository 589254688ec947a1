//! Output directory layout.
//!
//! ```text
//! <root>/ontology/                     static vocabularies and taxonomy diagram
//! <root>/<group>/plots/<slug>_<m>.csv  plot-ready series
//! <root>/<group>/rdf/<slug>.ttl        one data graph per dataset
//! <root>/collections/<id>.ttl          feature collections
//! <root>/combined/geo_lod_combined.ttl combined graph (+ .nt)
//! <root>/report/report.{json,txt}      run report
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use geolod_graph::family::Measurement;
use geolod_graph::ids::Slug;

/// Base name of the combined graph files.
pub const COMBINED_NAME: &str = "geo_lod_combined";
/// File name of the class taxonomy diagram.
pub const TAXONOMY_FILE: &str = "geo_lod_taxonomy.mermaid";

/// Paths of every artifact under one output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// A layout rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Static vocabularies.
    #[must_use]
    pub fn ontology_dir(&self) -> PathBuf {
        self.root.join("ontology")
    }

    /// Plot series of one group.
    #[must_use]
    pub fn plots_dir(&self, group: &str) -> PathBuf {
        self.root.join(group).join("plots")
    }

    /// Data graphs of one group.
    #[must_use]
    pub fn rdf_dir(&self, group: &str) -> PathBuf {
        self.root.join(group).join("rdf")
    }

    /// Feature collections.
    #[must_use]
    pub fn collections_dir(&self) -> PathBuf {
        self.root.join("collections")
    }

    /// Combined graph.
    #[must_use]
    pub fn combined_dir(&self) -> PathBuf {
        self.root.join("combined")
    }

    /// Run report.
    #[must_use]
    pub fn report_dir(&self) -> PathBuf {
        self.root.join("report")
    }

    /// `<group>/rdf/<slug>.ttl`
    #[must_use]
    pub fn dataset_graph(&self, group: &str, slug: &Slug) -> PathBuf {
        self.rdf_dir(group).join(format!("{slug}.ttl"))
    }

    /// `<group>/plots/<slug>_<measurement>.csv`
    #[must_use]
    pub fn plot_series(&self, group: &str, slug: &Slug, measurement: Measurement) -> PathBuf {
        self.plots_dir(group)
            .join(format!("{slug}_{}.csv", measurement.key()))
    }

    /// `collections/<id>.ttl`
    #[must_use]
    pub fn collection(&self, id: &str) -> PathBuf {
        self.collections_dir().join(format!("{id}.ttl"))
    }

    /// `combined/geo_lod_combined.ttl`
    #[must_use]
    pub fn combined_turtle(&self) -> PathBuf {
        self.combined_dir().join(format!("{COMBINED_NAME}.ttl"))
    }

    /// `combined/geo_lod_combined.nt`
    #[must_use]
    pub fn combined_ntriples(&self) -> PathBuf {
        self.combined_dir().join(format!("{COMBINED_NAME}.nt"))
    }

    /// `report/report.json`
    #[must_use]
    pub fn report_json(&self) -> PathBuf {
        self.report_dir().join("report.json")
    }

    /// `report/report.txt`
    #[must_use]
    pub fn report_text(&self) -> PathBuf {
        self.report_dir().join("report.txt")
    }

    /// Empties every directory the pipeline writes to, keeping the
    /// directories themselves. Other content under the root is left alone.
    /// Returns the number of entries removed.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error.
    pub fn clean<'a>(&self, groups: impl IntoIterator<Item = &'a str>) -> io::Result<usize> {
        let mut dirs = vec![
            self.ontology_dir(),
            self.collections_dir(),
            self.combined_dir(),
            self.report_dir(),
        ];
        for g in groups {
            dirs.push(self.plots_dir(g));
            dirs.push(self.rdf_dir(g));
        }
        let mut removed = 0;
        for dir in dirs.iter().filter(|d| d.is_dir()) {
            for entry in fs::read_dir(dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    fs::remove_dir_all(&path)?;
                } else {
                    fs::remove_file(&path)?;
                }
                removed += 1;
            }
            debug!(dir = %dir.display(), "cleaned");
        }
        Ok(removed)
    }
}

/// Writes `contents` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_the_layout() {
        let l = OutputLayout::new("/out");
        let slug = Slug::new("epica-dome-c").unwrap();
        assert_eq!(
            l.dataset_graph("EPICA", &slug),
            PathBuf::from("/out/EPICA/rdf/epica-dome-c.ttl")
        );
        assert_eq!(
            l.plot_series("EPICA", &slug, Measurement::Ch4),
            PathBuf::from("/out/EPICA/plots/epica-dome-c_CH4.csv")
        );
        assert_eq!(
            l.combined_ntriples(),
            PathBuf::from("/out/combined/geo_lod_combined.nt")
        );
    }

    #[test]
    fn clean_removes_generated_content_only() {
        let dir = tempfile::tempdir().unwrap();
        let l = OutputLayout::new(dir.path());
        write_file(&l.report_json(), "{}").unwrap();
        write_file(&l.rdf_dir("EPICA").join("a.ttl"), "").unwrap();
        write_file(&l.plots_dir("EPICA").join("nested").join("b.csv"), "").unwrap();
        write_file(&dir.path().join("keep.txt"), "x").unwrap();

        assert_eq!(l.clean(["EPICA"]).unwrap(), 3);
        assert!(l.report_dir().is_dir());
        assert!(!l.report_json().exists());
        assert!(dir.path().join("keep.txt").exists());
        assert_eq!(l.clean(["EPICA"]).unwrap(), 0);
    }
}
