//! Plot-ready series export.
//!
//! Plot rendering happens elsewhere; this module writes one CSV per series
//! with the raw values next to every smoothed value, in the row order the
//! graph uses.

use geolod_graph::series::PairedSeries;
use geolod_ontology::SmoothingSpec;

/// Encodes `paired` as CSV with columns `entity, seq, depth, age_ka, value`
/// and one column per entry of `specs`. A cell is empty where the method
/// failed for that row's group.
///
/// # Errors
///
/// Returns the CSV writer's error.
pub fn to_csv(paired: &PairedSeries, specs: &[SmoothingSpec]) -> Result<Vec<u8>, csv::Error> {
    let mut w = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<String> = ["entity", "seq", "depth", "age_ka", "value"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    header.extend(specs.iter().map(SmoothingSpec::local_name));
    w.write_record(&header)?;

    for r in &paired.rows {
        let mut record = vec![
            r.row.entity.clone().unwrap_or_default(),
            r.seq.to_string(),
            r.row.depth.to_string(),
            r.row.age.to_string(),
            r.row.value.to_string(),
        ];
        record.extend(specs.iter().map(|spec| {
            r.smoothed
                .iter()
                .find(|v| v.spec == *spec)
                .map(|v| v.value.to_string())
                .unwrap_or_default()
        }));
        w.write_record(&record)?;
    }

    w.into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
