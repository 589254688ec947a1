//! End-to-end pipeline runs over small input files in a temporary
//! directory.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use geolod_pipeline::{run, DatasetStatus, PipelineConfig, RunOptions};
use sophia::api::prelude::*;
use sophia::inmem::graph::LightGraph;

fn pangaea_tab() -> String {
    let mut s = String::from(
        "/* DATA DESCRIPTION:\nCitation:\tTest data\n*/\nDepth ice/snow [m]\tDepth ref [m]\tGas age [ka BP]\tGas age [ka BP]\tCH4 [ppbv]\n",
    );
    for i in 0..12_i32 {
        let depth = 100.0 + f64::from(i) * 2.5;
        let age = 1.0 + f64::from(i) * 0.4;
        let ch4 = 580.0 + f64::from((i * 7) % 11) * 3.0;
        let _ = writeln!(s, "{depth}\t0\t{age}\t{age}\t{ch4}");
    }
    s.push_str("140.0\t0\t\t\t601.0\n");
    s
}

fn sisal_csv() -> String {
    let mut s = String::from(
        "site_id,site_name,entity_id,entity_name,sample_id,depth_sample,age_bp,d18o_permille,d13c_permille\n",
    );
    for i in 0..8_i32 {
        let _ = writeln!(
            s,
            "145,Corchia,227,CC1,{i},{},{},{},{}",
            f64::from(i) * 4.0,
            1000 + i * 350,
            -5.0 + f64::from(i) * 0.05,
            -2.0 - f64::from(i) * 0.1
        );
    }
    for i in 0..3_i32 {
        let _ = writeln!(
            s,
            "145,Corchia,228,CC5,{},{},{},{},",
            100 + i,
            f64::from(i) * 2.0,
            9000 + i * 500,
            -4.5 - f64::from(i) * 0.1
        );
    }
    s
}

const CONFIG: &str = r#"
output = "out"

[smoothing]
rolling_window = 3
sg_window = 5
sg_polyorder = 2

[[dataset]]
group = "EPICA"
slug = "epica-dome-c"
family = "ice-core"
title = "EPICA Dome C"
location = { id = "EpicaDomeC_Site", label = "EPICA Dome C", geometry = { lon = 123.35, lat = -75.1 } }
sample = { id = "EpicaDomeC_IceCore", label = "EPICA Dome C ice core" }
campaign = { id = "EPICA_DomeC_Drilling", label = "EPICA Dome C drilling", time_span = "1996/2004" }

[[dataset.series]]
measurement = "CH4"
chronology = { kind = "named", id = "EDC2_Chronology", label = "EDC2" }
source = { id = "PANGAEA_472484", label = "EDC CH4", year = 2006, doi = "https://doi.org/10.1594/PANGAEA.472484" }
input = { path = "EDC_CH4.tab", format = "pangaea-tab", depth_column = 0, age_column = 3, value_column = 4 }

[[dataset]]
group = "SISAL"
slug = "sisal-145"
family = "speleothem"
title = "Corchia Cave"
depth_unit = "millimetres"
location = { id = "Cave_145_Corchia", label = "Corchia Cave", geometry = { lon = 10.24, lat = 43.98 } }

[[dataset.series]]
measurement = "d18O"
chronology = { kind = "per-entity" }
source = { id = "SISAL_v3", label = "SISAL v3" }
input = { path = "corchia.csv", format = "sisal-csv" }

[[dataset.series]]
measurement = "d13C"
chronology = { kind = "per-entity" }
source = { id = "SISAL_v3", label = "SISAL v3" }
input = { path = "corchia.csv", format = "sisal-csv" }

[[collection]]
id = "GeoLod_AllSites"
label = "geo-lod sampling sites"
"#;

const MISSING: &str = r#"
[[dataset]]
group = "SISAL"
slug = "sisal-999"
family = "speleothem"
title = "Nowhere Cave"
location = { id = "Cave_999", label = "Nowhere" }

[[dataset.series]]
measurement = "d18O"
chronology = { kind = "per-entity" }
source = { id = "SISAL_v3", label = "SISAL v3" }
input = { path = "missing.csv", format = "sisal-csv" }
"#;

fn setup(dir: &Path, extra: &str) -> PipelineConfig {
    fs::write(dir.join("EDC_CH4.tab"), pangaea_tab()).unwrap();
    fs::write(dir.join("corchia.csv"), sisal_csv()).unwrap();
    let mut config = PipelineConfig::parse(&format!("{CONFIG}{extra}")).unwrap();
    config.base_dir = dir.to_path_buf();
    config
}

fn options() -> RunOptions {
    RunOptions {
        generated: NaiveDate::from_ymd_opt(2024, 5, 1),
        ..RunOptions::default()
    }
}

fn parse_turtle(path: &Path) -> LightGraph {
    let text = fs::read_to_string(path).unwrap();
    match sophia::turtle::parser::turtle::parse_str(&text).collect_triples() {
        Ok(g) => g,
        Err(e) => panic!("{} does not parse: {e}", path.display()),
    }
}

fn parse_ntriples(path: &Path) -> LightGraph {
    let text = fs::read_to_string(path).unwrap();
    match sophia::turtle::parser::nt::parse_str(&text).collect_triples() {
        Ok(g) => g,
        Err(e) => panic!("{} does not parse: {e}", path.display()),
    }
}

#[test]
fn full_run_writes_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), "");
    let report = run(&config, &options()).unwrap();
    let out = dir.path().join("out");

    assert_eq!(report.failed(), 0);
    assert_eq!(report.generated, "2024-05-01");
    assert!(report
        .datasets
        .iter()
        .all(|d| d.status == DatasetStatus::Built));

    let edc = &report.datasets[0].series[0];
    assert_eq!((edc.rows, edc.dropped, edc.observations), (12, 1, 12));
    assert_eq!(edc.methods, ["RollingMedian_w3", "SavitzkyGolay_w5_p2"]);

    let d18o = &report.datasets[1].series[0];
    assert_eq!(d18o.observations, 11);
    assert_eq!(d18o.failures.len(), 1, "short entity skips Savitzky-Golay");
    let d13c = &report.datasets[1].series[1];
    assert_eq!((d13c.rows, d13c.dropped), (8, 3));

    for rel in [
        "ontology/geo_lod_core.ttl",
        "ontology/geo_lod_ice_core.ttl",
        "ontology/geo_lod_speleothem.ttl",
        "ontology/geo_lod_taxonomy.mermaid",
        "EPICA/rdf/epica-dome-c.ttl",
        "EPICA/plots/epica-dome-c_CH4.csv",
        "SISAL/rdf/sisal-145.ttl",
        "SISAL/plots/sisal-145_d18O.csv",
        "SISAL/plots/sisal-145_d13C.csv",
        "collections/GeoLod_AllSites.ttl",
        "combined/geo_lod_combined.ttl",
        "combined/geo_lod_combined.nt",
        "report/report.json",
        "report/report.txt",
    ] {
        assert!(out.join(rel).is_file(), "{rel} missing");
    }

    assert_eq!(report.collections[0].members, 2);
    let combined = report.combined.as_ref().unwrap();
    let ttl = parse_turtle(&out.join("combined/geo_lod_combined.ttl"));
    let nt = parse_ntriples(&out.join("combined/geo_lod_combined.nt"));
    assert_eq!(ttl.triples().count(), combined.triples);
    assert_eq!(nt.triples().count(), combined.triples);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("report/report.json")).unwrap()).unwrap();
    assert_eq!(json["datasets"][0]["status"], "built");
}

#[test]
fn failing_dataset_does_not_stop_the_others() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), MISSING);
    let report = run(&config, &options()).unwrap();

    assert_eq!(report.datasets.len(), 3);
    assert_eq!(report.failed(), 1);
    assert!(!report.all_failed());
    let failed = &report.datasets[2];
    assert_eq!(failed.status, DatasetStatus::Failed);
    assert!(failed.error.as_deref().unwrap().contains("missing.csv"));
    assert_eq!(report.combined.as_ref().unwrap().datasets, 2);
}

#[test]
fn no_rdf_writes_vocabulary_and_series_only() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), "");
    let opts = RunOptions {
        no_rdf: true,
        ..options()
    };
    let report = run(&config, &opts).unwrap();
    let out = dir.path().join("out");

    assert!(!report.capability.is_available());
    assert!(report
        .datasets
        .iter()
        .all(|d| d.status == DatasetStatus::SeriesOnly));
    assert!(report.combined.is_none());
    assert!(out.join("ontology/geo_lod_core.ttl").is_file());
    assert!(out.join("EPICA/plots/epica-dome-c_CH4.csv").is_file());
    assert!(!out.join("EPICA/rdf").exists());
    assert!(!out.join("combined").exists());
}

#[test]
fn regeneration_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), "");
    let combined = dir.path().join("out/combined/geo_lod_combined.ttl");
    let core = dir.path().join("out/ontology/geo_lod_core.ttl");

    run(&config, &options()).unwrap();
    let first = (fs::read(&combined).unwrap(), fs::read(&core).unwrap());
    let opts = RunOptions {
        clean: true,
        ..options()
    };
    run(&config, &opts).unwrap();
    let second = (fs::read(&combined).unwrap(), fs::read(&core).unwrap());
    assert_eq!(first, second);
}

#[test]
fn clean_removes_stale_graphs() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), "");
    let stale = dir.path().join("out/EPICA/rdf/old-dataset.ttl");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "# stale").unwrap();

    let opts = RunOptions {
        clean: true,
        ..options()
    };
    run(&config, &opts).unwrap();
    assert!(!stale.exists());
    assert!(dir.path().join("out/EPICA/rdf/epica-dome-c.ttl").is_file());
}
