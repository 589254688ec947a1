//! Assembled graphs parse back with sophia, and both syntaxes carry the same
//! triples.

use geolod_graph::assembler::{Assembler, Series};
use geolod_graph::family::{DepthUnit, Family, Measurement};
use geolod_graph::geometry::Geometry;
use geolod_graph::ids::Slug;
use geolod_graph::metadata::{
    CampaignInfo, ChronologyInfo, DatasetMetadata, LocationInfo, SeriesInfo, SourceInfo,
};
use geolod_graph::serializer::{to_ntriples, to_turtle};
use geolod_graph::series::RawRow;
use geolod_graph::smoothing::SmoothingConfig;
use geolod_graph::{merge, CollectionDescription, Graph};
use geolod_ontology::SmoothingParams;
use sophia::api::prelude::*;
use sophia::api::graph::Graph as _;
use sophia::inmem::graph::LightGraph;

fn parse_turtle(text: &str) -> LightGraph {
    match sophia::turtle::parser::turtle::parse_str(text).collect_triples() {
        Ok(g) => g,
        Err(e) => panic!("turtle does not parse: {e}\n{text}"),
    }
}

fn parse_ntriples(text: &str) -> LightGraph {
    match sophia::turtle::parser::nt::parse_str(text).collect_triples() {
        Ok(g) => g,
        Err(e) => panic!("n-triples do not parse: {e}"),
    }
}

fn config() -> SmoothingConfig {
    SmoothingConfig {
        params: SmoothingParams {
            rolling_window: 3,
            sg_window: 5,
            sg_polyorder: 2,
        },
        ..SmoothingConfig::default()
    }
}

fn source(id: &str) -> SourceInfo {
    SourceInfo {
        id: id.to_owned(),
        label: "Source \"quoted\" & <angled>".to_owned(),
        title: Some("Line one\nline two".to_owned()),
        creator: None,
        year: Some(2019),
        doi: Some("https://doi.org/10.5287/bodleian:2Mq5j7vaR".to_owned()),
    }
}

fn speleothem() -> Graph {
    let meta = DatasetMetadata {
        slug: Slug::new("sisal-site-145").expect("slug"),
        family: Family::Speleothem,
        title: "Botuverá Cave".to_owned(),
        description: None,
        publisher: Some("SISAL".to_owned()),
        license: Some("https://creativecommons.org/licenses/by/4.0/".to_owned()),
        location: LocationInfo {
            id: "Cave_145".to_owned(),
            label: "Botuverá Cave".to_owned(),
            geometry: Some(Geometry::Point {
                lon: -49.15,
                lat: -27.22,
            }),
            identified_by: None,
        },
        sample: None,
        campaign: None,
        depth_unit: DepthUnit::Millimetres,
    };
    let mut a = Assembler::new(config());
    let rows = |entity: &str, shift: f64| -> Vec<RawRow> {
        (0..8_i32)
            .map(|i| {
                let x = f64::from(i);
                RawRow::new(x * 1.5, shift + x * 0.25, -4.0 - 0.1 * x).with_entity(entity)
            })
            .collect()
    };
    let mut all = rows("227", 0.1);
    all.extend(rows("228", 3.0));
    let series = Series {
        info: SeriesInfo {
            measurement: Measurement::Delta18O,
            chronology: ChronologyInfo::PerEntity,
            source: source("SISAL_Source"),
            title: None,
        },
        paired: a.pair(all),
    };
    a.assemble(&meta, &[series]).expect("assembles").graph
}

fn ice_core() -> Graph {
    let meta = DatasetMetadata {
        slug: Slug::new("epica-dome-c").expect("slug"),
        family: Family::IceCore,
        title: "EPICA Dome C".to_owned(),
        description: Some("CH₄ and δ¹⁸O".to_owned()),
        publisher: None,
        license: None,
        location: LocationInfo {
            id: "EpicaDomeC_Site".to_owned(),
            label: "EPICA Dome C".to_owned(),
            geometry: Some(Geometry::Wkt {
                wkt: "POINT(123.35 -75.1)".to_owned(),
            }),
            identified_by: None,
        },
        sample: None,
        campaign: Some(CampaignInfo {
            id: "EPICA_Campaign".to_owned(),
            label: "EPICA drilling".to_owned(),
            time_span: Some("1996-2004".to_owned()),
        }),
        depth_unit: DepthUnit::Metres,
    };
    let mut a = Assembler::new(config());
    let rows: Vec<RawRow> = (0..12_i32)
        .map(|i| {
            let x = f64::from(i);
            RawRow::new(100.0 + x, 1.0 + x * 0.5, 600.0 + (x * 7.0) % 13.0)
        })
        .collect();
    let series = Series {
        info: SeriesInfo {
            measurement: Measurement::Ch4,
            chronology: ChronologyInfo::Named {
                id: "EDC3".to_owned(),
                label: "EDC3".to_owned(),
                description: Some("Ice chronology".to_owned()),
                reference: None,
            },
            source: source("PANGAEA_Source"),
            title: Some("CH₄ series".to_owned()),
        },
        paired: a.pair(rows),
    };
    a.assemble(&meta, &[series]).expect("assembles").graph
}

fn assert_round_trip(g: &Graph, title: &str) {
    let ttl = parse_turtle(&to_turtle(g, title));
    let nt = parse_ntriples(&to_ntriples(g));
    assert_eq!(ttl.triples().count(), g.len(), "{title}: turtle count");
    assert_eq!(nt.triples().count(), g.len(), "{title}: n-triples count");
}

#[test]
fn ice_core_graph_parses() {
    assert_round_trip(&ice_core(), "ice core");
}

#[test]
fn speleothem_graph_parses() {
    assert_round_trip(&speleothem(), "speleothem");
}

#[test]
fn merged_graphs_parse() {
    let desc = CollectionDescription {
        id: "AllSites".to_owned(),
        label: "All sites".to_owned(),
    };
    let ice = ice_core();
    let cave = speleothem();
    let merged = merge([&ice, &cave], &desc).expect("merges");
    assert_eq!(merged.members.len(), 2);
    assert_round_trip(&merged.combined, "combined");
    assert_round_trip(&merged.collection, "collection");
}
