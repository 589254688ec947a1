//! Small assembled graphs shared by the validator tests.

use geolod_graph::assembler::{Assembler, Series};
use geolod_graph::family::{DepthUnit, Family, Measurement};
use geolod_graph::geometry::Geometry;
use geolod_graph::ids::Slug;
use geolod_graph::metadata::{
    ChronologyInfo, DatasetMetadata, LocationInfo, SampleInfo, SeriesInfo, SourceInfo,
};
use geolod_graph::series::RawRow;
use geolod_graph::smoothing::SmoothingConfig;
use geolod_graph::Graph;
use geolod_ontology::SmoothingParams;

pub fn smoothing() -> SmoothingConfig {
    SmoothingConfig {
        params: SmoothingParams {
            rolling_window: 3,
            sg_window: 5,
            sg_polyorder: 2,
        },
        ..SmoothingConfig::default()
    }
}

fn source() -> SourceInfo {
    SourceInfo {
        id: "Test_Source".to_owned(),
        label: "Test source".to_owned(),
        title: None,
        creator: None,
        year: Some(2006),
        doi: None,
    }
}

fn metadata(slug: &str, family: Family, location: &str, lon: f64) -> DatasetMetadata {
    DatasetMetadata {
        slug: Slug::new(slug).unwrap(),
        family,
        title: format!("Dataset {slug}"),
        description: None,
        publisher: None,
        license: None,
        location: LocationInfo {
            id: location.to_owned(),
            label: location.to_owned(),
            geometry: Some(Geometry::Point { lon, lat: 45.0 }),
            identified_by: None,
        },
        sample: (family == Family::IceCore).then(|| SampleInfo {
            id: format!("{location}_Core"),
            label: "Core".to_owned(),
        }),
        campaign: None,
        depth_unit: match family {
            Family::IceCore => DepthUnit::Metres,
            Family::Speleothem => DepthUnit::Millimetres,
        },
    }
}

fn rows(n: usize, entity: Option<&str>) -> Vec<RawRow> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            let row = RawRow::new(10.0 + x, 1.0 + x / 2.0, 600.0 + (x * 3.0) % 7.0);
            match entity {
                Some(e) => row.with_entity(e),
                None => row,
            }
        })
        .collect()
}

pub fn ice_core_graph_with(a: &mut Assembler, slug: &str, location: &str, lon: f64) -> Graph {
    let series = Series {
        info: SeriesInfo {
            measurement: Measurement::Ch4,
            chronology: ChronologyInfo::Named {
                id: "EDC2_Chronology".to_owned(),
                label: "EDC2".to_owned(),
                description: None,
                reference: None,
            },
            source: source(),
            title: None,
        },
        paired: a.pair(rows(8, None)),
    };
    a.assemble(&metadata(slug, Family::IceCore, location, lon), &[series])
        .unwrap()
        .graph
}

pub fn ice_core_graph() -> Graph {
    ice_core_graph_with(&mut Assembler::new(smoothing()), "edc", "Site_EDC", 123.35)
}

pub fn speleothem_graph() -> Graph {
    let mut a = Assembler::new(smoothing());
    let mut input = rows(6, Some("227"));
    input.extend(rows(3, Some("228")));
    let series = Series {
        info: SeriesInfo {
            measurement: Measurement::Delta18O,
            chronology: ChronologyInfo::PerEntity,
            source: source(),
            title: None,
        },
        paired: a.pair(input),
    };
    a.assemble(
        &metadata("cave-1", Family::Speleothem, "Cave_1", 10.24),
        &[series],
    )
    .unwrap()
    .graph
}
