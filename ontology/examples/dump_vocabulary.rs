//! Loads the geo-lod vocabulary and prints an inventory.
//!
//! Run with: `cargo run --example dump_vocabulary -p geolod-ontology`

use geolod_ontology::{Ontology, SmoothingParams};

fn main() {
    let params = SmoothingParams::default();
    let ontology = Ontology::new(&params);

    println!(
        "geo-lod vocabulary (rolling window {}, Savitzky-Golay window {} order {})",
        params.rolling_window, params.sg_window, params.sg_polyorder
    );
    println!("  Modules:      {}", ontology.modules.len());
    println!("  Classes:      {}", ontology.class_count());
    println!("  Properties:   {}", ontology.property_count());
    println!("  Individuals:  {}", ontology.individual_count());
    println!();

    for module in &ontology.modules {
        let h = &module.header;
        println!(
            "  {:26} {:40} {:>2} classes, {:>2} properties, {:>2} individuals",
            h.file_name,
            h.iri,
            module.classes.len(),
            module.properties.len(),
            module.individuals.len(),
        );
    }

    println!();
    let turtle = geolod_ontology::serializer::turtle::to_turtle(&ontology.modules[0]);
    println!("Core Turtle output ({} bytes)", turtle.len());
}
