use vessel_footprint::{
    ElementRegistry, FootprintFormatter, FootprintService, GeoPoint, OutputFormat, VesselOffsets,
};

fn main() {
    let service = FootprintService::new();

    // A container vessel moored in Rotterdam, antenna mounted aft of
    // midships and slightly to starboard.
    let antenna = GeoPoint::new(51.9496, 4.1453);
    let heading_deg = 67.5;
    let offsets = VesselOffsets::new(220.0, 80.0, 18.0, 24.0);

    let footprint = match service.compute(antenna, heading_deg, offsets) {
        Ok(footprint) => footprint,
        Err(e) => {
            eprintln!("Input rejected: {}", e);
            std::process::exit(1);
        }
    };

    let formatter = FootprintFormatter::with_precision(service.config().output_precision);
    match formatter.format(&footprint, OutputFormat::Text) {
        Ok(text) => print!("{}", text),
        Err(e) => eprintln!("Formatting failed: {}", e),
    }
    match formatter.format(&footprint, OutputFormat::Json) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Formatting failed: {}", e),
    }

    let mut registry = ElementRegistry::new();
    let (polygon_id, marker_id) = registry.insert_footprint(&footprint);
    println!(
        "Registered hull polygon #{} and antenna marker #{} ({} elements total)",
        polygon_id,
        marker_id,
        registry.len()
    );
}
