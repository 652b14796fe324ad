//! airroutes — smallest end-to-end example for the kmz export toolkit.
//!
//! Builds a five-airport route graph (one airport deliberately missing its
//! coordinates), exports it to `airroutes.kmz`, and prints the outcome.
//! Open the archive in Google Earth: icons scale with airport size, route
//! lines scale with flights per day.

use std::fs::File;

use anyhow::Result;

use kmz_core::{ColumnRole, Graph, GraphBuilder, Rgba};
use kmz_export::{ExportConfig, ExportOutcome, KmzExporter, NoopTicket, SingleIconRenderer};

const OUTPUT: &str = "airroutes.kmz";

// 1×1 placeholder marker.  A real host renders one icon per node from its
// preview pipeline.
const MARKER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d,
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1f, 0x15, 0xc4, 0x89, 0x00, 0x00, 0x00,
    0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64, 0x60, 0xf8, 0x5f,
    0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

fn build_graph() -> Graph {
    let mut b = GraphBuilder::new();
    let lat = b.add_node_column("latitude", ColumnRole::Latitude);
    let lon = b.add_node_column("longitude", ColumnRole::Longitude);
    let city = b.add_node_column("city", ColumnRole::Generic);
    let carrier = b.add_edge_column("carrier", ColumnRole::Generic);

    // Node size ~ annual passengers (millions).
    let airports = [
        ("LAX", 33.9416, -118.4085, 75.0, "Los Angeles"),
        ("JFK", 40.6413, -73.7781, 62.0, "New York"),
        ("ORD", 41.9742, -87.9073, 73.0, "Chicago"),
        ("LHR", 51.4700, -0.4543, 79.0, "London"),
    ];

    let mut ids = Vec::new();
    for (code, latitude, longitude, size, town) in airports {
        let id = b.add_node(Some(code), size, Rgba::opaque(0x1f, 0x6f, 0xc4));
        b.set_node_attr(id, lat, latitude);
        b.set_node_attr(id, lon, longitude);
        b.set_node_attr(id, city, town);
        ids.push(id);
    }

    // A planned airport with no coordinates yet — classified invalid and
    // skipped, together with any route touching it.
    let planned = b.add_node(Some("NEW"), 10.0, Rgba::opaque(0x90, 0x90, 0x90));
    b.set_node_attr(planned, city, "TBD");

    // Route weight ~ flights per day.
    let routes = [
        (0usize, 1usize, 31.0, "Transcon Air"),
        (0, 2, 24.0, "Transcon Air"),
        (1, 3, 18.0, "Atlantic Blue"),
        (2, 3, 9.0, "Atlantic Blue"),
    ];
    for (from, to, weight, airline) in routes {
        let e = b.add_edge(Some(ids[from]), Some(ids[to]), weight);
        b.set_edge_attr(e, carrier, airline);
    }
    b.add_edge(Some(ids[0]), Some(planned), 1.0);

    b.build()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let graph = build_graph();
    let exporter = KmzExporter::new(ExportConfig::default());
    let mut renderer = SingleIconRenderer::new(MARKER_PNG.to_vec());
    let out = File::create(OUTPUT)?;

    match exporter.export(&graph, &mut renderer, &mut NoopTicket, out)? {
        ExportOutcome::Completed(summary) => {
            println!(
                "wrote {OUTPUT}: {} placemarks, {} routes ({} skipped)",
                summary.node_placemarks, summary.edge_placemarks, summary.skipped_edges
            );
        }
        ExportOutcome::CompletedWithWarning { summary, invalid_percent } => {
            println!(
                "wrote {OUTPUT} with {} placemarks — {invalid_percent}% of nodes had no coordinates",
                summary.node_placemarks
            );
        }
        ExportOutcome::Cancelled => println!("export cancelled"),
    }

    Ok(())
}
