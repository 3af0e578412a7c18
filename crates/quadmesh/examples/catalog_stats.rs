//! Mesh every catalog case and print leaf/vertex/triangle counts.
//!
//! Usage:
//!   cargo run -p quadmesh --example catalog_stats
//!   cargo run -p quadmesh --example catalog_stats -- 2     # min leaf size

use quadmesh::prelude::*;

fn main() {
    let min_leaf_size = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(1.0);
    let cfg = MeshCfg {
        min_leaf_size,
        ..MeshCfg::default()
    };
    for (i, case) in CATALOG.iter().enumerate() {
        let run = case
            .polygons()
            .and_then(|polys| build_mesh(&polys, case.size, cfg));
        match run {
            Ok(run) => {
                let s = run.mesh.stats();
                println!(
                    "[{i}] {:<36} U={:<3} leaves={:<5} V={:<5} T={:<5} steiner={} passes={}",
                    case.name,
                    case.size,
                    s.leaves,
                    s.vertices,
                    s.triangles,
                    s.steiner,
                    run.balance.passes
                );
            }
            Err(e) => eprintln!("[{i}] {}: {e}", case.name),
        }
    }
}
