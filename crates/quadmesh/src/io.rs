//! Polygon text input.
//!
//! Format: one vertex per line, two whitespace-separated numbers `x y`, in
//! boundary order; the ring closes implicitly. Blank lines and lines starting
//! with `#` are skipped. Any other line must parse or the whole file is
//! rejected.

use std::path::Path;

use crate::geom2::{Point, Polygon};
use crate::MeshError;

/// Parse one polygon from text.
pub fn parse_polygon(text: &str) -> Result<Polygon, MeshError> {
    let mut vertices = Vec::new();
    for (k, raw) in text.lines().enumerate() {
        let line_no = k + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[xs, ys] = fields.as_slice() else {
            return Err(MeshError::parse(
                line_no,
                format!("expected 2 coordinates, found {}", fields.len()),
            ));
        };
        let x = parse_coord(xs, line_no)?;
        let y = parse_coord(ys, line_no)?;
        vertices.push(Point::new(x, y));
    }
    Polygon::new(vertices)
}

/// Read and parse one polygon file.
pub fn read_polygon<P: AsRef<Path>>(path: P) -> Result<Polygon, MeshError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| MeshError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let poly = parse_polygon(&text)?;
    tracing::debug!(path = %path.display(), vertices = poly.len(), "polygon_read");
    Ok(poly)
}

/// Read several polygon files; fails on the first bad one.
pub fn read_polygons<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Polygon>, MeshError> {
    paths.iter().map(read_polygon).collect()
}

fn parse_coord(s: &str, line: usize) -> Result<f64, MeshError> {
    let v: f64 = s
        .parse()
        .map_err(|_| MeshError::parse(line, format!("not a number: {s:?}")))?;
    if !v.is_finite() {
        return Err(MeshError::parse(line, format!("non-finite coordinate {s:?}")));
    }
    Ok(v)
}
