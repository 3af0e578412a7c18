use anyhow::{Context, Result};
use polars::prelude::*;
use quadmesh::{CellKind, Mesh};
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Output encoding for a mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One JSON document (vertices, triangles, cells)
    Json,
    /// `<stem>_vertices.csv` and `<stem>_triangles.csv`
    Csv,
    /// `<stem>_vertices.parquet` and `<stem>_triangles.parquet`
    Parquet,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
            Format::Parquet => "parquet",
        }
    }
}

#[derive(Serialize)]
struct MeshDoc<'a> {
    size: u32,
    vertices: Vec<[f64; 2]>,
    triangles: &'a [[usize; 3]],
    cells: Vec<CellDoc>,
}

#[derive(Serialize)]
struct CellDoc {
    x0: f64,
    y0: f64,
    size: f64,
    kind: &'static str,
    first_triangle: usize,
}

fn kind_str(kind: CellKind) -> &'static str {
    match kind {
        CellKind::InteriorIntersected => "interior_intersected",
        CellKind::CornerOnly => "corner_only",
        CellKind::Steiner => "steiner",
    }
}

/// Write `mesh` under `out` and return every file written.
pub fn write_mesh(mesh: &Mesh, size: u32, out: &Path, format: Format) -> Result<Vec<PathBuf>> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let written = match format {
        Format::Json => {
            write_json(mesh, size, out)?;
            vec![out.to_path_buf()]
        }
        Format::Csv => write_tables(mesh, out, TableFormat::Csv)?,
        Format::Parquet => write_tables(mesh, out, TableFormat::Parquet)?,
    };
    tracing::debug!(files = written.len(), format = format.as_str(), "mesh_exported");
    Ok(written)
}

fn write_json(mesh: &Mesh, size: u32, out: &Path) -> Result<()> {
    let doc = MeshDoc {
        size,
        vertices: mesh.vertices.iter().map(|p| [p.x, p.y]).collect(),
        triangles: &mesh.triangles,
        cells: mesh
            .cells
            .iter()
            .map(|c| CellDoc {
                x0: c.square.x0,
                y0: c.square.y0,
                size: c.square.size,
                kind: kind_str(c.kind),
                first_triangle: c.first_triangle,
            })
            .collect(),
    };
    fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))
}

/// Vertex table `(id, x, y)` and triangle table `(a, b, c, cell, kind)`.
fn tables(mesh: &Mesh) -> PolarsResult<(DataFrame, DataFrame)> {
    let ids: Vec<u64> = (0..mesh.vertices.len() as u64).collect();
    let xs: Vec<f64> = mesh.vertices.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = mesh.vertices.iter().map(|p| p.y).collect();
    let vertices = df!("id" => ids, "x" => xs, "y" => ys)?;

    let n = mesh.triangles.len();
    let mut cols: [Vec<u64>; 3] = [
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
    ];
    let mut cell_ids: Vec<u64> = Vec::with_capacity(n);
    let mut kinds: Vec<&str> = Vec::with_capacity(n);
    for (ci, cell) in mesh.cells.iter().enumerate() {
        for t in mesh.cell_triangles(cell) {
            for (col, &v) in cols.iter_mut().zip(t) {
                col.push(v as u64);
            }
            cell_ids.push(ci as u64);
            kinds.push(kind_str(cell.kind));
        }
    }
    let [a, b, c] = cols;
    let triangles = df!("a" => a, "b" => b, "c" => c, "cell" => cell_ids, "kind" => kinds)?;
    Ok((vertices, triangles))
}

/// Encodings that split the mesh into a vertex and a triangle table.
#[derive(Clone, Copy, Debug)]
enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    fn ext(self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Parquet => "parquet",
        }
    }
}

/// Both tables are staged under `.tmp` names and only renamed into place once
/// both writes succeeded; on failure the staged files are removed.
fn write_tables(mesh: &Mesh, out: &Path, format: TableFormat) -> Result<Vec<PathBuf>> {
    let (mut vertices, mut triangles) = tables(mesh)?;
    let targets = [
        sibling(out, "vertices", format.ext()),
        sibling(out, "triangles", format.ext()),
    ];
    let staged = [staged_path(&targets[0]), staged_path(&targets[1])];
    let written = write_table(&mut vertices, &staged[0], format)
        .and_then(|()| write_table(&mut triangles, &staged[1], format));
    if let Err(err) = written {
        for path in &staged {
            // Missing files are expected here.
            let _ = fs::remove_file(path);
        }
        return Err(err);
    }
    for (from, to) in staged.iter().zip(&targets) {
        fs::rename(from, to)
            .with_context(|| format!("moving {} to {}", from.display(), to.display()))?;
    }
    Ok(targets.to_vec())
}

fn write_table(df: &mut DataFrame, path: &Path, format: TableFormat) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        TableFormat::Csv => CsvWriter::new(&mut file).include_header(true).finish(df)?,
        TableFormat::Parquet => {
            ParquetWriter::new(&mut file).finish(df)?;
        }
    }
    Ok(())
}

/// `dir/mesh_vertices.csv` → `dir/mesh_vertices.csv.tmp`.
fn staged_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

/// `dir/mesh.csv` → `dir/mesh_<part>.<ext>`.
fn sibling(out: &Path, part: &str, ext: &str) -> PathBuf {
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".to_string());
    out.with_file_name(format!("{stem}_{part}.{ext}"))
}
