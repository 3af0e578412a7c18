use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use quadmesh::prelude::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

use export::Format;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "quadmesh")]
#[command(about = "Adaptive quadtree triangulation of polygonal domains")]
struct Cmd {
    /// Log library debug events (refinement, balancing, export)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// List the built-in cases with their menu index and domain size
    Shapes,
    /// Mesh a catalog case or polygon files and write the mesh
    Mesh {
        /// Catalog index; prompts on stdin when neither --shape nor --input is given
        #[arg(long, conflicts_with = "input", allow_negative_numbers = true)]
        shape: Option<i64>,
        /// Polygon files, one vertex `x y` per line
        #[arg(long, num_args = 1..)]
        input: Vec<PathBuf>,
        /// Domain side U; defaults to the case size (16 for files)
        #[arg(long)]
        size: Option<u32>,
        #[command(flatten)]
        tree: TreeArgs,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Mesh a reproducible random star-shaped polygon
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 16)]
        size: u32,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[command(flatten)]
        tree: TreeArgs,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Clone, Copy)]
struct TreeArgs {
    /// Boundary refinement stops at this leaf width
    #[arg(long, default_value_t = quadmesh::cfg::DEFAULT_MIN_LEAF_SIZE)]
    min_size: f64,
    /// Depth guard for refinement and balancing
    #[arg(long, default_value_t = quadmesh::cfg::DEFAULT_MAX_DEPTH)]
    max_depth: u32,
}

impl TreeArgs {
    fn cfg(self) -> MeshCfg {
        MeshCfg {
            min_leaf_size: self.min_size,
            max_depth: self.max_depth,
            ..MeshCfg::default()
        }
    }
}

/// Where the polygons of a run come from.
enum Source {
    Case(&'static Case),
    Files(Vec<PathBuf>),
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Shapes => shapes(),
        Action::Mesh {
            shape,
            input,
            size,
            tree,
            out,
            format,
        } => {
            let source = match select_source(shape, input)? {
                Some(source) => source,
                None => return Ok(()),
            };
            mesh(source, size, tree.cfg(), out, format)
        }
        Action::Random {
            seed,
            index,
            size,
            vertices,
            tree,
            out,
            format,
        } => random(seed, index, size, vertices, tree.cfg(), out, format),
        Action::Report => report(),
    }
}

fn shapes() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    print_menu(&mut stdout)?;
    Ok(())
}

fn print_menu(w: &mut impl Write) -> std::io::Result<()> {
    for (i, case) in CATALOG.iter().enumerate() {
        writeln!(w, "{:>2} : {} (U={})", i, case.name, case.size)?;
    }
    Ok(())
}

/// Resolve the polygon source; `None` means the selection was invalid and
/// the user has been told so.
fn select_source(shape: Option<i64>, input: Vec<PathBuf>) -> Result<Option<Source>> {
    if !input.is_empty() {
        return Ok(Some(Source::Files(input)));
    }
    let index = match shape {
        Some(i) => Some(i),
        None => prompt_index(std::io::stdin().lock(), std::io::stdout().lock())?,
    };
    match index.and_then(|i| usize::try_from(i).ok()).and_then(Case::by_index) {
        Some(case) => Ok(Some(Source::Case(case))),
        None => {
            println!("Please enter a valid input (0..={})", CATALOG.len() - 1);
            Ok(None)
        }
    }
}

/// Interactive menu; returns `None` for a non-numeric answer.
fn prompt_index(mut input: impl BufRead, mut out: impl Write) -> Result<Option<i64>> {
    writeln!(out, "Please choose your input:")?;
    print_menu(&mut out)?;
    write!(out, "Choice: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading menu choice")?;
    Ok(line.trim().parse().ok())
}

fn load(source: &Source) -> Result<(String, Vec<Polygon>, u32)> {
    match source {
        Source::Case(case) => Ok((case.name.to_string(), case.polygons()?, case.size)),
        Source::Files(paths) => {
            let polys = quadmesh::io::read_polygons(paths).context("invalid input")?;
            let label = paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(",");
            Ok((label, polys, 16))
        }
    }
}

fn mesh(source: Source, size: Option<u32>, cfg: MeshCfg, out: PathBuf, format: Format) -> Result<()> {
    let (label, polygons, default_size) = load(&source)?;
    let size = size.unwrap_or(default_size);
    tracing::info!(source = %label, size, polygons = polygons.len(), "mesh");
    let run = build_mesh(&polygons, size, cfg).context("meshing failed")?;
    let params = serde_json::json!({
        "source": label,
        "size": size,
        "min_leaf_size": cfg.min_leaf_size,
        "max_depth": cfg.max_depth,
        "format": format.as_str(),
    });
    finish(&run, size, &out, format, params)
}

fn random(
    seed: u64,
    index: u64,
    size: u32,
    vertices: usize,
    cfg: MeshCfg,
    out: PathBuf,
    format: Format,
) -> Result<()> {
    if size == 0 {
        bail!("size must be positive");
    }
    let star = StarCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..StarCfg::centered(size)
    };
    let poly = draw_polygon_star(star, ReplayToken { seed, index });
    tracing::info!(seed, index, size, vertices = poly.len(), "random");
    let run = build_mesh(&[poly], size, cfg).context("meshing failed")?;
    let params = serde_json::json!({
        "source": "random_star",
        "seed": seed,
        "index": index,
        "vertices": vertices,
        "size": size,
        "min_leaf_size": cfg.min_leaf_size,
        "max_depth": cfg.max_depth,
        "format": format.as_str(),
    });
    finish(&run, size, &out, format, params)
}

/// Write the mesh and its provenance sidecar.
fn finish(
    run: &MeshRun,
    size: u32,
    out: &std::path::Path,
    format: Format,
    params: serde_json::Value,
) -> Result<()> {
    let stats = run.mesh.stats();
    if run.tree.under_resolved() > 0 {
        tracing::info!(
            leaves = run.tree.under_resolved(),
            min_leaf_size = run.tree.cfg().min_leaf_size,
            "boundary not resolved below the minimum leaf size"
        );
    }
    let written = export::write_mesh(&run.mesh, size, out, format)?;
    let payload = Payload::new(params).with_stats(serde_json::json!({
        "leaves": stats.leaves,
        "vertices": stats.vertices,
        "triangles": stats.triangles,
        "interior_intersected": stats.interior_intersected,
        "corner_only": stats.corner_only,
        "steiner": stats.steiner,
        "under_resolved": run.tree.under_resolved(),
        "balance_passes": run.balance.passes,
        "balance_subdivisions": run.balance.subdivisions,
    }));
    let prov = provenance::write_sidecar(out, &written, payload)?;
    tracing::info!(
        leaves = stats.leaves,
        vertices = stats.vertices,
        triangles = stats.triangles,
        steiner = stats.steiner,
        provenance = %prov.display(),
        "mesh_written"
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "quadmesh": quadmesh::VERSION,
        "cases": CATALOG.iter().map(|c| c.name).collect::<Vec<_>>(),
        "defaults": {
            "min_leaf_size": quadmesh::cfg::DEFAULT_MIN_LEAF_SIZE,
            "max_depth": quadmesh::cfg::DEFAULT_MAX_DEPTH,
            "coarse_divisor": quadmesh::cfg::DEFAULT_COARSE_DIVISOR,
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
