//! Command-line interface for extracting, merging and querying tile rules

use crate::adjacency::collector::collect;
use crate::adjacency::table::AdjacencyTable;
use crate::io::configuration::{
    DEFAULT_LABEL_INDEX, DEFAULT_MIN_COUNT, DEFAULT_NEIGHBOR_LIMIT, DEFAULT_RULESET_FILE,
    MAP_FILE_EXTENSION,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::map::load_grid;
use crate::io::progress::ProgressManager;
use crate::io::storage::{load_document, load_document_or_default, save_document};
use crate::query::neighborhood::neighborhood;
use crate::query::neighbors::top_k_neighbors;
use crate::ruleset::builder::{build, merge_into_document_with_labels};
use crate::ruleset::labels::LabelLookup;
use crate::ruleset::ranked::Ruleset;
use crate::tile::direction::Direction;
use crate::tile::key::{TileKey, parse_key};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "tilerules")]
#[command(
    author,
    version,
    about = "Extract tile adjacency rules from example maps and suggest neighbors"
)]
/// Command-line arguments for the rule authoring tool
pub struct Cli {
    /// Suppress progress output and informational logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the rule authoring tool
#[derive(Subcommand)]
pub enum Command {
    /// Build a fresh ruleset from a map file or a directory of map files
    Extract {
        /// Map file or directory of map files
        #[arg(value_name = "TARGET")]
        target: PathBuf,

        /// Minimum occurrence count to keep a neighbor
        #[arg(short, long, default_value_t = DEFAULT_MIN_COUNT)]
        min_count: u32,

        /// Ruleset document to write
        #[arg(short, long, default_value = DEFAULT_RULESET_FILE)]
        output: PathBuf,

        /// Tile label index
        #[arg(short, long, default_value = DEFAULT_LABEL_INDEX)]
        labels: PathBuf,
    },

    /// Merge the pairs observed in one map into an existing ruleset
    Merge {
        /// Map file produced by an editing session
        #[arg(value_name = "MAP")]
        map: PathBuf,

        /// Ruleset document to update
        #[arg(short, long, default_value = DEFAULT_RULESET_FILE)]
        ruleset: PathBuf,

        /// Tile label index
        #[arg(short, long, default_value = DEFAULT_LABEL_INDEX)]
        labels: PathBuf,
    },

    /// Show the recommended 3x3 neighborhood and ranked neighbors of a tile
    Neighbors {
        /// Tile key such as `17` or `170:HV`
        #[arg(value_name = "TILE_KEY", value_parser = parse_tile_key)]
        tile: TileKey,

        /// Ruleset document to read
        #[arg(short, long, default_value = DEFAULT_RULESET_FILE)]
        ruleset: PathBuf,

        /// Tile label index
        #[arg(short, long, default_value = DEFAULT_LABEL_INDEX)]
        labels: PathBuf,

        /// Ranked neighbors listed per direction
        #[arg(short = 'k', long, default_value_t = DEFAULT_NEIGHBOR_LIMIT)]
        limit: usize,
    },
}

fn parse_tile_key(text: &str) -> std::result::Result<TileKey, String> {
    parse_key(text).map_err(|err| err.to_string())
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if reading inputs, validating data or writing the
    /// ruleset fails
    pub fn run(self) -> Result<()> {
        let show_progress = self.should_show_progress();
        match self.command {
            Command::Extract {
                target,
                min_count,
                output,
                labels,
            } => extract(&target, min_count, &output, &labels, show_progress),
            Command::Merge {
                map,
                ruleset,
                labels,
            } => merge_map(&map, &ruleset, &labels),
            Command::Neighbors {
                tile,
                ruleset,
                labels,
                limit,
            } => show_neighbors(tile, &ruleset, &labels, limit),
        }
    }
}

/// Collect map files named by `target`: the file itself or the sorted map files of a directory
///
/// # Errors
///
/// Returns an error if the target is neither a map file nor a readable directory
pub fn collect_map_files(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        if has_map_extension(target) {
            Ok(vec![target.to_path_buf()])
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"map file must have a .json extension",
            ))
        }
    } else if target.is_dir() {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(target).with_path(target, "list maps")? {
            let path = entry.with_path(target, "list maps")?.path();
            if path.is_file() && has_map_extension(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    } else {
        Err(invalid_parameter(
            "target",
            &target.display(),
            &"target must be a map file or directory",
        ))
    }
}

fn has_map_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(MAP_FILE_EXTENSION)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

// Allow print for the final summary shown to the user
#[allow(clippy::print_stdout)]
fn extract(
    target: &Path,
    min_count: u32,
    output: &Path,
    labels_path: &Path,
    show_progress: bool,
) -> Result<()> {
    let files = collect_map_files(target)?;
    if files.is_empty() {
        warn!(target = %target.display(), "no map files found");
        return Ok(());
    }

    let mut progress = show_progress.then(ProgressManager::new);
    if let Some(ref mut pm) = progress {
        pm.initialize(files.len());
    }

    let mut table = AdjacencyTable::new();
    for (index, file) in files.iter().enumerate() {
        if let Some(ref mut pm) = progress {
            pm.start_file(index, file);
        }
        let grid = load_grid(file)?;
        let recorded = collect(&grid, &mut table);
        info!(
            map = %file.display(),
            width = grid.width(),
            height = grid.height(),
            recorded,
            "collected map"
        );
        if let Some(ref mut pm) = progress {
            pm.complete_file(index, recorded);
        }
    }

    if let Some(ref pm) = progress {
        pm.finish();
    }

    let labels = LabelLookup::load(labels_path)?;
    let mut document = build(&table, min_count, &labels);
    document.metadata.source_maps = files.iter().map(|file| file_name(file)).collect();
    save_document(output, &document)?;

    println!("Unique tiles observed: {}", document.metadata.unique_tiles_observed);
    println!("Total adjacency pairs: {}", document.metadata.total_adjacency_pairs);
    println!("Output: {}", output.display());
    Ok(())
}

// Allow print for the merge summary shown to the user
#[allow(clippy::print_stdout)]
fn merge_map(map: &Path, ruleset_path: &Path, labels_path: &Path) -> Result<()> {
    let grid = load_grid(map)?;
    let mut observations = AdjacencyTable::new();
    let recorded = collect(&grid, &mut observations);

    if recorded == 0 {
        warn!(map = %map.display(), "no adjacency pairs found, ruleset left unchanged");
        println!(
            "No adjacency pairs found in {}. Place at least two non-background tiles next to each other.",
            map.display()
        );
        return Ok(());
    }

    let existing = load_document_or_default(ruleset_path)?;
    let labels = LabelLookup::load(labels_path)?;
    let document = merge_into_document_with_labels(existing, observations, &labels);
    save_document(ruleset_path, &document)?;

    println!(
        "Added {recorded} adjacency pairs from {}. Saved to {}",
        map.display(),
        ruleset_path.display()
    );
    Ok(())
}

// Allow print for the neighbor report
#[allow(clippy::print_stdout)]
fn show_neighbors(tile: TileKey, ruleset_path: &Path, labels_path: &Path, limit: usize) -> Result<()> {
    let document = load_document(ruleset_path)?;
    let labels = LabelLookup::load(labels_path)?;
    let ruleset = &document.adjacency;

    if !ruleset.contains(&tile) {
        println!("No adjacency data for {}", labels.display_label(&tile));
        return Ok(());
    }

    for line in render_neighborhood(ruleset, &tile, &labels) {
        println!("{line}");
    }
    println!();
    for line in render_ranked(ruleset, &tile, &labels, limit) {
        println!("{line}");
    }
    Ok(())
}

/// Format the 3x3 neighborhood as three text rows, `?` marking unresolved cells
pub fn render_neighborhood(ruleset: &Ruleset, tile: &TileKey, labels: &LabelLookup) -> Vec<String> {
    let recommended = neighborhood(ruleset, tile);
    let names: Vec<Vec<String>> = recommended
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map_or_else(|| "?".to_string(), |key| labels.display_label(&key)))
                .collect()
        })
        .collect();
    let width = names.iter().flatten().map(String::len).max().unwrap_or(1);

    names
        .iter()
        .map(|row| {
            row.iter()
                .map(|name| format!("[{name:^width$}]"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Format the top `limit` neighbors per direction as `Direction: name (count), ...`
pub fn render_ranked(
    ruleset: &Ruleset,
    tile: &TileKey,
    labels: &LabelLookup,
    limit: usize,
) -> Vec<String> {
    [Direction::Top, Direction::Right, Direction::Bottom, Direction::Left]
        .into_iter()
        .filter_map(|direction| {
            let ranked = top_k_neighbors(ruleset, tile, direction, limit);
            if ranked.is_empty() {
                return None;
            }
            let entries = ranked
                .iter()
                .map(|neighbor| {
                    format!("{} ({})", labels.display_label(&neighbor.key), neighbor.count)
                })
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("{direction}: {entries}"))
        })
        .collect()
}
