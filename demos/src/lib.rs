//! Shared demo driver: load a level, build its flow field, route every
//! spawn to the base, then exercise tower placement and a rebuild.

use std::error::Error;
use std::io::Write;

use rand::{Rng, SeedableRng};
use sinkflow_core::Point;
use sinkflow_level::{Layout, Placement};
use sinkflow_paths::{Navigator, PathError};

pub const DEFAULT_LEVEL: &str = "
###############
S.......#.....#
#######.#.###.#
#.......#...#.#
#.#########.#.#
#.....X.....#.S
###############
";

/// Options for [`run`].
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub level: String,
    /// Seed for path tie-breaking; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            seed: None,
        }
    }
}

/// Run the demo, writing a plain-text report to `out`.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let mut rng = match config.seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_rng(&mut rand::rng()),
    };

    let layout = Layout::parse(&config.level)?;
    let mut nav = Navigator::with_markers(layout.marker_set().clone());
    let field = nav.build()?;
    writeln!(
        out,
        "level {}x{}: {} path cells, base at {}, {} reachable",
        layout.size().x,
        layout.size().y,
        field.len(),
        field.sink(),
        field.reachable_count()
    )?;
    for p in field.unreachable() {
        writeln!(out, "  warning: {p} cannot reach the base")?;
    }

    route_spawns(&nav, layout.spawns(), &mut rng, out)?;

    let mut placement = Placement::new(&layout);
    if let Some(&cell) = placement.free_cells().first() {
        placement.place(&nav, cell)?;
        writeln!(out, "tower placed at {cell} ({} towers)", placement.len())?;
    }
    if let Some(&cell) = layout.markers().iter().find(|&&p| p != layout.sink()) {
        if let Err(err) = placement.can_place(&nav, cell) {
            writeln!(out, "refused tower at {cell}: {err}")?;
        }
    }

    // Close the first spawn's entrance and rebuild: that spawn is cut off.
    if let Some(&spawn) = layout.spawns().first() {
        let field = nav.snapshot().ok_or(PathError::NotBuilt)?;
        if let Some(&next) = field.next_steps(spawn).first() {
            nav.remove_marker(next);
            let rebuilt = nav.build()?;
            writeln!(
                out,
                "closed {next}; generation {}, {} reachable",
                nav.generation(),
                rebuilt.reachable_count()
            )?;
            route_spawns(&nav, layout.spawns(), &mut rng, out)?;
        }
    }
    Ok(())
}

fn route_spawns(
    nav: &Navigator,
    spawns: &[Point],
    rng: &mut impl Rng,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    for &spawn in spawns {
        match nav.path(spawn, rng) {
            Ok(path) => {
                let cells: Vec<String> = path.iter().map(Point::to_string).collect();
                writeln!(out, "spawn {spawn}: {} steps: {}", path.len() - 1, cells.join(" "))?;
            }
            Err(err) => writeln!(out, "spawn {spawn}: {err}")?,
        }
    }
    Ok(())
}
