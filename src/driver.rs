use std::io;
use std::io::Write;
use std::mem;

use tracing::debug;
use tracing::trace;

use crate::render::Glyphs;
use crate::rule::Rule;
use crate::world::World;

/// Number of cells in the world. Also the number of generations printed.
pub const WORLD_LENGTH: usize = 80;

/// Wolfram number of the rule the world evolves under.
pub const RULE_NUMBER: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// World width, and number of generations to print
    pub length: usize,

    /// Wolfram rule number
    pub rule: u8,

    pub glyphs: Glyphs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: WORLD_LENGTH,
            rule: RULE_NUMBER,
            glyphs: Glyphs::default(),
        }
    }
}

/// Every generation of a world, starting with the world itself. Never ends on its own.
#[derive(Debug, Clone)]
pub struct Generations {
    rule: Rule,
    world: World,
}

impl Generations {
    pub fn new(rule: Rule, world: World) -> Self {
        Self { rule, world }
    }
}

impl Iterator for Generations {
    type Item = World;

    fn next(&mut self) -> Option<World> {
        let next = self.world.next(&self.rule);

        Some(mem::replace(&mut self.world, next))
    }
}

/// Print `config.length` generations of a centered world to `out`, one line each.
///
/// The iteration count is fixed. Nothing checks whether the world has settled.
pub fn run<W: Write>(config: &Config, out: &mut W) -> io::Result<()> {
    let rule = Rule::new(config.rule);
    debug!(%rule, table = ?rule.table(), "Decoded rule");

    let world = World::centered(config.length);
    debug!(length = config.length, "Starting run");

    let generations = Generations::new(rule, world).take(config.length);

    for (i, world) in generations.enumerate() {
        trace!(generation = i, live = world.live_cells());

        config.glyphs.write_line(&world, out)?;
    }

    out.flush()?;
    debug!("Run finished");

    Ok(())
}
