use std::fmt;
use std::io;
use std::io::Write;

use crate::world::World;

pub const ON_GLYPH: char = '.';
pub const OFF_GLYPH: char = ' ';

/// Characters used to draw on and off cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub on: char,
    pub off: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            on: ON_GLYPH,
            off: OFF_GLYPH,
        }
    }
}

impl Glyphs {
    pub const fn new(on: char, off: char) -> Self {
        Self { on, off }
    }

    pub const fn glyph(&self, cell: bool) -> char {
        if cell { self.on } else { self.off }
    }

    /// Draw `world` as a single line, one character per cell. No newline is added.
    pub fn render(&self, world: &World) -> String {
        let mut line = String::with_capacity(world.len());

        for &cell in world.cells() {
            line.push(self.glyph(cell));
        }

        line
    }

    /// Write `world` to `out` as one newline terminated line.
    pub fn write_line<W: Write>(&self, world: &World, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.render(world))
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Glyphs::default().render(self))
    }
}
