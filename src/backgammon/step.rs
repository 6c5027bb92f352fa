use std::fmt::Display;

use crate::backgammon::Position;

/// One atomic checker movement. Covers normal moves, re-entry from the bar
/// (`from == Bar`), bearing off (`to == Off`) and hits (`captura`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveStep {
    pub from: Position,
    pub to: Position,
    pub die: u8,
    pub captura: bool,
}

impl MoveStep {
    pub fn new(from: Position, to: Position, die: u8, captura: bool) -> Self {
        MoveStep { from, to, die, captura }
    }

    pub fn is_reentry(&self) -> bool {
        self.from == Position::Bar
    }

    pub fn is_bear_off(&self) -> bool {
        self.to == Position::Off
    }
}

impl Display for MoveStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.die)?;
        if self.captura {
            write!(f, "*")?;
        }
        Ok(())
    }
}
