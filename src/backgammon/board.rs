use std::fmt::Display;

use hashbrown::HashSet;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use crate::{
    backgammon::{Color, Dice, MoveOption, MoveStep, Position},
    error::BoardError,
};

pub const CHECKERS_PER_COLOR: u8 = 15;

/// Backgammon board in absolute numbering. `points[i]` holds point `i + 1`;
/// positive counts are White checkers, negative counts are Black checkers,
/// so a point can never hold both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    points: [i8; 24],
    bar: [u8; 2],
    off: [u8; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a new board with the default starting position.
    pub fn new() -> Self {
        Board {
            //       1  2  3  4  5   6  7   8  9 10 11 12  13 14 15 16 17 18 19 20 21 22 23  24
            points: [2, 0, 0, 0, 0, -5, 0, -3, 0, 0, 0, 5, -5, 0, 0, 0, 3, 0, 5, 0, 0, 0, 0, -2],
            bar: [0, 0],
            off: [0, 0],
        }
    }

    /// Creates an empty board with no checkers on it.
    pub fn empty() -> Self {
        Board { points: [0; 24], bar: [0, 0], off: [0, 0] }
    }

    fn index(point: u8) -> usize {
        assert!((1..=24).contains(&point), "point {point} out of range 1..=24");
        point as usize - 1
    }

    /// Count and owner of the checkers on `point`. Panics unless `point` is
    /// in 1..=24; the bar and borne-off checkers have their own accessors.
    pub fn checkers_at(&self, point: u8) -> (u8, Option<Color>) {
        let value = self.points[Self::index(point)];
        match value.signum() {
            0 => (0, None),
            1 => (value.unsigned_abs(), Some(Color::White)),
            _ => (value.unsigned_abs(), Some(Color::Black)),
        }
    }

    /// Number of `color` checkers on `point`, zero if the point is empty or
    /// held by the other color.
    pub fn count_of(&self, point: u8, color: Color) -> u8 {
        match self.checkers_at(point) {
            (count, Some(owner)) if owner == color => count,
            _ => 0,
        }
    }

    /// Overwrites `point` (1..=24) with `count` checkers of `color`.
    pub fn set_point(&mut self, point: u8, color: Color, count: u8) {
        self.points[Self::index(point)] = color.sign() * count as i8;
    }

    pub fn with_point(mut self, point: u8, color: Color, count: u8) -> Self {
        self.set_point(point, color, count);
        self
    }

    pub fn with_bar(mut self, color: Color, count: u8) -> Self {
        self.bar[color.index()] = count;
        self
    }

    pub fn with_off(mut self, color: Color, count: u8) -> Self {
        self.off[color.index()] = count;
        self
    }

    pub fn bar(&self, color: Color) -> u8 {
        self.bar[color.index()]
    }

    /// Checkers of `color` already borne off.
    pub fn checkers_fuera(&self, color: Color) -> u8 {
        self.off[color.index()]
    }

    pub fn total_checkers(&self, color: Color) -> u8 {
        let on_points: u8 = (1..=24).map(|point| self.count_of(point, color)).sum();
        on_points + self.bar(color) + self.checkers_fuera(color)
    }

    /// True when every checker of `color` that is still in play sits in its
    /// home quadrant, which is the precondition for bearing off.
    pub fn all_home(&self, color: Color) -> bool {
        self.bar(color) == 0
            && (1..=24)
                .filter(|&point| !color.is_home(point))
                .all(|point| self.count_of(point, color) == 0)
    }

    pub fn check_invariants(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let total = self.total_checkers(color);
            if total != CHECKERS_PER_COLOR {
                return Err(BoardError::CheckerCount { color, total });
            }
        }
        Ok(())
    }

    /// Applies one step for `color`, rejecting anything the movement rules
    /// do not allow. The board is left untouched on error.
    pub fn apply_step(&mut self, color: Color, step: &MoveStep) -> Result<(), BoardError> {
        self.validate_step(color, step)?;
        self.make_step_unchecked(color, step);
        Ok(())
    }

    fn validate_step(&self, color: Color, step: &MoveStep) -> Result<(), BoardError> {
        let invalid = || BoardError::InvalidStep { step: *step, color };
        if !(1..=6).contains(&step.die) {
            return Err(invalid());
        }

        match step.from {
            Position::Off => return Err(invalid()),
            Position::Bar => {
                if self.bar(color) == 0 {
                    return Err(BoardError::EmptyOrigin { color, from: step.from });
                }
                if step.to != Position::Point(color.entry_point(step.die)) {
                    return Err(invalid());
                }
            }
            Position::Point(from) => {
                if !(1..=24).contains(&from) {
                    return Err(invalid());
                }
                if self.count_of(from, color) == 0 {
                    return Err(BoardError::EmptyOrigin { color, from: step.from });
                }
                if self.bar(color) > 0 {
                    return Err(BoardError::MustReenter { color });
                }
                match step.to {
                    Position::Point(to) if color.target(from, step.die) == Some(to) => {}
                    Position::Off => {
                        if !self.all_home(color) {
                            return Err(BoardError::NotAllHome { color });
                        }
                        if !self.may_bear_off(color, from, step.die) {
                            return Err(invalid());
                        }
                    }
                    _ => return Err(invalid()),
                }
            }
        }

        match step.to {
            Position::Point(to) => {
                let (count, owner) = self.checkers_at(to);
                let opposing = owner == Some(color.opposite());
                if opposing && count >= 2 {
                    return Err(BoardError::Blocked { point: to, owner: color.opposite() });
                }
                if step.captura != (opposing && count == 1) {
                    return Err(BoardError::CaptureMismatch { to: step.to });
                }
            }
            _ if step.captura => return Err(BoardError::CaptureMismatch { to: step.to }),
            _ => {}
        }
        Ok(())
    }

    // Only use this for steps produced by `generate_steps` or checked by
    // `validate_step`.
    fn make_step_unchecked(&mut self, color: Color, step: &MoveStep) {
        match step.from {
            Position::Bar => self.bar[color.index()] -= 1,
            Position::Point(from) => self.points[Self::index(from)] -= color.sign(),
            Position::Off => panic!("Cannot move from off"),
        }
        match step.to {
            Position::Off => self.off[color.index()] += 1,
            Position::Bar => panic!("Cannot move to bar"),
            Position::Point(to) => {
                let index = Self::index(to);
                if step.captura {
                    self.points[index] = 0;
                    self.bar[color.opposite().index()] += 1;
                }
                self.points[index] += color.sign();
            }
        }
    }

    /// Every single step `color` can play with one of the open dice, paired
    /// with the dice left over afterwards.
    pub fn generate_steps(&self, color: Color, dice: Dice) -> Vec<(MoveStep, Dice)> {
        let mut steps = Vec::new();
        let on_bar = self.bar(color) > 0;
        let can_bear_off = !on_bar && self.all_home(color);

        for &die in dice.available().iter() {
            let Some(remaining) = dice.use_die(die) else {
                continue;
            };

            if on_bar {
                let entry = color.entry_point(die);
                if let Some(step) = self.landing(color, Position::Bar, entry, die) {
                    steps.push((step, remaining));
                }
                continue;
            }

            for from in 1..=24u8 {
                if self.count_of(from, color) == 0 {
                    continue;
                }
                match color.target(from, die) {
                    Some(to) => {
                        if let Some(step) = self.landing(color, Position::Point(from), to, die) {
                            steps.push((step, remaining));
                        }
                    }
                    None if can_bear_off && self.may_bear_off(color, from, die) => {
                        steps.push((MoveStep::new(Position::Point(from), Position::Off, die, false), remaining));
                    }
                    None => {}
                }
            }
        }
        steps
    }

    fn landing(&self, color: Color, from: Position, to: u8, die: u8) -> Option<MoveStep> {
        match self.checkers_at(to) {
            (count, Some(owner)) if owner != color && count >= 2 => None,
            (1, Some(owner)) if owner != color => Some(MoveStep::new(from, Position::Point(to), die, true)),
            _ => Some(MoveStep::new(from, Position::Point(to), die, false)),
        }
    }

    // Exact throws always bear off; a larger die only moves the checker
    // farthest from off.
    fn may_bear_off(&self, color: Color, from: u8, die: u8) -> bool {
        let distance = color.distance_to_off(from);
        if distance == die {
            return true;
        }
        distance < die
            && !color
                .home_range()
                .any(|point| self.count_of(point, color) > 0 && color.distance_to_off(point) > distance)
    }

    /// All legal ways for `color` to play `dice`, sorted. Only the options
    /// that use the most dice are kept. Empty when the turn is forfeited.
    pub fn legal_options(&self, color: Color, dice: Dice) -> Vec<MoveOption> {
        let mut layer = vec![(dice, *self, MoveOption::new())];

        loop {
            let next: Vec<(Dice, Board, MoveOption)> = layer
                .par_iter()
                .flat_map_iter(|(dice, board, option)| {
                    board
                        .generate_steps(color, *dice)
                        .into_iter()
                        .map(move |(step, remaining)| {
                            let mut board = *board;
                            board.make_step_unchecked(color, &step);
                            let mut option = *option;
                            option.add_step(step);
                            (remaining, board, option)
                        })
                })
                .collect();

            if next.is_empty() {
                break;
            }

            let mut seen = HashSet::new();
            layer = next
                .into_iter()
                .filter(|(_, board, option)| seen.insert((*board, option.unordered_key())))
                .collect();
        }

        let longest = layer.first().map_or(0, |(_, _, option)| option.len());
        if longest == 0 {
            debug!(%color, %dice, "no legal moves");
            return Vec::new();
        }

        let mut options: Vec<MoveOption> = layer.into_iter().map(|(_, _, option)| option).collect();

        // A lone playable die of a non-double roll must be the larger one
        // when that one can be played.
        if longest == 1 && dice.remaining() == 2 && !dice.is_double() {
            let (a, b) = dice.values();
            let high = a.max(b);
            if options.iter().any(|option| option[0].die == high) {
                options.retain(|option| option[0].die == high);
            }
        }

        options.sort_unstable();
        debug!(%color, %dice, options = options.len(), steps = longest, "enumerated legal moves");
        options
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cell = |point: u8| match self.checkers_at(point) {
            (_, None) => ".".to_string(),
            (count, Some(Color::White)) => format!("B{count}"),
            (count, Some(Color::Black)) => format!("N{count}"),
        };

        for point in 13..=24 {
            write!(f, "{point:>4}")?;
            if point == 18 {
                write!(f, "  |")?;
            }
        }
        writeln!(f)?;
        for point in 13..=24 {
            write!(f, "{:>4}", cell(point))?;
            if point == 18 {
                write!(f, "  |")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(51))?;
        for point in (1..=12).rev() {
            write!(f, "{:>4}", cell(point))?;
            if point == 7 {
                write!(f, "  |")?;
            }
        }
        writeln!(f)?;
        for point in (1..=12).rev() {
            write!(f, "{point:>4}")?;
            if point == 7 {
                write!(f, "  |")?;
            }
        }
        writeln!(f)?;
        write!(
            f,
            "Bar: {} {}, {} {} | Fuera: {} {}, {} {}",
            Color::White,
            self.bar(Color::White),
            Color::Black,
            self.bar(Color::Black),
            Color::White,
            self.checkers_fuera(Color::White),
            Color::Black,
            self.checkers_fuera(Color::Black),
        )
    }
}
