use std::{fmt::Display, ops::RangeInclusive};

/// Checker color. The color fixes the direction of travel for the whole game:
/// White runs from point 1 towards 24, Black from 24 towards 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index into per-color arrays (bar, off).
    pub fn index(&self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// +1 when moving towards higher point numbers, -1 otherwise.
    pub fn direction(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Sign used for this color's checkers in the board array.
    pub fn sign(&self) -> i8 {
        self.direction()
    }

    pub fn home_range(&self) -> RangeInclusive<u8> {
        match self {
            Color::White => 19..=24,
            Color::Black => 1..=6,
        }
    }

    pub fn is_home(&self, point: u8) -> bool {
        self.home_range().contains(&point)
    }

    /// Point reached when entering from the bar with `die`. Always inside the
    /// opponent's home quadrant.
    pub fn entry_point(&self, die: u8) -> u8 {
        match self {
            Color::White => die,
            Color::Black => 25 - die,
        }
    }

    /// Pips a checker on `point` still needs to travel to be borne off.
    pub fn distance_to_off(&self, point: u8) -> u8 {
        match self {
            Color::White => 25 - point,
            Color::Black => point,
        }
    }

    /// Destination of a checker on `point` moved by `die`, or `None` if the
    /// move runs past the end of the track.
    pub fn target(&self, point: u8, die: u8) -> Option<u8> {
        let target = point as i8 + self.direction() * die as i8;
        (1..=24).contains(&target).then_some(target as u8)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "Blanco"),
            Color::Black => write!(f, "Negro"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points_land_in_opponent_home() {
        for color in Color::ALL {
            for die in 1..=6 {
                assert!(color.opposite().is_home(color.entry_point(die)));
            }
        }
    }

    #[test]
    fn test_distance_and_target() {
        assert_eq!(Color::White.distance_to_off(19), 6);
        assert_eq!(Color::Black.distance_to_off(6), 6);
        assert_eq!(Color::White.target(20, 4), Some(24));
        assert_eq!(Color::White.target(20, 5), None);
        assert_eq!(Color::Black.target(5, 4), Some(1));
        assert_eq!(Color::Black.target(5, 5), None);
    }
}
