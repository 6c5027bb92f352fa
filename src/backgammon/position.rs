use std::fmt::Display;

/// Where a checker can be. Points use absolute numbering 1..=24, shared by
/// both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Bar,
    Point(u8),
    Off,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Bar => write!(f, "bar"),
            Position::Off => write!(f, "fuera"),
            Position::Point(n) => write!(f, "{n}"),
        }
    }
}
