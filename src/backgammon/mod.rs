mod board;
pub use board::{Board, CHECKERS_PER_COLOR};

mod color;
pub use color::Color;

mod player;
pub use player::Player;

mod position;
pub use position::Position;

mod step;
pub use step::MoveStep;

mod move_option;
pub use move_option::MoveOption;

mod dice;
pub use dice::{Dice, DiceSource, DiceUsage, FixedDice, SeededDice};

mod game;
pub use game::{Game, GameState};
