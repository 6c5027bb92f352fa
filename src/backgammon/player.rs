use tracing::warn;

use crate::{
    backgammon::{Board, Color, Dice, MoveOption},
    error::GameError,
};

/// A seat at the table. The color, and with it the direction of travel, is
/// fixed for the whole game. The player remembers the options it last
/// offered so that only those can be confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    nombre: String,
    color: Color,
    last_options: Vec<MoveOption>,
}

impl Player {
    pub fn new(nombre: impl Into<String>, color: Color) -> Self {
        Player { nombre: nombre.into(), color, last_options: Vec::new() }
    }

    pub fn get_nombre(&self) -> &str {
        &self.nombre
    }

    pub fn get_color(&self) -> Color {
        self.color
    }

    pub fn checkers_fuera(&self, board: &Board) -> u8 {
        board.checkers_fuera(self.color)
    }

    /// Enumerates every legal way to play `dice` on `board`. The board is
    /// not touched. An empty result means the turn is lost.
    pub fn movimientos_legales(&mut self, board: &Board, dice: Dice) -> Vec<MoveOption> {
        self.last_options = board.legal_options(self.color, dice);
        self.last_options.clone()
    }

    /// Applies `option` to `board`. The option must come from the most recent
    /// call to [`Self::movimientos_legales`]; anything else is rejected and the
    /// board keeps its previous state.
    pub fn confirmar_movimiento(&mut self, board: &mut Board, option: &MoveOption) -> Result<(), GameError> {
        if !self.last_options.contains(option) {
            warn!(player = %self.nombre, %option, "rejected option outside the legal set");
            return Err(GameError::IllegalOption { option: option.to_string() });
        }

        let mut next = *board;
        for step in option.iter() {
            next.apply_step(self.color, step)?;
        }
        next.check_invariants()?;

        *board = next;
        self.last_options.clear();
        Ok(())
    }

    /// Forgets the options of the previous roll.
    pub fn reset_options(&mut self) {
        self.last_options.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backgammon::{MoveStep, Position};

    #[test]
    fn test_confirm_enumerated_option() {
        let mut board = Board::new();
        let mut player = Player::new("Ana", Color::White);
        let options = player.movimientos_legales(&board, Dice::new(3, 1));
        let chosen = options[0];
        player.confirmar_movimiento(&mut board, &chosen).unwrap();
        assert_ne!(board, Board::new());
        board.check_invariants().unwrap();
    }

    #[test]
    fn test_reject_option_not_enumerated() {
        let mut board = Board::new();
        let mut player = Player::new("Ana", Color::White);
        player.movimientos_legales(&board, Dice::new(3, 1));
        let forged = MoveOption::from_steps([MoveStep::new(Position::Point(1), Position::Point(6), 5, false)]);
        let err = player.confirmar_movimiento(&mut board, &forged).unwrap_err();
        assert!(matches!(err, GameError::IllegalOption { .. }));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reject_stale_option() {
        let mut board = Board::new();
        let mut player = Player::new("Ana", Color::White);
        let options = player.movimientos_legales(&board, Dice::new(6, 5));
        let chosen = options[0];
        player.confirmar_movimiento(&mut board, &chosen).unwrap();
        let err = player.confirmar_movimiento(&mut board, &chosen).unwrap_err();
        assert!(matches!(err, GameError::IllegalOption { .. }));
    }

    #[test]
    fn test_accessors() {
        let board = Board::new().with_point(6, Color::Black, 0).with_off(Color::Black, 5);
        let player = Player::new("Luis", Color::Black);
        assert_eq!(player.get_nombre(), "Luis");
        assert_eq!(player.get_color(), Color::Black);
        assert_eq!(player.checkers_fuera(&board), 5);
    }
}
