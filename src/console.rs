use std::io::{BufRead, Write};

use crate::{
    backgammon::{Game, GameState},
    error::ConsoleError,
};

pub const NO_LEGAL_MOVES: &str = "No hay movimientos legales disponibles. Turno perdido.";
pub const INVALID_INPUT: &str = "Entrada inválida. Ingrese un número.";
pub const INVALID_SELECTION: &str = "Selección inválida. Intente nuevamente.";
pub const GAME_OVER: &str = "¡Fin de la partida!";

/// Text front end for a hot-seat game. Reads choices from `input` and writes
/// everything the players see to `output`.
pub struct Console<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Console { game, input, output }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks for both names, plays until someone has borne off every checker
    /// and announces the winner.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        let [one, two] = self.game.players().clone().map(|player| player.get_nombre().to_string());
        let name_one = self.ask("Nombre del jugador 1 (Blanco): ")?;
        let name_two = self.ask("Nombre del jugador 2 (Negro): ")?;
        let name_one = if name_one.is_empty() { one } else { name_one };
        let name_two = if name_two.is_empty() { two } else { name_two };
        self.game.set_player_names(&name_one, &name_two);

        if self.game.state() == GameState::NotStarted {
            self.game.start_game();
        }

        while !self.game.is_game_over() {
            self.play_turn()?;
        }

        writeln!(self.output, "{GAME_OVER}")?;
        if let Some(winner) = self.game.winner() {
            writeln!(self.output, "Ganador: {} ({})", winner.get_nombre(), winner.get_color())?;
        }
        Ok(())
    }

    /// One full turn: roll, list the options, apply the chosen one and pass
    /// the turn on.
    pub fn play_turn(&mut self) -> Result<(), ConsoleError> {
        let player = self.game.get_current_player();
        let header = format!("Turno de {} ({})", player.get_nombre(), player.get_color());
        writeln!(self.output, "\n{}\n", self.game.board())?;
        writeln!(self.output, "{header}")?;
        self.ask("Presione Enter para tirar los dados...")?;

        let dice = self.game.roll_dice()?;
        if dice.is_double() {
            writeln!(self.output, "Dados: {dice} (dobles, {} movimientos)", dice.pool().len())?;
        } else {
            writeln!(self.output, "Dados: {dice}")?;
        }

        let options = self.game.movimientos_legales()?;
        if options.is_empty() {
            writeln!(self.output, "{NO_LEGAL_MOVES}")?;
        } else {
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "{:>3}: {option}", i + 1)?;
            }
            let choice = self.prompt_move(options.len())?;
            self.game.confirmar_movimiento(&options[choice - 1])?;
        }

        self.ask("Presione Enter para continuar...")?;
        self.game.next_turn();
        Ok(())
    }

    /// Reads a 1-based option number, asking again until it is in range.
    pub fn prompt_move(&mut self, num_options: usize) -> Result<usize, ConsoleError> {
        loop {
            let line = self.ask(&format!("Seleccione un movimiento (1-{num_options}): "))?;
            match line.parse::<i64>() {
                Err(_) => writeln!(self.output, "{INVALID_INPUT}")?,
                Ok(n) if n >= 1 && n as usize <= num_options => return Ok(n as usize),
                Ok(_) => writeln!(self.output, "{INVALID_SELECTION}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::backgammon::{Board, Color, FixedDice};

    fn console(input: &str, rolls: &[(u8, u8)]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        let game = Game::with_dice_source("Jugador 1", "Jugador 2", FixedDice::new(rolls.iter().copied()));
        Console::new(game, Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_move_valid() {
        let mut console = console("1\n", &[(1, 2)]);
        assert_eq!(console.prompt_move(3).unwrap(), 1);
    }

    #[test]
    fn test_prompt_move_invalid() {
        let mut console = console("a\n4\n0\n2\n", &[(1, 2)]);
        assert_eq!(console.prompt_move(3).unwrap(), 2);
        let text = output(console);
        let messages: Vec<&str> = text
            .lines()
            .flat_map(|line| line.split(": ").last())
            .filter(|msg| *msg == INVALID_INPUT || *msg == INVALID_SELECTION)
            .collect();
        assert_eq!(messages, vec![INVALID_INPUT, INVALID_SELECTION, INVALID_SELECTION]);
    }

    #[test]
    fn test_prompt_move_end_of_input() {
        let mut console = console("x\n", &[(1, 2)]);
        assert!(matches!(console.prompt_move(2), Err(ConsoleError::EndOfInput)));
    }

    #[test]
    fn test_turn_without_legal_moves() {
        let mut console = console("\n\n", &[(3, 5)]);
        let board = Board::new()
            .with_point(1, Color::White, 1)
            .with_bar(Color::White, 1)
            .with_point(3, Color::Black, 2)
            .with_point(5, Color::Black, 2)
            .with_point(6, Color::Black, 1);
        console.game.start_from(board);
        console.play_turn().unwrap();
        assert_eq!(console.game().board(), &board);
        assert_eq!(console.game().get_current_player().get_color(), Color::Black);
        assert!(output(console).contains(NO_LEGAL_MOVES));
    }

    #[test]
    fn test_run_to_game_over() {
        let mut console = console("Ana\n\n\n1\n\n", &[(6, 5)]);
        let board = Board::empty()
            .with_point(24, Color::White, 1)
            .with_off(Color::White, 14)
            .with_point(1, Color::Black, 15);
        console.game.start_from(board);
        console.run().unwrap();
        assert!(console.game().is_game_over());
        let text = output(console);
        assert!(text.contains(GAME_OVER));
        assert!(text.contains("Ganador: Ana (Blanco)"));
    }

    #[test]
    fn test_default_names_kept_when_blank() {
        let mut console = console("\n\n\n1\n\n", &[(6, 5)]);
        let board = Board::empty()
            .with_point(24, Color::White, 1)
            .with_off(Color::White, 14)
            .with_point(1, Color::Black, 15);
        console.game.start_from(board);
        console.run().unwrap();
        assert_eq!(console.game().players()[1].get_nombre(), "Jugador 2");
        assert!(output(console).contains("Ganador: Jugador 1 (Blanco)"));
    }
}
