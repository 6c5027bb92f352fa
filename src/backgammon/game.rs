use tracing::info;

use crate::{
    backgammon::{Board, CHECKERS_PER_COLOR, Color, Dice, DiceSource, MoveOption, Player, SeededDice},
    config::{FirstPlayer, GameConfig},
    error::GameError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    InTurn,
    GameOver,
}

/// Two-player hot-seat game: owns the board, both players, the dice source
/// and whose turn it is.
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
    dice: Option<Dice>,
    rolled: bool,
    dice_source: Box<dyn DiceSource>,
    first_player: FirstPlayer,
    started: bool,
    turn: u32,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let source = config.seed.map_or_else(SeededDice::from_entropy, SeededDice::new);
        Game::with_dice_source(&config.player_one, &config.player_two, source)
            .with_first_player(config.first_player)
    }

    /// Player one plays White, player two plays Black.
    pub fn with_dice_source(player_one: &str, player_two: &str, source: impl DiceSource + 'static) -> Self {
        Game {
            board: Board::new(),
            players: [Player::new(player_one, Color::White), Player::new(player_two, Color::Black)],
            current: 0,
            dice: None,
            rolled: false,
            dice_source: Box::new(source),
            first_player: FirstPlayer::White,
            started: false,
            turn: 0,
        }
    }

    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Renames the seats. Colors stay as they are.
    pub fn set_player_names(&mut self, player_one: &str, player_two: &str) {
        self.players = [Player::new(player_one, Color::White), Player::new(player_two, Color::Black)];
    }

    pub fn start_game(&mut self) {
        self.start_from(Board::new());
    }

    /// Starts a game from an arbitrary position.
    pub fn start_from(&mut self, board: Board) {
        self.board = board;
        self.dice = None;
        self.rolled = false;
        self.turn = 1;
        self.started = true;
        for player in self.players.iter_mut() {
            player.reset_options();
        }
        self.current = match self.first_player {
            FirstPlayer::White => 0,
            FirstPlayer::Black => 1,
            FirstPlayer::Random => self.opening_roll(),
        };
        info!(
            player = self.players[self.current].get_nombre(),
            color = %self.players[self.current].get_color(),
            "game started"
        );
    }

    // Each side throws one die; the higher throw opens, ties are thrown again.
    fn opening_roll(&mut self) -> usize {
        loop {
            let (white, black) = self.dice_source.roll().values();
            if white != black {
                return if white > black { 0 } else { 1 };
            }
        }
    }

    pub fn state(&self) -> GameState {
        if !self.started {
            GameState::NotStarted
        } else if self.is_game_over() {
            GameState::GameOver
        } else {
            GameState::InTurn
        }
    }

    fn ensure_in_turn(&self) -> Result<(), GameError> {
        match self.state() {
            GameState::NotStarted => Err(GameError::NotStarted),
            GameState::GameOver => Err(GameError::GameOver),
            GameState::InTurn => Ok(()),
        }
    }

    /// Rolls for the current player, once per turn. Doubles give four uses
    /// of the value.
    pub fn roll_dice(&mut self) -> Result<Dice, GameError> {
        self.ensure_in_turn()?;
        if self.rolled {
            return Err(GameError::AlreadyRolled);
        }
        let dice = self.dice_source.roll();
        self.dice = Some(dice);
        self.rolled = true;
        self.players[self.current].reset_options();
        info!(turn = self.turn, player = self.players[self.current].get_nombre(), %dice, "dice rolled");
        Ok(dice)
    }

    pub fn current_dice(&self) -> Option<Dice> {
        self.dice
    }

    pub fn get_current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Legal options for the current player and the last roll.
    pub fn movimientos_legales(&mut self) -> Result<Vec<MoveOption>, GameError> {
        self.ensure_in_turn()?;
        let dice = self.dice.ok_or(GameError::NoRoll)?;
        Ok(self.players[self.current].movimientos_legales(&self.board, dice))
    }

    /// Applies an option returned by the last [`Self::movimientos_legales`].
    /// The roll is spent afterwards; nothing more can be played this turn.
    pub fn confirmar_movimiento(&mut self, option: &MoveOption) -> Result<(), GameError> {
        self.ensure_in_turn()?;
        if self.dice.is_none() {
            return Err(GameError::NoRoll);
        }
        self.players[self.current].confirmar_movimiento(&mut self.board, option)?;
        self.dice = None;
        info!(player = self.players[self.current].get_nombre(), %option, "move played");
        Ok(())
    }

    /// Hands the turn to the other player. Game over is not checked here;
    /// callers poll [`Self::is_game_over`] before each turn.
    pub fn next_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        self.dice = None;
        self.rolled = false;
        for player in self.players.iter_mut() {
            player.reset_options();
        }
        self.turn += 1;
    }

    pub fn is_game_over(&self) -> bool {
        Color::ALL
            .iter()
            .any(|&color| self.board.checkers_fuera(color) == CHECKERS_PER_COLOR)
    }

    pub fn winner(&self) -> Option<&Player> {
        self.players
            .iter()
            .find(|player| player.checkers_fuera(&self.board) == CHECKERS_PER_COLOR)
    }

    pub fn checkers_fuera(&self, color: Color) -> u8 {
        self.board.checkers_fuera(color)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn turn_number(&self) -> u32 {
        self.turn
    }
}
