use std::{collections::VecDeque, fmt::Display};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::misc::TinyVec;

/// A roll of two dice together with how much of it has been played.
/// Doubles are tracked as four uses of one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dice {
    Double {
        value: u8,
        used: u8,
    },
    Single {
        value_1: u8,
        value_2: u8,
        used: DiceUsage,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiceUsage {
    BothAvailable,
    OnlyFirstAvailable,
    OnlySecondAvailable,
    BothUsed,
}

impl Dice {
    pub const fn new(a: u8, b: u8) -> Dice {
        assert!(a >= 1 && a <= 6 && b >= 1 && b <= 6, "die values must be in 1..=6");
        if a == b {
            Dice::Double { value: a, used: 0 }
        } else {
            Dice::Single { value_1: a, value_2: b, used: DiceUsage::BothAvailable }
        }
    }

    /// Two independent uniform values in 1..=6.
    pub fn roll_with<R: Rng>(rng: &mut R) -> Dice {
        let a = rng.random_range(1..=6);
        let b = rng.random_range(1..=6);
        Dice::new(a, b)
    }

    /// The two faces as rolled.
    pub fn values(&self) -> (u8, u8) {
        match *self {
            Dice::Double { value, .. } => (value, value),
            Dice::Single { value_1, value_2, .. } => (value_1, value_2),
        }
    }

    /// Every die use the roll grants: four copies of the value for doubles.
    pub fn pool(&self) -> Vec<u8> {
        match *self {
            Dice::Double { value, .. } => vec![value; 4],
            Dice::Single { value_1, value_2, .. } => vec![value_1, value_2],
        }
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Dice::Double { .. })
    }

    /// Number of die uses still open.
    pub fn remaining(&self) -> usize {
        match self {
            Dice::Double { used, .. } => 4 - (*used).min(4) as usize,
            Dice::Single { used, .. } => match used {
                DiceUsage::BothAvailable => 2,
                DiceUsage::OnlyFirstAvailable | DiceUsage::OnlySecondAvailable => 1,
                DiceUsage::BothUsed => 0,
            },
        }
    }

    /// Distinct die values that can still be played.
    pub fn available(&self) -> TinyVec<u8, 2> {
        let mut values = TinyVec::new();
        match *self {
            Dice::Double { value, used } => {
                if used < 4 {
                    values.push(value);
                }
            }
            Dice::Single { value_1, value_2, used } => match used {
                DiceUsage::BothAvailable => {
                    values.push(value_1);
                    values.push(value_2);
                }
                DiceUsage::OnlyFirstAvailable => values.push(value_1),
                DiceUsage::OnlySecondAvailable => values.push(value_2),
                DiceUsage::BothUsed => {}
            },
        }
        values
    }

    /// Returns the dice after consuming one use of `die`, or `None` if that
    /// value is not available.
    pub fn use_die(&self, die: u8) -> Option<Dice> {
        let mut new_dice = *self;
        match &mut new_dice {
            Dice::Double { value, used } => {
                if *value != die || *used >= 4 {
                    return None;
                }
                *used += 1;
            }
            Dice::Single { value_1, value_2, used } => {
                *used = match (*used, die) {
                    (DiceUsage::BothAvailable, d) if d == *value_1 => DiceUsage::OnlySecondAvailable,
                    (DiceUsage::BothAvailable, d) if d == *value_2 => DiceUsage::OnlyFirstAvailable,
                    (DiceUsage::OnlyFirstAvailable, d) if d == *value_1 => DiceUsage::BothUsed,
                    (DiceUsage::OnlySecondAvailable, d) if d == *value_2 => DiceUsage::BothUsed,
                    _ => return None,
                };
            }
        }
        Some(new_dice)
    }

    pub const ALL: [Dice; 21] = [
        Dice::new(1, 1), Dice::new(1, 2), Dice::new(1, 3), Dice::new(1, 4),
        Dice::new(1, 5), Dice::new(1, 6), Dice::new(2, 2), Dice::new(2, 3),
        Dice::new(2, 4), Dice::new(2, 5), Dice::new(2, 6), Dice::new(3, 3),
        Dice::new(3, 4), Dice::new(3, 5), Dice::new(3, 6), Dice::new(4, 4),
        Dice::new(4, 5), Dice::new(4, 6), Dice::new(5, 5), Dice::new(5, 6),
        Dice::new(6, 6),
    ];
}

impl Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = self.values();
        write!(f, "{a}/{b}")
    }
}

/// Where the game gets its rolls from.
pub trait DiceSource {
    fn roll(&mut self) -> Dice;
}

/// Uniform dice backed by ChaCha8. The same seed replays the same game.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        SeededDice { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl DiceSource for SeededDice {
    fn roll(&mut self) -> Dice {
        Dice::roll_with(&mut self.rng)
    }
}

/// Replays a fixed list of rolls, cycling when the list runs out.
#[derive(Debug, Clone)]
pub struct FixedDice {
    rolls: VecDeque<(u8, u8)>,
}

impl FixedDice {
    pub fn new(rolls: impl IntoIterator<Item = (u8, u8)>) -> Self {
        let rolls: VecDeque<_> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "FixedDice needs at least one roll");
        FixedDice { rolls }
    }
}

impl DiceSource for FixedDice {
    fn roll(&mut self) -> Dice {
        // never empty: checked in the constructor and rotated, not drained
        let (a, b) = self.rolls[0];
        self.rolls.rotate_left(1);
        Dice::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice() {
        for i in 1..=6 {
            for j in 1..=6 {
                let mut dice = Dice::new(i, j);
                assert_eq!(dice.values(), (i, j));
                if i == j {
                    assert!(dice.is_double());
                    assert_eq!(dice.pool(), vec![i; 4]);
                    let mut count = 0;
                    while let Some(next) = dice.use_die(i) {
                        count += 1;
                        dice = next;
                    }
                    assert_eq!(dice.remaining(), 0);
                    assert_eq!(count, 4);
                } else {
                    assert!(!dice.is_double());
                    assert_eq!(dice.pool(), vec![i, j]);
                    assert_eq!(&*dice.available(), &[i, j]);
                    dice = dice.use_die(i).unwrap();
                    assert_eq!(&*dice.available(), &[j]);
                    assert!(dice.use_die(i).is_none());
                    dice = dice.use_die(j).unwrap();
                    assert_eq!(dice.remaining(), 0);
                }
            }
        }
    }

    #[test]
    fn test_use_unrolled_value() {
        assert!(Dice::new(2, 5).use_die(3).is_none());
        assert!(Dice::new(4, 4).use_die(3).is_none());
    }

    #[test]
    fn test_dice_roll() {
        let mut source = SeededDice::new(7);
        for _ in 1..=100 {
            let (a, b) = source.roll().values();
            assert!((1..=6).contains(&a));
            assert!((1..=6).contains(&b));
        }
    }

    #[test]
    fn test_seeded_rolls_are_reproducible() {
        let mut first = SeededDice::new(42);
        let mut second = SeededDice::new(42);
        for _ in 0..50 {
            assert_eq!(first.roll(), second.roll());
        }
    }

    #[test]
    fn test_fixed_dice_cycle() {
        let mut source = FixedDice::new([(1, 2), (6, 6)]);
        assert_eq!(source.roll(), Dice::new(1, 2));
        assert_eq!(source.roll(), Dice::new(6, 6));
        assert_eq!(source.roll(), Dice::new(1, 2));
    }
}
