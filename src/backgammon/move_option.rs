use std::{fmt::Display, ops::Deref};

use crate::{backgammon::MoveStep, misc::TinyVec};

/// A complete way to play a roll: up to four steps, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MoveOption {
    steps: TinyVec<MoveStep, 4>,
}

impl MoveOption {
    pub fn new() -> Self {
        MoveOption { steps: TinyVec::new() }
    }

    pub fn from_steps(steps: impl IntoIterator<Item = MoveStep>) -> Self {
        MoveOption { steps: steps.into_iter().collect() }
    }

    pub fn add_step(&mut self, step: MoveStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[MoveStep] {
        &self.steps
    }

    pub fn dice_used(&self) -> impl Iterator<Item = u8> + '_ {
        self.steps.iter().map(|step| step.die)
    }

    /// Same steps regardless of the order they are played in.
    pub fn unordered_key(&self) -> TinyVec<MoveStep, 4> {
        let mut steps = self.steps;
        steps.sort_unstable();
        steps
    }
}

impl Deref for MoveOption {
    type Target = [MoveStep];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl Display for MoveOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
