/// Uniform d6 source, mainly (strictly?) injected so tests can script rolls.
pub trait Dice: Send {
    fn roll(&mut self) -> u8;

    fn toss(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.roll()).collect()
    }
}

/// The real thing.
pub struct Tumble;

impl Dice for Tumble {
    fn roll(&mut self) -> u8 {
        rand::random_range(1..=6)
    }
}

/// A fixed sequence of outcomes. Panics when the script runs dry,
/// which in a test means the code under test rolled too many dice.
pub struct Script(std::collections::VecDeque<u8>);

impl Dice for Script {
    fn roll(&mut self) -> u8 {
        self.0.pop_front().expect("scripted roll available")
    }
}

impl From<Vec<u8>> for Script {
    fn from(rolls: Vec<u8>) -> Self {
        Self(rolls.into_iter().collect())
    }
}
