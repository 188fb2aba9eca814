use crate::geometry::point::{Point, J};
use std::{fmt, str::FromStr};

/// Direction in a hexagonal coordinate system
///
/// Assumes pointy-top hexes, so the major orientation is horizontal. Directions are
/// labeled clockwise (on screen, where `y` grows downward) from `A`, which points east.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    /// East
    A,
    /// Southeast
    B,
    /// Southwest
    C,
    /// West
    D,
    /// Northwest
    E,
    /// Northeast
    F,
}

impl Direction {
    pub const COUNT: usize = 6;

    /// Iterate through all `Direction`s, clockwise from `A`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::A), |direction| {
            use Direction::*;

            match direction {
                A => Some(B),
                B => Some(C),
                C => Some(D),
                D => Some(E),
                E => Some(F),
                F => None,
            }
        })
    }

    /// Position of this direction in the clockwise sequence `A..=F`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Direction::index`], modulo 6.
    pub fn from_index(index: usize) -> Direction {
        use Direction::*;

        match index % Self::COUNT {
            0 => A,
            1 => B,
            2 => C,
            3 => D,
            4 => E,
            _ => F,
        }
    }

    /// Axial `(dq, dr)` offset of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::A => (1, 0),
            Direction::B => (0, 1),
            Direction::C => (-1, 1),
            Direction::D => (-1, 0),
            Direction::E => (0, -1),
            Direction::F => (1, -1),
        }
    }

    /// Rotate by `sixths` of a full turn; positive is clockwise.
    pub fn rotate(self, sixths: i32) -> Direction {
        let index = (self.index() as i32 + sixths).rem_euclid(Self::COUNT as i32);
        Direction::from_index(index as usize)
    }

    pub fn clockwise(self) -> Direction {
        self.rotate(1)
    }

    pub fn counterclockwise(self) -> Direction {
        self.rotate(-1)
    }

    pub fn opposite(self) -> Direction {
        self.rotate(3)
    }

    /// Unit vector in geometry space pointing from a hex's centre across this edge.
    pub fn unit(self) -> Point {
        match self {
            Direction::A => Point::new(1.0, 0.0),
            Direction::B => Point::new(0.5, J),
            Direction::C => Point::new(-0.5, J),
            Direction::D => Point::new(-1.0, 0.0),
            Direction::E => Point::new(-0.5, -J),
            Direction::F => Point::new(0.5, -J),
        }
    }

    pub fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl TryFrom<char> for Direction {
    type Error = ParseStepsError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let mut buf = [0; 4];
        c.encode_utf8(&mut buf)
            .parse()
            .map_err(|_| ParseStepsError::UnknownToken {
                token: c,
                position: 0,
            })
    }
}

/// A single instruction in a step-string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    pub direction: Direction,
    /// Keep stepping in `direction` until the next step would leave the grid.
    pub repeat: bool,
}

impl From<Direction> for Step {
    fn from(direction: Direction) -> Step {
        Step {
            direction,
            repeat: false,
        }
    }
}

/// A parsed step-string.
///
/// Step-strings are sequences of the letters `A` through `F`. Any letter may be followed by
/// `*`, meaning "repeat until the edge of the grid". A trailing `?` makes the whole walk
/// lenient: instead of failing when a step leaves the grid, the walk simply stops there.
///
/// ```
/// # use hexlib::geometry::hex::Steps;
/// let steps: Steps = "AAB*?".parse().unwrap();
/// assert_eq!(steps.len(), 3);
/// assert!(steps.is_lenient());
/// assert_eq!(steps.to_string(), "AAB*?");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Steps {
    steps: Vec<Step>,
    lenient: bool,
}

impl Steps {
    pub fn new() -> Steps {
        Steps::default()
    }

    pub fn iter(&self) -> impl '_ + Iterator<Item = Step> {
        self.steps.iter().copied()
    }

    /// The directions of these steps, ignoring repetition.
    pub fn directions(&self) -> impl '_ + Iterator<Item = Direction> {
        self.steps.iter().map(|step| step.direction)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `true` when a walk along these steps stops at the grid edge instead of failing.
    pub fn is_lenient(&self) -> bool {
        self.lenient
    }

    pub fn lenient(mut self, lenient: bool) -> Steps {
        self.lenient = lenient;
        self
    }

    pub fn push(&mut self, step: impl Into<Step>) {
        self.steps.push(step.into());
    }

    /// Rotate every step by `sixths` of a turn; positive is clockwise.
    pub fn rotate(&self, sixths: i32) -> Steps {
        Steps {
            steps: self
                .steps
                .iter()
                .map(|step| Step {
                    direction: step.direction.rotate(sixths),
                    repeat: step.repeat,
                })
                .collect(),
            lenient: self.lenient,
        }
    }
}

impl FromStr for Steps {
    type Err = ParseStepsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut steps = Steps {
            steps: Vec::with_capacity(s.len()),
            lenient: false,
        };

        let mut chars = s.chars().enumerate().peekable();
        while let Some((position, token)) = chars.next() {
            match token {
                '*' => match steps.steps.last_mut() {
                    Some(step) if !step.repeat => step.repeat = true,
                    _ => return Err(ParseStepsError::MisplacedRepeat { position }),
                },
                '?' => {
                    if chars.peek().is_some() {
                        return Err(ParseStepsError::MisplacedLenient { position });
                    }
                    steps.lenient = true;
                }
                _ => {
                    let direction = Direction::try_from(token).map_err(|_| {
                        ParseStepsError::UnknownToken { token, position }
                    })?;
                    steps.push(direction);
                }
            }
        }

        Ok(steps)
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step.direction)?;
            if step.repeat {
                f.write_str("*")?;
            }
        }
        if self.lenient {
            f.write_str("?")?;
        }
        Ok(())
    }
}

impl From<Direction> for Steps {
    fn from(direction: Direction) -> Steps {
        std::iter::once(direction).collect()
    }
}

impl FromIterator<Direction> for Steps {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        Steps {
            steps: iter.into_iter().map(Step::from).collect(),
            lenient: false,
        }
    }
}

/// Parsing failed for a step-string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseStepsError {
    #[error("unknown step {token:?} at position {position}; expected one of A-F")]
    UnknownToken { token: char, position: usize },
    #[error("`*` at position {position} must follow a direction exactly once")]
    MisplacedRepeat { position: usize },
    #[error("`?` at position {position} may only end a step-string")]
    MisplacedLenient { position: usize },
}
