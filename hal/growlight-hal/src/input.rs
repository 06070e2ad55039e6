//! Input decoding
//!
//! Pin-level decoders for the rotary encoder and its push button. Both are
//! fed raw pin levels by a polling task; nothing here touches hardware.

/// Rotation direction of one encoder detent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// A leads B
    Clockwise,
    /// B leads A
    CounterClockwise,
}

impl Direction {
    /// Signed step for this direction, flipped when `invert` is set
    pub fn delta(self, invert: bool) -> i32 {
        let delta = match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        };
        if invert {
            -delta
        } else {
            delta
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Quadrature decoder for a detented encoder with pull-ups
///
/// Both lines rest high between detents. One full detent passes through
/// one line low, both low, then back up:
///
/// ```text
/// CW:  (1,1) -> (0,1) -> (0,0) -> (1,x)/(x,1)
/// CCW: (1,1) -> (1,0) -> (0,0) -> (x,1)/(1,x)
/// ```
///
/// Bounces back to `(1,1)` before both lines are low are discarded.
#[derive(Debug, Clone, Copy)]
pub struct QuadratureDecoder {
    state: State,
    last: (bool, bool),
}

impl QuadratureDecoder {
    /// Create a decoder from the current pin levels
    pub const fn new(a: bool, b: bool) -> Self {
        Self {
            state: State::Idle,
            last: (a, b),
        }
    }

    /// Feed the current pin levels, returning a direction on a completed detent
    pub fn update(&mut self, a: bool, b: bool) -> Option<Direction> {
        if (a, b) == self.last {
            return None;
        }
        self.last = (a, b);

        match self.state {
            State::Idle => {
                if !a && b {
                    self.state = State::CwStep1;
                } else if a && !b {
                    self.state = State::CcwStep1;
                }
                None
            }
            State::CwStep1 | State::CcwStep1 => {
                if !a && !b {
                    self.state = if self.state == State::CwStep1 {
                        State::CwStep2
                    } else {
                        State::CcwStep2
                    };
                } else if a && b {
                    self.state = State::Idle;
                }
                None
            }
            State::CwStep2 => {
                self.state = State::Idle;
                Some(Direction::Clockwise)
            }
            State::CcwStep2 => {
                self.state = State::Idle;
                Some(Direction::CounterClockwise)
            }
        }
    }
}

/// Push-button debouncer
///
/// A level must stay unchanged for longer than the debounce time before it
/// counts. Reports one press per stable low (pressed) level.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    debounce_ms: u64,
    level: bool,
    changed_at: Option<u64>,
}

impl Debouncer {
    /// Create a debouncer for an active-low button that starts released
    pub const fn new(debounce_ms: u64) -> Self {
        Self {
            debounce_ms,
            level: true,
            changed_at: None,
        }
    }

    /// Sample the pin level at `now_ms`; returns true once per settled press
    pub fn update(&mut self, level: bool, now_ms: u64) -> bool {
        if level != self.level {
            self.level = level;
            self.changed_at = Some(now_ms);
            return false;
        }

        match self.changed_at {
            Some(at) if now_ms.saturating_sub(at) > self.debounce_ms => {
                self.changed_at = None;
                !self.level
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(decoder: &mut QuadratureDecoder, levels: &[(bool, bool)]) -> Option<Direction> {
        let mut result = None;
        for &(a, b) in levels {
            if let Some(dir) = decoder.update(a, b) {
                result = Some(dir);
            }
        }
        result
    }

    #[test]
    fn test_clockwise_detent() {
        let mut decoder = QuadratureDecoder::new(true, true);
        let dir = feed(&mut decoder, &[(false, true), (false, false), (true, false), (true, true)]);
        assert_eq!(dir, Some(Direction::Clockwise));
    }

    #[test]
    fn test_counter_clockwise_detent() {
        let mut decoder = QuadratureDecoder::new(true, true);
        let dir = feed(&mut decoder, &[(true, false), (false, false), (false, true), (true, true)]);
        assert_eq!(dir, Some(Direction::CounterClockwise));
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut decoder = QuadratureDecoder::new(true, true);
        let dir = feed(&mut decoder, &[(false, true), (true, true), (false, true), (true, true)]);
        assert_eq!(dir, None);
    }

    #[test]
    fn test_unchanged_levels_do_nothing() {
        let mut decoder = QuadratureDecoder::new(true, true);
        assert_eq!(decoder.update(true, true), None);
        assert_eq!(decoder.update(true, true), None);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Clockwise.delta(false), 1);
        assert_eq!(Direction::Clockwise.delta(true), -1);
        assert_eq!(Direction::CounterClockwise.delta(true), 1);
    }

    #[test]
    fn test_press_after_debounce() {
        let mut button = Debouncer::new(50);
        assert!(!button.update(false, 0));
        assert!(!button.update(false, 50));
        assert!(button.update(false, 51));
        // Holding does not repeat
        assert!(!button.update(false, 200));
    }

    #[test]
    fn test_release_is_not_a_press() {
        let mut button = Debouncer::new(50);
        button.update(false, 0);
        button.update(false, 100);
        assert!(!button.update(true, 150));
        assert!(!button.update(true, 300));
    }

    #[test]
    fn test_chatter_restarts_debounce() {
        let mut button = Debouncer::new(50);
        button.update(false, 0);
        button.update(true, 30);
        button.update(false, 60);
        assert!(!button.update(false, 100));
        assert!(button.update(false, 111));
    }
}
