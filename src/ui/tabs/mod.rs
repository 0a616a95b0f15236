pub mod history;
pub mod live;

/// Data mode of the dashboard: a live-updating stream or a date-ranged
/// historical report. Rendered as the tab bar in the header.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Realtime,
    History,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Realtime, Mode::History];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Realtime => "Live",
            Mode::History => "History",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Mode::Realtime => 0,
            Mode::History => 1,
        }
    }

    pub fn from_index(i: usize) -> Option<Mode> {
        Mode::ALL.get(i).copied()
    }

    pub fn next(&self) -> Mode {
        let idx = (self.index() + 1) % Mode::ALL.len();
        Mode::ALL[idx]
    }

    pub fn prev(&self) -> Mode {
        let idx = if self.index() == 0 {
            Mode::ALL.len() - 1
        } else {
            self.index() - 1
        };
        Mode::ALL[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_in_both_directions() {
        assert_eq!(Mode::Realtime.next(), Mode::History);
        assert_eq!(Mode::History.next(), Mode::Realtime);
        assert_eq!(Mode::Realtime.prev(), Mode::History);
    }

    #[test]
    fn index_round_trips() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_index(mode.index()), Some(mode));
        }
        assert_eq!(Mode::from_index(2), None);
    }
}
