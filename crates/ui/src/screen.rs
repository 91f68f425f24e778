//! Screen identifier enum: the five weather views, in navigation order.

/// Every top-level view, in the fixed cyclic order the navigator walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// 7-day forecast columns.
    Forecast,
    /// Today in detail.
    Now,
    /// Hourly precipitation chart.
    Rain,
    /// Hourly wind chart.
    Wind,
    /// Two-column hourly list.
    Hours,
}

impl Screen {
    /// Navigation order.
    pub const ALL: [Screen; 5] = [
        Screen::Forecast,
        Screen::Now,
        Screen::Rain,
        Screen::Wind,
        Screen::Hours,
    ];

    /// Number of screens.
    pub const COUNT: usize = Self::ALL.len();

    /// Position in [`Screen::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Screen at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Screen::Forecast => "forecast",
            Screen::Now => "now",
            Screen::Rain => "rain",
            Screen::Wind => "wind",
            Screen::Hours => "hours",
        }
    }
}

impl core::fmt::Display for Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
