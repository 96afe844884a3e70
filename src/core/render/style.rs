use crate::core::data::colour::Colour;
use crate::core::step::FACTOR_MIN;
use crate::core::util::map_range::map_range;

/// How many whole factor steps make one full trip around the hue wheel in
/// Pattern mode.
pub const PATTERNS_IN_HUE_CYCLE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternColourMode {
    /// No colouring: every chord uses the dark foreground.
    None,
    /// Each chord gets its own hue from its index.
    Line,
    /// Each pattern (each factor) gets one shared hue.
    #[default]
    Pattern,
}

impl PatternColourMode {
    pub const ALL: &'static [PatternColourMode] = &[
        PatternColourMode::None,
        PatternColourMode::Line,
        PatternColourMode::Pattern,
    ];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Line => "Line",
            Self::Pattern => "Pattern",
        }
    }
}

/// Background and foreground shades for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Colour,
    pub fg_dark: Colour,
    pub fg_medium: Colour,
    pub fg_light: Colour,
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: Colour::new(0, 0, 0),
            fg_dark: Colour::new(255, 255, 255),
            fg_medium: Colour::new(225, 225, 225),
            fg_light: Colour::new(195, 195, 195),
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: Colour::new(255, 255, 255),
            fg_dark: Colour::new(0, 0, 0),
            fg_medium: Colour::new(25, 25, 25),
            fg_light: Colour::new(45, 45, 45),
        }
    }

    #[must_use]
    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }
}

/// The colour policy: an explicit configuration object constructed once,
/// owned by the controller and passed by reference into the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub palette: Palette,
    pub mode: PatternColourMode,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            palette: Palette::dark(),
            mode: PatternColourMode::default(),
        }
    }
}

impl RenderStyle {
    #[must_use]
    pub fn chord_colour(&self, index: u32, count: u32, factor: f64) -> Colour {
        match self.mode {
            PatternColourMode::None => self.palette.fg_dark,
            PatternColourMode::Line => {
                Colour::from_hsb(f64::from(index) / f64::from(count), 1.0, 1.0)
            }
            PatternColourMode::Pattern => pattern_colour(factor),
        }
    }

    #[must_use]
    pub fn circle_colour(&self, factor: f64) -> Colour {
        match self.mode {
            PatternColourMode::Pattern => pattern_colour(factor),
            _ => self.palette.fg_light,
        }
    }

    /// Markers ignore the colour mode.
    #[must_use]
    pub fn marker_colour(&self) -> Colour {
        self.palette.fg_medium
    }
}

fn pattern_hue(factor: f64) -> f64 {
    map_range(
        (factor - FACTOR_MIN).max(0.0) % PATTERNS_IN_HUE_CYCLE,
        0.0,
        PATTERNS_IN_HUE_CYCLE,
        0.0,
        1.0,
    )
}

fn pattern_colour(factor: f64) -> Colour {
    Colour::from_hsb(pattern_hue(factor), 1.0, 1.0)
}
