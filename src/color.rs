use std::borrow::Cow;
use std::io;

/// Severity colors a transcript line can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    /// SGR attribute of this color.
    pub const fn ansi_attribute(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
        }
    }
}

/// Wraps text in ANSI escape sequences, or leaves it untouched.
///
/// Whether colors are applied is fixed at construction, so everything
/// rendered through one colorizer agrees on the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colorizer {
    use_colors: bool,
}

impl Colorizer {
    pub const fn new(use_colors: bool) -> Self {
        Colorizer { use_colors }
    }

    /// Wrap `text` in the escape sequence for `color`.
    ///
    /// A disabled colorizer borrows the input unchanged.
    pub fn colorize<'t>(&self, text: &'t str, color: Color) -> Cow<'t, str> {
        match self.use_colors {
            true => Cow::Owned(format!(
                "\x1b[{attribute}m{text}\x1b[0m",
                attribute = color.ansi_attribute()
            )),
            false => Cow::Borrowed(text),
        }
    }
}

/// Setting to decide whether the output should be colored.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ColorSetting {
    /// Decide via [`SupportsColor`] of the output target.
    #[default]
    Automatic,

    /// Force colored output.
    Always,

    /// Force uncolored output.
    Never,
}

impl From<bool> for ColorSetting {
    fn from(use_colors: bool) -> Self {
        match use_colors {
            true => ColorSetting::Always,
            false => ColorSetting::Never,
        }
    }
}

/// Whether an output target supports colored output.
///
/// Implemented for everything that is [`io::IsTerminal`].
pub trait SupportsColor {
    fn supports_color(&self) -> bool;
}

impl<T: io::IsTerminal> SupportsColor for T {
    fn supports_color(&self) -> bool {
        self.is_terminal()
    }
}
