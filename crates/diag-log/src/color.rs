use crate::LogError;
use owo_colors::Style;
use std::fmt;
use std::str::FromStr;

/// Fixed table of terminal colors and styles, keyed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Bold,
    Dim,
    Underline,
    Inverse,
}

impl Color {
    pub const ALL: [Color; 20] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Gray,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
        Color::Bold,
        Color::Dim,
        Color::Underline,
        Color::Inverse,
    ];

    /// Table key, as accepted by [`Color::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Gray => "gray",
            Color::BrightRed => "brightRed",
            Color::BrightGreen => "brightGreen",
            Color::BrightYellow => "brightYellow",
            Color::BrightBlue => "brightBlue",
            Color::BrightMagenta => "brightMagenta",
            Color::BrightCyan => "brightCyan",
            Color::BrightWhite => "brightWhite",
            Color::Bold => "bold",
            Color::Dim => "dim",
            Color::Underline => "underline",
            Color::Inverse => "inverse",
        }
    }

    /// SGR parameter of the table entry. The bytes written come from
    /// [`Color::style`]; both tables are checked against each other in tests.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Gray => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::BrightWhite => 97,
            Color::Bold => 1,
            Color::Dim => 2,
            Color::Underline => 4,
            Color::Inverse => 7,
        }
    }

    pub fn style(self) -> Style {
        let style = Style::new();
        match self {
            Color::Black => style.black(),
            Color::Red => style.red(),
            Color::Green => style.green(),
            Color::Yellow => style.yellow(),
            Color::Blue => style.blue(),
            Color::Magenta => style.magenta(),
            Color::Cyan => style.cyan(),
            Color::White => style.white(),
            Color::Gray => style.bright_black(),
            Color::BrightRed => style.bright_red(),
            Color::BrightGreen => style.bright_green(),
            Color::BrightYellow => style.bright_yellow(),
            Color::BrightBlue => style.bright_blue(),
            Color::BrightMagenta => style.bright_magenta(),
            Color::BrightCyan => style.bright_cyan(),
            Color::BrightWhite => style.bright_white(),
            Color::Bold => style.bold(),
            Color::Dim => style.dimmed(),
            Color::Underline => style.underline(),
            Color::Inverse => style.reversed(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = LogError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.name() == name)
            .ok_or_else(|| LogError::UnknownColor {
                name: name.to_string(),
            })
    }
}

/// Named semantic logging channel bound to one fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Ok,
    Success,
    Error,
    Warn,
    Info,
    Debug,
    Banner,
    BannerBlue,
    BannerMagenta,
    BannerInverse,
}

impl Channel {
    pub const ALL: [Channel; 10] = [
        Channel::Ok,
        Channel::Success,
        Channel::Error,
        Channel::Warn,
        Channel::Info,
        Channel::Debug,
        Channel::Banner,
        Channel::BannerBlue,
        Channel::BannerMagenta,
        Channel::BannerInverse,
    ];

    pub fn color(self) -> Color {
        match self {
            Channel::Ok => Color::Green,
            Channel::Success => Color::BrightGreen,
            Channel::Error => Color::BrightRed,
            Channel::Warn => Color::Yellow,
            Channel::Info => Color::Cyan,
            Channel::Debug => Color::Gray,
            Channel::Banner => Color::Bold,
            Channel::BannerBlue => Color::BrightBlue,
            Channel::BannerMagenta => Color::BrightMagenta,
            Channel::BannerInverse => Color::Inverse,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Ok => "ok",
            Channel::Success => "success",
            Channel::Error => "error",
            Channel::Warn => "warn",
            Channel::Info => "info",
            Channel::Debug => "debug",
            Channel::Banner => "banner",
            Channel::BannerBlue => "bannerBlue",
            Channel::BannerMagenta => "bannerMagenta",
            Channel::BannerInverse => "bannerInverse",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
