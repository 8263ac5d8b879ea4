// File: crates/plot-core/src/style.rs
// Summary: Style vocabulary (line styles, markers, colors, legend placement) parsed from matplotlib-style strings.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;

fn unknown(kind: &'static str, value: &str) -> ConfigurationError {
    ConfigurationError::UnknownStyle { kind, value: value.to_string() }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    DashDot,
    Dotted,
    /// Markers only, no connecting line.
    None,
}

impl LineStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Solid => "-",
            LineStyle::Dashed => "--",
            LineStyle::DashDot => "-.",
            LineStyle::Dotted => ":",
            LineStyle::None => "",
        }
    }
}

impl FromStr for LineStyle {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-" | "solid" => Ok(LineStyle::Solid),
            "--" | "dashed" => Ok(LineStyle::Dashed),
            "-." | "dashdot" => Ok(LineStyle::DashDot),
            ":" | "dotted" => Ok(LineStyle::Dotted),
            "" | "None" | "none" => Ok(LineStyle::None),
            other => Err(unknown("line style", other)),
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Point,
    Pixel,
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    X,
    Plus,
    Star,
    Diamond,
    ThinDiamond,
    Pentagon,
    Hexagon,
}

impl Marker {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Marker::Point => ".",
            Marker::Pixel => ",",
            Marker::Circle => "o",
            Marker::Square => "s",
            Marker::TriangleUp => "^",
            Marker::TriangleDown => "v",
            Marker::TriangleLeft => "<",
            Marker::TriangleRight => ">",
            Marker::X => "x",
            Marker::Plus => "+",
            Marker::Star => "*",
            Marker::Diamond => "D",
            Marker::ThinDiamond => "d",
            Marker::Pentagon => "p",
            Marker::Hexagon => "h",
        }
    }

    /// Parse a marker overlay entry where `""`/`"None"` mean "no marker".
    pub fn parse_optional(s: &str) -> Result<Option<Marker>, ConfigurationError> {
        match s.trim() {
            "" | "None" | "none" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl FromStr for Marker {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let m = match s.trim() {
            "." => Marker::Point,
            "," => Marker::Pixel,
            "o" => Marker::Circle,
            "s" => Marker::Square,
            "^" => Marker::TriangleUp,
            "v" => Marker::TriangleDown,
            "<" => Marker::TriangleLeft,
            ">" => Marker::TriangleRight,
            "x" => Marker::X,
            "+" => Marker::Plus,
            "*" => Marker::Star,
            "D" => Marker::Diamond,
            "d" => Marker::ThinDiamond,
            "p" => Marker::Pentagon,
            "h" => Marker::Hexagon,
            other => return Err(unknown("marker", other)),
        };
        Ok(m)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// The ten-color default cycle (tab10).
pub const DEFAULT_CYCLE: [Rgba; 10] = [
    Rgba::from_hex(0x1f77b4),
    Rgba::from_hex(0xff7f0e),
    Rgba::from_hex(0x2ca02c),
    Rgba::from_hex(0xd62728),
    Rgba::from_hex(0x9467bd),
    Rgba::from_hex(0x8c564b),
    Rgba::from_hex(0xe377c2),
    Rgba::from_hex(0x7f7f7f),
    Rgba::from_hex(0xbcbd22),
    Rgba::from_hex(0x17becf),
];

const NAMED: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xffffff),
    ("red", 0xff0000),
    ("green", 0x008000),
    ("blue", 0x0000ff),
    ("yellow", 0xffff00),
    ("cyan", 0x00ffff),
    ("magenta", 0xff00ff),
    ("orange", 0xffa500),
    ("purple", 0x800080),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("brown", 0xa52a2a),
    ("pink", 0xffc0cb),
    ("olive", 0x808000),
    ("navy", 0x000080),
    ("teal", 0x008080),
    ("lime", 0x00ff00),
    ("maroon", 0x800000),
    ("gold", 0xffd700),
    ("silver", 0xc0c0c0),
    ("darkblue", 0x00008b),
    ("darkred", 0x8b0000),
    ("darkgreen", 0x006400),
    ("darkorange", 0xff8c00),
    ("lightgray", 0xd3d3d3),
    ("lightgrey", 0xd3d3d3),
    ("crimson", 0xdc143c),
    ("indigo", 0x4b0082),
    ("violet", 0xee82ee),
    ("skyblue", 0x87ceeb),
    ("steelblue", 0x4682b4),
    ("royalblue", 0x4169e1),
    ("tomato", 0xff6347),
    ("salmon", 0xfa8072),
    ("coral", 0xff7f50),
    ("turquoise", 0x40e0d0),
    ("forestgreen", 0x228b22),
];

const TAB_NAMES: [&str; 10] = [
    "blue", "orange", "green", "red", "purple", "brown", "pink", "gray", "olive", "cyan",
];

/// A resolved color or a position in the surface's default cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Rgba(Rgba),
    /// `C<n>`: entry `n` of the surface's color cycle.
    Cycle(usize),
}

impl Color {
    pub const BLACK: Color = Color::Rgba(Rgba::rgb(0, 0, 0));

    /// Resolve against `cycle`, wrapping cycle indices.
    pub fn resolve(&self, cycle: &[Rgba]) -> Rgba {
        match *self {
            Color::Rgba(c) => c,
            Color::Cycle(i) if !cycle.is_empty() => cycle[i % cycle.len()],
            Color::Cycle(i) => DEFAULT_CYCLE[i % DEFAULT_CYCLE.len()],
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgba(c)
    }
}

fn parse_hex(digits: &str) -> Option<Rgba> {
    let nibble = |c: u8| (c as char).to_digit(16).map(|v| v as u8);
    let bytes = digits.as_bytes();
    match bytes.len() {
        3 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Some(Rgba::rgb(r * 17, g * 17, b * 17))
        }
        6 | 8 => {
            let byte = |i: usize| Some(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?);
            let a = if bytes.len() == 8 { byte(6)? } else { 255 };
            Some(Rgba { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
        }
        _ => None,
    }
}

impl FromStr for Color {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if let Some(hex) = raw.strip_prefix('#') {
            return parse_hex(hex).map(Color::Rgba).ok_or_else(|| unknown("color", raw));
        }
        if let Some(n) = raw.strip_prefix('C') {
            if let Ok(i) = n.parse::<usize>() {
                return Ok(Color::Cycle(i));
            }
        }
        // Single-letter codes are case sensitive.
        let short = match raw {
            "b" => Some(Rgba::rgb(0, 0, 255)),
            "g" => Some(Rgba::rgb(0, 128, 0)),
            "r" => Some(Rgba::rgb(255, 0, 0)),
            "c" => Some(Rgba::rgb(0, 191, 191)),
            "m" => Some(Rgba::rgb(191, 0, 191)),
            "y" => Some(Rgba::rgb(191, 191, 0)),
            "k" => Some(Rgba::rgb(0, 0, 0)),
            "w" => Some(Rgba::rgb(255, 255, 255)),
            _ => None,
        };
        if let Some(c) = short {
            return Ok(Color::Rgba(c));
        }
        let lower = raw.to_ascii_lowercase();
        if let Some(name) = lower.strip_prefix("tab:") {
            let name = if name == "grey" { "gray" } else { name };
            return TAB_NAMES
                .iter()
                .position(|t| *t == name)
                .map(|i| Color::Rgba(DEFAULT_CYCLE[i]))
                .ok_or_else(|| unknown("color", raw));
        }
        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|&(_, hex)| Color::Rgba(Rgba::from_hex(hex)))
            .ok_or_else(|| unknown("color", raw))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendLoc {
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

impl LegendLoc {
    const ALL: [LegendLoc; 11] = [
        LegendLoc::Best,
        LegendLoc::UpperRight,
        LegendLoc::UpperLeft,
        LegendLoc::LowerLeft,
        LegendLoc::LowerRight,
        LegendLoc::Right,
        LegendLoc::CenterLeft,
        LegendLoc::CenterRight,
        LegendLoc::LowerCenter,
        LegendLoc::UpperCenter,
        LegendLoc::Center,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            LegendLoc::Best => "best",
            LegendLoc::UpperRight => "upper right",
            LegendLoc::UpperLeft => "upper left",
            LegendLoc::LowerLeft => "lower left",
            LegendLoc::LowerRight => "lower right",
            LegendLoc::Right => "right",
            LegendLoc::CenterLeft => "center left",
            LegendLoc::CenterRight => "center right",
            LegendLoc::LowerCenter => "lower center",
            LegendLoc::UpperCenter => "upper center",
            LegendLoc::Center => "center",
        }
    }

    /// Numeric location codes 0..=10, in the same order as the names.
    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

impl FromStr for LegendLoc {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if let Ok(code) = raw.parse::<u64>() {
            return Self::from_code(code).ok_or_else(|| unknown("legend location", raw));
        }
        let lower = raw.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|loc| loc.as_str() == lower)
            .ok_or_else(|| unknown("legend location", raw))
    }
}

impl fmt::Display for LegendLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
