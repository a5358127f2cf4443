//! Colors of the widget.
//!
//! The background is a `#RRGGBB` color from the settings; text is white on
//! dark backgrounds and black on light ones. [`PALETTES`] lists curated
//! backgrounds to pick from.

use ratatui::style::Color;

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}': expected #RRGGBB")]
pub struct InvalidColor(pub String);

/// A 24-bit RGB color.
///
/// # Examples
///
/// ```
/// use nextbday_tui::theme::Rgb;
///
/// let navy: Rgb = "#14213D".parse().unwrap();
/// assert_eq!(navy, Rgb::new(0x14, 0x21, 0x3D));
/// assert!(navy.is_dark());
/// assert!(!Rgb::new(0xFF, 0xD6, 0x0A).is_dark());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness (YIQ luma), from 0 to 255.
    #[must_use]
    pub fn brightness(self) -> u32 {
        (u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114) / 1000
    }

    /// Whether light text reads better on this color.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.brightness() < 128
    }

    /// White on dark colors, black on light ones.
    #[must_use]
    pub fn text_color(self) -> Color {
        if self.is_dark() {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl std::str::FromStr for Rgb {
    type Err = InvalidColor;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidColor(value.to_string());
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Background and text colors of a rendered widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Widget background.
    pub background: Rgb,
}

impl Theme {
    /// Background the error panel falls back to when the configured color is
    /// unusable.
    pub const FALLBACK_BACKGROUND: Rgb = Rgb::new(0x14, 0x21, 0x3D);

    /// Creates a theme from a `#RRGGBB` background.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColor`] if the color cannot be parsed.
    pub fn from_background(color: &str) -> Result<Self, InvalidColor> {
        Ok(Self {
            background: color.parse()?,
        })
    }

    /// Color of regular text.
    #[must_use]
    pub fn text(&self) -> Color {
        self.background.text_color()
    }

    /// Color of error messages that the user can act on.
    #[must_use]
    pub fn warning(&self) -> Color {
        if self.background.is_dark() {
            Color::Yellow
        } else {
            Color::Rgb(0xFF, 0x95, 0x00)
        }
    }

    /// Color of critical error messages.
    #[must_use]
    pub fn critical(&self) -> Color {
        Color::Red
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Self::FALLBACK_BACKGROUND,
        }
    }
}

/// A named group of background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Palette name.
    pub name: &'static str,
    /// `(color name, #RRGGBB)` pairs.
    pub colors: &'static [(&'static str, &'static str)],
}

/// The curated background palettes.
pub const PALETTES: &[Palette] = &[
    Palette {
        name: "main",
        colors: &[
            ("Gold Web Golden Yellow", "#FFD60A"),
            ("Red Orange Color Wheel", "#FF4800"),
            ("Maximum Red", "#BF0A1A"),
            ("Paradise Pink", "#EF476F"),
            ("Byzantine Purple", "#B5179E"),
            ("Ultramarine Blue", "#4361EE"),
            ("Pakistan Green", "#007200"),
            ("Windsor Tan Brown", "#99582A"),
            ("Black", "#000000"),
            ("White", "#FFFFFF"),
            ("Gray", "#AAAAAA"),
        ],
    },
    Palette {
        name: "noble",
        colors: &[
            ("Honey Yellow", "#FDB833"),
            ("Spanish Orange", "#E36414"),
            ("Ruby Red", "#9A031E"),
            ("Tyrian Purple", "#5F0F40"),
            ("Prussian Blue", "#003459"),
            ("Bottle Green", "#226F54"),
            ("Rich Black FOGRA 29", "#011627"),
            ("Ghost White", "#FBFBFF"),
            ("Slate Gray", "#70798C"),
        ],
    },
    Palette {
        name: "dark",
        colors: &[
            ("Indian Yellow", "#E09F3E"),
            ("Rosewood", "#540B0E"),
            ("Scarlet Red", "#930000"),
            ("Antique Fuchsia", "#966289"),
            ("Cyber Grape", "#5A3B72"),
            ("Palatinate Purple", "#4D194D"),
            ("Russian Violet", "#3A015C"),
            ("Oxford Blue", "#14213D"),
            ("Indigo Dye Blue", "#002D3F"),
            ("MSU Green", "#004439"),
            ("Kombu Green", "#283618"),
            ("Seal Brown", "#582F0E"),
            ("Black", "#000000"),
            ("Jet Gray", "#343434"),
        ],
    },
    Palette {
        name: "pastel",
        colors: &[
            ("Naples Yellow", "#FFE169"),
            ("Yellow Orange", "#FFAF54"),
            ("Light Coral", "#FF7878"),
            ("Plum Web Rosa", "#EAABF3"),
            ("Nadeshiko Pink", "#FFAFCC"),
            ("Baby Blue", "#A2D2FF"),
            ("Mint", "#52B788"),
            ("Cafe Au Lait", "#B08968"),
            ("Baby Powder", "#FAFDF6"),
            ("Gainsboro", "#D5DFDB"),
        ],
    },
    Palette {
        name: "bright",
        colors: &[
            ("Yellow", "#FFFF00"),
            ("Red", "#FF0000"),
            ("Magenta Process", "#F20089"),
            ("Electric Purple", "#BE0AFF"),
            ("Blue Jeans", "#00A6FB"),
            ("Electric Blue", "#0AEFFF"),
            ("Spring Bud", "#A1FF0A"),
            ("Malachite Green", "#04E762"),
        ],
    },
];

/// Looks up a palette by name, ignoring case.
#[must_use]
pub fn palette(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
