use clap::ValueEnum;
use crossterm::style::{Color, Stylize};

pub const BOMB: Color = rgb(0xAF0000);
pub const FLAG: Color = rgb(0xFFFFFF);
pub const FIELD: Color = rgb(0x70483C);
pub const PLAYER: Color = rgb(0xAF5FAF);
pub const PLAYER_FIELD: Color = rgb(0x4D1B29);
pub const HIGHLIGHT: Color = rgb(0x00FF00);

const fn rgb(hex: u32) -> Color {
    Color::Rgb {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

/// Colour ramps for the numbers 1 to 7, taken from matplotlib with the darkest and lightest ninths dropped.
///
/// Seven is the most a safe cell can show: eight bombs around a cell would wall it in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    Viridis,
    Plasma,
    Inferno,
    Magma,
    #[default]
    #[value(name = "gist_earth")]
    GistEarth,
    #[value(name = "CMRmap")]
    CmrMap,
    Cubehelix,
    Gnuplot2,
}

impl Scheme {
    pub const fn numbers(self) -> [Color; 7] {
        let hex = match self {
            Self::Viridis => [
                0x482878,
                0x3E4989,
                0x31688E,
                0x26828E,
                0x1F9E89,
                0x35B779,
                0x6ECE58,
            ],
            Self::Plasma => [
                0x46039F,
                0x7201A8,
                0x9C179E,
                0xBD3786,
                0xD8576B,
                0xED7953,
                0xFB9F3A,
            ],
            Self::Inferno => [
                0x1B0C41,
                0x4A0C6B,
                0x781C6D,
                0xA52C60,
                0xCF4446,
                0xED6925,
                0xFB9B06,
            ],
            Self::Magma => [
                0x180F3D,
                0x440F76,
                0x721F81,
                0x9E2F7F,
                0xCD4071,
                0xF1605D,
                0xFD9668,
            ],
            Self::GistEarth => [
                0x133078,
                0x25677D,
                0x368770,
                0x43984D,
                0x7CA753,
                0xAAB35C,
                0xC0A565,
            ],
            Self::CmrMap => [
                0x222270,
                0x4326B0,
                0x802F95,
                0xD13A4F,
                0xF35D15,
                0xE69508,
                0xE6C932,
            ],
            Self::Cubehelix => [
                0x1A1835,
                0x15464E,
                0x2B6F39,
                0x757B33,
                0xC17A70,
                0xD490C6,
                0xC3C1F2,
            ],
            Self::Gnuplot2 => [
                0x000070,
                0x0000E0,
                0x4200FF,
                0x9A0CF3,
                0xF546B9,
                0xFF7E81,
                0xFFB847,
            ],
        };
        [
            rgb(hex[0]),
            rgb(hex[1]),
            rgb(hex[2]),
            rgb(hex[3]),
            rgb(hex[4]),
            rgb(hex[5]),
            rgb(hex[6]),
        ]
    }

    /// Colour for a revealed number, saturating at the top of the ramp.
    pub fn number(self, n: u8) -> Color {
        let index = usize::from(n.clamp(1, 7)) - 1;
        self.numbers()[index]
    }
}

/// `--help` epilogue showing every scheme in its own colours.
pub fn scheme_help() -> String {
    let mut help = String::from("Available colour schemes:\n");
    for scheme in Scheme::value_variants() {
        let Some(value) = scheme.to_possible_value() else {
            continue;
        };
        let digits: Vec<String> = (1..=7)
            .map(|n| n.to_string().with(scheme.number(n)).to_string())
            .collect();
        help.push_str(&format!("\n{}:\n  {}\n", value.get_name(), digits.join(" ")));
    }
    help
}
