use egui::Color32;
use serde::{Deserialize, Serialize};

/// Drawing colour with each channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

pub const DEFAULT_COLOR: Rgb = Rgb::new(0.25, 0.5, 0.75);

impl Default for Rgb {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Returns a copy with one channel replaced, clamped to `[0, 1]`
    pub fn with_channel(mut self, channel: Channel, value: f64) -> Self {
        let value = value.clamp(0.0, 1.0);
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
        self
    }

    pub fn to_color32(self) -> Color32 {
        let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgb(to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// The fixed colour palette offered as swatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorPreset {
    White,
    Silver,
    Gray,
    Black,
    Red,
    Maroon,
    Yellow,
    Olive,
    Lime,
    Green,
    Aqua,
    Teal,
    Blue,
    Navy,
    Fuchsia,
    Purple,
}

impl ColorPreset {
    pub const ALL: [ColorPreset; 16] = [
        ColorPreset::White,
        ColorPreset::Silver,
        ColorPreset::Gray,
        ColorPreset::Black,
        ColorPreset::Red,
        ColorPreset::Maroon,
        ColorPreset::Yellow,
        ColorPreset::Olive,
        ColorPreset::Lime,
        ColorPreset::Green,
        ColorPreset::Aqua,
        ColorPreset::Teal,
        ColorPreset::Blue,
        ColorPreset::Navy,
        ColorPreset::Fuchsia,
        ColorPreset::Purple,
    ];

    pub fn rgb(&self) -> Rgb {
        match self {
            ColorPreset::White => Rgb::new(1.0, 1.0, 1.0),
            ColorPreset::Silver => Rgb::new(0.75, 0.75, 0.75),
            ColorPreset::Gray => Rgb::new(0.5, 0.5, 0.5),
            ColorPreset::Black => Rgb::new(0.0, 0.0, 0.0),
            ColorPreset::Red => Rgb::new(1.0, 0.0, 0.0),
            ColorPreset::Maroon => Rgb::new(0.5, 0.0, 0.0),
            ColorPreset::Yellow => Rgb::new(1.0, 1.0, 0.0),
            ColorPreset::Olive => Rgb::new(0.5, 0.5, 0.0),
            ColorPreset::Lime => Rgb::new(0.0, 1.0, 0.0),
            ColorPreset::Green => Rgb::new(0.0, 0.5, 0.0),
            ColorPreset::Aqua => Rgb::new(0.0, 1.0, 1.0),
            ColorPreset::Teal => Rgb::new(0.0, 0.5, 0.5),
            ColorPreset::Blue => Rgb::new(0.0, 0.0, 1.0),
            ColorPreset::Navy => Rgb::new(0.0, 0.0, 0.5),
            ColorPreset::Fuchsia => Rgb::new(1.0, 0.0, 1.0),
            ColorPreset::Purple => Rgb::new(0.5, 0.0, 0.5),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorPreset::White => "White",
            ColorPreset::Silver => "Silver",
            ColorPreset::Gray => "Gray",
            ColorPreset::Black => "Black",
            ColorPreset::Red => "Red",
            ColorPreset::Maroon => "Maroon",
            ColorPreset::Yellow => "Yellow",
            ColorPreset::Olive => "Olive",
            ColorPreset::Lime => "Lime",
            ColorPreset::Green => "Green",
            ColorPreset::Aqua => "Aqua",
            ColorPreset::Teal => "Teal",
            ColorPreset::Blue => "Blue",
            ColorPreset::Navy => "Navy",
            ColorPreset::Fuchsia => "Fuchsia",
            ColorPreset::Purple => "Purple",
        }
    }

    /// Preset whose colour equals `rgb` exactly, if any
    pub fn matching(rgb: Rgb) -> Option<ColorPreset> {
        Self::ALL.into_iter().find(|preset| preset.rgb() == rgb)
    }
}
