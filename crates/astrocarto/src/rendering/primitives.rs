use serde::{Deserialize, Serialize};

/// Color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Create color from hex string (e.g., "#FF0000" or "#FF0000FF")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    /// `#RRGGBB`, with an alpha byte appended when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Alternating stroke/gap lengths, starting with a stroke
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DashPattern(pub &'static [f32]);

impl DashPattern {
    pub const SOLID: DashPattern = DashPattern(&[1.0, 0.0]);

    pub fn lengths(&self) -> &'static [f32] {
        self.0
    }

    pub fn is_solid(&self) -> bool {
        self.0.iter().skip(1).step_by(2).all(|gap| *gap <= 0.0)
    }

    /// Stroke segments `(start, end)` covering `width` units
    ///
    /// Pattern lengths are multiplied by `unit` before tiling.
    pub fn segments(&self, width: f32, unit: f32) -> Vec<(f32, f32)> {
        if self.is_solid() || width <= 0.0 {
            return vec![(0.0, width.max(0.0))];
        }
        let period: f32 = self.0.iter().map(|l| l.max(0.0) * unit).sum();
        if period <= 0.0 {
            return vec![(0.0, width)];
        }

        let mut segments = Vec::new();
        let mut cursor = 0.0;
        'tile: loop {
            for (i, length) in self.0.iter().enumerate() {
                if cursor >= width {
                    break 'tile;
                }
                let end = (cursor + length.max(0.0) * unit).min(width);
                if i % 2 == 0 && end > cursor {
                    segments.push((cursor, end));
                }
                cursor = end;
            }
        }
        segments
    }

    /// Text strip of `cells` characters, one cell per pattern unit
    pub fn swatch_text(&self, cells: usize) -> String {
        let mut strip = String::with_capacity(cells * 3);
        let mut drawn = vec![false; cells];
        for (start, end) in self.segments(cells as f32, 1.0) {
            let from = start.floor() as usize;
            let to = (end.ceil() as usize).min(cells);
            for cell in drawn.iter_mut().take(to).skip(from) {
                *cell = true;
            }
        }
        for cell in drawn {
            strip.push(if cell { '━' } else { ' ' });
        }
        strip
    }
}

impl Default for DashPattern {
    fn default() -> Self {
        DashPattern::SOLID
    }
}

/// Shape drawn where two segments of a line meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Shape drawn at the open ends of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}
