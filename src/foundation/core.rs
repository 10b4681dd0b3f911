//! Canvas geometry and the composition spec.
//!
//! Every tuned pixel constant of the layout lives here as named
//! configuration. The defaults are calibrated to the shipped frame artwork
//! (a 1079×1345 design with an opaque band over the lower ~32% of the
//! canvas); compositions using different frame artwork should supply their
//! own spec rather than assume these values generalize.

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Fixed-size output raster dimensions.
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1079,
            height: 1345,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Geometry of the text band near the canvas bottom where the date and the
/// headline are drawn. All values are design constants, not derived from
/// content.
pub struct TextBandSpec {
    /// Horizontal margin kept clear on both sides of the headline.
    pub side_margin: f64,
    /// Fraction of total canvas height covered by the frame's lower band.
    pub height_fraction: f64,
    /// Offset from the band's raw top edge down to the usable text area.
    pub top_inset: f64,
    /// Height subtracted from the raw band to get the usable text area.
    pub bottom_inset: f64,
    /// Date position relative to `(side_margin, band top)`.
    pub date_offset: (f64, f64),
    /// Vertical space reserved for the date when budgeting headline height.
    pub date_reserve: f64,
    /// Space from the band top to the earliest headline start.
    pub main_top_margin: f64,
    /// Space kept clear below the headline block.
    pub main_bottom_margin: f64,
    /// Extra pixels between consecutive headline lines.
    pub line_spacing: f64,
}

impl Default for TextBandSpec {
    fn default() -> Self {
        Self {
            side_margin: 60.0,
            height_fraction: 0.32,
            top_inset: 60.0,
            bottom_inset: 80.0,
            date_offset: (180.0, 50.0),
            date_reserve: 60.0,
            main_top_margin: 80.0,
            main_bottom_margin: 20.0,
            line_spacing: 15.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Placement and padding of the category badge.
pub struct BadgeSpec {
    /// Badge anchor x, measured back from the canvas's right edge.
    pub anchor_inset_right: f64,
    /// Badge anchor y from the canvas top.
    pub anchor_y: f64,
    /// Horizontal and vertical padding between text and rectangle.
    pub padding: (f64, f64),
}

impl Default for BadgeSpec {
    fn default() -> Self {
        Self {
            anchor_inset_right: 490.0,
            anchor_y: 870.0,
            padding: (20.0, 10.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Fixed footprint and placement of the optional logo layer.
pub struct LogoSpec {
    /// Logo is resampled to exactly this size before pasting.
    pub size: (u32, u32),
    /// Paste position of the logo's top-left corner, horizontally
    /// off-center toward the right.
    pub offset: (i64, i64),
}

impl Default for LogoSpec {
    fn default() -> Self {
        Self {
            size: (150, 70),
            offset: (844, 30),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Ordered font candidate lists and pixel sizes per text role.
pub struct FontPlan {
    /// Headline candidates, boldest first.
    pub main: Vec<String>,
    /// Date candidates, italic preferred.
    pub date: Vec<String>,
    /// Category badge candidates.
    pub category: Vec<String>,
    /// Date text size in pixels.
    pub date_size: f32,
    /// Starting headline size for the fitting search.
    pub main_initial_size: f32,
    /// Floor headline size. The fitter never goes below this.
    pub main_min_size: f32,
    /// Fixed decrement between fitting trials.
    pub main_size_step: f32,
    /// Category badge text size in pixels.
    pub category_size: f32,
}

impl Default for FontPlan {
    fn default() -> Self {
        Self {
            main: vec![
                "Poppins-Bold.ttf".to_string(),
                "Montserrat-Bold.ttf".to_string(),
                "arialbd.ttf".to_string(),
                "ariblk.ttf".to_string(),
                "arial.ttf".to_string(),
            ],
            date: vec![
                "Poppins-Italic.ttf".to_string(),
                "Montserrat-Italic.ttf".to_string(),
                "ariali.ttf".to_string(),
                "arial.ttf".to_string(),
            ],
            category: vec![
                "Poppins-BoldItalic.ttf".to_string(),
                "Montserrat-BoldItalic.ttf".to_string(),
                "Montserrat-Bold.ttf".to_string(),
                "arialbd.ttf".to_string(),
            ],
            date_size: 30.0,
            main_initial_size: 45.0,
            main_min_size: 25.0,
            main_size_step: 5.0,
            category_size: 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Straight (non-premultiplied) RGBA colors for the text overlay.
pub struct Palette {
    /// Headline color.
    pub text: [u8; 4],
    /// Date accent color.
    pub accent: [u8; 4],
    /// Category badge text color.
    pub badge_text: [u8; 4],
    /// Category badge rectangle fill. Fully transparent by default.
    pub badge_background: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: [255, 255, 255, 255],
            accent: [0, 178, 80, 255],
            badge_text: [255, 255, 255, 255],
            badge_background: [0, 0, 0, 0],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Complete layout configuration for one composition style.
pub struct ComposeSpec {
    /// Output canvas size.
    pub canvas: Canvas,
    /// Text band geometry.
    pub band: TextBandSpec,
    /// Category badge placement.
    pub badge: BadgeSpec,
    /// Logo footprint and placement.
    pub logo: LogoSpec,
    /// Font candidates and sizes.
    pub fonts: FontPlan,
    /// Overlay colors.
    pub palette: Palette,
}
