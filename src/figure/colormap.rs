//! Named colormaps for heatmap panels
//!
//! Built on plotters' `ColorMap` trait. The built-in maps cover the
//! common perceptual choices; `jet`, `rainbow` and `coolwarm` (the
//! names scientific plotting scripts usually pass) are derived from
//! evenly spaced RGB stops.

use std::str::FromStr;
use std::sync::LazyLock;

use plotters::style::colors::colormaps::{
    BlackWhite, Bone, ColorMap, Copper, DerivedColorMap, ViridisRGB,
};
use plotters::style::RGBColor;

use crate::error::FigureError;

static JET: LazyLock<DerivedColorMap<RGBColor>> = LazyLock::new(|| {
    DerivedColorMap::new(&[
        RGBColor(0, 0, 127),
        RGBColor(0, 0, 255),
        RGBColor(0, 255, 255),
        RGBColor(255, 255, 0),
        RGBColor(255, 0, 0),
        RGBColor(127, 0, 0),
    ])
});

static RAINBOW: LazyLock<DerivedColorMap<RGBColor>> = LazyLock::new(|| {
    DerivedColorMap::new(&[
        RGBColor(128, 0, 255),
        RGBColor(0, 128, 255),
        RGBColor(0, 255, 128),
        RGBColor(128, 255, 0),
        RGBColor(255, 128, 0),
        RGBColor(255, 0, 0),
    ])
});

static COOLWARM: LazyLock<DerivedColorMap<RGBColor>> = LazyLock::new(|| {
    DerivedColorMap::new(&[
        RGBColor(59, 76, 192),
        RGBColor(221, 221, 221),
        RGBColor(180, 4, 38),
    ])
});

/// A colormap identifier, parsed from its conventional name
///
/// # Example
///
/// ```rust,ignore
/// use solviz_rs::figure::Colormap;
///
/// let cmap: Colormap = "rainbow".parse()?;
/// let mid = cmap.sample(0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Viridis,
    Bone,
    Copper,
    Gray,
    Jet,
    Rainbow,
    Coolwarm,
}

impl Colormap {
    /// Sample the map at a normalized position
    ///
    /// `t` is clamped to `[0, 1]`; NaN samples map to the bottom of the
    /// scale so a degenerate value range still renders.
    pub fn sample(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Colormap::Viridis => ViridisRGB.get_color(t),
            Colormap::Bone => Bone.get_color(t),
            Colormap::Copper => Copper.get_color(t),
            Colormap::Gray => BlackWhite.get_color(t),
            Colormap::Jet => JET.get_color(t),
            Colormap::Rainbow => RAINBOW.get_color(t),
            Colormap::Coolwarm => COOLWARM.get_color(t),
        }
    }

    /// Conventional lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Bone => "bone",
            Colormap::Copper => "copper",
            Colormap::Gray => "gray",
            Colormap::Jet => "jet",
            Colormap::Rainbow => "rainbow",
            Colormap::Coolwarm => "coolwarm",
        }
    }
}

impl FromStr for Colormap {
    type Err = FigureError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "viridis" => Ok(Colormap::Viridis),
            "bone" => Ok(Colormap::Bone),
            "copper" => Ok(Colormap::Copper),
            "gray" | "grey" => Ok(Colormap::Gray),
            "jet" => Ok(Colormap::Jet),
            "rainbow" => Ok(Colormap::Rainbow),
            "coolwarm" => Ok(Colormap::Coolwarm),
            _ => Err(FigureError::UnknownColormap(name.to_string())),
        }
    }
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
