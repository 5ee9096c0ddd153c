//! Ring placement for the LED board: evenly spaced points on a circle,
//! alternating component orientation, quarter-turn color markers, and the
//! part-number attributes each color carries.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("led count must be at least 1")]
    ZeroLedCount,

    #[error("ring radius must be positive and finite (got {radius})")]
    InvalidRadius { radius: f64 },
}

/// Ring geometry and count. The center is derived, not stored: the circle
/// sits inscribed with a 2-unit margin from the board origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfig {
    pub led_count: u32,
    pub radius: f64,
    /// Offset added to every rotation directive, in degrees.
    pub start_angle: i32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            led_count: 36,
            radius: 15.0,
            start_angle: 0,
        }
    }
}

impl RingConfig {
    pub fn center(&self) -> (f64, f64) {
        (self.radius + 2.0, self.radius + 2.0)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.led_count == 0 {
            return Err(LayoutError::ZeroLedCount);
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(LayoutError::InvalidRadius {
                radius: self.radius,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Yellow => "YELLOW",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part identifiers attached to a component, in emission order.
pub type PartAttributes = IndexMap<String, String>;

/// Fixed color → part-number mapping for the LEDs on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeTable {
    red: PartAttributes,
    yellow: PartAttributes,
}

impl Default for AttributeTable {
    fn default() -> Self {
        let mut red = PartAttributes::new();
        red.insert("JLC".to_string(), "KT-0603R".to_string());
        red.insert("LCSC".to_string(), "C2286".to_string());

        let mut yellow = PartAttributes::new();
        yellow.insert("JLC".to_string(), "19-213/Y2C-CQ2R2L/3T(CY)".to_string());
        yellow.insert("LCSC".to_string(), "C72038".to_string());

        Self { red, yellow }
    }
}

impl AttributeTable {
    pub fn get(&self, color: Color) -> &PartAttributes {
        match color {
            Color::Red => &self.red,
            Color::Yellow => &self.yellow,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacedLed {
    /// 1-based component index, matching the `D<index>` reference on the board.
    pub index: u32,
    /// Degrees. Intentionally not normalized; values past 360 are kept as-is.
    pub rotation: i32,
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

/// Places every LED from 1 to `led_count`, ascending. Order is significant:
/// the consuming tool binds each command block to `D<index>`.
pub fn place_leds(config: &RingConfig) -> Result<Vec<PlacedLed>, LayoutError> {
    config.validate()?;

    let n = config.led_count;
    let (cx, cy) = config.center();
    // Integer floor, same as the board's historical placement script.
    let step = (360 / n) as i32;

    let mut leds = Vec::with_capacity(n as usize);
    for index in 1..=n {
        let mut rotation = config.start_angle + index as i32 * step;
        if index % 2 == 0 {
            // Every other LED faces the opposite way, for back-to-back pairs.
            rotation += 180;
        }

        let theta = std::f64::consts::TAU * (f64::from(index) / f64::from(n));
        leds.push(PlacedLed {
            index,
            rotation,
            x: config.radius * theta.cos() + cx,
            y: config.radius * theta.sin() + cy,
            color: classify(index, n),
        });
    }

    Ok(leds)
}

/// Quarter-turn markers are yellow: every `n / 4`-th LED, with integer floor,
/// so the marker spacing shifts when `n` is not a multiple of 4. Below
/// `n = 4` the divisor is zero and no marker exists.
pub fn classify(index: u32, n: u32) -> Color {
    let quarter = n / 4;
    if quarter != 0 && index % quarter == 0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_board() {
        let config = RingConfig::default();
        assert_eq!(config.led_count, 36);
        assert_eq!(config.radius, 15.0);
        assert_eq!(config.start_angle, 0);
        assert_eq!(config.center(), (17.0, 17.0));
    }

    #[test]
    fn quarter_markers_every_ninth_of_36() {
        for index in 1..=36 {
            let expected = if index % 9 == 0 {
                Color::Yellow
            } else {
                Color::Red
            };
            assert_eq!(classify(index, 36), expected, "index {index}");
        }
    }

    #[test]
    fn tiny_rings_have_no_markers() {
        for n in 1..4 {
            for index in 1..=n {
                assert_eq!(classify(index, n), Color::Red);
            }
        }
    }
}
