//! EAGLE command-script emission.
//!
//! The script is a flat sequence of editor commands: one `CHANGE DISPLAY OFF;`
//! preamble, then per LED a rotate, a move, a value, and a delete/set pair for
//! each part-number attribute. The consuming editor replays them against the
//! open board.

use std::fmt;

use ledring_layout::{AttributeTable, Color, PlacedLed};

/// One line of the generated script.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    DisplayOff,
    Rotate { index: u32, angle: i32 },
    Move { index: u32, x: f64, y: f64 },
    Value { index: u32, color: Color },
    AttributeDelete { index: u32, key: String },
    AttributeSet { index: u32, key: String, value: String },
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::DisplayOff => write!(f, "CHANGE DISPLAY OFF;"),
            Directive::Rotate { index, angle } => write!(f, "ROTATE =R{angle} D{index}"),
            // Coordinates carry exactly 4 decimals, zero-filled to width 6.
            Directive::Move { index, x, y } => write!(f, "MOVE D{index} ({x:06.4} {y:06.4})"),
            Directive::Value { index, color } => write!(f, "VALUE D{index} {color}"),
            Directive::AttributeDelete { index, key } => {
                write!(f, "ATTRIBUTE D{index} {key} DELETE")
            }
            Directive::AttributeSet { index, key, value } => {
                write!(f, "ATTRIBUTE D{index} {key} '{value}';")
            }
        }
    }
}

/// Builds the directive stream for the given placements, preamble included.
/// Attribute keys are emitted in the table's defined order, each value set
/// preceded by a delete that clears any stale attribute on the component.
pub fn script_directives(leds: &[PlacedLed], attributes: &AttributeTable) -> Vec<Directive> {
    let mut directives = Vec::with_capacity(1 + leds.len() * 7);
    directives.push(Directive::DisplayOff);

    for led in leds {
        directives.push(Directive::Rotate {
            index: led.index,
            angle: led.rotation,
        });
        directives.push(Directive::Move {
            index: led.index,
            x: led.x,
            y: led.y,
        });
        directives.push(Directive::Value {
            index: led.index,
            color: led.color,
        });
        for (key, value) in attributes.get(led.color) {
            directives.push(Directive::AttributeDelete {
                index: led.index,
                key: key.clone(),
            });
            directives.push(Directive::AttributeSet {
                index: led.index,
                key: key.clone(),
                value: value.clone(),
            });
        }
    }

    directives
}

/// Renders the full script, one directive per line, trailing newline.
pub fn eagle_script(leds: &[PlacedLed], attributes: &AttributeTable) -> String {
    let mut out = String::new();
    for directive in script_directives(leds, attributes) {
        out.push_str(&directive.to_string());
        out.push('\n');
    }
    out
}
