use enum_map::{EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::geometry::{Department, FCoord};


#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct RingRadii {
    pub inner: f64,
    pub outer: f64,
}

impl RingRadii {
    pub const fn new(inner: f64, outer: f64) -> Self { RingRadii { inner, outer } }
    pub fn mid(&self) -> f64 { (self.inner + self.outer) / 2.0 }
}

// Fixed circular layout of the board in SVG user units. Angles are in degrees, measured from the
// vertical axis, clockwise.
//
// All fields have defaults, so a config file only needs to mention what it overrides. Note that
// `rings` is overridden as a whole: a partial ring table is rejected by `EnumMap` deserialization.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    pub center: FCoord,
    // Start angle of the first palace sector (li); every next palace starts `sector_span` later.
    pub first_sector_angle: f64,
    pub sector_span: f64,
    pub rings: EnumMap<Department, RingRadii>,
    pub token_radius: f64,
    pub gate_marker_radius: f64,
    // Distance between the outer edge of the outermost ring and the trigram symbols.
    pub trigram_offset: f64,
}

impl Default for BoardLayout {
    fn default() -> Self {
        BoardLayout {
            center: FCoord { x: 400.0, y: 400.0 },
            first_sector_angle: -22.5,
            sector_span: 45.0,
            rings: enum_map! {
                Department::Tian => RingRadii::new(82.0, 148.0),
                Department::Ren => RingRadii::new(148.0, 230.0),
                Department::Di => RingRadii::new(230.0, 313.0),
            },
            token_radius: 12.0,
            gate_marker_radius: 25.0,
            trigram_offset: 24.0,
        }
    }
}

impl BoardLayout {
    pub fn ring(&self, department: Department) -> RingRadii { self.rings[department] }

    // Side of the square SVG view box that fits the whole board, trigrams included.
    pub fn view_box_size(&self) -> f64 {
        let outer = self.rings.values().map(|r| r.outer).fold(0.0, f64::max);
        2.0 * f64::max(self.center.x, self.center.y).max(outer + self.trigram_offset * 2.0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_layout_keeps_defaults() {
        let layout: BoardLayout = serde_json::from_str(r#"{ "token_radius": 20 }"#).unwrap();
        assert_eq!(layout.token_radius, 20.0);
        assert_eq!(layout.center, FCoord { x: 400.0, y: 400.0 });
        assert_eq!(layout.ring(Department::Ren), RingRadii::new(148.0, 230.0));
    }

    #[test]
    fn default_view_box_covers_center() {
        assert_eq!(BoardLayout::default().view_box_size(), 800.0);
    }
}
