// Board geometry: eight palaces around the center, each split into three concentric departments.
// Everything here is a pure function of `BoardLayout`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use enum_map::Enum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::config::BoardLayout;


pub const CENTER_ZONE_ID: &str = "zhong_gong";

// Listed clockwise starting from the top of the board.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Enum, EnumIter, EnumString,
    IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Palace {
    Li,
    Kun,
    Dui,
    Qian,
    Kan,
    Gen,
    Zhen,
    Xun,
}

// Listed from the center outwards.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Enum, EnumIter, EnumString,
    IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Tian,
    Ren,
    Di,
}

impl Palace {
    pub fn id(self) -> &'static str { self.into() }
    pub fn sector_index(self) -> usize { self.into_usize() }

    pub fn name(self) -> &'static str {
        match self {
            Palace::Li => "离",
            Palace::Kun => "坤",
            Palace::Dui => "兑",
            Palace::Qian => "乾",
            Palace::Kan => "坎",
            Palace::Gen => "艮",
            Palace::Zhen => "震",
            Palace::Xun => "巽",
        }
    }

    pub fn trigram(self) -> char {
        match self {
            Palace::Li => '☲',
            Palace::Kun => '☷',
            Palace::Dui => '☱',
            Palace::Qian => '☰',
            Palace::Kan => '☵',
            Palace::Gen => '☶',
            Palace::Zhen => '☳',
            Palace::Xun => '☴',
        }
    }

    pub fn luoshu_number(self) -> u8 {
        match self {
            Palace::Li => 9,
            Palace::Kun => 2,
            Palace::Dui => 7,
            Palace::Qian => 6,
            Palace::Kan => 1,
            Palace::Gen => 8,
            Palace::Zhen => 3,
            Palace::Xun => 4,
        }
    }
}

impl Department {
    pub fn id(self) -> &'static str { self.into() }

    pub fn name(self) -> &'static str {
        match self {
            Department::Tian => "天",
            Department::Ren => "人",
            Department::Di => "地",
        }
    }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ZoneId {
    Sector { palace: Palace, department: Department },
    Center,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InvalidZoneId(pub String);

impl ZoneId {
    pub fn all() -> impl Iterator<Item = ZoneId> {
        Palace::iter()
            .cartesian_product(Department::iter())
            .map(|(palace, department)| ZoneId::Sector { palace, department })
            .chain(std::iter::once(ZoneId::Center))
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::Sector { palace, department } => {
                write!(f, "{}_{}", palace.id(), department.id())
            }
            ZoneId::Center => f.write_str(CENTER_ZONE_ID),
        }
    }
}

impl FromStr for ZoneId {
    type Err = InvalidZoneId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == CENTER_ZONE_ID {
            return Ok(ZoneId::Center);
        }
        let invalid = || InvalidZoneId(s.to_owned());
        let (palace, department) = s.split_once('_').ok_or_else(invalid)?;
        Ok(ZoneId::Sector {
            palace: Palace::from_str(palace).map_err(|_| invalid())?,
            department: Department::from_str(department).map_err(|_| invalid())?,
        })
    }
}


#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct FCoord {
    pub x: f64,
    pub y: f64,
}

// Formats a coordinate for an SVG attribute. Rounds to a thousandth so that the output is stable
// and readable; `+ 0.0` turns negative zero into zero.
pub fn svg_number(v: f64) -> String { format!("{}", (v * 1000.0).round() / 1000.0 + 0.0) }

pub fn polar_to_cartesian(center: FCoord, radius: f64, angle_deg: f64) -> FCoord {
    let rad = (angle_deg - 90.0).to_radians();
    FCoord {
        x: center.x + radius * rad.cos(),
        y: center.y + radius * rad.sin(),
    }
}

pub fn annulus_sector_path(
    center: FCoord, inner_radius: f64, outer_radius: f64, start_deg: f64, end_deg: f64,
) -> String {
    let p0 = polar_to_cartesian(center, inner_radius, start_deg);
    let p1 = polar_to_cartesian(center, outer_radius, start_deg);
    let p2 = polar_to_cartesian(center, outer_radius, end_deg);
    let p3 = polar_to_cartesian(center, inner_radius, end_deg);
    let large_arc_flag = if end_deg - start_deg <= 180.0 { "0" } else { "1" };
    let n = svg_number;
    format!(
        "M {} {} L {} {} A {r1} {r1} 0 {large_arc_flag} 1 {} {} \
        L {} {} A {r0} {r0} 0 {large_arc_flag} 0 {} {} Z",
        n(p0.x),
        n(p0.y),
        n(p1.x),
        n(p1.y),
        n(p2.x),
        n(p2.y),
        n(p3.x),
        n(p3.y),
        n(p0.x),
        n(p0.y),
        r0 = n(inner_radius),
        r1 = n(outer_radius),
    )
}


// Screen-space centers of every zone. Built once per layout and never changed afterwards.
#[derive(Clone, PartialEq, Debug)]
pub struct BoardGeometry {
    layout: BoardLayout,
    zone_centers: HashMap<ZoneId, FCoord>,
}

impl BoardGeometry {
    pub fn new(layout: BoardLayout) -> Self {
        let mut geometry = BoardGeometry { layout, zone_centers: HashMap::new() };
        let zone_centers = ZoneId::all()
            .map(|zone| (zone, geometry.compute_zone_center(zone)))
            .collect();
        geometry.zone_centers = zone_centers;
        geometry
    }

    pub fn layout(&self) -> &BoardLayout { &self.layout }
    pub fn center(&self) -> FCoord { self.layout.center }

    pub fn palace_start_angle(&self, palace: Palace) -> f64 {
        self.layout.first_sector_angle + self.layout.sector_span * palace.sector_index() as f64
    }
    pub fn palace_end_angle(&self, palace: Palace) -> f64 {
        self.palace_start_angle(palace) + self.layout.sector_span
    }
    pub fn palace_mid_angle(&self, palace: Palace) -> f64 {
        self.palace_start_angle(palace) + self.layout.sector_span / 2.0
    }

    pub fn zone_center(&self, zone: ZoneId) -> Option<FCoord> {
        self.zone_centers.get(&zone).copied()
    }

    // Resolves a position as sent by the server. Absent, malformed and unknown ids all resolve
    // to nothing.
    pub fn resolve_position(&self, position: &str) -> Option<FCoord> {
        let zone = ZoneId::from_str(position).ok()?;
        self.zone_center(zone)
    }

    // Where the qimen gate marker of a palace goes: between the middle and the outer ring.
    pub fn gate_anchor(&self, palace: Palace) -> FCoord {
        let radius = (self.layout.ring(Department::Di).outer
            + self.layout.ring(Department::Ren).outer)
            / 2.0;
        polar_to_cartesian(self.center(), radius, self.palace_mid_angle(palace))
    }

    pub fn label_anchor(&self, palace: Palace) -> FCoord {
        let radius = self.layout.ring(Department::Ren).mid();
        polar_to_cartesian(self.center(), radius, self.palace_mid_angle(palace))
    }

    pub fn trigram_anchor(&self, palace: Palace) -> FCoord {
        let radius = self.layout.ring(Department::Di).outer + self.layout.trigram_offset;
        polar_to_cartesian(self.center(), radius, self.palace_mid_angle(palace))
    }

    pub fn sector_path(&self, palace: Palace, department: Department) -> String {
        let ring = self.layout.ring(department);
        annulus_sector_path(
            self.center(),
            ring.inner,
            ring.outer,
            self.palace_start_angle(palace),
            self.palace_end_angle(palace),
        )
    }

    fn compute_zone_center(&self, zone: ZoneId) -> FCoord {
        match zone {
            ZoneId::Sector { palace, department } => polar_to_cartesian(
                self.center(),
                self.layout.ring(department).mid(),
                self.palace_mid_angle(palace),
            ),
            ZoneId::Center => self.center(),
        }
    }
}
