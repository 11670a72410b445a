use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Persisted tag of a record that holds in-progress points rather than a shape
pub const NONE_TAG: u8 = 0;

/// The shape variants, doubling as the drawing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Line,
    BezierCurve,
    Rectangle,
    Triangle,
    Pentagon,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Line,
        ShapeKind::BezierCurve,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Pentagon,
        ShapeKind::Circle,
    ];

    /// Number of placed points that completes a shape of this kind
    pub fn arity(&self) -> usize {
        match self {
            ShapeKind::Line => 2,
            ShapeKind::BezierCurve => 4,
            ShapeKind::Rectangle => 2,
            ShapeKind::Triangle => 3,
            ShapeKind::Pentagon => 5,
            ShapeKind::Circle => 2,
        }
    }

    /// Point counts accepted at construction. A rectangle may also be rebuilt
    /// from all four of its stored corners.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            ShapeKind::Rectangle => count == 2 || count == 4,
            _ => count == self.arity(),
        }
    }

    /// Whether the fill flag means anything for this kind
    pub fn is_closed(&self) -> bool {
        !matches!(self, ShapeKind::Line | ShapeKind::BezierCurve)
    }

    pub fn tag(&self) -> u8 {
        match self {
            ShapeKind::Line => 1,
            ShapeKind::BezierCurve => 2,
            ShapeKind::Rectangle => 3,
            ShapeKind::Triangle => 4,
            ShapeKind::Pentagon => 5,
            ShapeKind::Circle => 6,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Upper-case name used as an alternative persisted tag
    pub fn tag_name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "LINE",
            ShapeKind::BezierCurve => "BEZIER_CURVE",
            ShapeKind::Rectangle => "RECTANGLE",
            ShapeKind::Triangle => "TRIANGLE",
            ShapeKind::Pentagon => "PENTAGON",
            ShapeKind::Circle => "CIRCLE",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            ShapeKind::Line => 'l',
            ShapeKind::BezierCurve => 'b',
            ShapeKind::Rectangle => 'r',
            ShapeKind::Triangle => 't',
            ShapeKind::Pentagon => 'p',
            ShapeKind::Circle => 'c',
        }
    }

    /// Case-insensitive lookup of a mode key
    pub fn from_shortcut(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.shortcut() == c)
    }

    /// Control panel label with the shortcut letter in parentheses
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Line => "(L)ine",
            ShapeKind::BezierCurve => "(B)ezier Curve",
            ShapeKind::Rectangle => "(R)ectangle",
            ShapeKind::Triangle => "(T)riangle",
            ShapeKind::Pentagon => "(P)entagon",
            ShapeKind::Circle => "(C)ircle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Line => "Line",
            ShapeKind::BezierCurve => "BezierCurve",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Pentagon => "Pentagon",
            ShapeKind::Circle => "Circle",
        };
        f.write_str(name)
    }
}

/// A persisted record tag: either a shape kind or the in-progress marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordTag {
    InProgress,
    Shape(ShapeKind),
}

impl fmt::Display for RecordTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordTag::InProgress => write!(f, "{}", NONE_TAG),
            RecordTag::Shape(kind) => write!(f, "{}", kind.tag()),
        }
    }
}

impl FromStr for RecordTag {
    type Err = String;

    /// Accepts the numeric tag or its upper-case name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(tag) = s.parse::<u8>() {
            if tag == NONE_TAG {
                return Ok(RecordTag::InProgress);
            }
            return ShapeKind::from_tag(tag)
                .map(RecordTag::Shape)
                .ok_or_else(|| format!("unknown shape tag {}", tag));
        }
        if s.eq_ignore_ascii_case("NONE") {
            return Ok(RecordTag::InProgress);
        }
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.tag_name().eq_ignore_ascii_case(s))
            .map(RecordTag::Shape)
            .ok_or_else(|| format!("unknown shape tag '{}'", s))
    }
}
