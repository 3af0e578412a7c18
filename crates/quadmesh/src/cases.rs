//! Built-in catalog of named test domains.
//!
//! Each case carries its own domain size; single shapes use `U=16`, the long
//! rectangle `U=32`, and the three-polygon combination `U=64`. All vertices are
//! integers, so boundaries run along the coarse grid lines in many places.

use crate::geom2::Polygon;
use crate::MeshError;

type Ring = &'static [(f64, f64)];

/// A named meshing case.
#[derive(Clone, Copy, Debug)]
pub struct Case {
    pub name: &'static str,
    pub size: u32,
    pub rings: &'static [Ring],
}

impl Case {
    pub fn polygons(&self) -> Result<Vec<Polygon>, MeshError> {
        self.rings.iter().map(|r| Polygon::from_coords(r)).collect()
    }

    /// Catalog entry by index.
    pub fn by_index(index: usize) -> Option<&'static Case> {
        CATALOG.get(index)
    }
}

const L_SHAPE: Ring = &[
    (2.0, 2.0),
    (14.0, 2.0),
    (14.0, 6.0),
    (6.0, 6.0),
    (6.0, 14.0),
    (2.0, 14.0),
];

const Z_SHAPE: Ring = &[
    (2.0, 2.0),
    (14.0, 2.0),
    (14.0, 5.0),
    (7.0, 5.0),
    (14.0, 11.0),
    (14.0, 14.0),
    (2.0, 14.0),
    (2.0, 11.0),
    (9.0, 11.0),
    (2.0, 5.0),
];

const CROSS: Ring = &[
    (6.0, 2.0),
    (10.0, 2.0),
    (10.0, 6.0),
    (14.0, 6.0),
    (14.0, 10.0),
    (10.0, 10.0),
    (10.0, 14.0),
    (6.0, 14.0),
    (6.0, 10.0),
    (2.0, 10.0),
    (2.0, 6.0),
    (6.0, 6.0),
];

const STAIRS: Ring = &[
    (2.0, 2.0),
    (14.0, 2.0),
    (14.0, 5.0),
    (11.0, 5.0),
    (11.0, 8.0),
    (8.0, 8.0),
    (8.0, 11.0),
    (5.0, 11.0),
    (5.0, 14.0),
    (2.0, 14.0),
];

const KEY: Ring = &[
    (2.0, 5.0),
    (7.0, 5.0),
    (7.0, 7.0),
    (10.0, 7.0),
    (10.0, 5.0),
    (11.0, 5.0),
    (11.0, 7.0),
    (12.0, 7.0),
    (12.0, 5.0),
    (13.0, 5.0),
    (13.0, 7.0),
    (14.0, 7.0),
    (14.0, 9.0),
    (7.0, 9.0),
    (7.0, 11.0),
    (2.0, 11.0),
];

const U_SHAPE: Ring = &[
    (2.0, 2.0),
    (14.0, 2.0),
    (14.0, 14.0),
    (10.0, 14.0),
    (10.0, 6.0),
    (6.0, 6.0),
    (6.0, 14.0),
    (2.0, 14.0),
];

const OCTAGON: Ring = &[
    (6.0, 2.0),
    (10.0, 2.0),
    (14.0, 6.0),
    (14.0, 10.0),
    (10.0, 14.0),
    (6.0, 14.0),
    (2.0, 10.0),
    (2.0, 6.0),
];

const RECTANGLE: Ring = &[(4.0, 10.0), (28.0, 10.0), (28.0, 22.0), (4.0, 22.0)];

const COMBO_TRIANGLE: Ring = &[(6.0, 6.0), (26.0, 8.0), (12.0, 24.0)];
const COMBO_RECTANGLE: Ring = &[(36.0, 8.0), (58.0, 8.0), (58.0, 20.0), (36.0, 20.0)];
const COMBO_HEXAGON: Ring = &[
    (20.0, 40.0),
    (32.0, 34.0),
    (44.0, 40.0),
    (44.0, 52.0),
    (32.0, 58.0),
    (20.0, 52.0),
];

/// The selectable cases, in menu order.
pub const CATALOG: [Case; 9] = [
    Case {
        name: "L-shape",
        size: 16,
        rings: &[L_SHAPE],
    },
    Case {
        name: "Z-shape",
        size: 16,
        rings: &[Z_SHAPE],
    },
    Case {
        name: "Cross",
        size: 16,
        rings: &[CROSS],
    },
    Case {
        name: "Stairs",
        size: 16,
        rings: &[STAIRS],
    },
    Case {
        name: "Key shape",
        size: 16,
        rings: &[KEY],
    },
    Case {
        name: "U-shape",
        size: 16,
        rings: &[U_SHAPE],
    },
    Case {
        name: "Octagon",
        size: 16,
        rings: &[OCTAGON],
    },
    Case {
        name: "Rectangle",
        size: 32,
        rings: &[RECTANGLE],
    },
    Case {
        name: "Combination of 3 disjoint polygons",
        size: 64,
        rings: &[COMBO_TRIANGLE, COMBO_RECTANGLE, COMBO_HEXAGON],
    },
];
