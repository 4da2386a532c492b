//! Loader for ASCII grid layouts.
//!
//! The first line is the top row. `%` is a wall, `P` the start, `S` a
//! survivor, `.` or a space an open cell of cost 1, and the digits `1`-`9`
//! open cells with that entry cost.

use crate::world::{Point, TerrainMap};
use ordered_float::OrderedFloat;
use std::{fs, path::Path, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout: {0}")]
    Io(#[from] std::io::Error),
    #[error("layout is empty")]
    Empty,
    #[error("line {line} has width {found}, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown character {character:?} at line {line}, column {column}")]
    UnknownCharacter {
        character: char,
        line: usize,
        column: usize,
    },
    #[error("layout has no start cell")]
    MissingStart,
    #[error("layout has more than one start cell")]
    MultipleStarts,
    #[error("layout has no survivor cell")]
    MissingSurvivor,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub map: TerrainMap,
    pub start: Point,
    /// Survivor cells in sorted order.
    pub survivors: Vec<Point>,
}

impl Layout {
    pub fn from_path(path: &Path) -> Result<Self, LayoutError> {
        let contents = fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        let width = rows.first().ok_or(LayoutError::Empty)?.chars().count();
        let height = rows.len();

        let mut map = TerrainMap::open(width, height);
        let mut start = None;
        let mut survivors = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    line: row + 1,
                    expected: width,
                    found,
                });
            }
            // Bounded by the row length, which fits the map dimensions.
            let y = (height - 1 - row) as i32;
            for (column, character) in line.chars().enumerate() {
                let point = Point::new(column as i32, y);
                match character {
                    '%' => map.set_wall(point, true),
                    '.' | ' ' => {}
                    'P' => {
                        if start.replace(point).is_some() {
                            return Err(LayoutError::MultipleStarts);
                        }
                    }
                    'S' => survivors.push(point),
                    '1'..='9' => {
                        let cost = f64::from(character.to_digit(10).unwrap_or(1));
                        map.set_terrain_cost(point, OrderedFloat(cost));
                    }
                    _ => {
                        return Err(LayoutError::UnknownCharacter {
                            character,
                            line: row + 1,
                            column: column + 1,
                        })
                    }
                }
            }
        }

        survivors.sort();
        Ok(Self {
            map,
            start: start.ok_or(LayoutError::MissingStart)?,
            survivors,
        })
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}
