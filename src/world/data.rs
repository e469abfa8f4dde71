//! Map layers: comma-separated grids of integer cell codes.

use std::fs;
use std::path::Path;

use bevy::prelude::*;

use crate::core::{DataLoadError, MapConfig};

/// One layer of the map, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<i32>>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Every cell as `(column, row)` and its code, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, codes)| {
            codes
                .iter()
                .enumerate()
                .map(move |(column, &code)| (IVec2::new(column as i32, row as i32), code))
        })
    }
}

/// Parse grid text. Blank lines are skipped; every other line must have
/// as many cells as the first.
pub fn parse_grid(path: &str, text: &str) -> Result<Grid, DataLoadError> {
    let mut rows: Vec<Vec<i32>> = Vec::new();

    for (row, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let codes = line
            .split(',')
            .enumerate()
            .map(|(column, value)| {
                value.trim().parse::<i32>().map_err(|_| DataLoadError::InvalidCell {
                    path: path.to_string(),
                    row,
                    column,
                    value: value.trim().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(first) = rows.first() {
            if codes.len() != first.len() {
                return Err(DataLoadError::RaggedGrid {
                    path: path.to_string(),
                    row,
                    expected: first.len(),
                    actual: codes.len(),
                });
            }
        }
        rows.push(codes);
    }

    Ok(Grid { rows })
}

/// Read and parse a grid file.
pub fn read_grid(path: &str) -> Result<Grid, DataLoadError> {
    if !Path::new(path).exists() {
        return Err(DataLoadError::FileNotFound(path.to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.to_string(),
        details: e.to_string(),
    })?;

    parse_grid(path, &contents)
}

/// The four layers a level is built from.
#[derive(Debug, Clone, Default)]
pub struct MapLayers {
    pub boundary: Grid,
    pub grass: Grid,
    pub objects: Grid,
    pub entities: Grid,
}

impl MapLayers {
    /// Load every layer named in `map`. A layer that fails to load is
    /// logged and left empty.
    pub fn load(map: &MapConfig) -> Self {
        Self {
            boundary: load_layer(&map.boundary),
            grass: load_layer(&map.grass),
            objects: load_layer(&map.objects),
            entities: load_layer(&map.entities),
        }
    }
}

fn load_layer(path: &str) -> Grid {
    match read_grid(path) {
        Ok(grid) => {
            debug!("Loaded {} ({}x{})", path, grid.width(), grid.height());
            grid
        }
        Err(e) => {
            error!("{}. Layer left empty.", e);
            Grid::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_row_by_row() {
        let grid = parse_grid("test.csv", "-1,395\n 12 , -1 \n\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                (IVec2::new(0, 0), -1),
                (IVec2::new(1, 0), 395),
                (IVec2::new(0, 1), 12),
                (IVec2::new(1, 1), -1),
            ]
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_grid("test.csv", "1,2,3\n1,2\n").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::RaggedGrid {
                row: 1,
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_cells() {
        let err = parse_grid("test.csv", "1,2\n3,x\n").unwrap_err();
        match err {
            DataLoadError::InvalidCell {
                row, column, value, ..
            } => assert_eq!((row, column, value.as_str()), (1, 1, "x")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_text_is_an_empty_grid() {
        let grid = parse_grid("test.csv", "").unwrap();
        assert_eq!(grid, Grid::default());
        assert_eq!(grid.cells().count(), 0);
    }

    #[test]
    fn missing_file_is_reported() {
        assert!(matches!(
            read_grid("assets/map/does_not_exist.csv"),
            Err(DataLoadError::FileNotFound(_))
        ));
    }

    #[test]
    fn shipped_map_layers_line_up() {
        let layers = MapLayers::load(&MapConfig::default());
        let grids = [&layers.boundary, &layers.grass, &layers.objects, &layers.entities];
        for grid in grids {
            assert!(grid.height() > 0);
            assert_eq!((grid.width(), grid.height()), (layers.boundary.width(), layers.boundary.height()));
        }
        let players = layers.entities.cells().filter(|&(_, code)| code == 394).count();
        assert_eq!(players, 1);
    }
}
