/// Largest number of cells along either axis.
pub const MAX_CELLS: usize = 4096;

pub struct Config {
    pub cell_size: f32,
}

/// 2D histogram over horizontal positions.
///
/// Cell `(0, 0)` starts at `origin`, the smallest x and y of the binned
/// positions, so negative world coordinates bin like any other.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeatMap {
    origin: (f64, f64),
    cell_size: f64,
    max_x: usize,
    max_y: usize,
    max_value: usize,
    rows: Vec<Vec<usize>>,
}

/// World-space extent of a single heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub count: usize,
}

impl HeatMap {
    fn new(origin: (f64, f64), cell_size: f64) -> Self {
        Self {
            origin,
            cell_size,
            max_x: 0,
            max_y: 0,
            max_value: 0,
            rows: Vec::new(),
        }
    }

    fn increment(&mut self, x: usize, y: usize) {
        if self.rows.len() <= y {
            self.rows.resize(y + 1, Vec::new());
        }
        self.max_y = self.max_y.max(y);

        let row = &mut self.rows[y];
        if row.len() <= x {
            row.resize(x + 1, 0);
        }
        self.max_x = self.max_x.max(x);

        row[x] += 1;
        self.max_value = self.max_value.max(row[x]);
    }

    /// `None` when there are no positions, the cell size is not positive, or
    /// the grid would exceed [`MAX_CELLS`] along an axis.
    #[tracing::instrument(skip(config, positions), fields(cell_size = config.cell_size))]
    pub fn from_positions(config: &Config, positions: &[(f64, f64)]) -> Option<Self> {
        let cell_size = config.cell_size as f64;
        if !(cell_size > 0.0) {
            tracing::warn!("Invalid cell size");
            return None;
        }

        let min_x = positions.iter().map(|(x, _)| *x).reduce(f64::min)?;
        let min_y = positions.iter().map(|(_, y)| *y).reduce(f64::min)?;
        let max_x = positions.iter().map(|(x, _)| *x).reduce(f64::max)?;
        let max_y = positions.iter().map(|(_, y)| *y).reduce(f64::max)?;

        let extent = ((max_x - min_x) / cell_size).max((max_y - min_y) / cell_size);
        if !(extent < MAX_CELLS as f64) {
            tracing::warn!("Cell size {} needs {} cells per axis, limit is {}", cell_size, extent, MAX_CELLS);
            return None;
        }

        let mut heatmap = Self::new((min_x, min_y), cell_size);
        for (x, y) in positions.iter().copied() {
            let x_cell = ((x - min_x) / cell_size) as usize;
            let y_cell = ((y - min_y) / cell_size) as usize;

            tracing::trace!("Coord (X, Y): {:?} -> {:?}", (x, y), (x_cell, y_cell));

            heatmap.increment(x_cell, y_cell);
        }

        Some(heatmap)
    }

    pub fn width(&self) -> usize {
        self.max_x + 1
    }

    pub fn height(&self) -> usize {
        self.max_y + 1
    }

    pub fn get(&self, x: usize, y: usize) -> usize {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.rows.iter().flatten().sum()
    }

    pub fn cell_bounds(&self, x: usize, y: usize) -> CellBounds {
        let min_x = self.origin.0 + x as f64 * self.cell_size;
        let min_y = self.origin.1 + y as f64 * self.cell_size;

        CellBounds {
            min_x,
            min_y,
            max_x: min_x + self.cell_size,
            max_y: min_y + self.cell_size,
            count: self.get(x, y),
        }
    }

    /// The densest cell. Ties go to the first cell in row-major order.
    pub fn hottest_cell(&self) -> Option<CellBounds> {
        let mut hottest: Option<(usize, usize, usize)> = None;
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().copied().enumerate() {
                if cell > hottest.map(|(_, _, c)| c).unwrap_or(0) {
                    hottest = Some((x, y, cell));
                }
            }
        }

        hottest.map(|(x, y, _)| self.cell_bounds(x, y))
    }

    /// Renders with `+y` pointing up, cells colored from blue (rare) to
    /// red (densest). Empty cells stay black.
    pub fn as_image(&self) -> image::RgbImage {
        use colors_transform::Color;

        let mut buffer = image::RgbImage::new(self.width() as u32, self.height() as u32);

        tracing::trace!("Creating Image with Dimensions: {}x{}", buffer.width(), buffer.height());

        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().copied().enumerate() {
                if cell == 0 {
                    continue;
                }

                let heat = cell as f32 / self.max_value as f32;
                let rgb = colors_transform::Hsl::from(240.0 * (1.0 - heat), 100.0, 50.0).to_rgb();

                buffer.put_pixel(
                    x as u32,
                    (self.max_y - y) as u32,
                    image::Rgb([
                        rgb.get_red().round() as u8,
                        rgb.get_green().round() as u8,
                        rgb.get_blue().round() as u8,
                    ]),
                );
            }
        }

        buffer
    }
}

impl core::fmt::Display for HeatMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.max_value.max(1).ilog10() as usize + 1;

        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                write!(f, "{: ^width$} ", self.get(x, y), width = size)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
