//! Pixel-buffer layout and compositing for the sample grid.

pub const TILE_WIDTH: usize = 28;
pub const TILE_HEIGHT: usize = 28;
pub const BYTES_PER_PIXEL: usize = 3;

const BACKGROUND: u8 = 255;

/// Grid geometry: tiles are laid out row-major with a uniform `margin`
/// between tiles and around the border.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    /// Number of tile rows
    pub num_rows: usize,
    /// Number of tile columns
    pub num_cols: usize,
    /// Spacing between tiles and around the border, in pixels
    pub margin: usize,
}

impl GridLayout {
    /// Number of tiles the grid holds
    pub fn capacity(&self) -> usize {
        self.num_rows * self.num_cols
    }

    /// Canvas dimensions in pixels, `(width, height)`
    pub fn canvas_dims(&self) -> (usize, usize) {
        (
            self.margin + self.num_cols * (TILE_WIDTH + self.margin),
            self.margin + self.num_rows * (TILE_HEIGHT + self.margin),
        )
    }

    /// Top-left pixel position of the tile at `(row, col)`
    pub fn tile_origin(&self, row: usize, col: usize) -> (usize, usize) {
        (
            self.margin + col * (TILE_WIDTH + self.margin),
            self.margin + row * (TILE_HEIGHT + self.margin),
        )
    }
}

/// An owned RGB8 pixel buffer
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a white canvas sized for `layout`
    pub fn blank(layout: &GridLayout) -> Self {
        let (width, height) = layout.canvas_dims();
        Self {
            width,
            height,
            data: vec![BACKGROUND; width * height * BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Blit a packed RGB tile onto the canvas at pixel offset `(x, y)`.
    /// The tile must fit entirely within the canvas.
    pub fn blit_rgb(
        &mut self,
        src: &[u8],
        (x, y): (usize, usize),
        (tile_width, tile_height): (usize, usize),
    ) {
        debug_assert_eq!(src.len(), tile_width * tile_height * BYTES_PER_PIXEL);
        assert!(x + tile_width <= self.width);
        assert!(y + tile_height <= self.height);

        for (src_row, dest_row) in src
            .chunks_exact(BYTES_PER_PIXEL * tile_width)
            .zip(self.data.chunks_exact_mut(BYTES_PER_PIXEL * self.width).skip(y))
        {
            dest_row[x * BYTES_PER_PIXEL..][..tile_width * BYTES_PER_PIXEL]
                .copy_from_slice(src_row);
        }
    }
}

/// Map a generator output value from [-1, 1] to an 8-bit channel.
/// Rounds half away from zero, so `0.0` maps to `128`; values outside
/// [-1, 1] clamp rather than wrap.
pub fn denormalize(v: f32) -> u8 {
    ((v + 1.0) * 127.5).round().clamp(0.0, 255.0) as u8
}
