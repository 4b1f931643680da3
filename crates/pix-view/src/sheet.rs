//! Grid layout and panel rendering.

use pix_core::{ChannelLayout, ImageBuffer, ValueRange};
use thiserror::Error;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Error type for sheet rendering.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Rendering was requested with no panels added.
    #[error("cannot render an empty contact sheet")]
    EmptySheet,

    /// A panel failed to convert into display space.
    #[error("panel conversion failed: {0}")]
    Panel(#[from] pix_core::Error),
}

/// Result type for sheet rendering.
pub type ViewResult<T> = Result<T, ViewError>;

/// Placement record for one rendered panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// The label the panel was added under.
    pub label: String,
    /// Left edge of the panel's cell in the sheet, in pixels.
    pub x: usize,
    /// Top edge of the panel's cell in the sheet, in pixels.
    pub y: usize,
    /// Rendered panel width inside the cell.
    pub width: usize,
    /// Rendered panel height inside the cell.
    pub height: usize,
}

/// A rendered contact sheet: the composed image plus panel metadata.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// The composed grid image, RGB and normalized.
    pub image: ImageBuffer,
    /// One placement record per added panel, in insertion order.
    pub panels: Vec<Panel>,
}

/// Builder for a labeled grid of image panels.
///
/// Panels are laid out row-major across a fixed number of columns; each
/// is fitted into its cell with nearest-neighbor sampling, preserving
/// aspect ratio and centering the remainder.
#[derive(Debug, Clone)]
pub struct ContactSheet {
    cell_width: usize,
    cell_height: usize,
    columns: usize,
    gutter: usize,
    background: f32,
    entries: Vec<(String, ImageBuffer)>,
}

impl Default for ContactSheet {
    fn default() -> Self {
        Self {
            cell_width: 256,
            cell_height: 256,
            columns: 2,
            gutter: 8,
            background: 0.1,
            entries: Vec::new(),
        }
    }
}

impl ContactSheet {
    /// Creates a sheet with the default two-column layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cell size panels are fitted into.
    pub fn with_cell_size(mut self, width: usize, height: usize) -> Self {
        self.cell_width = width.max(1);
        self.cell_height = height.max(1);
        self
    }

    /// Sets the number of grid columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Sets the gutter width between cells and around the border.
    pub fn with_gutter(mut self, gutter: usize) -> Self {
        self.gutter = gutter;
        self
    }

    /// Adds a labeled panel.
    pub fn add(mut self, label: impl Into<String>, buffer: ImageBuffer) -> Self {
        self.entries.push((label.into(), buffer));
        self
    }

    /// Number of panels added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no panels have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Composes all panels into one grid image.
    ///
    /// # Errors
    ///
    /// - [`ViewError::EmptySheet`] when no panels were added
    /// - [`ViewError::Panel`] when a CMYK panel fails to convert
    pub fn render(&self) -> ViewResult<Sheet> {
        trace!(panels = self.entries.len(), "render sheet");

        if self.entries.is_empty() {
            return Err(ViewError::EmptySheet);
        }

        let rows = self.entries.len().div_ceil(self.columns);
        let sheet_w = self.columns * self.cell_width + (self.columns + 1) * self.gutter;
        let sheet_h = rows * self.cell_height + (rows + 1) * self.gutter;
        debug!(rows, cols = self.columns, sheet_w, sheet_h, "sheet geometry");

        let mut image =
            ImageBuffer::new(sheet_h, sheet_w, ChannelLayout::Rgb, ValueRange::Normalized);
        image.fill(&[self.background; 3]);

        let mut panels = Vec::with_capacity(self.entries.len());
        for (i, (label, buffer)) in self.entries.iter().enumerate() {
            let cell_x = self.gutter + (i % self.columns) * (self.cell_width + self.gutter);
            let cell_y = self.gutter + (i / self.columns) * (self.cell_height + self.gutter);

            let display = to_display(buffer)?;
            let (panel_w, panel_h) = fit(
                display.width(),
                display.height(),
                self.cell_width,
                self.cell_height,
            );
            // Center the fitted panel in its cell.
            let x = cell_x + (self.cell_width - panel_w) / 2;
            let y = cell_y + (self.cell_height - panel_h) / 2;

            blit_nearest(&display, &mut image, x, y, panel_w, panel_h);
            panels.push(Panel {
                label: label.clone(),
                x,
                y,
                width: panel_w,
                height: panel_h,
            });
        }

        Ok(Sheet { image, panels })
    }
}

/// Brings a panel into display space: RGB, normalized, clipped to [0, 1].
fn to_display(buffer: &ImageBuffer) -> ViewResult<ImageBuffer> {
    let rgb = match buffer.layout() {
        ChannelLayout::Rgb => buffer.normalize(),
        ChannelLayout::Cmyk => pix_ops::convert::cmyk_to_rgb(buffer)?,
    };
    Ok(rgb.map_components(|v| v.clamp(0.0, 1.0)))
}

/// Largest (w, h) that fits the cell while preserving aspect ratio.
fn fit(src_w: usize, src_h: usize, cell_w: usize, cell_h: usize) -> (usize, usize) {
    if src_w == 0 || src_h == 0 {
        return (0, 0);
    }
    let by_width = (cell_w, (src_h * cell_w / src_w).max(1));
    if by_width.1 <= cell_h {
        by_width
    } else {
        ((src_w * cell_h / src_h).max(1), cell_h)
    }
}

/// Copies `src` into `dst` at (x, y), resampled to (w, h) nearest-neighbor.
fn blit_nearest(src: &ImageBuffer, dst: &mut ImageBuffer, x: usize, y: usize, w: usize, h: usize) {
    for ty in 0..h {
        let sy = ty * src.height() / h;
        for tx in 0..w {
            let sx = tx * src.width() / w;
            dst.set_pixel(y + ty, x + tx, src.pixel(sy, sx));
        }
    }
}
