use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so invalid geometry is caught without a
/// raster backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_polyline_count: usize,
    pub last_polygon_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_polyline_count = frame.polyline_count();
        self.last_polygon_count = frame.polygon_count();
        Ok(())
    }
}
