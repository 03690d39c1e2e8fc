use tracing::debug;

use crate::api::Plot;
use crate::core::{AxisDomain, GridLayout, Padding, Rect, unify_axis_ranges};
use crate::error::ChartResult;
use crate::render::{Canvas, SubCanvas};

/// Draws a rows × columns arrangement of plots into the cells of `layout`.
///
/// Shapes are checked before anything is mutated, so a mismatch leaves every
/// plot untouched. With `share_time_axis`, the X axes of each column are
/// unified first and every plot in a column gets the column's widest left and
/// right margins, so equal times share one x position across rows.
/// Returns the cell rectangles that were drawn into.
pub fn draw_aligned(
    layout: &GridLayout,
    plots: &mut [Vec<Plot>],
    canvas: &mut dyn Canvas,
    share_time_axis: bool,
) -> ChartResult<Vec<Vec<Rect>>> {
    let cells = layout.align_all(&*plots, canvas.bounds())?;

    let mut paddings: Vec<Vec<Padding>> = plots
        .iter()
        .map(|row| row.iter().map(Plot::edge_padding).collect())
        .collect();

    if share_time_axis {
        for column in 0..layout.columns() {
            let mut axes: Vec<&mut AxisDomain> = plots
                .iter_mut()
                .map(|row| row[column].x_axis_mut())
                .collect();
            unify_axis_ranges(&mut axes);

            let (left, right) = paddings.iter().fold((0.0_f64, 0.0_f64), |(left, right), row| {
                (left.max(row[column].left), right.max(row[column].right))
            });
            for row in &mut paddings {
                row[column].left = left;
                row[column].right = right;
            }
        }
    }

    for ((row_plots, row_cells), row_paddings) in plots.iter().zip(&cells).zip(&paddings) {
        for ((plot, cell), padding) in row_plots.iter().zip(row_cells).zip(row_paddings) {
            let mut sub = SubCanvas::new(&mut *canvas, *cell);
            plot.draw_with_padding(&mut sub, *padding)?;
        }
    }

    debug!(
        rows = layout.rows(),
        columns = layout.columns(),
        share_time_axis,
        "drew aligned plots"
    );
    Ok(cells)
}
