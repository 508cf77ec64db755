//! Drawing surface: exclusive access to one figure between open and show.

use std::mem;

use tracing::{trace, warn};

use super::{
    Artist, BarPatch, Bars, Colorbar, Direction, Figure, FigureSize, Handle, Legend, LegendEntry,
    Line, MarkerStyle, Scatter, Step, Text,
};
use crate::backend::Backend;
use crate::config::{
    BarAlign, BarOptions, HistAlign, HistType, HistogramOptions, LineOptions, MarkerSize,
    Orientation, ScatterColor, ScatterOptions,
};
use crate::error::PlotError;
use crate::stats::{BinCalculator, Histogram};
use crate::style::{
    check_alpha, parse_color, parse_color_alpha, Colormap, LineStyle, Marker, Rgba,
};

/// Marker area in points squared when a scatter plot does not give one.
const DEFAULT_MARKER_AREA: f32 = 36.0;

/// An open figure on a backend.
///
/// Opening borrows the backend mutably until the surface is shown or dropped,
/// so at most one figure is ever in progress per backend. A surface dropped
/// without being shown is discarded.
pub(crate) struct Surface<'b, B: Backend + ?Sized> {
    backend: &'b mut B,
    figure: Figure,
    shown: bool,
}

impl<'b, B: Backend + ?Sized> Surface<'b, B> {
    pub(crate) fn open(backend: &'b mut B, size: FigureSize) -> Self {
        trace!(width = size.width, height = size.height, "opening figure");
        backend.open(size);
        Self {
            backend,
            figure: Figure::new(size),
            shown: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn figure(&self) -> &Figure {
        &self.figure
    }

    pub(super) fn figure_mut(&mut self) -> &mut Figure {
        &mut self.figure
    }

    pub(crate) fn title(&mut self, text: &str, font_size: f32) {
        self.figure.title = Some(Text {
            content: text.to_string(),
            font_size,
        });
    }

    pub(crate) fn xlabel(&mut self, text: &str, font_size: f32) {
        self.figure.x_label = Some(Text {
            content: text.to_string(),
            font_size,
        });
    }

    pub(crate) fn ylabel(&mut self, text: &str, font_size: f32) {
        self.figure.y_label = Some(Text {
            content: text.to_string(),
            font_size,
        });
    }

    pub(crate) fn grid(&mut self, visible: bool) {
        self.figure.grid = visible;
    }

    /// Pair handles with labels; surplus on either side is dropped.
    pub(crate) fn legend<I, S>(&mut self, handles: &[Handle], labels: I, font_size: f32)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = handles
            .iter()
            .zip(labels)
            .map(|(handle, label)| LegendEntry {
                label: label.into(),
                handle: *handle,
            })
            .collect();
        self.figure.legend = Some(Legend {
            entries,
            font_size,
        });
    }

    pub(crate) fn colorbar(&mut self, colorbar: Colorbar) {
        self.figure.colorbar = Some(colorbar);
    }

    /// Draw one bar per (x, height) pair and return a legend handle for each.
    pub(crate) fn bar(
        &mut self,
        x: &[f64],
        heights: &[f64],
        options: &BarOptions,
    ) -> Result<Vec<Handle>, PlotError> {
        let fill = parse_color_alpha(&options.color, Some(options.alpha))?;
        let edge = parse_color_alpha(&options.edgecolor, Some(options.alpha))?;

        let patches: Vec<BarPatch> = x
            .iter()
            .zip(heights)
            .map(|(&x, &height)| {
                let center = match options.align {
                    BarAlign::Center => x,
                    BarAlign::Edge => x + options.width / 2.0,
                };
                BarPatch {
                    center,
                    width: options.width,
                    height,
                }
            })
            .collect();

        let handles = vec![Handle { fill, edge }; patches.len()];
        self.figure.artists.push(Artist::Bars(Bars {
            patches,
            direction: Direction::Vertical,
            fill,
            edge,
            line_width: options.linewidth,
        }));
        Ok(handles)
    }

    /// Draw a polyline through the (x, y) pairs.
    pub(crate) fn plot(&mut self, x: &[f64], y: &[f64], options: &LineOptions) -> Result<(), PlotError> {
        let style: LineStyle = options.linestyle.parse()?;
        let shape: Marker = options.marker.parse()?;
        let color = parse_color_alpha(&options.color, Some(options.alpha))?;
        let face = parse_color_alpha(&options.markerfacecolor, Some(options.alpha))?;
        let edge = parse_color_alpha(&options.markeredgecolor, Some(options.alpha))?;

        let marker = shape.is_visible().then_some(MarkerStyle {
            shape,
            size: options.markersize,
            face,
            edge,
            edge_width: options.markeredgewidth,
        });

        self.figure.artists.push(Artist::Line(Line {
            points: x.iter().zip(y).map(|(&x, &y)| [x, y]).collect(),
            color,
            style,
            width: options.linewidth,
            marker,
        }));
        Ok(())
    }

    /// Bin `values` and draw the result.
    pub(crate) fn hist(
        &mut self,
        values: &[f64],
        options: &HistogramOptions,
    ) -> Result<Histogram, PlotError> {
        let color = parse_color(&options.color)?;
        let hist = BinCalculator::compute(
            values,
            &options.bins,
            options.range,
            options.density,
            options.cumulative,
        )?;

        let direction = match options.orientation {
            Orientation::Vertical => Direction::Vertical,
            Orientation::Horizontal => Direction::Horizontal,
        };

        let artist = match options.histtype {
            HistType::Bar | HistType::BarStacked => {
                let rwidth = options.rwidth.map_or(1.0, |r| r.clamp(0.0, 1.0));
                let patches = hist
                    .edges
                    .windows(2)
                    .zip(&hist.heights)
                    .map(|(edge, &height)| {
                        let width = edge[1] - edge[0];
                        let offset = match options.align {
                            HistAlign::Left => 0.0,
                            HistAlign::Mid => 0.5 * width,
                            HistAlign::Right => width,
                        };
                        BarPatch {
                            center: edge[0] + offset,
                            width: rwidth * width,
                            height,
                        }
                    })
                    .collect();
                Artist::Bars(Bars {
                    patches,
                    direction,
                    fill: color,
                    edge: Rgba::TRANSPARENT,
                    line_width: 0.0,
                })
            }
            HistType::Step | HistType::StepFilled => Artist::Step(Step {
                outline: step_outline(&hist, options.align, direction),
                direction,
                filled: options.histtype == HistType::StepFilled,
                color,
            }),
        };

        self.figure.artists.push(artist);
        Ok(hist)
    }

    /// Draw markers at the (x, y) pairs and return the color mapping they use.
    pub(crate) fn scatter(
        &mut self,
        x: &[f64],
        y: &[f64],
        options: &ScatterOptions,
    ) -> Result<Colorbar, PlotError> {
        let n = x.len().min(y.len());
        let shape: Marker = options.marker.parse()?;

        let sizes = match &options.s {
            None => vec![DEFAULT_MARKER_AREA; n],
            Some(MarkerSize::Uniform(area)) => vec![*area as f32; n],
            Some(MarkerSize::PerPoint(areas)) if areas.len() == n => {
                areas.iter().map(|&a| a as f32).collect()
            }
            Some(MarkerSize::PerPoint(areas)) if areas.len() == 1 => vec![areas[0] as f32; n],
            Some(MarkerSize::PerPoint(areas)) => {
                return Err(PlotError::length_mismatch("s", n, areas.len()))
            }
        };

        let (faces, mapping) = match &options.color {
            ScatterColor::Single(spec) => {
                let face = parse_color_alpha(spec, Some(options.alpha))?;
                if options.cmap.is_some()
                    || options.norm.is_some()
                    || options.vmin.is_some()
                    || options.vmax.is_some()
                {
                    warn!("no data for colormapping provided via 'color'; cmap, norm, vmin and vmax are ignored");
                }
                let mapping = Colorbar {
                    colormap: Colormap::default(),
                    vmin: 0.0,
                    vmax: 1.0,
                };
                (vec![face; n], mapping)
            }
            ScatterColor::Values(values) => {
                if values.len() != n {
                    return Err(PlotError::length_mismatch("c", n, values.len()));
                }
                let colormap = match &options.cmap {
                    Some(name) => Colormap::from_name(name)?,
                    None => Colormap::default(),
                };
                let (vmin, vmax) = norm_bounds(values, options)?;
                let alpha = check_alpha(options.alpha)?;
                let faces = values
                    .iter()
                    .map(|&v| {
                        let t = if vmax > vmin { (v - vmin) / (vmax - vmin) } else { 0.0 };
                        colormap.sample(t).with_alpha(alpha)
                    })
                    .collect();
                (faces, Colorbar { colormap, vmin, vmax })
            }
        };

        let edges = match options.edgecolors.as_str() {
            "face" => faces.clone(),
            spec => vec![parse_color_alpha(spec, Some(options.alpha))?; n],
        };

        self.figure.artists.push(Artist::Scatter(Scatter {
            points: x.iter().zip(y).map(|(&x, &y)| [x, y]).collect(),
            sizes,
            faces,
            edges,
            edge_width: options.linewidths,
            shape,
        }));
        Ok(mapping)
    }

    /// Hand the finished figure to the backend. Blocks for as long as the backend does.
    pub(crate) fn show(mut self) -> Result<(), PlotError> {
        self.shown = true;
        let figure = mem::take(&mut self.figure);
        trace!(artists = figure.artists.len(), "showing figure");
        self.backend.show(figure)
    }
}

impl<B: Backend + ?Sized> Drop for Surface<'_, B> {
    fn drop(&mut self) {
        if !self.shown {
            trace!("discarding figure that was never shown");
            self.backend.discard();
        }
    }
}

/// Outline of a step histogram, shifted by half a bin for left/right alignment.
fn step_outline(hist: &Histogram, align: HistAlign, direction: Direction) -> Vec<[f64; 2]> {
    let first_width = hist.widths().next().unwrap_or(0.0);
    let shift = match align {
        HistAlign::Left => -0.5 * first_width,
        HistAlign::Mid => 0.0,
        HistAlign::Right => 0.5 * first_width,
    };

    let mut outline = Vec::with_capacity(2 * hist.bin_count() + 2);
    if let Some(&first) = hist.edges.first() {
        outline.push([first + shift, 0.0]);
    }
    for (edge, &height) in hist.edges.windows(2).zip(&hist.heights) {
        outline.push([edge[0] + shift, height]);
        outline.push([edge[1] + shift, height]);
    }
    if let Some(&last) = hist.edges.last() {
        outline.push([last + shift, 0.0]);
    }

    if direction == Direction::Horizontal {
        for point in &mut outline {
            point.swap(0, 1);
        }
    }
    outline
}

/// Color normalization bounds; unset bounds come from the finite data range.
fn norm_bounds(values: &[f64], options: &ScatterOptions) -> Result<(f64, f64), PlotError> {
    if options.norm.is_some() && (options.vmin.is_some() || options.vmax.is_some()) {
        return Err(PlotError::NormConflict);
    }
    let (vmin, vmax) = match options.norm {
        Some(norm) => (norm.vmin, norm.vmax),
        None => (options.vmin, options.vmax),
    };

    let (data_min, data_max) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let (data_min, data_max) = if data_min > data_max {
        (0.0, 1.0)
    } else {
        (data_min, data_max)
    };

    let vmin = vmin.unwrap_or(data_min);
    let vmax = vmax.unwrap_or(data_max);
    if vmin > vmax {
        return Err(PlotError::InvalidNorm { vmin, vmax });
    }
    Ok((vmin, vmax))
}
