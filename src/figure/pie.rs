//! Pie wedge layout.

use std::f64::consts::PI;

use super::{Anchor, Artist, Pie, PlacedText, Surface, Wedge};
use crate::backend::Backend;
use crate::config::PieOptions;
use crate::error::PlotError;
use crate::style::{
    check_alpha, cycle_color, format_number, parse_color, parse_color_alpha, Rgba,
};

/// Font size of wedge labels when no text properties set one.
const LABEL_FONT_SIZE: f32 = 10.0;

impl<B: Backend + ?Sized> Surface<'_, B> {
    /// Draw a pie of `sizes`, one wedge per size, normalized by their sum.
    pub(crate) fn pie<S: AsRef<str>>(
        &mut self,
        sizes: &[f64],
        labels: &[S],
        options: &PieOptions,
    ) -> Result<(), PlotError> {
        let wedges = layout(sizes, labels, options)?;
        let figure = self.figure_mut();
        figure.artists.push(Artist::Pie(Pie {
            wedges,
            shadow: options.shadow,
        }));
        figure.equal_aspect = true;
        figure.frame = false;
        figure.grid = false;
        Ok(())
    }
}

fn layout<S: AsRef<str>>(
    sizes: &[f64],
    labels: &[S],
    options: &PieOptions,
) -> Result<Vec<Wedge>, PlotError> {
    let n = sizes.len();
    if sizes.iter().any(|s| s.is_nan() || *s < 0.0) {
        return Err(PlotError::InvalidWedgeSizes);
    }
    let total: f64 = sizes.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(PlotError::InvalidWedgeSizes);
    }
    if labels.len() != n {
        return Err(PlotError::length_mismatch("labels", n, labels.len()));
    }

    let explode = match &options.explode {
        Some(explode) if explode.len() != n => {
            return Err(PlotError::length_mismatch("explode", n, explode.len()))
        }
        Some(explode) => explode.clone(),
        None => vec![0.0; n],
    };

    let wedgeprops = options.wedgeprops.clone().unwrap_or_default();
    let alpha = wedgeprops.alpha.map(check_alpha).transpose()?;

    // Colors repeat when there are fewer than wedges.
    let faces: Vec<Rgba> = match &options.colors {
        Some(colors) if colors.is_empty() => return Err(PlotError::EmptyColors),
        Some(colors) => (0..n)
            .map(|i| parse_color_alpha(&colors[i % colors.len()], alpha))
            .collect::<Result<_, _>>()?,
        None => (0..n)
            .map(|i| {
                let color = cycle_color(i);
                alpha.map_or(color, |alpha| color.with_alpha(alpha))
            })
            .collect(),
    };

    let edge = match &wedgeprops.edgecolor {
        Some(spec) => parse_color_alpha(spec, alpha)?,
        None => Rgba::TRANSPARENT,
    };
    let line_width = wedgeprops
        .linewidth
        .unwrap_or(if wedgeprops.edgecolor.is_some() { 1.0 } else { 0.0 });

    let textprops = options.textprops.clone().unwrap_or_default();
    let font_size = textprops.fontsize.unwrap_or(LABEL_FONT_SIZE);
    let text_color = match &textprops.color {
        Some(spec) => parse_color(spec)?,
        None => Rgba::BLACK,
    };
    let placed = |text: String, position: [f64; 2], anchor: Anchor| PlacedText {
        text,
        position,
        anchor,
        font_size,
        color: text_color,
        bold: textprops.bold,
    };

    let radius = options.radius;
    let mut wedges = Vec::with_capacity(n);
    // Angles in turns until stored; the start is reduced to one turn.
    let mut theta1 = (options.startangle / 360.0).rem_euclid(1.0);

    for (i, &size) in sizes.iter().enumerate() {
        let frac = size / total;
        let theta2 = if options.counterclock {
            theta1 + frac
        } else {
            theta1 - frac
        };
        let mid = PI * (theta1 + theta2);
        let (cos, sin) = (mid.cos(), mid.sin());
        let center = [explode[i] * cos, explode[i] * sin];

        let label_position = [
            center[0] + options.labeldistance * radius * cos,
            center[1] + options.labeldistance * radius * sin,
        ];
        let anchor = if label_position[0] > 0.0 {
            Anchor::Left
        } else {
            Anchor::Right
        };
        let label = placed(labels[i].as_ref().to_string(), label_position, anchor);

        let percent = match &options.autopct {
            Some(template) => {
                let text = format_number(template, 100.0 * frac)?;
                let position = [
                    center[0] + options.pctdistance * radius * cos,
                    center[1] + options.pctdistance * radius * sin,
                ];
                Some(placed(text, position, Anchor::Center))
            }
            None => None,
        };

        wedges.push(Wedge {
            center,
            radius,
            theta1: 360.0 * theta1.min(theta2),
            theta2: 360.0 * theta1.max(theta2),
            face: faces[i],
            edge,
            line_width,
            label: Some(label),
            percent,
        });
        theta1 = theta2;
    }

    Ok(wedges)
}
