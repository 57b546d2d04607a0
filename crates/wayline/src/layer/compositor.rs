use crate::coords::Vec2;
use crate::paint::{
    BlendMode, LinearGradient, Paint, PaintStyle, StrokeCap, StrokeJoin, StrokePaint,
};
use crate::scene::{DrawList, Path};
use crate::style::{DashStrategy, LineColor, Polyline, StrokePattern};

use super::project::{effective_stroke_width, project_points, Projector};
use super::segment;

/// Paint width multiplier for stepped dashes. The dash geometry is a
/// two-point stroke spanning the perpendicular half width; stroking it this
/// much wider than the line (with round caps and miter joins) fills the
/// intended rectangle.
const STEPPED_PAINT_WIDTH_FACTOR: f32 = 2.0;

/// Batches an ordered polyline list into draw submissions.
///
/// Consecutive polylines with equal style keys accumulate into shared path
/// buffers and flush as one submission per sub-pass (underlay border, cutout,
/// primary) when the style key changes or input ends. Submission count per
/// frame is therefore bounded by the number of style *runs*, not polylines.
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    /// Bracket each flushed group in `PushLayer`/`PopLayer` so its cutout
    /// pass cannot erase earlier groups. Costs one offscreen composite per
    /// group; off by default.
    pub isolate_groups: bool,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one full render pass, appending submissions to `out`.
    ///
    /// Synchronous start to finish; no state survives the call. Polylines
    /// projecting to no geometry are skipped without disturbing the current
    /// group.
    pub fn render(&self, polylines: &[Polyline], projector: &impl Projector, out: &mut DrawList) {
        let mut group: Option<Group> = None;
        let mut flushed = 0usize;

        for line in polylines {
            let offsets = project_points(projector, line.points());
            if offsets.is_empty() {
                log::trace!("skipping polyline with no projected geometry");
                continue;
            }

            let key = line.style_key();
            if let Some(current) = group.take() {
                if current.key == key {
                    group = Some(current);
                } else {
                    self.flush(current, out);
                    flushed += 1;
                }
            }

            let width = effective_stroke_width(projector, line, offsets[0]);
            let g = group.get_or_insert_with(|| Group::new(key));
            g.absorb(line, width, &offsets);
        }

        if let Some(current) = group.take() {
            self.flush(current, out);
            flushed += 1;
        }

        log::debug!(
            "render pass: {} polylines -> {} style groups",
            polylines.len(),
            flushed
        );
    }

    /// Emits one group's sub-passes in their required order: border underlay
    /// first (beneath), then the cutout, then the primary stroke.
    fn flush(&self, group: Group, out: &mut DrawList) {
        let Group {
            path,
            border_path,
            cutout_path,
            paint,
            border_paint,
            cutout_paint,
            ..
        } = group;

        if self.isolate_groups {
            out.push_layer();
        }
        if let Some(border_paint) = border_paint {
            if !border_path.is_empty() {
                out.push_path(border_path, border_paint);
            }
        }
        if let Some(cutout_paint) = cutout_paint {
            if !cutout_path.is_empty() {
                out.push_path(cutout_path, cutout_paint);
            }
        }
        if let Some(paint) = paint {
            if !path.is_empty() {
                out.push_path(path, paint);
            }
        }
        if self.isolate_groups {
            out.pop_layer();
        }
    }
}

/// Accumulated state of the current style group.
///
/// Paints are rebuilt for every absorbed polyline (last one wins at flush);
/// equal style keys make the rebuilds agree except that meter widths are
/// measured at each polyline's own first point, which is preserved source
/// behavior.
struct Group {
    key: u64,
    path: Path,
    border_path: Path,
    cutout_path: Path,
    paint: Option<StrokePaint>,
    border_paint: Option<StrokePaint>,
    cutout_paint: Option<StrokePaint>,
}

impl Group {
    fn new(key: u64) -> Self {
        Self {
            key,
            path: Path::new(),
            border_path: Path::new(),
            cutout_path: Path::new(),
            paint: None,
            border_paint: None,
            cutout_paint: None,
        }
    }

    fn absorb(&mut self, line: &Polyline, width: f32, offsets: &[Vec2]) {
        self.rebuild_paints(line, width, offsets);
        self.append_geometry(line, width, offsets);
    }

    fn rebuild_paints(&mut self, line: &Polyline, width: f32, offsets: &[Vec2]) {
        let dotted = matches!(line.pattern(), StrokePattern::Dotted);
        let stepped = matches!(
            line.pattern(),
            StrokePattern::Dashed {
                strategy: DashStrategy::Stepped,
                ..
            }
        );
        let style = if dotted {
            PaintStyle::Fill
        } else {
            PaintStyle::Stroke
        };

        let source = match line.color() {
            LineColor::Solid(c) => Paint::Solid(*c),
            LineColor::Gradient { colors, stops } => {
                // The gradient spans the whole polyline, first to last
                // projected point, never per-segment.
                let first = offsets[0];
                let last = offsets[offsets.len() - 1];
                Paint::LinearGradient(LinearGradient::along(
                    first,
                    last,
                    colors,
                    stops.as_deref(),
                ))
            }
        };

        let mut paint = StrokePaint {
            paint: source,
            width,
            cap: line.cap(),
            join: line.join(),
            blend: BlendMode::SrcOver,
            style,
        };
        if stepped {
            paint.width = width * STEPPED_PAINT_WIDTH_FACTOR;
            paint.cap = StrokeCap::Round;
            paint.join = StrokeJoin::Miter;
        }
        self.paint = Some(paint);

        let border = line.border();
        self.border_paint = border.filter(|b| b.width > 0.0).map(|b| StrokePaint {
            paint: Paint::Solid(b.color),
            width: width + b.width,
            cap: line.cap(),
            join: line.join(),
            blend: BlendMode::SrcOver,
            style,
        });
        // The cutout erases the primary footprint out of the underlay; alpha
        // is forced opaque because DstOut only uses coverage.
        self.cutout_paint = border.map(|b| StrokePaint {
            paint: Paint::Solid(b.color.opaque()),
            width,
            cap: line.cap(),
            join: line.join(),
            blend: BlendMode::DstOut,
            style,
        });
    }

    fn append_geometry(&mut self, line: &Polyline, width: f32, offsets: &[Vec2]) {
        let border = line.border();
        match *line.pattern() {
            StrokePattern::Solid => {
                self.path.add_polyline(offsets);
                if border.is_some() {
                    self.border_path.add_polyline(offsets);
                    self.cutout_path.add_polyline(offsets);
                }
            }
            StrokePattern::Dotted => {
                let radius = width / 2.0;
                let spacing = width * 1.5;
                segment::append_dots(&mut self.path, offsets, radius, spacing);
                if let Some(b) = border {
                    let border_radius = radius + b.width / 2.0;
                    segment::append_dots(&mut self.border_path, offsets, border_radius, spacing);
                    segment::append_dots(&mut self.cutout_path, offsets, radius, spacing);
                }
            }
            StrokePattern::Dashed {
                strategy,
                length,
                gap,
            } => {
                let emit = |path: &mut Path| match strategy {
                    DashStrategy::Balanced => {
                        segment::append_dashes_balanced(path, offsets, length, gap, width)
                    }
                    DashStrategy::Stepped => {
                        segment::append_dashes_stepped(path, offsets, length, gap, width)
                    }
                };
                emit(&mut self.path);
                if border.is_some() {
                    emit(&mut self.border_path);
                    emit(&mut self.cutout_path);
                }
            }
        }
    }
}
