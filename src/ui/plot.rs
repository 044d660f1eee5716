use eframe::egui::{
    Align2, Color32, CornerRadius, FontId, Rect, RichText, Sense, Ui, pos2, vec2,
};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::chart::bar::BarChartSpec;
use crate::chart::line::LineChartSpec;
use crate::chart::map::MapSpec;
use crate::chart::treemap::{TreemapNode, TreemapSpec};

// ---------------------------------------------------------------------------
// Renderers, one per chart spec
// ---------------------------------------------------------------------------

/// Render a multi-series line chart.
pub fn line_chart(ui: &mut Ui, spec: &LineChartSpec) {
    ui.label(RichText::new(&spec.title).strong());
    Plot::new("line_chart")
        .legend(Legend::default())
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone())
        .height(300.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points: PlotPoints = series.points.clone().into();
                plot_ui.line(Line::new(points).name(&series.name).color(series.color).width(1.5));
            }
        });
}

/// Render the geospatial scatter as a lon/lat plot. Marker pixel sizes are
/// normalized against the largest radius in the spec; hovering near a
/// marker shows its tooltip.
pub fn location_map(ui: &mut Ui, spec: &MapSpec) {
    let max_radius = spec.markers.iter().map(|m| m.radius).fold(0.0_f64, f64::max);
    let view = spec.viewpoint;
    // rough degrees-per-viewport for the configured zoom level
    let half_span_x = 360.0 / f64::from(2.0_f32.powf(view.zoom)) / 2.0;
    let half_span_y = half_span_x / 2.0;

    ui.label(RichText::new(&spec.title).strong());
    let response = Plot::new("location_map")
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .height(360.0)
        .include_x(view.longitude - half_span_x)
        .include_x(view.longitude + half_span_x)
        .include_y(view.latitude - half_span_y)
        .include_y(view.latitude + half_span_y)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for marker in &spec.markers {
                let px = if max_radius > 0.0 {
                    (marker.radius / max_radius * 12.0) as f32
                } else {
                    3.0
                };
                plot_ui.points(
                    Points::new(vec![[marker.longitude, marker.latitude]])
                        .radius(px)
                        .filled(true)
                        .color(spec.marker_color),
                );
            }

            // nearest marker under the pointer, if reasonably close
            let pointer = plot_ui.pointer_coordinate()?;
            let bounds = plot_ui.plot_bounds();
            let threshold = (bounds.width().max(bounds.height()) / 40.0).max(f64::EPSILON);
            spec.markers
                .iter()
                .map(|m| {
                    let d = ((m.longitude - pointer.x).powi(2)
                        + (m.latitude - pointer.y).powi(2))
                    .sqrt();
                    (d, m)
                })
                .filter(|(d, _)| *d < threshold)
                .min_by(|(a, _), (b, _)| a.total_cmp(b))
                .map(|(_, m)| m.tooltip.clone())
        });

    if let Some(tooltip) = response.inner {
        response.response.on_hover_text(tooltip);
    }
}

/// Render a stacked bar chart: one x slot per category, segments stacked
/// via base offsets in spec order.
pub fn stacked_bar(ui: &mut Ui, spec: &BarChartSpec) {
    ui.label(RichText::new(&spec.title).strong());
    let categories = spec.categories.clone();
    let mut offsets = vec![0.0_f64; categories.len()];

    let mut charts: Vec<BarChart> = Vec::new();
    for segment in &spec.segments {
        let Some(slot) = categories.iter().position(|c| c == &segment.category) else {
            continue;
        };
        let bar = Bar::new(slot as f64, segment.value)
            .base_offset(offsets[slot])
            .width(0.5)
            .fill(segment.color);
        offsets[slot] += segment.value;
        charts.push(
            BarChart::new(vec![bar])
                .name(&segment.series)
                .color(segment.color),
        );
    }

    Plot::new("stacked_bar")
        .legend(Legend::default())
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone())
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                return String::new();
            }
            categories.get(idx as usize).cloned().unwrap_or_default()
        })
        .height(300.0)
        .include_x(-0.75)
        .include_x(spec.categories.len() as f64 - 0.25)
        .include_y(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Render a two-level treemap with the egui painter: one horizontal strip
/// per sector sized by its total, split vertically into group cells.
pub fn treemap(ui: &mut Ui, spec: &TreemapSpec) {
    ui.label(RichText::new(&spec.title).strong());
    let height = 380.0;
    let (rect, response) = ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::same(2), ui.visuals().extreme_bg_color);

    let total: f64 = spec.nodes.iter().map(|n| n.value).sum();
    if spec.nodes.is_empty() || total <= 0.0 {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No data for this year",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    // group leaves per sector, keeping the spec's node order inside each
    let mut sectors: Vec<(&str, Vec<&TreemapNode>)> = Vec::new();
    for node in &spec.nodes {
        match sectors.iter_mut().find(|(s, _)| *s == node.sector) {
            Some((_, nodes)) => nodes.push(node),
            None => sectors.push((&node.sector, vec![node])),
        }
    }

    let hover_pos = response.hover_pos();
    let mut hovered: Option<String> = None;

    let mut x = rect.left();
    for (_, nodes) in &sectors {
        let sector_total: f64 = nodes.iter().map(|n| n.value).sum();
        let strip_w = rect.width() * (sector_total / total) as f32;

        let mut y = rect.top();
        for node in nodes {
            let cell_h = if sector_total > 0.0 {
                rect.height() * (node.value / sector_total) as f32
            } else {
                0.0
            };
            let cell = Rect::from_min_size(pos2(x, y), vec2(strip_w, cell_h)).shrink(1.0);
            y += cell_h;
            if !cell.is_positive() {
                continue;
            }

            painter.rect_filled(cell, CornerRadius::same(2), node.color);
            if cell.width() > 70.0 && cell.height() > 18.0 {
                painter.text(
                    cell.center(),
                    Align2::CENTER_CENTER,
                    &node.group,
                    FontId::proportional(12.0),
                    Color32::WHITE,
                );
            }
            if hover_pos.is_some_and(|p| cell.contains(p)) {
                hovered = Some(node.tooltip.clone());
            }
        }
        x += strip_w;
    }

    if let Some(tooltip) = hovered {
        response.on_hover_text(tooltip);
    }
}
