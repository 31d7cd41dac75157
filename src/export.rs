use std::fmt::{self, Write as _};
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::chart::scene::{Axis, AxisOrient, Scene, TextLabel};
use crate::color::to_hex;

const TICK_SIZE: f32 = 6.0;

// ---------------------------------------------------------------------------
// SVG export
// ---------------------------------------------------------------------------

/// Serialize the scene as a standalone SVG document carrying the same
/// element ids and `data-*` tags as the on-screen chart.
pub fn scene_to_svg(scene: &Scene) -> Result<String> {
    let mut out = String::new();
    write_svg(&mut out, scene).context("formatting SVG document")?;
    Ok(out)
}

fn write_svg<W: fmt::Write>(out: &mut W, scene: &Scene) -> fmt::Result {
    let l = &scene.layout;
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" font-family="sans-serif">"#,
        w = l.canvas_width,
        h = l.canvas_height
    )?;
    write_text(out, &scene.title, 24.0)?;
    write_text(out, &scene.description, 16.0)?;

    writeln!(
        out,
        r#"  <g transform="translate({}, {})">"#,
        scene.chart_origin.x, scene.chart_origin.y
    )?;
    write_axis(out, &scene.x_axis)?;
    write_axis(out, &scene.y_axis)?;
    for cell in &scene.cells {
        write!(
            out,
            r#"    <rect class="cell" x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            cell.rect.min.x,
            cell.rect.min.y,
            cell.rect.width(),
            cell.rect.height(),
            to_hex(cell.fill)
        )?;
        for (key, value) in cell.attributes() {
            write!(out, r#" {key}="{value}""#)?;
        }
        writeln!(out, "/>")?;
    }
    writeln!(out, "  </g>")?;

    let legend = &scene.legend;
    writeln!(
        out,
        r#"  <g id="{}" transform="translate({}, {})">"#,
        legend.id, legend.origin.x, legend.origin.y
    )?;
    write_axis(out, &legend.axis)?;
    for swatch in &legend.swatches {
        writeln!(
            out,
            r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            swatch.rect.min.x,
            swatch.rect.min.y,
            swatch.rect.width(),
            swatch.rect.height(),
            to_hex(swatch.fill)
        )?;
    }
    writeln!(out, "  </g>")?;
    writeln!(out, "</svg>")
}

fn write_text<W: fmt::Write>(out: &mut W, label: &TextLabel, size: f32) -> fmt::Result {
    writeln!(
        out,
        r#"  <text id="{}" x="{}" y="{}" text-anchor="middle" font-size="{size}">{}</text>"#,
        label.id,
        label.pos.x,
        label.pos.y,
        escape_xml(&label.text)
    )
}

fn write_axis<W: fmt::Write>(out: &mut W, axis: &Axis) -> fmt::Result {
    let id = axis.id.map(|id| format!(r#" id="{id}""#)).unwrap_or_default();
    writeln!(
        out,
        r#"    <g{id} transform="translate({}, {})" font-size="10">"#,
        axis.origin.x, axis.origin.y
    )?;
    if axis.domain_line {
        let (x2, y2) = match axis.orient {
            AxisOrient::Bottom => (axis.length, 0.0),
            AxisOrient::Left => (0.0, axis.length),
        };
        writeln!(
            out,
            r#"      <line class="domain" x1="0" y1="0" x2="{x2}" y2="{y2}" stroke="currentColor"/>"#
        )?;
    }
    for tick in &axis.ticks {
        let label = escape_xml(&tick.label);
        match axis.orient {
            AxisOrient::Bottom => writeln!(
                out,
                r#"      <g class="tick" transform="translate({}, 0)"><line y2="{TICK_SIZE}" stroke="currentColor"/><text y="{}" text-anchor="middle" dominant-baseline="hanging">{label}</text></g>"#,
                tick.offset,
                TICK_SIZE + 3.0
            )?,
            AxisOrient::Left => writeln!(
                out,
                r#"      <g class="tick" transform="translate(0, {})"><line x2="-{TICK_SIZE}" stroke="currentColor"/><text x="-{}" text-anchor="end" dominant-baseline="middle">{label}</text></g>"#,
                tick.offset,
                TICK_SIZE + 3.0
            )?,
        }
    }
    writeln!(out, "    </g>")
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn save_svg(scene: &Scene, path: &Path) -> Result<()> {
    let svg = scene_to_svg(scene)?;
    std::fs::write(path, svg).with_context(|| format!("writing SVG to {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// One row per cell: `year,month,temperature,variance,fill`, month 1-based.
pub fn write_cells_csv<W: io::Write>(scene: &Scene, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["year", "month", "temperature", "variance", "fill"])
        .context("writing CSV header")?;
    for cell in &scene.cells {
        wtr.write_record([
            cell.record.year.to_string(),
            cell.record.month.to_string(),
            format!("{:.3}", cell.temperature),
            cell.record.variance.to_string(),
            to_hex(cell.fill),
        ])
        .with_context(|| format!("writing CSV row for {}/{}", cell.record.year, cell.record.month))?;
    }
    wtr.flush().context("flushing CSV")?;
    Ok(())
}

pub fn save_csv(scene: &Scene, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_cells_csv(scene, file)
}
