//! Minimal DSC-conformant PostScript document writer
//!
//! Emits one filled path per drawing command against a margin-translated
//! coordinate system. Output is deterministic for a fixed command sequence.

use crate::render::command::DrawCommand;
use crate::render::palette::gray_for_level;
use crate::sampler::ShapeKind;
use std::io::{self, Write};

/// Physical document parameters for rendering
#[derive(Clone, Copy, Debug)]
pub struct DocumentSpec {
    /// Document width in points (post orientation swap)
    pub width_pt: f64,
    /// Document height in points (post orientation swap)
    pub height_pt: f64,
    /// Uniform margin in points
    pub margin_pt: f64,
    /// Palette size, for the level-to-gray lookup
    pub num_colors: usize,
    /// Grid cell edge in points; required only when grid cell commands appear
    pub cell_size_pt: Option<f64>,
}

/// Write a one-page PostScript document rendering the command sequence
///
/// Grid cells are placed from the top of the print area downward (their row
/// indices are raster-ordered); shape centers arrive already flipped into
/// page space. Either way each y coordinate is flipped exactly once.
///
/// # Errors
///
/// Returns the underlying writer error, or `InvalidData` if a grid cell
/// command is rendered without a configured cell size.
pub fn write_document<W: Write>(
    spec: &DocumentSpec,
    commands: &[DrawCommand],
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "%!PS-Adobe-3.0")?;
    writeln!(out, "%%Creator: paintnum")?;
    writeln!(
        out,
        "%%BoundingBox: 0 0 {} {}",
        spec.width_pt.round() as i64,
        spec.height_pt.round() as i64
    )?;
    writeln!(out, "%%Pages: 1")?;
    writeln!(out, "%%EndComments")?;
    writeln!(out, "%%Page: 1 1")?;
    writeln!(out, "{:.2} {:.2} translate", spec.margin_pt, spec.margin_pt)?;

    let print_height = 2.0f64.mul_add(-spec.margin_pt, spec.height_pt);

    for command in commands {
        match command {
            DrawCommand::GridCell { row, col, level } => {
                let cell = spec.cell_size_pt.ok_or_else(|| {
                    io::Error::other("grid cell command without a configured cell size")
                })?;
                let x = *col as f64 * cell;
                let y = (*row as f64 + 1.0).mul_add(-cell, print_height);
                writeln!(out, "{:.4} setgray", gray_for_level(*level, spec.num_colors))?;
                writeln!(out, "{x:.2} {y:.2} {cell:.2} {cell:.2} rectfill")?;
            }
            DrawCommand::Shape {
                kind,
                center_pt,
                radius_pt,
                level,
            } => {
                writeln!(out, "{:.4} setgray", gray_for_level(*level, spec.num_colors))?;
                write_shape(out, *kind, *center_pt, *radius_pt)?;
            }
        }
    }

    writeln!(out, "showpage")?;
    writeln!(out, "%%EOF")?;
    Ok(())
}

fn write_shape<W: Write>(out: &mut W, kind: ShapeKind, center: [f64; 2], r: f64) -> io::Result<()> {
    let [cx, cy] = center;
    match kind {
        ShapeKind::Circle => {
            writeln!(out, "newpath {cx:.2} {cy:.2} {r:.2} 0 360 arc closepath fill")
        }
        ShapeKind::Polygon { sides } => {
            write!(out, "newpath")?;
            for k in 0..sides {
                let theta = (f64::from(k) / f64::from(sides))
                    .mul_add(360.0, 90.0)
                    .to_radians();
                let x = r.mul_add(theta.cos(), cx);
                let y = r.mul_add(theta.sin(), cy);
                let op = if k == 0 { "moveto" } else { "lineto" };
                write!(out, " {x:.2} {y:.2} {op}")?;
            }
            writeln!(out, " closepath fill")
        }
    }
}
