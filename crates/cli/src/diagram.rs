//! SVG cutting maps.
//!
//! Renders one landscape sheet per used profile: the profile as a horizontal
//! segment with a tick at every cut boundary, the cut lengths written under
//! their segments, and notes for the kerf width and the leftover disposition.
//! Profiles that received no cuts are skipped.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use u_cutstock_core::{CutPlan, Length, RemainderKind};

// Landscape A4 at 150 dpi, like a printable job sheet.
const SHEET_W: f64 = 1754.0;
const SHEET_H: f64 = 1240.0;
const MARGIN: f64 = 150.0;
const FONT_SIZE: u32 = 24;

/// Renders the cutting map for one plan as an SVG document.
pub fn render(plan: &CutPlan, tolerance: Length) -> String {
    let useful_w = SHEET_W - MARGIN * 2.0;
    let baseline = (SHEET_H - MARGIN * 2.0) / 2.0;

    // Shrink to the sheet when the profile is longer than the usable width.
    let scale = if (plan.profile as f64) > useful_w {
        plan.profile as f64 / useful_w
    } else {
        1.0
    };

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="{size}">"#,
        w = SHEET_W,
        h = SHEET_H,
        size = FONT_SIZE
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{w}" height="{h}" fill="white"/>"#,
        w = SHEET_W,
        h = SHEET_H
    );

    // The profile itself.
    let end_x = MARGIN + plan.profile as f64 / scale;
    let _ = writeln!(
        svg,
        r#"  <line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="black" stroke-width="4"/>"#,
        x1 = MARGIN,
        x2 = end_x,
        y = baseline
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{x}" y="{y}">0</text>"#,
        x = MARGIN - 50.0,
        y = baseline - 50.0
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{x}" y="{y}">{length}</text>"#,
        x = end_x,
        y = baseline - 50.0,
        length = plan.profile
    );
    let _ = writeln!(
        svg,
        r#"  <text x="170" y="170">Kerf width: {tolerance}</text>"#,
    );

    // Cut boundaries: a tick per segment end, labels on cuts only.
    let mut x = MARGIN;
    for (length, is_kerf) in segments(plan, tolerance) {
        x += length as f64 / scale;
        let _ = writeln!(
            svg,
            r#"  <line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="black" stroke-width="1"/>"#,
            y1 = baseline - 10.0,
            y2 = baseline + 10.0
        );
        if !is_kerf {
            let _ = writeln!(
                svg,
                r#"  <text x="{tx}" y="{ty}">{length}</text>"#,
                tx = x - length as f64 / scale / 2.0,
                ty = baseline + 10.0 + FONT_SIZE as f64
            );
        }
    }

    let disposition = match plan.remainder {
        RemainderKind::Scrap => "write off",
        RemainderKind::Reusable => "return to stock",
    };
    let _ = writeln!(
        svg,
        r#"  <text x="170" y="{y}">Leftover {leftover}: {disposition}</text>"#,
        y = SHEET_H - 170.0,
        leftover = plan.leftover
    );

    svg.push_str("</svg>\n");
    svg
}

/// Writes one SVG per non-empty plan into `dir`, named `{profile}_{n}.svg`.
pub fn save_diagrams(
    plans: &[CutPlan],
    tolerance: Length,
    dir: impl AsRef<Path>,
) -> std::io::Result<()> {
    let dir = dir.as_ref();
    let mut sheet = 1;
    for plan in plans {
        if plan.is_empty() {
            log::debug!("profile {}: no cuts, skipping diagram", plan.profile);
            continue;
        }
        let path = dir.join(format!("{}_{}.svg", plan.profile, sheet));
        fs::write(path, render(plan, tolerance))?;
        sheet += 1;
    }
    Ok(())
}

/// The plan flattened into drawable segments: cuts with the kerf between
/// consecutive cuts, mirroring the CSV row shape.
fn segments(plan: &CutPlan, tolerance: Length) -> Vec<(Length, bool)> {
    let mut segments = Vec::with_capacity(plan.cuts.len() * 2);
    for (i, &cut) in plan.cuts.iter().enumerate() {
        if i > 0 {
            segments.push((tolerance, true));
        }
        segments.push((cut, false));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> CutPlan {
        CutPlan {
            profile: 1000,
            cuts: vec![400, 300],
            leftover: 295,
            remainder: RemainderKind::Scrap,
        }
    }

    #[test]
    fn test_segments_interleave_kerf() {
        let segments = segments(&sample_plan(), 5);
        assert_eq!(segments, vec![(400, false), (5, true), (300, false)]);
    }

    #[test]
    fn test_render_draws_profile_and_ticks() {
        let svg = render(&sample_plan(), 5);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        // One profile segment plus three boundary ticks.
        assert_eq!(svg.matches("<line").count(), 4);
        assert!(svg.contains(">400<"));
        assert!(svg.contains(">300<"));
        assert!(svg.contains("Kerf width: 5"));
        assert!(svg.contains("Leftover 295: write off"));
    }

    #[test]
    fn test_render_reusable_note() {
        let plan = CutPlan {
            profile: 2000,
            cuts: vec![800],
            leftover: 1190,
            remainder: RemainderKind::Reusable,
        };
        let svg = render(&plan, 10);

        assert!(svg.contains("Leftover 1190: return to stock"));
    }

    #[test]
    fn test_long_profile_is_scaled_to_sheet() {
        let plan = CutPlan {
            profile: 6000,
            cuts: vec![3000],
            leftover: 2990,
            remainder: RemainderKind::Reusable,
        };
        let svg = render(&plan, 10);

        // The end label sits at the right margin, not past the sheet edge.
        assert!(svg.contains(r#"<text x="1604" y=""#));
    }
}
