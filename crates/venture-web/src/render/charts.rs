//! Inline SVG charts for the analytics section.

use std::f64::consts::PI;

use venture_core::charts::MAX_SCORE;
use venture_core::{ChartInputs, ScoreBar};

use super::escape;

const SWOT_COLORS: [&str; 4] = ["#2ca02c", "#d62728", "#1f77b4", "#ff7f0e"];

/// Red-yellow-green ramp for a 0-10 score.
const fn score_color(score: u8) -> &'static str {
    match score {
        0..=3 => "#d73027",
        4..=6 => "#fdae61",
        _ => "#1a9850",
    }
}

pub fn score_bars(bars: &[ScoreBar]) -> String {
    const HEIGHT: u32 = 180;
    let step = HEIGHT / u32::from(MAX_SCORE);

    let rects = bars
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            let x = 60 + u32::try_from(index).unwrap_or(0) * 130;
            let score = bar.score.min(MAX_SCORE);
            let height = u32::from(score) * step;
            let y = (20 + HEIGHT).saturating_sub(height);
            format!(
                r##"<rect x="{x}" y="{y}" width="80" height="{height}" fill="{color}"/>
<text x="{cx}" y="{ty}" text-anchor="middle">{score}</text>
<text x="{cx}" y="222" text-anchor="middle">{label}</text>"##,
                color = score_color(score),
                cx = x + 40,
                ty = y.saturating_sub(4),
                label = escape(bar.label),
            )
        })
        .collect::<String>();

    format!(
        r##"<svg viewBox="0 0 320 230" width="320" height="230" role="img" aria-label="Validation scores">
<line x1="40" y1="200" x2="310" y2="200" stroke="#999"/>
{rects}
</svg>"##
    )
}

fn polar(cx: f64, cy: f64, r: f64, turns: f64) -> (f64, f64) {
    let angle = turns.mul_add(2.0 * PI, -PI / 2.0);
    (r.mul_add(angle.cos(), cx), r.mul_add(angle.sin(), cy))
}

#[allow(clippy::cast_precision_loss)]
pub fn swot_pie(inputs: &ChartInputs) -> String {
    const CX: f64 = 110.0;
    const CY: f64 = 110.0;
    const R: f64 = 100.0;

    let slices = &inputs.swot;
    let total = inputs.swot_total();
    let legend = slices
        .iter()
        .zip(SWOT_COLORS)
        .enumerate()
        .map(|(index, (slice, color))| {
            let y = 40 + index * 24;
            format!(
                r##"<rect x="235" y="{ry}" width="12" height="12" fill="{color}"/><text x="253" y="{y}">{label} ({count})</text>"##,
                ry = y - 11,
                label = escape(slice.label),
                count = slice.count,
            )
        })
        .collect::<String>();

    let wedges = if total == 0 {
        format!(r##"<circle cx="{CX}" cy="{CY}" r="{R}" fill="#eee"/><text x="{CX}" y="{CY}" text-anchor="middle">No SWOT items</text>"##)
    } else {
        let mut start = 0.0_f64;
        slices
            .iter()
            .zip(SWOT_COLORS)
            .filter(|(slice, _)| slice.count > 0)
            .map(|(slice, color)| {
                let share = slice.count as f64 / total as f64;
                let end = start + share;
                let wedge = if slice.count == total {
                    format!(r##"<circle cx="{CX}" cy="{CY}" r="{R}" fill="{color}"/>"##)
                } else {
                    let (x1, y1) = polar(CX, CY, R, start);
                    let (x2, y2) = polar(CX, CY, R, end);
                    let large = u8::from(share > 0.5);
                    format!(
                        r##"<path d="M{CX},{CY} L{x1:.2},{y1:.2} A{R},{R} 0 {large} 1 {x2:.2},{y2:.2} Z" fill="{color}"/>"##
                    )
                };
                start = end;
                wedge
            })
            .collect::<String>()
    };

    format!(
        r##"<svg viewBox="0 0 380 220" width="380" height="220" role="img" aria-label="SWOT distribution">
{wedges}
{legend}
</svg>"##
    )
}

pub fn competition_gauge(inputs: &ChartInputs) -> String {
    const UNIT: u32 = 30;
    const THRESHOLD: u32 = 8;

    let value = u32::from(inputs.competition_gauge());
    format!(
        r##"<svg viewBox="0 0 340 90" width="340" height="90" role="img" aria-label="Competition level">
<rect x="20" y="20" width="{low}" height="30" fill="lightgreen"/>
<rect x="{mid_x}" y="20" width="{mid}" height="30" fill="yellow"/>
<rect x="{high_x}" y="20" width="{high}" height="30" fill="lightcoral"/>
<rect x="20" y="28" width="{bar}" height="14" fill="{color}"/>
<line x1="{tx}" y1="14" x2="{tx}" y2="56" stroke="red" stroke-width="4"/>
<text x="20" y="76">0</text><text x="320" y="76" text-anchor="end">10</text>
<text x="170" y="76" text-anchor="middle">{level} ({value}/10)</text>
</svg>"##,
        low = 3 * UNIT,
        mid_x = 20 + 3 * UNIT,
        mid = 4 * UNIT,
        high_x = 20 + 7 * UNIT,
        high = 3 * UNIT,
        bar = value * UNIT,
        color = inputs.competition.gauge_color(),
        tx = 20 + THRESHOLD * UNIT,
        level = inputs.competition,
    )
}
