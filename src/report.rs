//! 설계 결과 콘솔 출력.

use std::io::{self, Write};

use crate::column::{OperatingLine, Section};
use crate::design::DesignOutcome;

/// 설계 요약을 출력한다.
pub fn write_summary<W: Write>(out: &mut W, outcome: &DesignOutcome) -> io::Result<()> {
    let d = &outcome.design;
    writeln!(out, "\n=== McCabe-Thiele Design ===")?;
    writeln!(out, "최소 환류비 (R_min): {:.2}", d.minimum_reflux)?;
    writeln!(out, "운전 환류비 (R): {:.2}", d.reflux)?;
    writeln!(out, "이론 단수: {}", d.stage_count)?;
    writeln!(out, "공급단: {}", d.feed_stage)?;
    writeln!(out, "탑 직경: {:.2} m", d.diameter_m)?;
    writeln!(out, "단 간격: {:.2} m", d.tray_spacing_m)?;
    writeln!(
        out,
        "단 적층 높이: {:.2} m",
        outcome.sizing.tray_stack_height_m
    )?;
    writeln!(
        out,
        "핀치점: ({:.4}, {:.4}), 공급점: ({:.4}, {:.4})",
        outcome.pinch.x, outcome.pinch.y, outcome.lines.feed_point.x, outcome.lines.feed_point.y
    )?;
    write_line(out, "정류부 조작선", &outcome.lines.rectifying)?;
    write_line(out, "탈거부 조작선", &outcome.lines.stripping)?;
    Ok(())
}

fn write_line<W: Write>(out: &mut W, label: &str, line: &OperatingLine) -> io::Result<()> {
    writeln!(
        out,
        "{label}: y = {:.4}x + {:.4}  (x ∈ [{:.4}, {:.4}])",
        line.slope, line.intercept, line.x_low, line.x_high
    )
}

/// 계단 꼭짓점 표를 출력한다.
pub fn write_stages<W: Write>(out: &mut W, outcome: &DesignOutcome) -> io::Result<()> {
    let start = outcome.staircase.start;
    writeln!(out, "\n-- Stages --")?;
    writeln!(out, "{:>4} {:>10} {:>10} {:>10}  구간", "단", "x", "y", "y'")?;
    writeln!(out, "{:>4} {:>10.5} {:>10.5}", "", start.x, start.y)?;
    for stage in &outcome.staircase.stages {
        let section = match stage.section {
            Section::Rectifying => "정류부",
            Section::Stripping => "탈거부",
        };
        let marker = if stage.number == outcome.staircase.feed_stage {
            " (공급단)"
        } else {
            ""
        };
        writeln!(
            out,
            "{:>4} {:>10.5} {:>10.5} {:>10.5}  {section}{marker}",
            stage.number, stage.equilibrium.x, stage.equilibrium.y, stage.operating.y
        )?;
    }
    Ok(())
}
