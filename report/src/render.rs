use common::{EntryRouteAnswer, EntryTimingAnswer, HoldPositionAnswer, TacticalReport};

pub fn entry_route(answer: &EntryRouteAnswer) -> String {
    let verdict = if answer.common { "is" } else { "is not" };

    format!(
        "Entering via the boundary {} a common strategy used by {} on {} side ({} of {} player rounds favor it).",
        verdict,
        answer.selection.team,
        answer.selection.side,
        answer.pairs_inside,
        answer.pairs_inside + answer.pairs_outside,
    )
}

pub fn entry_timing(answer: &EntryTimingAnswer) -> String {
    let armed = format!(
        "with at least {} {}",
        answer.min_weapons,
        answer.weapon_classes.join(" or ")
    );

    match &answer.average_clock {
        Some(clock) => format!(
            "The average timer that {} on {} side enters {:?} {} is at clock time {}.",
            answer.selection.team, answer.selection.side, answer.area, armed, clock,
        ),
        None => format!(
            "{} on {} side has never entered {:?} {}.",
            answer.selection.team, answer.selection.side, answer.area, armed,
        ),
    }
}

pub fn hold_position(answer: &HoldPositionAnswer) -> String {
    match &answer.hottest {
        Some(cell) => format!(
            "{} on {} side is most often seen inside {:?} between x {} and {}, y {} and {} ({} of {} samples).",
            answer.selection.team,
            answer.selection.side,
            answer.area,
            cell.min_x,
            cell.max_x,
            cell.min_y,
            cell.max_y,
            cell.count,
            answer.samples,
        ),
        None => format!(
            "{} on {} side was never seen inside {:?}.",
            answer.selection.team, answer.selection.side, answer.area,
        ),
    }
}

pub fn text(report: &TacticalReport) -> String {
    let mut lines = Vec::new();

    if report.rejected_rows > 0 {
        lines.push(format!(
            "Skipped {} of {} rows that could not be read.",
            report.rejected_rows, report.rows
        ));
    }

    lines.extend(report.entry_route.as_ref().map(entry_route));
    lines.extend(report.entry_timing.as_ref().map(entry_timing));
    lines.extend(report.hold_position.as_ref().map(hold_position));

    lines.join("\n")
}
