//! Fixed-width sign rendering.
//!
//! Lays departures out like an LED stop display:
//!
//! ```text
//! 21   Courtenay Place            5min
//! 2    Karori                      Due
//! Time 22:30
//! ```
//!
//! Columns are route (4), destination (24) and ETA (6), separated by a
//! single space. Widths are counted in characters, not bytes.

use chrono::{Local, NaiveTime};

use crate::domain::DepartureView;

/// Route column width.
pub const ROUTE_WIDTH: usize = 4;

/// Destination column width.
pub const DEST_WIDTH: usize = 24;

/// ETA column width.
pub const ETA_WIDTH: usize = 6;

/// Marker appended to truncated text.
pub const ELLIPSIS: char = '…';

// Bold, amber foreground. Background is left alone.
const STYLE_PREFIX: &str = "\x1b[1m\x1b[38;5;214m";
const STYLE_RESET: &str = "\x1b[0m";

/// Truncate `text` to at most `width` characters.
///
/// Overflowing text keeps `width - 1` characters plus [`ELLIPSIS`]; widths of
/// one or less are hard-truncated without a marker.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 1 {
        return text.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Countdown text for the ETA column.
pub fn eta_text(minutes_away: Option<i64>) -> String {
    match minutes_away {
        None => "--".to_string(),
        Some(m) if m <= 0 => "Due".to_string(),
        Some(1) => "1min".to_string(),
        Some(m) => format!("{m}min"),
    }
}

/// Render the sign using the current local time for the trailer line.
pub fn render_sign(
    stop_label: &str,
    stop_id: &str,
    departures: &[DepartureView],
    limit: usize,
    styled: bool,
) -> String {
    render_sign_at(
        stop_label,
        stop_id,
        departures,
        limit,
        styled,
        Local::now().time(),
    )
}

/// Render the sign with an explicit clock time for the trailer line.
///
/// Only the first `limit` departures are shown. With no departures the sign
/// is a `--` placeholder and the trailer. A departure without a headsign
/// shows the stop label instead (or "Stop {stop_id}" if that is empty too).
pub fn render_sign_at(
    stop_label: &str,
    stop_id: &str,
    departures: &[DepartureView],
    limit: usize,
    styled: bool,
    clock: NaiveTime,
) -> String {
    let style = |line: String| {
        if styled {
            format!("{STYLE_PREFIX}{line}{STYLE_RESET}")
        } else {
            line
        }
    };
    let trailer = format!("Time {}", clock.format("%H:%M"));

    if departures.is_empty() {
        return [style("--".to_string()), style(trailer)].join("\n");
    }

    let fallback_dest = if stop_label.is_empty() {
        format!("Stop {stop_id}")
    } else {
        stop_label.to_string()
    };

    departures
        .iter()
        .take(limit)
        .map(|d| {
            let dest = if d.headsign.is_empty() {
                fallback_dest.as_str()
            } else {
                d.headsign.as_str()
            };
            let route = truncate(&d.service_id, ROUTE_WIDTH);
            let dest = truncate(dest, DEST_WIDTH);
            let eta = truncate(&eta_text(d.minutes_away), ETA_WIDTH);
            style(format!(
                "{route:<ROUTE_WIDTH$} {dest:<DEST_WIDTH$} {eta:>ETA_WIDTH$}"
            ))
        })
        .chain(std::iter::once(style(trailer)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> NaiveTime {
        NaiveTime::from_hms_opt(22, 30, 0).unwrap()
    }

    fn view(service_id: &str, headsign: &str, minutes_away: Option<i64>) -> DepartureView {
        DepartureView {
            service_id: service_id.to_string(),
            headsign: headsign.to_string(),
            minutes_away,
            time_str: "22:35".to_string(),
            status: None,
        }
    }

    #[test]
    fn eta_mapping() {
        assert_eq!(eta_text(None), "--");
        assert_eq!(eta_text(Some(0)), "Due");
        assert_eq!(eta_text(Some(-3)), "Due");
        assert_eq!(eta_text(Some(1)), "1min");
        assert_eq!(eta_text(Some(5)), "5min");
        assert_eq!(eta_text(Some(120)), "120min");
    }

    #[test]
    fn truncate_examples() {
        assert_eq!(truncate("Courtenay Place", 24), "Courtenay Place");
        assert_eq!(truncate("Airport", 4), "Air…");
        assert_eq!(truncate("Airport", 1), "A");
        assert_eq!(truncate("Airport", 0), "");
        assert_eq!(truncate("Ngā", 3), "Ngā");
    }

    #[test]
    fn empty_sign_is_two_lines() {
        for limit in [0, 1, 5] {
            let text = render_sign_at("Stop", "7958", &[], limit, false, clock());
            assert_eq!(text, "--\nTime 22:30");
        }
    }

    #[test]
    fn row_layout() {
        let views = [view("21", "Courtenay Place", Some(5))];
        let text = render_sign_at("Melrose", "7958", &views, 1, false, clock());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "21   Courtenay Place            5min");
        assert_eq!(lines[0].chars().count(), ROUTE_WIDTH + DEST_WIDTH + ETA_WIDTH + 2);
        assert_eq!(lines[1], "Time 22:30");
    }

    #[test]
    fn long_fields_are_truncated() {
        let views = [view("KPL99", "Wellington Railway Station Platform 9", None)];
        let text = render_sign_at("Melrose", "7958", &views, 1, false, clock());
        let first = text.lines().next().unwrap();

        assert_eq!(first, "KPL… Wellington Railway Stat…     --");
    }

    #[test]
    fn limit_truncates_rows() {
        let views = [
            view("1", "A", Some(1)),
            view("2", "B", Some(2)),
            view("3", "C", Some(3)),
        ];
        assert_eq!(render_sign_at("S", "1", &views, 2, false, clock()).lines().count(), 3);
        assert_eq!(render_sign_at("S", "1", &views, 10, false, clock()).lines().count(), 4);
    }

    #[test]
    fn missing_headsign_uses_stop_label() {
        let views = [view("21", "", Some(0))];
        let text = render_sign_at("Melrose Rd", "7958", &views, 1, false, clock());
        assert!(text.starts_with("21   Melrose Rd"));
        assert!(text.lines().next().unwrap().ends_with("   Due"));

        let text = render_sign_at("", "7958", &views, 1, false, clock());
        assert!(text.starts_with("21   Stop 7958"));
    }

    #[test]
    fn styled_wraps_every_line() {
        let views = [view("21", "Courtenay Place", Some(5))];
        let plain = render_sign_at("S", "1", &views, 1, false, clock());
        let styled = render_sign_at("S", "1", &views, 1, true, clock());

        for (p, s) in plain.lines().zip(styled.lines()) {
            assert_eq!(s, format!("{STYLE_PREFIX}{p}{STYLE_RESET}"));
        }
        assert_eq!(plain.lines().count(), styled.lines().count());
    }
}
