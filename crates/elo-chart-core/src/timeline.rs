// File: crates/elo-chart-core/src/timeline.rs
// Summary: Year-axis strip listing timeline events; only major ones get a label.

use crate::annotation::{Importance, TimelineEvent};
use crate::chart::CALLOUT_SIZE;
use crate::draw::{DrawBackend, LineStyle, Marker, TextAlign, TextStyle};
use crate::geometry::{Point, RectF};
use crate::scale::LinearScale;
use crate::theme::Theme;

pub(crate) fn draw<B: DrawBackend + ?Sized>(backend: &mut B, rect: RectF, events: &[TimelineEvent], theme: &Theme) {
    let (Some(first), Some(last)) = (events.iter().map(|e| e.year).min(), events.iter().map(|e| e.year).max()) else {
        return;
    };
    let scale = LinearScale::new(rect.left + 12.0, rect.right - 12.0, first as f64, last as f64);
    let cy = rect.center().y;

    backend.draw_line(&[Point::new(rect.left, cy), Point::new(rect.right, cy)], &LineStyle::solid(theme.axis_line, 1.0));

    let tick = LineStyle::solid(theme.tick, 1.0);
    let label = TextStyle::new(CALLOUT_SIZE, theme.callout).aligned(TextAlign::Center);
    let year = TextStyle::new(CALLOUT_SIZE - 1.0, theme.tick).aligned(TextAlign::Left);
    backend.draw_text(Point::new(rect.left, rect.bottom), &first.to_string(), &year);
    backend.draw_text(
        Point::new(rect.right, rect.bottom),
        &last.to_string(),
        &year.aligned(TextAlign::Right),
    );

    let mut majors = 0usize;
    for ev in events {
        let x = scale.to_px(ev.year as f64);
        match ev.importance {
            Importance::Minor => {
                backend.draw_line(&[Point::new(x, cy - 4.0), Point::new(x, cy + 4.0)], &tick);
            }
            Importance::Major => {
                backend.draw_marker(Point::new(x, cy), Marker::Diamond, 8.0, theme.event_marker);
                // alternate above/below so neighbouring labels overlap less
                let y = if majors % 2 == 0 { cy - 8.0 } else { cy + 8.0 + CALLOUT_SIZE };
                backend.draw_text(Point::new(x, y), &format!("{} {}", ev.year, ev.description), &label);
                majors += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordingBackend;

    #[test]
    fn only_major_events_are_labelled() {
        let events = vec![
            TimelineEvent::new(1970, "FIDE adopts Elo ratings", Importance::Major),
            TimelineEvent::new(1975, "Minor thing", Importance::Minor),
        ];
        let mut b = RecordingBackend::new(800.0, 600.0);
        draw(&mut b, RectF::from_ltrb(0.0, 500.0, 800.0, 550.0), &events, &Theme::light());
        let texts: Vec<&str> = b.texts().collect();
        assert!(texts.contains(&"1970 FIDE adopts Elo ratings"));
        assert!(!texts.iter().any(|t| t.contains("Minor thing")));
        assert_eq!(b.markers(Marker::Diamond).count(), 1);
    }

    #[test]
    fn empty_timeline_draws_nothing() {
        let mut b = RecordingBackend::new(800.0, 600.0);
        draw(&mut b, RectF::from_ltrb(0.0, 500.0, 800.0, 550.0), &[], &Theme::light());
        assert!(b.commands.is_empty());
    }
}
