//! Text presentation of notices and map snapshots

use std::fmt::Write as _;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use application::{MapRendererPort, MapSnapshot, Notice, NoticePort};
use parking_lot::Mutex;

/// Prints notices as they are raised and counts the error ones
#[derive(Debug)]
pub struct ConsoleNotices<W> {
    out: Mutex<W>,
    errors: AtomicUsize,
}

impl<W: Write + Send> ConsoleNotices<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            errors: AtomicUsize::new(0),
        }
    }

    /// Number of error notices published so far
    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }
}

impl ConsoleNotices<Vec<u8>> {
    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out.lock()).into_owned()
    }
}

impl<W: Write + Send> NoticePort for ConsoleNotices<W> {
    fn publish(&self, notice: Notice) {
        let icon = if notice.kind.is_error() {
            self.errors.fetch_add(1, Ordering::Relaxed);
            "⚠️"
        } else {
            "ℹ️"
        };
        let _ = writeln!(self.out.lock(), "{icon} {notice}");
    }
}

/// Format a snapshot as a block of text
pub fn format_snapshot(snapshot: &MapSnapshot) -> String {
    let mut text = String::new();
    let _ = writeln!(
        text,
        "🗺️  Map centered at {} (zoom {})",
        snapshot.center, snapshot.zoom
    );
    for marker in [&snapshot.start, &snapshot.destination] {
        let _ = writeln!(text, "   📌 {} @ {}", marker.label, marker.position);
    }
    if let Some(clicked) = &snapshot.clicked {
        let _ = writeln!(text, "   🖱️  {}", clicked.label);
    }
    match snapshot.metrics_line() {
        Some(line) => {
            let _ = writeln!(text, "   🚗 {line}");
        },
        None => {
            let _ = writeln!(text, "   🚗 No route searched yet");
        },
    }
    let _ = write!(text, "   [{}]", snapshot.locate_label());
    text
}

/// Draws snapshots as text
#[derive(Debug)]
pub struct TextMapRenderer<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TextMapRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl TextMapRenderer<Vec<u8>> {
    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out.lock()).into_owned()
    }
}

impl<W: Write + Send> MapRendererPort for TextMapRenderer<W> {
    fn render(&self, snapshot: &MapSnapshot) {
        let _ = writeln!(self.out.lock(), "{}", format_snapshot(snapshot));
    }
}

#[cfg(test)]
mod tests {
    use domain::{Coordinate, NamedLocation, RouteMetrics, TripPlan};

    use super::*;

    #[test]
    fn notices_are_printed_and_errors_counted() {
        let notices = ConsoleNotices::new(Vec::new());

        notices.publish(Notice::geolocation_retrying());
        notices.publish(Notice::address_not_found("Nowhereville"));

        assert_eq!(notices.error_count(), 1);
        let output = notices.contents();
        assert!(output.contains("Location request timed out. Retrying..."));
        assert!(output.contains("Location \"Nowhereville\" not found."));
    }

    #[test]
    fn snapshot_text_lists_markers_and_metrics() {
        let mut plan = TripPlan::new(
            NamedLocation::new("Pune", Coordinate::pune()),
            NamedLocation::new("Mumbai", Coordinate::mumbai()),
        );
        let ticket = plan.route_ticket();
        assert!(plan.store_metrics(
            ticket,
            RouteMetrics::from_meters_seconds(150_000.0, 9_000.0)
        ));
        plan.record_click(Coordinate::new(18.5, 73.8).unwrap());

        let text = format_snapshot(&MapSnapshot::from_plan(&plan));

        assert!(text.contains("Map centered at 18.520400, 73.856700 (zoom 13)"));
        assert!(text.contains("Start: Pune @ 18.520400, 73.856700"));
        assert!(text.contains("Destination: Mumbai @ 19.076000, 72.877700"));
        assert!(text.contains("Clicked Location: [18.50000, 73.80000]"));
        assert!(text.contains("Distance: 150.00 km | Time: 150 mins"));
        assert!(text.ends_with("[📍 Current Location]"));
    }

    #[test]
    fn renderer_writes_snapshot() {
        let renderer = TextMapRenderer::new(Vec::new());
        renderer.render(&MapSnapshot::from_plan(&TripPlan::default()));

        assert!(renderer.contents().contains("No route searched yet"));
    }
}
