use dragsplit::prelude::*;
use web_time::Instant;

/// Host with fixed pane rectangles, as a rendering layer would report them.
struct StaticHost {
    container: Rect,
    panes: Vec<Rect>,
    writes: Vec<(usize, Orientation, f64)>,
}

impl SplitHost for StaticHost {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn pane_count(&self) -> usize {
        self.panes.len()
    }

    fn pane_rect(&self, index: usize) -> Option<Rect> {
        self.panes.get(index).copied()
    }

    fn set_pane_extent(&mut self, index: usize, orientation: Orientation, size: f64) {
        self.writes.push((index, orientation, size));
    }
}

#[test]
fn prelude_drives_a_custom_host() {
    let host = StaticHost {
        container: Rect::new(0.0, 0.0, 300.0, 40.0),
        panes: vec![
            Rect::new(0.0, 0.0, 100.0, 40.0),
            Rect::new(100.0, 0.0, 200.0, 40.0),
        ],
        writes: Vec::new(),
    };
    let mut panel = SplitPanel::new(host, SplitConfig::default()).expect("valid");
    let now = Instant::now();
    let target = panel.bar_target(0).expect("bar 0");
    let d = panel.handle(PointerInput::Down { target }, now);
    assert_eq!(d.log.outcome, DispatchOutcome::GestureStarted { bar_index: 0 });

    panel.handle(PointerInput::Move { page_x: 150.0, page_y: 5.0 }, now);
    assert_eq!(
        panel.host().writes,
        vec![
            (0, Orientation::Horizontal, 150.0),
            (1, Orientation::Horizontal, 150.0),
        ]
    );
}

#[test]
fn crate_aliases_reach_sub_crates() {
    let config: dragsplit::Result<SplitConfig> =
        dragsplit::layout::SplitConfig::from_json_str(r#"{ "bar_thickness": 4.0 }"#);
    assert_eq!(config.expect("valid").bar_thickness, 4.0);
    assert_eq!(dragsplit::core::attr::BAR_INDEX_ATTRIBUTE, "idx");
}

#[test]
fn orientation_parses_from_text() {
    assert_eq!("vertical".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert!("diagonal".parse::<Orientation>().is_err());
}
