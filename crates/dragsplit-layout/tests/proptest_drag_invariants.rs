//! Property tests for the drag fold and the panel pipeline.
//!
//! Random pointer streams are folded through `DragTrack` directly and through
//! a full `SplitPanel` over a `FlowHost`; after every step the size pair must
//! be conserved and non-negative, out-of-range samples must leave no trace,
//! and the bar list must match the pane count.

use std::time::Duration;

use dragsplit_layout::{
    DragTrack, FlowHost, IgnoredReason, Orientation, PointerInput, SplitConfig, SplitHost,
    SplitPanel, fold_step,
};
use proptest::prelude::*;
use web_time::Instant;

const EPS: f64 = 1e-6;

fn size() -> impl Strategy<Value = f64> {
    0.0f64..500.0
}

#[derive(Debug, Clone)]
enum Op {
    Down(usize),
    Move(f64),
    Up,
    Leave,
    Tick,
    AddPane(f64),
    RemovePane(usize),
    Flip,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => (0usize..6).prop_map(Op::Down),
        8 => (-200.0f64..1200.0).prop_map(Op::Move),
        1 => Just(Op::Up),
        1 => Just(Op::Leave),
        2 => Just(Op::Tick),
        1 => (1.0f64..200.0).prop_map(Op::AddPane),
        1 => (0usize..6).prop_map(Op::RemovePane),
        1 => Just(Op::Flip),
    ]
}

proptest! {
    #[test]
    fn fold_step_conserves_and_stays_non_negative(
        a in size(),
        b in size(),
        diff in -1000.0f64..1000.0,
    ) {
        let [x, y] = fold_step([a, b], diff);
        prop_assert!((x + y - (a + b)).abs() < EPS);
        prop_assert!(x >= 0.0, "x = {}", x);
        prop_assert!(y >= 0.0, "y = {}", y);
    }

    #[test]
    fn track_conserves_total_over_any_stream(
        a in size(),
        b in size(),
        origin in 0.0f64..1000.0,
        positions in prop::collection::vec(-500.0f64..2000.0, 0..64),
    ) {
        let mut track = DragTrack::start(0, [a, b], origin);
        let total = track.total();
        for p in positions {
            let before = track;
            match track.step(p) {
                Some(cmd) => {
                    prop_assert!(track.range().contains(p));
                    prop_assert!((cmd.total() - total).abs() < EPS);
                    prop_assert!(cmd.sizes[0] >= 0.0 && cmd.sizes[1] >= 0.0);
                }
                None => {
                    prop_assert!(!track.range().contains(p));
                    prop_assert_eq!(track, before);
                }
            }
        }
    }

    #[test]
    fn panel_keeps_invariants_under_random_streams(
        widths in prop::collection::vec(10.0f64..200.0, 1..5),
        ops in prop::collection::vec(op(), 1..80),
    ) {
        let mut host = FlowHost::new(Orientation::Horizontal).at(15.0, 5.0);
        for w in &widths {
            host.push_pane(*w, *w);
        }
        let mut panel = SplitPanel::new(host, SplitConfig::default()).expect("valid");
        let mut now = Instant::now();

        for op in ops {
            now += Duration::from_millis(3);
            let totals_before: Vec<f64> = pane_extents(&panel);
            let dispatch = match op {
                Op::Down(bar) => match panel.bar_target(bar) {
                    Some(target) => panel.handle(PointerInput::Down { target }, now),
                    None => continue,
                },
                Op::Move(p) => {
                    let c = panel.container_rect();
                    panel.pointer_move(c.x + p, c.y + p, now)
                }
                Op::Up => panel.pointer_up(now),
                Op::Leave => panel.pointer_leave(),
                Op::Tick => panel.tick(now),
                Op::AddPane(w) => {
                    panel.host_mut().push_pane(w, w);
                    panel.children_changed()
                }
                Op::RemovePane(i) => {
                    if panel.host_mut().remove_pane(i).is_none() {
                        continue;
                    }
                    panel.children_changed()
                }
                Op::Flip => {
                    let next = panel.orientation().flipped();
                    let d = panel.set_orientation(next);
                    prop_assert!(!panel.is_dragging());
                    prop_assert!(d.resize.is_none());
                    d
                }
            };

            prop_assert_eq!(
                panel.grab_bars().len(),
                panel.host().pane_count().saturating_sub(1)
            );
            if let Some(bar) = panel.active_bar() {
                prop_assert!(bar + 1 < panel.host().pane_count());
            }

            let after = pane_extents(&panel);
            match dispatch.resize {
                Some(cmd) => {
                    let i = cmd.index;
                    let before_pair = totals_before[i] + totals_before[i + 1];
                    prop_assert!((after[i] + after[i + 1] - before_pair).abs() < EPS);
                    prop_assert!(after[i] >= 0.0 && after[i + 1] >= 0.0);
                    for (j, (x, y)) in totals_before.iter().zip(&after).enumerate() {
                        if j != i && j != i + 1 {
                            prop_assert_eq!(x, y);
                        }
                    }
                }
                None if dispatch.ignored_reason() == Some(IgnoredReason::OutsideRange) => {
                    prop_assert_eq!(&totals_before, &after);
                }
                None => {}
            }
        }
    }
}

fn pane_extents(panel: &SplitPanel<FlowHost>) -> Vec<f64> {
    let axis = panel.orientation();
    (0..panel.host().pane_count())
        .filter_map(|i| panel.host().pane_rect(i))
        .map(|rect| axis.extent(&rect))
        .collect()
}
