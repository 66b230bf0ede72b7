#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use dragsplit_layout::{
    DispatchOutcome, FlowHost, Orientation, PointerInput, Rect, SplitConfig, SplitHost,
    SplitPanel,
};
use libfuzzer_sys::fuzz_target;
use web_time::Instant;

#[derive(Debug, Arbitrary)]
enum Op {
    Down { bar: u8 },
    DownRaw { idx: i16, x: i16, y: i16 },
    Move { x: i16, y: i16, advance_ms: u8 },
    Up,
    Leave,
    Tick { advance_ms: u8 },
    AddPane { size: u8 },
    RemovePane { index: u8 },
    Flip,
    Teardown,
    Connect,
}

#[derive(Debug, Arbitrary)]
struct Input {
    panes: Vec<u8>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    if input.panes.len() > 16 || input.ops.len() > 512 {
        return;
    }
    let mut host = FlowHost::new(Orientation::Horizontal).at(7.0, 3.0);
    for size in &input.panes {
        host.push_pane(f64::from(*size), f64::from(*size));
    }
    let Ok(mut panel) = SplitPanel::new(host, SplitConfig::default()) else {
        return;
    };
    let mut now = Instant::now();

    for op in input.ops {
        let axis_before = panel.orientation();
        let before = extents(&panel);
        let dispatch = match op {
            Op::Down { bar } => {
                let Some(target) = panel.bar_target(usize::from(bar)) else {
                    continue;
                };
                panel.pointer_down(target, now)
            }
            Op::DownRaw { idx, x, y } => {
                let target = dragsplit_layout::BarTarget::new(Rect::new(
                    f64::from(x),
                    f64::from(y),
                    8.0,
                    8.0,
                ))
                .with_attribute("idx", idx.to_string());
                panel.handle(PointerInput::Down { target }, now)
            }
            Op::Move { x, y, advance_ms } => {
                now += Duration::from_millis(u64::from(advance_ms));
                panel.pointer_move(f64::from(x), f64::from(y), now)
            }
            Op::Up => panel.pointer_up(now),
            Op::Leave => panel.pointer_leave(),
            Op::Tick { advance_ms } => {
                now += Duration::from_millis(u64::from(advance_ms));
                panel.tick(now)
            }
            Op::AddPane { size } => {
                if panel.host().pane_count() >= 16 {
                    continue;
                }
                panel.host_mut().push_pane(f64::from(size), f64::from(size));
                panel.children_changed()
            }
            Op::RemovePane { index } => {
                if panel.host_mut().remove_pane(usize::from(index)).is_none() {
                    continue;
                }
                panel.children_changed()
            }
            Op::Flip => {
                let next = panel.orientation().flipped();
                panel.set_orientation(next)
            }
            Op::Teardown => panel.teardown(),
            Op::Connect => panel.connect(),
        };

        let pane_count = panel.host().pane_count();
        assert_eq!(panel.grab_bars().len(), pane_count.saturating_sub(1));
        if let Some(bar) = panel.active_bar() {
            assert!(bar + 1 < pane_count, "active bar {bar} without a pair");
            assert!(panel.is_connected());
        }

        let after = extents(&panel);
        match dispatch.resize {
            Some(cmd) => {
                assert_eq!(dispatch.log.outcome, DispatchOutcome::ResizeApplied);
                let i = cmd.index;
                let pair_before = before[i] + before[i + 1];
                let pair_after = after[i] + after[i + 1];
                assert!((pair_before - pair_after).abs() < 1e-6);
                assert!(after[i] >= 0.0 && after[i + 1] >= 0.0);
            }
            None if dispatch.is_ignored()
                && before.len() == after.len()
                && panel.orientation() == axis_before =>
            {
                assert_eq!(before, after, "ignored dispatch changed pane sizes");
            }
            None => {}
        }
    }
});

fn extents(panel: &SplitPanel<FlowHost>) -> Vec<f64> {
    let axis = panel.orientation();
    (0..panel.host().pane_count())
        .filter_map(|i| panel.host().pane_rect(i))
        .map(|rect| axis.extent(&rect))
        .collect()
}
