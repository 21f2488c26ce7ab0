//! Property-based tests for the reveal/grow timeline

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use track_reveal::prelude::*;

// ===== Strategy definitions =====

/// Tracks of 1-12 points inside the reference canvas
fn track_strategy() -> impl Strategy<Value = Track> {
    prop::collection::vec((0.0f32..900.0, 0.0f32..562.0), 1..12)
        .prop_map(|coords| Track::from_coords(&coords, 1.0).unwrap())
}

/// Expected reveal count after `ticks` calls
fn expected_reveals(ticks: u64, n: usize, interval: u64) -> usize {
    if ticks == 0 {
        return 0;
    }
    (((ticks - 1) / interval + 1) as usize).min(n)
}

/// Expected width after `ticks` calls, counted tick by tick from the rules
fn expected_width(ticks: u64, n: usize, config: &AnimationConfig) -> u32 {
    let complete_at = (n as u64 - 1) * config.reveal_interval_frames + 1;
    let mut width = config.initial_line_width;
    for tick in complete_at..=ticks {
        let post_complete = tick - complete_at + 1;
        if post_complete > config.growth_threshold_frames
            && tick % config.growth_interval_frames == 0
        {
            width = (width + 1).min(config.max_line_width);
        }
    }
    width
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Reveal count follows min(N, floor((t - 1) / interval) + 1)
    #[test]
    fn prop_reveal_index_formula(track in track_strategy(), ticks in 0u64..4_000) {
        let n = track.len();
        let mut controller = AnimationController::new(track);
        controller.advance_frames(ticks);
        prop_assert_eq!(controller.state().reveal_index, expected_reveals(ticks, n, 300));
        prop_assert_eq!(controller.state().frame, ticks);
    }

    /// Reveal index never decreases and never exceeds N
    #[test]
    fn prop_reveal_index_monotonic(track in track_strategy(), ticks in 0u64..4_000) {
        let n = track.len();
        let mut controller = AnimationController::new(track);
        let mut last = 0;
        for _ in 0..ticks {
            controller.advance_frame();
            let index = controller.state().reveal_index;
            prop_assert!(index >= last);
            prop_assert!(index <= n);
            last = index;
        }
    }

    /// Post-completion counter is idle while revealing, then +1 per tick
    #[test]
    fn prop_post_complete_counter(track in track_strategy(), ticks in 0u64..4_000) {
        let mut controller = AnimationController::new(track);
        for _ in 0..ticks {
            let before = controller.state().post_complete_frames;
            controller.advance_frame();
            let after = controller.state().post_complete_frames;
            if controller.is_complete() {
                prop_assert_eq!(after, before + 1);
            } else {
                prop_assert_eq!(after, 0);
            }
        }
    }

    /// Width stays in bounds, moves by at most +1, and matches the rules
    #[test]
    fn prop_line_width_rules(
        track in track_strategy(),
        interval in 1u64..50,
        threshold in 0u64..100,
        growth in 1u64..10,
        ticks in 0u64..3_000,
    ) {
        let n = track.len();
        let config = AnimationConfig::default()
            .with_reveal_interval(interval)
            .with_growth_threshold(threshold)
            .with_growth_interval(growth);
        let mut controller = AnimationController::with_config(track, config.clone()).unwrap();

        let mut last = controller.state().line_width;
        for _ in 0..ticks {
            controller.advance_frame();
            let width = controller.state().line_width;
            prop_assert!((2..=50).contains(&width));
            prop_assert!(width == last || width == last + 1);
            if width == last + 1 {
                prop_assert!(controller.state().post_complete_frames > threshold);
                prop_assert_eq!(controller.state().frame % growth, 0);
            }
            last = width;
        }
        prop_assert_eq!(last, expected_width(ticks, n, &config));
    }

    /// Markers always match the reveal count; segments only when complete
    #[test]
    fn prop_description_matches_state(track in track_strategy(), ticks in 0u64..4_000) {
        let n = track.len();
        let mut controller = AnimationController::new(track);
        controller.advance_frames(ticks);
        let desc = controller.current_frame_description();

        prop_assert_eq!(desc.markers.len(), controller.state().reveal_index);
        if controller.state().reveal_index == n {
            prop_assert_eq!(desc.segments.len(), n);
            prop_assert!(desc.segments.iter().all(|s| s.dots.len() == 20));
            prop_assert_eq!(desc.phase, Phase::Complete);
        } else {
            prop_assert!(desc.segments.is_empty());
            prop_assert_eq!(desc.phase, Phase::Revealing);
        }
    }

    /// Segments chain around the polygon: each ends where the next starts
    #[test]
    fn prop_segments_form_closed_loop(track in track_strategy()) {
        let n = track.len() as u64;
        let mut controller = AnimationController::new(track);
        controller.advance_frames((n - 1) * 300 + 1);
        let segments = controller.current_frame_description().segments;
        for (i, segment) in segments.iter().enumerate() {
            let next = &segments[(i + 1) % segments.len()];
            prop_assert_eq!(segment.end, next.start);
            prop_assert_eq!(segment.dots[0].center, segment.start);
        }
    }
}

// ===== Reference scenarios =====

#[test]
fn scenario_single_tick() {
    let mut controller = AnimationController::reference();
    controller.advance_frame();
    assert_eq!(controller.state().reveal_index, 1);
    assert_eq!(controller.state().frame, 1);
    let desc = controller.current_frame_description();
    assert_eq!(desc.markers.len(), 1);
    assert!(desc.segments.is_empty());
}

#[test]
fn scenario_all_points_revealed() {
    let mut controller = AnimationController::reference();
    controller.advance_frames(2401);
    assert_eq!(controller.state().reveal_index, 9);
    assert_eq!(controller.state().post_complete_frames, 1);
    assert_eq!(controller.state().line_width, 2);
    let desc = controller.current_frame_description();
    assert_eq!(desc.segments.len(), 9);
    assert!(desc.segments.iter().all(|s| s.dots.len() == 20));
}

#[test]
fn scenario_width_settles_at_fifty() {
    let mut controller = AnimationController::reference();
    controller.advance_frames(2401);
    controller.advance_frames(500);
    assert_eq!(controller.state().post_complete_frames, 501);
    controller.advance_frames(2499);
    assert_eq!(controller.state().post_complete_frames, 3000);
    assert_eq!(controller.state().line_width, 50);
    assert!(controller.is_settled());
}
