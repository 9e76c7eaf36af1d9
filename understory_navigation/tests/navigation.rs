// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenario tests for the `understory_navigation` crate.
//!
//! Screens record their lifecycle notifications into a shared log so the
//! tests can check ordering as well as the resulting stack.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Rect, Vec2};
use understory_navigation::{
    AnimationProvider, NavOutcome, NavigationConfig, NavigationStack, PanEvent, PanPhase,
    PopVeto, Preview, PreviewProvider, Rejected, Screen, ScreenRef, SwipeDirection,
};
use understory_transition::{
    Curve, Operation, Placement, PropertyAnimator, TransitionAnimators, TransitionFrame,
};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);
const FRAME: f64 = 1.0 / 60.0;

type Log = Rc<RefCell<Vec<String>>>;

struct TestScreen {
    name: &'static str,
    log: Log,
    poppable: Cell<bool>,
    preview: RefCell<Option<Preview>>,
}

impl TestScreen {
    fn new(name: &'static str, log: &Log) -> Rc<Self> {
        Rc::new(Self {
            name,
            log: log.clone(),
            poppable: Cell::new(true),
            preview: RefCell::new(None),
        })
    }

    fn record(&self, event: &str) {
        self.log.borrow_mut().push(format!("{}.{event}", self.name));
    }
}

impl PopVeto for TestScreen {
    fn can_be_popped(&self) -> bool {
        self.poppable.get()
    }
}

impl PreviewProvider for TestScreen {
    fn next_screen_to_preview(&self) -> Option<Preview> {
        self.preview.borrow().clone()
    }
}

impl Screen for TestScreen {
    fn title(&self) -> Option<String> {
        Some(self.name.into())
    }
    fn will_appear(&self, _animated: bool) {
        self.record("will_appear");
    }
    fn did_appear(&self, _animated: bool) {
        self.record("did_appear");
    }
    fn will_disappear(&self, _animated: bool) {
        self.record("will_disappear");
    }
    fn did_disappear(&self, _animated: bool) {
        self.record("did_disappear");
    }
    fn will_be_dismissed(&self) {
        self.record("will_be_dismissed");
    }
    fn did_dismiss(&self) {
        self.record("did_dismiss");
    }
    fn pop_veto(&self) -> Option<&dyn PopVeto> {
        Some(self)
    }
    fn preview_provider(&self) -> Option<&dyn PreviewProvider> {
        if self.preview.borrow().is_some() {
            Some(self)
        } else {
            None
        }
    }
}

struct Fixture {
    log: Log,
    a: Rc<TestScreen>,
    b: Rc<TestScreen>,
    c: Rc<TestScreen>,
}

impl Fixture {
    fn new() -> Self {
        let log = Log::default();
        Self {
            a: TestScreen::new("A", &log),
            b: TestScreen::new("B", &log),
            c: TestScreen::new("C", &log),
            log,
        }
    }

    /// A stack holding `screens` with the log cleared.
    fn stack(&self, screens: &[&Rc<TestScreen>]) -> NavigationStack {
        let mut stack = NavigationStack::new(screens[0].clone(), BOUNDS);
        if screens.len() > 1 {
            let all = screens.iter().map(|s| (*s).clone() as ScreenRef).collect();
            stack.set_stack(all, false).expect("idle stack accepts set_stack");
        }
        self.log.borrow_mut().clear();
        stack
    }

    fn take_log(&self) -> Vec<String> {
        self.log.borrow_mut().drain(..).collect()
    }
}

fn screen_ref(screen: &Rc<TestScreen>) -> ScreenRef {
    screen.clone()
}

fn names(stack: &NavigationStack) -> Vec<String> {
    stack
        .screens()
        .iter()
        .map(|s| s.title().unwrap_or_default())
        .collect()
}

/// Ticks until the open transition resolves, returning the tick count.
fn run(stack: &mut NavigationStack) -> usize {
    let mut ticks = 0;
    while stack.is_transitioning() {
        ticks += 1;
        stack.tick(FRAME);
        assert!(ticks < 1000, "transition never settled");
    }
    ticks
}

/// A horizontal pan pressed at `origin_x` and moved by `tx`.
fn pan(phase: PanPhase, origin_x: f64, tx: f64, vx: f64) -> PanEvent {
    PanEvent::new(
        phase,
        Point::new(origin_x + tx, 400.0),
        Vec2::new(tx, 0.0),
        Vec2::new(vx, 0.0),
    )
}

#[test]
fn push_completes_with_ordered_notifications() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a]);

    let nav = stack.push(screen_ref(&f.b), true).unwrap();
    assert!(stack.is_transitioning());
    assert_eq!(names(&stack), ["A"], "mutation waits for completion");
    assert!(!nav.is_resolved());

    let ticks = run(&mut stack);
    assert!((24..=25).contains(&ticks), "0.4s at 60Hz, took {ticks}");
    assert_eq!(names(&stack), ["A", "B"]);
    assert_eq!(
        f.take_log(),
        ["A.will_disappear", "B.will_appear", "A.did_disappear", "B.did_appear"]
    );
    let outcome = nav.outcome().unwrap();
    assert!(outcome.is_completed());
    assert_eq!(outcome.removed().map(<[ScreenRef]>::len), Some(0));
    assert_eq!(stack.chrome().title(), Some("B"));
    assert_eq!(stack.chrome().back_title(), Some("A"));
    assert!(stack.chrome().is_back_visible());
}

#[test]
fn non_animated_push_resolves_before_returning() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a]);
    let nav = stack.push(screen_ref(&f.b), false).unwrap();
    assert!(nav.is_resolved());
    assert!(!stack.is_transitioning());
    assert_eq!(names(&stack), ["A", "B"]);
}

#[test]
fn requests_while_in_flight_are_dropped() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b]);

    assert!(stack.pop(true).is_some());
    let frame_before = stack.transition_frame();
    assert!(stack.push(screen_ref(&f.c), true).is_none());
    assert!(stack.pop(true).is_none());
    assert!(stack.pop_to_root(true).is_none());
    assert!(stack.set_stack(vec![screen_ref(&f.c)], false).is_none());
    assert_eq!(stack.check_navigation(), Err(Rejected::InFlight));
    assert_eq!(stack.transition_frame(), frame_before);
    assert_eq!(names(&stack), ["A", "B"]);

    run(&mut stack);
    assert_eq!(names(&stack), ["A"]);
    assert!(stack.check_navigation().is_ok());
}

#[test]
fn pop_returns_the_former_top() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b, &f.c]);
    let top = stack.top().clone();

    let nav = stack.pop(true).unwrap();
    run(&mut stack);
    let outcome = nav.outcome().unwrap();
    let popped = outcome.popped().unwrap();
    assert!(Rc::ptr_eq(popped, &top));
    assert_eq!(outcome.removed().map(<[ScreenRef]>::len), Some(1));
    assert_eq!(names(&stack), ["A", "B"]);
    assert!(
        !f.take_log().iter().any(|e| e.contains("dismiss")),
        "single pops do not dismiss"
    );
}

#[test]
fn pop_to_dismisses_everything_above_target() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b, &f.c]);

    let nav = stack.pop_to(&screen_ref(&f.a), true).unwrap();
    assert_eq!(
        f.take_log(),
        [
            "B.will_be_dismissed",
            "C.will_be_dismissed",
            "C.will_disappear",
            "A.will_appear",
        ]
    );
    run(&mut stack);
    assert_eq!(
        f.take_log(),
        ["C.did_disappear", "A.did_appear", "B.did_dismiss", "C.did_dismiss"]
    );
    assert_eq!(names(&stack), ["A"]);
    let removed = nav.outcome().and_then(NavOutcome::into_removed).unwrap();
    assert!(Rc::ptr_eq(&removed[0], &screen_ref(&f.b)));
    assert!(Rc::ptr_eq(&removed[1], &screen_ref(&f.c)));
    assert!(!stack.chrome().is_back_visible());
}

#[test]
fn pop_to_rejects_unknown_and_top_targets() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b]);
    assert!(stack.pop_to(&screen_ref(&f.c), true).is_none());
    assert_eq!(stack.check_pop_to(&screen_ref(&f.c)), Err(Rejected::NotOnStack));
    assert!(stack.pop_to(&screen_ref(&f.b), true).is_none());
    assert_eq!(stack.check_pop_to(&screen_ref(&f.b)), Err(Rejected::AlreadyTop));
    assert!(f.take_log().is_empty());
}

#[test]
fn pop_to_root_unwinds_to_the_root() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b, &f.c]);
    let nav = stack.pop_to_root(false).unwrap();
    assert!(nav.is_resolved());
    assert_eq!(names(&stack), ["A"]);
    assert!(stack.pop_to_root(false).is_none(), "root is already on top");
}

#[test]
fn veto_blocks_pop_and_swipe_but_not_pop_to() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b]);
    f.b.poppable.set(false);

    assert!(stack.pop(true).is_none());
    assert_eq!(stack.check_pop(), Err(Rejected::Vetoed));
    assert!(!stack.handle_pan(&pan(PanPhase::Began, 40.0, 4.0, 300.0)));
    assert!(!stack.is_transitioning());
    assert_eq!(stack.gesture().direction(), SwipeDirection::None);

    assert!(stack.pop_to_root(false).is_some());
    assert_eq!(names(&stack), ["A"]);

    f.b.poppable.set(true);
}

#[test]
fn stack_is_never_empty() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a]);
    for _ in 0..3 {
        assert!(stack.pop(false).is_none());
        assert!(stack.pop_to_root(true).is_none());
        assert_eq!(stack.depth(), 1);
    }
    stack.push(screen_ref(&f.b), false);
    stack.push(screen_ref(&f.c), true);
    run(&mut stack);
    while stack.pop(true).is_some() {
        run(&mut stack);
        assert!(stack.depth() >= 1);
    }
    assert_eq!(names(&stack), ["A"]);
    assert!(Rc::ptr_eq(stack.root(), stack.top()));
}

#[test]
fn swipe_from_leading_edge_pops_interactively() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b]);

    // Pressed at 0.1 of the width, under the 0.2 default.
    assert!(stack.handle_pan(&pan(PanPhase::Began, 40.0, 4.0, 300.0)));
    assert!(stack.is_interactive());
    assert_eq!(stack.transition().unwrap().operation(), Operation::Pop);
    assert_eq!(stack.gesture().direction(), SwipeDirection::Right);

    assert!(stack.handle_pan(&pan(PanPhase::Changed, 40.0, 320.0, 0.0)));
    assert!((stack.transition().unwrap().progress() - 0.8).abs() < 1e-12);
    assert_eq!(names(&stack), ["A", "B"], "dragging never mutates the stack");

    assert!(stack.handle_pan(&pan(PanPhase::Ended, 40.0, 320.0, 0.0)));
    assert_eq!(stack.gesture().direction(), SwipeDirection::None);
    let ticks = run(&mut stack);
    assert!(ticks <= 300);
    assert_eq!(names(&stack), ["A"]);
    assert_eq!(
        f.take_log(),
        ["B.will_disappear", "A.will_appear", "B.did_disappear", "A.did_appear"]
    );
}

#[test]
fn reversing_a_swipe_pins_progress_at_start() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b]);
    stack.handle_pan(&pan(PanPhase::Began, 20.0, 2.0, 300.0));
    stack.handle_pan(&pan(PanPhase::Changed, 20.0, 200.0, 300.0));
    assert!((stack.transition().unwrap().progress() - 0.5).abs() < 1e-12);
    stack.handle_pan(&pan(PanPhase::Changed, 20.0, -15.0, -300.0));
    assert_eq!(stack.transition().unwrap().progress(), 0.0);
    assert!(stack.is_transitioning(), "reversal does not cancel");
}

#[test]
fn cancelled_swipes_never_mutate_the_stack() {
    for progress in [0.01, 0.5, 0.99] {
        let f = Fixture::new();
        let mut stack = f.stack(&[&f.a, &f.b]);
        let tx = progress * BOUNDS.width();
        stack.handle_pan(&pan(PanPhase::Began, 40.0, 1.0, 300.0));
        stack.handle_pan(&pan(PanPhase::Changed, 40.0, tx, 300.0));
        assert!(stack.handle_pan(&pan(PanPhase::Cancelled, 40.0, tx, 300.0)));
        let ticks = run(&mut stack);
        assert!(ticks <= 300, "settled in {ticks} ticks at {progress}");

        assert_eq!(names(&stack), ["A", "B"], "cancel at {progress}");
        assert!(stack.transition().is_none());
        assert_eq!(
            f.take_log(),
            [
                "B.will_disappear",
                "A.will_appear",
                "A.will_disappear",
                "B.will_appear",
                "A.did_disappear",
                "B.did_appear",
            ]
        );
        assert_eq!(stack.chrome().title(), Some("B"));
    }
}

#[test]
fn release_at_exactly_the_threshold_cancels() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b]);
    stack.handle_pan(&pan(PanPhase::Began, 40.0, 1.0, 300.0));
    stack.handle_pan(&pan(PanPhase::Changed, 40.0, 120.0, 0.0));
    stack.handle_pan(&pan(PanPhase::Ended, 40.0, 120.0, 0.0));
    run(&mut stack);
    assert_eq!(names(&stack), ["A", "B"]);

    stack.handle_pan(&pan(PanPhase::Began, 40.0, 1.0, 300.0));
    stack.handle_pan(&pan(PanPhase::Changed, 40.0, 124.0, 0.0));
    stack.handle_pan(&pan(PanPhase::Ended, 40.0, 124.0, 0.0));
    run(&mut stack);
    assert_eq!(names(&stack), ["A"]);
}

#[test]
fn swipes_outside_the_edge_go_to_content() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b]);
    assert!(!stack.handle_pan(&pan(PanPhase::Began, 200.0, 4.0, 300.0)));
    assert!(!stack.handle_pan(&pan(PanPhase::Changed, 200.0, 150.0, 300.0)));
    assert!(!stack.handle_pan(&pan(PanPhase::Ended, 200.0, 150.0, 300.0)));
    assert!(!stack.is_transitioning());

    let mut root_only = f.stack(&[&f.a]);
    assert!(!root_only.handle_pan(&pan(PanPhase::Began, 10.0, 4.0, 300.0)));
}

#[test]
fn swipe_from_trailing_edge_pushes_the_preview() {
    let f = Fixture::new();
    *f.a.preview.borrow_mut() = Some(Preview::new(screen_ref(&f.c), 0.25));
    let mut stack = f.stack(&[&f.a]);

    assert!(stack.handle_pan(&pan(PanPhase::Began, 380.0, -4.0, -400.0)));
    assert_eq!(stack.transition().unwrap().operation(), Operation::Push);
    assert_eq!(stack.gesture().direction(), SwipeDirection::Left);
    assert!(stack.gesture().previewed_screen().is_some());

    stack.handle_pan(&pan(PanPhase::Changed, 380.0, -300.0, -400.0));
    assert!((stack.transition().unwrap().progress() - 0.75).abs() < 1e-12);
    stack.handle_pan(&pan(PanPhase::Ended, 380.0, -300.0, 0.0));
    assert!(stack.gesture().previewed_screen().is_none());
    run(&mut stack);
    assert_eq!(names(&stack), ["A", "C"]);
}

#[test]
fn short_preview_swipe_cancels_without_pushing() {
    let f = Fixture::new();
    *f.a.preview.borrow_mut() = Some(Preview::new(screen_ref(&f.c), 0.25));
    let mut stack = f.stack(&[&f.a]);

    assert!(stack.handle_pan(&pan(PanPhase::Began, 380.0, -4.0, -400.0)));
    stack.handle_pan(&pan(PanPhase::Changed, 380.0, -80.0, -400.0));
    // 80 units is 0.2 of the width, under the completion threshold.
    assert!(stack.handle_pan(&pan(PanPhase::Ended, 380.0, -80.0, 0.0)));
    assert!(stack.gesture().previewed_screen().is_none());
    run(&mut stack);

    assert_eq!(names(&stack), ["A"]);
    assert_eq!(
        f.take_log(),
        [
            "A.will_disappear",
            "C.will_appear",
            "C.will_disappear",
            "A.will_appear",
            "C.did_disappear",
            "A.did_appear",
        ]
    );
    assert!(stack.gesture().previewed_screen().is_none());
    assert_eq!(stack.chrome().title(), Some("A"));
}

#[test]
fn cancelled_preview_swipe_leaves_the_stack() {
    let f = Fixture::new();
    *f.a.preview.borrow_mut() = Some(Preview::new(screen_ref(&f.c), 0.25));
    let mut stack = f.stack(&[&f.a]);

    stack.handle_pan(&pan(PanPhase::Began, 380.0, -4.0, -400.0));
    stack.handle_pan(&pan(PanPhase::Changed, 380.0, -360.0, -400.0));
    assert!(stack.handle_pan(&pan(PanPhase::Cancelled, 380.0, -360.0, -400.0)));
    run(&mut stack);
    assert_eq!(names(&stack), ["A"]);
    assert!(!stack.contains(&screen_ref(&f.c)));
}

#[test]
fn released_swipe_settles_on_a_slow_frame_clock() {
    for dt in [0.1, 1.0] {
        let f = Fixture::new();
        let mut stack = f.stack(&[&f.a, &f.b]);
        stack.handle_pan(&pan(PanPhase::Began, 40.0, 4.0, 300.0));
        stack.handle_pan(&pan(PanPhase::Changed, 40.0, 320.0, 0.0));
        stack.handle_pan(&pan(PanPhase::Ended, 40.0, 320.0, 0.0));

        let mut ticks = 0;
        while stack.is_transitioning() {
            stack.tick(dt);
            ticks += 1;
            if let Some(context) = stack.transition() {
                assert!(context.progress().is_finite(), "progress diverged at dt = {dt}");
            }
            assert!(ticks <= 60, "swipe never settled at dt = {dt}");
        }
        assert_eq!(names(&stack), ["A"]);
        assert!(stack.push(screen_ref(&f.c), false).is_some(), "stack accepts commands again");
    }
}

#[test]
fn flick_velocity_carries_a_short_swipe() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b]);
    stack.handle_pan(&pan(PanPhase::Began, 20.0, 1.0, 300.0));
    stack.handle_pan(&pan(PanPhase::Changed, 20.0, 80.0, 3000.0));
    // 80 + 0.2 * 0.4 * 3000 = 320 units projected: 0.8 of the width.
    stack.handle_pan(&pan(PanPhase::Ended, 20.0, 80.0, 3000.0));
    run(&mut stack);
    assert_eq!(names(&stack), ["A"]);
}

#[test]
fn scroll_feed_is_suppressed_while_transitioning() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a]);

    assert!(stack.report_scroll_offset(22.0));
    assert_eq!(stack.chrome().collapse_fraction(), 0.5);

    stack.push(screen_ref(&f.b), true);
    assert!(!stack.report_scroll_offset(80.0));
    assert_eq!(stack.chrome().scroll_offset(), 22.0);
    assert_eq!(stack.chrome().title(), Some("A"), "chrome refreshes after mutation");

    run(&mut stack);
    assert_eq!(stack.chrome().title(), Some("B"));
    assert_eq!(stack.chrome().collapse_fraction(), 0.0);
    assert!(stack.report_scroll_offset(80.0));
    assert_eq!(stack.chrome().collapse_fraction(), 1.0);
}

#[test]
fn set_stack_with_same_top_resolves_immediately() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b, &f.c]);
    let nav = stack
        .set_stack(vec![screen_ref(&f.a), screen_ref(&f.c)], true)
        .unwrap();
    assert!(nav.is_resolved());
    assert!(!stack.is_transitioning());
    assert_eq!(names(&stack), ["A", "C"]);
    assert_eq!(f.take_log(), ["B.will_be_dismissed", "B.did_dismiss"]);
    assert_eq!(stack.chrome().back_title(), Some("A"));
}

#[test]
fn set_stack_with_new_top_animates_as_push() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b]);
    stack
        .set_stack(vec![screen_ref(&f.a), screen_ref(&f.c)], true)
        .unwrap();
    assert_eq!(stack.transition().unwrap().operation(), Operation::Push);
    run(&mut stack);
    assert_eq!(names(&stack), ["A", "C"]);
    assert_eq!(
        f.take_log(),
        [
            "B.will_be_dismissed",
            "B.will_disappear",
            "C.will_appear",
            "B.did_disappear",
            "C.did_appear",
            "B.did_dismiss",
        ]
    );
}

#[test]
fn set_stack_with_existing_top_animates_as_pop() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b, &f.c]);
    let nav = stack.set_stack(vec![screen_ref(&f.b)], true).unwrap();
    assert_eq!(stack.transition().unwrap().operation(), Operation::Pop);
    run(&mut stack);
    assert_eq!(names(&stack), ["B"]);
    let removed = nav.outcome().and_then(NavOutcome::into_removed).unwrap();
    assert_eq!(removed.len(), 2);
    let log = f.take_log();
    assert!(log.contains(&"A.did_dismiss".to_string()));
    assert!(log.contains(&"C.did_dismiss".to_string()));
    assert!(!stack.chrome().is_back_visible());
}

#[test]
fn navigation_handles_can_be_awaited() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a]);
    let push = stack.push(screen_ref(&f.b), true).unwrap();
    run(&mut stack);
    assert!(pollster::block_on(push).is_completed());

    let pop = stack.pop(false).unwrap();
    let outcome = pollster::block_on(pop);
    assert!(outcome.popped().is_some_and(|p| Rc::ptr_eq(p, &screen_ref(&f.b))));
}

#[test]
fn dropping_the_stack_cancels_pending_handles() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a]);
    let nav = stack.push(screen_ref(&f.b), true).unwrap();
    drop(stack);
    assert!(nav.is_resolved());
    assert!(!pollster::block_on(nav).is_completed());
}

#[test]
fn container_resize_applies_to_the_next_transition() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a, &f.b]);
    stack.set_container(Rect::new(0.0, 0.0, 200.0, 400.0));

    // 30 units is 0.15 of the new width, inside the default threshold.
    assert!(stack.handle_pan(&pan(PanPhase::Began, 30.0, 1.0, 300.0)));
    assert_eq!(stack.transition().unwrap().container().width(), 200.0);
    stack.handle_pan(&pan(PanPhase::Changed, 30.0, 100.0, 0.0));
    assert!((stack.transition().unwrap().progress() - 0.5).abs() < 1e-12);
}

#[test]
fn configured_threshold_and_duration_apply() {
    let f = Fixture::new();
    let config = NavigationConfig {
        pop_start_threshold: 0.5,
        duration: 0.1,
        ..NavigationConfig::default()
    };
    let mut stack = NavigationStack::with_config(screen_ref(&f.a), BOUNDS, config);
    stack.push(screen_ref(&f.b), true);
    let ticks = run(&mut stack);
    assert!((6..=7).contains(&ticks), "0.1s at 60Hz, took {ticks}");

    assert!(stack.handle_pan(&pan(PanPhase::Began, 180.0, 1.0, 300.0)));
}

/// Cross-fades everything over a fixed duration.
struct CrossFade;

impl AnimationProvider for CrossFade {
    fn push_animators(
        &self,
        _from: &dyn Screen,
        _to: &dyn Screen,
        _container: Rect,
    ) -> TransitionAnimators {
        let fade = PropertyAnimator::new(
            0.05,
            Curve::Linear,
            TransitionFrame::new(Placement::RESTING, Placement::RESTING.with_opacity(0.0)),
            TransitionFrame::new(Placement::RESTING.with_opacity(0.0), Placement::RESTING),
        );
        TransitionAnimators::new(fade.clone(), fade)
    }

    fn pop_animators(
        &self,
        from: &dyn Screen,
        to: &dyn Screen,
        container: Rect,
    ) -> TransitionAnimators {
        self.push_animators(from, to, container)
    }
}

#[test]
fn custom_provider_drives_the_animation() {
    let f = Fixture::new();
    let mut stack = f.stack(&[&f.a]);
    stack.set_animation_provider(CrossFade);
    stack.push(screen_ref(&f.b), true);
    assert_eq!(stack.transition_frame().unwrap().to.opacity, 0.0);
    let ticks = run(&mut stack);
    assert!(ticks <= 4);
    assert_eq!(names(&stack), ["A", "B"]);
}
