use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::animation::observer::{use_viewport_observer, ObserverHandle, ViewportObserver};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Easing {
    Linear,
    EaseOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
        }
    }

    /// Progress curve for script driven animations, `t` in 0..=1.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical offset in px.
    pub y: f64,
}

impl Pose {
    pub const SHOWN: Pose = Pose { opacity: 1.0, y: 0.0 };

    fn css(&self) -> String {
        format!("opacity: {}; transform: translateY({}px);", self.opacity, self.y)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Variants {
    pub hidden: Pose,
    pub visible: Pose,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Variants {
    pub const SECTION: Variants = Variants {
        hidden: Pose { opacity: 0.0, y: 50.0 },
        visible: Pose::SHOWN,
        duration_ms: 800,
        easing: Easing::EaseOut,
    };

    pub const ITEM: Variants = Variants {
        hidden: Pose { opacity: 0.0, y: 30.0 },
        visible: Pose::SHOWN,
        duration_ms: 600,
        easing: Easing::EaseOut,
    };

    /// Inline style for the current pose. Only the move to `visible` animates.
    pub fn style(&self, visible: bool, delay_ms: u32) -> String {
        if !visible {
            return self.hidden.css();
        }
        let timing = format!("{}ms {} {}ms", self.duration_ms, self.easing.css(), delay_ms);
        format!(
            "{} transition: opacity {timing}, transform {timing};",
            self.visible.css(),
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealConfig {
    /// Fraction of the region that must be on screen.
    pub threshold: f64,
    /// Stay visible after the first intersection.
    pub once: bool,
    pub stagger_ms: u32,
    /// Wait before the first child starts.
    pub delay_children_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            once: true,
            stagger_ms: 0,
            delay_children_ms: 0,
        }
    }
}

impl RevealConfig {
    pub fn child_delay(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children_ms
            .saturating_add(index.saturating_mul(self.stagger_ms))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Visibility {
    visible: bool,
    once: bool,
}

impl Visibility {
    pub fn new(once: bool) -> Self {
        Self { visible: false, once }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection signal, returns true when the state flipped.
    pub fn on_intersection(&mut self, intersecting: bool) -> bool {
        let next = if self.once {
            self.visible || intersecting
        } else {
            intersecting
        };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }
}

/// Observes `target` and reports every visibility flip to `on_change`.
pub fn watch(
    observer: &dyn ViewportObserver,
    target: &NodeRef,
    config: &RevealConfig,
    on_change: Callback<bool>,
) -> ObserverHandle {
    let state = Rc::new(RefCell::new(Visibility::new(config.once)));
    observer.observe(
        target,
        config.threshold,
        Callback::from(move |intersecting: bool| {
            let mut state = state.borrow_mut();
            if state.on_intersection(intersecting) {
                debug!("reveal region visible={}", state.is_visible());
                on_change.emit(state.is_visible());
            }
        }),
    )
}

#[derive(Clone, PartialEq)]
pub struct RevealContext {
    pub visible: bool,
    pub config: RevealConfig,
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub config: RevealConfig,
    /// Pose of the region itself. `None` leaves the wrapper static.
    #[prop_or_default]
    pub variants: Option<Variants>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Region that reveals its `RevealItem` children the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);
    let observer = use_viewport_observer();

    {
        let node = node.clone();
        let setter = visible.setter();
        let config = props.config;
        use_effect_with_deps(
            move |_| {
                let handle = watch(
                    observer.as_ref(),
                    &node,
                    &config,
                    Callback::from(move |v: bool| setter.set(v)),
                );
                move || drop(handle)
            },
            (),
        );
    }

    let context = RevealContext {
        visible: *visible,
        config: props.config,
    };
    let style = props.variants.map(|v| v.style(*visible, 0));

    html! {
        <ContextProvider<RevealContext> context={context}>
            <div ref={node} class={props.class.clone()} style={style}>
                { for props.children.iter() }
            </div>
        </ContextProvider<RevealContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealItemProps {
    pub index: usize,
    #[prop_or(Variants::ITEM)]
    pub variants: Variants,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealItem)]
pub fn reveal_item(props: &RevealItemProps) -> Html {
    let context = use_context::<RevealContext>();
    let (visible, delay) = match &context {
        Some(ctx) => (ctx.visible, ctx.config.child_delay(props.index)),
        None => (true, 0),
    };

    html! {
        <div class={props.class.clone()} style={props.variants.style(visible, delay)}>
            { for props.children.iter() }
        </div>
    }
}

/// Whether the enclosing `Reveal` has been revealed. True outside of one.
#[hook]
pub fn use_revealed() -> bool {
    use_context::<RevealContext>()
        .map(|ctx| ctx.visible)
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands intersection signals to the test instead of the browser.
    #[derive(Default)]
    struct FakeObserver {
        listeners: RefCell<Vec<(f64, Callback<bool>)>>,
    }

    impl FakeObserver {
        fn fire(&self, intersecting: bool) {
            for (_, listener) in self.listeners.borrow().iter() {
                listener.emit(intersecting);
            }
        }
    }

    impl ViewportObserver for FakeObserver {
        fn observe(&self, _target: &NodeRef, threshold: f64, on_change: Callback<bool>) -> ObserverHandle {
            self.listeners.borrow_mut().push((threshold, on_change));
            ObserverHandle::noop()
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, Callback<bool>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Callback::from(move |v: bool| sink.borrow_mut().push(v)))
    }

    #[test]
    fn test_visibility_never_reverts_once_shown() {
        let mut state = Visibility::new(true);
        assert!(!state.is_visible());

        assert!(state.on_intersection(true));
        assert!(!state.on_intersection(false));
        assert!(state.is_visible());
        assert!(!state.on_intersection(true));
        assert!(state.is_visible());
    }

    #[test]
    fn test_repeatable_visibility_follows_signal() {
        let mut state = Visibility::new(false);
        assert!(state.on_intersection(true));
        assert!(state.on_intersection(false));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_leaving_viewport_before_entering_stays_hidden() {
        let mut state = Visibility::new(true);
        assert!(!state.on_intersection(false));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_watch_emits_single_reveal_with_fake_observer() {
        let observer = FakeObserver::default();
        let (seen, on_change) = recorder();
        let config = RevealConfig {
            threshold: 0.4,
            ..Default::default()
        };

        let _handle = watch(&observer, &NodeRef::default(), &config, on_change);
        observer.fire(false);
        observer.fire(true);
        observer.fire(false);
        observer.fire(true);

        assert_eq!(*seen.borrow(), vec![true]);
        assert_eq!(observer.listeners.borrow()[0].0, 0.4);
    }

    #[test]
    fn test_watch_repeatable_reports_each_flip() {
        let observer = FakeObserver::default();
        let (seen, on_change) = recorder();
        let config = RevealConfig {
            once: false,
            ..Default::default()
        };

        let _handle = watch(&observer, &NodeRef::default(), &config, on_change);
        observer.fire(true);
        observer.fire(true);
        observer.fire(false);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_children_are_staggered_after_parent() {
        let config = RevealConfig {
            stagger_ms: 200,
            delay_children_ms: 800,
            ..Default::default()
        };
        let delays: Vec<u32> = (0..4).map(|i| config.child_delay(i)).collect();
        assert_eq!(delays, vec![800, 1000, 1200, 1400]);
    }

    #[test]
    fn test_child_delay_saturates() {
        let config = RevealConfig {
            stagger_ms: u32::MAX,
            ..Default::default()
        };
        assert_eq!(config.child_delay(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_hidden_pose_has_no_transition() {
        let style = Variants::ITEM.style(false, 300);
        assert_eq!(style, "opacity: 0; transform: translateY(30px);");
    }

    #[test]
    fn test_visible_pose_carries_duration_and_delay() {
        let style = Variants::ITEM.style(true, 300);
        assert!(style.starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(style.contains("opacity 600ms cubic-bezier(0, 0, 0.58, 1) 300ms"));
        assert!(style.contains("transform 600ms cubic-bezier(0, 0, 0.58, 1) 300ms"));
    }

    #[test]
    fn test_ease_out_is_clamped_and_monotonic() {
        assert_eq!(Easing::EaseOut.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseOut.apply(2.0), 1.0);
        assert!(Easing::EaseOut.apply(0.5) > Easing::Linear.apply(0.5));
    }
}
