use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::engine::counter::{CounterAnimation, DEFAULT_DURATION_MS};
use crate::hooks::{
    request_animation_frame, use_number_format, use_on_screen, use_visibility_threshold,
    AnimationFrame,
};

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: f64,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration_ms: f64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts from 0 up to `end` once the number scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let threshold = use_visibility_threshold();
    let on_screen = use_on_screen(node.clone(), true, threshold);
    let format = use_number_format();

    let animation = use_mut_ref(|| CounterAnimation::new(props.end, props.duration_ms));
    let frame: Rc<RefCell<Option<AnimationFrame>>> = use_mut_ref(|| None);
    let displayed = use_state_eq(|| 0.0_f64);

    {
        let animation = animation.clone();
        let frame = frame.clone();
        let displayed = displayed.clone();
        use_effect_with_deps(
            move |(end, duration_ms, on_screen)| {
                animation.borrow_mut().retarget(*end, *duration_ms);
                if *on_screen {
                    displayed.set(0.0);
                    schedule_frame(animation, frame.clone(), displayed);
                }
                move || {
                    frame.borrow_mut().take();
                }
            },
            (props.end, props.duration_ms, on_screen),
        );
    }

    let fraction_digits = if animation.borrow().is_float_format() { 1 } else { 0 };

    html! {
        <span ref={node} class={props.class.clone()}>
            { &props.prefix }
            { format.format(*displayed, fraction_digits) }
            { &props.suffix }
        </span>
    }
}

fn schedule_frame(
    animation: Rc<RefCell<CounterAnimation>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    displayed: UseStateHandle<f64>,
) {
    let slot = frame.clone();
    let next = request_animation_frame(move |now| {
        let step = animation.borrow_mut().advance(now);
        displayed.set(step.value());
        if !step.is_finished() {
            schedule_frame(animation, frame, displayed);
        }
    });
    *slot.borrow_mut() = next;
}
