use yew::prelude::*;

use crate::hooks::{use_on_screen, use_visibility_threshold};

#[derive(Properties, PartialEq)]
pub struct FadeInSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps a block that fades in the first time it scrolls into view.
#[function_component(FadeInSection)]
pub fn fade_in_section(props: &FadeInSectionProps) -> Html {
    let threshold = use_visibility_threshold();
    let node = use_node_ref();
    let visible = use_on_screen(node.clone(), true, threshold);

    html! {
        <div
            ref={node}
            class={classes!("fade-in-section", visible.then_some("is-visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
