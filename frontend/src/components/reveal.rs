use yew::prelude::*;

use crate::config::PageVariant;
use crate::effects::hooks::use_in_view_once;
use crate::view_state::visibility::ObserverOptions;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Milliseconds before the entrance transition starts, for staggering siblings.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Keeps its content hidden until it first scrolls into view, then fades it in for good.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let enhanced = use_context::<PageVariant>().unwrap_or_default().is_enhanced();
    let node = use_node_ref();
    let seen = use_in_view_once(node.clone(), ObserverOptions::REVEAL, enhanced);

    if !enhanced {
        return html! {
            <div ref={node} class={props.class.clone()}>
                { for props.children.iter() }
            </div>
        };
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", seen.then_some("reveal-visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
