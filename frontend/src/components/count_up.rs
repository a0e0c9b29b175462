use yew::prelude::*;

use crate::config::PageVariant;
use crate::effects::hooks::{use_count_up, use_in_view_once};
use crate::view_state::count_up::CountUpSpec;
use crate::view_state::visibility::ObserverOptions;

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub to: f64,
    #[prop_or(900)]
    pub duration: u32,
    #[prop_or_default]
    pub decimals: usize,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let enhanced = use_context::<PageVariant>().unwrap_or_default().is_enhanced();
    let node = use_node_ref();

    let spec = CountUpSpec::new(props.to)
        .duration(props.duration as f64)
        .decimals(props.decimals)
        .suffix(props.suffix.to_string());

    let seen = use_in_view_once(node.clone(), ObserverOptions::REVEAL, enhanced);
    let value = use_count_up(spec.clone(), seen, enhanced);

    html! {
        <span ref={node} class={props.class.clone()}>{ spec.format(value) }</span>
    }
}
