use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(GradientCard)]
pub fn gradient_card(props: &CardProps) -> Html {
    html! {
        <div class="gradient-card">
            <div class="gradient-card-glow"></div>
            <div class="gradient-card-body">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub kicker: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub desc: Option<AttrValue>,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <p class="pill">
                { props.kicker.clone() }
                <span class="pill-dot"></span>
                {"Premium finish"}
            </p>
            <h2>{ props.title.clone() }</h2>
            {
                if let Some(desc) = &props.desc {
                    html! { <p class="section-desc">{ desc.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PrimaryLink)]
pub fn primary_link(props: &LinkProps) -> Html {
    html! {
        <a href={props.href.clone()} class="btn-primary">
            { for props.children.iter() }
        </a>
    }
}

#[function_component(SecondaryLink)]
pub fn secondary_link(props: &LinkProps) -> Html {
    html! {
        <a href={props.href.clone()} class="btn-secondary">
            { for props.children.iter() }
        </a>
    }
}
