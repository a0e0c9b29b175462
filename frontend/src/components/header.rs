use yew::prelude::*;

use crate::components::cards::PrimaryLink;
use crate::config::{NavItem, SITE};
use crate::view_state::scroll::bar_percent;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub ratio: f64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="progress-track">
            <div class="progress-fill" style={format!("width: {}%;", bar_percent(props.ratio))}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillNavProps {
    pub items: &'static [NavItem],
    /// Section id (without `#`) to highlight, empty for none.
    #[prop_or_default]
    pub active: AttrValue,
}

#[function_component(PillNav)]
pub fn pill_nav(props: &PillNavProps) -> Html {
    html! {
        <nav class="pill-nav">
            { for props.items.iter().map(|item| {
                let is_active = !props.active.is_empty()
                    && item.href.strip_prefix('#') == Some(&*props.active);
                html! {
                    <a
                        key={item.href}
                        href={item.href}
                        class={classes!("pill-link", is_active.then_some("active"))}
                        aria-current={is_active.then_some("true")}
                    >
                        { item.label }
                    </a>
                }
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub active: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let contact = SITE.contact;
    html! {
        <header class="site-header">
            <div class="header-content">
                <a href="#hero" class="brand">
                    <div class="brand-mark">
                        { SITE.initials }
                        <span class="brand-dot"></span>
                    </div>
                    <div class="brand-text">
                        <p class="brand-name">{ SITE.name }</p>
                        <p class="brand-region">{ SITE.region }</p>
                    </div>
                </a>

                <PillNav items={SITE.nav} active={props.active.clone()} />

                <div class="header-actions">
                    <a href={contact.phone_href} class="call-pill">{"Call"}</a>
                    <PrimaryLink href="#contact">{"Get a free quote"}</PrimaryLink>
                </div>
            </div>
        </header>
    }
}

/// Sticky call/text/quote bar shown on small screens.
#[function_component(MobileCta)]
pub fn mobile_cta() -> Html {
    let contact = SITE.contact;
    html! {
        <div class="mobile-cta">
            <div class="mobile-cta-inner">
                <a href={contact.phone_href} class="mobile-cta-link">{"Call"}</a>
                <a href={contact.sms_href} class="mobile-cta-link">{"Text"}</a>
                <a href="#contact" class="mobile-cta-link primary">{"Quote"}</a>
            </div>
        </div>
    }
}
