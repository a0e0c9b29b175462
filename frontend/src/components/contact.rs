use yew::prelude::*;

use crate::components::cards::GradientCard;
use crate::components::reveal::Reveal;
use crate::config::{self, SITE, QUOTE_SUBJECT};

#[function_component(ContactDetails)]
pub fn contact_details() -> Html {
    let contact = SITE.contact;
    html! {
        <GradientCard>
            <div class="card-pad-lg">
                <h3 class="card-title">{"Contact details"}</h3>
                <p class="card-text">{"Prefer quick? Call or text. Prefer organised? Use the form."}</p>

                <div class="contact-links">
                    <a class="contact-link" href={contact.phone_href}>
                        <p class="contact-label">{"Phone"}</p>
                        <p class="contact-value">{ contact.phone_display }</p>
                    </a>
                    <a class="contact-link" href={contact.sms_href}>
                        <p class="contact-label">{"Text"}</p>
                        <p class="contact-value">{"Send a message"}</p>
                    </a>
                    <a class="contact-link" href={config::mailto_href(contact.email, Some(QUOTE_SUBJECT))}>
                        <p class="contact-label">{"Email"}</p>
                        <p class="contact-value">{ contact.email }</p>
                    </a>
                </div>

                <div class="map-frame">
                    <iframe
                        title="Service area map"
                        src={config::map_embed_url(contact.map_pin)}
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        allowfullscreen=true
                    />
                    <div class="map-caption">
                        {"Camden NSW and surrounding suburbs"}
                    </div>
                </div>
            </div>
        </GradientCard>
    }
}

/// Quote request handed straight to the visitor's mail client. Required
/// fields are checked by the browser before the handoff.
#[function_component(QuoteForm)]
pub fn quote_form() -> Html {
    let default_service = SITE.quote_services.first().copied().unwrap_or_default();
    html! {
        <GradientCard>
            <div class="card-pad-lg">
                <h3 class="card-title">{"Quote request"}</h3>

                <form
                    class="quote-form"
                    action={config::mailto_href(SITE.contact.email, None)}
                    method="post"
                    enctype="text/plain"
                >
                    <div class="form-row">
                        <label>
                            <span class="field-label">{"Name"}</span>
                            <input name="name" required=true placeholder="Your name" />
                        </label>
                        <label>
                            <span class="field-label">{"Phone"}</span>
                            <input name="phone" type="tel" required=true placeholder="04xx xxx xxx" />
                        </label>
                    </div>

                    <div class="form-row">
                        <label>
                            <span class="field-label">{"Suburb"}</span>
                            <input name="suburb" placeholder="e.g. Camden" />
                        </label>
                        <label>
                            <span class="field-label">{"Service"}</span>
                            <select name="service">
                                { for SITE.quote_services.iter().map(|service| html! {
                                    <option value={*service} selected={*service == default_service}>{ *service }</option>
                                }) }
                            </select>
                        </label>
                    </div>

                    <label>
                        <span class="field-label">{"Details"}</span>
                        <textarea
                            name="details"
                            rows="5"
                            placeholder="What do you want built? Approx size? Any deadlines?"
                        />
                    </label>

                    <button type="submit" class="btn-primary wide">{"Send quote request"}</button>

                    <p class="form-note">{"Opens your email app with the details filled in."}</p>
                </form>
            </div>
        </GradientCard>
    }
}

#[function_component(ContactGrid)]
pub fn contact_grid() -> Html {
    html! {
        <div class="contact-grid">
            <Reveal delay={80}>
                <ContactDetails />
            </Reveal>
            <Reveal delay={140}>
                <QuoteForm />
            </Reveal>
        </div>
    }
}
