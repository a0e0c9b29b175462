use chrono::Datelike;
use log::info;
use yew::prelude::*;

use crate::components::cards::{GradientCard, PrimaryLink, SecondaryLink, SectionTitle};
use crate::components::contact::ContactGrid;
use crate::components::count_up::CountUp;
use crate::components::header::{Header, MobileCta, ProgressBar};
use crate::components::lightbox::Lightbox;
use crate::components::reveal::Reveal;
use crate::config::{self, PageVariant, StatValue, SITE};
use crate::effects::hooks::{use_active_section, use_lightbox_scope, use_scroll_progress};
use crate::view_state::gallery::{Gallery, GalleryAction};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    #[prop_or_default]
    pub variant: PageVariant,
}

/// The whole landing page. Owns the scroll ratio, the active section and the
/// lightbox state and hands them down.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let enhanced = props.variant.is_enhanced();

    let progress = use_scroll_progress(enhanced);
    let active = use_active_section(config::section_ids(SITE.nav), enhanced);
    let active = if enhanced { active } else { String::new() };
    let gallery = use_reducer(|| Gallery::new(SITE.projects.len()));
    use_lightbox_scope(gallery.state, gallery.dispatcher());
    let year = use_memo(|_| chrono::Local::now().year(), ());

    {
        let variant = props.variant;
        use_effect_with_deps(
            move |_| {
                info!("Home mounted ({:?})", variant);
                || ()
            },
            (),
        );
    }

    let on_select = {
        let gallery = gallery.clone();
        Callback::from(move |index: usize| gallery.dispatch(GalleryAction::Select(index)))
    };
    let dispatch = |action: GalleryAction| {
        let gallery = gallery.clone();
        Callback::from(move |_: ()| gallery.dispatch(action))
    };

    let lightbox = match gallery.state.index().and_then(|i| SITE.projects.get(i)) {
        Some(project) if enhanced => html! {
            <Lightbox
                project={*project}
                on_prev={dispatch(GalleryAction::Prev)}
                on_next={dispatch(GalleryAction::Next)}
                on_close={dispatch(GalleryAction::Close)}
            />
        },
        _ => html! {},
    };

    html! {
        <ContextProvider<PageVariant> context={props.variant}>
            <div class={classes!("landing", enhanced.then_some("enhanced"))}>
                <style>{ PAGE_CSS }</style>
                if enhanced {
                    <ProgressBar ratio={progress} />
                }
                <Header active={active} />
                <Hero />
                <ServicesSection />
                <ProjectsSection on_select={on_select} clickable={enhanced} />
                <ReviewsSection />
                <FaqSection />
                <section id="contact" class="page-section">
                    <div class="section-inner">
                        <Reveal>
                            <SectionTitle
                                kicker="CONTACT"
                                title="Get a fast quote"
                                desc="Tell us what you need. Add photos if you can. We’ll reply with next steps."
                            />
                        </Reveal>
                        <ContactGrid />
                        <footer class="site-footer">
                            { format!("© {} {}, {}.", *year, SITE.name, SITE.region) }
                        </footer>
                    </div>
                </section>
                <MobileCta />
                { lightbox }
            </div>
        </ContextProvider<PageVariant>>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let contact = SITE.contact;
    html! {
        <section id="hero" class="hero">
            <div class="hero-glow"></div>
            <div class="hero-grid">
                <Reveal>
                    <div>
                        <p class="pill">{"Licensed • Insured • Fixed-price quotes"}</p>
                        <h1>
                            {"Custom carpentry built to last."}
                            <span class="hero-sub">{"Clean finishes. Clear quotes."}</span>
                        </h1>
                        <p class="hero-lead">
                            {"Decks, pergolas, wardrobes, cabinetry & renovations across Sydney and surrounds. \
                              We show up, communicate, and leave the place tidy."}
                        </p>
                        <div class="hero-actions">
                            <PrimaryLink href="#contact">{"Get a free quote"}</PrimaryLink>
                            <SecondaryLink href={contact.sms_href}>{"Text us"}</SecondaryLink>
                            <SecondaryLink href={contact.phone_href}>{ contact.phone_display }</SecondaryLink>
                        </div>
                        <div class="stat-grid">
                            { for SITE.stats.iter().enumerate().map(|(i, stat)| {
                                let value = match stat.value {
                                    StatValue::Count { to, decimals, suffix } => html! {
                                        <CountUp to={to} decimals={decimals} suffix={suffix} class="tabular" />
                                    },
                                    StatValue::Text(text) => html! { <span class="tabular">{ text }</span> },
                                };
                                html! {
                                    <Reveal key={stat.label} delay={120 * (i as u32 + 1)}>
                                        <GradientCard>
                                            <div class="card-pad">
                                                <p class="stat-value">{ value }</p>
                                                <p class="card-text">{ stat.label }</p>
                                            </div>
                                        </GradientCard>
                                    </Reveal>
                                }
                            }) }
                        </div>
                    </div>
                </Reveal>

                <Reveal delay={150}>
                    <div class="hero-media">
                        <GradientCard>
                            <div class="hero-image">
                                <img src="/hero.jpeg" alt="Custom carpentry work" />
                            </div>
                        </GradientCard>
                        <div class="hero-quote">
                            <GradientCard>
                                <div class="card-pad">
                                    <p class="quote-text">{"“Quality work, no stress.”"}</p>
                                    <p class="card-text">{"Alex, Campbelltown"}</p>
                                </div>
                            </GradientCard>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    html! {
        <section id="services" class="page-section">
            <div class="section-inner">
                <Reveal>
                    <SectionTitle
                        kicker="SERVICES"
                        title="What we build"
                        desc="Pick one job or bundle a few. We’ll quote it clearly and build it clean."
                    />
                </Reveal>

                <div class="card-grid">
                    { for SITE.services.iter().enumerate().map(|(i, service)| html! {
                        <Reveal key={service.title} delay={80 + i as u32 * 70}>
                            <GradientCard>
                                <div class="card-pad-lg">
                                    <h3 class="card-title">{ service.title }</h3>
                                    <p class="card-text">{ service.desc }</p>
                                    <div class="card-rule"></div>
                                    <p class="card-foot">{"Done clean • Built solid • No fluff"}</p>
                                </div>
                            </GradientCard>
                        </Reveal>
                    }) }
                </div>

                <Reveal delay={120}>
                    <div class="cta-strip">
                        <GradientCard>
                            <div class="cta-strip-body">
                                <div>
                                    <p class="card-title">{"Not sure what you need?"}</p>
                                    <p class="card-text">
                                        {"Send photos + suburb and we’ll tell you the best fix and a rough cost range."}
                                    </p>
                                </div>
                                <PrimaryLink href="#contact">{"Send details"}</PrimaryLink>
                            </div>
                        </GradientCard>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsProps {
    on_select: Callback<usize>,
    /// Cards open the lightbox; otherwise they are plain figures.
    clickable: bool,
}

#[function_component(ProjectsSection)]
fn projects_section(props: &ProjectsProps) -> Html {
    let desc = if props.clickable {
        "Click any project to view it full-screen. Arrow keys work too."
    } else {
        "A few recent jobs from around the area."
    };

    html! {
        <section id="projects" class="page-section">
            <div class="section-inner">
                <Reveal>
                    <SectionTitle kicker="PROJECTS" title="Recent builds" desc={desc} />
                </Reveal>

                <div class="card-grid">
                    { for SITE.projects.iter().enumerate().map(|(i, project)| {
                        let body = html! {
                            <>
                                <div class="project-image">
                                    <img src={project.img} alt={project.title} loading="lazy" />
                                    <div class="project-tag">{ project.tag }</div>
                                </div>
                                <div class="card-pad">
                                    <p class="card-title">{ project.title }</p>
                                    if props.clickable {
                                        <p class="card-text">{"View "}<span class="arrow">{"→"}</span></p>
                                    }
                                </div>
                            </>
                        };
                        let card = if props.clickable {
                            let onclick = props.on_select.reform(move |_: MouseEvent| i);
                            html! { <button type="button" class="project-card" onclick={onclick}>{ body }</button> }
                        } else {
                            html! { <figure class="project-card">{ body }</figure> }
                        };
                        html! {
                            <Reveal key={project.title} delay={80 + i as u32 * 80}>
                                <GradientCard>{ card }</GradientCard>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ReviewsSection)]
fn reviews_section() -> Html {
    html! {
        <section id="reviews" class="page-section">
            <div class="section-inner">
                <Reveal>
                    <SectionTitle
                        kicker="REVIEWS"
                        title="Homeowners rate us 5 stars"
                        desc="What locals say after the job is done."
                    />
                </Reveal>

                <div class="card-grid three">
                    { for SITE.testimonials.iter().enumerate().map(|(i, review)| html! {
                        <Reveal key={review.name} delay={80 + i as u32 * 90}>
                            <GradientCard>
                                <div class="card-pad-lg">
                                    <p class="review-text">{ format!("“{}”", review.text) }</p>
                                    <div class="review-meta">
                                        <p class="card-title">{ review.name }</p>
                                        <p class="card-text">{ review.area }</p>
                                    </div>
                                </div>
                            </GradientCard>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(FaqSection)]
fn faq_section() -> Html {
    html! {
        <section id="faq" class="page-section">
            <div class="section-inner">
                <Reveal>
                    <SectionTitle kicker="FAQ" title="Common questions" />
                </Reveal>

                <div class="faq-list">
                    { for SITE.faqs.iter().enumerate().map(|(i, faq)| html! {
                        <Reveal key={faq.question} delay={60 + i as u32 * 70}>
                            <GradientCard>
                                <details class="faq-item">
                                    <summary>
                                        { faq.question }
                                        <span class="faq-toggle">{"+"}</span>
                                    </summary>
                                    <p class="card-text">{ faq.answer }</p>
                                </details>
                            </GradientCard>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

const PAGE_CSS: &str = r#"
    .landing {
        min-height: 100vh;
        color: #1c1917;
        background: #faf7f2;
        padding-bottom: 6rem;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .progress-track { position: fixed; top: 0; left: 0; z-index: 70; width: 100%; height: 3px; }
    .progress-fill { height: 100%; background: linear-gradient(to right, #fbbf24, #0c0a09, #fde68a); }

    .site-header {
        position: sticky; top: 0; z-index: 50;
        border-bottom: 1px solid rgba(231, 229, 228, 0.6);
        background: rgba(255, 255, 255, 0.55);
        backdrop-filter: blur(8px);
    }
    .header-content, .hero-grid, .section-inner { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
    .header-content { display: flex; align-items: center; justify-content: space-between; padding-top: 0.75rem; padding-bottom: 0.75rem; }
    .brand { display: flex; align-items: center; gap: 0.5rem; text-decoration: none; color: inherit; }
    .brand-mark {
        position: relative; display: grid; place-items: center;
        width: 2.25rem; height: 2.25rem; border-radius: 0.75rem;
        background: linear-gradient(#0c0a09, #44403c); color: #fff; font-weight: 700;
    }
    .brand-dot { position: absolute; right: -0.25rem; bottom: -0.25rem; width: 0.75rem; height: 0.75rem; border-radius: 50%; background: #fbbf24; }
    .brand-name { font-size: 0.875rem; font-weight: 600; margin: 0; }
    .brand-region { font-size: 0.75rem; color: #57534e; margin: 0; }
    .pill-nav { display: none; gap: 0.5rem; font-size: 0.875rem; }
    .pill-link { border-radius: 9999px; padding: 0.375rem 0.75rem; font-weight: 600; color: #44403c; text-decoration: none; transition: all 0.2s; }
    .pill-link.active { background: #0c0a09; color: #fff; }
    .header-actions { display: flex; align-items: center; gap: 0.5rem; }
    .call-pill { display: none; border-radius: 9999px; border: 1px solid #d6d3d1; padding: 0.5rem 0.75rem; font-weight: 600; color: inherit; text-decoration: none; }

    .btn-primary, .btn-secondary {
        display: inline-flex; align-items: center; justify-content: center;
        border-radius: 1rem; padding: 0.75rem 1.25rem; font-size: 0.875rem; font-weight: 600;
        text-decoration: none; transition: transform 0.15s, filter 0.15s; border: none; cursor: pointer;
    }
    .btn-primary { background: linear-gradient(#0c0a09, #292524); color: #fff; }
    .btn-primary:hover { filter: brightness(1.1); }
    .btn-primary.wide { width: 100%; }
    .btn-secondary { border: 1px solid #d6d3d1; background: rgba(255, 255, 255, 0.6); color: #1c1917; }

    .pill {
        display: inline-flex; align-items: center; gap: 0.5rem;
        border-radius: 9999px; border: 1px solid rgba(231, 229, 228, 0.7);
        background: rgba(255, 255, 255, 0.6); padding: 0.25rem 0.75rem;
        font-size: 0.75rem; font-weight: 600; color: #44403c;
    }
    .pill-dot { width: 0.25rem; height: 0.25rem; border-radius: 50%; background: #f59e0b; }

    .hero { position: relative; overflow: hidden; }
    .hero-glow { position: absolute; top: -6rem; left: 50%; width: 42rem; height: 18rem; transform: translateX(-50%); border-radius: 50%; background: rgba(252, 211, 77, 0.15); filter: blur(64px); pointer-events: none; }
    .hero-grid { display: grid; gap: 2.5rem; padding-top: 3.5rem; padding-bottom: 3.5rem; }
    .hero h1 { margin-top: 1rem; font-size: 2.25rem; font-weight: 700; letter-spacing: -0.02em; }
    .hero-sub { display: block; color: #57534e; }
    .hero-lead { color: #57534e; }
    .hero-actions { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 1.5rem; }
    .stat-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; margin-top: 1.5rem; font-size: 0.875rem; }
    .stat-value { font-size: 1.125rem; font-weight: 700; margin: 0; }
    .tabular { font-variant-numeric: tabular-nums; }
    .hero-media { position: relative; }
    .hero-image { aspect-ratio: 4 / 3; overflow: hidden; border-radius: 1.5rem; }
    .hero-image img, .project-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
    .hero-image img:hover { transform: scale(1.03); }
    .hero-quote { position: absolute; bottom: -1.5rem; left: -1.5rem; display: none; }
    .quote-text { font-size: 0.875rem; font-weight: 600; margin: 0; }

    .gradient-card { position: relative; border-radius: 1.5rem; padding: 1px; }
    .gradient-card-glow { position: absolute; inset: 0; border-radius: 1.5rem; background: linear-gradient(to right, rgba(251, 191, 36, 0.25), rgba(168, 162, 158, 0.15), rgba(253, 230, 138, 0.2)); filter: blur(24px); opacity: 0.4; }
    .gradient-card-body { position: relative; border-radius: 1.5rem; border: 1px solid rgba(231, 229, 228, 0.7); background: rgba(255, 255, 255, 0.65); backdrop-filter: blur(8px); }
    .card-pad { padding: 1rem 1.25rem; }
    .card-pad-lg { padding: 1.5rem; }
    .card-title { font-size: 1rem; font-weight: 600; margin: 0; }
    .card-text { font-size: 0.875rem; color: #57534e; margin: 0.5rem 0 0; }
    .card-rule { margin-top: 1.25rem; height: 1px; background: linear-gradient(to right, rgba(252, 211, 77, 0.4), rgba(231, 229, 228, 0.6), transparent); }
    .card-foot { margin-top: 0.75rem; font-size: 0.75rem; font-weight: 600; color: #44403c; }

    .page-section { border-top: 1px solid rgba(231, 229, 228, 0.6); }
    .section-inner { padding-top: 3.5rem; padding-bottom: 3.5rem; }
    .section-title { max-width: 42rem; margin: 0 auto; text-align: center; }
    .section-title h2 { margin-top: 0.75rem; font-size: 1.875rem; font-weight: 700; }
    .section-desc { margin-top: 0.75rem; color: #57534e; }
    .card-grid { display: grid; gap: 1rem; margin-top: 2.5rem; }
    .cta-strip { margin-top: 2.5rem; }
    .cta-strip-body { display: flex; flex-direction: column; gap: 1rem; padding: 1.5rem; }

    .project-card { display: block; width: 100%; margin: 0; padding: 0; border: none; background: none; text-align: left; overflow: hidden; border-radius: 1.5rem; font: inherit; color: inherit; }
    button.project-card { cursor: pointer; }
    button.project-card:hover img { transform: scale(1.06); }
    .project-image { position: relative; aspect-ratio: 4 / 3; overflow: hidden; }
    .project-tag { position: absolute; left: 1rem; top: 1rem; border-radius: 9999px; border: 1px solid rgba(255, 255, 255, 0.5); background: rgba(255, 255, 255, 0.25); padding: 0.25rem 0.75rem; font-size: 0.75rem; font-weight: 600; color: #fff; }
    .arrow { display: inline-block; transition: transform 0.2s; }
    button.project-card:hover .arrow { transform: translateX(0.25rem); }

    .review-text { font-size: 0.875rem; color: #44403c; margin: 0; }
    .review-meta { display: flex; align-items: center; justify-content: space-between; margin-top: 1rem; }

    .faq-list { max-width: 48rem; margin: 2.5rem auto 0; display: grid; gap: 0.75rem; }
    .faq-item { padding: 1.25rem; border-radius: 1.5rem; }
    .faq-item summary { cursor: pointer; list-style: none; font-size: 0.875rem; font-weight: 600; }
    .faq-toggle { float: right; color: #78716c; transition: transform 0.2s; }
    .faq-item[open] .faq-toggle { transform: rotate(45deg); }

    .contact-grid { display: grid; gap: 1.5rem; margin-top: 2.5rem; }
    .contact-links { display: grid; gap: 0.75rem; margin-top: 1.5rem; font-size: 0.875rem; }
    .contact-link { display: block; border-radius: 1rem; border: 1px solid rgba(231, 229, 228, 0.7); background: rgba(255, 255, 255, 0.55); padding: 1rem; color: inherit; text-decoration: none; }
    .contact-label { font-size: 0.75rem; color: #57534e; margin: 0; }
    .contact-value { font-weight: 600; margin: 0; }
    .map-frame { margin-top: 1.5rem; overflow: hidden; border-radius: 1rem; border: 1px solid rgba(231, 229, 228, 0.7); }
    .map-frame iframe { display: block; width: 100%; height: 14rem; border: 0; }
    .map-caption { border-top: 1px solid rgba(231, 229, 228, 0.6); padding: 0.75rem 1rem; font-size: 0.75rem; color: #57534e; }
    .quote-form { display: grid; gap: 1rem; margin-top: 1.5rem; }
    .form-row { display: grid; gap: 1rem; }
    .field-label { display: block; font-size: 0.75rem; font-weight: 600; color: #44403c; }
    .quote-form input, .quote-form select, .quote-form textarea {
        box-sizing: border-box; width: 100%; margin-top: 0.5rem;
        border-radius: 1rem; border: 1px solid rgba(231, 229, 228, 0.7);
        background: rgba(255, 255, 255, 0.55); padding: 0.75rem 1rem; font: inherit; font-size: 0.875rem;
    }
    .form-note { font-size: 0.75rem; color: #57534e; }
    .site-footer { margin-top: 2.5rem; border-top: 1px solid rgba(231, 229, 228, 0.6); padding-top: 2rem; text-align: center; font-size: 0.75rem; color: #57534e; }

    .mobile-cta { position: fixed; bottom: 1rem; left: 50%; z-index: 60; width: min(92%, 28rem); transform: translateX(-50%); }
    .mobile-cta-inner { display: flex; gap: 0.5rem; border-radius: 9999px; border: 1px solid rgba(231, 229, 228, 0.7); background: rgba(255, 255, 255, 0.7); padding: 0.5rem; backdrop-filter: blur(8px); }
    .mobile-cta-link { flex: 1; border-radius: 9999px; border: 1px solid rgba(231, 229, 228, 0.7); padding: 0.5rem 1rem; text-align: center; font-size: 0.875rem; font-weight: 600; color: #1c1917; text-decoration: none; }
    .mobile-cta-link.primary { flex: 1.2; background: #0c0a09; color: #fff; }

    .enhanced .reveal { opacity: 0; transform: translateY(14px); transition: opacity 0.7s ease, transform 0.7s ease; }
    .enhanced .reveal.reveal-visible { opacity: 1; transform: none; }

    @media (min-width: 640px) {
        .landing { padding-bottom: 0; }
        .pill-nav, .call-pill { display: flex; }
        .mobile-cta { display: none; }
        .hero-quote { display: block; }
        .hero-grid { padding-top: 5rem; padding-bottom: 5rem; }
        .hero h1 { font-size: 3rem; }
        .section-inner { padding-top: 5rem; padding-bottom: 5rem; }
        .card-grid, .form-row { grid-template-columns: repeat(2, 1fr); }
        .cta-strip-body { flex-direction: row; align-items: center; justify-content: space-between; padding: 2rem; }
    }
    @media (min-width: 1024px) {
        .hero-grid { grid-template-columns: repeat(2, 1fr); align-items: center; }
        .card-grid, .card-grid.three, .contact-grid { grid-template-columns: repeat(3, 1fr); }
        .contact-grid { grid-template-columns: repeat(2, 1fr); }
    }
"#;
