use yew::prelude::*;
use yew_router::prelude::*;

use super::contact_form::ContactFormPanel;
use super::image_parallax::ImageParallax;
use super::shell::{Align, HeroBackground, SectionHeader};
use super::Route;
use crate::site::{
    service_by_slug, service_path, Service, UnitStatus, ADDRESS_LINES, APPROACH_STEPS, AUDIENCES, COMPANY_MOTTO,
    CORE_VALUES, MAP_EMBED_SRC, OPERATIONAL_UNITS, PHONE_DISPLAY, PHONE_HREF, PRINCIPLES,
    PROJECTS_EMAIL, SERVICES, TIMELINE, WHATSAPP_HREF,
};

const MEETING_IMAGE_SRC: &str = "/media/meeting.jpg";

fn service_route(service: &Service) -> Route {
    Route::recognize(&service_path(service)).unwrap_or(Route::NotFound)
}

fn bullet_list(items: &[&'static str]) -> Html {
    html! {
        <ul class="bullet-list">
            { for items.iter().map(|item| html! { <li>{*item}</li> }) }
        </ul>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <HeroBackground>
                <p class="status-pill mono">
                    <span class="status-dot" aria-hidden="true"></span>
                    {"Systems Operational"}
                </p>
                <h1 class="hero-title">{"Engineered "}<span class="accent">{"Perfection"}</span></h1>
                <p class="hero-lede">
                    {"Advanced reverse engineering & rapid prototyping for the next generation of industrial manufacturing."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Services} classes="button button-primary">{"Our Services"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="button button-outline">{"Discuss your project →"}</Link<Route>>
                </div>
            </HeroBackground>

            <section class="section">
                <SectionHeader
                    number="01"
                    title="Engineering Driven by Time, Precision, and Perfection"
                    subtitle="PROTOREV 3D Engineering Services is an early-stage engineering startup built with a strong focus on accuracy, manufacturability, and responsibility."
                />
                <div class="split">
                    <div class="panel">
                        <h3>{"Our focus"}</h3>
                        <p class="muted">{"Our work is guided by three core principles:"}</p>
                        { for PRINCIPLES.iter().map(|principle| html! {
                            <div class="principle">
                                <h4>{principle.title}</h4>
                                <p>{principle.description}</p>
                            </div>
                        }) }
                    </div>
                    <blockquote class="mandate">
                        <p>{"\"We are not driven by background or legacy. We are driven by how well our designs perform in real manufacturing environments.\""}</p>
                        <span class="mono">{"Engineering Mandate"}</span>
                    </blockquote>
                </div>
            </section>

            <section class="section">
                <SectionHeader
                    number="02"
                    title="What Engineering Problems We Solve"
                    subtitle="Specialized technical solutions for startups and manufacturers, from concept to production-ready documentation."
                />
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <Link<Route> to={service_route(service)} classes="card card-link">
                            <span class="mono muted">{service.number}</span>
                            <h3>{service.title}</h3>
                        </Link<Route>>
                    }) }
                </div>
                <Link<Route> to={Route::Services} classes="button button-outline">{"View Detailed Services"}</Link<Route>>
            </section>

            <section class="section">
                <SectionHeader
                    number="03"
                    title="Our Engineering Approach"
                    subtitle="Every step reflects Time, Precision, and Perfection."
                    align={Align::Center}
                />
                <ol class="approach-steps">
                    { for APPROACH_STEPS.iter().enumerate().map(|(index, step)| html! {
                        <li>
                            <span class="step-index mono">{(index + 1).to_string()}</span>
                            <p>{*step}</p>
                        </li>
                    }) }
                </ol>
            </section>

            <section class="section">
                <SectionHeader
                    number="04"
                    title="Who We Work With"
                    subtitle="Providing serious engineering support across the manufacturing ecosystem."
                />
                <div class="split">
                    <figure class="parallax-figure">
                        <ImageParallax src={MEETING_IMAGE_SRC} alt="Board meeting with CAD sketches" />
                        <figcaption>
                            <h4>{"Collaborative Engineering"}</h4>
                            <p class="muted">{"Boardroom design reviews meet CAD insights"}</p>
                        </figcaption>
                    </figure>
                    <ul class="audience-list">
                        { for AUDIENCES.iter().map(|audience| html! { <li>{*audience}</li> }) }
                    </ul>
                </div>
            </section>

            <section class="section">
                <SectionHeader
                    number="05"
                    title="A Startup with Serious Intent"
                    subtitle="PROTOREV 3D is in its early stage. This allows us to work closely with clients, respond quickly, and take full ownership of engineering outcomes."
                />
                <p class="muted">{"We grow through real engineering challenges, not marketing claims."}</p>
                <div class="cta">
                    <h3>{"Let's Build Something Right"}</h3>
                    <p>{"If your project values time, precision, and perfection, we're ready to support you."}</p>
                    <Link<Route> to={Route::Contact} classes="button button-outline">{"Discuss your project →"}</Link<Route>>
                </div>
            </section>
        </>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="section page">
            <SectionHeader
                number="02"
                title="Engineering Solutions for Real-World Challenges"
                subtitle="Deploying advanced manufacturing protocols to solve complex hardware challenges."
            />
            <p class="lede">
                {"Every service we offer begins with a real manufacturing or design problem. Our focus is on clarity, accuracy, and manufacturability, so customers clearly understand what they receive and why it matters."}
            </p>
            <p class="mono muted">{"Jikan • Seimitsu • Paripoornathe (Time • Precision • Perfection)"}</p>
            <div class="service-list">
                { for SERVICES.iter().map(|service| html! {
                    <article class="card service-card">
                        <span class="mono muted">{service.number}</span>
                        <h3>{service.title}</h3>
                        <p class="service-problem"><strong>{"Problem: "}</strong>{service.summary}</p>
                        <p>{service.intro}</p>
                        <p class="service-benefit"><strong>{"Benefit: "}</strong>{service.benefit}</p>
                        <Link<Route> to={service_route(service)} classes="button button-outline">
                            {"View Details →"}
                        </Link<Route>>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: AttrValue,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let Some(service) = service_by_slug(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <article class="section page service-detail">
            <Link<Route> to={Route::Services} classes="back-link mono">{"← All Services"}</Link<Route>>
            <SectionHeader number={service.number} title={service.title} subtitle={AttrValue::from(service.subtitle)} />
            <p class="lede">{service.intro}</p>

            <div class="split">
                <div class="panel">
                    <h3>{service.challenges_title}</h3>
                    {bullet_list(&service.challenges)}
                </div>
                <div class="panel">
                    <h3>{service.approach_title}</h3>
                    {bullet_list(&service.approach)}
                </div>
            </div>

            <h3 class="subheading">{"What You Receive"}</h3>
            <div class="card-grid">
                { for service.deliverables.iter().map(|deliverable| html! {
                    <div class="card">
                        <h4>{deliverable.title}</h4>
                        <p>{deliverable.description}</p>
                    </div>
                }) }
            </div>

            <h3 class="subheading">{"Process"}</h3>
            <ol class="process-steps">
                { for service.process.iter().map(|step| html! {
                    <li>
                        <span class="step-index mono">{step.step}</span>
                        <div>
                            <h4>{step.title}</h4>
                            <p>{step.description}</p>
                        </div>
                    </li>
                }) }
            </ol>

            <div class="panel">
                <h3>{"Ideal For"}</h3>
                {bullet_list(&service.ideal_for)}
            </div>

            <div class="cta">
                <h3>{service.cta_title}</h3>
                <Link<Route> to={Route::Contact} classes="button button-primary">{service.cta_label}</Link<Route>>
            </div>
        </article>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="section page">
            <SectionHeader
                number="03"
                title="About The Protocol"
                subtitle="We are engineers, not artists. We believe in function over form, data over opinion, and precision over approximation."
            />
            <div class="split">
                <div class="story">
                    <p>
                        <strong>{"PROTOREV"}</strong>
                        {" was founded on a simple observation: the gap between digital design and physical reality is where projects fail."}
                    </p>
                    <p>
                        {"We bridge that gap. Located in the industrial heart of Bangalore, our facility combines traditional machining wisdom with bleeding-edge additive manufacturing technologies."}
                    </p>
                    <p>
                        {"Our team consists of mechanical engineers, metallurgists, and CAD specialists who understand that a prototype isn't just a shape. It is a functional promise of the final product."}
                    </p>
                </div>
                <div class="facility-card mono">
                    <div>{"FACILITY_ID: PR_BLR_01"}</div>
                    <div>{"AREA: 12,000 SQ.FT"}</div>
                    <div>{"STATUS: OPERATIONAL"}</div>
                </div>
            </div>

            <h3 class="subheading">{"Vision · Mission · Core Values"}</h3>
            <div class="split">
                <div class="panel">
                    <h4>{"Vision"}</h4>
                    <p>{"To build a globally respected engineering company known for discipline, precision, and long-term reliability."}</p>
                </div>
                <div class="panel">
                    <h4>{"Mission"}</h4>
                    <p>{"To design and deliver engineering solutions through standardized processes, continuous improvement, and uncompromising quality, while nurturing a culture of responsibility, respect, and technical excellence."}</p>
                </div>
            </div>
            <div class="card-grid">
                { for CORE_VALUES.iter().enumerate().map(|(index, value)| html! {
                    <div class="card">
                        <h5 class="mono">{format!("CV-{:02} · {}", index + 1, value.title)}</h5>
                        <p>{value.description}</p>
                    </div>
                }) }
            </div>

            <h3 class="subheading">{"Operational Units"}</h3>
            <div class="card-grid">
                { for OPERATIONAL_UNITS.iter().map(|unit| {
                    let (status_label, status_class) = match unit.status {
                        UnitStatus::Operational => ("Operational", "status-live"),
                        UnitStatus::Upcoming => ("Coming Up", "status-planned"),
                    };
                    html! {
                        <div class="card">
                            <h4>{unit.title}</h4>
                            <p class="mono muted">{unit.role}</p>
                            <p>{unit.description}</p>
                            <span class={classes!("status-tag", status_class)}>{status_label}</span>
                        </div>
                    }
                }) }
            </div>

            <h3 class="subheading">{"Timeline"}</h3>
            <ol class="timeline">
                { for TIMELINE.iter().map(|milestone| html! {
                    <li class={classes!(milestone.completed.then_some("is-complete"))}>
                        <span class="mono">{milestone.year}</span>
                        <p>{milestone.event}</p>
                        <span class="status-tag">{if milestone.completed { "Completed" } else { "Planned" }}</span>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section class="section page">
            <SectionHeader
                number="04"
                title="Contact"
                subtitle="Serious engineering begins with clear communication."
            />
            <div class="split">
                <div>
                    <h3>{"Start a Technical Conversation"}</h3>
                    <p class="muted">
                        {"Whether you're exploring feasibility, reverse engineering an existing component, or preparing for manufacturing, provide as much context as you can. Our engineers review every inquiry."}
                    </p>
                    <dl class="contact-details">
                        <dt>{"Location"}</dt>
                        <dd>{ADDRESS_LINES.join(", ")}</dd>
                        <dt>{"Phone"}</dt>
                        <dd><a href={PHONE_HREF}>{PHONE_DISPLAY}</a></dd>
                        <dt>{"WhatsApp"}</dt>
                        <dd>
                            <a href={WHATSAPP_HREF} target="_blank" rel="noopener noreferrer">
                                {"Chat on WhatsApp (Fastest)"}
                            </a>
                        </dd>
                        <dt>{"Email"}</dt>
                        <dd><a href={format!("mailto:{PROJECTS_EMAIL}")}>{PROJECTS_EMAIL}</a></dd>
                    </dl>
                    <figure class="map-frame">
                        <iframe
                            title="Office Location Map"
                            src={MAP_EMBED_SRC}
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                        ></iframe>
                        <figcaption class="mono muted">{"Registered Office Location"}</figcaption>
                    </figure>
                </div>
                <div class="panel">
                    <h3>{"Project Inquiry"}</h3>
                    <p class="muted">{"Share your requirements. Attachments and NDAs can be handled after first contact."}</p>
                    <ContactFormPanel />
                    <p class="mono muted">{"Typical response time: within 24 hours · NDAs available on request"}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(ComingSoon)]
pub fn coming_soon() -> Html {
    html! {
        <HeroBackground>
            <p class="status-pill mono">
                <span class="status-dot" aria-hidden="true"></span>
                {"Launch Sequence Initiated"}
            </p>
            <h1 class="hero-title">{"PROTOREV Engineering"}</h1>
            <h2 class="hero-subtitle">{"Official Launch Coming Soon"}</h2>
            <p class="hero-lede">
                {"We are currently preparing our platform for deployment. Our engineering services will be publicly available shortly."}
            </p>
            <p class="mono muted">{COMPANY_MOTTO}</p>
        </HeroBackground>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="section page not-found">
            <div class="panel">
                <h1 class="mono">{"ERROR 404"}</h1>
                <p class="mono muted">{"Module Not Found"}<br />{"System Path Invalid"}</p>
                <Link<Route> to={Route::Home} classes="button button-outline">{"Reboot System"}</Link<Route>>
            </div>
        </section>
    }
}
