//! The marketing page: hero with the interactive demo, problem/solution
//! comparison, mechanism explainer, beta offer with the signup form, FAQ and
//! footer. Everything here is presentational; the engineered pieces live in
//! `demo`, `attribution` and `guest_leads`.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::section_tracker::SectionTracker;
use crate::components::signup_form::BetaSignupForm;
use crate::components::smooth_scroll::SmoothScrollAnchors;
use crate::components::try_now_modal::TryNowModal;
use crate::demo::interactive::InteractiveDemo;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            modal_open.set(true);
        })
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>
            <SmoothScrollAnchors />
            <SectionTracker />
            <TryNowModal is_open={*modal_open} on_close={close_modal} />

            // Hero
            <section data-track-section="hero" class="hero">
                <div class="section-inner center">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        { "Beta Access Open" }
                    </div>
                    <p class="hero-qualifier">
                        { "For directory founders scaling location pages across hundreds of cities." }
                    </p>
                    <h1 class="hero-headline">
                        { "500 location pages. Zero rankings." }<br />
                        <span class="hero-accent">{ "We fix that in under an hour." }</span>
                    </h1>
                    <p class="hero-subhead">
                        { "You built the directory. You uploaded the data. But Google sees 500 pages \
                           of identical copy — and it's ranking none of them." }
                    </p>
                    <div class="hero-ctas">
                        <a href="#see-the-difference" class="cta secondary">{ "See the Difference" }</a>
                        <a href="#beta" class="cta primary" onclick={open_modal}>{ "Get Free Beta Access" }</a>
                    </div>
                    <p class="hero-trust">
                        { "Free during beta" }
                        <span>{ "•" }</span>
                        { "Sample page for your niche within 24 hours" }
                    </p>

                    <InteractiveDemo />
                </div>
            </section>

            // Problem / comparison
            <section data-track-section="problem" class="problem">
                <div class="section-inner">
                    <h2 class="section-headline">
                        { "Google demands unique content." }<br />
                        { "Your tools keep producing duplicates." }
                    </h2>
                    <p class="section-subhead">
                        { "Your directory is built. Your data is ready. But every location page needs \
                           genuinely different content — and right now, the options are painful." }
                    </p>
                    <div class="compare-grid">
                        <div class="compare-card pain">
                            <h3>{ "The status quo" }</h3>
                            <ul>
                                <li>{ "Three weeks of copy-pasting city names into ChatGPT. Page 1 and page 47 read identically." }</li>
                                <li>{ "Every page opens with \"Welcome to {City}, where you'll find...\" — and Google notices." }</li>
                                <li>{ "$15,000 to freelancers who deliver the same filler with different city names swapped in." }</li>
                                <li>{ "You check Search Console. Most of your pages aren't even indexed. Duplicate content penalty." }</li>
                            </ul>
                        </div>
                        <div class="compare-card solution">
                            <h3>{ "With Seoscribed" }</h3>
                            <ul>
                                <li>{ "Upload your location list once; every page is drafted from real local context." }</li>
                                <li>{ "Neighborhoods, landmarks and demographics researched per city — not guessed." }</li>
                                <li>{ "A uniqueness score on every page before you publish anything." }</li>
                                <li>{ "500 pages generated in under an hour, pushed straight to your CMS." }</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </section>

            // Mechanism
            <section data-track-section="mechanism" class="mechanism">
                <div class="section-inner center">
                    <p class="section-kicker">{ "The Local Context Engine" }</p>
                    <h2 class="section-headline">{ "Why it works when ChatGPT doesn't." }</h2>
                    <p class="section-subhead">
                        { "Generic generators template; Seoscribed researches. Each page starts from \
                           local facts — districts, institutions, population, demand drivers — and \
                           writes from them." }
                    </p>
                    <div class="mechanism-compare">
                        <div class="mechanism-card before">
                            <span class="mechanism-tag">{ "Generic output" }</span>
                            <p>
                                { "\"Welcome to Austin, TX, where you'll find a wide range of quality \
                                   dental providers. Austin is known for its vibrant culture and growing \
                                   population. Whether you need a routine cleaning or cosmetic dentistry, \
                                   Austin has many great options to choose from...\"" }
                            </p>
                        </div>
                        <div class="mechanism-card after">
                            <span class="mechanism-tag">{ "Seoscribed" }</span>
                            <p>
                                { "\"From Austin's vibrant South Congress district to family practices \
                                   expanding near Round Rock and Cedar Park, the city's 964,000 residents \
                                   have access to a growing network fueled by UT Austin's dental school \
                                   pipeline...\"" }
                            </p>
                        </div>
                    </div>
                    <p class="mechanism-note">
                        { "Same city. Same prompt. Completely different output — because one researched, \
                           the other guessed." }
                    </p>
                </div>
            </section>

            // Offer
            <section data-track-section="offer" id="beta" class="offer">
                <div class="section-inner center">
                    <p class="section-kicker">{ "Join the Beta" }</p>
                    <h2 class="section-headline">
                        { "Your directory deserves" }<br />
                        { "content Google can rank." }
                    </h2>
                    <p class="section-subhead">
                        { "Join as a founding member. Free access during beta — we'll generate a sample \
                           page for your niche within 24 hours." }
                    </p>
                    <div class="qualify-grid">
                        <div class="qualify-card yes">
                            <h3>{ "This is for you if" }</h3>
                            <ul>
                                <li>{ "You have a directory with 100+ location pages" }</li>
                                <li>{ "You've tried ChatGPT or freelancers and the output is repetitive" }</li>
                                <li>{ "You need content this month, not next quarter" }</li>
                            </ul>
                        </div>
                        <div class="qualify-card no">
                            <h3>{ "Not a fit if" }</h3>
                            <ul>
                                <li>{ "You have fewer than 50 pages — ChatGPT is fine at that scale" }</li>
                                <li>{ "You need hand-crafted, editorial-quality longform content" }</li>
                            </ul>
                        </div>
                    </div>
                    <div class="access-card">
                        <h3>{ "Founding member access" }</h3>
                        <ul class="value-stack">
                            <li>{ "Unlimited page generation" }</li>
                            <li>{ "Built-in uniqueness scoring per page" }</li>
                            <li>{ "Direct CMS push (WordPress, Webflow, more)" }</li>
                            <li>{ "Free sample page for your niche within 24 hours" }</li>
                            <li>{ "Priority support & feature requests" }</li>
                        </ul>
                        <BetaSignupForm />
                        <p class="scarcity">{ "Beta limited to 500 founding members" }</p>
                    </div>
                </div>
            </section>

            // FAQ
            <section data-track-section="faq" class="faq">
                <div class="section-inner">
                    <h2 class="section-headline center">{ "Answers to what you're already thinking." }</h2>
                    <div class="faq-list">
                        <div class="faq-item">
                            <h3>{ "How is this different from looping ChatGPT?" }</h3>
                            <p>
                                { "ChatGPT generates one page at a time. Loop it with a script and every \
                                   page still sounds the same. Seoscribed pulls real local context — \
                                   landmarks, neighborhoods, demographics — to make each page genuinely \
                                   distinct." }
                            </p>
                        </div>
                        <div class="faq-item">
                            <h3>{ "Won't Google penalize AI content?" }</h3>
                            <p>
                                { "Google penalizes duplicate content, not AI content itself. Every page \
                                   gets a uniqueness score before publish. If any page is too similar to \
                                   another, you'll see it first." }
                            </p>
                        </div>
                        <div class="faq-item">
                            <h3>{ "Can I see the output before committing?" }</h3>
                            <p>
                                { "Yes. Every founding member gets a free sample page generated for their \
                                   niche within 24 hours of signing up. If the output doesn't meet your \
                                   standard, no commitment — you're in beta, not a contract." }
                            </p>
                        </div>
                    </div>
                    <div class="faq-cta">
                        <a href="#beta" class="cta primary">{ "Get Free Beta Access" }</a>
                    </div>
                </div>
            </section>

            // Footer
            <footer class="footer">
                <div class="section-inner footer-inner">
                    <p>{ "© 2026 Seoscribed. All rights reserved." }</p>
                    <div class="footer-links">
                        <Link<Route> to={Route::Privacy}>{ "Privacy Policy" }</Link<Route>>
                        <Link<Route> to={Route::Terms}>{ "Terms of Service" }</Link<Route>>
                    </div>
                </div>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    background: #FAFBFC;
    color: #1E293B;
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
}

.section-inner {
    max-width: 1120px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section-inner.center { text-align: center; }
.center { text-align: center; }

.section-kicker {
    font-size: 0.8rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: #C2410C;
    margin-bottom: 0.75rem;
}

.section-headline {
    font-size: clamp(1.75rem, 4vw, 2.75rem);
    font-weight: 700;
    line-height: 1.15;
    color: #0F172A;
    margin-bottom: 1rem;
}

.section-subhead {
    font-size: 1.1rem;
    color: #475569;
    max-width: 40rem;
    margin: 0 auto 2.5rem;
    line-height: 1.6;
}

/* Hero */
.hero { padding: 5rem 0; overflow: hidden; }

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: #F1F5F9;
    border: 1px solid #E2E8F0;
    color: #475569;
    font-size: 0.75rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    margin-bottom: 2rem;
}

.hero-badge-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #22C55E;
    animation: pulse 1.6s ease-in-out infinite;
}

.hero-qualifier { font-size: 0.9rem; color: #64748B; font-weight: 500; margin-bottom: 1.5rem; }

.hero-headline {
    font-size: clamp(2.25rem, 6vw, 4.25rem);
    font-weight: 700;
    line-height: 1.1;
    color: #0F172A;
    margin-bottom: 1.5rem;
}

.hero-accent { color: #C2410C; font-style: italic; }

.hero-subhead {
    font-size: 1.2rem;
    color: #475569;
    max-width: 42rem;
    margin: 0 auto 3rem;
    line-height: 1.6;
}

.hero-ctas { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; margin-bottom: 1.25rem; }

.cta {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.9rem 2rem;
    border-radius: 0.5rem;
    font-weight: 700;
    text-decoration: none;
    transition: all 0.2s ease;
}

.cta.primary { background: #0F172A; color: #fff; }
.cta.primary:hover { background: #1E293B; box-shadow: 0 8px 24px rgba(15, 23, 42, 0.25); }
.cta.secondary { background: #fff; color: #0F172A; border: 1px solid #E2E8F0; }
.cta.secondary:hover { border-color: #C2410C; }

.hero-trust { font-size: 0.85rem; color: #94A3B8; display: flex; gap: 0.6rem; justify-content: center; }

/* Demo */
.demo-root { margin: 5rem auto 0; width: 100%; max-width: 680px; position: relative; text-align: left; }

.demo-glow {
    position: absolute;
    inset: -1rem;
    border-radius: 32px;
    filter: blur(48px);
    pointer-events: none;
    transition: all 1s ease;
    background: radial-gradient(ellipse at center, rgba(22, 101, 52, 0.06) 0%, transparent 70%);
}

.demo-glow.before {
    background: radial-gradient(ellipse at center, rgba(194, 65, 12, 0.05) 0%, transparent 70%);
}

.demo-window {
    position: relative;
    background: #fff;
    border-radius: 1rem;
    border: 1px solid #E0DBD2;
    box-shadow: 0 25px 50px -12px rgba(112, 107, 99, 0.1);
    overflow: hidden;
}

.demo-chrome {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.6rem 1rem;
    border-bottom: 1px solid #E0DBD2;
    background: rgba(248, 246, 241, 0.8);
}

.demo-chrome-dots { display: flex; gap: 0.35rem; }
.demo-chrome-dot { width: 10px; height: 10px; border-radius: 50%; opacity: 0.8; }
.demo-chrome-url {
    display: flex;
    align-items: center;
    gap: 0.35rem;
    padding: 0.25rem 0.75rem;
    background: #EDEAD6;
    border-radius: 6px;
    color: #A39E95;
    font-family: ui-monospace, monospace;
    font-size: 0.65rem;
    letter-spacing: 0.03em;
}
.demo-chrome-url svg { width: 10px; height: 10px; }
.demo-chrome-spacer { width: 2rem; }

.demo-intro { padding: 2.5rem 2rem; display: flex; flex-direction: column; align-items: center; animation: fade-up 0.3s ease; }
.demo-intro-steps { width: 100%; max-width: 20rem; display: flex; flex-direction: column; gap: 0.75rem; }
.demo-intro-item {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    opacity: 0.15;
    transform: translateX(10px);
    transition: all 0.35s ease;
}
.demo-intro-item.active { opacity: 1; transform: translateX(0); }
.demo-intro-badge {
    width: 28px;
    height: 28px;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
    background: #EDEAD6;
    color: #A39E95;
    transition: all 0.3s ease;
}
.demo-intro-badge svg { width: 14px; height: 14px; }
.demo-intro-badge.done { background: #DCFCE7; color: #166534; }
.demo-intro-badge.loading { background: #FFF7ED; color: #C2410C; }
.demo-intro-label { font-size: 0.82rem; font-weight: 500; color: #A39E95; transition: color 0.3s ease; }
.demo-intro-label.done { color: #1A1A19; }
.demo-intro-label.loading { color: #706B63; }
.demo-intro-progress { width: 100%; max-width: 20rem; margin-top: 1.5rem; height: 6px; background: #EDEAD6; border-radius: 9999px; overflow: hidden; }
.demo-intro-progress-fill {
    height: 100%;
    border-radius: 9999px;
    background: linear-gradient(to right, #C2410C, #166534);
    transition: width 0.7s ease-out;
}

.demo-controls {
    padding: 1rem 1.25rem 0.75rem;
    border-bottom: 1px solid rgba(224, 219, 210, 0.5);
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.75rem;
    flex-wrap: wrap;
    animation: fade-up 0.3s ease;
}

.demo-pills { display: flex; gap: 0.35rem; flex-wrap: wrap; }
.demo-pill {
    display: flex;
    align-items: center;
    gap: 0.35rem;
    padding: 0.35rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
    border: 1px solid #E0DBD2;
    background: #fff;
    color: #706B63;
    cursor: pointer;
    transition: all 0.2s ease;
}
.demo-pill:hover { border-color: rgba(194, 65, 12, 0.3); color: #1A1A19; }
.demo-pill.active { background: #1A1A19; color: #fff; border-color: #1A1A19; box-shadow: 0 1px 2px rgba(0,0,0,0.1); }
.demo-pill-dot { width: 6px; height: 6px; border-radius: 50%; flex-shrink: 0; }

.demo-toggle { display: flex; align-items: center; background: #EDEAD6; border-radius: 0.5rem; padding: 2px; flex-shrink: 0; }
.demo-toggle-btn {
    padding: 0.35rem 0.75rem;
    border-radius: 0.375rem;
    border: none;
    background: transparent;
    font-size: 0.68rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #A39E95;
    cursor: pointer;
    transition: all 0.2s ease;
}
.demo-toggle-btn:hover { color: #706B63; }
.demo-toggle-btn.before.active { background: #fff; color: #991B1B; box-shadow: 0 1px 2px rgba(0,0,0,0.08); }
.demo-toggle-btn.after.active { background: #fff; color: #166534; box-shadow: 0 1px 2px rgba(0,0,0,0.08); }

.demo-content { padding: 1.25rem; animation: fade-up 0.4s ease; }
.demo-columns { display: flex; gap: 1.25rem; }
.demo-main { flex: 1; min-width: 0; }

.demo-title-row { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.75rem; }
.demo-title-dot { width: 8px; height: 8px; border-radius: 50%; flex-shrink: 0; transition: all 0.3s ease; }
.demo-title { font-size: 0.9rem; font-weight: 700; color: #1A1A19; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.demo-title-meta { font-size: 0.62rem; font-family: ui-monospace, monospace; color: #A39E95; margin-left: auto; }

.demo-card {
    position: relative;
    border-radius: 0.75rem;
    border: 2px solid;
    padding: 1.25rem;
    min-height: 150px;
    transition: opacity 0.2s, transform 0.2s, border-color 0.5s, background-color 0.5s;
}
.demo-card.before { border-color: rgba(153, 27, 27, 0.2); background: rgba(253, 242, 240, 0.3); }
.demo-card.after { border-color: rgba(22, 101, 52, 0.2); background: rgba(240, 253, 244, 0.3); }

.demo-badge {
    position: absolute;
    top: -10px;
    left: 12px;
    padding: 2px 8px;
    border-radius: 9999px;
    font-size: 0.56rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    border: 1px solid;
    transition: all 0.3s ease;
}
.demo-badge.before { background: #FDF2F0; color: #991B1B; border-color: #E8B4A8; }
.demo-badge.after { background: #F0FDF4; color: #166534; border-color: #BBF7D0; }

.demo-text { margin-top: 0.4rem; font-size: 0.87rem; line-height: 1.85; }
.demo-before-text { color: #A39E95; }
.demo-after-text { color: #1A1A19; }
.demo-city-swap {
    font-weight: 600;
    color: #991B1B;
    text-decoration: underline wavy rgba(153, 27, 27, 0.3);
    text-underline-offset: 4px;
    transition: all 0.2s ease;
}
.demo-mark { background: #EDEAD6; color: inherit; padding: 0 2px; border-radius: 2px; border-bottom: 2px solid rgba(194, 65, 12, 0.3); }
.demo-caret {
    display: inline-block;
    width: 2px;
    height: 14px;
    background: #C2410C;
    margin-left: 2px;
    margin-bottom: -2px;
    animation: pulse 1s ease-in-out infinite;
}

.demo-card-meta {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-top: 1rem;
    padding-top: 0.6rem;
    border-top: 1px solid rgba(224, 219, 210, 0.4);
    font-size: 0.62rem;
}
.demo-meta-before { display: flex; align-items: center; gap: 0.35rem; color: #991B1B; font-weight: 600; }
.demo-meta-before svg { width: 12px; height: 12px; }
.demo-meta-after { display: flex; align-items: center; gap: 0.3rem; font-family: ui-monospace, monospace; color: #A39E95; }
.demo-meta-after svg { width: 12px; height: 12px; color: #C2410C; }

.demo-manual-strip { margin-top: 0.75rem; display: flex; align-items: center; gap: 1rem; }
.demo-manual-link {
    display: flex;
    align-items: center;
    gap: 0.35rem;
    border: none;
    background: transparent;
    font-size: 0.68rem;
    font-weight: 500;
    color: #A39E95;
    cursor: pointer;
    transition: color 0.2s ease;
}
.demo-manual-link:hover { color: #706B63; }
.demo-manual-link svg { width: 12px; height: 12px; }
.demo-manual-link.accent { color: #C2410C; font-weight: 700; }
.demo-manual-link.accent:hover { color: #9A3412; }

.demo-sidebar { display: none; }

.demo-gauge { display: flex; flex-direction: column; align-items: center; gap: 2px; }
.demo-gauge-ring { position: relative; width: 64px; height: 64px; }
.demo-gauge-ring svg { width: 100%; height: 100%; transform: rotate(-90deg); }
.demo-gauge-arc { transition: stroke-dashoffset 0.8s ease, stroke 0.4s ease; }
.demo-gauge-value {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.9rem;
    font-weight: 800;
    font-variant-numeric: tabular-nums;
    transition: color 0.4s ease;
}
.demo-gauge-caption { font-size: 0.56rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.08em; transition: color 0.5s ease; }

.demo-dots { display: flex; flex-direction: column; align-items: center; gap: 0.35rem; }
.demo-dots-grid { display: flex; flex-wrap: wrap; gap: 2.5px; width: 108px; justify-content: center; }
.demo-dot { width: 3.5px; height: 3.5px; border-radius: 1px; }
.demo-dots-caption { font-size: 0.56rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.08em; transition: color 0.5s ease; }

.demo-hint {
    text-align: center;
    margin-top: 1rem;
    font-size: 0.68rem;
    font-weight: 500;
    color: #A39E95;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.35rem;
}
.demo-hint svg { width: 12px; height: 12px; }
.demo-hint-pulse {
    display: inline-block;
    width: 6px;
    height: 6px;
    border-radius: 50%;
    background: #991B1B;
    animation: pulse 1.2s ease-in-out infinite;
}

.demo-spin { animation: spin 0.7s linear infinite; }

@media (min-width: 640px) {
    .demo-sidebar {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.25rem;
        padding-top: 2rem;
        flex-shrink: 0;
        width: 120px;
    }
}

/* Problem / comparison */
.problem { padding: 5rem 0; }
.compare-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; margin-top: 2rem; }
.compare-card { border-radius: 1rem; border: 1px solid #E2E8F0; padding: 2rem; background: #fff; }
.compare-card.pain { border-color: rgba(153, 27, 27, 0.25); }
.compare-card.solution { border-color: rgba(22, 101, 52, 0.25); }
.compare-card h3 { font-size: 1.1rem; font-weight: 700; margin-bottom: 1rem; }
.compare-card.pain h3 { color: #991B1B; }
.compare-card.solution h3 { color: #166534; }
.compare-card ul { list-style: none; display: flex; flex-direction: column; gap: 0.75rem; }
.compare-card li { color: #475569; line-height: 1.5; font-size: 0.95rem; padding-left: 1.4rem; position: relative; }
.compare-card.pain li:before { content: "✕"; position: absolute; left: 0; color: #991B1B; }
.compare-card.solution li:before { content: "✓"; position: absolute; left: 0; color: #166534; }

@media (min-width: 768px) {
    .compare-grid { grid-template-columns: 1fr 1fr; }
}

/* Mechanism */
.mechanism { padding: 5rem 0; background: #F8F6F1; }
.mechanism-compare { display: grid; grid-template-columns: 1fr; gap: 1.5rem; margin-top: 1.5rem; text-align: left; }
.mechanism-card { border-radius: 0.75rem; border: 2px solid; padding: 1.5rem; background: #fff; position: relative; }
.mechanism-card.before { border-color: rgba(153, 27, 27, 0.2); }
.mechanism-card.after { border-color: rgba(22, 101, 52, 0.2); }
.mechanism-card p { color: #475569; line-height: 1.7; font-size: 0.95rem; margin-top: 0.75rem; }
.mechanism-tag { font-size: 0.62rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.08em; }
.mechanism-card.before .mechanism-tag { color: #991B1B; }
.mechanism-card.after .mechanism-tag { color: #166534; }
.mechanism-note { margin-top: 2rem; color: #64748B; font-size: 0.95rem; }

@media (min-width: 768px) {
    .mechanism-compare { grid-template-columns: 1fr 1fr; }
}

/* Offer */
.offer { padding: 5rem 0; }
.qualify-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; margin-bottom: 2.5rem; text-align: left; }
.qualify-card { border-radius: 1rem; border: 1px solid #E2E8F0; padding: 1.75rem; background: #fff; }
.qualify-card h3 { font-size: 1rem; font-weight: 700; margin-bottom: 0.75rem; }
.qualify-card.yes h3 { color: #166534; }
.qualify-card.no h3 { color: #991B1B; }
.qualify-card ul { list-style: none; display: flex; flex-direction: column; gap: 0.6rem; }
.qualify-card li { color: #475569; font-size: 0.95rem; line-height: 1.5; padding-left: 1.4rem; position: relative; }
.qualify-card.yes li:before { content: "✓"; position: absolute; left: 0; color: #166534; }
.qualify-card.no li:before { content: "—"; position: absolute; left: 0; color: #991B1B; }

@media (min-width: 768px) {
    .qualify-grid { grid-template-columns: 1fr 1fr; }
}

.access-card {
    max-width: 30rem;
    margin: 0 auto;
    background: #0F172A;
    border-radius: 1rem;
    padding: 2.5rem 2rem;
    color: #fff;
    text-align: left;
}
.access-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 1.25rem; }
.value-stack { list-style: none; display: flex; flex-direction: column; gap: 0.6rem; margin-bottom: 1.75rem; }
.value-stack li { color: #CBD5E1; font-size: 0.95rem; padding-left: 1.4rem; position: relative; }
.value-stack li:before { content: "✓"; position: absolute; left: 0; color: #22C55E; }

.signup-form { display: flex; flex-direction: column; gap: 0.75rem; margin-bottom: 1.25rem; }
.signup-input {
    width: 100%;
    padding: 1rem 1.25rem;
    background: #1E293B;
    border: 1px solid #475569;
    border-radius: 0.5rem;
    color: #fff;
    font-size: 1rem;
    transition: all 0.2s ease;
}
.signup-input::placeholder { color: #94A3B8; }
.signup-input:focus { outline: none; border-color: #6366F1; box-shadow: 0 0 0 2px rgba(99, 102, 241, 0.4); }
.signup-error { color: #F87171; font-size: 0.85rem; padding: 0 0.25rem; }
.signup-button {
    width: 100%;
    padding: 1rem 1.25rem;
    background: #fff;
    color: #0F172A;
    font-weight: 700;
    font-size: 1rem;
    border: none;
    border-radius: 0.5rem;
    cursor: pointer;
    transition: all 0.2s ease;
}
.signup-button:hover { background: #F1F5F9; }
.signup-button:disabled { opacity: 0.6; cursor: not-allowed; }
.scarcity { text-align: center; font-size: 0.8rem; color: #94A3B8; }

/* FAQ */
.faq { padding: 5rem 0; background: #F8F6F1; }
.faq-list { max-width: 44rem; margin: 2.5rem auto 0; display: flex; flex-direction: column; gap: 1.25rem; }
.faq-item { background: #fff; border: 1px solid #E2E8F0; border-radius: 0.75rem; padding: 1.5rem 1.75rem; }
.faq-item h3 { font-size: 1.05rem; font-weight: 700; color: #0F172A; margin-bottom: 0.5rem; }
.faq-item p { color: #475569; line-height: 1.65; font-size: 0.95rem; }
.faq-cta { text-align: center; margin-top: 2.5rem; }

/* Footer */
.footer { border-top: 1px solid #E2E8F0; padding: 2.5rem 0; }
.footer-inner { display: flex; align-items: center; justify-content: space-between; flex-wrap: wrap; gap: 1rem; }
.footer p { color: #94A3B8; font-size: 0.85rem; }
.footer-links { display: flex; gap: 1.25rem; }
.footer-links a { color: #64748B; font-size: 0.85rem; text-decoration: none; }
.footer-links a:hover { color: #0F172A; }

/* Modal */
.modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.8);
    backdrop-filter: blur(4px);
    z-index: 50;
}
.modal-wrap {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    pointer-events: none;
}
.modal-panel {
    pointer-events: auto;
    background: #0B1120;
    border: 1px solid #1E293B;
    border-radius: 0.75rem;
    width: 100%;
    max-width: 28rem;
    max-height: 90vh;
    overflow-y: auto;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
    animation: fade-up 0.2s ease;
}
.modal-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1.25rem 1.5rem;
    border-bottom: 1px solid #1E293B;
}
.modal-header h2 { font-size: 1.35rem; font-weight: 700; color: #fff; }
.modal-close { border: none; background: transparent; color: #94A3B8; font-size: 1.5rem; cursor: pointer; padding: 0.25rem 0.5rem; }
.modal-close:hover { color: #fff; }
.modal-body { padding: 1.75rem 1.5rem; }
.modal-body h3 { font-size: 1.1rem; font-weight: 700; color: #fff; margin-bottom: 0.5rem; }
.modal-subtitle { color: #94A3B8; font-size: 0.88rem; margin-bottom: 1.5rem; }
.modal-label { display: block; font-size: 0.85rem; font-weight: 500; color: #CBD5E1; margin: 1rem 0 0.5rem; }
.modal-input {
    width: 100%;
    background: #111827;
    border: 1px solid #1F2937;
    border-radius: 0.5rem;
    padding: 0.85rem 1rem;
    color: #fff;
    font-size: 1rem;
    transition: border-color 0.2s ease;
}
.modal-input:focus { outline: none; border-color: #22C55E; }
.modal-error {
    background: rgba(239, 68, 68, 0.1);
    border: 1px solid rgba(239, 68, 68, 0.5);
    color: #F87171;
    padding: 0.75rem 1rem;
    border-radius: 0.5rem;
    font-size: 0.85rem;
    margin-top: 1rem;
}
.modal-submit {
    width: 100%;
    margin-top: 1.5rem;
    padding: 0.9rem 1.25rem;
    background: #22C55E;
    color: #04120A;
    font-weight: 700;
    font-size: 1rem;
    border: none;
    border-radius: 0.5rem;
    cursor: pointer;
    transition: background 0.2s ease;
}
.modal-submit:hover { background: #16A34A; }
.modal-submit:disabled { opacity: 0.6; cursor: not-allowed; }

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.35; }
}

@keyframes spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

@keyframes fade-up {
    from { opacity: 0; transform: translateY(8px); }
    to { opacity: 1; transform: translateY(0); }
}
"#;
