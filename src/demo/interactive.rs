//! The interactive before/after demo shown in the hero. Auto-plays a
//! scripted sequence (intro, generic "before" copy, streamed "after" copy,
//! then cycles through cities) until the visitor takes over; pauses while
//! scrolled out of view so off-screen changes cannot cause layout jumps.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use super::cities::{CityData, CITIES, CITY_PLACEHOLDER, GENERIC_PARTS};
use super::sequencer::{
    AutoStep, DemoEvent, DemoState, Phase, BEFORE_NAME_CYCLE_MS, INTRO_DONE_MS,
    INTRO_STEP_SCHEDULE_MS, MANUAL_SELECT_FADE_MS, MANUAL_TOGGLE_FADE_MS,
};
use super::stream::StreamText;

impl Reducible for DemoState {
    type Action = DemoEvent;

    fn reduce(self: Rc<Self>, action: DemoEvent) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

// ── Intro sub-sequence ──

#[derive(Properties, PartialEq)]
struct IntroSequenceProps {
    on_done: Callback<()>,
}

#[function_component(IntroSequence)]
fn intro_sequence(props: &IntroSequenceProps) -> Html {
    let step = use_state(|| 0usize);

    {
        let step = step.clone();
        let on_done = props.on_done.clone();
        use_effect_with_deps(
            move |_| {
                step.set(0);
                let mut pending = Vec::new();
                for (i, delay) in INTRO_STEP_SCHEDULE_MS.iter().enumerate() {
                    let step = step.clone();
                    pending.push(Timeout::new(*delay, move || step.set(i + 1)));
                }
                pending.push(Timeout::new(INTRO_DONE_MS, move || on_done.emit(())));
                move || drop(pending)
            },
            (),
        );
    }

    let generating_label = if *step >= 4 { "500 pages generated" } else { "Generating 500 pages..." };
    let items: [(Html, &str, usize); 3] = [
        (icon_upload(), "dentists_500_cities.csv uploaded", 1),
        (icon_settings(), "Template: \"Best {Service} in {City}\"", 2),
        (icon_bolt(), generating_label, 3),
    ];

    let progress = match *step {
        0 => "5%",
        1 => "25%",
        2 => "50%",
        3 => "80%",
        _ => "100%",
    };

    html! {
        <div class="demo-intro">
            <div class="demo-intro-steps">
                {
                    for items.iter().enumerate().map(|(i, (icon, label, trigger))| {
                        let active = *step >= *trigger;
                        let done = *step > *trigger || (i == 2 && *step >= 4);
                        let loading = active && !done && i == 2;
                        let badge_class = if done {
                            "demo-intro-badge done"
                        } else if loading {
                            "demo-intro-badge loading"
                        } else {
                            "demo-intro-badge"
                        };
                        let label_class = if done {
                            "demo-intro-label done"
                        } else if loading {
                            "demo-intro-label loading"
                        } else {
                            "demo-intro-label"
                        };
                        html! {
                            <div class={classes!("demo-intro-item", active.then_some("active"))}>
                                <div class={badge_class}>
                                    if done { { icon_check() } } else if loading { { icon_spinner() } } else { { icon.clone() } }
                                </div>
                                <span class={label_class}>{ *label }</span>
                            </div>
                        }
                    })
                }
            </div>
            <div class="demo-intro-progress">
                <div class="demo-intro-progress-fill" style={format!("width: {}", progress)}></div>
            </div>
        </div>
    }
}

// ── Sidebar widgets ──

#[derive(Properties, PartialEq)]
struct ScoreGaugeProps {
    score: u32,
    is_before: bool,
}

#[function_component(ScoreGauge)]
fn score_gauge(props: &ScoreGaugeProps) -> Html {
    let value = if props.is_before { 12 } else { props.score };
    let color = if props.is_before { "#991B1B" } else { "#166534" };
    let radius = 26.0_f64;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let offset = circumference - (value as f64 / 100.0) * circumference;

    html! {
        <div class="demo-gauge">
            <div class="demo-gauge-ring">
                <svg viewBox="0 0 60 60">
                    <circle cx="30" cy="30" r="26" fill="none" stroke="#E0DBD2" stroke-width="4" />
                    <circle
                        cx="30" cy="30" r="26" fill="none"
                        stroke={color} stroke-width="4" stroke-linecap="round"
                        stroke-dasharray={format!("{:.2}", circumference)}
                        stroke-dashoffset={format!("{:.2}", offset)}
                        class="demo-gauge-arc"
                    />
                </svg>
                <span class="demo-gauge-value" style={format!("color: {}", color)}>
                    { format!("{}%", value) }
                </span>
            </div>
            <span class="demo-gauge-caption" style={format!("color: {}", color)}>{ "Unique" }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DotGridProps {
    is_before: bool,
}

#[function_component(DotGrid)]
fn dot_grid(props: &DotGridProps) -> Html {
    // Stagger delays are fixed per mount so the grid "settles" the same way
    // on every before/after flip.
    let delays = use_memo(
        |_| (0..100).map(|_| js_sys::Math::random() * 1.2).collect::<Vec<f64>>(),
        (),
    );

    let (color, opacity) = if props.is_before {
        ("#C2410C", 0.35)
    } else {
        ("#166534", 0.65)
    };
    let caption = if props.is_before { "500 duplicate pages" } else { "500 unique pages" };
    let caption_color = if props.is_before { "#991B1B" } else { "#166534" };

    html! {
        <div class="demo-dots">
            <div class="demo-dots-grid">
                {
                    for delays.iter().map(|delay| {
                        let delay = if props.is_before { 0.0 } else { *delay };
                        html! {
                            <div
                                class="demo-dot"
                                style={format!(
                                    "background-color: {}; opacity: {}; transition: all 0.4s ease {:.2}s",
                                    color, opacity, delay
                                )}
                            ></div>
                        }
                    })
                }
            </div>
            <span class="demo-dots-caption" style={format!("color: {}", caption_color)}>{ caption }</span>
        </div>
    }
}

// ── "Before" template with cycling city name ──

#[derive(Properties, PartialEq)]
struct BeforeTextProps {
    active_idx: usize,
    visible: bool,
}

#[function_component(BeforeText)]
fn before_text(props: &BeforeTextProps) -> Html {
    let display_idx = use_state(|| 0usize);

    {
        let display_idx = display_idx.clone();
        use_effect_with_deps(
            move |(active_idx, visible): &(usize, bool)| {
                display_idx.set(*active_idx);
                let mut ticker = None;
                if *visible {
                    let cursor = Rc::new(Cell::new(*active_idx));
                    let display_idx = display_idx.clone();
                    ticker = Some(Interval::new(BEFORE_NAME_CYCLE_MS, move || {
                        let next = (cursor.get() + 1) % CITIES.len();
                        cursor.set(next);
                        display_idx.set(next);
                    }));
                }
                move || drop(ticker)
            },
            (props.active_idx, props.visible),
        );
    }

    let city_name = CITIES[*display_idx % CITIES.len()].city;
    html! {
        <span class="demo-before-text">
            {
                for GENERIC_PARTS.iter().map(|part| {
                    if *part == CITY_PLACEHOLDER {
                        html! { <span class="demo-city-swap">{ city_name }</span> }
                    } else {
                        html! { <span>{ *part }</span> }
                    }
                })
            }
        </span>
    }
}

// ── Main component ──

fn hint_for(state: &DemoState) -> (Html, &'static str) {
    if state.phase == Phase::Intro {
        return (icon_bolt(), "Setting up your generation...");
    }
    let is_before = state.phase == Phase::Before;
    match (is_before, state.manual_mode) {
        (true, false) => (
            html! { <span class="demo-hint-pulse"></span> },
            "Same text for every city — only the name changes",
        ),
        (true, true) => (icon_spark(), "Click \"After\" to see the Seoscribed version"),
        (false, false) => (
            icon_spark(),
            "Each city gets completely unique content — click any to compare",
        ),
        (false, true) => (icon_spark(), "Click any city — every page is genuinely different"),
    }
}

#[function_component(InteractiveDemo)]
pub fn interactive_demo() -> Html {
    let state = use_reducer(|| DemoState::new(CITIES.len()));
    // One armed dwell timer at a time; the fade timer gets its own slot so a
    // firing dwell callback never drops itself.
    let auto_timer = use_mut_ref(|| None::<Timeout>);
    let fade_timer = use_mut_ref(|| None::<Timeout>);
    let container = use_node_ref();

    // Visibility gate: tear auto-play down while scrolled out of view.
    {
        let state = state.clone();
        let container = container.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer = None;
                let mut callback = None;
                if let Some(element) = container.cast::<web_sys::Element>() {
                    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, _: IntersectionObserver| {
                            if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                                state.dispatch(DemoEvent::VisibilityChanged(entry.is_intersecting()));
                            }
                        },
                    );
                    match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some(obs);
                            callback = Some(on_intersect);
                        }
                        Err(err) => gloo_console::warn!("intersection observer unavailable:", err),
                    }
                }
                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    // Auto-play orchestration: re-arm (or tear down) the single dwell timer
    // whenever the schedule-relevant state changes. `fading` is deliberately
    // not a dependency: the `BeginFade` dispatch must not cancel the fade
    // timer it just armed. When a real state change does drop a pending fade
    // timer, the event behind it already reset `fading` in the reducer.
    {
        let schedule_dep = {
            let s = &*state;
            (s.phase, s.city_idx, s.manual_mode, s.visible)
        };
        let state = state.clone();
        let auto_timer = auto_timer.clone();
        let fade_timer = fade_timer.clone();
        use_effect_with_deps(
            move |_| {
                auto_timer.borrow_mut().take();
                if let Some(AutoStep { dwell_ms, fade_ms }) = state.auto_step() {
                    let fade_slot = fade_timer.clone();
                    let state = state.clone();
                    let handle = Timeout::new(dwell_ms, move || {
                        if fade_ms == 0 {
                            state.dispatch(DemoEvent::AutoAdvance);
                            return;
                        }
                        state.dispatch(DemoEvent::BeginFade);
                        let state = state.clone();
                        *fade_slot.borrow_mut() = Some(Timeout::new(fade_ms, move || {
                            state.dispatch(DemoEvent::AutoAdvance);
                        }));
                    });
                    *auto_timer.borrow_mut() = Some(handle);
                }
                move || {
                    auto_timer.borrow_mut().take();
                    fade_timer.borrow_mut().take();
                }
            },
            schedule_dep,
        );
    }

    // Manual actions: always cancel pending timers before scheduling the
    // fade so two competing transitions can never fire into the same state.
    let manual_transition = {
        let state = state.clone();
        let auto_timer = auto_timer.clone();
        let fade_timer = fade_timer.clone();
        Callback::from(move |(event, fade_ms): (DemoEvent, u32)| {
            auto_timer.borrow_mut().take();
            fade_timer.borrow_mut().take();
            state.dispatch(DemoEvent::BeginFade);
            let state = state.clone();
            *fade_timer.borrow_mut() = Some(Timeout::new(fade_ms, move || {
                state.dispatch(event);
            }));
        })
    };

    let select_city = {
        let state = state.clone();
        let manual_transition = manual_transition.clone();
        Callback::from(move |i: usize| {
            if state.phase.is_after_view() && state.city_idx == i {
                return;
            }
            manual_transition.emit((DemoEvent::SelectCity(i), MANUAL_SELECT_FADE_MS));
        })
    };

    let toggle_to_before = {
        let state = state.clone();
        let manual_transition = manual_transition.clone();
        Callback::from(move |_: MouseEvent| {
            if state.phase == Phase::Before {
                return;
            }
            manual_transition.emit((DemoEvent::ShowBefore, MANUAL_TOGGLE_FADE_MS));
        })
    };

    let toggle_to_after = {
        let state = state.clone();
        let manual_transition = manual_transition.clone();
        Callback::from(move |_: MouseEvent| {
            if state.phase.is_after_view() {
                return;
            }
            manual_transition.emit((DemoEvent::ShowAfter, MANUAL_TOGGLE_FADE_MS));
        })
    };

    let on_intro_done = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(DemoEvent::IntroDone))
    };

    let city: &CityData = &CITIES[state.city_idx % CITIES.len()];
    let is_before = state.phase == Phase::Before;
    let is_after = state.phase.is_after_view();
    let (hint_icon, hint_text) = hint_for(&state);

    let card_style = if state.fading {
        "opacity: 0; transform: scale(0.98);"
    } else {
        "opacity: 1; transform: scale(1);"
    };

    html! {
        <div ref={container} class="demo-root" id="see-the-difference">
            <div class={classes!("demo-glow", is_before.then_some("before"))}></div>
            <div class="demo-window">
                // Browser chrome
                <div class="demo-chrome">
                    <div class="demo-chrome-dots">
                        <div class="demo-chrome-dot" style="background: #FCA5A5"></div>
                        <div class="demo-chrome-dot" style="background: #FDE68A"></div>
                        <div class="demo-chrome-dot" style="background: #86EFAC"></div>
                    </div>
                    <div class="demo-chrome-url">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                            <rect x="3" y="11" width="18" height="11" rx="2" ry="2" />
                            <path d="M7 11V7a5 5 0 0110 0v4" />
                        </svg>
                        <span>{ "app.seoscribed.com" }</span>
                    </div>
                    <div class="demo-chrome-spacer"></div>
                </div>

                if state.phase == Phase::Intro {
                    <IntroSequence on_done={on_intro_done} />
                } else {
                    <>
                        // City pills + before/after toggle
                        <div class="demo-controls">
                            <div class="demo-pills">
                                {
                                    for CITIES.iter().enumerate().map(|(i, c)| {
                                        let onclick = {
                                            let select_city = select_city.clone();
                                            Callback::from(move |_: MouseEvent| select_city.emit(i))
                                        };
                                        let active = i == state.city_idx;
                                        let dot_style = if active {
                                            "background: #fff".to_string()
                                        } else {
                                            format!("background: {}", c.dot)
                                        };
                                        html! {
                                            <button
                                                class={classes!("demo-pill", active.then_some("active"))}
                                                {onclick}
                                            >
                                                <span class="demo-pill-dot" style={dot_style}></span>
                                                { c.city }
                                            </button>
                                        }
                                    })
                                }
                            </div>
                            <div class="demo-toggle">
                                <button
                                    class={classes!("demo-toggle-btn", "before", is_before.then_some("active"))}
                                    onclick={toggle_to_before.clone()}
                                >{ "Before" }</button>
                                <button
                                    class={classes!("demo-toggle-btn", "after", is_after.then_some("active"))}
                                    onclick={toggle_to_after.clone()}
                                >{ "After" }</button>
                            </div>
                        </div>

                        // Content area
                        <div class="demo-content">
                            <div class="demo-columns">
                                <div class="demo-main">
                                    <div class="demo-title-row">
                                        <div class="demo-title-dot" style={format!("background: {}", city.dot)}></div>
                                        <span class="demo-title">
                                            { format!("Best Dentists in {}, {}", city.city, city.state) }
                                        </span>
                                        if is_after {
                                            <span class="demo-title-meta">
                                                { format!("{} words · {} min", city.words, city.read_minutes()) }
                                            </span>
                                        }
                                    </div>

                                    <div
                                        class={classes!("demo-card", if is_before { "before" } else { "after" })}
                                        style={card_style}
                                    >
                                        <div class={classes!("demo-badge", if is_before { "before" } else { "after" })}>
                                            { if is_before { "⚠ Generic Output" } else { "✦ Seoscribed" } }
                                        </div>
                                        <div class="demo-text">
                                            if is_before {
                                                <BeforeText active_idx={state.city_idx} visible={state.visible} />
                                            } else {
                                                <span class="demo-after-text">
                                                    <StreamText segments={city.after} key={format!("after-{}", state.city_idx)} />
                                                </span>
                                            }
                                        </div>
                                        <div class="demo-card-meta">
                                            if is_before {
                                                <div class="demo-meta-before">
                                                    { icon_copy() }
                                                    <span>{ "Same on all 500 pages" }</span>
                                                </div>
                                            } else {
                                                <div class="demo-meta-after">
                                                    { icon_spark() }
                                                    { format!("{} local references", city.local_references()) }
                                                </div>
                                            }
                                        </div>
                                    </div>

                                    if state.manual_mode {
                                        <div class="demo-manual-strip">
                                            if is_after {
                                                <button class="demo-manual-link" onclick={toggle_to_before}>
                                                    { icon_swap() }
                                                    { "Show generic version" }
                                                </button>
                                            }
                                            if is_before {
                                                <button class="demo-manual-link accent" onclick={toggle_to_after}>
                                                    { icon_spark() }
                                                    { "See Seoscribed output" }
                                                    { icon_arrow() }
                                                </button>
                                            }
                                        </div>
                                    }
                                </div>

                                <div class="demo-sidebar">
                                    <ScoreGauge score={city.unique} is_before={is_before} />
                                    <DotGrid is_before={is_before} />
                                </div>
                            </div>
                        </div>
                    </>
                }
            </div>

            <p class="demo-hint">
                { hint_icon }
                { hint_text }
            </p>
        </div>
    }
}

// ── Inline icons ──

fn icon_check() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round">
            <polyline points="20 6 9 17 4 12" />
        </svg>
    }
}

fn icon_spinner() -> Html {
    html! {
        <svg class="demo-spin" viewBox="0 0 24 24" fill="none" stroke-width="2.5" stroke-linecap="round">
            <path d="M12 2a10 10 0 0110 10" stroke="currentColor" />
        </svg>
    }
}

fn icon_spark() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round">
            <path d="M12 3l1.5 5.5L19 10l-5.5 1.5L12 17l-1.5-5.5L5 10l5.5-1.5z" />
        </svg>
    }
}

fn icon_swap() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <polyline points="17 1 21 5 17 9" />
            <path d="M3 11V9a4 4 0 014-4h14" />
            <polyline points="7 23 3 19 7 15" />
            <path d="M21 13v2a4 4 0 01-4 4H3" />
        </svg>
    }
}

fn icon_arrow() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M5 12h14M12 5l7 7-7 7" />
        </svg>
    }
}

fn icon_copy() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
            <rect x="9" y="9" width="13" height="13" rx="2" />
            <path d="M5 15H4a2 2 0 01-2-2V4a2 2 0 012-2h9a2 2 0 012 2v1" />
        </svg>
    }
}

fn icon_bolt() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round">
            <path d="M13 2L3 14h9l-1 8 10-12h-9l1-8z" />
        </svg>
    }
}

fn icon_upload() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
            <path d="M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4" />
            <polyline points="17 8 12 3 7 8" />
            <line x1="12" y1="3" x2="12" y2="15" />
        </svg>
    }
}

fn icon_settings() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
            <circle cx="12" cy="12" r="3" />
            <path d="M19.4 15a1.65 1.65 0 00.33 1.82l.06.06a2 2 0 010 2.83 2 2 0 01-2.83 0l-.06-.06a1.65 1.65 0 00-1.82-.33 1.65 1.65 0 00-1 1.51V21a2 2 0 01-2 2 2 2 0 01-2-2v-.09A1.65 1.65 0 009 19.4a1.65 1.65 0 00-1.82.33l-.06.06a2 2 0 01-2.83 0 2 2 0 010-2.83l.06-.06A1.65 1.65 0 004.68 15a1.65 1.65 0 00-1.51-1H3a2 2 0 01-2-2 2 2 0 012-2h.09A1.65 1.65 0 004.6 9a1.65 1.65 0 00-.33-1.82l-.06-.06a2 2 0 010-2.83 2 2 0 012.83 0l.06.06A1.65 1.65 0 009 4.68a1.65 1.65 0 001-1.51V3a2 2 0 012-2 2 2 0 012 2v.09a1.65 1.65 0 001 1.51 1.65 1.65 0 001.82-.33l.06-.06a2 2 0 012.83 0 2 2 0 010 2.83l-.06.06A1.65 1.65 0 0019.4 9a1.65 1.65 0 001.51 1H21a2 2 0 012 2 2 2 0 01-2 2h-.09a1.65 1.65 0 00-1.51 1z" />
        </svg>
    }
}
