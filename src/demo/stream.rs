//! Character-streaming renderer for the "after" text. Reveal progresses at a
//! fixed rate across segment boundaries so highlighted spans type out like
//! the rest while still rendering as single marks. The stream is not
//! resumable: a new city or a re-entered phase restarts from zero.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::cities::AfterSegment;
use super::sequencer::{STREAM_CHARS_PER_TICK, STREAM_TICK_MS};

pub fn total_chars(segments: &[AfterSegment]) -> usize {
    segments.iter().map(|s| s.text.chars().count()).sum()
}

/// The revealed prefix after `chars` characters, as (text, highlighted)
/// pieces respecting segment boundaries. Slicing is char-based so multi-byte
/// punctuation in the copy cannot split a code point.
pub fn visible_prefix(segments: &[AfterSegment], chars: usize) -> Vec<(String, bool)> {
    let mut remaining = chars;
    let mut out = Vec::new();
    for segment in segments {
        if remaining == 0 {
            break;
        }
        let len = segment.text.chars().count().min(remaining);
        remaining -= len;
        out.push((segment.text.chars().take(len).collect(), segment.highlight));
    }
    out
}

#[derive(Properties, PartialEq)]
pub struct StreamTextProps {
    pub segments: &'static [AfterSegment],
}

#[function_component(StreamText)]
pub fn stream_text(props: &StreamTextProps) -> Html {
    let revealed = use_state(|| 0usize);
    let ticker = use_mut_ref(|| None::<Interval>);
    let total = total_chars(props.segments);

    // Restart from zero whenever the segment list changes.
    {
        let revealed = revealed.clone();
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |_| {
                revealed.set(0);
                let count = Rc::new(Cell::new(0usize));
                let tick = {
                    let revealed = revealed.clone();
                    move || {
                        let next = count.get() + STREAM_CHARS_PER_TICK;
                        count.set(next);
                        revealed.set(next);
                    }
                };
                *ticker.borrow_mut() = Some(Interval::new(STREAM_TICK_MS, tick));
                move || {
                    ticker.borrow_mut().take();
                }
            },
            props.segments,
        );
    }

    // Tear the interval down once fully revealed. Done outside the tick
    // callback: an Interval must not drop itself mid-call.
    {
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |done| {
                if *done {
                    ticker.borrow_mut().take();
                }
                || ()
            },
            *revealed >= total,
        );
    }

    let streaming = *revealed < total;
    html! {
        <span>
            {
                for visible_prefix(props.segments, *revealed).into_iter().map(|(text, highlight)| {
                    if highlight {
                        html! { <mark class="demo-mark">{ text }</mark> }
                    } else {
                        html! { <span>{ text }</span> }
                    }
                })
            }
            if streaming {
                <span class="demo-caret"></span>
            }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::cities::CITIES;

    const fn seg(text: &'static str, highlight: bool) -> AfterSegment {
        AfterSegment { text, highlight }
    }

    static SEGMENTS: [AfterSegment; 3] = [seg("abc", false), seg("def", true), seg("gh", false)];

    #[test]
    fn counts_all_characters() {
        assert_eq!(total_chars(&SEGMENTS), 8);
    }

    #[test]
    fn zero_chars_reveals_nothing() {
        assert!(visible_prefix(&SEGMENTS, 0).is_empty());
    }

    #[test]
    fn reveal_stops_inside_a_segment() {
        let out = visible_prefix(&SEGMENTS, 4);
        assert_eq!(out, vec![("abc".to_string(), false), ("d".to_string(), true)]);
    }

    #[test]
    fn highlight_flag_follows_segment_boundaries() {
        let out = visible_prefix(&SEGMENTS, 7);
        assert_eq!(
            out,
            vec![
                ("abc".to_string(), false),
                ("def".to_string(), true),
                ("g".to_string(), false),
            ]
        );
    }

    #[test]
    fn overshoot_clamps_to_full_text() {
        let out = visible_prefix(&SEGMENTS, 100);
        let joined: String = out.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(joined, "abcdefgh");
    }

    #[test]
    fn city_copy_streams_without_splitting_code_points() {
        // The Nashville copy contains an em dash; char-based slicing must
        // never panic partway through it.
        let segments = CITIES[3].after;
        for chars in 0..=total_chars(segments) {
            let out = visible_prefix(segments, chars);
            let revealed: usize = out.iter().map(|(t, _)| t.chars().count()).sum();
            assert_eq!(revealed, chars);
        }
    }
}
