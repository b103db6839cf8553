use yew::prelude::*;

#[derive(Debug, PartialEq)]
pub struct PitchDeckSlide {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
    pub bullet_points: &'static [&'static str],
}

pub const SLIDES: &[PitchDeckSlide] = &[
    PitchDeckSlide {
        id: 1,
        title: "The Problem",
        content: "The Metaverse is suffering from an identity crisis. Deepfakes and AI-generated avatars are indistinguishable from real users, destroying trust in digital interactions.",
        bullet_points: &[
            "90% increase in deepfake fraud in 2024",
            "No real-time verification tool for XR",
            "Users feel unsafe in immersive environments",
        ],
    },
    PitchDeckSlide {
        id: 2,
        title: "The Solution: XR Button",
        content: "A portable, HUD-based layer of truth for the spatial web. We provide real-time biometric verification and generative content detection at the click of a button.",
        bullet_points: &[
            "Instant AI Detection via Gemini 2.5 Flash",
            "Seamless Circular HUD UI",
            "Freemium SaaS Model ($5/mo Pro)",
        ],
    },
    PitchDeckSlide {
        id: 3,
        title: "Market & Traction",
        content: "Targeting the $800B Metaverse market and the $20B Identity Verification sector. Launching on Vercel/Render for enterprise scalability.",
        bullet_points: &[
            "B2C: Personal Protection",
            "B2B: Enterprise Meeting Verification",
            "Asking: $2M Seed for Mobile XR integration",
        ],
    },
];

/// Position in a deck, clamped to its bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckCursor {
    index: usize,
    len: usize,
}

impl DeckCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn is_first(self) -> bool {
        self.index == 0
    }

    pub fn is_last(self) -> bool {
        self.index + 1 >= self.len
    }

    pub fn next(self) -> Self {
        if self.is_last() {
            self
        } else {
            Self {
                index: self.index + 1,
                ..self
            }
        }
    }

    pub fn prev(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            ..self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PitchDeckProps {
    pub on_close: Callback<()>,
}

#[function_component]
pub fn PitchDeck(props: &PitchDeckProps) -> Html {
    let cursor = use_state(|| DeckCursor::new(SLIDES.len()));
    let slide = &SLIDES[cursor.index()];

    let on_prev = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.prev()))
    };
    let on_next = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.next()))
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="deck">
                <div class="deck-header">
                    <div class="deck-heading">
                        <div class="pulse-dot"></div>
                        <h2>{"XR BUTTON "}<span class="deck-subtitle">{"INVESTOR DECK"}</span></h2>
                    </div>
                    <button class="icon-button" onclick={on_close} aria-label="Close deck">{"✕"}</button>
                </div>

                <div class="deck-body">
                    <div class="deck-number">{format!("{:02}", slide.id)}</div>
                    <h1 class="deck-title">{slide.title}</h1>
                    <p class="deck-content">{slide.content}</p>
                    <ul class="deck-bullets">
                        { for slide.bullet_points.iter().map(|point| html! {
                            <li><span class="bullet-dot"></span><span>{*point}</span></li>
                        }) }
                    </ul>
                </div>

                <div class="deck-footer">
                    <div class="deck-progress">
                        { for (0..SLIDES.len()).map(|idx| html! {
                            <div class={classes!("progress-pip", (idx == cursor.index()).then_some("current"))}></div>
                        }) }
                    </div>
                    <div class="deck-nav">
                        <button class="deck-prev" onclick={on_prev} disabled={cursor.is_first()}>
                            {"Previous"}
                        </button>
                        <button class="deck-next" onclick={on_next} disabled={cursor.is_last()}>
                            {"Next"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_at_first_slide_is_a_no_op() {
        let cursor = DeckCursor::new(SLIDES.len());
        assert!(cursor.is_first());
        assert_eq!(cursor.prev(), cursor);
    }

    #[test]
    fn next_at_last_slide_is_a_no_op() {
        let last = DeckCursor::new(SLIDES.len()).next().next();
        assert!(last.is_last());
        assert_eq!(last.index(), SLIDES.len() - 1);
        assert_eq!(last.next(), last);
    }

    #[test]
    fn walking_past_both_ends_stays_in_bounds() {
        let mut cursor = DeckCursor::new(SLIDES.len());
        for _ in 0..10 {
            cursor = cursor.next();
            assert!(cursor.index() < SLIDES.len());
        }
        for _ in 0..10 {
            cursor = cursor.prev();
        }
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn single_slide_deck_is_first_and_last() {
        let cursor = DeckCursor::new(1);
        assert!(cursor.is_first() && cursor.is_last());
        assert_eq!(cursor.next(), cursor);
    }

    #[test]
    fn slides_are_ordered_with_three_bullets() {
        for (idx, slide) in SLIDES.iter().enumerate() {
            assert_eq!(slide.id as usize, idx + 1);
            assert_eq!(slide.bullet_points.len(), 3);
        }
    }
}
