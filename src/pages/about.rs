use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::{use_mount, use_unmount};

use crate::animation::reveal::{Reveal, RevealConfig, RevealItem, Variants};
use crate::api::about::{fetch_about_content, FetchError};
use crate::api::models::{AboutContent, Statistic, ValueItem};
use crate::components::stat_card::StatCard;
use crate::components::value_card::{value_badge, ValueCard};
use crate::components::video::{InlineVideo, YouTubeVideo};
use crate::config;

/// What the About section shows; empty until the content request resolves.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AboutState {
    pub content: AboutContent,
    pub stats: Vec<Statistic>,
    pub values: Vec<ValueItem>,
}

impl AboutState {
    /// Replaces everything on success. On failure nothing changes.
    pub fn apply(&mut self, result: Result<AboutContent, FetchError>) -> Result<(), FetchError> {
        let mut content = result?;
        self.stats = std::mem::take(&mut content.stats);
        self.values = std::mem::take(&mut content.values);
        self.content = content;
        Ok(())
    }
}

const INTRO_REVEAL: RevealConfig = RevealConfig {
    threshold: 0.3,
    once: true,
    stagger_ms: 200,
    delay_children_ms: 800,
};

const VIDEO_REVEAL: RevealConfig = RevealConfig {
    threshold: 0.3,
    once: true,
    stagger_ms: 0,
    delay_children_ms: 0,
};

const VALUES_REVEAL: RevealConfig = RevealConfig {
    threshold: 0.4,
    once: true,
    stagger_ms: 150,
    delay_children_ms: 0,
};

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let state = use_state(AboutState::default);
    let mounted = use_mut_ref(|| true);

    {
        let state = state.clone();
        let mounted = mounted.clone();
        use_mount(move || {
            spawn_local(async move {
                let mut next = (*state).clone();
                match next.apply(fetch_about_content().await) {
                    Ok(()) if *mounted.borrow() => {
                        info!("Loaded about section content");
                        state.set(next);
                    }
                    Ok(()) => {}
                    Err(e) => error!("Failed to fetch about section: {}", e),
                }
            });
        });
    }

    {
        let mounted = mounted.clone();
        use_unmount(move || *mounted.borrow_mut() = false);
    }

    let video = YouTubeVideo::new(config::VISION_VIDEO_ID);
    // The intro column is item 0, the picture goes last.
    let image_index = state.stats.len() + 1;

    html! {
        <section class="about-section">
            <div class="about-pattern"></div>
            <div class="about-container">
                <Reveal config={INTRO_REVEAL} variants={Variants::SECTION} class="about-intro">
                    <RevealItem index={0}>
                        <h2 class="about-heading">
                            <span class="about-highlight">{"About"}</span>
                            {" CSK Realtors: Crafting Future Homes"}
                        </h2>
                        <p class="about-paragraph">{ &state.content.paragraph1 }</p>
                        <p class="about-paragraph about-paragraph-last">{ &state.content.paragraph2 }</p>
                        <div class="about-stats">
                            {
                                for state.stats.iter().enumerate().map(|(index, stat)| html! {
                                    <StatCard
                                        key={index}
                                        label={stat.label.clone()}
                                        value={stat.value}
                                        suffix={stat.display_suffix().to_string()}
                                        icon={stat.icon(index)}
                                        index={index + 1}
                                    />
                                })
                            }
                        </div>
                    </RevealItem>
                    <RevealItem index={image_index} class="about-image-wrapper">
                        <img
                            src={state.content.image.clone()}
                            alt="CSK Realtors - Building communities"
                            class="about-image"
                        />
                        <div class="about-image-overlay">
                            <p>{"\"Your Vision, Our Expertise.\""}</p>
                        </div>
                    </RevealItem>
                </Reveal>

                <Reveal config={VIDEO_REVEAL} variants={Variants::SECTION} class="about-video">
                    <h3 class="about-subheading">{"See Our Vision in Action"}</h3>
                    <InlineVideo video={video} />
                </Reveal>

                <section class="values-section">
                    <h2 class="about-heading values-heading">{"Our Guiding Principles"}</h2>
                    <Reveal config={VALUES_REVEAL} class="values-grid">
                        {
                            for state.values.iter().enumerate().map(|(index, value)| html! {
                                <RevealItem key={index} index={index}>
                                    <ValueCard
                                        title={value.title.clone()}
                                        description={value.description.clone()}
                                        icon={value_badge(value.resolve_kind(index))}
                                    />
                                </RevealItem>
                            })
                        }
                    </Reveal>
                </section>
            </div>
            <style>
                {r#"
                .about-section {
                    position: relative;
                    overflow: hidden;
                    padding: 5rem 0;
                    background: #f9fafb;
                }
                .about-pattern {
                    position: absolute;
                    inset: 0;
                    opacity: 0.05;
                    pointer-events: none;
                    background-image: linear-gradient(#000 1px, transparent 1px),
                        linear-gradient(90deg, #000 1px, transparent 1px);
                    background-size: 40px 40px;
                }
                .about-container {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .about-intro {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                @media (min-width: 1024px) {
                    .about-intro {
                        grid-template-columns: 1fr 1fr;
                        gap: 6rem;
                    }
                }
                .about-heading {
                    font-family: 'Vidaloka', serif;
                    font-size: 3rem;
                    color: #1f2937;
                    margin-bottom: 1.5rem;
                    line-height: 1.2;
                }
                .about-highlight {
                    color: #6b21a8;
                }
                .about-paragraph {
                    font-size: 1.125rem;
                    color: #374151;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .about-paragraph-last {
                    margin-bottom: 2rem;
                }
                .about-stats {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem 1rem;
                    margin-top: 2.5rem;
                }
                .stat-card {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .stat-icon-svg {
                    width: 2.5rem;
                    height: 2.5rem;
                    color: #6b21a8;
                }
                .stat-value {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #1f2937;
                }
                .stat-label {
                    color: #4b5563;
                }
                .about-image-wrapper {
                    position: relative;
                    overflow: hidden;
                    border-radius: 12px;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .about-image {
                    width: 100%;
                    height: 500px;
                    object-fit: cover;
                    border-radius: 12px;
                    display: block;
                }
                .about-image-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: flex-end;
                    padding: 2rem;
                    border-radius: 12px;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .about-image-wrapper:hover .about-image-overlay {
                    opacity: 1;
                }
                .about-image-overlay p {
                    color: white;
                    font-size: 1.25rem;
                    font-weight: 600;
                }
                .about-video {
                    margin-top: 5rem;
                    text-align: center;
                }
                .about-subheading {
                    font-family: 'Vidaloka', serif;
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin-bottom: 2.5rem;
                }
                .values-section {
                    padding: 5rem 0;
                    background: white;
                    border-bottom: 1px solid #f3f4f6;
                }
                .values-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2.5rem;
                }
                @media (min-width: 768px) {
                    .values-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                .value-card {
                    text-align: center;
                    padding: 2rem;
                    border-radius: 12px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                }
                .value-badge {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 auto 1.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .value-badge-icon {
                    width: 2.25rem;
                    height: 2.25rem;
                    color: white;
                }
                .value-title {
                    font-size: 1.5rem;
                    color: #1f2937;
                    margin-bottom: 1rem;
                }
                .value-description {
                    color: #4b5563;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> AboutContent {
        serde_json::from_str(
            r#"{
                "_id": "1",
                "mainTitle": "About",
                "paragraph1": "We build homes.",
                "paragraph2": "Since 1998.",
                "image": "https://cdn.example.com/a.jpg",
                "stats": [
                    {"label": "Projects Completed", "value": 150},
                    {"label": "Happy Families", "value": 1200}
                ],
                "values": [{"title": "Mission", "description": "Homes for all"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_success_replaces_content_and_sequences() {
        let mut state = AboutState::default();
        state.apply(Ok(loaded())).unwrap();

        assert_eq!(state.content.paragraph1, "We build homes.");
        assert_eq!(state.content.image, "https://cdn.example.com/a.jpg");
        assert_eq!(state.stats.len(), 2);
        assert_eq!(state.stats[1].value, 1200.0);
        assert_eq!(state.values[0].title, "Mission");
    }

    #[test]
    fn test_success_replaces_wholesale() {
        let mut state = AboutState::default();
        state.apply(Ok(loaded())).unwrap();
        state
            .apply(Ok(AboutContent {
                paragraph2: "Only this".to_string(),
                ..Default::default()
            }))
            .unwrap();

        assert_eq!(state.content.paragraph1, "");
        assert_eq!(state.content.paragraph2, "Only this");
        assert!(state.stats.is_empty());
        assert!(state.values.is_empty());
    }

    #[test]
    fn test_failure_keeps_default_state() {
        let mut state = AboutState::default();
        let result = state.apply(Err(FetchError::Network("connection refused".to_string())));

        assert_eq!(result, Err(FetchError::Network("connection refused".to_string())));
        assert_eq!(state, AboutState::default());
        assert_eq!(state.content.main_title, "");
    }

    #[test]
    fn test_failure_keeps_previous_content() {
        let mut state = AboutState::default();
        state.apply(Ok(loaded())).unwrap();
        let before = state.clone();

        assert!(state.apply(Err(FetchError::Status(500))).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_reveal_configs_match_layout() {
        assert_eq!(INTRO_REVEAL.child_delay(0), 800);
        assert_eq!(INTRO_REVEAL.child_delay(2), 1200);
        assert_eq!(VALUES_REVEAL.child_delay(3), 450);
        assert_eq!(VIDEO_REVEAL.child_delay(5), 0);
    }
}
