use yew::prelude::*;

use crate::components::icons::Icon;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum VideoState {
    #[default]
    Thumbnail,
    Playing,
}

impl VideoState {
    /// A click on the preview starts playback; there is no way back.
    pub fn click(self) -> Self {
        VideoState::Playing
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct YouTubeVideo {
    pub id: String,
}

impl YouTubeVideo {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn thumbnail_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", self.id)
    }

    pub fn embed_url(&self) -> String {
        format!(
            "https://www.youtube.com/embed/{}?autoplay=1&rel=0&modestbranding=1",
            self.id
        )
    }
}

const PLAYER_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

#[derive(Properties, PartialEq)]
pub struct InlineVideoProps {
    pub video: YouTubeVideo,
}

#[function_component(InlineVideo)]
pub fn inline_video(props: &InlineVideoProps) -> Html {
    let state = use_state(VideoState::default);

    let onclick = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.click()))
    };

    html! {
        <div class="video-frame">
            {
                match *state {
                    VideoState::Thumbnail => html! {
                        <div class="video-thumbnail" onclick={onclick}>
                            <img src={props.video.thumbnail_url()} alt="Video Thumbnail" />
                            <div class="video-play-overlay">
                                { Icon::PlayCircle.render("video-play-icon") }
                            </div>
                        </div>
                    },
                    VideoState::Playing => html! {
                        <div class="video-player">
                            <iframe
                                src={props.video.embed_url()}
                                title="YouTube video player"
                                frameborder="0"
                                allow={PLAYER_PERMISSIONS}
                                allowfullscreen={true}
                            ></iframe>
                        </div>
                    },
                }
            }
            <style>
                {r#"
                .video-frame {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    border-radius: 12px;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .video-thumbnail {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    background: #000;
                    cursor: pointer;
                }
                .video-thumbnail img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: opacity 0.5s;
                }
                .video-thumbnail:hover img {
                    opacity: 0.8;
                }
                .video-play-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.4);
                    transition: background 0.5s;
                }
                .video-thumbnail:hover .video-play-overlay {
                    background: rgba(0, 0, 0, 0.6);
                }
                .video-play-icon {
                    width: 5rem;
                    height: 5rem;
                    color: white;
                    transition: transform 0.3s;
                }
                .video-thumbnail:hover .video-play-icon {
                    transform: scale(1.1);
                }
                .video-player {
                    width: 100%;
                    height: 100%;
                    animation: video-fade-in 0.5s ease-out;
                }
                .video-player iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }
                @keyframes video-fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
