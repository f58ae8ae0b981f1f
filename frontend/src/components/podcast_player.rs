//! Modal podcast player bound to a hidden `<audio>` element.
//!
//! The `<audio>` element stays mounted while the modal is closed so the
//! listening position survives closing and reopening the player. All
//! playback rules live in [`AudioTransport`]; this component only forwards
//! DOM events to it and schedules the progress loop.

use stylist::Style;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Promise;
use web_sys::{HtmlInputElement, HtmlMediaElement};
use yew::prelude::*;

use crate::content::{content, Language};
use crate::engine::transport::{
    format_time, AudioTransport, MediaElement, PlayToggle, PlaybackError, TransportPhase,
    VolumeLevel,
};
use crate::hooks::{request_animation_frame, AnimationFrame};
use crate::styles::player_style;

/// [`MediaElement`] backed by the `<audio>` node the player renders.
pub struct HtmlAudioHandle {
    node: NodeRef,
}

impl HtmlAudioHandle {
    fn element(&self) -> Option<HtmlMediaElement> {
        self.node.cast::<HtmlMediaElement>()
    }
}

impl MediaElement for HtmlAudioHandle {
    type PlayHandle = Promise;

    fn current_time(&self) -> f64 {
        self.element().map(|audio| audio.current_time()).unwrap_or(0.0)
    }

    fn set_current_time(&mut self, seconds: f64) {
        if let Some(audio) = self.element() {
            audio.set_current_time(seconds);
        }
    }

    fn duration(&self) -> f64 {
        self.element().map(|audio| audio.duration()).unwrap_or(f64::NAN)
    }

    fn play(&mut self) -> Result<Promise, PlaybackError> {
        let audio = self.element().ok_or(PlaybackError::NoMediaElement)?;
        audio
            .play()
            .map_err(|err| PlaybackError::Rejected(format!("{:?}", err)))
    }

    fn pause(&mut self) {
        if let Some(audio) = self.element() {
            if let Err(err) = audio.pause() {
                log::warn!("Pausing audio failed: {:?}", err);
            }
        }
    }

    fn apply_volume(&mut self, volume: f64, muted: bool) {
        if let Some(audio) = self.element() {
            audio.set_volume(volume);
            audio.set_muted(muted);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PodcastPlayerProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub audio_src: AttrValue,
    pub title: AttrValue,
    pub language: Language,
    #[prop_or(10.0)]
    pub skip_seconds: f64,
}

pub enum PodcastPlayerMsg {
    MetadataLoaded,
    Frame,
    Ended,
    TogglePlay,
    PlaybackConfirmed,
    PlaybackRejected { session: u32, reason: String },
    Seek(f64),
    Skip(f64),
    SetVolume(f64),
    ToggleMute,
    Close,
}

pub struct PodcastPlayer {
    audio: NodeRef,
    transport: AudioTransport<HtmlAudioHandle>,
    frame: Option<AnimationFrame>,
    style: Option<Style>,
}

impl Component for PodcastPlayer {
    type Message = PodcastPlayerMsg;
    type Properties = PodcastPlayerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let audio = NodeRef::default();
        let mut transport = AudioTransport::new(
            HtmlAudioHandle { node: audio.clone() },
            ctx.props().is_open,
        );
        transport.load_source(&ctx.props().audio_src);

        Self {
            audio,
            transport,
            frame: None,
            style: player_style(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PodcastPlayerMsg::MetadataLoaded => {
                self.transport.metadata_loaded();
                true
            }
            PodcastPlayerMsg::Frame => {
                self.frame = None;
                self.transport.tick();
                self.schedule_frame(ctx);
                true
            }
            PodcastPlayerMsg::Ended => {
                self.transport.ended();
                self.stop_polling();
                true
            }
            PodcastPlayerMsg::TogglePlay => {
                match self.transport.toggle_play_pause() {
                    PlayToggle::Started { session, handle } => {
                        ctx.link().send_future(async move {
                            match JsFuture::from(handle).await {
                                Ok(_) => PodcastPlayerMsg::PlaybackConfirmed,
                                Err(err) => PodcastPlayerMsg::PlaybackRejected {
                                    session,
                                    reason: format!("{:?}", err),
                                },
                            }
                        });
                        self.schedule_frame(ctx);
                    }
                    PlayToggle::Paused => self.stop_polling(),
                    PlayToggle::Ignored => {}
                }
                true
            }
            PodcastPlayerMsg::PlaybackConfirmed => false,
            PodcastPlayerMsg::PlaybackRejected { session, reason } => {
                let changed = self
                    .transport
                    .play_rejected(session, PlaybackError::Rejected(reason));
                if changed {
                    self.stop_polling();
                }
                changed
            }
            PodcastPlayerMsg::Seek(position) => {
                self.transport.seek(position);
                true
            }
            PodcastPlayerMsg::Skip(delta) => {
                self.transport.skip(delta);
                true
            }
            PodcastPlayerMsg::SetVolume(volume) => {
                self.transport.set_volume(volume);
                true
            }
            PodcastPlayerMsg::ToggleMute => {
                self.transport.toggle_mute();
                true
            }
            PodcastPlayerMsg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.audio_src != old_props.audio_src {
            self.stop_polling();
            self.transport.load_source(&props.audio_src);
        }
        if props.is_open != old_props.is_open {
            if props.is_open {
                self.transport.open();
            } else {
                self.transport.close();
                self.stop_polling();
            }
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.transport.close();
        self.stop_polling();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <>
                <audio
                    ref={self.audio.clone()}
                    src={props.audio_src.clone()}
                    preload="metadata"
                    onloadedmetadata={link.callback(|_| PodcastPlayerMsg::MetadataLoaded)}
                    onended={link.callback(|_| PodcastPlayerMsg::Ended)}
                />
                if props.is_open {
                    { self.view_modal(ctx) }
                }
            </>
        }
    }
}

impl PodcastPlayer {
    /// Queues the next progress poll while the transport wants one.
    fn schedule_frame(&mut self, ctx: &Context<Self>) {
        if !self.transport.is_polling() {
            self.stop_polling();
            return;
        }
        let link = ctx.link().clone();
        self.frame = request_animation_frame(move |_| link.send_message(PodcastPlayerMsg::Frame));
    }

    fn stop_polling(&mut self) {
        self.frame = None;
    }

    fn view_modal(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let copy = &content(props.language).player;
        let state = self.transport.state();
        let ready = state.is_ready;
        let skip = props.skip_seconds;

        let on_seek = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            PodcastPlayerMsg::Seek(input.value_as_number())
        });
        let on_volume = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            PodcastPlayerMsg::SetVolume(input.value_as_number())
        });
        let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

        let (volume_icon, volume_label) = match self.transport.volume_level() {
            VolumeLevel::Muted => ("🔇", copy.unmute),
            VolumeLevel::Low => ("🔉", copy.mute),
            VolumeLevel::High => ("🔊", copy.mute),
        };
        let effective_volume = self.transport.effective_volume();
        let class = self.style.as_ref().map(|style| style.get_class_name().to_string());
        let phase_class = match self.transport.phase() {
            TransportPhase::Unloaded => "is-loading",
            TransportPhase::Playing => "is-playing",
            TransportPhase::Paused => "is-paused",
            TransportPhase::Ready | TransportPhase::Closed => "",
        };

        html! {
            <div
                class="player-backdrop no-print"
                onclick={link.callback(|_| PodcastPlayerMsg::Close)}
                style="position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.7);">
                <div class={classes!("player-modal", phase_class, class)} onclick={stop_propagation}>
                    <div class="player-header">
                        <div>
                            <small>{ copy.now_playing }</small>
                            <h3>{ &props.title }</h3>
                        </div>
                        <button class="close" aria-label={copy.close}
                            onclick={link.callback(|_| PodcastPlayerMsg::Close)}>
                            {"×"}
                        </button>
                    </div>

                    <input
                        type="range"
                        class="progress"
                        aria-label={copy.progress}
                        min="0"
                        max={state.duration.to_string()}
                        step="any"
                        value={state.current_time.to_string()}
                        disabled={!ready}
                        style={format!("--fill: {}%;", self.transport.progress_percent())}
                        oninput={on_seek}
                    />
                    <div class="times">
                        <span>{ format_time(state.current_time) }</span>
                        <span>{ format_time(state.duration) }</span>
                    </div>

                    <div class="controls">
                        <button aria-label={copy.rewind} disabled={!ready}
                            onclick={link.callback(move |_| PodcastPlayerMsg::Skip(-skip))}>
                            {"↺"}
                        </button>
                        <button class="play" disabled={!ready}
                            aria-label={if state.is_playing { copy.pause } else { copy.play }}
                            onclick={link.callback(|_| PodcastPlayerMsg::TogglePlay)}>
                            { if state.is_playing { "❚❚" } else { "▶" } }
                        </button>
                        <button aria-label={copy.forward} disabled={!ready}
                            onclick={link.callback(move |_| PodcastPlayerMsg::Skip(skip))}>
                            {"↻"}
                        </button>
                    </div>

                    <div class="volume">
                        <button aria-label={volume_label}
                            onclick={link.callback(|_| PodcastPlayerMsg::ToggleMute)}>
                            { volume_icon }
                        </button>
                        <input
                            type="range"
                            class="volume-slider"
                            aria-label={copy.volume}
                            min="0"
                            max="1"
                            step="0.01"
                            value={effective_volume.to_string()}
                            style={format!("--fill: {}%;", effective_volume * 100.0)}
                            oninput={on_volume}
                        />
                    </div>
                </div>
            </div>
        }
    }
}
