//! Photo capture/upload page that starts a colour analysis.
//!
//! CAMERA LIFECYCLE
//! ================
//! Opening the camera requests a media stream, wires it into the preview
//! element and starts a brightness sampler on a timer. Capturing, picking
//! a file, stopping by hand and leaving the page all funnel through
//! [`stop_camera`], which drops the sampler, stops every track and
//! detaches the stream. The sampler cancels on drop, so no timer outlives
//! the preview it samples.

use leptos::prelude::*;

#[cfg(feature = "web")]
use leptos::task::spawn_local;
#[cfg(feature = "web")]
use leptos_router::hooks::use_navigate;
#[cfg(feature = "web")]
use wasm_bindgen::JsCast as _;

use crate::components::dashboard_navbar::DashboardNavbar;
#[cfg(feature = "web")]
use crate::net::analysis;
#[cfg(feature = "web")]
use crate::net::http::ApiClient;
#[cfg(feature = "web")]
use crate::net::http::FormPayload;
#[cfg(feature = "web")]
use crate::state::analysis::AnalysisReport;
use crate::state::analysis::use_analysis_report;
use crate::state::toasts::{self, use_toasts};
#[cfg(feature = "web")]
use crate::util::brightness;

/// Where the photo being analysed came from.
#[derive(Clone)]
pub enum PhotoSource {
    /// Webcam capture, held as a JPEG data URL.
    Capture(String),
    /// File picked from disk.
    #[cfg(feature = "web")]
    File(web_sys::File),
}

/// Live camera resources: the media stream and the brightness sampler.
/// Dropping the sampler cancels its timer.
#[cfg(feature = "web")]
struct CameraHandles {
    stream: web_sys::MediaStream,
    sampler: gloo_timers::callback::Interval,
}

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let toasts = use_toasts();
    let report = use_analysis_report();
    let source = RwSignal::new_local(None::<PhotoSource>);
    let preview = RwSignal::new(None::<String>);
    let camera_on = RwSignal::new(false);
    let low_light = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let video_ref = NodeRef::<leptos::html::Video>::new();
    #[cfg(feature = "web")]
    let handles = StoredValue::new_local(None::<CameraHandles>);
    #[cfg(feature = "web")]
    let navigate = use_navigate();

    #[cfg(feature = "web")]
    on_cleanup(move || stop_camera(video_ref, handles));

    let on_open_camera = move |_| {
        #[cfg(feature = "web")]
        {
            if camera_on.get_untracked() {
                return;
            }
            camera_on.set(true);
            low_light.set(false);
            spawn_local(async move {
                if let Err(message) = start_camera(video_ref, handles, low_light).await {
                    toasts::error(toasts, message);
                    camera_on.set(false);
                }
            });
        }
    };

    let on_capture = move |_| {
        #[cfg(feature = "web")]
        {
            let Some(video) = video_ref.get_untracked() else {
                return;
            };
            let Some(data_url) = capture_photo(&video) else {
                toasts::error(toasts, "Could not read a frame from the camera.");
                return;
            };
            preview.set(Some(data_url.clone()));
            source.set(Some(PhotoSource::Capture(data_url)));
            stop_camera(video_ref, handles);
            camera_on.set(false);
            low_light.set(false);
        }
    };

    let on_stop_camera = move |_| {
        #[cfg(feature = "web")]
        {
            stop_camera(video_ref, handles);
            camera_on.set(false);
            low_light.set(false);
        }
    };

    let on_pick_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "web")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if !file.type_().starts_with("image/") {
                toasts::error(toasts, "Please choose an image file.");
                return;
            }
            preview.set(web_sys::Url::create_object_url_with_blob(&file).ok());
            source.set(Some(PhotoSource::File(file)));
            stop_camera(video_ref, handles);
            camera_on.set(false);
            low_light.set(false);
        }
        #[cfg(not(feature = "web"))]
        let _ = ev;
    };

    let on_clear = move |_| {
        source.set(None);
        preview.set(None);
    };

    let on_analyze = Callback::new(move |_: ()| {
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "web")]
        {
            let Some(photo) = source.get_untracked() else {
                toasts::error(toasts, "Capture or choose a photo first.");
                return;
            };
            let Some(form) = upload_form(&photo) else {
                toasts::error(toasts, "The captured photo could not be read.");
                return;
            };
            busy.set(true);
            toasts::info(toasts, "Analysing your photo...");
            let navigate = navigate.clone();
            spawn_local(async move {
                let client = ApiClient::new();
                match analysis::upload_and_analyze(&client, form).await {
                    Ok((_, outcome)) => {
                        report.set(Some(AnalysisReport {
                            image: preview.get_untracked(),
                            outcome,
                        }));
                        toasts::success(toasts, "Analysis complete!");
                        navigate("/dashboard/results", Default::default());
                    }
                    Err(error) => {
                        toasts::error(toasts, error.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (toasts, report);
    });

    view! {
        <div class="page page--app">
            <DashboardNavbar/>

            <main class="page__body">
                <header class="page__header">
                    <h1>"Colour Analysis"</h1>
                    <p>"Capture a photo with your camera or upload one from your device."</p>
                </header>

                <section class="analysis-sources">
                    <div class="analysis-camera">
                        <h2>"Use Your Camera"</h2>
                        <div class="analysis-camera__stage">
                            <video
                                node_ref=video_ref
                                autoplay=true
                                muted=true
                                class:is-hidden=move || !camera_on.get()
                            ></video>
                            <Show when=move || !camera_on.get()>
                                <p class="analysis-camera__placeholder">
                                    "The camera preview appears here."
                                </p>
                            </Show>
                            <Show when=move || camera_on.get() && low_light.get()>
                                <p class="analysis-camera__warning">
                                    "Lighting looks poor. Face a window or turn on a light."
                                </p>
                            </Show>
                        </div>
                        <div class="analysis-camera__controls">
                            <Show
                                when=move || camera_on.get()
                                fallback=move || {
                                    view! {
                                        <button class="btn btn--primary" on:click=on_open_camera>
                                            "Open Camera"
                                        </button>
                                    }
                                }
                            >
                                <button class="btn btn--primary" on:click=on_capture>
                                    "Capture Photo"
                                </button>
                                <button class="btn" on:click=on_stop_camera>
                                    "Stop Camera"
                                </button>
                            </Show>
                        </div>
                    </div>

                    <div class="analysis-upload">
                        <h2>"Or Upload a Photo"</h2>
                        <label class="analysis-upload__drop">
                            <input type="file" accept="image/*" on:change=on_pick_file/>
                            <span>"Choose an image from your device"</span>
                        </label>
                        <p class="analysis-upload__hint">
                            "A clear, well-lit photo of your face works best."
                        </p>
                    </div>
                </section>

                <Show when=move || preview.get().is_some()>
                    <section class="analysis-review">
                        <h2>"Your Photo"</h2>
                        {move || {
                            preview
                                .get()
                                .map(|src| {
                                    view! {
                                        <img
                                            class="analysis-review__photo"
                                            src=src
                                            alt="Chosen photo"
                                        />
                                    }
                                })
                        }}
                        <div class="analysis-review__actions">
                            <button
                                class="btn btn--primary btn--large"
                                disabled=busy
                                on:click=move |_| on_analyze.run(())
                            >
                                {move || if busy.get() { "Analysing..." } else { "Analyse My Colours" }}
                            </button>
                            <button class="btn" disabled=busy on:click=on_clear>
                                "Choose Another"
                            </button>
                        </div>
                    </section>
                </Show>
            </main>
        </div>
    }
}

/// Builds the multipart payload for whichever photo source is selected.
#[cfg(feature = "web")]
fn upload_form(source: &PhotoSource) -> Option<FormPayload> {
    match source {
        PhotoSource::Capture(data_url) => analysis::photo_form_from_data_url(data_url),
        PhotoSource::File(file) => Some(analysis::photo_form_from_file(file.clone())),
    }
}

/// Requests the camera, attaches the stream to the preview element and
/// starts the brightness sampler.
#[cfg(feature = "web")]
async fn start_camera(
    video_ref: NodeRef<leptos::html::Video>,
    handles: StoredValue<Option<CameraHandles>, LocalStorage>,
    low_light: RwSignal<bool>,
) -> Result<(), &'static str> {
    let window = web_sys::window().ok_or("Camera access is not available here.")?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| "Camera access is not available in this browser.")?;

    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&wasm_bindgen::JsValue::TRUE);
    constraints.set_audio(&wasm_bindgen::JsValue::FALSE);
    let request = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|_| "Camera access is not available in this browser.")?;
    let stream = wasm_bindgen_futures::JsFuture::from(request)
        .await
        .map_err(|_| "Camera permission was denied.")?
        .unchecked_into::<web_sys::MediaStream>();

    let Some(video) = video_ref.get_untracked() else {
        stop_tracks(&stream);
        return Err("The camera preview is not ready yet.");
    };
    video.set_src_object(Some(&stream));
    let _ = video.play();

    let sampler = gloo_timers::callback::Interval::new(brightness::SAMPLE_INTERVAL_MS, move || {
        if let Some(video) = video_ref.get_untracked() {
            if let Some(reading) = sample_brightness(&video) {
                low_light.set(brightness::is_low_light(reading));
            }
        }
    });
    handles.set_value(Some(CameraHandles { stream, sampler }));
    Ok(())
}

/// Tears down whatever [`start_camera`] set up. Safe to call repeatedly.
#[cfg(feature = "web")]
fn stop_camera(
    video_ref: NodeRef<leptos::html::Video>,
    handles: StoredValue<Option<CameraHandles>, LocalStorage>,
) {
    let Some(taken) = handles.try_update_value(Option::take).flatten() else {
        return;
    };
    drop(taken.sampler);
    stop_tracks(&taken.stream);
    if let Some(video) = video_ref.get_untracked() {
        video.set_src_object(None);
    }
}

#[cfg(feature = "web")]
fn stop_tracks(stream: &web_sys::MediaStream) {
    for track in stream.get_tracks().iter() {
        track.unchecked_into::<web_sys::MediaStreamTrack>().stop();
    }
}

/// Draws the current frame onto a small offscreen canvas and averages it.
/// Answers `None` until the video delivers real frames.
#[cfg(feature = "web")]
fn sample_brightness(video: &web_sys::HtmlVideoElement) -> Option<f64> {
    if video.video_width() == 0 {
        return None;
    }
    let context = offscreen_context(brightness::SAMPLE_WIDTH, brightness::SAMPLE_HEIGHT)?;
    context
        .draw_image_with_html_video_element_and_dw_and_dh(
            video,
            0.0,
            0.0,
            f64::from(brightness::SAMPLE_WIDTH),
            f64::from(brightness::SAMPLE_HEIGHT),
        )
        .ok()?;
    let frame = context
        .get_image_data(
            0.0,
            0.0,
            f64::from(brightness::SAMPLE_WIDTH),
            f64::from(brightness::SAMPLE_HEIGHT),
        )
        .ok()?;
    Some(brightness::average_brightness(&frame.data()))
}

/// Captures the current frame at full resolution as a JPEG data URL.
#[cfg(feature = "web")]
fn capture_photo(video: &web_sys::HtmlVideoElement) -> Option<String> {
    let width = video.video_width();
    let height = video.video_height();
    if width == 0 || height == 0 {
        return None;
    }
    let context = offscreen_context(width, height)?;
    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .ok()?;
    context
        .canvas()?
        .to_data_url_with_type("image/jpeg")
        .ok()
}

#[cfg(feature = "web")]
fn offscreen_context(width: u32, height: u32) -> Option<web_sys::CanvasRenderingContext2d> {
    let document = web_sys::window()?.document()?;
    let canvas = document
        .create_element("canvas")
        .ok()?
        .unchecked_into::<web_sys::HtmlCanvasElement>();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .ok()
}
