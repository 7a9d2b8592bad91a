//! Recording doubles shared by the end-to-end flow tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use mediapick_core::{AspectRatio, MediaItem, Photo, SelectionBatch, Video, VideoSource};
use mediapick_flow::{
    AcquisitionStep, AlbumSaver, CropStep, FilterStep, GalleryStep, MediaPicker, StepOutcome,
};

pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<&'static str> {
    log.lock().unwrap().clone()
}

/// Everything the host observed, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Image(Bytes),
    Video {
        data: Bytes,
        thumbnail: Bytes,
        url: String,
    },
    Items(Vec<Uuid>),
    Cancel,
}

#[derive(Clone, Default)]
pub struct EventSink {
    events: Arc<Mutex<Vec<Event>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    /// Register every callback category on the picker.
    pub fn attach_all(&self, picker: MediaPicker) -> MediaPicker {
        self.attach_cancel(
            picker
                .on_image({
                    let sink = self.clone();
                    move |image| sink.push(Event::Image(image))
                })
                .on_video({
                    let sink = self.clone();
                    move |data, thumbnail, url| {
                        sink.push(Event::Video {
                            data,
                            thumbnail,
                            url,
                        })
                    }
                })
                .on_items({
                    let sink = self.clone();
                    move |batch| sink.push(Event::Items(batch.iter().map(|i| i.id()).collect()))
                }),
        )
    }

    pub fn attach_image(&self, picker: MediaPicker) -> MediaPicker {
        let sink = self.clone();
        picker.on_image(move |image| sink.push(Event::Image(image)))
    }

    pub fn attach_video(&self, picker: MediaPicker) -> MediaPicker {
        let sink = self.clone();
        picker.on_video(move |data, thumbnail, url| {
            sink.push(Event::Video {
                data,
                thumbnail,
                url,
            })
        })
    }

    pub fn attach_items(&self, picker: MediaPicker) -> MediaPicker {
        let sink = self.clone();
        picker.on_items(move |batch| sink.push(Event::Items(batch.iter().map(|i| i.id()).collect())))
    }

    pub fn attach_cancel(&self, picker: MediaPicker) -> MediaPicker {
        let sink = self.clone();
        picker.on_cancel(move || sink.push(Event::Cancel))
    }
}

/// Picker screen that immediately resolves with a scripted outcome.
pub struct StaticAcquisition(pub StepOutcome<SelectionBatch>);

#[async_trait]
impl AcquisitionStep for StaticAcquisition {
    async fn pick(&self) -> StepOutcome<SelectionBatch> {
        self.0.clone()
    }
}

/// Filter double: optionally rewrites the photo's processed image, or
/// cancels.
pub struct ScriptedFilter {
    pub log: CallLog,
    pub result_image: Option<Bytes>,
    pub cancel: bool,
}

#[async_trait]
impl FilterStep for ScriptedFilter {
    async fn apply(&self, item: MediaItem, _is_from_selection: bool) -> StepOutcome<MediaItem> {
        self.log.lock().unwrap().push("filter");
        if self.cancel {
            return StepOutcome::Cancelled;
        }
        match (item, &self.result_image) {
            (MediaItem::Photo(mut photo), Some(image)) => {
                photo.modified_image = Some(image.clone());
                StepOutcome::Completed(MediaItem::Photo(photo))
            }
            (item, _) => StepOutcome::Completed(item),
        }
    }
}

/// Crop double: records the image it was handed, then returns a scripted
/// output or cancels.
pub struct ScriptedCrop {
    pub log: CallLog,
    pub seen_input: Arc<Mutex<Option<Bytes>>>,
    pub output: Bytes,
    pub cancel: bool,
}

impl ScriptedCrop {
    pub fn new(log: CallLog, output: Bytes) -> Self {
        Self {
            log,
            seen_input: Arc::new(Mutex::new(None)),
            output,
            cancel: false,
        }
    }
}

#[async_trait]
impl CropStep for ScriptedCrop {
    async fn crop(&self, image: Bytes, _ratio: AspectRatio) -> StepOutcome<Bytes> {
        self.log.lock().unwrap().push("crop");
        *self.seen_input.lock().unwrap() = Some(image);
        if self.cancel {
            StepOutcome::Cancelled
        } else {
            StepOutcome::Completed(self.output.clone())
        }
    }
}

/// Gallery double: finalizes the batch unchanged, or cancels.
pub struct ScriptedGallery {
    pub log: CallLog,
    pub cancel: bool,
}

#[async_trait]
impl GalleryStep for ScriptedGallery {
    async fn review(&self, items: SelectionBatch) -> StepOutcome<SelectionBatch> {
        self.log.lock().unwrap().push("gallery");
        if self.cancel {
            StepOutcome::Cancelled
        } else {
            StepOutcome::Completed(items)
        }
    }
}

/// Album saver that always fails, for the best-effort guarantee.
pub struct FailingSaver;

#[async_trait]
impl AlbumSaver for FailingSaver {
    async fn try_save(&self, _image: Bytes, _album_name: &str) -> anyhow::Result<()> {
        anyhow::bail!("album is read-only")
    }
}

/// Video source that counts how many times the payload was fetched.
pub struct CountingSource {
    pub data: Bytes,
    pub fetches: Arc<AtomicU32>,
}

#[async_trait]
impl VideoSource for CountingSource {
    async fn fetch_data(&self) -> anyhow::Result<Bytes> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.data.clone())
    }
}

pub fn photo(data: &'static [u8]) -> MediaItem {
    MediaItem::Photo(Photo::new(Bytes::from_static(data)))
}

pub fn video(source: Arc<dyn VideoSource>) -> MediaItem {
    MediaItem::Video(Video::new(
        Bytes::from_static(b"thumb"),
        "file:///clip.mov",
        source,
    ))
}

pub fn picked(items: Vec<MediaItem>) -> StaticAcquisition {
    StaticAcquisition(StepOutcome::Completed(SelectionBatch::new(items)))
}
