use std::collections::HashSet;
use std::sync::{mpsc, Arc, Mutex};

use egui::ColorImage;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::image_format::ImageSource;
use crate::core::image_loader_factory::{ImageLoaderFactory, LoadError};
use crate::error::{CarouselError, Result};

/// A decoded (or failed) slide image coming back from the pool.
pub struct LoadedImage {
    pub generation: u64,
    pub index: usize,
    pub result: std::result::Result<ColorImage, LoadError>,
}

/// Slide indices to decode around `active`, nearest first, wrapping at both ends.
pub fn preload_order(active: usize, len: usize, range: usize) -> Vec<usize> {
    if len == 0 || active >= len {
        return Vec::new();
    }

    let mut order = vec![active];
    for step in 1..=range.min(len) {
        for index in [(active + step) % len, (active + len - step % len) % len] {
            if !order.contains(&index) {
                order.push(index);
            }
        }
    }
    order
}

pub struct PreloadManager {
    image_receiver: mpsc::Receiver<LoadedImage>,
    image_sender: mpsc::Sender<LoadedImage>,
    loading: Arc<Mutex<HashSet<(u64, usize)>>>,
    preload_range: usize,
    loader_factory: ImageLoaderFactory,
    pool: rayon::ThreadPool,
    generation: u64,
}

impl PreloadManager {
    pub fn new(preload_range: usize, workers: usize) -> Result<Self> {
        let (sender, receiver) = mpsc::channel();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(|i| format!("slide-decoder-{i}"))
            .build()
            .map_err(|e| CarouselError::Config(format!("failed to start decoder pool: {e}")))?;

        Ok(Self {
            image_receiver: receiver,
            image_sender: sender,
            loading: Arc::new(Mutex::new(HashSet::new())),
            preload_range,
            loader_factory: ImageLoaderFactory::new(),
            pool,
            generation: 0,
        })
    }

    /// Starts a new generation; results still in flight for the old one are dropped.
    pub fn reset(&mut self) {
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Queues the active slide and its neighbours, skipping those `is_known` reports
    /// as cached or failed.
    pub fn preload_images_around_index(
        &self,
        sources: &[ImageSource],
        active: usize,
        is_known: impl Fn(usize) -> bool,
    ) {
        let jobs: Vec<(usize, ImageSource)> = preload_order(active, sources.len(), self.preload_range)
            .into_iter()
            .filter(|index| !is_known(*index))
            .map(|index| (index, sources[index].clone()))
            .collect();

        if !jobs.is_empty() {
            self.spawn_loading(jobs);
        }
    }

    fn spawn_loading(&self, jobs: Vec<(usize, ImageSource)>) {
        let generation = self.generation;
        let requested = jobs.len();
        let jobs: Vec<_> = {
            let mut in_flight = self.loading.lock().unwrap_or_else(|e| e.into_inner());
            jobs.into_iter()
                .filter(|(index, _)| in_flight.insert((generation, *index)))
                .collect()
        };
        if jobs.is_empty() {
            return;
        }
        debug!(generation, queued = jobs.len(), skipped = requested - jobs.len(), "preloading slides");

        let sender = self.image_sender.clone();
        let loading = Arc::clone(&self.loading);
        let factory = self.loader_factory.clone();

        self.pool.spawn(move || {
            jobs.into_par_iter().for_each_with(sender, |sender, (index, source)| {
                let result = factory.load_image(&source);

                loading
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .remove(&(generation, index));

                // receiver gone means the app is shutting down
                let _ = sender.send(LoadedImage { generation, index, result });
            });
        });
    }

    /// Everything finished since the last call that belongs to the current generation.
    pub fn process_loaded_images(&self) -> Vec<LoadedImage> {
        let mut loaded = Vec::new();
        while let Ok(image) = self.image_receiver.try_recv() {
            if image.generation != self.generation {
                continue;
            }
            if let Err(e) = &image.result {
                warn!("slide {} image unavailable: {e}", image.index);
            }
            loaded.push(image);
        }
        loaded
    }
}
