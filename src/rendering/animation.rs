//! Frame sequences and frame cycling.
//!
//! Frames come from image folders under `assets/`. A folder that is missing
//! or empty yields an empty sequence; whoever draws from it falls back to a
//! tinted placeholder quad.

use std::collections::HashMap;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use bevy::prelude::*;

/// Root that asset paths are relative to.
pub const ASSET_ROOT: &str = "assets";

/// Fractional frame index advanced every tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameCursor {
    pub index: f32,
}

impl FrameCursor {
    pub fn reset(&mut self) {
        self.index = 0.0;
    }

    /// Advance by `speed` frames through a sequence of `len` frames.
    ///
    /// Returns true when the sequence completed and the cursor wrapped to
    /// the first frame. An empty sequence counts as a single placeholder
    /// frame so cycle-driven state still completes.
    pub fn advance(&mut self, len: usize, speed: f32) -> bool {
        self.index += speed;
        if self.index >= len.max(1) as f32 {
            self.index = 0.0;
            true
        } else {
            false
        }
    }

    /// Current frame, or `None` for an empty sequence.
    pub fn pick<'a, T>(&self, frames: &'a [T]) -> Option<&'a T> {
        if frames.is_empty() {
            return None;
        }
        frames.get(self.index as usize % frames.len())
    }
}

/// Frame sequences keyed by animation state.
#[derive(Debug, Clone)]
pub struct AnimationSet<K> {
    sequences: HashMap<K, Vec<Handle<Image>>>,
}

impl<K> Default for AnimationSet<K> {
    fn default() -> Self {
        Self {
            sequences: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> AnimationSet<K> {
    pub fn insert(&mut self, key: K, frames: Vec<Handle<Image>>) {
        self.sequences.insert(key, frames);
    }

    /// Frames for `key`; empty when nothing was loaded for it.
    pub fn frames(&self, key: &K) -> &[Handle<Image>] {
        self.sequences.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Whether an asset path exists on disk.
pub fn asset_exists(path: &str) -> bool {
    Path::new(ASSET_ROOT).join(path).is_file()
}

/// Image files in an asset folder, sorted by name, as asset paths.
pub fn list_frames(folder: &str) -> Vec<String> {
    let dir = Path::new(ASSET_ROOT).join(folder);
    let Ok(entries) = fs::read_dir(&dir) else {
        debug!("No frames at {:?}", dir);
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
        .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|name| format!("{}/{}", folder, name))
        .collect()
}

/// Load every frame of a folder.
pub fn load_frames(asset_server: &AssetServer, folder: &str) -> Vec<Handle<Image>> {
    list_frames(folder)
        .into_iter()
        .map(|path| asset_server.load(path))
        .collect()
}

/// Load a single image if it exists.
pub fn load_optional(asset_server: &AssetServer, path: &str) -> Option<Handle<Image>> {
    asset_exists(path).then(|| asset_server.load(path.to_string()))
}

/// Show `frame`, or a `tint`-coloured quad of `size` when there is none.
pub fn paint(sprite: &mut Sprite, frame: Option<&Handle<Image>>, tint: Color, size: IVec2) {
    match frame {
        Some(handle) => {
            if sprite.image != *handle {
                sprite.image = handle.clone();
            }
            sprite.color = Color::WHITE;
            sprite.custom_size = None;
        }
        None => {
            sprite.image = Handle::default();
            sprite.color = tint;
            sprite.custom_size = Some(size.as_vec2());
        }
    }
}
