//! Active platform collection
//!
//! Insertion order is creation order. The topmost platform (minimum y) is
//! tracked explicitly so generation never depends on append order.

use serde::{Deserialize, Serialize};

use super::state::Platform;

/// Ordered set of platforms currently in play
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformRegistry {
    platforms: Vec<Platform>,
    /// Index of the platform with the smallest y
    topmost: Option<usize>,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self {
            platforms: Vec::new(),
            topmost: None,
        }
    }

    pub fn append(&mut self, platform: Platform) {
        self.platforms.push(platform);
        let index = self.platforms.len() - 1;
        match self.topmost {
            Some(top) if self.platforms[top].pos.y <= platform.pos.y => {}
            _ => self.topmost = Some(index),
        }
    }

    /// Move every platform down by `delta_y` (world scroll)
    pub fn bulk_shift(&mut self, delta_y: f32) {
        for platform in &mut self.platforms {
            platform.pos.y += delta_y;
        }
    }

    /// Drop platforms at or below `screen_height`, keeping the order of the
    /// rest. Returns how many were removed.
    pub fn cull_below(&mut self, screen_height: f32) -> usize {
        let before = self.platforms.len();
        self.platforms.retain(|p| p.pos.y < screen_height);
        let removed = before - self.platforms.len();
        if removed > 0 {
            self.recompute_topmost();
        }
        removed
    }

    /// Most recently appended platform
    pub fn last(&self) -> Option<&Platform> {
        self.platforms.last()
    }

    /// Platform with the smallest y (highest on screen)
    pub fn topmost(&self) -> Option<&Platform> {
        self.topmost.map(|i| &self.platforms[i])
    }

    pub fn get(&self, index: usize) -> Option<&Platform> {
        self.platforms.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Platform> {
        self.platforms.iter()
    }

    pub fn as_slice(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn clear(&mut self) {
        self.platforms.clear();
        self.topmost = None;
    }

    fn recompute_topmost(&mut self) {
        self.topmost = self
            .platforms
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.pos.y.total_cmp(&b.pos.y))
            .map(|(i, _)| i);
    }
}

impl<'a> IntoIterator for &'a PlatformRegistry {
    type Item = &'a Platform;
    type IntoIter = std::slice::Iter<'a, Platform>;

    fn into_iter(self) -> Self::IntoIter {
        self.platforms.iter()
    }
}
