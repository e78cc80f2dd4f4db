// SPDX-License-Identifier: MPL-2.0
//! Video channel selection types.
//!
//! The console shows exactly one of four pre-recorded feeds at a time. Each
//! channel maps 1:1 to a file path; the mapping is fixed once built and only
//! the active channel changes at runtime.

use std::path::{Path, PathBuf};

/// One of the four selectable video feeds, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VideoChannel {
    /// RGB-D camera feed.
    #[default]
    RgbD,
    /// 3D LiDAR visualization.
    Lidar,
    /// Top-down 2D trajectory plot.
    Trajectory2D,
    /// 3D trajectory rendering.
    Trajectory3D,
}

impl VideoChannel {
    /// All channels, indexed the way the selector presents them.
    pub const ALL: [VideoChannel; 4] = [
        VideoChannel::RgbD,
        VideoChannel::Lidar,
        VideoChannel::Trajectory2D,
        VideoChannel::Trajectory3D,
    ];

    /// Returns the channel at `index`, or `None` outside `0..=3`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this channel in [`VideoChannel::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            VideoChannel::RgbD => 0,
            VideoChannel::Lidar => 1,
            VideoChannel::Trajectory2D => 2,
            VideoChannel::Trajectory3D => 3,
        }
    }

    /// Localization key for the selector label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            VideoChannel::RgbD => "channel-rgbd",
            VideoChannel::Lidar => "channel-lidar",
            VideoChannel::Trajectory2D => "channel-trajectory-2d",
            VideoChannel::Trajectory3D => "channel-trajectory-3d",
        }
    }
}

/// Placeholder paths used until real recordings are configured.
pub mod default_paths {
    pub const RGBD: &str = "path/to/rgb_camera_feed.mp4";
    pub const LIDAR: &str = "path/to/lidar_visualization.mp4";
    pub const TRAJECTORY_2D: &str = "path/to/trajectory_2d.mp4";
    pub const TRAJECTORY_3D: &str = "path/to/trajectory_3d.mp4";
}

/// Channel-to-file table. Paths are never validated or opened here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSources {
    paths: [PathBuf; 4],
}

impl ChannelSources {
    /// Builds the table from paths given in [`VideoChannel::ALL`] order.
    #[must_use]
    pub fn new(paths: [PathBuf; 4]) -> Self {
        Self { paths }
    }

    /// File path backing `channel`.
    #[must_use]
    pub fn path(&self, channel: VideoChannel) -> &Path {
        &self.paths[channel.index()]
    }

    /// Number of entries (always four).
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for ChannelSources {
    fn default() -> Self {
        Self::new([
            PathBuf::from(default_paths::RGBD),
            PathBuf::from(default_paths::LIDAR),
            PathBuf::from(default_paths::TRAJECTORY_2D),
            PathBuf::from(default_paths::TRAJECTORY_3D),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_covers_selector_order() {
        assert_eq!(VideoChannel::from_index(0), Some(VideoChannel::RgbD));
        assert_eq!(VideoChannel::from_index(1), Some(VideoChannel::Lidar));
        assert_eq!(VideoChannel::from_index(2), Some(VideoChannel::Trajectory2D));
        assert_eq!(VideoChannel::from_index(3), Some(VideoChannel::Trajectory3D));
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(VideoChannel::from_index(4), None);
        assert_eq!(VideoChannel::from_index(usize::MAX), None);
    }

    #[test]
    fn index_is_inverse_of_from_index() {
        for (i, channel) in VideoChannel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
            assert_eq!(VideoChannel::from_index(i), Some(*channel));
        }
    }

    #[test]
    fn default_sources_use_placeholder_paths() {
        let sources = ChannelSources::default();
        assert_eq!(
            sources.path(VideoChannel::RgbD),
            Path::new("path/to/rgb_camera_feed.mp4")
        );
        assert_eq!(
            sources.path(VideoChannel::Trajectory3D),
            Path::new("path/to/trajectory_3d.mp4")
        );
        assert_eq!(sources.len(), 4);
    }

    #[test]
    fn label_keys_are_distinct() {
        let mut keys: Vec<_> = VideoChannel::ALL.iter().map(|c| c.label_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }
}
