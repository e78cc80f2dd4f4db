// SPDX-License-Identifier: MPL-2.0
//! Exclusive choice between the four video channels.

use super::controller::PlaybackController;
use crate::diagnostics::{TraceEvent, TraceLog};
use crate::domain::{ChannelSources, VideoChannel};
use std::path::Path;

/// Whether a selection also swaps the engine's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceLoading {
    /// Record and trace the selection only; the engine keeps its source.
    #[default]
    Deferred,
    /// Forward the channel's path to the engine on every selection.
    Immediate,
}

/// Tracks the active channel. Exactly one channel is active at a time.
#[derive(Debug, Clone)]
pub struct VideoSourceSelector {
    sources: ChannelSources,
    active: VideoChannel,
    loading: SourceLoading,
}

impl VideoSourceSelector {
    #[must_use]
    pub fn new(sources: ChannelSources, active: VideoChannel, loading: SourceLoading) -> Self {
        Self {
            sources,
            active,
            loading,
        }
    }

    #[must_use]
    pub fn active(&self) -> VideoChannel {
        self.active
    }

    #[must_use]
    pub fn active_path(&self) -> &Path {
        self.sources.path(self.active)
    }

    #[must_use]
    pub fn sources(&self) -> &ChannelSources {
        &self.sources
    }

    #[must_use]
    pub fn loading(&self) -> SourceLoading {
        self.loading
    }

    /// Makes `channel` active and traces its path.
    pub fn select(
        &mut self,
        channel: VideoChannel,
        controller: &mut PlaybackController,
        trace: &mut TraceLog,
    ) {
        self.active = channel;
        let path = self.sources.path(channel);
        trace.record(TraceEvent::ChannelSelected {
            path: path.to_path_buf(),
        });
        if self.loading == SourceLoading::Immediate {
            controller.load_source(path);
        }
    }

    /// Selects by selector position. Indices outside `0..=3` are ignored.
    ///
    /// Returns whether a selection happened.
    pub fn select_index(
        &mut self,
        index: usize,
        controller: &mut PlaybackController,
        trace: &mut TraceLog,
    ) -> bool {
        match VideoChannel::from_index(index) {
            Some(channel) => {
                self.select(channel, controller, trace);
                true
            }
            None => false,
        }
    }
}

impl Default for VideoSourceSelector {
    fn default() -> Self {
        Self::new(
            ChannelSources::default(),
            VideoChannel::default(),
            SourceLoading::default(),
        )
    }
}
