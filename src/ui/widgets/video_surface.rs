// SPDX-License-Identifier: MPL-2.0
//! Slot holding the video area of the console.
//!
//! The layout is built with a placeholder frame in the video position. Once
//! at startup the placeholder is swapped for a [`VideoSurface`] of the same
//! size, and the surface's id is handed to the playback engine as its output.
//! The slot stays at the same place in the layout tree, so the swap never
//! moves surrounding widgets.

use crate::playback::SurfaceId;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, text};
use iced::{Element, Length, Size};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

fn next_surface_id() -> SurfaceId {
    SurfaceId(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed))
}

/// Render target the playback engine draws into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoSurface {
    id: SurfaceId,
    geometry: Size,
}

impl VideoSurface {
    #[must_use]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    #[must_use]
    pub fn geometry(&self) -> Size {
        self.geometry
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceSlot {
    /// Empty frame reserved by the layout.
    Placeholder { geometry: Size },
    /// The substituted video output.
    Video(VideoSurface),
}

impl SurfaceSlot {
    #[must_use]
    pub fn placeholder(geometry: Size) -> Self {
        Self::Placeholder { geometry }
    }

    #[must_use]
    pub fn geometry(&self) -> Size {
        match self {
            Self::Placeholder { geometry } => *geometry,
            Self::Video(surface) => surface.geometry,
        }
    }

    #[must_use]
    pub fn surface_id(&self) -> Option<SurfaceId> {
        match self {
            Self::Placeholder { .. } => None,
            Self::Video(surface) => Some(surface.id),
        }
    }

    #[must_use]
    pub fn is_substituted(&self) -> bool {
        matches!(self, Self::Video(_))
    }

    /// Replaces the placeholder with a video surface of identical geometry.
    ///
    /// Calling this again keeps the existing surface and returns its id.
    pub fn substitute_video_surface(&mut self) -> SurfaceId {
        match self {
            Self::Video(surface) => surface.id,
            Self::Placeholder { geometry } => {
                let surface = VideoSurface {
                    id: next_surface_id(),
                    geometry: *geometry,
                };
                tracing::debug!(
                    target: "rover_console::engine",
                    surface = surface.id.0,
                    width = geometry.width,
                    height = geometry.height,
                    "video surface substituted"
                );
                *self = Self::Video(surface);
                surface.id
            }
        }
    }

    /// Renders the slot at its fixed geometry.
    pub fn view<'a, Message: 'a>(
        &self,
        caption: String,
        channel_label: String,
    ) -> Element<'a, Message> {
        let geometry = self.geometry();
        let frame = match self {
            Self::Placeholder { .. } => container(text(""))
                .style(styles::container::placeholder),
            Self::Video(_) => container(
                column![
                    text(channel_label).size(typography::TITLE_SM),
                    text(caption).size(typography::CAPTION),
                ]
                .spacing(spacing::XXS)
                .align_x(iced::Alignment::Center),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::video_surface),
        };

        container(frame.width(Length::Fill).height(Length::Fill))
            .width(Length::Fixed(geometry.width))
            .height(Length::Fixed(geometry.height))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: Size = Size::new(640.0, 360.0);

    #[test]
    fn placeholder_has_no_surface() {
        let slot = SurfaceSlot::placeholder(GEOMETRY);
        assert!(!slot.is_substituted());
        assert_eq!(slot.surface_id(), None);
    }

    #[test]
    fn substitution_preserves_geometry() {
        let mut slot = SurfaceSlot::placeholder(GEOMETRY);
        let id = slot.substitute_video_surface();

        assert!(slot.is_substituted());
        assert_eq!(slot.geometry(), GEOMETRY);
        assert_eq!(slot.surface_id(), Some(id));
    }

    #[test]
    fn second_substitution_is_a_no_op() {
        let mut slot = SurfaceSlot::placeholder(GEOMETRY);
        let first = slot.substitute_video_surface();
        let before = slot;
        let second = slot.substitute_video_surface();

        assert_eq!(first, second);
        assert_eq!(slot, before);
    }

    #[test]
    fn separate_slots_get_distinct_surfaces() {
        let mut a = SurfaceSlot::placeholder(GEOMETRY);
        let mut b = SurfaceSlot::placeholder(GEOMETRY);
        assert_ne!(a.substitute_video_surface(), b.substitute_video_surface());
    }
}
