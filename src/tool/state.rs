use std::num::NonZeroU32;

use crate::error::{SketchError, SketchResult};

/// Which kind of mark the next pointer-down creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    Marker,
    Sticker,
}

/// A tool button in the tools panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolControl {
    ThinMarker,
    ThickMarker,
    /// Palette index of the sticker button
    Sticker(usize),
}

/// The selected tool: a marker of some thickness, or a sticker glyph, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolState {
    Marker { thickness: NonZeroU32 },
    Sticker { glyph: String },
}

impl Default for ToolState {
    fn default() -> Self {
        Self::Marker {
            thickness: NonZeroU32::MIN,
        }
    }
}

impl ToolState {
    pub fn marker(thickness: NonZeroU32) -> Self {
        Self::Marker { thickness }
    }

    /// Switch to the marker, dropping any sticker selection
    pub fn select_thickness(&mut self, thickness: u32) -> SketchResult<()> {
        let thickness = NonZeroU32::new(thickness).ok_or(SketchError::ZeroThickness)?;
        log::info!("Marker selected: thickness {}", thickness);
        *self = Self::Marker { thickness };
        Ok(())
    }

    /// Switch to a sticker, dropping the marker selection
    pub fn select_sticker(&mut self, glyph: &str) -> SketchResult<()> {
        if glyph.trim().is_empty() {
            return Err(SketchError::EmptyGlyph);
        }
        log::info!("Sticker selected: {}", glyph);
        *self = Self::Sticker {
            glyph: glyph.to_owned(),
        };
        Ok(())
    }

    pub fn current_mode(&self) -> ToolMode {
        match self {
            Self::Marker { .. } => ToolMode::Marker,
            Self::Sticker { .. } => ToolMode::Sticker,
        }
    }

    pub fn thickness(&self) -> Option<NonZeroU32> {
        match self {
            Self::Marker { thickness } => Some(*thickness),
            Self::Sticker { .. } => None,
        }
    }

    pub fn sticker(&self) -> Option<&str> {
        match self {
            Self::Sticker { glyph } => Some(glyph),
            Self::Marker { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_mutually_exclusive() {
        let mut tool = ToolState::default();
        assert_eq!(tool.current_mode(), ToolMode::Marker);

        tool.select_sticker("🥶").unwrap();
        assert_eq!(tool.current_mode(), ToolMode::Sticker);
        assert_eq!(tool.sticker(), Some("🥶"));
        assert_eq!(tool.thickness(), None);

        tool.select_thickness(7).unwrap();
        assert_eq!(tool.current_mode(), ToolMode::Marker);
        assert_eq!(tool.thickness().map(NonZeroU32::get), Some(7));
        assert_eq!(tool.sticker(), None);
    }

    #[test]
    fn test_invalid_selection_keeps_current_tool() {
        let mut tool = ToolState::default();
        tool.select_sticker("👊").unwrap();

        assert!(matches!(tool.select_thickness(0), Err(SketchError::ZeroThickness)));
        assert!(matches!(tool.select_sticker("  "), Err(SketchError::EmptyGlyph)));
        assert_eq!(tool.sticker(), Some("👊"));
    }
}
