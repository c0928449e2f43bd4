/// The sticker glyphs offered as tools, in button order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickerPalette {
    stickers: Vec<String>,
}

impl StickerPalette {
    /// Seed the palette, skipping blank and repeated entries
    pub fn new<I, S>(stickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut palette = Self::default();
        for sticker in stickers {
            palette.insert(sticker.as_ref());
        }
        palette
    }

    /// Register the answer of the custom sticker dialog.
    ///
    /// `None` means the dialog was cancelled. Cancelled or blank answers leave
    /// the palette unchanged. Returns the index of the sticker's button.
    pub fn add_custom(&mut self, response: Option<&str>) -> Option<usize> {
        let Some(index) = response.and_then(|text| self.insert(text)) else {
            log::debug!("Custom sticker dialog dismissed without a sticker");
            return None;
        };
        log::info!("Custom sticker available: {}", self.stickers[index]);
        Some(index)
    }

    fn insert(&mut self, text: &str) -> Option<usize> {
        let glyph = text.trim();
        if glyph.is_empty() {
            return None;
        }
        if let Some(existing) = self.position(glyph) {
            return Some(existing);
        }
        self.stickers.push(glyph.to_owned());
        Some(self.stickers.len() - 1)
    }

    pub fn position(&self, glyph: &str) -> Option<usize> {
        self.stickers.iter().position(|s| s == glyph)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.stickers.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stickers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }
}
