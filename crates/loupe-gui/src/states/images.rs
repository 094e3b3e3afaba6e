use std::path::PathBuf;

use loupe_core::error::Result;
use loupe_core::image::{ImageDescriptor, ImageRole, ImageSet};

pub struct LoadedImage {
    pub path: PathBuf,
    pub texture: egui::TextureHandle,
}

impl LoadedImage {
    pub fn size(&self) -> [usize; 2] {
        self.texture.size()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn descriptor(&self) -> ImageDescriptor {
        let [w, h] = self.size();
        ImageDescriptor::new(self.file_name(), self.path.to_string_lossy())
            .with_size(w as f64, h as f64)
    }
}

#[derive(Default)]
pub struct ImageSlots {
    pub base: Option<LoadedImage>,
    pub large: Option<LoadedImage>,
    pub thumbnail: Option<LoadedImage>,
}

impl ImageSlots {
    pub fn get(&self, role: ImageRole) -> Option<&LoadedImage> {
        match role {
            ImageRole::Base => self.base.as_ref(),
            ImageRole::Large => self.large.as_ref(),
            ImageRole::Thumbnail => self.thumbnail.as_ref(),
        }
    }

    pub fn set(&mut self, role: ImageRole, image: LoadedImage) {
        let slot = match role {
            ImageRole::Base => &mut self.base,
            ImageRole::Large => &mut self.large,
            ImageRole::Thumbnail => &mut self.thumbnail,
        };
        *slot = Some(image);
    }

    /// `None` until both the base and large images are loaded.
    pub fn to_image_set(&self) -> Option<Result<ImageSet>> {
        let base = self.base.as_ref()?.descriptor();
        let large = self.large.as_ref()?.descriptor();
        let thumbnail = self.thumbnail.as_ref().map(LoadedImage::descriptor);
        Some(ImageSet::new(base, large, thumbnail))
    }

    /// Texture drawn in the overview map.
    pub fn map_texture(&self) -> Option<&egui::TextureHandle> {
        self.thumbnail
            .as_ref()
            .or(self.base.as_ref())
            .map(|i| &i.texture)
    }
}
