use crate::shared::validation::ValidationErrors;
use crate::storage::application::domain::entities::FileUpload;

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub max_photos: usize,
    pub image_mime_types: &'static [&'static str],
    pub audio_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const MAX_FILE_SIZE_MB: usize = 10;
    pub const DEFAULT_IMAGE_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/gif", "image/webp"];
    pub const DEFAULT_AUDIO_MIME_TYPES: &'static [&'static str] = &["audio/mpeg"];

    pub fn new() -> Self {
        Self {
            max_file_size_bytes: Self::MAX_FILE_SIZE_MB * 1024 * 1024,
            max_photos: 5,
            image_mime_types: Self::DEFAULT_IMAGE_MIME_TYPES,
            audio_mime_types: Self::DEFAULT_AUDIO_MIME_TYPES,
        }
    }

    /// Every MIME type a client may upload, images first.
    pub fn allowed_mime_types(&self) -> Vec<&'static str> {
        self.image_mime_types
            .iter()
            .chain(self.audio_mime_types.iter())
            .copied()
            .collect()
    }

    pub fn check_photos(&self, field: &str, files: &[FileUpload]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if files.len() > self.max_photos {
            errors.add(field, "Too many files uploaded.");
            return Err(errors);
        }

        for file in files {
            self.check_file(&mut errors, field, file, self.image_mime_types, "Only image files are allowed");
        }

        errors.into_result()
    }

    pub fn check_audio(&self, field: &str, file: &FileUpload) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.check_file(&mut errors, field, file, self.audio_mime_types, "Only MP3 audio files are allowed");
        errors.into_result()
    }

    fn check_file(
        &self,
        errors: &mut ValidationErrors,
        field: &str,
        file: &FileUpload,
        allowed: &[&str],
        type_message: &str,
    ) {
        if file.size() > self.max_file_size_bytes {
            errors.add(
                field,
                format!("File too large. Maximum size is {}MB.", Self::MAX_FILE_SIZE_MB),
            );
        }

        let content_type = file.content_type.to_lowercase();
        if !allowed.contains(&content_type.as_str()) {
            errors.add(field, type_message);
        }
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new()
    }
}
