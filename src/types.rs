use std::fmt;

/// Direction of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipDirection {
    #[default]
    Next,
    Previous,
}

impl FlipDirection {
    /// Signed page delta for a single turn in this direction.
    pub const fn delta(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

impl fmt::Display for FlipDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("previous"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Avif,
    Png,
    Webp,
    Jxl,
    Bmp,
    Gif,
    Tiff,
    Jpg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoFormat {
    Mp4,
    Webm,
    Mov,
}

/// What an asset reference on a page points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image(ImageFormat),
    Video(VideoFormat),
    /// An http(s) URL whose extension could not be classified.
    Remote,
    Unknown,
}

impl MediaKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "png" => Self::Image(ImageFormat::Png),
            "jpg" | "jpeg" => Self::Image(ImageFormat::Jpg),
            "avif" => Self::Image(ImageFormat::Avif),
            "webp" => Self::Image(ImageFormat::Webp),
            "jxl" => Self::Image(ImageFormat::Jxl),
            "bmp" => Self::Image(ImageFormat::Bmp),
            "gif" => Self::Image(ImageFormat::Gif),
            "tiff" | "tif" => Self::Image(ImageFormat::Tiff),
            "mp4" | "m4v" => Self::Video(VideoFormat::Mp4),
            "webm" => Self::Video(VideoFormat::Webm),
            "mov" => Self::Video(VideoFormat::Mov),
            _ => Self::Unknown,
        }
    }

    /// Classifies a reference by its extension, ignoring any URL query string.
    pub fn classify(reference: &str) -> Self {
        let path = reference.split(['?', '#']).next().unwrap_or(reference);
        let file_name = path.rsplit('/').next().unwrap_or(path);

        let kind = file_name
            .rsplit_once('.')
            .map(|(_, ext)| Self::from_extension(ext))
            .unwrap_or(Self::Unknown);

        match kind {
            Self::Unknown if is_remote(reference) => Self::Remote,
            other => other,
        }
    }

    pub const fn is_image(self) -> bool {
        matches!(self, Self::Image(_))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Video(_) => "video",
            Self::Remote => "remote",
            Self::Unknown => "unknown",
        }
    }
}

pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use {super::*, assert2::check as assert};

    #[test]
    fn test_from_extension_accepts_leading_dot() {
        assert!(MediaKind::from_extension(".PNG") == MediaKind::Image(ImageFormat::Png));
        assert!(MediaKind::from_extension("jpeg") == MediaKind::Image(ImageFormat::Jpg));
        assert!(MediaKind::from_extension("mp4") == MediaKind::Video(VideoFormat::Mp4));
        assert!(MediaKind::from_extension("txt") == MediaKind::Unknown);
    }

    #[test]
    fn test_classify_strips_query_string() {
        let url = "https://player.example.com/external/373919525.sd.mp4?s=7f73&profile_id=139";
        assert!(MediaKind::classify(url) == MediaKind::Video(VideoFormat::Mp4));
    }

    #[test]
    fn test_classify_remote_without_extension() {
        assert!(MediaKind::classify("https://cdn.example.com/assets/hero") == MediaKind::Remote);
        assert!(MediaKind::classify("images/hero") == MediaKind::Unknown);
    }

    #[test]
    fn test_only_http_schemes_are_remote() {
        assert!(is_remote("http://example.com/a"));
        assert!(!is_remote("ftp://example.com/a"));
        assert!(MediaKind::classify("http://example.com/page") == MediaKind::Remote);
        assert!(MediaKind::classify("ftp://example.com/page") == MediaKind::Unknown);
    }

    #[test]
    fn test_direction_delta() {
        assert!(FlipDirection::Next.delta() == 1);
        assert!(FlipDirection::Previous.delta() == -1);
        assert!(FlipDirection::Previous.to_string() == "previous");
    }
}
