//! Input tree categories and their path conventions.

/// Character separating directory components in a relative asset path.
///
/// Listed assets (icons, images, audio, data) carry the platform listing
/// convention `\`; names declared inside the dependency manifest use `/`.
/// Output paths are always joined with `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    Backslash,
    Slash,
}

impl Separator {
    pub const fn as_char(self) -> char {
        match self {
            Self::Backslash => '\\',
            Self::Slash => '/',
        }
    }
}

/// Sub-tree of the input (and output) project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Application icons - required
    Icon,
    /// Images - optional
    Img,
    /// Audio clips - optional
    Audio,
    /// JSON data and arbitrary data files
    Data,
    /// Scripts, including `js/libs/<name>/`
    Js,
    /// Declared GLSL shaders
    Shaders,
}

impl Category {
    /// Directory name under both the input and output roots.
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::Img => "img",
            Self::Audio => "audio",
            Self::Data => "data",
            Self::Js => "js",
            Self::Shaders => "shaders",
        }
    }

    /// Separator used by relative paths of this category.
    pub const fn separator(self) -> Separator {
        match self {
            Self::Icon | Self::Img | Self::Audio | Self::Data => Separator::Backslash,
            Self::Js | Self::Shaders => Separator::Slash,
        }
    }

    /// Extension forced onto declared names of this category.
    pub const fn forced_extension(self) -> &'static str {
        match self {
            Self::Js => ".js",
            Self::Shaders => ".glsl",
            Self::Icon | Self::Img | Self::Audio | Self::Data => "",
        }
    }

    /// Whether an absent input directory counts as zero assets.
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Img | Self::Audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_categories_use_backslash() {
        for category in [Category::Icon, Category::Img, Category::Audio, Category::Data] {
            assert_eq!(category.separator(), Separator::Backslash);
            assert_eq!(category.forced_extension(), "");
        }
    }

    #[test]
    fn test_declared_categories_force_extension() {
        assert_eq!(Category::Js.forced_extension(), ".js");
        assert_eq!(Category::Shaders.forced_extension(), ".glsl");
        assert_eq!(Category::Shaders.separator().as_char(), '/');
    }

    #[test]
    fn test_only_media_is_optional() {
        assert!(Category::Img.is_optional());
        assert!(Category::Audio.is_optional());
        assert!(!Category::Icon.is_optional());
        assert!(!Category::Data.is_optional());
    }
}
