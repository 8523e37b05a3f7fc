//! Host platform conventions that affect wheel mapping

/// Platform family reported by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    /// macOS / iOS: the OS already turns shift+wheel into horizontal scroll
    Apple,
    /// Everything else
    #[default]
    Other,
}

impl Platform {
    /// Detect from a `navigator.platform` style string
    pub fn from_navigator(platform: &str) -> Self {
        const APPLE: [&str; 4] = ["Mac", "iPod", "iPhone", "iPad"];
        if APPLE.iter().any(|needle| platform.contains(needle)) {
            Platform::Apple
        } else {
            Platform::Other
        }
    }

    #[inline]
    pub fn is_apple(self) -> bool {
        self == Platform::Apple
    }
}
