use crate::media::ColorScheme;

/// Ask the operating system for its light/dark preference
///
/// Returns `None` when the platform reports no preference or detection
/// fails.
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(ColorScheme::Dark),
        Ok(dark_light::Mode::Light) => Some(ColorScheme::Light),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!("system color scheme detection failed: {}", err);
            None
        }
    }
}
