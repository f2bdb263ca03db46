//! Detection settings.
//!
//! An immutable configuration snapshot passed explicitly into every call.
//! There is no process-wide state; two concurrent invocations with different
//! settings never observe each other.

/// Native resolution of document-space coordinates, in dots per inch.
///
/// Document coordinate systems are defined at 72 DPI; rectangles detected on
/// a raster rendered at `rendering_dpi` are scaled back by
/// `NATIVE_DPI / rendering_dpi` before text regions are registered.
pub const NATIVE_DPI: u32 = 72;

/// Settings controlling grid detection and coordinate mapping.
///
/// Construct with [`DetectionSettings::default`] or via
/// [`DetectionSettings::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionSettings {
    /// Resolution at which pages are rendered to raster, in dots per inch.
    pub rendering_dpi: u32,

    /// Binary-inverted threshold cutoff. Pixels with intensity at or below
    /// this value become `bit_max_val`, all others become 0.
    pub bit_threshold: u8,

    /// Value assigned to pixels selected by the inverted threshold.
    pub bit_max_val: u8,

    /// Use a Canny edge map instead of the thresholded mask when tracing
    /// contours.
    pub canny_enabled: bool,

    /// Lower hysteresis threshold for Canny filtering.
    pub canny_threshold1: f32,

    /// Upper hysteresis threshold for Canny filtering.
    pub canny_threshold2: f32,

    /// Sobel aperture size carried for configuration parity; the edge
    /// detector in use has a fixed 3x3 aperture.
    pub canny_aperture_size: u32,

    /// L2 gradient norm flag carried for configuration parity.
    pub canny_l2_gradient: bool,

    /// Polygon approximation epsilon, as a fraction of contour perimeter.
    pub approx_epsilon_scale: f64,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            rendering_dpi: 120,
            bit_threshold: 150,
            bit_max_val: 255,
            canny_enabled: false,
            canny_threshold1: 50.0,
            canny_threshold2: 200.0,
            canny_aperture_size: 3,
            canny_l2_gradient: false,
            approx_epsilon_scale: 0.02,
        }
    }
}

impl DetectionSettings {
    /// Returns a builder initialized with default values.
    pub fn builder() -> DetectionSettingsBuilder {
        DetectionSettingsBuilder::new()
    }

    /// Scale factor from rendered pixel space back to document space.
    pub fn dpi_ratio(&self) -> f64 {
        f64::from(NATIVE_DPI) / f64::from(self.rendering_dpi)
    }
}

/// A builder for [`DetectionSettings`].
#[derive(Debug, Clone, Default)]
pub struct DetectionSettingsBuilder {
    settings: DetectionSettings,
}

impl DetectionSettingsBuilder {
    pub fn new() -> Self {
        Self {
            settings: DetectionSettings::default(),
        }
    }

    /// Sets the page rendering resolution in dots per inch.
    pub fn rendering_dpi(mut self, dpi: u32) -> Self {
        self.settings.rendering_dpi = dpi;
        self
    }

    /// Sets the binary-inverted threshold cutoff.
    pub fn bit_threshold(mut self, threshold: u8) -> Self {
        self.settings.bit_threshold = threshold;
        self
    }

    /// Sets the value assigned to thresholded pixels.
    pub fn bit_max_val(mut self, max_val: u8) -> Self {
        self.settings.bit_max_val = max_val;
        self
    }

    /// Enables or disables Canny edge filtering before contour tracing.
    pub fn canny_enabled(mut self, enabled: bool) -> Self {
        self.settings.canny_enabled = enabled;
        self
    }

    /// Sets the lower Canny hysteresis threshold.
    pub fn canny_threshold1(mut self, threshold: f32) -> Self {
        self.settings.canny_threshold1 = threshold;
        self
    }

    /// Sets the upper Canny hysteresis threshold.
    pub fn canny_threshold2(mut self, threshold: f32) -> Self {
        self.settings.canny_threshold2 = threshold;
        self
    }

    /// Sets the Sobel aperture size (kept for configuration parity).
    pub fn canny_aperture_size(mut self, size: u32) -> Self {
        self.settings.canny_aperture_size = size;
        self
    }

    /// Sets the L2 gradient flag (kept for configuration parity).
    pub fn canny_l2_gradient(mut self, l2: bool) -> Self {
        self.settings.canny_l2_gradient = l2;
        self
    }

    /// Sets the polygon approximation epsilon scale factor.
    pub fn approx_epsilon_scale(mut self, scale: f64) -> Self {
        self.settings.approx_epsilon_scale = scale;
        self
    }

    /// Consumes the builder and returns the settings.
    pub fn build(self) -> DetectionSettings {
        self.settings
    }
}
