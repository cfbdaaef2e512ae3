//! Supported device models
//!
//! One constant per model. Each is gated by a cargo feature so a build
//! carries only the models it actually drives; a disabled model leaves
//! no trace in the artifact.

#[cfg(any(
    feature = "monitor",
    feature = "ssd1963",
    feature = "ssd1306",
    feature = "r61581"
))]
use crate::panel::{BusSupport, ColorDepth, Orientation, PanelConfig};
#[cfg(any(feature = "ssd1963", feature = "r61581"))]
use crate::panel::{AxisTiming, PanelTiming};
#[cfg(feature = "fbdev")]
use crate::panel::FbdevConfig;
#[cfg(feature = "ft5406ee8")]
use crate::input::CapacitiveTouchConfig;
#[cfg(feature = "xpt2046")]
use crate::input::ResistiveTouchConfig;

/// Display models compiled into this build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayModel {
    /// PC monitor window (simulator)
    #[cfg(feature = "monitor")]
    Monitor,
    #[cfg(feature = "ssd1963")]
    Ssd1963,
    #[cfg(feature = "ssd1306")]
    Ssd1306,
    #[cfg(feature = "r61581")]
    R61581,
    /// Monochrome low-res controller; carries no configuration
    #[cfg(feature = "st7565")]
    St7565,
    /// Linux framebuffer device
    #[cfg(feature = "fbdev")]
    Fbdev,
}

/// Input device models compiled into this build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputModel {
    /// Resistive touch over SPI
    #[cfg(feature = "xpt2046")]
    Xpt2046,
    /// Capacitive touch over I2C
    #[cfg(feature = "ft5406ee8")]
    Ft5406ee8,
    /// PC mouse (simulator); carries no configuration
    #[cfg(feature = "mouse")]
    Mouse,
    /// PC keyboard (simulator); carries no configuration
    #[cfg(feature = "keyboard")]
    Keyboard,
}

/// PC monitor window used by the simulator backend
#[cfg(feature = "monitor")]
pub const MONITOR: PanelConfig = PanelConfig {
    hor_res: 480,
    ver_res: 320,
    timing: None,
    orientation: Orientation::Deg0,
    color_depth: ColorDepth::Rgb565,
    bus: BusSupport::NONE,
};

/// SSD1963 TFT controller, 480x272 panel over the parallel port
#[cfg(feature = "ssd1963")]
pub const SSD1963: PanelConfig = PanelConfig {
    hor_res: 480,
    ver_res: 272,
    timing: Some(PanelTiming {
        h: AxisTiming {
            display_period: 479,
            total: 531,
            sync_start: 43,
            display_start: 8,
            pulse_width: 10,
            negative_sync: false,
        },
        v: AxisTiming {
            display_period: 271,
            total: 288,
            sync_start: 12,
            display_start: 4,
            pulse_width: 10,
            negative_sync: false,
        },
    }),
    orientation: Orientation::Deg0,
    color_depth: ColorDepth::Rgb565,
    bus: BusSupport::PARALLEL,
};

/// SSD1306 monochrome OLED, attachable over I2C or 3/4-wire SPI
#[cfg(feature = "ssd1306")]
pub const SSD1306: PanelConfig = PanelConfig {
    hor_res: 128,
    ver_res: 64,
    timing: None,
    orientation: Orientation::Deg0,
    color_depth: ColorDepth::Mono,
    bus: BusSupport {
        i2c: true,
        spi4: true,
        spi3: true,
        parallel: false,
        manual_dc: true,
        manual_cs: true,
    },
};

/// R61581 TFT controller, 480x320 panel over the parallel port
#[cfg(feature = "r61581")]
pub const R61581: PanelConfig = PanelConfig {
    hor_res: 480,
    ver_res: 320,
    timing: Some(PanelTiming {
        h: AxisTiming {
            display_period: 479,
            total: 531,
            sync_start: 43,
            display_start: 8,
            pulse_width: 10,
            negative_sync: false,
        },
        v: AxisTiming {
            display_period: 271,
            total: 319,
            sync_start: 12,
            display_start: 4,
            pulse_width: 10,
            negative_sync: false,
        },
    }),
    orientation: Orientation::Deg180,
    color_depth: ColorDepth::Rgb565,
    bus: BusSupport::PARALLEL,
};

/// Linux framebuffer at the conventional device node
#[cfg(feature = "fbdev")]
pub const FBDEV: FbdevConfig = FbdevConfig { path: "/dev/fb0" };

/// XPT2046 resistive touch on a 480x320 panel
#[cfg(feature = "xpt2046")]
pub const XPT2046: ResistiveTouchConfig = ResistiveTouchConfig {
    hor_res: 480,
    ver_res: 320,
    x_min: 200,
    y_min: 200,
    x_max: 3800,
    y_max: 3800,
    samples: 4,
    invert: false,
};

/// FT5406EE8 capacitive touch controller
#[cfg(feature = "ft5406ee8")]
pub const FT5406EE8: CapacitiveTouchConfig = CapacitiveTouchConfig { i2c_address: 0x38 };

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[cfg(feature = "ssd1306")]
    #[test]
    fn test_ssd1306_record() {
        assert!(SSD1306.is_consistent());
        assert_eq!(SSD1306.color_depth, ColorDepth::Mono);
        assert!(SSD1306.bus.i2c && SSD1306.bus.spi4 && SSD1306.bus.spi3);
        assert!(SSD1306.bus.manual_dc && SSD1306.bus.manual_cs);
    }

    #[cfg(feature = "ssd1963")]
    #[test]
    fn test_ssd1963_timing_fits_totals() {
        assert!(SSD1963.is_consistent());
        let t = SSD1963.timing.unwrap();
        assert_eq!(t.h.total, 531);
        assert_eq!(t.v.total, 288);
    }

    #[cfg(feature = "r61581")]
    #[test]
    fn test_r61581_record() {
        assert!(R61581.is_consistent());
        assert_eq!(R61581.orientation, Orientation::Deg180);
        assert_eq!(R61581.timing.unwrap().v.total, 319);
    }

    #[cfg(feature = "xpt2046")]
    #[test]
    fn test_xpt2046_record() {
        assert!(XPT2046.is_consistent());
        assert_eq!((XPT2046.x_min, XPT2046.x_max), (200, 3800));
        assert_eq!(XPT2046.samples, 4);
    }

    #[cfg(feature = "ft5406ee8")]
    #[test]
    fn test_ft5406ee8_record() {
        assert!(FT5406EE8.is_consistent());
        assert_eq!(FT5406EE8.i2c_address, 0x38);
    }

    #[cfg(feature = "fbdev")]
    #[test]
    fn test_fbdev_default_node() {
        assert_eq!(FBDEV.path, "/dev/fb0");
    }
}
