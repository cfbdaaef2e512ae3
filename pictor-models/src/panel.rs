//! Panel configuration records
//!
//! One uniform shape for every display controller: resolution, optional
//! sync timing, orientation, color depth and the buses the controller
//! can be attached over.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Panel mounting orientation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

/// Framebuffer color depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorDepth {
    /// 1 bit per pixel monochrome
    Mono,
    /// 16 bit RGB565
    #[default]
    Rgb565,
    /// 24 bit RGB888
    Rgb888,
}

impl ColorDepth {
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            ColorDepth::Mono => 1,
            ColorDepth::Rgb565 => 16,
            ColorDepth::Rgb888 => 24,
        }
    }
}

/// Buses a controller can be attached over, plus the control lines the
/// driver must toggle manually on this wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusSupport {
    pub i2c: bool,
    /// 4-wire SPI (dedicated data/command line)
    pub spi4: bool,
    /// 3-wire SPI (data/command bit clocked in-band)
    pub spi3: bool,
    pub parallel: bool,
    /// Driver drives the data/command line through GPIO
    pub manual_dc: bool,
    /// Driver drives chip select through GPIO
    pub manual_cs: bool,
}

impl BusSupport {
    pub const NONE: Self = Self {
        i2c: false,
        spi4: false,
        spi3: false,
        parallel: false,
        manual_dc: false,
        manual_cs: false,
    };

    pub const PARALLEL: Self = Self {
        i2c: false,
        spi4: false,
        spi3: false,
        parallel: true,
        manual_dc: false,
        manual_cs: false,
    };
}

/// Sync timing for one axis, in pixel clocks (horizontal) or lines
/// (vertical)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisTiming {
    /// Active display period
    pub display_period: u16,
    /// Total period including blanking
    pub total: u16,
    /// Sync pulse start position
    pub sync_start: u16,
    /// Display area start position
    pub display_start: u16,
    /// Sync pulse width
    pub pulse_width: u16,
    /// Sync pulse is active-low
    pub negative_sync: bool,
}

impl AxisTiming {
    /// Both the sync pulse and the display window must fit inside the
    /// total period
    pub const fn is_consistent(&self) -> bool {
        self.sync_start as u32 + self.pulse_width as u32 <= self.total as u32
            && self.display_start as u32 + self.display_period as u32 <= self.total as u32
    }
}

/// Horizontal and vertical sync timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelTiming {
    pub h: AxisTiming,
    pub v: AxisTiming,
}

impl PanelTiming {
    pub const fn is_consistent(&self) -> bool {
        self.h.is_consistent() && self.v.is_consistent()
    }
}

/// Complete configuration of one display panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Active width in pixels
    pub hor_res: u16,
    /// Active height in pixels
    pub ver_res: u16,
    /// Sync timing; `None` for controllers that manage their own scan
    pub timing: Option<PanelTiming>,
    pub orientation: Orientation,
    pub color_depth: ColorDepth,
    pub bus: BusSupport,
}

impl PanelConfig {
    /// Check internal consistency of the record
    pub const fn is_consistent(&self) -> bool {
        self.hor_res > 0
            && self.ver_res > 0
            && match self.timing {
                Some(t) => t.is_consistent(),
                None => true,
            }
    }
}

/// Linux framebuffer device configuration
///
/// Serialize-only under `serde`: the path is borrowed for the life of
/// the program, not owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FbdevConfig {
    /// Device node path
    pub path: &'static str,
}
