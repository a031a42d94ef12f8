//! Crate error type

/// Errors raised while deriving or drawing the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Formatted text does not fit into its label
    LabelOverflow,
    /// Clock arithmetic left the representable range
    InvalidTime,
    /// ADC sample outside the 12 bit range
    InvalidMeasurement,
    /// The display driver rejected a draw call
    Draw,
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Error::LabelOverflow
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::LabelOverflow => f.write_str("label text overflow"),
            Error::InvalidTime => f.write_str("time out of range"),
            Error::InvalidMeasurement => f.write_str("invalid ADC measurement"),
            Error::Draw => f.write_str("display draw failed"),
        }
    }
}
