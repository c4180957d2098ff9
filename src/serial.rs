//! Serial driver seam.
//!
//! The UART peripheral itself lives in the host firmware; this crate only
//! needs to configure it once and pull already-received bytes out of its
//! FIFO during a consumption pass.

/// UART parameters applied at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Baud rate in bits per second.
    pub baud_rate: u32,
    /// Data bits per character.
    pub data_bits: u8,
}

impl SerialConfig {
    /// 8 data bits at the given baud rate.
    #[must_use]
    pub const fn new(baud_rate: u32) -> Self {
        Self {
            baud_rate,
            data_bits: 8,
        }
    }
}

impl Default for SerialConfig {
    /// 9600 8N1, the usual NMEA receiver default.
    fn default() -> Self {
        Self::new(9600)
    }
}

/// Abstraction over the host's UART driver.
///
/// Implementations must not block waiting for data: `read` drains at most
/// `buf.len()` bytes that the peripheral has already received and returns
/// how many were copied. The "bytes available" notification travels
/// out-of-band through [`RxPending::notify`](crate::receiver::RxPending::notify).
pub trait SerialPort {
    /// Driver error, surfaced unchanged through
    /// [`GpsReceiver`](crate::receiver::GpsReceiver).
    type Error;

    /// Apply the UART configuration. Called once during initialization;
    /// a rejected configuration aborts GPS bring-up.
    fn configure(&mut self, config: &SerialConfig) -> Result<(), Self::Error>;

    /// Copy up to `buf.len()` already-received bytes into `buf`, returning
    /// the number copied.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}
