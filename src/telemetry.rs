//! Temperature telemetry over Sigfox.
//!
//! Once per wake-up every sensor on the 1-wire bus is read and its value is
//! sent as its own frame. The board then powers the module down and sleeps
//! in fixed periods until the next cycle.
use embassy_time::Duration;

use crate::asynch::control::Sigfox;
use crate::config::{SigfoxConfig, Transport};
use crate::error::Error;

/// 64-bit ROM code of a 1-wire device.
pub type DeviceAddress = [u8; 8];

/// DS18B20 sensors of the installation, sensor 1 first.
pub const DEFAULT_SENSORS: [DeviceAddress; 7] = [
    [0x28, 0x5F, 0x7F, 0x29, 0x08, 0x00, 0x00, 0xD0],
    [0x28, 0x86, 0x1A, 0x2A, 0x08, 0x00, 0x00, 0xC9],
    [0x28, 0xDC, 0xE7, 0x29, 0x08, 0x00, 0x00, 0xEA],
    [0x28, 0x47, 0xFF, 0x5A, 0x08, 0x00, 0x00, 0xC1],
    [0x28, 0x3B, 0xD1, 0x29, 0x08, 0x00, 0x00, 0x5E],
    [0x28, 0x14, 0xD6, 0x29, 0x08, 0x00, 0x00, 0x9D],
    [0x28, 0xE2, 0xA5, 0x29, 0x08, 0x00, 0x00, 0x7E],
];

/// Temperature sensors on a 1-wire bus.
pub trait TemperatureBus {
    type Error;

    /// Start a conversion on the sensor at `address`.
    async fn request_temperature(&mut self, address: &DeviceAddress) -> Result<(), Self::Error>;

    /// Result of the last conversion, in degrees Celsius.
    async fn temperature_celsius(&mut self, address: &DeviceAddress) -> Result<f32, Self::Error>;
}

/// Watchdog periods the MCU can sleep for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepPeriod {
    Ms250,
    Ms500,
    S1,
    S2,
    S4,
    S8,
}

impl SleepPeriod {
    pub fn duration(self) -> Duration {
        match self {
            SleepPeriod::Ms250 => Duration::from_millis(250),
            SleepPeriod::Ms500 => Duration::from_millis(500),
            SleepPeriod::S1 => Duration::from_secs(1),
            SleepPeriod::S2 => Duration::from_secs(2),
            SleepPeriod::S4 => Duration::from_secs(4),
            SleepPeriod::S8 => Duration::from_secs(8),
        }
    }
}

/// What stays powered while sleeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeripheralState {
    pub adc: bool,
    pub brown_out_detection: bool,
}

impl PeripheralState {
    pub const ALL_OFF: Self = Self {
        adc: false,
        brown_out_detection: false,
    };
}

/// Low power sleep of the board.
pub trait LowPower {
    /// Sleep for one `period`. Parking the board's pins is up to the
    /// implementation.
    async fn power_down(&mut self, period: SleepPeriod, peripherals: PeripheralState);
}

/// Time between two measurement cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Schedule {
    pub period: SleepPeriod,
    pub sleep_cycles: u32,
}

impl Schedule {
    pub fn interval(&self) -> Duration {
        self.period.duration() * self.sleep_cycles
    }
}

impl Default for Schedule {
    /// One cycle a day.
    fn default() -> Self {
        Self {
            period: SleepPeriod::S8,
            sleep_cycles: 10_800,
        }
    }
}

/// Length of an encoded [`TemperatureFrame`].
pub const FRAME_LEN: usize = 5;

/// Uplink payload for one reading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureFrame {
    pub celsius: f32,
    /// 1-based position in the sensor list
    pub sensor: u8,
}

impl TemperatureFrame {
    /// IEEE-754 temperature, big-endian, then the sensor number.
    pub fn to_bytes(&self) -> [u8; FRAME_LEN] {
        let t = self.celsius.to_be_bytes();
        [t[0], t[1], t[2], t[3], self.sensor]
    }
}

/// Outcome of one measurement cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    pub sent: usize,
    pub failed: usize,
}

pub struct Telemetry<'a, B: TemperatureBus, L: LowPower> {
    sensors: &'a [DeviceAddress],
    bus: B,
    low_power: L,
    schedule: Schedule,
}

impl<B: TemperatureBus, L: LowPower> Telemetry<'static, B, L> {
    pub fn new(bus: B, low_power: L) -> Self {
        Self {
            sensors: &DEFAULT_SENSORS,
            bus,
            low_power,
            schedule: Schedule::default(),
        }
    }
}

impl<'a, B: TemperatureBus, L: LowPower> Telemetry<'a, B, L> {
    pub fn with_sensors<'b>(self, sensors: &'b [DeviceAddress]) -> Telemetry<'b, B, L> {
        Telemetry {
            sensors,
            bus: self.bus,
            low_power: self.low_power,
            schedule: self.schedule,
        }
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Read every sensor and send one frame per reading.
    ///
    /// A sensor that can not be read or whose frame is not sent is counted
    /// as failed, the remaining sensors are still handled.
    pub async fn run_cycle<T: Transport, C: SigfoxConfig>(
        &mut self,
        sigfox: &mut Sigfox<T, C>,
    ) -> CycleReport {
        let mut report = CycleReport::default();

        for (i, address) in self.sensors.iter().enumerate() {
            // frames carry the sensor number in a single byte
            let Ok(sensor) = u8::try_from(i + 1) else {
                warn!("Sensor {}: number does not fit a frame", i + 1);
                report.failed += 1;
                continue;
            };

            let celsius = match self.read(address).await {
                Ok(celsius) => celsius,
                Err(_) => {
                    warn!("Sensor {}: read failed", sensor);
                    report.failed += 1;
                    continue;
                }
            };

            let frame = TemperatureFrame { celsius, sensor };
            match sigfox.send(&frame.to_bytes()).await {
                Ok(()) => {
                    info!("Sensor {}: {} C sent", sensor, celsius);
                    report.sent += 1;
                }
                Err(e) => {
                    warn!("Sensor {}: send failed: {:?}", sensor, e);
                    report.failed += 1;
                }
            }
        }

        report
    }

    async fn read(&mut self, address: &DeviceAddress) -> Result<f32, B::Error> {
        self.bus.request_temperature(address).await?;
        self.bus.temperature_celsius(address).await
    }

    /// Switch the module off, sleep until the next cycle and switch it on
    /// again.
    pub async fn hibernate<T: Transport, C: SigfoxConfig>(
        &mut self,
        sigfox: &mut Sigfox<T, C>,
    ) -> Result<(), Error> {
        let off = sigfox.off().await;

        debug!(
            "Sleeping {} x {:?}",
            self.schedule.sleep_cycles, self.schedule.period
        );
        for _ in 0..self.schedule.sleep_cycles {
            self.low_power
                .power_down(self.schedule.period, PeripheralState::ALL_OFF)
                .await;
        }

        let on = sigfox.on().await;
        off.and(on)
    }

    /// Measure, send and sleep, forever.
    pub async fn run<T: Transport, C: SigfoxConfig>(&mut self, sigfox: &mut Sigfox<T, C>) {
        if let Err(e) = sigfox.on().await {
            error!("Switching the module on failed: {:?}", e);
        }

        loop {
            let report = self.run_cycle(sigfox).await;
            info!("Cycle done: {} sent, {} failed", report.sent, report.failed);

            if let Err(e) = self.hibernate(sigfox).await {
                error!("Power cycling the module failed: {:?}", e);
            }
        }
    }
}
