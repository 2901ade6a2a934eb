use std::f64::consts::PI;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::HourlyTemperature;

/// A seeded generator of hourly external temperatures.
///
/// `SyntheticWeather` layers an annual cycle (coldest in mid January), a
/// daily cycle (coldest before dawn) and Gaussian noise on a mean
/// temperature. It stands in for measured data when none is available; the
/// defaults give a mild maritime year with roughly London-like heating hours.
///
/// # Examples
///
/// ```
/// use trv_setback::weather::SyntheticWeather;
///
/// let weather = SyntheticWeather { days: 2, ..SyntheticWeather::default() };
/// let hours = weather.generate();
/// assert_eq!(hours.len(), 48);
/// assert_eq!(hours, weather.generate());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticWeather {
    /// Number of days to generate, 24 hours each
    pub days: usize,

    /// Annual mean temperature (C)
    pub mean_c: f64,

    /// Amplitude of the annual cycle (K)
    pub annual_amplitude_k: f64,

    /// Amplitude of the daily cycle (K)
    pub diurnal_amplitude_k: f64,

    /// Standard deviation of the hourly noise (K)
    pub noise_std_k: f64,

    /// Random seed for reproducible noise
    pub seed: u64,
}

impl SyntheticWeather {
    /// Day of year (0-based) of the annual temperature minimum.
    const COLDEST_DAY: f64 = 15.0;
    /// Hour of day of the daily temperature minimum.
    const COLDEST_HOUR: f64 = 5.0;

    /// Generates the hourly series.
    ///
    /// # Returns
    ///
    /// `days * 24` hours; the same parameters always give the same series.
    pub fn generate(&self) -> Vec<HourlyTemperature> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.days * 24)
            .map(|hour| {
                let day = (hour / 24) as f64;
                let hour_of_day = (hour % 24) as f64;

                let annual = -(2.0 * PI * (day - Self::COLDEST_DAY) / 365.0).cos();
                let diurnal = -(2.0 * PI * (hour_of_day - Self::COLDEST_HOUR) / 24.0).cos();
                let noise = gaussian_noise(&mut rng, self.noise_std_k);

                let temperature_c = self.mean_c
                    + self.annual_amplitude_k * annual
                    + self.diurnal_amplitude_k * diurnal
                    + noise;
                HourlyTemperature::new(None, temperature_c)
            })
            .collect()
    }
}

impl Default for SyntheticWeather {
    fn default() -> Self {
        Self {
            days: 365,
            mean_c: 11.5,
            annual_amplitude_k: 6.5,
            diurnal_amplitude_k: 3.0,
            noise_std_k: 1.5,
            seed: 42,
        }
    }
}

/// Gaussian noise via Box-Muller.
fn gaussian_noise(rng: &mut StdRng, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return 0.0;
    }
    let u1: f64 = rng.random::<f64>().clamp(1e-12, 1.0);
    let u2: f64 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos() * std_dev
}
