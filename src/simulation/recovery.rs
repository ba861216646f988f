//! # Condensate Recovery Model
//!
//! Water reclaimed from the air-handler coils, directly proportional to
//! cooling work performed.

/// Litres per hour recovered per kW of cooling load.
const RECOVERY_RATE_LPH_PER_KW: f64 = 0.4;

/// Condensate recovered in litres per hour, rounded to one decimal place.
pub fn water_recovered_lph(cooling_load_kw: f64) -> f64 {
    (cooling_load_kw * RECOVERY_RATE_LPH_PER_KW * 10.0).round() / 10.0
}
