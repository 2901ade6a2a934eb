//! Fixed reference values for the four-room, single-storey worked example.
//!
//! The parameterised model recomputes the equivalents of the derived values
//! below from `ModelParameters` and a variable external temperature; the
//! published figures are kept here so the parameterised code can be checked
//! against them.

/// External design temperature on a cold winter day (C).
pub const EXTERNAL_AIR_TEMPERATURE_C: f64 = -3.0;
/// Temperature of the A rooms, and of every room without setback (C).
pub const NORMAL_ROOM_TEMPERATURE_C: f64 = 21.0;
/// Temperature of the B rooms when set back (C).
pub const SETBACK_ROOM_TEMPERATURE_C: f64 = 18.0;

/// Design temperature delta for heat loss calculations (K).
pub const HOME_HEAT_LOSS_DESIGN_TEMPERATURE_DELTA_K: f64 =
    NORMAL_ROOM_TEMPERATURE_C - EXTERNAL_AIR_TEMPERATURE_C;
/// Whole-home heat loss with all rooms at normal temperature (W).
pub const HOME_HEAT_LOSS_AT_NORMAL_ROOM_TEMPERATURE_W: f64 = 2000.0;
/// Whole-home heat loss per Kelvin (W/K), ~83.3.
pub const HOME_HEAT_LOSS_PER_KELVIN_W_PER_K: f64 =
    HOME_HEAT_LOSS_AT_NORMAL_ROOM_TEMPERATURE_W / HOME_HEAT_LOSS_DESIGN_TEMPERATURE_DELTA_K;

/// Mean home temperature with the B rooms set back (C).
pub const MEAN_HOME_TEMPERATURE_WITH_SETBACK_C: f64 =
    (NORMAL_ROOM_TEMPERATURE_C + SETBACK_ROOM_TEMPERATURE_C) / 2.0;
/// Whole-home heat loss with the B rooms set back (W).
pub const HOME_HEAT_LOSS_B_SETBACK_W: f64 = HOME_HEAT_LOSS_PER_KELVIN_W_PER_K
    * (MEAN_HOME_TEMPERATURE_WITH_SETBACK_C - EXTERNAL_AIR_TEMPERATURE_C);

/// Rated radiator output with the home at normal temperature (W).
pub const RADIATOR_POWER_WITH_HOME_AT_NORMAL_ROOM_TEMPERATURE_W: f64 = 500.0;
/// Rated mean-water to air delta T at that output, ie DT25 radiators (K).
pub const RADIATOR_MWATDT_AT_NORMAL_ROOM_TEMPERATURE_K: f64 = 25.0;
/// Exponent taking a radiator power multiplier to a delta-T multiplier.
pub const RADIATOR_EXP_POWER_TO_DT: f64 = 0.77;

/// Internal wall length (m).
pub const INTERNAL_WALL_LENGTH_M: f64 = 4.0;
/// Internal wall height (m).
pub const INTERNAL_WALL_HEIGHT_M: f64 = 2.3;
/// Area of one internal wall (m^2).
pub const INTERNAL_WALL_AREA_PER_WALL_M2: f64 = INTERNAL_WALL_LENGTH_M * INTERNAL_WALL_HEIGHT_M;
/// Internal walls from each A room to its adjoining B rooms.
pub const INTERNAL_WALLS_FROM_EACH_A_ROOM: f64 = 2.0;
/// Internal wall area from each A room to its adjoining B rooms (m^2).
pub const INTERNAL_WALL_AREA_FROM_EACH_A_TO_B_ROOM_M2: f64 =
    INTERNAL_WALLS_FROM_EACH_A_ROOM * INTERNAL_WALL_AREA_PER_WALL_M2;
/// Area of one internal door (m^2).
pub const INTERNAL_DOOR_AREA_PER_DOOR_M2: f64 = 2.0;
/// Internal wall U value (W/m^2K).
/// A plasterboard stud wall is ~1.7, single brick with plaster ~1.2.
pub const INTERNAL_WALL_U_W_PER_M2K: f64 = 2.0;
/// Internal door U value (W/m^2K); high, allowing for doors not shut tight.
pub const INTERNAL_DOOR_U_W_PER_M2K: f64 = 8.0;
/// Internal floor/ceiling U value, taken as the wall value and symmetric (W/m^2K).
pub const INTERNAL_FLOOR_U_W_PER_M2K: f64 = INTERNAL_WALL_U_W_PER_M2K;

/// Floor (and ceiling) area of each room (m^2).
pub const PER_ROOM_FLOOR_AREA_M2: f64 = INTERNAL_WALL_LENGTH_M * INTERNAL_WALL_LENGTH_M;
/// Rooms per storey.
pub const ROOMS_PER_STOREY: usize = 4;
/// Footprint of the home, ignoring wall thickness (m^2).
pub const HOME_TOTAL_FLOOR_AREA_M2: f64 = PER_ROOM_FLOOR_AREA_M2 * ROOMS_PER_STOREY as f64;
/// Roof area, taken equal to the footprint (m^2).
pub const HOME_TOTAL_ROOF_AREA_M2: f64 = HOME_TOTAL_FLOOR_AREA_M2;
/// External wall length around one storey (m).
pub const HOME_TOTAL_EXTERNAL_WALL_LENGTH_M: f64 = INTERNAL_WALL_LENGTH_M * 8.0;
/// External wall area of one storey, ignoring windows and doors (m^2).
pub const HOME_TOTAL_EXTERNAL_WALL_AREA_M2: f64 =
    HOME_TOTAL_EXTERNAL_WALL_LENGTH_M * INTERNAL_WALL_HEIGHT_M;
/// Effective external wall and roof U value if those were the only routes
/// to outside (W/m^2K); ~0.61, roughly 1980s building regulations.
pub const HOME_EFFECTIVE_EXTERNAL_WALL_AND_ROOF_U_W_PER_M2K: f64 =
    HOME_HEAT_LOSS_PER_KELVIN_W_PER_K / (HOME_TOTAL_EXTERNAL_WALL_AREA_M2 + HOME_TOTAL_ROOF_AREA_M2);

/// Lower CoP sample flow temperature (C).
pub const COP_LOW_FLOW_TEMPERATURE_C: f64 = 46.0;
/// Higher CoP sample flow temperature (C).
pub const COP_HIGH_FLOW_TEMPERATURE_C: f64 = 51.5;
/// Heat-pump CoP at 46.0 C flow.
pub const COP_AT_46P0C: f64 = 2.6;
/// Heat-pump CoP at 51.5 C flow.
pub const COP_AT_51P5C: f64 = 2.3;
/// Flow temperature above radiator mean-water temperature when corrected (K).
pub const FLOW_VS_MEAN_WATER_OFFSET_K: f64 = 2.5;

/// Published heat-pump input with no setback, using the fixed low CoP (W), ~769.
pub const HEAT_PUMP_POWER_IN_NO_SETBACK_W: f64 =
    HOME_HEAT_LOSS_AT_NORMAL_ROOM_TEMPERATURE_W / COP_AT_46P0C;
/// Published heat-pump input with B set back, using the fixed high CoP (W), ~815.
pub const HEAT_PUMP_POWER_IN_B_SETBACK_W: f64 = HOME_HEAT_LOSS_B_SETBACK_W / COP_AT_51P5C;

/// Outside temperature at or above which no space heating is needed (C).
pub const DEFAULT_BASE_HEATING_TEMPERATURE_C: f64 = 15.5;

/// A-room temperature increment in the soft-regulation scan (K).
pub const EQUILIBRIUM_SCAN_STEP_K: f64 = 0.01;
