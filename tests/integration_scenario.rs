//! Hourly scenario runs over CSV and synthetic temperature series.

mod common;

use approx::assert_abs_diff_eq;

use trv_setback::error::ModelError;
use trv_setback::model::{Archetype, ModelParameters, Regulation};
use trv_setback::sim::{EngineOptions, MeanBasis, run_scenario, run_scenario_with_options};
use trv_setback::weather::{SyntheticWeather, load_ddn_csv, parse_ddn_csv};

#[test]
fn fragment_loads_five_hours() {
    let temps = common::load_fixture("ddn_fragment.csv");
    assert_eq!(temps.len(), 5);
    assert_eq!(temps[2].temperature_c, 6.3);
    assert_eq!(temps[4].timestamp.as_deref(), Some("2018-01-01 04:00"));
}

#[test]
fn fragment_runs_in_both_regulations() {
    let temps = common::load_fixture("ddn_fragment.csv");
    let params = ModelParameters::fixes_applied();
    let stiff = run_scenario(&params, &temps, Archetype::Bungalow, Regulation::Stiff).unwrap();
    let soft = run_scenario(&params, &temps, Archetype::Bungalow, Regulation::Soft).unwrap();

    assert_eq!(stiff.heating_hours, 5);
    assert_eq!(stiff.mean.no_setback, soft.mean.no_setback);
    assert!(soft.mean.with_setback.heat_pump_electricity_w < stiff.mean.with_setback.heat_pump_electricity_w);
    assert!(stiff.min_equilibrium_temperature_a_c.is_none());
    assert!(soft.min_equilibrium_temperature_a_c.is_some());
    assert_eq!(soft.hours_fraction_setback_raises_demand, 0.0);
}

#[test]
fn warm_hours_are_skipped_but_counted_for_all_hours_basis() {
    let temps = common::load_fixture("mixed_hours.csv");
    assert_eq!(temps.len(), 8);
    let params = ModelParameters::fixes_applied();

    let heating = run_scenario(&params, &temps, Archetype::Detached, Regulation::Stiff).unwrap();
    assert_eq!(heating.total_hours, 8);
    assert_eq!(heating.heating_hours, 6);

    let all = run_scenario_with_options(
        &params,
        &temps,
        Archetype::Detached,
        Regulation::Stiff,
        EngineOptions {
            mean_basis: MeanBasis::AllHours,
            ..EngineOptions::default()
        },
    )
    .unwrap()
    .summary;
    let share = 6.0 / 8.0;
    assert_abs_diff_eq!(
        all.mean.no_setback.heat_demand_w,
        heating.mean.no_setback.heat_demand_w * share,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        all.hours_fraction_setback_raises_demand,
        heating.hours_fraction_setback_raises_demand * share,
        epsilon = 1e-12
    );
}

#[test]
fn colder_series_raises_demand_more_often() {
    let params = ModelParameters::fixes_applied();
    let cold = common::ramp(-8.0, 2.0, 48);
    let mild = common::ramp(8.0, 15.0, 48);
    let cold_r = run_scenario(&params, &cold, Archetype::Bungalow, Regulation::Stiff).unwrap();
    let mild_r = run_scenario(&params, &mild, Archetype::Bungalow, Regulation::Stiff).unwrap();
    assert!(cold_r.hours_fraction_setback_raises_demand > mild_r.hours_fraction_setback_raises_demand);
    assert!(cold_r.mean.no_setback.heat_demand_w > mild_r.mean.no_setback.heat_demand_w);
}

#[test]
fn synthetic_year_runs_and_is_reproducible() {
    let weather = SyntheticWeather::default();
    let temps = weather.generate();
    let params = ModelParameters::fixes_applied();
    let a = run_scenario(&params, &temps, Archetype::Bungalow, Regulation::Stiff).unwrap();
    let b = run_scenario(&params, &weather.generate(), Archetype::Bungalow, Regulation::Stiff).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.total_hours, 8760);
    assert!(a.heating_hours > 3000 && a.heating_hours < a.total_hours);
    assert!(a.hours_fraction_setback_raises_demand > 0.0);
    assert!(a.hours_fraction_setback_raises_demand < 1.0);
}

#[test]
fn header_only_csv_is_empty_input() {
    let temps = parse_ddn_csv("Datetime,Timezone,Date,Time,Temp (C),% Estimated\n".as_bytes()).unwrap();
    let err = run_scenario(&ModelParameters::default(), &temps, Archetype::Bungalow, Regulation::Stiff)
        .unwrap_err();
    assert_eq!(err, ModelError::EmptyInput);
}

#[test]
fn mild_spell_soft_run_sags_to_just_above_setback() {
    let temps = common::ramp(15.0, 5.0, 48);
    let params = ModelParameters::fixes_applied();
    let abab = run_scenario(&params, &temps, Archetype::Bungalow, Regulation::Soft).unwrap();
    let aabb = run_scenario(
        &params.with_rooms_alternating_abab(false),
        &temps,
        Archetype::Bungalow,
        Regulation::Soft,
    )
    .unwrap();

    let abab_min = abab.min_equilibrium_temperature_a_c.unwrap();
    let aabb_min = aabb.min_equilibrium_temperature_a_c.unwrap();
    assert_abs_diff_eq!(abab_min, 18.2, epsilon = 0.1);
    assert!(aabb_min > abab_min && aabb_min < 18.45, "AABB min {aabb_min}");
    assert_eq!(abab.hours_fraction_setback_raises_demand, 0.0);
    assert_eq!(aabb.hours_fraction_setback_raises_demand, 0.0);
}

#[test]
#[ignore = "needs the gzipped EGLL 2018 degreedays.net export"]
fn london_2018_loads_full_year() {
    let temps = load_ddn_csv(common::london_2018_path()).unwrap();
    assert_eq!(temps.len(), 8760);
    assert_eq!(temps[2].temperature_c, 6.3);
}

#[test]
#[ignore = "needs the gzipped EGLL 2018 degreedays.net export"]
fn london_2018_stiff() {
    let temps = load_ddn_csv(common::london_2018_path()).unwrap();
    let run = run_scenario_with_options(
        &ModelParameters::fixes_applied(),
        &temps,
        Archetype::Bungalow,
        Regulation::Stiff,
        EngineOptions {
            mean_basis: MeanBasis::AllHours,
            ..EngineOptions::default()
        },
    )
    .unwrap();
    let r = run.summary;
    assert_abs_diff_eq!(r.hours_fraction_setback_raises_demand, 0.45, epsilon = 0.01);
    assert_abs_diff_eq!(r.mean.no_setback.heat_demand_w, 719.0, epsilon = 1.0);
    assert_abs_diff_eq!(r.mean.with_setback.heat_demand_w, 634.0, epsilon = 1.0);
    assert_abs_diff_eq!(r.mean.no_setback.heat_pump_electricity_w, 246.0, epsilon = 1.0);
    assert_abs_diff_eq!(r.mean.with_setback.heat_pump_electricity_w, 253.0, epsilon = 1.0);
}

#[test]
#[ignore = "needs the gzipped EGLL 2018 degreedays.net export"]
fn london_2018_soft() {
    let temps = load_ddn_csv(common::london_2018_path()).unwrap();
    let run = run_scenario_with_options(
        &ModelParameters::fixes_applied(),
        &temps,
        Archetype::Bungalow,
        Regulation::Soft,
        EngineOptions {
            mean_basis: MeanBasis::AllHours,
            ..EngineOptions::default()
        },
    )
    .unwrap();
    let r = run.summary;
    let min_eq = r.min_equilibrium_temperature_a_c.unwrap();
    assert_abs_diff_eq!(min_eq, 18.2, epsilon = 0.1);
    assert_abs_diff_eq!(r.hours_fraction_setback_raises_demand, 0.0, epsilon = 0.01);
    assert_abs_diff_eq!(r.mean.no_setback.heat_demand_w, 719.0, epsilon = 1.0);
    assert_abs_diff_eq!(r.mean.with_setback.heat_demand_w, 559.0, epsilon = 1.0);
    assert_abs_diff_eq!(r.mean.no_setback.heat_pump_electricity_w, 246.0, epsilon = 1.0);
    assert_abs_diff_eq!(r.mean.with_setback.heat_pump_electricity_w, 193.0, epsilon = 1.0);
}
