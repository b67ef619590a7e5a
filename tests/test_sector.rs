use std::fs::read_to_string;

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;

use sectorneeds::{error::SectorError, peb::month_lengths, types::*, *};

const T_E: Monthly = [
    3.2, 3.9, 5.9, 9.2, 13.3, 16.2, 17.6, 17.6, 15.2, 11.2, 6.3, 3.5,
];

fn get_sector(path: &str) -> SectorData {
    read_to_string(path).unwrap().parse::<SectorData>().unwrap()
}

fn params_v10() -> SectorParams {
    SectorParams {
        volume: 10.0,
        heat_capacity: 1e7,
        h_trans_heat: 100.0,
        h_trans_overh: 100.0,
        h_trans_cool: 100.0,
        h_vent_heat: 50.0,
        h_vent_overh: monthly_const(50.0),
        h_vent_cool: monthly_const(50.0),
    }
}

#[test]
fn sector_v10_first_month() {
    let climate = Climate::new(T_E, false);
    let balance = SectorBalance::compute(
        &params_v10(),
        &climate,
        DhwParams::default(),
        &NoSolarGains,
    )
    .unwrap();

    let gl = balance.gains_losses.get(Purpose::Heating);
    assert_eq!(climate.month_length[0], 2.6784);
    assert_relative_eq!(gl.internal[0], 246.68064, epsilon = 1e-9);
    assert_relative_eq!(gl.transmission[0], 3964.032, epsilon = 1e-9);
    assert_relative_eq!(gl.ventilation[0], 1982.016, epsilon = 1e-9);
    assert_eq!(gl.solar, ZEROS);

    let hb = &balance.heating.balance;
    assert_relative_eq!(hb.ratio[0], 0.041486486486486486, epsilon = 1e-12);
    assert_relative_eq!(hb.a[0], 2.234567901234568, epsilon = 1e-12);
    assert_relative_eq!(hb.utilization[0], 0.9992179554091032, epsilon = 1e-12);
    assert_eq!(balance.heating.allowance, monthly_const(1.0));
    assert_relative_eq!(balance.heating.net[0], 5699.560275260191, epsilon = 1e-6);
}

#[test]
fn sector_v10_annual() {
    let balance = get_sector("test_data/sector_v10.txt")
        .compute(false)
        .unwrap();

    assert_relative_eq!(balance.annual.heating, 33800.91207154898, epsilon = 1e-6);
    assert_relative_eq!(balance.annual.dhw, 2522.88, epsilon = 1e-9);
    assert_relative_eq!(balance.dhw.net[0], 214.272, epsilon = 1e-9);

    // Low overheating degree: no active cooling
    assert_relative_eq!(balance.overheating.degree, 17.705298696674088, epsilon = 1e-6);
    assert_eq!(balance.overheating.p_cool, 0.0);
    assert_relative_eq!(
        balance.overheating.f_cool,
        0.05 * balance.overheating.degree / 6500.0,
        epsilon = 1e-15
    );
    assert_eq!(balance.cooling.net, ZEROS);
    assert_eq!(balance.annual.cooling, 0.0);
}

#[test]
fn sector_file_matches_direct_inputs() {
    let from_file = get_sector("test_data/sector_v10.txt")
        .compute(false)
        .unwrap();
    let direct = SectorBalance::compute(
        &params_v10(),
        &Climate::new(T_E, false),
        DhwParams::default(),
        &NoSolarGains,
    )
    .unwrap();
    assert_eq!(from_file, direct);
}

#[test]
fn sector_v10_leap_year() {
    let data = get_sector("test_data/sector_v10.txt");
    let balance = data.compute(true).unwrap();
    assert_eq!(balance.climate.month_length, month_lengths(true));
    assert_relative_eq!(balance.annual.heating, 33975.69755136122, epsilon = 1e-6);
    assert_relative_eq!(balance.annual.dhw, 2529.792, epsilon = 1e-9);
}

#[test]
fn sector_with_solar_gains() {
    let balance = get_sector("test_data/sector_solar.txt")
        .compute(false)
        .unwrap();

    assert_eq!(balance.gains_losses.heating.solar[6], 950.0);
    assert_eq!(balance.gains_losses.cooling.solar[6], 1425.0);
    assert_relative_eq!(balance.annual.heating, 1380.8949946913035, epsilon = 1e-6);
    assert_relative_eq!(balance.heating.net[0], 605.1311979922159, epsilon = 1e-6);

    // Summer months are gated by the allowance factor
    assert_eq!(balance.heating.allowance[6], 0.0);
    assert_eq!(balance.heating.net[6], 0.0);

    // Overheating degree above 6500 Kh: cooling fully active
    assert_relative_eq!(balance.overheating.degree, 28644.3597120532, epsilon = 1e-6);
    assert_eq!(balance.overheating.p_cool, 1.0);
    assert_relative_eq!(balance.overheating.f_cool, 0.2203412285542554, epsilon = 1e-9);
    assert_relative_eq!(balance.annual.cooling, 10311.96949633915, epsilon = 1e-6);
    assert_relative_eq!(balance.annual.dhw, 3459.4992, epsilon = 1e-9);
}

#[test]
fn sector_warm_climate() {
    // Outdoor temperature over the setpoints gives negative losses and ratios
    let balance = get_sector("test_data/sector_warm.txt")
        .compute(false)
        .unwrap();

    let hb = &balance.heating.balance;
    assert!(hb.ratio[6] < 0.0);
    assert_relative_eq!(hb.utilization[6], 1.0 / hb.ratio[6], epsilon = 1e-12);
    assert_relative_eq!(balance.heating.net[6], 0.0, epsilon = 1e-9);

    let cb = &balance.cooling.balance;
    assert!(cb.ratio[6] < 0.0);
    assert_eq!(cb.utilization[6], 1.0);

    assert_relative_eq!(balance.annual.heating, 3502.566369846182, epsilon = 1e-6);
    assert_relative_eq!(balance.overheating.degree, 18414.944687290677, epsilon = 1e-6);
    assert_eq!(balance.overheating.p_cool, 1.0);
    assert_relative_eq!(balance.annual.cooling, 7749.349388644759, epsilon = 1e-6);
    assert_relative_eq!(balance.cooling.net[6], 2366.3663999999994, epsilon = 1e-6);
    assert_eq!(balance.cooling.net[0], 0.0);
}

#[test]
fn sector_balance_is_deterministic() {
    let data = get_sector("test_data/sector_solar.txt");
    let first = data.compute(false).unwrap();
    let second = data.compute(false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn sector_external_solar_gains() {
    let solar = MonthlySolarGains::from_slices(&[100.0; 12], &[200.0; 12], &[300.0; 12]).unwrap();
    let with_solar = SectorBalance::compute(
        &params_v10(),
        &Climate::new(T_E, false),
        DhwParams::default(),
        &solar,
    )
    .unwrap();
    let without_solar = SectorBalance::compute(
        &params_v10(),
        &Climate::new(T_E, false),
        DhwParams::default(),
        &NoSolarGains,
    )
    .unwrap();
    assert!(with_solar.annual.heating < without_solar.annual.heating);
    assert!(with_solar.overheating.degree > without_solar.overheating.degree);
    assert_eq!(with_solar.dhw, without_solar.dhw);

    assert_eq!(
        MonthlySolarGains::from_slices(&[100.0; 11], &[200.0; 12], &[300.0; 12]),
        Err(SectorError::InvalidDimension {
            name: "Q_solar_heat".into(),
            len: 11
        })
    );
}

#[test]
fn sector_errors() {
    // Wrong series length
    let res = read_to_string("test_data/sector_bad_dimension.txt")
        .unwrap()
        .parse::<SectorData>();
    assert_eq!(
        res,
        Err(SectorError::InvalidDimension {
            name: "T_E".into(),
            len: 11
        })
    );

    // Zero heat capacity
    match get_sector("test_data/sector_zero_capacity.txt").compute(false) {
        Err(SectorError::DomainViolation { name, value, .. }) => {
            assert_eq!(name, "C_sec");
            assert_eq!(value, 0.0);
        }
        other => panic!("unexpected result {:?}", other),
    }

    // No DHW taps
    let dhw = DhwParams {
        n_bath: 0.0,
        ..DhwParams::default()
    };
    match SectorBalance::compute(
        &params_v10(),
        &Climate::new(T_E, false),
        dhw,
        &NoSolarGains,
    ) {
        Err(SectorError::DivisionByZero { quantity, .. }) => assert_eq!(quantity, "1/N_bath"),
        other => panic!("unexpected result {:?}", other),
    }

    // Zero heat transfer coefficients
    let params = SectorParams {
        h_trans_heat: 0.0,
        h_vent_heat: 0.0,
        ..params_v10()
    };
    match SectorBalance::compute(
        &params,
        &Climate::new(T_E, false),
        DhwParams::default(),
        &NoSolarGains,
    ) {
        Err(SectorError::DivisionByZero { month, .. }) => assert_eq!(month, Some(0)),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn sector_large_heat_capacity() {
    // C = 1e9 J/K gives a ~ 371 and lambda_cool^a beyond f64 range
    let params = SectorParams {
        heat_capacity: 1e9,
        h_trans_heat: 50.0,
        h_trans_overh: 50.0,
        h_trans_cool: 50.0,
        h_vent_heat: 0.0,
        h_vent_overh: ZEROS,
        h_vent_cool: ZEROS,
        ..params_v10()
    };
    let climate = Climate::new(monthly_const(-10.0), false);
    let balance =
        SectorBalance::compute(&params, &climate, DhwParams::default(), &NoSolarGains).unwrap();

    let hb = &balance.cooling.balance;
    assert_relative_eq!(hb.a[0], 371.3703703703704, epsilon = 1e-9);
    assert!(hb.ratio[0] > 10.0);
    assert!(hb.utilization.iter().all(|eta| eta.is_finite()));
    assert_relative_eq!(hb.utilization[0], 1.0 / hb.ratio[0], epsilon = 1e-12);
    assert_eq!(balance.cooling.allowance, ZEROS);
    assert_eq!(balance.cooling.net, ZEROS);
    assert_eq!(balance.annual.cooling, 0.0);
    assert!(balance.overheating.degree.is_finite());
    assert!(balance.annual.heating.is_finite());

    // Every number reaches the JSON output
    let json = serde_json::to_string_pretty(&balance).unwrap();
    assert!(!json.contains("null"));
}

#[test]
fn sector_data_text_roundtrip() {
    let data = get_sector("test_data/sector_solar.txt");
    let again = data.to_string().parse::<SectorData>().unwrap();
    assert_eq!(data, again);
    assert_eq!(data.name(), Some("Vivienda V300".to_string()));
}

#[test]
fn sector_balance_json() {
    let balance = get_sector("test_data/sector_v10.txt")
        .compute(false)
        .unwrap();
    let json = serde_json::to_string_pretty(&balance).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["params"]["volume"], 10.0);
    assert_eq!(value["heating"]["balance"]["purpose"], "Heating");
    let back: SectorBalance = serde_json::from_str(&json).unwrap();
    assert_eq!(back.annual, balance.annual);
}
