//! Golden values for the five panchanga elements and rashi.
//!
//! Pure-math tests (no ephemeris needed).

use panchang_base::{
    Element, Graha, Karana, KaranaType, Nakshatra, Paksha, Rashi, Tithi, Yoga, YogaNature,
    calculate_karana, calculate_nakshatra, calculate_rashi, calculate_tithi, calculate_yoga,
};

// ---------------------------------------------------------------------------
// Tithi
// ---------------------------------------------------------------------------

#[test]
fn tithi_conjunction() {
    let t = calculate_tithi(0.0, 0.0);
    assert_eq!(t.number, 1);
    assert_eq!(t.tithi, Tithi::ShuklaPratipada);
    assert_eq!(t.name, "Pratipada");
    assert_eq!(t.paksha, Paksha::Shukla);
    assert_eq!(t.deity, "Agni");
}

#[test]
fn tithi_purnima() {
    let t = calculate_tithi(0.0, 179.9);
    assert_eq!(t.number, 15);
    assert_eq!(t.name, "Purnima");
    assert_eq!(t.paksha, Paksha::Shukla);
}

#[test]
fn tithi_amavasya() {
    let t = calculate_tithi(0.0, 354.999);
    assert_eq!(t.number, 30);
    assert_eq!(t.name, "Amavasya");
    assert_eq!(t.paksha, Paksha::Krishna);
    assert_eq!(t.deity, "Pitris");
}

#[test]
fn tithi_sweep_all_30() {
    for i in 0..30u8 {
        let moon = 100.0 + i as f64 * 12.0 + 6.0;
        let t = calculate_tithi(100.0, moon);
        assert_eq!(t.number, i + 1, "moon {moon}");
        assert!((t.percent_complete - 50.0).abs() < 1e-9);
        assert_eq!(t.tithi_in_paksha, i % 15 + 1);
    }
}

#[test]
fn tithi_krishna_paksha_days() {
    // elongation 246 deg -> tithi 21 -> sixth day of Krishna paksha
    let t = calculate_tithi(10.0, 256.0);
    assert_eq!(t.number, 21);
    assert_eq!(t.tithi, Tithi::KrishnaShashthi);
    let t = calculate_tithi(10.0, 316.0);
    assert_eq!(t.number, 26);
    assert_eq!(t.tithi, Tithi::KrishnaEkadashi);
    assert_eq!(t.name, "Ekadashi");
}

// ---------------------------------------------------------------------------
// Yoga
// ---------------------------------------------------------------------------

#[test]
fn yoga_bounds() {
    assert_eq!(calculate_yoga(0.0, 0.0).yoga, Yoga::Vishkambha);
    let y = calculate_yoga(0.0, 359.99);
    assert_eq!(y.number, 27);
    assert_eq!(y.yoga, Yoga::Vaidhriti);
    assert_eq!(y.nature, YogaNature::Inauspicious);
}

#[test]
fn yoga_mixed_natures() {
    // Vajra is yoga 15: [186.67, 200)
    let y = calculate_yoga(90.0, 100.0);
    assert_eq!(y.yoga, Yoga::Vajra);
    assert_eq!(y.nature, YogaNature::Mixed);
    assert_eq!(y.meaning, "Diamond-like strength, can be harsh");
}

#[test]
fn yoga_sweep_all_27() {
    let span = 360.0 / 27.0;
    for i in 0..27u8 {
        let y = calculate_yoga(0.0, i as f64 * span + span / 2.0);
        assert_eq!(y.number, i + 1);
    }
}

// ---------------------------------------------------------------------------
// Karana
// ---------------------------------------------------------------------------

#[test]
fn karana_first_and_fixed_slots() {
    let k = calculate_karana(0.0, 3.0);
    assert_eq!(k.number, 1);
    assert_eq!(k.name, "Kimstughna");
    let k = calculate_karana(0.0, 339.0);
    assert_eq!(k.number, 57);
    assert_eq!(k.karana, Karana::Shakuni);
    assert_eq!(k.karana_type, KaranaType::Fixed);
}

#[test]
fn karana_movable_cycle_repeats_eight_times() {
    let mut bava = 0;
    for n in 0..60u8 {
        let k = calculate_karana(0.0, n as f64 * 6.0 + 1.0);
        assert_eq!(k.number, n + 1);
        if k.karana == Karana::Bava {
            bava += 1;
        }
    }
    assert_eq!(bava, 8);
}

// ---------------------------------------------------------------------------
// Nakshatra
// ---------------------------------------------------------------------------

#[test]
fn nakshatra_reference_points() {
    let n = calculate_nakshatra(0.0);
    assert_eq!((n.number, n.pada), (1, 1));
    let n = calculate_nakshatra(3.3334);
    assert_eq!((n.number, n.pada), (1, 2));
    let n = calculate_nakshatra(13.334);
    assert_eq!((n.number, n.pada), (2, 1));
    assert_eq!(n.nakshatra, Nakshatra::Bharani);
    let n = calculate_nakshatra(359.999);
    assert_eq!((n.number, n.pada), (27, 4));
    assert_eq!(n.nakshatra, Nakshatra::Revati);
}

#[test]
fn nakshatra_sweep_all_27_and_padas() {
    let span = 360.0 / 27.0;
    for i in 0..27u8 {
        for p in 0..4u8 {
            let lon = i as f64 * span + (p as f64 + 0.5) * span / 4.0;
            let n = calculate_nakshatra(lon);
            assert_eq!(n.number, i + 1, "lon {lon}");
            assert_eq!(n.pada, p + 1, "lon {lon}");
            assert!(n.start_degree <= lon && lon < n.end_degree);
        }
    }
}

#[test]
fn nakshatra_table_spot_checks() {
    let pushya = calculate_nakshatra(8.0 * 360.0 / 27.0 - 6.0);
    assert_eq!(pushya.nakshatra, Nakshatra::Pushya);
    assert_eq!(pushya.deity, "Brihaspati");
    assert_eq!(pushya.lord, Graha::Shani);
    assert_eq!(pushya.symbol, "Cow's Udder");
}

// ---------------------------------------------------------------------------
// Rashi
// ---------------------------------------------------------------------------

#[test]
fn rashi_sweep_all_12() {
    for i in 0..12u8 {
        let lon = i as f64 * 30.0 + 15.0;
        let r = calculate_rashi(lon);
        assert_eq!(r.number, i + 1);
        assert_eq!(r.start_degree, i as f64 * 30.0);
    }
}

#[test]
fn rashi_attributes() {
    let r = calculate_rashi(125.0);
    assert_eq!(r.rashi, Rashi::Simha);
    assert_eq!(r.western_name, "Leo");
    assert_eq!(r.element, Element::Fire);
    assert_eq!(r.ruler, Graha::Surya);

    let r = calculate_rashi(345.0);
    assert_eq!(r.rashi, Rashi::Meena);
    assert_eq!(r.element, Element::Water);
    assert_eq!(r.ruler, Graha::Guru);
}

#[test]
fn rashi_dms_precision() {
    // 45 deg 30' 15.5" -> Vrishabha 15 deg 30' 15.5"
    let lon = 45.0 + 30.0 / 60.0 + 15.5 / 3600.0;
    let r = calculate_rashi(lon);
    assert_eq!(r.rashi, Rashi::Vrishabha);
    assert_eq!(r.dms.degrees, 15);
    assert_eq!(r.dms.minutes, 30);
    assert!((r.dms.seconds - 15.5).abs() < 0.01);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_are_bit_identical() {
    let (sun, moon) = (123.456_789, 301.987_654);
    assert_eq!(calculate_tithi(sun, moon), calculate_tithi(sun, moon));
    assert_eq!(calculate_yoga(sun, moon), calculate_yoga(sun, moon));
    assert_eq!(calculate_karana(sun, moon), calculate_karana(sun, moon));
    assert_eq!(calculate_nakshatra(moon), calculate_nakshatra(moon));
    assert_eq!(calculate_rashi(sun), calculate_rashi(sun));
    assert_eq!(
        calculate_tithi(sun, moon).percent_complete.to_bits(),
        calculate_tithi(sun, moon).percent_complete.to_bits()
    );
}
