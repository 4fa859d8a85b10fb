use cider_core::TransientClass;

#[test]
fn count_matches_all() {
    assert_eq!(TransientClass::ALL.len(), TransientClass::COUNT);
    assert_eq!(TransientClass::COUNT, 10);
}

#[test]
fn all_matches_model_head_order() {
    let labels: Vec<_> = TransientClass::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        vec![
            "AGN",
            "Cataclysmic",
            "II",
            "IIP",
            "IIb",
            "IIn",
            "Ia",
            "Ib",
            "Ic",
            "Tidal Disruption Event",
        ]
    );
}

#[test]
fn variants_are_distinct() {
    for (i, a) in TransientClass::ALL.iter().enumerate() {
        for b in TransientClass::ALL.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn display_matches_label() {
    for class in TransientClass::ALL {
        assert_eq!(class.to_string(), class.label());
    }
}

#[test]
fn serde_round_trips_display_labels() {
    for class in TransientClass::ALL {
        let json = serde_json::to_string(&class).unwrap();
        assert_eq!(json, format!("\"{}\"", class.label()));
        let back: TransientClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back, class);
    }
}

#[test]
fn supernova_split_is_seven_of_ten() {
    let sn_count = TransientClass::ALL.iter().filter(|c| c.is_supernova()).count();
    assert_eq!(sn_count, 7);
    assert!(!TransientClass::Agn.is_supernova());
    assert!(!TransientClass::Cataclysmic.is_supernova());
    assert!(!TransientClass::TidalDisruptionEvent.is_supernova());
    assert!(TransientClass::TypeIa.is_supernova());
}
