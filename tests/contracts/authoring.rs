//! Contracts over the external serde shapes: the authored input record
//! and the consumer-facing output record.

use dignities::{resolved_table, BaseEntry, Planet, Sign};
use serde_json::json;

#[test]
fn contract_authored_record_allows_omitted_fields() {
    let entry: BaseEntry<Planet> = serde_json::from_str(r#"{"domicile": ["mars"]}"#).unwrap();
    assert_eq!(entry.domicile, vec![Planet::Mars]);
    assert!(entry.exaltation.is_empty());
    assert!(entry.detriment_extra.is_empty());
    assert!(entry.fall_extra.is_empty());
}

#[test]
fn contract_authored_record_round_trips_yaml() {
    let yaml = "\
domicile:
  - venus
exaltation:
  - moon
fall-extra:
  - uranus
";
    let entry: BaseEntry<Planet> = serde_yaml_ng::from_str(yaml).unwrap();
    assert_eq!(entry.domicile, vec![Planet::Venus]);
    assert_eq!(entry.exaltation, vec![Planet::Moon]);
    assert!(entry.detriment_extra.is_empty());
    assert_eq!(entry.fall_extra, vec![Planet::Uranus]);

    let reparsed: BaseEntry<Planet> =
        serde_yaml_ng::from_str(&serde_yaml_ng::to_string(&entry).unwrap()).unwrap();
    assert_eq!(reparsed, entry);
}

#[test]
fn contract_output_record_shape() {
    let aries = serde_json::to_value(resolved_table().get(Sign::Aries)).unwrap();
    assert_eq!(
        aries,
        json!({
            "domicile": ["mars"],
            "exaltation": ["sun"],
            "detriment": ["venus"],
            "fall": ["saturn"],
        })
    );
}

#[test]
fn contract_signs_serialize_as_slugs() {
    for sign in Sign::ALL {
        assert_eq!(serde_json::to_value(sign).unwrap(), json!(sign.slug()));
    }
}

#[test]
fn contract_planets_serialize_as_slugs() {
    for planet in Planet::ALL {
        assert_eq!(serde_json::to_value(planet).unwrap(), json!(planet.slug()));
    }
}
