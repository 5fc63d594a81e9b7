//! Contracts over the opposite relation, the public table API, and the
//! reference data.

use std::collections::HashSet;

use dignities::{build, resolve_sign_name, resolved_table, DignityError, Sign};

#[test]
fn contract_opposite_is_involutive() {
    for sign in Sign::ALL {
        assert_eq!(sign.opposite().opposite(), sign);
    }
}

#[test]
fn contract_opposite_has_no_fixed_points() {
    for sign in Sign::ALL {
        assert_ne!(sign.opposite(), sign);
    }
}

#[test]
fn contract_opposite_pairs_cover_the_domain() {
    let mut seen = HashSet::new();
    for sign in Sign::ALL {
        seen.insert(sign);
        seen.insert(sign.opposite());
    }
    assert_eq!(seen.len(), 12);
}

#[test]
fn contract_resolved_table_is_total() {
    let table = resolved_table();
    assert_eq!(table.iter().count(), 12);
    for sign in Sign::ALL {
        // `get` is infallible; every sign resolves.
        let _ = table.get(sign);
        assert!(table.lookup(sign.slug()).is_ok());
    }
}

#[test]
fn contract_lookup_unknown_slug_fails() {
    let err = resolved_table().lookup("unknown-slug").unwrap_err();
    assert_eq!(
        err,
        DignityError::UnknownSign {
            slug: "unknown-slug".to_string()
        }
    );
}

#[test]
fn contract_resolve_sign_name_matches_lookup_domain() {
    for sign in Sign::ALL {
        assert_eq!(resolve_sign_name(sign.slug()).unwrap(), sign.display_name());
    }
    assert!(matches!(
        resolve_sign_name("no-such-sign"),
        Err(DignityError::UnknownSign { .. })
    ));
}

#[test]
fn contract_detriment_contains_opposite_domicile() {
    let table = resolved_table();
    for (sign, entry) in table.iter() {
        for planet in &table.get(sign.opposite()).domicile {
            assert!(
                entry.detriment.contains(planet),
                "{planet} rules {} but is not in detriment in {sign}",
                sign.opposite()
            );
        }
    }
}

#[test]
fn contract_fall_contains_opposite_exaltation() {
    let table = resolved_table();
    for (sign, entry) in table.iter() {
        for planet in &table.get(sign.opposite()).exaltation {
            assert!(
                entry.fall.contains(planet),
                "{planet} is exalted in {} but not in fall in {sign}",
                sign.opposite()
            );
        }
    }
}

#[test]
fn contract_no_resolved_set_contains_duplicates() {
    for (_, entry) in resolved_table().iter() {
        for set in [
            &entry.domicile,
            &entry.exaltation,
            &entry.detriment,
            &entry.fall,
        ] {
            let unique: HashSet<_> = set.iter().collect();
            assert_eq!(unique.len(), set.len());
        }
    }
}

#[test]
fn contract_empty_base_builds_an_empty_total_table() {
    let table = build::<&str>(&[]);
    assert_eq!(table.iter().count(), 12);
    for (_, entry) in table.iter() {
        assert!(entry.domicile.is_empty());
        assert!(entry.exaltation.is_empty());
        assert!(entry.detriment.is_empty());
        assert!(entry.fall.is_empty());
    }
}
