//! Decoding and merging of override records.

use schoolgate_models::{OverrideMap, OverrideScope, RawOverride};
use serde_json::Value;
use tracing::warn;

/// Decode a JSON array of override records, skipping malformed entries.
///
/// Each element is decoded independently so one bad record cannot poison the
/// whole map; skipped records are logged as data-quality warnings.
pub fn decode_records(values: Vec<Value>) -> Vec<RawOverride> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<RawOverride>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "Skipping malformed override record");
                None
            }
        })
        .collect()
}

/// Merge raw records into the per-subject override map.
///
/// User-level entries replace role-level entries at the same resource key,
/// independent of record order. This is merge by override-specificity: the
/// winning record's permission is taken whole, never combined field by field.
pub fn merge_overrides(records: Vec<RawOverride>) -> OverrideMap {
    let mut map = OverrideMap::new();
    for record in records
        .iter()
        .filter(|r| r.scope == OverrideScope::Role)
        .chain(records.iter().filter(|r| r.scope == OverrideScope::User))
    {
        map.insert(record.resource_key.clone(), record.permission());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolgate_core::ResourceKey;
    use schoolgate_models::Permission;
    use serde_json::json;

    fn record(key: &str, scope: OverrideScope, view: bool, delete: bool) -> RawOverride {
        RawOverride {
            resource_key: ResourceKey::new(key),
            scope,
            view,
            create: false,
            edit: false,
            delete,
        }
    }

    #[test]
    fn test_user_beats_role_on_same_key() {
        let records = vec![
            record("pembelajaran.nilai_siswa", OverrideScope::Role, true, false),
            record("pembelajaran.nilai_siswa", OverrideScope::User, true, true),
        ];
        let map = merge_overrides(records);
        assert_eq!(
            map.get("pembelajaran.nilai_siswa"),
            Some(&Permission::new(true, false, false, true))
        );
    }

    #[test]
    fn test_user_beats_role_regardless_of_order() {
        let records = vec![
            record("siswa", OverrideScope::User, false, false),
            record("siswa", OverrideScope::Role, true, true),
        ];
        let map = merge_overrides(records);
        // The user record wins even though the role record came last.
        assert_eq!(map.get("siswa"), Some(&Permission::NONE));
    }

    #[test]
    fn test_disjoint_keys_both_kept() {
        let records = vec![
            record("siswa", OverrideScope::Role, true, false),
            record("guru", OverrideScope::User, true, true),
        ];
        let map = merge_overrides(records);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let values = vec![
            json!({
                "resource_key": "siswa",
                "scope": "role",
                "view": true, "create": false, "edit": false, "delete": false
            }),
            json!({"resource_key": "guru", "scope": "galaxy"}),
            json!("not even an object"),
        ];
        let records = decode_records(values);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].resource_key.as_str(), "siswa");
    }

    #[test]
    fn test_empty_input_empty_map() {
        assert!(merge_overrides(Vec::new()).is_empty());
        assert!(decode_records(Vec::new()).is_empty());
    }
}
