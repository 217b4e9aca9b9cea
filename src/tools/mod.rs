//! Operation catalogues
//!
//! One static table per wrapped API. Each entry is a declarative
//! [`Operation`] descriptor; all request construction happens in
//! [`crate::params`].

pub mod arkham;
pub mod codex;
pub mod coingecko;
pub mod defillama;
pub mod elfa;
pub mod time;
pub mod types;

use crate::config::AdapterKind;

pub use types::{
    DefaultValue, Field, Kind, ListEncoding, LocalOp, Operation, Placement, Presence, Target,
};

/// Every operation an adapter exposes, in advertised order
pub fn catalogue(kind: AdapterKind) -> &'static [Operation] {
    match kind {
        AdapterKind::Arkham => arkham::OPERATIONS,
        AdapterKind::CoinGecko => coingecko::OPERATIONS,
        AdapterKind::Codex => codex::OPERATIONS,
        AdapterKind::DefiLlama => defillama::OPERATIONS,
        AdapterKind::Elfa => elfa::OPERATIONS,
    }
}

/// Look up an operation by name
pub fn find(kind: AdapterKind, name: &str) -> Option<&'static Operation> {
    catalogue(kind).iter().find(|op| op.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::normalize;
    use std::collections::HashSet;

    fn placeholders(template: &str) -> Vec<&str> {
        template
            .split('{')
            .skip(1)
            .filter_map(|rest| rest.split_once('}').map(|(name, _)| name))
            .collect()
    }

    #[test]
    fn test_catalogue_sizes() {
        assert_eq!(catalogue(AdapterKind::Arkham).len(), 34);
        assert_eq!(catalogue(AdapterKind::CoinGecko).len(), 16);
        assert_eq!(catalogue(AdapterKind::Codex).len(), 1);
        assert_eq!(catalogue(AdapterKind::DefiLlama).len(), 61);
        assert_eq!(catalogue(AdapterKind::Elfa).len(), 5);
    }

    #[test]
    fn test_operation_names_are_unique() {
        for kind in AdapterKind::ALL {
            let mut seen = HashSet::new();
            for op in catalogue(kind) {
                assert!(seen.insert(op.name), "{} lists {} twice", kind, op.name);
            }
        }
    }

    #[test]
    fn test_path_placeholders_match_path_fields() {
        for kind in AdapterKind::ALL {
            for op in catalogue(kind) {
                let Target::Rest { path, .. } = op.target else {
                    continue;
                };
                let mut expected: Vec<&str> = placeholders(path);
                let mut declared: Vec<&str> = op
                    .inputs
                    .iter()
                    .filter(|f| f.placement == Placement::Path)
                    .map(|f| f.wire)
                    .collect();
                expected.sort_unstable();
                declared.sort_unstable();
                assert_eq!(expected, declared, "{}::{}", kind, op.name);

                for field in op.inputs.iter().filter(|f| f.placement == Placement::Path) {
                    assert!(field.is_required(), "{}::{} {}", kind, op.name, field.name);
                }
            }
        }
    }

    #[test]
    fn test_field_names_are_unique_per_operation() {
        for kind in AdapterKind::ALL {
            for op in catalogue(kind) {
                let mut seen = HashSet::new();
                for field in op.inputs {
                    assert!(seen.insert(field.name), "{}::{} {}", kind, op.name, field.name);
                }
            }
        }
    }

    #[test]
    fn test_defaults_are_valid_for_their_kind() {
        for kind in AdapterKind::ALL {
            for op in catalogue(kind) {
                for field in op.inputs {
                    if let Presence::Default(default) = field.presence {
                        assert!(
                            normalize(field, &default.to_json()).is_ok(),
                            "{}::{} {}",
                            kind,
                            op.name,
                            field.name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_wire_renames() {
        let ohlc = find(AdapterKind::CoinGecko, "get_coin_ohlc_range").unwrap();
        assert_eq!(ohlc.field("from_timestamp").unwrap().wire, "from");
        assert_eq!(ohlc.field("to_timestamp").unwrap().wire, "to");

        let bridge = find(AdapterKind::DefiLlama, "get_bridge_transactions").unwrap();
        assert_eq!(bridge.field("start_timestamp").unwrap().wire, "starttimestamp");
        assert_eq!(bridge.field("source_chain").unwrap().wire, "sourcechain");

        let search = find(AdapterKind::Elfa, "search_mentions").unwrap();
        assert_eq!(search.field("from_").unwrap().wire, "from");
    }

    #[test]
    fn test_local_operations() {
        let locals: Vec<&str> = catalogue(AdapterKind::CoinGecko)
            .iter()
            .filter(|op| matches!(op.target, Target::Local(_)))
            .map(|op| op.name)
            .collect();
        assert_eq!(
            locals,
            vec!["get_current_time", "date_to_timestamp", "timestamp_to_date"]
        );
    }

    #[test]
    fn test_find_unknown() {
        assert!(find(AdapterKind::Elfa, "get_swaps").is_none());
        assert!(find(AdapterKind::Arkham, "get_swaps").is_some());
    }
}
