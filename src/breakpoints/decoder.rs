use serde::ser::{Serialize, SerializeMap, Serializer};

use super::catalog::Catalog;

/// Activity of every catalog entry, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveMap {
    entries: Vec<(String, bool)>,
}

impl ActiveMap {
    /// `None` when `name` is not part of the catalog the map was decoded from.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, active)| *active)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), *a))
    }
}

impl Serialize for ActiveMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, active) in &self.entries {
            map.serialize_entry(name, active)?;
        }
        map.end()
    }
}

/// Maps the bits of `height` onto the catalog, least significant bit first.
/// Entry `i` is active iff bit `i` is set; bits past the height's width are 0.
pub fn decode_active_map(height: u32, catalog: &Catalog) -> ActiveMap {
    let entries = catalog
        .names()
        .enumerate()
        .map(|(i, name)| {
            let active = u32::try_from(i)
                .ok()
                .and_then(|shift| height.checked_shr(shift))
                .is_some_and(|bits| bits & 1 == 1);
            (name.to_string(), active)
        })
        .collect();
    ActiveMap { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Catalog {
        names
            .iter()
            .map(|n| (n.to_string(), String::new()))
            .collect()
    }

    #[test]
    fn height_five_sets_first_and_third() {
        let map = decode_active_map(5, &catalog(&["a", "b", "c"]));
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            [("a", true), ("b", false), ("c", true)]
        );
    }

    #[test]
    fn missing_high_bits_are_inactive() {
        let map = decode_active_map(1, &catalog(&["a", "b", "c", "d"]));
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            [("a", true), ("b", false), ("c", false), ("d", false)]
        );
    }

    #[test]
    fn zero_height_means_nothing_active() {
        let map = decode_active_map(0, &catalog(&["mobile", "tablet"]));
        assert_eq!(map.get("mobile"), Some(false));
        assert_eq!(map.get("tablet"), Some(false));
        assert_eq!(map.get("desktop"), None);
    }

    #[test]
    fn entries_follow_bits_for_every_height() {
        let names: Vec<String> = (0..6).map(|i| format!("bp{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let cat = catalog(&refs);
        for height in 0..64u32 {
            let map = decode_active_map(height, &cat);
            assert_eq!(map.iter().count(), 6);
            for (i, (_, active)) in map.iter().enumerate() {
                assert_eq!(active, (height >> i) & 1 == 1, "height {height} bit {i}");
            }
        }
    }

    #[test]
    fn positions_beyond_u32_width_are_inactive() {
        let names: Vec<String> = (0..40).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let map = decode_active_map(u32::MAX, &catalog(&refs));
        assert_eq!(map.iter().filter(|(_, on)| *on).count(), 32);
        assert_eq!(map.get("39"), Some(false));
    }

    #[test]
    fn empty_catalog_decodes_to_empty_map() {
        assert_eq!(decode_active_map(7, &Catalog::default()).iter().count(), 0);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let map = decode_active_map(0b10, &catalog(&["wide", "narrow", "mid"]));
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"wide":false,"narrow":true,"mid":false}"#
        );
    }
}
