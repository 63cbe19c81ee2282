use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// Data Dragon champion.json
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    /// Entries in the order the file lists them.
    #[serde(deserialize_with = "entries_in_order")]
    pub data: Vec<ChampionInfo>,
}

fn entries_in_order<'de, D>(deserializer: D) -> Result<Vec<ChampionInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<ChampionInfo>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of champion id to champion data")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((_, champion)) = map.next_entry::<IgnoredAny, ChampionInfo>()? {
                entries.push(champion);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChampionInfo {
    pub id: String,
    pub name: String,
    /// Numeric champion key, serialized as a string by Data Dragon.
    pub key: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// How to pick one champion out of the list. Wukong is `Wukong` by name
/// and `MonkeyKing` by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChampionLookup {
    Name(String),
    Id(String),
    Key(u32),
}

impl ChampionLookup {
    pub fn matches(&self, champion: &ChampionInfo) -> bool {
        match self {
            ChampionLookup::Name(name) => champion.name == *name,
            ChampionLookup::Id(id) => champion.id == *id,
            ChampionLookup::Key(key) => champion.key == key.to_string(),
        }
    }
}

impl DataDragonChampions {
    pub fn names(&self) -> Vec<String> {
        self.data.iter().map(|c| c.name.clone()).collect()
    }

    pub fn ids(&self) -> Vec<String> {
        self.data.iter().map(|c| c.id.clone()).collect()
    }

    /// Keys that are not numeric are skipped.
    pub fn keys(&self) -> Vec<u32> {
        self.data
            .iter()
            .filter_map(|c| c.key.parse().ok())
            .collect()
    }

    pub fn find(&self, lookup: &ChampionLookup) -> Option<&ChampionInfo> {
        self.data.iter().find(|c| lookup.matches(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_champions() -> DataDragonChampions {
        serde_json::from_str(
            r#"{
                "type": "champion",
                "version": "12.4.1",
                "data": {
                    "Aatrox": {
                        "id": "Aatrox", "key": "266", "name": "Aatrox",
                        "title": "the Darkin Blade"
                    },
                    "MonkeyKing": {
                        "id": "MonkeyKing", "key": "62", "name": "Wukong",
                        "title": "the Monkey King"
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn extracts_fields_across_entries() {
        let champions = two_champions();
        assert_eq!(champions.names(), vec!["Aatrox", "Wukong"]);
        assert_eq!(champions.ids(), vec!["Aatrox", "MonkeyKing"]);
        assert_eq!(champions.keys(), vec![266, 62]);
    }

    #[test]
    fn entries_keep_file_order() {
        // Data Dragon orders by name, which is not byte order of the ids.
        let champions: DataDragonChampions = serde_json::from_str(
            r#"{"data": {
                "KogMaw": {"id": "KogMaw", "key": "96", "name": "Kog'Maw"},
                "KSante": {"id": "KSante", "key": "897", "name": "K'Sante"},
                "Kaisa": {"id": "Kaisa", "key": "145", "name": "Kai'Sa"}
            }}"#,
        )
        .unwrap();

        assert_eq!(champions.names(), vec!["Kog'Maw", "K'Sante", "Kai'Sa"]);
        assert_eq!(champions.ids(), vec!["KogMaw", "KSante", "Kaisa"]);
        assert_eq!(champions.keys(), vec![96, 897, 145]);
    }

    #[test]
    fn find_returns_exact_match() {
        let champions = two_champions();

        let wukong = champions
            .find(&ChampionLookup::Name("Wukong".to_string()))
            .unwrap();
        assert_eq!(wukong.id, "MonkeyKing");
        assert_eq!(wukong.details["title"], "the Monkey King");

        let aatrox = champions.find(&ChampionLookup::Id("Aatrox".to_string()));
        assert_eq!(aatrox.map(|c| c.key.as_str()), Some("266"));
        assert_eq!(
            champions.find(&ChampionLookup::Key(62)).map(|c| c.name.as_str()),
            Some("Wukong")
        );
    }

    #[test]
    fn find_reports_missing_as_none() {
        let champions = two_champions();
        assert!(champions.find(&ChampionLookup::Name("Teemo".to_string())).is_none());
        assert!(champions.find(&ChampionLookup::Id("wukong".to_string())).is_none());
        assert!(champions.find(&ChampionLookup::Key(404)).is_none());
    }
}
