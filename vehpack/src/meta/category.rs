//! Metadata categories recognised inside a vehicle mod.
//!
//! Each category is identified by an exact file name and carries a fixed
//! root tag (used when merging) and an optional FiveM `data_file` role
//! (used when writing the manifest).

use std::fmt;
use std::str::FromStr;

/// One of the fixed metadata file kinds a vehicle mod can ship.
///
/// Variants are declared in manifest order; iterating [`MetaCategory::ALL`]
/// yields the order used for `files {}` and `data_file` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetaCategory {
    /// `vehicles.meta` - vehicle model definitions.
    Vehicles,
    /// `handling.meta` - physics/handling data.
    Handling,
    /// `carvariations.meta` - paint and mod-kit variations.
    Variations,
    /// `carcols.meta` - colors, kits and lights.
    Colors,
    /// `dlctext.meta` - extra text entries.
    ExtraText,
    /// `vehiclelayouts.meta` - seat and entry layouts.
    Layouts,
}

/// Static description of a category.
struct CategoryInfo {
    file_name: &'static str,
    root_tag: &'static str,
    role: Option<&'static str>,
}

const CATEGORY_TABLE: [CategoryInfo; 6] = [
    CategoryInfo {
        file_name: "vehicles.meta",
        root_tag: "CVehicleModelInfo__InitDataList",
        role: Some("VEHICLE_METADATA_FILE"),
    },
    CategoryInfo {
        file_name: "handling.meta",
        root_tag: "CHandlingDataMgr",
        role: Some("HANDLING_FILE"),
    },
    CategoryInfo {
        file_name: "carvariations.meta",
        root_tag: "CVehicleModelInfoVariation",
        role: Some("VEHICLE_VARIATION_FILE"),
    },
    CategoryInfo {
        file_name: "carcols.meta",
        root_tag: "CVehicleModelInfoVarGlobal",
        role: Some("CARCOLS_FILE"),
    },
    CategoryInfo {
        file_name: "dlctext.meta",
        root_tag: "CExtraTextMetaFile",
        role: Some("DLCTEXT_FILE"),
    },
    CategoryInfo {
        file_name: "vehiclelayouts.meta",
        root_tag: "CVehicleMetadataMgr",
        role: None,
    },
];

impl MetaCategory {
    /// All categories, in manifest order.
    pub const ALL: [MetaCategory; 6] = [
        MetaCategory::Vehicles,
        MetaCategory::Handling,
        MetaCategory::Variations,
        MetaCategory::Colors,
        MetaCategory::ExtraText,
        MetaCategory::Layouts,
    ];

    fn info(self) -> &'static CategoryInfo {
        &CATEGORY_TABLE[self as usize]
    }

    /// Look up the category whose file name matches exactly.
    ///
    /// Matching is case-sensitive: `Vehicles.meta` is not a vehicle
    /// definition file.
    ///
    /// # Examples
    ///
    /// ```
    /// use vehpack::meta::MetaCategory;
    ///
    /// assert_eq!(MetaCategory::from_file_name("carcols.meta"), Some(MetaCategory::Colors));
    /// assert_eq!(MetaCategory::from_file_name("readme.txt"), None);
    /// ```
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.file_name() == name)
    }

    /// The file name this category is stored under, e.g. `handling.meta`.
    pub fn file_name(self) -> &'static str {
        self.info().file_name
    }

    /// The bare root element name, e.g. `CHandlingDataMgr`.
    pub fn root_tag(self) -> &'static str {
        self.info().root_tag
    }

    /// The opening root tag, e.g. `<CHandlingDataMgr>`.
    pub fn open_tag(self) -> String {
        format!("<{}>", self.root_tag())
    }

    /// The closing root tag, e.g. `</CHandlingDataMgr>`.
    pub fn close_tag(self) -> String {
        format!("</{}>", self.root_tag())
    }

    /// The FiveM `data_file` role, if the category declares one.
    pub fn manifest_role(self) -> Option<&'static str> {
        self.info().role
    }
}

impl fmt::Display for MetaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for MetaCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_file_name(s).ok_or_else(|| format!("unknown metadata file '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_variant_order() {
        for (index, category) in MetaCategory::ALL.iter().enumerate() {
            assert_eq!(*category as usize, index);
        }
    }

    #[test]
    fn test_from_file_name_round_trips() {
        for category in MetaCategory::ALL {
            assert_eq!(
                MetaCategory::from_file_name(category.file_name()),
                Some(category)
            );
        }
    }

    #[test]
    fn test_from_file_name_is_case_sensitive() {
        assert_eq!(MetaCategory::from_file_name("VEHICLES.META"), None);
        assert_eq!(MetaCategory::from_file_name("vehicles.meta.bak"), None);
    }

    #[test]
    fn test_tags() {
        assert_eq!(MetaCategory::Handling.open_tag(), "<CHandlingDataMgr>");
        assert_eq!(MetaCategory::Handling.close_tag(), "</CHandlingDataMgr>");
        assert_eq!(
            MetaCategory::Vehicles.open_tag(),
            "<CVehicleModelInfo__InitDataList>"
        );
    }

    #[test]
    fn test_roles() {
        assert_eq!(
            MetaCategory::Vehicles.manifest_role(),
            Some("VEHICLE_METADATA_FILE")
        );
        assert_eq!(MetaCategory::Colors.manifest_role(), Some("CARCOLS_FILE"));
        assert_eq!(MetaCategory::Layouts.manifest_role(), None);
    }

    #[test]
    fn test_from_str() {
        let category: MetaCategory = "dlctext.meta".parse().unwrap();
        assert_eq!(category, MetaCategory::ExtraText);
        assert!("nope.meta".parse::<MetaCategory>().is_err());
    }
}
