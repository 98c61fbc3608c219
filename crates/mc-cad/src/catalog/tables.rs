//! Fixed class/type/size tables for the built-in catalog
//!
//! Bearing tables follow the SKT standard; fastener tables carry the ISO or
//! ASME standard designation as the type label. Size labels are the catalog
//! designations verbatim, including `/` in imperial thread sizes.

use super::CatalogFamily;

/// One type (standard) within a class, with its size table
pub(super) struct TypeEntry {
    pub name: &'static str,
    pub sizes: &'static [&'static str],
}

/// One class within a family
pub(super) struct ClassEntry {
    pub name: &'static str,
    pub types: &'static [TypeEntry],
}

const METRIC_COARSE: &[&str] = &[
    "M2-0.4", "M2.5-0.45", "M3-0.5", "M4-0.7", "M5-0.8", "M6-1", "M8-1.25", "M10-1.5", "M12-1.75",
];

const METRIC_WASHER: &[&str] = &["M2", "M2.5", "M3", "M4", "M5", "M6", "M8", "M10", "M12"];

const IMPERIAL_COARSE: &[&str] = &["#4-40", "#6-32", "#8-32", "#10-24", "1/4-20", "5/16-18", "3/8-16"];

const BALL_BEARING_SIZES: &[&str] = &[
    "M3-10-4", "M4-12-4", "M5-16-5", "M6-19-6", "M8-22-7", "M10-26-8", "M12-32-10", "M15-35-11",
    "M17-40-12", "M20-47-14",
];

const ROLLER_BEARING_SIZES: &[&str] = &[
    "M15-35-11", "M17-40-12", "M20-47-14", "M25-52-15", "M30-62-16",
];

const TAPERED_BEARING_SIZES: &[&str] = &[
    "M15-42-14.25", "M17-47-15.25", "M20-52-16.25", "M25-62-18.25", "M30-72-20.75",
];

const BEARINGS: &[ClassEntry] = &[
    ClassEntry {
        name: "Single Row Deep Groove Ball Bearing",
        types: &[TypeEntry {
            name: "SKT",
            sizes: BALL_BEARING_SIZES,
        }],
    },
    ClassEntry {
        name: "Single Row Capped DeepGrooveBall Bearing",
        types: &[TypeEntry {
            name: "SKT",
            sizes: BALL_BEARING_SIZES,
        }],
    },
    ClassEntry {
        name: "Single Row Angular Contact BallBearing",
        types: &[TypeEntry {
            name: "SKT",
            sizes: &["M10-30-9", "M12-32-10", "M15-35-11", "M17-40-12", "M20-47-14"],
        }],
    },
    ClassEntry {
        name: "Single Row Cylindrical Roller Bearing",
        types: &[TypeEntry {
            name: "SKT",
            sizes: ROLLER_BEARING_SIZES,
        }],
    },
    ClassEntry {
        name: "Single Row Tapered Roller Bearing",
        types: &[TypeEntry {
            name: "SKT",
            sizes: TAPERED_BEARING_SIZES,
        }],
    },
];

const NUTS: &[ClassEntry] = &[
    ClassEntry {
        name: "Hex Nut",
        types: &[
            TypeEntry {
                name: "iso4032",
                sizes: METRIC_COARSE,
            },
            TypeEntry {
                name: "iso4033",
                sizes: METRIC_COARSE,
            },
            TypeEntry {
                name: "iso4035",
                sizes: METRIC_COARSE,
            },
        ],
    },
    ClassEntry {
        name: "Domed Cap Nut",
        types: &[TypeEntry {
            name: "din1587",
            sizes: &["M3-0.5", "M4-0.7", "M5-0.8", "M6-1", "M8-1.25", "M10-1.5", "M12-1.75"],
        }],
    },
    ClassEntry {
        name: "Square Nut",
        types: &[
            TypeEntry {
                name: "din557",
                sizes: &["M5-0.8", "M6-1", "M8-1.25", "M10-1.5", "M12-1.75"],
            },
            TypeEntry {
                name: "asme18.2.2",
                sizes: IMPERIAL_COARSE,
            },
        ],
    },
    ClassEntry {
        name: "Heat Set Nut",
        types: &[
            TypeEntry {
                name: "McMaster-Carr",
                sizes: &["M2-0.4", "M3-0.5", "M4-0.7", "M5-0.8", "M6-1"],
            },
            TypeEntry {
                name: "Hilitchi",
                sizes: &["M2-0.4", "M2.5-0.45", "M3-0.5", "M4-0.7", "M5-0.8"],
            },
        ],
    },
];

const SCREWS: &[ClassEntry] = &[
    ClassEntry {
        name: "Socket Head Cap Screw",
        types: &[
            TypeEntry {
                name: "iso4762",
                sizes: METRIC_COARSE,
            },
            TypeEntry {
                name: "asme_b18.3",
                sizes: IMPERIAL_COARSE,
            },
        ],
    },
    ClassEntry {
        name: "Counter Sunk Screw",
        types: &[
            TypeEntry {
                name: "iso2009",
                sizes: METRIC_COARSE,
            },
            TypeEntry {
                name: "iso7046",
                sizes: METRIC_COARSE,
            },
            TypeEntry {
                name: "iso10642",
                sizes: METRIC_COARSE,
            },
        ],
    },
    ClassEntry {
        name: "Pan Head Screw",
        types: &[
            TypeEntry {
                name: "iso1580",
                sizes: METRIC_COARSE,
            },
            TypeEntry {
                name: "iso14583",
                sizes: METRIC_COARSE,
            },
            TypeEntry {
                name: "asme_b18.6.3",
                sizes: IMPERIAL_COARSE,
            },
        ],
    },
    ClassEntry {
        name: "Hex Head Screw",
        types: &[
            TypeEntry {
                name: "iso4014",
                sizes: METRIC_COARSE,
            },
            TypeEntry {
                name: "iso4017",
                sizes: METRIC_COARSE,
            },
        ],
    },
    ClassEntry {
        name: "Set Screw",
        types: &[TypeEntry {
            name: "iso4026",
            sizes: &["M3-0.5", "M4-0.7", "M5-0.8", "M6-1", "M8-1.25", "M10-1.5"],
        }],
    },
];

const WASHERS: &[ClassEntry] = &[
    ClassEntry {
        name: "Plain Washer",
        types: &[
            TypeEntry {
                name: "iso7089",
                sizes: METRIC_WASHER,
            },
            TypeEntry {
                name: "iso7091",
                sizes: METRIC_WASHER,
            },
            TypeEntry {
                name: "iso7093",
                sizes: METRIC_WASHER,
            },
        ],
    },
    ClassEntry {
        name: "Chamfered Washer",
        types: &[TypeEntry {
            name: "iso7090",
            sizes: METRIC_WASHER,
        }],
    },
];

/// Class names of a family, in table order
pub(super) fn classes(family: CatalogFamily) -> Vec<&'static str> {
    family_table(family).iter().map(|c| c.name).collect()
}

/// Look up one class entry by label
pub(super) fn class_entry(family: CatalogFamily, class: &str) -> Option<&'static ClassEntry> {
    family_table(family).iter().find(|c| c.name == class)
}

fn family_table(family: CatalogFamily) -> &'static [ClassEntry] {
    match family {
        CatalogFamily::Bearing => BEARINGS,
        CatalogFamily::Nut => NUTS,
        CatalogFamily::Screw => SCREWS,
        CatalogFamily::Washer => WASHERS,
    }
}
