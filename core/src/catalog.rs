//! Built-in example requests against the geographic API.

/// How a parameter is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    /// Choose from the loaded district list.
    DistrictDropdown,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiParam {
    pub name: &'static str,
    pub kind: ParamKind,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub default_value: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiExample {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub path_template: &'static str,
    pub params: &'static [ApiParam],
}

const fn param(
    name: &'static str,
    kind: ParamKind,
    label: &'static str,
    placeholder: &'static str,
) -> ApiParam {
    ApiParam {
        name,
        kind,
        label,
        placeholder,
        default_value: None,
    }
}

const DISTRICT: ApiParam = param(
    "district",
    ParamKind::DistrictDropdown,
    "District (optional)",
    "e.g. 天河区",
);

pub const EXAMPLES: &[ApiExample] = &[
    ApiExample {
        id: "get-districts",
        title: "List all districts",
        description: "Every administrative district of Guangzhou. Also feeds the district dropdowns.",
        path_template: "/districts",
        params: &[],
    },
    ApiExample {
        id: "get-streets-by-district-or-name",
        title: "Search streets",
        description: "Filter streets by district and/or fuzzy-match the street name.",
        path_template: "/streets",
        params: &[
            DISTRICT,
            param("name", ParamKind::Text, "Street name (fuzzy, optional)", "e.g. 五山"),
        ],
    },
    ApiExample {
        id: "get-roads-complex",
        title: "Search roads",
        description: "Filter roads by district, street and fuzzy road name, with paging.",
        path_template: "/roads",
        params: &[
            DISTRICT,
            param("street", ParamKind::Text, "Street (optional)", "e.g. 五山街道"),
            param("name", ParamKind::Text, "Road name (fuzzy, optional)", "e.g. 中山大道"),
            ApiParam {
                default_value: Some("1"),
                ..param("page", ParamKind::Number, "Page", "1")
            },
            ApiParam {
                default_value: Some("20"),
                ..param("pageSize", ParamKind::Number, "Page size", "20")
            },
        ],
    },
    ApiExample {
        id: "street-to-districts",
        title: "Districts of a street",
        description: "Which district or districts a street belongs to, via /streets.",
        path_template: "/streets",
        params: &[param("name", ParamKind::Text, "Street name (fuzzy)", "e.g. 沙河")],
    },
    ApiExample {
        id: "road-to-streets-districts",
        title: "Streets and districts of a road",
        description: "Which streets and districts a road crosses, via /roads.",
        path_template: "/roads",
        params: &[param("name", ParamKind::Text, "Road name (fuzzy)", "e.g. 中山大道西")],
    },
];

pub fn find_example(id: &str) -> Option<&'static ApiExample> {
    EXAMPLES.iter().find(|e| e.id == id)
}

impl ApiExample {
    pub fn param(&self, name: &str) -> Option<&'static ApiParam> {
        self.params.iter().find(|p| p.name == name)
    }
}
