//! Fixed content of the funnel: universities, cycles, departments, lab topics.

use nexglab_config::LabsConfig;
use nexglab_locale::{Key, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct University {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: Key,
    pub logo: &'static str,
    /// Entry page of the university's own login.
    pub entry: &'static str,
}

pub const UNIVERSITIES: &[University] = &[University {
    id: "enstp",
    name: "ENSTP",
    full_name: Key::Enstp,
    logo: "/images/enstp-logo.png",
    entry: "/enstp",
}];

pub fn university(id: &str) -> Option<&'static University> {
    UNIVERSITIES.iter().find(|university| university.id == id)
}

/// Case-insensitive substring match on the short name or the localized full name.
pub fn search_universities(query: &str, locale: Locale) -> Vec<&'static University> {
    let needle = query.trim().to_lowercase();
    UNIVERSITIES
        .iter()
        .filter(|university| {
            needle.is_empty()
                || university.name.to_lowercase().contains(&needle)
                || locale.text(university.full_name).to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Preparatory,
    Engineering,
}

impl Cycle {
    pub const ALL: [Cycle; 2] = [Cycle::Engineering, Cycle::Preparatory];

    pub const fn code(self) -> &'static str {
        match self {
            Cycle::Preparatory => "CP",
            Cycle::Engineering => "CI",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Cycle::Preparatory => "/enstp/cp",
            Cycle::Engineering => "/enstp/ci",
        }
    }

    pub const fn title(self) -> Key {
        match self {
            Cycle::Preparatory => Key::Cp,
            Cycle::Engineering => Key::Ci,
        }
    }

    pub const fn description(self) -> Key {
        match self {
            Cycle::Preparatory => Key::CpDescription,
            Cycle::Engineering => Key::CiDescription,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module {
    pub title: &'static str,
    pub weeks: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Department {
    pub code: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    /// Departments without a page list their modules inline.
    pub path: Option<&'static str>,
    pub modules: &'static [Module],
}

pub const ENGINEERING_DEPARTMENTS: &[Department] = &[
    Department {
        code: "DIB",
        name: "Département Infrastructures de Base",
        summary: "Modules et ressources pour les infrastructures de génie civil et travaux publics.",
        path: Some("/enstp/ci/dib"),
        modules: &[
            Module { title: "Conception des routes", weeks: 8 },
            Module { title: "Hydraulique appliquée", weeks: 6 },
            Module { title: "Géotechnique avancée", weeks: 10 },
            Module { title: "Ouvrages d'art", weeks: 12 },
        ],
    },
    Department {
        code: "DMS",
        name: "Département Matériaux et Structures",
        summary: "Modules et ressources pour l'étude des matériaux et structures en génie civil.",
        path: None,
        modules: &[
            Module { title: "Résistance des matériaux", weeks: 10 },
            Module { title: "Béton armé avancé", weeks: 12 },
            Module { title: "Structures métalliques", weeks: 8 },
            Module { title: "Matériaux innovants", weeks: 6 },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabId {
    Rmr,
    Pdl,
    PetroGeo,
}

/// How a lab is reached from its topic page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabAccess {
    /// Same-origin wrapper page holding the lab in an iframe.
    Embedded { page: &'static str },
    /// The external lab itself, opened in a new tab.
    NewTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lab {
    pub id: LabId,
    pub name: &'static str,
    pub description: &'static str,
    pub access: LabAccess,
}

impl Lab {
    pub fn url(&self, labs: &LabsConfig) -> String {
        match self.id {
            LabId::Rmr => labs.rmr_url.clone(),
            LabId::Pdl => labs.soils_url.clone(),
            LabId::PetroGeo => labs.geology_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub slug: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub lab: Lab,
}

impl Topic {
    pub fn path(&self) -> String {
        format!("/enstp/ci/dib/{}", self.slug)
    }
}

pub const RMR_LAB_PAGE: &str = "/enstp/ci/dib/mecanique-roches/rmr-lab";

pub const DIB_TOPICS: &[Topic] = &[
    Topic {
        slug: "tp-geologie",
        icon: "🔍",
        title: "TP GÉOLOGIE",
        summary: "Étude des roches et minéraux avec analyses pétrographiques.",
        lab: Lab {
            id: LabId::PetroGeo,
            name: "PETRO Geo Lab",
            description: "Laboratoire virtuel pour l'étude pétrographique des roches et minéraux.",
            access: LabAccess::NewTab,
        },
    },
    Topic {
        slug: "mecanique-roches",
        icon: "🪨",
        title: "MÉCANIQUE DES ROCHES",
        summary: "Étude des propriétés mécaniques des roches et classification géomécanique.",
        lab: Lab {
            id: LabId::Rmr,
            name: "MDR \"RMR\" Lab",
            description: "Laboratoire virtuel pour l'étude de la classification géomécanique des roches (Rock Mass Rating).",
            access: LabAccess::Embedded { page: RMR_LAB_PAGE },
        },
    },
    Topic {
        slug: "mecanique-sols",
        icon: "🧪",
        title: "MÉCANIQUE DES SOLS 3",
        summary: "Analyse avancée des propriétés mécaniques des sols et essais de terrain.",
        lab: Lab {
            id: LabId::Pdl,
            name: "Essai PDL Lab",
            description: "Simulation interactive d'essais au pénétromètre dynamique léger pour l'analyse des sols.",
            access: LabAccess::NewTab,
        },
    },
];

pub fn topic(slug: &str) -> Option<&'static Topic> {
    DIB_TOPICS.iter().find(|topic| topic.slug == slug)
}
