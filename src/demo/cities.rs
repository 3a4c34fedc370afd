//! Fixed sample dataset for the before/after demo: five cities, each with a
//! hand-authored "after" text split into plain and highlighted segments, and
//! one generic template shared by every "before" page.

#[derive(Debug, PartialEq, Eq)]
pub struct AfterSegment {
    pub text: &'static str,
    pub highlight: bool,
}

const fn plain(text: &'static str) -> AfterSegment {
    AfterSegment { text, highlight: false }
}

const fn mark(text: &'static str) -> AfterSegment {
    AfterSegment { text, highlight: true }
}

#[derive(Debug, PartialEq)]
pub struct CityData {
    pub city: &'static str,
    pub state: &'static str,
    /// Accent colour for the city's pill and title dot.
    pub dot: &'static str,
    /// Uniqueness score shown on the gauge.
    pub unique: u32,
    pub words: u32,
    pub after: &'static [AfterSegment],
}

impl CityData {
    pub fn local_references(&self) -> usize {
        self.after.iter().filter(|s| s.highlight).count()
    }

    pub fn read_minutes(&self) -> u32 {
        // 250 wpm, rounded
        (self.words + 125) / 250
    }
}

pub static CITIES: [CityData; 5] = [
    CityData {
        city: "Austin",
        state: "TX",
        dot: "#C2410C",
        unique: 98,
        words: 1842,
        after: &[
            plain("From "),
            mark("Austin's vibrant South Congress district"),
            plain(" to family practices near "),
            mark("Round Rock and Cedar Park"),
            plain(", the city's "),
            mark("964,000 residents"),
            plain(" have access to a growing network of top-rated dental providers. With "),
            mark("UT Austin's dental school"),
            plain(" feeding local talent into the market, patients benefit from cutting-edge care. Practices in the "),
            mark("Domain and Mueller developments"),
            plain(" are expanding rapidly to meet demand in Austin's booming north side."),
        ],
    },
    CityData {
        city: "Denver",
        state: "CO",
        dot: "#9A3412",
        unique: 96,
        words: 1650,
        after: &[
            plain("Clinics concentrated around "),
            mark("Denver's booming RiNo neighborhood"),
            plain(" have expanded into "),
            mark("Lakewood and Aurora"),
            plain(" as the metro area's "),
            mark("715,000 residents"),
            plain(" drive demand for accessible dental care. The "),
            mark("Colorado Dental Association"),
            plain(" reports a 23% increase in new practices since 2022. Altitude-related dry mouth concerns make "),
            mark("Denver's preventive care specialists"),
            plain(" particularly sought-after among new residents."),
        ],
    },
    CityData {
        city: "Portland",
        state: "OR",
        dot: "#166534",
        unique: 97,
        words: 1923,
        after: &[
            plain("Rooted in "),
            mark("Portland's Alberta Arts District"),
            plain(" with practices extending to "),
            mark("Beaverton and Tigard"),
            plain(", the city's "),
            mark("641,000 residents"),
            plain(" benefit from a community known for "),
            mark("holistic and eco-conscious approaches"),
            plain(" to dental health. Portland's high "),
            mark("coffee and craft beer consumption"),
            plain(" has driven unique demand for cosmetic dentistry and stain-prevention specialists."),
        ],
    },
    CityData {
        city: "Nashville",
        state: "TN",
        dot: "#92400E",
        unique: 95,
        words: 1780,
        after: &[
            plain("Across "),
            mark("Nashville's rapidly expanding East Side"),
            plain(" and established clinics along "),
            mark("West End Avenue near Vanderbilt"),
            plain(", the city's "),
            mark("683,000 residents"),
            plain(" are fueling unprecedented demand. "),
            mark("Nashville's entertainment industry"),
            plain(" creates outsized demand for cosmetic dentistry — performers and songwriters on "),
            mark("Music Row"),
            plain(" represent a growing niche for local practices."),
        ],
    },
    CityData {
        city: "Charlotte",
        state: "NC",
        dot: "#991B1B",
        unique: 99,
        words: 1695,
        after: &[
            plain("From "),
            mark("Charlotte's bustling South End corridor"),
            plain(" to growing suburbs like "),
            mark("Huntersville and Matthews"),
            plain(", the metro's "),
            mark("897,000 residents"),
            plain(" represent one of the fastest-growing dental markets in the Southeast. The influx of "),
            mark("banking professionals from Uptown's financial district"),
            plain(" has driven demand for premium cosmetic work, while "),
            mark("UNC Charlotte's health science campus"),
            plain(" feeds a pipeline of new providers."),
        ],
    },
];

/// Placeholder token substituted with the cycling city name in the generic
/// "before" template.
pub const CITY_PLACEHOLDER: &str = "{CITY}";

pub static GENERIC_PARTS: [&str; 5] = [
    "Welcome to ",
    CITY_PLACEHOLDER,
    ", where you'll find some of the best dentists in the area. With a growing population, residents have access to quality dental care providers. Whether you're looking for general dentistry or specialized services, ",
    CITY_PLACEHOLDER,
    " has plenty of options to meet your needs. Browse our directory to find top-rated dentists near you.",
];
