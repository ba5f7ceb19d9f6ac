//! Built-in destination catalogue, region codes and category filters.
//!
//! The server seeds its store from [`seed_destinations`] unless a catalogue
//! file is configured, in which case [`parse_catalogue`] reads a JSON array of
//! [`NewDestination`] drafts.

use crate::NewDestination;

/// Category filter meaning "every category".
pub const ALL_CATEGORIES: &str = "전체";

/// Category filters offered by the popular-destinations view, `전체` first.
pub const CATEGORY_FILTERS: [&str; 5] = [ALL_CATEGORIES, "자연", "문화/역사", "해변", "도시"];

/// Region sentinel the map view sends for the whole country.
pub const ALL_REGIONS: &str = "all";

/// A selectable region code with its Korean display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Flat code stored on destinations.
    pub code: &'static str,
    /// Korean label shown on the map.
    pub name_korean: &'static str,
}

/// Every region code the map offers.
///
/// The seed list files Bulguksa, Hahoe and Jinhae under the older
/// `"gyeongsang"` code, which is not on the map. Those three are reachable
/// through an empty region selection, `all` and category views, never
/// through a map region.
pub const REGIONS: [Region; 17] = [
    Region { code: "seoul", name_korean: "서울" },
    Region { code: "gyeonggi", name_korean: "경기도" },
    Region { code: "incheon", name_korean: "인천" },
    Region { code: "gangwon", name_korean: "강원도" },
    Region { code: "chungbuk", name_korean: "충청북도" },
    Region { code: "chungnam", name_korean: "충청남도" },
    Region { code: "daejeon", name_korean: "대전" },
    Region { code: "sejong", name_korean: "세종" },
    Region { code: "jeonbuk", name_korean: "전라북도" },
    Region { code: "jeonnam", name_korean: "전라남도" },
    Region { code: "gwangju", name_korean: "광주" },
    Region { code: "gyeongbuk", name_korean: "경상북도" },
    Region { code: "gyeongnam", name_korean: "경상남도" },
    Region { code: "busan", name_korean: "부산" },
    Region { code: "daegu", name_korean: "대구" },
    Region { code: "ulsan", name_korean: "울산" },
    Region { code: "jeju", name_korean: "제주도" },
];

/// Look up a region by code.
#[must_use]
pub fn region(code: &str) -> Option<Region> {
    REGIONS.iter().copied().find(|region| region.code == code)
}

struct Seed {
    name: &'static str,
    name_korean: &'static str,
    description: &'static str,
    region: &'static str,
    category: &'static str,
    photo: &'static str,
    rating: f64,
    tags: &'static [&'static str],
    latitude: f64,
    longitude: f64,
}

const IMAGE_QUERY: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400";

const SEEDS: [Seed; 8] = [
    Seed {
        name: "Jeju Island",
        name_korean: "제주도",
        description: "에메랄드빛 바다와 한라산이 어우러진 섬",
        region: "jeju",
        category: "자연",
        photo: "photo-1578662996442-48f60103fc96",
        rating: 4.8,
        tags: &["섬", "자연", "해변", "산"],
        latitude: 33.4996,
        longitude: 126.5312,
    },
    Seed {
        name: "Busan Haeundae",
        name_korean: "부산 해운대",
        description: "도시와 바다가 만나는 아름다운 해변가",
        region: "busan",
        category: "해변",
        photo: "photo-1511593358241-7eea1f3c84e5",
        rating: 4.6,
        tags: &["해변", "도시", "야경"],
        latitude: 35.1584,
        longitude: 129.1590,
    },
    Seed {
        name: "Bulguksa Temple",
        name_korean: "경주 불국사",
        description: "신라시대 역사가 살아 숨쉬는 전통 사찰",
        region: "gyeongsang",
        category: "문화/역사",
        photo: "photo-1590736969955-71cc94901144",
        rating: 4.7,
        tags: &["역사", "문화", "사찰"],
        latitude: 35.7900,
        longitude: 129.3322,
    },
    Seed {
        name: "Seoraksan National Park",
        name_korean: "설악산 국립공원",
        description: "웅장한 산세와 단풍이 아름다운 국립공원",
        region: "gangwon",
        category: "자연",
        photo: "photo-1581833971358-2c8b550f87b3",
        rating: 4.5,
        tags: &["자연", "등산", "단풍"],
        latitude: 38.1198,
        longitude: 128.4653,
    },
    Seed {
        name: "Seoul Myeongdong",
        name_korean: "서울 명동",
        description: "쇼핑과 문화가 살아 숨쉬는 서울의 중심가",
        region: "seoul",
        category: "도시",
        photo: "photo-1517154421773-0529f29ea451",
        rating: 4.6,
        tags: &["도시", "쇼핑", "문화"],
        latitude: 37.5636,
        longitude: 126.9822,
    },
    Seed {
        name: "Andong Hahoe Village",
        name_korean: "안동 하회마을",
        description: "조선시대 전통문화가 보존된 유네스코 세계문화유산",
        region: "gyeongsang",
        category: "문화/역사",
        photo: "photo-1578160112054-954a67602b88",
        rating: 4.7,
        tags: &["전통", "역사", "유네스코"],
        latitude: 36.5394,
        longitude: 128.5185,
    },
    Seed {
        name: "Jinhae Cherry Blossom",
        name_korean: "진해 벚꽃길",
        description: "봄철 전국 최고의 벚꽃 명소",
        region: "gyeongsang",
        category: "자연",
        photo: "photo-1522383225653-ed111181a951",
        rating: 4.9,
        tags: &["벚꽃", "자연", "봄"],
        latitude: 35.1463,
        longitude: 128.7036,
    },
    Seed {
        name: "Ganghwa Island",
        name_korean: "강화도",
        description: "역사와 자연이 공존하는 서해의 보석",
        region: "gyeonggi",
        category: "자연",
        photo: "photo-1578662996442-48f60103fc96",
        rating: 4.4,
        tags: &["섬", "역사", "갯벌"],
        latitude: 37.7473,
        longitude: 126.4877,
    },
];

impl Seed {
    fn to_draft(&self) -> NewDestination {
        NewDestination {
            name: self.name.to_owned(),
            name_korean: self.name_korean.to_owned(),
            description: self.description.to_owned(),
            region: self.region.to_owned(),
            category: self.category.to_owned(),
            image_url: format!("https://images.unsplash.com/{}{IMAGE_QUERY}", self.photo),
            rating: self.rating,
            tags: self.tags.iter().map(|tag| (*tag).to_owned()).collect(),
            latitude: Some(self.latitude),
            longitude: Some(self.longitude),
        }
    }
}

/// The eight destinations every fresh process starts with.
#[must_use]
pub fn seed_destinations() -> Vec<NewDestination> {
    SEEDS.iter().map(Seed::to_draft).collect()
}

/// Errors raised while reading a catalogue file's contents.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// The payload was not a JSON array of destination drafts.
    #[error("catalogue is not a valid JSON array of destinations: {0}")]
    Parse(#[from] serde_json::Error),
    /// The array contained no destinations.
    #[error("catalogue contains no destinations")]
    Empty,
}

/// Parse a JSON array of [`NewDestination`] drafts.
///
/// # Errors
/// Returns [`CatalogueError::Parse`] for malformed JSON or missing required
/// fields and [`CatalogueError::Empty`] for an empty array.
///
/// # Examples
/// ```
/// use trippick_core::catalogue::parse_catalogue;
///
/// let json = r#"[{
///     "name": "Jeju Island", "nameKorean": "제주도", "description": "Island",
///     "region": "jeju", "category": "자연", "imageUrl": "https://example.com/j.jpg",
///     "rating": 4.8, "tags": ["섬"]
/// }]"#;
/// let drafts = parse_catalogue(json).expect("valid catalogue");
/// assert_eq!(drafts.len(), 1);
/// ```
#[cfg(feature = "serde")]
pub fn parse_catalogue(json: &str) -> Result<Vec<NewDestination>, CatalogueError> {
    let drafts: Vec<NewDestination> = serde_json::from_str(json)?;
    if drafts.is_empty() {
        return Err(CatalogueError::Empty);
    }
    Ok(drafts)
}
