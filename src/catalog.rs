// Fixed option sets for the filter controls.
// Every filter key except the free-text ones draws from one of these lists.

// (filter value, display label)
pub const CATEGORIES: &[(&str, &str)] = &[
    ("sport", "Sport"),
    ("touring", "Touring"),
    ("cruiser", "Cruiser"),
    ("adventure", "Adventure"),
    ("naked", "Naked"),
    ("enduro", "Enduro"),
    ("scooter", "Scooter"),
    ("chopper", "Chopper"),
    ("cafe racer", "Cafe Racer"),
    ("supermoto", "Supermoto"),
    ("motocross", "Motocross"),
    ("trial", "Trial"),
];

pub const BRANDS: &[&str] = &[
    "Yamaha",
    "Honda",
    "BMW",
    "Ducati",
    "KTM",
    "Suzuki",
    "Harley-Davidson",
    "Kawasaki",
    "Triumph",
    "Aprilia",
];

pub const FUEL_TYPES: &[&str] = &["Benzină", "Electric", "Hibrid"];

pub const TRANSMISSIONS: &[&str] = &["Manuală", "Automată", "Semi-automată"];

pub const CONDITIONS: &[&str] = &[
    "La comandă",
    "Excelentă",
    "Foarte bună",
    "Bună",
    "Satisfăcătoare",
];

pub const CITIES: &[&str] = &[
    "București S1",
    "București S2",
    "București S3",
    "București S4",
    "București S5",
    "București S6",
    "Cluj-Napoca",
    "Timișoara",
    "Iași",
    "Constanța",
    "Brașov",
    "Craiova",
    "Galați",
    "Oradea",
    "Ploiești",
    "Sibiu",
    "Bacău",
    "Râmnicu Vâlcea",
    "Arad",
    "Pitești",
    "Baia Mare",
    "Buzău",
    "Satu Mare",
    "Botoșani",
    "Suceava",
    "Piatra Neamț",
    "Târgu Mureș",
    "Focșani",
    "Alba Iulia",
    "Deva",
];
