//! Built-in city table.
//!
//! Japanese prefectural capitals (with the prefecture name as an alias) and a
//! set of major world cities. Coordinates are city-hall positions to four
//! decimal places.

/// One row of the built-in table.
#[derive(Debug, Clone, Copy)]
pub struct CityRecord {
    pub name: &'static str,
    pub romaji: &'static str,
    pub kana: &'static str,
    pub aliases: &'static [&'static str],
    pub country: &'static str,
    pub longitude: f64,
    pub latitude: f64,
    pub time_zone: &'static str,
}

const fn jp(
    name: &'static str,
    romaji: &'static str,
    kana: &'static str,
    aliases: &'static [&'static str],
    longitude: f64,
    latitude: f64,
) -> CityRecord {
    CityRecord {
        name,
        romaji,
        kana,
        aliases,
        country: "JP",
        longitude,
        latitude,
        time_zone: "Asia/Tokyo",
    }
}

const fn world(
    name: &'static str,
    romaji: &'static str,
    kana: &'static str,
    country: &'static str,
    longitude: f64,
    latitude: f64,
    time_zone: &'static str,
) -> CityRecord {
    CityRecord {
        name,
        romaji,
        kana,
        aliases: &[],
        country,
        longitude,
        latitude,
        time_zone,
    }
}

/// Number of entries in [`CITIES`].
pub const CITY_COUNT: usize = 77;

/// The built-in table, Japanese entries first (north to south).
pub const CITIES: [CityRecord; CITY_COUNT] = [
    jp("札幌", "Sapporo", "さっぽろ", &["北海道", "Hokkaido"], 141.3544, 43.0621),
    jp("青森", "Aomori", "あおもり", &["青森県"], 140.7400, 40.8244),
    jp("盛岡", "Morioka", "もりおか", &["岩手県", "Iwate"], 141.1527, 39.7036),
    jp("仙台", "Sendai", "せんだい", &["宮城県", "Miyagi"], 140.8719, 38.2688),
    jp("秋田", "Akita", "あきた", &["秋田県"], 140.1024, 39.7186),
    jp("山形", "Yamagata", "やまがた", &["山形県"], 140.3633, 38.2404),
    jp("福島", "Fukushima", "ふくしま", &["福島県"], 140.4677, 37.7500),
    jp("水戸", "Mito", "みと", &["茨城県", "Ibaraki"], 140.4468, 36.3418),
    jp("宇都宮", "Utsunomiya", "うつのみや", &["栃木県", "Tochigi"], 139.8836, 36.5551),
    jp("前橋", "Maebashi", "まえばし", &["群馬県", "Gunma"], 139.0608, 36.3895),
    jp("さいたま", "Saitama", "さいたま", &["埼玉県", "浦和", "Urawa"], 139.6489, 35.8617),
    jp("千葉", "Chiba", "ちば", &["千葉県"], 140.1233, 35.6074),
    jp("東京", "Tokyo", "とうきょう", &["東京都", "新宿", "Shinjuku"], 139.6917, 35.6895),
    jp("横浜", "Yokohama", "よこはま", &["神奈川県", "Kanagawa"], 139.6380, 35.4437),
    jp("新潟", "Niigata", "にいがた", &["新潟県"], 139.0364, 37.9161),
    jp("富山", "Toyama", "とやま", &["富山県"], 137.2113, 36.6953),
    jp("金沢", "Kanazawa", "かなざわ", &["石川県", "Ishikawa"], 136.6256, 36.5613),
    jp("福井", "Fukui", "ふくい", &["福井県"], 136.2196, 36.0641),
    jp("甲府", "Kofu", "こうふ", &["山梨県", "Yamanashi"], 138.5684, 35.6639),
    jp("長野", "Nagano", "ながの", &["長野県"], 138.1810, 36.6513),
    jp("岐阜", "Gifu", "ぎふ", &["岐阜県"], 136.7223, 35.4233),
    jp("静岡", "Shizuoka", "しずおか", &["静岡県"], 138.3831, 34.9756),
    jp("名古屋", "Nagoya", "なごや", &["愛知県", "Aichi"], 136.9066, 35.1815),
    jp("津", "Tsu", "つ", &["三重県", "Mie"], 136.5086, 34.7303),
    jp("大津", "Otsu", "おおつ", &["滋賀県", "Shiga"], 135.8686, 35.0045),
    jp("京都", "Kyoto", "きょうと", &["京都府"], 135.7681, 35.0116),
    jp("大阪", "Osaka", "おおさか", &["大阪府"], 135.5023, 34.6937),
    jp("神戸", "Kobe", "こうべ", &["兵庫県", "Hyogo"], 135.1955, 34.6901),
    jp("奈良", "Nara", "なら", &["奈良県"], 135.8048, 34.6851),
    jp("和歌山", "Wakayama", "わかやま", &["和歌山県"], 135.1675, 34.2260),
    jp("鳥取", "Tottori", "とっとり", &["鳥取県"], 134.2383, 35.5011),
    jp("松江", "Matsue", "まつえ", &["島根県", "Shimane"], 133.0505, 35.4723),
    jp("岡山", "Okayama", "おかやま", &["岡山県"], 133.9195, 34.6551),
    jp("広島", "Hiroshima", "ひろしま", &["広島県"], 132.4553, 34.3853),
    jp("山口", "Yamaguchi", "やまぐち", &["山口県"], 131.4714, 34.1785),
    jp("徳島", "Tokushima", "とくしま", &["徳島県"], 134.5593, 34.0658),
    jp("高松", "Takamatsu", "たかまつ", &["香川県", "Kagawa"], 134.0434, 34.3401),
    jp("松山", "Matsuyama", "まつやま", &["愛媛県", "Ehime"], 132.7657, 33.8416),
    jp("高知", "Kochi", "こうち", &["高知県"], 133.5311, 33.5597),
    jp("福岡", "Fukuoka", "ふくおか", &["福岡県", "博多", "Hakata"], 130.4017, 33.5904),
    jp("佐賀", "Saga", "さが", &["佐賀県"], 130.2988, 33.2494),
    jp("長崎", "Nagasaki", "ながさき", &["長崎県"], 129.8737, 32.7503),
    jp("熊本", "Kumamoto", "くまもと", &["熊本県"], 130.7417, 32.8031),
    jp("大分", "Oita", "おおいた", &["大分県"], 131.6126, 33.2382),
    jp("宮崎", "Miyazaki", "みやざき", &["宮崎県"], 131.4239, 31.9111),
    jp("鹿児島", "Kagoshima", "かごしま", &["鹿児島県"], 130.5581, 31.5966),
    jp("那覇", "Naha", "なは", &["沖縄県", "Okinawa"], 127.6809, 26.2124),
    world("ソウル", "Seoul", "そうる", "KR", 126.9780, 37.5665, "Asia/Seoul"),
    world("釜山", "Busan", "ぷさん", "KR", 129.0756, 35.1796, "Asia/Seoul"),
    world("北京", "Beijing", "ぺきん", "CN", 116.4074, 39.9042, "Asia/Shanghai"),
    world("上海", "Shanghai", "しゃんはい", "CN", 121.4737, 31.2304, "Asia/Shanghai"),
    world("香港", "Hong Kong", "ほんこん", "HK", 114.1694, 22.3193, "Asia/Hong_Kong"),
    world("台北", "Taipei", "たいぺい", "TW", 121.5654, 25.0330, "Asia/Taipei"),
    world("マニラ", "Manila", "まにら", "PH", 120.9842, 14.5995, "Asia/Manila"),
    world("バンコク", "Bangkok", "ばんこく", "TH", 100.5018, 13.7563, "Asia/Bangkok"),
    world("シンガポール", "Singapore", "しんがぽーる", "SG", 103.8198, 1.3521, "Asia/Singapore"),
    world("デリー", "Delhi", "でりー", "IN", 77.2090, 28.6139, "Asia/Kolkata"),
    world("ムンバイ", "Mumbai", "むんばい", "IN", 72.8777, 19.0760, "Asia/Kolkata"),
    world("ドバイ", "Dubai", "どばい", "AE", 55.2708, 25.2048, "Asia/Dubai"),
    world("シドニー", "Sydney", "しどにー", "AU", 151.2093, -33.8688, "Australia/Sydney"),
    world("メルボルン", "Melbourne", "めるぼるん", "AU", 144.9631, -37.8136, "Australia/Melbourne"),
    world("オークランド", "Auckland", "おーくらんど", "NZ", 174.7633, -36.8485, "Pacific/Auckland"),
    world("モスクワ", "Moscow", "もすくわ", "RU", 37.6173, 55.7558, "Europe/Moscow"),
    world("ロンドン", "London", "ろんどん", "GB", -0.1278, 51.5074, "Europe/London"),
    world("パリ", "Paris", "ぱり", "FR", 2.3522, 48.8566, "Europe/Paris"),
    world("ベルリン", "Berlin", "べるりん", "DE", 13.4050, 52.5200, "Europe/Berlin"),
    world("ローマ", "Rome", "ろーま", "IT", 12.4964, 41.9028, "Europe/Rome"),
    world("マドリード", "Madrid", "まどりーど", "ES", -3.7038, 40.4168, "Europe/Madrid"),
    world("ニューヨーク", "New York", "にゅーよーく", "US", -74.0060, 40.7128, "America/New_York"),
    world("シカゴ", "Chicago", "しかご", "US", -87.6298, 41.8781, "America/Chicago"),
    world("デンバー", "Denver", "でんばー", "US", -104.9903, 39.7392, "America/Denver"),
    world("ロサンゼルス", "Los Angeles", "ろさんぜるす", "US", -118.2437, 34.0522, "America/Los_Angeles"),
    world("ホノルル", "Honolulu", "ほのるる", "US", -157.8583, 21.3069, "Pacific/Honolulu"),
    world("トロント", "Toronto", "とろんと", "CA", -79.3832, 43.6532, "America/Toronto"),
    world("バンクーバー", "Vancouver", "ばんくーばー", "CA", -123.1207, 49.2827, "America/Vancouver"),
    world("メキシコシティ", "Mexico City", "めきしこしてぃ", "MX", -99.1332, 19.4326, "America/Mexico_City"),
    world("サンパウロ", "São Paulo", "さんぱうろ", "BR", -46.6333, -23.5505, "America/Sao_Paulo"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_seven_japanese_capitals() {
        let jp = CITIES.iter().filter(|c| c.country == "JP").count();
        assert_eq!(jp, 47);
    }

    #[test]
    fn coordinates_in_range() {
        for c in CITIES {
            assert!((-180.0..=180.0).contains(&c.longitude), "{}", c.romaji);
            assert!((-90.0..=90.0).contains(&c.latitude), "{}", c.romaji);
        }
    }

    #[test]
    fn romaji_unique() {
        for (i, a) in CITIES.iter().enumerate() {
            for b in &CITIES[i + 1..] {
                assert_ne!(a.romaji, b.romaji);
            }
        }
    }
}
