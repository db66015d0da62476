//! Name tables for the reference engine: (zh, ko, en) triples.

/// The twelve palaces in traversal order (Life palace first).
pub const PALACES: [(&str, &str, &str); 12] = [
    ("命宫", "명궁", "Life"),
    ("兄弟", "형제궁", "Siblings"),
    ("夫妻", "부부궁", "Spouse"),
    ("子女", "자녀궁", "Children"),
    ("财帛", "재백궁", "Wealth"),
    ("疾厄", "질액궁", "Health"),
    ("迁移", "천이궁", "Travel"),
    ("仆役", "노복궁", "Friends"),
    ("官禄", "관록궁", "Career"),
    ("田宅", "전택궁", "Property"),
    ("福德", "복덕궁", "Fortune"),
    ("父母", "부모궁", "Parents"),
];

/// The ten heavenly stems.
pub const STEMS: [(&str, &str, &str); 10] = [
    ("甲", "갑", "Jia"),
    ("乙", "을", "Yi"),
    ("丙", "병", "Bing"),
    ("丁", "정", "Ding"),
    ("戊", "무", "Wu"),
    ("己", "기", "Ji"),
    ("庚", "경", "Geng"),
    ("辛", "신", "Xin"),
    ("壬", "임", "Ren"),
    ("癸", "계", "Gui"),
];

/// The twelve earthly branches.
pub const BRANCHES: [(&str, &str, &str); 12] = [
    ("子", "자", "Zi"),
    ("丑", "축", "Chou"),
    ("寅", "인", "Yin"),
    ("卯", "묘", "Mao"),
    ("辰", "진", "Chen"),
    ("巳", "사", "Si"),
    ("午", "오", "Wu"),
    ("未", "미", "Wei"),
    ("申", "신", "Shen"),
    ("酉", "유", "You"),
    ("戌", "술", "Xu"),
    ("亥", "해", "Hai"),
];

/// Chinese zodiac animals, indexed by (year - 4) mod 12.
pub const ZODIAC: [(&str, &str, &str); 12] = [
    ("鼠", "쥐", "Rat"),
    ("牛", "소", "Ox"),
    ("虎", "호랑이", "Tiger"),
    ("兔", "토끼", "Rabbit"),
    ("龙", "용", "Dragon"),
    ("蛇", "뱀", "Snake"),
    ("马", "말", "Horse"),
    ("羊", "양", "Goat"),
    ("猴", "원숭이", "Monkey"),
    ("鸡", "닭", "Rooster"),
    ("狗", "개", "Dog"),
    ("猪", "돼지", "Pig"),
];

/// Western zodiac signs, Aries first.
pub const SIGNS: [(&str, &str, &str); 12] = [
    ("白羊座", "양자리", "Aries"),
    ("金牛座", "황소자리", "Taurus"),
    ("双子座", "쌍둥이자리", "Gemini"),
    ("巨蟹座", "게자리", "Cancer"),
    ("狮子座", "사자자리", "Leo"),
    ("处女座", "처녀자리", "Virgo"),
    ("天秤座", "천칭자리", "Libra"),
    ("天蝎座", "전갈자리", "Scorpio"),
    ("射手座", "궁수자리", "Sagittarius"),
    ("摩羯座", "염소자리", "Capricorn"),
    ("水瓶座", "물병자리", "Aquarius"),
    ("双鱼座", "물고기자리", "Pisces"),
];

/// Sign starting in each month (index into [`SIGNS`]).
pub const SIGN_STARTING_IN_MONTH: [usize; 12] = [10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Last day of each month still belonging to the previous sign.
pub const SIGN_CUTOFF_DAY: [u32; 12] = [19, 18, 20, 19, 20, 21, 22, 22, 22, 23, 22, 21];

/// The five elements classes.
pub const FIVE_ELEMENTS: [(&str, &str, &str); 5] = [
    ("水二局", "수2국", "Water 2"),
    ("木三局", "목3국", "Wood 3"),
    ("金四局", "금4국", "Metal 4"),
    ("土五局", "토5국", "Earth 5"),
    ("火六局", "화6국", "Fire 6"),
];

/// The fourteen major stars.
pub const MAJOR_STARS: [(&str, &str, &str); 14] = [
    ("紫微", "자미", "Zi Wei"),
    ("天机", "천기", "Tian Ji"),
    ("太阳", "태양", "Tai Yang"),
    ("武曲", "무곡", "Wu Qu"),
    ("天同", "천동", "Tian Tong"),
    ("廉贞", "염정", "Lian Zhen"),
    ("天府", "천부", "Tian Fu"),
    ("太阴", "태음", "Tai Yin"),
    ("贪狼", "탐랑", "Tan Lang"),
    ("巨门", "거문", "Ju Men"),
    ("天相", "천상", "Tian Xiang"),
    ("天梁", "천량", "Tian Liang"),
    ("七杀", "칠살", "Qi Sha"),
    ("破军", "파군", "Po Jun"),
];

/// The eight minor stars carried by the reference engine.
pub const MINOR_STARS: [(&str, &str, &str); 8] = [
    ("左辅", "좌보", "Zuo Fu"),
    ("右弼", "우필", "You Bi"),
    ("文昌", "문창", "Wen Chang"),
    ("文曲", "문곡", "Wen Qu"),
    ("天魁", "천괴", "Tian Kui"),
    ("天钺", "천월", "Tian Yue"),
    ("禄存", "녹존", "Lu Cun"),
    ("天马", "천마", "Tian Ma"),
];

/// Miscellaneous (adjective) stars; these carry no brightness.
pub const ADJECTIVE_STARS: [(&str, &str, &str); 4] = [
    ("红鸾", "홍란", "Hong Luan"),
    ("天喜", "천희", "Tian Xi"),
    ("孤辰", "고진", "Gu Chen"),
    ("寡宿", "과숙", "Gua Su"),
];

/// The seven brightness levels, brightest first.
pub const BRIGHTNESS: [(&str, &str, &str); 7] = [
    ("庙", "묘", "Miao"),
    ("旺", "왕", "Wang"),
    ("得", "득", "De"),
    ("利", "리", "Li"),
    ("平", "평", "Ping"),
    ("不", "불", "Bu"),
    ("陷", "함", "Xian"),
];

/// Twelve-stage life cycle (changsheng12).
pub const CHANGSHENG12: [&str; 12] = [
    "长生", "沐浴", "冠带", "临官", "帝旺", "衰", "病", "死", "墓", "绝", "胎", "养",
];

/// Twelve-scholar cycle (boshi12).
pub const BOSHI12: [&str; 12] = [
    "博士", "力士", "青龙", "小耗", "将军", "奏书", "飞廉", "喜神", "病符", "大耗", "伏兵",
    "官府",
];
