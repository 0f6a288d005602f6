//! Per-category lookup rules
//!
//! Hand-maintained domain knowledge: category keywords, manual unit
//! synonyms, natural default pairs and degree-scale phrasing. Everything is
//! static data keyed by `CategoryId`, so adding a category never touches the
//! parser itself.

use super::catalog::CategoryId;

/// Degree-style temperature scale, e.g. `°C` / "celsius" / "c"
pub struct DegreeScale {
    pub symbol: &'static str,
    pub word: &'static str,
    pub letter: &'static str,
}

pub struct CategoryRules {
    /// Words that name the category on their own ("time", "weight")
    pub keywords: &'static [&'static str],
    /// Extra aliases per unit symbol, on top of the generated ones
    pub synonyms: &'static [(&'static str, &'static [&'static str])],
    /// Natural conversion target for a unit queried on its own
    pub default_pairs: &'static [(&'static str, &'static str)],
    pub degree_scales: &'static [DegreeScale],
}

impl CategoryRules {
    pub fn synonyms_for(&self, symbol: &str) -> &'static [&'static str] {
        self.synonyms
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, list)| *list)
            .unwrap_or(&[])
    }

    pub fn default_target(&self, symbol: &str) -> Option<&'static str> {
        self.default_pairs
            .iter()
            .find(|(from, _)| *from == symbol)
            .map(|(_, to)| *to)
    }
}

pub fn rules_for(id: CategoryId) -> &'static CategoryRules {
    match id {
        CategoryId::Length => &LENGTH,
        CategoryId::Mass => &MASS,
        CategoryId::Volume => &VOLUME,
        CategoryId::Area => &AREA,
        CategoryId::Temperature => &TEMPERATURE,
        CategoryId::Time => &TIME,
        CategoryId::Speed => &SPEED,
        CategoryId::Pressure => &PRESSURE,
        CategoryId::Energy => &ENERGY,
        CategoryId::Power => &POWER,
        CategoryId::Data => &DATA,
        CategoryId::Angle => &ANGLE,
        CategoryId::Frequency => &FREQUENCY,
        CategoryId::FuelEconomy => &FUEL_ECONOMY,
    }
}

static LENGTH: CategoryRules = CategoryRules {
    keywords: &["length", "distance", "height", "width"],
    synonyms: &[
        ("m", &["meter", "meters", "metre", "metres"]),
        ("km", &["kilometer", "kilometers", "kilometre", "kilometres", "kms"]),
        ("cm", &["centimeter", "centimeters", "centimetre", "centimetres", "cms"]),
        ("mm", &["millimeter", "millimeters", "millimetre", "millimetres"]),
        ("µm", &["micrometer", "micrometers", "micrometre", "micrometres", "micron", "microns"]),
        ("nm", &["nanometer", "nanometers", "nanometre", "nanometres"]),
        ("mi", &["mile", "miles"]),
        ("yd", &["yard", "yards", "yds"]),
        ("ft", &["foot", "feet", "ft.", "'"]),
        ("in", &["inch", "inches", "in.", "\""]),
        ("nmi", &["nautical mile", "nautical miles"]),
    ],
    default_pairs: &[
        ("m", "ft"),
        ("km", "mi"),
        ("cm", "in"),
        ("mm", "in"),
        ("µm", "mm"),
        ("nm", "µm"),
        ("mi", "km"),
        ("yd", "m"),
        ("ft", "m"),
        ("in", "cm"),
        ("nmi", "km"),
    ],
    degree_scales: &[],
};

static MASS: CategoryRules = CategoryRules {
    keywords: &["mass", "weight"],
    synonyms: &[
        ("kg", &["kilogram", "kilograms", "kilo", "kilos", "kgs", "kilogramme", "kilogrammes"]),
        ("g", &["gram", "grams", "gramme", "grammes"]),
        ("mg", &["milligram", "milligrams"]),
        ("µg", &["microgram", "micrograms", "mcg"]),
        ("t", &["tonne", "tonnes", "metric ton", "metric tons"]),
        ("lb", &["pound", "pounds", "lbs"]),
        ("oz", &["ounce", "ounces"]),
        ("st", &["stone", "stones"]),
        ("ton", &["tons", "short ton", "short tons", "us ton"]),
    ],
    default_pairs: &[
        ("kg", "lb"),
        ("g", "oz"),
        ("mg", "g"),
        ("µg", "mg"),
        ("t", "ton"),
        ("lb", "kg"),
        ("oz", "g"),
        ("st", "kg"),
        ("ton", "t"),
    ],
    degree_scales: &[],
};

static VOLUME: CategoryRules = CategoryRules {
    keywords: &["volume", "capacity", "liquid"],
    synonyms: &[
        ("L", &["liter", "liters", "litre", "litres"]),
        ("mL", &["milliliter", "milliliters", "millilitre", "millilitres"]),
        ("m³", &["cubic meter", "cubic meters", "cubic metre", "cubic metres"]),
        ("cm³", &["cubic centimeter", "cubic centimeters", "cc", "ccs"]),
        ("in³", &["cubic inch", "cubic inches", "cu in"]),
        ("ft³", &["cubic foot", "cubic feet", "cu ft"]),
        ("gal", &["gallon", "gallons", "us gallon", "us gallons"]),
        ("imp gal", &["imperial gallon", "imperial gallons", "uk gallon", "uk gallons"]),
        ("qt", &["quart", "quarts"]),
        ("pt", &["pint", "pints"]),
        ("cup", &["cups"]),
        ("fl oz", &["floz", "fluid ounce", "fluid ounces"]),
        ("tbsp", &["tablespoon", "tablespoons", "tbs"]),
        ("tsp", &["teaspoon", "teaspoons"]),
    ],
    default_pairs: &[
        ("L", "gal"),
        ("mL", "fl oz"),
        ("m³", "L"),
        ("cm³", "mL"),
        ("in³", "mL"),
        ("ft³", "L"),
        ("gal", "L"),
        ("imp gal", "L"),
        ("qt", "L"),
        ("pt", "mL"),
        ("cup", "mL"),
        ("fl oz", "mL"),
        ("tbsp", "mL"),
        ("tsp", "mL"),
    ],
    degree_scales: &[],
};

static AREA: CategoryRules = CategoryRules {
    keywords: &["area", "surface"],
    synonyms: &[
        ("m²", &["square meter", "square meters", "square metre", "square metres", "sq m", "sqm"]),
        ("km²", &["square kilometer", "square kilometers", "square kilometre", "sq km"]),
        ("cm²", &["square centimeter", "square centimeters", "sq cm"]),
        ("mm²", &["square millimeter", "square millimeters", "sq mm"]),
        ("ha", &["hectare", "hectares"]),
        ("ac", &["acre", "acres"]),
        ("mi²", &["square mile", "square miles", "sq mi"]),
        ("yd²", &["square yard", "square yards", "sq yd"]),
        ("ft²", &["square foot", "square feet", "sq ft", "sqft"]),
        ("in²", &["square inch", "square inches", "sq in"]),
    ],
    default_pairs: &[
        ("m²", "ft²"),
        ("km²", "mi²"),
        ("cm²", "in²"),
        ("mm²", "cm²"),
        ("ha", "ac"),
        ("ac", "ha"),
        ("mi²", "km²"),
        ("yd²", "m²"),
        ("ft²", "m²"),
        ("in²", "cm²"),
    ],
    degree_scales: &[],
};

static TEMPERATURE: CategoryRules = CategoryRules {
    keywords: &["temperature", "temp"],
    synonyms: &[
        ("°C", &["celsius", "centigrade", "c", "degc", "℃"]),
        ("°F", &["fahrenheit", "f", "degf", "℉"]),
        ("K", &["kelvin", "kelvins"]),
        ("°R", &["rankine", "r", "degr"]),
    ],
    default_pairs: &[("°C", "°F"), ("°F", "°C"), ("K", "°C"), ("°R", "°F")],
    degree_scales: &[
        DegreeScale { symbol: "°C", word: "celsius", letter: "c" },
        DegreeScale { symbol: "°C", word: "centigrade", letter: "c" },
        DegreeScale { symbol: "°F", word: "fahrenheit", letter: "f" },
        DegreeScale { symbol: "K", word: "kelvin", letter: "k" },
        DegreeScale { symbol: "°R", word: "rankine", letter: "r" },
    ],
};

static TIME: CategoryRules = CategoryRules {
    keywords: &["time", "duration"],
    synonyms: &[
        ("s", &["second", "seconds", "sec", "secs"]),
        ("ms", &["millisecond", "milliseconds", "msec"]),
        ("µs", &["microsecond", "microseconds", "us", "usec"]),
        ("ns", &["nanosecond", "nanoseconds"]),
        ("min", &["minute", "minutes", "mins"]),
        ("h", &["hour", "hours", "hr", "hrs"]),
        ("d", &["day", "days"]),
        ("wk", &["week", "weeks", "wks"]),
        ("mo", &["month", "months"]),
        ("yr", &["year", "years", "yrs"]),
    ],
    default_pairs: &[
        ("s", "ms"),
        ("ms", "s"),
        ("µs", "ms"),
        ("ns", "µs"),
        ("min", "s"),
        ("h", "min"),
        ("d", "h"),
        ("wk", "d"),
        ("mo", "d"),
        ("yr", "d"),
    ],
    degree_scales: &[],
};

static SPEED: CategoryRules = CategoryRules {
    keywords: &["speed", "velocity"],
    synonyms: &[
        ("m/s", &["meters per second", "metres per second", "mps"]),
        ("km/h", &["kilometers per hour", "kilometres per hour", "kph", "kmh", "kmph"]),
        ("mph", &["miles per hour", "mi/h"]),
        ("kn", &["knot", "knots", "kt", "kts"]),
        ("ft/s", &["feet per second", "fps"]),
    ],
    default_pairs: &[
        ("m/s", "km/h"),
        ("km/h", "mph"),
        ("mph", "km/h"),
        ("kn", "km/h"),
        ("ft/s", "m/s"),
    ],
    degree_scales: &[],
};

static PRESSURE: CategoryRules = CategoryRules {
    keywords: &["pressure"],
    synonyms: &[
        ("Pa", &["pascal", "pascals"]),
        ("kPa", &["kilopascal", "kilopascals"]),
        ("MPa", &["megapascal", "megapascals"]),
        ("bar", &["bars"]),
        ("mbar", &["millibar", "millibars", "hpa", "hectopascal", "hectopascals"]),
        ("atm", &["atmosphere", "atmospheres"]),
        ("psi", &["pounds per square inch", "lbf/in²"]),
        ("mmHg", &["millimeters of mercury", "millimetres of mercury", "mm hg"]),
        ("inHg", &["inches of mercury", "in hg"]),
        ("Torr", &[]),
    ],
    default_pairs: &[
        ("Pa", "kPa"),
        ("kPa", "atm"),
        ("MPa", "bar"),
        ("bar", "psi"),
        ("mbar", "atm"),
        ("atm", "Pa"),
        ("psi", "bar"),
        ("mmHg", "kPa"),
        ("inHg", "mbar"),
        ("Torr", "mmHg"),
    ],
    degree_scales: &[],
};

static ENERGY: CategoryRules = CategoryRules {
    keywords: &["energy"],
    synonyms: &[
        ("J", &["joule", "joules"]),
        ("kJ", &["kilojoule", "kilojoules"]),
        ("cal", &["calorie", "calories"]),
        ("kcal", &["kilocalorie", "kilocalories", "food calorie", "food calories"]),
        ("Wh", &["watt hour", "watt hours", "watt-hours"]),
        ("kWh", &["kilowatt hour", "kilowatt hours", "kilowatt-hours"]),
        ("eV", &["electronvolts", "electron volt", "electron volts"]),
        ("BTU", &["btus", "british thermal units"]),
    ],
    default_pairs: &[
        ("J", "cal"),
        ("kJ", "kcal"),
        ("cal", "J"),
        ("kcal", "kJ"),
        ("Wh", "J"),
        ("kWh", "kJ"),
        ("eV", "J"),
        ("BTU", "kJ"),
    ],
    degree_scales: &[],
};

static POWER: CategoryRules = CategoryRules {
    keywords: &["power", "wattage"],
    synonyms: &[
        ("W", &["watt", "watts"]),
        ("kW", &["kilowatt", "kilowatts"]),
        ("MW", &["megawatt", "megawatts"]),
        ("hp", &["horsepower", "bhp"]),
        ("PS", &["metric horsepower"]),
        ("BTU/h", &["btu per hour", "btuh"]),
    ],
    default_pairs: &[
        ("W", "hp"),
        ("kW", "hp"),
        ("MW", "kW"),
        ("hp", "kW"),
        ("PS", "kW"),
        ("BTU/h", "W"),
    ],
    degree_scales: &[],
};

static DATA: CategoryRules = CategoryRules {
    keywords: &["data", "storage", "digital", "file", "size"],
    synonyms: &[
        ("B", &["byte", "bytes"]),
        ("KB", &["kilobyte", "kilobytes", "kbyte"]),
        ("MB", &["megabyte", "megabytes", "mbyte"]),
        ("GB", &["gigabyte", "gigabytes", "gig", "gigs"]),
        ("TB", &["terabyte", "terabytes"]),
        ("KiB", &["kibibyte", "kibibytes"]),
        ("MiB", &["mebibyte", "mebibytes"]),
        ("GiB", &["gibibyte", "gibibytes"]),
        ("bit", &["bits"]),
        ("Kb", &["kilobit", "kilobits", "kbit"]),
        ("Mb", &["megabit", "megabits", "mbit"]),
        ("Gb", &["gigabit", "gigabits", "gbit"]),
    ],
    default_pairs: &[
        ("B", "bit"),
        ("KB", "KiB"),
        ("MB", "MiB"),
        ("GB", "GiB"),
        ("TB", "GB"),
        ("KiB", "KB"),
        ("MiB", "MB"),
        ("GiB", "GB"),
        ("bit", "B"),
        ("Kb", "KB"),
        ("Mb", "MB"),
        ("Gb", "GB"),
    ],
    degree_scales: &[],
};

static ANGLE: CategoryRules = CategoryRules {
    keywords: &["angle", "rotation"],
    synonyms: &[
        ("rad", &["radian", "radians"]),
        ("°", &["degree", "degrees", "deg", "degs"]),
        ("grad", &["gradian", "gradians", "gon"]),
        ("arcmin", &["arcminute", "arcminutes", "arc minute", "arc minutes"]),
        ("arcsec", &["arcsecond", "arcseconds", "arc second", "arc seconds"]),
        ("mrad", &["milliradian", "milliradians"]),
        ("turn", &["turns", "revolution", "revolutions", "rev"]),
    ],
    default_pairs: &[
        ("rad", "°"),
        ("°", "rad"),
        ("grad", "°"),
        ("arcmin", "°"),
        ("arcsec", "arcmin"),
        ("mrad", "°"),
        ("turn", "°"),
    ],
    degree_scales: &[],
};

static FREQUENCY: CategoryRules = CategoryRules {
    keywords: &["frequency"],
    synonyms: &[
        ("Hz", &["hertz"]),
        ("kHz", &["kilohertz"]),
        ("MHz", &["megahertz"]),
        ("GHz", &["gigahertz"]),
        ("rpm", &["revolutions per minute", "rev/min"]),
    ],
    default_pairs: &[
        ("Hz", "kHz"),
        ("kHz", "Hz"),
        ("MHz", "kHz"),
        ("GHz", "MHz"),
        ("rpm", "Hz"),
    ],
    degree_scales: &[],
};

static FUEL_ECONOMY: CategoryRules = CategoryRules {
    keywords: &["fuel", "economy", "consumption", "mileage", "efficiency"],
    synonyms: &[
        ("km/L", &["kilometers per liter", "kilometres per litre", "kmpl"]),
        ("L/100km", &["liters per 100 km", "litres per 100 km", "l/100 km"]),
        ("mpg", &["miles per gallon", "us mpg", "mpg us"]),
        ("mpg imp", &["imperial mpg", "uk mpg", "mpg uk"]),
    ],
    default_pairs: &[
        ("km/L", "L/100km"),
        ("L/100km", "mpg"),
        ("mpg", "L/100km"),
        ("mpg imp", "L/100km"),
    ],
    degree_scales: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::unit_converter::catalog::UnitCatalog;

    #[test]
    fn test_rules_reference_builtin_units() {
        let catalog = UnitCatalog::builtin();
        for category in catalog.categories() {
            let rules = rules_for(category.id);
            for (symbol, _) in rules.synonyms {
                assert!(category.unit(symbol).is_some(), "synonym for unknown {} in {}", symbol, category.id);
            }
            for (from, to) in rules.default_pairs {
                assert!(category.unit(from).is_some(), "pair from unknown {} in {}", from, category.id);
                assert!(category.unit(to).is_some(), "pair to unknown {} in {}", to, category.id);
                assert_ne!(from, to, "reflexive default pair in {}", category.id);
            }
        }
    }

    #[test]
    fn test_lookup_helpers() {
        let pressure = rules_for(CategoryId::Pressure);
        assert_eq!(pressure.default_target("kPa"), Some("atm"));
        assert_eq!(pressure.default_target("atm"), Some("Pa"));
        assert_eq!(pressure.default_target("nope"), None);
        assert!(rules_for(CategoryId::Mass).synonyms_for("kg").contains(&"kilo"));
        assert!(rules_for(CategoryId::Mass).synonyms_for("zz").is_empty());
    }
}
